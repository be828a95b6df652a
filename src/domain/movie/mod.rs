//! Movie Invariants:
//!
//! 1. A movie never changes after construction
//! 2. Duration and rating have no enforced range
//! 3. Titles are not unique; lookups act on the first match

pub mod entity;

pub use entity::Movie;
