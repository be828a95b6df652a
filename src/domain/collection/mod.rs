//! Critical Collection Invariants:
//!
//! 1. A collection exclusively owns its movies
//! 2. Movies keep insertion order until explicitly sorted
//! 3. Sorting by rating is stable
//! 4. Collection names are NOT unique; lookups take the first match

pub mod entity;

pub use entity::Collection;
