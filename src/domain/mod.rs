// src/domain/mod.rs
//
// Domain Root
//
// All other modules import from `crate::domain::*`

pub mod collection;
pub mod movie;

pub use collection::Collection;
pub use movie::Movie;
