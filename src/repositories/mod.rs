// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories are DUMB containers
// - NO business logic
// - NO console output
// - NO file access

pub mod collection_repository;

pub use collection_repository::{CollectionRepository, InMemoryCollectionRepository};
