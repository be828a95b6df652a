// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod collection_service;

pub use collection_service::{AddMovieRequest, CollectionService, CreateCollectionRequest};
