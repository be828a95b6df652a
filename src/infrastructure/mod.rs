// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Contains implementation details that support the domain
// but are not part of the domain itself.
//
// RULES:
// - Infrastructure serves the domain
// - Infrastructure never dictates domain behavior
// - Infrastructure never writes to the console

pub mod collection_file;
pub mod text_codec;

pub use collection_file::{CollectionFile, DEFAULT_DATA_FILE};
