// src/lib.rs
// MovieHub - Console manager for named movie collections
//
// Architecture:
// - Domain: Movie and Collection values, no I/O
// - Repositories: ordered in-memory store, first-match lookups
// - Infrastructure: text codec and the persisted collections file
// - Services: the operations behind each menu action
// - Application: prompts, rendering and the session loop

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{Collection, Movie};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Repositories, Infrastructure, Services
// ============================================================================

pub use infrastructure::{CollectionFile, DEFAULT_DATA_FILE};
pub use repositories::{CollectionRepository, InMemoryCollectionRepository};
pub use services::{AddMovieRequest, CollectionService, CreateCollectionRequest};

// ============================================================================
// PUBLIC API - Application
// ============================================================================

pub use application::{AppState, Shell};
pub use config::Config;
