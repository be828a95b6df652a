// src/application/state.rs

use std::path::PathBuf;

use crate::services::CollectionService;

/// Everything the shell needs for one session.
/// Created in main.rs and owned by the shell until the session ends.
pub struct AppState {
    pub collection_service: CollectionService,

    /// File used by the save and load actions
    pub data_file: PathBuf,

    /// Cleared by the exit action
    pub running: bool,
}

impl AppState {
    pub fn new(collection_service: CollectionService, data_file: impl Into<PathBuf>) -> Self {
        Self {
            collection_service,
            data_file: data_file.into(),
            running: true,
        }
    }
}
