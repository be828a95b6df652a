// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - The boundary between the console and the services
// - Prompts, parses and renders; never contains business logic
// - Owns the session state for the whole run

pub mod error_handling;
pub mod menu;
pub mod render;
pub mod shell;
pub mod state;

#[cfg(test)]
mod shell_tests;

pub use error_handling::ErrorType;
pub use menu::MenuChoice;
pub use shell::Shell;
pub use state::AppState;
