// src/main.rs

use std::io;

use anyhow::Context;
use log::info;

use moviehub::application::{AppState, Shell};
use moviehub::config::Config;
use moviehub::repositories::InMemoryCollectionRepository;
use moviehub::services::CollectionService;

fn main() -> anyhow::Result<()> {
    // 1. CONFIGURATION
    let config = Config::from_env();

    // 2. LOGGING (stderr, so the console session stays readable)
    let env_filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => match config.log_level.parse::<tracing_subscriber::EnvFilter>() {
            Ok(f) => f,
            Err(e) => {
                eprintln!(
                    "WARN: MOVIEHUB_LOG='{}' is not a valid log filter ({}); falling back to 'warn'",
                    config.log_level, e
                );
                tracing_subscriber::EnvFilter::new("warn")
            }
        },
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    info!(
        "moviehub {} starting, data file {}",
        env!("CARGO_PKG_VERSION"),
        config.data_file.display()
    );

    // 3. REPOSITORY + SERVICE
    let collection_repo = Box::new(InMemoryCollectionRepository::new());
    let collection_service = CollectionService::new(collection_repo);

    // 4. SESSION STATE
    let state = AppState::new(collection_service, config.data_file);

    // 5. SHELL
    let stdin = io::stdin();
    let mut shell = Shell::new(state, stdin.lock(), io::stdout().lock());
    shell.run().context("console session failed")?;

    Ok(())
}
