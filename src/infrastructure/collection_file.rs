// src/infrastructure/collection_file.rs
//
// Persisted collections file
//
// - One open per save or load, closed when the call returns
// - Save truncates; no partial-write protection
// - Load only opens; parsing is left to the caller

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::Collection;
use crate::infrastructure::text_codec;

/// Default file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "movie_collections.txt";

#[derive(Debug, Clone)]
pub struct CollectionFile {
    path: PathBuf,
}

impl CollectionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the file with every collection, in order
    pub fn save(&self, collections: &[Collection]) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        text_codec::write_collections(&mut writer, collections)?;
        writer.flush()
    }

    /// Open the file for reading
    pub fn open(&self) -> io::Result<BufReader<File>> {
        Ok(BufReader::new(File::open(&self.path)?))
    }
}

impl Default for CollectionFile {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}
