// src/services/collection_service.rs
//
// Collection Service - Orchestration Layer
//
// - Owns the repository for the lifetime of the process
// - Lookups by collection name and by movie title take the first match
// - Returns data; rendering belongs to the application layer
// - Load is all-or-nothing: the file is parsed before anything is appended

use std::io::BufRead;
use std::path::Path;

use log::{debug, info, warn};

use crate::domain::{Collection, Movie};
use crate::error::{AppError, AppResult};
use crate::infrastructure::{text_codec, CollectionFile};
use crate::repositories::CollectionRepository;

#[derive(Debug, Clone)]
pub struct CreateCollectionRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct AddMovieRequest {
    pub collection_name: String,
    pub title: String,
    pub director: String,
    pub genre: String,
    pub duration: i32,
    pub rating: f32,
}

pub struct CollectionService {
    collection_repo: Box<dyn CollectionRepository>,
}

impl CollectionService {
    pub fn new(collection_repo: Box<dyn CollectionRepository>) -> Self {
        Self { collection_repo }
    }

    /// Collection names in creation/load order
    pub fn list_collection_names(&self) -> Vec<&str> {
        self.collection_repo
            .list_all()
            .iter()
            .map(|c| c.name.as_str())
            .collect()
    }

    pub fn create_collection(&mut self, request: CreateCollectionRequest) {
        debug!("creating collection '{}'", request.name);
        self.collection_repo
            .insert(Collection::new(request.name, request.description));
    }

    pub fn find_collection(&self, name: &str) -> AppResult<&Collection> {
        self.collection_repo
            .find_by_name(name)
            .ok_or_else(|| AppError::CollectionNotFound(name.to_string()))
    }

    pub fn add_movie(&mut self, request: AddMovieRequest) -> AppResult<&Movie> {
        let collection = self
            .collection_repo
            .find_by_name_mut(&request.collection_name)
            .ok_or_else(|| AppError::CollectionNotFound(request.collection_name.clone()))?;

        let movie = Movie::new(
            request.title,
            request.director,
            request.genre,
            request.duration,
            request.rating,
        );
        debug!("adding '{}' to collection '{}'", movie.title(), collection.name);
        let position = collection.add(movie);
        Ok(&collection.movies()[position])
    }

    pub fn list_media(&self, collection_name: &str) -> AppResult<&Collection> {
        self.find_collection(collection_name)
    }

    /// Stable sort by descending rating; returns the sorted collection
    pub fn sort_movies(&mut self, collection_name: &str) -> AppResult<&Collection> {
        let collection = self
            .collection_repo
            .find_by_name_mut(collection_name)
            .ok_or_else(|| AppError::CollectionNotFound(collection_name.to_string()))?;

        collection.sort_by_rating();
        Ok(collection)
    }

    pub fn play_movie(&self, collection_name: &str, title: &str) -> AppResult<&Movie> {
        let collection = self.find_collection(collection_name)?;
        collection
            .find_movie(title)
            .ok_or_else(|| AppError::MovieNotFound {
                collection: collection_name.to_string(),
                title: title.to_string(),
            })
    }

    /// Remove the first collection with this name, dropping its movies
    pub fn delete_collection(&mut self, name: &str) -> AppResult<Collection> {
        self.collection_repo
            .remove_by_name(name)
            .ok_or_else(|| AppError::CollectionNotFound(name.to_string()))
    }

    /// Write every collection to `path`; returns how many were written
    pub fn save_all(&self, path: &Path) -> AppResult<usize> {
        let collections = self.collection_repo.list_all();
        CollectionFile::new(path).save(collections).map_err(|e| {
            warn!("saving collections to {} failed: {}", path.display(), e);
            AppError::Save(e)
        })?;

        info!("saved {} collection(s) to {}", collections.len(), path.display());
        Ok(collections.len())
    }

    /// Append every collection stored at `path`; returns how many were loaded
    pub fn load_all(&mut self, path: &Path) -> AppResult<usize> {
        let reader = CollectionFile::new(path).open().map_err(|e| {
            warn!("opening {} failed: {}", path.display(), e);
            AppError::Load(e)
        })?;

        let count = self.load_from(reader)?;
        info!("loaded {} collection(s) from {}", count, path.display());
        Ok(count)
    }

    /// Parse every collection in `source`, then append them all.
    ///
    /// A read error part-way through appends nothing.
    pub fn load_from<R: BufRead>(&mut self, source: R) -> AppResult<usize> {
        let loaded = text_codec::read_collections(source).map_err(|e| {
            warn!("reading collections failed: {}", e);
            AppError::Load(e)
        })?;

        let count = loaded.len();
        for collection in loaded {
            self.collection_repo.insert(collection);
        }
        Ok(count)
    }
}
