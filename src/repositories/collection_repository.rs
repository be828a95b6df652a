// src/repositories/collection_repository.rs

use crate::domain::collection::Collection;

/// Ordered store of every collection known to the process.
///
/// Names are not unique: lookups scan in insertion order and return the
/// first match.
pub trait CollectionRepository {
    fn insert(&mut self, collection: Collection);
    fn list_all(&self) -> &[Collection];
    fn find_by_name(&self, name: &str) -> Option<&Collection>;
    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Collection>;
    fn remove_by_name(&mut self, name: &str) -> Option<Collection>;
}

#[derive(Debug, Default)]
pub struct InMemoryCollectionRepository {
    collections: Vec<Collection>,
}

impl InMemoryCollectionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.collections.iter().position(|c| c.name == name)
    }
}

impl CollectionRepository for InMemoryCollectionRepository {
    fn insert(&mut self, collection: Collection) {
        self.collections.push(collection);
    }

    fn list_all(&self) -> &[Collection] {
        &self.collections
    }

    fn find_by_name(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Collection> {
        self.collections.iter_mut().find(|c| c.name == name)
    }

    fn remove_by_name(&mut self, name: &str) -> Option<Collection> {
        let index = self.position(name)?;
        Some(self.collections.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut repo = InMemoryCollectionRepository::new();
        repo.insert(Collection::new("Zeta", ""));
        repo.insert(Collection::new("Alpha", ""));

        let names: Vec<&str> = repo.list_all().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let mut repo = InMemoryCollectionRepository::new();
        repo.insert(Collection::new("Classics", "first"));
        repo.insert(Collection::new("Classics", "second"));

        assert_eq!(repo.find_by_name("Classics").unwrap().description, "first");
        repo.find_by_name_mut("Classics").unwrap().description = "changed".to_string();
        assert_eq!(repo.list_all()[0].description, "changed");
        assert_eq!(repo.list_all()[1].description, "second");
    }

    #[test]
    fn test_remove_by_name() {
        let mut repo = InMemoryCollectionRepository::new();
        repo.insert(Collection::new("Classics", "first"));
        repo.insert(Collection::new("Classics", "second"));

        let removed = repo.remove_by_name("Classics").unwrap();
        assert_eq!(removed.description, "first");
        assert_eq!(repo.find_by_name("Classics").unwrap().description, "second");
        assert!(repo.remove_by_name("Missing").is_none());
    }
}
