use crate::domain::movie::Movie;

/// A named, described, ordered group of movies
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    /// Collection name, used as the lookup key
    pub name: String,

    /// Free-form description
    pub description: String,

    movies: Vec<Movie>,
}

impl Collection {
    /// Create a new, empty Collection
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            movies: Vec::new(),
        }
    }

    /// Append a movie at the end of the collection, returning its position
    pub fn add(&mut self, movie: Movie) -> usize {
        self.movies.push(movie);
        self.movies.len() - 1
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// First movie whose title matches exactly (case-sensitive)
    pub fn find_movie(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.title() == title)
    }

    /// Reorder movies by descending rating.
    ///
    /// `sort_by` is stable, so movies with equal ratings keep their
    /// relative order.
    pub fn sort_by_rating(&mut self) {
        self.movies.sort_by(|a, b| b.rating().total_cmp(&a.rating()));
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
