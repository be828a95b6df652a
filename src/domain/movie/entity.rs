/// A single movie record owned by exactly one collection
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    title: String,
    director: String,
    genre: String,
    /// Running time in minutes
    duration: i32,
    /// IMDB rating
    rating: f32,
}

impl Movie {
    /// Create a new Movie
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        genre: impl Into<String>,
        duration: i32,
        rating: f32,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            genre: genre.into(),
            duration,
            rating,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
