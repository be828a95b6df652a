// src/application/render.rs
//
// Console rendering for movies and collections

use std::io::{self, Write};

use crate::domain::{Collection, Movie};

const RULE: &str = "=========================================";
const THIN_RULE: &str = "-----------------------------------------";

/// Header used above a movie's details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// "Now Playing" header, shown when a movie is added or played
    NowPlaying,
    /// Plain "Movie" header, shown when a collection is listed
    Listing,
}

pub fn render_movie<W: Write>(out: &mut W, movie: &Movie, framing: Framing) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    match framing {
        Framing::NowPlaying => writeln!(out, "🎬 Now Playing: {}", movie.title())?,
        Framing::Listing => writeln!(out, "Movie: {}", movie.title())?,
    }
    writeln!(out, "{}", THIN_RULE)?;
    writeln!(out, "Director   : {}", movie.director())?;
    writeln!(out, "Genre      : {}", movie.genre())?;
    writeln!(out, "Duration   : {} minutes", movie.duration())?;
    writeln!(out, "IMDB Rating: {}", movie.rating())?;
    writeln!(out, "{}", RULE)
}

/// Every movie of the collection, or the empty-collection notice
pub fn render_collection<W: Write>(out: &mut W, collection: &Collection) -> io::Result<()> {
    if collection.is_empty() {
        return writeln!(out, "No media in this collection.");
    }

    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Movies in the collection: {}", collection.name)?;
    writeln!(out, "{}", THIN_RULE)?;
    for movie in collection.movies() {
        render_movie(out, movie, Framing::Listing)?;
    }
    writeln!(out, "{}", RULE)
}

pub fn render_collection_names<W: Write>(out: &mut W, names: &[&str]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Available Movie Collections:")?;
    for name in names {
        writeln!(out, "- {}", name)?;
    }
    Ok(())
}
