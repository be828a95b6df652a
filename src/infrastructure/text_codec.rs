// src/infrastructure/text_codec.rs
//
// Line-oriented text format for collections
//
// FORMAT (one collection):
//
//   Collection: <name>
//   Description: <description>
//   -----------------------------
//   Movie:
//     Title: <title>
//     Director: <director>
//     Genre: <genre>
//     Duration: <minutes>
//     IMDB Rating: <rating, one decimal>
//   <blank>
//
// Collections are concatenated without a delimiter. The reader
// resegments the stream on the `Collection:` and `Movie:` prefixes.
//
// READ RULES:
// - Best effort, never fails on content, only on I/O
// - Malformed numbers become zero
// - Text fields are truncated to fixed lengths
// - EOF is detected by attempting a read; partial blocks keep what was read

use std::io::{self, BufRead, Write};

use log::debug;

use crate::domain::{Collection, Movie};

/// Maximum characters kept for name, title, director and genre
pub const MAX_FIELD_CHARS: usize = 99;

/// Maximum characters kept for a description
pub const MAX_DESCRIPTION_CHARS: usize = 199;

const COLLECTION_LABEL: &str = "Collection:";
const DESCRIPTION_LABEL: &str = "Description:";
const MOVIE_MARKER: &str = "Movie:";
const SEPARATOR: &str = "-----------------------------";

/// Labels of the five lines following a `Movie:` marker, in file order
const MOVIE_FIELDS: [&str; 5] = ["Title:", "Director:", "Genre:", "Duration:", "IMDB Rating:"];

// ============================================================================
// WRITING
// ============================================================================

pub fn write_movie<W: Write>(sink: &mut W, movie: &Movie) -> io::Result<()> {
    writeln!(sink, "{}", MOVIE_MARKER)?;
    writeln!(sink, "  Title: {}", movie.title())?;
    writeln!(sink, "  Director: {}", movie.director())?;
    writeln!(sink, "  Genre: {}", movie.genre())?;
    writeln!(sink, "  Duration: {}", movie.duration())?;
    writeln!(sink, "  IMDB Rating: {:.1}", movie.rating())?;
    writeln!(sink)
}

pub fn write_collection<W: Write>(sink: &mut W, collection: &Collection) -> io::Result<()> {
    writeln!(sink, "{} {}", COLLECTION_LABEL, collection.name)?;
    writeln!(sink, "{} {}", DESCRIPTION_LABEL, collection.description)?;
    writeln!(sink, "{}", SEPARATOR)?;

    for movie in collection.movies() {
        write_movie(sink, movie)?;
    }
    Ok(())
}

pub fn write_collections<W: Write>(sink: &mut W, collections: &[Collection]) -> io::Result<()> {
    for collection in collections {
        write_collection(sink, collection)?;
    }
    Ok(())
}

// ============================================================================
// READING
// ============================================================================

/// Parse every collection in `source`.
///
/// Only I/O errors are reported. Content that does not match the format
/// is accepted with default values.
pub fn read_collections<R: BufRead>(source: R) -> io::Result<Vec<Collection>> {
    let mut reader = LineReader::new(source);
    let mut collections = Vec::new();

    while let Some(line) = reader.next_non_blank()? {
        if is_movie_marker(&line) {
            if let Some(movie) = read_movie(&mut reader)? {
                debug!("dropping movie '{}' found outside of any collection", movie.title());
            }
            continue;
        }
        collections.push(read_collection(&mut reader, &line)?);
    }

    Ok(collections)
}

fn read_collection<R: BufRead>(reader: &mut LineReader<R>, header: &str) -> io::Result<Collection> {
    let name = truncate(label_value(header, COLLECTION_LABEL), MAX_FIELD_CHARS);

    let description = match reader.next_line()? {
        Some(line) => truncate(label_value(&line, DESCRIPTION_LABEL), MAX_DESCRIPTION_CHARS),
        None => return Ok(Collection::new(name, String::new())),
    };
    let mut collection = Collection::new(name, description);

    match reader.next_line()? {
        Some(line) if is_separator(&line) => {}
        Some(line) => reader.push_back(line),
        None => return Ok(collection),
    }

    while let Some(line) = reader.next_non_blank()? {
        if !is_movie_marker(&line) {
            reader.push_back(line);
            break;
        }
        if let Some(movie) = read_movie(reader)? {
            collection.add(movie);
        }
    }

    Ok(collection)
}

/// Read the five fixed-position lines after a `Movie:` marker.
///
/// Returns `None` when the stream ends before the first field line.
fn read_movie<R: BufRead>(reader: &mut LineReader<R>) -> io::Result<Option<Movie>> {
    let mut values = Vec::with_capacity(MOVIE_FIELDS.len());
    for label in MOVIE_FIELDS {
        match reader.next_line()? {
            Some(line) => values.push(label_value(&line, label).to_string()),
            None => break,
        }
    }

    if values.is_empty() {
        return Ok(None);
    }

    let mut values = values.into_iter();
    let title = truncate(&values.next().unwrap_or_default(), MAX_FIELD_CHARS);
    let director = truncate(&values.next().unwrap_or_default(), MAX_FIELD_CHARS);
    let genre = truncate(&values.next().unwrap_or_default(), MAX_FIELD_CHARS);
    let duration = parse_duration(&values.next().unwrap_or_default());
    let rating = parse_rating(&values.next().unwrap_or_default());

    Ok(Some(Movie::new(title, director, genre, duration, rating)))
}

fn parse_duration(value: &str) -> i32 {
    value.trim().parse().unwrap_or_else(|_| {
        debug!("unparseable duration '{}', using 0", value);
        0
    })
}

fn parse_rating(value: &str) -> f32 {
    value.trim().parse().unwrap_or_else(|_| {
        debug!("unparseable rating '{}', using 0.0", value);
        0.0
    })
}

/// Text after `label` (and one following space), or the raw line when the
/// label is absent
fn label_value<'a>(line: &'a str, label: &str) -> &'a str {
    match line.trim_start().strip_prefix(label) {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

fn is_movie_marker(line: &str) -> bool {
    line.trim() == MOVIE_MARKER
}

fn is_separator(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c == '-')
}

/// Line source with one line of look-ahead.
/// Bytes that are not UTF-8 are replaced, never rejected.
struct LineReader<R> {
    source: R,
    pending: Option<String>,
}

impl<R: BufRead> LineReader<R> {
    fn new(source: R) -> Self {
        Self {
            source,
            pending: None,
        }
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }

        let mut buf = Vec::new();
        if self.source.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn next_non_blank(&mut self) -> io::Result<Option<String>> {
        while let Some(line) = self.next_line()? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    fn push_back(&mut self, line: String) {
        self.pending = Some(line);
    }
}
