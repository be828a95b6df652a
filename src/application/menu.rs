// src/application/menu.rs

use std::io::{self, Write};

/// One entry of the numbered main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewCollections,
    CreateCollection,
    AddMovie,
    ListMedia,
    SortMovies,
    Save,
    Load,
    PlayMovie,
    Exit,
}

impl MenuChoice {
    pub fn from_number(number: u32) -> Option<Self> {
        let choice = match number {
            1 => Self::ViewCollections,
            2 => Self::CreateCollection,
            3 => Self::AddMovie,
            4 => Self::ListMedia,
            5 => Self::SortMovies,
            6 => Self::Save,
            7 => Self::Load,
            8 => Self::PlayMovie,
            9 => Self::Exit,
            _ => return None,
        };
        Some(choice)
    }

    /// Parse a line typed at the menu prompt.
    /// Anything that is not a number from 1 to 9 is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse().ok().and_then(Self::from_number)
    }
}

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Movie Collection Manager ===")?;
    writeln!(out, "1. View All Movie Collections")?;
    writeln!(out, "2. Create Movie Collection")?;
    writeln!(out, "3. Add Movie to Collection")?;
    writeln!(out, "4. List Media in Collection")?;
    writeln!(out, "5. Sort Movies by IMDB Rating")?;
    writeln!(out, "6. Save Collections to File")?;
    writeln!(out, "7. Load Collections from File")?;
    writeln!(out, "8. Play Movie")?;
    writeln!(out, "9. Exit")
}
