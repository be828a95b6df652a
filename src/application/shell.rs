// src/application/shell.rs
//
// Interactive Shell
//
// - One blocking read-eval loop over any line source and sink
// - Each action prompts for its fields, calls the service, prints feedback
// - Non-numeric duration or rating re-prompts
// - End of input ends the session like the exit action

use std::io::{BufRead, Write};
use std::str::FromStr;

use log::debug;

use crate::application::error_handling;
use crate::application::menu::{self, MenuChoice};
use crate::application::render::{self, Framing};
use crate::application::state::AppState;
use crate::error::{AppError, AppResult};
use crate::services::{AddMovieRequest, CreateCollectionRequest};

pub struct Shell<R, W> {
    state: AppState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(state: AppState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Consume the shell, returning the state and the output sink
    pub fn into_parts(self) -> (AppState, W) {
        (self.state, self.output)
    }

    /// Run until the exit action or end of input.
    ///
    /// Only console failures are returned; every other error is reported
    /// to the user and the loop continues.
    pub fn run(&mut self) -> AppResult<()> {
        while self.state.running {
            match self.step() {
                Ok(()) => {}
                Err(AppError::InputClosed) => {
                    debug!("console input closed, ending session");
                    self.exit()?;
                }
                Err(e) => return Err(e),
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn step(&mut self) -> AppResult<()> {
        menu::write_menu(&mut self.output)?;
        let line = self.prompt("Enter your choice: ")?;

        match MenuChoice::parse(&line) {
            Some(choice) => {
                debug!("dispatching {:?}", choice);
                let result = self.dispatch(choice);
                match result {
                    Err(e) => error_handling::report(&mut self.output, e),
                    ok => ok,
                }
            }
            None => {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                Ok(())
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> AppResult<()> {
        match choice {
            MenuChoice::ViewCollections => self.view_collections(),
            MenuChoice::CreateCollection => self.create_collection(),
            MenuChoice::AddMovie => self.add_movie(),
            MenuChoice::ListMedia => self.list_media(),
            MenuChoice::SortMovies => self.sort_movies(),
            MenuChoice::Save => self.save(),
            MenuChoice::Load => self.load(),
            MenuChoice::PlayMovie => self.play_movie(),
            MenuChoice::Exit => self.exit(),
        }
    }

    // ========================================================================
    // ACTIONS
    // ========================================================================

    fn view_collections(&mut self) -> AppResult<()> {
        let names = self.state.collection_service.list_collection_names();
        render::render_collection_names(&mut self.output, &names)?;
        Ok(())
    }

    fn create_collection(&mut self) -> AppResult<()> {
        let name = self.prompt("Enter collection name: ")?;
        let description = self.prompt("Enter description: ")?;

        self.state
            .collection_service
            .create_collection(CreateCollectionRequest { name, description });
        writeln!(self.output, "Movie Collection created!")?;
        Ok(())
    }

    fn add_movie(&mut self) -> AppResult<()> {
        let collection_name = self.prompt("Enter collection name: ")?;
        // Check before asking for the movie's fields
        self.state.collection_service.find_collection(&collection_name)?;

        let title = self.prompt("Enter movie title: ")?;
        let director = self.prompt("Enter movie director: ")?;
        let genre = self.prompt("Enter movie genre: ")?;
        let duration = self.prompt_number::<i32>("Enter movie duration: ")?;
        let rating = self.prompt_rating("Enter movie IMDB rating: ")?;

        let movie = self.state.collection_service.add_movie(AddMovieRequest {
            collection_name,
            title,
            director,
            genre,
            duration,
            rating,
        })?;
        render::render_movie(&mut self.output, movie, Framing::NowPlaying)?;
        Ok(())
    }

    fn list_media(&mut self) -> AppResult<()> {
        let name = self.prompt("Enter collection name to list media: ")?;
        let collection = self.state.collection_service.list_media(&name)?;
        render::render_collection(&mut self.output, collection)?;
        Ok(())
    }

    fn sort_movies(&mut self) -> AppResult<()> {
        let name = self.prompt("Enter collection name to sort movies by IMDB rating: ")?;
        let collection = self.state.collection_service.sort_movies(&name)?;
        writeln!(self.output, "Movies in the collection sorted by IMDB rating.")?;
        render::render_collection(&mut self.output, collection)?;
        Ok(())
    }

    fn save(&mut self) -> AppResult<()> {
        self.state
            .collection_service
            .save_all(&self.state.data_file)?;
        writeln!(self.output, "Movie Collections saved to file.")?;
        Ok(())
    }

    fn load(&mut self) -> AppResult<()> {
        self.state
            .collection_service
            .load_all(&self.state.data_file)?;
        writeln!(self.output, "Movie Collections loaded from file.")?;
        Ok(())
    }

    fn play_movie(&mut self) -> AppResult<()> {
        let collection_name = self.prompt("Enter collection name to play a movie: ")?;
        self.state.collection_service.find_collection(&collection_name)?;

        let title = self.prompt("Enter movie title to play: ")?;
        let movie = self
            .state
            .collection_service
            .play_movie(&collection_name, &title)?;
        render::render_movie(&mut self.output, movie, Framing::NowPlaying)?;
        Ok(())
    }

    fn exit(&mut self) -> AppResult<()> {
        writeln!(self.output, "Exiting...")?;
        self.state.running = false;
        Ok(())
    }

    // ========================================================================
    // INPUT
    // ========================================================================

    /// Print `text` and read one line without its line terminator
    fn prompt(&mut self, text: &str) -> AppResult<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // Bytes that are not UTF-8 are replaced, never rejected
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Prompt until the answer is a finite rating
    fn prompt_rating(&mut self, text: &str) -> AppResult<f32> {
        loop {
            let rating = self.prompt_number::<f32>(text)?;
            if rating.is_finite() {
                return Ok(rating);
            }
            writeln!(self.output, "Invalid number. Please try again.")?;
        }
    }

    /// Prompt until the answer parses as a number
    fn prompt_number<T: FromStr>(&mut self, text: &str) -> AppResult<T> {
        loop {
            let line = self.prompt(text)?;
            match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Invalid number. Please try again.")?,
            }
        }
    }
}
