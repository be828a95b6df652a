// src/application/shell_tests.rs
//
// Shell tests driven by scripted console input
//
// COVERED:
// - Menu dispatch and user-facing messages
// - Lookup misses leave state untouched
// - Duplicate collection names resolve to the first one
// - Invalid input handling, non-UTF-8 bytes and end of input
// - Save, then load into a fresh session

#[cfg(test)]
mod session_tests {
    use std::io::Cursor;
    use std::path::Path;

    use tempfile::TempDir;

    use crate::application::{AppState, Shell};
    use crate::repositories::InMemoryCollectionRepository;
    use crate::services::CollectionService;

    // ========================================================================
    // TEST HELPERS
    // ========================================================================

    fn fresh_state(data_file: &Path) -> AppState {
        let service = CollectionService::new(Box::new(InMemoryCollectionRepository::new()));
        AppState::new(service, data_file)
    }

    /// Run a session over `script` and return the final state and the output
    fn run_session(state: AppState, script: &str) -> (AppState, String) {
        let mut shell = Shell::new(state, Cursor::new(script.as_bytes().to_vec()), Vec::new());
        shell.run().unwrap();
        let (state, output) = shell.into_parts();
        (state, String::from_utf8(output).unwrap())
    }

    fn run_script(script: &str) -> (AppState, String) {
        run_session(fresh_state(Path::new("unused.txt")), script)
    }

    const CREATE_CLASSICS: &str = "2\nClassics\nOld favorites\n";
    const ADD_INCEPTION: &str = "3\nClassics\nInception\nNolan\nSci-Fi\n148\n8.8\n";

    // ========================================================================
    // MENU
    // ========================================================================

    #[test]
    fn test_menu_and_exit() {
        let (state, output) = run_script("9\n");

        assert!(!state.running);
        assert!(output.starts_with("\n=== Movie Collection Manager ===\n1. View All Movie Collections\n"));
        assert!(output.contains("9. Exit\nEnter your choice: Exiting...\n"));
    }

    #[test]
    fn test_invalid_choices_redisplay_menu() {
        let (_, output) = run_script("42\nhello\n9\n");

        assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
        assert_eq!(output.matches("=== Movie Collection Manager ===").count(), 3);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (state, output) = run_script("2\nHalf");

        assert!(!state.running);
        assert!(output.ends_with("Exiting...\n"));
        // The collection was never created
        assert!(state.collection_service.list_collection_names().is_empty());
    }

    #[test]
    fn test_empty_input_ends_session() {
        let (state, output) = run_script("");
        assert!(!state.running);
        assert!(output.ends_with("Enter your choice: Exiting...\n"));
    }

    // ========================================================================
    // COLLECTIONS
    // ========================================================================

    #[test]
    fn test_create_and_view_collections() {
        let script = format!("{CREATE_CLASSICS}2\nNoir\nShadows\n1\n9\n");
        let (_, output) = run_script(&script);

        assert_eq!(output.matches("Movie Collection created!").count(), 2);
        assert!(output.contains("\nAvailable Movie Collections:\n- Classics\n- Noir\n"));
    }

    #[test]
    fn test_add_movie_plays_it() {
        let script = format!("{CREATE_CLASSICS}{ADD_INCEPTION}9\n");
        let (state, output) = run_script(&script);

        assert!(output.contains("🎬 Now Playing: Inception\n"));
        assert!(output.contains("Duration   : 148 minutes\n"));
        assert!(output.contains("IMDB Rating: 8.8\n"));
        let classics = state.collection_service.list_media("Classics").unwrap();
        assert_eq!(classics.movies().len(), 1);
    }

    #[test]
    fn test_add_movie_to_missing_collection_skips_prompts() {
        let (_, output) = run_script("3\nNowhere\n9\n");

        assert!(output.contains("Enter collection name: Collection not found.\n"));
        assert!(!output.contains("Enter movie title"));
    }

    #[test]
    fn test_non_numeric_duration_reprompts() {
        let script = format!("{CREATE_CLASSICS}3\nClassics\nHeat\nMann\nCrime\nlong\n170\nhigh\n8.3\n9\n");
        let (state, output) = run_script(&script);

        assert_eq!(output.matches("Invalid number. Please try again.").count(), 2);
        let movie = state.collection_service.play_movie("Classics", "Heat").unwrap();
        assert_eq!(movie.duration(), 170);
        assert_eq!(movie.rating(), 8.3);
    }

    #[test]
    fn test_invalid_utf8_input_is_kept_lossily() {
        let input = Cursor::new(b"2\nCl\xe9ssicos\nx\n9\n".to_vec());
        let mut shell = Shell::new(fresh_state(Path::new("unused.txt")), input, Vec::new());
        shell.run().unwrap();
        let (state, output) = shell.into_parts();
        let output = String::from_utf8(output).unwrap();

        assert!(!state.running);
        assert!(output.contains("Movie Collection created!\n"));
        assert_eq!(
            state.collection_service.list_collection_names(),
            vec!["Cl\u{FFFD}ssicos"]
        );
    }

    #[test]
    fn test_non_finite_rating_reprompts() {
        let script = format!("{CREATE_CLASSICS}3\nClassics\nHeat\nMann\nCrime\n170\nNaN\ninf\n8.3\n9\n");
        let (state, output) = run_script(&script);

        assert_eq!(output.matches("Invalid number. Please try again.").count(), 2);
        let movie = state.collection_service.play_movie("Classics", "Heat").unwrap();
        assert_eq!(movie.rating(), 8.3);
    }

    #[test]
    fn test_list_empty_collection() {
        let script = format!("{CREATE_CLASSICS}4\nClassics\n9\n");
        let (_, output) = run_script(&script);

        assert!(output.contains("No media in this collection.\n"));
        assert!(!output.contains("Movie: "));
    }

    #[test]
    fn test_sort_lists_by_descending_rating() {
        let script = format!(
            "{CREATE_CLASSICS}\
             3\nClassics\nFirst\nD\nG\n100\n7.5\n\
             3\nClassics\nBest\nD\nG\n100\n9.0\n\
             3\nClassics\nSecond\nD\nG\n100\n7.5\n\
             5\nClassics\n9\n"
        );
        let (_, output) = run_script(&script);

        let sorted = output
            .split("Movies in the collection sorted by IMDB rating.\n")
            .nth(1)
            .unwrap();
        let best = sorted.find("Movie: Best").unwrap();
        let first = sorted.find("Movie: First").unwrap();
        let second = sorted.find("Movie: Second").unwrap();
        assert!(best < first && first < second);
    }

    // ========================================================================
    // LOOKUP MISSES
    // ========================================================================

    #[test]
    fn test_play_movie_misses() {
        let script = format!(
            "{CREATE_CLASSICS}{ADD_INCEPTION}8\nNonexistent\n8\nClassics\nNonexistentTitle\n9\n"
        );
        let (state, output) = run_script(&script);

        assert!(output.contains("Enter collection name to play a movie: Collection not found.\n"));
        assert!(output.contains("Enter movie title to play: Movie not found in the collection.\n"));
        assert_eq!(state.collection_service.list_collection_names(), vec!["Classics"]);
        let classics = state.collection_service.list_media("Classics").unwrap();
        assert_eq!(classics.movies().len(), 1);
    }

    #[test]
    fn test_duplicate_names_use_first_collection() {
        let script = "2\nClassics\nfirst\n2\nClassics\nsecond\n\
                      3\nClassics\nHeat\nMann\nCrime\n170\n8.3\n9\n";
        let (state, _) = run_script(script);

        let first = state.collection_service.find_collection("Classics").unwrap();
        assert_eq!(first.description, "first");
        assert_eq!(first.movies().len(), 1);
        assert_eq!(state.collection_service.list_collection_names().len(), 2);
    }

    // ========================================================================
    // PERSISTENCE
    // ========================================================================

    #[test]
    fn test_save_then_load_in_fresh_session() {
        let dir = TempDir::new().unwrap();
        let data_file = dir.path().join("movie_collections.txt");

        let script = format!("{CREATE_CLASSICS}{ADD_INCEPTION}6\n9\n");
        let (_, output) = run_session(fresh_state(&data_file), &script);
        assert!(output.contains("Movie Collections saved to file.\n"));

        let (_, output) = run_session(fresh_state(&data_file), "7\n4\nClassics\n9\n");
        assert!(output.contains("Movie Collections loaded from file.\n"));

        let listing = output.split("Movies in the collection: Classics\n").nth(1).unwrap();
        assert_eq!(listing.matches("Movie: ").count(), 1);
        assert!(listing.contains("Movie: Inception\n"));
        assert!(listing.contains("Duration   : 148 minutes\n"));
        assert!(listing.contains("IMDB Rating: 8.8\n"));
    }

    #[test]
    fn test_load_missing_file_reports_error() {
        let dir = TempDir::new().unwrap();
        let state = fresh_state(&dir.path().join("absent.txt"));

        let (state, output) = run_session(state, "7\n1\n9\n");

        assert!(output.contains("Error loading movie collections.\n"));
        assert!(state.collection_service.list_collection_names().is_empty());
        assert!(!state.running);
    }

    #[test]
    fn test_save_failure_reports_error() {
        let dir = TempDir::new().unwrap();
        let state = fresh_state(&dir.path().join("missing").join("c.txt"));

        let (_, output) = run_session(state, "6\n9\n");
        assert!(output.contains("Error saving movie collections.\n"));
    }
}
