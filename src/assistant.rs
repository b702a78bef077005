use crate::errors::PathPlannerError;
use crate::graph::Graph;
use crate::graph_algos::PathFinder;

use std::fmt::{Debug, Display};
use std::io::{self, BufRead, Write};
use num_traits::{CheckedAdd, Zero};
use tracing::{debug, info};


pub const DEFAULT_EXIT_WORD: &str = "exit";


/// Interactive wayfinding over a borrowed campus map
/// Reads a start and a destination per query until the exit word or end of input
pub struct Session<'a, C> {
    campus: &'a Graph<C>,
    exit_word: String,
    list_locations: bool,
}

impl<'a, C> Session<'a, C>
where
    C: Zero + Ord + Copy + CheckedAdd + Debug + Display,
{

    pub fn new(campus: &'a Graph<C>) -> Self {
        Self {
            campus,
            exit_word: DEFAULT_EXIT_WORD.to_string(),
            list_locations: false,
        }
    }

    pub fn with_exit_word(mut self, exit_word: impl Into<String>) -> Self {
        self.exit_word = exit_word.into();
        self
    }

    /// Print the known locations before the first prompt
    pub fn with_location_list(mut self, list_locations: bool) -> Self {
        self.list_locations = list_locations;
        self
    }

    /// Run the prompt loop, returns the number of answered queries
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<usize> {
        writeln!(output, "Welcome to the Campus Wayfinding Assistant")?;

        if self.list_locations {
            let mut locations: Vec<_> = self.campus.locations().collect();
            locations.sort_unstable();
            writeln!(output, "Known locations: {}", locations.join(", "))?;
        }

        let mut answered = 0;
        loop {
            let prompt = format!("Enter your current location (or type '{}' to quit): ", self.exit_word);
            let Some(start) = prompt_line(&mut input, &mut output, &prompt)? else {
                break;
            };
            if start == self.exit_word {
                break;
            }

            let Some(end) = prompt_line(&mut input, &mut output, "Enter your destination: ")? else {
                break;
            };

            match PathFinder.shortest_path(self.campus, &start, &end) {
                Ok(route) => {
                    writeln!(output, "Shortest path from {start} to {end}: {}", route.path.join(" -> "))?;
                    writeln!(output, "Total distance: {} meters\n", route.distance)?;
                    answered += 1;
                }
                Err(PathPlannerError::UnknownLocation(location)) => {
                    debug!(%location, "rejected query");
                    writeln!(output, "Invalid locations. Please try again.\n")?;
                }
                Err(PathPlannerError::NoPathExists) => {
                    writeln!(output, "No path exists between {start} and {end}.\n")?;
                    answered += 1;
                }
                Err(e) => {
                    writeln!(output, "Unable to plan a route: {e}\n")?;
                }
            }
        }

        info!(answered, "session finished");
        Ok(answered)
    }
}


/// Write a prompt and read one line without its terminator, None at end of input
fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::campus::example_campus;
    use std::io::Cursor;

    fn run_session(session: &Session<'_, u32>, input: &str) -> (usize, String) {
        let mut output = Vec::new();
        let answered = session.run(Cursor::new(input), &mut output).unwrap();
        (answered, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_session_answers_query() {
        let campus = example_campus().unwrap();
        let (answered, output) = run_session(&Session::new(&campus), "Library\nLecture Hall 2\nexit\n");

        assert_eq!(answered, 1);
        assert!(output.starts_with("Welcome to the Campus Wayfinding Assistant\n"));
        assert!(output.contains("Shortest path from Library to Lecture Hall 2: Library -> Admin Building -> Lecture Hall 2\n"));
        assert!(output.contains("Total distance: 350 meters\n"));
    }

    #[test]
    fn test_session_rejects_unknown_location() {
        let campus = example_campus().unwrap();
        let (answered, output) = run_session(&Session::new(&campus), "Library\nGymnasium\nexit\n");

        assert_eq!(answered, 0);
        assert!(output.contains("Invalid locations. Please try again.\n"));
        // prompted again after the rejection
        assert_eq!(output.matches("Enter your current location").count(), 2);
    }

    #[test]
    fn test_session_reports_missing_path() {
        let mut campus = example_campus().unwrap();
        campus.add_location("Observatory");
        let (answered, output) = run_session(&Session::new(&campus), "Library\nObservatory\n");

        assert_eq!(answered, 1);
        assert!(output.contains("No path exists between Library and Observatory.\n"));
    }

    #[test]
    fn test_session_stops_at_end_of_input() {
        let campus = example_campus().unwrap();
        let (answered, output) = run_session(&Session::new(&campus), "Library\n");

        assert_eq!(answered, 0);
        assert!(output.ends_with("Enter your destination: "));
    }

    #[test]
    fn test_session_custom_exit_word_and_listing() {
        let campus = example_campus().unwrap();
        let session = Session::new(&campus).with_exit_word("quit").with_location_list(true);
        let (answered, output) = run_session(&session, "Cafeteria\r\nCafeteria\nquit\nLibrary\n");

        assert_eq!(answered, 1);
        assert!(output.contains(
            "Known locations: Admin Building, Cafeteria, Lecture Hall 1, Lecture Hall 2, Library\n"
        ));
        assert!(output.contains("(or type 'quit' to quit)"));
        assert!(output.contains("Shortest path from Cafeteria to Cafeteria: Cafeteria\n"));
        assert!(output.contains("Total distance: 0 meters\n"));
    }

    #[test]
    fn test_session_keeps_surrounding_spaces() {
        let campus = example_campus().unwrap();
        let (answered, output) = run_session(&Session::new(&campus), "  exit\n Library\nexit\n");

        // "  exit" is read as a location, " Library" is not on the map
        assert_eq!(answered, 0);
        assert_eq!(output.matches("Invalid locations. Please try again.").count(), 1);
        assert_eq!(output.matches("Enter your current location").count(), 2);
    }
}
