//! # Terminal Adapter
//!
//! The stdin/stdout layer. Prints the menu, reads player lines, and turns
//! core `Effect` values into text.
//!
//! This is the only module that does terminal I/O. Everything it needs is
//! passed in (`LineSource` for input, `Write` for output), so the menu and the
//! session loop run the same way against in-memory buffers.

pub mod input;
pub mod render;
pub mod session;

use log::info;
use std::io::{self, Write};

use crate::core::config::ResolvedConfig;
use crate::core::map::ManorMap;
use crate::terminal::input::{LineReader, LineSource};
use crate::terminal::session::{Ending, SessionOptions, run_session};

/// Runs the main menu until the player quits or input ends.
/// Returns how many explorations were played.
pub fn run_menu<S, W>(
    map: &ManorMap,
    input: &mut S,
    out: &mut W,
    options: SessionOptions,
) -> io::Result<usize>
where
    S: LineSource + ?Sized,
    W: Write,
{
    let mut played = 0;
    loop {
        render::main_menu(out, options.variant)?;
        let Some(line) = input.read_line() else {
            // Nothing left to read: leave like the player chose to quit.
            writeln!(out)?;
            break;
        };

        // Only the very first character counts; " 1" is not a choice.
        match line.chars().next() {
            Some('1') => {
                let report = run_session(map, input, out, options)?;
                played += 1;
                if report.ending == Ending::EmptyMap {
                    continue;
                }
                render::visit_summary(out, report.visited.as_slice())?;
                if options.variant.collects_clues() {
                    render::clue_list(out, &report.clues)?;
                }
                report.clues.release();
            }
            Some('2') => {
                render::farewell(out)?;
                break;
            }
            _ => render::menu_invalid(out)?,
        }
    }
    Ok(played)
}

pub fn run(config: ResolvedConfig, map: ManorMap) -> io::Result<()> {
    info!("Starting {:?} game on a {}-room map", config.variant, map.len());
    let options = SessionOptions {
        variant: config.variant,
        visit_capacity: config.visit_capacity,
    };

    let stdin = io::stdin();
    let mut input = LineReader::new(stdin.lock());
    let mut out = io::stdout().lock();
    let played = run_menu(&map, &mut input, &mut out, options)?;

    info!("Leaving after {} explorations", played);
    map.release();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;
    use crate::core::state::DEFAULT_VISIT_CAPACITY;
    use crate::test_support::hall_map;

    fn menu(keys: &str, variant: Variant) -> (usize, String) {
        let map = if variant.collects_clues() {
            hall_map()
        } else {
            hall_map().without_clues()
        };
        menu_on(&map, keys.as_bytes(), variant)
    }

    fn menu_on(map: &ManorMap, keys: &[u8], variant: Variant) -> (usize, String) {
        let mut input = LineReader::new(keys);
        let mut out = Vec::new();
        let options = SessionOptions {
            variant,
            visit_capacity: DEFAULT_VISIT_CAPACITY,
        };
        let played = run_menu(map, &mut input, &mut out, options).unwrap();
        (played, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_quit_immediately() {
        let (played, text) = menu("2\n", Variant::Detective);
        assert_eq!(played, 0);
        assert!(text.contains("see you next time"));
    }

    #[test]
    fn test_two_explorations_start_fresh() {
        let (played, text) = menu("1\nl\nq\n1\nr\nq\n2\n", Variant::Detective);
        assert_eq!(played, 2);
        // The second exploration does not carry Y over from the first.
        let second = text.rfind("Collected clues").unwrap();
        assert!(text[second..].contains(" - X"));
        assert!(!text[second..].contains(" - Y"));
    }

    #[test]
    fn test_invalid_menu_option() {
        let (played, text) = menu("9\n\n2\n", Variant::Detective);
        assert_eq!(played, 0);
        assert_eq!(text.matches("Invalid option! Try again.").count(), 2);
    }

    #[test]
    fn test_end_of_input_leaves_menu() {
        let (played, _) = menu("1\nl\n", Variant::Detective);
        assert_eq!(played, 1);
    }

    #[test]
    fn test_novice_skips_clue_listing() {
        let (_, text) = menu("1\nq\n2\n", Variant::Novice);
        assert!(text.contains("Rooms visited"));
        assert!(!text.contains("Collected clues"));
        assert!(!text.contains("[Clue found]"));
    }

    #[test]
    fn test_leading_space_is_not_a_menu_choice() {
        let (played, text) = menu(" 1\n2\n", Variant::Detective);
        assert_eq!(played, 0);
        assert_eq!(text.matches("Invalid option! Try again.").count(), 1);
    }

    #[test]
    fn test_undecodable_line_is_invalid_not_quit() {
        let (played, text) = menu_on(&hall_map(), b"\xe9\n1\nq\n2\n", Variant::Detective);
        assert_eq!(played, 1);
        assert_eq!(text.matches("Invalid option! Try again.").count(), 1);
        assert!(text.contains("see you next time"));
    }

    #[test]
    fn test_empty_map_skips_visit_summary() {
        let empty = ManorMap::from_table(&[]).unwrap();
        let (played, text) = menu_on(&empty, b"1\n2\n", Variant::Detective);
        assert_eq!(played, 1);
        assert!(text.contains("The map is empty"));
        assert!(!text.contains("Rooms visited"));
        assert!(!text.contains("Collected clues"));
    }
}
