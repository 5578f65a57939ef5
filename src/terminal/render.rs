//! Player-facing text. Every function writes to an injected sink so the
//! session loop can be driven against a `Vec<u8>` in tests.

use std::io::{self, Write};

use crate::Variant;
use crate::core::action::{ClueFound, Direction, Effect};
use crate::core::clues::ClueIndex;
use crate::core::map::{ManorMap, RoomId};

const RULE: &str = "=====================================";

fn direction_word(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "left",
        Direction::Right => "right",
    }
}

fn room_name(map: &ManorMap, id: RoomId) -> &str {
    map.room(id).map_or("?", |room| room.name())
}

pub fn main_menu(out: &mut impl Write, variant: Variant) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "        DETECTIVE QUEST - MENU       ")?;
    writeln!(out, "{RULE}")?;
    if variant.collects_clues() {
        writeln!(out, "1 - Explore the manor (collect clues)")?;
    } else {
        writeln!(out, "1 - Explore the manor")?;
    }
    writeln!(out, "2 - Quit the game")?;
    write!(out, "Choose: ")?;
    out.flush()
}

pub fn menu_invalid(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Invalid option! Try again.\n")
}

pub fn farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Leaving the game... see you next time!")
}

pub fn empty_map(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "The map is empty. Nothing to explore.")
}

pub fn session_banner(out: &mut impl Write, variant: Variant, start: &str) -> io::Result<()> {
    if variant.collects_clues() {
        writeln!(out, "\n--- Starting the manor exploration (collecting clues) ---")?;
    } else {
        writeln!(out, "\n--- Starting the manor exploration ---")?;
    }
    writeln!(out, "You begin at the entrance: \"{start}\"\n")
}

pub fn clue_found(out: &mut impl Write, found: &ClueFound) -> io::Result<()> {
    if found.is_new {
        writeln!(out, "[Clue found] {}\n", found.text)
    } else {
        writeln!(out, "[Clue already noted] {}\n", found.text)
    }
}

/// Current room, the moves available from it, and the prompt.
pub fn turn(
    out: &mut impl Write,
    map: &ManorMap,
    current: RoomId,
    variant: Variant,
) -> io::Result<()> {
    let Some(room) = map.room(current) else {
        return Ok(());
    };
    writeln!(out, "You are in: {}", room.name())?;
    writeln!(out, "Options:")?;
    if let Some(left) = room.left() {
        writeln!(out, "  (l) Go left -> {}", room_name(map, left))?;
    }
    if let Some(right) = room.right() {
        writeln!(out, "  (r) Go right -> {}", room_name(map, right))?;
    }
    match room.parent() {
        Some(parent) => writeln!(
            out,
            "  (b) Go back to the previous room -> {}",
            room_name(map, parent)
        )?,
        None => writeln!(out, "  (b) Go back (not available - you are at the entrance)")?,
    }
    if variant.collects_clues() {
        writeln!(out, "  (q) End this exploration and show the collected clues")?;
    } else {
        writeln!(out, "  (q) End this exploration and return to the main menu")?;
    }
    write!(out, "Choose (l/r/b/q): ")?;
    out.flush()
}

pub fn effect(out: &mut impl Write, effect: &Effect, variant: Variant) -> io::Result<()> {
    match effect {
        Effect::Moved { direction, clue, .. } => {
            writeln!(out, "\n-- Going {}... --\n", direction_word(*direction))?;
            if let Some(found) = clue {
                clue_found(out, found)?;
            }
            Ok(())
        }
        Effect::WentBack { .. } => writeln!(out, "\n-- Going back to the previous room... --\n"),
        Effect::NoRoom(direction) => writeln!(
            out,
            "There is no room to the {}. Try another option.\n",
            direction_word(*direction)
        ),
        Effect::AtRoot => writeln!(out, "You are at the entrance. You cannot go back.\n"),
        Effect::Rejected(_) => writeln!(out, "Invalid option. Use 'l', 'r', 'b' or 'q'.\n"),
        Effect::Finished if variant.collects_clues() => {
            writeln!(out, "Ending the exploration and compiling clues...\n")
        }
        Effect::Finished => {
            writeln!(out, "Ending the exploration and returning to the main menu...\n")
        }
        Effect::InputEnded => writeln!(out, "\nInput ended. Returning to the main menu."),
    }
}

pub fn visit_summary<S: AsRef<str>>(out: &mut impl Write, visited: &[S]) -> io::Result<()> {
    writeln!(out, "\n--- Rooms visited in this exploration ---")?;
    for (i, name) in visited.iter().enumerate() {
        writeln!(out, "{}) {}", i + 1, name.as_ref())?;
    }
    writeln!(out, "----------------------------------------\n")
}

pub fn clue_list(out: &mut impl Write, clues: &ClueIndex) -> io::Result<()> {
    writeln!(out, "Collected clues (alphabetical order):")?;
    if clues.is_empty() {
        writeln!(out, " (no clues found in this exploration)")?;
    }
    for clue in clues.enumerate() {
        writeln!(out, " - {clue}")?;
    }
    writeln!(out)
}
