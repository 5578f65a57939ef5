//! # Exploration Session
//!
//! Drives one exploration from the entrance until the player ends it or
//! input runs out. Input and output are injected, so the same loop serves
//! the terminal and the tests.

use std::io::{self, Write};

use log::info;

use crate::Variant;
use crate::core::action::{Action, update};
use crate::core::clues::ClueIndex;
use crate::core::map::ManorMap;
use crate::core::state::Session;
use crate::terminal::input::LineSource;
use crate::terminal::render;

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player chose to end it.
    Finished,
    /// Input was exhausted (or a blank line was read).
    InputEnded,
    /// There was no room to start in.
    EmptyMap,
}

/// What a finished session hands back to the menu.
#[derive(Debug)]
pub struct SessionReport {
    pub id: Option<String>,
    pub clues: ClueIndex,
    /// Room the player stood in at each turn, in order.
    pub visited: Vec<String>,
    pub ending: Ending,
}

#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub variant: Variant,
    pub visit_capacity: usize,
}

pub fn run_session<S, W>(
    map: &ManorMap,
    input: &mut S,
    out: &mut W,
    options: SessionOptions,
) -> io::Result<SessionReport>
where
    S: LineSource + ?Sized,
    W: Write,
{
    let Some((mut session, arrival)) = Session::start(map, options.visit_capacity) else {
        render::empty_map(out)?;
        return Ok(SessionReport {
            id: None,
            clues: ClueIndex::new(),
            visited: Vec::new(),
            ending: Ending::EmptyMap,
        });
    };

    let start = map.room(session.current).map_or("", |room| room.name());
    render::session_banner(out, options.variant, start)?;
    if let Some(found) = &arrival {
        render::clue_found(out, found)?;
    }

    let ending = loop {
        session.begin_turn();
        render::turn(out, map, session.current, options.variant)?;

        let action = Action::from_choice(input.next_choice());
        let effect = update(&mut session, map, action);
        render::effect(out, &effect, options.variant)?;

        if effect.ends_session() {
            break match action {
                Action::InputEnded => Ending::InputEnded,
                _ => Ending::Finished,
            };
        }
    };

    let visited: Vec<String> = session
        .visited
        .names(map)
        .into_iter()
        .map(str::to_string)
        .collect();
    info!(
        "Session {} ended ({:?}): {} turns, {} clues",
        session.id,
        ending,
        visited.len(),
        session.clues.len()
    );

    Ok(SessionReport {
        id: Some(session.id),
        clues: session.clues,
        visited,
        ending,
    })
}
