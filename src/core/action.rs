//! # Actions
//!
//! Everything the player can do during an exploration becomes an `Action`.
//! Pressing `l`? That's `Action::Move(Direction::Left)`.
//! Input ran out? That's `Action::InputEnded`.
//!
//! The `update()` function takes the session, the map and an action, mutates
//! the session and returns an `Effect` describing what happened. No I/O here.
//! The terminal adapter turns effects into text.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```

use log::debug;

use crate::core::map::{ManorMap, RoomId};
use crate::core::state::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Back,
    EndSession,
    /// A key that maps to no command.
    Invalid(char),
    /// The input source has nothing more to give.
    InputEnded,
}

impl Action {
    /// Maps the first non-whitespace character of an input line to an action.
    /// `e`/`d`/`v`/`s` are accepted as aliases (esquerda, direita, voltar, sair).
    pub fn from_choice(choice: Option<char>) -> Self {
        let Some(c) = choice else {
            return Action::InputEnded;
        };
        match c.to_ascii_lowercase() {
            'l' | 'e' => Action::Move(Direction::Left),
            'r' | 'd' => Action::Move(Direction::Right),
            'b' | 'v' => Action::Back,
            'q' | 's' => Action::EndSession,
            _ => Action::Invalid(c),
        }
    }
}

/// A clue met on entering a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueFound {
    pub text: String,
    /// False when the clue was already in the index (revisit).
    pub is_new: bool,
}

/// The outcome of one action, for the adapter to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Moved {
        direction: Direction,
        room: RoomId,
        clue: Option<ClueFound>,
    },
    WentBack {
        room: RoomId,
    },
    NoRoom(Direction),
    AtRoot,
    Rejected(char),
    Finished,
    InputEnded,
}

impl Effect {
    /// Whether the session loop stops after this effect.
    pub fn ends_session(&self) -> bool {
        matches!(self, Effect::Finished | Effect::InputEnded)
    }
}

pub fn update(session: &mut Session, map: &ManorMap, action: Action) -> Effect {
    debug!("Session {}: {:?} at {:?}", session.id, action, session.current);
    let effect = match action {
        Action::Move(direction) => {
            let target = map.room(session.current).and_then(|room| match direction {
                Direction::Left => room.left(),
                Direction::Right => room.right(),
            });
            match target {
                Some(room) => {
                    session.current = room;
                    let clue = session.collect_clue(map, room);
                    Effect::Moved {
                        direction,
                        room,
                        clue,
                    }
                }
                None => Effect::NoRoom(direction),
            }
        }
        Action::Back => match map.room(session.current).and_then(|room| room.parent()) {
            Some(parent) => {
                session.current = parent;
                Effect::WentBack { room: parent }
            }
            None => Effect::AtRoot,
        },
        Action::EndSession => Effect::Finished,
        Action::Invalid(c) => Effect::Rejected(c),
        Action::InputEnded => Effect::InputEnded,
    };
    debug!("Session {}: {:?}", session.id, effect);
    effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::DEFAULT_VISIT_CAPACITY;
    use crate::test_support::hall_map;

    fn start(map: &ManorMap) -> Session {
        Session::start(map, DEFAULT_VISIT_CAPACITY).unwrap().0
    }

    #[test]
    fn test_from_choice_keys() {
        assert_eq!(Action::from_choice(Some('l')), Action::Move(Direction::Left));
        assert_eq!(Action::from_choice(Some('R')), Action::Move(Direction::Right));
        assert_eq!(Action::from_choice(Some('b')), Action::Back);
        assert_eq!(Action::from_choice(Some('Q')), Action::EndSession);
        assert_eq!(Action::from_choice(None), Action::InputEnded);
        assert_eq!(Action::from_choice(Some('x')), Action::Invalid('x'));
    }

    #[test]
    fn test_from_choice_aliases() {
        assert_eq!(Action::from_choice(Some('E')), Action::Move(Direction::Left));
        assert_eq!(Action::from_choice(Some('d')), Action::Move(Direction::Right));
        assert_eq!(Action::from_choice(Some('V')), Action::Back);
        assert_eq!(Action::from_choice(Some('s')), Action::EndSession);
    }

    #[test]
    fn test_move_left_collects_clue() {
        let map = hall_map();
        let mut session = start(&map);
        let estar = map.room(RoomId::ROOT).unwrap().left().unwrap();
        let effect = update(&mut session, &map, Action::Move(Direction::Left));
        assert_eq!(
            effect,
            Effect::Moved {
                direction: Direction::Left,
                room: estar,
                clue: Some(ClueFound {
                    text: "Y".to_string(),
                    is_new: true
                }),
            }
        );
        assert_eq!(map.room(session.current).unwrap().name(), "Estar");
        assert_eq!(session.clues.enumerate().collect::<Vec<_>>(), vec!["X", "Y"]);
    }

    #[test]
    fn test_move_into_room_without_clue() {
        let map = hall_map();
        let mut session = start(&map);
        let effect = update(&mut session, &map, Action::Move(Direction::Right));
        assert!(matches!(effect, Effect::Moved { clue: None, .. }));
        assert_eq!(session.clues.len(), 1);
    }

    #[test]
    fn test_no_room_leaves_state_unchanged() {
        let map = hall_map();
        let mut session = start(&map);
        update(&mut session, &map, Action::Move(Direction::Left));
        let before = session.current;
        assert_eq!(
            update(&mut session, &map, Action::Move(Direction::Left)),
            Effect::NoRoom(Direction::Left)
        );
        assert_eq!(
            update(&mut session, &map, Action::Move(Direction::Right)),
            Effect::NoRoom(Direction::Right)
        );
        assert_eq!(session.current, before);
    }

    #[test]
    fn test_back_from_root_fails() {
        let map = hall_map();
        let mut session = start(&map);
        assert_eq!(update(&mut session, &map, Action::Back), Effect::AtRoot);
        assert_eq!(session.current, RoomId::ROOT);
    }

    #[test]
    fn test_back_returns_to_parent_without_collecting() {
        let map = hall_map();
        let mut session = start(&map);
        update(&mut session, &map, Action::Move(Direction::Left));
        assert_eq!(
            update(&mut session, &map, Action::Back),
            Effect::WentBack { room: RoomId::ROOT }
        );
        assert_eq!(session.current, RoomId::ROOT);
        assert_eq!(session.clues.len(), 2);
    }

    #[test]
    fn test_revisit_reports_known_clue() {
        let map = hall_map();
        let mut session = start(&map);
        update(&mut session, &map, Action::Move(Direction::Left));
        update(&mut session, &map, Action::Back);
        let effect = update(&mut session, &map, Action::Move(Direction::Left));
        let Effect::Moved { clue: Some(found), .. } = effect else {
            panic!("expected a move with a clue");
        };
        assert!(!found.is_new);
        assert_eq!(session.clues.len(), 2);
    }

    #[test]
    fn test_invalid_and_terminal_actions() {
        let map = hall_map();
        let mut session = start(&map);
        assert_eq!(update(&mut session, &map, Action::Invalid('z')), Effect::Rejected('z'));
        assert_eq!(session.current, RoomId::ROOT);
        assert!(update(&mut session, &map, Action::EndSession).ends_session());
        assert!(update(&mut session, &map, Action::InputEnded).ends_session());
        assert!(!Effect::AtRoot.ends_session());
    }
}
