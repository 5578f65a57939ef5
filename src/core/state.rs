//! # Exploration State
//!
//! Everything one exploration session knows about itself.
//!
//! ```text
//! Session
//! ├── id: String            // uuid, used to correlate log lines
//! ├── current: RoomId       // where the player stands
//! ├── visited: VisitLog     // room per turn, bounded
//! └── clues: ClueIndex      // collected clues, sorted
//! ```
//!
//! State changes only happen through `update(session, map, action)` in action.rs,
//! plus `begin_turn()` which the driver calls once at the top of every turn.

use log::{info, warn};

use crate::core::action::ClueFound;
use crate::core::clues::ClueIndex;
use crate::core::map::{ManorMap, RoomId};

/// Upper bound on recorded turns per session.
pub const DEFAULT_VISIT_CAPACITY: usize = 1024;

/// Append-only trail of the room the player stood in at each turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitLog {
    rooms: Vec<RoomId>,
    capacity: usize,
    overflowed: bool,
}

impl VisitLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rooms: Vec::with_capacity(capacity.min(DEFAULT_VISIT_CAPACITY)),
            capacity,
            overflowed: false,
        }
    }

    /// Appends `room` if there is space left. Returns whether it was recorded.
    pub fn record(&mut self, room: RoomId) -> bool {
        if self.rooms.len() >= self.capacity {
            if !self.overflowed {
                warn!("Visit log full ({} entries), further turns are not recorded", self.capacity);
                self.overflowed = true;
            }
            return false;
        }
        self.rooms.push(room);
        true
    }

    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn names<'m>(&self, map: &'m ManorMap) -> Vec<&'m str> {
        self.rooms
            .iter()
            .filter_map(|id| map.room(*id))
            .map(|room| room.name())
            .collect()
    }
}

#[derive(Debug)]
pub struct Session {
    pub id: String,
    pub current: RoomId,
    pub visited: VisitLog,
    pub clues: ClueIndex,
}

impl Session {
    /// Places a new session at the map's root and collects the root's clue.
    /// Returns `None` for an empty map.
    pub fn start(map: &ManorMap, visit_capacity: usize) -> Option<(Self, Option<ClueFound>)> {
        let root = map.root()?;
        let mut session = Session {
            id: uuid::Uuid::new_v4().to_string(),
            current: root,
            visited: VisitLog::with_capacity(visit_capacity),
            clues: ClueIndex::new(),
        };
        info!("Session {} started", session.id);
        let found = session.collect_clue(map, root);
        Some((session, found))
    }

    /// Records the current room in the visit log. Called once per turn,
    /// before the command for that turn is read.
    pub fn begin_turn(&mut self) {
        self.visited.record(self.current);
    }

    /// Feeds `room`'s clue, if it has one, to the index.
    pub(crate) fn collect_clue(&mut self, map: &ManorMap, room: RoomId) -> Option<ClueFound> {
        let text = map.room(room)?.clue()?;
        let is_new = self.clues.insert(text);
        Some(ClueFound {
            text: text.to_string(),
            is_new,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::hall_map;

    #[test]
    fn test_start_collects_root_clue() {
        let map = hall_map();
        let (session, found) = Session::start(&map, DEFAULT_VISIT_CAPACITY).unwrap();
        assert_eq!(session.current, RoomId::ROOT);
        assert_eq!(
            found,
            Some(ClueFound {
                text: "X".to_string(),
                is_new: true
            })
        );
        assert_eq!(session.clues.enumerate().collect::<Vec<_>>(), vec!["X"]);
        assert!(session.visited.is_empty());
    }

    #[test]
    fn test_start_on_empty_map() {
        let map = ManorMap::from_table(&[]).unwrap();
        assert!(Session::start(&map, DEFAULT_VISIT_CAPACITY).is_none());
    }

    #[test]
    fn test_begin_turn_records_current_room() {
        let map = hall_map();
        let (mut session, _) = Session::start(&map, DEFAULT_VISIT_CAPACITY).unwrap();
        session.begin_turn();
        session.begin_turn();
        assert_eq!(session.visited.names(&map), vec!["Hall", "Hall"]);
    }

    #[test]
    fn test_visit_log_is_bounded() {
        let mut log = VisitLog::with_capacity(2);
        assert!(log.record(RoomId::ROOT));
        assert!(log.record(RoomId::ROOT));
        assert!(!log.record(RoomId::ROOT));
        assert_eq!(log.len(), 2);
        assert_eq!(log.rooms(), &[RoomId::ROOT, RoomId::ROOT]);
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let map = hall_map();
        let (a, _) = Session::start(&map, DEFAULT_VISIT_CAPACITY).unwrap();
        let (b, _) = Session::start(&map, DEFAULT_VISIT_CAPACITY).unwrap();
        assert_ne!(a.id, b.id);
    }
}
