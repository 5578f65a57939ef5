//! # Manor Map
//!
//! The rooms of the manor as a binary tree stored in an arena.
//!
//! ```text
//! ManorMap
//! └── rooms: Vec<Option<Room>>   // slot index == RoomId
//!       Room
//!       ├── name: String
//!       ├── clue: Option<String>
//!       ├── left / right: Option<RoomId>
//!       └── parent: Option<RoomId>  // None only for the root (slot 0)
//! ```
//!
//! The geometry is a flat table of [`RoomSpec`] rows consumed by
//! [`ManorMap::from_table`]. Row 0 is the root; `left`/`right` are row indices.
//! All links are wired and validated before the map is returned, and nothing
//! mutates it afterwards.

use log::{info, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a room inside its [`ManorMap`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RoomId(usize);

impl RoomId {
    pub const ROOT: RoomId = RoomId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    clue: Option<String>,
    left: Option<RoomId>,
    right: Option<RoomId>,
    parent: Option<RoomId>,
}

impl Room {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    pub fn left(&self) -> Option<RoomId> {
        self.left
    }

    pub fn right(&self) -> Option<RoomId> {
        self.right
    }

    pub fn parent(&self) -> Option<RoomId> {
        self.parent
    }
}

/// One row of a map table. `left`/`right` index other rows of the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSpec<'a> {
    pub name: &'a str,
    pub clue: Option<&'a str>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// Owned form of [`RoomSpec`], as read from `[[rooms]]` rows in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoomEntry {
    pub name: String,
    pub clue: Option<String>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl RoomEntry {
    pub fn as_spec(&self) -> RoomSpec<'_> {
        RoomSpec {
            name: &self.name,
            clue: self.clue.as_deref(),
            left: self.left,
            right: self.right,
        }
    }
}

/// The fixed manor: ten rooms, the observatory has only a right-hand child.
pub const MANOR: &[RoomSpec<'static>] = &[
    // 0
    RoomSpec {
        name: "Entrance Hall",
        clue: Some("A leather glove stained with dried blood"),
        left: Some(1),
        right: Some(2),
    },
    // 1
    RoomSpec {
        name: "Living Room",
        clue: Some("Broken glass near the fireplace"),
        left: Some(3),
        right: Some(4),
    },
    // 2
    RoomSpec {
        name: "Library",
        clue: None,
        left: Some(5),
        right: Some(6),
    },
    // 3
    RoomSpec {
        name: "Kitchen",
        clue: Some("Wet footprints leading to the pantry"),
        left: Some(7),
        right: Some(8),
    },
    // 4
    RoomSpec {
        name: "Dining Room",
        clue: Some("A snuffed candle with red wax"),
        left: None,
        right: None,
    },
    // 5
    RoomSpec {
        name: "Study",
        clue: Some("A crumpled note with the initials 'R.M.'"),
        left: None,
        right: None,
    },
    // 6
    RoomSpec {
        name: "Observatory",
        clue: Some("Scratched lenses and a drop of oil"),
        left: None,
        right: Some(9),
    },
    // 7
    RoomSpec {
        name: "Pantry",
        clue: Some("An empty pill box"),
        left: None,
        right: None,
    },
    // 8
    RoomSpec {
        name: "Inner Garden",
        clue: None,
        left: None,
        right: None,
    },
    // 9
    RoomSpec {
        name: "Watchtower",
        clue: Some("A lone footprint on the handrail"),
        left: None,
        right: None,
    },
];

// ============================================================================
// Error Type
// ============================================================================

/// Reasons a map table cannot be turned into a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    EmptyName { row: usize },
    EmptyClue { row: usize },
    ChildOutOfRange { row: usize, child: usize, len: usize },
    RootAsChild { row: usize },
    SharedChild { child: usize, first: usize, second: usize },
    Unreachable { row: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::EmptyName { row } => write!(f, "room {row} has an empty name"),
            MapError::EmptyClue { row } => {
                write!(f, "room {row} has an empty clue (omit the clue instead)")
            }
            MapError::ChildOutOfRange { row, child, len } => {
                write!(f, "room {row} links to room {child}, but the map has {len} rooms")
            }
            MapError::RootAsChild { row } => write!(f, "room {row} links back to the root"),
            MapError::SharedChild { child, first, second } => {
                write!(f, "room {child} is a child of both room {first} and room {second}")
            }
            MapError::Unreachable { row } => {
                write!(f, "room {row} cannot be reached from the root")
            }
        }
    }
}

impl std::error::Error for MapError {}

// ============================================================================
// Map
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ManorMap {
    rooms: Vec<Option<Room>>,
}

/// Builds the built-in manor.
pub fn build_map() -> Result<ManorMap, MapError> {
    ManorMap::from_table(MANOR)
}

/// Tears a map down. An absent map is a no-op. Returns how many rooms were released.
pub fn release_map(map: Option<ManorMap>) -> usize {
    map.map_or(0, ManorMap::release)
}

impl ManorMap {
    /// Builds a map from table rows, wiring parent links as children are attached.
    /// An empty table yields an empty map.
    pub fn from_table(table: &[RoomSpec<'_>]) -> Result<Self, MapError> {
        let len = table.len();
        let mut rooms = Vec::with_capacity(len);
        for (row, spec) in table.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(MapError::EmptyName { row });
            }
            if spec.clue.is_some_and(str::is_empty) {
                return Err(MapError::EmptyClue { row });
            }
            rooms.push(Room {
                name: spec.name.to_string(),
                clue: spec.clue.map(str::to_string),
                left: None,
                right: None,
                parent: None,
            });
        }

        for (row, spec) in table.iter().enumerate() {
            let left = attach(&mut rooms, row, spec.left)?;
            let right = attach(&mut rooms, row, spec.right)?;
            rooms[row].left = left;
            rooms[row].right = right;
        }

        let map = ManorMap {
            rooms: rooms.into_iter().map(Some).collect(),
        };
        map.check_reachable()?;
        info!("Built manor map with {} rooms", map.len());
        Ok(map)
    }

    /// Same geometry with every clue removed.
    pub fn without_clues(mut self) -> Self {
        for room in self.rooms.iter_mut().flatten() {
            room.clue = None;
        }
        self
    }

    pub fn root(&self) -> Option<RoomId> {
        if self.rooms.is_empty() {
            None
        } else {
            Some(RoomId::ROOT)
        }
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.rooms.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.rooms
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| RoomId(i))
    }

    /// Post-order over the whole tree: both children before their parent.
    pub fn teardown_order(&self) -> Vec<RoomId> {
        let mut order = Vec::with_capacity(self.rooms.len());
        let Some(root) = self.root() else {
            return order;
        };

        // (room, children already pushed)
        let mut stack = vec![(root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                order.push(id);
                continue;
            }
            let Some(room) = self.room(id) else {
                continue;
            };
            stack.push((id, true));
            stack.extend(room.right.map(|r| (r, false)));
            stack.extend(room.left.map(|l| (l, false)));
        }
        order
    }

    /// Releases every room exactly once, children first. Returns the count.
    pub fn release(mut self) -> usize {
        let mut released = 0;
        for id in self.teardown_order() {
            if let Some(room) = self.rooms[id.0].take() {
                trace!("Releasing room {:?} ({})", id, room.name);
                released += 1;
            }
        }
        info!("Released manor map ({} rooms)", released);
        released
    }

    fn check_reachable(&self) -> Result<(), MapError> {
        let mut seen = vec![false; self.rooms.len()];
        for id in self.teardown_order() {
            seen[id.0] = true;
        }
        match seen.iter().position(|s| !s) {
            Some(row) => Err(MapError::Unreachable { row }),
            None => Ok(()),
        }
    }
}

/// Validates one child link of `row` and records `row` as that child's parent.
fn attach(
    rooms: &mut [Room],
    row: usize,
    child: Option<usize>,
) -> Result<Option<RoomId>, MapError> {
    let Some(child) = child else {
        return Ok(None);
    };
    let len = rooms.len();
    if child >= len {
        return Err(MapError::ChildOutOfRange { row, child, len });
    }
    if child == RoomId::ROOT.0 {
        return Err(MapError::RootAsChild { row });
    }
    if let Some(first) = rooms[child].parent {
        return Err(MapError::SharedChild {
            child,
            first: first.0,
            second: row,
        });
    }
    rooms[child].parent = Some(RoomId(row));
    Ok(Some(RoomId(child)))
}
