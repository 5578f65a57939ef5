//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::map::{ManorMap, RoomSpec};

pub fn spec(
    name: &'static str,
    clue: Option<&'static str>,
    left: Option<usize>,
    right: Option<usize>,
) -> RoomSpec<'static> {
    RoomSpec {
        name,
        clue,
        left,
        right,
    }
}

/// Four rooms:
///
/// ```text
///        Hall (X)
///       /        \
///  Estar (Y)   Biblioteca
///              /
///        Escritorio (R.M.)
/// ```
pub fn hall_map() -> ManorMap {
    ManorMap::from_table(&[
        spec("Hall", Some("X"), Some(1), Some(2)),
        spec("Estar", Some("Y"), None, None),
        spec("Biblioteca", None, Some(3), None),
        spec("Escritorio", Some("R.M."), None, None),
    ])
    .expect("hall map is well formed")
}
