//! Manor library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod terminal;

#[cfg(test)]
pub mod test_support;

pub use crate::core::clues::ClueIndex;
pub use crate::core::map::{ManorMap, build_map, release_map};
pub use crate::terminal::session::{SessionReport, run_session};

/// Which flavour of the game to play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Collect clues and list them at the end of each exploration.
    #[default]
    Detective,
    /// Plain exploration: the map carries no clues.
    Novice,
}

impl Variant {
    pub fn collects_clues(self) -> bool {
        matches!(self, Variant::Detective)
    }
}
