//! # Core Game Logic
//!
//! This module contains Manor's business logic.
//! It knows nothing about terminals or line reading.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ManorMap (rooms)     │
//!                    │  • ClueIndex (clues)    │
//!                    │  • Session (state)      │
//!                    │  • Action (commands)    │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. Pure.          │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │  Terminal  │
//!                         │  Adapter   │
//!                         │ (stdin/out)│
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`map`]: `ManorMap`, the arena-backed room tree
//! - [`clues`]: `ClueIndex`, sorted duplicate-free clue set
//! - [`state`]: `Session`, everything one exploration knows
//! - [`action`]: `Action` and `update()`, one turn of the state machine
//! - [`config`]: layered settings (defaults → file → env → CLI)

pub mod action;
pub mod clues;
pub mod config;
pub mod map;
pub mod state;
