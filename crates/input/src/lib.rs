//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::UserAction`]. It knows
//! nothing about the controller or rendering.

pub mod map;

pub use cube_solver_types as types;

pub use map::{handle_key_event, should_quit};
