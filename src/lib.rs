//! Cube solver TUI (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benches can use `cube_solver_tui::{core, ...}`.

pub use cube_solver_client as client;
pub use cube_solver_core as core;
pub use cube_solver_input as input;
pub use cube_solver_term as term;
pub use cube_solver_types as types;
