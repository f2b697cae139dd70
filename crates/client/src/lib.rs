//! Solver client - talks to the remote solve endpoint over HTTP/JSON
//!
//! The solving algorithm lives entirely on the server. This crate only
//! ships a scramble there and decodes what comes back:
//!
//! 1. **Request**: `POST {"scramble": "R U R' U'"}` to the configured endpoint
//! 2. **Success**: a solution string plus optional scrambled/solved snapshots
//! 3. **Failure**: an `{"error": "..."}` body, or a transport problem
//!
//! # Module Structure
//!
//! - [`protocol`]: serde wire types, lenient about snapshot shape
//! - [`config`]: endpoint, timeout, log path and seed (file + environment)
//! - [`solver`]: async [`SolverClient`] built on reqwest
//! - [`runtime`]: [`SolverRuntime`], a private tokio runtime feeding answers
//!   back to a synchronous UI loop
//!
//! # Timeouts
//!
//! No request timeout is applied unless `request_timeout_ms` /
//! `CUBE_SOLVER_TIMEOUT_MS` is set; a hung solver keeps the loading
//! indicator up until the user resets.

pub mod config;
pub mod protocol;
pub mod runtime;
pub mod solver;

pub use cube_solver_core as core;
pub use cube_solver_types as types;

pub use config::{ConfigError, SolverConfig, DEFAULT_ENDPOINT};
pub use protocol::{SolveRequest, SolveResponse, WireCube};
pub use runtime::{SolveCompletion, SolverRuntime};
pub use solver::SolverClient;
