//! Core cube model - pure, deterministic, and testable
//!
//! This crate owns the client-side state of the solver front-end. It has
//! **zero dependencies** on terminals, networking, or I/O:
//!
//! - **Deterministic**: a seeded move source reproduces the same scrambles
//! - **Single-threaded**: all mutation goes through [`SolveController`]
//! - **Timed by the caller**: the reveal delay advances only through
//!   [`SolveController::tick`], so tests step time explicitly
//!
//! # Module Structure
//!
//! - [`cube_state`]: six-face coloring and partial snapshots ([`CubePatch`])
//! - [`move_log`]: ordered move history and its wire serialization
//! - [`rng`]: uniform random move source for scrambles
//! - [`controller`]: solve session state machine and the two-step reveal
//! - [`snapshot`]: render-facing copy of the controller state
//! - [`error`]: user-facing solve errors
//!
//! # Example
//!
//! ```
//! use cube_solver_core::{CubePatch, CubeState, SolveController, SolveOutcome};
//! use cube_solver_types::{Color, Face, Move, SOLVE_REVEAL_DELAY_MS};
//!
//! let mut controller = SolveController::new(12345);
//! controller.add_move(Move::cw(Face::Right));
//!
//! // Hand the ticket to the solver, then feed its answer back
//! let ticket = controller.solve().unwrap();
//! assert_eq!(ticket.scramble, "R");
//!
//! let scrambled = CubePatch::new().with_face(Face::Up, [Some(Color::Blue); 9]);
//! let solved = CubePatch::full(&CubeState::initial());
//! controller.complete(
//!     ticket.session,
//!     Ok(SolveOutcome {
//!         solution: Some("R'".to_string()),
//!         scrambled: Some(scrambled),
//!         solved: Some(solved),
//!     }),
//! );
//! assert_eq!(controller.cube().face(Face::Up)[0], Some(Color::Blue));
//!
//! // The solved snapshot appears once the reveal delay has elapsed
//! controller.tick(SOLVE_REVEAL_DELAY_MS);
//! assert_eq!(controller.cube(), &CubeState::initial());
//! ```

pub mod controller;
pub mod cube_state;
pub mod error;
pub mod move_log;
pub mod rng;
pub mod snapshot;

pub use cube_solver_types as types;

// Re-export commonly used types for convenience
pub use controller::{SolveController, SolveOutcome, SolveTicket};
pub use cube_state::{CubePatch, CubeState, FaceStickers, UNKNOWN_FACE};
pub use error::SolveError;
pub use move_log::{MoveLog, ParseMoveError};
pub use rng::{MoveSource, ScriptedMoves, SimpleRng};
pub use snapshot::SessionSnapshot;
