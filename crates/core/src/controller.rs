//! Solve controller - owns the cube, the move log and one solve session
//!
//! The controller is the only writer of [`CubeState`] and [`MoveLog`]. It is
//! driven by discrete events on a single thread:
//!
//! - user actions ([`SolveController::apply_action`])
//! - solver answers ([`SolveController::complete`])
//! - fixed-timestep ticks ([`SolveController::tick`])
//!
//! It performs no I/O. [`SolveController::solve`] hands out a [`SolveTicket`]
//! that the caller forwards to the solver; the answer comes back through
//! `complete` tagged with the ticket's session id.
//!
//! # Session lifecycle
//!
//! ```text
//! Idle --solve(empty)--> Idle (error set, nothing sent)
//! Idle --solve--> InFlight --complete(Ok)--> Idle + scrambled snapshot shown
//!                          \                       \--(1000ms of ticks)--> solved snapshot shown
//!                           \--complete(Err)--> Idle (error set, cube untouched)
//! ```
//!
//! Every `solve` and `reset` starts a new session. A pending reveal belongs to
//! the session that scheduled it and is cancelled when that session ends, so
//! a late solved snapshot can never overwrite a newer state. Answers tagged
//! with an older session are dropped.

use tracing::{debug, info, warn};

use crate::cube_state::{CubePatch, CubeState};
use crate::error::SolveError;
use crate::move_log::MoveLog;
use crate::rng::{MoveSource, SimpleRng};
use crate::snapshot::SessionSnapshot;
use crate::types::{Move, UserAction, RANDOM_SCRAMBLE_LEN, SOLVE_REVEAL_DELAY_MS};

/// An accepted solve request, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveTicket {
    pub session: u32,
    /// Serialized move log.
    pub scramble: String,
}

/// A successful solver answer. Absent parts mean "no update".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveOutcome {
    pub solution: Option<String>,
    pub scrambled: Option<CubePatch>,
    pub solved: Option<CubePatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    InFlight { session: u32 },
}

#[derive(Debug, Clone, Copy)]
struct PendingReveal {
    session: u32,
    remaining_ms: u32,
    cube: CubePatch,
}

#[derive(Debug, Clone)]
pub struct SolveController<S: MoveSource = SimpleRng> {
    cube: CubeState,
    moves: MoveLog,
    source: S,
    phase: Phase,
    /// Monotonic id; bumps on every accepted solve and every reset.
    session_id: u32,
    solution: String,
    error: String,
    pending_reveal: Option<PendingReveal>,
    reveal_delay_ms: u32,
}

impl SolveController<SimpleRng> {
    /// Create a controller whose scrambles come from a seeded [`SimpleRng`]
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<S: MoveSource> SolveController<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            cube: CubeState::initial(),
            moves: MoveLog::new(),
            source,
            phase: Phase::Idle,
            session_id: 0,
            solution: String::new(),
            error: String::new(),
            pending_reveal: None,
            reveal_delay_ms: SOLVE_REVEAL_DELAY_MS,
        }
    }

    pub fn with_reveal_delay_ms(mut self, delay_ms: u32) -> Self {
        self.reveal_delay_ms = delay_ms;
        self
    }

    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    pub fn moves(&self) -> &MoveLog {
        &self.moves
    }

    pub fn solution(&self) -> Option<&str> {
        (!self.solution.is_empty()).then_some(self.solution.as_str())
    }

    pub fn error(&self) -> Option<&str> {
        (!self.error.is_empty()).then_some(self.error.as_str())
    }

    pub fn loading(&self) -> bool {
        matches!(self.phase, Phase::InFlight { .. })
    }

    pub fn reveal_pending(&self) -> bool {
        self.pending_reveal.is_some()
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    /// Dispatch a user action. Returns a ticket when a request must be sent.
    pub fn apply_action(&mut self, action: UserAction) -> Option<SolveTicket> {
        debug!(action = action.as_str(), "user action");
        match action {
            UserAction::AddMove(m) => {
                self.add_move(m);
                None
            }
            UserAction::Scramble => {
                self.generate_random_scramble();
                None
            }
            UserAction::Solve => self.solve().ok(),
            UserAction::Reset => {
                self.reset();
                None
            }
        }
    }

    pub fn add_move(&mut self, m: Move) {
        self.moves.append(m);
    }

    /// Replace the log with [`RANDOM_SCRAMBLE_LEN`] random moves.
    ///
    /// The previous solution no longer matches the log and is cleared.
    pub fn generate_random_scramble(&mut self) {
        self.moves.clear();
        self.moves.append_random(&mut self.source, RANDOM_SCRAMBLE_LEN);
        self.solution.clear();
        debug!(scramble = %self.moves.serialize(), "generated random scramble");
    }

    /// Start a solve session.
    ///
    /// An empty log is a user input error: the error text is set and nothing
    /// else changes.
    pub fn solve(&mut self) -> Result<SolveTicket, SolveError> {
        if self.moves.is_empty() {
            let err = SolveError::EmptyScramble;
            self.error = err.to_string();
            return Err(err);
        }

        self.begin_session();
        self.phase = Phase::InFlight {
            session: self.session_id,
        };
        self.solution.clear();
        self.error.clear();

        let ticket = SolveTicket {
            session: self.session_id,
            scramble: self.moves.serialize(),
        };
        info!(session = ticket.session, scramble = %ticket.scramble, "solve requested");
        Ok(ticket)
    }

    /// Apply the solver's answer for `session`.
    ///
    /// Returns `false` when the answer is stale (its session was superseded by
    /// a later solve or a reset) and was ignored.
    pub fn complete(&mut self, session: u32, result: Result<SolveOutcome, SolveError>) -> bool {
        if self.phase != (Phase::InFlight { session }) {
            debug!(
                session,
                current = self.session_id,
                "dropping stale solver answer"
            );
            return false;
        }
        self.phase = Phase::Idle;

        match result {
            Ok(outcome) => {
                self.solution = outcome.solution.unwrap_or_default();
                if let Some(scrambled) = outcome.scrambled {
                    self.cube.replace(&scrambled);
                }
                if let Some(solved) = outcome.solved {
                    self.pending_reveal = Some(PendingReveal {
                        session,
                        remaining_ms: self.reveal_delay_ms,
                        cube: solved,
                    });
                }
                info!(session, solution = %self.solution, "solve completed");
            }
            Err(err) => {
                if let SolveError::Transport { detail } = &err {
                    warn!(session, %detail, "solver request failed");
                } else {
                    warn!(session, error = %err, "solver rejected scramble");
                }
                self.error = err.to_string();
            }
        }
        true
    }

    /// Advance the clock by `elapsed_ms`; fires the pending reveal when due.
    pub fn tick(&mut self, elapsed_ms: u32) {
        let Some(pending) = self.pending_reveal.as_mut() else {
            return;
        };
        pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
        if pending.remaining_ms > 0 {
            return;
        }

        if let Some(reveal) = self.pending_reveal.take() {
            if reveal.session == self.session_id {
                self.cube.replace(&reveal.cube);
                debug!(session = reveal.session, "revealed solved cube");
            }
        }
    }

    /// Back to the solved cube with an empty log, solution and error.
    ///
    /// Any pending reveal is cancelled and an in-flight answer will be ignored.
    pub fn reset(&mut self) {
        self.begin_session();
        self.phase = Phase::Idle;
        self.cube = CubeState::initial();
        self.moves.clear();
        self.solution.clear();
        self.error.clear();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill `out`, reusing its string allocations.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.cube = self.cube;
        self.moves.write_into(&mut out.scramble);
        out.move_count = self.moves.len();
        out.solution.clear();
        out.solution.push_str(&self.solution);
        out.error.clear();
        out.error.push_str(&self.error);
        out.loading = self.loading();
        out.reveal_pending = self.reveal_pending();
        out.session_id = self.session_id;
    }

    fn begin_session(&mut self) {
        self.session_id = self.session_id.wrapping_add(1);
        if let Some(reveal) = self.pending_reveal.take() {
            debug!(session = reveal.session, "cancelled pending reveal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Face};

    fn red_cube() -> CubePatch {
        let mut patch = CubePatch::new();
        for face in Face::ALL {
            patch.set(face, [Some(Color::Red); 9]);
        }
        patch
    }

    #[test]
    fn add_move_then_solve_issues_ticket() {
        let mut c = SolveController::new(1);
        c.add_move(Move::cw(Face::Right));
        c.add_move(Move::ccw(Face::Up));

        let ticket = c.solve().unwrap();
        assert_eq!(ticket.scramble, "R U'");
        assert_eq!(ticket.session, c.session_id());
        assert!(c.loading());
    }

    #[test]
    fn failed_answer_keeps_cube() {
        let mut c = SolveController::new(1);
        c.add_move(Move::cw(Face::Front));
        let ticket = c.solve().unwrap();

        assert!(c.complete(ticket.session, Err(SolveError::transport("refused"))));
        assert!(!c.loading());
        assert_eq!(c.error(), Some("Something went wrong"));
        assert_eq!(c.cube(), &CubeState::initial());
        assert_eq!(c.solution(), None);
    }

    #[test]
    fn zero_delay_reveals_on_next_tick() {
        let mut c = SolveController::new(1).with_reveal_delay_ms(0);
        c.add_move(Move::cw(Face::Front));
        let ticket = c.solve().unwrap();
        c.complete(
            ticket.session,
            Ok(SolveOutcome {
                solved: Some(red_cube()),
                ..Default::default()
            }),
        );
        assert!(c.reveal_pending());
        c.tick(0);
        assert!(!c.reveal_pending());
        assert_eq!(c.cube().face(Face::Up)[0], Some(Color::Red));
    }

    #[test]
    fn apply_action_only_returns_ticket_for_accepted_solve() {
        let mut c = SolveController::new(1);
        assert_eq!(c.apply_action(UserAction::Solve), None);
        assert_eq!(c.error(), Some("Please add some moves first."));

        assert_eq!(c.apply_action(UserAction::Scramble), None);
        assert_eq!(c.moves().len(), RANDOM_SCRAMBLE_LEN);
        assert!(c.apply_action(UserAction::Solve).is_some());
    }
}
