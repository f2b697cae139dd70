//! Solver runtime integration.
//!
//! Bridges the sync UI loop with async solver requests. Requests run on a
//! private tokio runtime; their answers are queued and drained by the UI
//! thread, which stays the only writer of controller state.

use anyhow::{Context, Result};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;
use tracing::debug;

use crate::config::SolverConfig;
use crate::core::{SolveError, SolveOutcome, SolveTicket};
use crate::solver::SolverClient;

/// A finished request, tagged with the session that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveCompletion {
    pub session: u32,
    pub result: Result<SolveOutcome, SolveError>,
}

/// Running solver runtime.
pub struct SolverRuntime {
    rt: Runtime,
    client: SolverClient,
    done_tx: mpsc::UnboundedSender<SolveCompletion>,
    done_rx: mpsc::UnboundedReceiver<SolveCompletion>,
}

impl SolverRuntime {
    pub fn start(config: &SolverConfig) -> Result<Self> {
        let client = SolverClient::new(config).context("failed to build solver HTTP client")?;
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("cube-solver-io")
            .enable_all()
            .build()
            .context("failed to create tokio runtime")?;
        let (done_tx, done_rx) = mpsc::unbounded_channel();

        Ok(Self {
            rt,
            client,
            done_tx,
            done_rx,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Send the ticket's scramble in the background.
    ///
    /// No retry and no cancellation: a superseded request still completes and
    /// its answer is discarded by the controller.
    pub fn submit(&self, ticket: SolveTicket) {
        let client = self.client.clone();
        let done_tx = self.done_tx.clone();
        debug!(session = ticket.session, "submitting solve request");
        self.rt.spawn(async move {
            let result = client.solve(&ticket.scramble).await;
            let _ = done_tx.send(SolveCompletion {
                session: ticket.session,
                result,
            });
        });
    }

    pub fn try_recv(&mut self) -> Option<SolveCompletion> {
        self.done_rx.try_recv().ok()
    }
}
