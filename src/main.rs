//! Terminal cube solver (default binary).
//!
//! Build a scramble from the keyboard, send it to the solver service and
//! watch the scrambled and solved cube come back. Input comes from crossterm,
//! drawing goes through the framebuffer renderer, and solver requests run on
//! a background tokio runtime.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cube_solver_tui::client::{SolveCompletion, SolverConfig, SolverRuntime};
use cube_solver_tui::core::{SessionSnapshot, SolveController};
use cube_solver_tui::input::{handle_key_event, should_quit};
use cube_solver_tui::term::{CubeView, FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use cube_solver_tui::types::TICK_MS;

/// Redraw an unchanged screen at most this often.
const STATIC_REFRESH_MS: u64 = 250;

fn main() -> Result<()> {
    let (config, config_err) = SolverConfig::try_load();
    init_tracing(config.log_path.as_deref());
    if let Some(err) = config_err {
        tracing::warn!("{err}; using defaults");
    }

    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut runtime = SolverRuntime::start(&config)?;
    tracing::info!(endpoint = runtime.endpoint(), seed, "starting cube solver");

    let mut term = TerminalRenderer::new();
    if let Err(err) = term.enter() {
        let _ = term.exit();
        return Err(err);
    }

    let result = run(&mut term, &mut runtime, SolveController::new(seed));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!("exiting on error: {err:#}");
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    runtime: &mut SolverRuntime,
    mut controller: SolveController,
) -> Result<()> {
    let view = CubeView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = SessionSnapshot::default();
    let mut throttle = RenderThrottle::new(STATIC_REFRESH_MS);
    let mut viewport = terminal_viewport();

    let started = Instant::now();
    let mut clock = TickClock::default();
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));

    loop {
        let now_ms = elapsed_ms(started);
        step(&mut controller, &mut clock, now_ms, std::iter::from_fn(|| runtime.try_recv()));

        // Render.
        let size = terminal_viewport();
        if size != viewport {
            viewport = size;
            term.invalidate();
            throttle.invalidate();
        }
        controller.snapshot_into(&mut snap);
        if throttle.should_render(now_ms, snap.fingerprint()) {
            view.render_into(&snap, viewport, &mut fb);
            term.present(&fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(Duration::from_millis(
            elapsed_ms(started).saturating_sub(clock.last_tick_ms),
        ));
        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    if let Some(ticket) = controller.apply_action(action) {
                        runtime.submit(ticket);
                    }
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                throttle.invalidate();
            }
            _ => {}
        }
    }
}

/// Fixed-step clock over milliseconds since startup.
#[derive(Debug, Default)]
struct TickClock {
    last_tick_ms: u64,
}

impl TickClock {
    /// Time since the last tick once a full step has passed.
    fn due(&mut self, now_ms: u64) -> Option<u32> {
        let elapsed = now_ms.saturating_sub(self.last_tick_ms);
        if elapsed < u64::from(TICK_MS) {
            return None;
        }
        self.last_tick_ms = now_ms;
        Some(u32::try_from(elapsed).unwrap_or(u32::MAX))
    }

    fn restart(&mut self, now_ms: u64) {
        self.last_tick_ms = now_ms;
    }
}

/// Advance timers, then apply solver answers.
///
/// An accepted answer starts its reveal countdown at `now_ms`, so time spent
/// before the answer arrived never counts toward the reveal.
fn step(
    controller: &mut SolveController,
    clock: &mut TickClock,
    now_ms: u64,
    completions: impl IntoIterator<Item = SolveCompletion>,
) {
    if let Some(elapsed) = clock.due(now_ms) {
        controller.tick(elapsed);
    }
    let mut accepted = false;
    for done in completions {
        accepted |= controller.complete(done.session, done.result);
    }
    if accepted {
        clock.restart(now_ms);
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn terminal_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Log to `log_path` when configured. Without a log file nothing is
/// written, since stdout and stderr belong to the TUI.
fn init_tracing(log_path: Option<&Path>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(path) = log_path else {
        tracing_subscriber::registry().with(env_filter).init();
        return;
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        let _ = fs::create_dir_all(parent);
    }
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
        }
        Err(_) => tracing_subscriber::registry().with(env_filter).init(),
    }
}
