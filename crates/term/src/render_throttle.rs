//! Skip redundant frames.
//!
//! The cube screen is mostly static: between key presses and solver answers
//! nothing on it changes. A frame is drawn when the session fingerprint
//! changes, and otherwise at most once per refresh interval.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_interval_ms: u64,
    /// Time and fingerprint of the last frame drawn.
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last: None,
        }
    }

    /// Decide whether to render now; records the frame when it says yes.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let render = match self.last {
            None => true,
            Some((_, last_fp)) if last_fp != fingerprint => true,
            Some((at, _)) => now_ms.saturating_sub(at) >= self.refresh_interval_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }

    /// Make the next `should_render` return true.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
