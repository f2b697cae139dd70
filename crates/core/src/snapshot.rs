//! Session snapshot - the render-facing copy of controller state
//!
//! The terminal loop refills one snapshot per frame with
//! [`SolveController::snapshot_into`](crate::SolveController::snapshot_into)
//! and skips drawing when [`SessionSnapshot::fingerprint`] is unchanged.

use std::hash::{Hash, Hasher};

use crate::cube_state::CubeState;

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub cube: CubeState,
    /// Serialized move log.
    pub scramble: String,
    pub move_count: usize,
    /// Empty when there is no solution to show.
    pub solution: String,
    /// Empty when there is no error to show.
    pub error: String,
    pub loading: bool,
    pub reveal_pending: bool,
    pub session_id: u32,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.cube = CubeState::initial();
        self.scramble.clear();
        self.move_count = 0;
        self.solution.clear();
        self.error.clear();
        self.loading = false;
        self.reveal_pending = false;
        self.session_id = 0;
    }

    /// Stable hash of the visible state, used to skip redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1aHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}

/// Stable 64-bit FNV-1a hasher.
///
/// `DefaultHasher` output is not guaranteed stable across Rust versions.
#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_tracks_visible_changes() {
        let a = SessionSnapshot::default();
        let mut b = a.clone();
        assert_eq!(a.fingerprint(), b.fingerprint());

        b.solution.push_str("R U");
        assert_ne!(a.fingerprint(), b.fingerprint());

        b.clear();
        assert_eq!(a.fingerprint(), b.fingerprint());
    }
}
