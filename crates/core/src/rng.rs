//! RNG module - uniform random move generation
//!
//! Scrambles draw each move independently and uniformly from the 12-token
//! catalog. The generator is not cryptographically secure; it only has to
//! be cheap, seedable, and reach every token.
//!
//! [`MoveSource`] is the seam the controller draws from, so tests can swap
//! in a scripted sequence.

use crate::types::{Move, MOVE_COUNT};

/// Anything that can produce an endless stream of move tokens.
pub trait MoveSource {
    fn next_move(&mut self) -> Move;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales from the high bits; the low bits of an LCG cycle with a short
    /// period and would bias a plain `% max`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl MoveSource for SimpleRng {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.next_range(MOVE_COUNT as u32) as usize]
    }
}

/// Replays a fixed list of moves in a loop.
#[derive(Debug, Clone)]
pub struct ScriptedMoves {
    moves: Vec<Move>,
    cursor: usize,
}

impl ScriptedMoves {
    /// Panics if `moves` is empty.
    pub fn new(moves: Vec<Move>) -> Self {
        assert!(!moves.is_empty(), "scripted move source needs at least one move");
        Self { moves, cursor: 0 }
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Move {
        let m = self.moves[self.cursor];
        self.cursor = (self.cursor + 1) % self.moves.len();
        m
    }
}
