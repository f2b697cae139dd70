//! Move log - ordered move history sent to the solver

use crate::rng::MoveSource;
use crate::types::Move;

/// A token that is not one of the twelve moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown move token `{token}`")]
pub struct ParseMoveError {
    pub token: String,
}

/// Ordered move sequence; insertion order is the scramble order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from its serialized form (tokens split on whitespace).
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_solver_core::MoveLog;
    ///
    /// let log = MoveLog::parse("R U R' U'").unwrap();
    /// assert_eq!(log.len(), 4);
    /// assert_eq!(log.serialize(), "R U R' U'");
    /// assert!(MoveLog::parse("R X").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseMoveError> {
        let moves = text
            .split_whitespace()
            .map(|token| {
                Move::from_str(token).ok_or_else(|| ParseMoveError {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { moves })
    }

    pub fn append(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Append `count` moves drawn from `source`.
    pub fn append_random(&mut self, source: &mut impl MoveSource, count: usize) {
        self.moves.reserve(count);
        for _ in 0..count {
            self.moves.push(source.next_move());
        }
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Tokens joined by single spaces; this exact string is the wire payload.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(self.moves.len() * 3);
        self.write_into(&mut out);
        out
    }

    /// Like [`serialize`](Self::serialize) but reusing `out`.
    pub fn write_into(&self, out: &mut String) {
        out.clear();
        for (i, m) in self.moves.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(m.as_str());
        }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}
