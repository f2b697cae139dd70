//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (cube model, terminal rendering, solver wire protocol).
//!
//! # Cube Dimensions
//!
//! A 3x3 cube has six faces of nine stickers each. A face is stored as a
//! row-major raster: index 0 is the top-left sticker, index 8 the bottom-right.
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SOLVE_REVEAL_DELAY_MS` | 1000 | Pause between the scrambled and solved snapshot |
//!
//! # Examples
//!
//! ```
//! use cube_solver_types::{Color, Direction, Face, Move, FACE_COUNT};
//!
//! // Faces and their home colors
//! assert_eq!(Face::Up.home_color(), Color::White);
//! assert_eq!(Face::ALL.len(), FACE_COUNT);
//!
//! // Parse move tokens
//! let m = Move::from_str("R'").unwrap();
//! assert_eq!(m.face, Face::Right);
//! assert_eq!(m.direction, Direction::CounterClockwise);
//! assert_eq!(m.as_str(), "R'");
//! ```

/// Number of faces on the cube.
pub const FACE_COUNT: usize = 6;

/// Stickers per face (3x3 raster).
pub const FACE_STICKERS: usize = 9;

/// Number of distinct move tokens (one clockwise and one prime per face).
pub const MOVE_COUNT: usize = 12;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay between showing the scrambled snapshot and the solved snapshot.
pub const SOLVE_REVEAL_DELAY_MS: u32 = 1000;

/// Number of moves appended by a random scramble.
pub const RANDOM_SCRAMBLE_LEN: usize = 20;

/// Message shown when a solve is requested with an empty move log.
pub const EMPTY_SCRAMBLE_MESSAGE: &str = "Please add some moves first.";

/// Message shown when the solver fails without a usable error text.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// One of the six outer faces of the cube.
///
/// [`Face::ALL`] is the display order: Up, Left, Front, Right, Back, Down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Up,
    Left,
    Front,
    Right,
    Back,
    Down,
}

impl Face {
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Up,
        Face::Left,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Down,
    ];

    /// Parse a face from its single-letter key (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_solver_types::Face;
    ///
    /// assert_eq!(Face::from_str("U"), Some(Face::Up));
    /// assert_eq!(Face::from_str("b"), Some(Face::Back));
    /// assert_eq!(Face::from_str("X"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "U" | "u" => Some(Face::Up),
            "L" | "l" => Some(Face::Left),
            "F" | "f" => Some(Face::Front),
            "R" | "r" => Some(Face::Right),
            "B" | "b" => Some(Face::Back),
            "D" | "d" => Some(Face::Down),
            _ => None,
        }
    }

    /// Single-letter key used on the wire and in move tokens
    pub fn as_str(&self) -> &'static str {
        match self {
            Face::Up => "U",
            Face::Left => "L",
            Face::Front => "F",
            Face::Right => "R",
            Face::Back => "B",
            Face::Down => "D",
        }
    }

    /// Position in [`Face::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Face::Up => 0,
            Face::Left => 1,
            Face::Front => 2,
            Face::Right => 3,
            Face::Back => 4,
            Face::Down => 5,
        }
    }

    /// Color every sticker of this face has on a solved cube
    pub fn home_color(&self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Left => Color::Orange,
            Face::Front => Color::Green,
            Face::Right => Color::Red,
            Face::Back => Color::Blue,
            Face::Down => Color::Yellow,
        }
    }
}

/// Sticker palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Orange,
    Green,
    Red,
    Blue,
    Yellow,
}

impl Color {
    pub const ALL: [Color; FACE_COUNT] = [
        Color::White,
        Color::Orange,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::Yellow,
    ];

    /// Parse a lowercase wire color name
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_solver_types::Color;
    ///
    /// assert_eq!(Color::from_str("white"), Some(Color::White));
    /// assert_eq!(Color::from_str("Red"), None);
    /// assert_eq!(Color::from_str("purple"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "white" => Some(Color::White),
            "orange" => Some(Color::Orange),
            "green" => Some(Color::Green),
            "red" => Some(Color::Red),
            "blue" => Some(Color::Blue),
            "yellow" => Some(Color::Yellow),
            _ => None,
        }
    }

    /// Lowercase name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Orange => "orange",
            Color::Green => "green",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
        }
    }
}

/// A single sticker
///
/// - `None`: unknown color (rendered with a neutral fallback)
/// - `Some(Color)`: a palette color
pub type Sticker = Option<Color>;

/// Quarter-turn direction of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    /// Written with a trailing `'` ("prime")
    CounterClockwise,
}

/// A quarter-turn of one face
///
/// The core never interprets a move geometrically; it is an opaque token
/// forwarded to the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    /// All move tokens in catalog order: `U U' D D' L L' R R' F F' B B'`
    pub const ALL: [Move; MOVE_COUNT] = [
        Move::cw(Face::Up),
        Move::ccw(Face::Up),
        Move::cw(Face::Down),
        Move::ccw(Face::Down),
        Move::cw(Face::Left),
        Move::ccw(Face::Left),
        Move::cw(Face::Right),
        Move::ccw(Face::Right),
        Move::cw(Face::Front),
        Move::ccw(Face::Front),
        Move::cw(Face::Back),
        Move::ccw(Face::Back),
    ];

    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    pub const fn cw(face: Face) -> Self {
        Self::new(face, Direction::Clockwise)
    }

    pub const fn ccw(face: Face) -> Self {
        Self::new(face, Direction::CounterClockwise)
    }

    /// Parse a move token such as `"F"` or `"F'"`
    ///
    /// Face letters are case-sensitive here: tokens are exactly what the
    /// solver accepts.
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_solver_types::{Face, Move};
    ///
    /// assert_eq!(Move::from_str("U"), Some(Move::cw(Face::Up)));
    /// assert_eq!(Move::from_str("B'"), Some(Move::ccw(Face::Back)));
    /// assert_eq!(Move::from_str("u"), None);
    /// assert_eq!(Move::from_str("U2"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        Move::ALL.iter().copied().find(|m| m.as_str() == s)
    }

    /// Wire token for this move
    pub fn as_str(&self) -> &'static str {
        match (self.face, self.direction) {
            (Face::Up, Direction::Clockwise) => "U",
            (Face::Up, Direction::CounterClockwise) => "U'",
            (Face::Left, Direction::Clockwise) => "L",
            (Face::Left, Direction::CounterClockwise) => "L'",
            (Face::Front, Direction::Clockwise) => "F",
            (Face::Front, Direction::CounterClockwise) => "F'",
            (Face::Right, Direction::Clockwise) => "R",
            (Face::Right, Direction::CounterClockwise) => "R'",
            (Face::Back, Direction::Clockwise) => "B",
            (Face::Back, Direction::CounterClockwise) => "B'",
            (Face::Down, Direction::Clockwise) => "D",
            (Face::Down, Direction::CounterClockwise) => "D'",
        }
    }

    /// Position in [`Move::ALL`]
    pub fn index(&self) -> usize {
        let pair = match self.face {
            Face::Up => 0,
            Face::Down => 1,
            Face::Left => 2,
            Face::Right => 3,
            Face::Front => 4,
            Face::Back => 5,
        };
        match self.direction {
            Direction::Clockwise => pair * 2,
            Direction::CounterClockwise => pair * 2 + 1,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing actions, independent of how they are triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Append one move to the log
    AddMove(Move),
    /// Replace the log with a fresh random scramble
    Scramble,
    /// Send the log to the solver
    Solve,
    /// Restore the solved cube and clear everything
    Reset,
}

impl UserAction {
    /// Short name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            UserAction::AddMove(_) => "addMove",
            UserAction::Scramble => "scramble",
            UserAction::Solve => "solve",
            UserAction::Reset => "reset",
        }
    }
}
