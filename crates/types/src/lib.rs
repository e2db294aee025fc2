//! Shared data types and constants for the gridfall simulation
//!
//! Everything in this crate is a pure value type usable from any context:
//! the simulation core, a renderer consuming snapshots, or a host process
//! shipping observations over a wire.
//!
//! # Grid conventions
//!
//! - **Columns** run left to right, `0..width` (default width 10)
//! - **Rows** run top to bottom, `0..height` (default height 20)
//! - A piece's **anchor** is the top-left bounding cell of its `Zero`
//!   rotation form; shape offsets are relative to it
//!
//! # Examples
//!
//! ```
//! use gridfall_types::{Cell, PieceKind, Rotation};
//!
//! let cell = Cell::new(3, 5);
//! assert_eq!(cell.translated(1, 2), Cell::new(4, 7));
//!
//! // The rotation cycle is fixed: Zero -> Clockwise -> Flipped -> CounterClockwise -> Zero
//! let r = Rotation::Zero.next();
//! assert_eq!(r, Rotation::Clockwise);
//! assert_eq!(r.next().next().next(), Rotation::Zero);
//!
//! assert_eq!(PieceKind::from_str("inverted_l"), Some(PieceKind::InvertedL));
//! ```

use serde::{Deserialize, Serialize};

/// Default grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Default grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Default host frame rate (frames per second)
///
/// Pacing lives entirely in the host; this is the reference rate the
/// simulation was tuned against.
pub const DEFAULT_FPS: u32 = 10;

/// Default fall speed in rows per second
///
/// At `DEFAULT_FPS` this means the host calls `tick` once every
/// `DEFAULT_FPS / DEFAULT_FALL_SPEED` frames.
pub const DEFAULT_FALL_SPEED: u32 = 2;

/// A single grid cell addressed by (column, row)
///
/// Immutable value type; two cells with equal coordinates are the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i8,
    pub row: i8,
}

impl Cell {
    /// Create a cell at (column, row)
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// A copy of this cell moved by the given deltas
    pub const fn translated(self, dcol: i8, drow: i8) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }
}

/// The seven piece kinds
///
/// Each kind has a distinct shape and display color:
/// - **Square**: orange, 2x2 block
/// - **L**: dark green, L-shaped
/// - **InvertedL**: yellow, mirrored L
/// - **T**: cyan, T-shaped
/// - **Line**: dark red, 4-cell column
/// - **Z**: lime green, Z-shaped
/// - **S**: blue, S-shaped (mirror of Z)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Square,
    L,
    InvertedL,
    T,
    Line,
    Z,
    S,
}

impl PieceKind {
    /// All kinds, in spawn-index order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Square,
        PieceKind::L,
        PieceKind::InvertedL,
        PieceKind::T,
        PieceKind::Line,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use gridfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("square"), Some(PieceKind::Square));
    /// assert_eq!(PieceKind::from_str("T"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" => Some(PieceKind::Square),
            "l" => Some(PieceKind::L),
            "inverted_l" | "invertedl" => Some(PieceKind::InvertedL),
            "t" => Some(PieceKind::T),
            "line" => Some(PieceKind::Line),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Square => "square",
            PieceKind::L => "l",
            PieceKind::InvertedL => "inverted_l",
            PieceKind::T => "t",
            PieceKind::Line => "line",
            PieceKind::Z => "z",
            PieceKind::S => "s",
        }
    }

    /// Canonical display color for this kind as (r, g, b)
    ///
    /// Renderers may use this palette or substitute their own.
    pub const fn color_rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::Square => (255, 128, 64),
            PieceKind::L => (5, 100, 5),
            PieceKind::InvertedL => (255, 255, 150),
            PieceKind::T => (128, 255, 255),
            PieceKind::Line => (170, 0, 0),
            PieceKind::Z => (75, 255, 75),
            PieceKind::S => (0, 128, 255),
        }
    }
}

/// Rotation states of a piece
///
/// The cycle is fixed and single-direction:
/// `Zero → Clockwise → Flipped → CounterClockwise → Zero`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    Zero,
    Clockwise,
    Flipped,
    CounterClockwise,
}

impl Rotation {
    /// All rotation states, in cycle order
    pub const ALL: [Rotation; 4] = [
        Rotation::Zero,
        Rotation::Clockwise,
        Rotation::Flipped,
        Rotation::CounterClockwise,
    ];

    /// Advance one step in the rotation cycle
    ///
    /// # Examples
    ///
    /// ```
    /// use gridfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::Zero.next(), Rotation::Clockwise);
    /// assert_eq!(Rotation::Clockwise.next(), Rotation::Flipped);
    /// assert_eq!(Rotation::Flipped.next(), Rotation::CounterClockwise);
    /// assert_eq!(Rotation::CounterClockwise.next(), Rotation::Zero);
    /// ```
    pub fn next(&self) -> Self {
        match self {
            Rotation::Zero => Rotation::Clockwise,
            Rotation::Clockwise => Rotation::Flipped,
            Rotation::Flipped => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Zero,
        }
    }

    /// Step backwards through the rotation cycle
    pub fn prev(&self) -> Self {
        match self {
            Rotation::Zero => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Flipped,
            Rotation::Flipped => Rotation::Clockwise,
            Rotation::Clockwise => Rotation::Zero,
        }
    }

    /// Parse rotation from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "zero" => Some(Rotation::Zero),
            "clockwise" | "cw" => Some(Rotation::Clockwise),
            "flipped" => Some(Rotation::Flipped),
            "counter_clockwise" | "counterclockwise" | "ccw" => Some(Rotation::CounterClockwise),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::Zero => "zero",
            Rotation::Clockwise => "clockwise",
            Rotation::Flipped => "flipped",
            Rotation::CounterClockwise => "counter_clockwise",
        }
    }
}
