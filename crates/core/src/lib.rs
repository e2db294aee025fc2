//! Core simulation - pure, deterministic, and testable
//!
//! This crate holds the whole falling-piece state machine and nothing else:
//! no rendering, no input devices, no timers. The host application drives it
//! with one [`Board::tick`] per simulation step and one
//! [`Board::rotate_active`] per rotation event, and paints from
//! [`Board::snapshot`] values.
//!
//! # Module structure
//!
//! - [`shape`]: literal (kind, rotation) -> cell-offset tables
//! - [`piece`]: the piece model and its derived occupied-cell cache
//! - [`board`]: the grid, collision checks, and the landing transition
//! - [`rng`]: seeded LCG behind the spawn rule
//! - [`snapshot`]: owned read-only views for renderers and hosts
//!
//! # Example
//!
//! ```
//! use gridfall_core::Board;
//! use gridfall_types::{GRID_HEIGHT, GRID_WIDTH};
//!
//! let mut board = Board::with_seed(GRID_WIDTH, GRID_HEIGHT, 42);
//!
//! // First tick spawns; later ticks advance the piece one row.
//! board.tick();
//! board.rotate_active();
//! let landed = board.tick();
//!
//! let view = board.snapshot();
//! assert_eq!(view.pieces.len(), board.piece_count());
//! # let _ = landed;
//! ```

pub mod board;
pub mod piece;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use gridfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use shape::{offsets, spawn_offsets, CellOffset, PieceShape, SPAWN_MARGIN};
pub use snapshot::{BoardSnapshot, PieceSnapshot};
