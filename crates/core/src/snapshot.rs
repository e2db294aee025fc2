//! Read-only board views published to renderers and hosts
//!
//! The simulation never hands out references into its own state. Renderers
//! take an owned [`BoardSnapshot`] under the same exclusion that guards board
//! mutation and paint from that; the serde derives let a host ship the same
//! view over any transport.

use serde::{Deserialize, Serialize};

use gridfall_types::{Cell, PieceKind, Rotation};

use crate::piece::Piece;

/// One piece as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub cells: [Cell; 4],
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind(),
            rotation: piece.rotation(),
            cells: *piece.occupied_cells(),
        }
    }
}

/// Immutable view of the whole board at one instant
///
/// `pieces` preserves board order (oldest settled piece first); `active`
/// indexes into it when a piece is currently falling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: u8,
    pub height: u8,
    pub pieces: Vec<PieceSnapshot>,
    pub active: Option<usize>,
    pub game_over: bool,
}

impl BoardSnapshot {
    /// The kind occupying a cell, if any
    ///
    /// Linear over pieces; fine for per-frame painting of small grids.
    pub fn kind_at(&self, cell: Cell) -> Option<PieceKind> {
        self.pieces
            .iter()
            .find(|piece| piece.cells.contains(&cell))
            .map(|piece| piece.kind)
    }

    /// Snapshot of the currently falling piece, if any
    pub fn active_piece(&self) -> Option<&PieceSnapshot> {
        self.active.and_then(|idx| self.pieces.get(idx))
    }
}
