//! Piece - a falling unit and its derived occupied cells
//!
//! A piece owns its kind, rotation, and anchor. The occupied-cell set is a
//! derived cache recomputed after every anchor or rotation change; collision,
//! landing, and snapshot logic read only the cache. `translate` and `rotate`
//! perform no validation - the board validates candidate copies before
//! committing them.

use gridfall_types::{Cell, PieceKind, Rotation};

use crate::shape::offsets;

/// A single piece, active or settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: Rotation,
    anchor: Cell,
    occupied: [Cell; 4],
}

impl Piece {
    /// Create a piece in its `Zero` rotation at the given anchor
    pub fn new(kind: PieceKind, anchor: Cell) -> Self {
        let mut piece = Self {
            kind,
            rotation: Rotation::Zero,
            anchor,
            occupied: [anchor; 4],
        };
        piece.refresh_occupied();
        piece
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn anchor(&self) -> Cell {
        self.anchor
    }

    /// The cells this piece occupies in grid space
    pub fn occupied_cells(&self) -> &[Cell; 4] {
        &self.occupied
    }

    /// Move the anchor by the given deltas
    ///
    /// No bounds checking; the caller validates the result.
    pub fn translate(&mut self, dcol: i8, drow: i8) {
        self.anchor = self.anchor.translated(dcol, drow);
        self.refresh_occupied();
    }

    /// Advance to the next rotation state in the cycle
    ///
    /// No bounds or collision checking; the caller validates the result.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.next();
        self.refresh_occupied();
    }

    /// Whether this piece occupies any cell the other piece occupies
    pub fn overlaps(&self, other: &Piece) -> bool {
        self.occupied
            .iter()
            .any(|cell| other.occupied.contains(cell))
    }

    /// The bottom-most occupied row
    pub fn lowest_row(&self) -> i8 {
        // occupied is never empty, max() always yields
        self.occupied
            .iter()
            .map(|cell| cell.row)
            .max()
            .unwrap_or(self.anchor.row)
    }

    fn refresh_occupied(&mut self) {
        let shape = offsets(self.kind, self.rotation);
        for (slot, &(dcol, drow)) in self.occupied.iter_mut().zip(shape.iter()) {
            *slot = self.anchor.translated(dcol, drow);
        }
    }
}
