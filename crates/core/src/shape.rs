//! Shape table - literal cell offsets per (kind, rotation)
//!
//! Offsets are relative to the piece anchor, which is the top-left bounding
//! cell of the `Zero` rotation form. All 28 combinations are fixed literal
//! tables; there is no matrix rotation and no kick logic. The functions are
//! stateless, so they are safe to call from any thread.

use gridfall_types::{PieceKind, Rotation};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the anchor
pub type PieceShape = [CellOffset; 4];

/// Get the cell offsets for a piece kind and rotation
pub fn offsets(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::Square => square_offsets(rotation),
        PieceKind::L => l_offsets(rotation),
        PieceKind::InvertedL => inverted_l_offsets(rotation),
        PieceKind::T => t_offsets(rotation),
        PieceKind::Line => line_offsets(rotation),
        PieceKind::Z => z_offsets(rotation),
        PieceKind::S => s_offsets(rotation),
    }
}

/// Square offsets (same for all rotations)
fn square_offsets(_rotation: Rotation) -> PieceShape {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

/// L offsets
fn l_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::Zero => [(0, 0), (0, 1), (0, 2), (1, 2)],
        Rotation::Clockwise => [(0, 0), (1, 0), (2, 0), (0, 1)],
        Rotation::Flipped => [(0, 0), (1, 0), (1, 1), (1, 2)],
        Rotation::CounterClockwise => [(2, 0), (0, 1), (1, 1), (2, 1)],
    }
}

/// InvertedL offsets (mirror of L)
fn inverted_l_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::Zero => [(1, 0), (1, 1), (1, 2), (0, 2)],
        Rotation::Clockwise => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::Flipped => [(0, 0), (1, 0), (0, 1), (0, 2)],
        Rotation::CounterClockwise => [(0, 0), (1, 0), (2, 0), (2, 1)],
    }
}

/// T offsets
fn t_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::Zero => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::Clockwise => [(0, 0), (0, 1), (1, 1), (0, 2)],
        Rotation::Flipped => [(0, 0), (1, 0), (2, 0), (1, 1)],
        Rotation::CounterClockwise => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

/// Line offsets
///
/// Rotation is a defined no-op for this kind: all four states resolve to the
/// same vertical column.
fn line_offsets(_rotation: Rotation) -> PieceShape {
    [(0, 0), (0, 1), (0, 2), (0, 3)]
}

/// Z offsets (only two distinct forms)
fn z_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::Zero | Rotation::Flipped => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::Clockwise | Rotation::CounterClockwise => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

/// S offsets (only two distinct forms, mirror of Z)
fn s_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::Zero | Rotation::Flipped => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::Clockwise | Rotation::CounterClockwise => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

/// Get the shape a freshly spawned piece starts with
pub fn spawn_offsets(kind: PieceKind) -> PieceShape {
    offsets(kind, Rotation::Zero)
}

/// Columns kept free at the right edge when choosing a spawn column
///
/// Spawn columns are drawn from `0..(width - SPAWN_MARGIN)` so every
/// `Zero`-rotation shape starts within the grid.
pub const SPAWN_MARGIN: u8 = 2;
