//! Board - the grid, its pieces, and the landing state machine
//!
//! The board owns every piece of the session: the settled ones and at most
//! one active piece, kept in one ordered list. Settled pieces never move and
//! never overlap each other; the list only grows (there is no row clearing).
//!
//! # External contract
//!
//! The board has no internal locking. [`tick`](Board::tick) and
//! [`rotate_active`](Board::rotate_active) mutate the active piece, so a host
//! driving them from separate timer and input threads must serialize all
//! board access behind one mutex (or a single owning thread). Renderers read
//! [`snapshot`](Board::snapshot) values taken under that same exclusion
//! instead of holding references into the board.

use gridfall_types::{Cell, PieceKind};

use crate::piece::Piece;
use crate::rng::{clock_seed, SimpleRng};
use crate::shape::SPAWN_MARGIN;
use crate::snapshot::{BoardSnapshot, PieceSnapshot};

/// The simulation board
#[derive(Debug, Clone)]
pub struct Board {
    width: u8,
    height: u8,
    pieces: Vec<Piece>,
    active: Option<usize>,
    rng: SimpleRng,
    game_over: bool,
}

impl Board {
    /// Create an empty board, seeding spawns from the system clock
    pub fn new(width: u8, height: u8) -> Self {
        Self::with_seed(width, height, clock_seed())
    }

    /// Create an empty board with a fixed spawn seed
    ///
    /// Same seed, same spawn sequence; used by tests and benches.
    ///
    /// # Panics
    ///
    /// Panics if the grid is too narrow to spawn into
    /// (`width <= SPAWN_MARGIN`), has no rows, or does not fit the `i8`
    /// cell-coordinate range.
    pub fn with_seed(width: u8, height: u8, seed: u32) -> Self {
        assert!(
            width > SPAWN_MARGIN && height > 0,
            "grid must be at least {}x1",
            SPAWN_MARGIN + 1
        );
        assert!(
            width <= i8::MAX as u8 && height <= i8::MAX as u8,
            "grid dimensions must fit cell coordinates"
        );
        Self {
            width,
            height,
            pieces: Vec::new(),
            active: None,
            rng: SimpleRng::new(seed),
            game_over: false,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Total number of pieces on the board, settled plus active
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Whether a spawn was rejected because its cells were already taken
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The currently falling piece, if any
    pub fn active_piece(&self) -> Option<&Piece> {
        self.active.map(|idx| &self.pieces[idx])
    }

    /// Iterate over the settled pieces in board order
    pub fn settled_pieces(&self) -> impl Iterator<Item = &Piece> {
        let active = self.active;
        self.pieces
            .iter()
            .enumerate()
            .filter(move |(idx, _)| Some(*idx) != active)
            .map(|(_, piece)| piece)
    }

    /// Advance the simulation by one step
    ///
    /// The active piece moves down one row. If the move would overlap a
    /// settled piece or pass the floor, the piece stays put and settles, and
    /// a new active piece spawns in the same step. Returns whether a landing
    /// happened this tick.
    ///
    /// With no active piece the step only spawns one.
    pub fn tick(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let Some(idx) = self.active else {
            self.spawn_random();
            return false;
        };

        let mut candidate = self.pieces[idx];
        candidate.translate(0, 1);

        if self.overlaps_settled(&candidate, Some(idx)) || self.past_floor(&candidate) {
            // The piece settles where it was; the slot empties and refills.
            self.active = None;
            self.spawn_random();
            return true;
        }

        self.pieces[idx] = candidate;
        false
    }

    /// Rotate the active piece one step in the rotation cycle
    ///
    /// There are no wall kicks: a rotation that would leave the grid or
    /// overlap a settled piece is rejected and the piece keeps its current
    /// rotation. Returns whether the rotation was applied.
    pub fn rotate_active(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(idx) = self.active else {
            return false;
        };

        let mut candidate = self.pieces[idx];
        candidate.rotate();

        if !self.in_bounds(&candidate) || self.overlaps_settled(&candidate, Some(idx)) {
            return false;
        }

        self.pieces[idx] = candidate;
        true
    }

    /// Spawn a specific piece as the active piece
    ///
    /// Host- and test-controlled alternative to the random spawn. Rejected
    /// (returning `false`, state untouched) when a piece is already falling,
    /// the game is over, or the piece would start outside the grid or on top
    /// of a settled piece.
    pub fn spawn_at(&mut self, kind: PieceKind, anchor: Cell) -> bool {
        if self.game_over || self.active.is_some() {
            return false;
        }
        let piece = Piece::new(kind, anchor);
        if !self.in_bounds(&piece) || self.overlaps_settled(&piece, None) {
            return false;
        }
        self.active = Some(self.pieces.len());
        self.pieces.push(piece);
        true
    }

    /// Add a settled piece directly, e.g. to preload a layout
    ///
    /// Rejected (returning `false`) when the piece would leave the grid or
    /// overlap any existing piece, preserving the disjointness invariant.
    pub fn settle_at(&mut self, kind: PieceKind, anchor: Cell) -> bool {
        let piece = Piece::new(kind, anchor);
        if !self.in_bounds(&piece) {
            return false;
        }
        if self.pieces.iter().any(|other| piece.overlaps(other)) {
            return false;
        }
        match self.active {
            // Keep the active piece at the tail of the list so its index
            // stays stable.
            Some(idx) => {
                self.pieces.insert(idx, piece);
                self.active = Some(idx + 1);
            }
            None => self.pieces.push(piece),
        }
        true
    }

    /// Take an immutable snapshot of the whole board for rendering
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            width: self.width,
            height: self.height,
            pieces: self.pieces.iter().map(PieceSnapshot::from).collect(),
            active: self.active,
            game_over: self.game_over,
        }
    }

    /// Spawn rule: uniform kind, uniform column in `0..(width - SPAWN_MARGIN)`,
    /// row 0. A spawn onto already-settled cells ends the session instead of
    /// leaving overlapping pieces behind.
    fn spawn_random(&mut self) {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let col = self.rng.next_range(u32::from(self.width - SPAWN_MARGIN)) as i8;
        let piece = Piece::new(kind, Cell::new(col, 0));

        if self.overlaps_settled(&piece, None) {
            self.game_over = true;
            return;
        }

        self.active = Some(self.pieces.len());
        self.pieces.push(piece);
    }

    /// First overlap in board order decides; `skip` excludes the active slot.
    fn overlaps_settled(&self, piece: &Piece, skip: Option<usize>) -> bool {
        self.pieces
            .iter()
            .enumerate()
            .filter(|(idx, _)| Some(*idx) != skip)
            .any(|(_, other)| piece.overlaps(other))
    }

    fn past_floor(&self, piece: &Piece) -> bool {
        piece.lowest_row() >= self.height as i8
    }

    fn in_bounds(&self, piece: &Piece) -> bool {
        piece.occupied_cells().iter().all(|cell| {
            cell.col >= 0 && cell.col < self.width as i8 && cell.row >= 0 && cell.row < self.height as i8
        })
    }
}
