//! Active piece module - the falling piece and its movement rules
//!
//! A piece is a shape plus the grid position of its top-left corner (the anchor).
//! Every move or rotation is tried against the board first; a colliding
//! candidate is discarded and the piece keeps its previous state.

use crate::board::Board;
use crate::catalog::{get_shape, Shape};
use crate::types::{ShapeKind, BOARD_WIDTH};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Column a shape spawns at: centered, rounding toward the left
    pub fn spawn_x(shape: &Shape) -> i8 {
        (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8
    }

    /// Create a new piece at its spawn position (row 0), without checking the board
    pub fn new(kind: ShapeKind) -> Self {
        let shape = get_shape(kind);
        Self {
            kind,
            shape,
            x: Self::spawn_x(&shape),
            y: 0,
        }
    }

    /// Place a new piece at its spawn position.
    ///
    /// Returns `None` when the spawn position already collides, which ends the game.
    pub fn spawn(kind: ShapeKind, board: &Board) -> Option<Self> {
        let piece = Self::new(kind);
        if piece.collides(board) {
            None
        } else {
            Some(piece)
        }
    }

    /// Check the piece against the board at its current position
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }

    /// Absolute grid coordinates of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Try to move the piece by (dx, dy)
    ///
    /// On collision the piece stays where it was and `false` is returned.
    pub fn try_move(&mut self, board: &Board, dx: i8, dy: i8) -> bool {
        let (Some(x), Some(y)) = (self.x.checked_add(dx), self.y.checked_add(dy)) else {
            return false;
        };
        if board.collides(&self.shape, x, y) {
            return false;
        }
        self.x = x;
        self.y = y;
        true
    }

    /// Try to rotate 90° clockwise around the unchanged anchor (no wall kicks)
    ///
    /// A rotation that would collide is discarded, so non-square shapes are
    /// often refused next to a wall or the floor.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let candidate = self.shape.rotated();
        if board.collides(&candidate, self.x, self.y) {
            return false;
        }
        self.shape = candidate;
        true
    }

    /// Move down until the next step would collide; returns the rows travelled
    ///
    /// The piece is not locked here.
    pub fn hard_drop(&mut self, board: &Board) -> u32 {
        let mut rows = 0;
        while self.try_move(board, 0, 1) {
            rows += 1;
        }
        rows
    }

    /// Row the piece would come to rest on if hard dropped now
    pub fn landing_y(&self, board: &Board) -> i8 {
        let mut probe = *self;
        probe.hard_drop(board);
        probe.y
    }
}
