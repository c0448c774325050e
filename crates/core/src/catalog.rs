//! Catalog module - tetromino shape definitions
//!
//! Every shape is a small rectangular matrix of occupied cells stored in a
//! fixed 4x4 array, so shapes are plain `Copy` values. Rotation never touches
//! the catalog: it returns a new matrix.

use arrayvec::ArrayVec;

use crate::types::ShapeKind;

/// Largest bounding box edge a shape can have
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of a single occupied cell relative to the shape's top-left corner: (dx, dy)
pub type CellOffset = (i8, i8);

/// Occupied cells of a shape, at most one per matrix cell
pub type ShapeCells = ArrayVec<CellOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Immutable rectangular matrix of binary cells
///
/// Cells outside `width` x `height` are always empty, which keeps derived
/// equality meaningful across rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    width: u8,
    height: u8,
}

impl Shape {
    const fn from_bits(bits: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM], width: u8, height: u8) -> Self {
        let mut rows = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut y = 0;
        while y < height as usize {
            let mut x = 0;
            while x < width as usize {
                rows[y][x] = bits[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self {
            rows,
            width,
            height,
        }
    }

    /// Build a shape from row slices (`0` = empty, anything else = occupied).
    ///
    /// Returns `None` for empty, ragged, or larger-than-4x4 input.
    ///
    /// # Examples
    ///
    /// ```
    /// use termtris_core::Shape;
    ///
    /// let s = Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]).unwrap();
    /// assert_eq!((s.width(), s.height()), (3, 2));
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_SHAPE_DIM || width == 0 || width > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut bits = [[0u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            bits[y][..width].copy_from_slice(row);
        }
        Some(Self::from_bits(bits, width as u8, height as u8))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at (x, y) is occupied. Out of range is empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.rows[y][x]
    }

    /// Occupied cells as (dx, dy) offsets, row by row.
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.rows[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&c| c).count()
    }

    /// Rotate 90° clockwise: reverse the row order, then transpose.
    ///
    /// The result is `height` wide and `width` tall. No offset is applied.
    pub fn rotated(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut rows = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.rows[h - 1 - c][r];
            }
        }
        Self {
            rows,
            width: self.height,
            height: self.width,
        }
    }
}

const I_SHAPE: Shape = Shape::from_bits([[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]], 4, 1);
const O_SHAPE: Shape = Shape::from_bits([[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]], 2, 2);
const T_SHAPE: Shape = Shape::from_bits([[1, 1, 1, 0], [0, 1, 0, 0], [0; 4], [0; 4]], 3, 2);
const L_SHAPE: Shape = Shape::from_bits([[1, 1, 1, 0], [1, 0, 0, 0], [0; 4], [0; 4]], 3, 2);
const J_SHAPE: Shape = Shape::from_bits([[1, 1, 1, 0], [0, 0, 1, 0], [0; 4], [0; 4]], 3, 2);
const S_SHAPE: Shape = Shape::from_bits([[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]], 3, 2);
const Z_SHAPE: Shape = Shape::from_bits([[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]], 3, 2);

/// Get the canonical (spawn) shape for a kind
pub fn get_shape(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::I => I_SHAPE,
        ShapeKind::O => O_SHAPE,
        ShapeKind::T => T_SHAPE,
        ShapeKind::L => L_SHAPE,
        ShapeKind::J => J_SHAPE,
        ShapeKind::S => S_SHAPE,
        ShapeKind::Z => Z_SHAPE,
    }
}
