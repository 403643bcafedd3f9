//! Pieces module - the tetromino catalog and the rotation transform
//!
//! Every shape is a small rectangular mask. Occupied cells hold the tag of the
//! piece kind, empty cells hold `0`. Masks are never mutated in place:
//! rotation builds a new mask with rows and columns swapped.

use crate::types::{Cell, PieceKind, EMPTY};

/// Largest mask dimension in the catalog (the I piece is 1x4)
pub const MAX_DIM: usize = 4;

/// Rectangular binary mask of a piece, anchored at its top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    /// Cells outside `rows x cols` are always empty.
    mask: [[Cell; MAX_DIM]; MAX_DIM],
}

const fn catalog_shape(
    rows: u8,
    cols: u8,
    pattern: [[u8; MAX_DIM]; MAX_DIM],
    kind: PieceKind,
) -> Shape {
    let mut mask = [[EMPTY; MAX_DIM]; MAX_DIM];
    let mut r = 0;
    while r < MAX_DIM {
        let mut c = 0;
        while c < MAX_DIM {
            if pattern[r][c] != 0 {
                mask[r][c] = kind.tag();
            }
            c += 1;
        }
        r += 1;
    }
    Shape { rows, cols, mask }
}

const Z4: [u8; MAX_DIM] = [0; MAX_DIM];

const I_SHAPE: Shape = catalog_shape(1, 4, [[1, 1, 1, 1], Z4, Z4, Z4], PieceKind::I);
const T_SHAPE: Shape = catalog_shape(2, 3, [[1, 1, 1, 0], [0, 1, 0, 0], Z4, Z4], PieceKind::T);
const O_SHAPE: Shape = catalog_shape(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], Z4, Z4], PieceKind::O);
const S_SHAPE: Shape = catalog_shape(2, 3, [[0, 1, 1, 0], [1, 1, 0, 0], Z4, Z4], PieceKind::S);
const Z_SHAPE: Shape = catalog_shape(2, 3, [[1, 1, 0, 0], [0, 1, 1, 0], Z4, Z4], PieceKind::Z);
const L_SHAPE: Shape = catalog_shape(2, 3, [[1, 0, 0, 0], [1, 1, 1, 0], Z4, Z4], PieceKind::L);
const J_SHAPE: Shape = catalog_shape(2, 3, [[0, 0, 1, 0], [1, 1, 1, 0], Z4, Z4], PieceKind::J);

/// Get the spawn mask for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::J => J_SHAPE,
    }
}

impl Shape {
    /// Build a mask from explicit rows.
    ///
    /// Returns `None` for an empty, ragged, or oversized row set.
    ///
    /// # Examples
    ///
    /// ```
    /// use text_tetris_core::pieces::Shape;
    ///
    /// let bar = Shape::from_rows(&[&[1, 1, 1]]).unwrap();
    /// assert_eq!((bar.rows(), bar.cols()), (1, 3));
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[Cell]]) -> Option<Self> {
        let cols = rows.first()?.len();
        if rows.len() > MAX_DIM || cols == 0 || cols > MAX_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }

        let mut mask = [[EMPTY; MAX_DIM]; MAX_DIM];
        for (r, row) in rows.iter().enumerate() {
            mask[r][..cols].copy_from_slice(row);
        }
        Some(Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            mask,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Cell value at (row, col) inside the mask; `0` outside it.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows as usize || col >= self.cols as usize {
            return EMPTY;
        }
        self.mask[row][col]
    }

    /// Occupied cells as `(row, col, value)` relative to the anchor.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        let cols = self.cols as usize;
        self.mask[..self.rows as usize]
            .iter()
            .enumerate()
            .flat_map(move |(r, row)| {
                row[..cols]
                    .iter()
                    .enumerate()
                    .filter(|&(_, &cell)| cell > EMPTY)
                    .map(move |(c, &cell)| (r as i8, c as i8, cell))
            })
    }

    /// The mask turned 90° clockwise: `rotated[c][rows - 1 - r] = self[r][c]`.
    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows as usize;
        let mut mask = [[EMPTY; MAX_DIM]; MAX_DIM];
        for (r, row) in self.mask[..rows].iter().enumerate() {
            for (c, &cell) in row[..self.cols as usize].iter().enumerate() {
                mask[c][rows - 1 - r] = cell;
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            mask,
        }
    }
}
