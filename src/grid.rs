use std::sync::Arc;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{EditorError, Result};

/// Smallest accepted canvas side, in cells
pub const MIN_DIMENSION: usize = 8;
/// Largest accepted canvas side, in cells
pub const MAX_DIMENSION: usize = 256;

/// A grid-addressable cell location.
///
/// Coordinates are signed so geometry may reach past the canvas edges;
/// writes to such cells are dropped by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Row-major pixel storage with value semantics.
///
/// Rows are reference counted and copied on write, so cloning a grid is cheap
/// and a retained snapshot never observes later edits. Two grids are equal when
/// their dimensions and every cell are equal.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Arc<Vec<Color>>>,
}

impl Grid {
    /// Create an all-transparent grid.
    ///
    /// Fails with [`EditorError::InvalidDimensions`] unless both sides are
    /// within `MIN_DIMENSION..=MAX_DIMENSION`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if !Self::valid_dimensions(width, height) {
            return Err(EditorError::InvalidDimensions { width, height });
        }
        Ok(Self::blank(width, height))
    }

    /// An all-transparent grid with the same dimensions
    pub fn blank_like(&self) -> Grid {
        Self::blank(self.width, self.height)
    }

    /// Callers guarantee the dimensions are valid
    pub(crate) fn blank(width: usize, height: usize) -> Grid {
        // Every row starts out sharing one blank row
        let row = Arc::new(vec![Color::Transparent; width]);
        Grid {
            width,
            height,
            rows: vec![row; height],
        }
    }

    pub fn valid_dimensions(width: usize, height: usize) -> bool {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        range.contains(&width) && range.contains(&height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Color at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.rows[y as usize][x as usize])
    }

    /// A new grid identical to this one except at `(x, y)`.
    ///
    /// Out-of-bounds writes are dropped and yield an unchanged copy.
    pub fn set_cell(&self, x: i32, y: i32, color: Color) -> Grid {
        let mut next = self.clone();
        next.put(x, y, color);
        next
    }

    /// Write one cell of an owned grid, copying the row if it is shared.
    pub(crate) fn put(&mut self, x: i32, y: i32, color: Color) {
        if !self.contains(x, y) {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if self.rows[y][x] != color {
            Arc::make_mut(&mut self.rows[y])[x] = color;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.rows.iter().map(|row| row.as_slice())
    }

    pub fn is_blank(&self) -> bool {
        self.rows().all(|row| row.iter().all(|c| c.is_transparent()))
    }

    /// Number of cells holding `color`
    pub fn count(&self, color: Color) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|&&c| c == color).count())
            .sum()
    }

    /// Flatten into one RGBA pixel per cell for export.
    ///
    /// Transparent cells take the `background` color; with a transparent
    /// background they stay fully transparent. Painted cells are opaque.
    pub fn to_flat_image(&self, background: Color) -> RgbaImage {
        RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            match self.rows[y as usize][x as usize] {
                Color::Transparent => background.to_rgba(),
                painted => painted.to_rgba(),
            }
        })
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self
                .rows
                .iter()
                .zip(&other.rows)
                .all(|(a, b)| Arc::ptr_eq(a, b) || a == b)
    }
}

impl Eq for Grid {}
