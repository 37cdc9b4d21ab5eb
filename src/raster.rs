//! Geometric drawing on grid snapshots.
//!
//! Every function takes a grid by reference and returns a new grid; the input is
//! never modified. This is what lets the editor keep a preview and the committed
//! grid side by side.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::grid::{Cell, Grid};

/// Write a single cell. Out-of-bounds writes are dropped.
pub fn set_pixel(grid: &Grid, x: i32, y: i32, color: Color) -> Grid {
    grid.set_cell(x, y, color)
}

/// 4-connected flood fill starting at `(x, y)`.
///
/// Returns the input unchanged when the start cell already holds `fill`
/// or lies outside the grid.
pub fn flood_fill(grid: &Grid, x: i32, y: i32, fill: Color) -> Grid {
    let Some(target) = grid.get(x, y) else {
        return grid.clone();
    };
    if target == fill {
        return grid.clone();
    }

    let width = grid.width();
    let mut out = grid.clone();
    let mut visited = vec![false; width * grid.height()];
    let mut stack = vec![(x, y)];

    while let Some((cx, cy)) = stack.pop() {
        if !out.contains(cx, cy) {
            continue;
        }
        let index = cy as usize * width + cx as usize;
        if visited[index] || out.get(cx, cy) != Some(target) {
            continue;
        }

        visited[index] = true;
        out.put(cx, cy, fill);
        // right, left, down, up
        stack.push((cx + 1, cy));
        stack.push((cx - 1, cy));
        stack.push((cx, cy + 1));
        stack.push((cx, cy - 1));
    }

    out
}

/// Integer Bresenham line, both endpoints included.
pub fn draw_line(grid: &Grid, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> Grid {
    let mut out = grid.clone();
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        out.put(x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    out
}

/// Unfilled rectangle spanning the two corners.
///
/// Each edge cell is bounds-checked on its own, so a rectangle hanging off
/// the canvas still draws its visible part.
pub fn draw_rectangle(grid: &Grid, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> Grid {
    let mut out = grid.clone();
    let (min_x, max_x) = (x0.min(x1), x0.max(x1));
    let (min_y, max_y) = (y0.min(y1), y0.max(y1));

    for x in min_x..=max_x {
        out.put(x, min_y, color);
        out.put(x, max_y, color);
    }
    for y in min_y..=max_y {
        out.put(min_x, y, color);
        out.put(max_x, y, color);
    }

    out
}

/// Midpoint circle outline centred on `(cx, cy)` passing through `(ex, ey)`.
///
/// The radius is the rounded euclidean distance between the two points. A
/// radius of zero plots the centre cell only.
pub fn draw_circle(grid: &Grid, cx: i32, cy: i32, ex: i32, ey: i32, color: Color) -> Grid {
    let mut out = grid.clone();
    let radius = radius_between(cx, cy, ex, ey);
    let mut x = radius;
    let mut y = 0;
    let mut err = 0;

    while x >= y {
        for (px, py) in [
            (cx + x, cy + y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx - x, cy + y),
            (cx - x, cy - y),
            (cx - y, cy - x),
            (cx + y, cy - x),
            (cx + x, cy - y),
        ] {
            out.put(px, py, color);
        }

        y += 1;
        err += 1 + 2 * y;
        if 2 * (err - x) + 1 > 0 {
            x -= 1;
            err += 1 - 2 * x;
        }
    }

    out
}

fn radius_between(cx: i32, cy: i32, ex: i32, ey: i32) -> i32 {
    let dx = f64::from(ex - cx);
    let dy = f64::from(ey - cy);
    dx.hypot(dy).round() as i32
}

/// The outline shapes drawn by drag tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Line,
    Rectangle,
    Circle,
}

impl Shape {
    /// Rasterize this shape from the gesture start to `end`.
    ///
    /// For circles `start` is the centre and `end` a point on the outline.
    pub fn draw(self, grid: &Grid, start: Cell, end: Cell, color: Color) -> Grid {
        match self {
            Shape::Line => draw_line(grid, start.x, start.y, end.x, end.y, color),
            Shape::Rectangle => draw_rectangle(grid, start.x, start.y, end.x, end.y, color),
            Shape::Circle => draw_circle(grid, start.x, start.y, end.x, end.y, color),
        }
    }
}
