pub mod parse;
pub mod part1;
pub mod part2;
pub mod polygon;
pub mod search;

#[cfg(test)]
mod oracle;

use glam::I64Vec2;

/// A red tile: a polygon vertex on the integer lattice.
pub type Point = I64Vec2;

/// Number of tiles covered by the rectangle with opposite corners `a` and `b`,
/// counting both boundary rows and columns.
///
/// Exact for every pair of `i64` points except corners spanning the whole
/// `i64` range on both axes, where the true count is 2^128 and the result
/// saturates at `u128::MAX`.
#[inline]
pub fn tile_area(a: Point, b: Point) -> u128 {
    let w = u128::from(a.x.abs_diff(b.x)) + 1;
    let h = u128::from(a.y.abs_diff(b.y)) + 1;
    w.saturating_mul(h)
}
