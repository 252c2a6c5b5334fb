//! Slow reference answers for cross-checking the index and the search.

use crate::{tile_area, Point};

/// The red tiles from the puzzle statement.
pub fn example() -> Vec<Point> {
    [(7, 1), (11, 1), (11, 7), (9, 7), (9, 5), (2, 5), (2, 3), (7, 3)]
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect()
}

/// Staircase descending to the left, `steps` treads of 2x2 tiles.
pub fn staircase(steps: i64) -> Vec<Point> {
    let mut x = 2 * steps;
    let mut y = 0;
    let mut vertices = vec![Point::new(0, 0), Point::new(x, 0)];
    for _ in 0..steps {
        y += 2;
        vertices.push(Point::new(x, y));
        x -= 2;
        vertices.push(Point::new(x, y));
    }
    vertices
}

/// A U with a one-column slot, so neighbouring boundary tiles can sit on
/// opposite sides of the exterior.
pub fn u_shape() -> Vec<Point> {
    [(0, 0), (6, 0), (6, 5), (4, 5), (4, 2), (3, 2), (3, 5), (0, 5)]
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect()
}

pub fn bounds(vertices: &[Point]) -> (Point, Point) {
    let lo = vertices.iter().copied().reduce(Point::min).unwrap_or_default();
    let hi = vertices.iter().copied().reduce(Point::max).unwrap_or_default();
    (lo, hi)
}

/// Point-in-polygon with the boundary counted as inside.
fn inside_closed(polygon: &[Point], p: Point) -> bool {
    let mut crossings = 0;
    for (i, &a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        let (lo, hi) = (a.min(b), a.max(b));

        if lo.x <= p.x && p.x <= hi.x && lo.y <= p.y && p.y <= hi.y {
            return true;
        }
        if a.x == b.x && a.x > p.x && lo.y <= p.y && p.y < hi.y {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

/// Tests every point of the rectangle on a half-tile lattice. With integer
/// vertices that is enough to see any exterior gap, however narrow.
pub fn rect_inside(vertices: &[Point], a: Point, b: Point) -> bool {
    let polygon = vertices.iter().map(|&p| p * 2).collect::<Vec<_>>();
    let (lo, hi) = (a.min(b) * 2, a.max(b) * 2);

    (lo.y..=hi.y).all(|y| (lo.x..=hi.x).all(|x| inside_closed(&polygon, Point::new(x, y))))
}

/// Largest contained rectangle over all vertex pairs that share neither row
/// nor column, checked one by one.
pub fn largest_rectangle(vertices: &[Point]) -> u128 {
    let mut best = 0;
    for (i, &a) in vertices.iter().enumerate() {
        for &b in &vertices[i + 1..] {
            if a.x == b.x || a.y == b.y {
                continue;
            }
            let area = tile_area(a, b);
            if area > best && rect_inside(vertices, a, b) {
                best = area;
            }
        }
    }
    best
}
