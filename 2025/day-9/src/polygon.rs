//! Slab decomposition of a rectilinear polygon.
//!
//! The polygon is cut into horizontal bands between consecutive distinct
//! vertex rows. Inside a band the set of interior x-spans never changes, so a
//! rectangle is contained in the polygon exactly when, in every band its
//! y-extent overlaps, its x-extent fits inside a single interior span.

use miette::Diagnostic;
use thiserror::Error;

use crate::Point;

/// Closed horizontal span `[left, right]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub left: i64,
    pub right: i64,
}

impl Interval {
    #[inline]
    fn covers(&self, x1: i64, x2: i64) -> bool {
        self.left <= x1 && x2 <= self.right
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VerticalEdge {
    x: i64,
    y_min: i64,
    y_max: i64,
}

/// Horizontal band `[y_min, y_max)` and the x-spans interior to the polygon
/// anywhere in it, sorted ascending and disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slab {
    pub y_min: i64,
    pub y_max: i64,
    pub inside: Vec<Interval>,
}

/// Input that breaks the scanline fill. Slabs are still produced, but
/// containment answers for the affected rows are meaningless.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum PolygonDefect {
    #[error("edge from {from} to {to} is not axis-aligned")]
    #[diagnostic(
        code(day9::polygon::diagonal_edge),
        help("consecutive red tiles must share a row or a column")
    )]
    DiagonalEdge { from: Point, to: Point },

    #[error("{crossings} vertical edges cross the band y in [{y_min}, {y_max})")]
    #[diagnostic(
        code(day9::polygon::odd_crossings),
        help("the polygon is self-intersecting or not closed")
    )]
    OddCrossings {
        y_min: i64,
        y_max: i64,
        crossings: usize,
    },
}

/// Read-only containment index over a rectilinear polygon.
#[derive(Debug, Clone, Default)]
pub struct PolygonIndex {
    vertices: Vec<Point>,
    slabs: Vec<Slab>,
    y_coords: Vec<i64>,
    defects: Vec<PolygonDefect>,
}

impl PolygonIndex {
    /// Builds the slab table for the polygon whose vertices are visited in
    /// order, the last vertex joining back to the first.
    #[tracing::instrument(skip_all, fields(vertices = vertices.len()))]
    pub fn build(vertices: &[Point]) -> Self {
        if vertices.is_empty() {
            return Self::default();
        }

        let mut y_coords: Vec<i64> = vertices.iter().map(|p| p.y).collect();
        y_coords.sort_unstable();
        y_coords.dedup();

        let mut defects = Vec::new();
        let edges = Self::vertical_edges(vertices, &mut defects);

        let slabs = y_coords
            .windows(2)
            .map(|band| Self::slab(band[0], band[1], &edges, &mut defects))
            .collect::<Vec<_>>();

        tracing::debug!(
            slabs = slabs.len(),
            edges = edges.len(),
            defects = defects.len(),
            "polygon indexed"
        );

        Self {
            vertices: vertices.to_vec(),
            slabs,
            y_coords,
            defects,
        }
    }

    fn vertical_edges(vertices: &[Point], defects: &mut Vec<PolygonDefect>) -> Vec<VerticalEdge> {
        let mut edges = Vec::new();

        for (i, &from) in vertices.iter().enumerate() {
            let to = vertices[(i + 1) % vertices.len()];

            if from.x == to.x {
                edges.push(VerticalEdge {
                    x: from.x,
                    y_min: from.y.min(to.y),
                    y_max: from.y.max(to.y),
                });
            } else if from.y != to.y {
                defects.push(PolygonDefect::DiagonalEdge { from, to });
            }
        }
        edges
    }

    fn slab(
        y_min: i64,
        y_max: i64,
        edges: &[VerticalEdge],
        defects: &mut Vec<PolygonDefect>,
    ) -> Slab {
        // Doubled coordinates keep the band midpoint on the integer lattice:
        // y_min < mid < y_max  <=>  2*y_min < y_min + y_max < 2*y_max.
        let mid = i128::from(y_min) + i128::from(y_max);

        let mut crossings = edges
            .iter()
            .filter(|e| {
                let (lo, hi) = (2 * i128::from(e.y_min), 2 * i128::from(e.y_max));
                lo < mid && mid < hi
            })
            .map(|e| e.x)
            .collect::<Vec<_>>();
        crossings.sort_unstable();

        if crossings.len() % 2 != 0 {
            defects.push(PolygonDefect::OddCrossings {
                y_min,
                y_max,
                crossings: crossings.len(),
            });
        }

        let inside = crossings
            .chunks_exact(2)
            .map(|pair| Interval {
                left: pair[0],
                right: pair[1],
            })
            .collect();

        Slab {
            y_min,
            y_max,
            inside,
        }
    }

    /// Whether the axis-aligned rectangle with opposite corners `(x1, y1)`
    /// and `(x2, y2)` lies inside the polygon, boundary included. Corner order
    /// does not matter.
    pub fn contains(&self, x1: i64, y1: i64, x2: i64, y2: i64) -> bool {
        let (x1, x2) = (x1.min(x2), x1.max(x2));
        let (y1, y2) = (y1.min(y2), y1.max(y2));

        let (Some(&y_lo), Some(&y_hi)) = (self.y_coords.first(), self.y_coords.last()) else {
            return false;
        };
        if y1 < y_lo || y2 > y_hi {
            return false;
        }
        if y1 == y2 {
            return self.row_contains(y1, x1, x2);
        }

        let start = self.slabs.partition_point(|slab| slab.y_max <= y1);

        self.slabs[start..]
            .iter()
            .take_while(|slab| slab.y_min < y2)
            .all(|slab| slab.inside.iter().any(|span| span.covers(x1, x2)))
    }

    /// Zero-height query. On a vertex row the segment may be held by the band
    /// below, the band above, or both together, so their spans are merged.
    fn row_contains(&self, y: i64, x1: i64, x2: i64) -> bool {
        let start = self.slabs.partition_point(|slab| slab.y_max < y);

        let mut spans = self.slabs[start..]
            .iter()
            .take_while(|slab| slab.y_min <= y)
            .flat_map(|slab| slab.inside.iter().copied())
            .collect::<Vec<_>>();
        spans.sort_unstable_by_key(|span| span.left);

        let mut run: Option<Interval> = None;
        for span in spans {
            run = match run {
                Some(r) if span.left <= r.right => Some(Interval {
                    left: r.left,
                    right: r.right.max(span.right),
                }),
                Some(r) if r.covers(x1, x2) => return true,
                _ => Some(span),
            };
        }
        run.is_some_and(|r| r.covers(x1, x2))
    }

    /// [`Self::contains`] for two corner points.
    #[inline]
    pub fn contains_rect(&self, a: Point, b: Point) -> bool {
        self.contains(a.x, a.y, b.x, b.y)
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn slabs(&self) -> &[Slab] {
        &self.slabs
    }

    /// Distinct vertex y-coordinates, ascending.
    pub fn y_coords(&self) -> &[i64] {
        &self.y_coords
    }

    pub fn defects(&self) -> &[PolygonDefect] {
        &self.defects
    }
}
