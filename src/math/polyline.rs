use std::cmp::Ordering;

use super::{sign, Point2};

/// A polyline whose vertices have strictly increasing x-coordinates.
///
/// Such a polyline is the graph of a continuous piecewise-linear function over
/// `[first.x, last.x]`, so it can be evaluated at any x in that range.
#[derive(Debug, Clone, PartialEq)]
pub struct XMonotonePolyline {
    vertices: Vec<Point2>,
}

/// How two x-monotone polylines meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolylineIntersection {
    /// The polylines touch or cross at a single point.
    Point(Point2),
    /// The polylines coincide between `start` and `end`. `midpoint` lies on
    /// both polylines halfway along x, which is not the chord midpoint when
    /// the shared stretch bends.
    Overlap {
        start: Point2,
        end: Point2,
        midpoint: Point2,
    },
}

impl PolylineIntersection {
    /// Returns a point on both polylines: the point itself, or the midpoint of
    /// an overlap.
    #[must_use]
    pub fn representative(&self) -> Point2 {
        match *self {
            Self::Point(p) => p,
            Self::Overlap { midpoint, .. } => midpoint,
        }
    }
}

impl XMonotonePolyline {
    /// Creates a polyline from vertices ordered by strictly increasing x.
    ///
    /// Returns `None` if there are fewer than two vertices, if any coordinate
    /// is non-finite, or if the x-coordinates are not strictly increasing.
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Option<Self> {
        if vertices.len() < 2 {
            return None;
        }
        if vertices.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
            return None;
        }
        if vertices.windows(2).any(|w| w[0].x >= w[1].x) {
            return None;
        }
        Some(Self { vertices })
    }

    /// Returns the ordered vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the x-range `(min, max)` covered by the polyline.
    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        // `new` guarantees at least two vertices.
        let first = self.vertices[0].x;
        let last = self.vertices[self.vertices.len() - 1].x;
        (first, last)
    }

    /// Evaluates the polyline at `x`.
    ///
    /// Vertices are returned exactly; between vertices the value is linearly
    /// interpolated. Returns `None` outside the x-range.
    #[must_use]
    pub fn value_at(&self, x: f64) -> Option<f64> {
        let (min, max) = self.x_range();
        if x < min || x > max {
            return None;
        }
        let idx = self.vertices.partition_point(|v| v.x < x);
        let hi = self.vertices[idx];
        if hi.x == x || idx == 0 {
            return Some(hi.y);
        }
        let lo = self.vertices[idx - 1];
        let t = (x - lo.x) / (hi.x - lo.x);
        Some(lo.y + (hi.y - lo.y) * t)
    }

    /// Computes the leftmost intersection with another x-monotone polyline.
    ///
    /// Both polylines are sampled at the merged set of their vertex
    /// x-coordinates inside the common x-range. Between consecutive samples
    /// both are linear, so their difference is linear and a sign change pins
    /// down the crossing by interpolation. A run of samples where the
    /// difference is exactly zero is reported as an overlap.
    ///
    /// Returns `None` if the x-ranges are disjoint or the polylines never meet.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<PolylineIntersection> {
        let (a_min, a_max) = self.x_range();
        let (b_min, b_max) = other.x_range();
        let lo = a_min.max(b_min);
        let hi = a_max.min(b_max);
        if lo > hi {
            return None;
        }

        let xs = merged_xs(&self.vertices, &other.vertices, lo, hi);
        let mut samples = Vec::with_capacity(xs.len());
        for x in xs {
            let a = self.value_at(x)?;
            let b = other.value_at(x)?;
            samples.push((x, a, a - b));
        }

        let mut i = 0;
        while i < samples.len() {
            let (x0, y0, d0) = samples[i];
            if sign(d0) == Ordering::Equal {
                let mut j = i;
                while j + 1 < samples.len() && sign(samples[j + 1].2) == Ordering::Equal {
                    j += 1;
                }
                let start = Point2::new(x0, y0);
                if j == i {
                    return Some(PolylineIntersection::Point(start));
                }
                let (x1, y1, _) = samples[j];
                let mx = x0 + (x1 - x0) * 0.5;
                return Some(PolylineIntersection::Overlap {
                    start,
                    end: Point2::new(x1, y1),
                    midpoint: Point2::new(mx, self.value_at(mx)?),
                });
            }
            if let Some(&(x1, _, d1)) = samples.get(i + 1) {
                let s1 = sign(d1);
                if s1 != Ordering::Equal && s1 != sign(d0) {
                    let t = d0 / (d0 - d1);
                    let x = (x0 + (x1 - x0) * t).clamp(x0, x1);
                    let y = self.value_at(x)?;
                    return Some(PolylineIntersection::Point(Point2::new(x, y)));
                }
            }
            i += 1;
        }
        None
    }
}

/// Sorted, deduplicated vertex x-coordinates of both polylines within `[lo, hi]`,
/// always including the bounds themselves.
fn merged_xs(a: &[Point2], b: &[Point2], lo: f64, hi: f64) -> Vec<f64> {
    let mut xs: Vec<f64> = a
        .iter()
        .chain(b)
        .map(|v| v.x)
        .filter(|&x| x > lo && x < hi)
        .collect();
    xs.push(lo);
    xs.push(hi);
    xs.sort_by(f64::total_cmp);
    xs.dedup();
    xs
}
