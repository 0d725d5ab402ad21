// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use arrayvec::ArrayVec;

use crate::common::solve_cubic;
use crate::{Line, Point, Vec2};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// The point at parameter `t`, by repeated linear interpolation
    /// (de Casteljau).
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p23 = self.p2.lerp(self.p3, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        p012.lerp(p123, t)
    }

    /// The start point.
    #[inline]
    pub fn start(&self) -> Point {
        self.p0
    }

    /// The end point.
    #[inline]
    pub fn end(&self) -> Point {
        self.p3
    }

    /// Coefficients of the power basis form, `c0 + c1 t + c2 t² + c3 t³`.
    fn power_coeffs(&self) -> [Vec2; 4] {
        let p0 = self.p0.to_vec2();
        let p1 = self.p1.to_vec2();
        let p2 = self.p2.to_vec2();
        let p3 = self.p3.to_vec2();
        let c3 = -p0 + (p1 * 3.0 + (p2 * -3.0 + p3));
        let c2 = p0 * 3.0 + (p1 * -6.0 + p2 * 3.0);
        let c1 = p0 * -3.0 + p1 * 3.0;
        [p0, c1, c2, c3]
    }

    /// Find the points where this curve crosses a line segment.
    ///
    /// The curve is projected onto the normal of the line, and the roots of
    /// the resulting cubic in `[0, 1]` are evaluated. A point is kept when it
    /// lies within the line's bounding box. For vertical and horizontal lines
    /// only the varying coordinate is checked, so small evaluation errors
    /// across the line do not reject a crossing.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathdata::{CubicBez, Line};
    /// let c = CubicBez::new((0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0));
    /// let hits = c.intersect_line(&Line::new((5.0, -5.0), (5.0, 20.0)));
    /// assert_eq!(hits.len(), 1);
    /// assert!((hits[0].y - 7.5).abs() < 1e-9);
    /// ```
    pub fn intersect_line(&self, line: &Line) -> ArrayVec<Point, 3> {
        let mut result = ArrayVec::new();
        let (a1, a2) = (line.p0, line.p1);
        let min = a1.min(a2);
        let max = a1.max(a2);

        let n = Vec2::new(a1.y - a2.y, a2.x - a1.x);
        let cl = a1.x * a2.y - a2.x * a1.y;
        let [c0, c1, c2, c3] = self.power_coeffs();
        let roots = solve_cubic(n.dot(c0) + cl, n.dot(c1), n.dot(c2), n.dot(c3));

        for t in roots {
            if !(0.0..=1.0).contains(&t) {
                continue;
            }
            let p = self.eval(t);
            let on_line = if a1.x == a2.x {
                min.y <= p.y && p.y <= max.y
            } else if a1.y == a2.y {
                min.x <= p.x && p.x <= max.x
            } else {
                min.x <= p.x && p.x <= max.x && min.y <= p.y && p.y <= max.y
            };
            if on_line {
                result.push(p);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{CubicBez, Line, Point};

    #[test]
    fn cubicbez_eval_endpoints() {
        let c = CubicBez::new((1.0, 2.0), (3.0, 8.0), (5.0, -4.0), (7.0, 6.0));
        assert_eq!(c.eval(0.0), Point::new(1.0, 2.0));
        assert_eq!(c.eval(1.0), Point::new(7.0, 6.0));
        assert_eq!(c.eval(0.5), Point::new(4.0, 2.5));
    }

    #[test]
    fn cubicbez_vertical_line() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0));
        let hits = c.intersect_line(&Line::new((5.0, -5.0), (5.0, 20.0)));
        assert_eq!(hits.len(), 1);
        assert!((hits[0].x - 5.0).abs() < 1e-9);
        assert!((hits[0].y - 7.5).abs() < 1e-9);

        // The line stops short of the curve.
        let hits = c.intersect_line(&Line::new((5.0, -5.0), (5.0, 3.0)));
        assert!(hits.is_empty());
    }

    #[test]
    fn cubicbez_horizontal_line_two_hits() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0));
        // y(t) = 30t - 30t², so y = 5 at t = (3 ± √3) / 6.
        let hits = c.intersect_line(&Line::new((-1.0, 5.0), (11.0, 5.0)));
        assert_eq!(hits.len(), 2);
        for p in &hits {
            assert!((p.y - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn cubicbez_diagonal_line() {
        // A straight cubic along the x axis, crossed by a diagonal.
        let c = CubicBez::new((0.0, 0.0), (0.0, 0.0), (10.0, 0.0), (10.0, 0.0));
        let hits = c.intersect_line(&Line::new((0.0, -5.0), (10.0, 5.0)));
        assert_eq!(hits.len(), 1);
        assert!((hits[0].x - 5.0).abs() < 1e-9);
        assert!(hits[0].y.abs() < 1e-9);
    }
}
