// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use crate::Point;

/// A single line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The point at parameter `t`; `t = 0` is `p0` and `t = 1` is `p1`.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }

    /// Whether both endpoints are exactly the same point.
    #[inline]
    pub fn is_zero_length(&self) -> bool {
        self.p0 == self.p1
    }

    /// Computes the point where two line segments intersect.
    ///
    /// Returns `None` when the lines are parallel or collinear (the
    /// denominator is exactly zero), or when the crossing of the two infinite
    /// lines lies outside either segment. The returned point is interpolated
    /// along `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathdata::{Line, Point};
    /// let a = Line::new((0.0, 0.0), (10.0, 10.0));
    /// let b = Line::new((0.0, 10.0), (10.0, 0.0));
    /// assert_eq!(a.intersect_line(&b), Some(Point::new(5.0, 5.0)));
    ///
    /// let c = Line::new((0.0, 1.0), (10.0, 11.0));
    /// assert_eq!(a.intersect_line(&c), None);
    /// ```
    pub fn intersect_line(&self, other: &Line) -> Option<Point> {
        let (a1, a2) = (self.p0, self.p1);
        let (b1, b2) = (other.p0, other.p1);
        let ua_t = (b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x);
        let ub_t = (a2.x - a1.x) * (a1.y - b1.y) - (a2.y - a1.y) * (a1.x - b1.x);
        let u_b = (b2.y - b1.y) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.y - a1.y);
        if u_b == 0.0 {
            return None;
        }
        let ua = ua_t / u_b;
        let ub = ub_t / u_b;
        if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
            Some(Point::new(
                a1.x + ua * (a2.x - a1.x),
                a1.y + ua * (a2.y - a1.y),
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Line, Point};

    #[test]
    fn crossing_lines() {
        let a = Line::new((0.0, 5.0), (10.0, 5.0));
        let b = Line::new((4.0, 0.0), (4.0, 10.0));
        assert_eq!(a.intersect_line(&b), Some(Point::new(4.0, 5.0)));
        assert_eq!(b.intersect_line(&a), Some(Point::new(4.0, 5.0)));
    }

    #[test]
    fn touching_endpoints_count() {
        let a = Line::new((0.0, 0.0), (10.0, 0.0));
        let b = Line::new((10.0, 0.0), (10.0, 10.0));
        assert_eq!(a.intersect_line(&b), Some(Point::new(10.0, 0.0)));
    }

    #[test]
    fn parallel_and_collinear() {
        let a = Line::new((0.0, 0.0), (10.0, 0.0));
        let b = Line::new((0.0, 1.0), (10.0, 1.0));
        assert_eq!(a.intersect_line(&b), None);
        let c = Line::new((5.0, 0.0), (15.0, 0.0));
        assert_eq!(a.intersect_line(&c), None);
    }

    #[test]
    fn crossing_outside_segment() {
        let a = Line::new((0.0, 0.0), (1.0, 0.0));
        let b = Line::new((5.0, -1.0), (5.0, 1.0));
        assert_eq!(a.intersect_line(&b), None);
    }

    #[test]
    fn zero_length() {
        assert!(Line::new((3.0, 3.0), (3.0, 3.0)).is_zero_length());
        assert!(!Line::new((3.0, 3.0), (3.0, 3.5)).is_zero_length());
        // A degenerate line never intersects.
        let d = Line::new((3.0, 3.0), (3.0, 3.0));
        let b = Line::new((0.0, 0.0), (6.0, 6.0));
        assert_eq!(d.intersect_line(&b), None);
    }
}
