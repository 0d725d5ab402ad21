// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized paths made of lines and cubic Béziers.

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::slice;

use arrayvec::ArrayVec;

use crate::region;
use crate::{CubicBez, Line, Point};

/// A path of lines and cubic Béziers, possibly with multiple subpaths.
///
/// This is the output of [normalization](crate::normalize): every command of
/// the path grammar reduced to absolute moves, lines, cubics and closes.
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezPath(Vec<PathEl>);

/// The element of a Bézier path.
///
/// A valid path has `MoveTo` at the beginning of each subpath.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a new
    /// subpath.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Draw a cubic Bézier using the current location and the three points.
    CurveTo(Point, Point, Point),
    /// Close off the path, returning to the start of the subpath.
    ClosePath,
}

/// A segment of a Bézier path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathSeg {
    /// A line segment.
    Line(Line),
    /// A cubic Bézier segment.
    Cubic(CubicBez),
}

impl BezPath {
    /// Create a new path.
    pub fn new() -> BezPath {
        BezPath::default()
    }

    /// Create a path from a vector of path elements.
    pub fn from_vec(v: Vec<PathEl>) -> BezPath {
        BezPath(v)
    }

    /// Push a generic path element onto the path.
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Push a "move to" element onto the path.
    pub fn move_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::MoveTo(p.into()));
    }

    /// Push a "line to" element onto the path.
    pub fn line_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::LineTo(p.into()));
    }

    /// Push a "curve to" element onto the path.
    pub fn curve_to<P: Into<Point>>(&mut self, p1: P, p2: P, p3: P) {
        self.push(PathEl::CurveTo(p1.into(), p2.into(), p3.into()));
    }

    /// Push a "close path" element onto the path.
    pub fn close_path(&mut self) {
        self.push(PathEl::ClosePath);
    }

    /// Get the path elements.
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// Returns an iterator over the path's elements.
    pub fn iter(&self) -> impl Iterator<Item = PathEl> + Clone + '_ {
        self.0.iter().copied()
    }

    /// Returns `true` if the path has no elements at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the path segments.
    ///
    /// A close contributes a line back to the start of its subpath unless the
    /// subpath already ends there.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathdata::{BezPath, PathSeg};
    /// let path = BezPath::from_svg("M0,0 L10,0 L10,10 Z");
    /// let segs: Vec<PathSeg> = path.segments().collect();
    /// assert_eq!(segs.len(), 3);
    /// ```
    pub fn segments(&self) -> PathSegments<'_> {
        let first = match self.0.first() {
            Some(PathEl::MoveTo(p)) => *p,
            _ => Point::ZERO,
        };
        PathSegments {
            c: self.0.iter(),
            start: first,
            last: first,
        }
    }

    /// Test whether a point is inside the region bounded by this path.
    ///
    /// This casts a ray the same way as [`is_point_in_region`], after
    /// dropping zero-length lines.
    ///
    /// [`is_point_in_region`]: crate::is_point_in_region
    pub fn contains(&self, pt: Point) -> bool {
        let segs = region::prune_zero_length(self.segments());
        region::is_point_in_region(pt, &segs)
    }
}

impl FromIterator<PathEl> for BezPath {
    fn from_iter<T: IntoIterator<Item = PathEl>>(iter: T) -> Self {
        BezPath(iter.into_iter().collect())
    }
}

impl Extend<PathEl> for BezPath {
    fn extend<I: IntoIterator<Item = PathEl>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a BezPath {
    type Item = PathEl;
    type IntoIter = core::iter::Copied<slice::Iter<'a, PathEl>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements().iter().copied()
    }
}

impl IntoIterator for BezPath {
    type Item = PathEl;
    type IntoIter = alloc::vec::IntoIter<PathEl>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl PathEl {
    /// The end point of this element, if it has one.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathEl::MoveTo(p) | PathEl::LineTo(p) | PathEl::CurveTo(_, _, p) => Some(p),
            PathEl::ClosePath => None,
        }
    }
}

/// An iterator over the segments of a [`BezPath`].
///
/// Created by [`BezPath::segments`].
#[derive(Clone, Debug)]
pub struct PathSegments<'a> {
    c: slice::Iter<'a, PathEl>,
    start: Point,
    last: Point,
}

impl Iterator for PathSegments<'_> {
    type Item = PathSeg;

    fn next(&mut self) -> Option<PathSeg> {
        for el in &mut self.c {
            let (ret, last) = match *el {
                PathEl::MoveTo(p) => {
                    self.start = p;
                    self.last = p;
                    continue;
                }
                PathEl::LineTo(p) => (PathSeg::Line(Line::new(self.last, p)), p),
                PathEl::CurveTo(p1, p2, p3) => {
                    (PathSeg::Cubic(CubicBez::new(self.last, p1, p2, p3)), p3)
                }
                PathEl::ClosePath => {
                    if self.last != self.start {
                        (PathSeg::Line(Line::new(self.last, self.start)), self.start)
                    } else {
                        continue;
                    }
                }
            };

            self.last = last;
            return Some(ret);
        }
        None
    }
}

impl FusedIterator for PathSegments<'_> {}

impl PathSeg {
    /// The start point of the segment.
    pub fn start(&self) -> Point {
        match self {
            PathSeg::Line(line) => line.p0,
            PathSeg::Cubic(cubic) => cubic.p0,
        }
    }

    /// The end point of the segment.
    pub fn end(&self) -> Point {
        match self {
            PathSeg::Line(line) => line.p1,
            PathSeg::Cubic(cubic) => cubic.p3,
        }
    }

    /// All defining points of the segment: both endpoints of a line, or all
    /// four points of a cubic.
    pub fn points(&self) -> ArrayVec<Point, 4> {
        let mut points = ArrayVec::new();
        match self {
            PathSeg::Line(line) => points.extend([line.p0, line.p1]),
            PathSeg::Cubic(cubic) => points.extend([cubic.p0, cubic.p1, cubic.p2, cubic.p3]),
        }
        points
    }

    /// Find the points where this segment crosses a line segment.
    ///
    /// See [`Line::intersect_line`] and [`CubicBez::intersect_line`].
    pub fn intersect_line(&self, line: &Line) -> ArrayVec<Point, 3> {
        match self {
            PathSeg::Line(seg) => seg.intersect_line(line).into_iter().collect(),
            PathSeg::Cubic(cubic) => cubic.intersect_line(line),
        }
    }
}

impl From<Line> for PathSeg {
    fn from(line: Line) -> PathSeg {
        PathSeg::Line(line)
    }
}

impl From<CubicBez> for PathSeg {
    fn from(cubic: CubicBez) -> PathSeg {
        PathSeg::Cubic(cubic)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BezPath, CubicBez, Line, PathEl, PathSeg, Point};
    use alloc::vec;

    fn square() -> BezPath {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.line_to((10.0, 10.0));
        path.line_to((0.0, 10.0));
        path.close_path();
        path
    }

    #[test]
    fn segments_close_back_to_start() {
        let segs: Vec<_> = square().segments().collect();
        assert_eq!(segs.len(), 4);
        assert_eq!(
            segs[3],
            PathSeg::Line(Line::new((0.0, 10.0), (0.0, 0.0)))
        );
    }

    #[test]
    fn closed_at_start_adds_nothing() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.curve_to((0.0, 5.0), (5.0, 5.0), (5.0, 0.0));
        path.line_to((0.0, 0.0));
        path.close_path();
        let segs: Vec<_> = path.segments().collect();
        assert_eq!(segs.len(), 2);
        assert_eq!(
            segs[0],
            PathSeg::Cubic(CubicBez::new((0.0, 0.0), (0.0, 5.0), (5.0, 5.0), (5.0, 0.0)))
        );
    }

    #[test]
    fn segments_track_subpaths() {
        let path = BezPath::from_vec(vec![
            PathEl::MoveTo(Point::new(0.0, 0.0)),
            PathEl::LineTo(Point::new(1.0, 0.0)),
            PathEl::ClosePath,
            PathEl::MoveTo(Point::new(5.0, 5.0)),
            PathEl::LineTo(Point::new(6.0, 5.0)),
            PathEl::ClosePath,
        ]);
        let segs: Vec<_> = path.segments().collect();
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[3], PathSeg::Line(Line::new((6.0, 5.0), (5.0, 5.0))));
    }

    #[test]
    fn contains() {
        let path = square();
        assert!(path.contains(Point::new(5.0, 5.0)));
        assert!(!path.contains(Point::new(15.0, 5.0)));
        assert!(!BezPath::new().contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn seg_points() {
        let seg = PathSeg::from(Line::new((1.0, 2.0), (3.0, 4.0)));
        assert_eq!(seg.points().as_slice(), &[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(seg.start(), Point::new(1.0, 2.0));
        assert_eq!(seg.end(), Point::new(3.0, 4.0));
    }
}
