// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reducing parsed path data to absolute moves, lines, cubics and closes.

use alloc::vec::Vec;

use log::trace;

use crate::svg::{parse_path, ArcTo, CubicTo, QuadTo, Segment, SegmentKind, SmoothCubicTo};
use crate::{BezPath, PathEl, Point, SvgArc};

/// Rewrite relative segments as absolute ones.
///
/// The current point and the subpath start both begin at the origin. Arc
/// radii, rotation and flags are copied unchanged; horizontal and vertical
/// lines keep their kind.
///
/// # Examples
///
/// ```
/// use pathdata::absolutize;
/// use pathdata::svg::{parse_path, Segment};
/// use pathdata::Point;
/// let segs = absolutize(&parse_path("m10 10 l5 5 h-5"));
/// assert_eq!(
///     segs,
///     [
///         Segment::MoveTo(Point::new(10.0, 10.0)),
///         Segment::LineTo(Point::new(15.0, 15.0)),
///         Segment::Horiz(10.0),
///     ]
/// );
/// ```
pub fn absolutize(segments: &[Segment]) -> Vec<Segment> {
    let mut current = Point::ZERO;
    let mut subpath_start = Point::ZERO;
    let mut result = Vec::with_capacity(segments.len());
    for &seg in segments {
        let off = current.to_vec2();
        let abs = match seg {
            Segment::MoveToRel(p) => Segment::MoveTo(p + off),
            Segment::LineToRel(p) => Segment::LineTo(p + off),
            Segment::HorizRel(dx) => Segment::Horiz(current.x + dx),
            Segment::VertRel(dy) => Segment::Vert(current.y + dy),
            Segment::CubicToRel(c) => Segment::CubicTo(CubicTo {
                ctrl1: c.ctrl1 + off,
                ctrl2: c.ctrl2 + off,
                to: c.to + off,
            }),
            Segment::SmoothCubicToRel(s) => Segment::SmoothCubicTo(SmoothCubicTo {
                ctrl2: s.ctrl2 + off,
                to: s.to + off,
            }),
            Segment::QuadToRel(q) => Segment::QuadTo(QuadTo {
                ctrl: q.ctrl + off,
                to: q.to + off,
            }),
            Segment::SmoothQuadToRel(p) => Segment::SmoothQuadTo(p + off),
            Segment::EllipticArcRel(a) => Segment::EllipticArc(ArcTo {
                to: a.to + off,
                ..a
            }),
            abs => abs,
        };
        match abs {
            Segment::MoveTo(p) => {
                subpath_start = p;
                current = p;
            }
            Segment::LineTo(p) | Segment::SmoothQuadTo(p) => current = p,
            Segment::Horiz(x) => current.x = x,
            Segment::Vert(y) => current.y = y,
            Segment::CubicTo(CubicTo { to, .. })
            | Segment::SmoothCubicTo(SmoothCubicTo { to, .. })
            | Segment::QuadTo(QuadTo { to, .. })
            | Segment::EllipticArc(ArcTo { to, .. }) => current = to,
            Segment::ClosePath => current = subpath_start,
            _ => {}
        }
        result.push(abs);
    }
    result
}

/// Reduce absolute segments to moves, lines, cubics and closes.
///
/// Smooth curves reflect the previous control point when the previous
/// segment was of the matching kind, quadratics are raised to cubics and arcs
/// are approximated with [`arc_to_cubics`](crate::arc_to_cubics).
///
/// Relative segments are not expected here and are skipped, but they still
/// count as the previous segment when deciding whether to reflect. Run
/// [`absolutize`] first, or use [`normalize`] which does both.
pub fn reduce(segments: &[Segment]) -> BezPath {
    let mut path = BezPath::new();
    let mut current = Point::ZERO;
    let mut subpath_start = Point::ZERO;
    let mut last_control = Point::ZERO;
    let mut prev: Option<(SegmentKind, bool)> = None;

    let reflect = |current: Point, last_control: Point| current + (current - last_control);

    for &seg in segments {
        let after_cubic = matches!(
            prev,
            Some((SegmentKind::Cubic | SegmentKind::SmoothCubic, false))
        );
        let after_quad = matches!(
            prev,
            Some((SegmentKind::Quad | SegmentKind::SmoothQuad, false))
        );
        prev = Some((seg.kind(), seg.is_relative()));

        match seg {
            Segment::MoveTo(p) => {
                path.move_to(p);
                subpath_start = p;
                current = p;
            }
            Segment::LineTo(p) => {
                path.line_to(p);
                current = p;
            }
            Segment::Horiz(x) => {
                current.x = x;
                path.line_to(current);
            }
            Segment::Vert(y) => {
                current.y = y;
                path.line_to(current);
            }
            Segment::CubicTo(c) => {
                path.curve_to(c.ctrl1, c.ctrl2, c.to);
                last_control = c.ctrl2;
                current = c.to;
            }
            Segment::SmoothCubicTo(s) => {
                let ctrl1 = if after_cubic {
                    reflect(current, last_control)
                } else {
                    current
                };
                path.curve_to(ctrl1, s.ctrl2, s.to);
                last_control = s.ctrl2;
                current = s.to;
            }
            Segment::QuadTo(q) => {
                path.push(raise_quad(current, q.ctrl, q.to));
                last_control = q.ctrl;
                current = q.to;
            }
            Segment::SmoothQuadTo(to) => {
                let ctrl = if after_quad {
                    reflect(current, last_control)
                } else {
                    current
                };
                path.push(raise_quad(current, ctrl, to));
                last_control = ctrl;
                current = to;
            }
            Segment::EllipticArc(a) => {
                let arc = SvgArc {
                    from: current,
                    to: a.to,
                    radii: a.radii,
                    x_rotation: a.x_rotation,
                    large_arc: a.large_arc,
                    sweep: a.sweep,
                };
                let cubics = arc.to_cubics();
                if !cubics.is_empty() {
                    path.extend(
                        cubics
                            .iter()
                            .map(|c| PathEl::CurveTo(c.ctrl1, c.ctrl2, c.to)),
                    );
                    current = a.to;
                }
            }
            Segment::ClosePath => {
                path.close_path();
                current = subpath_start;
            }
            rel => trace!("reduce skipped relative segment {rel:?}"),
        }
    }
    path
}

/// Degree-raise a quadratic Bézier.
fn raise_quad(p0: Point, p1: Point, p2: Point) -> PathEl {
    let ctrl1 = Point::new(
        p0.x + 2.0 * (p1.x - p0.x) / 3.0,
        p0.y + 2.0 * (p1.y - p0.y) / 3.0,
    );
    let ctrl2 = Point::new(
        p2.x + 2.0 * (p1.x - p2.x) / 3.0,
        p2.y + 2.0 * (p1.y - p2.y) / 3.0,
    );
    PathEl::CurveTo(ctrl1, ctrl2, p2)
}

/// Normalize parsed path data: [`absolutize`], then [`reduce`].
///
/// The result holds only absolute moves, lines, cubics and closes. Running
/// it through again, via [`Segment::from`], reproduces it exactly.
///
/// # Examples
///
/// ```
/// use pathdata::svg::parse_path;
/// use pathdata::{normalize, PathEl, Point};
/// let path = normalize(&parse_path("M0,0 H10 V10 Z"));
/// assert_eq!(
///     path.elements(),
///     &[
///         PathEl::MoveTo(Point::new(0.0, 0.0)),
///         PathEl::LineTo(Point::new(10.0, 0.0)),
///         PathEl::LineTo(Point::new(10.0, 10.0)),
///         PathEl::ClosePath,
///     ]
/// );
/// ```
pub fn normalize(segments: &[Segment]) -> BezPath {
    reduce(&absolutize(segments))
}

impl BezPath {
    /// Parse SVG path data permissively and normalize it.
    ///
    /// Malformed data is truncated at the first error, see
    /// [`parse_path`](crate::svg::parse_path).
    pub fn from_svg(data: &str) -> BezPath {
        normalize(&parse_path(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::{parse, ParseMode};
    use crate::Vec2;
    use alloc::vec;
    use rand::Rng;

    fn el_m(x: f64, y: f64) -> PathEl {
        PathEl::MoveTo(Point::new(x, y))
    }

    fn el_l(x: f64, y: f64) -> PathEl {
        PathEl::LineTo(Point::new(x, y))
    }

    fn el_c(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> PathEl {
        PathEl::CurveTo(Point::new(x1, y1), Point::new(x2, y2), Point::new(x, y))
    }

    #[test]
    fn horizontal_vertical_close() {
        let segs = parse("M0,0 H10 V10 Z", ParseMode::Strict).unwrap();
        let path = reduce(&absolutize(&segs));
        assert_eq!(
            path.elements(),
            &[el_m(0.0, 0.0), el_l(10.0, 0.0), el_l(10.0, 10.0), PathEl::ClosePath]
        );
    }

    #[test]
    fn relative_commands_track_subpaths() {
        let path = BezPath::from_svg("m10 10 l5 0 h5 v5 z m1 1 l1 1");
        assert_eq!(
            path.elements(),
            &[
                el_m(10.0, 10.0),
                el_l(15.0, 10.0),
                el_l(20.0, 10.0),
                el_l(20.0, 15.0),
                PathEl::ClosePath,
                el_m(11.0, 11.0),
                el_l(12.0, 12.0),
            ]
        );
    }

    #[test]
    fn smooth_cubic_reflects() {
        let path = BezPath::from_svg("M0 0 C0 10 10 10 10 0 S20 -10 20 0");
        assert_eq!(path.elements()[2], el_c(10.0, -10.0, 20.0, -10.0, 20.0, 0.0));

        // Without a preceding cubic the first control is the current point.
        let path = BezPath::from_svg("M0 0 L10 0 S20 -10 20 0");
        assert_eq!(path.elements()[2], el_c(10.0, 0.0, 20.0, -10.0, 20.0, 0.0));
    }

    #[test]
    fn relative_cubic_is_skipped_by_reduce() {
        let segs = [
            Segment::MoveTo(Point::ZERO),
            Segment::CubicToRel(CubicTo {
                ctrl1: Point::new(0.0, 5.0),
                ctrl2: Point::new(5.0, 5.0),
                to: Point::new(5.0, 0.0),
            }),
            Segment::SmoothCubicTo(SmoothCubicTo {
                ctrl2: Point::new(10.0, 5.0),
                to: Point::new(10.0, 0.0),
            }),
        ];
        let path = reduce(&segs);
        assert_eq!(
            path.elements(),
            &[el_m(0.0, 0.0), el_c(0.0, 0.0, 10.0, 5.0, 10.0, 0.0)]
        );

        // Once absolutized the cubic is there to reflect.
        let path = normalize(&segs);
        assert_eq!(path.elements()[2], el_c(5.0, -5.0, 10.0, 5.0, 10.0, 0.0));
    }

    #[test]
    fn quadratics_are_raised() {
        let path = BezPath::from_svg("M0 0 Q30 30 60 0 T120 0");
        assert_eq!(
            path.elements(),
            &[
                el_m(0.0, 0.0),
                el_c(20.0, 20.0, 40.0, 20.0, 60.0, 0.0),
                el_c(80.0, -20.0, 100.0, -20.0, 120.0, 0.0),
            ]
        );

        let path = BezPath::from_svg("M0 0 L10 0 T20 0");
        assert_eq!(
            path.elements()[2],
            el_c(10.0, 0.0, 20.0 + 2.0 * (10.0 - 20.0) / 3.0, 0.0, 20.0, 0.0)
        );
    }

    #[test]
    fn arcs() {
        let path = BezPath::from_svg("M10,0 A10,10 0 0 1 0,10");
        assert_eq!(path.elements().len(), 2);
        assert_eq!(path.elements()[1].end_point(), Some(Point::new(0.0, 10.0)));

        // Zero radius draws a straight cubic.
        let path = BezPath::from_svg("M0 0 A0 5 0 0 1 10 10 L20 20");
        assert_eq!(
            path.elements(),
            &[el_m(0.0, 0.0), el_c(0.0, 0.0, 10.0, 10.0, 10.0, 10.0), el_l(20.0, 20.0)]
        );

        // An arc back to its start draws nothing.
        let path = BezPath::from_svg("M5 5 A5 5 0 0 1 5 5 L0 0");
        assert_eq!(path.elements(), &[el_m(5.0, 5.0), el_l(0.0, 0.0)]);

        // A relative arc ends relative to the current point.
        let path = BezPath::from_svg("M10 10 a5 5 0 1 1 10 0");
        assert_eq!(path.elements().len(), 3);
        let end = path.elements()[2].end_point().unwrap();
        assert!(end.distance(Point::new(20.0, 10.0)) < 1e-9);
    }

    #[test]
    fn close_returns_to_subpath_start() {
        let path = BezPath::from_svg("M1 1 L10 0 Z l5 5");
        assert_eq!(path.elements()[3], el_l(6.0, 6.0));
    }

    #[test]
    fn empty_input() {
        assert!(BezPath::from_svg("").is_empty());
        assert!(BezPath::from_svg("L1 1").is_empty());
    }

    fn random_point(rng: &mut impl Rng) -> Point {
        Point::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0))
    }

    fn random_relative_path(rng: &mut impl Rng, len: usize) -> Vec<Segment> {
        let mut segs = vec![Segment::MoveToRel(random_point(rng))];
        for _ in 0..len {
            let seg = match rng.random_range(0..10) {
                0 => Segment::MoveToRel(random_point(rng)),
                1 => Segment::LineToRel(random_point(rng)),
                2 => Segment::HorizRel(rng.random_range(-50.0..50.0)),
                3 => Segment::VertRel(rng.random_range(-50.0..50.0)),
                4 => Segment::CubicToRel(CubicTo {
                    ctrl1: random_point(rng),
                    ctrl2: random_point(rng),
                    to: random_point(rng),
                }),
                5 => Segment::SmoothCubicToRel(SmoothCubicTo {
                    ctrl2: random_point(rng),
                    to: random_point(rng),
                }),
                6 => Segment::QuadToRel(QuadTo {
                    ctrl: random_point(rng),
                    to: random_point(rng),
                }),
                7 => Segment::SmoothQuadToRel(random_point(rng)),
                8 => Segment::EllipticArcRel(ArcTo {
                    radii: Vec2::new(rng.random_range(1.0..50.0), rng.random_range(1.0..50.0)),
                    x_rotation: rng.random_range(0.0..360.0),
                    large_arc: rng.random_bool(0.5),
                    sweep: rng.random_bool(0.5),
                    to: random_point(rng),
                }),
                _ => Segment::ClosePath,
            };
            segs.push(seg);
        }
        segs
    }

    #[test]
    fn random_relative_paths() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let len = rng.random_range(0..20);
            let segs = random_relative_path(&mut rng, len);

            let abs = absolutize(&segs);
            assert_eq!(abs.len(), segs.len());
            assert!(abs.iter().all(|seg| !seg.is_relative()));

            let path = normalize(&segs);
            assert!(matches!(path.elements().first(), Some(PathEl::MoveTo(_))));

            // Normalizing again changes nothing.
            let again: Vec<Segment> = path.iter().map(Segment::from).collect();
            assert_eq!(normalize(&again), path);
        }
    }
}
