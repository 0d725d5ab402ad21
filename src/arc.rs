// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elliptical arcs in SVG endpoint form, and their conversion to cubic Béziers.

use core::f64::consts::PI;

use log::trace;
use smallvec::{smallvec, SmallVec};

use crate::svg::CubicTo;
use crate::{Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The widest angle, in radians, covered by a single cubic of a converted arc.
///
/// This is 120°. Wider arcs are split, so a full ellipse needs at most three
/// cubics.
pub const MAX_ARC_SPAN: f64 = PI * 120.0 / 180.0;

/// An elliptical arc as written in SVG path data: by its endpoints rather than
/// its center.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvgArc {
    /// The arc's start point.
    pub from: Point,
    /// The arc's end point.
    pub to: Point,
    /// The arc's radii, where the vector's x-component is the radius in the
    /// positive x direction after applying `x_rotation`.
    pub radii: Vec2,
    /// How much the arc is rotated, in degrees.
    pub x_rotation: f64,
    /// Does this arc sweep through more than π radians?
    pub large_arc: bool,
    /// Determines if the arc should begin moving at positive angles.
    pub sweep: bool,
}

impl SvgArc {
    /// Checks if this arc is drawn as a straight line.
    ///
    /// This is the case when either radius is zero.
    pub fn is_straight_line(&self) -> bool {
        self.radii.x == 0.0 || self.radii.y == 0.0
    }

    /// Convert this arc to cubic Béziers, see [`arc_to_cubics`].
    pub fn to_cubics(&self) -> SmallVec<[CubicTo; 4]> {
        arc_to_cubics(
            self.from,
            self.to,
            self.radii.x,
            self.radii.y,
            self.x_rotation,
            self.large_arc,
            self.sweep,
        )
    }
}

/// Approximate an SVG elliptical arc with cubic Béziers.
///
/// The arc is converted to center form, radii too small to reach the end
/// point are scaled up uniformly, and the swept angle is cut into pieces of
/// at most [`MAX_ARC_SPAN`], each approximated by one cubic. The first cubic
/// starts at `from`; each following one starts where the previous one ends.
///
/// Degenerate arcs: if either radius is zero, the result is a single straight
/// cubic `(from, to, to)`; otherwise, if `from == to`, it is empty.
///
/// # Examples
///
/// ```
/// use pathdata::{arc_to_cubics, Point};
/// let cubics = arc_to_cubics(
///     Point::new(10.0, 0.0),
///     Point::new(0.0, 10.0),
///     10.0,
///     10.0,
///     0.0,
///     false,
///     true,
/// );
/// assert_eq!(cubics.len(), 1);
/// assert!((cubics[0].ctrl1.y - 5.5228).abs() < 1e-4);
/// assert_eq!(cubics[0].to, Point::new(0.0, 10.0));
/// ```
pub fn arc_to_cubics(
    from: Point,
    to: Point,
    rx: f64,
    ry: f64,
    x_rotation: f64,
    large_arc: bool,
    sweep: bool,
) -> SmallVec<[CubicTo; 4]> {
    if rx == 0.0 || ry == 0.0 {
        return smallvec![CubicTo {
            ctrl1: from,
            ctrl2: to,
            to,
        }];
    }
    if from == to {
        return SmallVec::new();
    }

    let rad = PI * x_rotation / 180.0;
    // Work in a frame where the ellipse axes are aligned with x and y.
    let p1 = from.to_vec2().rotate(-rad);
    let p2 = to.to_vec2().rotate(-rad);
    let half = Vec2::new((p1.x - p2.x) / 2.0, (p1.y - p2.y) / 2.0);

    let (mut rx, mut ry) = (rx, ry);
    let h = (half.x * half.x) / (rx * rx) + (half.y * half.y) / (ry * ry);
    if h > 1.0 {
        let h = h.sqrt();
        rx *= h;
        ry *= h;
    }

    let sign = if large_arc == sweep { -1.0 } else { 1.0 };
    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let num = rx2 * ry2 - rx2 * half.y * half.y - ry2 * half.x * half.x;
    let den = rx2 * half.y * half.y + ry2 * half.x * half.x;
    let k = sign * (num / den).abs().sqrt();
    let center = Vec2::new(
        k * rx * half.y / ry + (p1.x + p2.x) / 2.0,
        k * -ry * half.x / rx + (p1.y + p2.y) / 2.0,
    );

    let angle_of = |p: Vec2| {
        let mut f = round9((p.y - center.y) / ry).asin();
        if p.x < center.x {
            f = PI - f;
        }
        if f < 0.0 {
            f += 2.0 * PI;
        }
        f
    };
    let mut f1 = angle_of(p1);
    let mut f2 = angle_of(p2);
    if sweep && f1 > f2 {
        f1 -= 2.0 * PI;
    }
    if !sweep && f2 > f1 {
        f2 -= 2.0 * PI;
    }

    let mut cubics = SmallVec::new();
    let mut start = p1;
    loop {
        let split = (f2 - f1).abs() > MAX_ARC_SPAN;
        let (f_end, end) = if split {
            let step = if sweep && f2 > f1 {
                MAX_ARC_SPAN
            } else {
                -MAX_ARC_SPAN
            };
            let f = f1 + step;
            (f, center + Vec2::new(rx * f.cos(), ry * f.sin()))
        } else {
            (f2, p2)
        };
        cubics.push(arc_segment(start, end, f1, f_end, rx, ry, rad));
        if !split {
            break;
        }
        start = end;
        f1 = f_end;
    }
    trace!("arc from {from:?} to {to:?} converted to {} cubics", cubics.len());
    cubics
}

/// One cubic for an arc spanning at most [`MAX_ARC_SPAN`], in the axis
/// aligned frame, rotated back by `rad`.
fn arc_segment(p1: Vec2, p2: Vec2, f1: f64, f2: f64, rx: f64, ry: f64, rad: f64) -> CubicTo {
    let t = ((f2 - f1) / 4.0).tan();
    let hx = 4.0 / 3.0 * rx * t;
    let hy = 4.0 / 3.0 * ry * t;
    let (s1, c1) = (f1.sin(), f1.cos());
    let (s2, c2) = (f2.sin(), f2.cos());

    let ctrl1 = p1 * 2.0 - Vec2::new(p1.x + hx * s1, p1.y - hy * c1);
    let ctrl2 = Vec2::new(p2.x + hx * s2, p2.y - hy * c2);
    CubicTo {
        ctrl1: ctrl1.rotate(rad).to_point(),
        ctrl2: ctrl2.rotate(rad).to_point(),
        to: p2.rotate(rad).to_point(),
    }
}

/// Round to 9 decimal places, so that values a hair outside `[-1, 1]` can
/// still go through `asin`.
fn round9(v: f64) -> f64 {
    (v * 1e9).round() / 1e9
}
