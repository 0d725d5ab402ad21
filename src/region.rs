// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-in-region tests by ray casting.

use alloc::vec::Vec;

use log::trace;

use crate::svg::{self, ParseMode, SvgParseError};
use crate::{normalize, Line, PathSeg, Point, Vec2};

/// How far outside the region the ray starts, on each axis.
pub const REFERENCE_MARGIN: f64 = 10.0;

/// Split SVG path data into lines and cubic Béziers.
///
/// The data is parsed strictly and normalized. Every close contributes a line
/// back to the start of its subpath, unless the subpath already ends there.
/// Zero-length lines are dropped.
///
/// # Errors
///
/// Returns the first [`SvgParseError`] in `data`.
///
/// # Examples
///
/// ```
/// use pathdata::{split_segments, PathSeg};
/// let segs = split_segments("M0,0 L10,0 L10,10 L0,10 Z").unwrap();
/// assert_eq!(segs.len(), 4);
/// assert!(segs.iter().all(|seg| matches!(seg, PathSeg::Line(_))));
///
/// assert!(split_segments("M0,0 L10").is_err());
/// ```
pub fn split_segments(data: &str) -> Result<Vec<PathSeg>, SvgParseError> {
    let segments = svg::parse(data, ParseMode::Strict)?;
    let path = normalize(&segments);
    Ok(prune_zero_length(path.segments()))
}

/// Collect segments, leaving out lines that start where they end.
pub(crate) fn prune_zero_length(segs: impl Iterator<Item = PathSeg>) -> Vec<PathSeg> {
    segs.filter(|seg| match seg {
        PathSeg::Line(line) if line.is_zero_length() => {
            trace!("dropping zero-length line at {:?}", line.p0);
            false
        }
        _ => true,
    })
    .collect()
}

/// Test whether a point lies inside the region bounded by `segments`.
///
/// A ray is cast to `pt` from a reference point that lies outside every
/// segment: [`REFERENCE_MARGIN`] below and left of the smallest coordinate
/// among all segment points, or of the origin if that is smaller. Distinct
/// crossing points are counted and an odd count means inside.
///
/// Crossings are deduplicated by exact equality, so a ray through a joint
/// between two segments counts once. Points on the boundary get no special
/// treatment and may land either way.
pub fn is_point_in_region(pt: Point, segments: &[PathSeg]) -> bool {
    let min = segments
        .iter()
        .flat_map(PathSeg::points)
        .fold(Point::ZERO, Point::min);
    let reference = min - Vec2::new(REFERENCE_MARGIN, REFERENCE_MARGIN);
    let ray = Line::new(reference, pt);

    let mut crossings: Vec<Point> = Vec::new();
    for seg in segments {
        for p in seg.intersect_line(&ray) {
            if !crossings.contains(&p) {
                crossings.push(p);
            }
        }
    }
    trace!("ray from {reference:?} to {pt:?} crosses {} times", crossings.len());
    crossings.len() % 2 == 1
}

/// Test whether a point lies inside the region bounded by SVG path data.
///
/// This is [`split_segments`] followed by [`is_point_in_region`].
///
/// # Errors
///
/// Returns the first [`SvgParseError`] in `data`.
///
/// # Examples
///
/// ```
/// use pathdata::{is_point_in_path, Point};
/// let square = "M0,0 L10,0 L10,10 L0,10 Z";
/// assert!(is_point_in_path(Point::new(5.0, 5.0), square).unwrap());
/// assert!(!is_point_in_path(Point::new(15.0, 5.0), square).unwrap());
/// ```
pub fn is_point_in_path(pt: Point, data: &str) -> Result<bool, SvgParseError> {
    let segments = split_segments(data)?;
    Ok(is_point_in_region(pt, &segments))
}
