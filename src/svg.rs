// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path data representation and parsing.
//!
//! [`Segment`] mirrors the path grammar one command at a time, keeping the
//! distinction between absolute and relative commands and between the
//! shorthand forms (`H`, `V`, `S`, `T`) and the full ones. Turning this into
//! plain geometry is the job of [`normalize`](crate::normalize).

use alloc::vec::Vec;

use smallvec::{smallvec, SmallVec};

use crate::{PathEl, Point, Vec2};

mod lexer;
mod parser;

pub use parser::Segments;

/// A single command from SVG path data, with its operands.
///
/// Relative variants hold offsets from the current point; absolute ones hold
/// coordinates. Horizontal and vertical variants hold a single coordinate (or
/// offset) along their axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// `M`: Start a new subpath at the given point.
    MoveTo(Point),
    /// `m`: Start a new subpath, offset from the current point.
    MoveToRel(Point),
    /// `L`: Draw a line from the current point to the given point.
    LineTo(Point),
    /// `l`: Draw a line to a point offset from the current point.
    LineToRel(Point),
    /// `H`: Draw a horizontal line to the given x coordinate.
    Horiz(f64),
    /// `h`: Draw a horizontal line of the given length.
    HorizRel(f64),
    /// `V`: Draw a vertical line to the given y coordinate.
    Vert(f64),
    /// `v`: Draw a vertical line of the given length.
    VertRel(f64),
    /// `C`: Draw a cubic Bézier curve from the current point.
    CubicTo(CubicTo),
    /// `c`: Draw a cubic Bézier curve with all points offset from the current
    /// point.
    CubicToRel(CubicTo),
    /// `S`: Draw a smooth cubic Bézier curve.
    ///
    /// The first control point is inferred from the previous segment; see
    /// [`SmoothCubicTo`].
    SmoothCubicTo(SmoothCubicTo),
    /// `s`: Relative form of [`SmoothCubicTo`](Segment::SmoothCubicTo).
    SmoothCubicToRel(SmoothCubicTo),
    /// `Q`: Draw a quadratic Bézier curve from the current point.
    QuadTo(QuadTo),
    /// `q`: Relative form of [`QuadTo`](Segment::QuadTo).
    QuadToRel(QuadTo),
    /// `T`: Draw a smooth quadratic Bézier curve to the given point.
    ///
    /// The control point is the reflection of the previous quadratic control
    /// point, or the current point if the previous segment was not quadratic.
    SmoothQuadTo(Point),
    /// `t`: Relative form of [`SmoothQuadTo`](Segment::SmoothQuadTo).
    SmoothQuadToRel(Point),
    /// `A`: Draw an elliptical arc.
    EllipticArc(ArcTo),
    /// `a`: Draw an elliptical arc whose end point is offset from the
    /// current point.
    ///
    /// Radii, rotation and flags are never relative.
    EllipticArcRel(ArcTo),
    /// `Z`, `z`: Close the current subpath.
    ClosePath,
}

/// The parameters of a `CubicTo` or `CubicToRel` segment.
///
/// This is also the unit produced by the arc converter, where the start point
/// is implied by the end of the previous curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicTo {
    /// The first control point (from the start)
    pub ctrl1: Point,
    /// The second control point (from the start)
    pub ctrl2: Point,
    /// The point that this curve ends at
    pub to: Point,
}

/// The parameters of a `SmoothCubicTo` or `SmoothCubicToRel` segment.
///
/// The first control point is the reflection of the second control point of
/// the previous curve, or the current point if the previous segment was not a
/// cubic Bézier.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothCubicTo {
    /// The second control point (from the start)
    pub ctrl2: Point,
    /// The point that this curve ends at
    pub to: Point,
}

/// The parameters of a `QuadTo` or `QuadToRel` segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadTo {
    /// The control point
    pub ctrl: Point,
    /// The point that this curve ends at
    pub to: Point,
}

/// The parameters of an `EllipticArc` or `EllipticArcRel` segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcTo {
    /// The arc's radii, where the vector's x-component is the radius in the
    /// positive x direction after applying `x_rotation`.
    pub radii: Vec2,
    /// How much the arc is rotated, in degrees.
    pub x_rotation: f64,
    /// Does this arc sweep through more than π radians?
    pub large_arc: bool,
    /// Determines if the arc should begin moving at positive angles.
    pub sweep: bool,
    /// The arc's end point.
    pub to: Point,
}

/// The kind of a path command, independent of whether it is relative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentKind {
    /// `M`, `m`
    Move,
    /// `L`, `l`
    Line,
    /// `H`, `h`
    Horiz,
    /// `V`, `v`
    Vert,
    /// `C`, `c`
    Cubic,
    /// `S`, `s`
    SmoothCubic,
    /// `Q`, `q`
    Quad,
    /// `T`, `t`
    SmoothQuad,
    /// `A`, `a`
    Arc,
    /// `Z`, `z`
    Close,
}

impl SegmentKind {
    /// Look up a command letter, returning its kind and whether it is
    /// relative.
    ///
    /// Both `Z` and `z` close the path and are reported as absolute.
    pub fn from_command(command: u8) -> Option<(SegmentKind, bool)> {
        let kind = match command.to_ascii_uppercase() {
            b'M' => SegmentKind::Move,
            b'L' => SegmentKind::Line,
            b'H' => SegmentKind::Horiz,
            b'V' => SegmentKind::Vert,
            b'C' => SegmentKind::Cubic,
            b'S' => SegmentKind::SmoothCubic,
            b'Q' => SegmentKind::Quad,
            b'T' => SegmentKind::SmoothQuad,
            b'A' => SegmentKind::Arc,
            b'Z' => return Some((SegmentKind::Close, false)),
            _ => return None,
        };
        Some((kind, command.is_ascii_lowercase()))
    }

    /// The command letter for this kind.
    pub fn command(self, relative: bool) -> char {
        let upper = match self {
            SegmentKind::Move => 'M',
            SegmentKind::Line => 'L',
            SegmentKind::Horiz => 'H',
            SegmentKind::Vert => 'V',
            SegmentKind::Cubic => 'C',
            SegmentKind::SmoothCubic => 'S',
            SegmentKind::Quad => 'Q',
            SegmentKind::SmoothQuad => 'T',
            SegmentKind::Arc => 'A',
            SegmentKind::Close => return 'Z',
        };
        if relative {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }

    /// The number of operands a command of this kind takes.
    pub fn arity(self) -> usize {
        match self {
            SegmentKind::Close => 0,
            SegmentKind::Horiz | SegmentKind::Vert => 1,
            SegmentKind::Move | SegmentKind::Line | SegmentKind::SmoothQuad => 2,
            SegmentKind::SmoothCubic | SegmentKind::Quad => 4,
            SegmentKind::Cubic => 6,
            SegmentKind::Arc => 7,
        }
    }

    /// The kind used when operands follow without a new command letter.
    ///
    /// Extra coordinate pairs after a move are lines.
    pub(crate) fn repeated(self) -> SegmentKind {
        match self {
            SegmentKind::Move => SegmentKind::Line,
            kind => kind,
        }
    }
}

impl Segment {
    /// The kind of command this segment represents.
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::MoveTo(_) | Segment::MoveToRel(_) => SegmentKind::Move,
            Segment::LineTo(_) | Segment::LineToRel(_) => SegmentKind::Line,
            Segment::Horiz(_) | Segment::HorizRel(_) => SegmentKind::Horiz,
            Segment::Vert(_) | Segment::VertRel(_) => SegmentKind::Vert,
            Segment::CubicTo(_) | Segment::CubicToRel(_) => SegmentKind::Cubic,
            Segment::SmoothCubicTo(_) | Segment::SmoothCubicToRel(_) => SegmentKind::SmoothCubic,
            Segment::QuadTo(_) | Segment::QuadToRel(_) => SegmentKind::Quad,
            Segment::SmoothQuadTo(_) | Segment::SmoothQuadToRel(_) => SegmentKind::SmoothQuad,
            Segment::EllipticArc(_) | Segment::EllipticArcRel(_) => SegmentKind::Arc,
            Segment::ClosePath => SegmentKind::Close,
        }
    }

    /// Whether the operands of this segment are relative to the current point.
    pub fn is_relative(&self) -> bool {
        matches!(
            self,
            Segment::MoveToRel(_)
                | Segment::LineToRel(_)
                | Segment::HorizRel(_)
                | Segment::VertRel(_)
                | Segment::CubicToRel(_)
                | Segment::SmoothCubicToRel(_)
                | Segment::QuadToRel(_)
                | Segment::SmoothQuadToRel(_)
                | Segment::EllipticArcRel(_)
        )
    }

    /// The command letter of this segment.
    pub fn command(&self) -> char {
        self.kind().command(self.is_relative())
    }

    /// The operands in the order they are written in path data.
    ///
    /// Arc flags are reported as `0.0` or `1.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathdata::svg::{parse_path, Segment};
    /// let segs = parse_path("M1 2 a5 6 30 1 0 7 8");
    /// assert_eq!(segs[1].command(), 'a');
    /// assert_eq!(segs[1].operands().as_slice(), &[5.0, 6.0, 30.0, 1.0, 0.0, 7.0, 8.0]);
    /// ```
    pub fn operands(&self) -> SmallVec<[f64; 7]> {
        match *self {
            Segment::MoveTo(p)
            | Segment::MoveToRel(p)
            | Segment::LineTo(p)
            | Segment::LineToRel(p)
            | Segment::SmoothQuadTo(p)
            | Segment::SmoothQuadToRel(p) => smallvec![p.x, p.y],
            Segment::Horiz(v) | Segment::HorizRel(v) | Segment::Vert(v) | Segment::VertRel(v) => {
                smallvec![v]
            }
            Segment::CubicTo(c) | Segment::CubicToRel(c) => smallvec![
                c.ctrl1.x, c.ctrl1.y, c.ctrl2.x, c.ctrl2.y, c.to.x, c.to.y
            ],
            Segment::SmoothCubicTo(s) | Segment::SmoothCubicToRel(s) => {
                smallvec![s.ctrl2.x, s.ctrl2.y, s.to.x, s.to.y]
            }
            Segment::QuadTo(q) | Segment::QuadToRel(q) => {
                smallvec![q.ctrl.x, q.ctrl.y, q.to.x, q.to.y]
            }
            Segment::EllipticArc(a) | Segment::EllipticArcRel(a) => smallvec![
                a.radii.x,
                a.radii.y,
                a.x_rotation,
                f64::from(u8::from(a.large_arc)),
                f64::from(u8::from(a.sweep)),
                a.to.x,
                a.to.y,
            ],
            Segment::ClosePath => SmallVec::new(),
        }
    }

    /// Build a segment from a kind and its operands, the inverse of
    /// [`operands`](Segment::operands).
    ///
    /// Returns `None` if the number of operands does not match the kind's
    /// [arity](SegmentKind::arity). Arc flags are set for any non-zero value.
    pub fn from_operands(kind: SegmentKind, relative: bool, operands: &[f64]) -> Option<Segment> {
        if operands.len() != kind.arity() {
            return None;
        }
        let pt = |i: usize| Point::new(operands[i], operands[i + 1]);
        let pick = |abs: Segment, rel: Segment| if relative { rel } else { abs };
        let seg = match kind {
            SegmentKind::Move => pick(Segment::MoveTo(pt(0)), Segment::MoveToRel(pt(0))),
            SegmentKind::Line => pick(Segment::LineTo(pt(0)), Segment::LineToRel(pt(0))),
            SegmentKind::Horiz => pick(Segment::Horiz(operands[0]), Segment::HorizRel(operands[0])),
            SegmentKind::Vert => pick(Segment::Vert(operands[0]), Segment::VertRel(operands[0])),
            SegmentKind::Cubic => {
                let c = CubicTo {
                    ctrl1: pt(0),
                    ctrl2: pt(2),
                    to: pt(4),
                };
                pick(Segment::CubicTo(c), Segment::CubicToRel(c))
            }
            SegmentKind::SmoothCubic => {
                let s = SmoothCubicTo {
                    ctrl2: pt(0),
                    to: pt(2),
                };
                pick(Segment::SmoothCubicTo(s), Segment::SmoothCubicToRel(s))
            }
            SegmentKind::Quad => {
                let q = QuadTo {
                    ctrl: pt(0),
                    to: pt(2),
                };
                pick(Segment::QuadTo(q), Segment::QuadToRel(q))
            }
            SegmentKind::SmoothQuad => {
                pick(Segment::SmoothQuadTo(pt(0)), Segment::SmoothQuadToRel(pt(0)))
            }
            SegmentKind::Arc => {
                let a = ArcTo {
                    radii: Vec2::new(operands[0], operands[1]),
                    x_rotation: operands[2],
                    large_arc: operands[3] != 0.0,
                    sweep: operands[4] != 0.0,
                    to: pt(5),
                };
                pick(Segment::EllipticArc(a), Segment::EllipticArcRel(a))
            }
            SegmentKind::Close => Segment::ClosePath,
        };
        Some(seg)
    }
}

impl From<PathEl> for Segment {
    fn from(el: PathEl) -> Segment {
        match el {
            PathEl::MoveTo(p) => Segment::MoveTo(p),
            PathEl::LineTo(p) => Segment::LineTo(p),
            PathEl::CurveTo(ctrl1, ctrl2, to) => Segment::CubicTo(CubicTo { ctrl1, ctrl2, to }),
            PathEl::ClosePath => Segment::ClosePath,
        }
    }
}

/// How the parser reacts to malformed path data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseMode {
    /// Stop at the first error and keep every segment parsed before it.
    ///
    /// This is how user agents render broken path data.
    #[default]
    Permissive,
    /// Report the first error and discard the partial result.
    Strict,
}

/// An error which can be returned when parsing SVG path data.
///
/// Offsets are byte offsets into the input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SvgParseError {
    /// A number was expected but the input does not form one.
    #[error("malformed number at byte {offset}")]
    MalformedNumber {
        /// Where the offending character is.
        offset: usize,
    },
    /// An arc flag was not `0` or `1`.
    #[error("malformed arc flag at byte {offset}, expected `0` or `1`")]
    MalformedFlag {
        /// Where the offending character is.
        offset: usize,
    },
    /// A character that is neither a command letter nor, after a repeatable
    /// command, the start of a number.
    #[error("unexpected `{command}` at byte {offset}")]
    UnknownCommand {
        /// The offending character.
        command: char,
        /// Where the offending character is.
        offset: usize,
    },
    /// Path data must begin with `M` or `m`.
    #[error("path data must begin with a move command, found `{command}`")]
    MissingMoveTo {
        /// The first character of the path data.
        command: char,
    },
}

impl SvgParseError {
    /// The byte offset at which parsing failed.
    ///
    /// A missing initial move always fails at the first non-whitespace
    /// character, which has no fixed offset and reports `None`.
    pub fn offset(&self) -> Option<usize> {
        match *self {
            SvgParseError::MalformedNumber { offset }
            | SvgParseError::MalformedFlag { offset }
            | SvgParseError::UnknownCommand { offset, .. } => Some(offset),
            SvgParseError::MissingMoveTo { .. } => None,
        }
    }
}

/// Parse SVG path data.
///
/// In [`ParseMode::Permissive`] this never fails: the result holds every
/// segment before the first error. In [`ParseMode::Strict`] the first error is
/// returned instead. Empty or whitespace-only input is a valid, empty path in
/// both modes.
///
/// # Errors
///
/// In strict mode, returns the first [`SvgParseError`] in `data`.
///
/// # Examples
///
/// ```
/// use pathdata::svg::{parse, ParseMode, SvgParseError};
/// let segs = parse("M0,0 L10,0 10,10", ParseMode::Strict).unwrap();
/// assert_eq!(segs.len(), 3);
///
/// let err = parse("M0,0 L10,x", ParseMode::Strict).unwrap_err();
/// assert_eq!(err, SvgParseError::MalformedNumber { offset: 9 });
/// ```
pub fn parse(data: &str, mode: ParseMode) -> Result<Vec<Segment>, SvgParseError> {
    Segments::new(data, mode).collect()
}

/// Parse SVG path data permissively.
///
/// Parsing stops at the first malformed command; everything before it is
/// returned. Data that does not begin with a move yields nothing.
///
/// # Examples
///
/// ```
/// use pathdata::svg::parse_path;
/// assert_eq!(parse_path("M0,0 L1,1 X").len(), 2);
/// assert!(parse_path("L1,1").is_empty());
/// ```
pub fn parse_path(data: &str) -> Vec<Segment> {
    Segments::new(data, ParseMode::Permissive)
        .filter_map(Result::ok)
        .collect()
}
