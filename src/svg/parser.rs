// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning path data into segments.

use core::iter::FusedIterator;

use log::debug;

use crate::svg::lexer::{is_number_start, Lexer};
use crate::svg::{
    ArcTo, CubicTo, ParseMode, QuadTo, Segment, SegmentKind, SmoothCubicTo, SvgParseError,
};
use crate::Vec2;

/// A lazy parser over SVG path data, yielding one [`Segment`] at a time.
///
/// Parsing stops at the first error. In [`ParseMode::Strict`] the error is
/// yielded once; in [`ParseMode::Permissive`] the iterator just ends. Either
/// way nothing follows it.
///
/// # Examples
///
/// ```
/// use pathdata::svg::{ParseMode, Segments};
/// let mut segs = Segments::new("M0 0 L1 1 L2", ParseMode::Strict);
/// assert!(segs.next().unwrap().is_ok());
/// assert!(segs.next().unwrap().is_ok());
/// assert!(segs.next().unwrap().is_err());
/// assert!(segs.next().is_none());
/// ```
#[derive(Debug)]
pub struct Segments<'a> {
    lexer: Lexer<'a>,
    mode: ParseMode,
    /// The command of the previous segment, for implicit repetition.
    prev: Option<(SegmentKind, bool)>,
    done: bool,
}

impl<'a> Segments<'a> {
    /// Start parsing `data`.
    pub fn new(data: &'a str, mode: ParseMode) -> Segments<'a> {
        let mut lexer = Lexer::new(data);
        lexer.skip_ws();
        Segments {
            lexer,
            mode,
            prev: None,
            done: false,
        }
    }

    /// Determine which command the next segment uses, consuming its letter if
    /// there is one.
    fn command(&mut self, c: u8) -> Result<(SegmentKind, bool), SvgParseError> {
        if let Some(cmd) = SegmentKind::from_command(c) {
            self.lexer.bump();
            return Ok(cmd);
        }
        match self.prev {
            Some((kind, relative)) if kind != SegmentKind::Close && is_number_start(c) => {
                Ok((kind.repeated(), relative))
            }
            _ => Err(SvgParseError::UnknownCommand {
                command: self.lexer.current_char(),
                offset: self.lexer.offset(),
            }),
        }
    }

    fn parse_segment(&mut self) -> Result<Option<Segment>, SvgParseError> {
        let Some(c) = self.lexer.peek() else {
            return Ok(None);
        };
        if self.prev.is_none() && !matches!(c, b'M' | b'm') {
            return Err(SvgParseError::MissingMoveTo {
                command: self.lexer.current_char(),
            });
        }
        let (kind, relative) = self.command(c)?;
        self.prev = Some((kind, relative));

        let lexer = &mut self.lexer;
        let pick = |abs: Segment, rel: Segment| if relative { rel } else { abs };
        let seg = match kind {
            SegmentKind::Move => {
                let p = lexer.point()?;
                pick(Segment::MoveTo(p), Segment::MoveToRel(p))
            }
            SegmentKind::Line => {
                let p = lexer.point()?;
                pick(Segment::LineTo(p), Segment::LineToRel(p))
            }
            SegmentKind::Horiz => {
                let x = lexer.number()?;
                pick(Segment::Horiz(x), Segment::HorizRel(x))
            }
            SegmentKind::Vert => {
                let y = lexer.number()?;
                pick(Segment::Vert(y), Segment::VertRel(y))
            }
            SegmentKind::Cubic => {
                let cubic = CubicTo {
                    ctrl1: lexer.point()?,
                    ctrl2: lexer.point()?,
                    to: lexer.point()?,
                };
                pick(Segment::CubicTo(cubic), Segment::CubicToRel(cubic))
            }
            SegmentKind::SmoothCubic => {
                let s = SmoothCubicTo {
                    ctrl2: lexer.point()?,
                    to: lexer.point()?,
                };
                pick(Segment::SmoothCubicTo(s), Segment::SmoothCubicToRel(s))
            }
            SegmentKind::Quad => {
                let q = QuadTo {
                    ctrl: lexer.point()?,
                    to: lexer.point()?,
                };
                pick(Segment::QuadTo(q), Segment::QuadToRel(q))
            }
            SegmentKind::SmoothQuad => {
                let p = lexer.point()?;
                pick(Segment::SmoothQuadTo(p), Segment::SmoothQuadToRel(p))
            }
            SegmentKind::Arc => {
                let rx = lexer.number()?;
                let ry = lexer.number()?;
                let x_rotation = lexer.number()?;
                let large_arc = lexer.flag()?;
                let sweep = lexer.flag()?;
                let to = lexer.point()?;
                let a = ArcTo {
                    radii: Vec2::new(rx, ry),
                    x_rotation,
                    large_arc,
                    sweep,
                    to,
                };
                pick(Segment::EllipticArc(a), Segment::EllipticArcRel(a))
            }
            SegmentKind::Close => {
                lexer.skip_ws();
                Segment::ClosePath
            }
        };
        Ok(Some(seg))
    }
}

impl Iterator for Segments<'_> {
    type Item = Result<Segment, SvgParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.parse_segment() {
            Ok(Some(seg)) => Some(Ok(seg)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                match self.mode {
                    ParseMode::Strict => Some(Err(err)),
                    ParseMode::Permissive => {
                        debug!("path data truncated: {err}");
                        None
                    }
                }
            }
        }
    }
}

impl FusedIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use crate::svg::{ParseMode, Segment, Segments, SvgParseError};
    use crate::Point;

    #[test]
    fn strict_yields_error_once() {
        let mut segs = Segments::new("M0 0 Lx", ParseMode::Strict);
        assert_eq!(segs.next(), Some(Ok(Segment::MoveTo(Point::ZERO))));
        assert_eq!(
            segs.next(),
            Some(Err(SvgParseError::MalformedNumber { offset: 6 }))
        );
        assert_eq!(segs.next(), None);
        assert_eq!(segs.next(), None);
    }

    #[test]
    fn permissive_ends_quietly() {
        let mut segs = Segments::new("M0 0 Lx", ParseMode::Permissive);
        assert_eq!(segs.next(), Some(Ok(Segment::MoveTo(Point::ZERO))));
        assert_eq!(segs.next(), None);
    }

    #[test]
    fn leading_whitespace() {
        let segs: Vec<_> = Segments::new(" \t\nM1 2", ParseMode::Strict).collect();
        assert_eq!(segs, [Ok(Segment::MoveTo(Point::new(1.0, 2.0)))]);
    }

    #[test]
    fn numbers_run_together() {
        let segs: Vec<_> = Segments::new("M-1-2L.5.5 10-5", ParseMode::Strict)
            .map(Result::unwrap)
            .collect();
        assert_eq!(
            segs,
            [
                Segment::MoveTo(Point::new(-1.0, -2.0)),
                Segment::LineTo(Point::new(0.5, 0.5)),
                Segment::LineTo(Point::new(10.0, -5.0)),
            ]
        );
    }

    #[test]
    fn closes_then_moves() {
        let segs: Vec<_> = Segments::new("M0 0 L1 0 z m2 2 l1 1 Z", ParseMode::Strict)
            .map(Result::unwrap)
            .collect();
        assert_eq!(segs.len(), 6);
        assert_eq!(segs[2], Segment::ClosePath);
        assert_eq!(segs[3], Segment::MoveToRel(Point::new(2.0, 2.0)));
    }
}
