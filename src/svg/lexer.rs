// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scanning numbers, flags and separators out of path data.

use crate::svg::SvgParseError;
use crate::Point;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A byte cursor over path data.
///
/// The cursor only ever steps over ASCII bytes, so it always sits on a
/// character boundary.
#[derive(Debug)]
pub(crate) struct Lexer<'a> {
    data: &'a str,
    ix: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(data: &'a str) -> Lexer<'a> {
        Lexer { data, ix: 0 }
    }

    pub(crate) fn offset(&self) -> usize {
        self.ix
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.data.as_bytes().get(self.ix).copied()
    }

    fn peek_at(&self, n: usize) -> Option<u8> {
        self.data.as_bytes().get(self.ix + n).copied()
    }

    /// Step over the current byte, which must be ASCII.
    pub(crate) fn bump(&mut self) {
        self.ix += 1;
    }

    /// The character at the cursor, for error reporting.
    pub(crate) fn current_char(&self) -> char {
        self.data
            .get(self.ix..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or_default()
    }

    fn digit(&self) -> Option<f64> {
        match self.peek() {
            Some(c @ b'0'..=b'9') => Some(f64::from(c - b'0')),
            _ => None,
        }
    }

    pub(crate) fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !is_ws(c) {
                break;
            }
            self.ix += 1;
        }
    }

    /// Skip whitespace with at most one comma in it.
    ///
    /// Nothing is skipped unless the cursor is on whitespace or a comma.
    pub(crate) fn skip_separator(&mut self) {
        match self.peek() {
            Some(c) if is_ws(c) || c == b',' => {}
            _ => return,
        }
        self.skip_ws();
        if self.peek() == Some(b',') {
            self.ix += 1;
            self.skip_ws();
        }
    }

    fn malformed_number(&self) -> SvgParseError {
        SvgParseError::MalformedNumber { offset: self.ix }
    }

    /// An `e` or `E` starts an exponent unless it is the last character or
    /// begins an `em`/`ex` unit.
    fn at_exponent(&self) -> bool {
        matches!(self.peek(), Some(b'e' | b'E'))
            && !matches!(self.peek_at(1), None | Some(b'x' | b'm'))
    }

    /// Scan a number and the separator after it.
    pub(crate) fn number(&mut self) -> Result<f64, SvgParseError> {
        self.skip_ws();
        let mut sign = 1.0;
        match self.peek() {
            Some(b'+') => self.ix += 1,
            Some(b'-') => {
                self.ix += 1;
                sign = -1.0;
            }
            _ => {}
        }
        if !matches!(self.peek(), Some(b'0'..=b'9' | b'.')) {
            return Err(self.malformed_number());
        }

        let mut integer = 0.0;
        while let Some(d) = self.digit() {
            integer = integer * 10.0 + d;
            self.ix += 1;
        }

        let mut decimal = 0.0;
        if self.peek() == Some(b'.') {
            self.ix += 1;
            if self.digit().is_none() {
                return Err(self.malformed_number());
            }
            let mut frac = 1.0;
            while let Some(d) = self.digit() {
                frac *= 10.0;
                decimal += d / frac;
                self.ix += 1;
            }
        }

        let mut exponent = 0.0;
        let mut exp_sign = 1.0;
        if self.at_exponent() {
            self.ix += 1;
            match self.peek() {
                Some(b'+') => self.ix += 1,
                Some(b'-') => {
                    self.ix += 1;
                    exp_sign = -1.0;
                }
                _ => {}
            }
            if self.digit().is_none() {
                return Err(self.malformed_number());
            }
            while let Some(d) = self.digit() {
                exponent = exponent * 10.0 + d;
                self.ix += 1;
            }
        }

        let mut value = sign * (integer + decimal);
        if exponent != 0.0 {
            value *= 10.0f64.powf(exp_sign * exponent);
        }
        self.skip_separator();
        Ok(value)
    }

    /// Scan two numbers as a point.
    pub(crate) fn point(&mut self) -> Result<Point, SvgParseError> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(Point::new(x, y))
    }

    /// Scan an arc flag: exactly one `0` or `1`, then a separator.
    ///
    /// Whitespace is not skipped before the flag.
    pub(crate) fn flag(&mut self) -> Result<bool, SvgParseError> {
        let flag = match self.peek() {
            Some(b'0') => false,
            Some(b'1') => true,
            _ => return Err(SvgParseError::MalformedFlag { offset: self.ix }),
        };
        self.ix += 1;
        self.skip_separator();
        Ok(flag)
    }
}

fn is_ws(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0C)
}

/// Can this byte begin a number?
pub(crate) fn is_number_start(c: u8) -> bool {
    matches!(c, b'+' | b'-' | b'.' | b'0'..=b'9')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(data: &str) -> Result<(f64, usize), SvgParseError> {
        let mut lexer = Lexer::new(data);
        let value = lexer.number()?;
        Ok((value, lexer.offset()))
    }

    #[test]
    fn integers_and_signs() {
        assert_eq!(scan("42"), Ok((42.0, 2)));
        assert_eq!(scan("  -7 "), Ok((-7.0, 5)));
        assert_eq!(scan("+3,"), Ok((3.0, 3)));
    }

    #[test]
    fn fractions() {
        assert_eq!(scan(".5"), Ok((0.5, 2)));
        assert_eq!(scan("-0.25"), Ok((-0.25, 5)));
        // The second period starts the next number.
        assert_eq!(scan("0.5.5"), Ok((0.5, 3)));
        assert_eq!(
            scan("1.x"),
            Err(SvgParseError::MalformedNumber { offset: 2 })
        );
    }

    #[test]
    fn exponents() {
        assert_eq!(scan("1e2"), Ok((100.0, 3)));
        assert_eq!(scan("2E+1"), Ok((20.0, 4)));
        let (v, _) = scan("5e-1").unwrap();
        assert!((v - 0.5).abs() < 1e-15);
        // Zero exponent leaves the value alone.
        assert_eq!(scan("3e0"), Ok((3.0, 3)));
        assert_eq!(
            scan("1e+"),
            Err(SvgParseError::MalformedNumber { offset: 3 })
        );
    }

    #[test]
    fn unit_suffixes_are_not_exponents() {
        assert_eq!(scan("1em"), Ok((1.0, 1)));
        assert_eq!(scan("1ex"), Ok((1.0, 1)));
        // A trailing marker is left for the caller.
        assert_eq!(scan("1e"), Ok((1.0, 1)));
    }

    #[test]
    fn separators() {
        let mut lexer = Lexer::new("1 , 2,3 4");
        assert_eq!(lexer.number(), Ok(1.0));
        assert_eq!(lexer.number(), Ok(2.0));
        assert_eq!(lexer.number(), Ok(3.0));
        assert_eq!(lexer.number(), Ok(4.0));
        assert_eq!(lexer.peek(), None);

        // Two commas in a row are not a separator.
        let mut lexer = Lexer::new("1,,2");
        assert_eq!(lexer.number(), Ok(1.0));
        assert_eq!(
            lexer.number(),
            Err(SvgParseError::MalformedNumber { offset: 2 })
        );
    }

    #[test]
    fn not_a_number() {
        assert_eq!(scan(""), Err(SvgParseError::MalformedNumber { offset: 0 }));
        assert_eq!(scan("-"), Err(SvgParseError::MalformedNumber { offset: 1 }));
        assert_eq!(scan(" x"), Err(SvgParseError::MalformedNumber { offset: 1 }));
    }

    #[test]
    fn flags() {
        let mut lexer = Lexer::new("10 1");
        assert_eq!(lexer.flag(), Ok(true));
        assert_eq!(lexer.flag(), Ok(false));
        assert_eq!(lexer.flag(), Ok(true));
        assert_eq!(
            lexer.flag(),
            Err(SvgParseError::MalformedFlag { offset: 4 })
        );

        let mut lexer = Lexer::new(" 1");
        assert_eq!(lexer.flag(), Err(SvgParseError::MalformedFlag { offset: 0 }));
    }
}
