// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path data: parsing, normalization and point containment.
//!
//! The pathdata library reads the `d` attribute grammar of SVG paths into
//! [`svg::Segment`]s, reduces them to a [`BezPath`] of absolute moves, lines,
//! cubic Béziers and closes, and answers whether a point lies inside the
//! region a path bounds.
//!
//! # Examples
//!
//! Normalizing path data:
//! ```
//! use pathdata::{BezPath, PathEl, Point};
//!
//! let path = BezPath::from_svg("m10 10 h20 q10 0 10 10 z");
//! assert_eq!(path.elements()[0], PathEl::MoveTo(Point::new(10.0, 10.0)));
//! assert_eq!(path.elements()[1], PathEl::LineTo(Point::new(30.0, 10.0)));
//! assert!(matches!(path.elements()[2], PathEl::CurveTo(..)));
//! assert_eq!(path.elements()[3], PathEl::ClosePath);
//! ```
//!
//! Testing containment, with strict parsing:
//! ```
//! use pathdata::{is_point_in_path, Point};
//! use pathdata::svg::SvgParseError;
//!
//! let circle = "M0,10 A10,10 0 0 1 20,10 A10,10 0 0 1 0,10 Z";
//! assert_eq!(is_point_in_path(Point::new(10.0, 10.0), circle), Ok(true));
//! assert_eq!(is_point_in_path(Point::new(25.0, 25.0), circle), Ok(false));
//!
//! let err = is_point_in_path(Point::ZERO, "M0,0 L10,0 L10,x Z").unwrap_err();
//! assert_eq!(err, SvgParseError::MalformedNumber { offset: 15 });
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. This crate still uses the `alloc` crate regardless.
//!
//! The `serde` and `schemars` features derive serialization and JSON schemas
//! for the value types, and `mint` adds conversions for [`Point`] and
//! [`Vec2`].
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade: truncated permissive parses at
//! `debug` level, and arc subdivision, skipped segments and ray crossings at
//! `trace` level. No logger is installed by this crate.
//!
//! [`libm`]: https://docs.rs/libm
//! [`log`]: https://docs.rs/log

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("pathdata requires either the `std` or `libm` feature");

extern crate alloc;

mod arc;
mod bezpath;
pub mod common;
mod cubicbez;
mod line;
mod normalize;
mod point;
mod region;
pub mod svg;
mod vec2;

pub use crate::arc::*;
pub use crate::bezpath::*;
pub use crate::cubicbez::*;
pub use crate::line::*;
pub use crate::normalize::*;
pub use crate::point::*;
pub use crate::region::*;
pub use crate::vec2::*;
