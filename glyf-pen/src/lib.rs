//! Pens for building [TrueType glyphs](https://learn.microsoft.com/en-us/typography/opentype/spec/glyf).
//!
//! The glyf table only supports quadratic splines, integer coordinates and
//! composite glyphs whose component transforms are stored as F2Dot14 values.
//! The pens in this crate accept generic drawing commands and produce a
//! [`Glyph`] that is guaranteed to be encodable under those constraints.
//!
//! Two drawing protocols are supported:
//!
//! * [`TtGlyphPen`] implements [`SegmentPen`], which draws with segments
//!   (`move_to`, `line_to`, `qcurve_to`, `close_path`).
//! * [`TtGlyphPointPen`] implements [`PointPen`], which draws with explicit
//!   points, grouped into sub-paths.
//!
//! Components are resolved against a [`GlyphSet`] when the glyph is finished.
//! A component that cannot be kept as a reference is decomposed: the referenced
//! glyph is drawn, through the component's transform, into the pen itself.
//!
//! Based on fontTools' [ttGlyphPen](https://github.com/fonttools/fonttools/blob/main/Lib/fontTools/pens/ttGlyphPen.py).

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod assemble;
mod builder;
mod error;
mod glyph;
mod glyph_set;
mod pens;
mod point_pen;
mod round;
mod segment_pen;
pub mod transform;

#[cfg(test)]
mod test_helpers;

pub use assemble::PenOptions;
pub use error::PenError;
pub use glyph::{
    Component, ComponentFlags, ComponentTransform, CompositeGlyph, Glyph, PointFlags, SimpleGlyph,
};
pub use glyph_set::{DrawGlyph, GlyphSet};
pub use pens::{PointPen, SegmentPen, SegmentType, TransformPen, TransformPointPen};
pub use point_pen::TtGlyphPointPen;
pub use round::OtRound;
pub use segment_pen::TtGlyphPen;

/// Public re-export of the kurbo crate, whose points and affines appear in our API.
pub extern crate kurbo;

/// Public re-export of the font-types crate.
pub extern crate font_types as types;
