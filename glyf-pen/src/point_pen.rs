//! A point pen that builds TrueType glyphs

use kurbo::{Affine, Point};

use crate::{
    assemble::{self, Decompose, PenOptions},
    builder::GlyphBuilder,
    glyph::{ComponentFlags, Glyph},
    pens::{PointPen, SegmentType, TransformPointPen},
    DrawGlyph, GlyphSet, PenError,
};

/// Point pen used for drawing to a TrueType glyph.
///
/// Every sub-path becomes one contour, exactly as drawn: unlike
/// [`TtGlyphPen`](crate::TtGlyphPen), no closing point is removed and
/// one-point sub-paths are kept. Sub-paths without points are ignored.
///
/// Points must be on-curve (`Line` or `QCurve`) or off-curve (no segment type);
/// cubic and open (`Move`) points are rejected.
///
/// Any error aborts the glyph being drawn.
pub struct TtGlyphPointPen<'a, G> {
    glyph_set: &'a G,
    options: PenOptions,
    builder: GlyphBuilder,
    /// The number of points in the open sub-path, if any.
    current_path: Option<usize>,
}

impl<'a, G: GlyphSet> TtGlyphPointPen<'a, G> {
    /// Create a new pen; `glyph_set` is used to resolve components.
    pub fn new(glyph_set: &'a G) -> Self {
        Self::with_options(glyph_set, PenOptions::default())
    }

    pub fn with_options(glyph_set: &'a G, options: PenOptions) -> Self {
        TtGlyphPointPen {
            glyph_set,
            options,
            builder: GlyphBuilder::default(),
            current_path: None,
        }
    }

    /// Finish the current glyph, giving components the default flags.
    pub fn glyph(&mut self) -> Result<Glyph, PenError> {
        self.glyph_with_flags(ComponentFlags::default())
    }

    /// Finish the current glyph, giving components the provided flags.
    ///
    /// Returns an error if a sub-path is still open.
    pub fn glyph_with_flags(&mut self, flags: ComponentFlags) -> Result<Glyph, PenError> {
        if self.current_path.is_some() {
            return self.abort(PenError::PathNotEnded);
        }
        let glyph_set = self.glyph_set;
        let options = self.options;
        assemble::finish_glyph(self, glyph_set, options, flags)
    }

    fn abort<T>(&mut self, error: PenError) -> Result<T, PenError> {
        self.builder.clear();
        self.current_path = None;
        Err(error)
    }
}

impl<G: GlyphSet> PointPen for TtGlyphPointPen<'_, G> {
    fn begin_path(&mut self) -> Result<(), PenError> {
        if self.current_path.is_some() {
            return self.abort(PenError::PathAlreadyOpen);
        }
        self.current_path = Some(0);
        Ok(())
    }

    fn end_path(&mut self) -> Result<(), PenError> {
        // TrueType contours are always "closed"
        match self.current_path.take() {
            None => self.abort(PenError::NoOpenPath),
            Some(0) => Ok(()),
            Some(_) => {
                self.builder.end_contour();
                Ok(())
            }
        }
    }

    fn add_point(
        &mut self,
        pt: Point,
        segment_type: Option<SegmentType>,
        _smooth: bool,
        _name: Option<&str>,
    ) -> Result<(), PenError> {
        if self.current_path.is_none() {
            return self.abort(PenError::NoOpenPath);
        }
        let on_curve = match segment_type {
            None => false,
            Some(SegmentType::Line | SegmentType::QCurve) => true,
            // cubic curves are not supported
            Some(SegmentType::Curve) => return self.abort(PenError::CubicNotSupported),
            Some(SegmentType::Move) => return self.abort(PenError::OpenContour),
        };
        if let Some(n_points) = self.current_path.as_mut() {
            *n_points += 1;
        }
        self.builder.add_point(pt, on_curve);
        Ok(())
    }

    fn add_component(&mut self, glyph_name: &str, transform: Affine) -> Result<(), PenError> {
        self.builder.add_component(glyph_name, transform);
        Ok(())
    }
}

impl<G: GlyphSet> Decompose for TtGlyphPointPen<'_, G> {
    fn builder(&mut self) -> &mut GlyphBuilder {
        &mut self.builder
    }

    fn draw_transformed(
        &mut self,
        glyph: &dyn DrawGlyph,
        transform: Affine,
    ) -> Result<(), PenError> {
        glyph.draw_points(&mut TransformPointPen::new(self, transform))
    }
}
