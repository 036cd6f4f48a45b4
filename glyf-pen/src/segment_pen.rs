//! A segment pen that builds TrueType glyphs

use kurbo::{Affine, Point};

use crate::{
    assemble::{self, Decompose, PenOptions},
    builder::GlyphBuilder,
    glyph::{ComponentFlags, Glyph},
    pens::TransformPen,
    DrawGlyph, GlyphSet, PenError, SegmentPen,
};

/// Pen used for drawing to a TrueType glyph.
///
/// After drawing, use [`glyph`](Self::glyph) to retrieve the finished
/// [`Glyph`]; the pen is then empty and can be used to draw the next one.
///
/// TrueType contours are always closed: [`end_path`](SegmentPen::end_path)
/// behaves like [`close_path`](SegmentPen::close_path), and cubic curves are
/// rejected.
///
/// Any error aborts the glyph being drawn.
pub struct TtGlyphPen<'a, G> {
    glyph_set: &'a G,
    options: PenOptions,
    builder: GlyphBuilder,
}

impl<'a, G: GlyphSet> TtGlyphPen<'a, G> {
    /// Create a new pen; `glyph_set` is used to resolve components.
    pub fn new(glyph_set: &'a G) -> Self {
        Self::with_options(glyph_set, PenOptions::default())
    }

    pub fn with_options(glyph_set: &'a G, options: PenOptions) -> Self {
        TtGlyphPen {
            glyph_set,
            options,
            builder: GlyphBuilder::default(),
        }
    }

    /// Finish the current glyph, giving components the default flags.
    pub fn glyph(&mut self) -> Result<Glyph, PenError> {
        self.glyph_with_flags(ComponentFlags::default())
    }

    /// Finish the current glyph, giving components the provided flags.
    ///
    /// Returns an error if the last contour was not closed.
    pub fn glyph_with_flags(&mut self, flags: ComponentFlags) -> Result<Glyph, PenError> {
        if !self.builder.is_closed() {
            return self.abort(PenError::ContourNotClosed);
        }
        let glyph_set = self.glyph_set;
        let options = self.options;
        assemble::finish_glyph(self, glyph_set, options, flags)
    }

    fn abort<T>(&mut self, error: PenError) -> Result<T, PenError> {
        self.builder.clear();
        Err(error)
    }
}

impl<G: GlyphSet> SegmentPen for TtGlyphPen<'_, G> {
    fn move_to(&mut self, pt: Point) -> Result<(), PenError> {
        if !self.builder.is_closed() {
            return self.abort(PenError::ContourNotClosed);
        }
        self.builder.add_point(pt, true);
        Ok(())
    }

    fn line_to(&mut self, pt: Point) -> Result<(), PenError> {
        self.builder.add_point(pt, true);
        Ok(())
    }

    fn qcurve_to(&mut self, off_curve: &[Point], on_curve: Option<Point>) -> Result<(), PenError> {
        for pt in off_curve {
            self.builder.add_point(*pt, false);
        }
        // a missing on-curve point means the spline has no on-curve points
        if let Some(pt) = on_curve {
            self.builder.add_point(pt, true);
        }
        Ok(())
    }

    fn curve_to(&mut self, _points: &[Point]) -> Result<(), PenError> {
        self.abort(PenError::CubicNotSupported)
    }

    fn close_path(&mut self) -> Result<(), PenError> {
        self.builder.close_contour();
        Ok(())
    }

    fn end_path(&mut self) -> Result<(), PenError> {
        // TrueType contours are always "closed"
        self.close_path()
    }

    fn add_component(&mut self, glyph_name: &str, transform: Affine) -> Result<(), PenError> {
        self.builder.add_component(glyph_name, transform);
        Ok(())
    }
}

impl<G: GlyphSet> Decompose for TtGlyphPen<'_, G> {
    fn builder(&mut self) -> &mut GlyphBuilder {
        &mut self.builder
    }

    fn draw_transformed(
        &mut self,
        glyph: &dyn DrawGlyph,
        transform: Affine,
    ) -> Result<(), PenError> {
        glyph.draw(&mut TransformPen::new(self, transform))
    }
}
