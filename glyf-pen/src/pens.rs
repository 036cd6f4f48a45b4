//! The drawing protocols, and pens that wrap other pens.
//!
//! Based on the pen protocols in <https://github.com/fonttools/fonttools/tree/main/Lib/fontTools/pens>

use kurbo::{Affine, Point};

use crate::PenError;

/// The role of a point drawn with a [`PointPen`].
///
/// An off-curve point has no segment type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentType {
    /// The first point of an open contour.
    Move,
    /// An on-curve point ending a straight line.
    Line,
    /// An on-curve point ending a quadratic spline.
    QCurve,
    /// An on-curve point ending a cubic curve.
    Curve,
}

/// A pen that accepts a sequence of segments.
///
/// AbstractPen in Python terms.
/// <https://github.com/fonttools/fonttools/blob/78e10d8b42095b709cd4125e592d914d3ed1558e/Lib/fontTools/pens/basePen.py#L54>
pub trait SegmentPen {
    /// Begin a new contour at `pt`.
    fn move_to(&mut self, pt: Point) -> Result<(), PenError>;

    /// Draw a straight line to `pt`.
    fn line_to(&mut self, pt: Point) -> Result<(), PenError>;

    /// Draw a quadratic spline.
    ///
    /// `off_curve` are the control points; if there is more than one, the
    /// on-curve points between them are implied. If `on_curve` is `None` the
    /// spline has no on-curve point at all, which is only meaningful as a
    /// complete closed contour.
    fn qcurve_to(&mut self, off_curve: &[Point], on_curve: Option<Point>) -> Result<(), PenError>;

    /// Draw a quadratic bezier with a single control point.
    fn quad_to(&mut self, ctrl: Point, pt: Point) -> Result<(), PenError> {
        self.qcurve_to(&[ctrl], Some(pt))
    }

    /// Draw a cubic curve (or a cubic poly-bezier); the last point is on-curve.
    fn curve_to(&mut self, points: &[Point]) -> Result<(), PenError>;

    /// Close the current contour.
    fn close_path(&mut self) -> Result<(), PenError>;

    /// End the current contour without closing it.
    fn end_path(&mut self) -> Result<(), PenError>;

    /// Add a reference to another glyph.
    fn add_component(&mut self, glyph_name: &str, transform: Affine) -> Result<(), PenError>;
}

/// A pen that accepts explicit points, grouped into sub-paths.
///
/// AbstractPointPen in Python terms.
/// <https://github.com/fonttools/fonttools/blob/78e10d8b42095b709cd4125e592d914d3ed1558e/Lib/fontTools/pens/pointPen.py#L29>
pub trait PointPen {
    /// Start a new sub-path.
    fn begin_path(&mut self) -> Result<(), PenError>;

    /// End the current sub-path.
    fn end_path(&mut self) -> Result<(), PenError>;

    /// Add a point to the current sub-path.
    fn add_point(
        &mut self,
        pt: Point,
        segment_type: Option<SegmentType>,
        smooth: bool,
        name: Option<&str>,
    ) -> Result<(), PenError>;

    /// Add a reference to another glyph.
    fn add_component(&mut self, glyph_name: &str, transform: Affine) -> Result<(), PenError>;
}

/// A pen that transforms params using [kurbo::Affine].
///
/// Components passed through have their transform composed with ours.
pub struct TransformPen<'a, T: SegmentPen + ?Sized> {
    inner_pen: &'a mut T,
    transform: Affine,
}

impl<'a, T: SegmentPen + ?Sized> TransformPen<'a, T> {
    pub fn new(inner_pen: &'a mut T, transform: Affine) -> TransformPen<'a, T> {
        TransformPen {
            inner_pen,
            transform,
        }
    }

    fn map_points(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|pt| self.transform * *pt).collect()
    }
}

impl<T: SegmentPen + ?Sized> SegmentPen for TransformPen<'_, T> {
    fn move_to(&mut self, pt: Point) -> Result<(), PenError> {
        self.inner_pen.move_to(self.transform * pt)
    }

    fn line_to(&mut self, pt: Point) -> Result<(), PenError> {
        self.inner_pen.line_to(self.transform * pt)
    }

    fn qcurve_to(&mut self, off_curve: &[Point], on_curve: Option<Point>) -> Result<(), PenError> {
        let off_curve = self.map_points(off_curve);
        let on_curve = on_curve.map(|pt| self.transform * pt);
        self.inner_pen.qcurve_to(&off_curve, on_curve)
    }

    fn curve_to(&mut self, points: &[Point]) -> Result<(), PenError> {
        let points = self.map_points(points);
        self.inner_pen.curve_to(&points)
    }

    fn close_path(&mut self) -> Result<(), PenError> {
        self.inner_pen.close_path()
    }

    fn end_path(&mut self) -> Result<(), PenError> {
        self.inner_pen.end_path()
    }

    fn add_component(&mut self, glyph_name: &str, transform: Affine) -> Result<(), PenError> {
        self.inner_pen
            .add_component(glyph_name, self.transform * transform)
    }
}

/// A point pen that transforms params using [kurbo::Affine].
pub struct TransformPointPen<'a, T: PointPen + ?Sized> {
    inner_pen: &'a mut T,
    transform: Affine,
}

impl<'a, T: PointPen + ?Sized> TransformPointPen<'a, T> {
    pub fn new(inner_pen: &'a mut T, transform: Affine) -> TransformPointPen<'a, T> {
        TransformPointPen {
            inner_pen,
            transform,
        }
    }
}

impl<T: PointPen + ?Sized> PointPen for TransformPointPen<'_, T> {
    fn begin_path(&mut self) -> Result<(), PenError> {
        self.inner_pen.begin_path()
    }

    fn end_path(&mut self) -> Result<(), PenError> {
        self.inner_pen.end_path()
    }

    fn add_point(
        &mut self,
        pt: Point,
        segment_type: Option<SegmentType>,
        smooth: bool,
        name: Option<&str>,
    ) -> Result<(), PenError> {
        self.inner_pen
            .add_point(self.transform * pt, segment_type, smooth, name)
    }

    fn add_component(&mut self, glyph_name: &str, transform: Affine) -> Result<(), PenError> {
        self.inner_pen
            .add_component(glyph_name, self.transform * transform)
    }
}
