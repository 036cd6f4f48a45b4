//! Accumulating points, contours and components for one glyph

use kurbo::{Affine, Point};

use crate::{
    glyph::{PointFlags, SimpleGlyph},
    OtRound,
};

/// The mutable state shared by both pens while a glyph is drawn.
///
/// Points are kept as floats until the glyph is finished. Contours are stored
/// the way the glyf table stores them, as the index of their last point.
#[derive(Clone, Debug, Default)]
pub(crate) struct GlyphBuilder {
    points: Vec<Point>,
    flags: Vec<PointFlags>,
    end_pts: Vec<usize>,
    components: Vec<(String, Affine)>,
}

impl GlyphBuilder {
    pub(crate) fn add_point(&mut self, pt: Point, on_curve: bool) {
        self.points.push(pt);
        self.flags.push(on_curve.into());
    }

    pub(crate) fn pop_point(&mut self) {
        self.points.pop();
        self.flags.pop();
    }

    pub(crate) fn has_points(&self) -> bool {
        !self.points.is_empty()
    }

    /// `true` if no points have been added since the last contour was closed.
    pub(crate) fn is_closed(&self) -> bool {
        match (self.points.len(), self.end_pts.last()) {
            (0, _) => true,
            (n_points, Some(end)) => *end == n_points - 1,
            (_, None) => false,
        }
    }

    /// Record the points added since the last contour as a new contour.
    ///
    /// A contour of one point (an anchor) is dropped, and so is a final point
    /// that duplicates the first; this is how such contours look after a
    /// round trip through the glyf table.
    pub(crate) fn close_contour(&mut self) {
        if self.is_closed() {
            return;
        }
        let start = self.contour_start();
        let mut end = self.points.len() - 1;

        // ignore anchors (one-point paths)
        if end == start {
            self.pop_point();
            return;
        }

        // if first and last point on this path are the same, remove last
        if self.points[start] == self.points[end] {
            self.pop_point();
            end -= 1;
        }
        self.end_pts.push(end);
    }

    /// Record the points added since the last contour as-is.
    pub(crate) fn end_contour(&mut self) {
        if !self.is_closed() {
            self.end_pts.push(self.points.len() - 1);
        }
    }

    fn contour_start(&self) -> usize {
        self.end_pts.last().map(|end| end + 1).unwrap_or(0)
    }

    pub(crate) fn add_component(&mut self, glyph_name: &str, transform: Affine) {
        self.components.push((glyph_name.to_owned(), transform));
    }

    pub(crate) fn components(&self) -> &[(String, Affine)] {
        &self.components
    }

    /// Round the accumulated points and contours into a simple glyph.
    pub(crate) fn to_simple_glyph(&self) -> SimpleGlyph {
        SimpleGlyph {
            coordinates: self.points.iter().map(|pt| pt.ot_round()).collect(),
            flags: self.flags.clone(),
            end_pts_of_contours: self.end_pts.clone(),
            instructions: Vec::new(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
        self.flags.clear();
        self.end_pts.clear();
        self.components.clear();
    }
}

#[cfg(test)]
mod tests {
    use font_types::Point as IntPoint;
    use pretty_assertions::assert_eq;

    use super::*;

    fn builder_with(points: &[(f64, f64)]) -> GlyphBuilder {
        let mut builder = GlyphBuilder::default();
        for (x, y) in points {
            builder.add_point(Point::new(*x, *y), true);
        }
        builder
    }

    #[test]
    fn empty_is_closed() {
        let mut builder = GlyphBuilder::default();
        assert!(builder.is_closed());
        builder.add_point(Point::ZERO, true);
        assert!(!builder.is_closed());
        builder.add_point(Point::new(1.0, 0.0), true);
        builder.close_contour();
        assert!(builder.is_closed());
    }

    #[test]
    fn closing_point_is_dropped() {
        let mut builder = builder_with(&[(0.0, 0.0), (0.0, 100.0), (100.0, 0.0), (0.0, 0.0)]);
        builder.close_contour();
        let glyph = builder.to_simple_glyph();
        assert_eq!(glyph.coordinates.len(), 3);
        assert_eq!(glyph.end_pts_of_contours, vec![2]);
    }

    #[test]
    fn anchors_are_dropped() {
        let mut builder = builder_with(&[(5.0, 5.0)]);
        builder.close_contour();
        assert!(!builder.has_points());

        let mut builder = builder_with(&[(0.0, 0.0), (0.0, 100.0), (100.0, 0.0)]);
        builder.close_contour();
        builder.add_point(Point::new(50.0, 50.0), true);
        builder.close_contour();
        let glyph = builder.to_simple_glyph();
        assert_eq!(glyph.coordinates.len(), 3);
        assert_eq!(glyph.end_pts_of_contours, vec![2]);
    }

    #[test]
    fn closing_twice_is_noop() {
        let mut builder = builder_with(&[(0.0, 0.0), (0.0, 100.0), (100.0, 0.0)]);
        builder.close_contour();
        builder.close_contour();
        assert_eq!(builder.to_simple_glyph().end_pts_of_contours, vec![2]);
    }

    #[test]
    fn end_contour_keeps_everything() {
        let mut builder = builder_with(&[(7.0, 7.0)]);
        builder.end_contour();
        builder.add_point(Point::new(0.0, 0.0), true);
        builder.add_point(Point::new(10.0, 0.0), true);
        builder.add_point(Point::new(0.0, 0.0), true);
        builder.end_contour();
        assert_eq!(builder.to_simple_glyph().end_pts_of_contours, vec![0, 3]);
    }

    #[test]
    fn points_are_rounded() {
        let mut builder = builder_with(&[(0.5, -0.5), (10.49, 20.51)]);
        builder.close_contour();
        let glyph = builder.to_simple_glyph();
        assert_eq!(
            glyph.coordinates,
            vec![IntPoint::new(1, 0), IntPoint::new(10, 21)]
        );
        assert_eq!(glyph.instructions, Vec::<u8>::new());
    }

    #[test]
    fn clear_resets_everything() {
        let mut builder = builder_with(&[(0.0, 0.0), (0.0, 100.0), (100.0, 0.0)]);
        builder.close_contour();
        builder.add_component("a", Affine::IDENTITY);
        builder.add_component("a", Affine::IDENTITY);
        assert_eq!(builder.components().len(), 2);
        builder.clear();
        assert!(builder.is_closed());
        assert!(!builder.has_points());
        assert!(builder.components().is_empty());
        assert_eq!(builder.to_simple_glyph(), SimpleGlyph::default());
    }
}
