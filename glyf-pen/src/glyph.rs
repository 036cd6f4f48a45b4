//! The glyph records produced by the pens.
//!
//! These mirror the structure of a glyph in the
//! [glyf table](https://learn.microsoft.com/en-us/typography/opentype/spec/glyf):
//! a glyph is either simple (points and contours) or composite (components),
//! never both.

use font_types::{F2Dot14, Point};
use kurbo::Affine;

use crate::{
    pens::{PointPen, SegmentPen, SegmentType},
    transform::{MAX_F2DOT14, MIN_F2DOT14},
    DrawGlyph, PenError,
};

/// A finished glyph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Glyph {
    Simple(SimpleGlyph),
    Composite(CompositeGlyph),
}

/// A glyph made of contours.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleGlyph {
    /// All points of all contours, in order.
    pub coordinates: Vec<Point<i32>>,
    /// One flag per point.
    pub flags: Vec<PointFlags>,
    /// The index of the last point of each contour.
    ///
    /// These should be increasing and index into `coordinates` and `flags`;
    /// contours past the first one that doesn't are not drawn.
    pub end_pts_of_contours: Vec<usize>,
    /// The instruction program; always empty for glyphs built by a pen.
    pub instructions: Vec<u8>,
}

/// A glyph made of references to other glyphs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositeGlyph {
    pub components: Vec<Component>,
}

/// A single component of a [`CompositeGlyph`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    /// The name of the referenced glyph.
    pub glyph_name: String,
    /// Horizontal offset, rounded to an integer.
    pub x: i32,
    /// Vertical offset, rounded to an integer.
    pub y: i32,
    /// The 2x2 transform, or `None` for the identity.
    pub transform: Option<ComponentTransform>,
    pub flags: ComponentFlags,
}

/// The 2x2 part of a component transform.
///
/// Values are quantized to the F2Dot14 grid. They are only guaranteed to lie in
/// the F2Dot14 range if the glyph was built with overflow handling enabled;
/// see [`to_f2dot14`](Self::to_f2dot14).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentTransform {
    pub xx: f64,
    pub xy: f64,
    pub yx: f64,
    pub yy: f64,
}

/// Options that can be manually set for a given component.
///
/// For more information on these flags, see [Component Glyph Flags](flags-spec)
/// in the spec.
///
/// The default has only `round_xy_to_grid` set.
///
/// [flags-spec]: https://learn.microsoft.com/en-us/typography/opentype/spec/glyf#compositeGlyphFlags
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentFlags {
    /// Round xy values to the nearest grid line
    pub round_xy_to_grid: bool,
    /// Use the advance/lsb/rsb values of this component for the whole
    /// composite glyph
    pub use_my_metrics: bool,
    /// The composite should have this component's offset scaled
    pub scaled_component_offset: bool,
    /// The composite should *not* have this component's offset scaled
    pub unscaled_component_offset: bool,
    /// If set, the components of the composite glyph overlap.
    pub overlap_compound: bool,
}

/// The on/off-curve flag of a point in a [`SimpleGlyph`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointFlags(u8);

impl PointFlags {
    const ON_CURVE: u8 = 0x01;

    /// Creates a new on curve point flag.
    pub const fn on_curve() -> Self {
        Self(Self::ON_CURVE)
    }

    /// Creates a new off curve (quadratic control point) flag.
    pub const fn off_curve() -> Self {
        Self(0)
    }

    /// Returns true if this is an on curve point.
    #[inline]
    pub const fn is_on_curve(self) -> bool {
        self.0 & Self::ON_CURVE != 0
    }

    /// The raw flag bits, as stored in the glyf table.
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl From<bool> for PointFlags {
    fn from(on_curve: bool) -> Self {
        if on_curve {
            Self::on_curve()
        } else {
            Self::off_curve()
        }
    }
}

impl ComponentFlags {
    const ROUND_XY_TO_GRID: u16 = 0x0004;
    const USE_MY_METRICS: u16 = 0x0200;
    const OVERLAP_COMPOUND: u16 = 0x0400;
    const SCALED_COMPONENT_OFFSET: u16 = 0x0800;
    const UNSCALED_COMPONENT_OFFSET: u16 = 0x1000;

    /// No flags set.
    pub const fn empty() -> Self {
        ComponentFlags {
            round_xy_to_grid: false,
            use_my_metrics: false,
            scaled_component_offset: false,
            unscaled_component_offset: false,
            overlap_compound: false,
        }
    }

    /// The flags in their binary layout.
    ///
    /// Flags that are computed when the glyph is compiled (argument sizes,
    /// transform kind, `MORE_COMPONENTS`) are never included.
    pub fn bits(&self) -> u16 {
        [
            (self.round_xy_to_grid, Self::ROUND_XY_TO_GRID),
            (self.use_my_metrics, Self::USE_MY_METRICS),
            (self.overlap_compound, Self::OVERLAP_COMPOUND),
            (self.scaled_component_offset, Self::SCALED_COMPONENT_OFFSET),
            (self.unscaled_component_offset, Self::UNSCALED_COMPONENT_OFFSET),
        ]
        .into_iter()
        .filter_map(|(set, bit)| set.then_some(bit))
        .fold(0, |acc, bit| acc | bit)
    }

    /// Interpret the user-settable bits of a binary flag value; others are ignored.
    pub fn from_bits(bits: u16) -> Self {
        ComponentFlags {
            round_xy_to_grid: bits & Self::ROUND_XY_TO_GRID != 0,
            use_my_metrics: bits & Self::USE_MY_METRICS != 0,
            scaled_component_offset: bits & Self::SCALED_COMPONENT_OFFSET != 0,
            unscaled_component_offset: bits & Self::UNSCALED_COMPONENT_OFFSET != 0,
            overlap_compound: bits & Self::OVERLAP_COMPOUND != 0,
        }
    }
}

impl Default for ComponentFlags {
    fn default() -> Self {
        ComponentFlags {
            round_xy_to_grid: true,
            ..ComponentFlags::empty()
        }
    }
}

impl ComponentTransform {
    /// The values in the order they are stored in the glyf table.
    pub fn values(&self) -> [f64; 4] {
        [self.xx, self.xy, self.yx, self.yy]
    }

    pub(crate) fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        ComponentTransform {
            xx: f(self.xx),
            xy: f(self.xy),
            yx: f(self.yx),
            yy: f(self.yy),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.values() == [1.0, 0.0, 0.0, 1.0]
    }

    /// Convert to F2Dot14 values, in glyf table order.
    ///
    /// Returns an error if any value is outside the F2Dot14 range. This can only
    /// happen for glyphs built with overflow handling disabled.
    pub fn to_f2dot14(&self) -> Result<[F2Dot14; 4], PenError> {
        if let Some(bad) = self
            .values()
            .into_iter()
            .find(|v| !(MIN_F2DOT14..=MAX_F2DOT14).contains(v))
        {
            return Err(PenError::TransformOverflow(bad));
        }
        Ok(self.values().map(|v| F2Dot14::from_f32(v as f32)))
    }
}

impl Component {
    /// The full affine for this component: transform plus offset.
    pub fn affine(&self) -> Affine {
        let [xx, xy, yx, yy] = self
            .transform
            .map(|t| t.values())
            .unwrap_or([1.0, 0.0, 0.0, 1.0]);
        Affine::new([xx, xy, yx, yy, self.x as f64, self.y as f64])
    }
}

impl Glyph {
    /// The number of contours, or -1 for a composite glyph.
    ///
    /// Saturates at `i16::MAX`.
    pub fn number_of_contours(&self) -> i16 {
        match self {
            Glyph::Simple(simple) => {
                i16::try_from(simple.end_pts_of_contours.len()).unwrap_or(i16::MAX)
            }
            Glyph::Composite(_) => -1,
        }
    }

    /// `true` if this glyph has neither points nor components.
    pub fn is_empty(&self) -> bool {
        match self {
            Glyph::Simple(simple) => simple.coordinates.is_empty(),
            Glyph::Composite(composite) => composite.components.is_empty(),
        }
    }
}

impl SimpleGlyph {
    /// Iterate over the points and flags of each contour.
    ///
    /// Iteration stops at the first end point that does not continue the
    /// previous contour within `coordinates` and `flags`.
    pub fn contours(&self) -> impl Iterator<Item = (&[Point<i32>], &[PointFlags])> + '_ {
        let mut start = 0;
        self.end_pts_of_contours.iter().map_while(move |end| {
            let range = start..end.checked_add(1)?;
            start = range.end;
            Some((self.coordinates.get(range.clone())?, self.flags.get(range)?))
        })
    }

    fn draw_contour(
        points: &[Point<i32>],
        flags: &[PointFlags],
        pen: &mut dyn SegmentPen,
    ) -> Result<(), PenError> {
        let points: Vec<_> = points.iter().map(|pt| as_kurbo_point(*pt)).collect();
        let Some(first_on_curve) = flags.iter().position(|f| f.is_on_curve()) else {
            // all off-curve: a closed quadratic spline with implied on-curve points
            pen.qcurve_to(&points, None)?;
            return pen.close_path();
        };

        // rotate so that the contour ends with its first on-curve point,
        // which we move to
        let n_points = points.len();
        let rotated = (0..n_points)
            .map(|i| (first_on_curve + 1 + i) % n_points)
            .map(|i| (points[i], flags[i].is_on_curve()))
            .collect::<Vec<_>>();
        pen.move_to(points[first_on_curve])?;

        let mut off_curve = Vec::new();
        for (i, (point, on_curve)) in rotated.into_iter().enumerate() {
            if !on_curve {
                off_curve.push(point);
            } else if off_curve.is_empty() {
                // the final line back to the start is implied by the close
                if i + 1 < n_points {
                    pen.line_to(point)?;
                }
            } else {
                pen.qcurve_to(&off_curve, Some(point))?;
                off_curve.clear();
            }
        }
        pen.close_path()
    }

    fn draw_contour_points(
        points: &[Point<i32>],
        flags: &[PointFlags],
        pen: &mut dyn PointPen,
    ) -> Result<(), PenError> {
        pen.begin_path()?;
        let mut segment_type = match flags.last() {
            Some(flag) if flag.is_on_curve() => SegmentType::Line,
            _ => SegmentType::QCurve,
        };
        for (point, flag) in points.iter().zip(flags) {
            let point = as_kurbo_point(*point);
            if flag.is_on_curve() {
                pen.add_point(point, Some(segment_type), false, None)?;
                segment_type = SegmentType::Line;
            } else {
                pen.add_point(point, None, false, None)?;
                segment_type = SegmentType::QCurve;
            }
        }
        pen.end_path()
    }
}

fn as_kurbo_point(point: Point<i32>) -> kurbo::Point {
    kurbo::Point::new(point.x as f64, point.y as f64)
}

impl DrawGlyph for Glyph {
    fn draw(&self, pen: &mut dyn SegmentPen) -> Result<(), PenError> {
        match self {
            Glyph::Simple(simple) => simple.draw(pen),
            Glyph::Composite(composite) => composite.draw(pen),
        }
    }

    fn draw_points(&self, pen: &mut dyn PointPen) -> Result<(), PenError> {
        match self {
            Glyph::Simple(simple) => simple.draw_points(pen),
            Glyph::Composite(composite) => composite.draw_points(pen),
        }
    }
}

impl DrawGlyph for SimpleGlyph {
    fn draw(&self, pen: &mut dyn SegmentPen) -> Result<(), PenError> {
        for (points, flags) in self.contours() {
            Self::draw_contour(points, flags, pen)?;
        }
        Ok(())
    }

    fn draw_points(&self, pen: &mut dyn PointPen) -> Result<(), PenError> {
        for (points, flags) in self.contours() {
            Self::draw_contour_points(points, flags, pen)?;
        }
        Ok(())
    }
}

impl DrawGlyph for CompositeGlyph {
    fn draw(&self, pen: &mut dyn SegmentPen) -> Result<(), PenError> {
        for component in &self.components {
            pen.add_component(&component.glyph_name, component.affine())?;
        }
        Ok(())
    }

    fn draw_points(&self, pen: &mut dyn PointPen) -> Result<(), PenError> {
        for component in &self.components {
            pen.add_component(&component.glyph_name, component.affine())?;
        }
        Ok(())
    }
}
