//! Rounding whose behavior is defined by the
//! [font specification](https://learn.microsoft.com/en-us/typography/opentype/spec/otff).

use font_types::Point;

/// Floating-point rounding per the [OpenType spec][spec].
///
/// Halves round towards positive infinity, which matches what fontTools
/// (`otRound`) does when compiling coordinates and transforms.
///
/// <https://github.com/fonttools/fonttools/issues/1248#issuecomment-383198166> captures the rationale
/// for the current implementation.
///
/// [spec]: https://docs.microsoft.com/en-us/typography/opentype/spec/otvaroverview#coordinate-scales-and-normalization
pub trait OtRound<U, T = Self> {
    fn ot_round(self) -> U;
}

impl OtRound<i32> for f64 {
    #[inline]
    fn ot_round(self) -> i32 {
        (self + 0.5).floor() as i32
    }
}

impl OtRound<f64> for f64 {
    #[inline]
    fn ot_round(self) -> f64 {
        (self + 0.5).floor()
    }
}

impl OtRound<Point<i32>> for kurbo::Point {
    #[inline]
    fn ot_round(self) -> Point<i32> {
        Point::new(self.x.ot_round(), self.y.ot_round())
    }
}

impl OtRound<(i32, i32)> for kurbo::Vec2 {
    #[inline]
    fn ot_round(self) -> (i32, i32) {
        (self.x.ot_round(), self.y.ot_round())
    }
}
