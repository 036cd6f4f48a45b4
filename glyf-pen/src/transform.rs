//! Quantizing component transforms to F2Dot14.
//!
//! Component transforms in the glyf table are stored as F2Dot14 values, which
//! can represent the range `-2.0 <= v < +2.0`. These helpers quantize transform
//! values to that grid so a freshly drawn glyph carries exactly the values it
//! would have after a round trip through the binary format, and decide whether
//! a transform can be stored at all.

use kurbo::Affine;

use crate::{glyph::ComponentTransform, OtRound};

const F2DOT14_ONE: f64 = (1 << 14) as f64;

/// The largest value representable as an F2Dot14: 1.99993896484375.
pub const MAX_F2DOT14: f64 = i16::MAX as f64 / F2DOT14_ONE;

/// The smallest value representable as an F2Dot14.
pub const MIN_F2DOT14: f64 = i16::MIN as f64 / F2DOT14_ONE;

/// Round `value` to the nearest F2Dot14 value, returned as a float.
///
/// The input is not range checked; values outside the F2Dot14 range are
/// quantized to the same 1/16384 grid.
pub fn quantize_f2dot14(value: f64) -> f64 {
    let scaled: f64 = (value * F2DOT14_ONE).ot_round();
    scaled / F2DOT14_ONE
}

/// `true` if any of the 2x2 part of `transform` is greater than 2 or less than -2.
///
/// Values in `(MAX_F2DOT14, 2]` are not considered overflowing; they are
/// clamped when the component is built.
pub fn is_overflowing(transform: &Affine) -> bool {
    let [xx, xy, yx, yy, _, _] = transform.as_coeffs();
    [xx, xy, yx, yy].iter().any(|v| *v > 2.0 || *v < -2.0)
}

/// Quantize the 2x2 part of `transform` for storage in a component.
///
/// Returns `None` if the quantized transform is the identity, in which case
/// no transform is written.
///
/// If `clamp_near_two` is set, values that quantize to something in
/// `(MAX_F2DOT14, 2]` are clamped to [`MAX_F2DOT14`].
pub fn quantize(transform: &Affine, clamp_near_two: bool) -> Option<ComponentTransform> {
    let [xx, xy, yx, yy, _, _] = transform.as_coeffs().map(quantize_f2dot14);
    let mut quantized = ComponentTransform { xx, xy, yx, yy };
    if quantized.is_identity() {
        return None;
    }
    if clamp_near_two && quantized.values().iter().any(|v| is_near_two(*v)) {
        log::debug!("clamping transform values close to +2.0 in {quantized:?}");
        quantized = quantized.map(|v| if is_near_two(v) { MAX_F2DOT14 } else { v });
    }
    Some(quantized)
}

fn is_near_two(value: f64) -> bool {
    MAX_F2DOT14 < value && value <= 2.0
}
