//! Errors that occur while drawing a glyph

/// An error raised by one of the glyph pens.
///
/// All of these represent a misuse of the drawing protocol (or a shape the
/// glyf table cannot represent) and abort construction of the current glyph;
/// the pen discards whatever it had accumulated and can be reused.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum PenError {
    /// A contour was started, or the glyph finished, while a contour was open.
    ContourNotClosed,
    /// Cubic segments (or points with a cubic segment type) were drawn.
    CubicNotSupported,
    /// `begin_path` was called inside a sub-path.
    PathAlreadyOpen,
    /// A point was added, or `end_path` called, outside of a sub-path.
    NoOpenPath,
    /// The glyph was finished inside a sub-path.
    PathNotEnded,
    /// A point began an open contour, which TrueType cannot represent.
    OpenContour,
    /// A transform value does not fit in an F2Dot14.
    TransformOverflow(f64),
}

impl std::fmt::Display for PenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PenError::ContourNotClosed => write!(f, "the current contour was not closed"),
            PenError::CubicNotSupported => {
                write!(f, "cubic curves are not supported in TrueType glyphs")
            }
            PenError::PathAlreadyOpen => write!(f, "begin_path called inside an open sub-path"),
            PenError::NoOpenPath => write!(f, "no sub-path has been begun"),
            PenError::PathNotEnded => write!(f, "the current sub-path was not ended"),
            PenError::OpenContour => write!(f, "open contours are not supported"),
            PenError::TransformOverflow(value) => {
                write!(f, "transform value {value} cannot be encoded as F2Dot14")
            }
        }
    }
}

impl std::error::Error for PenError {}
