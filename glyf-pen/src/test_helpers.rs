//! Pens that record what they are asked to draw, for tests.

use kurbo::{Affine, Point};

use crate::{PenError, PointPen, SegmentPen, SegmentType};

/// Records segment commands in an svg-like shorthand.
#[derive(Debug, Default)]
pub(crate) struct RecordingPen {
    pub(crate) commands: Vec<String>,
}

/// Records point pen calls.
#[derive(Debug, Default)]
pub(crate) struct RecordingPointPen {
    pub(crate) commands: Vec<String>,
}

fn fmt_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|pt| format!("{} {}", pt.x, pt.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn fmt_component(glyph_name: &str, transform: Affine) -> String {
    let coeffs = transform
        .as_coeffs()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("component {glyph_name} [{coeffs}]")
}

impl SegmentPen for RecordingPen {
    fn move_to(&mut self, pt: Point) -> Result<(), PenError> {
        self.commands.push(format!("M{}", fmt_points(&[pt])));
        Ok(())
    }

    fn line_to(&mut self, pt: Point) -> Result<(), PenError> {
        self.commands.push(format!("L{}", fmt_points(&[pt])));
        Ok(())
    }

    fn qcurve_to(&mut self, off_curve: &[Point], on_curve: Option<Point>) -> Result<(), PenError> {
        let end = match on_curve {
            Some(pt) => fmt_points(&[pt]),
            None => "None".to_string(),
        };
        self.commands
            .push(format!("Q{} {end}", fmt_points(off_curve)));
        Ok(())
    }

    fn curve_to(&mut self, points: &[Point]) -> Result<(), PenError> {
        self.commands.push(format!("C{}", fmt_points(points)));
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), PenError> {
        self.commands.push("Z".to_string());
        Ok(())
    }

    fn end_path(&mut self) -> Result<(), PenError> {
        self.commands.push("E".to_string());
        Ok(())
    }

    fn add_component(&mut self, glyph_name: &str, transform: Affine) -> Result<(), PenError> {
        self.commands.push(fmt_component(glyph_name, transform));
        Ok(())
    }
}

impl PointPen for RecordingPointPen {
    fn begin_path(&mut self) -> Result<(), PenError> {
        self.commands.push("begin".to_string());
        Ok(())
    }

    fn end_path(&mut self) -> Result<(), PenError> {
        self.commands.push("end".to_string());
        Ok(())
    }

    fn add_point(
        &mut self,
        pt: Point,
        segment_type: Option<SegmentType>,
        _smooth: bool,
        _name: Option<&str>,
    ) -> Result<(), PenError> {
        let segment_type = match segment_type {
            None => "None",
            Some(SegmentType::Move) => "move",
            Some(SegmentType::Line) => "line",
            Some(SegmentType::QCurve) => "qcurve",
            Some(SegmentType::Curve) => "curve",
        };
        self.commands
            .push(format!("{} {segment_type}", fmt_points(&[pt])));
        Ok(())
    }

    fn add_component(&mut self, glyph_name: &str, transform: Affine) -> Result<(), PenError> {
        self.commands.push(fmt_component(glyph_name, transform));
        Ok(())
    }
}
