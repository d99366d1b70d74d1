// SVG style attribute generation
//
// Converts the current pen and brush into stroke/fill attribute strings.
// Every helper returns a fragment starting with a space so callers can
// append it directly after the geometry attributes.

use super::objects::{Brush, BrushStyle, ColorRef, Pen, PenStyle};
use crate::constants::fill_mode;

/// Format a color as #RRGGBB
pub fn color_hex(color: ColorRef) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

/// Stroke attributes for the current pen.
///
/// An unset pen or PS_NULL style yields `stroke="none"`. Otherwise the
/// stroke width is the pen width scaled to output units with a 1.0 floor,
/// and dashed styles add a dasharray derived from that width.
pub fn stroke_attrs(stroke_set: bool, pen: &Pen, scaling: f64) -> String {
    if !stroke_set || pen.style == PenStyle::Null {
        return r#" stroke="none""#.to_string();
    }

    let width = (pen.width * scaling).max(1.0);

    let mut attrs = String::with_capacity(64);
    attrs.push_str(&format!(r#" stroke="{}""#, color_hex(pen.color)));
    attrs.push_str(&format!(r#" stroke-width="{:.2}""#, width));
    if let Some(dasharray) = pen.style.to_dasharray(width) {
        attrs.push_str(&format!(r#" stroke-dasharray="{}""#, dasharray));
    }
    attrs
}

/// Fill attributes for the current brush.
///
/// An unset brush or BS_NULL/BS_HOLLOW style yields `fill="none"`.
/// Otherwise the brush color is emitted together with the fill rule
/// selected by the polygon fill mode.
pub fn fill_attrs(fill_set: bool, brush: &Brush, poly_fill_mode: u16) -> String {
    if !fill_set || brush.style == BrushStyle::Null {
        return r#" fill="none""#.to_string();
    }

    let rule = if poly_fill_mode == fill_mode::WINDING {
        "nonzero"
    } else {
        "evenodd"
    };
    format!(
        r#" fill="{}" fill-rule="{}""#,
        color_hex(brush.color),
        rule
    )
}
