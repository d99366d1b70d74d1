//! WMF to SVG conversion
//!
//! A single-pass interpreter over the record stream: each record mutates the
//! drawing state (device context, object table, window/viewport mapping) and
//! drawing records emit SVG elements honoring the state in effect at that
//! point.
//!
//! # Coordinate handling
//!
//! A placeable header seeds the window from its target bounds and converts
//! metafile units to CSS pixels at 96 dpi (or to caller-supplied target
//! dimensions, preserving aspect ratio when both are given). Files without
//! a placeable header render into a 1000×1000 space at scale 1. SETWINDOW*/
//! SETVIEWPORT* records retarget the mapping mid-stream.
//!
//! # Architecture
//!
//! - `transform`: window/viewport coordinate engine
//! - `objects`: pens, brushes, fonts, the slotted object table, stock handles
//! - `state`: device context and its save/restore stack
//! - `style`: stroke/fill attribute generation
//! - `renderer`: per-record translation to SVG elements
//!
//! # Example
//!
//! ```no_run
//! use longan::convert_wmf_to_svg;
//!
//! let wmf_data = std::fs::read("drawing.wmf")?;
//! let svg = convert_wmf_to_svg(&wmf_data)?;
//! std::fs::write("drawing.svg", svg)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod objects;
mod renderer;
mod state;
mod style;
mod transform;

use crate::error::Result;
use crate::parser::WmfParser;

pub use objects::{
    Brush, BrushStyle, ColorRef, Font, GdiObject, ObjectHandle, ObjectTable, Pen, PenStyle,
};
pub use renderer::SvgRenderer;
pub use state::{DeviceContext, DeviceContextStack, TextAlign};
pub use transform::CoordinateSystem;

/// Options controlling SVG output
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Namespace prefix applied to every SVG element (empty for none)
    pub name_space: String,
    /// Print per-record diagnostics to stderr
    pub verbose: bool,
    /// Emit the XML prolog and `<svg>` wrapper; otherwise a bare fragment
    pub svg_delimiter: bool,
    /// Target width in pixels (`None` scales from the placeable header)
    pub img_width: Option<f64>,
    /// Target height in pixels
    pub img_height: Option<f64>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            name_space: String::new(),
            verbose: false,
            svg_delimiter: true,
            img_width: None,
            img_height: None,
        }
    }
}

/// WMF to SVG converter
pub struct WmfSvgConverter {
    parser: WmfParser,
    options: SvgOptions,
}

impl WmfSvgConverter {
    /// Create a converter with default options
    pub fn new(parser: WmfParser) -> Self {
        Self::with_options(parser, SvgOptions::default())
    }

    /// Create a converter with explicit options
    pub fn with_options(parser: WmfParser, options: SvgOptions) -> Self {
        Self { parser, options }
    }

    /// Convert the parsed metafile to an SVG string
    pub fn convert_to_svg(&self) -> Result<String> {
        let (coords, img_width, img_height) = self.initial_view();

        let ns = &self.options.name_space;
        let prefix = if ns.is_empty() {
            String::new()
        } else {
            format!("{}:", ns)
        };

        let mut svg = String::with_capacity(4096);

        if self.options.svg_delimiter {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            if ns.is_empty() {
                svg.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg""#);
            } else {
                svg.push_str(&format!(
                    r#"<{}svg xmlns:{}="http://www.w3.org/2000/svg""#,
                    prefix, ns
                ));
            }
            svg.push_str(&format!(
                r#" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
                img_width, img_height, img_width, img_height
            ));
        }

        let mut renderer = SvgRenderer::new(
            coords,
            self.parser.header.num_objects as usize,
            prefix.clone(),
            self.options.verbose,
        );
        for (number, record) in self.parser.records.iter().enumerate() {
            if let Some(element) = renderer.render_record(record, number) {
                svg.push_str(&element);
            }
        }

        if self.options.svg_delimiter {
            svg.push_str(&format!("</{}svg>", prefix));
        }

        Ok(svg)
    }

    /// Convert the parsed metafile to SVG bytes
    pub fn convert_to_svg_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.convert_to_svg()?.into_bytes())
    }

    /// Initial coordinate system and output dimensions.
    ///
    /// Placeable files map their bounds through a DPI- or target-derived
    /// scale; everything else starts from the 1000×1000 default space.
    fn initial_view(&self) -> (CoordinateSystem, f64, f64) {
        let mut coords = CoordinateSystem::default();

        let Some(placeable) = &self.parser.placeable else {
            return (coords, 1000.0, 1000.0);
        };

        coords.window_org_x = placeable.left;
        coords.window_org_y = placeable.top;
        coords.window_ext_x = placeable.width();
        coords.window_ext_y = placeable.height();
        coords.viewport_ext_x = coords.window_ext_x;
        coords.viewport_ext_y = coords.window_ext_y;

        let wmf_width = f64::from(coords.window_ext_x);
        let wmf_height = f64::from(coords.window_ext_y);

        let (scaling, img_width, img_height) =
            match (self.options.img_width, self.options.img_height) {
                (Some(w), Some(h)) => {
                    let scale = (w / wmf_width).min(h / wmf_height);
                    (scale, w, h)
                },
                (Some(w), None) => {
                    let scale = w / wmf_width;
                    (scale, w, wmf_height * scale)
                },
                (None, Some(h)) => {
                    let scale = h / wmf_height;
                    (scale, wmf_width * scale, h)
                },
                (None, None) => {
                    let scale = 96.0 / f64::from(placeable.inch.max(1));
                    (scale, wmf_width * scale, wmf_height * scale)
                },
            };

        // Degenerate placeable bounds would scale by infinity; fall back to
        // the unscaled space instead.
        if !scaling.is_finite() || scaling <= 0.0 {
            return (coords, wmf_width.abs().max(1.0), wmf_height.abs().max(1.0));
        }

        coords.scaling = scaling;
        (coords, img_width, img_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{record, stock};

    /// Append one record: size in words, function code, parameter words
    fn push_record(data: &mut Vec<u8>, function: u16, params: &[i16]) {
        data.extend_from_slice(&(3 + params.len() as u32).to_le_bytes());
        data.extend_from_slice(&function.to_le_bytes());
        for w in params {
            data.extend_from_slice(&w.to_le_bytes());
        }
    }

    fn push_eof(data: &mut Vec<u8>) {
        push_record(data, record::EOF, &[]);
    }

    fn standard_header(num_objects: u16) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&1u16.to_le_bytes());
        data.extend_from_slice(&9u16.to_le_bytes());
        data.extend_from_slice(&0x0300u16.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&num_objects.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data
    }

    fn placeable_file(bounds: (i16, i16, i16, i16), inch: u16, num_objects: u16) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&0x9AC6CDD7u32.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&bounds.0.to_le_bytes());
        data.extend_from_slice(&bounds.1.to_le_bytes());
        data.extend_from_slice(&bounds.2.to_le_bytes());
        data.extend_from_slice(&bounds.3.to_le_bytes());
        data.extend_from_slice(&inch.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&standard_header(num_objects));
        data
    }

    fn convert(data: &[u8]) -> String {
        crate::convert_wmf_to_svg(data).unwrap()
    }

    #[test]
    fn test_empty_placeable_file_yields_bare_wrapper() {
        let mut data = placeable_file((0, 0, 1000, 1000), 96, 0);
        push_eof(&mut data);

        let svg = convert(&data);
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="1000" height="1000" viewBox="0 0 1000 1000">"#
        ));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains("<rect"));
        assert!(!svg.contains("<line"));
    }

    #[test]
    fn test_black_rectangle_at_1440_dpi() {
        let mut data = placeable_file((0, 0, 1000, 1000), 1440, 0);
        push_record(&mut data, record::SET_WINDOW_ORG, &[0, 0]);
        push_record(&mut data, record::SET_WINDOW_EXT, &[1000, 1000]);
        push_record(&mut data, record::SELECT_OBJECT, &[stock::BLACK_PEN as i16]);
        push_record(&mut data, record::SELECT_OBJECT, &[stock::NULL_BRUSH as i16]);
        push_record(&mut data, record::RECTANGLE, &[900, 900, 100, 100]);
        push_eof(&mut data);

        let svg = convert(&data);
        assert_eq!(svg.matches("<rect").count(), 1);
        // scaling = 96/1440
        assert!(svg.contains(r#"x="6.67" y="6.67" width="53.33" height="53.33""#));
        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r##"stroke="#000000""##));
        assert!(svg.contains(r#"width="67" height="67""#));
    }

    #[test]
    fn test_dashed_pen_line() {
        let mut data = standard_header(2);
        // style=PS_DASH, width=2, unused y, color=#FF0000
        push_record(
            &mut data,
            record::CREATE_PEN_INDIRECT,
            &[1, 2, 0, 0x00FF, 0x0000],
        );
        push_record(&mut data, record::SELECT_OBJECT, &[0]);
        push_record(&mut data, record::MOVE_TO, &[0, 0]);
        push_record(&mut data, record::LINE_TO, &[100, 100]);
        push_eof(&mut data);

        let svg = convert(&data);
        assert!(svg.contains(r##"stroke="#FF0000""##));
        assert!(svg.contains(r#"stroke-width="2.00""#));
        assert!(svg.contains(r#"stroke-dasharray="6,2""#));
    }

    #[test]
    fn test_save_restore_nesting() {
        let mut data = standard_header(4);
        for color in [0x00FFi16, 0x0100, 0x0200] {
            // Solid 1px pens: red #FF0000, then #000100, then #000200
            push_record(
                &mut data,
                record::CREATE_PEN_INDIRECT,
                &[0, 1, 0, color, 0],
            );
        }
        push_record(&mut data, record::SELECT_OBJECT, &[0]);
        push_record(&mut data, record::SAVE_DC, &[]);
        push_record(&mut data, record::SELECT_OBJECT, &[1]);
        push_record(&mut data, record::SAVE_DC, &[]);
        push_record(&mut data, record::SELECT_OBJECT, &[2]);
        push_record(&mut data, record::RESTORE_DC, &[-2]);
        push_record(&mut data, record::MOVE_TO, &[0, 0]);
        push_record(&mut data, record::LINE_TO, &[50, 50]);
        push_eof(&mut data);

        let svg = convert(&data);
        assert!(svg.contains(r##"stroke="#FF0000""##));
    }

    #[test]
    fn test_winding_star_fill_rule() {
        let mut data = standard_header(0);
        push_record(&mut data, record::SET_POLY_FILL_MODE, &[2]);
        push_record(
            &mut data,
            record::POLYGON,
            &[5, 50, 0, 80, 90, 0, 35, 100, 35, 20, 90],
        );
        push_eof(&mut data);

        let svg = convert(&data);
        assert_eq!(svg.matches("<polygon").count(), 1);
        assert!(svg.contains(r#"fill-rule="nonzero""#));
    }

    #[test]
    fn test_centered_text_with_escaping() {
        let mut data = standard_header(0);
        push_record(&mut data, record::SET_TEXT_ALIGN, &[6]);
        // TEXTOUT "A&B" at (500, 500): length, bytes, y, x
        let mut params = Vec::new();
        params.extend_from_slice(&3i16.to_le_bytes());
        params.extend_from_slice(b"A&B\0"); // padded to word boundary
        params.extend_from_slice(&500i16.to_le_bytes());
        params.extend_from_slice(&500i16.to_le_bytes());
        data.extend_from_slice(&(3 + params.len() as u32 / 2).to_le_bytes());
        data.extend_from_slice(&record::TEXT_OUT.to_le_bytes());
        data.extend_from_slice(&params);
        push_eof(&mut data);

        let svg = convert(&data);
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(">A&amp;B</text>"));
        assert!(svg.contains(r#"x="500.00" y="500.00""#));
    }

    #[test]
    fn test_namespace_prefix_decorates_elements() {
        let mut data = standard_header(0);
        push_record(&mut data, record::MOVE_TO, &[0, 0]);
        push_record(&mut data, record::LINE_TO, &[10, 10]);
        push_eof(&mut data);

        let options = SvgOptions {
            name_space: "svg".to_string(),
            ..SvgOptions::default()
        };
        let svg = crate::convert_wmf_to_svg_with(&data, &options).unwrap();
        assert!(svg.contains(r#"<svg:svg xmlns:svg="http://www.w3.org/2000/svg""#));
        assert!(svg.contains("<svg:line"));
        assert!(svg.ends_with("</svg:svg>"));
    }

    #[test]
    fn test_fragment_without_delimiter() {
        let mut data = standard_header(0);
        push_record(&mut data, record::MOVE_TO, &[0, 0]);
        push_record(&mut data, record::LINE_TO, &[10, 10]);
        push_eof(&mut data);

        let options = SvgOptions {
            svg_delimiter: false,
            ..SvgOptions::default()
        };
        let svg = crate::convert_wmf_to_svg_with(&data, &options).unwrap();
        assert!(svg.starts_with("<line"));
        assert!(!svg.contains("<svg"));
        assert!(!svg.contains("<?xml"));
    }

    #[test]
    fn test_explicit_dimensions_preserve_aspect() {
        let mut data = placeable_file((0, 0, 1000, 500), 96, 0);
        push_record(&mut data, record::RECTANGLE, &[500, 1000, 0, 0]);
        push_eof(&mut data);

        let options = SvgOptions {
            img_width: Some(500.0),
            img_height: Some(500.0),
            ..SvgOptions::default()
        };
        let svg = crate::convert_wmf_to_svg_with(&data, &options).unwrap();
        assert!(svg.contains(r#"width="500" height="500""#));
        // The limiting ratio is 500/1000; the rect spans 500x250
        assert!(svg.contains(r#"width="500.00" height="250.00""#));
    }

    #[test]
    fn test_object_slot_reuse_after_delete() {
        let mut data = standard_header(1);
        // Red pen fills slot 0
        push_record(
            &mut data,
            record::CREATE_PEN_INDIRECT,
            &[0, 1, 0, 0x00FF, 0],
        );
        push_record(&mut data, record::DELETE_OBJECT, &[0]);
        // With slot 0 free again, the green pen lands there
        push_record(
            &mut data,
            record::CREATE_PEN_INDIRECT,
            &[0, 1, 0, 0x7F00, 0],
        );
        push_record(&mut data, record::SELECT_OBJECT, &[0]);
        push_record(&mut data, record::MOVE_TO, &[0, 0]);
        push_record(&mut data, record::LINE_TO, &[10, 10]);
        push_eof(&mut data);

        let svg = convert(&data);
        assert!(svg.contains(r##"stroke="#007F00""##));
    }
}
