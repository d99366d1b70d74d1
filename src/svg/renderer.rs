// SVG element rendering from WMF records
//
// Processes records sequentially: every record first mutates the drawing
// state (device context, object table, coordinate system, pen position),
// then drawing records emit one SVG element (or one per sub-polygon).
// Malformed records are skipped without aborting the conversion.

use super::objects::{
    Brush, BrushStyle, ColorRef, Font, GdiObject, ObjectHandle, ObjectTable, Pen, PenStyle,
};
use super::state::{DeviceContext, DeviceContextStack, TextAlign};
use super::style::{color_hex, fill_attrs, stroke_attrs};
use super::transform::CoordinateSystem;
use crate::binary::{read_i16_le, read_u16_le, read_u32_le};
use crate::constants::record;
use crate::parser::WmfRecord;

/// Type of arc rendering
#[derive(Debug, Clone, Copy)]
enum ArcType {
    Open,  // Arc only
    Pie,   // Arc + lines to center
    Chord, // Arc + closing line
}

/// How completely a record's semantics are honored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Support {
    Full,
    Partial,
    Ignored,
}

/// Record name and support level, for diagnostics
fn describe(function: u16) -> (&'static str, Support) {
    use Support::*;
    match function {
        record::EOF => ("EOF", Full),
        record::SET_BK_COLOR => ("SETBKCOLOR", Full),
        record::SET_BK_MODE => ("SETBKMODE", Full),
        record::SET_MAP_MODE => ("SETMAPMODE", Full),
        record::SET_ROP2 => ("SETROP2", Partial),
        record::SET_POLY_FILL_MODE => ("SETPOLYFILLMODE", Full),
        record::SET_TEXT_COLOR => ("SETTEXTCOLOR", Full),
        record::SET_TEXT_ALIGN => ("SETTEXTALIGN", Full),
        record::SET_WINDOW_ORG => ("SETWINDOWORG", Full),
        record::SET_WINDOW_EXT => ("SETWINDOWEXT", Full),
        record::SET_VIEWPORT_ORG => ("SETVIEWPORTORG", Full),
        record::SET_VIEWPORT_EXT => ("SETVIEWPORTEXT", Full),
        record::SAVE_DC => ("SAVEDC", Full),
        record::RESTORE_DC => ("RESTOREDC", Full),
        record::SELECT_OBJECT => ("SELECTOBJECT", Full),
        record::DELETE_OBJECT => ("DELETEOBJECT", Full),
        record::CREATE_PEN_INDIRECT => ("CREATEPENINDIRECT", Full),
        record::CREATE_BRUSH_INDIRECT => ("CREATEBRUSHINDIRECT", Full),
        record::CREATE_FONT_INDIRECT => ("CREATEFONTINDIRECT", Full),
        record::MOVE_TO => ("MOVETO", Full),
        record::LINE_TO => ("LINETO", Full),
        record::RECTANGLE => ("RECTANGLE", Full),
        record::ROUND_RECT => ("ROUNDRECT", Full),
        record::ELLIPSE => ("ELLIPSE", Full),
        record::POLYGON => ("POLYGON", Full),
        record::POLYLINE => ("POLYLINE", Full),
        record::POLYPOLYGON => ("POLYPOLYGON", Full),
        record::ARC => ("ARC", Full),
        record::PIE => ("PIE", Full),
        record::CHORD => ("CHORD", Full),
        record::TEXT_OUT => ("TEXTOUT", Full),
        record::EXT_TEXT_OUT => ("EXTTEXTOUT", Full),
        record::SET_REL_ABS => ("SETRELABS", Ignored),
        record::SET_STRETCH_BLT_MODE => ("SETSTRETCHBLTMODE", Ignored),
        record::SET_MAPPER_FLAGS => ("SETMAPPERFLAGS", Ignored),
        record::ESCAPE => ("ESCAPE", Ignored),
        record::REALIZE_PALETTE => ("REALIZEPALETTE", Ignored),
        record::SELECT_PALETTE => ("SELECTPALETTE", Ignored),
        record::CREATE_PALETTE => ("CREATEPALETTE", Ignored),
        record::SET_PALETTE_ENTRIES => ("SETPALENTRIES", Ignored),
        record::RESIZE_PALETTE => ("RESIZEPALETTE", Ignored),
        record::ANIMATE_PALETTE => ("ANIMATEPALETTE", Ignored),
        _ => ("UNKNOWN", Ignored),
    }
}

/// SVG renderer that interprets WMF records against the drawing state
pub struct SvgRenderer {
    coords: CoordinateSystem,
    dc: DeviceContext,
    stack: DeviceContextStack,
    objects: ObjectTable,
    /// Current pen position in output units (set by MOVETO, moved by LINETO)
    cur_x: f64,
    cur_y: f64,
    /// Element tag prefix, empty or `"{ns}:"`
    ns: String,
    verbose: bool,
}

impl SvgRenderer {
    pub fn new(coords: CoordinateSystem, object_count: usize, ns: String, verbose: bool) -> Self {
        Self {
            coords,
            dc: DeviceContext::default(),
            stack: DeviceContextStack::new(),
            objects: ObjectTable::new(object_count),
            cur_x: 0.0,
            cur_y: 0.0,
            ns,
            verbose,
        }
    }

    /// Interpret one record, returning its SVG element if it draws anything
    pub fn render_record(&mut self, rec: &WmfRecord, number: usize) -> Option<String> {
        let (name, support) = describe(rec.function);
        if self.verbose {
            let status = match support {
                Support::Full => "supported",
                Support::Partial => "partial",
                Support::Ignored => "ignored",
            };
            eprintln!(
                "{:>5}  0x{:04X}  {:<18} {}",
                number, rec.function, name, status
            );
        }
        if support == Support::Ignored {
            log::debug!("ignoring record 0x{:04X} ({})", rec.function, name);
            return None;
        }

        self.update_state(rec);

        match rec.function {
            record::RECTANGLE => self.render_rectangle(rec),
            record::ROUND_RECT => self.render_round_rect(rec),
            record::ELLIPSE => self.render_ellipse(rec),
            record::POLYGON => self.render_polygon(rec),
            record::POLYLINE => self.render_polyline(rec),
            record::POLYPOLYGON => self.render_polypolygon(rec),
            record::LINE_TO => self.render_line_to(rec),
            record::ARC => self.render_arc_common(rec, ArcType::Open),
            record::PIE => self.render_arc_common(rec, ArcType::Pie),
            record::CHORD => self.render_arc_common(rec, ArcType::Chord),
            record::TEXT_OUT => self.render_text_out(rec),
            record::EXT_TEXT_OUT => self.render_ext_text_out(rec),
            _ => None,
        }
    }

    /// Update drawing state from a record
    fn update_state(&mut self, rec: &WmfRecord) {
        match rec.function {
            record::SET_BK_COLOR if rec.params.len() >= 4 => {
                self.dc.bk_color =
                    ColorRef::from_colorref(read_u32_le(&rec.params, 0).unwrap_or(0));
            },
            record::SET_BK_MODE if rec.params.len() >= 2 => {
                self.dc.bk_mode = read_u16_le(&rec.params, 0).unwrap_or(0);
            },
            record::SET_MAP_MODE if rec.params.len() >= 2 => {
                self.coords.map_mode = read_u16_le(&rec.params, 0).unwrap_or(0);
            },
            record::SET_ROP2 if rec.params.len() >= 2 => {
                self.dc.rop2 = read_u16_le(&rec.params, 0).unwrap_or(0);
            },
            record::SET_POLY_FILL_MODE if rec.params.len() >= 2 => {
                self.dc.poly_fill_mode = read_u16_le(&rec.params, 0).unwrap_or(0);
            },
            record::SET_TEXT_COLOR if rec.params.len() >= 4 => {
                self.dc.text_color =
                    ColorRef::from_colorref(read_u32_le(&rec.params, 0).unwrap_or(0));
            },
            record::SET_TEXT_ALIGN if rec.params.len() >= 2 => {
                self.dc.text_align = TextAlign(read_u16_le(&rec.params, 0).unwrap_or(0));
            },
            record::SET_WINDOW_ORG if rec.params.len() >= 4 => {
                self.coords.window_org_y = read_i16_le(&rec.params, 0).unwrap_or(0);
                self.coords.window_org_x = read_i16_le(&rec.params, 2).unwrap_or(0);
            },
            record::SET_WINDOW_EXT if rec.params.len() >= 4 => {
                self.coords.window_ext_y = read_i16_le(&rec.params, 0).unwrap_or(0);
                self.coords.window_ext_x = read_i16_le(&rec.params, 2).unwrap_or(0);
            },
            record::SET_VIEWPORT_ORG if rec.params.len() >= 4 => {
                self.coords.viewport_org_y = read_i16_le(&rec.params, 0).unwrap_or(0);
                self.coords.viewport_org_x = read_i16_le(&rec.params, 2).unwrap_or(0);
            },
            record::SET_VIEWPORT_EXT if rec.params.len() >= 4 => {
                self.coords.viewport_ext_y = read_i16_le(&rec.params, 0).unwrap_or(0);
                self.coords.viewport_ext_x = read_i16_le(&rec.params, 2).unwrap_or(0);
            },
            record::SAVE_DC => {
                self.stack.save(&self.dc);
            },
            record::RESTORE_DC if rec.params.len() >= 2 => {
                let index = read_i16_le(&rec.params, 0).unwrap_or(0);
                self.stack.restore(index, &mut self.dc);
            },
            record::SELECT_OBJECT if rec.params.len() >= 2 => {
                let handle = read_u16_le(&rec.params, 0).unwrap_or(0);
                match ObjectHandle::from_raw(handle) {
                    ObjectHandle::Stock(code) => self.dc.select_stock(code),
                    ObjectHandle::Slot(index) => match self.objects.get(index) {
                        Some(GdiObject::Pen(pen)) => self.dc.select_pen(pen),
                        Some(GdiObject::Brush(brush)) => self.dc.select_brush(brush),
                        Some(GdiObject::Font(font)) => self.dc.select_font(font),
                        None => {},
                    },
                }
            },
            record::DELETE_OBJECT if rec.params.len() >= 2 => {
                let index = read_u16_le(&rec.params, 0).unwrap_or(0) as usize;
                self.objects.delete(index);
            },
            record::CREATE_PEN_INDIRECT if rec.params.len() >= 10 => {
                let style = PenStyle::from_u16(read_u16_le(&rec.params, 0).unwrap_or(0));
                let width = read_i16_le(&rec.params, 2).unwrap_or(0);
                let color = ColorRef::from_colorref(read_u32_le(&rec.params, 6).unwrap_or(0));
                let pen = Pen {
                    style,
                    width: f64::from(width.max(1)),
                    color,
                };
                if self.objects.insert(GdiObject::Pen(pen)).is_none() {
                    log::warn!("object table full, dropping pen");
                }
            },
            record::CREATE_BRUSH_INDIRECT if rec.params.len() >= 8 => {
                let brush = Brush {
                    style: BrushStyle::from_u16(read_u16_le(&rec.params, 0).unwrap_or(0)),
                    color: ColorRef::from_colorref(read_u32_le(&rec.params, 2).unwrap_or(0)),
                    hatch: read_u16_le(&rec.params, 6).unwrap_or(0),
                };
                if self.objects.insert(GdiObject::Brush(brush)).is_none() {
                    log::warn!("object table full, dropping brush");
                }
            },
            record::CREATE_FONT_INDIRECT if rec.params.len() >= 18 => {
                let font = parse_font(&rec.params);
                if self.objects.insert(GdiObject::Font(font)).is_none() {
                    log::warn!("object table full, dropping font");
                }
            },
            record::MOVE_TO if rec.params.len() >= 4 => {
                let y = read_i16_le(&rec.params, 0).unwrap_or(0);
                let x = read_i16_le(&rec.params, 2).unwrap_or(0);
                let (tx, ty) = self.coords.point(x, y);
                self.cur_x = tx;
                self.cur_y = ty;
            },
            _ => {},
        }
    }

    fn stroke(&self) -> String {
        stroke_attrs(self.dc.stroke_set, &self.dc.pen, self.coords.scaling)
    }

    fn fill(&self) -> String {
        fill_attrs(self.dc.fill_set, &self.dc.brush, self.dc.poly_fill_mode)
    }

    /// Scaled `x,y` pairs for POLYGON-shaped point arrays
    fn scaled_points(&self, params: &[u8], offset: usize, count: usize) -> String {
        let mut points = String::with_capacity(count * 12);
        for i in 0..count {
            let x = read_i16_le(params, offset + i * 4).unwrap_or(0);
            let y = read_i16_le(params, offset + i * 4 + 2).unwrap_or(0);
            let (tx, ty) = self.coords.point(x, y);
            if i > 0 {
                points.push(' ');
            }
            points.push_str(&format!("{:.2},{:.2}", tx, ty));
        }
        points
    }

    fn render_rectangle(&self, rec: &WmfRecord) -> Option<String> {
        if rec.params.len() < 8 {
            return None;
        }

        let bottom = read_i16_le(&rec.params, 0).unwrap_or(0);
        let right = read_i16_le(&rec.params, 2).unwrap_or(0);
        let top = read_i16_le(&rec.params, 4).unwrap_or(0);
        let left = read_i16_le(&rec.params, 6).unwrap_or(0);

        let (x, y) = self.coords.point(left, top);
        let width = self.coords.scale_x(right) - x;
        let height = self.coords.scale_y(bottom) - y;

        let mut s = format!(
            r#"<{}rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}""#,
            self.ns, x, y, width, height
        );
        s.push_str(&self.fill());
        s.push_str(&self.stroke());
        s.push_str("/>");
        Some(s)
    }

    fn render_round_rect(&self, rec: &WmfRecord) -> Option<String> {
        if rec.params.len() < 12 {
            return None;
        }

        let corner_h = read_i16_le(&rec.params, 0).unwrap_or(0);
        let corner_w = read_i16_le(&rec.params, 2).unwrap_or(0);
        let bottom = read_i16_le(&rec.params, 4).unwrap_or(0);
        let right = read_i16_le(&rec.params, 6).unwrap_or(0);
        let top = read_i16_le(&rec.params, 8).unwrap_or(0);
        let left = read_i16_le(&rec.params, 10).unwrap_or(0);

        let (x, y) = self.coords.point(left, top);
        let width = self.coords.scale_x(right) - x;
        let height = self.coords.scale_y(bottom) - y;
        let rx = (f64::from(corner_w) * self.coords.scaling).abs() / 2.0;
        let ry = (f64::from(corner_h) * self.coords.scaling).abs() / 2.0;

        let mut s = format!(
            r#"<{}rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" ry="{:.2}""#,
            self.ns, x, y, width, height, rx, ry
        );
        s.push_str(&self.fill());
        s.push_str(&self.stroke());
        s.push_str("/>");
        Some(s)
    }

    fn render_ellipse(&self, rec: &WmfRecord) -> Option<String> {
        if rec.params.len() < 8 {
            return None;
        }

        let bottom = read_i16_le(&rec.params, 0).unwrap_or(0);
        let right = read_i16_le(&rec.params, 2).unwrap_or(0);
        let top = read_i16_le(&rec.params, 4).unwrap_or(0);
        let left = read_i16_le(&rec.params, 6).unwrap_or(0);

        let (x1, y1) = self.coords.point(left, top);
        let (x2, y2) = self.coords.point(right, bottom);

        let mut s = format!(
            r#"<{}ellipse cx="{:.2}" cy="{:.2}" rx="{:.2}" ry="{:.2}""#,
            self.ns,
            (x1 + x2) / 2.0,
            (y1 + y2) / 2.0,
            (x2 - x1).abs() / 2.0,
            (y2 - y1).abs() / 2.0
        );
        s.push_str(&self.fill());
        s.push_str(&self.stroke());
        s.push_str("/>");
        Some(s)
    }

    fn render_polygon(&self, rec: &WmfRecord) -> Option<String> {
        if rec.params.len() < 2 {
            return None;
        }

        let count = read_i16_le(&rec.params, 0).unwrap_or(0).max(0) as usize;
        if count == 0 || rec.params.len() < 2 + count * 4 {
            return None;
        }

        let mut s = format!(
            r#"<{}polygon points="{}""#,
            self.ns,
            self.scaled_points(&rec.params, 2, count)
        );
        s.push_str(&self.fill());
        s.push_str(&self.stroke());
        s.push_str("/>");
        Some(s)
    }

    fn render_polyline(&self, rec: &WmfRecord) -> Option<String> {
        if rec.params.len() < 2 {
            return None;
        }

        let count = read_i16_le(&rec.params, 0).unwrap_or(0).max(0) as usize;
        if count == 0 || rec.params.len() < 2 + count * 4 {
            return None;
        }

        let mut s = format!(
            r#"<{}polyline points="{}" fill="none""#,
            self.ns,
            self.scaled_points(&rec.params, 2, count)
        );
        s.push_str(&self.stroke());
        s.push_str("/>");
        Some(s)
    }

    fn render_polypolygon(&self, rec: &WmfRecord) -> Option<String> {
        if rec.params.len() < 2 {
            return None;
        }

        let num_polys = read_u16_le(&rec.params, 0).unwrap_or(0) as usize;
        if num_polys == 0 {
            return None;
        }

        let mut offset = 2;
        let mut counts = Vec::with_capacity(num_polys);
        for _ in 0..num_polys {
            counts.push(read_u16_le(&rec.params, offset).ok()? as usize);
            offset += 2;
        }

        let mut s = String::with_capacity(128);
        for count in counts {
            if count == 0 {
                continue;
            }
            if offset + count * 4 > rec.params.len() {
                break;
            }

            s.push_str(&format!(
                r#"<{}polygon points="{}""#,
                self.ns,
                self.scaled_points(&rec.params, offset, count)
            ));
            s.push_str(&self.fill());
            s.push_str(&self.stroke());
            s.push_str("/>");
            offset += count * 4;
        }

        if s.is_empty() { None } else { Some(s) }
    }

    fn render_line_to(&mut self, rec: &WmfRecord) -> Option<String> {
        if rec.params.len() < 4 {
            return None;
        }

        let y = read_i16_le(&rec.params, 0).unwrap_or(0);
        let x = read_i16_le(&rec.params, 2).unwrap_or(0);
        let (x2, y2) = self.coords.point(x, y);

        let mut s = format!(
            r#"<{}line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}""#,
            self.ns, self.cur_x, self.cur_y, x2, y2
        );
        s.push_str(&self.stroke());
        s.push_str("/>");

        self.cur_x = x2;
        self.cur_y = y2;
        Some(s)
    }

    fn render_arc_common(&self, rec: &WmfRecord, arc_type: ArcType) -> Option<String> {
        if rec.params.len() < 16 {
            return None;
        }

        let y_end = read_i16_le(&rec.params, 0).unwrap_or(0);
        let x_end = read_i16_le(&rec.params, 2).unwrap_or(0);
        let y_start = read_i16_le(&rec.params, 4).unwrap_or(0);
        let x_start = read_i16_le(&rec.params, 6).unwrap_or(0);
        let bottom = read_i16_le(&rec.params, 8).unwrap_or(0);
        let right = read_i16_le(&rec.params, 10).unwrap_or(0);
        let top = read_i16_le(&rec.params, 12).unwrap_or(0);
        let left = read_i16_le(&rec.params, 14).unwrap_or(0);

        let (x1, y1) = self.coords.point(left, top);
        let (x2, y2) = self.coords.point(right, bottom);
        let cx = (x1 + x2) / 2.0;
        let cy = (y1 + y2) / 2.0;
        let rx = (x2 - x1).abs() / 2.0;
        let ry = (y2 - y1).abs() / 2.0;

        // The radial points only define the angles; the path starts and ends
        // on the ellipse itself.
        let (ref_sx, ref_sy) = self.coords.point(x_start, y_start);
        let (ref_ex, ref_ey) = self.coords.point(x_end, y_end);
        let start_angle = (ref_sy - cy).atan2(ref_sx - cx);
        let end_angle = (ref_ey - cy).atan2(ref_ex - cx);

        let sx = cx + rx * start_angle.cos();
        let sy = cy + ry * start_angle.sin();
        let ex = cx + rx * end_angle.cos();
        let ey = cy + ry * end_angle.sin();

        let mut swept = end_angle - start_angle;
        if swept < 0.0 {
            swept += 2.0 * std::f64::consts::PI;
        }
        let large_arc = i32::from(swept > std::f64::consts::PI);

        let mut d = String::with_capacity(96);
        match arc_type {
            ArcType::Pie => {
                d.push_str(&format!("M {:.2},{:.2} L {:.2},{:.2} ", cx, cy, sx, sy));
            },
            _ => {
                d.push_str(&format!("M {:.2},{:.2} ", sx, sy));
            },
        }
        d.push_str(&format!(
            "A {:.2},{:.2} 0 {},1 {:.2},{:.2}",
            rx, ry, large_arc, ex, ey
        ));
        if !matches!(arc_type, ArcType::Open) {
            d.push_str(" Z");
        }

        let mut s = format!(r#"<{}path d="{}""#, self.ns, d);
        if matches!(arc_type, ArcType::Open) {
            s.push_str(r#" fill="none""#);
        } else {
            s.push_str(&self.fill());
        }
        s.push_str(&self.stroke());
        s.push_str("/>");
        Some(s)
    }

    fn render_text_out(&self, rec: &WmfRecord) -> Option<String> {
        if rec.params.len() < 6 {
            return None;
        }

        // Layout: length, string (word aligned), y, x
        let length = read_i16_le(&rec.params, 0).unwrap_or(0);
        if length <= 0 {
            return None;
        }
        let length = length as usize;

        let text_end = (2 + length).min(rec.params.len());
        let text = String::from_utf8_lossy(&rec.params[2..text_end]).into_owned();

        let coord_offset = 2 + length.div_ceil(2) * 2;
        if rec.params.len() < coord_offset + 4 {
            return None;
        }
        let y = read_i16_le(&rec.params, coord_offset).unwrap_or(0);
        let x = read_i16_le(&rec.params, coord_offset + 2).unwrap_or(0);

        self.render_text(&text, x, y)
    }

    fn render_ext_text_out(&self, rec: &WmfRecord) -> Option<String> {
        if rec.params.len() < 8 {
            return None;
        }

        // Layout: y, x, length, options, optional rect, string
        let y = read_i16_le(&rec.params, 0).unwrap_or(0);
        let x = read_i16_le(&rec.params, 2).unwrap_or(0);
        let length = read_i16_le(&rec.params, 4).unwrap_or(0);
        let options = read_u16_le(&rec.params, 6).unwrap_or(0);
        if length <= 0 {
            return None;
        }
        let length = length as usize;

        // ETO_OPAQUE or ETO_CLIPPED adds a clip rectangle before the string
        let text_offset = if options & 0x0006 != 0 { 16 } else { 8 };
        if rec.params.len() < text_offset + length {
            return None;
        }
        let text =
            String::from_utf8_lossy(&rec.params[text_offset..text_offset + length]).into_owned();

        self.render_text(&text, x, y)
    }

    fn render_text(&self, text: &str, x: i16, y: i16) -> Option<String> {
        let (tx, ty) = self.coords.point(x, y);

        let mut font_size = f64::from(self.dc.font.height).abs() * self.coords.scaling;
        if font_size < 1.0 {
            font_size = 12.0;
        }

        let mut s = format!(
            r#"<{}text x="{:.2}" y="{:.2}" fill="{}" font-size="{:.2}" text-anchor="{}""#,
            self.ns,
            tx,
            ty,
            color_hex(self.dc.text_color),
            font_size,
            self.dc.text_align.to_svg_anchor()
        );
        if !self.dc.font.face_name.is_empty() {
            s.push_str(&format!(r#" font-family="{}""#, self.dc.font.face_name));
        }
        if self.dc.font.italic {
            s.push_str(r#" font-style="italic""#);
        }
        if self.dc.font.weight > 400 {
            s.push_str(r#" font-weight="bold""#);
        }
        s.push('>');

        for c in text.chars() {
            match c {
                '<' => s.push_str("&lt;"),
                '>' => s.push_str("&gt;"),
                '&' => s.push_str("&amp;"),
                '"' => s.push_str("&quot;"),
                _ => s.push(c),
            }
        }

        s.push_str(&format!("</{}text>", self.ns));
        Some(s)
    }
}

/// Decode a LOGFONT from a CREATEFONTINDIRECT parameter block (≥ 18 bytes)
fn parse_font(params: &[u8]) -> Font {
    let name_bytes = &params[18..];
    let name_end = name_bytes
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(name_bytes.len());

    Font {
        height: read_i16_le(params, 0).unwrap_or(0),
        width: read_i16_le(params, 2).unwrap_or(0),
        escapement: read_i16_le(params, 4).unwrap_or(0),
        orientation: read_i16_le(params, 6).unwrap_or(0),
        weight: read_i16_le(params, 8).unwrap_or(0),
        italic: params[10] != 0,
        underline: params[11] != 0,
        strike_out: params[12] != 0,
        charset: params[13],
        face_name: String::from_utf8_lossy(&name_bytes[..name_end]).into_owned(),
    }
}
