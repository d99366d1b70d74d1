// Device context state management for WMF playback
//
// The device context is the bundle of graphics state a record executes
// against: the selected pen, brush, and font, text and background
// attributes, the polygon fill rule, and the ROP2 mode. META_SAVEDC and
// META_RESTOREDC move snapshots on and off a stack.

use super::objects::{Brush, BrushStyle, ColorRef, Font, Pen, PenStyle};
use crate::constants::{bk_mode, fill_mode, rop2, stock};

/// Text alignment bitfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAlign(pub u16);

impl TextAlign {
    pub const UPDATECP: u16 = 0x0001;
    pub const LEFT: u16 = 0x0000;
    pub const RIGHT: u16 = 0x0002;
    pub const CENTER: u16 = 0x0006;
    pub const TOP: u16 = 0x0000;
    pub const BOTTOM: u16 = 0x0008;
    pub const BASELINE: u16 = 0x0018;

    pub fn is_center(&self) -> bool {
        (self.0 & 0x0006) == Self::CENTER
    }

    pub fn is_right(&self) -> bool {
        (self.0 & 0x0002) == Self::RIGHT
    }

    pub fn to_svg_anchor(&self) -> &'static str {
        if self.is_center() {
            "middle"
        } else if self.is_right() {
            "end"
        } else {
            "start"
        }
    }
}

impl Default for TextAlign {
    fn default() -> Self {
        Self(Self::LEFT | Self::TOP)
    }
}

/// Device context state
///
/// A plain value type: saving a context is a clone, and the only owned
/// allocation is the selected font's face name.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceContext {
    /// Whether a pen is in effect (cleared by selecting NULL_PEN)
    pub stroke_set: bool,
    pub pen: Pen,

    /// Whether a brush is in effect (cleared by selecting NULL_BRUSH)
    pub fill_set: bool,
    pub brush: Brush,

    /// Whether a font has been selected
    pub font_set: bool,
    pub font: Font,

    pub text_color: ColorRef,
    pub text_align: TextAlign,

    pub bk_color: ColorRef,
    pub bk_mode: u16,

    pub poly_fill_mode: u16,
    pub rop2: u16,
}

impl Default for DeviceContext {
    fn default() -> Self {
        Self {
            stroke_set: true,
            pen: Pen::default(),
            fill_set: true,
            brush: Brush::default(),
            font_set: false,
            font: Font::default(),
            text_color: ColorRef::BLACK,
            text_align: TextAlign::default(),
            bk_color: ColorRef::WHITE,
            bk_mode: bk_mode::OPAQUE,
            poly_fill_mode: fill_mode::ALTERNATE,
            rop2: rop2::R2_COPYPEN,
        }
    }
}

impl DeviceContext {
    /// Apply a pen object to the context
    pub fn select_pen(&mut self, pen: &Pen) {
        self.stroke_set = pen.style != PenStyle::Null;
        self.pen = *pen;
    }

    /// Apply a brush object to the context
    pub fn select_brush(&mut self, brush: &Brush) {
        self.fill_set = brush.style != BrushStyle::Null;
        self.brush = *brush;
    }

    /// Apply a font object to the context
    pub fn select_font(&mut self, font: &Font) {
        self.font_set = true;
        self.font = font.clone();
    }

    /// Resolve a stock-object handle.
    ///
    /// Brushes and pens map to built-in defaults; the stock fonts and
    /// palette leave the context untouched.
    pub fn select_stock(&mut self, handle: u16) {
        match handle {
            stock::WHITE_BRUSH => self.select_solid_brush(ColorRef::WHITE),
            stock::LTGRAY_BRUSH => self.select_solid_brush(ColorRef::gray(192)),
            stock::GRAY_BRUSH => self.select_solid_brush(ColorRef::gray(128)),
            stock::DKGRAY_BRUSH => self.select_solid_brush(ColorRef::gray(64)),
            stock::BLACK_BRUSH => self.select_solid_brush(ColorRef::BLACK),
            stock::NULL_BRUSH => {
                self.fill_set = false;
                self.brush.style = BrushStyle::Null;
            },
            stock::WHITE_PEN => self.select_solid_pen(ColorRef::WHITE),
            stock::BLACK_PEN => self.select_solid_pen(ColorRef::BLACK),
            stock::NULL_PEN => {
                self.stroke_set = false;
                self.pen.style = PenStyle::Null;
            },
            _ => {},
        }
    }

    fn select_solid_brush(&mut self, color: ColorRef) {
        self.fill_set = true;
        self.brush = Brush {
            style: BrushStyle::Solid,
            color,
            hatch: 0,
        };
    }

    fn select_solid_pen(&mut self, color: ColorRef) {
        self.stroke_set = true;
        self.pen = Pen {
            style: PenStyle::Solid,
            width: 1.0,
            color,
        };
    }
}

/// Device context stack for SaveDC/RestoreDC
#[derive(Debug, Default)]
pub struct DeviceContextStack {
    stack: Vec<DeviceContext>,
}

impl DeviceContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot of the current context
    pub fn save(&mut self, dc: &DeviceContext) {
        self.stack.push(dc.clone());
    }

    /// Restore from the stack.
    ///
    /// An index of 0 is a no-op; any other index pops `|index|` frames,
    /// copying each into the current context in turn, so the context ends
    /// up `|index|` frames down. Popping past the bottom stops early.
    pub fn restore(&mut self, index: i16, dc: &mut DeviceContext) {
        if index == 0 {
            return;
        }
        for _ in 0..index.unsigned_abs() {
            match self.stack.pop() {
                Some(saved) => *dc = saved,
                None => break,
            }
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
