//! WMF constants and enumerations
//!
//! Record function codes, device-context modes, and stock-object handles
//! used in the Windows Metafile format.
//!
//! References:
//! - [MS-WMF]: Windows Metafile Format Specification
//! - https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-wmf/

/// WMF record function codes
///
/// The low byte is the record type; the high byte encodes the parameter
/// count in words and is not needed for dispatch.
#[allow(dead_code)]
pub mod record {
    // State records
    pub const SAVE_DC: u16 = 0x001E;
    pub const RESTORE_DC: u16 = 0x0127;
    pub const SET_BK_COLOR: u16 = 0x0201;
    pub const SET_BK_MODE: u16 = 0x0102;
    pub const SET_MAP_MODE: u16 = 0x0103;
    pub const SET_ROP2: u16 = 0x0104;
    pub const SET_REL_ABS: u16 = 0x0105;
    pub const SET_POLY_FILL_MODE: u16 = 0x0106;
    pub const SET_STRETCH_BLT_MODE: u16 = 0x0107;
    pub const SET_TEXT_COLOR: u16 = 0x0209;
    pub const SET_TEXT_ALIGN: u16 = 0x012E;
    pub const SET_WINDOW_ORG: u16 = 0x020B;
    pub const SET_WINDOW_EXT: u16 = 0x020C;
    pub const SET_VIEWPORT_ORG: u16 = 0x020D;
    pub const SET_VIEWPORT_EXT: u16 = 0x020E;

    // Drawing records
    pub const LINE_TO: u16 = 0x0213;
    pub const MOVE_TO: u16 = 0x0214;
    pub const POLYGON: u16 = 0x0324;
    pub const POLYLINE: u16 = 0x0325;
    pub const RECTANGLE: u16 = 0x041B;
    pub const ROUND_RECT: u16 = 0x061C;
    pub const ELLIPSE: u16 = 0x0418;
    pub const ARC: u16 = 0x0817;
    pub const PIE: u16 = 0x081A;
    pub const CHORD: u16 = 0x0830;
    pub const POLYPOLYGON: u16 = 0x0538;

    // Text records
    pub const TEXT_OUT: u16 = 0x0521;
    pub const EXT_TEXT_OUT: u16 = 0x0A32;

    // Object records
    pub const CREATE_PEN_INDIRECT: u16 = 0x02FA;
    pub const CREATE_BRUSH_INDIRECT: u16 = 0x02FC;
    pub const CREATE_FONT_INDIRECT: u16 = 0x02FB;
    pub const SELECT_OBJECT: u16 = 0x012D;
    pub const DELETE_OBJECT: u16 = 0x01F0;

    // Palette records (parsed but never rendered)
    pub const CREATE_PALETTE: u16 = 0x00F7;
    pub const SELECT_PALETTE: u16 = 0x0234;
    pub const REALIZE_PALETTE: u16 = 0x0035;
    pub const ANIMATE_PALETTE: u16 = 0x0436;
    pub const SET_PALETTE_ENTRIES: u16 = 0x0037;
    pub const RESIZE_PALETTE: u16 = 0x0139;

    // Control records
    pub const EOF: u16 = 0x0000;
    pub const SET_MAPPER_FLAGS: u16 = 0x0231;
    pub const ESCAPE: u16 = 0x0626;
}

/// Stock object handles
///
/// WMF object handles are 16 bits wide; bit 15 marks a built-in GDI object
/// instead of an object-table slot.
#[allow(dead_code)]
pub mod stock {
    pub const FLAG: u16 = 0x8000;

    pub const WHITE_BRUSH: u16 = 0x8000;
    pub const LTGRAY_BRUSH: u16 = 0x8001;
    pub const GRAY_BRUSH: u16 = 0x8002;
    pub const DKGRAY_BRUSH: u16 = 0x8003;
    pub const BLACK_BRUSH: u16 = 0x8004;
    pub const NULL_BRUSH: u16 = 0x8005;
    pub const WHITE_PEN: u16 = 0x8006;
    pub const BLACK_PEN: u16 = 0x8007;
    pub const NULL_PEN: u16 = 0x8008;
    pub const OEM_FIXED_FONT: u16 = 0x800A;
    pub const ANSI_FIXED_FONT: u16 = 0x800B;
    pub const ANSI_VAR_FONT: u16 = 0x800C;
    pub const SYSTEM_FONT: u16 = 0x800D;
    pub const DEVICE_DEFAULT_FONT: u16 = 0x800E;
    pub const DEFAULT_PALETTE: u16 = 0x800F;
    pub const SYSTEM_FIXED_FONT: u16 = 0x8010;
}

/// Polygon fill modes
#[allow(dead_code)]
pub mod fill_mode {
    pub const ALTERNATE: u16 = 1; // Even-odd fill (SVG evenodd)
    pub const WINDING: u16 = 2; // Non-zero winding (SVG nonzero)
}

/// Background modes
#[allow(dead_code)]
pub mod bk_mode {
    pub const TRANSPARENT: u16 = 1;
    pub const OPAQUE: u16 = 2;
}

/// Binary raster operations (stored in the device context, never rendered)
#[allow(dead_code)]
pub mod rop2 {
    pub const R2_COPYPEN: u16 = 13;
}

/// Mapping modes
#[allow(dead_code)]
pub mod map_mode {
    pub const MM_TEXT: u16 = 1;
    pub const MM_LOMETRIC: u16 = 2;
    pub const MM_HIMETRIC: u16 = 3;
    pub const MM_LOENGLISH: u16 = 4;
    pub const MM_HIENGLISH: u16 = 5;
    pub const MM_TWIPS: u16 = 6;
    pub const MM_ISOTROPIC: u16 = 7;
    pub const MM_ANISOTROPIC: u16 = 8;
}
