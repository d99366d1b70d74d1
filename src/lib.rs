//! Longan - a Windows Metafile (WMF) to SVG converter
//!
//! WMF is a 16-bit vector graphics format for Windows, introduced in
//! Windows 3.0: a sequence of variable-length records describing a stateful
//! GDI drawing session. This library replays that session — coordinate
//! mappings, object creation and selection, save/restore of the device
//! context — and emits an equivalent SVG document or fragment.
//!
//! # Features
//!
//! - **Detection**: cheap header check to recognize WMF data
//! - **Placeable headers**: Aldus bounds and DPI drive output scaling
//! - **GDI state machine**: object table, stock objects, SaveDC/RestoreDC,
//!   window/viewport transforms
//! - **Best-effort rendering**: malformed records are skipped, not fatal
//! - **Zero-copy parsing**: record parameters borrow from a shared buffer
//!
//! # Example
//!
//! ```no_run
//! use longan::convert_wmf_to_svg;
//!
//! let wmf_data = std::fs::read("image.wmf")?;
//! let svg = convert_wmf_to_svg(&wmf_data)?;
//! std::fs::write("image.svg", svg)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Example - embedding a fragment
//!
//! ```no_run
//! use longan::{convert_wmf_to_svg_with, SvgOptions};
//!
//! let wmf_data = std::fs::read("image.wmf")?;
//! let options = SvgOptions {
//!     svg_delimiter: false,
//!     ..SvgOptions::default()
//! };
//! let fragment = convert_wmf_to_svg_with(&wmf_data, &options)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # References
//!
//! - [MS-WMF]: Windows Metafile Format Specification
//! - https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-wmf/

/// Little-endian field readers over borrowed byte slices
pub mod binary;
/// WMF record codes, modes, and stock-object handles
pub mod constants;
/// Unified error type
pub mod error;
/// Header and record-stream parsing
pub mod parser;
/// The WMF interpreter and SVG emitter
pub mod svg;

pub use error::{Error, Result};
pub use parser::{is_wmf, WmfHeader, WmfParser, WmfPlaceableHeader, WmfRecord};
pub use svg::{SvgOptions, WmfSvgConverter};

/// Convert WMF data to an SVG document with default options.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for an empty buffer, [`Error::NotWmf`] when
/// the header discriminant does not match, [`Error::InvalidHeader`] when a
/// header fails structural validation. Malformed records past the header
/// are skipped rather than reported.
pub fn convert_wmf_to_svg(wmf_data: &[u8]) -> Result<String> {
    convert_wmf_to_svg_with(wmf_data, &SvgOptions::default())
}

/// Convert WMF data to SVG with explicit options.
pub fn convert_wmf_to_svg_with(wmf_data: &[u8], options: &SvgOptions) -> Result<String> {
    if wmf_data.is_empty() {
        return Err(Error::InvalidArgument("empty input buffer"));
    }
    if !is_wmf(wmf_data) {
        return Err(Error::NotWmf);
    }

    let parser = WmfParser::new(wmf_data)?;
    WmfSvgConverter::with_options(parser, options.clone()).convert_to_svg()
}

/// Convert WMF data to SVG bytes with default options.
pub fn convert_wmf_to_svg_bytes(wmf_data: &[u8]) -> Result<Vec<u8>> {
    Ok(convert_wmf_to_svg(wmf_data)?.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_invalid_argument() {
        assert!(matches!(
            convert_wmf_to_svg(b""),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_non_wmf_input_is_rejected() {
        assert!(matches!(
            convert_wmf_to_svg(b"\x89PNG\r\n\x1a\n0000000000000000"),
            Err(Error::NotWmf)
        ));
    }
}
