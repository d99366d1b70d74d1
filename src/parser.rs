// WMF file parser
//
// Parses the optional placeable header, the standard metafile header, and the
// record stream.
//
// ## Performance notes
//
// The input is copied once into a `Bytes` buffer; every record's parameter
// block is a zero-copy `Bytes::slice` of that buffer, so parsing a file with
// N records costs one allocation for the buffer and one for the record
// vector, not N.
//
// Headers are decoded with manual `from_le_bytes` access: the fields are
// unaligned in the file, and going byte-by-byte sidesteps alignment issues
// entirely.

use crate::error::{Error, Result};
use bytes::Bytes;

/// Upper bound on records per file. Zero-size records are rejected during
/// parsing, so this only triggers on pathological inputs.
const MAX_RECORDS: usize = 100_000;

#[inline]
fn is_valid_version(version: u16) -> bool {
    version == 0x0100 || version == 0x0300
}

/// Check whether a byte buffer looks like a WMF file.
///
/// Detection uses the header discriminant only: the placeable key, or a
/// memory-metafile type byte plus a known format version. Inputs shorter
/// than a standard header are never WMF.
///
/// # Examples
///
/// ```
/// assert!(!longan::is_wmf(b"GIF89a"));
/// ```
pub fn is_wmf(data: &[u8]) -> bool {
    if data.len() < 18 {
        return false;
    }

    if WmfPlaceableHeader::is_placeable(data) {
        if data.len() < 22 + 18 {
            return false;
        }
        // The standard header starts at byte 22; its version field sits at
        // header-relative offset 4.
        let version = u16::from_le_bytes([data[26], data[27]]);
        data[22] == 1 && is_valid_version(version)
    } else {
        let version = u16::from_le_bytes([data[4], data[5]]);
        data[0] == 1 && is_valid_version(version)
    }
}

/// WMF placeable header (Aldus extension)
///
/// An optional 22-byte header that may precede the standard WMF header,
/// carrying the target bounds in metafile units and the unit density.
#[derive(Debug, Clone)]
pub struct WmfPlaceableHeader {
    /// Left coordinate of the target bounds
    pub left: i16,
    /// Top coordinate
    pub top: i16,
    /// Right coordinate
    pub right: i16,
    /// Bottom coordinate
    pub bottom: i16,
    /// Metafile units per inch
    pub inch: u16,
    /// Checksum over the preceding fields
    pub checksum: u16,
}

impl WmfPlaceableHeader {
    const PLACEABLE_KEY: u32 = 0x9AC6CDD7;

    /// Total size of the placeable header in bytes
    pub const SIZE: usize = 22;

    /// Check if data starts with a placeable header
    pub fn is_placeable(data: &[u8]) -> bool {
        if data.len() < 4 {
            return false;
        }
        let key = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        key == Self::PLACEABLE_KEY
    }

    /// Parse the placeable header from the start of `data`
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(Error::InvalidHeader(
                "placeable header too short".to_string(),
            ));
        }

        let key = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        if key != Self::PLACEABLE_KEY {
            return Err(Error::InvalidHeader(format!(
                "invalid placeable key: 0x{:08X}",
                key
            )));
        }

        let left = i16::from_le_bytes([data[6], data[7]]);
        let top = i16::from_le_bytes([data[8], data[9]]);
        let right = i16::from_le_bytes([data[10], data[11]]);
        let bottom = i16::from_le_bytes([data[12], data[13]]);
        let inch = u16::from_le_bytes([data[14], data[15]]);
        let checksum = u16::from_le_bytes([data[20], data[21]]);

        Ok(Self {
            left,
            top,
            right,
            bottom,
            inch,
            checksum,
        })
    }

    /// Width of the target bounds in metafile units
    pub fn width(&self) -> i16 {
        self.right - self.left
    }

    /// Height of the target bounds in metafile units
    pub fn height(&self) -> i16 {
        self.bottom - self.top
    }
}

/// WMF standard header
#[derive(Debug, Clone)]
pub struct WmfHeader {
    /// Metafile type (1 = memory, 2 = disk; only memory metafiles are accepted)
    pub file_type: u16,
    /// Header size in 16-bit words (9 for every known writer)
    pub header_size: u16,
    /// Format version (0x0100 or 0x0300)
    pub version: u16,
    /// Size of the file in words
    pub file_size: u32,
    /// Size of the object table
    pub num_objects: u16,
    /// Size of the largest record in words
    pub max_record: u32,
    /// Not used (always 0)
    pub num_params: u16,
}

impl WmfHeader {
    /// Parse and validate the standard header from the start of `data`
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < 18 {
            return Err(Error::InvalidHeader("header too short".to_string()));
        }

        let file_type = u16::from_le_bytes([data[0], data[1]]);
        let header_size = u16::from_le_bytes([data[2], data[3]]);
        let version = u16::from_le_bytes([data[4], data[5]]);
        let file_size = u32::from_le_bytes([data[6], data[7], data[8], data[9]]);
        let num_objects = u16::from_le_bytes([data[10], data[11]]);
        let max_record = u32::from_le_bytes([data[12], data[13], data[14], data[15]]);
        let num_params = u16::from_le_bytes([data[16], data[17]]);

        if file_type != 1 {
            return Err(Error::InvalidHeader(format!(
                "unsupported metafile type: {}",
                file_type
            )));
        }
        if !is_valid_version(version) {
            return Err(Error::InvalidHeader(format!(
                "unsupported version: 0x{:04X}",
                version
            )));
        }
        if (header_size as usize) * 2 < 18 {
            return Err(Error::InvalidHeader(format!(
                "header size too small: {} words",
                header_size
            )));
        }

        Ok(Self {
            file_type,
            header_size,
            version,
            file_size,
            num_objects,
            max_record,
            num_params,
        })
    }
}

/// A single WMF record
#[derive(Debug, Clone)]
pub struct WmfRecord {
    /// Record size in 16-bit words (including size and function fields)
    pub size: u32,
    /// Record function code
    pub function: u16,
    /// Record parameters (zero-copy slice of the file buffer)
    pub params: Bytes,
}

impl WmfRecord {
    /// Parse one record at `offset`.
    ///
    /// Returns the record and the number of bytes consumed. Fails when the
    /// declared size is below the 3-word minimum or runs past the end of the
    /// buffer; the caller treats that as end of stream.
    pub fn parse(data: &Bytes, offset: usize) -> Result<(Self, usize)> {
        if offset + 6 > data.len() {
            return Err(Error::MalformedRecord(
                "insufficient data for record header".to_string(),
            ));
        }

        let size = u32::from_le_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        let function = u16::from_le_bytes([data[offset + 4], data[offset + 5]]);

        // Size is in words, convert to bytes
        let size_bytes = (size as usize) * 2;

        if size < 3 || offset + size_bytes > data.len() {
            return Err(Error::MalformedRecord(format!(
                "invalid record size {} at offset {}",
                size, offset
            )));
        }

        let param_size = size_bytes - 6;
        let params = data.slice((offset + 6)..(offset + 6 + param_size));

        Ok((
            Self {
                size,
                function,
                params,
            },
            size_bytes,
        ))
    }

    /// Check if this is the EOF record
    pub const fn is_eof(&self) -> bool {
        self.function == 0x0000
    }
}

/// WMF file parser
///
/// Splits a WMF byte buffer into its headers and record stream. Conversion
/// to SVG is handled by [`crate::svg::WmfSvgConverter`] on top of this.
#[derive(Debug)]
pub struct WmfParser {
    /// Optional placeable header
    pub placeable: Option<WmfPlaceableHeader>,
    /// Standard WMF header
    pub header: WmfHeader,
    /// All records up to and including EOF
    pub records: Vec<WmfRecord>,
}

impl WmfParser {
    /// Parse a WMF file from a borrowed buffer.
    ///
    /// The input is copied once into a shared buffer; use
    /// [`Self::from_owned`] to avoid the copy when the data is already owned.
    pub fn new(data: &[u8]) -> Result<Self> {
        Self::parse_internal(Bytes::copy_from_slice(data))
    }

    /// Parse a WMF file from an owned buffer without copying.
    ///
    /// # Example
    /// ```ignore
    /// let data = std::fs::read("file.wmf")?;
    /// let parser = WmfParser::from_owned(data)?;
    /// ```
    pub fn from_owned(data: Vec<u8>) -> Result<Self> {
        Self::parse_internal(Bytes::from(data))
    }

    fn parse_internal(data: Bytes) -> Result<Self> {
        let mut offset = 0;

        let placeable = if WmfPlaceableHeader::is_placeable(&data) {
            if data.len() < WmfPlaceableHeader::SIZE + 18 {
                return Err(Error::InvalidHeader(
                    "placeable file too short for WMF header".to_string(),
                ));
            }
            let header = WmfPlaceableHeader::parse(&data)?;
            offset = WmfPlaceableHeader::SIZE;
            Some(header)
        } else {
            None
        };

        if offset + 18 > data.len() {
            return Err(Error::InvalidHeader(
                "data too short for WMF header".to_string(),
            ));
        }

        let header = WmfHeader::parse(&data[offset..])?;

        // Records start after the declared header length, not a fixed 18
        // bytes; some writers pad the header.
        offset += (header.header_size as usize) * 2;

        let mut records = Vec::with_capacity(128);

        while offset < data.len() {
            if records.len() >= MAX_RECORDS {
                log::warn!("record cap reached ({}), stopping", MAX_RECORDS);
                break;
            }
            match WmfRecord::parse(&data, offset) {
                Ok((record, consumed)) => {
                    let is_eof = record.is_eof();
                    records.push(record);
                    offset += consumed;

                    if is_eof {
                        break;
                    }
                },
                // A truncated or malformed trailing record ends the stream;
                // everything parsed so far still renders.
                Err(_) => break,
            }
        }

        Ok(Self {
            placeable,
            header,
            records,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_header(num_objects: u16) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&1u16.to_le_bytes()); // memory metafile
        data.extend_from_slice(&9u16.to_le_bytes()); // header size in words
        data.extend_from_slice(&0x0300u16.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&num_objects.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data
    }

    fn eof_record() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&3u32.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data
    }

    #[test]
    fn test_detect_non_placeable() {
        let mut data = standard_header(2);
        data.extend_from_slice(&eof_record());
        assert!(is_wmf(&data));
    }

    #[test]
    fn test_detect_rejects_short_input() {
        assert!(!is_wmf(b""));
        assert!(!is_wmf(b"\x01\x00\x09\x00\x00\x03"));
    }

    #[test]
    fn test_detect_rejects_bad_version() {
        let mut data = standard_header(0);
        data[4] = 0x42;
        data[5] = 0x42;
        data.extend_from_slice(&eof_record());
        assert!(!is_wmf(&data));
    }

    #[test]
    fn test_parse_rejects_disk_metafile() {
        let mut data = standard_header(0);
        data[0] = 2;
        data.extend_from_slice(&eof_record());
        assert!(matches!(
            WmfParser::new(&data),
            Err(Error::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_parse_records_stop_at_eof() {
        let mut data = standard_header(2);
        data.extend_from_slice(&eof_record());
        // Trailing garbage after EOF must not be parsed
        data.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

        let parser = WmfParser::new(&data).unwrap();
        assert_eq!(parser.records.len(), 1);
        assert!(parser.records[0].is_eof());
        assert_eq!(parser.header.num_objects, 2);
    }

    #[test]
    fn test_parse_stops_on_oversized_record() {
        let mut data = standard_header(0);
        // Declared size (1000 words) runs past the end of the buffer
        data.extend_from_slice(&1000u32.to_le_bytes());
        data.extend_from_slice(&0x0213u16.to_le_bytes());
        data.extend_from_slice(&[0u8; 8]);

        let parser = WmfParser::new(&data).unwrap();
        assert!(parser.records.is_empty());
    }

    #[test]
    fn test_record_cap_bounds_pathological_files() {
        let mut data = standard_header(0);
        // A long run of MOVETO records with no EOF
        for _ in 0..100_010 {
            data.extend_from_slice(&5u32.to_le_bytes());
            data.extend_from_slice(&0x0214u16.to_le_bytes());
            data.extend_from_slice(&[0u8; 4]);
        }

        let parser = WmfParser::new(&data).unwrap();
        assert_eq!(parser.records.len(), 100_000);
    }

    #[test]
    fn test_parse_placeable() {
        let mut data = Vec::new();
        data.extend_from_slice(&0x9AC6CDD7u32.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes()); // handle
        data.extend_from_slice(&(-10i16).to_le_bytes()); // left
        data.extend_from_slice(&(-20i16).to_le_bytes()); // top
        data.extend_from_slice(&990i16.to_le_bytes()); // right
        data.extend_from_slice(&980i16.to_le_bytes()); // bottom
        data.extend_from_slice(&1440u16.to_le_bytes()); // inch
        data.extend_from_slice(&0u32.to_le_bytes()); // reserved
        data.extend_from_slice(&0u16.to_le_bytes()); // checksum
        data.extend_from_slice(&standard_header(1));
        data.extend_from_slice(&eof_record());

        assert!(is_wmf(&data));
        let parser = WmfParser::new(&data).unwrap();
        let placeable = parser.placeable.expect("placeable header");
        assert_eq!(placeable.width(), 1000);
        assert_eq!(placeable.height(), 1000);
        assert_eq!(placeable.inch, 1440);
    }

    #[test]
    fn test_record_params_are_sliced() {
        let mut data = standard_header(0);
        // LINETO with params y=7, x=9
        data.extend_from_slice(&5u32.to_le_bytes());
        data.extend_from_slice(&0x0213u16.to_le_bytes());
        data.extend_from_slice(&7i16.to_le_bytes());
        data.extend_from_slice(&9i16.to_le_bytes());
        data.extend_from_slice(&eof_record());

        let parser = WmfParser::new(&data).unwrap();
        assert_eq!(parser.records.len(), 2);
        assert_eq!(parser.records[0].function, 0x0213);
        assert_eq!(parser.records[0].params.len(), 4);
    }
}
