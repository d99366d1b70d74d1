//! Unified error type for WMF to SVG conversion.
//!
//! Header-level failures abort a conversion and surface here. Failures inside
//! individual records are recovered: the record is skipped and the interpreter
//! keeps going, so partially corrupt files still render best-effort.

use thiserror::Error;

/// Main error type for conversion operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller handed over unusable input (e.g. an empty buffer)
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The input does not carry a WMF discriminant
    #[error("Not a WMF file")]
    NotWmf,

    /// The placeable or standard header failed structural validation
    #[error("Invalid WMF header: {0}")]
    InvalidHeader(String),

    /// A record's declared size is impossible or truncated.
    ///
    /// During conversion this ends the record stream instead of failing the
    /// whole file; it only surfaces when parsing records directly.
    #[error("Malformed WMF record: {0}")]
    MalformedRecord(String),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
