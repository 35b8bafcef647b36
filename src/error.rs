//! Error types for tinyraster operations.
//!
//! The rasterizers themselves never fail; errors only come from buffer
//! construction, file persistence and model parsing.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the rasterization core.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Encoding through the `image` crate failed.
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// Zero sized canvas, or a size the target format cannot represent.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Malformed record in a model file.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// TGA variant this crate does not read.
    #[error("unsupported TGA: {0}")]
    UnsupportedTga(String),

    /// TGA stream ended before all pixels were read.
    #[error("truncated TGA data")]
    TruncatedTga,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions { width: 0, height: 10 };
        assert_eq!(err.to_string(), "Invalid dimensions: 0x10");

        let err = Error::Parse { line: 3, message: "bad vertex".into() };
        assert_eq!(err.to_string(), "parse error on line 3: bad vertex");

        assert_eq!(Error::TruncatedTga.to_string(), "truncated TGA data");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
