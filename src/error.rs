//! Errors reported while building pattern tables, extracting features
//! and comparing them.

use thiserror::Error;

/// Failures of the texture pipeline.
///
/// Extraction is deterministic, so none of these are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LbpError {
    /// The number of ring samples (or table bits) is outside `1..=31`.
    #[error("number of points must be in 1..={max}, got {points}")]
    InvalidPoints {
        /// The rejected value.
        points: u32,
        /// The largest supported value.
        max: u32,
    },
    /// A scan option that must be positive was zero.
    #[error("option `{name}` must be at least 1, got {value}")]
    InvalidOption {
        /// Name of the option.
        name: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// A pattern was requested for a center that has no in-bounds samples.
    #[error("center ({x}, {y}) lies outside the {width}x{height} image")]
    CenterOutOfBounds {
        /// Column of the requested center.
        x: u32,
        /// Row of the requested center.
        y: u32,
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },
    /// The histogram had no counts when it was normalized.
    #[error("no samples were accumulated, cannot normalize an empty histogram")]
    NoSamples,
    /// A bin index fell outside the allocated histogram.
    #[error("bin index {index} is out of range for a histogram of length {len}")]
    BinOutOfRange {
        /// The offending bin.
        index: usize,
        /// Histogram length.
        len: usize,
    },
    /// Two feature vectors of different lengths were compared.
    #[error("feature vectors have different lengths ({left} and {right})")]
    LengthMismatch {
        /// Length of the first vector.
        left: usize,
        /// Length of the second vector.
        right: usize,
    },
    /// The pattern table was built for a different number of points than
    /// the extraction options request.
    #[error("pattern table was built for {table_bits} bits but {points} points were requested")]
    TableMismatch {
        /// Bit width of the table.
        table_bits: u32,
        /// Requested number of points.
        points: u32,
    },
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, LbpError>;
