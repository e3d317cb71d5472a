//! Error handling for Toolstep
//!
//! Provides error types for the two layers of the library:
//! - Geometry errors (invalid arguments to path generators)
//! - Design errors (malformed step lists, missing points, unknown step types)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::point::Axis;
use std::io;
use thiserror::Error;

/// Geometry error type
///
/// Raised synchronously by path generators when their parameters cannot
/// produce a meaningful point sequence. No partial sequence is ever returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A segment or side count was zero
    #[error("Invalid {name}: {value} (must be at least 1)")]
    InvalidCount {
        /// The parameter name.
        name: &'static str,
        /// The rejected count.
        value: usize,
    },

    /// A scalar parameter was NaN or infinite
    #[error("Invalid {name}: {value} (must be finite)")]
    NonFinite {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A reference point is missing one of its coordinates
    #[error("{name} must be fully defined, {axis} is undefined")]
    UndefinedCoordinate {
        /// The parameter name.
        name: &'static str,
        /// The undefined axis.
        axis: Axis,
    },
}

/// Design error type
///
/// Represents structural problems with a design (an ordered list of steps).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// A nested sequence was found where a flat design is required
    #[error("Malformed design: step {index} is a nested sequence, flatten the design first")]
    MalformedDesign {
        /// Position of the first nested sequence.
        index: usize,
    },

    /// No qualifying point exists in the design
    #[error("{}", not_found_message(.fully_defined))]
    NotFound {
        /// Whether the search required all of x, y and z.
        fully_defined: bool,
    },

    /// Point extraction with xyz tracking never reached a fully-defined point
    #[error("No point in the design ever has all of x y z defined")]
    EmptyResult,

    /// A serialized step carried a type name with no registered decoder
    #[error("Unknown step type: {0}")]
    UnknownType(String),

    /// A serialized step record could not be decoded
    #[error("Invalid {type_name} record: {reason}")]
    InvalidRecord {
        /// The record's type name.
        type_name: String,
        /// The reason decoding failed.
        reason: String,
    },
}

fn not_found_message(fully_defined: &bool) -> &'static str {
    if *fully_defined {
        "No point found in steps with all of x y z defined"
    } else {
        "No point found in steps"
    }
}

/// Main error type for Toolstep
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Design error
    #[error(transparent)]
    Design(#[from] DesignError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Toolstep operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for path generators.
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;

/// Result type alias for design operations.
pub type DesignResult<T> = std::result::Result<T, DesignError>;
