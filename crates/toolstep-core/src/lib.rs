//! # Toolstep Core
//!
//! Core types for describing toolpaths as ordered step sequences.
//! Provides the partially-specified [`Point`], the [`Step`] union that
//! flows through a [`Design`], and the error types shared by the
//! generator and normalizer crates.

pub mod error;
pub mod point;
pub mod step;

pub use error::{DesignError, DesignResult, Error, GeometryError, GeometryResult, Result};
pub use point::{Axis, Point};
pub use step::{is_reserved_type_name, Annotation, Design, Step, RESERVED_TYPE_NAMES};
