//! # Toolstep Steps
//!
//! Reduces a design (a heterogeneous, possibly nested list of steps) to the
//! flat, fully-resolved point sequence that motion-control code consumes.
//!
//! ## Operations
//!
//! - [`flatten`]: unwind nested sequences, preserving order
//! - [`extract_points`]: keep only points, optionally forward-filling
//!   undefined axes and trimming leading incomplete points
//! - [`first_point`]: first point, optionally the first fully-defined one
//! - [`check`]: advisory structural diagnostics
//! - [`serialization`]: tagged-record JSON export/import with a type registry
//!
//! ```rust,ignore
//! use toolstep_steps::{check, extract_points, flatten};
//!
//! let design = flatten(&steps);
//! println!("{}", check(&design));
//! let points = extract_points(&design, true);
//! ```

pub mod check;
pub mod normalize;
pub mod serialization;

pub use check::{check, CheckReport};
pub use normalize::{
    extract_points, first_point, flatten, forward_fill, require_flat, try_extract_points,
};
pub use serialization::{
    export_design, from_records, import_design, to_records, StepDecoder, StepRegistry,
};
