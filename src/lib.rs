//! # Toolstep
//!
//! Parametric toolpath generation and step-list normalization for
//! additive manufacturing and other motion-controlled processes.
//!
//! ## Architecture
//!
//! Toolstep is organized as a workspace with multiple crates:
//!
//! 1. **toolstep-core** - Point algebra, step data model, errors
//! 2. **toolstep-geometry** - Rectangle, circle, polygon, spiral, and helix generators
//! 3. **toolstep-steps** - Flattening, point extraction, diagnostics, serialization
//! 4. **toolstep-settings** - JSON/TOML configuration
//! 5. **toolstep** - This facade plus the command line binary
//!
//! ## Usage
//!
//! ```rust,ignore
//! use toolstep::{circle_xy, extract_points, flatten, Annotation, Point, Step};
//!
//! let centre = Point::xyz(50.0, 50.0, 0.2);
//! let design: Vec<Step> = vec![
//!     Annotation::new("Extruder").with("on", true).into(),
//!     circle_xy(&centre, 10.0, 0.0, 64, false)?.into(),
//! ];
//! let points = extract_points(&flatten(&design), true);
//! ```

pub mod cli;

pub use toolstep_core::{
    is_reserved_type_name, Annotation, Axis, Design, DesignError, DesignResult, Error,
    GeometryError, GeometryResult, Point, Result, Step, RESERVED_TYPE_NAMES,
};

pub use toolstep_geometry::{
    arc_xy, circle_xy, circle_xy_default, helix_z, linspace, polar_to_point, polygon_xy,
    rectangle_xy, spiral_xy, sweep_sign, variable_arc_xy, DEFAULT_SEGMENTS,
};

pub use toolstep_steps::{
    check, export_design, extract_points, first_point, flatten, forward_fill, from_records,
    import_design, require_flat, to_records, try_extract_points, CheckReport, StepDecoder,
    StepRegistry,
};

pub use toolstep_settings::{
    Config, GeneratorSettings, NormalizerSettings, SettingsError, SettingsResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("TOOLSTEP_BUILD_DATE");

/// Version string shown by `toolstep --version`
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("TOOLSTEP_BUILD_DATE"),
    ")"
);

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout stays clean for command results
/// - RUST_LOG environment variable support
/// - `verbose` raises the default level from INFO to DEBUG
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
