//! Command line interface
//!
//! The argument types and command bodies live here so the `toolstep` binary
//! stays a thin wrapper: [`execute`] runs a parsed [`Cli`] and returns an
//! [`Outcome`], which the binary prints.

use crate::{
    check, circle_xy, export_design, extract_points, flatten, helix_z, import_design,
    polygon_xy, rectangle_xy, require_flat, spiral_xy, to_records, CheckReport, Config, Design,
    Point, Step, StepRegistry, LONG_VERSION,
};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "toolstep")]
#[command(about = "Parametric toolpath generation and step-list normalization", long_about = None)]
#[command(version = LONG_VERSION)]
pub struct Cli {
    /// Config file (.toml or .json); defaults to the platform config directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report the step types in a design and whether it is one-dimensional
    Check {
        /// Design file written by `toolstep shape` or `export_design`
        design: PathBuf,
        #[command(flatten)]
        types: AnnotationTypes,
    },
    /// Print the points of a design
    Points {
        /// Design file
        design: PathBuf,
        /// Print points as defined, without forward-filling x y z
        #[arg(long)]
        raw: bool,
        /// Flatten nested sequences before extracting points
        #[arg(long)]
        flatten: bool,
        #[command(flatten)]
        types: AnnotationTypes,
    },
    /// Generate a shape and write it as a design
    Shape {
        #[command(subcommand)]
        shape: ShapeCommand,
        /// Output file; the design is printed to stdout when omitted
        #[arg(short, long, global = true)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct AnnotationTypes {
    /// Annotation type names accepted in the design (comma separated)
    #[arg(short, long = "annotation", value_delimiter = ',')]
    pub annotations: Vec<String>,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct Centre {
    /// Centre X
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub cx: f64,
    /// Centre Y
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub cy: f64,
    /// Centre Z
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub cz: f64,
}

impl Centre {
    fn point(&self) -> Point {
        Point::xyz(self.cx, self.cy, self.cz)
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct Sweep {
    /// Start angle in radians
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub start_angle: f64,
    /// Segment count (config default when omitted)
    #[arg(long)]
    pub segments: Option<usize>,
    /// Traverse clockwise (config default when omitted)
    #[arg(long)]
    pub cw: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum ShapeCommand {
    /// Five-point rectangle starting at the centre coordinates
    Rectangle {
        #[command(flatten)]
        start: Centre,
        #[arg(long)]
        x_size: f64,
        #[arg(long)]
        y_size: f64,
        #[arg(long)]
        cw: Option<bool>,
    },
    /// Full circle
    Circle {
        #[command(flatten)]
        centre: Centre,
        #[arg(long)]
        radius: f64,
        #[command(flatten)]
        sweep: Sweep,
    },
    /// Regular polygon
    Polygon {
        #[command(flatten)]
        centre: Centre,
        #[arg(long)]
        radius: f64,
        #[arg(long)]
        sides: usize,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        start_angle: f64,
        #[arg(long)]
        cw: Option<bool>,
    },
    /// Flat spiral
    Spiral {
        #[command(flatten)]
        centre: Centre,
        #[arg(long)]
        start_radius: f64,
        #[arg(long)]
        end_radius: f64,
        #[arg(long)]
        turns: f64,
        #[command(flatten)]
        sweep: Sweep,
    },
    /// Helix rising along Z
    Helix {
        #[command(flatten)]
        centre: Centre,
        #[arg(long)]
        start_radius: f64,
        #[arg(long)]
        end_radius: f64,
        #[arg(long)]
        turns: f64,
        /// Z rise per turn
        #[arg(long, allow_negative_numbers = true)]
        pitch: f64,
        #[command(flatten)]
        sweep: Sweep,
    },
}

/// What a command produced
#[derive(Debug)]
pub enum Outcome {
    /// Result of `check`
    Checked(CheckReport),
    /// Result of `points`
    Points(Vec<Point>),
    /// Result of `shape`; `written_to` is set when `--out` was given
    Shape {
        design: Design,
        written_to: Option<PathBuf>,
    },
}

impl Outcome {
    /// Print the outcome on stdout
    pub fn print(&self) -> Result<()> {
        match self {
            Outcome::Checked(report) => println!("{}", report),
            Outcome::Points(points) => {
                for point in points {
                    println!("{}", point);
                }
            }
            Outcome::Shape {
                design,
                written_to: None,
            } => {
                println!("{}", serde_json::to_string_pretty(&to_records(design)?)?);
            }
            Outcome::Shape {
                written_to: Some(_),
                ..
            } => {}
        }
        Ok(())
    }
}

/// Run a parsed command line
pub fn execute(cli: &Cli) -> Result<Outcome> {
    let config = load_config(cli.config.as_deref())?;

    let outcome = match &cli.command {
        Commands::Check { design, types } => {
            let steps = load_design(design, types)?;
            Outcome::Checked(check(&steps))
        }
        Commands::Points {
            design,
            raw,
            flatten: flatten_first,
            types,
        } => {
            let steps = load_design(design, types)?;
            Outcome::Points(design_points(design, steps, *raw, *flatten_first, &config)?)
        }
        Commands::Shape { shape, out } => {
            let points = generate_shape(shape, &config)?;
            let design: Design = points.into_iter().map(Step::Point).collect();
            if let Some(path) = out {
                export_design(&design, path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            Outcome::Shape {
                design,
                written_to: out.clone(),
            }
        }
    };

    Ok(outcome)
}

/// Load the config named on the command line, or the platform default
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        },
    };
    debug!("Using config: {:?}", config);
    Ok(config)
}

fn load_design(path: &Path, types: &AnnotationTypes) -> Result<Design> {
    let registry = StepRegistry::with_annotations(types.annotations.iter().cloned())?;
    import_design(&registry, path).with_context(|| format!("Failed to read {}", path.display()))
}

fn design_points(
    path: &Path,
    mut steps: Design,
    raw: bool,
    flatten_first: bool,
    config: &Config,
) -> Result<Vec<Point>> {
    if flatten_first {
        steps = flatten(&steps);
    } else if config.normalizer.require_flat {
        require_flat(&steps)
            .with_context(|| format!("{} is not one-dimensional", path.display()))?;
    }
    let track_xyz = config.normalizer.track_xyz && !raw;
    let points = extract_points(&steps, track_xyz);
    if track_xyz && points.is_empty() {
        bail!("No point in {} has all of x y z defined", path.display());
    }
    info!("{} points", points.len());
    Ok(points)
}

/// Generate the requested shape, filling omitted options from the config
pub fn generate_shape(shape: &ShapeCommand, config: &Config) -> Result<Vec<Point>> {
    let defaults = &config.generator;
    let segments = |sweep: &Sweep| sweep.segments.unwrap_or(defaults.default_segments);
    let winding = |cw: Option<bool>| cw.unwrap_or(defaults.clockwise);

    let points = match shape {
        ShapeCommand::Rectangle {
            start,
            x_size,
            y_size,
            cw,
        } => rectangle_xy(&start.point(), *x_size, *y_size, winding(*cw))?,
        ShapeCommand::Circle {
            centre,
            radius,
            sweep,
        } => circle_xy(
            &centre.point(),
            *radius,
            sweep.start_angle,
            segments(sweep),
            winding(sweep.cw),
        )?,
        ShapeCommand::Polygon {
            centre,
            radius,
            sides,
            start_angle,
            cw,
        } => polygon_xy(&centre.point(), *radius, *start_angle, *sides, winding(*cw))?,
        ShapeCommand::Spiral {
            centre,
            start_radius,
            end_radius,
            turns,
            sweep,
        } => spiral_xy(
            &centre.point(),
            *start_radius,
            *end_radius,
            sweep.start_angle,
            *turns,
            segments(sweep),
            winding(sweep.cw),
        )?,
        ShapeCommand::Helix {
            centre,
            start_radius,
            end_radius,
            turns,
            pitch,
            sweep,
        } => helix_z(
            &centre.point(),
            *start_radius,
            *end_radius,
            sweep.start_angle,
            *turns,
            *pitch,
            segments(sweep),
            winding(sweep.cw),
        )?,
    };

    Ok(points)
}
