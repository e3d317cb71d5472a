//! # Toolstep Geometry
//!
//! Parametric path generators. Each generator is a pure function that turns a
//! handful of parameters into an ordered list of fully-defined points.
//!
//! ## Generators
//!
//! - **Rectangle**: five-point closed rectangle in the XY plane
//! - **Circle**: full revolution sampled into `segments` steps
//! - **Polygon**: regular polygon from its enclosing radius
//! - **Spiral**: radius interpolated over any number of turns
//! - **Helix**: spiral with Z rising by `pitch` per turn
//!
//! All sweeping generators share one orientation convention: the swept
//! angle is `full_angle * (1 - 2 * clockwise)`, so clockwise output is the
//! angular mirror image of counter-clockwise output.

pub mod arc;
pub mod shapes;

pub use arc::{arc_xy, linspace, polar_to_point, sweep_sign, variable_arc_xy};
pub use shapes::{
    circle_xy, circle_xy_default, helix_z, polygon_xy, rectangle_xy, spiral_xy, DEFAULT_SEGMENTS,
};
