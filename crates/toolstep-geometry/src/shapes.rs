//! # Parametric Shape Generators
//!
//! Standard 2D shapes in the XY plane plus a Z helix, each returned as an
//! ordered list of fully-defined points.

use crate::arc::{
    arc_xy, require_count, require_defined, require_finite, sweep_sign, variable_arc_xy,
};
use std::f64::consts::TAU;
use toolstep_core::{GeometryResult, Point};
use tracing::debug;

/// Segment count used by [`circle_xy_default`]
pub const DEFAULT_SEGMENTS: usize = 100;

/// Generate an XY rectangle starting (and ending) at `start_point`
///
/// Returns five points: the start, three corners in the requested winding,
/// and the start again. Counter-clockwise visits the +X corner first,
/// clockwise visits the +Y corner first.
pub fn rectangle_xy(
    start_point: &Point,
    x_size: f64,
    y_size: f64,
    clockwise: bool,
) -> GeometryResult<Vec<Point>> {
    let (x, y, z) = require_defined("start_point", start_point)?;
    require_finite("x_size", x_size)?;
    require_finite("y_size", y_size)?;

    let cw = clockwise as u8 as f64;
    let ccw = 1.0 - cw;

    let points = vec![
        Point::xyz(x, y, z),
        Point::xyz(x + x_size * ccw, y + y_size * cw, z),
        Point::xyz(x + x_size, y + y_size, z),
        Point::xyz(x + x_size * cw, y + y_size * ccw, z),
        Point::xyz(x, y, z),
    ];

    debug!("rectangle: {}x{} -> {} points", x_size, y_size, points.len());
    Ok(points)
}

/// Generate a full XY circle about `centre`
///
/// Returns `segments + 1` points; the last coincides with the first.
pub fn circle_xy(
    centre: &Point,
    radius: f64,
    start_angle: f64,
    segments: usize,
    clockwise: bool,
) -> GeometryResult<Vec<Point>> {
    let points = arc_xy(
        centre,
        radius,
        start_angle,
        TAU * sweep_sign(clockwise),
        segments,
    )?;
    debug!("circle: r={} -> {} points", radius, points.len());
    Ok(points)
}

/// [`circle_xy`] with [`DEFAULT_SEGMENTS`]
pub fn circle_xy_default(
    centre: &Point,
    radius: f64,
    start_angle: f64,
    clockwise: bool,
) -> GeometryResult<Vec<Point>> {
    circle_xy(centre, radius, start_angle, DEFAULT_SEGMENTS, clockwise)
}

/// Generate a regular XY polygon inscribed in `enclosing_radius`
///
/// Returns `sides + 1` points since the outline closes on its first vertex.
pub fn polygon_xy(
    centre: &Point,
    enclosing_radius: f64,
    start_angle: f64,
    sides: usize,
    clockwise: bool,
) -> GeometryResult<Vec<Point>> {
    require_count("sides", sides)?;
    let points = arc_xy(
        centre,
        enclosing_radius,
        start_angle,
        TAU * sweep_sign(clockwise),
        sides,
    )?;
    debug!("polygon: {} sides -> {} points", sides, points.len());
    Ok(points)
}

/// Generate a flat XY spiral
///
/// Sweeps `n_turns` revolutions (partial turns allowed) while the radius
/// moves linearly from `start_radius` to `end_radius`. Z stays at `centre.z`.
#[allow(clippy::too_many_arguments)]
pub fn spiral_xy(
    centre: &Point,
    start_radius: f64,
    end_radius: f64,
    start_angle: f64,
    n_turns: f64,
    segments: usize,
    clockwise: bool,
) -> GeometryResult<Vec<Point>> {
    require_finite("end_radius", end_radius)?;
    require_finite("n_turns", n_turns)?;
    let points = variable_arc_xy(
        centre,
        start_radius,
        start_angle,
        n_turns * TAU * sweep_sign(clockwise),
        segments,
        end_radius - start_radius,
        0.0,
    )?;
    debug!("spiral: {} turns -> {} points", n_turns, points.len());
    Ok(points)
}

/// Generate a helix along Z
///
/// Same sweep and radius interpolation as [`spiral_xy`], with Z rising
/// linearly from `centre.z` to `centre.z + pitch_z * n_turns`.
#[allow(clippy::too_many_arguments)]
pub fn helix_z(
    centre: &Point,
    start_radius: f64,
    end_radius: f64,
    start_angle: f64,
    n_turns: f64,
    pitch_z: f64,
    segments: usize,
    clockwise: bool,
) -> GeometryResult<Vec<Point>> {
    require_finite("end_radius", end_radius)?;
    require_finite("n_turns", n_turns)?;
    require_finite("pitch_z", pitch_z)?;
    let points = variable_arc_xy(
        centre,
        start_radius,
        start_angle,
        n_turns * TAU * sweep_sign(clockwise),
        segments,
        end_radius - start_radius,
        pitch_z * n_turns,
    )?;
    debug!(
        "helix: {} turns, pitch {} -> {} points",
        n_turns,
        pitch_z,
        points.len()
    );
    Ok(points)
}
