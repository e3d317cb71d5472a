//! Angular sampling
//!
//! Samples an arc in the XY plane into evenly spaced points, optionally
//! drifting the radius and Z linearly from the first to the last step.

use toolstep_core::{Axis, GeometryError, GeometryResult, Point};

/// Generate `number_of_points` evenly spaced values from `start` to `end`
///
/// Both ends are included. A single point yields `[start]`.
pub fn linspace(start: f64, end: f64, number_of_points: usize) -> Vec<f64> {
    match number_of_points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let span = (n - 1) as f64;
            (0..n)
                .map(|i| start + (i as f64 / span) * (end - start))
                .collect()
        }
    }
}

/// Sign applied to a swept angle: `+1` counter-clockwise, `-1` clockwise
pub fn sweep_sign(clockwise: bool) -> f64 {
    1.0 - 2.0 * (clockwise as u8 as f64)
}

/// Point at `radius` and polar `angle` (radians) about `centre`, at the centre's Z
pub fn polar_to_point(centre: &Point, radius: f64, angle: f64) -> GeometryResult<Point> {
    let (cx, cy, cz) = require_defined("centre", centre)?;
    Ok(Point::xyz(
        cx + radius * angle.cos(),
        cy + radius * angle.sin(),
        cz,
    ))
}

/// Sample an arc of constant radius
///
/// Returns `segments + 1` points from `start_angle` to
/// `start_angle + arc_angle`, all at `centre.z`.
pub fn arc_xy(
    centre: &Point,
    radius: f64,
    start_angle: f64,
    arc_angle: f64,
    segments: usize,
) -> GeometryResult<Vec<Point>> {
    variable_arc_xy(centre, radius, start_angle, arc_angle, segments, 0.0, 0.0)
}

/// Sample an arc whose radius and Z drift linearly across the sweep
///
/// Step `i` of `segments` sits at parameter `t = i / segments`, with angle
/// `start_angle + arc_angle * t`, radius `start_radius + radius_change * t`
/// and Z `centre.z + z_change * t`.
#[allow(clippy::too_many_arguments)]
pub fn variable_arc_xy(
    centre: &Point,
    start_radius: f64,
    start_angle: f64,
    arc_angle: f64,
    segments: usize,
    radius_change: f64,
    z_change: f64,
) -> GeometryResult<Vec<Point>> {
    let (cx, cy, cz) = require_defined("centre", centre)?;
    require_count("segments", segments)?;
    require_finite("start_radius", start_radius)?;
    require_finite("start_angle", start_angle)?;
    require_finite("arc_angle", arc_angle)?;
    require_finite("radius_change", radius_change)?;
    require_finite("z_change", z_change)?;

    let points = linspace(0.0, 1.0, segments + 1)
        .into_iter()
        .map(|t| {
            let angle = start_angle + arc_angle * t;
            let radius = start_radius + radius_change * t;
            Point::xyz(
                cx + radius * angle.cos(),
                cy + radius * angle.sin(),
                cz + z_change * t,
            )
        })
        .collect();

    Ok(points)
}

pub(crate) fn require_count(name: &'static str, value: usize) -> GeometryResult<usize> {
    if value == 0 {
        return Err(GeometryError::InvalidCount { name, value });
    }
    Ok(value)
}

pub(crate) fn require_finite(name: &'static str, value: f64) -> GeometryResult<f64> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite { name, value });
    }
    Ok(value)
}

pub(crate) fn require_defined(
    name: &'static str,
    point: &Point,
) -> GeometryResult<(f64, f64, f64)> {
    match (point.x, point.y, point.z) {
        (Some(x), Some(y), Some(z)) => {
            require_finite(name, x)?;
            require_finite(name, y)?;
            require_finite(name, z)?;
            Ok((x, y, z))
        }
        _ => Err(GeometryError::UndefinedCoordinate {
            name,
            axis: point.first_undefined().unwrap_or(Axis::X),
        }),
    }
}
