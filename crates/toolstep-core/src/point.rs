//! Point algebra
//!
//! A [`Point`] is a position in 3D space where each axis is independently
//! defined or undefined. An undefined axis means "keep the value from
//! context", which is how partial moves (e.g. a Z-only lift) are written.
//!
//! [`Point::overlay`] is the forward-fill contract used by the normalizer:
//! defined axes of the incoming point win, undefined axes inherit from the
//! base point.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cartesian axis of a [`Point`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in x, y, z order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// A possibly partially-specified 3D point
///
/// Serializes with field names `x`, `y`, `z`; undefined axes are written as
/// `null` and missing fields are read back as undefined. Any other field
/// name is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point {
    /// X-axis position (None = undefined)
    #[serde(default)]
    pub x: Option<f64>,
    /// Y-axis position (None = undefined)
    #[serde(default)]
    pub y: Option<f64>,
    /// Z-axis position (None = undefined)
    #[serde(default)]
    pub z: Option<f64>,
}

impl Point {
    /// Create a point from optional coordinates
    pub fn new(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        Self { x, y, z }
    }

    /// Create a fully-defined point
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Create a point with only X defined
    pub fn x_only(x: f64) -> Self {
        Self {
            x: Some(x),
            ..Default::default()
        }
    }

    /// Create a point with only Y defined
    pub fn y_only(y: f64) -> Self {
        Self {
            y: Some(y),
            ..Default::default()
        }
    }

    /// Create a point with only Z defined
    pub fn z_only(z: f64) -> Self {
        Self {
            z: Some(z),
            ..Default::default()
        }
    }

    /// Create a point with X and Y defined, Z left to context
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: None,
        }
    }

    /// Independent copy of this point.
    pub fn copy(&self) -> Self {
        *self
    }

    /// Value of a single axis
    pub fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Overwrite this point's axes with every axis defined on `incoming`
    pub fn update_from(&mut self, incoming: &Point) {
        if incoming.x.is_some() {
            self.x = incoming.x;
        }
        if incoming.y.is_some() {
            self.y = incoming.y;
        }
        if incoming.z.is_some() {
            self.z = incoming.z;
        }
    }

    /// Merge `incoming` over this point and return the result
    ///
    /// Neither input is modified. Folding this left to right along a
    /// sequence gives, for each axis, the most recent defined value.
    pub fn overlay(&self, incoming: &Point) -> Point {
        Point {
            x: incoming.x.or(self.x),
            y: incoming.y.or(self.y),
            z: incoming.z.or(self.z),
        }
    }

    /// True when all of x, y and z are defined
    pub fn is_fully_defined(&self) -> bool {
        self.x.is_some() && self.y.is_some() && self.z.is_some()
    }

    /// True when no axis is defined
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }

    /// Count how many axes are defined
    pub fn defined_count(&self) -> usize {
        [self.x, self.y, self.z]
            .iter()
            .filter(|opt| opt.is_some())
            .count()
    }

    /// First undefined axis, if any
    pub fn first_undefined(&self) -> Option<Axis> {
        Axis::ALL.into_iter().find(|axis| self.get(*axis).is_none())
    }

    /// First axis holding NaN or an infinity, if any
    pub fn first_non_finite(&self) -> Option<Axis> {
        Axis::ALL
            .into_iter()
            .find(|axis| self.get(*axis).is_some_and(|v| !v.is_finite()))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = |v: Option<f64>| match v {
            Some(v) => format!("{:.3}", v),
            None => "-".to_string(),
        };
        write!(
            f,
            "X:{} Y:{} Z:{}",
            axis(self.x),
            axis(self.y),
            axis(self.z)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_prefers_incoming() {
        let base = Point::xyz(1.0, 2.0, 3.0);
        let incoming = Point::new(None, Some(5.0), None);
        assert_eq!(base.overlay(&incoming), Point::xyz(1.0, 5.0, 3.0));
        // inputs untouched
        assert_eq!(base, Point::xyz(1.0, 2.0, 3.0));
        assert_eq!(incoming.y, Some(5.0));
    }

    #[test]
    fn test_update_from_matches_overlay() {
        let base = Point::x_only(1.0);
        let incoming = Point::new(None, Some(2.0), Some(3.0));
        let mut copy = base.copy();
        copy.update_from(&incoming);
        assert_eq!(copy, base.overlay(&incoming));
        assert_eq!(base, Point::x_only(1.0));
    }

    #[test]
    fn test_defined_queries() {
        let p = Point::xy(1.0, 2.0);
        assert!(!p.is_fully_defined());
        assert!(!p.is_empty());
        assert_eq!(p.defined_count(), 2);
        assert_eq!(p.first_undefined(), Some(Axis::Z));
        assert!(Point::default().is_empty());
        assert!(Point::xyz(0.0, 0.0, 0.0).is_fully_defined());
    }

    #[test]
    fn test_display() {
        let p = Point::new(Some(1.0), None, Some(-2.5));
        assert_eq!(p.to_string(), "X:1.000 Y:- Z:-2.500");
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(Point::x_only(1.5)).unwrap();
        assert_eq!(json, serde_json::json!({"x": 1.5, "y": null, "z": null}));

        let p: Point = serde_json::from_str(r#"{"z": 4.0}"#).unwrap();
        assert_eq!(p, Point::z_only(4.0));
    }

    #[test]
    fn test_serde_rejects_unknown_fields() {
        assert!(serde_json::from_str::<Point>(r#"{"X": 1.0}"#).is_err());
    }

    #[test]
    fn test_first_non_finite() {
        assert_eq!(Point::xyz(1.0, 2.0, 3.0).first_non_finite(), None);
        assert_eq!(Point::z_only(f64::NAN).first_non_finite(), Some(Axis::Z));
        let p = Point::new(None, Some(f64::INFINITY), Some(f64::NAN));
        assert_eq!(p.first_non_finite(), Some(Axis::Y));
    }
}
