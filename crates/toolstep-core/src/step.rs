//! Step data model
//!
//! A [`Design`] is an ordered list of [`Step`]s. Each step is a point, an
//! opaque annotation (extruder on/off, printer settings, comments and so on),
//! or a nested sequence that must be flattened before further processing.

use crate::point::Point;
use serde_json::{Map, Value};

/// Type names taken by the built-in step kinds; annotations may not use them
pub const RESERVED_TYPE_NAMES: [&str; 2] = ["Point", "Sequence"];

/// True when `type_name` belongs to a built-in step kind
pub fn is_reserved_type_name(type_name: &str) -> bool {
    RESERVED_TYPE_NAMES.contains(&type_name)
}

/// Non-geometric control or annotation entity
///
/// The core library never interprets annotations; it carries the type name
/// and attribute mapping so they survive normalization and serialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotation {
    /// Type name of the annotation (e.g. `"Extruder"`)
    pub kind: String,
    /// Attribute mapping
    pub data: Map<String, Value>,
}

impl Annotation {
    /// Create an annotation with no attributes
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            data: Map::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// True when the kind collides with a built-in step type name
    pub fn has_reserved_kind(&self) -> bool {
        is_reserved_type_name(&self.kind)
    }

    /// Look up an attribute
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

/// One element of a design
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A (possibly partial) position
    Point(Point),
    /// A control or annotation entity
    Annotation(Annotation),
    /// A nested list of steps
    Sequence(Vec<Step>),
}

/// Ordered sequence of steps describing a toolpath
pub type Design = Vec<Step>;

impl Step {
    /// Type name used by diagnostics and serialization
    pub fn type_name(&self) -> &str {
        match self {
            Step::Point(_) => "Point",
            Step::Annotation(annotation) => &annotation.kind,
            Step::Sequence(_) => "Sequence",
        }
    }

    /// The point held by this step, if it is one
    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Step::Point(point) => Some(point),
            _ => None,
        }
    }

    pub fn is_point(&self) -> bool {
        matches!(self, Step::Point(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Step::Sequence(_))
    }
}

impl From<Point> for Step {
    fn from(point: Point) -> Self {
        Step::Point(point)
    }
}

impl From<Annotation> for Step {
    fn from(annotation: Annotation) -> Self {
        Step::Annotation(annotation)
    }
}

impl From<Vec<Step>> for Step {
    fn from(steps: Vec<Step>) -> Self {
        Step::Sequence(steps)
    }
}

impl From<Vec<Point>> for Step {
    fn from(points: Vec<Point>) -> Self {
        Step::Sequence(points.into_iter().map(Step::Point).collect())
    }
}
