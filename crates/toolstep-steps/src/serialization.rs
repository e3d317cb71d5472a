//! Serialization and deserialization for designs.
//!
//! A design is stored as a JSON array of tagged records:
//!
//! ```json
//! [
//!   {"type": "Extruder", "data": {"on": true}},
//!   {"type": "Point", "data": {"x": 0.0, "y": 0.0, "z": 0.2}},
//!   [{"type": "Point", "data": {"x": 1.0, "y": null, "z": null}}]
//! ]
//! ```
//!
//! Nested sequences are written as nested arrays. Reading a design back
//! requires a [`StepRegistry`] mapping each type name to a decoder; unknown
//! type names are rejected.
//!
//! Only designs that read back unchanged are written: a coordinate holding
//! NaN or an infinity, or an annotation whose kind is `Point` or `Sequence`,
//! fails the export.

use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::path::Path;
use toolstep_core::{
    is_reserved_type_name, Annotation, Design, DesignError, DesignResult, Point, Result, Step,
};
use tracing::{debug, info};

/// Decodes the `data` attribute mapping of a record tagged `type_name`
pub type StepDecoder = fn(type_name: &str, data: &Value) -> DesignResult<Step>;

/// Registry of step type names and their decoders
#[derive(Debug, Clone)]
pub struct StepRegistry {
    decoders: HashMap<String, StepDecoder>,
}

impl StepRegistry {
    /// Create a registry that knows the `Point` type
    pub fn new() -> Self {
        let mut registry = Self {
            decoders: HashMap::new(),
        };
        registry.register("Point", decode_point);
        registry
    }

    /// Create a registry that knows `Point` plus the given annotation types
    pub fn with_annotations<I, S>(kinds: I) -> DesignResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for kind in kinds {
            registry.register_annotation(kind)?;
        }
        Ok(registry)
    }

    /// Register a decoder for `type_name`, replacing any previous one
    pub fn register(&mut self, type_name: impl Into<String>, decoder: StepDecoder) {
        self.decoders.insert(type_name.into(), decoder);
    }

    /// Register `type_name` as an opaque annotation type
    ///
    /// Built-in type names cannot be taken by annotations.
    pub fn register_annotation(&mut self, type_name: impl Into<String>) -> DesignResult<()> {
        let type_name = type_name.into();
        if is_reserved_type_name(&type_name) {
            return Err(reserved_kind(&type_name));
        }
        self.register(type_name, decode_annotation);
        Ok(())
    }

    pub fn is_registered(&self, type_name: &str) -> bool {
        self.decoders.contains_key(type_name)
    }

    /// Decode one record's attribute mapping
    pub fn decode(&self, type_name: &str, data: &Value) -> DesignResult<Step> {
        let decoder = self
            .decoders
            .get(type_name)
            .ok_or_else(|| DesignError::UnknownType(type_name.to_string()))?;
        decoder(type_name, data)
    }
}

impl Default for StepRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn reserved_kind(type_name: &str) -> DesignError {
    DesignError::InvalidRecord {
        type_name: type_name.to_string(),
        reason: "type name is reserved for built-in steps".to_string(),
    }
}

fn decode_point(type_name: &str, data: &Value) -> DesignResult<Step> {
    if data.is_null() {
        return Ok(Step::Point(Point::default()));
    }
    let point: Point =
        serde_json::from_value(data.clone()).map_err(|e| DesignError::InvalidRecord {
            type_name: type_name.to_string(),
            reason: e.to_string(),
        })?;
    Ok(Step::Point(point))
}

fn decode_annotation(type_name: &str, data: &Value) -> DesignResult<Step> {
    match data {
        Value::Object(map) => Ok(Step::Annotation(Annotation {
            kind: type_name.to_string(),
            data: map.clone(),
        })),
        Value::Null => Ok(Step::Annotation(Annotation::new(type_name))),
        other => Err(DesignError::InvalidRecord {
            type_name: type_name.to_string(),
            reason: format!("data must be an object, got {}", other),
        }),
    }
}

fn to_record(step: &Step) -> DesignResult<Value> {
    let record = match step {
        Step::Point(point) => {
            if let Some(axis) = point.first_non_finite() {
                return Err(DesignError::InvalidRecord {
                    type_name: "Point".to_string(),
                    reason: format!("{} is not finite ({})", axis, point),
                });
            }
            json!({
                "type": "Point",
                "data": {"x": point.x, "y": point.y, "z": point.z},
            })
        }
        Step::Annotation(annotation) => {
            if annotation.has_reserved_kind() {
                return Err(reserved_kind(&annotation.kind));
            }
            json!({
                "type": annotation.kind,
                "data": Value::Object(annotation.data.clone()),
            })
        }
        Step::Sequence(steps) => Value::Array(to_records(steps)?),
    };
    Ok(record)
}

/// Convert a design into tagged records
///
/// Fails on the first step that would not read back unchanged.
pub fn to_records(design: &[Step]) -> DesignResult<Vec<Value>> {
    design.iter().map(to_record).collect()
}

fn from_record(registry: &StepRegistry, record: &Value) -> DesignResult<Step> {
    match record {
        Value::Array(nested) => Ok(Step::Sequence(from_records(registry, nested)?)),
        Value::Object(fields) => {
            let type_name = fields.get("type").and_then(Value::as_str).ok_or_else(|| {
                DesignError::InvalidRecord {
                    type_name: "<untagged>".to_string(),
                    reason: "record has no string \"type\" field".to_string(),
                }
            })?;
            let empty = Value::Object(Map::new());
            let data = fields.get("data").unwrap_or(&empty);
            registry.decode(type_name, data)
        }
        other => Err(DesignError::InvalidRecord {
            type_name: "<untagged>".to_string(),
            reason: format!("expected a record or an array, got {}", other),
        }),
    }
}

/// Rebuild a design from tagged records
pub fn from_records(registry: &StepRegistry, records: &[Value]) -> DesignResult<Design> {
    records
        .iter()
        .map(|record| from_record(registry, record))
        .collect()
}

/// Export a design to a pretty-printed JSON file
pub fn export_design(design: &[Step], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(&to_records(design)?)?;
    std::fs::write(path, json)?;
    info!("Exported {} steps to {}", design.len(), path.display());
    Ok(())
}

/// Import a design previously written by [`export_design`]
pub fn import_design(registry: &StepRegistry, path: impl AsRef<Path>) -> Result<Design> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let records: Vec<Value> = serde_json::from_str(&content)?;
    let design = from_records(registry, &records)?;
    debug!("Imported {} steps from {}", design.len(), path.display());
    Ok(design)
}
