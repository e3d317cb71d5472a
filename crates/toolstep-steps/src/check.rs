//! Design diagnostics
//!
//! [`check`] inspects a design without modifying it and reports which step
//! types it contains and whether it is one-dimensional. It never fails;
//! callers decide whether a warning should stop them.

use std::collections::BTreeSet;
use std::fmt;
use toolstep_core::Step;
use tracing::debug;

/// Result of [`check`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Distinct type names of the top-level steps
    pub step_types: BTreeSet<String>,
    /// True when at least one top-level step is a nested sequence
    pub has_nested_sequence: bool,
    /// True when some top-level point has all of x, y and z defined
    pub has_fully_defined_point: bool,
    /// True when a top-level annotation uses a built-in type name
    pub has_reserved_annotation: bool,
}

impl CheckReport {
    /// True when the design can be processed without flattening
    pub fn is_flat(&self) -> bool {
        !self.has_nested_sequence
    }

    /// Human-readable warnings, empty when the design looks sound
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.has_nested_sequence {
            warnings.push(
                "warning - the list of steps must be a 1D list, it currently includes a nested sequence\n  \
                 use flatten() to convert it to 1D or check for accidental push() of a Vec instead of extend()"
                    .to_string(),
            );
        }
        if !self.has_fully_defined_point {
            warnings.push("warning - no single point defines all of x y z".to_string());
        }
        if self.has_reserved_annotation {
            warnings.push(
                "warning - an annotation uses a built-in type name (Point or Sequence)".to_string(),
            );
        }
        warnings
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "check results:")?;
        for warning in self.warnings() {
            writeln!(f, "  {}", warning)?;
        }
        let types: Vec<&str> = self.step_types.iter().map(String::as_str).collect();
        write!(f, "  step types: {{{}}}", types.join(", "))
    }
}

/// Inspect a design and report its step types and shape
pub fn check(design: &[Step]) -> CheckReport {
    let mut report = CheckReport::default();

    for step in design {
        report.step_types.insert(step.type_name().to_string());
        match step {
            Step::Sequence(_) => report.has_nested_sequence = true,
            Step::Point(point) if point.is_fully_defined() => {
                report.has_fully_defined_point = true
            }
            Step::Annotation(annotation) if annotation.has_reserved_kind() => {
                report.has_reserved_annotation = true
            }
            Step::Point(_) | Step::Annotation(_) => {}
        }
    }

    debug!(
        "check: {} steps, {} types, flat={}",
        design.len(),
        report.step_types.len(),
        report.is_flat()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolstep_core::{Annotation, Point};

    #[test]
    fn test_display_clean_design() {
        let design: Vec<Step> = vec![
            Annotation::new("Extruder").into(),
            Point::xyz(0.0, 0.0, 0.0).into(),
        ];
        let report = check(&design);
        assert!(report.warnings().is_empty());
        assert_eq!(
            report.to_string(),
            "check results:\n  step types: {Extruder, Point}"
        );
    }

    #[test]
    fn test_display_nested_design() {
        let design: Vec<Step> = vec![vec![Point::xyz(0.0, 0.0, 0.0)].into()];
        let text = check(&design).to_string();
        assert!(text.contains("includes a nested sequence"));
        assert!(text.contains("no single point defines all of x y z"));
        assert!(text.ends_with("step types: {Sequence}"));
    }

    #[test]
    fn test_reserved_annotation_warning() {
        let design: Vec<Step> = vec![
            Point::xyz(0.0, 0.0, 0.0).into(),
            Annotation::new("Point").with("note", "hi").into(),
        ];
        let report = check(&design);
        assert!(report.has_reserved_annotation);
        assert_eq!(report.warnings().len(), 1);
        assert!(report.warnings()[0].contains("built-in type name"));
    }
}
