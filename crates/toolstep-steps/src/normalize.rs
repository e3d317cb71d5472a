//! Step-list normalization
//!
//! Every operation builds a new output list; input designs are never
//! mutated while being scanned.

use toolstep_core::{Design, DesignError, DesignResult, Point, Step};
use tracing::{debug, warn};

/// Flatten nested sequences into a one-dimensional design
///
/// Nested sequences at any depth are replaced by their elements, in order.
/// The result contains only points and annotations.
pub fn flatten(design: &[Step]) -> Design {
    let mut flat = Vec::with_capacity(design.len());
    flatten_into(design, &mut flat);
    debug!("flatten: {} steps -> {} steps", design.len(), flat.len());
    flat
}

fn flatten_into(steps: &[Step], out: &mut Design) {
    for step in steps {
        match step {
            Step::Sequence(nested) => flatten_into(nested, out),
            Step::Point(_) | Step::Annotation(_) => out.push(step.clone()),
        }
    }
}

/// Forward-fill undefined axes from the preceding points
///
/// Point `i` inherits each axis it leaves undefined from the resolved
/// point `i - 1`. Axes never defined so far stay undefined.
pub fn forward_fill(points: &[Point]) -> Vec<Point> {
    let mut current = Point::default();
    points
        .iter()
        .map(|incoming| {
            current = current.overlay(incoming);
            current
        })
        .collect()
}

/// Reduce a design to its points
///
/// Annotations and nested sequences are discarded (flatten first to keep
/// points inside nested sequences). With `track_xyz`, undefined axes are
/// forward-filled and the result starts at the first fully-defined point.
/// If no point ever becomes fully defined the result is empty; see
/// [`try_extract_points`] for a variant that reports this as an error.
pub fn extract_points(design: &[Step], track_xyz: bool) -> Vec<Point> {
    let mut nested = 0usize;
    let points: Vec<Point> = design
        .iter()
        .filter_map(|step| match step {
            Step::Point(point) => Some(*point),
            Step::Annotation(_) => None,
            Step::Sequence(_) => {
                nested += 1;
                None
            }
        })
        .collect();

    if nested > 0 {
        warn!(
            "extract_points: dropped {} nested sequence(s), flatten the design first",
            nested
        );
    }

    if !track_xyz {
        debug!("extract_points: {} points (untracked)", points.len());
        return points;
    }

    let mut filled = forward_fill(&points);
    match filled.iter().position(Point::is_fully_defined) {
        Some(start) => {
            if start > 0 {
                debug!(
                    "extract_points: trimmed {} leading point(s) without all of x y z",
                    start
                );
            }
            filled.drain(..start);
            debug!("extract_points: {} tracked points", filled.len());
            filled
        }
        None => {
            warn!("extract_points: no point has all of x y z defined");
            Vec::new()
        }
    }
}

/// Strict form of [`extract_points`]
///
/// Fails with [`DesignError::EmptyResult`] when tracking finds no
/// fully-defined point.
pub fn try_extract_points(design: &[Step], track_xyz: bool) -> DesignResult<Vec<Point>> {
    let points = extract_points(design, track_xyz);
    if track_xyz && points.is_empty() {
        return Err(DesignError::EmptyResult);
    }
    Ok(points)
}

/// First point in the design
///
/// With `fully_defined`, returns the first point with all of x, y and z
/// defined. Nested sequences are not searched.
pub fn first_point(design: &[Step], fully_defined: bool) -> DesignResult<Point> {
    design
        .iter()
        .filter_map(Step::as_point)
        .find(|point| !fully_defined || point.is_fully_defined())
        .copied()
        .ok_or(DesignError::NotFound { fully_defined })
}

/// Fail with [`DesignError::MalformedDesign`] if any step is a nested sequence
pub fn require_flat(design: &[Step]) -> DesignResult<()> {
    match design.iter().position(Step::is_sequence) {
        Some(index) => Err(DesignError::MalformedDesign { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolstep_core::Annotation;

    #[test]
    fn test_forward_fill_sequential() {
        let filled = forward_fill(&[
            Point::x_only(1.0),
            Point::y_only(2.0),
            Point::z_only(3.0),
        ]);
        assert_eq!(
            filled,
            vec![
                Point::new(Some(1.0), None, None),
                Point::new(Some(1.0), Some(2.0), None),
                Point::xyz(1.0, 2.0, 3.0),
            ]
        );
    }

    #[test]
    fn test_forward_fill_empty() {
        assert!(forward_fill(&[]).is_empty());
    }

    #[test]
    fn test_require_flat() {
        let flat: Design = vec![Point::x_only(1.0).into(), Annotation::new("A").into()];
        assert!(require_flat(&flat).is_ok());

        let nested: Design = vec![Point::x_only(1.0).into(), vec![Point::x_only(2.0)].into()];
        assert_eq!(
            require_flat(&nested),
            Err(DesignError::MalformedDesign { index: 1 })
        );
    }
}
