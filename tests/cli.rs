use clap::Parser;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use toolstep::cli::{execute, Cli, Outcome};
use toolstep::{circle_xy, export_design, Annotation, Design, Point, Step};

fn write_config(dir: &TempDir, toml: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, toml).unwrap();
    path
}

fn write_design(dir: &TempDir, design: &Design) -> PathBuf {
    let path = dir.path().join("design.json");
    export_design(design, &path).unwrap();
    path
}

fn run(config: &Path, args: &[&str]) -> anyhow::Result<Outcome> {
    let mut argv = vec!["toolstep", "--config", config.to_str().unwrap()];
    argv.extend_from_slice(args);
    execute(&Cli::try_parse_from(argv).unwrap())
}

fn points_of(outcome: Outcome) -> Vec<Point> {
    match outcome {
        Outcome::Points(points) => points,
        other => panic!("expected points, got {:?}", other),
    }
}

#[test]
fn test_points_raw_disables_tracking() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");
    let design = write_design(
        &dir,
        &vec![Point::z_only(5.0).into(), Point::xyz(1.0, 2.0, 3.0).into()],
    );
    let design = design.to_str().unwrap();

    let tracked = points_of(run(&config, &["points", design]).unwrap());
    assert_eq!(tracked, vec![Point::xyz(1.0, 2.0, 3.0)]);

    let raw = points_of(run(&config, &["points", design, "--raw"]).unwrap());
    assert_eq!(raw, vec![Point::z_only(5.0), Point::xyz(1.0, 2.0, 3.0)]);
}

#[test]
fn test_points_fails_without_fully_defined_point() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");
    let design = write_design(&dir, &vec![Point::x_only(1.0).into()]);
    let design = design.to_str().unwrap();

    let err = run(&config, &["points", design]).unwrap_err();
    assert!(err.to_string().contains("has all of x y z defined"));

    let raw = points_of(run(&config, &["points", design, "--raw"]).unwrap());
    assert_eq!(raw, vec![Point::x_only(1.0)]);
}

#[test]
fn test_require_flat_rejects_nested_design() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[normalizer]\nrequire_flat = true\n");
    let nested: Design = vec![
        Annotation::new("Extruder").with("on", true).into(),
        vec![Point::xyz(0.0, 0.0, 0.2), Point::x_only(4.0)].into(),
    ];
    let design = write_design(&dir, &nested);
    let design = design.to_str().unwrap();

    let err = run(&config, &["points", design, "-a", "Extruder"]).unwrap_err();
    assert!(err.to_string().contains("is not one-dimensional"));

    let flattened =
        points_of(run(&config, &["points", design, "-a", "Extruder", "--flatten"]).unwrap());
    assert_eq!(
        flattened,
        vec![Point::xyz(0.0, 0.0, 0.2), Point::xyz(4.0, 0.0, 0.2)]
    );
}

#[test]
fn test_shape_uses_config_defaults() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[generator]\ndefault_segments = 8\nclockwise = true\n");

    let design = match run(&config, &["shape", "circle", "--radius", "2"]).unwrap() {
        Outcome::Shape {
            design,
            written_to: None,
        } => design,
        other => panic!("expected a shape, got {:?}", other),
    };
    let expected = circle_xy(&Point::xyz(0.0, 0.0, 0.0), 2.0, 0.0, 8, true).unwrap();
    let expected: Design = expected.into_iter().map(Step::Point).collect();
    assert_eq!(design, expected);

    // explicit flags win over the config
    let outcome = run(
        &config,
        &["shape", "circle", "--radius", "2", "--segments", "4", "--cw", "false"],
    )
    .unwrap();
    let Outcome::Shape { design, .. } = outcome else {
        panic!("expected a shape");
    };
    let expected = circle_xy(&Point::xyz(0.0, 0.0, 0.0), 2.0, 0.0, 4, false).unwrap();
    let expected: Design = expected.into_iter().map(Step::Point).collect();
    assert_eq!(design, expected);
}

#[test]
fn test_shape_output_feeds_check() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");
    let out = dir.path().join("square.json");

    let outcome = run(
        &config,
        &[
            "shape", "polygon", "--radius", "5", "--sides", "4", "--cz", "0.2", "-o",
            out.to_str().unwrap(),
        ],
    )
    .unwrap();
    assert!(matches!(outcome, Outcome::Shape { written_to: Some(ref path), .. } if *path == out));

    match run(&config, &["check", out.to_str().unwrap()]).unwrap() {
        Outcome::Checked(report) => {
            assert!(report.is_flat());
            assert!(report.has_fully_defined_point);
            assert!(report.warnings().is_empty());
        }
        other => panic!("expected a report, got {:?}", other),
    }
}

#[test]
fn test_reserved_annotation_type_is_refused() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");
    let design = write_design(&dir, &vec![Point::xyz(0.0, 0.0, 0.0).into()]);

    let err = run(&config, &["check", design.to_str().unwrap(), "-a", "Point"]).unwrap_err();
    assert!(err.to_string().contains("reserved"));
}
