use super::*;
use crate::curve::library::{CATALOG_LEN, catalog_curve, generate_random_curve};
use crate::foundation::rng::Rng64;

fn tall(factor: f64) -> Curve {
    let base = catalog_curve(0).unwrap();
    base.map_points(|_, p| Point::new(p.x, p.y * factor))
}

fn off_centerline() -> Curve {
    let base = catalog_curve(0).unwrap();
    base.map_points(|i, p| if i == 0 { Point::new(p.x, 0.5) } else { p })
}

#[test]
fn catalog_tabs_fit_without_shrinking() {
    let fitter = CurveFitter::default();
    for index in 0..CATALOG_LEN {
        let curve = catalog_curve(index).unwrap();
        assert_eq!(fitter.find_fit_scale(200.0, 100.0, &curve).unwrap(), 1.0);
        assert_eq!(fitter.find_fit_scale(100.0, 200.0, &curve).unwrap(), 1.0);
    }
}

#[test]
fn tall_tabs_shrink_in_tenth_steps() {
    let fitter = CurveFitter::default();
    let s = fitter.find_fit_scale(200.0, 100.0, &tall(2.0)).unwrap();
    assert!((s - 0.9f64.powi(3)).abs() < 1e-12);
    let s = fitter.find_fit_scale(200.0, 100.0, &tall(3.0)).unwrap();
    assert!((s - 0.9f64.powi(6)).abs() < 1e-12);
}

#[test]
fn fit_scale_does_not_depend_on_edge_size() {
    let fitter = CurveFitter::default();
    let curve = tall(2.0);
    let a = fitter.find_fit_scale(200.0, 100.0, &curve).unwrap();
    let b = fitter.find_fit_scale(50.0, 400.0, &curve).unwrap();
    assert_eq!(a, b);
}

#[test]
fn maps_curve_space_onto_the_edge() {
    let curve = catalog_curve(0).unwrap();
    let fitted = scale_to_fit(200.0, 100.0, &curve, 100.0).unwrap();
    assert_eq!(fitted.len(), 19);
    assert_eq!(fitted.points()[0], Point::new(0.0, 0.0));
    assert_eq!(fitted.points()[18], Point::new(200.0, 0.0));
    // Top of the bump: curve-space (0, 1) -> (width / 2, height / 4).
    assert_eq!(fitted.points()[9], Point::new(100.0, 25.0));

    let half = scale_to_fit(200.0, 100.0, &curve, 0.0).unwrap();
    assert_eq!(half.points()[9], Point::new(100.0, 12.5));
    let eighty = scale_to_fit(200.0, 100.0, &curve, 80.0).unwrap();
    assert!((eighty.points()[9].y - 22.5).abs() < 1e-12);
}

#[test]
fn boundary_anchors_ignore_the_scale() {
    let curve = tall(3.0);
    let full = scale_to_fit(200.0, 100.0, &curve, 100.0).unwrap();
    let half = scale_to_fit(200.0, 100.0, &curve, 0.0).unwrap();
    for i in [0, 1, 17, 18] {
        assert_eq!(full.points()[i], half.points()[i]);
        assert_eq!(full.points()[i].y, 0.0);
    }
    assert!((full.points()[1].x - (1.0 - 0.708333333333333) * 100.0).abs() < 1e-9);
}

#[test]
fn jittered_boundary_anchors_keep_their_position_at_every_size() {
    let fitter = CurveFitter::default();
    let mut checked = 0;
    for seed in 0..32 {
        let curve = generate_random_curve(7, &mut Rng64::new(seed)).unwrap();
        if curve.points()[1].y == 0.0 {
            continue;
        }
        let full = fitter.scale_to_fit(200.0, 100.0, &curve, 100.0).unwrap();
        let half = fitter.scale_to_fit(200.0, 100.0, &curve, 0.0).unwrap();
        for i in [0, 1, 17, 18] {
            assert_eq!(full.points()[i], half.points()[i], "seed {seed}, point {i}");
        }
        assert_ne!(full.points()[1].y, 0.0);
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn larger_size_percent_gives_larger_amplitude() {
    for index in 0..CATALOG_LEN {
        let curve = catalog_curve(index).unwrap();
        let big = scale_to_fit(200.0, 100.0, &curve, 100.0).unwrap();
        let small = scale_to_fit(200.0, 100.0, &curve, 0.0).unwrap();
        assert!(big.max_abs_y() >= small.max_abs_y());
    }
}

#[test]
fn fitted_samples_stay_inside_the_wedge() {
    let fitted = scale_to_fit(200.0, 100.0, &tall(3.0), 100.0).unwrap();
    for p in fitted.samples(10) {
        let run = if p.x < 100.0 { p.x } else { 200.0 - p.x };
        assert!(p.y.abs() <= run * 0.9 * 100.0 / 200.0 + 1e-9);
    }
}

#[test]
fn off_centerline_anchor_never_fits() {
    for (w, h) in [(1.0, 1000.0), (200.0, 100.0)] {
        let err = scale_to_fit(w, h, &off_centerline(), 50.0).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::FitExhausted { width, height } if width == w && height == h
        ));
    }
}

#[test]
fn rejects_bad_dimensions_and_percent() {
    let curve = catalog_curve(0).unwrap();
    for (w, h) in [(0.0, 10.0), (10.0, -1.0), (f64::NAN, 10.0), (10.0, f64::INFINITY)] {
        assert!(matches!(
            scale_to_fit(w, h, &curve, 50.0),
            Err(PuzzleError::InvalidDimensions { .. })
        ));
    }
    for pct in [-1.0, 100.5, f64::NAN] {
        assert!(matches!(
            scale_to_fit(200.0, 100.0, &curve, pct),
            Err(PuzzleError::InvalidSizePercent(_))
        ));
    }
}

#[test]
fn config_validation() {
    assert!(FitConfig::default().validate().is_ok());

    let bad = [
        FitConfig {
            wedge_slope: 0.0,
            ..FitConfig::default()
        },
        FitConfig {
            shrink_factor: 1.0,
            ..FitConfig::default()
        },
        FitConfig {
            min_scale: 0.0,
            ..FitConfig::default()
        },
        FitConfig {
            steps_per_segment: 0,
            ..FitConfig::default()
        },
        FitConfig {
            steps_per_segment: FitConfig::MAX_STEPS_PER_SEGMENT + 1,
            ..FitConfig::default()
        },
        FitConfig {
            steps_per_segment: usize::MAX,
            ..FitConfig::default()
        },
        FitConfig {
            amplitude_fraction: f64::NAN,
            ..FitConfig::default()
        },
    ];
    for config in bad {
        assert!(matches!(
            CurveFitter::new(config),
            Err(PuzzleError::InvalidConfig(_))
        ));
    }
}

#[test]
fn config_fills_missing_fields_from_defaults() {
    let config: FitConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, FitConfig::default());

    let config: FitConfig = serde_json::from_str(r#"{"amplitude_fraction":0.5}"#).unwrap();
    assert_eq!(config.amplitude_fraction, 0.5);
    assert_eq!(config.wedge_slope, 0.9);
}

#[test]
fn amplitude_fraction_changes_the_vertical_mapping() {
    let fitter = CurveFitter::new(FitConfig {
        amplitude_fraction: 0.5,
        ..FitConfig::default()
    })
    .unwrap();
    let curve = catalog_curve(0).unwrap();
    // Twice the amplitude behaves like a tab twice as tall.
    let s = fitter.find_fit_scale(200.0, 100.0, &curve).unwrap();
    assert!((s - 0.9f64.powi(3)).abs() < 1e-12);
    assert_eq!(fitter.config().amplitude_fraction, 0.5);
}

#[test]
fn oversized_step_count_from_json_is_rejected() {
    let config: FitConfig =
        serde_json::from_str(r#"{"steps_per_segment":18446744073709551615}"#).unwrap();
    let err = CurveFitter::new(config).unwrap_err();
    assert!(err.to_string().contains("steps_per_segment must be in 1..=1000"));
    assert!(FitConfig {
        steps_per_segment: FitConfig::MAX_STEPS_PER_SEGMENT,
        ..FitConfig::default()
    }
    .validate()
    .is_ok());
}

#[test]
fn load_reads_and_validates_json_files() {
    let dir = std::path::PathBuf::from("target").join("fit_config_load");
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.json");
    std::fs::write(&good, r#"{"amplitude_fraction":0.5}"#).unwrap();
    let config = FitConfig::load(&good).unwrap();
    assert_eq!(config.amplitude_fraction, 0.5);
    assert_eq!(config.steps_per_segment, 10);

    let missing = dir.join("missing.json");
    let _ = std::fs::remove_file(&missing);
    let err = FitConfig::load(&missing).unwrap_err();
    assert!(matches!(err, PuzzleError::Other(_)));
    assert!(err.to_string().contains("open fit config"));

    let garbled = dir.join("garbled.json");
    std::fs::write(&garbled, "{ not json").unwrap();
    let err = FitConfig::load(&garbled).unwrap_err();
    assert!(matches!(err, PuzzleError::Other(_)));
    assert!(err.to_string().contains("parse fit config"));

    let invalid = dir.join("invalid.json");
    std::fs::write(&invalid, r#"{"steps_per_segment":0}"#).unwrap();
    assert!(matches!(
        FitConfig::load(&invalid),
        Err(PuzzleError::InvalidConfig(_))
    ));
}
