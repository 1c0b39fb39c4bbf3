use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

use arcball::error::Operation;
use arcball::investigation::probe::{AngleProbe, NormDriftProbe, Probe};
use arcball::{Phase, Trackball, TrackballConfig, TrackballError};
use glam::{DMat4, DQuat, DVec3, DVec4};

const EPS: f64 = 1e-12;

#[test]
fn test_fresh_trackball_is_identity() {
    let trackball = Trackball::default();

    assert_eq!(trackball.radius(), 2.0);
    assert_eq!(trackball.origin(), DVec3::ZERO);
    assert_eq!(trackball.orientation(), DQuat::IDENTITY);
    assert_eq!(trackball.rotation(), DQuat::IDENTITY);
    assert_eq!(trackball.intermediate(), DQuat::IDENTITY);
    assert_eq!(trackball.model(), DMat4::IDENTITY);
    assert_eq!(trackball.phase(), Phase::Idle);
}

#[test]
fn test_quarter_turn_about_y() {
    let mut trackball = Trackball::default();

    trackball.play(DVec3::new(0.0, 0.0, 2.0)).unwrap();
    assert!(trackball.is_dragging());
    let rotation = trackball.track(DVec3::new(2.0, 0.0, 0.0)).unwrap();

    let expected = DQuat::from_axis_angle(DVec3::Y, FRAC_PI_2);
    assert!(rotation.abs_diff_eq(expected, EPS));
    assert!(trackball.intermediate().abs_diff_eq(expected, EPS));

    // +Z is carried onto +X.
    let model = trackball.model();
    assert!(model.transform_vector3(DVec3::Z).abs_diff_eq(DVec3::X, EPS));

    // Only the rotation block is written.
    assert_eq!(model.w_axis, DVec4::W);
    assert_eq!(model.x_axis.w, 0.0);
    assert_eq!(model.y_axis.w, 0.0);
    assert_eq!(model.z_axis.w, 0.0);

    // Nothing is committed until the drag ends.
    assert_eq!(trackball.orientation(), DQuat::IDENTITY);
    let orientation = trackball.pause().unwrap();
    assert!(orientation.abs_diff_eq(expected, EPS));
    assert_eq!(trackball.phase(), Phase::Idle);
}

#[test]
fn test_tracking_the_start_point_changes_nothing() {
    let mut trackball = Trackball::default();
    let anchor = DVec3::new(0.0, 0.0, 2.0);

    trackball.play(anchor).unwrap();
    trackball.track(anchor).unwrap();

    assert_eq!(trackball.intermediate(), DQuat::IDENTITY);
    assert_eq!(trackball.rotation(), trackball.orientation());
    assert_eq!(trackball.model(), DMat4::IDENTITY);
}

/// Points on a radius-2 sphere whose coordinates are not exactly representable.
fn scattered_anchors(count: usize) -> impl Iterator<Item = DVec3> {
    (0..count).map(move |i| {
        let k = i as f64 + 0.5;
        let z = 1.0 - 2.0 * k / count as f64;
        let phi = k * 2.399_963_229_728_653;
        let r = (1.0 - z * z).sqrt();
        DVec3::new(r * phi.cos(), r * phi.sin(), z) * 2.0
    })
}

#[test]
fn test_tracking_any_start_point_changes_nothing() {
    let mut failures = Vec::new();

    for anchor in scattered_anchors(1000) {
        let mut trackball = Trackball::default();
        trackball.play(anchor).unwrap();

        match trackball.track(anchor) {
            Ok(rotation) => {
                assert_eq!(rotation, trackball.orientation());
                assert_eq!(trackball.intermediate(), DQuat::IDENTITY);
                assert_eq!(trackball.model(), DMat4::IDENTITY);
            }
            Err(err) => failures.push((anchor, err)),
        }
    }

    println!("coincident track failures: {}", failures.len());
    assert!(failures.is_empty(), "first failure: {:?}", failures.first());
}

#[test]
fn test_returning_to_start_point_undoes_the_drag() {
    for anchor in scattered_anchors(200) {
        let mut trackball = Trackball::default();
        trackball.play(anchor).unwrap();

        // 1. Wander off somewhere (skip the rare anchor right at the pole).
        if trackball.track(DVec3::new(0.0, 2.0, 0.0)).is_err() {
            continue;
        }

        // 2. Coming back shows the committed orientation again.
        let rotation = trackball.track(anchor).unwrap();
        assert_eq!(rotation, trackball.orientation(), "anchor {anchor}");
        assert_eq!(trackball.model(), DMat4::IDENTITY);
    }
}

#[test]
fn test_tracking_the_start_point_keeps_committed_orientation() {
    let mut trackball = Trackball::default();

    // 1. Commit a non-trivial orientation.
    trackball.play(DVec3::new(0.0, 0.0, 2.0)).unwrap();
    trackball.track(DVec3::new(0.0, 2.0, 0.0)).unwrap();
    let committed = trackball.pause().unwrap();

    // 2. A drag that goes nowhere shows exactly that orientation.
    let anchor = DVec3::new(0.0, 0.0, 2.0);
    trackball.play(anchor).unwrap();
    let rotation = trackball.track(anchor).unwrap();
    assert_eq!(rotation, committed);
}

#[test]
fn test_track_measures_from_anchor_not_previous_point() {
    let mut trackball = Trackball::default();
    let target = DVec3::new(2.0, 0.0, 0.0);

    trackball.play(DVec3::new(0.0, 0.0, 2.0)).unwrap();
    trackball.track(DVec3::new(1.0, 0.0, 1.0)).unwrap();
    let first = trackball.track(target).unwrap();
    let again = trackball.track(target).unwrap();

    assert_eq!(first, again);
    assert!(first.abs_diff_eq(DQuat::from_axis_angle(DVec3::Y, FRAC_PI_2), EPS));
}

#[test]
fn test_second_pause_leaves_orientation_unchanged() {
    let mut trackball = Trackball::default();

    trackball.play(DVec3::new(0.0, 0.0, 2.0)).unwrap();
    trackball.track(DVec3::new(0.0, 2.0, 0.0)).unwrap();
    let committed = trackball.pause().unwrap();

    let err = trackball.pause().unwrap_err();
    assert!(matches!(
        err,
        TrackballError::InvalidState {
            operation: Operation::Pause,
            phase: Phase::Idle
        }
    ));
    assert_eq!(trackball.orientation(), committed);
}

#[test]
fn test_track_before_play_is_rejected() {
    let mut trackball = Trackball::default();

    let err = trackball.track(DVec3::new(2.0, 0.0, 0.0)).unwrap_err();
    assert!(matches!(
        err,
        TrackballError::InvalidState {
            operation: Operation::Track,
            phase: Phase::Idle
        }
    ));
    assert_eq!(trackball.rotation(), DQuat::IDENTITY);
    assert_eq!(trackball.model(), DMat4::IDENTITY);
}

#[test]
fn test_track_after_pause_needs_new_anchor() {
    let mut trackball = Trackball::default();

    trackball.play(DVec3::new(0.0, 0.0, 2.0)).unwrap();
    trackball.track(DVec3::new(2.0, 0.0, 0.0)).unwrap();
    trackball.pause().unwrap();
    let before = *trackball.state();

    // The stale anchor is never reused.
    assert!(trackball.track(DVec3::new(0.0, 2.0, 0.0)).is_err());
    assert_eq!(*trackball.state(), before);
}

#[test]
fn test_play_while_dragging_is_rejected() {
    let mut trackball = Trackball::default();
    let anchor = DVec3::new(0.0, 0.0, 2.0);

    trackball.play(anchor).unwrap();
    let err = trackball.play(DVec3::new(2.0, 0.0, 0.0)).unwrap_err();

    assert!(matches!(
        err,
        TrackballError::InvalidState {
            operation: Operation::Play,
            phase: Phase::Dragging
        }
    ));
    assert_eq!(trackball.start(), anchor);
}

#[test]
fn test_zero_length_anchor_skips_update() {
    let mut trackball = Trackball::default();

    trackball.play(DVec3::ZERO).unwrap();
    let before = *trackball.state();

    let err = trackball.track(DVec3::new(0.0, 0.0, 2.0)).unwrap_err();
    assert!(matches!(err, TrackballError::DegenerateArc { .. }));
    assert_eq!(*trackball.state(), before);

    // Still dragging; the gesture can be committed as a no-op.
    assert!(trackball.is_dragging());
    assert_eq!(trackball.pause().unwrap(), DQuat::IDENTITY);
}

#[test]
fn test_antipodal_points_skip_update() {
    let mut trackball = Trackball::default();

    trackball.play(DVec3::new(0.0, 0.0, 2.0)).unwrap();
    trackball.track(DVec3::new(1.0, 0.0, 1.0)).unwrap();
    let before = *trackball.state();

    let err = trackball.track(DVec3::new(0.0, 0.0, -2.0)).unwrap_err();
    assert!(matches!(err, TrackballError::DegenerateArc { .. }));
    assert_eq!(*trackball.state(), before);
}

#[test]
fn test_pause_keeps_orientation_unit_length() {
    let mut trackball = Trackball::default();
    let probe = NormDriftProbe;

    // Lots of small, non-aligned drags.
    for i in 0..2000 {
        let phase = i as f64 * 0.37;
        let start = DVec3::new(phase.cos(), phase.sin(), 1.3).normalize() * 2.0;
        let point = DVec3::new((phase + 0.2).cos(), (phase + 0.2).sin(), 1.1).normalize() * 2.0;

        trackball.play(start).unwrap();
        trackball.track(point).unwrap();
        trackball.pause().unwrap();

        assert!(probe.measure(&trackball) < EPS, "drift after {i} drags");
    }
}

#[test]
fn test_pause_copies_rotation_verbatim_without_renormalize() {
    let mut trackball = Trackball::default().with_renormalize(false);

    trackball.play(DVec3::new(0.3, -1.1, 1.6)).unwrap();
    trackball.track(DVec3::new(1.7, 0.4, 0.9)).unwrap();
    let rotation = trackball.rotation();

    assert_eq!(trackball.pause().unwrap(), rotation);
    assert_eq!(trackball.orientation(), rotation);
}

#[test]
fn test_reset_returns_to_identity() {
    let mut trackball = Trackball::default();

    trackball.play(DVec3::new(0.0, 0.0, 2.0)).unwrap();
    trackball.track(DVec3::new(2.0, 0.0, 0.0)).unwrap();
    trackball.reset();

    assert_eq!(trackball.phase(), Phase::Idle);
    assert_eq!(trackball.orientation(), DQuat::IDENTITY);
    assert_eq!(trackball.rotation(), DQuat::IDENTITY);
    assert_eq!(trackball.model(), DMat4::IDENTITY);
    assert!(trackball.play(DVec3::new(0.0, 0.0, 2.0)).is_ok());
}

#[test]
fn test_angle_probe_reads_current_rotation() {
    let mut trackball = Trackball::default();

    // 60 degrees between the anchor and the pointer.
    trackball.play(DVec3::new(2.0, 0.0, 0.0)).unwrap();
    trackball
        .track(DVec3::new(FRAC_PI_3.cos(), FRAC_PI_3.sin(), 0.0) * 2.0)
        .unwrap();

    let angle = AngleProbe.measure(&trackball);
    assert!((angle - FRAC_PI_3).abs() < 1e-9);
}

#[test]
fn test_from_config_applies_sphere_and_validates() {
    let config = TrackballConfig {
        radius: 5.0,
        origin: [1.0, 2.0, 3.0],
        renormalize: false,
    };
    let trackball = Trackball::from_config(&config).unwrap();
    assert_eq!(trackball.radius(), 5.0);
    assert_eq!(trackball.origin(), DVec3::new(1.0, 2.0, 3.0));

    let bad = TrackballConfig {
        radius: f64::NAN,
        ..TrackballConfig::default()
    };
    assert!(matches!(
        Trackball::from_config(&bad),
        Err(TrackballError::InvalidConfig(_))
    ));
}

#[test]
fn test_model_uniform_matches_model() {
    let mut trackball = Trackball::default();
    trackball.play(DVec3::new(0.0, 0.0, 2.0)).unwrap();
    trackball.track(DVec3::new(2.0, 0.0, 0.0)).unwrap();

    let uniform = trackball.model_uniform();
    assert_eq!(uniform.as_bytes().len(), 64);

    let expected = trackball.model().as_mat4().to_cols_array_2d();
    assert_eq!(uniform.model, expected);
    assert_eq!(uniform.model[3], [0.0, 0.0, 0.0, 1.0]);
}
