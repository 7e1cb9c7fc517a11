//! Animation Primitive Tests
//!
//! Tests for:
//! - Easing curve endpoints, midpoints, and clamping
//! - Tween sampling semantics (before / during / after the window)
//! - Timeline label bookkeeping

use glam::Vec3;

use wordmark::animation::easing::Easing;
use wordmark::animation::timeline::Timeline;
use wordmark::animation::tween::Tween;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Easing: endpoints and clamping
// ============================================================================

#[test]
fn easing_endpoints_are_exact() {
    for easing in [
        Easing::Linear,
        Easing::QuadOut,
        Easing::CubicInOut,
        Easing::QuartOut,
    ] {
        assert!(
            approx(easing.eval(0.0), 0.0),
            "{easing:?}: eval(0) should be 0, got {}",
            easing.eval(0.0)
        );
        assert!(
            approx(easing.eval(1.0), 1.0),
            "{easing:?}: eval(1) should be 1, got {}",
            easing.eval(1.0)
        );
    }
}

#[test]
fn easing_clamps_outside_unit_interval() {
    for easing in [
        Easing::Linear,
        Easing::QuadOut,
        Easing::CubicInOut,
        Easing::QuartOut,
    ] {
        assert!(approx(easing.eval(-1.0), 0.0), "{easing:?} below range");
        assert!(approx(easing.eval(2.0), 1.0), "{easing:?} above range");
    }
}

#[test]
fn easing_known_midpoints() {
    assert!(approx(Easing::Linear.eval(0.5), 0.5));
    // 1 - (1 - 0.5)^2
    assert!(approx(Easing::QuadOut.eval(0.5), 0.75));
    // Symmetric in/out crosses the diagonal at the midpoint
    assert!(approx(Easing::CubicInOut.eval(0.5), 0.5));
    // 1 - (1 - 0.5)^4
    assert!(approx(Easing::QuartOut.eval(0.5), 0.9375));
}

#[test]
fn easing_out_curves_lead_linear() {
    // "Out" eases move fast early and settle late
    for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
        assert!(
            Easing::QuadOut.eval(t) > t,
            "QuadOut({t}) should exceed linear"
        );
        assert!(
            Easing::QuartOut.eval(t) > Easing::QuadOut.eval(t),
            "QuartOut({t}) should exceed QuadOut"
        );
    }
}

#[test]
fn easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::QuadOut,
        Easing::CubicInOut,
        Easing::QuartOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=100 {
            let value = easing.eval(i as f32 / 100.0);
            assert!(
                value >= prev - EPSILON,
                "{easing:?} not monotonic at step {i}"
            );
            prev = value;
        }
    }
}

// ============================================================================
// Tween: sampling semantics
// ============================================================================

#[test]
fn tween_holds_from_before_start() {
    let tween = Tween::new(1.0_f32, 5.0, 2.0, 1.0, Easing::Linear);
    assert!(approx(tween.sample(0.0), 1.0));
    assert!(approx(tween.sample(1.999), 1.0));
}

#[test]
fn tween_interpolates_inside_window() {
    let tween = Tween::new(0.0_f32, 10.0, 2.0, 2.0, Easing::Linear);
    assert!(approx(tween.sample(3.0), 5.0), "got {}", tween.sample(3.0));
}

#[test]
fn tween_clamps_to_target_after_end() {
    let tween = Tween::new(0.0_f32, 10.0, 0.0, 1.0, Easing::QuartOut);
    assert!(approx(tween.sample(1.0), 10.0));
    assert!(approx(tween.sample(100.0), 10.0));
}

#[test]
fn tween_zero_duration_steps_at_start() {
    let tween = Tween::new(0.0_f32, 10.0, 1.0, 0.0, Easing::Linear);
    assert!(approx(tween.sample(0.5), 0.0));
    assert!(approx(tween.sample(1.0), 10.0));
}

#[test]
fn tween_applies_easing() {
    let tween = Tween::new(0.0_f32, 1.0, 0.0, 1.0, Easing::QuartOut);
    assert!(
        approx(tween.sample(0.5), 0.9375),
        "got {}",
        tween.sample(0.5)
    );
}

#[test]
fn tween_vec3_midpoint() {
    let tween = Tween::new(
        Vec3::ZERO,
        Vec3::new(10.0, 20.0, 30.0),
        0.0,
        1.0,
        Easing::Linear,
    );
    let value = tween.sample(0.5);
    assert!(approx(value.x, 5.0));
    assert!(approx(value.y, 10.0));
    assert!(approx(value.z, 15.0));
}

#[test]
fn tween_finished_and_end_time() {
    let tween = Tween::new(0.0_f32, 1.0, 2.0, 3.0, Easing::Linear);
    assert!(approx(tween.end_time(), 5.0));
    assert!(!tween.finished(4.999));
    assert!(tween.finished(5.0));
}

// ============================================================================
// Timeline: labeled checkpoints
// ============================================================================

#[test]
fn timeline_records_and_looks_up_labels() {
    let mut timeline = Timeline::new();
    timeline.add_label("centered", 1.02);
    timeline.add_label("reposition", 1.12);

    assert!(approx(timeline.time_of("centered").unwrap(), 1.02));
    assert!(approx(timeline.time_of("reposition").unwrap(), 1.12));
    assert!(timeline.time_of("missing").is_none());
}

#[test]
fn timeline_end_is_last_checkpoint() {
    let mut timeline = Timeline::new();
    assert!(timeline.is_empty());
    assert!(approx(timeline.end(), 0.0));

    timeline.add_label("a", 2.0);
    timeline.add_label("b", 5.0);
    timeline.add_label("c", 3.0);
    assert!(approx(timeline.end(), 5.0));
}

#[test]
fn timeline_preserves_insertion_order() {
    let mut timeline = Timeline::new();
    timeline.add_label("centered", 1.0);
    timeline.add_label("fade", 2.0);

    let labels: Vec<_> = timeline
        .labels()
        .map(|(name, _)| name.to_string())
        .collect();
    assert_eq!(labels, vec!["centered", "fade"]);
}
