//! Intro Sequence Tests
//!
//! Tests for:
//! - Letter creation: one per character, word order, centered-row targets,
//!   scatter bounds
//! - Stage progression off timeline labels (converge → reposition → fade)
//! - Row positions after converge and after reposition
//! - Terminal outcomes: reported exactly once, including font failure and
//!   cancellation

use glam::Vec2;

use wordmark::errors::IntroError;
use wordmark::scene::{Scene, Viewport};
use wordmark::sequence::{IntroOutcome, IntroSequence, StageKind};
use wordmark::{Font, IntroConfig};

const EPSILON: f32 = 1e-3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

const TEST_TYPEFACE: &str = r#"{
    "familyName": "TestFace",
    "resolution": 1000,
    "glyphs": {
        "A": { "ha": 800, "o": "m 0 0 l 700 0 l 700 700 l 0 700" },
        "B": { "ha": 800, "o": "m 100 0 l 800 0 l 800 700 l 100 700" },
        "?": { "ha": 500, "o": "m 0 0 l 300 0 l 300 300 l 0 300" },
        " ": { "ha": 300, "o": "" }
    }
}"#;

fn test_font() -> Font {
    Font::parse(TEST_TYPEFACE.as_bytes()).expect("test typeface should parse")
}

fn test_config(word: &str) -> IntroConfig {
    IntroConfig {
        word: word.into(),
        ..IntroConfig::default()
    }
}

fn viewport() -> Viewport {
    Viewport::new(1920.0, 1080.0)
}

/// Loads the font into a fresh sequence at `now` and returns the pieces.
fn started(word: &str, now: f32) -> (IntroSequence, Scene) {
    let mut sequence = IntroSequence::new(test_config(word));
    let mut scene = Scene::new();
    let outcome = sequence.on_font_loaded(&mut scene, &test_font(), now);
    assert!(outcome.is_none(), "font arrival should not end the run");
    (sequence, scene)
}

// Default timings for a two-letter word started at t₀:
//   centered   = t₀ + 1.0 + 0.02
//   reposition = centered + 0.1
//   fade       = reposition + 1.0
//   done       = fade + 0.6
const T0: f32 = 5.0;
const T_REPOSITION: f32 = T0 + 1.12;
const T_FADE: f32 = T_REPOSITION + 1.0;
const T_DONE: f32 = T_FADE + 0.6;

// ============================================================================
// Letter creation
// ============================================================================

#[test]
fn one_letter_per_character_in_word_order() {
    let (_, scene) = started("AB", T0);
    assert_eq!(scene.letters.len(), 2);
    assert_eq!(scene.letters[0].character, 'A');
    assert_eq!(scene.letters[1].character, 'B');
}

#[test]
fn targets_form_centered_row() {
    // 60-unit letters: "AB" centers to x = ∓30
    let (_, scene) = started("AB", T0);
    assert!(approx(scene.letters[0].target.x, -30.0));
    assert!(approx(scene.letters[1].target.x, 30.0));
    assert!(approx(scene.letters[0].target.y, 0.0));
    assert!(approx(scene.letters[1].target.y, 0.0));
}

#[test]
fn scatter_positions_stay_inside_extents() {
    // Defaults: ±300 × ±150 around the origin
    let (_, scene) = started("AB", T0);
    for letter in &scene.letters {
        assert!(letter.position.x.abs() <= 300.0, "x {}", letter.position.x);
        assert!(letter.position.y.abs() <= 150.0, "y {}", letter.position.y);
        assert!(approx(letter.position.z, 0.0));
    }
}

#[test]
fn unknown_character_keeps_its_slot() {
    let (_, scene) = started("AZ", T0);
    assert_eq!(scene.letters.len(), 2);
    // Source character is preserved even though the '?' shape substitutes
    assert_eq!(scene.letters[1].character, 'Z');
    assert!(!scene.letters[1].mesh.is_empty());
}

#[test]
fn blank_glyph_keeps_its_slot() {
    let (_, scene) = started("A B", T0);
    assert_eq!(scene.letters.len(), 3);
    assert!(scene.letters[1].mesh.is_empty());
    // Row spacing still counts the blank slot
    assert!(approx(scene.letters[0].target.x, -60.0));
    assert!(approx(scene.letters[2].target.x, 60.0));
}

#[test]
fn timeline_checkpoints_are_ordered() {
    let (sequence, _) = started("AB", T0);
    let timeline = sequence.timeline();
    let centered = timeline.time_of("centered").unwrap();
    let reposition = timeline.time_of("reposition").unwrap();
    let fade = timeline.time_of("fade").unwrap();
    let done = timeline.time_of("done").unwrap();

    assert!(approx(centered, T0 + 1.02), "centered at {centered}");
    assert!(centered < reposition && reposition < fade && fade < done);
    assert!(approx(done, timeline.end()));
}

// ============================================================================
// Stage progression
// ============================================================================

#[test]
fn stages_advance_off_timeline_labels() {
    let (mut sequence, mut scene) = started("AB", T0);
    assert_eq!(sequence.stage(), StageKind::Converge);

    assert!(sequence.advance(&mut scene, viewport(), T0 + 0.5).is_none());
    assert_eq!(sequence.stage(), StageKind::Converge);

    sequence.advance(&mut scene, viewport(), T_REPOSITION);
    assert_eq!(sequence.stage(), StageKind::Reposition);

    sequence.advance(&mut scene, viewport(), T_FADE);
    assert_eq!(sequence.stage(), StageKind::Fade);

    let outcome = sequence.advance(&mut scene, viewport(), T_DONE);
    assert_eq!(outcome, Some(IntroOutcome::Finished));
    assert_eq!(sequence.stage(), StageKind::Done);
}

#[test]
fn converge_ends_in_contiguous_centered_row() {
    let (mut sequence, mut scene) = started("AB", T0);
    sequence.advance(&mut scene, viewport(), T0 + 1.02);

    for (letter, expected_x) in scene.letters.iter().zip([-30.0, 30.0]) {
        assert!(
            approx(letter.position.x, expected_x),
            "x {} vs {expected_x}",
            letter.position.x
        );
        assert!(approx(letter.position.y, 0.0), "y {}", letter.position.y);
    }
}

#[test]
fn reposition_docks_row_at_wordmark_anchor() {
    // 1920×1080 viewport, offset (100, 70) → anchor (-860, 470)
    let (mut sequence, mut scene) = started("AB", T0);
    sequence.advance(&mut scene, viewport(), T_REPOSITION);
    sequence.advance(&mut scene, viewport(), T_REPOSITION + 1.02);

    assert!(approx(scene.letters[0].position.x, -890.0));
    assert!(approx(scene.letters[1].position.x, -830.0));
    for letter in &scene.letters {
        assert!(approx(letter.position.y, 470.0), "y {}", letter.position.y);
    }

    // Relative spacing of the centered row is preserved
    let spacing = scene.letters[1].position.x - scene.letters[0].position.x;
    assert!(approx(spacing, 60.0));
}

#[test]
fn reposition_viewport_is_sampled_at_trigger_time() {
    let (mut sequence, mut scene) = started("AB", T0);
    // Trigger reposition against a smaller viewport...
    sequence.advance(&mut scene, Viewport::new(800.0, 600.0), T_REPOSITION);
    // ...then finish against the large one; the anchor was already fixed
    sequence.advance(&mut scene, viewport(), T_REPOSITION + 1.02);

    // anchor = (-400 + 100, 300 - 70) = (-300, 230)
    assert!(approx(scene.letters[0].position.x, -330.0));
    assert!(approx(scene.letters[0].position.y, 230.0));
}

#[test]
fn fade_animates_overlay_opacity_to_zero() {
    let (mut sequence, mut scene) = started("AB", T0);
    sequence.advance(&mut scene, viewport(), T_REPOSITION);
    assert!(approx(scene.overlay_opacity, 1.0));

    // Quad-out midpoint: 1 → 0 at t = 0.5 leaves 0.25
    sequence.advance(&mut scene, viewport(), T_FADE + 0.3);
    assert!(
        approx(scene.overlay_opacity, 0.25),
        "opacity {}",
        scene.overlay_opacity
    );

    sequence.advance(&mut scene, viewport(), T_DONE);
    assert!(approx(scene.overlay_opacity, 0.0));
}

#[test]
fn one_late_tick_runs_the_whole_sequence() {
    // A single advance long past `done` must still pass through every
    // transition and land exactly on the wordmark
    let (mut sequence, mut scene) = started("AB", T0);
    let outcome = sequence.advance(&mut scene, viewport(), T_DONE + 10.0);

    assert_eq!(outcome, Some(IntroOutcome::Finished));
    assert!(approx(scene.letters[0].position.x, -890.0));
    assert!(approx(scene.letters[0].position.y, 470.0));
    assert!(approx(scene.overlay_opacity, 0.0));
}

// ============================================================================
// Terminal outcomes
// ============================================================================

#[test]
fn completion_is_reported_exactly_once() {
    let (mut sequence, mut scene) = started("AB", T0);

    let mut outcomes = Vec::new();
    let mut t = T0;
    while t < T_DONE + 1.0 {
        if let Some(outcome) = sequence.advance(&mut scene, viewport(), t) {
            outcomes.push(outcome);
        }
        t += 0.05;
    }

    assert_eq!(outcomes, vec![IntroOutcome::Finished]);
    // Opacity had reached zero by the reporting tick
    assert!(approx(scene.overlay_opacity, 0.0));
}

#[test]
fn font_failure_reports_and_creates_no_letters() {
    let mut sequence = IntroSequence::new(test_config("AB"));
    let mut scene = Scene::new();

    let error = IntroError::HttpResponseError { status: 404 };
    let outcome = sequence.on_font_failed(&error);
    assert_eq!(outcome, Some(IntroOutcome::FontLoadFailed));
    assert_eq!(sequence.stage(), StageKind::Failed);
    assert!(scene.letters.is_empty());

    // Terminal: nothing further is reported
    assert!(sequence.advance(&mut scene, viewport(), 100.0).is_none());
    assert!(sequence.on_font_failed(&error).is_none());
}

#[test]
fn cancellation_reports_once_at_next_tick() {
    let (mut sequence, mut scene) = started("AB", T0);
    sequence.cancel_token().cancel();

    let outcome = sequence.advance(&mut scene, viewport(), T0 + 0.5);
    assert_eq!(outcome, Some(IntroOutcome::Cancelled));
    assert_eq!(sequence.stage(), StageKind::Failed);
    assert!(sequence.advance(&mut scene, viewport(), T0 + 0.6).is_none());
}

#[test]
fn cancellation_before_font_arrival_skips_letter_creation() {
    let mut sequence = IntroSequence::new(test_config("AB"));
    let mut scene = Scene::new();
    sequence.cancel_token().cancel();

    let outcome = sequence.on_font_loaded(&mut scene, &test_font(), T0);
    assert_eq!(outcome, Some(IntroOutcome::Cancelled));
    assert!(scene.letters.is_empty());
}

#[test]
fn empty_word_still_completes() {
    let (mut sequence, mut scene) = started("", T0);
    assert!(scene.letters.is_empty());

    // No stagger tail: done = t₀ + 1.0 + 0.1 + 1.0 + 0.6
    let outcome = sequence.advance(&mut scene, viewport(), T0 + 2.71);
    assert_eq!(outcome, Some(IntroOutcome::Finished));
}

// ============================================================================
// Layout helpers
// ============================================================================

#[test]
fn wordmark_anchor_measures_from_top_left() {
    let anchor = wordmark::scene::layout::wordmark_anchor(viewport(), Vec2::new(100.0, 70.0));
    assert!(approx(anchor.x, -860.0));
    assert!(approx(anchor.y, 470.0));
}

#[test]
fn centered_row_spacing_is_letter_size() {
    let xs: Vec<f32> = (0..4)
        .map(|i| wordmark::scene::layout::centered_row_x(i, 4, 60.0))
        .collect();
    assert!(approx(xs[0], -90.0));
    assert!(approx(xs[3], 90.0));
    for pair in xs.windows(2) {
        assert!(approx(pair[1] - pair[0], 60.0));
    }
}
