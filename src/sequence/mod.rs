//! Animation Sequence
//!
//! The linear state machine that drives one intro run:
//!
//! ```text
//! Loading ──font──▶ Converge ──label──▶ Reposition ──label──▶ Fade ──label──▶ Done
//!    │
//!    └──fetch/parse failure──────────────────────────────────────────▶ Failed
//! ```
//!
//! Each transition is an explicit function triggered off a [`Timeline`]
//! label; no stage can start before its predecessor's label is reached.
//! A single [`CancelToken`] is checked at every suspension point (font
//! arrival, every [`advance`](IntroSequence::advance) tick), and the
//! terminal outcome is reported exactly once, including on failure, so the
//! host is never left waiting on a sequence that silently stalled.
//!
//! The sequence owns no clock: callers feed `now` (seconds on the run
//! clock) into every entry point, which keeps the whole state machine
//! deterministic under test.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use glam::Vec3;
use rand::RngExt;

use crate::animation::{Easing, Timeline, Tween};
use crate::assets::Font;
use crate::config::IntroConfig;
use crate::errors::{IntroError, Result};
use crate::geometry::text::build_letter_mesh;
use crate::scene::{Letter, Scene, Viewport, layout};

/// Checkpoint names on the sequence timeline.
pub const LABEL_CENTERED: &str = "centered";
pub const LABEL_REPOSITION: &str = "reposition";
pub const LABEL_FADE: &str = "fade";
pub const LABEL_DONE: &str = "done";

/// Cooperative cancellation flag shared between the app and the sequence.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Current stage of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// Waiting for the typeface.
    Loading,
    /// Letters fly from their scattered positions into the centered row.
    Converge,
    /// The row glides into the wordmark corner.
    Reposition,
    /// Overlay opacity animates to zero.
    Fade,
    /// Terminal: the run finished and its outcome was reported.
    Done,
    /// Terminal: the run failed or was cancelled.
    Failed,
}

/// How a run ended. Reported exactly once per sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroOutcome {
    /// The full scatter → converge → reposition → fade sequence played out.
    Finished,
    /// The typeface never loaded (or produced no usable letters).
    FontLoadFailed,
    /// The run was cancelled mid-sequence.
    Cancelled,
}

/// The intro state machine. See the module docs for the stage graph.
pub struct IntroSequence {
    config: IntroConfig,
    stage: StageKind,
    timeline: Timeline,
    tweens: Vec<Tween<Vec3>>,
    overlay: Option<Tween<f32>>,
    cancel: CancelToken,
}

impl IntroSequence {
    #[must_use]
    pub fn new(config: IntroConfig) -> Self {
        Self {
            config,
            stage: StageKind::Loading,
            timeline: Timeline::new(),
            tweens: Vec::new(),
            overlay: None,
            cancel: CancelToken::new(),
        }
    }

    #[must_use]
    pub fn stage(&self) -> StageKind {
        self.stage
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.stage, StageKind::Done | StageKind::Failed)
    }

    /// The token the host cancels to abort the run.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Stage checkpoints; empty until the font arrives.
    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Font arrival: builds the letters at scattered positions, schedules
    /// the timeline, and enters `Converge`.
    pub fn on_font_loaded(
        &mut self,
        scene: &mut Scene,
        font: &Font,
        now: f32,
    ) -> Option<IntroOutcome> {
        if self.stage != StageKind::Loading {
            return None;
        }
        if self.cancel.is_cancelled() {
            return self.fail(IntroOutcome::Cancelled);
        }

        match self.build_letters(scene, font, now) {
            Ok(()) => {
                log::info!(
                    "Typeface {:?} loaded, {} letters scattered",
                    font.family_name(),
                    scene.letters.len()
                );
                self.stage = StageKind::Converge;
                None
            }
            Err(e) => {
                log::error!("Letter construction failed: {e}");
                scene.letters.clear();
                self.fail(IntroOutcome::FontLoadFailed)
            }
        }
    }

    /// Font failure: terminal, but still reported. The host must never be
    /// left waiting on a sequence that will not start.
    pub fn on_font_failed(&mut self, error: &IntroError) -> Option<IntroOutcome> {
        if self.is_terminal() {
            return None;
        }
        log::error!("Typeface load failed: {error}");
        self.fail(IntroOutcome::FontLoadFailed)
    }

    /// Advances the sequence to `now`, applying tweens to the scene.
    ///
    /// Returns the run outcome on the tick that reaches a terminal state,
    /// `None` otherwise.
    pub fn advance(
        &mut self,
        scene: &mut Scene,
        viewport: Viewport,
        now: f32,
    ) -> Option<IntroOutcome> {
        if self.is_terminal() {
            return None;
        }
        if self.cancel.is_cancelled() {
            log::info!("Intro cancelled during {:?}", self.stage);
            return self.fail(IntroOutcome::Cancelled);
        }

        // Transitions trigger strictly off timeline labels. Handoff values
        // are sampled at the label time, not at `now`, so a late tick
        // cannot skew the positions the next stage starts from.
        if self.stage == StageKind::Converge
            && let Some(at) = self.timeline.time_of(LABEL_REPOSITION)
            && now >= at
        {
            self.begin_reposition(scene, viewport, at);
        }
        if self.stage == StageKind::Reposition
            && let Some(at) = self.timeline.time_of(LABEL_FADE)
            && now >= at
        {
            self.begin_fade(at);
        }

        for (letter, tween) in scene.letters.iter_mut().zip(&self.tweens) {
            letter.position = tween.sample(now);
        }
        if let Some(overlay) = &self.overlay {
            scene.overlay_opacity = overlay.sample(now);
        }

        if self.stage == StageKind::Fade
            && let Some(done) = self.timeline.time_of(LABEL_DONE)
            && now >= done
        {
            scene.overlay_opacity = 0.0;
            self.stage = StageKind::Done;
            return Some(IntroOutcome::Finished);
        }

        None
    }

    // --- Stage transitions ---

    fn build_letters(&mut self, scene: &mut Scene, font: &Font, now: f32) -> Result<()> {
        let cfg = &self.config;
        let word_len = cfg.word.chars().count();
        let mut rng = rand::rng();

        scene.letters.clear();
        self.tweens.clear();

        for (index, ch) in cfg.word.chars().enumerate() {
            let Some(mesh) =
                build_letter_mesh(font, ch, cfg.letter_size, cfg.letter_depth, cfg.curve_tolerance)?
            else {
                log::warn!("Dropping {ch:?}: no glyph and no fallback in the face");
                continue;
            };
            let position = Vec3::new(
                rng.random_range(-0.5_f32..0.5) * cfg.scatter_extent.x,
                rng.random_range(-0.5_f32..0.5) * cfg.scatter_extent.y,
                0.0,
            );
            let target = Vec3::new(
                layout::centered_row_x(index, word_len, cfg.letter_size),
                0.0,
                0.0,
            );
            scene.letters.push(Letter {
                character: ch,
                position,
                target,
                mesh,
            });
        }

        for (i, letter) in scene.letters.iter().enumerate() {
            self.tweens.push(Tween::new(
                letter.position,
                letter.target,
                now + i as f32 * cfg.converge_stagger,
                cfg.converge_duration,
                Easing::QuartOut,
            ));
        }

        // The `centered` label marks the end of the staggered group.
        let tail = cfg.converge_stagger * scene.letters.len().saturating_sub(1) as f32;
        let centered = now + cfg.converge_duration + tail;
        let reposition = centered + cfg.reposition_delay;
        let fade = reposition + cfg.fade_delay;
        let done = fade + cfg.fade_duration;

        self.timeline = Timeline::new();
        self.timeline.add_label(LABEL_CENTERED, centered);
        self.timeline.add_label(LABEL_REPOSITION, reposition);
        self.timeline.add_label(LABEL_FADE, fade);
        self.timeline.add_label(LABEL_DONE, done);

        Ok(())
    }

    fn begin_reposition(&mut self, scene: &Scene, viewport: Viewport, at: f32) {
        let cfg = &self.config;
        let anchor = layout::wordmark_anchor(viewport, cfg.wordmark_offset);

        let mut tweens = Vec::with_capacity(scene.letters.len());
        for (i, (letter, converge)) in scene.letters.iter().zip(&self.tweens).enumerate() {
            let from = converge.sample(at);
            let to = Vec3::new(anchor.x + letter.target.x, anchor.y, 0.0);
            tweens.push(Tween::new(
                from,
                to,
                at + i as f32 * cfg.reposition_stagger,
                cfg.reposition_duration,
                Easing::CubicInOut,
            ));
        }

        self.tweens = tweens;
        self.stage = StageKind::Reposition;
        log::debug!("Reposition stage started at {at:.2}s");
    }

    fn begin_fade(&mut self, at: f32) {
        self.overlay = Some(Tween::new(
            1.0,
            0.0,
            at,
            self.config.fade_duration,
            Easing::QuadOut,
        ));
        self.stage = StageKind::Fade;
        log::debug!("Fade stage started at {at:.2}s");
    }

    fn fail(&mut self, outcome: IntroOutcome) -> Option<IntroOutcome> {
        self.stage = StageKind::Failed;
        Some(outcome)
    }
}
