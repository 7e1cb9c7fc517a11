//! Intro Configuration
//!
//! Every tunable of the animation is an explicit field here: the word, the
//! font source, stage timings, and window/GPU preferences are all injected
//! through [`IntroConfig`] rather than looked up from ambient state.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use wordmark::{IntroApp, IntroConfig};
//!
//! let config = IntroConfig {
//!     word: "BrandName".into(),
//!     ..IntroConfig::default()
//! };
//!
//! IntroApp::new(config)
//!     .with_on_complete(|outcome| println!("done: {outcome:?}"))
//!     .run()?;
//! ```

use glam::{Vec2, Vec4};

/// Default typeface source, matching the stock three.js helvetiker face.
pub const DEFAULT_FONT_SOURCE: &str =
    "https://threejs.org/examples/fonts/helvetiker_regular.typeface.json";

/// Global configuration for one intro run.
///
/// Consumed once by [`IntroApp::new`](crate::app::IntroApp::new) and shared
/// with the animation sequence. All distances are in viewport pixels (the
/// orthographic camera maps world units 1:1 to pixels).
///
/// # Fields
///
/// | Field                  | Description                                 | Default          |
/// |------------------------|---------------------------------------------|------------------|
/// | `word`                 | Brand text to animate                       | `"BrandName"`    |
/// | `font_source`          | Typeface URL or local path                  | helvetiker URL   |
/// | `letter_size`          | Glyph size / row spacing                    | `60.0`           |
/// | `letter_depth`         | Extrusion depth                             | `2.0`            |
/// | `scatter_extent`       | Random start spread around the origin       | `(600, 300)`     |
/// | `wordmark_offset`      | Final offset from the top-left corner       | `(100, 70)`      |
/// | `converge_duration`    | Scatter → centered row tween length         | `1.0` s          |
/// | `reposition_duration`  | Centered row → corner tween length          | `1.0` s          |
/// | `fade_duration`        | Overlay fade-out length                     | `0.6` s          |
#[derive(Debug, Clone)]
pub struct IntroConfig {
    // === Content ===
    /// The brand word rendered as extruded letters. Must be non-empty for a
    /// visible intro; an empty word still runs the timeline to completion.
    pub word: String,

    /// Typeface source: an `http(s)://` URL fetched at runtime, or a local
    /// file path. The format is the three.js `typeface.json` description.
    pub font_source: String,

    // === Letter Geometry ===
    /// Glyph size in pixels. Also the fixed horizontal spacing of the row.
    pub letter_size: f32,

    /// Extrusion depth of each glyph along the z axis.
    pub letter_depth: f32,

    /// Flattening tolerance for glyph curves, in pixels.
    pub curve_tolerance: f32,

    // === Layout ===
    /// Half-open spread of randomized start positions: x in
    /// `±scatter_extent.x / 2`, y in `±scatter_extent.y / 2`.
    pub scatter_extent: Vec2,

    /// Offset of the wordmark anchor from the top-left viewport corner.
    pub wordmark_offset: Vec2,

    // === Stage Timings (seconds) ===
    /// Duration of each letter's converge tween.
    pub converge_duration: f32,
    /// Per-letter start delay during convergence.
    pub converge_stagger: f32,
    /// Gap between the `centered` checkpoint and the reposition stage.
    pub reposition_delay: f32,
    /// Duration of each letter's reposition tween.
    pub reposition_duration: f32,
    /// Per-letter start delay during reposition.
    pub reposition_stagger: f32,
    /// Gap between reposition start and the fade stage.
    pub fade_delay: f32,
    /// Duration of the overlay opacity fade.
    pub fade_duration: f32,

    // === Appearance ===
    /// Letter tint (RGBA).
    pub letter_color: Vec4,

    /// Background clear color, standing in for the page behind the overlay.
    pub clear_color: wgpu::Color,

    // === Window / GPU ===
    /// Cover the whole screen with a borderless window.
    pub fullscreen: bool,

    /// Enable vertical synchronization.
    pub vsync: bool,

    /// GPU adapter selection preference.
    pub power_preference: wgpu::PowerPreference,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            word: "BrandName".into(),
            font_source: DEFAULT_FONT_SOURCE.into(),
            letter_size: 60.0,
            letter_depth: 2.0,
            curve_tolerance: 0.25,
            scatter_extent: Vec2::new(600.0, 300.0),
            wordmark_offset: Vec2::new(100.0, 70.0),
            converge_duration: 1.0,
            converge_stagger: 0.02,
            reposition_delay: 0.1,
            reposition_duration: 1.0,
            reposition_stagger: 0.01,
            fade_delay: 1.0,
            fade_duration: 0.6,
            letter_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            clear_color: wgpu::Color::WHITE,
            fullscreen: true,
            vsync: true,
            power_preference: wgpu::PowerPreference::HighPerformance,
        }
    }
}
