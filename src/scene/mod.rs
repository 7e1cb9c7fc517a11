//! Scene State
//!
//! Everything the letter pass draws in one frame: the letters themselves,
//! the background color, and the overlay opacity the fade stage animates.
//! All of it is plain CPU state owned by the app runner for the lifetime of
//! one intro run.

pub mod camera;
pub mod layout;

pub use camera::OverlayCamera;

use glam::{Vec3, Vec4};

use crate::geometry::MeshData;

/// Viewport dimensions in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One rendered glyph of the word.
///
/// `target` is the letter's slot in the centered row, assigned at creation
/// and immutable afterwards; `position` is what the tweens animate.
#[derive(Debug, Clone)]
pub struct Letter {
    /// Source character of this letter.
    pub character: char,
    /// Current world position, updated every frame while tweens run.
    pub position: Vec3,
    /// Centered-row offset this letter converges to.
    pub target: Vec3,
    /// Centered extruded mesh.
    pub mesh: MeshData,
}

/// Scene state for one intro run.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Letters in word order. Empty until the font arrives.
    pub letters: Vec<Letter>,
    /// Background color behind the letters.
    pub background: Vec4,
    /// Overlay opacity, 1 → 0 during the fade stage.
    pub overlay_opacity: f32,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            letters: Vec::new(),
            background: Vec4::new(1.0, 1.0, 1.0, 1.0),
            overlay_opacity: 1.0,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
