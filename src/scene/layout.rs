//! Row and Wordmark Layout
//!
//! Pure position math shared by the sequence and its tests. Letters are
//! spaced by the fixed letter size, not by glyph advance, so the row reads
//! as a logotype rather than running text.

use glam::Vec2;

use super::Viewport;

/// X offset of the letter at `index` within a centered row of `len` letters.
#[must_use]
pub fn centered_row_x(index: usize, len: usize, letter_size: f32) -> f32 {
    let total_width = len as f32 * letter_size;
    let start_x = -total_width / 2.0 + letter_size / 2.0;
    start_x + index as f32 * letter_size
}

/// Anchor of the wordmark row: `offset` pixels in from the top-left corner.
#[must_use]
pub fn wordmark_anchor(viewport: Viewport, offset: Vec2) -> Vec2 {
    Vec2::new(
        -viewport.width / 2.0 + offset.x,
        viewport.height / 2.0 - offset.y,
    )
}
