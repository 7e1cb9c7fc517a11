//! Overlay Camera
//!
//! An orthographic camera whose frustum spans the viewport 1:1 in pixels:
//! `left = -width / 2`, `right = width / 2`, and so on. The camera sits at
//! `z = 1000` looking down `-z`, so letter extrusion depth stays well inside
//! the `[near, far]` range. Bounds are recomputed on every resize,
//! independent of the animation stage.

use glam::{Mat4, Vec3};

use super::Viewport;

#[derive(Debug, Clone, Copy)]
pub struct OverlayCamera {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl OverlayCamera {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let mut camera = Self {
            left: 0.0,
            right: 0.0,
            top: 0.0,
            bottom: 0.0,
            near: 0.1,
            far: 2000.0,
            position: Vec3::new(0.0, 0.0, 1000.0),
        };
        camera.set_viewport(viewport);
        camera
    }

    /// Recomputes the orthographic bounds to the viewport half-extents.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.left = -viewport.width / 2.0;
        self.right = viewport.width / 2.0;
        self.top = viewport.height / 2.0;
        self.bottom = -viewport.height / 2.0;
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.right - self.left, self.top - self.bottom)
    }

    /// Projection matrix (P). wgpu clip space: depth in `[0, 1]`.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }

    /// View matrix (V): the inverse of the camera's world transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position).inverse()
    }

    /// View-projection matrix (VP).
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
