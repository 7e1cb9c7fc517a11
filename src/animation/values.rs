use glam::Vec3;

/// Value types a tween can animate.
pub trait Interpolatable: Clone {
    #[must_use]
    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self {
        a.lerp(*b, t)
    }
}
