//! One-shot Tweens
//!
//! A [`Tween`] interpolates a value between two endpoints over an absolute
//! time window on the sequence clock. Sampling clamps: before `start` it
//! returns `from`, after `start + duration` it returns `to`, so a tween can
//! be sampled on every frame without lifecycle bookkeeping.

use super::easing::Easing;
use super::values::Interpolatable;

#[derive(Debug, Clone)]
pub struct Tween<T: Interpolatable> {
    pub from: T,
    pub to: T,
    /// Start time on the sequence clock, in seconds.
    pub start: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl<T: Interpolatable> Tween<T> {
    #[must_use]
    pub fn new(from: T, to: T, start: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Samples the tween at `now` (sequence-clock seconds).
    #[must_use]
    pub fn sample(&self, now: f32) -> T {
        if self.duration <= 0.0 {
            return if now >= self.start {
                self.to.clone()
            } else {
                self.from.clone()
            };
        }
        let t = ((now - self.start) / self.duration).clamp(0.0, 1.0);
        T::interpolate_linear(&self.from, &self.to, self.easing.eval(t))
    }

    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.start + self.duration
    }

    #[must_use]
    pub fn finished(&self, now: f32) -> bool {
        now >= self.end_time()
    }
}
