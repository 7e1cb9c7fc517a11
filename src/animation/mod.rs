pub mod easing;
pub mod timeline;
pub mod tween;
pub mod values;

pub use easing::Easing;
pub use timeline::Timeline;
pub use tween::Tween;
pub use values::Interpolatable;
