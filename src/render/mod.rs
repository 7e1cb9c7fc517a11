//! Rendering
//!
//! A deliberately small forward renderer: one surface, one depth buffer,
//! one alpha-blended pipeline drawing every letter of the scene. The
//! [`WgpuContext`] owns the GPU handles; [`LetterPass`] owns the pipeline
//! and per-letter buffers.

pub mod context;
pub mod letter_pass;

pub use context::WgpuContext;
pub use letter_pass::LetterPass;

/// Depth buffer format used by the letter pass.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
