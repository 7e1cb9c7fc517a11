//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`IntroError`] covers all failure modes including:
//! - GPU initialization failures
//! - Font fetching and typeface parsing errors
//! - Glyph outline and tessellation errors
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, IntroError>`.

use thiserror::Error;

/// The main error type for the intro animation.
///
/// This enum covers all possible error conditions that can occur while
/// setting up the window, fetching the typeface, or building the letter
/// meshes. Each variant provides specific context about what went wrong.
#[derive(Error, Debug)]
pub enum IntroError {
    // ========================================================================
    // GPU & Windowing Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// Window system error.
    #[error("Window system error: {0}")]
    WindowError(#[from] raw_window_handle::HandleError),

    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),

    /// Window creation error (winit).
    #[error("Window creation error: {0}")]
    WindowCreateFailed(#[from] winit::error::OsError),

    // ========================================================================
    // Font Loading Errors
    // ========================================================================
    /// The typeface could not be fetched from its source.
    #[error("Font fetch failed for {url}: {reason}")]
    FontFetchFailed {
        /// The URL or path the typeface was requested from
        url: String,
        /// Transport-level failure description
        reason: String,
    },

    /// HTTP response error with status code.
    #[error("HTTP response error: status {status}")]
    HttpResponseError {
        /// HTTP status code
        status: u16,
    },

    /// The typeface JSON was fetched but is not a valid font description.
    #[error("Typeface parse error: {0}")]
    TypefaceParseError(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ========================================================================
    // Geometry Errors
    // ========================================================================
    /// A glyph outline could not be tessellated into a mesh.
    #[error("Tessellation error: {0}")]
    TessellationFailed(String),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Alias for `Result<T, IntroError>`.
pub type Result<T> = std::result::Result<T, IntroError>;
