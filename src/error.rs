//! Error types for the rasterizer's narrow, constructor-time error surface.
//!
//! Per-triangle degeneracies (coincident vertices, CW winding, off-screen
//! geometry) are not errors — spec-wise they are silently absorbed by the
//! rasterization pipeline itself. The only precondition that cannot be
//! silently absorbed is a zero-sized framebuffer.

use thiserror::Error;

/// Errors that can occur while constructing a [`crate::Rasterizer`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterizerError {
    /// The requested framebuffer has zero width or zero height.
    #[error("rasterizer dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension {
        /// The requested framebuffer width.
        width: u32,
        /// The requested framebuffer height.
        height: u32,
    },
}
