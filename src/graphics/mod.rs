//! Windowing and pixel-presentation collaborators used by the demo binary.
//!
//! Out of scope for the rasterizer core (§1): these exist only so the demo
//! can open a window and blit the coverage buffer to it.

pub mod screen;
pub mod window;
