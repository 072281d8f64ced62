#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::missing_errors_doc,
    clippy::missing_docs_in_private_items,
    clippy::missing_panics_doc,
)]

pub mod app;
pub mod error;
pub mod geometry;
pub mod graphics;

mod framebuffer;
mod lut;
mod rasterizer;
mod tiling;
mod walker;

pub use error::RasterizerError;
pub use rasterizer::Rasterizer;
