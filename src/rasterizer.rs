//! The rasterizer facade (C6): owns the framebuffer and the LUT, and drives
//! the per-triangle pipeline (C1 -> C2 -> C4/C3 -> C5).

use crate::error::RasterizerError;
use crate::framebuffer::Framebuffer;
use crate::geometry::{edge_setup, ndc_to_screen, Vertex};
use crate::lut::CoverageLut;
use crate::tiling::tile_bounds;
use crate::walker::walk_tiles;

/// An 8x8-tiled coverage rasterizer.
///
/// Owns a `width * height` single-channel coverage framebuffer and a 2 MiB
/// bitmask LUT, built once at construction and never mutated again. Call
/// [`Rasterizer::rasterize`] to rasterize a triangle list into the
/// framebuffer, and [`Rasterizer::framebuffer`] to read the result back.
pub struct Rasterizer {
    width: u32,
    height: u32,
    framebuffer: Framebuffer,
    lut: CoverageLut,
}

impl Rasterizer {
    /// Creates a rasterizer targeting a `width x height` framebuffer.
    ///
    /// Builds the coverage LUT immediately; this is the one expensive step
    /// in the rasterizer's lifecycle (~2M mask evaluations) and happens
    /// exactly once per instance.
    ///
    /// # Arguments
    ///
    /// * `width` - Framebuffer width, in pixels. Must be non-zero.
    /// * `height` - Framebuffer height, in pixels. Must be non-zero.
    ///
    /// # Returns
    ///
    /// The constructed rasterizer, with a zero-filled framebuffer and a
    /// freshly built coverage LUT.
    ///
    /// # Errors
    ///
    /// Returns [`RasterizerError::ZeroDimension`] if `width` or `height` is
    /// zero; a zero-sized framebuffer has no sensible rasterization target.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterizerError> {
        if width == 0 || height == 0 {
            return Err(RasterizerError::ZeroDimension { width, height });
        }
        log::info!("initializing rasterizer: {width}x{height}");
        Ok(Rasterizer {
            width,
            height,
            // Zero-filled by construction; the caller clears between frames.
            framebuffer: Framebuffer::new(width, height),
            // Built once, read-only for the lifetime of this rasterizer.
            lut: CoverageLut::new(),
        })
    }

    /// Rasterizes a flat NDC vertex list, three vertices per triangle.
    ///
    /// If `vertices.len()` is not a multiple of three, the trailing partial
    /// triangle is dropped (§7's recommended, non-panicking handling of
    /// malformed input). Degenerate triangles (coincident vertices) and
    /// triangles wound clockwise in screen space are silently skipped, as
    /// specified: neither is reported as an error.
    ///
    /// Does not clear the framebuffer first; call [`Rasterizer::clear`]
    /// between frames if that is the desired behavior.
    ///
    /// # Arguments
    ///
    /// * `vertices` - Flat NDC vertex list; consumed three at a time as
    ///   `(v0, v1, v2)` triangles.
    pub fn rasterize(&mut self, vertices: &[Vertex]) {
        log::trace!("rasterizing {} triangle(s)", vertices.len() / 3);
        let (w, h) = (self.width as f32, self.height as f32);
        // Trailing partial triangle (len not a multiple of 3) is dropped.
        for tri in vertices.chunks_exact(3) {
            // NDC -> screen space for all three vertices.
            let v0 = ndc_to_screen(tri[0], w, h);
            let v1 = ndc_to_screen(tri[1], w, h);
            let v2 = ndc_to_screen(tri[2], w, h);
            // Skip silently on a degenerate edge (coincident vertices).
            let Some(planes) = edge_setup(v0, v1, v2) else {
                continue;
            };
            let bounds = tile_bounds(v0, v1, v2);
            walk_tiles(bounds, &planes, &self.lut, &mut self.framebuffer);
        }
    }

    /// Resets every framebuffer byte to `0`.
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// A read-only view of the `width * height` coverage bytes, row-major,
    /// each either `0` (uncovered) or `255` (covered).
    pub fn framebuffer(&self) -> &[u8] {
        self.framebuffer.pixels()
    }

    /// Framebuffer width, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Framebuffer height, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(
            Rasterizer::new(0, 10),
            Err(RasterizerError::ZeroDimension { width: 0, height: 10 })
        );
    }

    #[test]
    fn zero_height_is_rejected() {
        assert_eq!(
            Rasterizer::new(10, 0),
            Err(RasterizerError::ZeroDimension { width: 10, height: 0 })
        );
    }

    #[test]
    fn new_framebuffer_starts_zeroed() {
        let r = Rasterizer::new(8, 8).unwrap();
        assert!(r.framebuffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn truncates_trailing_partial_triangle() {
        let mut r = Rasterizer::new(8, 8).unwrap();
        // Five vertices: one full triangle plus a dangling pair, which must
        // be dropped rather than panic on out-of-bounds indexing.
        let verts = [
            Vertex::new(-1.0, -1.0, 0.0),
            Vertex::new(1.0, -1.0, 0.0),
            Vertex::new(-1.0, 1.0, 0.0),
            Vertex::new(0.0, 0.0, 0.0),
            Vertex::new(0.0, 0.0, 0.0),
        ];
        r.rasterize(&verts);
        assert!(r.framebuffer().iter().any(|&b| b == 255));
    }

    #[test]
    fn clear_resets_framebuffer() {
        let mut r = Rasterizer::new(8, 8).unwrap();
        let verts = [
            Vertex::new(-1.0, -1.0, 0.0),
            Vertex::new(1.0, -1.0, 0.0),
            Vertex::new(-1.0, 1.0, 0.0),
        ];
        r.rasterize(&verts);
        r.clear();
        assert!(r.framebuffer().iter().all(|&b| b == 0));
    }
}
