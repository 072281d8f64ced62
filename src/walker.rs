//! The incremental tile walker (C4): steps each edge's signed tile-origin
//! offset by constant per-tile increments, indexing the LUT instead of
//! re-evaluating the half-plane equation at every pixel.

use crate::framebuffer::Framebuffer;
use crate::geometry::HalfPlane;
use crate::lut::{bucket_prefix, quantize_direction, CoverageLut};
use crate::tiling::{TileBounds, TILE_SIZE};

/// Per-edge state carried across the tile walk: the constant per-tile
/// increments and the current row's offset at the bounding box's left edge.
struct EdgeState {
    /// LUT direction-bucket prefix, constant for the whole triangle.
    prefix: usize,
    /// Per-tile offset increment along x (`nx * TILE_SIZE`).
    dx: f32,
    /// Per-tile offset increment along y (`ny * TILE_SIZE`).
    dy: f32,
    /// Signed offset of the current row's leftmost tile origin from the edge.
    row_offset: f32,
}

impl EdgeState {
    /// Derives the per-tile increments and the bounding box's first row
    /// offset for one edge.
    fn new(plane: &HalfPlane, min_tile_y: i32) -> Self {
        let (sx, sy) = quantize_direction(plane.nx, plane.ny);
        let dx = plane.nx * TILE_SIZE as f32;
        let dy = plane.ny * TILE_SIZE as f32;
        EdgeState {
            prefix: bucket_prefix(sx, sy),
            dx,
            dy,
            row_offset: plane.c + dy * min_tile_y as f32,
        }
    }

    /// Advances to the next row.
    fn advance_row(&mut self) {
        self.row_offset += self.dy;
    }
}

/// Walks every tile in `bounds`, evaluating the triangle defined by `planes`
/// via three LUT lookups per tile, and scatters the combined coverage mask
/// into `framebuffer`.
///
/// Tile visitation is row-major, matching spec ordering (observable only via
/// the order of [`Framebuffer`] writes, which are idempotent at `255`).
///
/// # Arguments
///
/// * `bounds` - The inclusive-exclusive tile range to visit.
/// * `planes` - The triangle's three half-plane edge equations.
/// * `lut` - The precomputed coverage table shared across the whole rasterizer.
/// * `framebuffer` - The buffer the combined tile masks are scattered into.
pub(crate) fn walk_tiles(
    bounds: TileBounds,
    planes: &[HalfPlane; 3],
    lut: &CoverageLut,
    framebuffer: &mut Framebuffer,
) {
    if bounds.is_empty() {
        return;
    }
    // Per-edge constant increments and the bounding box's first row offset.
    let mut edges = [
        EdgeState::new(&planes[0], bounds.min_y),
        EdgeState::new(&planes[1], bounds.min_y),
        EdgeState::new(&planes[2], bounds.min_y),
    ];

    for ty in bounds.min_y..bounds.max_y {
        // Offset of the row's leftmost tile origin from each edge.
        let mut cur = [
            edges[0].row_offset + edges[0].dx * bounds.min_x as f32,
            edges[1].row_offset + edges[1].dx * bounds.min_x as f32,
            edges[2].row_offset + edges[2].dx * bounds.min_x as f32,
        ];
        for tx in bounds.min_x..bounds.max_x {
            // Three LUT lookups, ANDed into the triangle's combined mask.
            let mask = lut.lookup(edges[0].prefix, cur[0])
                & lut.lookup(edges[1].prefix, cur[1])
                & lut.lookup(edges[2].prefix, cur[2]);
            framebuffer.write_tile(tx, ty, mask);
            // Step every edge's offset to the next tile over.
            for e in 0..3 {
                cur[e] += edges[e].dx;
            }
        }
        // Step every edge's row offset down to the next row.
        for e in edges.iter_mut() {
            e.advance_row();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::edge_setup;
    use crate::tiling::tile_bounds;
    use glam::Vec2;

    #[test]
    fn fully_covering_triangle_sets_every_tile() {
        // A triangle enclosing the whole 16x16 (2x2 tile) buffer.
        let planes = edge_setup(
            Vec2::new(-100.0, -100.0),
            Vec2::new(200.0, -100.0),
            Vec2::new(-100.0, 200.0),
        )
        .unwrap();
        let bounds = tile_bounds(
            Vec2::new(-100.0, -100.0),
            Vec2::new(200.0, -100.0),
            Vec2::new(-100.0, 200.0),
        );
        let lut = CoverageLut::new();
        let mut fb = Framebuffer::new(16, 16);
        walk_tiles(bounds, &planes, &lut, &mut fb);
        assert!(fb.pixels().iter().all(|&b| b == 255));
    }

    #[test]
    fn empty_bounds_writes_nothing() {
        let planes = edge_setup(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
        )
        .unwrap();
        let lut = CoverageLut::new();
        let mut fb = Framebuffer::new(16, 16);
        walk_tiles(
            TileBounds { min_x: 5, min_y: 5, max_x: 5, max_y: 5 },
            &planes,
            &lut,
            &mut fb,
        );
        assert!(fb.pixels().iter().all(|&b| b == 0));
    }
}
