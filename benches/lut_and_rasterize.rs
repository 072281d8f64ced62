//! Benchmarks LUT construction (paid once per [`tilecov::Rasterizer`]) and
//! steady-state `rasterize` throughput, per SPEC_FULL.md's ambient test
//! tooling section.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tilecov::geometry::Vertex;
use tilecov::Rasterizer;

fn bench_lut_construction(c: &mut Criterion) {
    c.bench_function("rasterizer_new_512x512", |b| {
        b.iter(|| Rasterizer::new(black_box(512), black_box(512)).unwrap());
    });
}

fn bench_rasterize_single_triangle(c: &mut Criterion) {
    let mut r = Rasterizer::new(512, 512).unwrap();
    let tri = [
        Vertex::new(-0.5, -0.5, 0.0),
        Vertex::new(0.5, -0.5, 0.0),
        Vertex::new(0.0, 0.5, 0.0),
    ];
    c.bench_function("rasterize_single_triangle_512x512", |b| {
        b.iter(|| {
            r.clear();
            r.rasterize(black_box(&tri));
        });
    });
}

fn bench_rasterize_many_triangles(c: &mut Criterion) {
    let mut r = Rasterizer::new(512, 512).unwrap();
    let mut verts = Vec::new();
    for i in 0..200 {
        let t = i as f32 / 200.0;
        let x = -0.9 + t * 1.6;
        verts.push(Vertex::new(x, -0.9, 0.0));
        verts.push(Vertex::new(x + 0.08, -0.9, 0.0));
        verts.push(Vertex::new(x + 0.04, -0.1, 0.0));
    }
    c.bench_function("rasterize_200_triangles_512x512", |b| {
        b.iter(|| {
            r.clear();
            r.rasterize(black_box(&verts));
        });
    });
}

criterion_group!(
    benches,
    bench_lut_construction,
    bench_rasterize_single_triangle,
    bench_rasterize_many_triangles
);
criterion_main!(benches);
