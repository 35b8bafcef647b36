//! Benchmarks for the line and triangle rasterizers.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tinyraster::scene::{STAR_CENTER, lines_star, sample_triangles, star_offsets};
use tinyraster::{Canvas, Color, PixelFormat, draw_line, fill_triangle, fill_triangle_barycentric};

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    let mut canvas = Canvas::new(500, 500, PixelFormat::Rgb).unwrap();

    group.bench_function("star_8_lines", |b| {
        b.iter(|| lines_star(black_box(&mut canvas)));
    });

    for (i, offset) in star_offsets().into_iter().enumerate().take(2) {
        group.bench_with_input(BenchmarkId::new("octant", i), &offset, |b, &offset| {
            b.iter(|| draw_line(black_box(STAR_CENTER), black_box(STAR_CENTER + offset), &mut canvas, Color::WHITE));
        });
    }

    group.finish();
}

fn triangle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangle");
    let mut canvas = Canvas::new(200, 200, PixelFormat::Rgb).unwrap();

    for (i, tri) in sample_triangles().iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("scanline", i), tri, |b, tri| {
            b.iter(|| fill_triangle(black_box(tri), &mut canvas, Color::RED));
        });
        group.bench_with_input(BenchmarkId::new("barycentric", i), tri, |b, tri| {
            b.iter(|| fill_triangle_barycentric(black_box(tri), &mut canvas, Color::RED));
        });
    }

    group.finish();
}

criterion_group!(benches, line_benchmark, triangle_benchmark);
criterion_main!(benches);
