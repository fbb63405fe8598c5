use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;

use sketchbook::camera::PageCamera;
use sketchbook::layout::Viewport;
use sketchbook::math::pointer_to_ndc;
use sketchbook::picking::{pick, PlaneTarget};

/// Lay out `count` planes in a long column, like a gallery page.
fn column_of_planes(count: usize) -> Vec<PlaneTarget> {
    (0..count)
        .map(|i| PlaneTarget {
            position: Vec2::new(if i % 2 == 0 { -180.0 } else { 180.0 }, -(i as f32) * 320.0),
            width: 300.0,
            height: 220.0,
        })
        .collect()
}

fn bench_single_plane_pick(c: &mut Criterion) {
    let camera = PageCamera::new(Viewport::new(800.0, 600.0));
    let planes = column_of_planes(1);
    let ray = camera.ray_from_ndc(pointer_to_ndc(400.0, 300.0, 800.0, 600.0));

    c.bench_function("pick_single_plane", |b| {
        b.iter(|| black_box(pick(black_box(&ray), black_box(&planes))))
    });
}

fn bench_gallery_pick(c: &mut Criterion) {
    let camera = PageCamera::new(Viewport::new(800.0, 600.0));
    let mut group = c.benchmark_group("pick_gallery");

    for count in [8, 64, 512] {
        let planes = column_of_planes(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &planes, |b, planes| {
            let ray = camera.ray_from_ndc(pointer_to_ndc(220.0, 300.0, 800.0, 600.0));
            b.iter(|| black_box(pick(black_box(&ray), black_box(planes))))
        });
    }
    group.finish();
}

fn bench_pointer_to_ray(c: &mut Criterion) {
    let camera = PageCamera::new(Viewport::new(800.0, 600.0));

    c.bench_function("pointer_to_ray", |b| {
        b.iter(|| {
            let ndc = pointer_to_ndc(black_box(123.0), black_box(456.0), 800.0, 600.0);
            black_box(camera.ray_from_ndc(ndc))
        })
    });
}

criterion_group!(
    benches,
    bench_single_plane_pick,
    bench_gallery_pick,
    bench_pointer_to_ray
);
criterion_main!(benches);
