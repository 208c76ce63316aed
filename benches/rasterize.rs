use criterion::{criterion_group, criterion_main, Criterion, black_box};

use structmap::generation::{CategoryRatios, GenerationConfig, MapGenerator, SizeBounds};
use structmap::grid::GridConfig;
use structmap::shapes::{Shape, ShapeDescriptor, ShapeKind, ShapeParams};

use glam::DVec3;

fn small_grid() -> GridConfig {
    GridConfig::new(0.1, DVec3::new(10.0, 10.0, 4.0), DVec3::new(-5.0, -5.0, 0.0))
}

fn bench_rasterize_ellipsoid(c: &mut Criterion) {
    let descriptor = ShapeDescriptor::new(
        DVec3::new(0.0, 0.0, 2.0),
        ShapeParams::Ellipsoid {
            radii: DVec3::new(1.0, 0.6, 0.8),
            angles: DVec3::new(0.4, 0.2, -0.3),
        },
    );
    let shape = Shape::from_descriptor(&descriptor);

    c.bench_function("rasterize_ellipsoid", |b| {
        b.iter(|| {
            let mut generator = MapGenerator::new(small_grid()).unwrap();
            generator.rasterize(black_box(&shape))
        });
    });
}

fn bench_rasterize_polyhedron(c: &mut Criterion) {
    let descriptor = ShapeDescriptor::new(
        DVec3::new(0.0, 0.0, 2.0),
        ShapeParams::Polyhedron {
            half_extents: DVec3::new(1.5, 1.0, 1.2),
            normals: vec![
                DVec3::new(1.0, 1.0, 0.0).normalize(),
                DVec3::new(-1.0, 0.5, 1.0).normalize(),
                DVec3::new(0.2, -1.0, -1.0).normalize(),
                DVec3::new(0.0, 0.3, 1.0).normalize(),
            ],
        },
    );
    let shape = Shape::from_descriptor(&descriptor);

    c.bench_function("rasterize_polyhedron", |b| {
        b.iter(|| {
            let mut generator = MapGenerator::new(small_grid()).unwrap();
            generator.rasterize(black_box(&shape))
        });
    });
}

fn bench_generate_small(c: &mut Criterion) {
    let config = GenerationConfig {
        ratios: CategoryRatios {
            cylinder: 0.02,
            circle_gate: 0.02,
            rect_gate: 0.02,
            ellipsoid: 0.02,
            polyhedron: 0.02,
        },
        bounds: SizeBounds::default(),
        seed: 7,
        max_idle_attempts: Some(500),
    };

    c.bench_function("generate_10x10x4", |b| {
        let mut generator = MapGenerator::new(small_grid()).unwrap();
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            generator.regenerate(black_box(&config), seed).unwrap()
        });
    });
}

fn bench_replay(c: &mut Criterion) {
    let mut generator = MapGenerator::new(small_grid()).unwrap();
    let config = GenerationConfig {
        ratios: CategoryRatios::only(ShapeKind::Ellipsoid, 0.05),
        max_idle_attempts: Some(500),
        ..Default::default()
    };
    generator.generate(&config).unwrap();

    c.bench_function("reset_map_replay", |b| {
        b.iter(|| generator.reset_map());
    });
}

criterion_group!(
    benches,
    bench_rasterize_ellipsoid,
    bench_rasterize_polyhedron,
    bench_generate_small,
    bench_replay,
);
criterion_main!(benches);
