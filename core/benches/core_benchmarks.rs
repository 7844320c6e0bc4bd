use criterion::{Criterion, black_box, criterion_group, criterion_main};

use meshforge_core::math::Vec3;
use meshforge_core::mesh::generators::{
    generate_cone, generate_cube, generate_cylinder, generate_sphere, generate_tube,
};
use meshforge_core::mesh::{Primitive, VertexAccumulator, VertexAttributeSemantic, VertexLayout};

fn color() -> Vec3 {
    Vec3::new(0.8, 0.3, 0.1)
}

// ---------------------------------------------------------------------------
// Primitive generation
// ---------------------------------------------------------------------------

fn bench_generate_cube(c: &mut Criterion) {
    c.bench_function("generate_cube", |b| {
        b.iter(|| generate_cube(black_box(1.0), black_box(color())));
    });
}

fn bench_generate_cone_max(c: &mut Criterion) {
    c.bench_function("generate_cone_360", |b| {
        b.iter(|| generate_cone(black_box(1.0), black_box(2.0), black_box(360), color()));
    });
}

fn bench_generate_cylinder_low(c: &mut Criterion) {
    c.bench_function("generate_cylinder_16", |b| {
        b.iter(|| generate_cylinder(black_box(1.0), black_box(2.0), black_box(16), color()));
    });
}

fn bench_generate_cylinder_max(c: &mut Criterion) {
    c.bench_function("generate_cylinder_360", |b| {
        b.iter(|| generate_cylinder(black_box(1.0), black_box(2.0), black_box(360), color()));
    });
}

fn bench_generate_tube_max(c: &mut Criterion) {
    c.bench_function("generate_tube_360", |b| {
        b.iter(|| {
            generate_tube(
                black_box(1.0),
                black_box(0.5),
                black_box(2.0),
                black_box(360),
                color(),
            )
        });
    });
}

fn bench_generate_sphere_max(c: &mut Criterion) {
    c.bench_function("generate_sphere_6", |b| {
        b.iter(|| generate_sphere(black_box(1.0), black_box(6), color()));
    });
}

fn bench_primitive_dispatch(c: &mut Criterion) {
    let primitive = Primitive::Tube {
        outer_radius: 1.0,
        inner_radius: 0.5,
        height: 2.0,
        subdivisions: 64,
    };
    c.bench_function("primitive_generate_tube_64", |b| {
        b.iter(|| black_box(primitive).generate(color()));
    });
}

// ---------------------------------------------------------------------------
// Vertex assembly
// ---------------------------------------------------------------------------

fn bench_interleave(c: &mut Criterion) {
    let acc = generate_tube(1.0, 0.5, 2.0, 360, color());
    c.bench_function("interleave_tube_360", |b| {
        b.iter(|| black_box(&acc).interleave());
    });
}

fn bench_complete_colors(c: &mut Criterion) {
    let positions = generate_cylinder(1.0, 2.0, 360, color());
    c.bench_function("complete_colors_cylinder_360", |b| {
        b.iter(|| {
            let mut acc = VertexAccumulator::new();
            for p in positions.positions() {
                acc.add_position(*p);
            }
            acc.complete_colors(black_box(color()));
            acc
        });
    });
}

fn bench_vertex_layout_get_attribute(c: &mut Criterion) {
    let layout = VertexLayout::position_color();
    c.bench_function("vertex_layout_get_attribute", |b| {
        b.iter(|| {
            black_box(layout.get_attribute(black_box(VertexAttributeSemantic::Color)));
        });
    });
}

criterion_group!(
    benches,
    bench_generate_cube,
    bench_generate_cone_max,
    bench_generate_cylinder_low,
    bench_generate_cylinder_max,
    bench_generate_tube_max,
    bench_generate_sphere_max,
    bench_primitive_dispatch,
    bench_interleave,
    bench_complete_colors,
    bench_vertex_layout_get_attribute,
);
criterion_main!(benches);
