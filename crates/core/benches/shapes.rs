use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexlattice::{layout, Grid, GridConfig, Point, ShapeDirection};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape-generation");

    group.bench_function("hexagonal", |b| {
        b.iter(|| layout::hexagonal(black_box(50)))
    });
    group.bench_function("rectangular", |b| {
        b.iter(|| layout::rectangular(black_box(100), black_box(100)))
    });
    group.bench_function("triangular", |b| {
        b.iter(|| {
            layout::triangular(black_box(100), ShapeDirection::Standard)
        })
    });
    group.finish();

    let grid = Grid::generate(GridConfig::default()).unwrap();
    c.bench_function("pick", |b| {
        b.iter(|| grid.pick(black_box(Point::new(3.7, -2.1))))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
