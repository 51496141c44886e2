use criterion::{black_box, criterion_group, criterion_main, Criterion};
use terrain::{BatchedLookup, Coordinate, ElevationLookup, LookupError, Profile, C};

fn flat(coords: &[Coordinate]) -> Result<Vec<C>, LookupError> {
    Ok(vec![0.0; coords.len()])
}

fn interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Interpolation");

    let start = Coordinate::new(44.28309806603165, -71.30830716441369).unwrap();
    let end = Coordinate::new(44.25628098424278, -71.2972073283768).unwrap();
    let far_end = Coordinate::new(45.0, -70.0).unwrap();
    let _90m = 90.0;

    group.bench_function("short", |b| {
        b.iter(|| terrain::interpolate(black_box(start), black_box(end), _90m).unwrap())
    });

    group.bench_function("long", |b| {
        b.iter(|| terrain::interpolate(black_box(start), black_box(far_end), _90m).unwrap())
    });

    group.finish();
}

fn profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("Terrain Profile");

    let start = Coordinate::new(44.28309806603165, -71.30830716441369).unwrap();
    let end = Coordinate::new(45.0, -70.0).unwrap();
    let batched = BatchedLookup::new(flat, 256);

    group.bench_function("unbatched", |b| {
        b.iter(|| {
            Profile::builder()
                .start(start)
                .granularity(90.0)
                .end(end)
                .build(&flat)
                .unwrap()
        })
    });

    group.bench_function("batched", |b| {
        b.iter(|| {
            Profile::builder()
                .start(start)
                .granularity(90.0)
                .end(end)
                .build(&batched)
                .unwrap()
        })
    });

    group.finish();
}

fn batched_lookup(c: &mut Criterion) {
    let coords: Vec<Coordinate> = terrain::interpolate(
        Coordinate::new(0.0, 0.0).unwrap(),
        Coordinate::new(1.0, 1.0).unwrap(),
        30.0,
    )
    .unwrap()
    .into_points();
    let batched = BatchedLookup::new(flat, 512);
    c.bench_function("batched lookup", |b| {
        b.iter(|| batched.lookup(black_box(&coords)).unwrap())
    });
}

criterion_group!(benches, interpolation, profile, batched_lookup);
criterion_main!(benches);
