use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pyrmap::check::{check_round_trip, cross_validate, samples, CheckOptions, ConsistencyReport};
use pyrmap::shapes::{curved_pyramid, linear_pyramid, warped_pyramid};
use pyrmap::traits::Geometry;

pub fn round_trip_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("round trip");
    group.sample_size(20);

    let geometries = [
        ("linear", linear_pyramid::<f64>().unwrap()),
        ("warped", warped_pyramid::<f64>().unwrap()),
        ("curved", curved_pyramid::<f64>().unwrap()),
    ];
    let samples = samples::interior_grid::<f64>(6, 0.9).unwrap();

    for (name, geometry) in &geometries {
        group.bench_function(format!("Round trips on the {name} pyramid"), |b| {
            b.iter(|| {
                for sample in &samples {
                    black_box(check_round_trip(geometry, sample, 1e-12).unwrap());
                }
            })
        });
        group.bench_function(format!("Cross-validation on the {name} pyramid"), |b| {
            b.iter(|| {
                for sample in &samples {
                    black_box(cross_validate(geometry, sample));
                }
            })
        });
    }
    group.finish();
}

pub fn report_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    group.sample_size(20);

    let geometry = curved_pyramid::<f64>().unwrap();
    let options = CheckOptions::for_geometry_type(geometry.geometry_type());
    for n in [4, 8] {
        let samples = samples::interior_grid::<f64>(n, 0.9).unwrap();
        group.bench_function(format!("Report over {} samples", samples.len()), |b| {
            b.iter(|| black_box(ConsistencyReport::run(&geometry, &samples, &options).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, round_trip_benchmark, report_benchmark);
criterion_main!(benches);
