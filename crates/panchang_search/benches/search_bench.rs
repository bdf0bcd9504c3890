use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_base::Location;
use panchang_ephem::AnalyticEphemeris;
use panchang_search::{
    PanchangConfig, SearchError, compute_all_tithi_boundaries, find_phase_crossing, next_amavasya,
    panchang_for_day, tithi_at,
};
use panchang_time::CivilDate;

const JD: f64 = 2_460_325.5;

fn linear(jd: f64) -> Result<f64, SearchError> {
    Ok(((jd - 2_451_545.0) * 360.0 / 29.53).rem_euclid(360.0))
}

fn crossing_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let config = PanchangConfig::default();

    let mut group = c.benchmark_group("crossing");
    group.bench_function("linear_half_turn", |b| {
        b.iter(|| find_phase_crossing(black_box(2_451_545.0), 2_451_575.0, 180.0, 0.25, linear))
    });
    group.bench_function("next_amavasya", |b| b.iter(|| next_amavasya(&eph, black_box(JD))));
    group.bench_function("tithi_at", |b| b.iter(|| tithi_at(&eph, black_box(JD), 5.5, &config)));
    group.finish();
}

fn day_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let config = PanchangConfig::default();
    let loc = Location::new(17.385, 78.4867, 505.0, 5.5);

    c.bench_function("panchang_for_day", |b| {
        b.iter(|| panchang_for_day(&eph, black_box(CivilDate::new(2024, 1, 15)), &loc, &config))
    });
}

fn year_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let config = PanchangConfig::default();
    let loc = Location::new(17.385, 78.4867, 505.0, 5.5);

    let mut group = c.benchmark_group("year");
    group.sample_size(10);
    group.bench_function("tithi_boundaries_2024", |b| {
        b.iter(|| compute_all_tithi_boundaries(&eph, black_box(2024), &loc, &config))
    });
    group.finish();
}

criterion_group!(benches, crossing_bench, day_bench, year_bench);
criterion_main!(benches);
