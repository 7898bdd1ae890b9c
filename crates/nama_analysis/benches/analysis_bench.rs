use chrono::{NaiveDate, NaiveTime};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nama_analysis::{
    ApproxSunrise, NoSunrise, SunriseSource, analyze_svara, hoda_chakra, naming_report,
    rank_strength,
};
use nama_base::{BirthData, ChartBody, GeoLocation, Graha, PlanetPosition, PlanetaryDataset};

fn sample_dataset() -> PlanetaryDataset {
    let p = |b, lon| PlanetPosition::with_derived_navamsa(b, lon, false).unwrap();
    PlanetaryDataset::new(
        vec![
            p(ChartBody::Lagna, 155.0),
            p(ChartBody::Graha(Graha::Surya), 123.0),
            p(ChartBody::Graha(Graha::Chandra), 31.0),
            p(ChartBody::Graha(Graha::Mangal), 187.0),
            p(ChartBody::Graha(Graha::Buddh), 160.0),
            p(ChartBody::Graha(Graha::Guru), 232.0),
            p(ChartBody::Graha(Graha::Shukra), 140.0),
            p(ChartBody::Graha(Graha::Shani), 327.0),
            p(ChartBody::Graha(Graha::Rahu), 185.0),
            p(ChartBody::Graha(Graha::Ketu), 5.0),
        ],
        23.8,
    )
}

fn sample_birth() -> BirthData {
    BirthData::from_local(
        NaiveDate::from_ymd_opt(1995, 8, 20).unwrap(),
        NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        5.5,
        GeoLocation::new(19.07, 72.88).unwrap(),
    )
    .unwrap()
}

fn engines_bench(c: &mut Criterion) {
    let ds = sample_dataset();

    let mut group = c.benchmark_group("engines");
    group.bench_function("rank_strength", |b| b.iter(|| rank_strength(black_box(&ds))));
    group.bench_function("hoda_chakra_mars", |b| {
        b.iter(|| hoda_chakra(black_box(Graha::Mangal), black_box(&ds)))
    });
    group.bench_function("analyze_svara", |b| {
        b.iter(|| analyze_svara(black_box("Aaradhya"), black_box(&ds), 1995))
    });
    group.finish();
}

fn report_bench(c: &mut Criterion) {
    let ds = sample_dataset();
    let birth = sample_birth();

    let mut group = c.benchmark_group("report");
    group.bench_function("fallback_sunrise", |b| {
        b.iter(|| naming_report(black_box(&ds), black_box(&birth), "Arjun", &NoSunrise))
    });
    group.bench_function("approx_sunrise", |b| {
        b.iter(|| naming_report(black_box(&ds), black_box(&birth), "Arjun", &ApproxSunrise))
    });
    group.bench_function("approx_sunrise_only", |b| {
        b.iter(|| ApproxSunrise.sunrise(birth.local_midnight(), black_box(birth.location())))
    });
    group.finish();
}

criterion_group!(benches, engines_bench, report_bench);
criterion_main!(benches);
