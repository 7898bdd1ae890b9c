use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nama_katapayadi::{InputMode, KatapayadiSession, calculate, transliterate};

fn katapayadi_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("katapayadi");
    group.bench_function("transliterate", |b| {
        b.iter(|| transliterate(black_box("lakshminarayana")))
    });
    group.bench_function("calculate", |b| {
        b.iter(|| calculate(black_box("लक्ष्मीनारायण")))
    });
    group.bench_function("session_process", |b| {
        b.iter(|| {
            let mut s = KatapayadiSession::new();
            s.process(black_box("krishna"), InputMode::Auto).map(|e| e.sum())
        })
    });
    group.finish();
}

criterion_group!(benches, katapayadi_bench);
criterion_main!(benches);
