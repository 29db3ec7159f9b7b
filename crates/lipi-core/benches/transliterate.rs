use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lipi_core::{segments, transliterate, SymbolTable};

static INPUTS: &[(&str, &str)] = &[
    ("short", "bangaaru"),
    ("medium", "naaku telugu ante chaalaa ishtam, meeru ela unnaaru?"),
    (
        "long",
        "okappudu oka chinna graamamlo oka raitu undevaadu. atanu roju \
         pollaaniki vellevaadu, saayantram intiki vacchi amma cheppina \
         kathalu vinevaadu. aa kathallo raajulu, raakshasulu, pakshulu \
         andaroo maatlaadevaaru.",
    ),
];

fn bench_transliterate(c: &mut Criterion) {
    // Build the global table outside the timed loop.
    SymbolTable::global();
    let mut group = c.benchmark_group("convert/transliterate");
    for &(label, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| transliterate(text));
        });
    }
    group.finish();
}

fn bench_segments(c: &mut Criterion) {
    SymbolTable::global();
    let mut group = c.benchmark_group("convert/segments");
    for &(label, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| segments(text));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transliterate, bench_segments);
criterion_main!(benches);
