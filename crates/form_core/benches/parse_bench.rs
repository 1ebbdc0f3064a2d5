use criterion::{Criterion, black_box, criterion_group, criterion_main};
use form_core::parse::parse_or_fallback;
use form_core::{FieldKind, FieldSpec, rules};

const FIELDS: usize = 256;

fn range_texts() -> Vec<String> {
    (0..FIELDS)
        .map(|i| match i % 4 {
            0 => format!("{}-{}", i % 50, 50 + i % 50),
            1 => format!("{}.5-{}", i % 10, 90),
            2 => "notarange".to_string(),
            _ => format!("{}", i),
        })
        .collect()
}

fn make_specs() -> Vec<FieldSpec> {
    (0..FIELDS)
        .map(|i| {
            let kind = FieldKind::ALL[i % FieldKind::ALL.len()];
            FieldSpec::new(format!("p{i}"), kind).with_bounds(0.0, 100.0)
        })
        .collect()
}

fn bench_parse_range(c: &mut Criterion) {
    let texts = range_texts();
    c.bench_function("bench_parse_range", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(parse_or_fallback(black_box(text), [0.0, 100.0]));
            }
        });
    });
}

fn bench_parse_scalar(c: &mut Criterion) {
    let texts = range_texts();
    c.bench_function("bench_parse_scalar", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(parse_or_fallback(black_box(text), [0.0]));
            }
        });
    });
}

fn bench_build_rules(c: &mut Criterion) {
    let specs = make_specs();
    c.bench_function("bench_build_rules", |b| {
        b.iter(|| black_box(rules::build(black_box(&specs))));
    });
}

fn bench_evaluate_rules(c: &mut Criterion) {
    let specs = make_specs();
    let rules = rules::build(&specs);
    let texts = range_texts();
    c.bench_function("bench_evaluate_rules", |b| {
        b.iter(|| {
            let mut accepted = 0usize;
            for (spec, text) in specs.iter().zip(&texts) {
                if rules.get(&spec.name).is_some_and(|rule| rule.accepts(text)) {
                    accepted += 1;
                }
            }
            black_box(accepted)
        });
    });
}

criterion_group!(
    benches,
    bench_parse_range,
    bench_parse_scalar,
    bench_build_rules,
    bench_evaluate_rules
);
criterion_main!(benches);
