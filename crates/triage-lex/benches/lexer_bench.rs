use criterion::{black_box, criterion_group, criterion_main, Criterion};
use triage_lex::tokenize;

fn rule_script(rules: usize) -> String {
    let mut script = String::new();
    for i in 0..rules {
        script.push_str(&format!(
            "# rule {i}\n\
             IF 'Heart Rate' > 100 AND 'Oxygen Saturation' < 92.5 THEN\n\
             \tSET 'Risk' = \"high\"\n\
             \tSET 'Alerts' = COUNT WHERE 'Risk' == \"high\"\n\
             ELSE\n\
             \tSET 'Risk' = \"low\"\n\n"
        ));
    }
    script
}

fn bench_tokenize(c: &mut Criterion) {
    let small = rule_script(4);
    let large = rule_script(256);

    c.bench_function("tokenize_small_script", |b| {
        b.iter(|| tokenize(black_box(&small)))
    });
    c.bench_function("tokenize_large_script", |b| {
        b.iter(|| tokenize(black_box(&large)))
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
