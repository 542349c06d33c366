//! Benchmarks for résumé analysis.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use grader_analyzer::ResumeAnalyzer;
use grader_core::document::{Fragment, NormalizedDocument};
use grader_core::plugin::Analyzer;

/// Build a résumé-like text with N experience bullets.
fn make_resume(num_bullets: usize) -> String {
    let mut text = String::from(
        "Jane Doe\nAustin, TX | jane@example.com | https://github.com/jane\n\nSUMMARY\nBackend engineer.\n\nEXPERIENCE\n",
    );
    for i in 0..num_bullets {
        text.push_str(&format!(
            "- Built service {} handling {}00 requests per second, reduced latency {}%\n",
            i,
            i + 1,
            i % 50
        ));
    }
    text.push_str("\nEDUCATION\nBSc Computer Science\n\nSKILLS\nRust, Go, AWS, Kubernetes\n");
    text
}

fn make_fragments(count: usize) -> Vec<Fragment> {
    (0..count)
        .map(|i| {
            let page = (i / 50) as u32 + 1;
            let y = 760.0 - 14.0 * (i % 50) as f64;
            let size = if i % 25 == 0 { 16.0 } else { 11.0 };
            Fragment::new(format!("line {}", i), page, y, size).with_font("Inter")
        })
        .collect()
}

fn bench_analyze_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("AnalyzeText");
    let analyzer = ResumeAnalyzer::new();
    let keywords: Vec<String> = ["Rust", "Go", "AWS", "Kubernetes", "Kafka"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    for n in [10, 100, 1000] {
        let doc = NormalizedDocument::plain_text(make_resume(n));
        group.bench_function(format!("{}_bullets", n), |b| {
            b.iter(|| black_box(analyzer.analyze(black_box(&doc), &keywords)));
        });
    }
    group.finish();
}

fn bench_typography(c: &mut Criterion) {
    let mut group = c.benchmark_group("Typography");
    let analyzer = ResumeAnalyzer::new();

    for n in [100, 2000] {
        let text = make_resume(n / 10);
        let doc = NormalizedDocument::portable_document(text, make_fragments(n));
        group.bench_function(format!("{}_fragments", n), |b| {
            b.iter(|| black_box(analyzer.analyze(black_box(&doc), &[])));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_analyze_text, bench_typography);
criterion_main!(benches);
