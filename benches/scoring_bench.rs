//! Benchmarks for single-page scoring, batch analysis and comparison

use crawlability::snapshot::{Heading, StructuredDataFormat, StructuredDataItem};
use crawlability::{
    AnalysisSnapshot, ContentComparator, CrawlabilityConfig, PageAnalyzer, PageInput,
    ScoringEngine, SiteComparisonEngine, SiteReport,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn create_snapshot(words: usize) -> AnalysisSnapshot {
    let text = (0..words)
        .map(|i| format!("word{}", i % 97))
        .collect::<Vec<_>>()
        .join(" ");
    let mut snapshot = AnalysisSnapshot::default();
    snapshot.url = "https://bench.example".to_string();
    snapshot.content.word_count = words as u32;
    snapshot.content.character_count = text.chars().count() as u32;
    snapshot.content.text_content = text;
    snapshot.content.paragraphs = (words / 80) as u32;
    snapshot.content.links = 12;
    snapshot.structure.headings = vec![Heading::new(1, "Title"), Heading::new(2, "Section")];
    snapshot.structure.total_elements = 300;
    snapshot.structure.dom_depth = 9;
    snapshot.meta.title = "Benchmark page with a reasonable title".to_string();
    snapshot.meta.structured_data = vec![StructuredDataItem::new(
        StructuredDataFormat::JsonLd,
        "Article",
    )];
    snapshot
}

fn bench_scoring(c: &mut Criterion) {
    let engine = ScoringEngine::scraper();
    let snapshot = create_snapshot(800);

    c.bench_function("score_scraper_profile", |b| {
        b.iter(|| black_box(engine.score(black_box(&snapshot))))
    });
}

fn bench_content_comparison(c: &mut Criterion) {
    let comparator = ContentComparator::default();
    let mut group = c.benchmark_group("content_comparison");

    for words in [100, 1_000, 10_000] {
        let static_snapshot = create_snapshot(words / 2);
        let rendered = create_snapshot(words);
        group.bench_with_input(BenchmarkId::from_parameter(words), &words, |b, _| {
            b.iter(|| black_box(comparator.compare(&static_snapshot, &rendered)))
        });
    }
    group.finish();
}

fn bench_batch_analysis(c: &mut Criterion) {
    let analyzer = match PageAnalyzer::new(&CrawlabilityConfig::default()) {
        Ok(analyzer) => analyzer,
        Err(e) => panic!("default configuration is invalid: {e}"),
    };
    let pages: Vec<PageInput> = (0..64)
        .map(|i| PageInput::new(create_snapshot(200 + i * 10)))
        .collect();

    c.bench_function("analyze_batch_64", |b| {
        b.iter(|| black_box(analyzer.analyze_batch(black_box(&pages))))
    });
}

fn bench_site_comparison(c: &mut Criterion) {
    let engine = SiteComparisonEngine::default();
    let a = create_snapshot(1_000);
    let b = create_snapshot(400);
    let (a_scraper, a_llm) = (ScoringEngine::scraper().score(&a), ScoringEngine::llm().score(&a));
    let (b_scraper, b_llm) = (ScoringEngine::scraper().score(&b), ScoringEngine::llm().score(&b));

    c.bench_function("compare_sites", |bench| {
        bench.iter(|| {
            black_box(engine.compare_sites(
                SiteReport::new(&a_scraper, &a_llm, &a),
                SiteReport::new(&b_scraper, &b_llm, &b),
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_scoring,
    bench_content_comparison,
    bench_batch_analysis,
    bench_site_comparison
);
criterion_main!(benches);
