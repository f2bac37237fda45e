//! Benchmarks for agreement metric computation

use criterion::{criterion_group, criterion_main, Criterion};
use ragbench::{
    recall_by_char, recall_by_page_number, CharCounts, Context, Task, TaskEvaluator, TaskPair,
};
use std::hint::black_box;

fn bench_char_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("char_counting");

    let text = "Retrieval-augmented generation grounds model output in retrieved context. "
        .repeat(100);

    group.bench_function("count_7k_chars", |b| {
        b.iter(|| CharCounts::from_text(black_box(&text)));
    });

    group.finish();
}

fn bench_char_recall(c: &mut Criterion) {
    let mut group = c.benchmark_group("char_recall");

    let baseline = CharCounts::from_text(&"the quick brown fox jumps over the lazy dog ".repeat(50));
    let sample = CharCounts::from_text(&"a quick brown dog inspects the lazy fox today ".repeat(50));

    group.bench_function("recall_large_counts", |b| {
        b.iter(|| recall_by_char(black_box(&baseline), black_box(&sample)));
    });

    group.finish();
}

fn bench_page_recall(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_recall");

    let baseline: Vec<Vec<u32>> = (0..100)
        .map(|i| (i..i + 5).collect())
        .collect();
    let sample: Vec<Vec<u32>> = (0..100)
        .map(|i| (i + 2..i + 7).collect())
        .collect();

    group.bench_function("recall_100x100_lists", |b| {
        b.iter(|| recall_by_page_number(black_box(&baseline), black_box(&sample)));
    });

    group.finish();
}

fn bench_task_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("task_evaluation");

    let contexts: Vec<Context> = (0..20)
        .map(|i| {
            Context::new(
                format!("Context {i} discusses attention heads and encodings."),
                "doc.pdf",
            )
            .with_page_numbers(vec![i, i + 1])
        })
        .collect();
    let pair = TaskPair::new(
        Task::new("1", "Q?", "A", contexts.clone()),
        Task::new("1", "Q?", "B", contexts),
    )
    .unwrap();

    group.bench_function("evaluate_20x20_contexts", |b| {
        b.iter(|| {
            let mut evaluator = TaskEvaluator::new(black_box(&pair));
            let _ = evaluator.recall_by_page_number();
            let _ = evaluator.precision_by_page_number();
            let _ = evaluator.recall_by_char();
            evaluator.precision_by_char()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_char_counting,
    bench_char_recall,
    bench_page_recall,
    bench_task_evaluation,
);

criterion_main!(benches);
