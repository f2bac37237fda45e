//! Integration tests for ragbench

use ragbench::{Context, Dataset, Error, EvaluationReport, Task, TaskEvaluator, TaskPair};

fn dataset_json(score: bool, pages: bool) -> String {
    let score_field = if score { r#", "SCORE": 0.88"# } else { "" };
    let page_field = if pages { r#", "PAGE_NUMBER": [1]"# } else { "" };
    format!(
        r#"{{
            "NAME": "transformers",
            "DOCUMENTS": ["data/attention_is_all_you_need.pdf"],
            "TASKS": {{
                "1": {{
                    "QUESTION": "What is multi-head attention?",
                    "ANSWER": "Parallel attention over projected subspaces.",
                    "CONTEXTS": [
                        {{
                            "TEXT": "Multi-head attention runs attention in parallel.",
                            "FILE_PATH": "data/attention_is_all_you_need.pdf"{page_field}{score_field}
                        }}
                    ]
                }}
            }}
        }}"#
    )
}

#[test]
fn test_end_to_end_perfect_agreement() {
    // A dataset with one task: baseline pages [1], [3]; sample pages [1], [3].
    let contexts = vec![
        Context::new("Scaled dot-product attention.", "data/attention.pdf")
            .with_page_numbers(vec![1]),
        Context::new("Positional encodings are added.", "data/attention.pdf")
            .with_page_numbers(vec![3]),
    ];
    let baseline = Dataset::new(
        "transformers",
        vec!["data/attention.pdf".to_string()],
        vec![Task::new("1", "How does attention work?", "A", contexts.clone())],
    );
    let sample = Dataset::new(
        "transformers-run",
        vec!["data/attention.pdf".to_string()],
        vec![Task::new("1", "How does attention work?", "B", contexts)],
    );

    let report = EvaluationReport::evaluate(&baseline, &sample).expect("evaluation failed");

    assert_eq!(report.task_count, 1);
    assert!((report.mean_recall_by_page_number - 1.0).abs() < 1e-9);
    assert!((report.mean_precision_by_page_number - 1.0).abs() < 1e-9);
    assert!((report.mean_recall_by_char - 1.0).abs() < 1e-9);
    assert!((report.mean_precision_by_char - 1.0).abs() < 1e-9);
}

#[test]
fn test_end_to_end_from_json() {
    let baseline = Dataset::from_json(&dataset_json(false, true)).unwrap();
    let sample = Dataset::from_json(&dataset_json(true, true)).unwrap();

    let report = EvaluationReport::evaluate(&baseline, &sample).unwrap();

    assert_eq!(report.dataset, "transformers");
    assert_eq!(report.tasks.len(), 1);
    assert!((report.tasks[0].recall_by_page_number - 1.0).abs() < 1e-9);
    assert!((report.tasks[0].recall_by_char - 1.0).abs() < 1e-9);
}

#[test]
fn test_sample_without_page_numbers_degrades() {
    // The sample side carries no page-number field at all: the page metrics
    // report 0.0 with a diagnostic instead of failing the evaluation.
    let baseline = Dataset::from_json(&dataset_json(false, true)).unwrap();
    let sample = Dataset::from_json(&dataset_json(true, false)).unwrap();

    let pairs = baseline.pair_with(&sample).unwrap();
    let mut evaluator = TaskEvaluator::new(&pairs[0]);

    assert_eq!(evaluator.recall_by_page_number().unwrap(), 0.0);
    assert_eq!(evaluator.precision_by_page_number().unwrap(), 0.0);
    // Texts are unaffected.
    assert!((evaluator.recall_by_char() - 1.0).abs() < 1e-9);
}

#[test]
fn test_question_mismatch_rejected_at_pairing() {
    let baseline = Task::new("7", "What is attention?", "A", vec![]);
    let sample = Task::new("7", "What is convolution?", "B", vec![]);

    let err = TaskPair::new(baseline, sample).unwrap_err();
    assert!(matches!(err, Error::QuestionMismatch(id) if id == "7"));
}

#[test]
fn test_partial_overlap_report() {
    let baseline = Dataset::new(
        "demo",
        vec![],
        vec![Task::new(
            "1",
            "Q?",
            "A",
            vec![
                Context::new("abc", "b.pdf").with_page_numbers(vec![1, 2, 3]),
                Context::new("abc", "b.pdf").with_page_numbers(vec![4, 5, 6]),
            ],
        )],
    );
    let sample = Dataset::new(
        "demo-run",
        vec![],
        vec![Task::new(
            "1",
            "Q?",
            "B",
            vec![
                Context::new("abc", "s.pdf").with_page_numbers(vec![1, 2]),
                Context::new("abc", "s.pdf").with_page_numbers(vec![4, 5, 7]),
            ],
        )],
    );

    let report = EvaluationReport::evaluate(&baseline, &sample).unwrap();
    assert!((report.mean_recall_by_page_number - 2.0 / 3.0).abs() < 1e-9);
    assert!((report.mean_precision_by_page_number - 5.0 / 6.0).abs() < 1e-9);
}

#[test]
fn test_jsonl_dataset_evaluation() {
    let baseline_lines = r#"{"ID": "1", "QUESTION": "Q?", "ANSWER": "A", "CONTEXTS": [{"TEXT": "snippet", "FILE_PATH": "doc.pdf", "PAGE_NUMBER": [2]}]}"#;
    let sample_lines = r#"{"ID": "1", "QUESTION": "Q?", "ANSWER": "B", "CONTEXTS": [{"TEXT": "snippet", "FILE_PATH": "doc.pdf", "PAGE_NUMBER": [2], "SCORE": 0.7}]}"#;

    let baseline = Dataset::from_jsonl("baseline", baseline_lines).unwrap();
    let sample = Dataset::from_jsonl("sample", sample_lines).unwrap();

    let report = EvaluationReport::evaluate(&baseline, &sample).unwrap();
    assert!((report.mean_recall_by_page_number - 1.0).abs() < 1e-9);
}
