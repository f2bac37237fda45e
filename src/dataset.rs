//! Dataset, task, and context records for baseline/sample comparisons
//!
//! Upstream exporters write datasets with SCREAMING-CASE field names, either
//! as a single JSON document with a `TASKS` map keyed by task id, or as
//! line-delimited records carrying an explicit `ID`. Both shapes deserialize
//! into the same [`Dataset`] model, which is read-only after construction.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Wire record for a single retrieved context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextRecord {
    /// Retrieved text snippet
    #[serde(rename = "TEXT")]
    pub text: String,
    /// Source file the snippet was retrieved from
    #[serde(rename = "FILE_PATH")]
    pub file_path: String,
    /// Page numbers the snippet spans, when the exporter provides them
    #[serde(rename = "PAGE_NUMBER", default, skip_serializing_if = "Option::is_none")]
    pub page_numbers: Option<Vec<u32>>,
    /// Retriever relevance score, when the exporter provides one
    #[serde(rename = "SCORE", default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Wire record for a single task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Question posed to the system
    #[serde(rename = "QUESTION")]
    pub question: String,
    /// Answer produced for the question
    #[serde(rename = "ANSWER")]
    pub answer: String,
    /// Contexts retrieved while answering
    #[serde(rename = "CONTEXTS")]
    pub contexts: Vec<ContextRecord>,
}

/// Wire record for a whole dataset file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Dataset name
    #[serde(rename = "NAME")]
    pub name: String,
    /// Source documents the dataset was built from
    #[serde(rename = "DOCUMENTS", default)]
    pub documents: Vec<String>,
    /// Tasks keyed by task id
    #[serde(rename = "TASKS")]
    pub tasks: BTreeMap<String, TaskRecord>,
}

/// Line-delimited task record (one task per line, id inline)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TaskLineRecord {
    #[serde(rename = "ID")]
    id: String,
    #[serde(flatten)]
    task: TaskRecord,
}

/// A retrieved text snippet plus its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Snippet text
    pub text: String,
    /// Source file path
    pub source_path: String,
    /// Page numbers, absent when the exporter recorded none
    pub page_numbers: Option<Vec<u32>>,
    /// Retriever relevance score, absent for baseline runs
    pub relevance_score: Option<f64>,
}

impl Context {
    /// Create a new context with the given text and source path
    #[must_use]
    pub fn new(text: impl Into<String>, source_path: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_path: source_path.into(),
            page_numbers: None,
            relevance_score: None,
        }
    }

    /// Set the page numbers
    #[must_use]
    pub fn with_page_numbers(mut self, page_numbers: Vec<u32>) -> Self {
        self.page_numbers = Some(page_numbers);
        self
    }

    /// Set the relevance score
    #[must_use]
    pub fn with_relevance_score(mut self, score: f64) -> Self {
        self.relevance_score = Some(score);
        self
    }

    /// Build a context from its wire record
    #[must_use]
    pub fn from_record(record: ContextRecord) -> Self {
        Self {
            text: record.text,
            source_path: record.file_path,
            page_numbers: record.page_numbers,
            relevance_score: record.score,
        }
    }
}

/// One run of a question: the question, its answer, and the retrieved contexts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier, unique within a dataset
    pub id: String,
    /// Question posed to the system
    pub question: String,
    /// Answer produced
    pub answer: String,
    /// Retrieved contexts, in retrieval order
    pub contexts: Vec<Context>,
}

impl Task {
    /// Create a new task
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        contexts: Vec<Context>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            contexts,
        }
    }

    /// Build a task from its wire record
    #[must_use]
    pub fn from_record(id: impl Into<String>, record: TaskRecord) -> Self {
        Self {
            id: id.into(),
            question: record.question,
            answer: record.answer,
            contexts: record.contexts.into_iter().map(Context::from_record).collect(),
        }
    }
}

/// Baseline and sample runs of the same task, paired for comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPair {
    baseline: Task,
    sample: Task,
}

impl TaskPair {
    /// Pair a baseline task with a sample task
    ///
    /// # Errors
    ///
    /// Returns [`Error::QuestionMismatch`] when the two tasks do not carry
    /// the same question, since they then cannot belong to one comparison.
    pub fn new(baseline: Task, sample: Task) -> Result<Self> {
        if baseline.question != sample.question {
            return Err(Error::QuestionMismatch(baseline.id));
        }
        Ok(Self { baseline, sample })
    }

    /// Task identifier (taken from the baseline run)
    #[must_use]
    pub fn id(&self) -> &str {
        &self.baseline.id
    }

    /// The shared question
    #[must_use]
    pub fn question(&self) -> &str {
        &self.baseline.question
    }

    /// Baseline run
    #[must_use]
    pub fn baseline(&self) -> &Task {
        &self.baseline
    }

    /// Sample run
    #[must_use]
    pub fn sample(&self) -> &Task {
        &self.sample
    }

    /// Contexts retrieved by the baseline run
    #[must_use]
    pub fn baseline_contexts(&self) -> &[Context] {
        &self.baseline.contexts
    }

    /// Contexts retrieved by the sample run
    #[must_use]
    pub fn sample_contexts(&self) -> &[Context] {
        &self.sample.contexts
    }
}

/// A named collection of tasks over a set of source documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset name
    pub name: String,
    /// Source documents the dataset was built from
    pub documents: Vec<String>,
    /// Tasks in the dataset
    pub tasks: Vec<Task>,
}

impl Dataset {
    /// Create a dataset from already-constructed tasks
    #[must_use]
    pub fn new(name: impl Into<String>, documents: Vec<String>, tasks: Vec<Task>) -> Self {
        Self {
            name: name.into(),
            documents,
            tasks,
        }
    }

    /// Build a dataset from its wire record
    #[must_use]
    pub fn from_record(record: DatasetRecord) -> Self {
        let tasks = record
            .tasks
            .into_iter()
            .map(|(id, task)| Task::from_record(id, task))
            .collect();
        Self {
            name: record.name,
            documents: record.documents,
            tasks,
        }
    }

    /// Parse a dataset from a single JSON document
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] when the document does not match the
    /// expected record shape, including missing required fields.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: DatasetRecord = serde_json::from_str(json)?;
        Ok(Self::from_record(record))
    }

    /// Parse a dataset from line-delimited task records
    ///
    /// Each non-empty line holds one task with an inline `ID` field. The
    /// dataset takes the given name and has no document list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] when any line fails to parse.
    pub fn from_jsonl(name: impl Into<String>, jsonl: &str) -> Result<Self> {
        let mut tasks = Vec::new();
        for line in jsonl.lines().filter(|l| !l.trim().is_empty()) {
            let record: TaskLineRecord = serde_json::from_str(line)?;
            tasks.push(Task::from_record(record.id, record.task));
        }
        Ok(Self {
            name: name.into(),
            documents: Vec::new(),
            tasks,
        })
    }

    /// Load a dataset from a file
    ///
    /// Files with a `.jsonl` extension are parsed as line-delimited records,
    /// anything else as a single JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Serialization`] when it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        if path.extension().is_some_and(|ext| ext == "jsonl") {
            let name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("dataset");
            Self::from_jsonl(name, &contents)
        } else {
            Self::from_json(&contents)
        }
    }

    /// Look up a task by id
    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check whether the dataset has no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Pair every task in this (baseline) dataset with its sample counterpart
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTask`] when a baseline task has no sample task
    /// with the same id, and [`Error::QuestionMismatch`] when the paired
    /// tasks disagree on the question.
    pub fn pair_with(&self, sample: &Dataset) -> Result<Vec<TaskPair>> {
        self.tasks
            .iter()
            .map(|baseline_task| {
                let sample_task = sample
                    .task(&baseline_task.id)
                    .ok_or_else(|| Error::MissingTask(baseline_task.id.clone()))?;
                TaskPair::new(baseline_task.clone(), sample_task.clone())
            })
            .collect()
    }
}
