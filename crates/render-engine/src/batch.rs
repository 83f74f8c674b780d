//! Batch driver: render every screenshot in the inputs directory.
//!
//! Jobs run on tokio's blocking pool, at most `worker_count` at a time. A
//! job that cannot decode its screenshot or logo fails on its own and the
//! rest carry on. Output failures abort the run: jobs not yet started are
//! skipped and the error is returned once in-flight jobs finish.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use modshot_catalog::identifier::has_image_extension;
use modshot_common::error::{ModshotError, ModshotResult};

use crate::pipeline::Renderer;

/// What happened to one input file.
#[derive(Debug)]
pub enum JobStatus {
    Rendered { output: PathBuf },
    Failed { error: ModshotError },
    Skipped,
}

/// Outcome of one job.
#[derive(Debug)]
pub struct JobOutcome {
    pub input: PathBuf,
    pub status: JobStatus,
}

/// Aggregate result of a run, ordered by input path.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<JobOutcome>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn rendered(&self) -> usize {
        self.count(|s| matches!(s, JobStatus::Rendered { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, JobStatus::Failed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, JobStatus::Skipped))
    }

    pub fn is_success(&self) -> bool {
        self.rendered() == self.total()
    }

    /// Failed jobs with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &ModshotError)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            JobStatus::Failed { error } => Some((o.input.as_path(), error)),
            _ => None,
        })
    }

    fn count(&self, pred: impl Fn(&JobStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }

    /// Remove and return the first run-aborting error, if any.
    fn take_fatal(&mut self) -> Option<ModshotError> {
        let index = self.outcomes.iter().position(
            |o| matches!(&o.status, JobStatus::Failed { error } if error.is_fatal()),
        )?;
        match std::mem::replace(&mut self.outcomes[index].status, JobStatus::Skipped) {
            JobStatus::Failed { error } => Some(error),
            _ => None,
        }
    }
}

/// Screenshots in `dir` (not recursive), sorted by path.
pub fn list_inputs(dir: &Path) -> ModshotResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| ModshotError::Directory {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut inputs = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && has_image_extension(&path) {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Render every screenshot in the inputs directory.
///
/// Returns the report when no output failure occurred, even if some jobs
/// failed; check [`BatchReport::is_success`].
pub async fn run_batch(renderer: Arc<Renderer>) -> ModshotResult<BatchReport> {
    let inputs = list_inputs(&renderer.config().inputs_dir)?;
    let workers = renderer.config().worker_count();
    tracing::info!(screenshots = inputs.len(), workers, "Starting batch");

    let semaphore = Arc::new(Semaphore::new(workers));
    let abort = Arc::new(AtomicBool::new(false));
    let mut jobs = JoinSet::new();
    let mut report = BatchReport::default();

    for input in inputs {
        let permit = semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| ModshotError::Other(e.into()))?;

        if abort.load(Ordering::SeqCst) {
            report.outcomes.push(JobOutcome {
                input,
                status: JobStatus::Skipped,
            });
            continue;
        }

        let renderer = Arc::clone(&renderer);
        let abort = Arc::clone(&abort);
        jobs.spawn_blocking(move || {
            let _permit = permit;
            let status = run_job(&renderer, &input);
            if let JobStatus::Failed { error } = &status {
                if error.is_fatal() {
                    abort.store(true, Ordering::SeqCst);
                }
            }
            JobOutcome { input, status }
        });
    }

    while let Some(joined) = jobs.join_next().await {
        let outcome = joined.map_err(|e| ModshotError::Other(e.into()))?;
        report.outcomes.push(outcome);
    }
    report.outcomes.sort_by(|a, b| a.input.cmp(&b.input));

    tracing::info!(
        rendered = report.rendered(),
        failed = report.failed(),
        skipped = report.skipped(),
        "Batch finished"
    );

    match report.take_fatal() {
        Some(error) => Err(error),
        None => Ok(report),
    }
}

fn run_job(renderer: &Renderer, input: &Path) -> JobStatus {
    let result = catch_unwind(AssertUnwindSafe(|| renderer.process_file(input)))
        .unwrap_or_else(|_| {
            Err(ModshotError::Other(anyhow::anyhow!(
                "rendering panicked for {}",
                input.display()
            )))
        });

    match result {
        Ok(output) => JobStatus::Rendered { output },
        Err(error) => {
            let input = renderer.config().display_path(input);
            if error.is_fatal() {
                tracing::error!(input = %input, error = %error, "Aborting run");
            } else {
                tracing::error!(input = %input, error = %error, "Screenshot failed");
            }
            JobStatus::Failed { error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_inputs_filters_and_sorts() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["b2.png", "a1.PNG", "notes.txt", "c3.jpg"] {
            std::fs::write(tmp.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(tmp.path().join("nested.png")).unwrap();

        let inputs = list_inputs(tmp.path()).unwrap();
        let names: Vec<_> = inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a1.PNG", "b2.png"]);
    }

    #[test]
    fn test_missing_inputs_dir_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = list_inputs(&tmp.path().join("absent")).unwrap_err();
        assert!(matches!(err, ModshotError::Directory { .. }));
    }

    #[test]
    fn test_report_counts() {
        let mut report = BatchReport::default();
        report.outcomes.push(JobOutcome {
            input: "a1.png".into(),
            status: JobStatus::Rendered {
                output: "out/a1.png".into(),
            },
        });
        report.outcomes.push(JobOutcome {
            input: "b1.png".into(),
            status: JobStatus::Skipped,
        });
        report.outcomes.push(JobOutcome {
            input: "c1.png".into(),
            status: JobStatus::Failed {
                error: ModshotError::Output {
                    path: "out/c1.png".into(),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                },
            },
        });
        assert_eq!(report.total(), 3);
        assert_eq!(report.rendered(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 1);
        assert!(!report.is_success());

        let fatal = report.take_fatal().unwrap();
        assert!(fatal.is_fatal());
        assert_eq!(report.failed(), 0);
    }
}
