//! JSON export of run results

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;
use crate::report::RunReport;

/// Writes run results to timestamped JSON files
pub struct JsonExporter;

impl JsonExporter {
    /// Export the report's result sets under `dir`
    ///
    /// Successes are always written; failures only when non-empty. Files
    /// are named with the current local time for uniqueness. Returns the
    /// paths written.
    pub fn export(report: &RunReport, dir: &Path) -> Result<Vec<PathBuf>> {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let mut written = Vec::new();

        let success_path = dir.join(format!("successful_requests_{stamp}.json"));
        let file = File::create(&success_path)?;
        serde_json::to_writer_pretty(file, &report.successes)?;
        written.push(success_path);

        if !report.failures.is_empty() {
            let failure_path = dir.join(format!("failed_requests_{stamp}.json"));
            let file = File::create(&failure_path)?;
            serde_json::to_writer_pretty(file, &report.failures)?;
            written.push(failure_path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{RequestFailure, RequestOutcome, RequestSuccess};
    use std::time::Duration;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("translate-bench-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample_report(failures: usize) -> RunReport {
        let RequestOutcome::Success(success) =
            RequestOutcome::success(0, 200, serde_json::json!({"translated": "ok"}))
        else {
            unreachable!()
        };

        let failures = (1..=failures)
            .map(|i| {
                let RequestOutcome::Failure(f) = RequestOutcome::failure(i, "refused") else {
                    unreachable!()
                };
                f
            })
            .collect();

        RunReport {
            successes: vec![success],
            failures,
            total_elapsed: Duration::from_secs(1),
            batches_executed: 1,
        }
    }

    #[test]
    fn test_export_writes_success_file() {
        let dir = temp_dir("success-only");
        let written = JsonExporter::export(&sample_report(0), &dir).unwrap();

        assert_eq!(written.len(), 1);
        let data = std::fs::read_to_string(&written[0]).unwrap();
        let parsed: Vec<RequestSuccess> = serde_json::from_str(&data).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].status, 200);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_export_writes_failure_file_when_non_empty() {
        let dir = temp_dir("with-failures");
        let written = JsonExporter::export(&sample_report(2), &dir).unwrap();

        assert_eq!(written.len(), 2);
        assert!(written[1]
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("failed_requests_"));

        let data = std::fs::read_to_string(&written[1]).unwrap();
        let parsed: Vec<RequestFailure> = serde_json::from_str(&data).unwrap();
        assert_eq!(parsed.len(), 2);

        std::fs::remove_dir_all(&dir).ok();
    }
}
