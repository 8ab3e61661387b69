//! Writes one JSON table per grade.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use kanjimap_core::grade::{CharFailure, GradeBuilder, GradeMap, KanjiSource};
use kanjimap_core::retry::RetryStrategy;
use kanjimap_core::settings::ExportSettings;
use tracing::{error, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct GradeFailure {
    pub grade: u8,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ExportSummary {
    pub written: Vec<PathBuf>,
    pub failed_grades: Vec<GradeFailure>,
    /// Characters left out of otherwise written grades.
    pub excluded: Vec<(u8, CharFailure)>,
    pub cancelled: bool,
}

impl ExportSummary {
    pub fn is_success(&self) -> bool {
        self.failed_grades.is_empty() && self.excluded.is_empty() && !self.cancelled
    }
}

/// Serialize `map` as indented JSON (non-ASCII kept verbatim) and move it
/// into place at `path`.
pub fn write_grade_map(map: &GradeMap, path: &Path) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(map)?;
    let mut tmp = OsString::from(path.as_os_str());
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    let result = fs::write(&tmp, json).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result.map_err(ExportError::from)
}

/// Build and write every grade in order.
///
/// A grade whose character list cannot be fetched, or whose file cannot be
/// written, is recorded and skipped; later grades still run. Cancellation
/// stops the run without writing the interrupted grade.
pub fn export_grades<S, R>(
    builder: &mut GradeBuilder<'_, S, R>,
    grades: &[u8],
    output_dir: &Path,
    export: &ExportSettings,
) -> ExportSummary
where
    S: KanjiSource + ?Sized,
    R: RetryStrategy,
{
    let mut summary = ExportSummary::default();

    for &grade in grades {
        let report = match builder.build(grade) {
            Ok(report) => report,
            Err(e) => {
                error!(grade, error = %e, "grade failed");
                summary.failed_grades.push(GradeFailure {
                    grade,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if report.cancelled {
            warn!(grade, "run cancelled; partial grade not written");
            summary.cancelled = true;
            break;
        }

        let path = output_dir.join(export.file_name(grade));
        match write_grade_map(&report.map, &path) {
            Ok(()) => {
                info!(grade, path = %path.display(), entries = report.map.len(), "wrote grade");
                summary.written.push(path);
            }
            Err(e) => {
                error!(grade, path = %path.display(), error = %e, "write failed");
                summary.failed_grades.push(GradeFailure {
                    grade,
                    reason: format!("writing {}: {e}", path.display()),
                });
            }
        }

        summary
            .excluded
            .extend(report.failures.into_iter().map(|f| (grade, f)));
    }

    summary
}
