use crate::core::validator::Validator;
use crate::domain::ports::DocumentSource;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub checked: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Checks files one after another, writing one status line per file.
pub struct LintRunner<S: DocumentSource> {
    validator: Validator<S>,
}

impl<S: DocumentSource> LintRunner<S> {
    pub fn new(validator: Validator<S>) -> Self {
        Self { validator }
    }

    pub fn run<W: Write>(&self, files: &[PathBuf], report: &mut W) -> std::io::Result<RunSummary> {
        let mut summary = RunSummary::default();

        for file in files {
            summary.checked += 1;
            match self.validator.validate_file(file) {
                Ok(_) => {
                    writeln!(report, "{}: ok", file.display())?;
                }
                Err(e) => {
                    tracing::debug!("{} failed ({:?})", file.display(), e.kind());
                    summary.failed += 1;
                    writeln!(report, "{}: FAIL: {}", file.display(), e)?;
                }
            }
        }

        tracing::info!("checked {} files, {} failed", summary.checked, summary.failed);
        Ok(summary)
    }
}
