use crate::core::Pipeline;
use crate::utils::error::{ReportError, Result};

pub struct ReportRunner<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportRunner<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract, aggregate and publish. Row-level problems are reported on
    /// stderr and do not stop the run; anything else is returned.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Loading employee data...");
        let rows = self.pipeline.extract()?;
        tracing::info!("Read {} rows (header included)", rows.len());

        let report = self.pipeline.transform(rows)?;
        let diagnostics = &report.diagnostics;
        for row_error in &diagnostics.row_errors {
            eprintln!("{}", ReportError::from(row_error.clone()).user_friendly_message());
        }
        tracing::info!(
            "Aggregated {} employees across {} departments",
            report.summary.total_employees,
            report.summary.total_departments
        );
        if !diagnostics.row_errors.is_empty() || diagnostics.skipped_short > 0 {
            tracing::warn!(
                "Skipped {} unparseable and {} short rows",
                diagnostics.row_errors.len(),
                diagnostics.skipped_short
            );
        }

        let destination = self.pipeline.load(report)?;
        tracing::info!("Report written to: {}", destination);

        Ok(destination)
    }
}
