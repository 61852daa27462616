use crate::adapters::csv_source::read_rows;
use crate::core::engine::AggregationEngine;
use crate::core::report::{Report, ReportSettings};
use crate::core::{ConfigProvider, Pipeline, RawRow, Storage};
use crate::utils::error::Result;
use std::io::Write;

pub const STDOUT_DESTINATION: &str = "stdout";

/// Reads the employee CSV from storage, aggregates it and writes the report
/// either back to storage or to stdout.
pub struct CsvReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CsvReportPipeline<S, C> {
    fn extract(&self) -> Result<Vec<RawRow>> {
        let path = self.config.input_path();
        tracing::debug!("Reading employee data from: {}", path);

        let data = self.storage.read_file(path)?;
        read_rows(data.as_slice())
    }

    fn transform(&self, rows: Vec<RawRow>) -> Result<Report> {
        let mut engine = AggregationEngine::new();
        let outcome = engine.load(rows);

        let settings = ReportSettings::from_config(&self.config);
        tracing::debug!(
            "Building report (tenure threshold {}, spotlight {})",
            settings.tenure_threshold,
            settings.spotlight_department
        );

        Ok(Report::from_engine(&engine, &settings, outcome))
    }

    fn load(&self, report: Report) -> Result<String> {
        let format = self.config.output_format();
        let rendered = report.render(format)?;
        tracing::debug!("Rendered {} report ({} bytes)", format, rendered.len());

        match self.config.output_path() {
            Some(path) => {
                self.storage.write_file(path, &rendered)?;
                Ok(path.to_string())
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&rendered)?;
                stdout.flush()?;
                Ok(STDOUT_DESTINATION.to_string())
            }
        }
    }
}
