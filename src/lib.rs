pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{OutputFormat, TomlConfig};

pub use adapters::LocalStorage;
pub use self::core::{
    engine::{AggregationEngine, LoadOutcome, RowError},
    pipeline::CsvReportPipeline,
    report::{Report, ReportSettings},
    runner::ReportRunner,
};
pub use domain::{department::DepartmentGroup, model::EmployeeRecord};
pub use utils::error::{ReportError, Result};
