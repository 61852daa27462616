#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_INPUT_PATH: &str = "employee_data.csv";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Checks shared by every config source.
pub(crate) fn validate_report_settings(
    input_path: &str,
    tenure_threshold: u32,
    spotlight_department: &str,
) -> crate::utils::error::Result<()> {
    use crate::utils::validation::{
        validate_file_extension, validate_non_empty_string, validate_path, validate_range,
    };

    validate_path("input.path", input_path)?;
    validate_file_extension("input.path", input_path, &["csv"])?;
    validate_range("report.tenure_threshold", tenure_threshold, 1, 100)?;
    validate_non_empty_string("report.spotlight_department", spotlight_department)?;
    Ok(())
}
