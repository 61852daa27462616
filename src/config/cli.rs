use crate::config::{validate_report_settings, OutputFormat, DEFAULT_INPUT_PATH};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "staff-report")]
#[command(about = "Aggregate reports over an employee CSV file")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: String,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Employees with fewer years of service than this are listed as new hires
    #[arg(long, default_value = "4")]
    pub tenure_threshold: u32,

    #[arg(long, default_value = "Marketing")]
    pub spotlight_department: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT_PATH.to_string(),
            output: None,
            format: OutputFormat::Text,
            tenure_threshold: 4,
            spotlight_department: "Marketing".to_string(),
            verbose: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn tenure_threshold(&self) -> u32 {
        self.tenure_threshold
    }

    fn spotlight_department(&self) -> &str {
        &self.spotlight_department
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_report_settings(&self.input, self.tenure_threshold, &self.spotlight_department)?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}
