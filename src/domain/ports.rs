use crate::config::OutputFormat;
use crate::core::report::Report;
use crate::domain::model::RawRow;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn tenure_threshold(&self) -> u32;
    fn spotlight_department(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<RawRow>>;
    fn transform(&self, rows: Vec<RawRow>) -> Result<Report>;
    fn load(&self, report: Report) -> Result<String>;
}
