use clap::Parser;
use staff_report::utils::{logger, validation::Validate};
use staff_report::{CliConfig, CsvReportPipeline, LocalStorage, ReportRunner};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose, None);
    } else {
        logger::init_cli_logger(config.verbose, None);
    }

    tracing::info!("Starting staff-report");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let pipeline = CsvReportPipeline::new(LocalStorage::default(), config);
    let runner = ReportRunner::new(pipeline);

    match runner.run() {
        Ok(destination) => {
            tracing::info!("✅ Analysis completed, report sent to {}", destination);
        }
        Err(e) => {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("{}", e.user_friendly_message());
            eprintln!("{}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
