use anyhow::Context;
use clap::Parser;
use staff_report::domain::ports::ConfigProvider;
use staff_report::utils::{logger, validation::Validate};
use staff_report::{CsvReportPipeline, LocalStorage, ReportRunner, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Employee reports driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "staff-report.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the input CSV from the config
    #[arg(long)]
    input: Option<String>,

    /// Dry run - show what would be processed without reading any data
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger(args.verbose, config.log_level());
    } else {
        logger::init_cli_logger(args.verbose, config.log_level());
    }

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(input) = args.input {
        tracing::info!("🔧 Input overridden to: {}", input);
        config.input.path = input;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No data will be read");
        return perform_dry_run(&config);
    }

    let pipeline = CsvReportPipeline::new(LocalStorage::default(), config);
    let runner = ReportRunner::new(pipeline);

    if let Err(e) = runner.run() {
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

    Ok(())
}

fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    let input = config.input_path();
    let metadata = std::fs::metadata(input)
        .with_context(|| format!("input file '{}' is not readable", input))?;

    println!("📋 Input: {} ({} bytes)", input, metadata.len());
    println!("📋 Format: {}", config.output_format());
    println!("📋 Output: {}", config.output_path().unwrap_or("stdout"));
    println!("📋 Tenure threshold: {} years", config.tenure_threshold());
    println!("📋 Spotlight department: {}", config.spotlight_department());
    Ok(())
}
