use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. An explicit level wins; `verbose`
/// alone means debug for this crate and info for dependencies.
pub fn filter_directive(verbose: bool, level: Option<&str>) -> String {
    match (level, verbose) {
        (Some(level), false) => format!("staff_report={}", level),
        (Some(level), true) => format!("staff_report={},info", level),
        (None, true) => "staff_report=debug,info".to_string(),
        (None, false) => "staff_report=info".to_string(),
    }
}

fn env_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, level)))
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(env_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON lines on stderr, for runs whose logs are collected by another tool.
pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(env_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(filter_directive(false, None), "staff_report=info");
        assert_eq!(filter_directive(true, None), "staff_report=debug,info");
    }

    #[test]
    fn test_configured_level_is_applied() {
        assert_eq!(filter_directive(false, Some("warn")), "staff_report=warn");
        assert_eq!(filter_directive(false, Some("error")), "staff_report=error");
        assert_eq!(filter_directive(true, Some("trace")), "staff_report=trace,info");
    }

    #[test]
    fn test_directives_parse_as_filters() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            let directive = filter_directive(false, Some(level));
            assert!(EnvFilter::try_new(&directive).is_ok(), "{directive}");
        }
    }
}
