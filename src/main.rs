use anyhow::Result;
use clap::Parser;
use symbolmap::cli::{Cli, Commands};
use symbolmap::commands::{self, AnalyzeConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Analyze {
            extracts,
            format,
            output,
            config,
        } => commands::handle_analyze(AnalyzeConfig {
            extracts,
            format,
            output,
            config,
        }),
        Commands::Init { force } => commands::init_config(force),
        Commands::Archetypes => commands::list_archetypes(),
    }
}

// Pure function to map -v occurrences to a default filter directive
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

// RUST_LOG wins over -v when set; logs stay on stderr so stdout carries only results
fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("{}", logging_init_warning(e));
    }
}

fn logging_init_warning(error: impl std::fmt::Display) -> String {
    format!("Warning: failed to initialize logging: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(7), "trace");
    }

    #[test]
    fn test_logging_init_failure_is_reported() {
        init_logging(0);
        let second = tracing_subscriber::fmt().try_init();
        let error = second.expect_err("a global subscriber is already set");
        assert!(logging_init_warning(error).starts_with("Warning: failed to initialize logging"));
    }
}
