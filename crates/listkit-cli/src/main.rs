//! listkit CLI.

use clap::{ColorChoice, Parser};
use listkit_cli::logging::{LogConfig, LogFormat, init_logging};
use listkit_cli::summary::{print_personalized, print_summary};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputArg};
use crate::commands::{print_json, run_aliases, run_parse};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Parse(args) => {
            let result = run_parse(&args).await;
            let printed = match args.output {
                OutputArg::Json => print_json(&result),
                OutputArg::Table => {
                    print_summary(&args.file, &result, args.preview, args.all_errors);
                    if let Some(template) = &args.template {
                        print_personalized(&result, args.preview, template);
                    }
                    Ok(())
                }
            };
            match printed {
                Ok(()) if result.is_usable() => 0,
                Ok(()) => 1,
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
        Command::Aliases => {
            run_aliases();
            0
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };

    LogConfig::default()
        .with_level(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(args: &[&str]) -> LogConfig {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        log_config_from_cli(&cli)
    }

    #[test]
    fn explicit_level_disables_env_filter() {
        let config = config_for(&[
            "listkit",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-data",
            "--color",
            "never",
            "aliases",
        ]);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.log_data);
        assert!(!config.with_ansi);
    }

    #[test]
    fn defaults_follow_verbosity_and_env() {
        let config = config_for(&["listkit", "aliases"]);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert!(!config.log_data);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn verbose_flag_raises_level() {
        let config = config_for(&["listkit", "-vv", "--log-file", "run.log", "aliases"]);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert_eq!(config.log_file, Some(std::path::PathBuf::from("run.log")));
    }

    #[tokio::test]
    async fn unreadable_file_is_reported_in_result() {
        let cli = Cli::try_parse_from(["listkit", "parse", "/nonexistent/dir/contacts.csv"]).unwrap();
        let Command::Parse(args) = cli.command else {
            panic!("expected parse command");
        };
        let result = run_parse(&args).await;
        assert!(!result.is_usable());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("Failed to read file"));
    }
}
