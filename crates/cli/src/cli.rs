use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::path::{Path, PathBuf};
use std::time::Duration;
use telemetry::LogLevel;

/// Omnisight: a synthetic monitoring backend
///
/// Generates a fleet of services, a log backlog and seed alerts, then keeps
/// them moving on timers the way a live system would. Send SIGUSR1 for an
/// immediate report and SIGUSR2 to start a fresh session.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, value_parser = validate_file)]
    pub conffile: Option<PathBuf>,

    /// Seed for reproducible sessions. Overrides the configuration file.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Stop after this many seconds instead of waiting for Ctrl-C.
    #[arg(short, long, value_parser = parse_secs)]
    pub duration: Option<Duration>,

    /// Seconds between fleet reports.
    #[arg(short, long, default_value = "10", value_parser = parse_secs)]
    pub report_every: Duration,

    /// Only show log lines whose message or service contains this text.
    #[arg(long, default_value = "")]
    pub query: String,

    /// Only show log lines of this level (INFO, WARN, ERROR, DEBUG or ALL).
    #[arg(short, long, default_value = "ALL", value_parser = parse_level)]
    pub level: LevelChoice,

    /// Write the final snapshot as JSON to this file.
    #[arg(long)]
    pub dump: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    pub print_config: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

/// A log level, or `None` for all levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChoice(pub Option<LogLevel>);

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.exists() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}

/// Parse a positive number of seconds.
fn parse_secs(secs: &str) -> Result<Duration, String> {
    let secs: u64 = secs
        .parse()
        .map_err(|_| format!("`{secs}` is not a number of seconds"))?;
    if secs == 0 {
        return Err("Interval must be at least one second".to_string());
    }
    Ok(Duration::from_secs(secs))
}

fn parse_level(level: &str) -> Result<LevelChoice, String> {
    if level.eq_ignore_ascii_case("all") {
        return Ok(LevelChoice(None));
    }
    level
        .parse()
        .map(|level| LevelChoice(Some(level)))
        .map_err(|err| format!("{err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use proptest::prelude::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["omnisight"]).unwrap();
        assert_eq!(cli.report_every, Duration::from_secs(10));
        assert_eq!(cli.level, LevelChoice(None));
        assert!(cli.duration.is_none());
        assert!(cli.query.is_empty());
    }

    #[test]
    fn level_and_seed() {
        let cli =
            Cli::try_parse_from(["omnisight", "--level", "error", "--seed", "9", "-d", "30"])
                .unwrap();
        assert_eq!(cli.level, LevelChoice(Some(LogLevel::Error)));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.duration, Some(Duration::from_secs(30)));
    }

    #[test]
    fn query_is_long_only_and_quiet_stays_available() {
        let cli = Cli::try_parse_from(["omnisight", "--query", "timeout", "-q"]).unwrap();
        assert_eq!(cli.query, "timeout");
        assert_eq!(cli.verbosity.tracing_level_filter(), tracing::level_filters::LevelFilter::WARN);
    }

    #[test]
    fn rejects_unknown_level_and_zero_interval() {
        assert!(Cli::try_parse_from(["omnisight", "--level", "trace"]).is_err());
        assert!(Cli::try_parse_from(["omnisight", "--report-every", "0"]).is_err());
    }

    #[test]
    fn missing_config_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let missing = missing.to_str().unwrap();
        assert!(Cli::try_parse_from(["omnisight", "--conffile", missing]).is_err());
    }

    proptest! {
        #[test]
        fn positive_seconds_parse(secs in 1u64..1_000_000) {
            prop_assert_eq!(parse_secs(&secs.to_string()), Ok(Duration::from_secs(secs)));
        }
    }
}
