//! Command-line configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::api::DEFAULT_BASE_URL;
use crate::state::{DEFAULT_TICK_MS, Theme};

/// Skycast - multi-day weather forecasts in the terminal
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "skycast")]
#[command(version, about = "Multi-day weather forecasts with animated condition sprites")]
pub struct Args {
    /// City to fetch on start
    #[arg(long, short)]
    pub city: Option<String>,

    /// Origin of the forecast service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP timeout in seconds (0 disables the timeout)
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Animation tick in milliseconds
    #[arg(
        long,
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(10..)
    )]
    pub tick_ms: u64,

    /// Refresh the last city every N seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_secs: Option<u64>,

    /// Start in dark theme
    #[arg(long)]
    pub dark: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "skycast_tui=trace" (RUST_LOG wins)
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub initial_city: Option<String>,
    pub base_url: String,
    pub http_timeout: Option<Duration>,
    pub tick_interval: Duration,
    pub refresh_interval: Option<Duration>,
    pub theme: Theme,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        Self {
            initial_city: args.city.filter(|city| !city.trim().is_empty()),
            base_url: args.base_url,
            http_timeout: (args.timeout_secs > 0).then(|| Duration::from_secs(args.timeout_secs)),
            tick_interval: Duration::from_millis(args.tick_ms),
            refresh_interval: args.refresh_secs.map(Duration::from_secs),
            theme: if args.dark { Theme::Dark } else { Theme::Light },
            log_file: args.log_file,
            log_filter: args.log_filter,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Args::parse_from(["skycast"]).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        let argv = std::iter::once("skycast").chain(args.iter().copied());
        Args::try_parse_from(argv).expect("valid args").into()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.initial_city, None);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.http_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.tick_interval, Duration::from_millis(100));
        assert_eq!(config.refresh_interval, None);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.log_file, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&[
            "-c",
            "Paris",
            "--base-url",
            "http://weather.internal:9000",
            "--timeout-secs",
            "0",
            "--tick-ms",
            "50",
            "--refresh-secs",
            "600",
            "--dark",
            "--log-file",
            "/tmp/skycast.log",
            "--log-filter",
            "debug",
        ]);

        assert_eq!(config.initial_city.as_deref(), Some("Paris"));
        assert_eq!(config.base_url, "http://weather.internal:9000");
        assert_eq!(config.http_timeout, None);
        assert_eq!(config.tick_interval, Duration::from_millis(50));
        assert_eq!(config.refresh_interval, Some(Duration::from_secs(600)));
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/skycast.log")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_city_is_dropped() {
        assert_eq!(parse(&["--city", "  "]).initial_city, None);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Args::try_parse_from(["skycast", "--tick-ms", "0"]).is_err());
        assert!(Args::try_parse_from(["skycast", "--refresh-secs", "0"]).is_err());
        assert!(Args::try_parse_from(["skycast", "--timeout-secs", "soon"]).is_err());
    }
}
