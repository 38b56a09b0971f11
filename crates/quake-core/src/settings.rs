use clap::Parser;
use std::path::PathBuf;

/// Default log file name, looked up in the working directory.
pub const DEFAULT_LOG_PATH: &str = "qgames.log.txt";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Parse a Quake 3 Arena server log into per-game statistics and a kill ranking
#[derive(Parser, Debug, Clone)]
#[command(
    name = "quake-parser",
    about = "Parse a Quake 3 Arena server log into per-game statistics and a kill ranking",
    version
)]
pub struct Settings {
    /// Server log file to parse
    #[arg(default_value = DEFAULT_LOG_PATH)]
    pub log_path: PathBuf,

    /// Write the JSON report to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// JSON indent width in spaces (0 for compact output)
    #[arg(long, default_value = "4", value_parser = clap::value_parser!(u8).range(0..=8))]
    pub indent: u8,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::apply_overrides(Settings::parse_from(args))
    }

    /// `--debug` overrides log level.
    fn apply_overrides(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::parse_from(["quake-parser"]);

        assert_eq!(settings.log_path, PathBuf::from("qgames.log.txt"));
        assert!(settings.output.is_none());
        assert_eq!(settings.indent, 4);
        assert_eq!(settings.log_level, "INFO");
        assert!(!settings.debug);
    }

    #[test]
    fn test_settings_cli_log_path() {
        let settings = Settings::parse_from(["quake-parser", "/var/log/games.log"]);
        assert_eq!(settings.log_path, PathBuf::from("/var/log/games.log"));
    }

    #[test]
    fn test_settings_cli_output() {
        let settings = Settings::parse_from(["quake-parser", "--output", "/tmp/report.json"]);
        assert_eq!(settings.output, Some(PathBuf::from("/tmp/report.json")));

        let settings = Settings::parse_from(["quake-parser", "-o", "out.json"]);
        assert_eq!(settings.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_settings_cli_indent() {
        let settings = Settings::parse_from(["quake-parser", "--indent", "0"]);
        assert_eq!(settings.indent, 0);
    }

    #[test]
    fn test_settings_cli_indent_out_of_range_rejected() {
        let result = Settings::try_parse_from(["quake-parser", "--indent", "9"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_cli_log_level_validated() {
        let result = Settings::try_parse_from(["quake-parser", "--log-level", "VERBOSE"]);
        assert!(result.is_err());

        let settings = Settings::parse_from(["quake-parser", "--log-level", "WARNING"]);
        assert_eq!(settings.log_level, "WARNING");
    }

    #[test]
    fn test_load_from_args_debug_overrides_log_level() {
        let settings =
            Settings::load_from_args(["quake-parser", "--log-level", "ERROR", "--debug"]);
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_load_from_args_keeps_log_level_without_debug() {
        let settings = Settings::load_from_args(["quake-parser", "--log-level", "ERROR"]);
        assert_eq!(settings.log_level, "ERROR");
    }

    #[test]
    fn test_command_definition_is_valid() {
        Settings::command().debug_assert();
    }
}
