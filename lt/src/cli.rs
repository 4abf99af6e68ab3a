//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{CompletionStatus, MonthKey};
use crate::view::{AreaFilter, StatusFilter};

/// ladder - monthly bouldering ladder tracker
#[derive(Parser, Debug)]
#[command(
    name = "ladder",
    author,
    version,
    about = "Track, score and share your monthly bouldering ladder",
    after_help = "Logs are written to: ~/.local/share/laddertrack/logs/laddertrack.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Month to work on (YYYY-MM); defaults to the current month
    #[arg(short, long, global = true)]
    pub month: Option<MonthKey>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The month named on the command line, or the current one
    pub fn month_or_current(&self) -> MonthKey {
        self.month.unwrap_or_else(MonthKey::current)
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the month's problems
    List {
        /// Only problems in this area (or "all")
        #[arg(short, long, default_value = "all")]
        area: AreaFilter,

        /// Only problems with this status: all, completed, not-completed, or a tier
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List the month's areas
    Areas,

    /// Toggle a problem's status; repeating the current status clears it
    Set {
        /// Problem id
        #[arg(required = true)]
        id: u32,

        /// first-attempt, second-attempt, third-attempt or fourth-or-more (1-4 also work)
        #[arg(required = true)]
        status: CompletionStatus,
    },

    /// Show the month's score
    Score {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the completion grid
    Grid,

    /// Print the share code and link for the month
    Share,

    /// Replace a month's progress with a share code or link
    Import {
        /// Share code, `#code`, or a full share link
        #[arg(required = true)]
        code: String,
    },

    /// Import progress saved by the old two-state tracker
    Migrate {
        /// JSON file mapping problem id to not-started, in-progress or completed
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Clear the month's saved progress
    Reset,

    /// List months with saved progress
    Months,
}

/// Output format for list/score commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_list_defaults() {
        let cli = Cli::parse_from(["ladder", "list"]);
        if let Command::List { area, status, format } = cli.command {
            assert_eq!(area, AreaFilter::All);
            assert_eq!(status, StatusFilter::All);
            assert_eq!(format, OutputFormat::Text);
        } else {
            panic!("Expected List command");
        }
        assert!(cli.month.is_none());
    }

    #[test]
    fn test_cli_parse_list_filters() {
        let cli = Cli::parse_from(["ladder", "list", "--area", "Cave", "--status", "completed"]);
        assert!(matches!(
            cli.command,
            Command::List {
                status: StatusFilter::Completed,
                ..
            }
        ));
    }

    #[test]
    fn test_cli_parse_set() {
        let cli = Cli::parse_from(["ladder", "--month", "2026-02", "set", "3", "second-attempt"]);
        assert_eq!(cli.month_or_current().to_string(), "2026-02");
        assert!(matches!(
            cli.command,
            Command::Set {
                id: 3,
                status: CompletionStatus::SecondAttempt
            }
        ));
    }

    #[test]
    fn test_cli_month_is_global() {
        let cli = Cli::parse_from(["ladder", "score", "-m", "2026-03"]);
        assert_eq!(cli.month.unwrap().to_string(), "2026-03");
    }

    #[test]
    fn test_cli_rejects_bad_month() {
        assert!(Cli::try_parse_from(["ladder", "--month", "2026-13", "grid"]).is_err());
    }

    #[test]
    fn test_cli_rejects_bad_status() {
        assert!(Cli::try_parse_from(["ladder", "set", "3", "completed"]).is_err());
    }

    #[test]
    fn test_cli_parse_import() {
        let cli = Cli::parse_from(["ladder", "import", "https://ladder.local/#3176a2710000000000"]);
        if let Command::Import { code } = cli.command {
            assert_eq!(code, "https://ladder.local/#3176a2710000000000");
        } else {
            panic!("Expected Import command");
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!("table".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["ladder", "-c", "/path/to/config.yml", "months"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.yml")));
    }
}
