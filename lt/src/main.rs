//! ladder - monthly bouldering ladder tracker
//!
//! CLI entry point: reads config, opens the store, and runs one subcommand.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use laddertrack::catalog::StaticCatalog;
use laddertrack::cli::{Cli, Command, OutputFormat};
use laddertrack::codec::{DecodeError, ProgressCodec};
use laddertrack::config::Config;
use laddertrack::domain::MonthKey;
use laddertrack::migrate::LegacyMigration;
use laddertrack::tracker::Tracker;
use laddertrack::view::{ProblemFilter, areas, ladder_grid};
use laddertrack::share;
use progressstore::ProgressStore;

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("laddertrack")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Write to log file, not stdout/stderr
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("laddertrack.log"))
        .context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let catalog = config.load_catalog()?;
    let store = ProgressStore::open(&config.storage.path).context("Failed to open progress store")?;
    let codec = ProgressCodec::with_problem_count(catalog, config.codec.problems_per_month);
    let tracker = Tracker::new(store, codec);

    let month = cli.month_or_current();
    info!(%month, command = ?cli.command, "ladder starting");

    match cli.command {
        Command::List { area, status, format } => {
            let ladder = require_ladder(&tracker, month)?;
            let record = tracker.record(month)?;
            let pairs = record.pair_with(&ladder);
            let filter = ProblemFilter { area, status };
            let shown = filter.apply(&pairs);

            match format {
                OutputFormat::Json => {
                    let rows: Vec<serde_json::Value> = shown
                        .iter()
                        .map(|(p, s)| {
                            serde_json::json!({
                                "id": p.id,
                                "name": p.display_name,
                                "area": p.area,
                                "color": p.color,
                                "status": s.to_string(),
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                }
                OutputFormat::Text => {
                    if shown.is_empty() {
                        println!("No problems match the current filters.");
                    }
                    for (problem, status) in shown {
                        let label = if status.is_completed() {
                            status.label().green()
                        } else {
                            status.label().dimmed()
                        };
                        println!(
                            "{:>3}  {:<14} {:<14} {}",
                            problem.id,
                            problem.display_name,
                            format!("({})", problem.area).dimmed(),
                            label
                        );
                    }
                }
            }
        }
        Command::Areas => {
            let ladder = require_ladder(&tracker, month)?;
            for area in areas(&ladder) {
                println!("{}", area);
            }
        }
        Command::Set { id, status } => {
            if !status.is_completed() {
                return Err(eyre::eyre!("Choose an attempt tier; repeat the current one to clear it"));
            }
            let now = tracker.toggle(month, id, status)?;
            if now.is_completed() {
                println!("{} Problem {} marked {}", "✓".green(), id, now.to_string().cyan());
            } else {
                println!("{} Problem {} cleared", "✓".green(), id);
            }
        }
        Command::Score { format } => {
            require_ladder(&tracker, month)?;
            let summary = tracker.score(month)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                OutputFormat::Text => {
                    println!("Month: {}", month.to_string().cyan());
                    println!("  Points: {}/{}", summary.total.to_string().green(), summary.max);
                    println!("  Completed: {}/{}", summary.completed, summary.problem_count);
                    println!("  Bonus: {}", if summary.bonus_completed { "done" } else { "open" });
                }
            }
        }
        Command::Grid => {
            let ladder = require_ladder(&tracker, month)?;
            let record = tracker.record(month)?;
            let cells = ladder_grid(&ladder, &record);
            for row in cells.chunks(5) {
                let line: Vec<String> = row
                    .iter()
                    .map(|cell| {
                        let id = if cell.bonus { "B".to_string() } else { cell.id.to_string() };
                        let text = format!("[{:>2}]", id);
                        if cell.completed() {
                            text.green().bold().to_string()
                        } else {
                            text.dimmed().to_string()
                        }
                    })
                    .collect();
                println!("{}", line.join(" "));
            }
        }
        Command::Share => {
            let code = tracker.share(month)?;
            println!("{}", code.as_str().cyan());
            println!("{}", share::share_url(&config.share.base_url, &code));
        }
        Command::Import { code } => {
            let decoded = tracker.import(share::extract_code(&code)).inspect_err(|e| {
                if let Some(decode) = e.downcast_ref::<DecodeError>() {
                    eprintln!("{} {}", "✗".red(), decode.user_message());
                }
            })?;
            println!(
                "{} Imported {} completed problems for {}",
                "✓".green(),
                decoded.record.len(),
                decoded.month.to_string().cyan()
            );
        }
        Command::Migrate { file } => {
            let content =
                fs::read_to_string(&file).context(format!("Failed to read legacy progress {}", file.display()))?;
            let legacy = LegacyMigration::parse(&content).context("Legacy progress is not a JSON object")?;
            let report = tracker.migrate_legacy(month, &legacy, &config.legacy_migration()?)?;
            println!(
                "{} Migrated {} completed problems into {}",
                "✓".green(),
                report.migrated,
                month.to_string().cyan()
            );
            for id in &report.unknown_ids {
                println!("  skipped unknown problem id {}", id.yellow());
            }
            for (id, value) in &report.unreadable {
                println!("  skipped {} with unreadable status {}", id.yellow(), value);
            }
        }
        Command::Reset => {
            if tracker.reset(month)? {
                println!("{} Cleared progress for {}", "✓".green(), month);
            } else {
                println!("No saved progress for {}", month);
            }
        }
        Command::Months => {
            let months = tracker.months()?;
            if months.is_empty() {
                println!("No saved progress");
            }
            for m in months {
                let summary = tracker.score(m)?;
                println!("{}  {}/{} points", m, summary.total, summary.max);
            }
        }
    }

    Ok(())
}

/// The month's ladder, or an error naming the month
fn require_ladder(tracker: &Tracker<StaticCatalog>, month: MonthKey) -> Result<Vec<laddertrack::Problem>> {
    let ladder = tracker.ladder(month);
    if ladder.is_empty() {
        return Err(eyre::eyre!("No ladder is defined for {}", month));
    }
    Ok(ladder)
}
