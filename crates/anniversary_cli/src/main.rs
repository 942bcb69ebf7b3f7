//! Terminal front end for the anniversary tracker.
//!
//! # Responsibility
//! - Render the same snapshot the app screen shows, as text or JSON.
//! - Edit and reset the stored anniversary against the configured store.
//! - Double as a smoke check for `anniversary_core` wiring.

use anniversary_core::db::open_db;
use anniversary_core::service::overview::DEVELOPER_CONSOLE_LABEL;
use anniversary_core::{
    core_version, format_long_date, init_logging, ping, AnniversaryOverview, AnniversaryService,
    AnniversaryTimestamp, Clock, CoreConfig, FixedClock, SqliteSettingsRepository, SystemClock,
};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

type CliService<'conn> = AnniversaryService<SqliteSettingsRepository<'conn>, Box<dyn Clock>>;

#[derive(Debug, Parser)]
#[command(name = "anniversary", version, about = "Days since (or until) your anniversary")]
struct Cli {
    /// SQLite store path; overrides ANNIVERSARY_DB_PATH.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// IANA time zone for day boundaries; overrides ANNIVERSARY_TZ.
    #[arg(long, global = true)]
    tz: Option<String>,

    /// Treat this RFC 3339 instant as "now".
    #[arg(long, global = true)]
    now: Option<DateTime<Utc>>,

    /// Absolute directory for rolling log files. Logging is off without it.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the day counter (default).
    Show {
        /// Print the snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Set the anniversary to local midnight of DATE (YYYY-MM-DD).
    Set { date: NaiveDate },
    /// Reset the anniversary to now. Requires the developer console.
    Reset {
        /// Reset even while the developer console is locked.
        #[arg(long)]
        force: bool,
    },
    /// Print core linkage information.
    Ping,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CoreConfig::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(tz) = cli.tz {
        config.time_zone = tz;
    }
    if let Some(log_dir) = &cli.log_dir {
        let log_dir = log_dir
            .to_str()
            .context("log directory must be valid UTF-8")?;
        init_logging(&config.log_level, log_dir).context("failed to initialize logging")?;
    }

    let clock: Box<dyn Clock> = match cli.now {
        Some(instant) => Box::new(FixedClock::new(instant)),
        None => Box::new(SystemClock),
    };

    match cli.command.unwrap_or(Command::Show { json: false }) {
        Command::Ping => {
            println!("anniversary_core ping={}", ping());
            println!("anniversary_core version={}", core_version());
            Ok(())
        }
        Command::Show { json } => {
            let overview = with_service(&config, clock, |service| Ok(service.overview()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&overview)?);
            } else {
                print_overview(&overview);
            }
            Ok(())
        }
        Command::Set { date } => {
            let stored = with_service(&config, clock, |service| {
                let midnight = service
                    .calendar()
                    .start_of_day(date)
                    .with_context(|| format!("{date} has no local midnight"))?;
                service.set(AnniversaryTimestamp::new(midnight))?;
                Ok(service.get())
            })?;
            println!("Jahrestag gespeichert: {}", format_long_date(date));
            println!("{}", stored.epoch_seconds());
            Ok(())
        }
        Command::Reset { force } => {
            let (label, stored) = with_service(&config, clock, |service| {
                let overview = service.overview();
                if !force && !overview.developer_console_unlocked {
                    bail!("developer console is locked; pass --force to reset anyway");
                }
                Ok((overview.reset_action_label, service.reset()?))
            })?;
            println!("{label}: {stored}");
            Ok(())
        }
    }
}

fn with_service<T>(
    config: &CoreConfig,
    clock: Box<dyn Clock>,
    f: impl FnOnce(&mut CliService<'_>) -> Result<T>,
) -> Result<T> {
    let calendar = config.calendar()?;
    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open {}", config.db_path.display()))?;
    let mut service =
        AnniversaryService::load(SqliteSettingsRepository::new(&conn), clock, calendar)?;
    f(&mut service)
}

fn print_overview(overview: &AnniversaryOverview) {
    println!("{}", overview.title);
    println!("{}", overview.headline);
    println!();
    println!("    {}", overview.days);
    println!();
    println!("{}", overview.unit_label);
    println!("({})", overview.anniversary_long_date);
    if overview.developer_console_unlocked {
        println!();
        println!("{DEVELOPER_CONSOLE_LABEL}");
        println!("{}", overview.developer_console_title);
        println!("{}", overview.developer_console_caption);
        println!("  anniversary reset  ({})", overview.reset_action_label);
    }
}
