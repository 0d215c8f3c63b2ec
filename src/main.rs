/// Main entry point for the contact book assistant bot
///
/// This file sets up logging, parses command line arguments, and starts the
/// interactive session on stdin/stdout.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use contact_book::{Birthday, ContactBookApp};

/// Where the address book lives when `--database` is not given
///
/// `~/.contact_book/address_book.db`, or the platform data directory when
/// there is no home directory, or the temp directory as a last resort.
fn default_database_path() -> std::io::Result<PathBuf> {
    let dir = dirs::home_dir()
        .map(|home| home.join(".contact_book"))
        .or_else(|| dirs::data_dir().map(|data| data.join("contact_book")))
        .unwrap_or_else(|| std::env::temp_dir().join("contact_book"));

    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("address_book.db"))
}

/// Parse a `--today` value in the same format birthdays use
fn parse_today(value: &str) -> Result<chrono::NaiveDate, String> {
    Birthday::parse(value)
        .map(|b| b.date())
        .map_err(|e| e.to_string())
}

/// Command line arguments for the contact book
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Reference date (DD.MM.YYYY) for upcoming birthdays instead of today
    #[arg(long, value_parser = parse_today)]
    today: Option<chrono::NaiveDate>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("contact_book={}", log_level))
        .with_writer(std::io::stderr) // Keep logs out of the bot's stdout
        .init();

    info!("Starting contact book");

    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let app = ContactBookApp::new(db_path)?.with_today(args.today);
    app.run()?;

    info!("Contact book shutdown complete");
    Ok(())
}
