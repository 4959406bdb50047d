//! Reframe CLI - Reflective journaling in the terminal
//!
//! Flags cognitive distortions in negative thoughts, keeps a daily streak,
//! and stores gratitude entries in a local JSON file.

mod adapters;
mod application;
mod config;
mod session;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reframe::{OwnerGate, RECENT_GRATITUDE_LIMIT};

use adapters::formatters::{format_analysis, format_gratitude, format_streak, format_streak_update};
use adapters::{JsonFileRecordRepository, PasswordFileGate};
use application::JournalService;
use config::Config;

#[derive(Parser)]
#[command(name = "reframe")]
#[command(about = "Reframe - CBT reflection journal", long_about = None)]
#[command(version)]
struct Cli {
    /// Path of the JSON user record
    #[arg(long, global = true, env = "REFRAME_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Path of the owner password file
    #[arg(long, global = true, env = "REFRAME_PASSWORD_FILE")]
    password_file: Option<PathBuf>,

    /// Ask for the owner password to unlock owner tools
    #[arg(long, global = true, hide = true)]
    owner: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive journaling session (default)
    Session,

    /// Check a negative thought for cognitive distortions
    Analyze {
        /// The thought (will prompt if not provided)
        text: Option<String>,
    },

    /// Gratitude journal
    Gratitude {
        #[command(subcommand)]
        action: GratitudeAction,
    },

    /// Show the current streak
    Streak,

    /// Set the owner password (stored hashed)
    OwnerPassword,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum GratitudeAction {
    /// Add a gratitude entry
    Add {
        /// What you're grateful for (will prompt if not provided)
        text: Option<String>,
    },
    /// List recent gratitude entries, newest first
    List {
        /// Max entries
        #[arg(short, long, default_value_t = RECENT_GRATITUDE_LIMIT)]
        limit: usize,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Store the data file location in the config file
    SetDataFile { path: PathBuf },
    /// Store the password file location in the config file
    SetPasswordFile { path: PathBuf },
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging();

    let config = Config::load()?;
    let today = Local::now().date_naive();

    let data_file = config.resolve_data_file(cli.data_file.as_deref())?;
    let password_file = config.resolve_password_file(cli.password_file.as_deref())?;
    tracing::debug!(
        data_file = %data_file.display(),
        password_file = %password_file.display(),
        "Resolved paths"
    );

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let mut service = open_journal(&data_file)?;
            let gate = PasswordFileGate::new(password_file);
            session::run(&mut service, &gate, &data_file, cli.owner, today)
        }
        Commands::Analyze { text } => cmd_analyze(open_journal(&data_file)?, text, today),
        Commands::Gratitude { action } => cmd_gratitude(open_journal(&data_file)?, action, today),
        Commands::Streak => cmd_streak(open_journal(&data_file)?),
        Commands::OwnerPassword => cmd_owner_password(PasswordFileGate::new(password_file)),
        Commands::Config { action } => cmd_config(config, action, &data_file, &password_file),
    }
}

/// Initialize tracing/logging on stderr so stdout stays clean
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Journal service with the file-backed repository
type AppJournalService = JournalService<JsonFileRecordRepository>;

fn open_journal(data_file: &Path) -> Result<AppJournalService> {
    let repo = JsonFileRecordRepository::new(data_file);
    JournalService::open(repo)
        .with_context(|| format!("Failed to load user record from {:?}", data_file))
}

// ============================================
// Command Implementations
// ============================================

fn cmd_analyze(
    mut service: AppJournalService,
    text: Option<String>,
    today: NaiveDate,
) -> Result<()> {
    let thought = match text {
        Some(t) => t,
        None => Input::new()
            .with_prompt("Describe a negative thought")
            .interact_text()
            .context("Failed to read input")?,
    };

    let reflection = service.reflect(&thought, today)?;
    println!("{}", format_analysis(&reflection.analysis));
    println!(
        "\n{}",
        format_streak_update(reflection.streak, service.record().streak).dimmed()
    );
    Ok(())
}

fn cmd_gratitude(
    mut service: AppJournalService,
    action: GratitudeAction,
    today: NaiveDate,
) -> Result<()> {
    match action {
        GratitudeAction::Add { text } => {
            let text = match text {
                Some(t) => t,
                None => Input::new()
                    .with_prompt("Something you're grateful for today")
                    .interact_text()
                    .context("Failed to read input")?,
            };

            let (entry, update) = service.add_gratitude(&text, today)?;
            println!("{} Gratitude saved for {}", "✓".green(), entry.date);
            println!(
                "{}",
                format_streak_update(update, service.record().streak).dimmed()
            );
        }

        GratitudeAction::List { limit } => {
            println!("{}", "Recent gratitude:".bold());
            println!("{}", format_gratitude(service.recent_gratitude(limit)));
        }
    }

    Ok(())
}

fn cmd_streak(service: AppJournalService) -> Result<()> {
    println!("{}", format_streak(service.record()));
    Ok(())
}

fn cmd_owner_password(gate: PasswordFileGate) -> Result<()> {
    if gate.is_configured() {
        let current = Password::new()
            .with_prompt("Current password")
            .interact()
            .context("Failed to read password")?;
        if let Err(e) = gate.authorize(&current) {
            bail!("{}", e.user_message());
        }
    }

    let password = Password::new()
        .with_prompt("New owner password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .context("Failed to read password")?;

    gate.set_password(&password)?;
    println!(
        "{} Owner password saved to {:?}",
        "✓".green(),
        gate.path()
    );
    Ok(())
}

fn cmd_config(
    mut config: Config,
    action: Option<ConfigAction>,
    data_file: &Path,
    password_file: &Path,
) -> Result<()> {
    match action {
        Some(ConfigAction::SetDataFile { path }) => {
            config.data_file = Some(path.clone());
            config.save()?;
            println!("{} Data file set to {:?}", "✓".green(), path);
        }
        Some(ConfigAction::SetPasswordFile { path }) => {
            config.password_file = Some(path.clone());
            config.save()?;
            println!("{} Password file set to {:?}", "✓".green(), path);
        }
        None => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Data File: {:?}", data_file);
            println!("  Password File: {:?}", password_file);
            println!(
                "  Owner Password: {}",
                if PasswordFileGate::new(password_file).is_configured() {
                    "Set".green()
                } else {
                    "Not set".red()
                }
            );
        }
    }

    Ok(())
}
