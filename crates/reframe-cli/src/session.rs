//! Interactive journaling session
//!
//! Consent notice, demographics form, optional owner gate, then a menu
//! loop. All session state lives in `SessionContext`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use dialoguer::{Input, Password, Select};
use std::path::Path;

use reframe::domain::{CONSENT_DECLINED, CONSENT_QUESTION, PRIVACY_NOTICE};
use reframe::{
    ConsentChoice, Demographics, DomainError, Gender, OwnerGate, UserRecordRepository,
    RECENT_GRATITUDE_LIMIT,
};

use crate::adapters::formatters::{
    format_analysis, format_gratitude, format_streak, format_streak_update,
};
use crate::application::JournalService;

pub const PROFESSIONAL_HELP: &str =
    "If you need professional help, please seek a qualified therapist or counselor.";

/// Per-session state passed through the session handlers
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub consent: Option<ConsentChoice>,
    pub demographics: Option<Demographics>,
    pub owner_unlocked: bool,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Journaling requires consent and a completed demographics form
    pub fn can_journal(&self) -> bool {
        self.consent.is_some_and(ConsentChoice::is_given) && self.demographics.is_some()
    }

    pub fn welcome(&self) -> Option<String> {
        self.demographics.as_ref().map(|d| {
            format!(
                "Welcome, {}! Reflect on a thought or note something you're grateful for.",
                d.profession
            )
        })
    }
}

/// Result of an owner password attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerAccess {
    /// Nothing was entered
    Prompt,
    Granted,
    Denied(String),
}

/// Check an owner password attempt against the gate
pub fn owner_access<G: OwnerGate>(gate: &G, password: &str) -> OwnerAccess {
    if password.is_empty() {
        return OwnerAccess::Prompt;
    }
    match gate.authorize(password) {
        Ok(()) => OwnerAccess::Granted,
        Err(e) => OwnerAccess::Denied(e.user_message().to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Reflect,
    AddGratitude,
    ViewGratitude,
    Streak,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 5] = [
        MenuItem::Reflect,
        MenuItem::AddGratitude,
        MenuItem::ViewGratitude,
        MenuItem::Streak,
        MenuItem::Quit,
    ];
}

impl std::fmt::Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuItem::Reflect => write!(f, "Reflect on a negative thought"),
            MenuItem::AddGratitude => write!(f, "Add a gratitude entry"),
            MenuItem::ViewGratitude => write!(f, "View recent gratitude"),
            MenuItem::Streak => write!(f, "Show my streak"),
            MenuItem::Quit => write!(f, "Quit"),
        }
    }
}

/// Run the interactive session until the user quits or declines consent
pub fn run<R, G>(
    service: &mut JournalService<R>,
    gate: &G,
    data_file: &Path,
    owner: bool,
    today: NaiveDate,
) -> Result<()>
where
    R: UserRecordRepository,
    G: OwnerGate,
{
    let mut ctx = SessionContext::new();

    println!("{}\n", "CBT Reflection Journal".bold());
    println!("{} {}\n", "🔒 Data Collection & Privacy Notice:".cyan(), PRIVACY_NOTICE);

    let consent = ask_consent()?;
    ctx.consent = Some(consent);
    if !consent.is_given() {
        println!("{}", CONSENT_DECLINED.yellow());
        return Ok(());
    }

    ctx.demographics = Some(ask_demographics()?);
    println!("{} Thank you! You may use the journal below.", "✓".green());

    if let Some(welcome) = ctx.welcome() {
        println!("\n{}", welcome.bold());
    }

    let update = service.check_in(today)?;
    println!("{}", format_streak_update(update, service.record().streak));

    if owner {
        ctx.owner_unlocked = run_owner_gate(gate)?;
        if ctx.owner_unlocked {
            print_owner_tools(service, data_file)?;
        }
    }

    while ctx.can_journal() {
        let items = MenuItem::ALL;
        let choice = Select::new()
            .with_prompt("\nWhat would you like to do?")
            .items(&items)
            .default(0)
            .interact()
            .context("Failed to read menu choice")?;

        match items[choice] {
            MenuItem::Reflect => reflect(service, today)?,
            MenuItem::AddGratitude => add_gratitude(service, today)?,
            MenuItem::ViewGratitude => {
                println!("{}", "Recent gratitude:".bold());
                println!(
                    "{}",
                    format_gratitude(service.recent_gratitude(RECENT_GRATITUDE_LIMIT))
                );
            }
            MenuItem::Streak => println!("{}", format_streak(service.record())),
            MenuItem::Quit => break,
        }
    }

    println!("\n{}", PROFESSIONAL_HELP.cyan());
    Ok(())
}

fn ask_consent() -> Result<ConsentChoice> {
    let choices = ConsentChoice::ALL;
    let index = Select::new()
        .with_prompt(CONSENT_QUESTION)
        .items(&choices)
        .interact()
        .context("Failed to read consent")?;
    Ok(choices[index])
}

fn ask_demographics() -> Result<Demographics> {
    loop {
        let age: u32 = Input::new()
            .with_prompt("Your Age")
            .interact_text()
            .context("Failed to read age")?;

        let genders = Gender::ALL;
        let gender = Select::new()
            .with_prompt("Your Gender")
            .items(&genders)
            .default(0)
            .interact()
            .context("Failed to read gender")?;

        let profession: String = Input::new()
            .with_prompt("Your Profession")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read profession")?;

        match Demographics::new(age, genders[gender], &profession) {
            Ok(demographics) => return Ok(demographics),
            Err(e) => println!("{}", e.user_message().red()),
        }
    }
}

fn reflect<R: UserRecordRepository>(
    service: &mut JournalService<R>,
    today: NaiveDate,
) -> Result<()> {
    let thought: String = Input::new()
        .with_prompt("Describe a negative thought")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read thought")?;

    match service.reflect(&thought, today) {
        Ok(reflection) => {
            println!("{}", format_analysis(&reflection.analysis));
            Ok(())
        }
        Err(DomainError::Validation(message)) => {
            println!("{}", message.red());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn add_gratitude<R: UserRecordRepository>(
    service: &mut JournalService<R>,
    today: NaiveDate,
) -> Result<()> {
    let text: String = Input::new()
        .with_prompt("Something you're grateful for today")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read gratitude entry")?;

    match service.add_gratitude(&text, today) {
        Ok(_) => {
            println!("{} Gratitude saved.", "✓".green());
            Ok(())
        }
        Err(DomainError::Validation(message)) => {
            println!("{}", message.red());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn run_owner_gate<G: OwnerGate>(gate: &G) -> Result<bool> {
    println!(
        "\n{}",
        "Owner's Secure Access: Enter password to unlock owner tools.".yellow()
    );
    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()
        .context("Failed to read password")?;

    match owner_access(gate, &password) {
        OwnerAccess::Prompt => {
            println!("Enter password to access owner tools.");
            Ok(false)
        }
        OwnerAccess::Granted => {
            println!("{} Access granted!", "✓".green());
            Ok(true)
        }
        OwnerAccess::Denied(message) => {
            println!("{}", message.red());
            Ok(false)
        }
    }
}

/// Owner-only view of the stored record
fn print_owner_tools<R: UserRecordRepository>(
    service: &JournalService<R>,
    data_file: &Path,
) -> Result<()> {
    let record = service.record();
    println!("{}", "Owner tools:".bold());
    println!("  Data file: {:?}", data_file);
    println!("  {}", format_streak(record));
    println!("  Gratitude entries: {}", record.gratitude_list.len());
    println!(
        "{}",
        serde_json::to_string_pretty(record).context("Failed to serialize user record")?
    );
    Ok(())
}
