//! Command-line decklist validation.
//!
//! Loads card data into an in-memory lookup, validates one deck, and
//! prints either the chunked error messages or the deck report.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use servo_validator::{
    logging, FormatCatalog, InMemoryLookup, Result, ValidationOutcome, Validator, ValidatorConfig,
};

/// Exit code for a deck that failed validation.
const INVALID_DECK: u8 = 1;
/// Exit code for unreadable input or configuration.
const BAD_CONFIG: u8 = 2;

#[derive(Parser)]
#[command(
    name = "servo-validate",
    version,
    about = "Validate a decklist against a rules format"
)]
struct Cli {
    /// Card data JSON (an array of cards, or an object with a `data` array).
    #[arg(long)]
    cards: PathBuf,

    /// Commander names, one per line, or `@path` to read them from a file.
    #[arg(long, default_value = "")]
    commander: String,

    /// Decklist file, one `<quantity> <card name>` per line.
    #[arg(long)]
    decklist: PathBuf,

    /// Format name; defaults to the configured default format.
    #[arg(long)]
    format: Option<String>,

    /// Format catalog JSON; defaults to the built-in formats.
    #[arg(long)]
    formats: Option<PathBuf>,

    /// Validator config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the CSV report for a valid deck.
    #[arg(long)]
    csv: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(ValidatorConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            eprintln!("failed to load config: {err}");
            return ExitCode::from(BAD_CONFIG);
        }
    };
    logging::init(&config.log_filter);

    match run(&cli, config).await {
        Ok(outcome) if outcome.is_passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(INVALID_DECK),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(BAD_CONFIG)
        }
    }
}

async fn run(cli: &Cli, config: ValidatorConfig) -> Result<ValidationOutcome> {
    let lookup = InMemoryLookup::from_json(&fs::read_to_string(&cli.cards)?)?;
    let catalog = match &cli.formats {
        Some(path) => FormatCatalog::from_json(&fs::read_to_string(path)?)?,
        None => FormatCatalog::builtin(),
    };
    let commander_text = read_commander(&cli.commander)?;
    let decklist_text = fs::read_to_string(&cli.decklist)?;

    let validator = Validator::new(&catalog, lookup, config);
    let format_name = cli
        .format
        .clone()
        .unwrap_or_else(|| validator.config().default_format.clone());
    let format = validator.format(&format_name)?;
    let outcome = validator
        .validate(&format_name, &commander_text, &decklist_text)
        .await?;

    match &outcome {
        ValidationOutcome::Failed { .. } => {
            for message in validator.error_messages(&outcome) {
                println!("{message}\n");
            }
        }
        ValidationOutcome::Passed { report } if cli.csv => println!("{}", report.to_csv()),
        ValidationOutcome::Passed { report } => println!(
            "Valid {} deck: {} cards, ${:.2}",
            format.display_name, report.total_count, report.total_value
        ),
    }

    Ok(outcome)
}

/// Commander text is given inline, or as `@path` to a file.
fn read_commander(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => Ok(fs::read_to_string(Path::new(path))?),
        None => Ok(arg.to_string()),
    }
}
