use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use sescd_core::Segment;
use sescd_desktop::config::{self, LogFormat};
use sescd_desktop::{commands, console};
use sescd_instruments::store::ScoreStore;
use sescd_voice::driver::{self, Driver, DriverEvent};
use sescd_voice::{DialogueController, DialogueState};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "SES-CD / MM-SES-CD calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a JSON file of `{segment, variable, value}` entries.
    Score {
        file: PathBuf,
        /// Print the report as JSON instead of markdown.
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Only summarize this instrument (`ses_cd` or `mm_ses_cd`).
        #[arg(long)]
        instrument: Option<String>,
    },
    /// Dictate the four variables of one segment, one line per answer.
    Dictate {
        segment: Segment,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Write a default config file if none exists and show it.
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let loaded = config::load_config()?;
    let config = loaded.config;
    init_tracing(config.log_format);
    if let Some(from) = loaded.migrated_from {
        tracing::info!(from, to = config.config_version, "migrated config");
    }

    match cli.command {
        Commands::Score {
            file,
            json,
            instrument,
        } => {
            let entries = commands::read_entries(&file)?;
            let store = commands::score_entries(&entries)?;
            print_report(&store, json, instrument.as_deref())?;
        }
        Commands::Dictate { segment, json } => {
            let store = dictate(segment, &config).await?;
            print_report(&store, json, None)?;
        }
        Commands::Config => {
            let dir = config::config_dir()?;
            let path = if dir.join("config.json").exists() {
                dir.join("config.json")
            } else {
                config::save_config(&config)?
            };
            println!("{}", path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn dictate(segment: Segment, config: &config::SescdConfig) -> Result<ScoreStore> {
    let (sender, events) = driver::channel();
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let recognizer = console::ConsoleRecognizer::spawn(input, sender.clone());
    tracing::info!(%segment, language = %config.language, "console dictation started");
    let controller = DialogueController::new(recognizer, config.timing.into());
    let (driver, mut snapshots) = Driver::new(ScoreStore::new(), controller, sender.clone(), events);
    let task = tokio::spawn(driver.run());

    sender.send(DriverEvent::Begin(segment));

    let mut previous = snapshots.borrow_and_update().clone();
    let mut started = false;
    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                sender.send(DriverEvent::Abort);
                break;
            }
        }

        let current = snapshots.borrow_and_update().clone();
        for line in console::describe_change(&previous, &current) {
            println!("{line}");
        }
        started |= current.voice.state != DialogueState::Idle;
        let refused = !started && current.notice.is_some();
        let finished = started && current.voice.state == DialogueState::Idle;
        previous = current;
        if refused || finished {
            break;
        }
    }

    sender.send(DriverEvent::Shutdown);
    Ok(task.await?)
}

fn print_report(store: &ScoreStore, json: bool, only: Option<&str>) -> Result<()> {
    let report = commands::build_report(store, only)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", commands::render_markdown(&report));
    }
    Ok(())
}
