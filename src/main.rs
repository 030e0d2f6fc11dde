//! Detective Quest - Main entrypoint.
//!
//! This is the explorer interface for the Detective Quest game. It
//! initializes the logging system, loads configuration, and runs the
//! interactive exploration loop on stdin.

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;

use detective_quest_lib::config::{self, ConfigLoader, QuestConfig};
use detective_quest_lib::data_structures::manor_map::{Direction, Room};
use detective_quest_lib::error::{
    set_error_reporter, QuestError, QuestResult, TracingErrorReporter,
};
use detective_quest_lib::session::ExplorationSession;

/// Command line arguments for Detective Quest.
#[derive(Parser, Debug)]
#[clap(name = "Detective Quest", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Explore the manor interactively
    Explore,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// A command typed at the exploration prompt.
enum ExplorerCommand {
    Move(Direction),
    ListClues,
    Stop,
}

/// Initialize the logging system.
fn init_logging() -> QuestResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_file(true)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| QuestError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
///
/// Returns `anyhow::Result` so any `QuestError` bubbling out of the run is
/// rendered with its full chain.
fn main() -> anyhow::Result<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    // Load configuration
    let env_prefix = "QUEST";
    let config_loader = ConfigLoader::new(args.config.as_deref(), env_prefix);

    match args.command.unwrap_or(Command::Explore) {
        Command::Explore => {
            let config = match config_loader.load() {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Configuration error: {}", e);
                    process::exit(1);
                }
            };
            config::init_global_config(config.clone());

            info!(
                buckets = config.ledger.bucket_count,
                "starting exploration session"
            );
            let mut session = ExplorationSession::with_config(&config);
            run_explorer(&mut session)?;
            print_report(&session);
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            match config_loader.load() {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = QuestConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(QuestError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| QuestError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(QuestError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Runs the interactive exploration loop until the session stops.
fn run_explorer(session: &mut ExplorationSession) -> QuestResult<()> {
    println!("=== Detective Quest ===");
    announce_room(session.current_room());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_stopped() {
        print_prompt(session.current_room());
        io::stdout().flush().map_err(QuestError::Io)?;

        let line = match lines.next() {
            Some(line) => line.map_err(QuestError::Io)?,
            None => {
                // stdin closed; treat as an explicit stop
                session.stop();
                break;
            }
        };

        match parse_command(line.trim()) {
            Some(ExplorerCommand::Move(direction)) => match session.move_to(direction) {
                Ok(room) => {
                    announce_room(room);
                    if session.is_stopped() {
                        println!("No exits here. The exploration ends.");
                    }
                }
                Err(e) => println!("{e}."),
            },
            Some(ExplorerCommand::ListClues) => print_clues(session),
            Some(ExplorerCommand::Stop) => {
                println!("Exploration ended.");
                session.stop();
            }
            None => println!("Unknown command. Use e/d/p/s."),
        }
    }

    Ok(())
}

/// Maps a typed line to an explorer command; single-letter shortcuts plus
/// word forms.
fn parse_command(input: &str) -> Option<ExplorerCommand> {
    match input.to_lowercase().as_str() {
        "e" | "l" | "left" | "esquerda" => Some(ExplorerCommand::Move(Direction::Left)),
        "d" | "r" | "right" | "direita" => Some(ExplorerCommand::Move(Direction::Right)),
        "p" | "clues" | "pistas" => Some(ExplorerCommand::ListClues),
        "s" | "q" | "quit" | "stop" | "sair" => Some(ExplorerCommand::Stop),
        _ => None,
    }
}

/// Announces the room just entered, including any clue found there.
fn announce_room(room: &Room) {
    println!("\nYou are in: {}", room.name());
    match room.clue() {
        Some(clue) => println!("There is a clue here: \"{clue}\""),
        None => println!("No clue in this room."),
    }
}

/// Prints the movement prompt for the current room.
fn print_prompt(room: &Room) {
    let mut paths = Vec::new();
    if room.child(Direction::Left).is_some() {
        paths.push("[e] left");
    }
    if room.child(Direction::Right).is_some() {
        paths.push("[d] right");
    }
    println!("Paths: {} | [p] clues, [s] stop", paths.join(", "));
    print!("> ");
}

/// Prints the sorted clue list collected so far.
fn print_clues(session: &ExplorationSession) {
    println!("\nClues collected (alphabetical order):");
    let clues = session.list_clues();
    if clues.is_empty() {
        println!("(none yet)");
        return;
    }
    for clue in clues {
        println!(" - {clue}");
    }
}

/// Prints the end-of-session report: clues, suspects, and the verdict.
fn print_report(session: &ExplorationSession) {
    print_clues(session);

    println!("\nSuspects and their clues:");
    let suspects = session.list_suspects();
    if suspects.is_empty() {
        println!("(no associations)");
    } else {
        for suspect in &suspects {
            let plural = if suspect.count == 1 { "clue" } else { "clues" };
            let listed = suspect
                .clues
                .iter()
                .map(|c| format!("\"{c}\""))
                .collect::<Vec<_>>()
                .join("; ");
            println!("- {} ({} {plural}): {listed}", suspect.name, suspect.count);
        }
    }

    match session.most_likely_suspect() {
        Some((name, count)) => {
            let plural = if count == 1 { "clue" } else { "clues" };
            println!("\nMost likely suspect: {name} ({count} {plural})");
        }
        None => println!("\nNo suspects implicated."),
    }
}
