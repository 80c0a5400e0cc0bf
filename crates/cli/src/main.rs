//! Herodex CLI entry point.
//!
//! This binary is the composition root for the workspace. Responsibilities:
//!
//! 1. **Parse arguments** — one subcommand per data-access operation, plus a
//!    `--base-url` override for the heroes web API origin.
//! 2. **Wire observability** — configure `tracing-subscriber` with an
//!    env-filter layer; diagnostic events from every crate in the workspace
//!    flow through it, controlled by `RUST_LOG`.
//! 3. **Construct infrastructure** — create the concrete [`MessageLog`] and
//!    [`HeroApiClient`] and inject the sink into the client.
//! 4. **Dispatch** — run exactly one operation through the [`HeroStore`]
//!    port, print the result as JSON, then replay the message log.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use heroes_api::{HeroApiClient, HeroApiConfig};
use messages::MessageLog;
use roster::{Hero, HeroId, HeroStore, NewHero};

#[derive(Parser)]
#[command(name = "herodex", version, about = "Browse and edit a remote hero collection")]
struct Cli {
    /// Origin of the heroes web API.
    #[arg(long, default_value = "http://localhost:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every hero in the collection.
    List,
    /// Fetch one hero by id.
    Get { id: HeroId },
    /// Create a hero; the server assigns the id.
    Add { name: String },
    /// Replace a hero's record wholesale.
    Update { id: HeroId, name: String },
    /// Delete a hero by id.
    Delete { id: HeroId },
    /// List heroes whose name matches the term.
    Search { term: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let log = Arc::new(MessageLog::new());
    let config = HeroApiConfig {
        base_url: cli.base_url,
        ..HeroApiConfig::default()
    };
    let client =
        HeroApiClient::new(config, log.clone()).context("building the heroes API client")?;

    match cli.command {
        Command::List => print_heroes(&client.heroes().await)?,
        Command::Get { id } => print_hero(client.hero(id).await)?,
        Command::Add { name } => print_hero(client.add_hero(NewHero::new(name)).await)?,
        Command::Update { id, name } => {
            print_hero(client.update_hero(&Hero::new(id, name)).await)?
        }
        Command::Delete { id } => print_hero(client.delete_hero(id).await)?,
        Command::Search { term } => print_heroes(&client.search_heroes(&term).await)?,
    }

    replay_messages(&log);
    Ok(())
}

fn print_heroes(heroes: &[Hero]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(heroes)?);
    Ok(())
}

fn print_hero(hero: Option<Hero>) -> anyhow::Result<()> {
    match hero {
        Some(hero) => println!("{}", serde_json::to_string_pretty(&hero)?),
        None => println!("null"),
    }
    Ok(())
}

fn replay_messages(log: &MessageLog) {
    for entry in log.entries() {
        eprintln!("[{}] {}", entry.at, entry.text);
    }
}
