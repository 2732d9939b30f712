//! # CLI Layer
//!
//! This module is **one possible UI client** for libris. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Loads config, opens the store and seeds an empty catalog
//! - `handle_config()`: Reads and writes `config.json` without opening the catalog
//! - `handle_*()`: Per-command handlers that call the API and format output

use super::menu;
use super::print::{print_book, print_books, print_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use libris::api::{BookUpdate, CmdMessage, LibrisApi};
use libris::commands::config::{self, ConfigAction};
use libris::config::LibrisConfig;
use libris::error::Result;
use libris::store::json::JsonStore;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

const HOME_ENV: &str = "LIBRIS_HOME";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir();
    let command = cli.command.unwrap_or(Commands::Menu);
    let seed = command.uses_catalog() && !cli.no_seed;
    let open = || init_context(&data_dir, cli.file.clone(), seed);
    let mut out = io::stdout().lock();

    match command {
        Commands::Menu => menu::run(&mut open()?, &mut io::stdin().lock(), &mut out),
        Commands::Add {
            id,
            title,
            author,
            year,
        } => handle_add(&mut open()?, &mut out, id, title, author, year),
        Commands::List => handle_list(&open()?, &mut out),
        Commands::Get { id } => handle_get(&open()?, &mut out, id),
        Commands::Update {
            id,
            title,
            author,
            year,
        } => {
            let update = BookUpdate {
                title,
                author,
                year,
            };
            handle_update(&mut open()?, &mut out, id, &update)
        }
        Commands::Delete { id } => handle_delete(&mut open()?, &mut out, id),
        Commands::Seed => handle_seed(&mut open()?, &mut out),
        // Config must not need a readable catalog.
        Commands::Config { key, value } => handle_config(&data_dir, &mut out, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "libris=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn resolve_data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "libris", "libris")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn init_context(
    data_dir: &Path,
    file_override: Option<PathBuf>,
    seed: bool,
) -> Result<LibrisApi<JsonStore>> {
    let config = LibrisConfig::load(data_dir)?;
    let data_path = file_override.unwrap_or_else(|| config.data_path(data_dir));
    tracing::debug!(path = %data_path.display(), "opening catalog");

    let store = JsonStore::open(&data_path)?;
    if store.skipped_on_load() > 0 {
        print_messages(
            &mut io::stderr(),
            &[CmdMessage::warning(format!(
                "Skipped {} invalid entries in {}",
                store.skipped_on_load(),
                store.path().display()
            ))],
        )?;
    }

    let mut api = LibrisApi::new(store);
    if seed && config.seed_on_empty {
        let result = api.seed_if_empty()?;
        if !result.affected_books.is_empty() {
            print_messages(&mut io::stdout(), &result.messages)?;
        }
    }

    Ok(api)
}

fn handle_add(
    api: &mut LibrisApi<JsonStore>,
    out: &mut impl Write,
    id: i64,
    title: String,
    author: String,
    year: i64,
) -> Result<()> {
    let result = api.add_book(id, title.trim().to_string(), author.trim().to_string(), year)?;
    print_messages(out, &result.messages)?;
    Ok(())
}

fn handle_list(api: &LibrisApi<JsonStore>, out: &mut impl Write) -> Result<()> {
    let result = api.list_books()?;
    print_books(out, &result.listed_books)?;
    Ok(())
}

fn handle_get(api: &LibrisApi<JsonStore>, out: &mut impl Write, id: i64) -> Result<()> {
    let result = api.get_book(id)?;
    for book in &result.listed_books {
        print_book(out, book)?;
    }
    Ok(())
}

fn handle_update(
    api: &mut LibrisApi<JsonStore>,
    out: &mut impl Write,
    id: i64,
    update: &BookUpdate,
) -> Result<()> {
    let update = BookUpdate {
        title: update.title.as_ref().map(|t| t.trim().to_string()),
        author: update.author.as_ref().map(|a| a.trim().to_string()),
        year: update.year,
    };
    let result = api.update_book(id, &update)?;
    print_messages(out, &result.messages)?;
    Ok(())
}

fn handle_delete(api: &mut LibrisApi<JsonStore>, out: &mut impl Write, id: i64) -> Result<()> {
    let result = api.delete_book(id)?;
    print_messages(out, &result.messages)?;
    Ok(())
}

fn handle_seed(api: &mut LibrisApi<JsonStore>, out: &mut impl Write) -> Result<()> {
    let result = api.seed_if_empty()?;
    print_messages(out, &result.messages)?;
    Ok(())
}

fn handle_config(
    config_dir: &Path,
    out: &mut impl Write,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = config::run(config_dir, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in LibrisConfig::KEYS {
                writeln!(out, "{} = {}", key, config.get(key).unwrap_or_default())?;
            }
        }
    }
    print_messages(out, &result.messages)?;
    Ok(())
}
