mod cli;
mod output;

use anyhow::Context;
use clap::Parser;
use m6_theme::{
    ClassList, DisplayRoot, FileStorage, MemoryStorage, PreferenceStorage, PreferenceStore,
    StorageKey, SystemAmbient, ThemeConfig, ThemePreference, ThemeToggle, DARK_CLASS,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, OutputFormat};
use crate::output::{render_json, render_text, Report};

type CliStore = PreferenceStore<Box<dyn PreferenceStorage>, ClassList, SystemAmbient>;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let report = run(&cli)?;

    let rendered = match cli.output {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report).context("encoding report")?,
    };
    println!("{}", rendered);
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<Report> {
    let config = match &cli.config {
        Some(path) => ThemeConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ThemeConfig::default(),
    };
    let key = cli.key.clone().unwrap_or_else(|| config.storage_key.clone());
    let mut store = build_store(cli, &config);

    let report = match cli.command.clone().unwrap_or(Command::Status) {
        Command::Status => {
            let (_, source) = store.resolve_with_source(&key);
            let theme = ThemeToggle::mount(store, key.clone());
            Report::new(key.as_str(), theme.preference()).with_source(source)
        }
        Command::Toggle => {
            let mut theme = ThemeToggle::mount(store, key.clone());
            theme.toggle_dark_mode();
            theme.flush();
            Report::new(key.as_str(), theme.preference())
        }
        Command::Set { theme: target } => {
            let mut theme = ThemeToggle::mount(store, key.clone());
            if theme.preference() != target {
                theme.toggle_dark_mode();
                theme.flush();
            }
            Report::new(key.as_str(), theme.preference())
        }
        Command::Reset => reset(&mut store, &key),
    };
    Ok(report)
}

fn reset(store: &mut CliStore, key: &StorageKey) -> Report {
    store.forget(key);
    let (is_dark, source) = store.resolve_with_source(key);
    Report::new(key.as_str(), ThemePreference::from_dark(is_dark))
        .with_source(source)
        .cleared()
}

fn build_store(cli: &Cli, config: &ThemeConfig) -> CliStore {
    let path = cli
        .store
        .clone()
        .or_else(|| config.resolved_storage_path());
    let storage: Box<dyn PreferenceStorage> = match path {
        Some(path) => Box::new(FileStorage::new(path)),
        None => {
            warn!("no storage path available; preference will not outlive this run");
            Box::new(MemoryStorage::new())
        }
    };

    let mut root = ClassList::new();
    if cli.bootstrap_dark {
        root.set_class(DARK_CLASS, true);
    }

    PreferenceStore::new(storage, root, SystemAmbient)
}
