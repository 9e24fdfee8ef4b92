//! mdnotes - markdown notes with categories, tags and favorites

pub mod cli;
pub mod domain;
pub mod error;
pub mod export;
pub mod logging;
pub mod notebook;
pub mod query;
pub mod repo;
pub mod store;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_categories, handle_category, handle_completions, handle_edit, handle_export,
        handle_favorite, handle_import, handle_list, handle_new, handle_remove, handle_select,
        handle_show, handle_tag, handle_tags, handle_theme, handle_view,
    },
};
use notebook::Notebook;
use store::DirStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let store_dir = config.store_dir(cli.dir.as_ref());
    let store = DirStore::open(&store_dir)
        .with_context(|| format!("failed to open store at {}", store_dir.display()))?;
    let mut notebook = Notebook::open(store);

    match &cli.command {
        Command::New(args) => handle_new(args, &mut notebook, &config),
        Command::List(args) => handle_list(args, &notebook),
        Command::Show(args) => handle_show(args, &notebook),
        Command::Select(args) => handle_select(args, &mut notebook),
        Command::Edit(args) => handle_edit(args, &mut notebook, &config),
        Command::Remove(args) => handle_remove(args, &mut notebook),
        Command::Favorite(args) => handle_favorite(args, &mut notebook),
        Command::View(args) => handle_view(args, &mut notebook),
        Command::Categories(args) => handle_categories(args, &notebook),
        Command::Category(command) => handle_category(command, &mut notebook),
        Command::Tags(args) => handle_tags(args, &notebook),
        Command::Tag(command) => handle_tag(command, &mut notebook),
        Command::Export(args) => handle_export(args, &notebook, &config),
        Command::Import(args) => handle_import(args, &mut notebook),
        Command::Theme(args) => handle_theme(args, &mut notebook),
        Command::Completions(args) => handle_completions(args),
    }
}
