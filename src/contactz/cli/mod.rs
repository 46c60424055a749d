//! # CLI Layer
//!
//! This module is **one possible UI client** for contactz. It is the only place
//! that knows about stdin/stdout, colors, flags and exit codes.
//!
//! 1. **Argument Parsing**: `--data-dir`, `-v`, `--no-color` via clap
//! 2. **Context Setup**: logging, config file, the file store and the API
//! 3. **The Prompt Loop**: read a line, hand it to [`ContactzApi::execute`], print
//!    the messages, stop when a result asks to

mod print;
mod repl;
mod setup;

use contactz::api::ContactzApi;
use contactz::config::ContactzConfig;
use contactz::error::Result;
use contactz::store::fs::FileStore;
use directories::ProjectDirs;
use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use repl::{run_loop, LoopOptions};
use setup::{init_tracing, Cli};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    if !init_tracing(cli.verbose) {
        tracing::warn!("logging was already configured, -v has no effect");
    }

    let config = load_config()?;
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.data_dir_or(&cwd));
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    let prompt = config.prompt.clone();
    let mut api = ContactzApi::new(FileStore::new(data_dir), config);

    let stdout = std::io::stdout();
    let options = LoopOptions {
        prompt: &prompt,
        color: !cli.no_color && stdout.is_terminal(),
    };
    let stdin = std::io::stdin();
    run_loop(&mut api, stdin.lock(), &mut stdout.lock(), &options)?;
    Ok(())
}

fn load_config() -> Result<ContactzConfig> {
    match ProjectDirs::from("com", "contactz", "contactz") {
        Some(dirs) => ContactzConfig::load(dirs.config_dir()),
        None => {
            tracing::warn!("no home directory found, using default configuration");
            Ok(ContactzConfig::default())
        }
    }
}
