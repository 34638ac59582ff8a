//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the logging subscriber
//! - Formats output for human consumption
//!
//! Command failures (bad index, duplicate person, malformed input) are normal
//! results and are printed like any other. Only ambient failures, such as an
//! unreadable data file or a broken config, end the process with an error.

use super::render::{render_config, render_result};
use super::setup::{Cli, Commands};
use super::styles::PROMPT;
use crate::logging::{init_logging, LogConfig};
use addressbook::api::AddressBookApi;
use addressbook::init::{self, Settings};
use addressbook::parser;
use addressbook::store::fs::FileStore;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const PROMPT_TEXT: &str = "Enter command: ";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings =
        init::load_settings(cli.file.clone()).context("could not load configuration")?;

    init_logging(
        &LogConfig::from_verbosity(cli.verbose, &settings.config.log_level())
            .with_ansi(console::colors_enabled_stderr()),
    );
    debug!(data_file = %settings.data_file.display(), "settings loaded");

    match cli.mode() {
        Commands::Shell => run_shell(&settings),
        Commands::Run { words } => run_once(&settings, &words.join(" ")),
        Commands::Config => show_config(&settings),
    }
}

fn run_shell(settings: &Settings) -> Result<()> {
    let mut api = open(settings, false)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", PROMPT.apply_to(PROMPT_TEXT))?;
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            info!("end of input, leaving shell");
            break;
        }

        let command = parser::parse(&line);
        let result = api.run(&command)?;
        writeln!(stdout, "{}", render_result(&result))?;
        if command.is_exit() {
            break;
        }
    }
    Ok(())
}

fn run_once(settings: &Settings, line: &str) -> Result<()> {
    let mut api = open(settings, true)?;
    let result = api.execute(line)?;
    println!("{}", render_result(&result));
    Ok(())
}

fn show_config(settings: &Settings) -> Result<()> {
    println!(
        "{}",
        render_config(
            &settings.config.list_all(),
            &settings.data_file.display().to_string()
        )
    );
    Ok(())
}

fn open(settings: &Settings, full_view: bool) -> Result<AddressBookApi<FileStore>> {
    init::open(settings, full_view)
        .with_context(|| format!("could not open {}", settings.data_file.display()))
}
