use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "addressbook",
    bin_name = "addressbook",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Keep track of your contacts from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address book file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Read commands interactively until `exit` (default)
    Shell,

    /// Run one command, e.g. `addressbook run delete 2`
    Run {
        /// The command line, as typed in the shell
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Show the effective configuration
    Config,
}

impl Cli {
    pub fn mode(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Shell)
    }
}
