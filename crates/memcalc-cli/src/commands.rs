//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// memcalc: keypad calculator with memory, square and square root
#[derive(Parser, Debug)]
#[command(name = "memcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive keypad
    Tui(TuiArgs),

    /// Press buttons and print the display
    ///
    /// Labels are the ones printed on the keypad, for example
    /// `memcalc press 1 2 "*" 4 =`.
    Press(PressArgs),

    /// List the keypad buttons in panel order
    Tokens,
}

/// Arguments for the tui command
#[derive(Args, Debug, Default)]
pub struct TuiArgs {
    /// Write logs to this file (the terminal belongs to the keypad)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Arguments for the press command
#[derive(Args, Debug)]
pub struct PressArgs {
    /// Button labels, pressed in order
    #[arg(required = true, value_name = "TOKENS")]
    pub tokens: Vec<String>,

    /// Print the display after every press
    #[arg(long)]
    pub steps: bool,

    /// Print machine snapshots as JSON
    #[arg(long)]
    pub json: bool,
}
