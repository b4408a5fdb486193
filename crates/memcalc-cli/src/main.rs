//! memcalc: keypad calculator with memory
//!
//! ## Usage
//!
//! ```bash
//! memcalc                    # Interactive keypad
//! memcalc press 6 4 SR =     # Prints 8
//! memcalc tokens             # Lists the buttons
//! ```

use clap::Parser;
use memcalc_cli::{
    logging, run_press, run_tokens, run_tui, Cli, CliConfig, CliResult, Commands, TuiArgs,
    Verbosity,
};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui(TuiArgs::default()));
    let config = build_config(cli.verbose, cli.quiet, &command);

    match command {
        Commands::Tui(_) => {
            // The keypad owns the terminal, so logs only go to a file
            if let Some(path) = &config.log_file {
                logging::init_file(config.verbosity, path)?;
            }
            run_tui()
        }
        Commands::Press(args) => {
            logging::init_stderr(config.verbosity)?;
            run_press(&args, &mut io::stdout().lock())
        }
        Commands::Tokens => run_tokens(&mut io::stdout().lock()),
    }
}

fn build_config(verbose: u8, quiet: bool, command: &Commands) -> CliConfig {
    let mut config = CliConfig::new().with_verbosity(Verbosity::from_flags(verbose, quiet));
    if let Commands::Tui(TuiArgs {
        log_file: Some(path),
    }) = command
    {
        config = config.with_log_file(path.clone());
    }
    config
}
