//! memcalc CLI library
//!
//! Command line front end for the memcalc keypad calculator.
//!
//! ## Usage
//!
//! ```bash
//! memcalc                          # Open the interactive keypad
//! memcalc tui --log-file calc.log  # Same, with logs written to a file
//! memcalc press 1 2 "*" 4 =        # Print the display after the presses
//! memcalc press 9 SR = --steps     # Print the display after every press
//! memcalc tokens                   # List the buttons
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod runner;

pub use commands::{Cli, Commands, PressArgs, TuiArgs};
pub use config::{CliConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use runner::{run_press, run_tokens, run_tui};
