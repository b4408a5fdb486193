//! Command runners

use std::io::{self, IsTerminal, Write};

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use memcalc::core::{InputStateMachine, Token, Update};
use memcalc::tui::{keypad_area, render, CalculatorApp, InputHandler, LAYOUT};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info};

use crate::commands::PressArgs;
use crate::error::{CliError, CliResult};

/// Presses every token in order and prints the outcome
///
/// All labels are parsed before the first press, so an unknown label
/// leaves no partial output behind.
pub fn run_press<W: Write>(args: &PressArgs, out: &mut W) -> CliResult<()> {
    let tokens = args
        .tokens
        .iter()
        .map(|label| label.parse::<Token>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut machine = InputStateMachine::new();
    let mut update = Update::default();
    for token in tokens {
        update = machine.handle_input(token);
        if args.steps {
            write_step(out, &machine, token, &update, args.json)?;
        }
    }

    if !args.steps {
        if args.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&machine.snapshot())?)?;
        } else {
            writeln!(out, "{}", update.display)?;
        }
    }
    Ok(())
}

fn write_step<W: Write>(
    out: &mut W,
    machine: &InputStateMachine,
    token: Token,
    update: &Update,
    json: bool,
) -> CliResult<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(&machine.snapshot())?)?;
        return Ok(());
    }
    match update.highlight {
        Some(op) => writeln!(out, "{:<3} | {} [{op}]", token.label(), update.display)?,
        None => writeln!(out, "{:<3} | {}", token.label(), update.display)?,
    }
    Ok(())
}

/// Prints the keypad labels, one panel row per line
pub fn run_tokens<W: Write>(out: &mut W) -> CliResult<()> {
    for row in &LAYOUT {
        let labels: Vec<&str> = row.iter().map(|token| token.label()).collect();
        writeln!(out, "{}", labels.join(" "))?;
    }
    Ok(())
}

/// Runs the interactive keypad until the user quits
pub fn run_tui() -> CliResult<()> {
    if !io::stdout().is_terminal() {
        return Err(CliError::invalid_argument(
            "the keypad needs an interactive terminal; use `memcalc press` instead",
        ));
    }

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    info!("keypad opened");

    let result = run_app(&mut terminal);

    drop(guard);
    info!("keypad closed");
    result
}

/// Raw mode, alternate screen and mouse capture, undone on drop
///
/// Dropping restores the terminal on every exit path, including a failed
/// setup step.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            debug!(error = %e, "cannot leave raw mode");
        }
        if let Err(e) = restore_screen(&mut io::stdout()) {
            debug!(error = %e, "cannot restore screen");
        }
    }
}

fn restore_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, cursor::Show)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>) -> CliResult<()> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.apply(input_handler.handle_key(key));
            }
            Event::Mouse(mouse) => {
                if let Some((x, y)) = input_handler.click_position(mouse) {
                    let size = terminal.size()?;
                    let area = keypad_area(Rect::new(0, 0, size.width, size.height));
                    if app.click(area, x, y).is_none() {
                        debug!(x, y, "click outside the keypad");
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}
