//! Unified keypad drivers
//!
//! A scenario is written once against [`KeypadDriver`] and runs against the
//! bare state machine and against the terminal panel alike.

use crate::core::{CalcResult, InputStateMachine, Operator, Update, ERROR_DISPLAY, OVERFLOW_DISPLAY};

/// Abstract driver for pressing buttons and reading the display
///
/// # Example
///
/// ```rust
/// use memcalc::driver::{verify_basic_arithmetic, KeypadDriver, MachineDriver};
///
/// let mut driver = MachineDriver::new();
/// verify_basic_arithmetic(&mut driver);
/// ```
pub trait KeypadDriver {
    /// Presses the button with the given label
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Presses several buttons in order, stopping at the first unknown label
    fn press_all(&mut self, labels: &[&str]) -> CalcResult<()> {
        for label in labels {
            self.press(label)?;
        }
        Ok(())
    }

    /// Gets the current display text
    fn display(&self) -> String;

    /// Gets the highlighted operator button
    fn highlight(&self) -> Option<Operator>;

    /// Gets the memory register value
    fn memory(&self) -> String;

    /// Presses C
    fn clear(&mut self);
}

/// Driver that talks to the state machine directly
#[derive(Debug, Default)]
pub struct MachineDriver {
    machine: InputStateMachine,
    last: Update,
}

impl MachineDriver {
    /// Creates a driver around a fresh state machine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying state machine
    #[must_use]
    pub fn machine(&self) -> &InputStateMachine {
        &self.machine
    }
}

impl KeypadDriver for MachineDriver {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        self.last = self.machine.press(label)?;
        Ok(())
    }

    fn display(&self) -> String {
        self.last.display.clone()
    }

    fn highlight(&self) -> Option<Operator> {
        self.last.highlight
    }

    fn memory(&self) -> String {
        self.machine.memory().value().to_string()
    }

    fn clear(&mut self) {
        self.last = self.machine.handle_input(crate::core::Token::Clear);
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcResult, KeypadDriver, Operator};
    use crate::core::Token;
    use crate::tui::CalculatorApp;

    /// Driver that presses buttons through the terminal app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl KeypadDriver for TuiDriver {
        fn press(&mut self, label: &str) -> CalcResult<()> {
            let token = label.parse::<Token>()?;
            self.app.press(token);
            Ok(())
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn highlight(&self) -> Option<Operator> {
            self.app.highlight()
        }

        fn memory(&self) -> String {
            self.app.memory().to_string()
        }

        fn clear(&mut self) {
            self.app.press(Token::Clear);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Driver Scenarios =====
// These work with ANY KeypadDriver implementation

/// Verifies the four binary operations and the two unary ones
pub fn verify_basic_arithmetic<D: KeypadDriver>(driver: &mut D) {
    driver.press_all(&["1", "+", "3", "="]).unwrap();
    assert_eq!(driver.display(), "4");
    driver.clear();

    driver.press_all(&["1", "7", "2", "-", "7", "="]).unwrap();
    assert_eq!(driver.display(), "165");
    driver.clear();

    driver.press_all(&["8", "*", "7", "="]).unwrap();
    assert_eq!(driver.display(), "56");
    driver.clear();

    driver.press_all(&["9", "8", "7", ".", "5", "/", "4", "="]).unwrap();
    assert_eq!(driver.display(), "246.875");
    driver.clear();

    driver.press_all(&["1", "6", "^", "="]).unwrap();
    assert_eq!(driver.display(), "256");
    driver.clear();

    driver.press_all(&["6", "4", "SR", "="]).unwrap();
    assert_eq!(driver.display(), "8");
    driver.clear();
}

/// Verifies operator highlighting follows the pending operator
pub fn verify_highlighting<D: KeypadDriver>(driver: &mut D) {
    driver.press_all(&["5", "*"]).unwrap();
    assert_eq!(driver.highlight(), Some(Operator::Multiply));

    driver.press("Del").unwrap();
    assert_eq!(driver.highlight(), None);

    driver.press("SR").unwrap();
    assert_eq!(driver.highlight(), Some(Operator::SquareRoot));

    driver.press("=").unwrap();
    assert_eq!(driver.highlight(), None);
    driver.clear();
}

/// Verifies misuse handling, including the binary/unary asymmetry
pub fn verify_error_handling<D: KeypadDriver>(driver: &mut D) {
    // Second binary operator resets everything
    driver.press_all(&["5", "+", "3", "-"]).unwrap();
    assert_eq!(driver.display(), ERROR_DISPLAY);
    driver.press_all(&["2", "="]).unwrap();
    assert_eq!(driver.display(), ERROR_DISPLAY);
    driver.clear();

    // Unary misuse keeps the pending calculation alive
    driver.press_all(&["5", "+", "3", "^"]).unwrap();
    assert_eq!(driver.display(), ERROR_DISPLAY);
    driver.press("=").unwrap();
    assert_eq!(driver.display(), "8");
    driver.clear();

    // Division by zero
    driver.press_all(&["1", "/", "0", "="]).unwrap();
    assert_eq!(driver.display(), ERROR_DISPLAY);
    driver.clear();

    // Unknown labels are rejected before reaching the machine
    assert!(driver.press("%").is_err());
    assert_eq!(driver.display(), "");
}

/// Verifies M+, M-, MR and MC
pub fn verify_memory<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&["6", "*", "7", "=", "M+"]).unwrap();
    assert_eq!(driver.memory(), "42");
    assert_eq!(driver.display(), "");

    driver.press_all(&["2", "+", "1", "=", "M-"]).unwrap();
    assert_eq!(driver.memory(), "39");

    driver.press_all(&["MR", "+", "MR", "="]).unwrap();
    assert_eq!(driver.display(), "78");

    driver.press("MC").unwrap();
    assert_eq!(driver.memory(), "0");
    assert_eq!(driver.display(), "78");

    driver.press("M+").unwrap();
    assert_eq!(driver.memory(), "78");
    assert_eq!(driver.display(), "");

    // The result was consumed by the first store
    driver.press("M+").unwrap();
    assert_eq!(driver.display(), ERROR_DISPLAY);
    assert_eq!(driver.memory(), "78");
    driver.clear();
}

/// Verifies the 32-bit overflow guard
pub fn verify_overflow<D: KeypadDriver>(driver: &mut D) {
    driver
        .press_all(&["6", "5", "5", "3", "6", "*", "6", "5", "5", "3", "6", "="])
        .unwrap();
    assert_eq!(driver.display(), OVERFLOW_DISPLAY);
    driver.clear();
}

/// Verifies that C resets memory and the display
pub fn verify_clear<D: KeypadDriver>(driver: &mut D) {
    driver.press_all(&["3", "+", "4", "=", "M+", "1", "+"]).unwrap();
    driver.clear();
    assert_eq!(driver.display(), "");
    assert_eq!(driver.memory(), "0");
    assert_eq!(driver.highlight(), None);
}

/// Complete verification suite - runs every scenario
pub fn run_all_scenarios<D: KeypadDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_highlighting(driver);
    verify_error_handling(driver);
    verify_memory(driver);
    verify_overflow(driver);
    verify_clear(driver);
}
