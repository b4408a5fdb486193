//! Button panel for the terminal calculator
//!
//! The grid is built from [`LAYOUT`], one [`Token`] per cell, and indexed by
//! token so the app can flash the button behind a key press and mark the
//! pending operator.

use std::collections::HashMap;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Operator, Token};

/// Panel layout, row by row
/// ```text
/// [ ^ ] [ SR] [Del] [ C ]
/// [ M+] [ M-] [ MR] [ MC]
/// [ / ] [ 7 ] [ 8 ] [ 9 ]
/// [ * ] [ 4 ] [ 5 ] [ 6 ]
/// [ - ] [ 1 ] [ 2 ] [ 3 ]
/// [ + ] [ 0 ] [ . ] [ = ]
/// ```
pub const LAYOUT: [[Token; 4]; 6] = [
    [
        Token::Operator(Operator::Square),
        Token::Operator(Operator::SquareRoot),
        Token::Delete,
        Token::Clear,
    ],
    [
        Token::MemoryAdd,
        Token::MemorySubtract,
        Token::MemoryRecall,
        Token::MemoryClear,
    ],
    [
        Token::Operator(Operator::Divide),
        Token::Digit(7),
        Token::Digit(8),
        Token::Digit(9),
    ],
    [
        Token::Operator(Operator::Multiply),
        Token::Digit(4),
        Token::Digit(5),
        Token::Digit(6),
    ],
    [
        Token::Operator(Operator::Subtract),
        Token::Digit(1),
        Token::Digit(2),
        Token::Digit(3),
    ],
    [
        Token::Operator(Operator::Add),
        Token::Digit(0),
        Token::Decimal,
        Token::Equals,
    ],
];

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The button press this button sends
    pub token: Token,
    /// Whether this was the last button pressed
    pub pressed: bool,
    /// Whether this is the pending operator
    pub active: bool,
}

impl KeypadButton {
    /// Creates a released, inactive button
    #[must_use]
    pub fn new(token: Token) -> Self {
        Self {
            token,
            pressed: false,
            active: false,
        }
    }

    /// Returns the label shown on the button
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.token.label()
    }

    fn style(&self) -> Style {
        if self.active {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD);
        }
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match self.token {
            Token::Digit(_) => Style::default().fg(Color::White),
            Token::Operator(_) => Style::default().fg(Color::Yellow),
            Token::MemoryAdd | Token::MemorySubtract | Token::MemoryRecall | Token::MemoryClear => {
                Style::default().fg(Color::Magenta)
            }
            Token::Equals => Style::default().fg(Color::Green),
            Token::Clear | Token::Delete => Style::default().fg(Color::Red),
            Token::Decimal => Style::default().fg(Color::Cyan),
        }
    }
}

/// The keypad: buttons in row-major order plus a token index
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    index: HashMap<Token, usize>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad from [`LAYOUT`]
    #[must_use]
    pub fn new() -> Self {
        let buttons: Vec<KeypadButton> = LAYOUT
            .iter()
            .flat_map(|row| row.iter().copied().map(KeypadButton::new))
            .collect();
        let index = buttons
            .iter()
            .enumerate()
            .map(|(i, btn)| (btn.token, i))
            .collect();

        Self {
            buttons,
            index,
            cols: LAYOUT[0].len(),
            rows: LAYOUT.len(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the button that sends `token`
    #[must_use]
    pub fn find_button(&self, token: Token) -> Option<usize> {
        self.index.get(&token).copied()
    }

    /// Marks one button as the last pressed, releasing all others
    pub fn press_button(&mut self, index: usize) {
        self.release_all();
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.pressed = true;
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Marks the pending operator, or clears the mark with `None`
    pub fn set_active(&mut self, operator: Option<Operator>) {
        for btn in &mut self.buttons {
            btn.active = operator.is_some_and(|op| btn.token == Token::Operator(op));
        }
    }

    /// Returns the operator currently marked active
    #[must_use]
    pub fn active_operator(&self) -> Option<Operator> {
        self.buttons.iter().find_map(|btn| match btn.token {
            Token::Operator(op) if btn.active => Some(op),
            _ => None,
        })
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position to the token of the button under it
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Token> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border is one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.get_button_at(row, col).map(|btn| btn.token)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label());
                let label_x = x + (btn_width.saturating_sub(label.len() as u16)) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, btn.style()), btn_width);
                }
            }
        }
    }
}
