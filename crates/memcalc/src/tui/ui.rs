//! TUI rendering
//!
//! Display on the left, keypad in the middle, key help on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::Evaluated;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Returns where the keypad is drawn inside a frame of the given size
///
/// Mouse clicks are hit-tested against this rectangle.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    create_horizontal_layout(area)[1]
}

/// Splits the frame into main area, keypad and help sidebar
fn create_horizontal_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(28),    // Display and status
            Constraint::Length(26), // Keypad
            Constraint::Length(24), // Help sidebar
        ])
        .split(area)
        .to_vec()
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Creates the main area chunks
    fn create_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Display
                Constraint::Min(5),    // Status
            ])
            .split(area)
            .to_vec()
    }

    /// Renders the display line, right-aligned like a pocket calculator
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let update = self.app.update();
        let style = if update.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(update.display.as_str(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    /// Renders memory, pending operator and last result
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let machine = self.app.machine();
        let operator = self
            .app
            .pending_operator()
            .map_or("-", |op| op.symbol());
        let result = machine.result().map_or("-", Evaluated::display_text);
        let result_style = match machine.result() {
            Some(Evaluated::Error) => Style::default().fg(Color::Red),
            _ => Style::default().fg(Color::Cyan),
        };

        let memory_style = if machine.memory().is_zero() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        };

        let rows = [
            ("Memory", self.app.memory(), memory_style),
            ("Operator", operator, Style::default().fg(Color::Yellow)),
            ("Result", result, result_style),
        ];
        let items: Vec<ListItem> = rows
            .into_iter()
            .map(|(name, value, style)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{name:<9}"), Style::default().fg(Color::Gray)),
                    Span::styled(value.to_string(), style),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    /// Renders the help sidebar
    fn render_help_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>9}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Keys ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(DEMO_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let h_chunks = create_horizontal_layout(area);
        if h_chunks.len() < 3 {
            return;
        }

        let chunks = self.create_layout(h_chunks[0]);
        if chunks.len() >= 2 {
            self.render_display(chunks[0], buf);
            self.render_status(chunks[1], buf);
        }

        KeypadWidget::new(self.app.keypad()).render(h_chunks[1], buf);
        self.render_help_sidebar(h_chunks[2], buf);
    }
}

/// Title of the main frame
pub const DEMO_TITLE: &str = " memcalc ";

/// Key bindings shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Digits"),
    ("+ - * /", "Binary ops"),
    ("^", "Square"),
    ("r", "Square root"),
    ("Enter =", "Evaluate"),
    ("Bksp", "Delete"),
    ("Esc c", "Clear all"),
    ("p n", "M+ M-"),
    ("m M", "MR MC"),
    ("q", "Quit"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Operator, Token};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).unwrap()
    }

    fn draw(app: &CalculatorApp) -> Terminal<TestBackend> {
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
    }

    fn content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    // ===== Layout tests =====

    #[test]
    fn test_horizontal_layout() {
        let chunks = create_horizontal_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1].width, 26);
        assert_eq!(chunks[2].width, 24);
    }

    #[test]
    fn test_keypad_area() {
        let area = keypad_area(Rect::new(0, 0, 80, 24));
        assert_eq!(area, Rect::new(29, 1, 26, 22));
    }

    #[test]
    fn test_create_layout() {
        let app = CalculatorApp::new();
        let ui = CalculatorUI::new(&app);
        let chunks = ui.create_layout(Rect::new(1, 1, 28, 22));
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].height, 3);
    }

    // ===== Render tests =====

    #[test]
    fn test_render_blank() {
        let app = CalculatorApp::new();
        let text = content(&draw(&app));
        assert!(text.contains("memcalc"));
        assert!(text.contains("Display"));
        assert!(text.contains("Keypad"));
        assert!(text.contains("[SR]"));
        assert!(text.contains("[M+]"));
    }

    #[test]
    fn test_render_display_digits() {
        let mut app = CalculatorApp::new();
        for d in [4, 0, 9, 6] {
            app.press(Token::Digit(d));
        }
        let text = content(&draw(&app));
        assert!(text.contains("4096"));
    }

    #[test]
    fn test_render_display_right_aligned() {
        let mut app = CalculatorApp::new();
        app.press(Token::Digit(7));
        let terminal = draw(&app);
        let buffer = terminal.backend().buffer();
        // Display block spans x 1..29 on row 2; last inner column is 27
        assert_eq!(buffer[(27, 2)].symbol(), "7");
    }

    #[test]
    fn test_render_error_in_red() {
        let mut app = CalculatorApp::new();
        app.press(Token::Equals);
        let terminal = draw(&app);
        let buffer = terminal.backend().buffer();
        assert!(content(&terminal).contains("ERROR"));
        assert_eq!(buffer[(27, 2)].fg, Color::Red);
    }

    #[test]
    fn test_render_status() {
        let mut app = CalculatorApp::new();
        app.press(Token::Digit(3));
        app.press(Token::Operator(Operator::Multiply));
        let text = content(&draw(&app));
        assert!(text.contains("Memory"));
        assert!(text.contains("Operator *"));
    }

    #[test]
    fn test_render_memory_dim_until_stored() {
        let mut app = CalculatorApp::new();
        let terminal = draw(&app);
        // Status list starts at (2, 5); the value follows a 9-column name
        assert_eq!(terminal.backend().buffer()[(11, 5)].symbol(), "0");
        assert_eq!(terminal.backend().buffer()[(11, 5)].fg, Color::DarkGray);

        for token in [
            Token::Digit(2),
            Token::Operator(Operator::Add),
            Token::Digit(3),
            Token::Equals,
            Token::MemoryAdd,
        ] {
            app.press(token);
        }
        let terminal = draw(&app);
        assert_eq!(terminal.backend().buffer()[(11, 5)].symbol(), "5");
        assert_eq!(terminal.backend().buffer()[(11, 5)].fg, Color::Magenta);
    }

    #[test]
    fn test_render_help_sidebar() {
        let app = CalculatorApp::new();
        let text = content(&draw(&app));
        assert!(text.contains("Keys"));
        assert!(text.contains("Quit"));
        assert!(text.contains("Square root"));
    }

    #[test]
    fn test_render_tiny_terminal() {
        let app = CalculatorApp::new();
        let backend = TestBackend::new(10, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    #[test]
    fn test_click_through_rendered_keypad() {
        let mut app = CalculatorApp::new();
        let area = keypad_area(Rect::new(0, 0, 80, 24));
        // First row, first column is "^"; three rows per button
        let token = app.click(area, area.x + 2, area.y + 2);
        assert_eq!(token, Some(Token::Operator(Operator::Square)));
    }
}
