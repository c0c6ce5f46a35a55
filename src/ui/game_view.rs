use super::App;
use crate::game::{Glyphs, Grid, Player, Token, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_board(frame, app.engine().grid(), app.glyphs(), app.selected_column(), chunks[1]);
    render_message(frame, app.message(), chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let engine = app.engine();
    let (status, color) = match engine.winner() {
        Some(winner) => (format!("{} wins!", winner.name()), player_color(winner)),
        None if engine.state().is_terminal() => ("Draw".to_string(), Color::White),
        None => (
            format!("Current Player: {}", app.turn().name()),
            player_color(app.turn()),
        ),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn cell_color(cell: Option<Token>) -> Color {
    match cell {
        None => Color::DarkGray,
        Some(Token::Red) => Color::Red,
        Some(Token::Yellow) => Color::Yellow,
        Some(Token::Win) => Color::Green,
    }
}

fn render_board(
    frame: &mut Frame,
    grid: &Grid,
    glyphs: &Glyphs,
    selected_column: usize,
    area: Rect,
) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(COLS * 3 + 1))));

    // Top row first
    for row in (0..ROWS).rev() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            let cell = grid.get(col, row);
            row_spans.push(Span::styled(
                format!(" {} ", glyphs.cell(cell)),
                Style::default().fg(cell_color(cell)),
            ));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(COLS * 3 + 1))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  1-7 or Enter: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_current_player() {
        let app = App::new(Player::Yellow, Glyphs::default());
        let text = screen(&app);
        assert!(text.contains("Current Player: Yellow"));
        assert!(text.contains("Connect Four"));
    }

    #[test]
    fn test_render_marks_winning_line() {
        let mut app = App::default();
        for key in ['1', '2', '1', '2', '1', '2', '1'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE));
        }
        let text = screen(&app);
        assert!(text.contains("Red wins!"));
        assert_eq!(text.matches('⭐').count(), 4);
    }

    #[test]
    fn test_render_uses_configured_glyphs() {
        let mut app = App::new(Player::Red, Glyphs::ascii());
        for key in ['1', '2', '1', '2', '1', '2'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE));
        }
        let text = screen(&app);
        assert!(text.contains("║ R  Y  .  .  .  .  .  ║"));
        assert!(!text.contains('●'));

        app.handle_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE));
        let text = screen(&app);
        assert!(text.contains("║ *  Y  .  .  .  .  .  ║"));
        assert_eq!(text.matches('*').count(), 4);
    }
}
