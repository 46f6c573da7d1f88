use crate::game::{GameEngine, GameStatus, Player, Run};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game: &GameEngine<'_>,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(board_rows(game)), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Rows needed for the board plus its labels, borders and selector.
fn board_rows(game: &GameEngine<'_>) -> u16 {
    u16::try_from(game.board().height())
        .unwrap_or(u16::MAX)
        .saturating_add(5)
}

/// Map a player's color label to a terminal color. Anything ratatui cannot
/// parse is drawn white.
pub fn player_color(player: &Player) -> Color {
    player.color().parse().unwrap_or(Color::White)
}

fn render_header(frame: &mut Frame, game: &GameEngine<'_>, area: Rect) {
    let (status, color) = match game.status() {
        GameStatus::InProgress => {
            let player = game.current_player();
            (
                format!("Current Player: {} ({})", player.name(), player.color()),
                player_color(player),
            )
        }
        GameStatus::Won(player) => (
            format!("Game Over  |  {} wins", player.name()),
            player_color(player),
        ),
        GameStatus::Tied => ("Game Over  |  Tie".to_string(), Color::Gray),
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

fn render_board(frame: &mut Frame, game: &GameEngine<'_>, selected_column: usize, area: Rect) {
    let board = game.board();
    let width = board.width();
    let winning_run = if game.is_over() { game.winning_run() } else { None };
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let symbol = match game.occupant_at(row, col) {
                Ok(Some(_)) => " ● ",
                _ => " . ",
            };
            row_spans.push(Span::styled(symbol, cell_style(game, winning_run, row, col)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

/// Style of one board cell: the owner's color, the winning run reversed,
/// the most recent drop underlined.
fn cell_style(game: &GameEngine<'_>, winning_run: Option<Run>, row: usize, col: usize) -> Style {
    let Ok(Some(player)) = game.occupant_at(row, col) else {
        return Style::default().fg(Color::DarkGray);
    };

    let mut style = Style::default().fg(player_color(player));
    if winning_run.is_some_and(|run| run.contains(&(row, col))) {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    if game.last_move() == Some((row, col)) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  1-9: Drop in column  |  Enter: Drop  |  R: Restart  |  Q: Quit",
    ))
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
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_player_color_parses_names() {
        assert_eq!(player_color(&Player::new("A", "red")), Color::Red);
        assert_eq!(player_color(&Player::new("A", "yellow")), Color::Yellow);
        assert_eq!(player_color(&Player::new("A", "not-a-color")), Color::White);
    }

    #[test]
    fn test_last_move_and_winning_run_are_highlighted() {
        let (a, b) = (Player::new("Alice", "red"), Player::new("Bob", "yellow"));
        let mut game = GameEngine::new(&a, &b);
        game.apply_move(0).unwrap();
        game.apply_move(6).unwrap();

        let latest = cell_style(&game, None, 5, 6);
        assert_eq!(latest.fg, Some(Color::Yellow));
        assert!(latest.add_modifier.contains(Modifier::UNDERLINED));

        let earlier = cell_style(&game, None, 5, 0);
        assert_eq!(earlier.fg, Some(Color::Red));
        assert!(!earlier.add_modifier.contains(Modifier::UNDERLINED));

        assert_eq!(cell_style(&game, None, 0, 0).fg, Some(Color::DarkGray));

        for col in [1, 6, 2, 6, 3] {
            game.apply_move(col).unwrap();
        }
        let run = game.winning_run();
        assert!(cell_style(&game, run, 5, 2)
            .add_modifier
            .contains(Modifier::REVERSED));
        assert!(!cell_style(&game, run, 4, 6)
            .add_modifier
            .contains(Modifier::REVERSED));
    }

    #[test]
    fn test_board_rows_saturate_for_tall_boards() {
        let (a, b) = (Player::new("Alice", "red"), Player::new("Bob", "yellow"));
        let game = GameEngine::new(&a, &b);
        assert_eq!(board_rows(&game), 11);

        let tall = GameEngine::with_dimensions(&a, &b, 65_533, 4).unwrap();
        assert_eq!(board_rows(&tall), u16::MAX);
    }

    #[test]
    fn test_render_shows_pieces_and_winner() {
        let (a, b) = (Player::new("Alice", "red"), Player::new("Bob", "yellow"));
        let mut game = GameEngine::new(&a, &b);
        for col in [0, 6, 1, 6, 2, 6, 3] {
            game.apply_move(col).unwrap();
        }

        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal
            .draw(|f| render(f, &game, 3, &Some("The red player won!".to_string())))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Alice wins"));
        assert!(text.contains("The red player won!"));
        assert_eq!(text.matches('●').count(), 7);
    }
}
