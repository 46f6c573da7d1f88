use crate::error::GameError;
use crate::game::{GameEngine, MoveResult, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{error, warn};

pub struct App<'a> {
    game: GameEngine<'a>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl<'a> App<'a> {
    /// Wrap a freshly created game. The selector starts in the middle column.
    pub fn new(game: GameEngine<'a>) -> Self {
        let selected_column = game.board().width() / 2;
        App {
            game,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    pub fn game(&self) -> &GameEngine<'a> {
        &self.game
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press, unless the game has ended
        if !self.game.is_over() {
            self.message = None;
        }

        let width = self.game.board().width();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < width {
                    self.selected_column = column;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game.reset();
                self.selected_column = width / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game.apply_move(self.selected_column) {
            Ok(MoveResult::Continue { .. }) => {}
            Ok(MoveResult::Win { player }) => {
                self.message = Some(win_message(player));
            }
            Ok(MoveResult::Tie) => {
                self.message = Some("Tie!".to_string());
            }
            Err(GameError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(GameError::GameAlreadyOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) if err.is_fault() => {
                error!(%err, "board rejected a move it offered");
                self.message = Some(format!("Internal error: {err}"));
            }
            Err(err) => {
                warn!(%err, "selector pointed at an invalid column");
                self.message = Some("Invalid column!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.selected_column, &self.message);
    }
}

fn win_message(player: &Player) -> String {
    format!("The {} player won!", player.color())
}
