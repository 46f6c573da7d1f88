use tracing::{debug, info};

use super::{Board, Cell, Player, Seat};
use crate::error::GameError;

/// Number of contiguous pieces needed to win.
pub const RUN_LENGTH: usize = 4;

/// Coordinates `(row, column)` of a winning run, starting at the cell the
/// scan found first.
pub type Run = [(usize, usize); RUN_LENGTH];

/// The four directions a run is read in from its starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// →
    Horizontal,
    /// ↓
    Vertical,
    /// ↘
    DiagonalDownRight,
    /// ↙
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Row and column step `(dy, dx)`
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus<'a> {
    InProgress,
    Won(&'a Player),
    Tied,
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult<'a> {
    Continue { next_player: &'a Player },
    Win { player: &'a Player },
    Tie,
}

impl MoveResult<'_> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveResult::Continue { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    InProgress,
    Won(Seat),
    Tied,
}

/// Turn order, rule enforcement and outcome for a single game between two
/// caller-owned players.
#[derive(Debug, Clone)]
pub struct GameEngine<'a> {
    players: [&'a Player; 2],
    board: Board,
    current: Seat,
    status: Status,
    move_count: usize,
    last_move: Option<(usize, usize)>,
}

impl<'a> GameEngine<'a> {
    /// Start a game on the standard 6x7 board. `first` moves first.
    pub fn new(first: &'a Player, second: &'a Player) -> Self {
        Self::from_board(first, second, Board::default())
    }

    /// Start a game on a `height` x `width` board.
    pub fn with_dimensions(
        first: &'a Player,
        second: &'a Player,
        height: usize,
        width: usize,
    ) -> Result<Self, GameError> {
        Ok(Self::from_board(first, second, Board::new(height, width)?))
    }

    fn from_board(first: &'a Player, second: &'a Player, board: Board) -> Self {
        debug!(
            height = board.height(),
            width = board.width(),
            first = first.name(),
            second = second.name(),
            "new game"
        );
        GameEngine {
            players: [first, second],
            board,
            current: Seat::First,
            status: Status::InProgress,
            move_count: 0,
            last_move: None,
        }
    }

    /// Get the player whose turn it is. After a win this stays the winner.
    pub fn current_player(&self) -> &'a Player {
        self.player(self.current)
    }

    /// Resolve a seat to the player registered in it
    pub fn player(&self, seat: Seat) -> &'a Player {
        self.players[seat.index()]
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player occupying a cell, or `None` if it is empty
    pub fn occupant_at(&self, row: usize, col: usize) -> Result<Option<&'a Player>, GameError> {
        Ok(self
            .board
            .occupant_at(row, col)?
            .seat()
            .map(|seat| self.player(seat)))
    }

    pub fn status(&self) -> GameStatus<'a> {
        match self.status {
            Status::InProgress => GameStatus::InProgress,
            Status::Won(seat) => GameStatus::Won(self.player(seat)),
            Status::Tied => GameStatus::Tied,
        }
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Cell `(row, column)` of the most recent accepted move
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Columns that would accept a move right now. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Rejected moves leave the board and the turn untouched. A move that
    /// completes four in a row is a win even if it also fills the board.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveResult<'a>, GameError> {
        if self.is_over() {
            debug!(column, "move rejected: game already over");
            return Err(GameError::GameAlreadyOver);
        }

        let row = self
            .board
            .lowest_open_row(column)
            .inspect_err(|err| debug!(column, %err, "move rejected"))?
            .ok_or_else(|| {
                debug!(column, "move rejected: column full");
                GameError::ColumnFull { column }
            })?;

        self.board.place(row, column, self.current)?;
        self.move_count += 1;
        self.last_move = Some((row, column));
        debug!(seat = ?self.current, row, column, "piece placed");

        if self.check_for_win() {
            self.status = Status::Won(self.current);
            let winner = self.current_player();
            info!(
                winner = winner.name(),
                moves = self.move_count,
                "game won"
            );
            return Ok(MoveResult::Win { player: winner });
        }

        if self.board.is_full() {
            self.status = Status::Tied;
            info!(moves = self.move_count, "game tied");
            return Ok(MoveResult::Tie);
        }

        self.current = self.current.other();
        Ok(MoveResult::Continue {
            next_player: self.current_player(),
        })
    }

    /// Whether the current player owns any run of four on the board.
    pub fn check_for_win(&self) -> bool {
        self.winning_run().is_some()
    }

    /// The first run of four owned by the current player, scanning rows top to
    /// bottom, columns left to right, then directions in [`Direction::ALL`]
    /// order.
    pub fn winning_run(&self) -> Option<Run> {
        for row in 0..self.board.height() {
            for col in 0..self.board.width() {
                for direction in Direction::ALL {
                    if let Some(run) = self.run_from(row, col, direction, self.current) {
                        return Some(run);
                    }
                }
            }
        }
        None
    }

    fn run_from(&self, row: usize, col: usize, direction: Direction, seat: Seat) -> Option<Run> {
        let (dy, dx) = direction.delta();
        let mut run = [(0, 0); RUN_LENGTH];

        for (step, slot) in run.iter_mut().enumerate() {
            let r = row as isize + dy * step as isize;
            let c = col as isize + dx * step as isize;
            match self.board.get(r, c) {
                Some(Cell::Occupied(owner)) if owner == seat => {
                    *slot = (r as usize, c as usize);
                }
                _ => return None,
            }
        }

        Some(run)
    }

    /// Start over on an empty board of the same size with the same players.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Seat::First;
        self.status = Status::InProgress;
        self.move_count = 0;
        self.last_move = None;
        info!("game reset");
    }
}
