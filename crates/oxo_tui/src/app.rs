//! Application state and turn control.
//!
//! [`App`] owns the session state machine: mark selection, first-mover
//! selection, the alternating human/AI turns, and the finished screen. It
//! holds no terminal handles, so the whole flow is testable without a TUI.

use crate::input;
use crossterm::event::KeyCode;
use oxo_engine::{best_move, Board, GameStatus, Mark, Position};
use tracing::{debug, info};

/// Which role takes the first turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstMover {
    /// The human moves first.
    Human,
    /// The AI moves first.
    Ai,
}

/// Phase of the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to pick a mark.
    ChoosingSymbol,
    /// Waiting for the player to decide who moves first.
    ChoosingFirst,
    /// Game running, human and AI turns alternating.
    Playing,
    /// Game over with a decided outcome.
    Finished(GameStatus),
}

/// Main application state.
pub struct App {
    board: Board,
    phase: Phase,
    human: Mark,
    ai: Mark,
    to_move: Mark,
    cursor: Position,
    status_line: String,
    should_quit: bool,
    preset_symbol: Option<Mark>,
    preset_first: Option<FirstMover>,
}

impl App {
    /// Creates a new session. CLI presets skip the matching selection phase.
    pub fn new(symbol: Option<Mark>, first: Option<FirstMover>) -> Self {
        let mut app = Self {
            board: Board::new(),
            phase: Phase::ChoosingSymbol,
            human: Mark::X,
            ai: Mark::O,
            to_move: Mark::X,
            cursor: Position::Center,
            status_line: "Pick your mark.".to_string(),
            should_quit: false,
            preset_symbol: symbol,
            preset_first: first,
        };
        if let Some(mark) = symbol {
            app.assign_symbol(mark);
        }
        app
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns true while the cursor should be highlighted (human to place).
    pub fn cursor_visible(&self) -> bool {
        matches!(self.phase, Phase::Playing) && self.to_move == self.human
    }

    /// Returns the current status message.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the mark the human plays.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// Returns true when the game is running and it is the AI's turn.
    pub fn ai_to_move(&self) -> bool {
        matches!(self.phase, Phase::Playing) && self.to_move == self.ai
    }

    /// Handles a key press according to the current phase.
    pub fn handle_key(&mut self, key: KeyCode) {
        if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
            self.should_quit = true;
            return;
        }

        match self.phase {
            Phase::ChoosingSymbol => match key {
                KeyCode::Char('x') | KeyCode::Char('X') => self.assign_symbol(Mark::X),
                KeyCode::Char('o') | KeyCode::Char('O') => self.assign_symbol(Mark::O),
                _ => {}
            },
            Phase::ChoosingFirst => match key {
                KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Enter => {
                    self.start_game(FirstMover::Human)
                }
                KeyCode::Char('a') | KeyCode::Char('A') => self.start_game(FirstMover::Ai),
                _ => {}
            },
            Phase::Playing if self.to_move == self.human => match key {
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if let Some(position) = input::digit_to_position(c) {
                        self.try_place(position);
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => self.try_place(self.cursor),
                KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                    self.cursor = input::move_cursor(self.cursor, key);
                }
                _ => {}
            },
            // Input during the AI's turn is ignored.
            Phase::Playing => {}
            Phase::Finished(_) => {
                if matches!(key, KeyCode::Char('r') | KeyCode::Char('R')) {
                    self.restart();
                }
            }
        }
    }

    /// Plays the AI's turn, if one is due.
    ///
    /// `best_move` returns no move only on a decided board; if that ever
    /// happens mid-game, fall back to the first available cell rather than
    /// stalling the session.
    pub fn play_ai_turn(&mut self) {
        if !self.ai_to_move() {
            return;
        }

        let position = best_move(&self.board, self.ai, self.human)
            .or_else(|| self.board.available_moves().into_iter().next());
        let Some(position) = position else {
            self.phase = Phase::Finished(self.board.status());
            return;
        };

        match self.board.apply_move(position, self.ai) {
            Ok(()) => {
                debug!(%position, mark = %self.ai, "AI move applied");
                self.finish_move(self.ai, position);
            }
            Err(error) => {
                self.status_line = format!("AI move failed: {error}");
            }
        }
    }

    fn assign_symbol(&mut self, mark: Mark) {
        self.human = mark;
        self.ai = mark.opponent();
        debug!(human = %self.human, ai = %self.ai, "Marks assigned");

        if let Some(first) = self.preset_first {
            self.start_game(first);
        } else {
            self.phase = Phase::ChoosingFirst;
            self.status_line = format!("You play {}. Who goes first?", self.human);
        }
    }

    fn start_game(&mut self, first: FirstMover) {
        self.to_move = match first {
            FirstMover::Human => self.human,
            FirstMover::Ai => self.ai,
        };
        self.phase = Phase::Playing;
        self.status_line = match first {
            FirstMover::Human => format!("You start. Place your {}.", self.human),
            FirstMover::Ai => "The AI starts.".to_string(),
        };
        info!(human = %self.human, ai = %self.ai, ?first, "Game started");
    }

    fn try_place(&mut self, position: Position) {
        match self.board.apply_move(position, self.human) {
            Ok(()) => {
                debug!(%position, mark = %self.human, "Human move applied");
                self.finish_move(self.human, position);
            }
            Err(error) => {
                // Recoverable: report and stay in the human's turn.
                self.status_line = format!("{error}. Pick another cell.");
            }
        }
    }

    fn finish_move(&mut self, mark: Mark, position: Position) {
        let status = self.board.status();
        if status.is_over() {
            self.phase = Phase::Finished(status);
            let message = match status {
                GameStatus::Won(winner) if winner == self.human => "You win!",
                GameStatus::Won(_) => "The AI wins!",
                _ => "It's a draw!",
            };
            self.status_line = format!("{message} Press 'r' to play again or 'q' to quit.");
            info!(?status, "Game over");
        } else {
            self.to_move = mark.opponent();
            let actor = if mark == self.human { "You" } else { "The AI" };
            self.status_line = format!("{actor} played {}.", position.label());
        }
    }

    fn restart(&mut self) {
        debug!("Restarting game");
        *self = App::new(self.preset_symbol, self.preset_first);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxo_engine::Cell;

    #[test]
    fn test_selection_flow_reaches_playing() {
        let mut app = App::new(None, None);
        assert_eq!(app.phase(), Phase::ChoosingSymbol);

        app.handle_key(KeyCode::Char('o'));
        assert_eq!(app.phase(), Phase::ChoosingFirst);
        assert_eq!(app.human(), Mark::O);

        app.handle_key(KeyCode::Char('h'));
        assert_eq!(app.phase(), Phase::Playing);
        assert!(!app.ai_to_move());
    }

    #[test]
    fn test_presets_skip_both_selections() {
        let app = App::new(Some(Mark::O), Some(FirstMover::Ai));
        assert_eq!(app.phase(), Phase::Playing);
        assert_eq!(app.human(), Mark::O);
        assert!(app.ai_to_move());
    }

    #[test]
    fn test_first_preset_applies_after_manual_symbol_choice() {
        let mut app = App::new(None, Some(FirstMover::Human));
        app.handle_key(KeyCode::Char('x'));
        assert_eq!(app.phase(), Phase::Playing);
        assert!(!app.ai_to_move());
    }

    #[test]
    fn test_ai_opens_in_the_first_free_cell() {
        let mut app = App::new(Some(Mark::X), Some(FirstMover::Ai));
        app.play_ai_turn();

        assert_eq!(app.board().get(Position::TopLeft), Cell::Marked(Mark::O));
        assert!(!app.ai_to_move());
    }

    #[test]
    fn test_human_move_hands_the_turn_to_the_ai() {
        let mut app = App::new(Some(Mark::X), Some(FirstMover::Human));
        app.handle_key(KeyCode::Char('5'));

        assert_eq!(app.board().get(Position::Center), Cell::Marked(Mark::X));
        assert!(app.ai_to_move());

        app.play_ai_turn();
        // The only non-losing reply to a center opening is a corner, and the
        // first corner in scan order is the top-left.
        assert_eq!(app.board().get(Position::TopLeft), Cell::Marked(Mark::O));
        assert!(!app.ai_to_move());
    }

    #[test]
    fn test_occupied_cell_is_recoverable() {
        let mut app = App::new(Some(Mark::X), Some(FirstMover::Human));
        app.handle_key(KeyCode::Char('5'));
        app.play_ai_turn();

        let before = app.board().clone();
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(*app.board(), before);
        assert!(app.status_line().contains("occupied"));
        assert!(!app.ai_to_move(), "turn must stay with the human");
    }

    #[test]
    fn test_cursor_placement_with_enter() {
        let mut app = App::new(Some(Mark::X), Some(FirstMover::Human));
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.board().get(Position::TopCenter), Cell::Marked(Mark::X));
    }

    /// Walks a deliberately losing human line and checks the finished screen
    /// and replay.
    #[test]
    fn test_ai_win_and_restart() {
        let mut app = App::new(Some(Mark::X), Some(FirstMover::Human));

        // Human: top-left. AI answers in the center (the unique reply that
        // does not lose to a corner opening).
        app.handle_key(KeyCode::Char('1'));
        app.play_ai_turn();
        assert_eq!(app.board().get(Position::Center), Cell::Marked(Mark::O));

        // Human: top-center, threatening the top row. AI must block.
        app.handle_key(KeyCode::Char('2'));
        app.play_ai_turn();
        assert_eq!(app.board().get(Position::TopRight), Cell::Marked(Mark::O));

        // Human ignores the AI's new diagonal threat; the AI takes the win.
        app.handle_key(KeyCode::Char('9'));
        app.play_ai_turn();

        assert_eq!(app.phase(), Phase::Finished(GameStatus::Won(Mark::O)));
        assert!(app.status_line().contains("AI wins"));

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.phase(), Phase::Playing);
        assert_eq!(*app.board(), Board::new());
    }
}
