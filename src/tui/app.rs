//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use noughts_core::{GameSession, Mode, MoveError, Outcome, Player, Position, TurnReport};
use tracing::{debug, info, warn};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Results of finished games since the program started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts a finished game.
    pub fn record(&mut self, outcome: Outcome) {
        if !outcome.is_terminal() {
            return;
        }
        match outcome.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {}  O {}  Draw {}", self.x_wins, self.o_wins, self.draws)
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    notice: Option<Outcome>,
    tally: Tally,
    last_event: String,
}

impl App {
    /// Creates a new application with an empty board.
    pub fn new(mode: Mode) -> Self {
        Self {
            session: GameSession::new(mode),
            cursor: Position::Center,
            notice: None,
            tally: Tally::default(),
            last_event: format!("New game: {}", mode),
        }
    }

    /// Current game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pending game-over notice, shown as a modal until acknowledged.
    pub fn notice(&self) -> Option<Outcome> {
        self.notice
    }

    /// Running results.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Status bar text.
    pub fn status_message(&self) -> String {
        let turn = match self.session.to_move() {
            Some(player) => format!("{} to move", player),
            None => "Game over".to_string(),
        };
        format!("{} | {} | {}", turn, self.last_event, self.tally)
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind == KeyEventKind::Release {
            return AppAction::Continue;
        }

        if self.notice.is_some() {
            return self.handle_notice_key(key.code);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => self.select_mode(Mode::ComputerOpponent),
            KeyCode::Char('t') | KeyCode::Char('T') => self.select_mode(Mode::TwoPlayer),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.session.reset();
                self.last_event = "Board reset".to_string();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            code => {
                if let Some(pos) = digit_position(code) {
                    self.cursor = pos;
                    self.play(pos);
                } else {
                    self.cursor = move_cursor(self.cursor, code);
                }
            }
        }
        AppAction::Continue
    }

    /// Handles a left click on a board square.
    ///
    /// Clicks are ignored while the game-over notice is shown.
    pub fn click(&mut self, pos: Position) {
        if self.notice.is_some() {
            return;
        }
        self.cursor = pos;
        self.play(pos);
    }

    fn handle_notice_key(&mut self, code: KeyCode) -> AppAction {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => AppAction::Quit,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => {
                if let Some(outcome) = self.session.acknowledge() {
                    debug!(%outcome, "Game over acknowledged");
                }
                self.notice = None;
                self.last_event = "New game".to_string();
                AppAction::Continue
            }
            _ => AppAction::Continue,
        }
    }

    fn select_mode(&mut self, mode: Mode) {
        self.session.select_mode(mode);
        self.last_event = format!("New game: {}", mode);
    }

    fn play(&mut self, pos: Position) {
        match self.session.play(pos) {
            Ok(report) => self.record_turn(report),
            Err(MoveError::CellOccupied(pos)) => {
                debug!(position = %pos, "Ignoring move on occupied square");
            }
            Err(e) => warn!(error = %e, "Move rejected"),
        }
    }

    fn record_turn(&mut self, report: TurnReport) {
        self.last_event = match report.reply {
            Some(reply) => format!("{}, {}", report.played, reply),
            None => report.played.to_string(),
        };
        if report.outcome.is_terminal() {
            info!(outcome = %report.outcome, "Showing game over notice");
            self.tally.record(report.outcome);
            self.notice = Some(report.outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use noughts_core::{Square, TurnState};

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_digit_plays_and_computer_answers() {
        let mut app = App::new(Mode::ComputerOpponent);
        press(&mut app, KeyCode::Char('1'));
        let board = app.session().board();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_enter_plays_cursor() {
        let mut app = App::new(Mode::TwoPlayer);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.session().board().get(Position::TopCenter),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.session().to_move(), Some(Player::O));
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut app = App::new(Mode::TwoPlayer);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.session().history().len(), 1);
        assert_eq!(app.session().to_move(), Some(Player::O));
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_win_shows_notice_then_resets() {
        let mut app = App::new(Mode::TwoPlayer);
        for key in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.notice(), Some(Outcome::Win(Player::X)));
        assert_eq!(app.tally().x_wins, 1);

        // Board input is blocked while the notice is up.
        press(&mut app, KeyCode::Char('9'));
        assert!(app.session().board().is_empty(Position::BottomRight));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.notice(), None);
        assert_eq!(app.session().state(), TurnState::WaitingForPlayerX);
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn test_mode_keys_reset_board() {
        let mut app = App::new(Mode::ComputerOpponent);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.session().mode(), Mode::TwoPlayer);
        assert!(app.session().history().is_empty());
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.session().mode(), Mode::ComputerOpponent);
    }

    #[test]
    fn test_click_plays_square() {
        let mut app = App::new(Mode::ComputerOpponent);
        app.click(Position::BottomRight);
        let board = app.session().board();
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(app.cursor(), Position::BottomRight);

        // Occupied squares are disabled.
        app.click(Position::Center);
        assert_eq!(app.session().history().len(), 2);
    }

    #[test]
    fn test_click_ignored_under_notice() {
        let mut app = App::new(Mode::TwoPlayer);
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            app.click(pos);
        }
        assert_eq!(app.notice(), Some(Outcome::Win(Player::X)));
        app.click(Position::BottomRight);
        assert_eq!(app.notice(), Some(Outcome::Win(Player::X)));
        assert_eq!(app.session().history().len(), 5);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Mode::ComputerOpponent);
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Quit);
    }

    #[test]
    fn test_tally_display() {
        let mut tally = Tally::default();
        tally.record(Outcome::Draw);
        tally.record(Outcome::Win(Player::O));
        tally.record(Outcome::InProgress);
        assert_eq!(tally.to_string(), "X 0  O 1  Draw 1");
    }
}
