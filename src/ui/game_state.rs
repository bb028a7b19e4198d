//! Game state management for the Gomoku GUI

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::session::COMPUTER_NAME;
use crate::{save, Advisor, GameSession, GameStatus, Player, Pos, Suggestion};

/// Pause before a computer move so its stones appear one at a time
const COMPUTER_MOVE_DELAY: Duration = Duration::from_millis(350);

/// Who sits in which seat for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human plays X, computer plays O
    HumanVsComputer,
    /// Computer plays X, human plays O
    ComputerVsHuman,
    /// Hotseat
    HumanVsHuman,
    ComputerVsComputer,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::HumanVsComputer,
        GameMode::ComputerVsHuman,
        GameMode::HumanVsHuman,
        GameMode::ComputerVsComputer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GameMode::HumanVsComputer => "Human vs Computer",
            GameMode::ComputerVsHuman => "Computer vs Human",
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::ComputerVsComputer => "Computer vs Computer",
        }
    }

    /// Player names for seat one and seat two
    fn names(self, one: &str, two: &str) -> (String, String) {
        let computer = COMPUTER_NAME.to_string();
        match self {
            GameMode::HumanVsComputer => (one.to_string(), computer),
            GameMode::ComputerVsHuman => (computer, two.to_string()),
            GameMode::HumanVsHuman => (one.to_string(), two.to_string()),
            GameMode::ComputerVsComputer => (computer.clone(), computer),
        }
    }
}

/// Main game state
pub struct GameState {
    pub session: GameSession,
    advisor: Advisor,
    pub suggestion: Option<Suggestion>,
    pub message: Option<String>,
    /// Path typed into the save/load field
    pub save_path: String,
    /// Names offered for human seats in a new game
    pub human_names: [String; 2],
    last_move_at: Instant,
}

impl GameState {
    pub fn new(session: GameSession, advisor: Advisor, save_path: PathBuf) -> Self {
        let human_names = Player::ALL.map(|p| {
            let info = session.player(p);
            if info.is_computer() {
                format!("Player {}", p.tag())
            } else {
                info.name().to_string()
            }
        });

        Self {
            session,
            advisor,
            suggestion: None,
            message: None,
            save_path: save_path.display().to_string(),
            human_names,
            last_move_at: Instant::now(),
        }
    }

    /// Start over with the seats described by `mode`
    pub fn reset(&mut self, mode: GameMode) {
        let (one, two) = mode.names(&self.human_names[0], &self.human_names[1]);
        match GameSession::new(&one, &two) {
            Ok(session) => {
                info!(mode = mode.label(), "new game");
                self.session = session;
                self.suggestion = None;
                self.message = None;
                self.last_move_at = Instant::now();
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    pub fn is_human_turn(&self) -> bool {
        !self.session.is_terminal() && !self.session.is_computer_turn()
    }

    /// Attempt to place a stone for the human to move
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.session.is_terminal() {
            return Err("Game is over".to_string());
        }
        if self.session.is_computer_turn() {
            return Err("Not your turn".to_string());
        }

        self.session.play(pos).map_err(|e| e.to_string())?;
        self.after_move();
        Ok(())
    }

    /// Let the computer move if it is its turn and the pause has passed.
    /// Returns true when a stone was placed.
    pub fn step_computer(&mut self) -> bool {
        if self.session.is_terminal() || !self.session.is_computer_turn() {
            return false;
        }
        if self.last_move_at.elapsed() < COMPUTER_MOVE_DELAY {
            return false;
        }

        match self.session.play_computer(&mut self.advisor) {
            Ok(_) => {
                self.after_move();
                true
            }
            Err(e) => {
                warn!(error = %e, "computer could not move");
                self.message = Some(e.to_string());
                false
            }
        }
    }

    /// Time left before the computer may move
    pub fn computer_wait(&self) -> Duration {
        COMPUTER_MOVE_DELAY.saturating_sub(self.last_move_at.elapsed())
    }

    /// Ask the advisor for a move for whoever is to play
    pub fn request_suggestion(&mut self) {
        if self.session.is_terminal() {
            return;
        }
        let player = self.session.current_player();
        self.suggestion = self.advisor.suggest_move(self.session.board(), player);
        if self.suggestion.is_none() {
            self.message = Some("No move to suggest".to_string());
        }
    }

    pub fn save(&mut self) {
        let path = save::resolve_path(&self.save_path);
        self.message = Some(match save::store(&self.session, &path) {
            Ok(()) => format!("Game saved to {}", path.display()),
            Err(e) => format!("Could not save: {e}"),
        });
    }

    pub fn load(&mut self) {
        let path = save::resolve_path(&self.save_path);
        match save::load(&path) {
            Ok(session) => {
                self.session = session;
                self.suggestion = None;
                self.last_move_at = Instant::now();
                self.message = Some(format!("Loaded {}", path.display()));
            }
            Err(e) => self.message = Some(format!("Could not load: {e}")),
        }
    }

    /// Headline for the game-over card
    pub fn result_text(&self) -> Option<String> {
        match self.session.status() {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(format!(
                "Player {}: {} has won",
                player.tag(),
                self.session.player(player).name()
            )),
            GameStatus::Draw => Some("There was a draw".to_string()),
        }
    }

    fn after_move(&mut self) {
        self.suggestion = None;
        self.message = None;
        self.last_move_at = Instant::now();
    }
}
