//! Game session: board, players and whose turn it is

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::advisor::{Advisor, Suggestion};
use crate::board::{Board, Player, Pos};
use crate::error::{GameError, Result};
use crate::rules::{apply_move, check_winner, find_winning_line, has_won, WIN_LENGTH};
use crate::save::SavedGame;

/// Name that marks a player as computer-controlled, compared
/// case-insensitively. Save files only store names, so this is what
/// carries the controller across a save/load cycle.
pub const COMPUTER_NAME: &str = "C";

/// Who picks the moves for a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Computer,
}

/// Display name plus controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfo {
    name: String,
    controller: Controller,
}

impl PlayerInfo {
    /// Build from a name; blank names are rejected, `C` means computer.
    ///
    /// Names are kept as typed (after trimming). A line break is refused
    /// since each name takes exactly one line of a save file.
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        if name.contains(['\n', '\r']) {
            return Err(GameError::InvalidName(name.to_string()));
        }
        let controller = if name.eq_ignore_ascii_case(COMPUTER_NAME) {
            Controller::Computer
        } else {
            Controller::Human
        };
        Ok(Self {
            name: name.to_string(),
            controller,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    pub fn is_computer(&self) -> bool {
        self.controller == Controller::Computer
    }
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// One game between two players.
///
/// The session owns its board outright; every mutation goes through
/// [`GameSession::play`], which keeps the status in step with the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    players: [PlayerInfo; 2],
    turn: Player,
    status: GameStatus,
    last_move: Option<Pos>,
}

impl GameSession {
    /// Fresh game, empty board, player one to move
    #[instrument]
    pub fn new(player_one: &str, player_two: &str) -> Result<Self> {
        let players = [PlayerInfo::new(player_one)?, PlayerInfo::new(player_two)?];
        info!(one = players[0].name(), two = players[1].name(), "new game");
        Ok(Self {
            board: Board::new(),
            players,
            turn: Player::One,
            status: GameStatus::InProgress,
            last_move: None,
        })
    }

    /// Rebuild a session from a parsed save record.
    ///
    /// A board that already holds a five is reported as won (player one is
    /// checked first), a full board as a draw.
    pub fn from_saved(saved: SavedGame) -> Result<Self> {
        let players = [
            PlayerInfo::new(&saved.player_one)?,
            PlayerInfo::new(&saved.player_two)?,
        ];
        let status = evaluate(&saved.board);
        debug!(?status, turn = saved.turn.tag(), "session restored");
        Ok(Self {
            board: saved.board,
            players,
            turn: saved.turn,
            status,
            last_move: None,
        })
    }

    /// Snapshot in the save-file shape
    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            player_one: self.players[0].name.clone(),
            player_two: self.players[1].name.clone(),
            turn: self.turn,
            board: self.board,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is
    pub fn current_player(&self) -> Player {
        self.turn
    }

    pub fn player(&self, player: Player) -> &PlayerInfo {
        match player {
            Player::One => &self.players[0],
            Player::Two => &self.players[1],
        }
    }

    pub fn current_info(&self) -> &PlayerInfo {
        self.player(self.turn)
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.is_terminal() && self.current_info().is_computer()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Cells of the winning five, once someone has won
    pub fn winning_line(&self) -> Option<[Pos; WIN_LENGTH]> {
        match self.status {
            GameStatus::Won(player) => find_winning_line(&self.board, player),
            _ => None,
        }
    }

    /// Hand the move to the other player. No effect once the game is over.
    pub fn advance_turn(&mut self) {
        if !self.is_terminal() {
            self.turn = self.turn.opponent();
        }
    }

    /// Play `pos` for the current player.
    ///
    /// On success the status is updated (a win is checked before a draw,
    /// since the last stone can do both) and, if the game goes on, the turn
    /// passes to the opponent. On error nothing changes.
    #[instrument(skip(self), fields(player = self.turn.tag()))]
    pub fn play(&mut self, pos: Pos) -> Result<GameStatus> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        let mover = self.turn;
        apply_move(&mut self.board, pos, mover)?;
        self.last_move = Some(pos);
        debug!(%pos, "stone placed");

        self.status = if has_won(&self.board, mover) {
            info!(winner = self.player(mover).name(), "five in a row");
            GameStatus::Won(mover)
        } else if self.board.is_full() {
            info!("board full, draw");
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };

        self.advance_turn();
        Ok(self.status)
    }

    /// Parse human notation and play it
    pub fn play_notation(&mut self, text: &str) -> Result<GameStatus> {
        let pos = Pos::from_notation(text)?;
        self.play(pos)
    }

    /// Ask `advisor` for the current player's move and play it
    pub fn play_computer<R: Rng>(&mut self, advisor: &mut Advisor<R>) -> Result<Suggestion> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        let suggestion = advisor
            .suggest_move(&self.board, self.turn)
            .ok_or(GameError::GameOver)?;
        self.play(suggestion.pos)?;
        Ok(suggestion)
    }
}

fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
