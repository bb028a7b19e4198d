//! Terminal front-end
//!
//! Reads moves line by line, lets computer players move through the
//! advisor and prints the board before every human move. Typing
//! `save` (optionally followed by a file name) stores the game and asks
//! for the move again.

use std::io::{BufRead, Write};
use std::path::Path;

use rand::Rng;
use tracing::{debug, info};

use crate::advisor::Advisor;
use crate::error::Result;
use crate::save;
use crate::session::{GameSession, GameStatus};

const SAVE_COMMAND: &str = "save";

/// Print the welcome banner
pub fn print_banner(out: &mut impl Write) -> Result<()> {
    let stars = "*".repeat(47);
    writeln!(out, "{stars}")?;
    writeln!(out, "***{:^41}***", "WELCOME TO GOMOKU")?;
    writeln!(out, "{stars}")?;
    writeln!(out)?;
    Ok(())
}

/// Play `session` to the end, or until `input` runs dry.
///
/// Returns the status at the point the loop stopped; an `InProgress`
/// status means the input closed mid-game.
pub fn run<R: Rng>(
    session: &mut GameSession,
    advisor: &mut Advisor<R>,
    mut input: impl BufRead,
    out: &mut impl Write,
    save_path: &Path,
) -> Result<GameStatus> {
    let mut line = Vec::new();

    while !session.is_terminal() {
        let player = session.current_player();

        if session.is_computer_turn() {
            let suggestion = session.play_computer(advisor)?;
            writeln!(
                out,
                "Player {} ({}) plays {}",
                player.tag(),
                session.player(player).name(),
                suggestion.pos
            )?;
            continue;
        }

        writeln!(out)?;
        write!(out, "{}", session.board())?;

        loop {
            write!(out, "Player {} enter your move: ", player.tag())?;
            out.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                info!("input closed before the game ended");
                writeln!(out)?;
                return Ok(session.status());
            }

            // Undecodable bytes fail as a move, not as an I/O error
            let decoded = String::from_utf8_lossy(&line);
            let text = decoded.trim();
            if let Some(target) = save_target(text) {
                let path = match target {
                    "" => save_path.to_path_buf(),
                    file => save::resolve_path(file),
                };
                match save::store(session, &path) {
                    Ok(()) => writeln!(out, "Game saved to {}", path.display())?,
                    Err(e) => writeln!(out, "Could not save: {e}")?,
                }
                continue;
            }

            match session.play_notation(text) {
                Ok(_) => break,
                Err(e) => {
                    debug!(error = %e, input = text, "move rejected");
                    writeln!(out, "Invalid move try again")?;
                }
            }
        }
    }

    let status = session.status();
    match status {
        GameStatus::Won(player) => writeln!(
            out,
            "\nPlayer {}: {} has won\n",
            player.tag(),
            session.player(player).name()
        )?,
        GameStatus::Draw => writeln!(out, "\nThere was a draw\n")?,
        GameStatus::InProgress => {}
    }
    write!(out, "{}", session.board())?;
    Ok(status)
}

/// File argument of a `save` command, empty when none was given
fn save_target(text: &str) -> Option<&str> {
    match text.split_once(char::is_whitespace) {
        Some((SAVE_COMMAND, rest)) => Some(rest.trim()),
        None if text == SAVE_COMMAND => Some(""),
        _ => None,
    }
}
