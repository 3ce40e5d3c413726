//! Text rendering of the game.
//!
//! `frame` and `banner` build strings from state; `TextRenderer` is the
//! observer that writes them out as the engine changes.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use log::warn;

use crate::core::{GameMode, GameState, Phase, PlayerId};
use crate::events::GameObserver;
use crate::rules::{GameOutcome, RoundResult};
use crate::zones::{Board, Hand};

/// Board in chain order, each tile shown as it lies.
#[must_use]
pub fn board_line(board: &Board) -> String {
    if board.is_empty() {
        return "(empty)".to_owned();
    }
    board
        .placements()
        .map(|p| format!("[{}|{}]", p.left, p.right))
        .collect()
}

/// Hand tiles separated by spaces.
#[must_use]
pub fn hand_line(hand: &Hand) -> String {
    let tiles: Vec<String> = hand.iter().map(|t| t.to_string()).collect();
    tiles.join(" ")
}

/// Hand whose tiles the frame shows.
///
/// Against the CPU only the human hand is ever shown.
fn shown_seat(state: &GameState, mode: GameMode) -> PlayerId {
    match (mode, state.phase()) {
        (GameMode::HumanVsHuman, Phase::PlayerTurn(player)) => player,
        _ => PlayerId::FIRST,
    }
}

/// Full text frame for a state.
#[must_use]
pub fn frame(state: &GameState) -> String {
    let Some(mode) = state.mode() else {
        return "Select a game mode to start.\n".to_owned();
    };

    let mut out = String::new();
    if let Err(err) = write_frame(&mut out, state, mode) {
        warn!("failed to format frame: {err}");
    }
    out
}

fn write_frame(out: &mut String, state: &GameState, mode: GameMode) -> fmt::Result {
    let status = match state.phase() {
        Phase::PlayerTurn(player) => format!("{} to move", mode.seat_name(player)),
        Phase::CpuTurn => "CPU is thinking...".to_owned(),
        Phase::GameOver => "Round over".to_owned(),
        Phase::AwaitingStart => String::new(),
    };
    writeln!(out, "Round {}, turn {}: {status}", state.round(), state.turn_number())?;
    writeln!(out, "Board: {}", board_line(state.board()))?;
    writeln!(
        out,
        "{} Score: {}   {} Score: {}",
        mode.seat_name(PlayerId::FIRST),
        state.score(PlayerId::FIRST),
        mode.seat_name(PlayerId::SECOND),
        state.score(PlayerId::SECOND)
    )?;
    writeln!(out, "Deck: {} tiles", state.deck().len())?;

    let seat = shown_seat(state, mode);
    let other = seat.opponent();
    writeln!(out, "{} hand: {}", mode.seat_name(seat), hand_line(state.hand(seat)))?;
    writeln!(out, "{} holds {} tiles", mode.seat_name(other), state.hand(other).len())
}

/// Result banner for a finished round.
///
/// The round message is followed by the match message once a seat has
/// reached the goal.
#[must_use]
pub fn banner(outcome: &GameOutcome, mode: GameMode) -> String {
    let round = match (outcome.result, mode) {
        (RoundResult::Tie, _) => "It's a tie!".to_owned(),
        (RoundResult::Winner(p), GameMode::HumanVsCpu) if p == PlayerId::FIRST => "You win!".to_owned(),
        (RoundResult::Winner(_), GameMode::HumanVsCpu) => "CPU wins!".to_owned(),
        (RoundResult::Winner(p), GameMode::HumanVsHuman) => format!("{} wins!", mode.seat_name(p)),
    };

    let Some(winner) = outcome.match_winner else {
        return round;
    };
    let game = match mode {
        GameMode::HumanVsCpu if winner == PlayerId::FIRST => "Congratulations! You won the game!".to_owned(),
        GameMode::HumanVsCpu => "CPU won the game! Better luck next time!".to_owned(),
        GameMode::HumanVsHuman => format!("Congratulations! {} won the game!", mode.seat_name(winner)),
    };
    format!("{round}\n{game}")
}

/// Observer that writes a frame per state change and a banner per round.
#[derive(Debug)]
pub struct TextRenderer<W: Write = io::Stdout> {
    out: W,
    mode: Option<GameMode>,
}

impl TextRenderer {
    /// Render to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    /// Render to `out`.
    pub fn new(out: W) -> Self {
        Self { out, mode: None }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            warn!("failed to render: {err}");
        }
    }
}

impl<W: Write> GameObserver for TextRenderer<W> {
    fn on_state_change(&mut self, state: &GameState) {
        self.mode = state.mode();
        // The intermediate CPU frame is skipped; the CPU's move shows up in
        // the next one.
        if state.phase() != Phase::CpuTurn {
            let text = frame(state);
            self.emit(&text);
        }
    }

    fn on_game_over(&mut self, outcome: &GameOutcome) {
        let mode = self.mode.unwrap_or(GameMode::HumanVsCpu);
        let text = banner(outcome, mode);
        self.emit(&text);
    }
}
