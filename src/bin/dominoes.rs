//! Play dominoes in the terminal.
//!
//! Usage: cargo run --bin dominoes -- [--mode human-vs-cpu] [--goal 100] [--deal 7] [--seed N]
//!
//! Set `RUST_LOG=debug` to see every engine transition on stderr.

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::debug;

use rust_dominoes::{
    ChatLog, DrawOutcome, EngineError, GameMode, IllegalMoveReason, MatchConfig, Phase, TextRenderer, Tile,
    TurnEngine,
};

/// Two-player double-six dominoes
#[derive(Parser, Debug)]
#[command(name = "dominoes")]
#[command(about = "Play dominoes against the CPU or a friend", long_about = None)]
struct Args {
    /// Game mode: human-vs-cpu (1vPC) or human-vs-human (1v1)
    #[arg(long, default_value = "human-vs-cpu")]
    mode: GameMode,

    /// Cumulative score that wins the match
    #[arg(long, default_value_t = 100)]
    goal: u32,

    /// Tiles dealt to each player
    #[arg(long, default_value_t = 7)]
    deal: usize,

    /// Shuffle seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

/// A line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Play(u8, u8),
    Draw,
    Pass,
    Say(String),
    Next,
    Reset,
    Quit,
    Help,
}

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match word {
            "play" | "p" => {
                let pips: Vec<u8> = rest
                    .split_whitespace()
                    .map(str::parse)
                    .collect::<Result<_, _>>()
                    .map_err(|_| "usage: play <a> <b>".to_owned())?;
                match pips.as_slice() {
                    [a, b] => Ok(Command::Play(*a, *b)),
                    _ => Err("usage: play <a> <b>".to_owned()),
                }
            }
            "draw" | "d" => Ok(Command::Draw),
            "pass" => Ok(Command::Pass),
            "say" => Ok(Command::Say(rest.to_owned())),
            "next" => Ok(Command::Next),
            "reset" => Ok(Command::Reset),
            "quit" | "q" => Ok(Command::Quit),
            "help" | "?" => Ok(Command::Help),
            other => Err(format!("unknown command '{other}' (type 'help')")),
        }
    }
}

const HELP: &str = "\
commands:
  play <a> <b>   lay the tile [a|b]
  draw           take a tile from the deck
  pass           end your turn
  say <text>     post to the chat
  next           deal the next round
  reset          start the match over
  quit           leave";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = MatchConfig::new(args.mode)
        .with_score_goal(args.goal)
        .with_deal_count(args.deal);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut engine = TurnEngine::new();
    engine.subscribe(Box::new(TextRenderer::stdout()));
    engine.start_game(config.clone())?;

    let mut chat = ChatLog::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("\nGoodbye!");
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        debug!("command: {command:?}");

        let seat = engine.state().to_act();
        let result: Result<(), EngineError> = match command {
            Command::Quit => {
                println!("Goodbye!");
                return Ok(());
            }
            Command::Help => {
                println!("{HELP}");
                Ok(())
            }
            Command::Say(text) => {
                let author = seat
                    .and_then(|p| engine.state().mode().map(|m| m.seat_name(p)))
                    .unwrap_or("Player");
                match chat.send(author, &text) {
                    Some(message) => println!("[chat] {}: {}", message.author, message.text),
                    None => println!("(nothing to send)"),
                }
                Ok(())
            }
            Command::Next => engine.next_round(),
            Command::Reset => {
                engine.reset_game();
                chat.clear();
                engine.start_game(config.clone())
            }
            Command::Play(a, b) => match (seat, Tile::new(a, b)) {
                (Some(player), Ok(tile)) => engine.play_tile(player, tile),
                (None, _) => Err(EngineError::illegal(IllegalMoveReason::NotInPlay)),
                (_, Err(err)) => Err(err),
            },
            Command::Draw => match seat {
                Some(player) => engine.draw_tile(player).map(|drawn| {
                    if drawn == DrawOutcome::DeckEmpty {
                        println!("The deck is empty.");
                    }
                }),
                None => Err(EngineError::illegal(IllegalMoveReason::NotInPlay)),
            },
            Command::Pass => match seat {
                Some(player) => engine.end_turn(player),
                None => Err(EngineError::illegal(IllegalMoveReason::NotInPlay)),
            },
        };

        match result {
            Ok(()) => {}
            Err(EngineError::MatchOver) => println!("The match is over."),
            Err(err) => {
                println!("{err}");
                continue;
            }
        }
        let state = engine.state();
        if state.phase() == Phase::GameOver {
            if state.outcome().is_some_and(|o| o.is_match_over()) {
                println!("Type 'reset' to play again.");
            } else {
                println!("Type 'next' for the next round.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("play 1 6".parse::<Command>(), Ok(Command::Play(1, 6)));
        assert_eq!("  p 0 0 ".parse::<Command>(), Ok(Command::Play(0, 0)));
        assert_eq!("draw".parse::<Command>(), Ok(Command::Draw));
        assert_eq!("say good game".parse::<Command>(), Ok(Command::Say("good game".to_owned())));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!("play 1".parse::<Command>().is_err());
        assert!("play one six".parse::<Command>().is_err());
        assert!("fly".parse::<Command>().is_err());
    }
}
