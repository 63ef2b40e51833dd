//! Interactive terminal game.

use anyhow::Result;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use strictly_mill::rules::{legal_moves, valid_destinations};
use strictly_mill::{GameController, GameStatus, MillConfig, Position, Side, TurnEvent, WinReason};
use tracing::{debug, instrument};

const HELP: &str = "\
Commands:
  <from> <to>   move a piece, e.g. `4 5` (nodes are numbered 1-9)
  moves [n]     list legal moves, or destinations from node n
  history       show moves played this game
  new           start a new game
  help          show this help
  quit          leave";

/// Runs the read-eval-print loop until the user quits or input ends.
#[instrument(skip_all)]
pub fn run(config: MillConfig, rng: StdRng) -> Result<()> {
    let mode = *config.opponent();
    let mut game = GameController::with_rng(config, rng);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "Strictly Mill ({} opponent). Type `help` for commands.",
        mode
    );
    print_game(&game);

    loop {
        print!("{} > ", game.state().current_player());
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        let words: Vec<&str> = line.split_whitespace().collect();
        debug!(?words, "Read command");

        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => return Ok(()),
            ["help"] => println!("{}", HELP),
            ["new"] => {
                game.new_game(mode);
                print_game(&game);
            }
            ["history"] => {
                for record in game.history() {
                    println!("{}", record);
                }
            }
            ["moves"] => {
                let board = *game.state().board();
                let side = *game.state().current_player();
                let moves: Vec<String> = legal_moves(&board, side)
                    .iter()
                    .map(|mv| mv.to_string())
                    .collect();
                println!("{}", moves.join(", "));
            }
            ["moves", from] => match Position::from_label_or_number(from) {
                Some(from) => {
                    let targets: Vec<String> = valid_destinations(game.state().board(), from)
                        .iter()
                        .map(|pos| (pos.to_index() + 1).to_string())
                        .collect();
                    println!("{}", targets.join(", "));
                }
                None => println!("Unknown node: {}", from),
            },
            [from, to] => {
                let (Some(from), Some(to)) = (
                    Position::from_label_or_number(from),
                    Position::from_label_or_number(to),
                ) else {
                    println!("Nodes are numbered 1-9");
                    continue;
                };

                let side = *game.state().current_player();
                match game.submit_move(from, to, side) {
                    Ok(report) => {
                        for event in &report.events {
                            print_event(event);
                        }
                        print_game(&game);
                    }
                    Err(e) => println!("{}", e),
                }
            }
            _ => println!("Unrecognized command. Type `help` for commands."),
        }
    }
}

fn print_event(event: &TurnEvent) {
    match event {
        TurnEvent::Moved(record) => println!("{}", record),
        TurnEvent::Won { winner } => println!("{} completes a line!", winner),
        TurnEvent::Blocked { side } => println!("{} cannot move.", side),
    }
}

fn print_game(game: &GameController) {
    let state = game.state();
    println!("\n{}\n", state.board().display());

    match state.status() {
        GameStatus::InProgress => println!("{} to move.", state.current_player()),
        GameStatus::Won { winner, reason } => {
            let how = match reason {
                WinReason::Line => "by completing a line",
                WinReason::Blockade => "by blockade",
            };
            println!(
                "Game over: {} wins {}. Type `new` to play again.",
                winner, how
            );
        }
    }

    let scores = game.scores();
    println!(
        "Score: {} {} - {} {}",
        Side::Black,
        scores.black,
        scores.white,
        Side::White
    );
}
