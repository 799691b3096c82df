use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::{Parser, Subcommand};
use thiserror::Error;

use chess_referee::chess_errors::ChessErrors;
use chess_referee::game_state::board::Board;
use chess_referee::game_state::chess_types::{Color, Outcome};
use chess_referee::game_state::game_state::GameState;
use chess_referee::move_generation::perft::{perft, perft_divide};
use chess_referee::utils::algebraic::parse_square_pair;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Referees a game between two players typing moves on stdin (DEFAULT)
    Play {
        /// Black moves first instead of White
        #[arg(long)]
        black_first: bool,
    },
    /// Counts legal move sequences from the standard position
    Perft {
        /// Number of plies to walk
        depth: u8,
        /// Shows node count below each root move
        #[arg(short)]
        divide: bool,
    },
}

const HELP: &str = "commands: <from><to> (e2e4 or \"e2 e4\"), moves <square>, undo, \
draw, accept, decline, resign, board, help, quit";

fn main() {
    env_logger::init();

    let arguments = Arguments::parse();
    let result = match arguments.command.unwrap_or(Command::Play { black_first: false }) {
        Command::Play { black_first } => {
            let first = if black_first { Color::Black } else { Color::White };
            play(GameState::with_starting_color(first))
        }
        Command::Perft { depth, divide } => run_perft(depth, divide),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Chess(#[from] ChessErrors),
}

fn run_perft(depth: u8, divide: bool) -> Result<(), CliError> {
    let mut board = Board::standard();
    println!("{board}");

    let start = Instant::now();
    if divide {
        let mut total = 0;
        for (mv, nodes) in perft_divide(&mut board, Color::White, depth)? {
            println!("{}{}: {nodes}", mv.from, mv.to);
            total += nodes;
        }
        println!("\nnodes: {total}");
    } else {
        let counts = perft(&mut board, Color::White, depth)?;
        println!("nodes: {}", counts.nodes);
        println!("captures: {}", counts.captures);
        println!("en passant: {}", counts.en_passant);
        println!("castles: {}", counts.castles);
        println!("promotions: {}", counts.promotions);
    }
    println!("time: {:?}", start.elapsed());
    Ok(())
}

fn play(mut game: GameState) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", game.board());
    println!("{HELP}");
    prompt(&mut stdout, &game)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let color = game.turn();
        // Draw offers are answered by whoever did not make them.
        let responder = game.draw_requested_by().map_or(color, Color::opposite);

        let reply: Result<Option<String>, ChessErrors> = match words.next() {
            None => Ok(None),
            Some("quit" | "exit") => break,
            Some("help") => Ok(Some(HELP.to_owned())),
            Some("board") => Ok(Some(game.board().to_string())),
            Some("moves") => match words.next() {
                Some(square) => game
                    .query_moves_notation(color, square)
                    .map(|targets| Some(format!("{square}: {}", targets.join(" ")))),
                None => Ok(Some("usage: moves <square>".to_owned())),
            },
            Some("undo") => game
                .undo_last_move()
                .map(|mv| Some(format!("took back {mv}\n{}", game.board()))),
            Some("draw") => game
                .request_draw(color)
                .map(|()| Some(format!("{color} offers a draw"))),
            Some("accept") => game
                .accept_draw(responder)
                .map(|()| Some(format!("{responder} accepts the draw"))),
            Some("decline") => game
                .decline_draw(responder)
                .map(|()| Some(format!("{responder} declines the draw"))),
            Some("resign") => game.resign(color).map(|()| Some(format!("{color} resigns"))),
            Some(_) => parse_square_pair(line.trim())
                .and_then(|(from, to)| game.make_move(color, from, to))
                .map(|mv| Some(format!("{mv}\n{}", game.board()))),
        };

        match reply {
            Ok(Some(text)) => println!("{text}"),
            Ok(None) => {}
            Err(err) => println!("{err}"),
        }

        if game.outcome().is_over() {
            announce(game.outcome());
        } else if game.is_king_attacked(game.turn())? {
            println!("{} is in check", game.turn());
        }
        prompt(&mut stdout, &game)?;
    }
    Ok(())
}

fn announce(outcome: Outcome) {
    match outcome {
        Outcome::Playing => {}
        Outcome::Draw => println!("game drawn"),
        Outcome::WhiteWins => println!("White wins"),
        Outcome::BlackWins => println!("Black wins"),
    }
}

fn prompt(stdout: &mut io::Stdout, game: &GameState) -> io::Result<()> {
    if game.outcome().is_over() {
        write!(stdout, "(game over, undo or quit) > ")?;
    } else {
        write!(stdout, "{} > ", game.turn())?;
    }
    stdout.flush()
}
