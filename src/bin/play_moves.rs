//! Play coordinate moves from the start position and print the result.
//!
//! `play_moves e2e4 e7e5 --ai` plays the given moves through the engine
//! facade, optionally lets the AI answer, then prints the position.

use std::env;
use std::process::ExitCode;

use chess_core::board::Square;
use chess_core::engine::{ChessEngine, EngineConfig};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: play_moves <move1> <move2> ... [--ai]");
        return ExitCode::FAILURE;
    }

    let engine = ChessEngine::new(EngineConfig::default());
    let mut want_ai = false;

    for arg in &args {
        if arg == "--ai" {
            want_ai = true;
            continue;
        }
        let parsed = engine.snapshot().state().parse_move(arg);
        match parsed {
            Ok(mv) if engine.play_move(&mv) => {}
            Ok(_) => {
                eprintln!("move {arg} was rejected");
                return ExitCode::FAILURE;
            }
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }

    if want_ai {
        match engine.ai_move() {
            Ok(mv) if engine.play_move(&mv) => println!("ai_move: {mv}"),
            Ok(mv) => {
                eprintln!("ai move {mv} was rejected");
                return ExitCode::FAILURE;
            }
            Err(err) => println!("ai_move: none ({err})"),
        }
    }

    let snapshot = engine.snapshot();
    let state = snapshot.state();
    println!("fen: {}", state.to_fen());
    println!("side_to_move: {}", snapshot.side_to_move());
    println!("status: {}", snapshot.status());
    println!("evaluation: {}", engine.evaluation());

    let moves = engine.legal_moves();
    println!("legal_moves: {}", moves.len());
    for mv in moves.iter() {
        println!("{mv}");
    }

    let encoded = snapshot.encode();
    for row in 0..8 {
        let line: String = (0..8)
            .map(|col| match Square::new(row, col).and_then(|sq| state.piece_at(sq)) {
                Some((color, piece)) => piece.to_fen_char(color),
                None => '.',
            })
            .collect();
        let codes: Vec<String> = (0..8)
            .map(|col| format!("{:4}", encoded.get(row, col).unwrap_or(0)))
            .collect();
        println!("{line}  {}", codes.join(""));
    }

    ExitCode::SUCCESS
}
