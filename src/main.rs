//! Interactive terminal game against the search engine.
//!
//! The player picks a color and a difficulty (the search depth), enters
//! moves as coordinates ("e2e4", "a7a8n"), and gets the finished game back
//! as PGN when it ends.

use std::io::{self, BufRead, Write};

use damson_chess::engines::engine_search::SearchEngine;
use damson_chess::engines::engine_trait::{Engine, EngineLimits};
use damson_chess::game_state::chess_types::Color;
use damson_chess::game_state::position::Position;
use damson_chess::moves::move_encoding::Move;
use damson_chess::utils::pgn::{GameRecord, GameResult};
use damson_chess::utils::render_position::render_position_for;
use damson_chess::utils::san::{move_from_long_algebraic, move_to_san};

fn main() {
    println!();
    println!("Welcome to Damson Chess.");
    println!("Enter moves as a from and to coordinate, e.g. e2e4 or a1h8.");
    println!("When promoting, append the piece letter: a7a8n promotes to a");
    println!("knight, a7a8b to a bishop; with no letter you get a queen.");
    println!();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let player_color = loop {
        print!("Choose a colour (w/b): ");
        match read_token(&mut input).as_deref() {
            Some("w") => break Color::Light,
            Some("b") => break Color::Dark,
            Some(_) => continue,
            None => return,
        }
    };

    let difficulty = loop {
        print!("Choose a difficulty (1-4): ");
        let Some(text) = read_token(&mut input) else {
            return;
        };
        match text.parse::<u32>() {
            Ok(depth) if (1..=4).contains(&depth) => break depth,
            _ => continue,
        }
    };

    play_game(&mut input, player_color, difficulty);
}

fn play_game(input: &mut impl BufRead, player_color: Color, difficulty: u32) {
    let mut position = Position::new_game();
    let mut engine = SearchEngine::new(difficulty);
    let limits = EngineLimits::default();

    let (light_name, dark_name) = match player_color {
        Color::Light => ("Player".to_owned(), engine.name().to_owned()),
        Color::Dark => (engine.name().to_owned(), "Player".to_owned()),
    };
    let mut record = GameRecord::new(&light_name, &dark_name);

    loop {
        println!("{}", render_position_for(&position, player_color));

        if position.is_checkmate() || position.is_draw() {
            break;
        }

        let mv = if position.side_to_move == player_color {
            match prompt_player_move(input, &position) {
                Some(mv) => mv,
                None => {
                    println!("Input closed, abandoning the game.");
                    return;
                }
            }
        } else {
            println!("Engine thinking...");
            let reply = match engine.choose_move(&position, &limits) {
                Ok(output) => output,
                Err(message) => {
                    println!("Engine failed: {message}");
                    return;
                }
            };
            for line in &reply.info_lines {
                println!("  {line}");
            }
            match reply.best_move {
                Some(mv) => mv,
                None => break,
            }
        };

        record.push_san(move_to_san(&position, mv));
        if let Err(error) = position.do_move(mv) {
            println!("Move could not be applied: {error}");
            return;
        }
    }

    let result = if position.is_checkmate() {
        // The side to move is the one with no escape.
        GameResult::win_for(position.side_to_move.opposite())
    } else {
        GameResult::Draw
    };
    record.set_result(result);

    match result {
        GameResult::Draw => println!("The game was a draw."),
        _ if position.side_to_move == player_color => println!("You lost."),
        _ => println!("Congratulations, you won."),
    }

    println!();
    println!("Here was the game:");
    println!("{}", record.render());
}

fn prompt_player_move(input: &mut impl BufRead, position: &Position) -> Option<Move> {
    loop {
        print!("Please input a move: ");
        let text = read_token(input)?;
        match move_from_long_algebraic(position, &text) {
            Some(mv) => return Some(mv),
            None => println!("'{text}' is not a legal move here."),
        }
    }
}

/// One trimmed line from the input; `None` once the stream closes.
fn read_token(input: &mut impl BufRead) -> Option<String> {
    io::stdout().flush().ok();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_ascii_lowercase()),
    }
}
