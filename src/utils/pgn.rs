//! Minimal PGN game record: a tag section, numbered movetext in standard
//! algebraic notation, and the result token.

use chrono::Local;

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    LightWins,
    DarkWins,
    Draw,
    Ongoing,
}

impl GameResult {
    pub const fn token(self) -> &'static str {
        match self {
            GameResult::LightWins => "1-0",
            GameResult::DarkWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Ongoing => "*",
        }
    }

    /// Result where `winner` delivered checkmate.
    pub const fn win_for(winner: Color) -> Self {
        match winner {
            Color::Light => GameResult::LightWins,
            Color::Dark => GameResult::DarkWins,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub tags: Vec<(String, String)>,
    pub moves: Vec<String>,
    pub result: GameResult,
}

impl GameRecord {
    pub fn new(light_name: &str, dark_name: &str) -> Self {
        let tags = vec![
            ("Event".to_owned(), "Casual game".to_owned()),
            ("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string()),
            ("White".to_owned(), light_name.to_owned()),
            ("Black".to_owned(), dark_name.to_owned()),
        ];
        Self {
            tags,
            moves: Vec::new(),
            result: GameResult::Ongoing,
        }
    }

    pub fn push_san(&mut self, san: String) {
        self.moves.push(san);
    }

    pub fn set_result(&mut self, result: GameResult) {
        self.result = result;
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for (key, value) in &self.tags {
            out.push_str(&format!("[{key} \"{value}\"]\n"));
        }
        out.push('\n');

        for (index, san) in self.moves.iter().enumerate() {
            if index % 2 == 0 {
                out.push_str(&format!("{}. ", index / 2 + 1));
            }
            out.push_str(san);
            out.push(' ');
        }
        out.push_str(self.result.token());
        out.push('\n');

        out
    }
}
