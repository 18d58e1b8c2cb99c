// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, error, game_config, movegen, tile};

// rack: "KISSA?", '?' for blank.
// board: one string per row, '.' for empty, upper case letters, lower case
// for blanks. all of it counts as already played.
// lexicon: word list file, one word per line.
// difficulty: easy, medium or hard (default).
// seed: only matters for easy.
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct Question {
    pub lexicon: String,
    pub rack: String,
    pub board: Vec<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: game_config::Difficulty,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_difficulty() -> game_config::Difficulty {
    game_config::Difficulty::Hard
}

#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
pub struct JsonTile {
    pub row: i8,
    pub col: i8,
    // upper case, also for blanks.
    pub letter: char,
    pub blank: bool,
}

// across plays: down=false, lane=row, idx=col (0-based).
// down plays: down=true, lane=col, idx=row (0-based).
// tiles lists only the new tiles.
#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "action")]
pub enum JsonPlay {
    #[serde(rename = "pass")]
    Pass,
    #[serde(rename = "play")]
    Play {
        down: bool,
        lane: i8,
        idx: i8,
        word: String,
        score: i16,
        tiles: Vec<JsonTile>,
        notation: String,
    },
}

impl From<&movegen::Move> for JsonPlay {
    #[inline(always)]
    fn from(found: &movegen::Move) -> Self {
        Self::Play {
            down: found.down,
            lane: found.lane,
            idx: found.idx,
            word: found.word.clone(),
            score: found.score,
            tiles: found
                .placements
                .iter()
                .map(|p| JsonTile {
                    row: p.row,
                    col: p.col,
                    letter: p.tile.face().unwrap_or('?'),
                    blank: p.tile.is_blank(),
                })
                .collect(),
            notation: found.to_string(),
        }
    }
}

impl From<Option<&movegen::Move>> for JsonPlay {
    #[inline(always)]
    fn from(found: Option<&movegen::Move>) -> Self {
        match found {
            Some(x) => x.into(),
            None => Self::Pass,
        }
    }
}

// Turns a question's rack and board into engine types, refusing anything the
// tile set could not have produced.
pub struct Kibitzer {
    pub available_tally: Vec<u8>,
    pub board: board::Board,
    pub rack: Vec<tile::Tile>,
}

impl Kibitzer {
    pub fn new(game_config: &game_config::GameConfig<'_>) -> Self {
        Self {
            available_tally: Vec::new(),
            board: board::Board::new(game_config.board_layout().dim()),
            rack: Vec::new(),
        }
    }

    fn take_from_tally(&mut self, alphabet: &alphabet::Alphabet<'_>, idx: u8) -> error::Returns<()> {
        if self.available_tally[idx as usize] > 0 {
            self.available_tally[idx as usize] -= 1;
        } else {
            return_error!(format!(
                "too many tile {} (bag contains only {})",
                alphabet.label(idx),
                alphabet.freq(idx),
            ));
        }
        Ok(())
    }

    pub fn prepare(
        &mut self,
        game_config: &game_config::GameConfig<'_>,
        rack: &str,
        board_rows: &[String],
    ) -> error::Returns<()> {
        let alphabet = game_config.alphabet();
        self.available_tally.clear();
        self.available_tally
            .extend((0..alphabet.len()).map(|idx| alphabet.freq(idx)));

        self.rack = alphabet.parse_rack(rack)?;
        let rack_size = game_config.rack_size() as usize;
        if self.rack.len() > rack_size {
            return_error!(format!(
                "rack has {} tiles, at most {} allowed",
                self.rack.len(),
                rack_size
            ));
        }
        let rows = board_rows.iter().map(String::as_str).collect::<Vec<_>>();
        self.board = board::Board::from_rows(alphabet, game_config.board_layout().dim(), &rows)?;

        let mut used = Vec::with_capacity(self.rack.len() + 100);
        used.extend(self.rack.iter().copied());
        used.extend(self.board.tiles().map(|(_, _, x)| x.tile));
        for t in used {
            let idx = match t {
                tile::Tile::Blank { .. } => 0,
                tile::Tile::Letter { letter, .. } => alphabet.index_of(letter).unwrap_or(0),
            };
            self.take_from_tally(alphabet, idx)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_rows() -> Vec<String> {
        vec![".".repeat(15); 15]
    }

    #[test]
    fn question_parses_with_defaults() {
        let question = serde_json::from_str::<Question>(
            r#"{ "lexicon": "words.txt", "rack": "KISSA", "board": [] }"#,
        )
        .unwrap();
        assert_eq!(question.difficulty, game_config::Difficulty::Hard);
        assert_eq!(question.seed, None);
        let question = serde_json::from_str::<Question>(
            r#"{ "lexicon": "x", "rack": "", "board": [], "difficulty": "easy", "seed": 5 }"#,
        )
        .unwrap();
        assert_eq!(question.difficulty, game_config::Difficulty::Easy);
        assert_eq!(question.seed, Some(5));
    }

    #[test]
    fn prepare_counts_tiles() {
        let game_config = game_config::make_finnish_game_config();
        let mut kibitzer = Kibitzer::new(&game_config);
        let mut rows = empty_rows();
        rows[7] = ".......ON......".into();
        kibitzer.prepare(&game_config, "KISSA?", &rows).unwrap();
        assert_eq!(kibitzer.rack.len(), 6);
        assert!(kibitzer.board.is_fixed(7, 7));

        // three blanks in play, the set has two.
        rows[7] = ".......ab......".into();
        assert!(kibitzer.prepare(&game_config, "?", &rows).is_err());
        // one C in the set.
        assert!(kibitzer.prepare(&game_config, "CC", &empty_rows()).is_err());
        assert!(kibitzer.prepare(&game_config, "AAAAAAAA", &empty_rows()).is_err());
        assert!(kibitzer.prepare(&game_config, "A", &rows[..3]).is_err());
    }

    #[test]
    fn answers_serialize_with_action_tag() {
        assert_eq!(
            serde_json::to_string(&JsonPlay::from(None)).unwrap(),
            r#"{"action":"pass"}"#
        );
        let found = movegen::Move {
            down: false,
            lane: 7,
            idx: 7,
            word: "on".into(),
            placements: vec![crate::placement::Placement {
                row: 7,
                col: 8,
                tile: tile::Tile::blank(0).assigned('N'),
                rack_index: 2,
            }],
            words: Vec::new(),
            score: 2,
        };
        let value = serde_json::to_value(JsonPlay::from(&found)).unwrap();
        assert_eq!(value["action"], "play");
        assert_eq!(value["notation"], "8H On 2");
        assert_eq!(value["tiles"][0]["letter"], "N");
        assert_eq!(value["tiles"][0]["blank"], true);
    }
}
