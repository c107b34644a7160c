//! FEN string parsing and serialization for [`GameState`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::game_state::GameState;
use crate::piece::Piece;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Decode the piece-placement field alone. The result is not validated.
    pub fn from_placement(placement: &str) -> Result<Board, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        // FEN ranks go from 8 to 1, matching row 0 to row 7.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut file: usize = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file += digit as usize;
                } else {
                    let piece =
                        Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                    let sq = u8::try_from(file)
                        .ok()
                        .and_then(|file| Square::new(row as u8, file))
                        .ok_or(FenError::BadRankLength {
                            row,
                            length: file + 1,
                        })?;
                    board.set(sq, Some(piece));
                    file += 1;
                }
            }

            if file != 8 {
                return Err(FenError::BadRankLength { row, length: file });
            }
        }

        Ok(board)
    }
}

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<GameState, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let board = Board::from_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(fields[2])?;

        let en_passant = if fields[3] == "-" {
            None
        } else {
            Some(
                Square::from_algebraic(fields[3]).ok_or_else(|| FenError::InvalidEnPassant {
                    found: fields[3].to_string(),
                })?,
            )
        };

        let halfmove_clock = fields[4].parse::<u32>().map_err(|_| FenError::InvalidMoveCounter {
            field: "halfmove clock",
            found: fields[4].to_string(),
        })?;

        let fullmove_number =
            fields[5]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidMoveCounter {
                    field: "fullmove number",
                    found: fields[5].to_string(),
                })?;

        board.validate()?;
        Ok(GameState::new(board, side_to_move, castling, en_passant)
            .with_counters(halfmove_clock, fullmove_number))
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.board().placement(),
            self.side_to_move(),
            self.castling()
        )?;

        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }

        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
