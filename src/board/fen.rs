/* =======================================================================
Artisan is a chess playing engine.
Copyright (C) 2024-2025, the Artisan authors

Artisan is written in the Rust programming language. It builds on
concepts which are well-known and are in use by most if not all
classical alpha/beta-based chess engines.

Artisan is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License version 3 as published by
the Free Software Foundation.

Artisan is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License
for more details.

You should have received a copy of the GNU General Public License along
with this program.  If not, see <http://www.gnu.org/licenses/>.
======================================================================= */

// fen.rs reads an FEN-string and converts it into a position, and writes a
// position back out as an FEN-string. If parsing fails, no position is
// produced. Note that checking position legality is not the responsibility
// of this module: it is perfectly possible to set up a position with two
// white kings, or with black in check but white to move.

use super::{
    defs::{Pieces, Squares, BB_SQUARES, SQUARE_NAME},
    Position,
};
use crate::{
    defs::{Sides, Square, MAX_GAME_MOVES, MAX_MOVE_RULE},
    misc::parse,
};
use if_chain::if_chain;
use std::ops::RangeInclusive;

/** Definitions used by the FEN-reader */
const NR_OF_FEN_PARTS: usize = 6;
const SHORT_FEN_PARTS: usize = 4;
const LIST_OF_PIECES: &str = "kqrbnpKQRBNP";
const EP_SQUARES_BLACK: RangeInclusive<Square> = Squares::A6..=Squares::H6;
const EP_SQUARES_WHITE: RangeInclusive<Square> = Squares::A3..=Squares::H3;
const WHITE_OR_BLACK: &str = "wb";
const CASTLING_RIGHTS: &str = "KQkq-";
const SPLITTER: char = '/';
const DASH: char = '-';
const SPACE: char = ' ';

type FenPartParser = fn(position: &mut Position, part: &str) -> bool;
pub type FenResult = Result<(), u8>;

impl Position {
    // Parse a FEN-string into a new position. The returned error number
    // indexes ENGINE_RUN_ERRORS: 0 for a wrong part count, 1..=6 for the
    // part that failed.
    pub fn from_fen(fen_string: &str) -> Result<Position, u8> {
        let fen_parts: Vec<String> = {
            let mut parts: Vec<String> = fen_string
                .split(SPACE)
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect();

            // A short FEN without the move counters gets default counters.
            if parts.len() == SHORT_FEN_PARTS {
                parts.append(&mut vec![String::from("0"), String::from("1")]);
            }

            parts
        };

        if fen_parts.len() != NR_OF_FEN_PARTS {
            return Err(0);
        }

        // Create an array of function pointers; one parsing function per part.
        let fen_parsers: [FenPartParser; 6] = [pieces, color, castling, ep, hmc, fmn];
        let mut position = Position::new();

        for (i, parser) in fen_parsers.iter().enumerate() {
            if !parser(&mut position, &fen_parts[i]) {
                return Err(i as u8 + 1);
            }
        }

        // Parsing succeeded: compute the derived fields.
        position.init();
        Ok(position)
    }

    // Write the position out as a FEN-string. The halfmove clock is not
    // part of the position model, so that field is written as zero; the
    // fullmove number is reconstructed from the ply count.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        // Part 1: piece placement, ranks from eight down to one.
        for rank_start in (0..64).step_by(8) {
            let mut empty_run = 0;
            for square in rank_start..rank_start + 8 {
                match self.piece_on(square) {
                    Some((side, piece)) => {
                        if empty_run > 0 {
                            fen.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        let c = piece_character(piece);
                        if side == Sides::WHITE {
                            fen.push(c.to_ascii_uppercase());
                        } else {
                            fen.push(c);
                        }
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                fen.push_str(&empty_run.to_string());
            }
            if rank_start < 56 {
                fen.push(SPLITTER);
            }
        }

        // Part 2: active color.
        fen.push(SPACE);
        fen.push(if self.white_to_move { 'w' } else { 'b' });

        // Part 3: castling availability.
        fen.push(SPACE);
        let mut rights = String::new();
        if self.pieces[Sides::WHITE].castle_kingside {
            rights.push('K');
        }
        if self.pieces[Sides::WHITE].castle_queenside {
            rights.push('Q');
        }
        if self.pieces[Sides::BLACK].castle_kingside {
            rights.push('k');
        }
        if self.pieces[Sides::BLACK].castle_queenside {
            rights.push('q');
        }
        if rights.is_empty() {
            rights.push(DASH);
        }
        fen.push_str(&rights);

        // Part 4: en-passant target square.
        fen.push(SPACE);
        if self.en_passant > 0 {
            fen.push_str(SQUARE_NAME[self.en_passant.trailing_zeros() as usize]);
        } else {
            fen.push(DASH);
        }

        // Parts 5 and 6: halfmove clock and fullmove number.
        fen.push_str(" 0 ");
        let fullmove = (self.half_move_count / 2) + 1;
        fen.push_str(&fullmove.to_string());

        fen
    }
}

fn piece_character(piece: usize) -> char {
    match piece {
        Pieces::PAWN => 'p',
        Pieces::KNIGHT => 'n',
        Pieces::BISHOP => 'b',
        Pieces::ROOK => 'r',
        Pieces::QUEEN => 'q',
        _ => 'k',
    }
}

// ===== Private parsing functions, one per FEN part =====

// Part 1: Parsing piece setup. Put each piece into its respective bitboard.
fn pieces(position: &mut Position, part: &str) -> bool {
    let mut square = 0usize;
    let mut file = 0u8;

    // Assume parsing succeeds.
    let mut result = true;

    // Parse each character; it should be a piece, square count, or splitter.
    for c in part.chars() {
        if square > 63 && c != SPLITTER {
            return false;
        }
        let bb_square = BB_SQUARES[square.min(63)];
        let side = if c.is_uppercase() {
            Sides::WHITE
        } else {
            Sides::BLACK
        };

        match c.to_ascii_lowercase() {
            'k' => position.pieces[side].bb_pieces[Pieces::KING] |= bb_square,
            'q' => position.pieces[side].bb_pieces[Pieces::QUEEN] |= bb_square,
            'r' => position.pieces[side].bb_pieces[Pieces::ROOK] |= bb_square,
            'b' => position.pieces[side].bb_pieces[Pieces::BISHOP] |= bb_square,
            'n' => position.pieces[side].bb_pieces[Pieces::KNIGHT] |= bb_square,
            'p' => position.pieces[side].bb_pieces[Pieces::PAWN] |= bb_square,
            '1'..='8' => {
                if let Some(x) = c.to_digit(10) {
                    square += x as usize;
                    file += x as u8;
                }
            }
            SPLITTER => {
                // Each rank must contain exactly eight files.
                result = file == 8;
                file = 0;
            }
            // Unknown character: result becomes false.
            _ => result = false,
        }

        // If piece found, advance to the next file.
        if LIST_OF_PIECES.contains(c) {
            square += 1;
            file += 1;
        }

        // As soon as something is wrong, stop parsing.
        if !result {
            break;
        }
    }

    result && square == 64 && file == 8
}

// Part 2: Parse color to move: White or Black
fn color(position: &mut Position, part: &str) -> bool {
    // Assume parsing fails.
    let mut result = false;

    // Length should be 1, and the character should be 'w' or 'b'.
    if_chain! {
        if part.len() == 1;
        if let Some(x) = part.chars().next();
        if WHITE_OR_BLACK.contains(x);
        then {
            position.white_to_move = x == 'w';
            result = true;
        }
    }

    result
}

// Part 3: Parse castling rights.
fn castling(position: &mut Position, part: &str) -> bool {
    let length = part.len();
    let mut char_ok = 0;

    // There should be 1 to 4 castling rights. If no player has castling
    // rights, the character is '-'.
    if (1..=4).contains(&length) {
        for c in part.chars() {
            if CASTLING_RIGHTS.contains(c) {
                // Count correct characters
                char_ok += 1;
                match c {
                    'K' => position.pieces[Sides::WHITE].castle_kingside = true,
                    'Q' => position.pieces[Sides::WHITE].castle_queenside = true,
                    'k' => position.pieces[Sides::BLACK].castle_kingside = true,
                    'q' => position.pieces[Sides::BLACK].castle_queenside = true,
                    _ => (),
                }
            }
        }
    }

    // Counted correct characters should be equal to the length of the part.
    (length >= 1) && (char_ok == length)
}

// Part 4: Parse the en passant square
fn ep(position: &mut Position, part: &str) -> bool {
    let length = part.len();
    let mut char_ok = 0;

    // No en-passant square if length is 1. The character should be a DASH.
    if_chain! {
        if length == 1;
        if let Some(x) = part.chars().next();
        if x == DASH;
        then {
            char_ok += 1
        }
    }

    // If length is 2, try to parse the part to a square number.
    if length == 2 {
        let square = parse::algebraic_square_to_number(part);

        match square {
            Some(s) if EP_SQUARES_WHITE.contains(&s) || EP_SQUARES_BLACK.contains(&s) => {
                position.en_passant = BB_SQUARES[s];
                char_ok += 2;
            }
            Some(_) | None => (),
        }
    }

    // The length of this part should either be 1 or 2, and the counted
    // correct characters should be equal to the part length.
    (length == 1 || length == 2) && (length == char_ok)
}

// Part 5: Half-move clock: the number of moves since the last capture or
// pawn push. The position model does not retain it, so the part is only
// validated.
fn hmc(_position: &mut Position, part: &str) -> bool {
    let length = part.len();
    let mut result = false;

    if_chain! {
        if length == 1 || length == 2 || length == 3;
        if let Ok(x) = part.parse::<u8>();
        if x <= MAX_MOVE_RULE;
        then {
            result = true;
        }
    }

    result
}

// Part 6: Parse full move number and derive the ply count from it.
fn fmn(position: &mut Position, part: &str) -> bool {
    let length = part.len();
    let mut result = false;

    if_chain! {
        if (1..=4).contains(&length);
        if let Ok(x) = part.parse::<u16>();
        if x >= 1 && x <= (MAX_GAME_MOVES as u16);
        then {
            position.half_move_count =
                2 * (x - 1) + if position.white_to_move { 0 } else { 1 };
            result = true;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{FEN_KIWIPETE_POSITION, FEN_START_POSITION};

    #[test]
    fn start_position_parses() {
        let pos = Position::from_fen(FEN_START_POSITION).unwrap();

        assert!(pos.white_to_move);
        assert_eq!(pos.half_move_count, 0);
        assert_eq!(pos.all_pieces.count_ones(), 32);
        assert!(pos.pieces[Sides::WHITE].castle_kingside);
        assert!(pos.pieces[Sides::BLACK].castle_queenside);
        assert_eq!(pos.king_square(Sides::WHITE), Squares::E1);
        assert_eq!(pos.king_square(Sides::BLACK), Squares::E8);
    }

    #[test]
    fn en_passant_square_is_stored() {
        let pos =
            Position::from_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2")
                .unwrap();
        let ep_square = pos.en_passant.trailing_zeros() as usize;

        assert_eq!(SQUARE_NAME[ep_square], "e6");
    }

    #[test]
    fn half_move_count_is_derived_from_fullmove_number() {
        let white = Position::from_fen("8/8/8/8/8/8/8/K6k w - - 0 10").unwrap();
        let black = Position::from_fen("8/8/8/8/8/8/8/K6k b - - 0 10").unwrap();

        assert_eq!(white.half_move_count, 18);
        assert_eq!(black.half_move_count, 19);
    }

    #[test]
    fn malformed_fens_are_rejected() {
        // Not enough parts.
        assert!(Position::from_fen("8/8/8/8/8/8/8").is_err());
        // A rank with nine files.
        assert!(Position::from_fen("9/8/8/8/8/8/8/8 w - - 0 1").is_err());
        // Unknown piece character.
        assert!(Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1").is_err());
        // Bad color field.
        assert!(Position::from_fen("8/8/8/8/8/8/8/K6k x - - 0 1").is_err());
        // En-passant square on an impossible rank.
        assert!(Position::from_fen("8/8/8/8/8/8/8/K6k w - e4 0 1").is_err());
        // A failed parse never produces a position, so there is nothing to
        // check beyond the error itself.
    }

    #[test]
    fn fen_round_trip_preserves_every_field() {
        let fens = [
            FEN_START_POSITION,
            FEN_KIWIPETE_POSITION,
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2",
            "r3k2r/8/8/8/8/8/8/R3K2R b KQ - 0 23",
        ];

        for fen in fens {
            let pos = Position::from_fen(fen).unwrap();
            let round_trip = Position::from_fen(&pos.to_fen()).unwrap();
            assert_eq!(pos, round_trip, "round trip failed for {fen}");
        }
    }
}
