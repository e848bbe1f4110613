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

pub mod defs;
mod fen;
mod init;
mod utils;
mod zobrist;

use self::defs::Pieces;
use crate::defs::{Bitboard, NrOf, Piece, Side, Sides, Square, EMPTY};

// This file implements the engine's position representation; it is
// bit-board based, with the most significant ranks first: square 0 is A8,
// square 63 is H1.

// All the pieces of one color, plus that color's castling rights. The six
// piece bitboards are pairwise disjoint and their union is all_pieces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceSet {
    pub bb_pieces: [Bitboard; NrOf::PIECE_TYPES],
    pub all_pieces: Bitboard,
    pub castle_kingside: bool,
    pub castle_queenside: bool,
}

impl PieceSet {
    pub fn new() -> Self {
        Self {
            bb_pieces: [EMPTY; NrOf::PIECE_TYPES],
            all_pieces: EMPTY,
            castle_kingside: false,
            castle_queenside: false,
        }
    }
}

// A complete game state. The struct is plain data and Copy on purpose:
// the move generator creates successors by copying the parent into an
// arena slot and then applying the delta of one move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub pieces: [PieceSet; Sides::BOTH],
    pub all_pieces: Bitboard,
    pub white_to_move: bool,
    pub en_passant: Bitboard,
    pub half_move_count: u16,
    pub material: i32,
    pub zobrist_key: u64,
}

// Public functions for use by other modules.
impl Position {
    pub fn new() -> Self {
        Self {
            pieces: [PieceSet::new(); Sides::BOTH],
            all_pieces: EMPTY,
            white_to_move: true,
            en_passant: EMPTY,
            half_move_count: 0,
            material: 0,
            zobrist_key: 0,
        }
    }

    // Returns the side to move.
    pub fn us(&self) -> Side {
        self.white_to_move as Side
    }

    // Returns the side that is NOT moving.
    pub fn opponent(&self) -> Side {
        !self.white_to_move as Side
    }

    // Return a bitboard with locations of a certain piece type for one of
    // the sides.
    pub fn get_pieces(&self, piece: Piece, side: Side) -> Bitboard {
        self.pieces[side].bb_pieces[piece]
    }

    // Return a bitboard containing all the pieces on the board.
    pub fn occupancy(&self) -> Bitboard {
        self.all_pieces
    }

    // Returns the square the king is currently on.
    pub fn king_square(&self, side: Side) -> Square {
        self.pieces[side].bb_pieces[Pieces::KING].trailing_zeros() as Square
    }

    // Determine which piece of which side occupies the given square.
    pub fn piece_on(&self, square: Square) -> Option<(Side, Piece)> {
        let bb_square = defs::BB_SQUARES[square];
        for side in [Sides::WHITE, Sides::BLACK] {
            for piece in 0..NrOf::PIECE_TYPES {
                if self.pieces[side].bb_pieces[piece] & bb_square > 0 {
                    return Some((side, piece));
                }
            }
        }
        None
    }

    pub fn has_castling_rights(&self, side: Side) -> bool {
        self.pieces[side].castle_kingside || self.pieces[side].castle_queenside
    }
}
