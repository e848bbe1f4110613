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

use super::{
    defs::{Location, Pieces, PIECE_CHAR_SMALL, SQUARE_NAME},
    Position,
};
use crate::defs::{Piece, Side, Sides, Square};

impl Position {
    // Compute on which file and rank a given square is. Rank 0 is the
    // first rank, which lives in the topmost byte of a bitboard here.
    pub fn square_on_file_rank(square: Square) -> Location {
        let file = (square % 8) as u8;
        let rank = (7 - square / 8) as u8;
        (file, rank)
    }

    // The row index of a square, counted from the eighth rank down. Pawn
    // logic works in rows: white pawns start on row 6 and promote from
    // row 1; for black it is the mirror.
    pub fn square_row(square: Square) -> usize {
        square / 8
    }

    pub const fn pawn_direction(side: Side) -> i8 {
        const UP: i8 = -8;
        const DOWN: i8 = 8;

        if side == Sides::WHITE {
            UP
        } else {
            DOWN
        }
    }

    pub const fn start_row(side: Side) -> usize {
        if side == Sides::WHITE {
            6
        } else {
            1
        }
    }

    pub const fn promotion_row(side: Side) -> usize {
        if side == Sides::WHITE {
            1
        } else {
            6
        }
    }
}

// Extracting a move from a parent/child pair. Successors carry no move
// record of their own; the move that produced a child is recovered by
// diffing the mover's bitboards. More than two changed squares means the
// rook moved along with the king, so the move was a castle and the king
// squares identify it.
impl Position {
    pub fn move_between(parent: &Position, child: &Position) -> (Square, Square, Piece) {
        let us = parent.us();
        let moved = parent.pieces[us].all_pieces ^ child.pieces[us].all_pieces;

        let mut from_bb = moved & parent.pieces[us].all_pieces;
        let mut to_bb = moved & child.pieces[us].all_pieces;

        if moved.count_ones() > 2 {
            from_bb = parent.pieces[us].bb_pieces[Pieces::KING];
            to_bb = child.pieces[us].bb_pieces[Pieces::KING];
        }

        let from = from_bb.trailing_zeros() as Square;
        let to = to_bb.trailing_zeros() as Square;

        // A pawn that left its square but did not arrive as a pawn promoted.
        let was_pawn = parent.pieces[us].bb_pieces[Pieces::PAWN] & from_bb > 0;
        let is_pawn = child.pieces[us].bb_pieces[Pieces::PAWN] & to_bb > 0;
        let promotion = if was_pawn && !is_pawn {
            let mut promoted = Pieces::NONE;
            for piece in [Pieces::KNIGHT, Pieces::BISHOP, Pieces::ROOK, Pieces::QUEEN] {
                if child.pieces[us].bb_pieces[piece] & to_bb > 0 {
                    promoted = piece;
                }
            }
            promoted
        } else {
            Pieces::NONE
        };

        (from, to, promotion)
    }

    // The long-algebraic rendering of the move leading from parent to
    // child, e.g. "e2e4" or "g7g8q".
    pub fn move_as_string(parent: &Position, child: &Position) -> String {
        let (from, to, promotion) = Position::move_between(parent, child);
        format!(
            "{}{}{}",
            SQUARE_NAME[from],
            SQUARE_NAME[to],
            PIECE_CHAR_SMALL[promotion]
        )
    }
}
