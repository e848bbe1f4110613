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

use once_cell::sync::Lazy;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::defs::{Bitboard, NrOf, Piece, Side, Sides, Square, EMPTY};

/* Random number for all sides for all pieces on all squares */
type PieceRandoms = [[[u64; NrOf::SQUARES]; NrOf::PIECE_TYPES]; Sides::BOTH];
type CastlingRandoms = [[u64; NrOf::CASTLING_WINGS]; Sides::BOTH];
type EpRandoms = [u64; NrOf::SQUARES + 1];

pub type ZobristKey = u64;

// The key material is initialized once per process and never changes, so
// every position hashed during the process lifetime uses the same table.
// The RNG seed is fixed: with it, the whole engine is deterministic.
pub static ZOBRIST: Lazy<ZobristRandoms> = Lazy::new(ZobristRandoms::new);

pub struct ZobristRandoms {
    rnd_pieces: PieceRandoms,
    rnd_castling: CastlingRandoms,
    rnd_black_to_move: u64,
    rnd_en_passant: EpRandoms,
}

impl ZobristRandoms {
    pub fn new() -> Self {
        let mut random = SmallRng::from_seed([125; 32]);
        let mut zobrist_randoms = Self {
            rnd_pieces: [[[EMPTY; NrOf::SQUARES]; NrOf::PIECE_TYPES]; Sides::BOTH],
            rnd_castling: [[EMPTY; NrOf::CASTLING_WINGS]; Sides::BOTH],
            rnd_black_to_move: EMPTY,
            rnd_en_passant: [EMPTY; NrOf::SQUARES + 1],
        };

        zobrist_randoms.rnd_pieces.iter_mut().for_each(|side| {
            side.iter_mut().for_each(|piece| {
                piece
                    .iter_mut()
                    .for_each(|square| *square = random.gen::<u64>())
            })
        });

        zobrist_randoms.rnd_castling.iter_mut().for_each(|side| {
            side.iter_mut()
                .for_each(|wing| *wing = random.gen::<u64>())
        });

        zobrist_randoms.rnd_black_to_move = random.gen::<u64>();

        zobrist_randoms
            .rnd_en_passant
            .iter_mut()
            .for_each(|ep| *ep = random.gen::<u64>());

        // Slot 64 is where trailing_zeros() of an empty en-passant
        // bitboard lands; slot 0 (A8) can never be an en-passant target.
        // Both hash to nothing, so "no en passant" leaves the key alone.
        zobrist_randoms.rnd_en_passant[NrOf::SQUARES] = EMPTY;
        zobrist_randoms.rnd_en_passant[0] = EMPTY;

        zobrist_randoms
    }

    pub fn piece(&self, side: Side, piece: Piece, square: Square) -> ZobristKey {
        self.rnd_pieces[side][piece][square]
    }

    pub fn castling(&self, side: Side, wing: usize) -> ZobristKey {
        self.rnd_castling[side][wing]
    }

    pub fn black_to_move(&self) -> ZobristKey {
        self.rnd_black_to_move
    }

    // Keyed by the en-passant bitboard directly: either one bit is set and
    // the square's random is returned, or the board is empty and the zero
    // sentinel in slot 64 is returned.
    pub fn en_passant(&self, en_passant: Bitboard) -> ZobristKey {
        self.rnd_en_passant[en_passant.trailing_zeros() as usize]
    }
}
