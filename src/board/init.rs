use crate::{
    board::{
        defs::{ZobristKey, ZOBRIST},
        Position,
    },
    defs::{Bitboard, NrOf, Sides},
    evaluation::defs::PIECE_VALUES,
    misc::bits,
};

// Initialization functions. These compute the derived parts of a position
// from scratch: the per-side unions, the material difference, and the
// Zobrist key. The FEN-reader calls them once after parsing; afterwards the
// move generator keeps all three up to date incrementally. The from-scratch
// versions double as the oracle the incremental updates are tested against.
impl Position {
    // Main initialization function, used after the piece bitboards have
    // been set up by the FEN-reader.
    pub fn init(&mut self) {
        let (bb_white, bb_black) = self.init_pieces_per_side_bitboards();
        self.pieces[Sides::WHITE].all_pieces = bb_white;
        self.pieces[Sides::BLACK].all_pieces = bb_black;
        self.all_pieces = bb_white | bb_black;

        self.material = self.init_material();
        self.zobrist_key = self.init_zobrist_key();
    }

    // Gather the pieces for each side into their own bitboard.
    fn init_pieces_per_side_bitboards(&self) -> (Bitboard, Bitboard) {
        let mut bb_white: Bitboard = 0;
        let mut bb_black: Bitboard = 0;

        for (bb_w, bb_b) in self.pieces[Sides::WHITE]
            .bb_pieces
            .iter()
            .zip(self.pieces[Sides::BLACK].bb_pieces.iter())
        {
            bb_white |= *bb_w;
            bb_black |= *bb_b;
        }

        (bb_white, bb_black)
    }

    // Material difference in centipawns, white minus black.
    pub fn init_material(&self) -> i32 {
        let mut material = 0;

        for piece in 0..NrOf::PIECE_TYPES {
            let white = self.pieces[Sides::WHITE].bb_pieces[piece].count_ones() as i32;
            let black = self.pieces[Sides::BLACK].bb_pieces[piece].count_ones() as i32;
            material += (white - black) * PIECE_VALUES[piece];
        }

        material
    }

    // Initialize the zobrist key. This key will later be updated incrementally.
    pub fn init_zobrist_key(&self) -> ZobristKey {
        let mut key: u64 = 0;

        // Hash in every piece of both sides on its square.
        for side in [Sides::BLACK, Sides::WHITE] {
            for piece in 0..NrOf::PIECE_TYPES {
                let mut pieces = self.pieces[side].bb_pieces[piece];
                while pieces > 0 {
                    let square = bits::next(&mut pieces);
                    key ^= ZOBRIST.piece(side, piece, square);
                }
            }

            if self.pieces[side].castle_kingside {
                key ^= ZOBRIST.castling(side, super::defs::KINGSIDE);
            }
            if self.pieces[side].castle_queenside {
                key ^= ZOBRIST.castling(side, super::defs::QUEENSIDE);
            }
        }

        // Hash the side to move and the en-passant state. An empty
        // en-passant bitboard hashes to nothing.
        if !self.white_to_move {
            key ^= ZOBRIST.black_to_move();
        }
        key ^= ZOBRIST.en_passant(self.en_passant);

        key
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Position;
    use crate::defs::{FEN_START_POSITION, Sides};
    use crate::evaluation::defs::PIECE_VALUES;
    use crate::board::defs::Pieces;

    #[test]
    fn start_position_material_is_balanced() {
        let pos = Position::from_fen(FEN_START_POSITION).unwrap();
        assert_eq!(pos.material, 0);
    }

    #[test]
    fn material_counts_one_sided_advantage() {
        // White has an extra rook.
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        assert_eq!(pos.material, PIECE_VALUES[Pieces::ROOK]);
    }

    #[test]
    fn side_unions_cover_all_pieces() {
        let pos = Position::from_fen(FEN_START_POSITION).unwrap();
        let white = pos.pieces[Sides::WHITE].all_pieces;
        let black = pos.pieces[Sides::BLACK].all_pieces;

        assert_eq!(white & black, 0);
        assert_eq!(white | black, pos.all_pieces);
        assert_eq!(white.count_ones(), 16);
        assert_eq!(black.count_ones(), 16);
    }
}
