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

mod create;
pub mod defs;
mod init;
mod magics;

use crate::{
    arena::Arena,
    board::{
        defs::{Pieces, BB_SQUARES, KINGSIDE, QUEENSIDE, ZOBRIST},
        Position,
    },
    defs::{Bitboard, NrOf, Piece, Side, Sides, Square, EMPTY},
    evaluation::defs::PIECE_VALUES,
    misc::bits,
};
use defs::{
    MoveKind, CASTLE_EMPTY, CASTLE_KING_TO, CASTLE_ROOK_FROM, CASTLE_ROOK_TO, CASTLE_ROOK_XOR,
    CASTLE_SAFE, ROOK_HOME,
};
use magics::Magic;

// This is a list of all pieces a pawn can promote to.
const PROMOTION_PIECES: [Piece; 4] = [Pieces::QUEEN, Pieces::ROOK, Pieces::BISHOP, Pieces::KNIGHT];

// These are the exact sizes needed for the rook and bishop attack tables;
// the sum of the blocker-board permutations over all 64 squares.
pub const ROOK_TABLE_SIZE: usize = 102_400;
pub const BISHOP_TABLE_SIZE: usize = 5_248;

// The move generator struct holds the attack tables for each piece, and
// the tables with magic numbers for the rook and bishop. From a position
// it produces successor positions, not move records: each legal move is
// applied to a copy of the parent, which is pushed into the arena.
pub struct MoveGenerator {
    king: [Bitboard; NrOf::SQUARES],
    knight: [Bitboard; NrOf::SQUARES],
    pawns: [[Bitboard; NrOf::SQUARES]; Sides::BOTH],
    rook: Vec<Bitboard>,
    bishop: Vec<Bitboard>,
    rook_magics: [Magic; NrOf::SQUARES],
    bishop_magics: [Magic; NrOf::SQUARES],
}

impl MoveGenerator {
    // Creates a new move generator and initializes all the tables.
    pub fn new() -> Self {
        let magics: Magic = Default::default();
        let mut mg = Self {
            king: [EMPTY; NrOf::SQUARES],
            knight: [EMPTY; NrOf::SQUARES],
            pawns: [[EMPTY; NrOf::SQUARES]; Sides::BOTH],
            rook: vec![EMPTY; ROOK_TABLE_SIZE],
            bishop: vec![EMPTY; BISHOP_TABLE_SIZE],
            rook_magics: [magics; NrOf::SQUARES],
            bishop_magics: [magics; NrOf::SQUARES],
        };
        mg.init_king();
        mg.init_knight();
        mg.init_pawns();
        mg.init_magics(Pieces::ROOK);
        mg.init_magics(Pieces::BISHOP);
        mg
    }

    // Return non-slider (King, Knight) attacks for the given square.
    pub fn get_non_slider_attacks(&self, piece: Piece, square: Square) -> Bitboard {
        match piece {
            Pieces::KING => self.king[square],
            Pieces::KNIGHT => self.knight[square],
            _ => panic!("Not a king or a knight: {}", piece),
        }
    }

    // Return slider attacks for Rook, Bishop and Queen using the magic numbers.
    pub fn get_slider_attacks(&self, piece: Piece, square: Square, occupancy: Bitboard) -> Bitboard {
        match piece {
            Pieces::ROOK => {
                let index = self.rook_magics[square].get_index(occupancy);
                self.rook[index]
            }
            Pieces::BISHOP => {
                let index = self.bishop_magics[square].get_index(occupancy);
                self.bishop[index]
            }
            Pieces::QUEEN => {
                let r_index = self.rook_magics[square].get_index(occupancy);
                let b_index = self.bishop_magics[square].get_index(occupancy);
                self.rook[r_index] ^ self.bishop[b_index]
            }
            _ => panic!("Not a sliding piece: {}", piece),
        }
    }

    // Return pawn attacks for the given side and square.
    pub fn get_pawn_attacks(&self, side: Side, square: Square) -> Bitboard {
        self.pawns[side][square]
    }
}

// *** === Successor generation. === *** //

impl MoveGenerator {
    // Generate every legal successor of the parent position into the
    // arena, and return how many there are. The caller saves the arena
    // mark beforehand and releases it when done with the children.
    pub fn expand(&self, parent: &Position, arena: &mut Arena) -> usize {
        let us = parent.us();
        let bb_occupancy = parent.occupancy();
        let bb_own_pieces = parent.pieces[us].all_pieces;
        let mark = arena.mark();

        // Sliders and the knight share one shape: look the target set up,
        // drop own-piece squares, emit one child per destination.
        for piece in [Pieces::QUEEN, Pieces::ROOK, Pieces::BISHOP, Pieces::KNIGHT] {
            let mut bb_pieces = parent.get_pieces(piece, us);
            while bb_pieces > 0 {
                let from = bits::next(&mut bb_pieces);
                let bb_target = match piece {
                    Pieces::KNIGHT => self.get_non_slider_attacks(piece, from),
                    _ => self.get_slider_attacks(piece, from, bb_occupancy),
                } & !bb_own_pieces;
                self.add_children(parent, MoveKind::Quiet(piece), from, bb_target, arena);
            }
        }

        self.pawns(parent, arena);
        self.king_and_castling(parent, arena);

        arena.mark() - mark
    }

    fn pawns(&self, parent: &Position, arena: &mut Arena) {
        let us = parent.us();
        let direction = Position::pawn_direction(us);
        let bb_empty = !parent.occupancy();
        let bb_opponent_pieces = parent.pieces[parent.opponent()].all_pieces;
        let mut bb_pawns = parent.get_pieces(Pieces::PAWN, us);

        while bb_pawns > 0 {
            let from = bits::next(&mut bb_pawns);
            let row = Position::square_row(from);
            let bb_attacks = self.get_pawn_attacks(us, from);
            let mut bb_moves = bb_attacks & bb_opponent_pieces;

            // Single push, and a double push if the pawn still stands on
            // its start row and both squares ahead are empty.
            let to = (from as i8 + direction) as usize;
            if BB_SQUARES[to] & bb_empty > 0 {
                bb_moves |= BB_SQUARES[to];

                if row == Position::start_row(us) {
                    let double = (from as i8 + 2 * direction) as usize;
                    if BB_SQUARES[double] & bb_empty > 0 {
                        self.add_children(
                            parent,
                            MoveKind::DoublePush {
                                ep_target: BB_SQUARES[to],
                            },
                            from,
                            BB_SQUARES[double],
                            arena,
                        );
                    }
                }
            }

            if row != Position::promotion_row(us) {
                self.add_children(parent, MoveKind::Quiet(Pieces::PAWN), from, bb_moves, arena);
            } else {
                // Every move from the seventh row promotes; fan out into
                // the four promotion pieces.
                for piece in PROMOTION_PIECES {
                    self.add_children(parent, MoveKind::Promotion(piece), from, bb_moves, arena);
                }
            }

            // En-passant capture if the attack set contains the parent's
            // en-passant target square.
            if parent.en_passant & bb_attacks > 0 {
                let captured_square =
                    (parent.en_passant.trailing_zeros() as i8 - direction) as usize;
                self.add_children(
                    parent,
                    MoveKind::EnPassant {
                        captured: BB_SQUARES[captured_square],
                    },
                    from,
                    parent.en_passant,
                    arena,
                );
            }
        }
    }

    fn king_and_castling(&self, parent: &Position, arena: &mut Arena) {
        let us = parent.us();
        let opponent = parent.opponent();
        let bb_king = parent.get_pieces(Pieces::KING, us);
        let from = bb_king.trailing_zeros() as Square;

        // Compute the squares the opponent attacks, with our own king
        // lifted off the board: otherwise the king could step backwards
        // along the ray of the slider that checks it, into a square the
        // slider only fails to attack because the king stands in the way.
        let bb_threats = self.attacked_squares(parent, opponent, parent.occupancy() ^ bb_king);
        let bb_target = self.get_non_slider_attacks(Pieces::KING, from)
            & !parent.pieces[us].all_pieces
            & !bb_threats;
        self.add_children(parent, MoveKind::Quiet(Pieces::KING), from, bb_target, arena);

        // Castling. One intersection rejects a wing for every reason at
        // once: a piece in the way, a king path square attacked, or the
        // king currently in check (its own square is part of the SAFE
        // mask).
        for wing in [KINGSIDE, QUEENSIDE] {
            let allowed = if wing == KINGSIDE {
                parent.pieces[us].castle_kingside
            } else {
                parent.pieces[us].castle_queenside
            };

            if allowed {
                let blocked = (bb_threats & CASTLE_SAFE[us][wing])
                    | (parent.occupancy() & CASTLE_EMPTY[us][wing]);
                if blocked == EMPTY {
                    self.add_children(
                        parent,
                        MoveKind::Castle(wing),
                        from,
                        BB_SQUARES[CASTLE_KING_TO[us][wing]],
                        arena,
                    );
                }
            }
        }
    }

    // Turn every destination bit into a successor position. A successor
    // that leaves the mover's own king attacked is discarded; the arena
    // receives legal children only.
    fn add_children(
        &self,
        parent: &Position,
        kind: MoveKind,
        from: Square,
        bb_to: Bitboard,
        arena: &mut Arena,
    ) {
        let us = parent.us();
        let opponent = parent.opponent();
        let mut bb_to = bb_to;

        while bb_to > 0 {
            let to = bits::next(&mut bb_to);
            let child = self.make_child(parent, kind, from, to);

            if !self.square_attacked(&child, opponent, child.king_square(us)) {
                arena.push(child);
            }
        }
    }

    // Copy the parent and apply the delta of one move: bitboards, material
    // difference, castling rights, en-passant state, and the Zobrist key
    // are all updated incrementally.
    fn make_child(&self, parent: &Position, kind: MoveKind, from: Square, to: Square) -> Position {
        let us = parent.us();
        let opponent = parent.opponent();
        let sign = if us == Sides::WHITE { 1 } else { -1 };
        let bb_from = BB_SQUARES[from];
        let bb_to = BB_SQUARES[to];
        let bb_move = bb_from | bb_to;

        let mut child = *parent;
        child.white_to_move = !parent.white_to_move;
        child.half_move_count += 1;
        child.en_passant = EMPTY;

        let mut key = parent.zobrist_key;

        // Remove a captured piece from the destination square before the
        // mover arrives. En-passant victims live elsewhere and are handled
        // with the move itself.
        if parent.pieces[opponent].all_pieces & bb_to > 0 {
            for piece in 0..NrOf::PIECE_TYPES {
                if child.pieces[opponent].bb_pieces[piece] & bb_to > 0 {
                    child.pieces[opponent].bb_pieces[piece] ^= bb_to;
                    child.pieces[opponent].all_pieces ^= bb_to;
                    child.material += sign * PIECE_VALUES[piece];
                    key ^= ZOBRIST.piece(opponent, piece, to);

                    // A rook captured on its home square takes the
                    // castling right of that wing with it.
                    if piece == Pieces::ROOK && parent.has_castling_rights(opponent) {
                        if bb_to & ROOK_HOME[opponent][KINGSIDE] > 0 {
                            child.pieces[opponent].castle_kingside = false;
                        }
                        if bb_to & ROOK_HOME[opponent][QUEENSIDE] > 0 {
                            child.pieces[opponent].castle_queenside = false;
                        }
                    }
                    break;
                }
            }
        }

        // Move the piece on the mover's side of the board.
        child.pieces[us].all_pieces ^= bb_move;
        child.all_pieces &= !bb_from;
        child.all_pieces |= bb_to;

        match kind {
            MoveKind::Quiet(piece) => {
                child.pieces[us].bb_pieces[piece] ^= bb_move;
                key ^= ZOBRIST.piece(us, piece, from) ^ ZOBRIST.piece(us, piece, to);

                match piece {
                    Pieces::KING => {
                        child.pieces[us].castle_kingside = false;
                        child.pieces[us].castle_queenside = false;
                    }
                    Pieces::ROOK if parent.has_castling_rights(us) => {
                        if bb_from & ROOK_HOME[us][KINGSIDE] > 0 {
                            child.pieces[us].castle_kingside = false;
                        }
                        if bb_from & ROOK_HOME[us][QUEENSIDE] > 0 {
                            child.pieces[us].castle_queenside = false;
                        }
                    }
                    _ => (),
                }
            }
            MoveKind::DoublePush { ep_target } => {
                child.pieces[us].bb_pieces[Pieces::PAWN] ^= bb_move;
                child.en_passant = ep_target;
                key ^= ZOBRIST.piece(us, Pieces::PAWN, from) ^ ZOBRIST.piece(us, Pieces::PAWN, to);
            }
            MoveKind::Promotion(piece) => {
                child.pieces[us].bb_pieces[Pieces::PAWN] ^= bb_from;
                child.pieces[us].bb_pieces[piece] |= bb_to;
                child.material += sign * (PIECE_VALUES[piece] - PIECE_VALUES[Pieces::PAWN]);
                key ^= ZOBRIST.piece(us, Pieces::PAWN, from) ^ ZOBRIST.piece(us, piece, to);
            }
            MoveKind::EnPassant { captured } => {
                child.pieces[us].bb_pieces[Pieces::PAWN] ^= bb_move;
                child.pieces[opponent].bb_pieces[Pieces::PAWN] ^= captured;
                child.pieces[opponent].all_pieces ^= captured;
                child.all_pieces ^= captured;
                child.material += sign * PIECE_VALUES[Pieces::PAWN];
                key ^= ZOBRIST.piece(us, Pieces::PAWN, from) ^ ZOBRIST.piece(us, Pieces::PAWN, to);
                key ^= ZOBRIST.piece(
                    opponent,
                    Pieces::PAWN,
                    captured.trailing_zeros() as Square,
                );
            }
            MoveKind::Castle(wing) => {
                child.pieces[us].bb_pieces[Pieces::KING] ^= bb_move;
                child.pieces[us].bb_pieces[Pieces::ROOK] ^= CASTLE_ROOK_XOR[us][wing];
                child.pieces[us].all_pieces ^= CASTLE_ROOK_XOR[us][wing];
                child.all_pieces ^= CASTLE_ROOK_XOR[us][wing];
                child.pieces[us].castle_kingside = false;
                child.pieces[us].castle_queenside = false;
                key ^= ZOBRIST.piece(us, Pieces::KING, from) ^ ZOBRIST.piece(us, Pieces::KING, to);
                key ^= ZOBRIST.piece(us, Pieces::ROOK, CASTLE_ROOK_FROM[us][wing])
                    ^ ZOBRIST.piece(us, Pieces::ROOK, CASTLE_ROOK_TO[us][wing]);
            }
        }

        // Hash out every castling right that changed, flip the en-passant
        // state, and flip the side to move.
        for side in [Sides::BLACK, Sides::WHITE] {
            if parent.pieces[side].castle_kingside != child.pieces[side].castle_kingside {
                key ^= ZOBRIST.castling(side, KINGSIDE);
            }
            if parent.pieces[side].castle_queenside != child.pieces[side].castle_queenside {
                key ^= ZOBRIST.castling(side, QUEENSIDE);
            }
        }
        key ^= ZOBRIST.en_passant(parent.en_passant) ^ ZOBRIST.en_passant(child.en_passant);
        key ^= ZOBRIST.black_to_move();
        child.zobrist_key = key;

        child
    }
}

// *** === Attack queries. === *** //

impl MoveGenerator {
    #[cfg_attr(debug_assertions, inline(never))]
    #[cfg_attr(not(debug_assertions), inline(always))]
    // Determine if a square is attacked by 'attacker', on the given board.
    pub fn square_attacked(&self, pos: &Position, attacker: Side, square: Square) -> bool {
        let attackers = &pos.pieces[attacker];

        // Use the super-piece method: get the moves for each piece type,
        // starting from the given square. This provides the squares where
        // a piece of that type has to be, to be able to reach the given
        // square. Then check if such a piece is actually there.
        let occupancy = pos.occupancy();
        let bb_king = self.get_non_slider_attacks(Pieces::KING, square);
        let bb_rook = self.get_slider_attacks(Pieces::ROOK, square, occupancy);
        let bb_bishop = self.get_slider_attacks(Pieces::BISHOP, square, occupancy);
        let bb_knight = self.get_non_slider_attacks(Pieces::KNIGHT, square);
        let bb_pawns = self.get_pawn_attacks(attacker ^ 1, square);
        let bb_queen = bb_rook | bb_bishop;

        (bb_king & attackers.bb_pieces[Pieces::KING] > 0)
            || (bb_rook & attackers.bb_pieces[Pieces::ROOK] > 0)
            || (bb_queen & attackers.bb_pieces[Pieces::QUEEN] > 0)
            || (bb_bishop & attackers.bb_pieces[Pieces::BISHOP] > 0)
            || (bb_knight & attackers.bb_pieces[Pieces::KNIGHT] > 0)
            || (bb_pawns & attackers.bb_pieces[Pieces::PAWN] > 0)
    }

    // The union of every square the given side attacks, computed against
    // the given occupancy. Callers pass a modified occupancy when a piece
    // must be ignored (the king, during king-move generation).
    pub fn attacked_squares(&self, pos: &Position, side: Side, occupancy: Bitboard) -> Bitboard {
        let set = &pos.pieces[side];
        let mut bb_attacks = EMPTY;

        let mut bb_diagonals = set.bb_pieces[Pieces::QUEEN] | set.bb_pieces[Pieces::BISHOP];
        while bb_diagonals > 0 {
            let from = bits::next(&mut bb_diagonals);
            bb_attacks |= self.get_slider_attacks(Pieces::BISHOP, from, occupancy);
        }

        let mut bb_straights = set.bb_pieces[Pieces::QUEEN] | set.bb_pieces[Pieces::ROOK];
        while bb_straights > 0 {
            let from = bits::next(&mut bb_straights);
            bb_attacks |= self.get_slider_attacks(Pieces::ROOK, from, occupancy);
        }

        let mut bb_knights = set.bb_pieces[Pieces::KNIGHT];
        while bb_knights > 0 {
            let from = bits::next(&mut bb_knights);
            bb_attacks |= self.get_non_slider_attacks(Pieces::KNIGHT, from);
        }

        let mut bb_pawns = set.bb_pieces[Pieces::PAWN];
        while bb_pawns > 0 {
            let from = bits::next(&mut bb_pawns);
            bb_attacks |= self.get_pawn_attacks(side, from);
        }

        if set.bb_pieces[Pieces::KING] > 0 {
            let king_square = set.bb_pieces[Pieces::KING].trailing_zeros() as Square;
            bb_attacks |= self.get_non_slider_attacks(Pieces::KING, king_square);
        }

        bb_attacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{FEN_KIWIPETE_POSITION, FEN_START_POSITION};

    fn children(mg: &MoveGenerator, pos: &Position) -> Vec<Position> {
        let mut arena = Arena::new();
        let mark = arena.mark();
        let count = mg.expand(pos, &mut arena);
        (0..count).map(|i| arena.get(mark + i)).collect()
    }

    // Walk the tree below the position and check, for every generated
    // child, that the incrementally updated fields agree with a
    // from-scratch recomputation and that the bitboard invariants hold.
    fn assert_tree_consistent(mg: &MoveGenerator, pos: &Position, depth: u8) {
        for child in children(mg, pos) {
            let white = child.pieces[Sides::WHITE];
            let black = child.pieces[Sides::BLACK];

            // Piece boards of one side are pairwise disjoint and union to
            // that side's occupancy; the sides are disjoint as well.
            for side in [&white, &black] {
                let mut seen = 0u64;
                for bb in side.bb_pieces {
                    assert_eq!(seen & bb, 0);
                    seen |= bb;
                }
                assert_eq!(seen, side.all_pieces);
            }
            assert_eq!(white.all_pieces & black.all_pieces, 0);
            assert_eq!(white.all_pieces | black.all_pieces, child.all_pieces);

            // Incremental material, Zobrist key, and ply count.
            assert_eq!(child.material, child.init_material());
            assert_eq!(child.zobrist_key, child.init_zobrist_key());
            assert_eq!(child.half_move_count, pos.half_move_count + 1);

            // The side that just moved must not be left in check.
            let mover = pos.us();
            assert!(!mg.square_attacked(&child, child.us(), child.king_square(mover)));

            if depth > 1 {
                assert_tree_consistent(mg, &child, depth - 1);
            }
        }
    }

    #[test]
    fn start_position_has_twenty_successors() {
        let mg = MoveGenerator::new();
        let pos = Position::from_fen(FEN_START_POSITION).unwrap();
        assert_eq!(children(&mg, &pos).len(), 20);
    }

    #[test]
    fn generated_trees_keep_their_invariants() {
        let mg = MoveGenerator::new();
        for fen in [FEN_START_POSITION, FEN_KIWIPETE_POSITION] {
            let pos = Position::from_fen(fen).unwrap();
            assert_tree_consistent(&mg, &pos, 2);
        }
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mg = MoveGenerator::new();
        let pos = Position::from_fen("1k6/8/2p5/3Pp3/8/8/8/2K5 w - e6 0 2").unwrap();
        let e6 = BB_SQUARES[20];
        let e5 = BB_SQUARES[28];

        let ep_children: Vec<Position> = children(&mg, &pos)
            .into_iter()
            .filter(|c| c.pieces[Sides::WHITE].bb_pieces[Pieces::PAWN] & e6 > 0)
            .collect();

        assert_eq!(ep_children.len(), 1);
        assert_eq!(ep_children[0].pieces[Sides::BLACK].bb_pieces[Pieces::PAWN] & e5, 0);
    }

    #[test]
    fn promotions_fan_out_into_four_pieces() {
        let mg = MoveGenerator::new();
        let pos = Position::from_fen("8/1k4P1/8/8/8/8/8/2K5 w - - 0 1").unwrap();

        let promoted: Vec<Position> = children(&mg, &pos)
            .into_iter()
            .filter(|c| c.pieces[Sides::WHITE].bb_pieces[Pieces::PAWN] == 0)
            .collect();

        assert_eq!(promoted.len(), 4);
        for (i, piece) in PROMOTION_PIECES.iter().enumerate() {
            assert!(promoted
                .iter()
                .any(|c| c.pieces[Sides::WHITE].bb_pieces[*piece] > 0),
                "missing promotion piece {i}");
        }
    }

    #[test]
    fn castling_through_check_is_rejected() {
        let mg = MoveGenerator::new();
        // A black rook on f8 attacks f1, so white may not castle kingside.
        // Queenside is unaffected.
        let pos = Position::from_fen("r4rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        let g1 = BB_SQUARES[62];
        let c1 = BB_SQUARES[58];

        let kings_on: Vec<Bitboard> = children(&mg, &pos)
            .iter()
            .map(|c| c.pieces[Sides::WHITE].bb_pieces[Pieces::KING])
            .collect();

        assert!(!kings_on.contains(&g1));
        assert!(kings_on.contains(&c1));
    }

    #[test]
    fn castling_rights_fall_with_the_rook() {
        let mg = MoveGenerator::new();
        // White to move captures the h8 rook; black loses the kingside right.
        let pos = Position::from_fen("r3k2r/6B1/8/8/8/8/8/4K3 w kq - 0 1").unwrap();
        let h8 = BB_SQUARES[7];

        let capture = children(&mg, &pos)
            .into_iter()
            .find(|c| c.pieces[Sides::WHITE].bb_pieces[Pieces::BISHOP] & h8 > 0)
            .unwrap();

        assert!(!capture.pieces[Sides::BLACK].castle_kingside);
        assert!(capture.pieces[Sides::BLACK].castle_queenside);
    }

    #[test]
    fn pinned_piece_moves_are_filtered_out() {
        let mg = MoveGenerator::new();
        // The white knight on e4 is pinned against the king by the e8 rook.
        let pos = Position::from_fen("4r3/8/8/8/4N3/8/8/4K3 w - - 0 1").unwrap();

        let successors = children(&mg, &pos);
        assert!(!successors.is_empty());
        for child in successors {
            // Any child where the knight moved would leave the king in
            // check, so the knight must still be on e4.
            assert_eq!(
                child.pieces[Sides::WHITE].bb_pieces[Pieces::KNIGHT],
                BB_SQUARES[36]
            );
        }
    }
}
