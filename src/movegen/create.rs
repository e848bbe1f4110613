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

use super::MoveGenerator;
use crate::{
    board::{
        defs::{Direction, Files, Location, Ranks, BB_FILES, BB_RANKS, BB_SQUARES},
        Position,
    },
    defs::{Bitboard, Square},
};

pub type BlockerBoards = Vec<Bitboard>;
pub type AttackBoards = Vec<Bitboard>;

impl MoveGenerator {
    // Explanation of the rook mask, step by step. Get the location of the
    // square the rook is on, as a (file, rank) tuple. Get the bitboards of
    // the file and rank the rook is on. Create a bitboard for the edges of
    // the board, but do NOT include an edge if the rook is actually on it.
    // (Otherwise all bits would be unset.) Combine the file and rank
    // bitboards, then exclude the edge squares and the rook's own square.
    // A blocker on the edge of a ray is redundant: the attack reaches it
    // whether it blocks or not.
    pub fn rook_mask(square: Square) -> Bitboard {
        let location = Position::square_on_file_rank(square);
        let bb_rook_square = BB_SQUARES[square];
        let bb_edges = MoveGenerator::edges_without_piece(location);
        let bb_mask = BB_FILES[location.0 as usize] | BB_RANKS[location.1 as usize];

        bb_mask & !bb_edges & !bb_rook_square
    }

    // bishop_mask() works a bit differently compared to rook_mask(), but
    // in the end it does the same thing. Starting at the given square, the
    // function generates four rays, one for each diagonal direction, on an
    // empty board. The four rays are combined, and the edges clipped off,
    // as they are not needed in the mask.
    pub fn bishop_mask(square: Square) -> Bitboard {
        let location = Position::square_on_file_rank(square);
        let bb_edges = MoveGenerator::edges_without_piece(location);
        let bb_up_left = MoveGenerator::bb_ray(0, square, Direction::UpLeft);
        let bb_up_right = MoveGenerator::bb_ray(0, square, Direction::UpRight);
        let bb_down_right = MoveGenerator::bb_ray(0, square, Direction::DownRight);
        let bb_down_left = MoveGenerator::bb_ray(0, square, Direction::DownLeft);

        (bb_up_left | bb_up_right | bb_down_right | bb_down_left) & !bb_edges
    }

    // This function creates a bitboard holding all the edges of the board,
    // as needed to clip the board edges off the rook and bishop masks. To
    // prevent clipping the entire ray if the piece itself is on an edge,
    // the edge(s) containing the piece are excluded.
    fn edges_without_piece(location: Location) -> Bitboard {
        let bb_piece_file = BB_FILES[location.0 as usize];
        let bb_piece_rank = BB_RANKS[location.1 as usize];

        (BB_FILES[Files::A] & !bb_piece_file)
            | (BB_FILES[Files::H] & !bb_piece_file)
            | (BB_RANKS[Ranks::R1] & !bb_piece_rank)
            | (BB_RANKS[Ranks::R8] & !bb_piece_rank)
    }

    // This function takes a square and all the blocker boards belonging to
    // that square. For each blocker board it generates the matching attack
    // board: the ray walk stops at (and includes) the first blocker.
    pub fn rook_attack_boards(square: Square, blockers: &[Bitboard]) -> AttackBoards {
        let mut bb_attack_boards: AttackBoards = Vec::new();

        for b in blockers.iter() {
            let bb_attacks = MoveGenerator::bb_ray(*b, square, Direction::Up)
                | MoveGenerator::bb_ray(*b, square, Direction::Right)
                | MoveGenerator::bb_ray(*b, square, Direction::Down)
                | MoveGenerator::bb_ray(*b, square, Direction::Left);
            bb_attack_boards.push(bb_attacks);
        }

        bb_attack_boards
    }

    // Same as the function above, but for the bishop.
    pub fn bishop_attack_boards(square: Square, blockers: &[Bitboard]) -> AttackBoards {
        let mut bb_attack_boards: AttackBoards = Vec::new();

        for b in blockers.iter() {
            let bb_attacks = MoveGenerator::bb_ray(*b, square, Direction::UpLeft)
                | MoveGenerator::bb_ray(*b, square, Direction::UpRight)
                | MoveGenerator::bb_ray(*b, square, Direction::DownRight)
                | MoveGenerator::bb_ray(*b, square, Direction::DownLeft);
            bb_attack_boards.push(bb_attacks);
        }

        bb_attack_boards
    }

    // blocker_boards() takes a piece mask and generates all possible
    // occupancy permutations for it, using the Carry-Rippler method.
    // https://www.chessprogramming.org/Traversing_Subsets_of_a_Set
    pub fn blocker_boards(mask: Bitboard) -> BlockerBoards {
        let d: Bitboard = mask;
        let mut bb_blocker_boards: BlockerBoards = Vec::new();
        let mut n: Bitboard = 0;

        loop {
            bb_blocker_boards.push(n);
            n = n.wrapping_sub(d) & d;
            if n == 0 {
                break;
            }
        }

        bb_blocker_boards
    }

    // Create a ray for a sliding piece in one of eight directions, starting
    // at the given square and walking until the ray either hits a piece in
    // bb_in, or the edge of the board. With square 0 on A8, walking toward
    // the eighth rank means shifting right; only one of the eight blocks
    // runs per call.
    pub fn bb_ray(bb_in: Bitboard, square: Square, direction: Direction) -> Bitboard {
        let mut file = Position::square_on_file_rank(square).0 as usize;
        let mut rank = Position::square_on_file_rank(square).1 as usize;
        let mut bb_square = BB_SQUARES[square];
        let mut bb_ray = 0;
        let mut done = false;
        while !done {
            done = true;
            match direction {
                Direction::Up => {
                    if rank != Ranks::R8 {
                        bb_square >>= 8;
                        bb_ray |= bb_square;
                        rank += 1;
                        done = (bb_square & bb_in) > 0;
                    }
                }
                Direction::Right => {
                    if file != Files::H {
                        bb_square <<= 1;
                        bb_ray |= bb_square;
                        file += 1;
                        done = (bb_square & bb_in) > 0;
                    }
                }
                Direction::Down => {
                    if rank != Ranks::R1 {
                        bb_square <<= 8;
                        bb_ray |= bb_square;
                        rank -= 1;
                        done = (bb_square & bb_in) > 0;
                    }
                }
                Direction::Left => {
                    if file != Files::A {
                        bb_square >>= 1;
                        bb_ray |= bb_square;
                        file -= 1;
                        done = (bb_square & bb_in) > 0;
                    }
                }
                Direction::UpLeft => {
                    if (rank != Ranks::R8) && (file != Files::A) {
                        bb_square >>= 9;
                        bb_ray |= bb_square;
                        rank += 1;
                        file -= 1;
                        done = (bb_square & bb_in) > 0;
                    }
                }
                Direction::UpRight => {
                    if (rank != Ranks::R8) && (file != Files::H) {
                        bb_square >>= 7;
                        bb_ray |= bb_square;
                        rank += 1;
                        file += 1;
                        done = (bb_square & bb_in) > 0;
                    }
                }
                Direction::DownRight => {
                    if (rank != Ranks::R1) && (file != Files::H) {
                        bb_square <<= 9;
                        bb_ray |= bb_square;
                        rank -= 1;
                        file += 1;
                        done = (bb_square & bb_in) > 0;
                    }
                }
                Direction::DownLeft => {
                    if (rank != Ranks::R1) && (file != Files::A) {
                        bb_square <<= 7;
                        bb_ray |= bb_square;
                        rank -= 1;
                        file -= 1;
                        done = (bb_square & bb_in) > 0;
                    }
                }
            };
        }
        bb_ray
    }
}
