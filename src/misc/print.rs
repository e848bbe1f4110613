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

use crate::board::{
    defs::{PIECE_CHAR_CAPS, SQUARE_NAME},
    Position,
};
use crate::defs::{Bitboard, Sides};

const RANK_SEPARATOR: &str = "  +---+---+---+---+---+---+---+---+";

// Print the position as an ASCII diagram, from white's point of view,
// followed by the game state summary line.
pub fn position(pos: &Position) {
    println!("{RANK_SEPARATOR}");

    for rank_start in (0..64).step_by(8) {
        let rank_number = 8 - rank_start / 8;
        let mut line = format!("{rank_number} |");

        for square in rank_start..rank_start + 8 {
            let symbol = match pos.piece_on(square) {
                Some((side, piece)) => {
                    let c = PIECE_CHAR_CAPS[piece];
                    if side == Sides::WHITE {
                        c.to_string()
                    } else {
                        c.to_lowercase()
                    }
                }
                None => String::from(" "),
            };
            line.push_str(&format!(" {symbol} |"));
        }

        println!("{line}");
        println!("{RANK_SEPARATOR}");
    }

    println!("    a   b   c   d   e   f   g   h\n");

    let ep = if pos.en_passant > 0 {
        SQUARE_NAME[pos.en_passant.trailing_zeros() as usize]
    } else {
        "-"
    };
    println!(
        "zk: {:x} stm: {} ep: {} ply: {} material: {}",
        pos.zobrist_key,
        if pos.white_to_move { "white" } else { "black" },
        ep,
        pos.half_move_count,
        pos.material
    );
}

// Print a bitboard as an 8x8 block of ones and dots. Useful during
// debugging of the attack tables.
#[allow(dead_code)]
pub fn bitboard(bb: Bitboard) {
    for rank_start in (0..64).step_by(8) {
        let rank_number = 8 - rank_start / 8;
        print!("{rank_number}   ");
        for square in rank_start..rank_start + 8 {
            if bb & (1u64 << square) > 0 {
                print!("1 ");
            } else {
                print!(". ");
            }
        }
        println!();
    }
    println!("\n    a b c d e f g h\n");
}
