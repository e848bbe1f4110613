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
    defs::{SearchMode, SearchRefs},
    Search,
};

impl Search {
    // This function just returns true if the wall-clock time for the
    // currently searched move is up.
    pub fn out_of_time(refs: &SearchRefs) -> bool {
        refs.search_info.timer_elapsed() >= refs.search_info.allocated_time
    }

    // How many milliseconds the search may spend on this move. In Depth
    // mode the clock never runs out; in MoveTime mode the budget is taken
    // as given; in GameTime mode a slice of the remaining clock is
    // allocated depending on the phase of the game.
    pub fn allocate_time(refs: &SearchRefs) -> u128 {
        let params = refs.search_params;

        match params.search_mode {
            SearchMode::Depth => u128::MAX,
            SearchMode::MoveTime => params.move_time,
            SearchMode::GameTime => {
                Search::game_time_slice(refs.root.half_move_count, params.game_time, params.move_time)
            }
        }
    }

    // The clock-division ladder. The first moves of the game get a token
    // slice of the per-move budget; after that the slice of the remaining
    // clock grows as the game gets longer and the position simpler.
    pub fn game_time_slice(half_move_count: u16, clock_remaining: u128, move_time: u128) -> u128 {
        if half_move_count < 2 {
            move_time / 60
        } else if half_move_count < 10 {
            clock_remaining / 60
        } else if half_move_count < 50 {
            clock_remaining / 30
        } else {
            clock_remaining / 20
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_clock_ladder_widens_with_game_length() {
        // Opening moves: a fraction of the per-move budget.
        assert_eq!(Search::game_time_slice(0, 600_000, 6_000), 100);
        assert_eq!(Search::game_time_slice(1, 600_000, 6_000), 100);

        // Early game: a sixtieth of the remaining clock.
        assert_eq!(Search::game_time_slice(5, 600_000, 6_000), 10_000);

        // Middle game: a thirtieth.
        assert_eq!(Search::game_time_slice(20, 600_000, 6_000), 20_000);

        // Late game: a twentieth.
        assert_eq!(Search::game_time_slice(80, 600_000, 6_000), 30_000);
    }
}
