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

// search.rs contains the engine's search routine and the worker thread it
// runs on. The thread owns the arena the search tree grows in; the
// transposition table and the repetition table are shared with the engine
// thread through mutexes, but they are locked for the duration of a
// search, so while a search runs, the search thread is their only user.

pub mod defs;
mod iter_deep;
mod negamax;
pub mod repetition;
mod time;
pub mod transposition;
mod utils;

use self::{repetition::RepetitionTable, transposition::TranspositionTable};
use crate::{
    arena::Arena,
    board::Position,
    engine::defs::{ErrFatal, Information},
    movegen::MoveGenerator,
};
use crossbeam_channel::Sender;
use defs::{SearchControl, SearchInfo, SearchParams, SearchRefs, SearchReport, SearchTerminate};
use std::{
    sync::{Arc, Mutex},
    thread::{self, JoinHandle},
};

pub struct Search {
    handle: Option<JoinHandle<()>>,
    control_tx: Option<Sender<SearchControl>>,
}

impl Search {
    pub fn new() -> Self {
        Self {
            handle: None,
            control_tx: None,
        }
    }

    pub fn init(
        &mut self,
        report_tx: Sender<Information>, // Used to send information to engine.
        position: Arc<Mutex<Position>>, // Arc pointer to engine's position.
        mg: Arc<MoveGenerator>,         // Arc pointer to engine's move generator.
        tt: Arc<Mutex<TranspositionTable>>,
        repetitions: Arc<Mutex<RepetitionTable>>,
    ) {
        // Set up a channel for incoming commands.
        let (control_tx, control_rx) = crossbeam_channel::unbounded::<SearchControl>();

        // Create thread-local variables.
        let t_report_tx = report_tx;

        // Create the search thread.
        let h = thread::spawn(move || {
            let arc_position = Arc::clone(&position);
            let arc_mg = Arc::clone(&mg);
            let arc_tt = Arc::clone(&tt);
            let arc_repetitions = Arc::clone(&repetitions);

            // The arena lives as long as the thread; every search reuses it.
            let mut arena = Arena::new();
            let mut quit = false;

            // As long as the search isn't quit, keep this thread alive.
            while !quit {
                // Wait for the next incoming command from the engine.
                let cmd = control_rx.recv().expect(ErrFatal::CHANNEL);

                let search_params = match cmd {
                    SearchControl::Start(sp) => sp,
                    SearchControl::Quit => {
                        quit = true;
                        continue;
                    }
                    SearchControl::Stop | SearchControl::Nothing => continue,
                };

                // Copy the current position to search from.
                let root = *arc_position.lock().expect(ErrFatal::LOCK);

                // Take the hash tables for the duration of this search.
                let mut tt = arc_tt.lock().expect(ErrFatal::LOCK);
                let mut repetitions = arc_repetitions.lock().expect(ErrFatal::LOCK);

                let mut search_info = SearchInfo::new();
                let mut search_refs = SearchRefs {
                    root: &root,
                    mg: &*arc_mg,
                    arena: &mut arena,
                    tt: &mut *tt,
                    repetitions: &mut *repetitions,
                    search_params: &search_params,
                    search_info: &mut search_info,
                    control_rx: Some(&control_rx),
                    report_tx: Some(&t_report_tx),
                };

                // Run the search and hand the best move to the engine.
                let result = Search::iterative_deepening(&mut search_refs);
                let information = Information::Search(SearchReport::Finished(result));
                t_report_tx.send(information).expect(ErrFatal::CHANNEL);

                // A Quit received during the search also stops the thread.
                if search_info.terminate == SearchTerminate::Quit {
                    quit = true;
                }
            }
        });

        // Store the thread's handle and command sender.
        self.handle = Some(h);
        self.control_tx = Some(control_tx);
    }

    // This function is used to send commands into the search thread.
    pub fn send(&self, cmd: SearchControl) {
        if let Some(tx) = &self.control_tx {
            tx.send(cmd).expect(ErrFatal::CHANNEL);
        }
    }

    // After sending the quit command, the engine calls this function to
    // wait for the search to shut down.
    pub fn wait_for_shutdown(&mut self) {
        if let Some(h) = self.handle.take() {
            h.join().expect(ErrFatal::THREAD);
        }
    }
}

// Convenience entry point for driving a search without the worker thread:
// build the refs, run iterative deepening, return the chosen successor and
// its score from the root's side-to-move perspective.
impl Search {
    pub fn find_best_move(
        root: &Position,
        max_depth: u8,
        max_time_ms: u128,
        mg: &MoveGenerator,
        arena: &mut Arena,
        tt: &mut TranspositionTable,
        repetitions: &mut RepetitionTable,
    ) -> (Position, i32) {
        let search_params = SearchParams {
            depth: max_depth,
            move_time: max_time_ms,
            game_time: 0,
            search_mode: defs::SearchMode::MoveTime,
        };
        let mut search_info = SearchInfo::new();
        let mut search_refs = SearchRefs {
            root,
            mg,
            arena,
            tt,
            repetitions,
            search_params: &search_params,
            search_info: &mut search_info,
            control_rx: None,
            report_tx: None,
        };

        Search::iterative_deepening(&mut search_refs)
    }
}

#[cfg(test)]
mod tests {
    use super::{repetition::RepetitionTable, transposition::TranspositionTable, Search};
    use crate::{
        arena::Arena,
        board::{
            defs::{Pieces, BB_SQUARES},
            Position,
        },
        defs::Sides,
        evaluation::defs::CHECKMATE_VALUE,
        movegen::MoveGenerator,
    };

    // End-to-end scenarios: the engine must find forced mates, win
    // material through promotion, steer around repetitions, and behave
    // deterministically under the fixed Zobrist seed.
    struct Harness {
        mg: MoveGenerator,
        arena: Arena,
        tt: TranspositionTable,
        repetitions: RepetitionTable,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                mg: MoveGenerator::new(),
                arena: Arena::new(),
                tt: TranspositionTable::new(16),
                repetitions: RepetitionTable::new(),
            }
        }

        fn best_move(&mut self, pos: &Position, depth: u8) -> (Position, i32) {
            Search::find_best_move(
                pos,
                depth,
                u128::MAX,
                &self.mg,
                &mut self.arena,
                &mut self.tt,
                &mut self.repetitions,
            )
        }
    }

    #[test]
    fn the_opening_move_is_one_of_the_twenty_legal_ones() {
        let mut harness = Harness::new();
        let pos =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();

        let (best, _) = harness.best_move(&pos, 6);

        // The root is handed back only when there is no legal move at all;
        // from the start position the engine must always produce one.
        assert_ne!(best.zobrist_key, pos.zobrist_key);

        // And it must be one of the twenty legal successors.
        let mut arena = Arena::new();
        let mark = arena.mark();
        let count = harness.mg.expand(&pos, &mut arena);
        let found = (0..count).any(|i| arena.get(mark + i).zobrist_key == best.zobrist_key);
        assert!(found);
    }

    #[test]
    fn mate_in_one_is_found_and_scored_as_mate() {
        let mut harness = Harness::new();
        let pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/3R2K1 w - -").unwrap();

        let (best, score) = harness.best_move(&pos, 3);

        // Rook to d8 is the mate.
        let d8 = BB_SQUARES[3];
        assert!(best.pieces[Sides::WHITE].bb_pieces[Pieces::ROOK] & d8 > 0);
        assert!((score - CHECKMATE_VALUE).abs() <= 10);
    }

    #[test]
    fn the_search_promotes_the_pawn() {
        let mut harness = Harness::new();
        let pos = Position::from_fen("k4q2/6P1/8/8/8/8/8/7K w - -").unwrap();

        let (best, score) = harness.best_move(&pos, 4);

        // The pawn turned into something; the engine should be up roughly
        // a queen for a pawn.
        assert_eq!(best.pieces[Sides::WHITE].bb_pieces[Pieces::PAWN], 0);
        assert!(best.pieces[Sides::WHITE].bb_pieces[Pieces::QUEEN] > 0);
        assert!(score > 600, "expected a winning score, got {score}");
    }

    #[test]
    fn repeated_positions_score_zero_and_are_avoided() {
        let mut harness = Harness::new();
        // White is a queen up; any sensible move keeps a winning score.
        let pos = Position::from_fen("k7/8/8/8/8/8/8/K5Q1 w - - 0 40").unwrap();

        // Pretend one particular successor has already been on the board
        // twice: entering it a third time is a draw by repetition.
        let mut arena = Arena::new();
        let mark = arena.mark();
        let count = harness.mg.expand(&pos, &mut arena);
        assert!(count > 1);
        let repeated = arena.get(mark);
        arena.release(mark);

        harness.repetitions.insert(repeated.zobrist_key);
        harness.repetitions.insert(repeated.zobrist_key);

        let (best, score) = harness.best_move(&pos, 3);

        // The engine keeps its queen advantage instead of walking into
        // the drawn line.
        assert_ne!(best.zobrist_key, repeated.zobrist_key);
        assert!(score > 500);
    }

    #[test]
    fn a_mated_position_returns_the_root_as_sentinel() {
        let mut harness = Harness::new();
        // Black to move, back-rank mated.
        let pos = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        let mut arena = Arena::new();
        let count = harness.mg.expand(&pos, &mut arena);

        if count == 0 {
            let (best, _) = harness.best_move(&pos, 3);
            assert_eq!(best.zobrist_key, pos.zobrist_key);
        } else {
            panic!("test position is not mate");
        }
    }

    #[test]
    fn search_is_deterministic_under_the_fixed_seed() {
        let pos =
            Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 3")
                .unwrap();

        let mut first = Harness::new();
        let mut second = Harness::new();

        let (best_a, score_a) = first.best_move(&pos, 4);
        let (best_b, score_b) = second.best_move(&pos, 4);

        assert_eq!(best_a.zobrist_key, best_b.zobrist_key);
        assert_eq!(score_a, score_b);
    }
}
