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
mod main_loop;

use crate::{
    arena::Arena,
    board::Position,
    defs::{About, EngineRunResult, FEN_KIWIPETE_POSITION},
    engine::defs::{ErrFatal, Information},
    misc::{cmdline::CmdLine, perft},
    movegen::MoveGenerator,
    search::{repetition::RepetitionTable, transposition::TranspositionTable, Search},
};
use crossbeam_channel::Receiver;
use std::sync::{Arc, Mutex};

// This struct holds the chess engine and its functions, so they are not
// all separate entities in the global space.
pub struct Engine {
    cmdline: CmdLine,
    position: Arc<Mutex<Position>>,
    mg: Arc<MoveGenerator>,
    tt: Arc<Mutex<TranspositionTable>>,
    repetitions: Arc<Mutex<RepetitionTable>>,
    arena: Arena,
    search: Search,
    info_rx: Option<Receiver<Information>>,
}

impl Engine {
    // Create e new engine.
    pub fn new() -> Self {
        let cmdline = CmdLine::new();
        let hash_size = cmdline.hash();

        Self {
            cmdline,
            position: Arc::new(Mutex::new(Position::new())),
            mg: Arc::new(MoveGenerator::new()),
            tt: Arc::new(Mutex::new(TranspositionTable::new(hash_size))),
            repetitions: Arc::new(Mutex::new(RepetitionTable::new())),
            arena: Arena::new(),
            search: Search::new(),
            info_rx: None,
        }
    }

    // Run the engine.
    pub fn run(&mut self) -> EngineRunResult {
        self.print_about();

        // Set up either the given FEN or the starting position.
        let fen = if self.cmdline.has_kiwipete() {
            String::from(FEN_KIWIPETE_POSITION)
        } else {
            self.cmdline.fen()
        };
        let position = Position::from_fen(&fen)?;
        *self.position.lock().expect(ErrFatal::LOCK) = position;
        self.repetitions
            .lock()
            .expect(ErrFatal::LOCK)
            .insert(position.zobrist_key);

        // In wizardry mode, generate magic numbers and exit.
        #[cfg(feature = "extra")]
        if self.cmdline.has_wizardry() {
            crate::extra::wizardry::find_magics(crate::board::defs::Pieces::ROOK);
            crate::extra::wizardry::find_magics(crate::board::defs::Pieces::BISHOP);
            return Ok(());
        }

        // In perft mode, run perft to the given depth and exit.
        if self.cmdline.perft() > 0 {
            perft::run(&position, self.cmdline.perft(), &self.mg);
            return Ok(());
        }

        // Set up the search thread and enter the main loop.
        let (info_tx, info_rx) = crossbeam_channel::unbounded::<Information>();
        self.info_rx = Some(info_rx);
        self.search.init(
            info_tx,
            Arc::clone(&self.position),
            Arc::clone(&self.mg),
            Arc::clone(&self.tt),
            Arc::clone(&self.repetitions),
        );

        self.main_loop();

        Ok(())
    }

    fn print_about(&self) {
        println!("{} {} by {}", About::ENGINE, About::VERSION, About::AUTHOR);
    }
}
