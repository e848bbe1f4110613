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

// The console front-end: a small command loop on stdin. It owns the game;
// the search thread is told when to think and reports back through the
// information channel.

use super::{
    defs::{ErrFatal, ErrNormal, Information},
    Engine,
};
use crate::{
    board::Position,
    defs::{FEN_START_POSITION, MAX_PLY},
    evaluation::Evaluation,
    misc::{parse, perft, print},
    search::defs::{SearchControl, SearchMode, SearchParams, SearchReport},
};
use std::io::{self, BufRead, Write};

impl Engine {
    pub fn main_loop(&mut self) {
        let stdin = io::stdin();
        let mut quit = false;

        while !quit {
            print!("> ");
            io::stdout().flush().expect(ErrFatal::READ_IO);

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).expect(ErrFatal::READ_IO) == 0 {
                break; // EOF
            }

            let input = line.trim();
            let (command, args) = match input.split_once(' ') {
                Some((c, a)) => (c, a.trim()),
                None => (input, ""),
            };

            match command {
                "" => (),
                "quit" | "exit" => quit = true,
                "d" => print::position(&self.current_position()),
                "startpos" => self.set_position(FEN_START_POSITION),
                "position" | "fen" => self.set_position(args),
                "move" => self.try_move(args),
                "go" => self.go(args),
                "eval" => {
                    let pos = self.current_position();
                    println!("eval: {} cp", Evaluation::evaluate_position(&pos, &self.mg));
                }
                "perft" => match args.parse::<u8>() {
                    Ok(depth) => perft::run(&self.current_position(), depth, &self.mg),
                    Err(_) => println!("{}", ErrNormal::NOT_INT),
                },
                "clear" => self.tt.lock().expect(ErrFatal::LOCK).clear(),
                _ => println!("{}", ErrNormal::UNKNOWN_COMMAND),
            }
        }

        // Shut the search thread down before leaving.
        self.search.send(SearchControl::Quit);
        self.search.wait_for_shutdown();
    }

    fn current_position(&self) -> Position {
        *self.position.lock().expect(ErrFatal::LOCK)
    }

    fn set_position(&mut self, fen: &str) {
        match Position::from_fen(fen) {
            Ok(pos) => {
                *self.position.lock().expect(ErrFatal::LOCK) = pos;
                let mut repetitions = self.repetitions.lock().expect(ErrFatal::LOCK);
                repetitions.clear();
                repetitions.insert(pos.zobrist_key);
            }
            Err(_) => println!("{}", ErrNormal::FEN_FAILED),
        }
    }

    // Play the user's move if it is one of the legal successors of the
    // current position. An unknown or illegal move leaves the position
    // untouched.
    fn try_move(&mut self, input: &str) {
        let Ok((from, to, promotion)) = parse::algebraic_move_to_number(input) else {
            println!("{}", ErrNormal::NOT_LEGAL);
            return;
        };

        let parent = self.current_position();
        let mark = self.arena.mark();
        let count = self.mg.expand(&parent, &mut self.arena);
        let mut chosen: Option<Position> = None;

        for i in 0..count {
            let child = self.arena.get(mark + i);
            if Position::move_between(&parent, &child) == (from, to, promotion) {
                chosen = Some(child);
                break;
            }
        }
        self.arena.release(mark);

        match chosen {
            Some(child) => self.play(child),
            None => println!("{}", ErrNormal::NOT_LEGAL),
        }
    }

    // Start the search with the given limits and wait for the best move.
    // Supported: "go", "go depth <n>", "go movetime <ms>", "go clock <ms>".
    fn go(&mut self, args: &str) {
        let mut search_params = SearchParams {
            depth: MAX_PLY,
            move_time: 5_000,
            game_time: 0,
            search_mode: SearchMode::MoveTime,
        };

        let tokens: Vec<&str> = args.split_whitespace().collect();
        for pair in tokens.chunks(2) {
            match *pair {
                ["depth", value] => {
                    if let Ok(depth) = value.parse::<u8>() {
                        search_params.depth = depth.min(MAX_PLY);
                        search_params.search_mode = SearchMode::Depth;
                    }
                }
                ["movetime", value] => {
                    if let Ok(ms) = value.parse::<u128>() {
                        search_params.move_time = ms;
                        search_params.search_mode = SearchMode::MoveTime;
                    }
                }
                ["clock", value] => {
                    if let Ok(ms) = value.parse::<u128>() {
                        search_params.game_time = ms;
                        search_params.search_mode = SearchMode::GameTime;
                    }
                }
                _ => {
                    println!("{}", ErrNormal::UNKNOWN_COMMAND);
                    return;
                }
            }
        }

        self.search.send(SearchControl::Start(search_params));

        // Print summaries as the depths complete; pick up the best move at
        // the end.
        let info_rx = self.info_rx.as_ref().expect(ErrFatal::CHANNEL).clone();
        loop {
            match info_rx.recv().expect(ErrFatal::CHANNEL) {
                Information::Search(SearchReport::SearchSummary(summary)) => {
                    println!(
                        "depth {} score cp {} nodes {} nps {} time {} bm {}",
                        summary.depth,
                        summary.cp,
                        summary.nodes,
                        summary.nps,
                        summary.time,
                        summary.best_move
                    );
                }
                Information::Search(SearchReport::Finished((best_move, eval))) => {
                    let parent = self.current_position();

                    // The search hands the root back when there is no
                    // legal move: the game was already over.
                    if best_move.zobrist_key == parent.zobrist_key {
                        self.announce_game_end(&parent);
                    } else {
                        println!(
                            "bestmove {} ({} cp)",
                            Position::move_as_string(&parent, &best_move),
                            eval
                        );
                        self.play(best_move);
                    }
                    break;
                }
            }
        }
    }

    // Put a successor on the board, record it for repetition detection,
    // and report a finished game right away.
    fn play(&mut self, position: Position) {
        *self.position.lock().expect(ErrFatal::LOCK) = position;

        let mut repetitions = self.repetitions.lock().expect(ErrFatal::LOCK);
        repetitions.insert(position.zobrist_key);
        let threefold = repetitions.is_threefold(position.zobrist_key);
        drop(repetitions);

        print::position(&position);

        if threefold {
            println!("Draw by threefold repetition.");
            return;
        }

        // Mate and stalemate show up as a position without successors.
        let mark = self.arena.mark();
        let count = self.mg.expand(&position, &mut self.arena);
        self.arena.release(mark);
        if count == 0 {
            self.announce_game_end(&position);
        }
    }

    fn announce_game_end(&self, position: &Position) {
        let in_check = self.mg.square_attacked(
            position,
            position.opponent(),
            position.king_square(position.us()),
        );

        if in_check {
            let winner = if position.white_to_move { "black" } else { "white" };
            println!("Checkmate: {} wins.", winner);
        } else {
            println!("Stalemate.");
        }
    }
}
