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
    defs::{
        RootChild, SearchRefs, SearchResult, SearchSummary, SearchTerminate, ASPIRATION_WINDOW,
        CHECKMATE_THRESHOLD, FULL_WINDOW_DEPTH, INF, WINDOW_LIMIT, WINDOW_WIDEN_FACTOR,
    },
    Search,
};
use crate::board::Position;

impl Search {
    // Iterative deepening. The root is expanded once; every iteration
    // re-sorts the root successors by the scores the previous iteration
    // backed up to them, searches one ply deeper, and replaces the best
    // move when the iteration finishes in time. The first depths run with
    // a full window; later depths aspire to land close to the previous
    // score and re-search with a widened window when they fail.
    pub fn iterative_deepening(refs: &mut SearchRefs) -> SearchResult {
        refs.search_info.timer_start();
        refs.search_info.allocated_time = Search::allocate_time(refs);

        // Expand the root once. The children are copied out of the arena
        // because they live for the entire search.
        let mark = refs.arena.mark();
        let count = refs.mg.expand(refs.root, refs.arena);
        let mut children: Vec<RootChild> = (0..count)
            .map(|i| RootChild {
                position: refs.arena.get(mark + i),
                eval: 0,
            })
            .collect();
        refs.arena.release(mark);

        // Until a full iteration completes, the best move is the root
        // itself. The caller can recognize this sentinel: it means there
        // is no legal move at all.
        let mut best_move = *refs.root;
        let mut best_eval = 0;
        let mut prev_eval = 0;
        let mut depth = 1;

        // Mate or stalemate on the board: there is nothing to search.
        if children.is_empty() {
            return (best_move, best_eval);
        }

        // Full-window phase.
        while depth < FULL_WINDOW_DEPTH
            && depth <= refs.search_params.depth
            && !refs.search_info.interrupted()
        {
            refs.search_info.depth = depth;

            if let Some((index, eval)) = Search::negamax_root(&mut children, depth, -INF, INF, refs)
            {
                best_move = children[index].position;
                best_eval = eval;
                prev_eval = eval;
                Search::summarize(refs, depth, eval, &best_move);
            }

            depth += 1;
        }

        // Aspiration-window phase.
        while depth <= refs.search_params.depth && !refs.search_info.interrupted() {
            refs.search_info.depth = depth;

            let mut alpha = prev_eval - ASPIRATION_WINDOW;
            let mut beta = prev_eval + ASPIRATION_WINDOW;

            loop {
                let result = Search::negamax_root(&mut children, depth, alpha, beta, refs);
                let Some((index, eval)) = result else {
                    break; // Out of time; the iteration is discarded.
                };

                // Every finished pass knows a best child, even a failed
                // one; only an in-window (or mate) pass fixes the score.
                best_move = children[index].position;

                if eval <= alpha {
                    // Fail-low: widen the window downwards.
                    alpha -= WINDOW_WIDEN_FACTOR * ASPIRATION_WINDOW;
                } else if eval >= beta {
                    // Fail-high: widen the window upwards.
                    beta += WINDOW_WIDEN_FACTOR * ASPIRATION_WINDOW;
                } else {
                    // Within the window: accept the result.
                    best_eval = eval;
                    break;
                }

                // Prevent the window from getting too wide; fall back to
                // one full-window search instead.
                if alpha < -WINDOW_LIMIT || beta > WINDOW_LIMIT {
                    if let Some((index, eval)) =
                        Search::negamax_root(&mut children, depth, -INF, INF, refs)
                    {
                        best_move = children[index].position;
                        best_eval = eval;
                    }
                    break;
                }

                // Mate scores sit far outside any window; accept them
                // instead of widening forever.
                if eval.abs() > CHECKMATE_THRESHOLD {
                    best_eval = eval;
                    break;
                }
            }

            if !refs.search_info.interrupted() {
                Search::summarize(refs, depth, best_eval, &best_move);
            }

            prev_eval = best_eval;
            depth += 1;
        }

        // Failsafe: if no iteration ever completed but legal moves exist,
        // recover one with a quick full-window pass at depth one.
        if best_move.zobrist_key == refs.root.zobrist_key && !children.is_empty() {
            refs.search_info.terminate = SearchTerminate::Nothing;
            refs.search_info.allocated_time = u128::MAX;

            if let Some((index, eval)) = Search::negamax_root(&mut children, 1, -INF, INF, refs) {
                best_move = children[index].position;
                best_eval = eval;
            }
        }

        (best_move, best_eval)
    }

    // One alpha-beta pass over the root successors. Returns the index of
    // the best child and its score, or None when the pass was interrupted.
    // Each child's score is recorded for the next iteration's move
    // ordering; the root itself is never stored in the transposition
    // table, so a hash cut can never leave the root without a move.
    fn negamax_root(
        children: &mut [RootChild],
        depth: u8,
        mut alpha: i32,
        beta: i32,
        refs: &mut SearchRefs,
    ) -> Option<(usize, i32)> {
        // Best successors first.
        children.sort_by(|a, b| b.eval.cmp(&a.eval));

        let mut best_index: Option<usize> = None;
        let mut best_eval = -INF;

        for i in 0..children.len() {
            Search::check_termination(refs);
            if refs.search_info.interrupted() {
                return None;
            }

            let child = children[i].position;

            refs.repetitions.insert(child.zobrist_key);
            let eval = -Search::negamax(&child, depth - 1, -beta, -alpha, 1, refs);
            refs.repetitions.remove(child.zobrist_key);

            if refs.search_info.interrupted() {
                return None;
            }

            children[i].eval = eval;

            if eval > best_eval {
                best_eval = eval;
                best_index = Some(i);
                if best_eval > alpha {
                    alpha = best_eval;
                }
            }
        }

        best_index.map(|i| (i, best_eval))
    }

    fn summarize(refs: &mut SearchRefs, depth: u8, eval: i32, best_move: &Position) {
        let elapsed = refs.search_info.timer_elapsed();
        let nodes = refs.search_info.nodes;
        let summary = SearchSummary {
            depth,
            time: elapsed,
            cp: eval,
            nodes,
            nps: Search::nodes_per_second(nodes, elapsed),
            best_move: Position::move_as_string(refs.root, best_move),
        };
        Search::report_summary(refs, summary);
    }
}
