use crate::{
    arena::Arena,
    board::Position,
    defs::MAX_PLY,
    engine::defs::Information,
    movegen::MoveGenerator,
    search::{repetition::RepetitionTable, transposition::TranspositionTable},
};
use crossbeam_channel::{Receiver, Sender};
use std::time::Instant;

pub const INF: i32 = 1_000_000;
pub const DRAW: i32 = 0;
pub const STALEMATE: i32 = 0;
pub use crate::evaluation::defs::CHECKMATE_VALUE;
pub const CHECKMATE_THRESHOLD: i32 = CHECKMATE_VALUE - 1_000;

// Aspiration window settings: the first depths run with a full window,
// after that the window opens ASPIRATION_WINDOW around the previous score
// and is widened on a fail until a bound passes WINDOW_LIMIT.
pub const FULL_WINDOW_DEPTH: u8 = 4;
pub const ASPIRATION_WINDOW: i32 = 50;
pub const WINDOW_WIDEN_FACTOR: i32 = 5;
pub const WINDOW_LIMIT: i32 = 12_000;

// Poll the control channel every so many nodes.
pub const CHECK_TERMINATION: u64 = 0x7FF;

pub type SearchResult = (Position, i32);

#[derive(PartialEq)]
// These commands can be used by the engine thread to control the search.
pub enum SearchControl {
    Start(SearchParams),
    Stop,    // Stop the search and deliver a best move.
    Quit,    // Quit the search and the engine.
    Nothing, // No-Op
}

// Ways to terminate a search.
#[derive(PartialEq, Copy, Clone)]
pub enum SearchTerminate {
    Stop,    // Search is stopped.
    Quit,    // Search module (and engine) are shut down.
    Nothing, // No command received yet.
}

// SearchMode decides which budget limits the search.
#[derive(PartialEq, Copy, Clone)]
pub enum SearchMode {
    Depth,    // Run until the requested depth is reached.
    MoveTime, // Run until the time per move is used up.
    GameTime, // Take a slice of the remaining clock, by game phase.
}

// This struct holds all the search parameters as set by the engine thread.
#[derive(PartialEq, Copy, Clone)]
pub struct SearchParams {
    pub depth: u8,           // Maximum depth to search to
    pub move_time: u128,     // Maximum milliseconds per move
    pub game_time: u128,     // Milliseconds left on the engine's clock
    pub search_mode: SearchMode,
}

impl SearchParams {
    pub fn new() -> Self {
        Self {
            depth: MAX_PLY,
            move_time: 0,
            game_time: 0,
            search_mode: SearchMode::Depth,
        }
    }
}

// The search function will put all findings collected during the running
// search into this struct.
pub struct SearchInfo {
    start_time: Option<Instant>,
    pub allocated_time: u128,      // Allotted msecs to spend on the move
    pub depth: u8,                 // Depth currently being searched
    pub nodes: u64,                // Nodes searched
    pub terminate: SearchTerminate, // Terminate flag
}

impl SearchInfo {
    pub fn new() -> Self {
        Self {
            start_time: None,
            allocated_time: 0,
            depth: 0,
            nodes: 0,
            terminate: SearchTerminate::Nothing,
        }
    }

    pub fn timer_start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn timer_elapsed(&self) -> u128 {
        if let Some(x) = self.start_time {
            x.elapsed().as_millis()
        } else {
            0
        }
    }

    pub fn interrupted(&self) -> bool {
        self.terminate != SearchTerminate::Nothing
    }
}

// A successor of the root position, with the score backed up to it by the
// last finished iteration. Iterative deepening re-sorts the root children
// on these scores so the most promising line is searched first.
#[derive(Copy, Clone)]
pub struct RootChild {
    pub position: Position,
    pub eval: i32,
}

// After each completed depth, iterative deepening summarizes the running
// search results within this struct before sending it to the engine
// thread, which prints it to STDOUT.
pub struct SearchSummary {
    pub depth: u8,      // depth reached during the search
    pub time: u128,     // milliseconds
    pub cp: i32,        // centipawns score
    pub nodes: u64,     // nodes searched
    pub nps: u64,       // nodes per second
    pub best_move: String,
}

// This struct holds all the reports a search can send to the engine.
pub enum SearchReport {
    Finished(SearchResult),       // Search done. Contains the best move.
    SearchSummary(SearchSummary), // Periodic intermediate results.
}

// The search process needs references to a lot of data: the root position,
// the move generator, the arena the tree grows in, the hash tables, the
// search parameters, and a place to put results. It also needs the control
// receiver and report sender to communicate with the engine thread; both
// are optional so the search can be driven directly, without channels.
pub struct SearchRefs<'a> {
    pub root: &'a Position,
    pub mg: &'a MoveGenerator,
    pub arena: &'a mut Arena,
    pub tt: &'a mut TranspositionTable,
    pub repetitions: &'a mut RepetitionTable,
    pub search_params: &'a SearchParams,
    pub search_info: &'a mut SearchInfo,
    pub control_rx: Option<&'a Receiver<SearchControl>>,
    pub report_tx: Option<&'a Sender<Information>>,
}
