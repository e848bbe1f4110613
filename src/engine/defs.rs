use crate::search::defs::SearchReport;

// This struct holds messages that are reported on fatal engine errors.
// These should never happen; if they do the engine is in an unknown state,
// and it will panic without trying any recovery whatsoever.
pub struct ErrFatal;
impl ErrFatal {
    pub const LOCK: &'static str = "Lock failed.";
    pub const READ_IO: &'static str = "Reading I/O failed.";
    pub const THREAD: &'static str = "Thread has failed.";
    pub const CHANNEL: &'static str = "Broken channel.";
}

pub struct ErrNormal;
impl ErrNormal {
    pub const NOT_LEGAL: &'static str = "This is not a legal move in this position";
    pub const NOT_INT: &'static str = "The value given was not an integer";
    pub const FEN_FAILED: &'static str = "Setting up FEN failed";
    pub const UNKNOWN_COMMAND: &'static str = "Unknown command";
}

// Information that flows from the search thread back into the engine's
// main loop.
pub enum Information {
    Search(SearchReport),
}
