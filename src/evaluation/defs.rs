use crate::defs::Bitboard;

// Values of each piece type in centipawns, indexed by Pieces. The king's
// value is a sentinel far above every reachable material total, so a
// position in which a king could be captured evaluates off the scale.
pub const PIECE_VALUES: [i32; 6] = [100, 300, 300, 500, 900, 110_000];

pub const CHECKMATE_VALUE: i32 = 100_000;

// Attack weightings, in centipawns per attacked square.
pub const CENTER_SQUARE_ATTACK_VALUE: i32 = 20;
pub const BOX_SQUARE_ATTACK_VALUE: i32 = 8;
pub const GENERAL_ATTACK_SQUARES_VALUE: i32 = 2;

// Pawns and knights get a little extra for bearing on the center early.
pub const PAWN_CENTER_ATTACK_OFFSET: i32 = 10;
pub const KNIGHT_CENTER_ATTACK_OFFSET: i32 = 5;

// The opening evaluation runs below this many plies into the game.
pub const MID_GAME_MOVE_COUNT: u16 = 6;

// The four central squares d4, e4, d5, e5.
pub const CENTER_FOUR_SQUARES: Bitboard = 0x0000_0018_1800_0000;

// The ring of squares around the center.
pub const BOX_SQUARES: Bitboard = 0x0000_3C24_243C_0000;
