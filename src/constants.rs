// Board geometry
pub const BOARD_SIZE: usize = 8;
pub const MIN_RUN: usize = 3;

// Scoring
pub const POINTS_PER_CELL: u32 = 10;

// Animation phase durations (in milliseconds)
pub const SWAP_GLIDE_MS: u64 = 50;
pub const REVERT_GLIDE_MS: u64 = 50;
pub const FADE_OUT_MS: u64 = 75;
pub const FALL_MS: u64 = 50;
pub const FADE_IN_MS: u64 = 50;

// Hint settings
pub const HINT_DELAY_SECS: u64 = 15; // Idle time before a hint is searched for
pub const HINT_PULSE_MS: u64 = 1000; // One full 0 -> 1 -> 0 opacity cycle
