// Card and dealing constants
pub const HAND_SIZE: usize = 4;
pub const MIN_RANK: u8 = 1;
pub const MAX_RANK: u8 = 13;
pub const MAX_DEAL_ATTEMPTS: usize = 10_000;
pub const FALLBACK_HAND: [u8; HAND_SIZE] = [1, 2, 3, 4];
