//! Fixed table rules. The game is always four seats and twenty cards.

/// Seats at the table.
pub const PLAYER_COUNT: usize = 4;

/// Copies of each focus-able card (Sun, Star, Moon) in the deck.
pub const SUIT_COPIES: usize = 6;

/// Copies of the Magic wildcard in the deck.
pub const MAGIC_COPIES: usize = 2;

/// Cards dealt to every alive player at the start of a round.
pub const HAND_SIZE: usize = 5;

/// Largest hidden play a player may make in one turn.
pub const MAX_PLAY: usize = 3;

/// Chance, in percent, that a bot questions the previous play.
pub const BOT_CHALLENGE_PERCENT: u32 = 30;

/// The bomb explodes with probability `1 / BOMB_ODDS` on a random check.
pub const BOMB_ODDS: u32 = 3;

/// Survivals after which the next bomb risk is certain death.
pub const MAX_SURVIVALS: u8 = 2;
