//! bluff-bomb: a four-seat bluffing card game
//!
//! Each round a focus card (Sun, Star or Moon) is announced. Players take turns
//! playing one to three cards face down, claiming they match the focus; Magic
//! matches anything. The next player may question the play. Whoever turns out
//! to be wrong faces the bomb: it explodes one time in three, and always on the
//! third risk survived in a row. The last player standing wins.
//!
//! Goals:
//! - The turn/round state machine is deterministic given its [`rng::RandomSource`]
//! - Human I/O sits behind [`frontend::Frontend`], so games run headless in tests
//! - No panics on bad input; human input is re-prompted, everything else is a `Result`
//!
//! ## Quick start: a headless all-bot game
//! ```
//! use bluff_bomb::agents::AgentTable;
//! use bluff_bomb::frontend::SilentFrontend;
//! use bluff_bomb::game::Game;
//! use bluff_bomb::rng::SeededRandom;
//!
//! let mut game = Game::new(AgentTable::all_bots(), Box::new(SeededRandom::new(7)));
//! let winner = game.run(&mut SilentFrontend).unwrap();
//! assert!(winner.is_some());
//! assert_eq!(game.alive_count(), 1);
//! ```
//!
//! ## Console
//! Play against three bots with:
//! ```sh
//! cargo run --bin bluff-bomb
//! ```

pub mod agents;
pub mod cards;
pub mod challenge;
pub mod console;
pub mod deck;
pub mod events;
pub mod frontend;
pub mod game;
pub mod input;
pub mod player;
pub mod rng;
pub mod rules;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
