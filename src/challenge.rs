//! Challenge resolution: judging a revealed play and the escalating bomb risk
//! carried by whoever was at fault.

use crate::cards::Card;
use crate::player::PlayerId;
use crate::rng::RandomSource;
use crate::rules::{BOMB_ODDS, MAX_SURVIVALS, PLAYER_COUNT};

/// A play is correct iff it is non-empty and every card satisfies `focus`.
///
/// ```
/// use bluff_bomb::cards::Card;
/// use bluff_bomb::challenge::play_is_correct;
///
/// assert!(play_is_correct(&[Card::Sun, Card::Magic], Card::Sun));
/// assert!(!play_is_correct(&[Card::Sun, Card::Moon], Card::Sun));
/// assert!(!play_is_correct(&[], Card::Sun));
/// ```
pub fn play_is_correct(play: &[Card], focus: Card) -> bool {
    !play.is_empty() && play.iter().all(|c| c.satisfies(focus))
}

/// Which side of a challenge carries the bomb risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The play was wrong; the player who made it is at fault.
    Player,
    /// The play was right; the challenger is at fault.
    Challenger,
}

impl Fault {
    pub fn from_verdict(correct_play: bool) -> Self {
        if correct_play {
            Fault::Challenger
        } else {
            Fault::Player
        }
    }

    pub fn pick(self, challenger: PlayerId, accused: PlayerId) -> PlayerId {
        match self {
            Fault::Player => accused,
            Fault::Challenger => challenger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BombOutcome {
    /// Survived; `survivals` is the updated count.
    Survived { survivals: u8 },
    /// Eliminated; `certain` when the counter had already reached its limit.
    Exploded { certain: bool },
}

impl BombOutcome {
    pub fn exploded(self) -> bool {
        matches!(self, BombOutcome::Exploded { .. })
    }
}

/// Per-seat count of bomb risks survived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurviveCounter {
    counts: [u8; PLAYER_COUNT],
}

impl SurviveCounter {
    pub fn new() -> Self {
        Self { counts: [0; PLAYER_COUNT] }
    }

    pub fn get(&self, player: PlayerId) -> u8 {
        self.counts.get(player.index()).copied().unwrap_or(0)
    }

    /// Run one bomb check for `player`.
    ///
    /// At the survival limit the bomb always explodes and no random draw is
    /// consumed. Otherwise it explodes one time in [`BOMB_ODDS`].
    pub fn risk(&mut self, player: PlayerId, rng: &mut dyn RandomSource) -> BombOutcome {
        let Some(count) = self.counts.get_mut(player.index()) else {
            return BombOutcome::Exploded { certain: true };
        };
        if *count >= MAX_SURVIVALS {
            *count = 0;
            return BombOutcome::Exploded { certain: true };
        }
        if rng.one_in(BOMB_ODDS) {
            *count = 0;
            return BombOutcome::Exploded { certain: false };
        }
        *count += 1;
        BombOutcome::Survived { survivals: *count }
    }
}

impl Default for SurviveCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything decided when a challenge resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub challenger: PlayerId,
    pub accused: PlayerId,
    pub correct_play: bool,
    pub at_fault: PlayerId,
    pub outcome: BombOutcome,
}

/// Judge `revealed` against `focus` and run the bomb check on whoever was wrong.
pub fn resolve(
    challenger: PlayerId,
    accused: PlayerId,
    revealed: Option<&[Card]>,
    focus: Card,
    counter: &mut SurviveCounter,
    rng: &mut dyn RandomSource,
) -> Resolution {
    let correct_play = play_is_correct(revealed.unwrap_or(&[]), focus);
    let at_fault = Fault::from_verdict(correct_play).pick(challenger, accused);
    let outcome = counter.risk(at_fault, rng);
    Resolution { challenger, accused, correct_play, at_fault, outcome }
}
