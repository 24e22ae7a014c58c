use crate::frontend::Frontend;
use crate::input::InputError;
use crate::rng::RandomSource;
use crate::rules::{BOT_CHALLENGE_PERCENT, MAX_PLAY};

use super::{AgentKind, ChallengeCall, PlayerAgent, Turn};

/// Fixed odds a bot plays by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct BotProfile {
    /// Chance, in percent, of questioning the previous play.
    pub challenge_percent: u32,
    /// Upper bound of the uniformly drawn play size.
    pub max_cards: usize,
}

impl Default for BotProfile {
    fn default() -> Self {
        Self { challenge_percent: BOT_CHALLENGE_PERCENT, max_cards: MAX_PLAY }
    }
}

/// A bot that plays blind: a random number of cards off the end of its hand,
/// and questions at a fixed rate.
#[derive(Debug, Clone)]
pub struct BotAgent {
    profile: BotProfile,
}

impl BotAgent {
    pub fn new(profile: BotProfile) -> Self {
        Self { profile }
    }
}

/// Indices of the last `n` cards of a hand of `len`, last card first.
fn from_the_end(len: usize, n: usize) -> Vec<usize> {
    (0..n.min(len)).map(|i| len - 1 - i).collect()
}

impl PlayerAgent for BotAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Bot
    }

    fn choose_play(
        &mut self,
        turn: &Turn<'_>,
        rng: &mut dyn RandomSource,
        _frontend: &mut dyn Frontend,
    ) -> Result<Vec<usize>, InputError> {
        // Size is drawn over the full range first; a short hand only caps it.
        let n = rng.below(self.profile.max_cards.max(1) as u32) as usize + 1;
        Ok(from_the_end(turn.hand.len(), n))
    }

    fn decide_challenge(
        &mut self,
        _call: &ChallengeCall<'_>,
        rng: &mut dyn RandomSource,
        _frontend: &mut dyn Frontend,
    ) -> Result<bool, InputError> {
        Ok(rng.percent(self.profile.challenge_percent))
    }
}
