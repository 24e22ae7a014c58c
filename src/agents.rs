//! Agents: who decides for each seat.
//!
//! A [`PlayerAgent`] picks the cards for a hidden play and decides whether to
//! question the previous player. The human seat forwards both questions to the
//! [`Frontend`]; bots answer from the shared [`RandomSource`]. [`AgentTable`]
//! maps seats to agents so the game loop stays agnostic of who is playing.

use crate::cards::Card;
use crate::frontend::Frontend;
use crate::input::InputError;
use crate::player::{Player, PlayerId};
use crate::rng::RandomSource;
use crate::rules::PLAYER_COUNT;
use core::fmt;

/// Kinds of agents attached to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Bot,
}

/// What an agent sees when it is its turn to play.
#[derive(Debug, Clone, Copy)]
pub struct Turn<'a> {
    pub seat: PlayerId,
    pub hand: &'a [Card],
    pub focus: Card,
    /// Largest play a human may pick this turn: the play limit capped by hand size.
    pub max_cards: usize,
}

/// What an agent sees when deciding whether to question a play.
#[derive(Debug, Clone, Copy)]
pub struct ChallengeCall<'a> {
    pub seat: PlayerId,
    pub accused: &'a Player,
    pub cards_played: usize,
    pub focus: Card,
}

pub trait PlayerAgent {
    /// The kind of this agent (human, bot, etc.).
    fn kind(&self) -> AgentKind;

    /// Choose 0-based indices into `turn.hand`, in play order.
    fn choose_play(
        &mut self,
        turn: &Turn<'_>,
        rng: &mut dyn RandomSource,
        frontend: &mut dyn Frontend,
    ) -> Result<Vec<usize>, InputError>;

    /// Whether to question the play described by `call`.
    fn decide_challenge(
        &mut self,
        call: &ChallengeCall<'_>,
        rng: &mut dyn RandomSource,
        frontend: &mut dyn Frontend,
    ) -> Result<bool, InputError>;
}

mod bots;

pub use bots::{BotAgent, BotProfile};

/// The human seat: every decision is asked through the front end.
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanAgent;

impl HumanAgent {
    pub fn new() -> Self {
        Self
    }
}

impl PlayerAgent for HumanAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }

    fn choose_play(
        &mut self,
        turn: &Turn<'_>,
        _rng: &mut dyn RandomSource,
        frontend: &mut dyn Frontend,
    ) -> Result<Vec<usize>, InputError> {
        frontend.ask_play(turn.seat, turn.hand, turn.max_cards)
    }

    fn decide_challenge(
        &mut self,
        call: &ChallengeCall<'_>,
        _rng: &mut dyn RandomSource,
        frontend: &mut dyn Frontend,
    ) -> Result<bool, InputError> {
        frontend.ask_challenge(call.seat, call.accused, call.cards_played)
    }
}

/// One agent per seat, in seat order.
pub struct AgentTable {
    seats: Vec<Box<dyn PlayerAgent>>,
}

impl fmt::Debug for AgentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: String = self
            .seats
            .iter()
            .map(|a| if matches!(a.kind(), AgentKind::Human) { 'H' } else { 'B' })
            .collect();
        write!(f, "AgentTable({flags})")
    }
}

impl AgentTable {
    /// Seat 0 is the human; the other seats are bots.
    pub fn standard() -> Self {
        let mut seats: Vec<Box<dyn PlayerAgent>> = Vec::with_capacity(PLAYER_COUNT);
        seats.push(Box::new(HumanAgent::new()));
        for _ in 1..PLAYER_COUNT {
            seats.push(Box::new(BotAgent::new(BotProfile::default())));
        }
        Self { seats }
    }

    /// Every seat is a bot.
    pub fn all_bots() -> Self {
        let seats = (0..PLAYER_COUNT)
            .map(|_| Box::new(BotAgent::new(BotProfile::default())) as Box<dyn PlayerAgent>)
            .collect();
        Self { seats }
    }

    /// Replace the agent at `seat`; seats outside the table are ignored.
    pub fn set_agent(&mut self, seat: usize, agent: Box<dyn PlayerAgent>) {
        if let Some(slot) = self.seats.get_mut(seat) {
            *slot = agent;
        }
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Return the kind of agent at a seat, if any.
    pub fn agent_kind(&self, seat: usize) -> Option<AgentKind> {
        self.seats.get(seat).map(|a| a.kind())
    }

    pub fn kinds(&self) -> Vec<AgentKind> {
        self.seats.iter().map(|a| a.kind()).collect()
    }

    pub(crate) fn agent_mut(&mut self, seat: PlayerId) -> Option<&mut (dyn PlayerAgent + 'static)> {
        self.seats.get_mut(seat.index()).map(|a| a.as_mut())
    }
}

impl Default for AgentTable {
    fn default() -> Self {
        Self::standard()
    }
}
