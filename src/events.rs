use crate::cards::Card;
use crate::player::PlayerId;

/// Everything observable that happens at the table, in order.
///
/// Hidden plays only ever carry a card count; contents appear in
/// [`GameEvent::Revealed`] once a challenge opens them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameEvent {
    /// Fresh hands were dealt to every alive player.
    HandsDealt,
    FirstPlayer { player: PlayerId },
    RoundStarted { round: u32, focus: Card },
    Played { player: PlayerId, count: usize },
    ChallengeDeclined { player: PlayerId },
    Challenged { challenger: PlayerId, accused: PlayerId, forced: bool },
    /// `cards` is `None` when no play was recorded for the accused.
    Revealed { player: PlayerId, cards: Option<Vec<Card>> },
    Verdict { challenger: PlayerId, accused: PlayerId, correct: bool },
    BombSurvived { player: PlayerId, survivals: u8 },
    BombExploded { player: PlayerId, certain: bool },
    RoundOver { round: u32 },
    Winner { player: Option<PlayerId> },
}

impl GameEvent {
    pub fn label(&self) -> &'static str {
        match self {
            GameEvent::HandsDealt => "Deal",
            GameEvent::FirstPlayer { .. } => "First",
            GameEvent::RoundStarted { .. } => "Round",
            GameEvent::Played { .. } => "Play",
            GameEvent::ChallengeDeclined { .. } => "Pass",
            GameEvent::Challenged { forced: true, .. } => "Forced question",
            GameEvent::Challenged { .. } => "Question",
            GameEvent::Revealed { .. } => "Reveal",
            GameEvent::Verdict { .. } => "Verdict",
            GameEvent::BombSurvived { .. } => "Survived",
            GameEvent::BombExploded { .. } => "Exploded",
            GameEvent::RoundOver { .. } => "Round over",
            GameEvent::Winner { .. } => "Winner",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameHistoryEntry {
    /// Round the event belongs to; 0 before the first focus is drawn.
    pub round: u32,
    pub event: GameEvent,
}
