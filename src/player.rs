use crate::cards::Card;
use crate::rules::MAX_PLAY;
use std::fmt;

/// Stable seat handle assigned when the game is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub(crate) usize);

impl PlayerId {
    pub const fn new(seat: usize) -> Self {
        Self(seat)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayError {
    #[error("a play needs at least one card")]
    Empty,
    #[error("too many cards: max {max}, got {got}")]
    TooMany { max: usize, got: usize },
    #[error("index {index} out of range for a hand of {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("index {0} chosen twice")]
    Duplicate(usize),
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) alive: bool,
    pub(crate) hand: Vec<Card>,
    pub(crate) last_play: Option<Vec<Card>>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), alive: true, hand: Vec::new(), last_play: None }
    }

    /// Returns the player's stable handle
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Returns the cards currently in hand
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// The most recent hidden play this round; `None` when nothing was recorded.
    pub fn last_play(&self) -> Option<&[Card]> {
        self.last_play.as_deref()
    }

    /// Alive and holding at least one card.
    pub fn can_act(&self) -> bool {
        self.alive && !self.hand.is_empty()
    }

    pub fn set_hand(&mut self, cards: Vec<Card>) {
        self.hand = cards;
    }

    pub fn eliminate(&mut self) {
        self.alive = false;
    }

    pub fn clear_last_play(&mut self) {
        self.last_play = None;
    }

    /// Check a selection of 0-based hand indices without touching the hand.
    pub fn validate_picks(&self, picks: &[usize]) -> Result<(), PlayError> {
        if picks.is_empty() {
            return Err(PlayError::Empty);
        }
        if picks.len() > MAX_PLAY {
            return Err(PlayError::TooMany { max: MAX_PLAY, got: picks.len() });
        }
        for (n, &index) in picks.iter().enumerate() {
            if index >= self.hand.len() {
                return Err(PlayError::OutOfRange { index, len: self.hand.len() });
            }
            if picks[..n].contains(&index) {
                return Err(PlayError::Duplicate(index));
            }
        }
        Ok(())
    }

    /// Remove the picked cards and record them as this player's hidden play.
    ///
    /// The whole selection is validated first; on error the hand is unchanged.
    /// The returned cards are in selection order.
    ///
    /// ```
    /// use bluff_bomb::cards::Card;
    /// use bluff_bomb::player::{Player, PlayerId};
    ///
    /// let mut p = Player::new(PlayerId::new(0), "Human");
    /// p.set_hand(vec![Card::Sun, Card::Moon, Card::Star]);
    /// let played = p.play(&[2, 0]).unwrap();
    /// assert_eq!(played, vec![Card::Star, Card::Sun]);
    /// assert_eq!(p.hand(), &[Card::Moon]);
    /// assert_eq!(p.last_play(), Some(&[Card::Star, Card::Sun][..]));
    /// ```
    pub fn play(&mut self, picks: &[usize]) -> Result<Vec<Card>, PlayError> {
        self.validate_picks(picks)?;
        let played: Vec<Card> = picks.iter().map(|&i| self.hand[i]).collect();
        let mut order = picks.to_vec();
        order.sort_unstable_by(|a, b| b.cmp(a));
        for i in order {
            self.hand.remove(i);
        }
        self.last_play = Some(played.clone());
        Ok(played)
    }
}
