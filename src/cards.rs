use std::fmt;
use std::str::FromStr;

/// The four card faces. `Magic` is the wildcard and never a focus card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Card {
    Sun,
    Star,
    Moon,
    Magic,
}

impl Card {
    pub const ALL: [Card; 4] = [Card::Sun, Card::Star, Card::Moon, Card::Magic];

    /// Cards that can be announced as a round's focus.
    pub const FOCUS: [Card; 3] = [Card::Sun, Card::Star, Card::Moon];

    pub const fn name(self) -> &'static str {
        match self {
            Card::Sun => "Sun",
            Card::Star => "Star",
            Card::Moon => "Moon",
            Card::Magic => "Magic",
        }
    }

    pub const fn is_wild(self) -> bool {
        matches!(self, Card::Magic)
    }

    /// Whether this card may legitimately be played against `focus`.
    ///
    /// ```
    /// use bluff_bomb::cards::Card;
    ///
    /// assert!(Card::Moon.satisfies(Card::Moon));
    /// assert!(Card::Magic.satisfies(Card::Sun));
    /// assert!(!Card::Star.satisfies(Card::Sun));
    /// ```
    pub fn satisfies(self, focus: Card) -> bool {
        self == focus || self.is_wild()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sun" => Ok(Card::Sun),
            "star" => Ok(Card::Star),
            "moon" => Ok(Card::Moon),
            "magic" => Ok(Card::Magic),
            _ => Err(CardParseError::Invalid(s.to_string())),
        }
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use bluff_bomb::cards::{parse_cards, Card};
///
/// let cards = parse_cards("Sun, magic moon").unwrap();
/// assert_eq!(cards, vec![Card::Sun, Card::Magic, Card::Moon]);
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

/// Render cards the way the table shows them: space separated names.
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(|c| c.name()).collect::<Vec<_>>().join(" ")
}
