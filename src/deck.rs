use crate::cards::Card;
use crate::rng::RandomSource;
use crate::rules::{MAGIC_COPIES, SUIT_COPIES};

/// The 20-card draw pile: six each of Sun, Star and Moon plus two Magic.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full, unshuffled deck.
    ///
    /// ```
    /// use bluff_bomb::cards::Card;
    /// use bluff_bomb::deck::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 20);
    /// assert_eq!(deck.count(Card::Magic), 2);
    /// ```
    pub fn new() -> Self {
        let mut deck = Self { cards: Vec::with_capacity(Self::full_size()) };
        deck.refill();
        deck
    }

    pub const fn full_size() -> usize {
        SUIT_COPIES * Card::FOCUS.len() + MAGIC_COPIES
    }

    fn refill(&mut self) {
        self.cards.clear();
        for &c in &Card::FOCUS {
            self.cards.extend(std::iter::repeat(c).take(SUIT_COPIES));
        }
        self.cards.extend(std::iter::repeat(Card::Magic).take(MAGIC_COPIES));
    }

    /// Restore the full multiset and shuffle it.
    pub fn reset(&mut self, rng: &mut dyn RandomSource) {
        self.refill();
        rng.shuffle(&mut self.cards);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards; returns fewer when the deck runs out.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.draw()).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
