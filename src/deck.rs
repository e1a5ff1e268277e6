use crate::MyRng;
use rand::seq::SliceRandom;

/// A card is identified by its face value.
pub type Card = u8;

/// Lowest card value in the official deck.
pub const MIN_CARD: Card = 2;
/// Highest card value in the official deck.
pub const MAX_CARD: Card = 99;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    exhausted: bool,
}

impl Deck {
    /// all cards from `min` to `max` (inclusive) in random order
    pub fn new(min: Card, max: Card, rng: &mut MyRng) -> Self {
        let mut cards: Vec<Card> = (min..=max).collect();
        cards.shuffle(rng);
        Self::from_cards(cards)
    }

    pub fn new_official(rng: &mut MyRng) -> Self {
        Self::new(MIN_CARD, MAX_CARD, rng)
    }

    /// keeps the given order, cards are drawn from the end
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            exhausted: cards.is_empty(),
            cards,
        }
    }

    /// draws up to `n` cards lazily
    /// every card yielded is removed from the deck
    pub fn draw(&mut self, n: usize) -> Draw<'_> {
        Draw {
            deck: self,
            left: n,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// true once a draw has run the deck dry, never reset
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// the cards still in the deck, the next card to be drawn is last
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }
}

/// Iterator returned by [`Deck::draw`].
#[derive(Debug)]
pub struct Draw<'a> {
    deck: &'a mut Deck,
    left: usize,
}

impl Iterator for Draw<'_> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.left == 0 {
            return None;
        }
        match self.deck.cards.pop() {
            Some(card) => {
                self.left -= 1;
                if self.deck.cards.is_empty() {
                    self.deck.exhausted = true;
                }
                Some(card)
            }
            None => {
                self.deck.exhausted = true;
                self.left = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.left.min(self.deck.cards.len());
        (n, Some(n))
    }
}
