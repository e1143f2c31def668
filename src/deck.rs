//! Deck construction and dealing.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered deck of cards. The top of the deck is the end of the sequence.
///
/// A deck owns its cards exclusively; [`Deck::draw`] moves one card out at a
/// time and the deck only ever shrinks after construction.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Undrawn cards, top last.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full 52-card deck, uniformly shuffled with `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck from an explicit card sequence.
    ///
    /// The last card of `cards` is the top of the deck and is drawn first.
    /// Useful for rigged deals in tests and demos.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the top card, or `None` when the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
