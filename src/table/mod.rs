//! Table orchestration and round flow.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::error::RosterError;
use crate::hand::DealerHand;
use crate::options::TableOptions;
use crate::result::RoundSummary;
use crate::seat::{Controller, Seat};

mod actions;
mod resolve;
pub mod state;

pub use state::RoundPhase;

/// Status line shown while the table waits on the human seat.
const PROMPT: &str = "Press 'H' to hit or 'S' to stand.";

/// A single blackjack table: one deck, a fixed roster of seats, and the
/// dealer.
///
/// The table runs one round at a time through a small state machine: deal,
/// the human seat's hit/stand turn, one pass over the automated seats, and
/// the comparison against the dealer. Commands received outside their valid
/// phase are ignored. [`Table::reset`] starts the next round with a fresh
/// deck and the same seats.
///
/// The table is a plain synchronous value; a display collaborator reads it
/// through the accessors between commands. No rendering surface is required.
pub struct Table {
    /// The undealt deck for the current round.
    deck: Deck,
    /// All seats, in turn order (which is also display order).
    seats: Vec<Seat>,
    /// The dealer's cards.
    dealer: DealerHand,
    /// Index of the unique human seat.
    human_seat: usize,
    /// Current round phase.
    phase: RoundPhase,
    /// Human-readable status line.
    status: String,
    /// Resolution of the current round, once resolved.
    summary: Option<RoundSummary>,
    /// Table configuration.
    options: TableOptions,
    /// Random number generator for deck shuffles.
    rng: ChaCha8Rng,
}

impl Table {
    /// Seats a roster and shuffles the first deck.
    ///
    /// The roster order is fixed for the lifetime of the table: it is the
    /// turn order of the automated pass and the display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is empty, has no human seat, has more
    /// than one human seat, or is too large for every seat and the dealer to
    /// receive two cards from a single deck.
    pub fn new(options: TableOptions, seats: Vec<Seat>, seed: u64) -> Result<Self, RosterError> {
        if seats.is_empty() {
            return Err(RosterError::Empty);
        }
        if (seats.len() + 1) * 2 > DECK_SIZE {
            return Err(RosterError::TooManySeats);
        }

        let mut humans = seats
            .iter()
            .enumerate()
            .filter(|(_, seat)| seat.controller() == Controller::Human);
        let human_seat = humans.next().map(|(index, _)| index).ok_or(RosterError::NoHumanSeat)?;
        if humans.next().is_some() {
            return Err(RosterError::MultipleHumanSeats);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Ok(Self {
            deck,
            seats,
            dealer: DealerHand::new(),
            human_seat,
            phase: RoundPhase::Dealing,
            status: PROMPT.to_owned(),
            summary: None,
            options,
            rng,
        })
    }

    /// Deals two cards to every seat and the dealer.
    ///
    /// Each pass gives one card to every seat in order and then one to the
    /// dealer. Transitions to the human turn. A no-op outside the dealing
    /// phase.
    pub fn deal(&mut self) {
        if self.phase != RoundPhase::Dealing {
            return;
        }

        for _ in 0..2 {
            for seat in &mut self.seats {
                if let Some(card) = self.deck.draw() {
                    seat.hand_mut().add_card(card);
                }
            }
            if let Some(card) = self.deck.draw() {
                self.dealer.add_card(card);
            }
        }

        self.phase = RoundPhase::HumanTurn;
    }

    /// Returns the table to the dealing phase for a new round.
    ///
    /// Shuffles a fresh deck, clears every hand (seats are kept, never
    /// recreated), re-hides the dealer hole card, and clears the previous
    /// resolution. The next round starts with [`Table::deal`].
    pub fn reset(&mut self) {
        self.deck = Deck::shuffled(&mut self.rng);
        for seat in &mut self.seats {
            seat.hand_mut().clear();
        }
        self.dealer.clear();
        self.phase = RoundPhase::Dealing;
        self.status = PROMPT.to_owned();
        self.summary = None;
    }

    /// Replaces the undealt deck.
    ///
    /// Useful for rigged deals in tests and demos.
    pub fn replace_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns whether the current round is resolved.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::Resolved
    }

    /// Returns all seats in turn order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Returns the human-controlled seat.
    #[must_use]
    pub fn human(&self) -> &Seat {
        &self.seats[self.human_seat]
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the current status line.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the resolution of the current round, once resolved.
    #[must_use]
    pub const fn summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }

    /// Returns the number of undrawn cards in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
