use crate::card::Card;
use crate::result::RoundSummary;

use super::{RoundPhase, Table};

impl Table {
    /// Human action: hit (draw a card).
    ///
    /// Returns the drawn card. Returns `None`, leaving the table unchanged,
    /// when it is not the human turn or the deck is out of cards. Drawing
    /// over 21 resolves the round immediately as a bust; the automated pass
    /// is skipped.
    pub fn hit(&mut self) -> Option<Card> {
        if self.phase != RoundPhase::HumanTurn {
            return None;
        }

        let card = self.deck.draw()?;
        self.seats[self.human_seat].hand_mut().add_card(card);

        if self.seats[self.human_seat].value() > 21 {
            self.resolve_human_bust();
        }

        Some(card)
    }

    /// Human action: stand (keep the current hand).
    ///
    /// Plays out every automated seat once, reveals the dealer hole card,
    /// and resolves the round against the dealer. Returns the resolution,
    /// or `None`, leaving the table unchanged, when it is not the human
    /// turn.
    pub fn stand(&mut self) -> Option<RoundSummary> {
        if self.phase != RoundPhase::HumanTurn {
            return None;
        }

        self.phase = RoundPhase::AutoResolution;
        self.run_automated_pass();

        Some(self.resolve_against_dealer())
    }
}
