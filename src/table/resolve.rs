use crate::options::AutoPolicy;
use crate::result::{RoundOutcome, RoundSummary};
use crate::seat::{self, AutoAction, Controller};

use super::{RoundPhase, Table};

impl Table {
    /// Plays every automated seat once, in seating order, appending each
    /// decision to the status line.
    ///
    /// The decision is a pure function of the seat's score at its turn. An
    /// empty deck degrades to no draw; the hand is left as it stands.
    pub(super) fn run_automated_pass(&mut self) {
        self.status = "AI is playing...".to_owned();

        for index in 0..self.seats.len() {
            if self.seats[index].controller() != Controller::Automated {
                continue;
            }

            let action = seat::decide(self.seats[index].value());
            if action == AutoAction::Hit {
                self.draw_for_seat(index);
            }

            let verb = match action {
                AutoAction::Hit => "hits",
                AutoAction::Stand => "stands",
            };
            let line = format!(" {} {verb}.", self.seats[index].name());
            self.status.push_str(&line);
        }
    }

    /// Draws for one automated seat according to the table's policy.
    fn draw_for_seat(&mut self, index: usize) {
        match self.options.auto_policy {
            AutoPolicy::SingleDraw => {
                if let Some(card) = self.deck.draw() {
                    self.seats[index].hand_mut().add_card(card);
                }
            }
            AutoPolicy::DrawToStand => {
                while seat::decide(self.seats[index].value()) == AutoAction::Hit {
                    let Some(card) = self.deck.draw() else { break };
                    self.seats[index].hand_mut().add_card(card);
                }
            }
        }
    }

    /// Reveals the dealer hole card, compares the human seat against the
    /// dealer, and resolves the round.
    ///
    /// The dealer never draws; its total is the score of the two dealt
    /// cards, reconciled like any other hand.
    pub(super) fn resolve_against_dealer(&mut self) -> RoundSummary {
        self.dealer.reveal_hole();

        let human_value = self.seats[self.human_seat].value();
        let dealer_value = self.dealer.value();

        let (outcome, message) = if dealer_value > 21 || human_value > dealer_value {
            (RoundOutcome::Win, "You win!")
        } else if human_value == dealer_value {
            (RoundOutcome::Push, "It's a tie!")
        } else {
            (RoundOutcome::Lose, "Dealer wins!")
        };

        let summary = RoundSummary {
            outcome,
            human_value,
            dealer_value,
            message: message.to_owned(),
        };
        self.summary = Some(summary.clone());
        self.phase = RoundPhase::Resolved;
        summary
    }

    /// Resolves an over-21 human hand. The automated pass is skipped.
    pub(super) fn resolve_human_bust(&mut self) {
        self.dealer.reveal_hole();

        self.summary = Some(RoundSummary {
            outcome: RoundOutcome::Lose,
            human_value: self.seats[self.human_seat].value(),
            dealer_value: self.dealer.value(),
            message: "You bust! Dealer wins.".to_owned(),
        });
        self.phase = RoundPhase::Resolved;
    }
}
