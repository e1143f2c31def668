//! Round resolution types.

/// Outcome of a resolved round, from the human seat's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The human seat beats the dealer, or the dealer busts.
    Win,
    /// The dealer beats the human seat, including a human bust.
    Lose,
    /// Equal totals.
    Push,
}

/// Result of a resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// The outcome category.
    pub outcome: RoundOutcome,
    /// The human seat's final score.
    pub human_value: u8,
    /// The dealer's final score.
    pub dealer_value: u8,
    /// Display text for the outcome.
    pub message: String,
}
