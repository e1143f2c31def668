//! Round phase types.

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Hands are empty and the initial deal has not happened yet.
    Dealing,
    /// Awaiting the human seat's hit or stand.
    HumanTurn,
    /// Automated seats play out their pass.
    AutoResolution,
    /// The round is resolved; only [`reset`](crate::Table::reset) changes
    /// state from here.
    Resolved,
}
