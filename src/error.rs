//! Error types for table construction.

use thiserror::Error;

/// Errors that can occur when seating a roster.
///
/// Round commands themselves are total: outside their valid phase they are
/// ignored rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The roster has no seats.
    #[error("roster has no seats")]
    Empty,
    /// The roster has no human seat.
    #[error("roster has no human seat")]
    NoHumanSeat,
    /// The roster has more than one human seat.
    #[error("roster has more than one human seat")]
    MultipleHumanSeats,
    /// The roster and dealer cannot all be dealt two cards from one deck.
    #[error("roster is too large for a single deck")]
    TooManySeats,
}
