//! A single-table blackjack round engine with scripted opponents.
//!
//! The crate provides a [`Table`] type that manages one full round: dealing,
//! the human seat's hit/stand turn, a pass over the automated seats, and the
//! comparison against the dealer. Rendering and input stay outside the
//! engine; a display collaborator reads the table state through its
//! accessors and drives it with [`Table::hit`], [`Table::stand`], and
//! [`Table::reset`].
//!
//! # Example
//!
//! ```
//! use twentyone::{Seat, Table, TableOptions};
//!
//! let seats = vec![
//!     Seat::human("You"),
//!     Seat::automated("AI Bot 1"),
//!     Seat::automated("AI Bot 2"),
//! ];
//! let mut table = Table::new(TableOptions::default(), seats, 42)?;
//! table.deal();
//! # Ok::<(), twentyone::RosterError>(())
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod seat;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::RosterError;
pub use hand::{DealerHand, Hand};
pub use options::{AutoPolicy, TableOptions};
pub use result::{RoundOutcome, RoundSummary};
pub use seat::{AutoAction, Controller, Seat};
pub use table::{RoundPhase, Table};
