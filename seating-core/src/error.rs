//! Error types for seating, movement and seeding operations.

use crate::{Direction, PairId};
use thiserror::Error;

/// Errors reported by the seating engine.
///
/// Every variant describes a caller contract that was not met; nothing here
/// is retryable and nothing is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    /// Movement scheme name not recognised
    #[error("unknown movement scheme '{0}' (expected Mitchell or Howell)")]
    UnknownScheme(String),

    /// No fixed seeding order exists for this section size
    #[error("no seeding order for {tps} tables per section (supported: 1-15)")]
    UnsupportedSectionSize { tps: usize },

    /// A section holds neither `tps` nor `tps + 1` tables
    #[error("section {section} has {size} tables, expected {tps} or {}", .tps + 1)]
    MalformedField {
        section: usize,
        size: usize,
        tps: usize,
    },

    /// A session needs at least one table
    #[error("a session needs at least one table")]
    EmptySession,

    /// A seating refers to a pair beyond the movement's pair count
    #[error("pair {pair} is outside 1..={pair_count}")]
    PairOutOfRange { pair: PairId, pair_count: usize },

    /// An itinerary entry was never written by the seating
    #[error("pair {pair} has no placement in round {round}")]
    UnassignedPlacement { pair: PairId, round: usize },

    /// Reverse lookup found nobody at the requested seat
    #[error("no pair sits {direction} at table {table} in round {round}")]
    PairNotFound {
        round: usize,
        table: u32,
        direction: Direction,
    },

    /// A round does not seat every pair exactly once
    #[error("round {round} does not seat pair {pair} exactly once")]
    IncompleteRound { round: usize, pair: PairId },

    /// Seating and section disagree on the number of tables
    #[error("seating has {tables} tables but the section has {section_tables}")]
    SectionMismatch { tables: usize, section_tables: usize },

    /// A session-wide identifier slot is still unset
    #[error("pair {pair} has no session-wide id")]
    UnseededPair { pair: PairId },

    /// The same session-wide identifier was issued twice
    #[error("session-wide id {iid} is assigned more than once")]
    DuplicatePair { iid: PairId },

    /// There is no round after the requested one to move to
    #[error("round {round} has no next round (seating has {round_count} rounds)")]
    NoNextRound { round: usize, round_count: usize },

    /// Seeding would overwrite a session-wide id that is already set
    #[error("table {table_id} already has session-wide ids")]
    AlreadySeeded { table_id: String },
}

/// Result type for seating operations
pub type Result<T> = std::result::Result<T, SeatingError>;
