mod direction;
mod error;
mod field;
mod movement;
mod seating;
mod snake;

pub use direction::Direction;
pub use error::{Result, SeatingError};
pub use field::{
    check_field, init_field, init_section, section_letter, validate, Field, Section, Session,
    Specs, TableSpec, MAX_SECTION_TABLES,
};
pub use movement::{
    derive_movement, find_pair, moves_after, Itinerary, MoveSeat, MoveTable, MoveTables, Movement,
    Placement,
};
pub use seating::{
    build_seating, initial_seating, next_round, Matchup, Matchups, PairId, Scheme, Seating,
};
pub use snake::{check_seeding, seeding_order, snake, snake_with_order, SEEDING_ORDER};
