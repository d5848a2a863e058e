mod formatters;
mod listing;

pub use formatters::{
    format_itinerary, format_moves, format_session, format_table_guide, PrintFormat,
};
pub use listing::{
    format_movement, format_seating, format_seating_iids, format_seeding, parse_seating,
    ParseError, ROUND_SEPARATOR,
};
