use seating_core::{Matchup, Movement, Section, Seating};
use thiserror::Error;

/// Error type for reading seating listings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("seating listing error on line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

/// Separator printed after each round of a seating listing
pub const ROUND_SEPARATOR: &str = "=====";

/// Format a seating as a listing, one `table:[ns][ew]` row per table and
/// `=====` after each round.
///
/// Example output (two tables, one round):
/// ```text
/// 1:[2][1]
/// 2:[4][3]
/// =====
/// ```
pub fn format_seating(seating: &Seating) -> String {
    let mut result = String::new();
    for round in seating.rounds() {
        for matchup in round {
            result.push_str(&format!(
                "{}:[{}][{}]\n",
                matchup.table, matchup.ns, matchup.ew
            ));
        }
        result.push_str(ROUND_SEPARATOR);
        result.push('\n');
    }
    result
}

/// Like [`format_seating`], but with the session-wide ids of each matchup
/// instead of the section-local pair numbers.
pub fn format_seating_iids(seating: &Seating) -> String {
    let mut result = String::new();
    for round in seating.rounds() {
        for matchup in round {
            result.push_str(&format!(
                "{}:[{}][{}]\n",
                matchup.table, matchup.iids[0], matchup.iids[1]
            ));
        }
        result.push_str(ROUND_SEPARATOR);
        result.push('\n');
    }
    result
}

/// Read a listing written by [`format_seating`].
pub fn parse_seating(input: &str) -> Result<Seating, ParseError> {
    let mut rounds = Vec::new();
    let mut current = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == ROUND_SEPARATOR {
            rounds.push(std::mem::take(&mut current));
            continue;
        }
        current.push(parse_row(line).map_err(|message| ParseError {
            line: index + 1,
            message,
        })?);
    }

    if !current.is_empty() {
        return Err(ParseError {
            line: input.lines().count(),
            message: format!("missing '{}' after last round", ROUND_SEPARATOR),
        });
    }
    Ok(Seating::from_rounds(rounds))
}

// "table:[ns][ew]"
fn parse_row(line: &str) -> Result<Matchup, String> {
    let (table, pairs) = line
        .split_once(':')
        .ok_or_else(|| format!("expected table:[ns][ew], got '{}'", line))?;
    let pairs = pairs
        .strip_prefix('[')
        .and_then(|p| p.strip_suffix(']'))
        .ok_or_else(|| format!("expected [ns][ew], got '{}'", pairs))?;
    let (ns, ew) = pairs
        .split_once("][")
        .ok_or_else(|| format!("expected [ns][ew], got '[{}]'", pairs))?;

    let number = |s: &str| {
        s.trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid number '{}'", s))
    };
    Ok(Matchup::new(number(table)?, number(ns)?, number(ew)?))
}

/// Format a movement, one row per pair: `pair:[table:ew]...` with `ew`
/// printed as `true`/`false`.
///
/// Example output:
/// ```text
/// 1:[1:true][2:true]
/// 2:[1:false][1:false]
/// ```
pub fn format_movement(movement: &Movement) -> String {
    let mut result = String::new();
    for (index, itinerary) in movement.itineraries().iter().enumerate() {
        result.push_str(&format!("{}:", index + 1));
        for placement in itinerary {
            result.push_str(&format!(
                "[{}:{}]",
                placement.table,
                placement.direction.is_ew()
            ));
        }
        result.push('\n');
    }
    result
}

/// Format the session-wide ids of a field, one `section:table:[ns][ew]` row
/// per table (section index 0-based, table number 1-based).
pub fn format_seeding(field: &[Section]) -> String {
    let mut result = String::new();
    for section in field {
        for table in &section.tables {
            result.push_str(&format!(
                "{}:{}:[{}][{}]\n",
                section.index, table.table_no, table.iids[0], table.iids[1]
            ));
        }
    }
    result
}
