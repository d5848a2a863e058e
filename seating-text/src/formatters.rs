use seating_core::{Direction, MoveTable, PairId, Placement, Seating, Session};
use std::str::FromStr;

/// Print format for seatings and sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintFormat {
    /// Compact `table:[ns][ew]` / `pair:[table:ew]` listings (default)
    #[default]
    Listing,
    /// Guide cards: one block per table or per pair, for printing
    Guide,
    /// Session records as JSON
    Json,
}

impl FromStr for PrintFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "listing" => Ok(PrintFormat::Listing),
            "guide" => Ok(PrintFormat::Guide),
            "json" => Ok(PrintFormat::Json),
            _ => Err(format!("unknown format '{}' (listing, guide, json)", s)),
        }
    }
}

/// Format one pair's itinerary as a guide-card line.
///
/// Example output:
/// ```text
/// Pair   3:  R1 T2 EW  R2 T1 EW  R3 T2 EW
/// ```
pub fn format_itinerary(pair: PairId, itinerary: &[Placement]) -> String {
    let mut result = format!("Pair {:3}:", pair);
    for (round, placement) in itinerary.iter().enumerate() {
        result.push_str(&format!(
            "  R{} T{} {}",
            round + 1,
            placement.table,
            placement.direction
        ));
    }
    result.push('\n');
    result
}

/// Format the guide card for one table: who sits where in each round.
///
/// Example output:
/// ```text
/// Table 2
///   Round 1:  NS  4  v  EW  3
///   Round 2:  NS  4  v  EW  1
/// ```
///
/// A table the seating does not have yields just the heading.
pub fn format_table_guide(seating: &Seating, table: u32) -> String {
    let mut result = format!("Table {}\n", table);
    for (round, matchups) in seating.rounds().iter().enumerate() {
        if let Some(matchup) = matchups.iter().find(|m| m.table == table) {
            result.push_str(&format!(
                "  Round {}:  {} {:2}  v  {} {:2}\n",
                round + 1,
                Direction::NorthSouth,
                matchup.ns,
                Direction::EastWest,
                matchup.ew
            ));
        }
    }
    result
}

/// Format a seeded session: every section's tables with their local and
/// session-wide pair numbers. Unseeded slots show as `-`.
///
/// Example output:
/// ```text
/// Session S1: 2 tables, 4 pairs, 1 section
/// Section S1-A (2 tables)
///   S1-A-1      NS  2 =  1   EW  1 =  2
///   S1-A-2      NS  4 =  4   EW  3 =  3
/// ```
pub fn format_session(session: &Session) -> String {
    let sections = session.section_count();
    let mut result = format!(
        "Session {}: {} tables, {} pairs, {} section{}\n",
        session.id,
        session.table_count(),
        session.total,
        sections,
        if sections == 1 { "" } else { "s" }
    );

    for section in &session.field {
        result.push_str(&format!(
            "Section {} ({} tables)\n",
            section.section_id,
            section.size()
        ));
        for table in &section.tables {
            result.push_str(&format!(
                "  {:<10}  {} {:2} = {:>2}   {} {:2} = {:>2}\n",
                table.table_id,
                Direction::NorthSouth,
                table.ns_no,
                iid_label(table.iid(Direction::NorthSouth)),
                Direction::EastWest,
                table.ew_no,
                iid_label(table.iid(Direction::EastWest)),
            ));
        }
    }
    result
}

/// Format the moves at the end of `round` (0-based), one line per table.
///
/// Example output:
/// ```text
/// After round 1
///   Table 1:  NS  2 -> T1 NS   EW  1 -> T2 EW
/// ```
pub fn format_moves(round: usize, moves: &[MoveTable]) -> String {
    let mut result = format!("After round {}\n", round + 1);
    for mt in moves {
        let seats: Vec<String> = Direction::ALL
            .iter()
            .map(|&direction| {
                let seat = mt.seat(direction);
                format!(
                    "{} {:2} -> T{} {}",
                    direction, seat.pair, seat.to.table, seat.to.direction
                )
            })
            .collect();
        result.push_str(&format!("  Table {}:  {}\n", mt.table, seats.join("   ")));
    }
    result
}

fn iid_label(iid: PairId) -> String {
    if iid == 0 {
        "-".to_string()
    } else {
        iid.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seating_core::{build_seating, derive_movement, moves_after, Scheme, Specs};

    #[test]
    fn test_print_format_from_str() {
        assert_eq!("JSON".parse::<PrintFormat>(), Ok(PrintFormat::Json));
        assert_eq!("guide".parse::<PrintFormat>(), Ok(PrintFormat::Guide));
        assert!("pbn".parse::<PrintFormat>().is_err());
    }

    #[test]
    fn test_format_itinerary() {
        let seating = build_seating(3, 3, Scheme::Mitchell);
        let movement = derive_movement(&seating, 6).unwrap();
        assert_eq!(
            format_itinerary(1, movement.itinerary(1).unwrap()),
            "Pair   1:  R1 T1 EW  R2 T2 EW  R3 T3 EW\n"
        );
    }

    #[test]
    fn test_format_table_guide() {
        let seating = build_seating(2, 2, Scheme::Mitchell);
        assert_eq!(
            format_table_guide(&seating, 2),
            "Table 2\n  Round 1:  NS  4  v  EW  3\n  Round 2:  NS  4  v  EW  1\n"
        );
        assert_eq!(format_table_guide(&seating, 9), "Table 9\n");
    }

    #[test]
    fn test_format_moves() {
        let seating = build_seating(2, 2, Scheme::Mitchell);
        let movement = derive_movement(&seating, 4).unwrap();
        let moves = moves_after(&seating, &movement, 0).unwrap();
        assert_eq!(
            format_moves(0, &moves),
            "After round 1\n\
             \x20 Table 1:  NS  2 -> T1 NS   EW  1 -> T2 EW\n\
             \x20 Table 2:  NS  4 -> T2 NS   EW  3 -> T1 EW\n"
        );
    }

    #[test]
    fn test_format_session() {
        let mut session = Session::new("S1", &Specs::new(2).unwrap());
        let unseeded = format_session(&session);
        assert!(unseeded.contains("NS  2 =  -"));

        session.seed().unwrap();
        assert_eq!(
            format_session(&session),
            "Session S1: 2 tables, 4 pairs, 1 section\n\
             Section S1-A (2 tables)\n  \
             S1-A-1      NS  2 =  1   EW  1 =  2\n  \
             S1-A-2      NS  4 =  4   EW  3 =  3\n"
        );
    }
}
