//! Per-pair itineraries derived from a seating.

use crate::error::{Result, SeatingError};
use crate::seating::{PairId, Seating};
use crate::Direction;
use log::debug;
use serde::{Deserialize, Serialize};

/// Where one pair sits in one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Placement {
    /// Table number, 1-based (0 only while unassigned)
    pub table: u32,
    #[serde(rename = "ew")]
    pub direction: Direction,
}

impl Placement {
    pub fn new(table: u32, direction: Direction) -> Self {
        Placement { table, direction }
    }
}

/// One pair's placements, one per round
pub type Itinerary = Vec<Placement>;

/// Itineraries of every pair, indexed by pair id minus one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Movement {
    itineraries: Vec<Itinerary>,
}

impl Movement {
    pub fn itineraries(&self) -> &[Itinerary] {
        &self.itineraries
    }

    /// Itinerary of a pair (1-based id)
    pub fn itinerary(&self, pair: PairId) -> Option<&[Placement]> {
        let index = (pair as usize).checked_sub(1)?;
        self.itineraries.get(index).map(Vec::as_slice)
    }

    pub fn pair_count(&self) -> usize {
        self.itineraries.len()
    }

    pub fn round_count(&self) -> usize {
        self.itineraries.first().map_or(0, Vec::len)
    }

    /// Which pair sits at `table` in `direction` during `round`.
    pub fn find_pair(&self, round: usize, table: u32, direction: Direction) -> Result<PairId> {
        find_pair(self, round, table, direction)
    }
}

/// Turn a seating into per-pair itineraries.
///
/// Every entry must be written by exactly the seating's matchups: a pair id
/// beyond `pair_count` or an entry left unwritten is an error.
pub fn derive_movement(seating: &Seating, pair_count: usize) -> Result<Movement> {
    let round_count = seating.round_count();
    let mut itineraries = vec![vec![Placement::default(); round_count]; pair_count];

    for (round, matchups) in seating.rounds().iter().enumerate() {
        for matchup in matchups {
            for direction in Direction::ALL {
                let pair = matchup.pair(direction);
                let itinerary = (pair as usize)
                    .checked_sub(1)
                    .and_then(|index| itineraries.get_mut(index))
                    .ok_or(SeatingError::PairOutOfRange { pair, pair_count })?;
                itinerary[round] = Placement::new(matchup.table, direction);
            }
        }
    }

    for (index, itinerary) in itineraries.iter().enumerate() {
        if let Some(round) = itinerary.iter().position(|pl| pl.table == 0) {
            return Err(SeatingError::UnassignedPlacement {
                pair: index as PairId + 1,
                round,
            });
        }
    }

    debug!(
        "derived movement: {} pairs, {} rounds",
        pair_count, round_count
    );
    Ok(Movement { itineraries })
}

/// Reverse lookup: the pair whose placement in `round` is `{table, direction}`.
pub fn find_pair(
    movement: &Movement,
    round: usize,
    table: u32,
    direction: Direction,
) -> Result<PairId> {
    let wanted = Placement::new(table, direction);
    movement
        .itineraries
        .iter()
        .position(|itinerary| itinerary.get(round) == Some(&wanted))
        .map(|index| index as PairId + 1)
        .ok_or(SeatingError::PairNotFound {
            round,
            table,
            direction,
        })
}

/// Where the pair in one seat goes when the round ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSeat {
    pub pair: PairId,
    /// Seat in the next round
    pub to: Placement,
}

/// End-of-round moves for one table, `[ns, ew]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTable {
    #[serde(rename = "no")]
    pub table: u32,
    pub seats: [MoveSeat; 2],
}

impl MoveTable {
    pub fn seat(&self, direction: Direction) -> &MoveSeat {
        &self.seats[direction.index()]
    }
}

/// Moves of every table, in seating order
pub type MoveTables = Vec<MoveTable>;

/// Where each table's NS and EW pairs sit once `round` (0-based) is over.
pub fn moves_after(seating: &Seating, movement: &Movement, round: usize) -> Result<MoveTables> {
    let round_count = seating.round_count();
    let matchups = match (seating.round(round), seating.round(round + 1)) {
        (Some(matchups), Some(_)) => matchups,
        _ => return Err(SeatingError::NoNextRound { round, round_count }),
    };

    let seat = |pair: PairId| -> Result<MoveSeat> {
        movement
            .itinerary(pair)
            .and_then(|itinerary| itinerary.get(round + 1))
            .map(|&to| MoveSeat { pair, to })
            .ok_or(SeatingError::PairOutOfRange {
                pair,
                pair_count: movement.pair_count(),
            })
    };

    matchups
        .iter()
        .map(|matchup| {
            Ok(MoveTable {
                table: matchup.table,
                seats: [seat(matchup.ns)?, seat(matchup.ew)?],
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seating::{build_seating, Matchup, Scheme};

    #[test]
    fn test_mitchell_itineraries() {
        let seating = build_seating(3, 3, Scheme::Mitchell);
        let movement = derive_movement(&seating, 6).unwrap();

        assert_eq!(movement.pair_count(), 6);
        assert_eq!(movement.round_count(), 3);

        // NS pair 2 stays at table 1
        let ns: Vec<u32> = movement.itinerary(2).unwrap().iter().map(|p| p.table).collect();
        assert_eq!(ns, vec![1, 1, 1]);

        // EW pair 1 moves up one table per round
        assert_eq!(
            movement.itinerary(1).unwrap(),
            &[
                Placement::new(1, Direction::EastWest),
                Placement::new(2, Direction::EastWest),
                Placement::new(3, Direction::EastWest),
            ]
        );
    }

    #[test]
    fn test_howell_pairs_change_direction() {
        let seating = build_seating(3, 2, Scheme::Howell);
        let movement = derive_movement(&seating, 6).unwrap();
        // pair 2 starts NS at table 1, then sits EW at table 1
        assert_eq!(
            movement.itinerary(2).unwrap(),
            &[
                Placement::new(1, Direction::NorthSouth),
                Placement::new(1, Direction::EastWest),
            ]
        );
    }

    #[test]
    fn test_find_pair() {
        let seating = build_seating(4, 3, Scheme::Mitchell);
        let movement = derive_movement(&seating, 8).unwrap();

        assert_eq!(movement.find_pair(1, 1, Direction::EastWest), Ok(7));
        assert_eq!(find_pair(&movement, 2, 4, Direction::NorthSouth), Ok(8));
        assert_eq!(find_pair(&movement, 0, 3, Direction::EastWest), Ok(5));
    }

    #[test]
    fn test_find_pair_miss() {
        let seating = build_seating(4, 3, Scheme::Mitchell);
        let movement = derive_movement(&seating, 8).unwrap();

        assert_eq!(
            find_pair(&movement, 3, 1, Direction::NorthSouth),
            Err(SeatingError::PairNotFound {
                round: 3,
                table: 1,
                direction: Direction::NorthSouth
            })
        );
        assert!(find_pair(&movement, 0, 5, Direction::EastWest).is_err());
        assert!(find_pair(&movement, 0, 0, Direction::NorthSouth).is_err());
    }

    #[test]
    fn test_pair_out_of_range() {
        let seating = build_seating(4, 2, Scheme::Mitchell);
        assert_eq!(
            derive_movement(&seating, 6),
            Err(SeatingError::PairOutOfRange {
                pair: 8,
                pair_count: 6
            })
        );

        let zero = Seating::from_rounds(vec![vec![Matchup::new(1, 0, 1)]]);
        assert_eq!(
            derive_movement(&zero, 2),
            Err(SeatingError::PairOutOfRange {
                pair: 0,
                pair_count: 2
            })
        );
    }

    #[test]
    fn test_unassigned_placement() {
        let seating = build_seating(2, 2, Scheme::Howell);
        assert_eq!(
            derive_movement(&seating, 6),
            Err(SeatingError::UnassignedPlacement { pair: 5, round: 0 })
        );
    }

    #[test]
    fn test_mitchell_moves() {
        let seating = build_seating(3, 3, Scheme::Mitchell);
        let movement = derive_movement(&seating, 6).unwrap();
        let moves = moves_after(&seating, &movement, 0).unwrap();

        assert_eq!(moves.len(), 3);
        assert_eq!(
            moves[0].seat(Direction::NorthSouth),
            &MoveSeat {
                pair: 2,
                to: Placement::new(1, Direction::NorthSouth)
            }
        );
        assert_eq!(
            moves[0].seat(Direction::EastWest),
            &MoveSeat {
                pair: 1,
                to: Placement::new(2, Direction::EastWest)
            }
        );
        // EW at the last table wraps to the first
        assert_eq!(moves[2].seats[1].to, Placement::new(1, Direction::EastWest));
    }

    #[test]
    fn test_howell_moves() {
        let seating = build_seating(3, 2, Scheme::Howell);
        let movement = derive_movement(&seating, 6).unwrap();
        let moves = moves_after(&seating, &movement, 0).unwrap();

        let to: Vec<(PairId, u32, Direction)> = moves
            .iter()
            .flat_map(|mt| mt.seats.iter())
            .map(|ms| (ms.pair, ms.to.table, ms.to.direction))
            .collect();
        assert_eq!(
            to,
            vec![
                (2, 1, Direction::EastWest),
                (1, 2, Direction::EastWest),
                (4, 1, Direction::NorthSouth),
                (3, 3, Direction::EastWest),
                (6, 3, Direction::NorthSouth),
                (5, 2, Direction::NorthSouth),
            ]
        );
    }

    #[test]
    fn test_moves_follow_next_round() {
        for scheme in Scheme::ALL {
            let seating = build_seating(6, 5, scheme);
            let movement = derive_movement(&seating, 12).unwrap();
            for round in 0..4 {
                for mt in moves_after(&seating, &movement, round).unwrap() {
                    for ms in mt.seats {
                        let next = &seating.round(round + 1).unwrap()[ms.to.table as usize - 1];
                        assert_eq!(next.pair(ms.to.direction), ms.pair);
                    }
                }
            }
        }
    }

    #[test]
    fn test_no_moves_after_last_round() {
        let seating = build_seating(3, 2, Scheme::Mitchell);
        let movement = derive_movement(&seating, 6).unwrap();
        assert_eq!(
            moves_after(&seating, &movement, 1),
            Err(SeatingError::NoNextRound {
                round: 1,
                round_count: 2
            })
        );
        assert!(moves_after(&seating, &movement, 7).is_err());
        assert!(moves_after(&Seating::default(), &Movement::default(), 0).is_err());
    }

    #[test]
    fn test_moves_need_matching_movement() {
        let seating = build_seating(3, 2, Scheme::Mitchell);
        let short = derive_movement(&build_seating(2, 2, Scheme::Mitchell), 4).unwrap();
        assert_eq!(
            moves_after(&seating, &short, 0),
            Err(SeatingError::PairOutOfRange {
                pair: 6,
                pair_count: 4
            })
        );
    }

    #[test]
    fn test_empty_seating() {
        let movement = derive_movement(&Seating::default(), 0).unwrap();
        assert_eq!(movement.pair_count(), 0);
        assert_eq!(movement.round_count(), 0);
        assert!(movement.itinerary(1).is_none());
        assert!(movement.itinerary(0).is_none());
    }
}
