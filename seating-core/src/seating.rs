//! Round-by-round table assignments for Mitchell and Howell movements.
//!
//! Pairs are numbered so that table `i` (0-based) starts with pair `2i+2`
//! North-South and pair `2i+1` East-West. Every later round is derived from
//! its predecessor by the movement's rotation rule.

use crate::error::{Result, SeatingError};
use crate::field::Section;
use crate::Direction;
use log::{debug, trace};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A pair (partnership) number, 1-based
pub type PairId = u32;

/// Movement scheme used to rotate pairs between rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    /// NS pairs stay put, EW pairs move up one table each round
    #[default]
    Mitchell,
    /// One NS pair anchored at the last table, everybody else on one cycle
    Howell,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Mitchell, Scheme::Howell];

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Mitchell => "Mitchell",
            Scheme::Howell => "Howell",
        }
    }
}

impl FromStr for Scheme {
    type Err = SeatingError;

    /// Only the first letter counts, in either case ("h", "Howell", "HOW"...)
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().chars().next() {
            Some('h') | Some('H') => Ok(Scheme::Howell),
            Some('m') | Some('M') => Ok(Scheme::Mitchell),
            _ => Err(SeatingError::UnknownScheme(s.to_string())),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One table's occupants for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    /// Table number, 1-based, the same in every round
    #[serde(rename = "tableno")]
    pub table: u32,
    /// Pair seated North-South
    #[serde(rename = "nspr")]
    pub ns: PairId,
    /// Pair seated East-West
    #[serde(rename = "ewpr")]
    pub ew: PairId,
    /// Session-wide ids of the `[ns, ew]` pairs
    pub iids: [PairId; 2],
}

impl Matchup {
    /// Matchup whose session-wide ids are the local pair numbers
    pub fn new(table: u32, ns: PairId, ew: PairId) -> Self {
        Matchup {
            table,
            ns,
            ew,
            iids: [ns, ew],
        }
    }

    /// Local pair number seated in `direction`
    pub fn pair(&self, direction: Direction) -> PairId {
        match direction {
            Direction::NorthSouth => self.ns,
            Direction::EastWest => self.ew,
        }
    }

    /// Session-wide id of the pair seated in `direction`
    pub fn iid(&self, direction: Direction) -> PairId {
        self.iids[direction.index()]
    }
}

/// All tables of one round, indexed by table
pub type Matchups = Vec<Matchup>;

/// The complete round-by-round assignment for one section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seating {
    rounds: Vec<Matchups>,
}

impl Seating {
    /// Wrap rounds obtained elsewhere (e.g. loaded from a stored session)
    pub fn from_rounds(rounds: Vec<Matchups>) -> Self {
        Seating { rounds }
    }

    pub fn rounds(&self) -> &[Matchups] {
        &self.rounds
    }

    /// Matchups of one round (0-based)
    pub fn round(&self, round: usize) -> Option<&[Matchup]> {
        self.rounds.get(round).map(Vec::as_slice)
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn table_count(&self) -> usize {
        self.rounds.first().map_or(0, Vec::len)
    }

    /// Number of pairs seated each round (two per table)
    pub fn pair_count(&self) -> usize {
        2 * self.table_count()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Verify that every round seats each pair `1..=2T` exactly once.
    pub fn check_coverage(&self) -> Result<()> {
        for (round, matchups) in self.rounds.iter().enumerate() {
            let pair_count = 2 * matchups.len();
            let mut seen = vec![false; pair_count + 1];

            for matchup in matchups {
                for pair in [matchup.ns, matchup.ew] {
                    let slot = pair as usize;
                    if slot == 0 || slot > pair_count || seen[slot] {
                        return Err(SeatingError::IncompleteRound { round, pair });
                    }
                    seen[slot] = true;
                }
            }
        }
        Ok(())
    }

    /// Copy of this seating with session-wide ids taken from a seeded section.
    ///
    /// The section's table records say which session id each local pair
    /// number received; that mapping is applied to every round.
    pub fn with_session_ids(&self, section: &Section) -> Result<Seating> {
        if section.size() != self.table_count() {
            return Err(SeatingError::SectionMismatch {
                tables: self.table_count(),
                section_tables: section.size(),
            });
        }

        let mut iids: FxHashMap<PairId, PairId> = FxHashMap::default();
        for spec in &section.tables {
            iids.insert(spec.ns_no, spec.iid(Direction::NorthSouth));
            iids.insert(spec.ew_no, spec.iid(Direction::EastWest));
        }

        let mut rounds = self.rounds.clone();
        for matchup in rounds.iter_mut().flatten() {
            for direction in Direction::ALL {
                let pair = matchup.pair(direction);
                let iid = iids
                    .get(&pair)
                    .copied()
                    .filter(|&iid| iid != 0)
                    .ok_or(SeatingError::UnseededPair { pair })?;
                matchup.iids[direction.index()] = iid;
            }
        }

        Ok(Seating { rounds })
    }
}

/// First round: table `i` gets NS pair `2i+2` and EW pair `2i+1`.
pub fn initial_seating(table_count: usize) -> Matchups {
    (0..table_count)
        .map(|i| {
            let i = i as u32;
            Matchup::new(i + 1, 2 * i + 2, 2 * i + 1)
        })
        .collect()
}

/// Derive the next round from `prev` under `scheme`.
pub fn next_round(scheme: Scheme, prev: &[Matchup]) -> Matchups {
    if prev.is_empty() {
        return Vec::new();
    }
    match scheme {
        Scheme::Mitchell => mitchell_round(prev),
        Scheme::Howell => howell_round(prev),
    }
}

/// EW at table `t` comes from table `t-1`, wrapping at the first table.
fn mitchell_round(prev: &[Matchup]) -> Matchups {
    let tables = prev.len();
    (0..tables)
        .map(|t| {
            let from = (t + tables - 1) % tables;
            Matchup::new(prev[t].table, prev[t].ns, prev[from].ew)
        })
        .collect()
}

/// Every seat except the anchor (NS at the last table), in the order a pair
/// travels through them: up the EW line, then back down the NS line.
fn howell_ring(tables: usize) -> Vec<(usize, Direction)> {
    let last = tables - 1;
    (0..tables)
        .map(|t| (t, Direction::EastWest))
        .chain((0..last).rev().map(|t| (t, Direction::NorthSouth)))
        .collect()
}

fn howell_round(prev: &[Matchup]) -> Matchups {
    let mut seats: Vec<[PairId; 2]> = prev.iter().map(|m| [m.ns, m.ew]).collect();

    let ring = howell_ring(prev.len());
    for (k, &(table, direction)) in ring.iter().enumerate() {
        let (to_table, to_direction) = ring[(k + 1) % ring.len()];
        seats[to_table][to_direction.index()] = prev[table].pair(direction);
    }

    prev.iter()
        .zip(seats)
        .map(|(m, [ns, ew])| Matchup::new(m.table, ns, ew))
        .collect()
}

/// Build the full seating: round 0 from `initial_seating`, each later round
/// from its predecessor. Zero tables or zero rounds give an empty seating.
pub fn build_seating(table_count: usize, round_count: usize, scheme: Scheme) -> Seating {
    if table_count == 0 || round_count == 0 {
        return Seating::default();
    }

    let mut rounds = Vec::with_capacity(round_count);
    rounds.push(initial_seating(table_count));
    for round in 1..round_count {
        let next = next_round(scheme, &rounds[round - 1]);
        trace!("{} round {}: {:?}", scheme, round, next);
        rounds.push(next);
    }

    debug!(
        "built {} seating: {} tables, {} rounds",
        scheme, table_count, round_count
    );
    Seating { rounds }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::init_section;

    fn ns_ew(matchups: &[Matchup]) -> Vec<(PairId, PairId)> {
        matchups.iter().map(|m| (m.ns, m.ew)).collect()
    }

    #[test]
    fn test_initial_seating() {
        let round = initial_seating(3);
        assert_eq!(
            round,
            vec![
                Matchup::new(1, 2, 1),
                Matchup::new(2, 4, 3),
                Matchup::new(3, 6, 5),
            ]
        );
        assert_eq!(round[2].iids, [6, 5]);
    }

    #[test]
    fn test_mitchell_four_tables() {
        let seating = build_seating(4, 3, Scheme::Mitchell);
        assert_eq!(seating.round_count(), 3);

        let first: Vec<PairId> = seating.rounds()[1].iter().map(|m| m.ew).collect();
        assert_eq!(first, vec![7, 1, 3, 5]);
        let ns: Vec<PairId> = seating.rounds()[1].iter().map(|m| m.ns).collect();
        assert_eq!(ns, vec![2, 4, 6, 8]);

        let second: Vec<PairId> = seating.rounds()[2].iter().map(|m| m.ew).collect();
        assert_eq!(second, vec![5, 7, 1, 3]);
    }

    #[test]
    fn test_howell_two_tables() {
        let seating = build_seating(2, 3, Scheme::Howell);
        assert_eq!(ns_ew(&seating.rounds()[1]), vec![(3, 2), (4, 1)]);
        assert_eq!(ns_ew(&seating.rounds()[2]), vec![(1, 3), (4, 2)]);
    }

    #[test]
    fn test_howell_three_tables() {
        let seating = build_seating(3, 2, Scheme::Howell);
        assert_eq!(ns_ew(&seating.rounds()[1]), vec![(4, 2), (5, 1), (6, 3)]);
    }

    #[test]
    fn test_howell_anchor_stays() {
        let seating = build_seating(6, 11, Scheme::Howell);
        for round in seating.rounds() {
            assert_eq!(round[5].ns, 12);
        }
    }

    #[test]
    fn test_single_table_never_moves() {
        for scheme in Scheme::ALL {
            let seating = build_seating(1, 4, scheme);
            for round in seating.rounds() {
                assert_eq!(round, &vec![Matchup::new(1, 2, 1)]);
            }
        }
    }

    #[test]
    fn test_degenerate_sizes_are_empty() {
        assert!(build_seating(0, 5, Scheme::Mitchell).is_empty());
        assert!(build_seating(5, 0, Scheme::Howell).is_empty());
        assert_eq!(build_seating(0, 0, Scheme::Howell).table_count(), 0);
        assert!(next_round(Scheme::Howell, &[]).is_empty());
    }

    #[test]
    fn test_table_numbers_stable() {
        let seating = build_seating(5, 6, Scheme::Howell);
        for round in seating.rounds() {
            let tables: Vec<u32> = round.iter().map(|m| m.table).collect();
            assert_eq!(tables, vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_check_coverage() {
        assert!(build_seating(7, 7, Scheme::Mitchell).check_coverage().is_ok());
        assert!(build_seating(7, 13, Scheme::Howell).check_coverage().is_ok());

        let broken = Seating::from_rounds(vec![vec![Matchup::new(1, 2, 1), Matchup::new(2, 2, 3)]]);
        assert_eq!(
            broken.check_coverage(),
            Err(SeatingError::IncompleteRound { round: 0, pair: 2 })
        );

        let out_of_range = Seating::from_rounds(vec![vec![Matchup::new(1, 5, 1)]]);
        assert_eq!(
            out_of_range.check_coverage(),
            Err(SeatingError::IncompleteRound { round: 0, pair: 5 })
        );
    }

    #[test]
    fn test_scheme_from_str() {
        assert_eq!("Howell".parse::<Scheme>(), Ok(Scheme::Howell));
        assert_eq!("h".parse::<Scheme>(), Ok(Scheme::Howell));
        assert_eq!("mitchell".parse::<Scheme>(), Ok(Scheme::Mitchell));
        assert_eq!(
            "swiss".parse::<Scheme>(),
            Err(SeatingError::UnknownScheme("swiss".to_string()))
        );
        assert!("".parse::<Scheme>().is_err());
    }

    #[test]
    fn test_with_session_ids() {
        let mut section = init_section(2, 0, "S-A");
        // local pairs 1..=4 at tables 1-2: [ns=2, ew=1], [ns=4, ew=3]
        section.tables[0].iids = [10, 11];
        section.tables[1].iids = [12, 13];

        let seating = build_seating(2, 2, Scheme::Mitchell)
            .with_session_ids(&section)
            .unwrap();
        // round 1: EW pairs swapped tables
        assert_eq!(seating.rounds()[1][0].iids, [10, 13]);
        assert_eq!(seating.rounds()[1][1].iids, [12, 11]);
    }

    #[test]
    fn test_with_session_ids_errors() {
        let section = init_section(2, 0, "S-A");
        let seating = build_seating(3, 2, Scheme::Mitchell);
        assert_eq!(
            seating.with_session_ids(&section),
            Err(SeatingError::SectionMismatch {
                tables: 3,
                section_tables: 2
            })
        );

        let seating = build_seating(2, 2, Scheme::Mitchell);
        assert_eq!(
            seating.with_session_ids(&section),
            Err(SeatingError::UnseededPair { pair: 2 })
        );
    }
}
