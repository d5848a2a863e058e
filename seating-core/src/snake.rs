//! Snake seeding: session-wide pair ids handed out across sections.
//!
//! Pairs arrive ranked (strongest first). For each table position in the
//! fixed seeding order, ids go forward through the sections and then back
//! again, alternating NS and EW with every id, so neither a section nor a
//! direction collects the strongest pairs. Overflow tables are seeded last.

use crate::error::{Result, SeatingError};
use crate::field::{validate, Section, MAX_SECTION_TABLES};
use crate::seating::PairId;
use crate::Direction;
use log::{debug, warn};
use rustc_hash::FxHashSet;

/// Table visiting order for each section size (index `tps - 1`).
/// Values are 1-based table numbers.
pub static SEEDING_ORDER: [&[u32]; MAX_SECTION_TABLES] = [
    /* 1*/ &[1],
    /* 2*/ &[1, 2],
    /* 3*/ &[1, 3, 2],
    /* 4*/ &[1, 3, 4, 2],
    /* 5*/ &[5, 1, 3, 4, 2],
    /* 6*/ &[5, 1, 3, 6, 4, 2],
    /* 7*/ &[5, 1, 7, 3, 6, 4, 2],
    /* 8*/ &[5, 1, 7, 3, 6, 4, 8, 2],
    /* 9*/ &[5, 9, 1, 7, 3, 6, 4, 8, 2],
    /*10*/ &[5, 9, 1, 7, 3, 6, 10, 4, 8, 2],
    /*11*/ &[5, 9, 1, 7, 11, 3, 6, 10, 4, 8, 2],
    /*12*/ &[5, 9, 1, 7, 11, 3, 6, 10, 4, 8, 12, 2],
    /*13*/ &[5, 9, 13, 1, 7, 11, 3, 6, 10, 4, 8, 12, 2],
    /*14*/ &[5, 9, 13, 1, 7, 11, 3, 6, 10, 14, 4, 8, 12, 2],
    /*15*/ &[5, 9, 13, 1, 7, 11, 15, 3, 6, 10, 14, 4, 8, 12, 2],
];

/// Seeding order for sections of `tps` tables, if one exists
pub fn seeding_order(tps: usize) -> Option<&'static [u32]> {
    tps.checked_sub(1)
        .and_then(|index| SEEDING_ORDER.get(index))
        .copied()
}

/// Seed `field` with ids starting at 1 using the fixed order for `tps`.
///
/// Returns one past the last id issued. A field that does not validate
/// against `tps` is left untouched and `Ok(1)` comes back.
pub fn snake(field: &mut [Section], tps: usize) -> Result<PairId> {
    let order = seeding_order(tps).ok_or(SeatingError::UnsupportedSectionSize { tps })?;
    Ok(snake_with_order(field, order, 1))
}

/// Seed `field` following `order`, issuing ids from `start_id`.
///
/// Nothing is written, and `start_id` is returned, when a section has a
/// size other than `order.len()` or `order.len() + 1`, when `order` is not
/// a permutation of `1..=order.len()`, or when the ids would run past
/// `PairId::MAX`. Slots already holding ids are overwritten.
pub fn snake_with_order(field: &mut [Section], order: &[u32], start_id: PairId) -> PairId {
    let tps = order.len();
    if !validate(field, tps) {
        warn!("field does not fit {} tables per section, not seeding", tps);
        return start_id;
    }
    if !is_permutation(order) {
        warn!("seeding order {:?} is not a permutation, not seeding", order);
        return start_id;
    }
    let tables: usize = field.iter().map(Section::size).sum();
    let last = PairId::try_from(2 * tables)
        .ok()
        .and_then(|count| start_id.checked_add(count));
    if last.is_none() {
        warn!(
            "{} ids from {} overflow the pair id range, not seeding",
            2 * tables,
            start_id
        );
        return start_id;
    }

    let mut next = start_id;
    let mut direction = Direction::NorthSouth;

    for &position in order {
        let table = position as usize - 1;
        let forward = 0..field.len();
        for index in forward.clone().chain(forward.rev()) {
            field[index].tables[table].set_iid(direction, next);
            next += 1;
            direction = direction.opposite();
        }
        direction = direction.opposite();
    }

    let overflow: Vec<usize> = field
        .iter()
        .enumerate()
        .filter(|(_, section)| section.size() == tps + 1)
        .map(|(index, _)| index)
        .collect();
    for &index in overflow.iter().chain(overflow.iter().rev()) {
        field[index].tables[tps].set_iid(direction, next);
        next += 1;
        direction = direction.opposite();
    }

    debug!(
        "seeded {} sections ({} overflow): ids {}..{}",
        field.len(),
        overflow.len(),
        start_id,
        next
    );
    next
}

fn is_permutation(order: &[u32]) -> bool {
    let mut seen = vec![false; order.len()];
    order.iter().all(|&position| {
        let slot = (position as usize).wrapping_sub(1);
        match seen.get_mut(slot) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    })
}

/// Verify a seeded field: every slot set, no id issued twice.
pub fn check_seeding(field: &[Section]) -> Result<()> {
    let mut issued: FxHashSet<PairId> = FxHashSet::default();
    for table in field.iter().flat_map(|section| section.tables.iter()) {
        for direction in Direction::ALL {
            let iid = table.iid(direction);
            if iid == 0 {
                let pair = match direction {
                    Direction::NorthSouth => table.ns_no,
                    Direction::EastWest => table.ew_no,
                };
                return Err(SeatingError::UnseededPair { pair });
            }
            if !issued.insert(iid) {
                return Err(SeatingError::DuplicatePair { iid });
            }
        }
    }
    Ok(())
}
