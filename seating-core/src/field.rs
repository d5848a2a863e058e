//! Multi-section layout of a session: sections, their tables, and the
//! session-wide pair id slots filled in by the snake seeder.

use crate::error::{Result, SeatingError};
use crate::seating::PairId;
use crate::snake::snake;
use crate::Direction;
use serde::{Deserialize, Serialize};

/// Largest section for which a fixed seeding order exists
pub const MAX_SECTION_TABLES: usize = 15;

/// Session dimensions derived from the total number of tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specs {
    /// Number of sections
    pub sections: usize,
    /// Minimum tables per section
    pub tps: usize,
    /// How many sections get `tps + 1` tables
    pub extra: usize,
}

impl Specs {
    /// Split `total` tables into sections of at most 15 tables.
    pub fn new(total: usize) -> Result<Self> {
        if total == 0 {
            return Err(SeatingError::EmptySession);
        }
        let sections = 1 + (total - 1) / MAX_SECTION_TABLES;
        Ok(Specs {
            sections,
            tps: total / sections,
            extra: total % sections,
        })
    }

    /// Fixed dimensions for very large sessions: `sections` sections of 14
    /// tables, the first `extra` of them with 15.
    pub fn with_sections(sections: usize, extra: usize) -> Result<Self> {
        if sections == 0 {
            return Err(SeatingError::EmptySession);
        }
        Ok(Specs {
            sections,
            tps: MAX_SECTION_TABLES - 1,
            extra: extra.min(sections),
        })
    }

    /// Total number of tables
    pub fn total(&self) -> usize {
        self.extra + self.tps * self.sections
    }

    /// Size of section `index`; the first `extra` sections carry the overflow table
    pub fn section_size(&self, index: usize) -> usize {
        if index < self.extra {
            self.tps + 1
        } else {
            self.tps
        }
    }
}

/// One table of a section: its local numbers and the session-wide ids
/// of the pairs that start there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    #[serde(rename = "tableid")]
    pub table_id: String,
    /// In-section table number
    #[serde(rename = "tableno")]
    pub table_no: u32,
    /// In-section number of the EW pair
    #[serde(rename = "ewno")]
    pub ew_no: PairId,
    /// In-section number of the NS pair
    #[serde(rename = "nsno")]
    pub ns_no: PairId,
    /// Session-wide ids `[ns, ew]`, 0 until seeded
    pub iids: [PairId; 2],
}

impl TableSpec {
    pub fn new(table_id: impl Into<String>, table_no: u32, ew_no: PairId, ns_no: PairId) -> Self {
        TableSpec {
            table_id: table_id.into(),
            table_no,
            ew_no,
            ns_no,
            iids: [0; 2],
        }
    }

    pub fn iid(&self, direction: Direction) -> PairId {
        self.iids[direction.index()]
    }

    pub fn set_iid(&mut self, direction: Direction, iid: PairId) {
        self.iids[direction.index()] = iid;
    }

    /// Both session-wide slots are filled
    pub fn is_seeded(&self) -> bool {
        self.iids.iter().all(|&iid| iid != 0)
    }
}

/// The tables of one section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// 0-based position in the field
    pub index: usize,
    #[serde(rename = "section")]
    pub section_id: String,
    pub tables: Vec<TableSpec>,
}

impl Section {
    pub fn size(&self) -> usize {
        self.tables.len()
    }
}

/// All sections of a session, in seeding order
pub type Field = Vec<Section>;

/// A session: its id, pair count and field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "sessid")]
    pub id: String,
    /// Total number of pairs
    pub total: usize,
    pub field: Field,
}

impl Session {
    /// Lay out an unseeded session from its dimensions.
    pub fn new(id: impl Into<String>, specs: &Specs) -> Self {
        let id = id.into();
        let field = init_field(specs, &id);
        Session {
            total: 2 * specs.total(),
            field,
            id,
        }
    }

    pub fn section_count(&self) -> usize {
        self.field.len()
    }

    pub fn table_count(&self) -> usize {
        self.field.iter().map(Section::size).sum()
    }

    /// Assign session-wide ids with the snake seeder.
    ///
    /// Unlike [`snake`], a malformed field is reported instead of skipped,
    /// and each slot is filled once: a session that already carries ids is
    /// rejected untouched. Returns one past the last id issued.
    pub fn seed(&mut self) -> Result<PairId> {
        if let Some(table) = self
            .field
            .iter()
            .flat_map(|section| section.tables.iter())
            .find(|table| table.iids.iter().any(|&iid| iid != 0))
        {
            return Err(SeatingError::AlreadySeeded {
                table_id: table.table_id.clone(),
            });
        }

        let tps = self
            .field
            .iter()
            .map(Section::size)
            .min()
            .ok_or(SeatingError::EmptySession)?;
        check_field(&self.field, tps)?;
        snake(&mut self.field, tps)
    }
}

/// True when every section holds `tps` or `tps + 1` tables.
pub fn validate(field: &[Section], tps: usize) -> bool {
    field
        .iter()
        .all(|section| section.size() == tps || section.size() == tps + 1)
}

/// Like [`validate`], naming the first section that is out of shape.
pub fn check_field(field: &[Section], tps: usize) -> Result<()> {
    match field
        .iter()
        .find(|section| section.size() != tps && section.size() != tps + 1)
    {
        Some(section) => Err(SeatingError::MalformedField {
            section: section.index,
            size: section.size(),
            tps,
        }),
        None => Ok(()),
    }
}

/// A section of `size` tables. Table `i` (0-based) starts with local NS pair
/// `2i+2` and EW pair `2i+1`, as in the first round of a seating.
pub fn init_section(size: usize, index: usize, sid: &str) -> Section {
    let tables = (0..size)
        .map(|i| {
            let i = i as u32;
            TableSpec::new(format!("{}-{}", sid, i + 1), i + 1, 2 * i + 1, 2 * i + 2)
        })
        .collect();
    Section {
        index,
        section_id: sid.to_string(),
        tables,
    }
}

/// All sections for `specs`, ids prefixed with `rid`.
pub fn init_field(specs: &Specs, rid: &str) -> Field {
    (0..specs.sections)
        .map(|index| {
            let sid = format!("{}-{}", rid, section_letter(index));
            init_section(specs.section_size(index), index, &sid)
        })
        .collect()
}

/// `A`..`Z` for the first 26 sections, the 1-based number after that
pub fn section_letter(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        (index + 1).to_string()
    }
}
