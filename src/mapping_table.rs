//! The [IDNA Mapping Table](http://www.unicode.org/reports/tr46/#IDNA_Mapping_Table)
//! of UTS #46, indexed by code point.
//!
//! The rows come from `IdnaMappingTable.txt` through
//! `make_uts46_mapping_table.py`. They are loaded into a [`RangeList`] the
//! first time any code point is classified, and the resulting table is shared
//! read-only by every caller afterwards.

use self::Idna2008Status::*;
use self::Status::*;
use crate::error::{Error, Result};
use crate::range_list::RangeList;
use lazy_static::lazy_static;
use log::debug;

type TableRow = (u32, u32, Status, &'static str, Idna2008Status);

include!("uts46_mapping_table.rs");

/// The largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// How UTS #46 processing treats a code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Valid,
    Mapped,
    Disallowed,
    DisallowedStd3Valid,
    DisallowedStd3Mapped,
    Ignored,
    Deviation,
}

impl Status {
    /// Resolve the two STD3 statuses for the given `UseSTD3ASCIIRules` flag.
    ///
    /// With the flag set both become [`Status::Disallowed`]; without it
    /// `DisallowedStd3Valid` becomes `Valid` and `DisallowedStd3Mapped`
    /// becomes `Mapped`. Other statuses are returned unchanged.
    #[inline]
    pub fn resolve_std3(self, use_std3_ascii_rules: bool) -> Status {
        match self {
            DisallowedStd3Valid | DisallowedStd3Mapped if use_std3_ascii_rules => Disallowed,
            DisallowedStd3Valid => Valid,
            DisallowedStd3Mapped => Mapped,
            other => other,
        }
    }
}

/// The IDNA2008 status column of the table. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Idna2008Status {
    Unspecified,
    /// Valid under UTS #46 but excluded by IDNA2008 for all domain names.
    Nv8,
    /// Valid under UTS #46 but excluded by IDNA2008 for the current version of Unicode.
    Xv8,
}

/// The table entry for one code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    status: Status,
    replacement: &'static str,
    idna2008: Idna2008Status,
}

impl Mapping {
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The replacement text used by `Mapped`, `Deviation` and
    /// `DisallowedStd3Mapped` code points. Empty for every other status.
    #[inline]
    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    #[inline]
    pub fn idna2008_status(&self) -> Idna2008Status {
        self.idna2008
    }
}

pub struct MappingTable {
    ranges: RangeList<u32, Mapping>,
}

lazy_static! {
    static ref TABLE: MappingTable = MappingTable::build();
}

impl MappingTable {
    fn build() -> MappingTable {
        let mut ranges = RangeList::with_capacity(TABLE_ROWS.len());
        for &(from, to, status, replacement, idna2008) in TABLE_ROWS {
            ranges.add(from, to, Mapping { status, replacement, idna2008 });
        }
        debug!("built UTS #46 mapping table with {} ranges", ranges.len());
        MappingTable { ranges }
    }

    /// The process-wide table, built on first use.
    #[inline]
    pub fn global() -> &'static MappingTable {
        &TABLE
    }

    /// Look up the entry for `code_point`.
    ///
    /// Fails if `code_point` is above [`MAX_CODE_POINT`].
    pub fn classify(&self, code_point: u32) -> Result<Mapping> {
        if code_point > MAX_CODE_POINT {
            return Err(Error::CodePointOutOfRange(code_point));
        }
        self.ranges
            .get(code_point)
            .copied()
            .ok_or(Error::Unclassified(code_point))
    }

    /// Look up a `char`, which is always in range.
    ///
    /// The generated rows cover every code point, so a miss means the table
    /// itself is broken.
    pub(crate) fn find_char(&self, c: char) -> Mapping {
        match self.ranges.get(c as u32) {
            Some(mapping) => *mapping,
            None => panic!("U+{:04X} is missing from the mapping table", c as u32),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Classify `code_point` using the process-wide table.
pub fn classify(code_point: u32) -> Result<Mapping> {
    MappingTable::global().classify(code_point)
}

#[cfg(test)]
mod tests {
    use super::Idna2008Status::*;
    use super::Status::*;
    use super::*;

    #[test]
    fn classify_null() {
        let mapping = classify(0x0000).unwrap();
        assert_eq!(mapping.status(), DisallowedStd3Valid);
        assert_eq!(mapping.replacement(), "");
        assert_eq!(mapping.idna2008_status(), Unspecified);
    }

    #[test]
    fn classify_out_of_range() {
        assert_eq!(classify(0x11_0000), Err(Error::CodePointOutOfRange(0x11_0000)));
        assert_eq!(classify(u32::MAX), Err(Error::CodePointOutOfRange(u32::MAX)));
        assert!(classify(MAX_CODE_POINT).is_ok());
    }

    #[test]
    fn classify_statuses() {
        assert_matches!(classify('a' as u32).unwrap().status(), Valid);
        assert_matches!(classify('-' as u32).unwrap().status(), Valid);
        assert_matches!(classify('_' as u32).unwrap().status(), DisallowedStd3Valid);
        assert_matches!(classify(0x00AD).unwrap().status(), Ignored);
        assert_matches!(classify(0x2488).unwrap().status(), Disallowed);

        let upper_a = classify('A' as u32).unwrap();
        assert_eq!(upper_a.status(), Mapped);
        assert_eq!(upper_a.replacement(), "a");

        let sharp_s = classify('ß' as u32).unwrap();
        assert_eq!(sharp_s.status(), Deviation);
        assert_eq!(sharp_s.replacement(), "ss");

        let zwj = classify(0x200D).unwrap();
        assert_eq!(zwj.status(), Deviation);
        assert_eq!(zwj.replacement(), "");

        let nbsp = classify(0x00A0).unwrap();
        assert_eq!(nbsp.status(), DisallowedStd3Mapped);
        assert_eq!(nbsp.replacement(), " ");

        assert_eq!(classify(0x3002).unwrap().replacement(), ".");
        assert_eq!(classify(0x00A9).unwrap().idna2008_status(), Nv8);
        assert_eq!(classify(0x19DA).unwrap().idna2008_status(), Xv8);
    }

    #[test]
    fn resolve_std3() {
        assert_eq!(DisallowedStd3Valid.resolve_std3(true), Disallowed);
        assert_eq!(DisallowedStd3Valid.resolve_std3(false), Valid);
        assert_eq!(DisallowedStd3Mapped.resolve_std3(true), Disallowed);
        assert_eq!(DisallowedStd3Mapped.resolve_std3(false), Mapped);
        for &status in &[Valid, Mapped, Disallowed, Ignored, Deviation] {
            assert_eq!(status.resolve_std3(true), status);
            assert_eq!(status.resolve_std3(false), status);
        }
    }

    #[test]
    fn rows_cover_every_code_point() {
        let table = MappingTable::global();
        assert!(!table.is_empty());
        let mut expected = 0;
        for range in table.ranges.iter() {
            assert_eq!(range.min, expected);
            assert!(range.min <= range.max);
            expected = range.max + 1;
        }
        assert_eq!(expected, MAX_CODE_POINT + 1);
    }

    #[test]
    fn fast_path_characters_are_valid() {
        let table = MappingTable::global();
        for c in "abcdefghijklmnopqrstuvwxyz0123456789-.".chars() {
            assert_matches!(table.find_char(c).status(), Valid);
        }
    }

    #[test]
    fn global_is_shared() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| MappingTable::global() as *const MappingTable as usize))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
