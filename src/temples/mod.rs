pub mod classifier;
pub mod description;
pub mod fallback;
pub mod karnataka;
pub mod text;
pub mod trawell;

use std::collections::HashSet;

use crate::sheet::Sheet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempleRecord {
    pub name: String,
    pub description: String,
}

impl TempleRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        TempleRecord {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Records in discovery order, keyed by cleaned name. First occurrence wins.
#[derive(Debug, Default)]
pub struct RecordSet {
    records: Vec<TempleRecord>,
    seen: HashSet<String>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the name is empty or already present.
    pub fn insert(&mut self, record: TempleRecord) -> bool {
        if record.name.is_empty() || self.seen.contains(&record.name) {
            return false;
        }
        self.seen.insert(record.name.clone());
        self.records.push(record);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_vec(self) -> Vec<TempleRecord> {
        self.records
    }
}

/// Two-column sheet; `info_header` is "Description" or "Information" depending on the source.
pub fn to_sheet(records: &[TempleRecord], info_header: &str) -> Sheet {
    let mut sheet = Sheet::new(["Temple Name", info_header]);
    sheet.rows = records
        .iter()
        .map(|r| vec![r.name.clone(), r.description.clone()])
        .collect();
    sheet
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let mut set = RecordSet::new();
        assert!(set.insert(TempleRecord::new("Shore Temple", "first")));
        assert!(!set.insert(TempleRecord::new("Shore Temple", "second")));
        assert!(set.insert(TempleRecord::new("Kumari Amman Temple", "")));

        let records = set.into_vec();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description, "first");
        assert_eq!(records[1].name, "Kumari Amman Temple");
    }

    #[test]
    fn empty_name_rejected() {
        let mut set = RecordSet::new();
        assert!(!set.insert(TempleRecord::new("", "orphan description")));
        assert!(set.is_empty());
    }

    #[test]
    fn sheet_columns() {
        let sheet = to_sheet(&[TempleRecord::new("A Temple", "desc")], "Information");
        assert_eq!(sheet.headers, vec!["Temple Name", "Information"]);
        assert_eq!(sheet.rows, vec![vec!["A Temple", "desc"]]);
    }
}
