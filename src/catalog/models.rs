//! Image data models
//!
//! Types representing resolved installer images.

/// One resolved, displayable installer image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Human-friendly name, e.g. "Ubuntu Server 22.10 (Kinetic Kudu)"
    pub label: String,
    pub url: String,
    /// Hex sha256 of the image
    pub checksum: String,
    pub size: u64,
}

/// Menu entries, one per input catalog, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceList {
    records: Vec<ImageRecord>,
}

impl From<Vec<ImageRecord>> for ChoiceList {
    fn from(records: Vec<ImageRecord>) -> Self {
        Self { records }
    }
}

impl ChoiceList {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ChoiceList {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
