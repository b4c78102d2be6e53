use crate::codepoint::CodePointRange;
use crate::reader::Record;
use crate::reader::UcdReader;
use crate::Result;
use serde::Serialize;
use serde::Serializer;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::path::Path;

pub const EMOJI_DATA: &str = "emoji/emoji-data.txt";
pub const GRAPHEME_BREAK_PROPERTY: &str = "auxiliary/GraphemeBreakProperty.txt";
pub const WORD_BREAK_PROPERTY: &str = "auxiliary/WordBreakProperty.txt";

pub const EXTENDED_PICTOGRAPHIC: &str = "Extended_Pictographic";

/// Code point ranges grouped by property value.
///
/// Ranges under a value are kept in the order they were read. They are not
/// sorted, merged or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTable {
    ranges: BTreeMap<String, Vec<CodePointRange>>,
}

impl PropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group records by their field 1 value. Stops at the first error.
    pub fn from_records(records: impl IntoIterator<Item = Result<Record>>) -> Result<Self> {
        let mut table = Self::new();
        for record in records {
            let record = record?;
            table.push(record.value(), record.range);
        }
        Ok(table)
    }

    pub fn push(&mut self, value: &str, range: CodePointRange) {
        match self.ranges.get_mut(value) {
            Some(ranges) => ranges.push(range),
            None => {
                self.ranges.insert(value.to_string(), vec![range]);
            }
        }
    }

    pub fn get(&self, value: &str) -> Option<&[CodePointRange]> {
        self.ranges.get(value).map(|v| v.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.ranges.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<CodePointRange>> {
        self.ranges.iter()
    }

    /// Number of distinct property values.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl<'a> IntoIterator for &'a PropertyTable {
    type Item = (&'a String, &'a Vec<CodePointRange>);
    type IntoIter = btree_map::Iter<'a, String, Vec<CodePointRange>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for PropertyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.ranges.serialize(serializer)
    }
}

/// Ranges of a two-field data file whose value equals `value`, in file order.
pub fn collect_property(path: impl AsRef<Path>, value: &str) -> Result<Vec<CodePointRange>> {
    let path = path.as_ref();
    let mut ranges = Vec::new();
    for record in UcdReader::open(path, 2)? {
        let record = record?;
        if record.value() == value {
            ranges.push(record.range);
        }
    }
    log::debug!(
        "collected {} {} ranges from {}",
        ranges.len(),
        value,
        path.display()
    );
    Ok(ranges)
}

/// All ranges of a two-field data file, grouped by value.
pub fn property_table(path: impl AsRef<Path>) -> Result<PropertyTable> {
    let path = path.as_ref();
    let table = PropertyTable::from_records(UcdReader::open(path, 2)?)?;
    log::debug!(
        "collected {} property values from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Code point ranges with `Extended_Pictographic=Yes`.
pub fn extended_pictographic(ucd_dir: impl AsRef<Path>) -> Result<Vec<CodePointRange>> {
    collect_property(ucd_dir.as_ref().join(EMOJI_DATA), EXTENDED_PICTOGRAPHIC)
}

/// Code point ranges for each `Grapheme_Cluster_Break` value.
pub fn grapheme_cluster_break(ucd_dir: impl AsRef<Path>) -> Result<PropertyTable> {
    property_table(ucd_dir.as_ref().join(GRAPHEME_BREAK_PROPERTY))
}

/// Code point ranges for each `Word_Break` value.
pub fn word_break(ucd_dir: impl AsRef<Path>) -> Result<PropertyTable> {
    property_table(ucd_dir.as_ref().join(WORD_BREAK_PROPERTY))
}
