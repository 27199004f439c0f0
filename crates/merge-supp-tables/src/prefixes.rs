/*!
# Prefix Table

Maps a lookup key (a seat, an ID, ...) to the honorific stored in `prefixes.csv`.
Later duplicate keys overwrite earlier ones.
*/

use crate::{
    errors::{SuppError, SuppResult},
    reference::open_reference_file,
    schemas::PREFIXES_COLUMN,
};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable {
    entries: HashMap<String, String>,
    key_column: String,
}

impl PrefixTable {
    pub fn new(key_column: impl Into<String>) -> Self {
        Self {
            entries: HashMap::new(),
            key_column: key_column.into(),
        }
    }

    /// Inserts a mapping, replacing any previous prefix for `key`.
    pub fn insert(&mut self, key: impl Into<String>, prefix: impl Into<String>) {
        self.entries.insert(key.into(), prefix.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the reference column the keys were read from.
    pub fn key_column(&self) -> &str {
        &self.key_column
    }
}

// ================================================================================================
// Loading
// ================================================================================================

/// Load the prefix table from a CSV file keyed by `key_column`
pub fn load_prefixes<P: AsRef<Path>>(path: P, key_column: &str) -> SuppResult<PrefixTable> {
    let path = path.as_ref();
    let file = open_reference_file(path)?;
    let table = read_prefixes(file, key_column, &path.display().to_string())?;

    info!(
        file = %path.display(),
        key_column = %key_column,
        entries = table.len(),
        "Loaded prefix table"
    );

    Ok(table)
}

/// Read a prefix table from any CSV source; `file_label` names it in errors
pub fn read_prefixes<R: Read>(
    source: R,
    key_column: &str,
    file_label: &str,
) -> SuppResult<PrefixTable> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(source);

    let headers = rdr.headers()?.clone();
    let key_idx = column_index(&headers, key_column, file_label)?;
    let prefix_idx = column_index(&headers, PREFIXES_COLUMN, file_label)?;

    let mut table = PrefixTable::new(key_column);
    for result in rdr.records() {
        let record = result?;
        let key = record.get(key_idx).unwrap_or("");
        let prefix = record.get(prefix_idx).unwrap_or("");
        table.insert(key, prefix);
    }

    Ok(table)
}

fn column_index(headers: &csv::StringRecord, column: &str, file_label: &str) -> SuppResult<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| SuppError::MissingColumn {
            file: file_label.to_string(),
            column: column.to_string(),
        })
}

// ================================================================================================
// Tests
// ================================================================================================
