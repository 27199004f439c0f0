/*!
# Nick Name Table

Maps a lowercased given name to the `;`-joined nicknames of its group.

Each populated line of the reference file declares one group:

```text
robert, bob - rob, bobby
```

which yields `robert -> rob;bobby` and `bob -> rob;bobby`. The first group to claim a
name keeps it; later claims are reported as [`LoadWarning::DuplicateNickName`] and
dropped. Lines without a `-` are reported as [`LoadWarning::InvalidLine`] and skipped.
Blank lines are skipped silently.
*/

use crate::{errors::SuppResult, reference::open_reference_file, schemas::NICK_NAME_SEPARATOR};
use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// A recoverable data-quality problem found while loading the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// `name` was already mapped; `nick_names` from `line_number` was discarded.
    DuplicateNickName {
        name: String,
        nick_names: String,
        line_number: usize,
    },
    /// A populated line with no `-` separator.
    InvalidLine { line_number: usize, line: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NickNameTable {
    entries: HashMap<String, String>,
    warnings: Vec<LoadWarning>,
}

impl NickNameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an already lowercased name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Lowercases `name` before looking it up.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Warnings recorded while loading, in file order.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Parse one reference line and merge its group into the table.
    ///
    /// `line_number` is 1-based and only used for reporting.
    pub fn add_line(&mut self, line: &str, line_number: usize) {
        let line = line.trim().to_lowercase();
        if line.is_empty() {
            return;
        }

        let mut segments = line.split('-');
        let (names, nicks) = match (segments.next(), segments.next()) {
            (Some(names), Some(nicks)) => (names, nicks),
            _ => {
                warn!(line_number, line = %line, "Invalid nick name line");
                self.warnings.push(LoadWarning::InvalidLine { line_number, line });
                return;
            }
        };

        let nick_names = nicks
            .split(',')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(NICK_NAME_SEPARATOR);

        for name in names.split(',').map(str::trim) {
            if self.entries.contains_key(name) {
                warn!(
                    line_number,
                    name = %name,
                    nick_names = %nick_names,
                    "duplicate nick name"
                );
                self.warnings.push(LoadWarning::DuplicateNickName {
                    name: name.to_string(),
                    nick_names: nick_names.clone(),
                    line_number,
                });
            } else {
                self.entries.insert(name.to_string(), nick_names.clone());
            }
        }
    }
}

// ================================================================================================
// Loading
// ================================================================================================

/// Load the nickname table from a text file
pub fn load_nick_names<P: AsRef<Path>>(path: P) -> SuppResult<NickNameTable> {
    let path = path.as_ref();
    let file = open_reference_file(path)?;
    let table = read_nick_names(BufReader::new(file))?;

    info!(
        file = %path.display(),
        entries = table.len(),
        warnings = table.warnings().len(),
        "Loaded nick name table"
    );

    Ok(table)
}

/// Read a nickname table from any line-oriented source
pub fn read_nick_names<R: BufRead>(source: R) -> SuppResult<NickNameTable> {
    let mut table = NickNameTable::new();
    for (idx, line) in source.lines().enumerate() {
        table.add_line(&line?, idx + 1);
    }
    Ok(table)
}

// ================================================================================================
// Tests
// ================================================================================================
