/*!
# Supplement Merge Pass

Streams an input CSV row by row, looks each row up in the prefix and nickname tables,
and writes it back out with `prefixes` and `nick_names` appended. Row order and the
original field values are preserved exactly.
*/

use crate::{
    errors::{SuppError, SuppResult},
    nick_names::{load_nick_names, NickNameTable},
    prefixes::{load_prefixes, PrefixTable},
    schemas::{APPENDED_COLUMNS, DEFAULT_NAME_LOOKUP, DEFAULT_PREFIX_LOOKUP},
};
use csv::{Reader, ReaderBuilder, StringRecord, Writer};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Tracing target of the per-row progress events
pub const PROGRESS_TARGET: &str = "merge_supp::progress";

/// Which input columns drive the two lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Input column looked up in the prefix table
    pub prefix_column: String,

    /// Input column lowercased and looked up in the nickname table
    pub name_column: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            prefix_column: DEFAULT_PREFIX_LOOKUP.to_string(),
            name_column: DEFAULT_NAME_LOOKUP.to_string(),
        }
    }
}

/// Both reference tables, loaded once and only read during the merge
#[derive(Debug, Clone, Default)]
pub struct SupplementTables {
    pub prefixes: PrefixTable,
    pub nick_names: NickNameTable,
}

impl SupplementTables {
    pub fn new(prefixes: PrefixTable, nick_names: NickNameTable) -> Self {
        Self {
            prefixes,
            nick_names,
        }
    }

    /// Load both reference files; the prefix file is keyed by `prefix_column`
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        prefix_file: P,
        prefix_column: &str,
        nick_names_file: Q,
    ) -> SuppResult<Self> {
        let prefixes = load_prefixes(prefix_file, prefix_column)?;
        let nick_names = load_nick_names(nick_names_file)?;
        Ok(Self::new(prefixes, nick_names))
    }
}

/// Counts reported once a merge completes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub rows: usize,
    pub prefixes_matched: usize,
    pub nick_names_matched: usize,
}

// ================================================================================================
// Entry Points
// ================================================================================================

/// Merge `input` into a newly created `output` file.
///
/// The output is only created once the input has been opened and its header read. A
/// failure part way through leaves the rows written so far in `output`.
pub fn merge_files<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &MergeOptions,
    tables: &SupplementTables,
) -> SuppResult<MergeSummary> {
    let mut rdr = input_reader(File::open(input.as_ref())?);
    let headers = rdr.headers()?.clone();
    let wtr = Writer::from_path(output.as_ref())?;

    let summary = merge_rows(&mut rdr, &headers, wtr, options, tables)?;

    info!(
        output = %output.as_ref().display(),
        rows = summary.rows,
        prefixes_matched = summary.prefixes_matched,
        nick_names_matched = summary.nick_names_matched,
        "Merge complete"
    );

    Ok(summary)
}

/// Merge an in-memory or streamed CSV `source` into `sink`
pub fn merge_records<R: Read, W: Write>(
    source: R,
    sink: W,
    options: &MergeOptions,
    tables: &SupplementTables,
) -> SuppResult<MergeSummary> {
    let mut rdr = input_reader(source);
    let headers = rdr.headers()?.clone();
    merge_rows(&mut rdr, &headers, Writer::from_writer(sink), options, tables)
}

// ================================================================================================
// Row Processing
// ================================================================================================

fn input_reader<R: Read>(source: R) -> Reader<R> {
    // Short rows reach the merge so they can be padded or reported per field.
    ReaderBuilder::new().flexible(true).from_reader(source)
}

fn merge_rows<R: Read, W: Write>(
    rdr: &mut Reader<R>,
    headers: &StringRecord,
    mut wtr: Writer<W>,
    options: &MergeOptions,
    tables: &SupplementTables,
) -> SuppResult<MergeSummary> {
    let width = headers.len();
    let prefix_idx = headers.iter().position(|h| h == options.prefix_column);
    let name_idx = headers.iter().position(|h| h == options.name_column);

    let mut out_headers = headers.clone();
    out_headers.extend(APPENDED_COLUMNS);
    wtr.write_record(&out_headers)?;

    let mut summary = MergeSummary::default();
    let mut record = StringRecord::new();
    let mut output = StringRecord::new();

    while rdr.read_record(&mut record)? {
        let row = summary.rows;
        if record.len() > width {
            return Err(SuppError::UnexpectedFieldCount {
                row,
                expected: width,
                found: record.len(),
            });
        }

        let key = lookup_field(&record, prefix_idx, row, &options.prefix_column)?;
        let name = lookup_field(&record, name_idx, row, &options.name_column)?.to_lowercase();
        info!(target: PROGRESS_TARGET, "#{}: {}", row, name);

        let prefix = tables.prefixes.get(key);
        let nick_names = tables.nick_names.get(&name);

        output.clear();
        output.extend(record.iter());
        for _ in record.len()..width {
            output.push_field("");
        }
        output.push_field(prefix.unwrap_or(""));
        output.push_field(nick_names.unwrap_or(""));
        wtr.write_record(&output)?;

        summary.rows += 1;
        summary.prefixes_matched += usize::from(prefix.is_some());
        summary.nick_names_matched += usize::from(nick_names.is_some());
    }

    wtr.flush()?;
    Ok(summary)
}

fn lookup_field<'r>(
    record: &'r StringRecord,
    idx: Option<usize>,
    row: usize,
    column: &str,
) -> SuppResult<&'r str> {
    idx.and_then(|i| record.get(i))
        .ok_or_else(|| SuppError::MissingField {
            row,
            column: column.to_string(),
        })
}

// ================================================================================================
// Tests
// ================================================================================================
