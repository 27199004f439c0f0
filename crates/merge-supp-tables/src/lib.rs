/*!
# Merge Supplement Tables

This crate augments a CSV of personal records with two derived columns, a title
prefix and a nickname set, looked up from two small reference tables.

## Components

- **Prefix table** (`prefixes.csv`) → maps a lookup key such as a seat to a prefix
- **Nick name table** (`nick_names.txt`) → maps a lowercased given name to `;`-joined nicknames
- **Merge pass** → streams the input CSV and appends `prefixes` and `nick_names`

Both tables are loaded once and passed to the merge explicitly; nothing is held in
global state.

## Usage

```rust,no_run
use merge_supp_tables::{merge_files, MergeOptions, SuppResult, SupplementTables};

fn example() -> SuppResult<()> {
    let options = MergeOptions::default();
    let tables = SupplementTables::load("prefixes.csv", &options.prefix_column, "nick_names.txt")?;

    let summary = merge_files("names.csv", "augmented_clean_names.csv", &options, &tables)?;
    println!("{} rows written", summary.rows);

    Ok(())
}
```

## Logging

Everything is reported through `tracing`. Per-row progress is emitted at `info` under
the [`PROGRESS_TARGET`] target so it can be filtered out without touching the output.
*/

pub mod errors;
pub mod merge;
pub mod nick_names;
pub mod prefixes;
mod reference;
pub mod schemas;

// Re-export main types for convenience
pub use errors::{ErrorKind, SuppError, SuppResult};
pub use merge::{
    merge_files, merge_records, MergeOptions, MergeSummary, SupplementTables, PROGRESS_TARGET,
};
pub use nick_names::{load_nick_names, read_nick_names, LoadWarning, NickNameTable};
pub use prefixes::{load_prefixes, read_prefixes, PrefixTable};
pub use schemas::{
    APPENDED_COLUMNS, DEFAULT_NAME_LOOKUP, DEFAULT_OUTPUT, DEFAULT_PREFIX_LOOKUP,
    NICK_NAMES_FILE, PREFIX_FILE,
};
