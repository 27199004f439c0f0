/*!
# File Schema Definitions

Column names and default file names shared by the loaders, the merge pass and the CLI.

## Reference Files

### Prefix CSV (`prefixes.csv`)
CSV with a header row. Must contain the configured lookup column (for example `seat`)
and a column literally named `prefixes`.

### Nick name text file (`nick_names.txt`)
One nickname group per line:

```text
robert, bob - rob, bobby
```

Left of the first `-` are the given names sharing the group, right of it the nicknames.

## Output CSV
The input header, followed by `prefixes` and then `nick_names`.
*/

// ================================================================================================
// Reference Files
// ================================================================================================

/// Fixed name of the prefix reference file, relative to the working directory
pub const PREFIX_FILE: &str = "prefixes.csv";

/// Fixed name of the nickname reference file, relative to the working directory
pub const NICK_NAMES_FILE: &str = "nick_names.txt";

/// Value column of the prefix reference file
pub const PREFIXES_COLUMN: &str = "prefixes";

// ================================================================================================
// Output CSV
// ================================================================================================

/// Appended output column carrying the matched prefix
pub const OUTPUT_PREFIXES_COLUMN: &str = "prefixes";

/// Appended output column carrying the matched nickname set
pub const OUTPUT_NICK_NAMES_COLUMN: &str = "nick_names";

/// Columns appended to every output row, in exact order
pub const APPENDED_COLUMNS: &[&str] = &[OUTPUT_PREFIXES_COLUMN, OUTPUT_NICK_NAMES_COLUMN];

/// Separator between the nicknames of one group once stored
pub const NICK_NAME_SEPARATOR: &str = ";";

// ================================================================================================
// Defaults
// ================================================================================================

pub const DEFAULT_OUTPUT: &str = "augmented_clean_names.csv";
pub const DEFAULT_PREFIX_LOOKUP: &str = "seat";
pub const DEFAULT_NAME_LOOKUP: &str = "FirstName";
