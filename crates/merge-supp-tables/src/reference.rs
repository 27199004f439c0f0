use crate::errors::{SuppError, SuppResult};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Open a reference file, reporting a missing file as a configuration problem
pub(crate) fn open_reference_file(path: &Path) -> SuppResult<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SuppError::MissingReferenceFile {
            path: path.to_path_buf(),
        },
        _ => SuppError::Io(e),
    })
}
