use std::fs::File;
use std::path::Path;

use holdout_core::{BoxError, HoldoutError, Result};

pub(crate) fn ensure_not_empty<T>(items: &[T], path: &Path) -> Result<()> {
    if items.is_empty() {
        return Err(HoldoutError::export(path, "no results to export"));
    }

    Ok(())
}

pub(crate) fn create_output_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| HoldoutError::io(parent, source))?;
    }
    File::create(path).map_err(|source| HoldoutError::io(path, source))
}

pub(crate) fn export_error(path: &Path, err: BoxError) -> HoldoutError {
    HoldoutError::export(path, err)
}
