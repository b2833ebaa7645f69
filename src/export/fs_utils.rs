// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check that `path` may be created or overwritten.
///
/// Missing file or `force` -> Ok. Otherwise the user is asked to confirm.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("'{}' already exists.", path.display()));

    print!("Replace it? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        info("Replacing existing export.");
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled, existing file not overwritten".to_string(),
        ))
    }
}
