//! Template tree materialization.
//! Copies the read-only app template into a per-request working tree
//! and strips the test scaffold that must not ship in a generated app.
//! The template itself is never mutated, so any number of requests can
//! materialize from it concurrently.

use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::constants::SCAFFOLD_FILE;
use crate::error::{Error, Result};

/// Copies the template tree into a fresh working tree.
///
/// # Arguments
/// * `template_root` - Root of the read-only template tree
/// * `working_tree` - Destination path; must not already exist
///
/// # Returns
/// * `Result<()>` - Success once the destination holds a complete,
///   independent copy of the template minus the scaffold file
///
/// # Errors
/// * `Error::TemplateSourceError` if the template root does not exist
/// * `Error::WorkingTreeExistsError` if the destination is occupied
/// * `Error::IoError` on any copy failure
pub fn materialize(template_root: &Path, working_tree: &Path) -> Result<()> {
    if !template_root.exists() {
        return Err(Error::TemplateSourceError(format!(
            "template path does not exist: {}",
            template_root.display()
        )));
    }
    if working_tree.exists() {
        return Err(Error::WorkingTreeExistsError {
            path: working_tree.display().to_string(),
        });
    }

    for dir_entry in WalkDir::new(template_root) {
        let entry = dir_entry.map_err(|e| Error::IoError(e.into()))?;
        let relative_path = entry
            .path()
            .strip_prefix(template_root)
            .map_err(|e| Error::WorkingTreeError(e.to_string()))?;
        let target = working_tree.join(relative_path);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            debug!("Copying file: {}", target.display());
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }

    remove_scaffold(working_tree)
}

/// Removes the test scaffold from a working tree if present.
///
/// A template without the scaffold is not an error.
pub fn remove_scaffold(working_tree: &Path) -> Result<()> {
    let scaffold = working_tree.join(SCAFFOLD_FILE);
    if scaffold.exists() {
        debug!("Removing scaffold: {}", scaffold.display());
        fs::remove_file(scaffold)?;
    }
    Ok(())
}
