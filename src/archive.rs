//! Zip archive construction.
//! Walks a working tree and writes every non-directory entry into a
//! single deflated zip archive. Entry names are the paths relative to
//! the tree root with forward-slash separators on every platform, so
//! the archive layout matches the template layout exactly.

use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};

/// Packs a working tree into a zip archive at `archive_path`.
///
/// A failed build removes the partially written archive before
/// returning, so the caller never sees a truncated file on the
/// error path.
pub fn pack(working_tree: &Path, archive_path: &Path) -> Result<()> {
    if let Err(err) = write_archive(working_tree, archive_path) {
        let _ = fs::remove_file(archive_path);
        return Err(err);
    }
    Ok(())
}

fn write_archive(working_tree: &Path, archive_path: &Path) -> Result<()> {
    let file = fs::File::create(archive_path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for dir_entry in WalkDir::new(working_tree) {
        let entry = dir_entry.map_err(|e| Error::IoError(e.into()))?;
        if entry.file_type().is_dir() {
            continue;
        }
        let relative_path = entry
            .path()
            .strip_prefix(working_tree)
            .map_err(|e| Error::WorkingTreeError(e.to_string()))?;
        let entry_name = entry_name(relative_path)?;

        debug!("Adding archive entry: {}", entry_name);
        writer.start_file(entry_name, options)?;
        let mut source = fs::File::open(entry.path())?;
        io::copy(&mut source, &mut writer)?;
    }

    writer.finish()?;
    Ok(())
}

/// Renders a relative path as a forward-slash archive entry name.
pub fn entry_name(relative_path: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in relative_path.components() {
        let part = component
            .as_os_str()
            .to_str()
            .ok_or_else(|| Error::WorkingTreeError("invalid path".to_string()))?;
        parts.push(part);
    }
    Ok(parts.join("/"))
}
