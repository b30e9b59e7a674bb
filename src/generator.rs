//! Pipeline orchestration.
//! One generation runs strictly sequentially: allocate an identifier,
//! materialize the template into a working tree named by it, substitute
//! the form values, pack the tree into an archive, then reap the
//! working tree. The reaper runs on failures too, so no per-request
//! state survives into later requests.

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::archive;
use crate::config::Config;
use crate::constants::{DOWNLOAD_FILENAME, MAIN_SOURCE_FILE};
use crate::error::{Error, Result};
use crate::ident::GenerationId;
use crate::materialize;
use crate::request::GenerationRequest;
use crate::substitute;

/// A completed generation: the archive on disk plus the filename the
/// caller should suggest for download. The archive is not referenced
/// again by the pipeline once returned.
#[derive(Debug)]
pub struct GeneratedArchive {
    pub archive_path: PathBuf,
    pub download_filename: &'static str,
}

/// Runs generation requests against one template and output root.
///
/// Holds no mutable state; requests only share the read-only template
/// tree and are otherwise isolated by their generation identifiers, so
/// one `Generator` can serve any number of threads concurrently.
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generates a customized app archive for one builder form.
    ///
    /// # Returns
    /// * `Result<GeneratedArchive>` - Path of the finished archive and
    ///   its suggested download filename
    ///
    /// # Errors
    /// Any stage failure aborts the generation; no partial archive is
    /// ever returned as success. Failure to reap the working tree after
    /// a successful build is logged and does not fail the generation.
    pub fn generate(&self, request: &GenerationRequest) -> Result<GeneratedArchive> {
        let id = GenerationId::new();
        let working_tree = self.config.output_root.join(id.to_string());
        let archive_path = self.config.output_root.join(format!("{}.zip", id));

        debug!("Generating app {} in {}", id, working_tree.display());
        let result = self.run_stages(request, &working_tree, &archive_path);

        // The exists-error path means the tree was never ours to delete.
        if !matches!(&result, Err(Error::WorkingTreeExistsError { .. })) {
            reap(&working_tree);
        }
        result?;

        Ok(GeneratedArchive { archive_path, download_filename: DOWNLOAD_FILENAME })
    }

    fn run_stages(
        &self,
        request: &GenerationRequest,
        working_tree: &Path,
        archive_path: &Path,
    ) -> Result<()> {
        materialize::materialize(&self.config.template_root, working_tree)?;
        substitute::substitute_file(&working_tree.join(MAIN_SOURCE_FILE), request)?;
        archive::pack(working_tree, archive_path)
    }
}

/// Deletes a working tree, reporting but never propagating failure.
fn reap(working_tree: &Path) {
    if !working_tree.exists() {
        return;
    }
    if let Err(err) = fs::remove_dir_all(working_tree) {
        warn!("Failed to remove working tree {}: {}", working_tree.display(), err);
    }
}
