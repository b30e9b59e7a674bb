//! Configuration handling for wedgen.
//! The template root and output root are explicit values injected into
//! the generator at construction; nothing in the pipeline reads ambient
//! process-wide state. A JSON config file is supported for deployments
//! that prefer it over command-line flags.

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Generator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Root of the read-only template tree every generation copies from
    pub template_root: PathBuf,

    /// Directory receiving per-request working trees and archives
    pub output_root: PathBuf,
}

impl Config {
    pub fn new<P: Into<PathBuf>>(template_root: P, output_root: P) -> Self {
        Self { template_root: template_root.into(), output_root: output_root.into() }
    }

    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    /// * `Error::IoError` if the file cannot be read
    /// * `Error::ConfigError` if the contents are not valid JSON
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Loading configuration from {}", path.as_ref().display());
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e)))
    }

    /// Creates the output root if it does not exist yet.
    pub fn ensure_output_root(&self) -> Result<()> {
        fs::create_dir_all(&self.output_root)?;
        Ok(())
    }
}
