//! Error handling for the wedgen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for wedgen operations.
///
/// This enum represents all possible errors that can occur while
/// generating an app archive. It implements the standard Error trait
/// through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors locating or reading the template source tree
    #[error("Template source error: {0}.")]
    TemplateSourceError(String),

    /// Returned when the working tree path for a generation is already occupied
    #[error("Working tree already exists: {path}.")]
    WorkingTreeExistsError { path: String },

    /// Represents errors resolving paths inside a working tree
    #[error("Working tree error: {0}.")]
    WorkingTreeError(String),

    /// Represents errors during placeholder substitution
    #[error("Substitution error: {0}.")]
    SubstitutionError(String),

    /// Represents errors that occur while writing the zip archive
    #[error("Archive error: {0}.")]
    ArchiveError(#[from] zip::result::ZipError),

    /// Represents errors parsing the builder form payload
    #[error("Request error: {0}.")]
    RequestError(#[from] serde_json::Error),

    /// Represents errors during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),
}

/// Convenience type alias for Results with wedgen's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
