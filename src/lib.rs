//! Wedgen turns a wedding builder form into a downloadable app archive.
//! It materializes a fresh copy of the app template, substitutes the
//! couple's details into the template source, and packs the result into
//! a zip archive, keeping concurrent generations fully isolated.

/// Zip archive construction from a working tree
pub mod archive;

/// Command-line interface module for the wedgen binary
pub mod cli;

/// Generator configuration: template root and output root
pub mod config;

/// Fixed paths, defaults and filenames used across the pipeline
pub mod constants;

/// Error types and handling for the wedgen application
pub mod error;

/// Pipeline orchestration: allocate, materialize, substitute,
/// archive, reap
pub mod generator;

/// Per-generation unique identifier
pub mod ident;

/// Template tree materialization into a per-request working tree
pub mod materialize;

/// The wedding builder form as submitted by the caller
pub mod request;

/// Placeholder token substitution in the generated app source
pub mod substitute;
