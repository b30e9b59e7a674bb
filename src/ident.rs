//! Per-generation unique identifier.
//! Every request mints one identifier which namespaces its working tree
//! and archive on disk, so concurrent generations never collide.

use std::fmt;
use uuid::Uuid;

/// Opaque identifier for one generation request.
///
/// Backed by a random 128-bit UUID, so no coordination between requests
/// is needed for uniqueness. Used only as a filesystem path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationId(Uuid);

impl GenerationId {
    /// Mints a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GenerationId {
    fn default() -> Self {
        GenerationId::new()
    }
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
