//! Trait definitions for external interactions
//!
//! These traits define the boundary between the roadmap model and
//! infrastructure. Implementations live in other crates.

use crate::Roadmap;

/// Trait for durably archiving the current roadmap
///
/// Implemented by the infrastructure layer (waymark-archive). The store
/// treats an archive as an opaque save/load collaborator and never requires
/// one to operate.
pub trait RoadmapArchive {
    /// Error type for archive operations
    type Error;

    /// Load the archived roadmap, if one exists
    fn load(&self) -> Result<Option<Roadmap>, Self::Error>;

    /// Replace the archived roadmap with the given tree
    fn save(&mut self, roadmap: &Roadmap) -> Result<(), Self::Error>;

    /// Delete the archived roadmap
    fn clear(&mut self) -> Result<(), Self::Error>;
}
