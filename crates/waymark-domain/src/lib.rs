//! Waymark Domain Layer
//!
//! This crate contains the core data model for waymark's learning roadmaps.
//! It stays dependency-light and owns every tree invariant, so the layers
//! above it (store, audit, archive, tool surface) can trust the shape of the
//! data they are handed.
//!
//! ## Key Concepts
//!
//! - **Roadmap**: the aggregate root - one mutable plan with a lifecycle status
//! - **Module**: a major learning area with an estimated effort in hours
//! - **Topic**: a subject inside a module, carrying a learner confidence score
//! - **Concept**: a named idea inside a topic (the leaf level)
//! - **Resource**: a learning material attached to a module
//!
//! ## Invariants owned here
//!
//! - Orders are 1-based. Module orders stay contiguous (removal renumbers);
//!   topic and concept orders are assigned once and never renumbered
//! - Confidence scores are clamped to [0, 100] on update, stored verbatim
//!   at topic creation
//! - Title lookups are exact and resolve to the first match

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod concept;
pub mod module;
pub mod resource;
pub mod roadmap;
pub mod status;
pub mod topic;
pub mod traits;

// Re-exports for convenience
pub use concept::Concept;
pub use module::Module;
pub use resource::{Resource, ResourceKind};
pub use roadmap::{Roadmap, RoadmapId};
pub use status::RoadmapStatus;
pub use topic::Topic;
pub use traits::RoadmapArchive;
