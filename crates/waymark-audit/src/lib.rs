//! Waymark Audit Layer
//!
//! Read-only walks over a roadmap tree that answer two questions: what does
//! the plan add up to (analysis), and where is it still thin (quality and
//! resource checks). Everything here is a pure function of the tree; the
//! store renders these reports into the user-facing strings.
//!
//! ## Components
//!
//! - **RoadmapAnalysis**: totals and the confidence average
//! - **Auditor**: completeness walks driven by a [`QualityConfig`]
//! - **Resource checks**: per-module quality findings and the roadmap-wide
//!   URL sweep

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod quality;
pub mod resources;

pub use analysis::RoadmapAnalysis;
pub use config::QualityConfig;
pub use quality::{Auditor, ConceptShortfall, QualityReport, TopicRef};
pub use resources::{
    audit_module_resources, audit_resource_urls, ResourceFinding, UrlAuditReport, UrlFinding,
    UrlIssue,
};
