//! Roadmap analysis - totals and the confidence average

use chrono::{DateTime, Utc};
use waymark_domain::{Roadmap, RoadmapStatus};

/// Aggregate statistics over one roadmap tree
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapAnalysis {
    /// Current lifecycle stage
    pub status: RoadmapStatus,

    /// Number of modules
    pub total_modules: usize,

    /// Number of topics across all modules
    pub total_topics: usize,

    /// Number of concepts across all topics
    pub total_concepts: usize,

    /// Number of resources across all modules
    pub total_resources: usize,

    /// Sum of estimated module hours
    pub total_estimated_hours: u64,

    /// Mean of per-module average confidences, in percent
    ///
    /// Each module average is already truncated to a whole percent; modules
    /// without topics are excluded from the mean. 0.0 when no module has
    /// topics.
    pub average_confidence: f64,

    /// When the roadmap was initialized
    pub created_at: DateTime<Utc>,

    /// When the roadmap last changed
    pub last_modified_at: DateTime<Utc>,
}

impl RoadmapAnalysis {
    /// Compute the statistics for a roadmap
    pub fn compute(roadmap: &Roadmap) -> Self {
        let with_topics: Vec<i32> = roadmap
            .modules
            .iter()
            .filter(|m| !m.topics.is_empty())
            .map(|m| m.average_confidence())
            .collect();
        let average_confidence = if with_topics.is_empty() {
            0.0
        } else {
            with_topics.iter().map(|c| f64::from(*c)).sum::<f64>() / with_topics.len() as f64
        };

        Self {
            status: roadmap.status,
            total_modules: roadmap.modules.len(),
            total_topics: roadmap.total_topics(),
            total_concepts: roadmap.total_concepts(),
            total_resources: roadmap.total_resources(),
            total_estimated_hours: roadmap.total_estimated_hours(),
            average_confidence,
            created_at: roadmap.created_at,
            last_modified_at: roadmap.last_modified_at,
        }
    }
}
