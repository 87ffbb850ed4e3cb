//! Status module - lifecycle stages for a roadmap

use std::fmt;

/// Lifecycle stage of a roadmap
///
/// A roadmap advances through editorial stages as the pipeline drafts it
/// and the learner works through it:
/// - Draft: being assembled
/// - AwaitingFeedback: waiting on learner review
/// - Approved: accepted by the learner
/// - Active: the current plan
/// - InProgress: being worked through
/// - Completed: all modules finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoadmapStatus {
    /// Being assembled by the pipeline
    #[default]
    Draft,

    /// Waiting on learner review
    AwaitingFeedback,

    /// Accepted by the learner
    Approved,

    /// The current plan
    Active,

    /// Being worked through
    InProgress,

    /// All modules finished
    Completed,
}

impl RoadmapStatus {
    /// Get the status name exactly as it appears in operation messages
    pub fn as_str(&self) -> &'static str {
        match self {
            RoadmapStatus::Draft => "Draft",
            RoadmapStatus::AwaitingFeedback => "AwaitingFeedback",
            RoadmapStatus::Approved => "Approved",
            RoadmapStatus::Active => "Active",
            RoadmapStatus::InProgress => "InProgress",
            RoadmapStatus::Completed => "Completed",
        }
    }

    /// Parse a status from a string, ignoring case and `-`/`_` separators
    ///
    /// Tool callers spell statuses every way (`InProgress`, `in_progress`,
    /// `IN-PROGRESS`); all of them parse.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "draft" => Some(RoadmapStatus::Draft),
            "awaitingfeedback" => Some(RoadmapStatus::AwaitingFeedback),
            "approved" => Some(RoadmapStatus::Approved),
            "active" => Some(RoadmapStatus::Active),
            "inprogress" => Some(RoadmapStatus::InProgress),
            "completed" => Some(RoadmapStatus::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for RoadmapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RoadmapStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid roadmap status: {}", s))
    }
}
