//! Roadmap module - the aggregate root of the waymark tree

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{Module, RoadmapStatus};

/// Unique identifier for a roadmap based on UUIDv7
///
/// UUIDv7 keeps identifiers chronologically sortable, which makes archive
/// rows and log lines line up with wall-clock history for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoadmapId(u128);

impl RoadmapId {
    /// Generate a new UUIDv7-based RoadmapId
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark_domain::RoadmapId;
    ///
    /// let id = RoadmapId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a RoadmapId from a raw u128 value
    ///
    /// This is primarily for archive deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a RoadmapId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid roadmap id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for RoadmapId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RoadmapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A learning roadmap - one mutable tree of modules, topics, and concepts
///
/// The tree is always edited in place through exact title lookups; the id
/// exists for logs and archive keys, never for the operation contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Roadmap {
    /// Unique identifier
    pub id: RoadmapId,

    /// Current lifecycle stage
    pub status: RoadmapStatus,

    /// Modules in order; `modules[i].order == i + 1` holds after every
    /// mutation
    pub modules: Vec<Module>,

    /// When this roadmap was initialized
    pub created_at: DateTime<Utc>,

    /// When this roadmap last changed
    ///
    /// Refreshed by [`Roadmap::touch`], which callers invoke on every
    /// successful mutation and skip on failed lookups.
    pub last_modified_at: DateTime<Utc>,
}

impl Roadmap {
    /// Create an empty Draft roadmap stamped now
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark_domain::Roadmap;
    ///
    /// let mut roadmap = Roadmap::new();
    /// roadmap.push_module("Basics".to_string(), "Start here".to_string(), 10);
    /// assert_eq!(roadmap.modules[0].order, 1);
    /// ```
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: RoadmapId::new(),
            status: RoadmapStatus::Draft,
            modules: Vec::new(),
            created_at: now,
            last_modified_at: now,
        }
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.last_modified_at = Utc::now();
    }

    /// First module whose title matches exactly
    pub fn module(&self, title: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.title == title)
    }

    /// Mutable variant of [`Roadmap::module`]
    pub fn module_mut(&mut self, title: &str) -> Option<&mut Module> {
        self.modules.iter_mut().find(|m| m.title == title)
    }

    /// Append a module, assigning it the next 1-based order
    pub fn push_module(&mut self, title: String, description: String, estimated_hours: u64) {
        let order = (self.modules.len() + 1) as u32;
        self.modules
            .push(Module::new(title, description, order, estimated_hours));
    }

    /// Remove the first module whose title matches exactly and close the
    /// gap in the order sequence
    ///
    /// Returns false and leaves the tree untouched when nothing matches.
    pub fn remove_module(&mut self, title: &str) -> bool {
        let Some(pos) = self.modules.iter().position(|m| m.title == title) else {
            return false;
        };
        self.modules.remove(pos);
        for (i, module) in self.modules.iter_mut().enumerate() {
            module.order = (i + 1) as u32;
        }
        true
    }

    /// Count of topics across all modules
    pub fn total_topics(&self) -> usize {
        self.modules.iter().map(|m| m.topics.len()).sum()
    }

    /// Count of concepts across all topics
    pub fn total_concepts(&self) -> usize {
        self.modules
            .iter()
            .flat_map(|m| m.topics.iter())
            .map(|t| t.concepts.len())
            .sum()
    }

    /// Count of resources across all modules
    pub fn total_resources(&self) -> usize {
        self.modules.iter().map(|m| m.resources.len()).sum()
    }

    /// Sum of estimated module hours
    pub fn total_estimated_hours(&self) -> u64 {
        self.modules.iter().map(|m| m.estimated_hours).sum()
    }
}

impl Default for Roadmap {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: module orders stay contiguous 1..=len through any mix
        /// of adds and removes
        #[test]
        fn test_module_orders_stay_contiguous(
            additions in proptest::collection::vec("[a-e]", 0..12),
            removals in proptest::collection::vec("[a-e]", 0..12),
        ) {
            let mut roadmap = Roadmap::new();
            for title in &additions {
                roadmap.push_module(title.clone(), String::new(), 1);
            }
            for title in &removals {
                roadmap.remove_module(title);
            }

            for (i, module) in roadmap.modules.iter().enumerate() {
                prop_assert_eq!(module.order, (i + 1) as u32);
            }
        }

        /// Property: removing a present title shrinks the list by exactly one
        #[test]
        fn test_remove_present_title_shrinks_by_one(
            titles in proptest::collection::vec("[a-c]", 1..10),
            pick in 0usize..10,
        ) {
            let mut roadmap = Roadmap::new();
            for title in &titles {
                roadmap.push_module(title.clone(), String::new(), 1);
            }
            let target = titles[pick % titles.len()].clone();
            let before = roadmap.modules.len();

            prop_assert!(roadmap.remove_module(&target));
            prop_assert_eq!(roadmap.modules.len(), before - 1);
        }
    }
}
