//! Modules - the top level of the roadmap tree

use std::time::Duration;

use crate::{Resource, Topic};

/// A major learning area inside a roadmap
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// Name of the module
    pub title: String,

    /// What the module covers
    pub description: String,

    /// 1-based position within the roadmap
    ///
    /// Kept contiguous by [`crate::Roadmap::remove_module`]; no other
    /// operation renumbers.
    pub order: u32,

    /// Planned effort in whole hours
    pub estimated_hours: u64,

    /// Topics in creation order
    pub topics: Vec<Topic>,

    /// Attached learning resources (unordered)
    pub resources: Vec<Resource>,
}

impl Module {
    /// Create a new module with no topics or resources
    pub fn new(title: String, description: String, order: u32, estimated_hours: u64) -> Self {
        Self {
            title,
            description,
            order,
            estimated_hours,
            topics: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Planned effort as a duration
    pub fn estimated_duration(&self) -> Duration {
        Duration::from_secs(self.estimated_hours * 3600)
    }

    /// Mean topic confidence truncated toward zero, 0 when there are no topics
    pub fn average_confidence(&self) -> i32 {
        if self.topics.is_empty() {
            return 0;
        }
        let sum: i64 = self
            .topics
            .iter()
            .map(|t| i64::from(t.confidence_score))
            .sum();
        (sum as f64 / self.topics.len() as f64) as i32
    }

    /// First topic whose title matches exactly
    pub fn topic(&self, title: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.title == title)
    }

    /// Mutable variant of [`Module::topic`]
    pub fn topic_mut(&mut self, title: &str) -> Option<&mut Topic> {
        self.topics.iter_mut().find(|t| t.title == title)
    }

    /// Append a topic, assigning it the next 1-based order
    pub fn push_topic(&mut self, title: String, description: String, confidence_score: i32) {
        let order = (self.topics.len() + 1) as u32;
        self.topics
            .push(Topic::new(title, description, order, confidence_score));
    }

    /// Append a resource verbatim
    pub fn push_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    /// Remove the first resource whose title matches exactly
    ///
    /// Returns false and leaves the list untouched when nothing matches.
    pub fn remove_resource(&mut self, title: &str) -> bool {
        match self.resources.iter().position(|r| r.title == title) {
            Some(pos) => {
                self.resources.remove(pos);
                true
            }
            None => false,
        }
    }
}
