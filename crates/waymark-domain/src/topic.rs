//! Topics - the middle level of the roadmap tree

use crate::Concept;

/// A topic inside a module
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    /// Name of the topic
    pub title: String,

    /// What the topic covers
    pub description: String,

    /// 1-based position within the module, assigned at creation and never
    /// renumbered
    pub order: u32,

    /// Learner confidence in percent
    ///
    /// Stored verbatim at creation; only [`Topic::set_confidence`] clamps.
    pub confidence_score: i32,

    /// Key concepts in creation order
    pub concepts: Vec<Concept>,
}

impl Topic {
    /// Create a new topic with no concepts
    pub fn new(title: String, description: String, order: u32, confidence_score: i32) -> Self {
        Self {
            title,
            description,
            order,
            confidence_score,
            concepts: Vec::new(),
        }
    }

    /// Append a concept, assigning it the next 1-based order
    pub fn push_concept(&mut self, title: String, description: String) {
        let order = (self.concepts.len() + 1) as u32;
        self.concepts.push(Concept::new(title, description, order));
    }

    /// Store a confidence score, clamped to [0, 100]
    pub fn set_confidence(&mut self, score: i32) {
        self.confidence_score = score.clamp(0, 100);
    }
}
