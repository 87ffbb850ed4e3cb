//! Key concepts - the leaf level of the roadmap tree

/// A key concept inside a topic
///
/// Concepts receive a 1-based order at creation. There is no removal
/// operation at this level, so orders are never renumbered.
#[derive(Debug, Clone, PartialEq)]
pub struct Concept {
    /// Name of the concept
    pub title: String,

    /// Short explanation of what the concept covers
    pub description: String,

    /// 1-based position within the topic
    pub order: u32,
}

impl Concept {
    /// Create a new concept
    pub fn new(title: String, description: String, order: u32) -> Self {
        Self {
            title,
            description,
            order,
        }
    }
}
