//! Roadmap completeness checks

use waymark_domain::Roadmap;

use crate::QualityConfig;

/// Result of a whole-roadmap completeness walk
///
/// Field order mirrors emission order in the rendered report: thin-topic
/// notes are collected while walking, the three critical buckets are
/// appended after the walk.
#[derive(Debug, Clone, Default)]
pub struct QualityReport {
    /// Topics that have concepts, just fewer than the minimum, in walk order
    pub thin_topics: Vec<ConceptShortfall>,

    /// Titles of modules with no topics at all
    pub modules_without_topics: Vec<String>,

    /// Topics with zero concepts
    ///
    /// Only collected for modules that have topics; a topicless module is
    /// reported once in `modules_without_topics` instead.
    pub topics_without_concepts: Vec<TopicRef>,

    /// Titles of modules with no resources at all
    pub modules_without_resources: Vec<String>,
}

impl QualityReport {
    /// Whether the walk found nothing to flag
    pub fn passed(&self) -> bool {
        self.thin_topics.is_empty()
            && self.modules_without_topics.is_empty()
            && self.topics_without_concepts.is_empty()
            && self.modules_without_resources.is_empty()
    }
}

/// A topic with fewer concepts than the configured minimum
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptShortfall {
    /// Title of the owning module
    pub module_title: String,

    /// Title of the topic
    pub topic_title: String,

    /// How many concepts the topic currently has
    pub concept_count: usize,
}

/// A (module, topic) pair
#[derive(Debug, Clone, PartialEq)]
pub struct TopicRef {
    /// Title of the owning module
    pub module_title: String,

    /// Title of the topic
    pub topic_title: String,
}

/// The Auditor runs completeness walks against the configured thresholds
#[derive(Debug, Clone)]
pub struct Auditor {
    config: QualityConfig,
}

impl Auditor {
    /// Create a new Auditor with the given configuration
    pub fn new(config: QualityConfig) -> Self {
        Self { config }
    }

    /// Create an Auditor with default thresholds
    pub fn default_config() -> Self {
        Self::new(QualityConfig::default())
    }

    /// The configured thresholds
    pub fn config(&self) -> &QualityConfig {
        &self.config
    }

    /// Walk the whole tree and bucket every completeness gap
    pub fn validate_roadmap(&self, roadmap: &Roadmap) -> QualityReport {
        let mut report = QualityReport::default();

        for module in &roadmap.modules {
            if module.topics.is_empty() {
                report.modules_without_topics.push(module.title.clone());
            } else {
                for topic in &module.topics {
                    if topic.concepts.is_empty() {
                        report.topics_without_concepts.push(TopicRef {
                            module_title: module.title.clone(),
                            topic_title: topic.title.clone(),
                        });
                    } else if topic.concepts.len() < self.config.min_concepts {
                        report.thin_topics.push(ConceptShortfall {
                            module_title: module.title.clone(),
                            topic_title: topic.title.clone(),
                            concept_count: topic.concepts.len(),
                        });
                    }
                }
            }

            if module.resources.is_empty() {
                report.modules_without_resources.push(module.title.clone());
            }
        }

        report
    }

    /// Every topic below the concept minimum, including zero-concept ones
    pub fn topics_needing_concepts(&self, roadmap: &Roadmap) -> Vec<ConceptShortfall> {
        let mut shortfalls = Vec::new();
        for module in &roadmap.modules {
            for topic in &module.topics {
                if topic.concepts.len() < self.config.min_concepts {
                    shortfalls.push(ConceptShortfall {
                        module_title: module.title.clone(),
                        topic_title: topic.title.clone(),
                        concept_count: topic.concepts.len(),
                    });
                }
            }
        }
        shortfalls
    }

    /// Titles of modules with no topics
    pub fn modules_needing_topics(&self, roadmap: &Roadmap) -> Vec<String> {
        roadmap
            .modules
            .iter()
            .filter(|m| m.topics.is_empty())
            .map(|m| m.title.clone())
            .collect()
    }

    /// Titles of modules with no resources
    pub fn modules_needing_resources(&self, roadmap: &Roadmap) -> Vec<String> {
        roadmap
            .modules
            .iter()
            .filter(|m| m.resources.is_empty())
            .map(|m| m.title.clone())
            .collect()
    }
}
