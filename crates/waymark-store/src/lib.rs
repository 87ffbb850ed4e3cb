//! Waymark Store Layer
//!
//! The RoadmapStore owns the one mutable roadmap and exposes the operation
//! catalog the agent pipeline drives: title-keyed mutations, listings, and
//! the analysis/validation readouts. Every operation returns a
//! human-readable string and never fails for expected conditions; a missing
//! roadmap, a missed title, or an out-of-range score all come back as
//! messages the calling agent can act on.
//!
//! Concurrency is one coarse lock around the whole tree. Operations take it
//! once for their whole body, so readers never observe a half-applied
//! mutation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod resource_blocks;

use std::sync::{Arc, RwLock};

use tracing::{debug, info, warn};
use waymark_audit::{Auditor, QualityConfig, ResourceFinding, RoadmapAnalysis, UrlIssue};
use waymark_domain::{Module, Resource, ResourceKind, Roadmap, RoadmapStatus, Topic};

use crate::resource_blocks::parse_resource_blocks;

const NO_ROADMAP: &str = "No roadmap available";
const NO_ROADMAP_TO_UPDATE: &str = "No roadmap available to update";
const NO_ROADMAP_EXISTS: &str = "No roadmap exists.";

/// The store for the one current roadmap
///
/// Cheap to clone; clones share the same tree. The store never requires a
/// persistence collaborator: wiring an archive in and out goes through
/// [`RoadmapStore::set_roadmap`] and [`RoadmapStore::current_roadmap`].
#[derive(Clone)]
pub struct RoadmapStore {
    current: Arc<RwLock<Option<Roadmap>>>,
    auditor: Auditor,
}

impl RoadmapStore {
    /// Create an empty store with default audit thresholds
    ///
    /// A fresh store holds no roadmap; every operation answers its
    /// "no roadmap" message until [`RoadmapStore::initialize_roadmap`] runs.
    pub fn new() -> Self {
        Self::with_config(QualityConfig::default())
    }

    /// Create an empty store with custom audit thresholds
    pub fn with_config(config: QualityConfig) -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
            auditor: Auditor::new(config),
        }
    }

    /// Replace the current roadmap wholesale
    ///
    /// Used when loading from an archive; does not refresh the modification
    /// timestamp, the loaded tree keeps its own history.
    pub fn set_roadmap(&self, roadmap: Roadmap) {
        let mut current = self.current.write().unwrap();
        *current = Some(roadmap);
    }

    /// Snapshot of the current roadmap, if any
    pub fn current_roadmap(&self) -> Option<Roadmap> {
        self.current.read().unwrap().clone()
    }

    /// Drop the current roadmap
    pub fn clear_roadmap(&self) {
        let mut current = self.current.write().unwrap();
        *current = None;
    }
}

impl Default for RoadmapStore {
    fn default() -> Self {
        Self::new()
    }
}

// Roadmap lifecycle
impl RoadmapStore {
    /// Replace whatever is held with a fresh empty Draft roadmap
    ///
    /// The profile summary is accepted for interface compatibility with the
    /// profiling stage and is not stored.
    pub fn initialize_roadmap(&self, _profile_summary: &str) -> String {
        let roadmap = Roadmap::new();
        info!(roadmap_id = %roadmap.id, "roadmap initialized");

        let mut current = self.current.write().unwrap();
        *current = Some(roadmap);
        "Roadmap initialized successfully".to_string()
    }

    /// Set the lifecycle status
    pub fn update_status(&self, status: RoadmapStatus) -> String {
        let mut current = self.current.write().unwrap();
        let Some(roadmap) = current.as_mut() else {
            return NO_ROADMAP_TO_UPDATE.to_string();
        };

        roadmap.status = status;
        roadmap.touch();
        format!("Roadmap status updated to {}", status)
    }

    /// One-line status and count summary
    pub fn summary(&self) -> String {
        let current = self.current.read().unwrap();
        let Some(roadmap) = current.as_ref() else {
            return NO_ROADMAP.to_string();
        };

        format!(
            "Roadmap Status: {}, Modules: {}, Topics: {}, Resources: {}, Created: {}",
            roadmap.status,
            roadmap.modules.len(),
            roadmap.total_topics(),
            roadmap.total_resources(),
            roadmap.created_at.format("%Y-%m-%d")
        )
    }
}

// Module management
impl RoadmapStore {
    /// Append a module to the roadmap
    pub fn add_module(&self, title: &str, description: &str, estimated_hours: u64) -> String {
        let mut current = self.current.write().unwrap();
        let Some(roadmap) = current.as_mut() else {
            return NO_ROADMAP.to_string();
        };

        roadmap.push_module(title.to_string(), description.to_string(), estimated_hours);
        roadmap.touch();
        debug!(module = title, "module added");
        format!("Module '{}' added successfully", title)
    }

    /// Overwrite a module's title, description, and estimate in place
    ///
    /// Order, topics, and resources are untouched.
    pub fn update_module(
        &self,
        current_title: &str,
        new_title: &str,
        description: &str,
        estimated_hours: u64,
    ) -> String {
        let mut current = self.current.write().unwrap();
        let Some(roadmap) = current.as_mut() else {
            return NO_ROADMAP.to_string();
        };
        let Some(module) = roadmap.module_mut(current_title) else {
            return format!("Module '{}' not found", current_title);
        };

        module.title = new_title.to_string();
        module.description = description.to_string();
        module.estimated_hours = estimated_hours;
        roadmap.touch();
        "Module updated successfully".to_string()
    }

    /// Remove a module and renumber the remaining ones
    pub fn remove_module(&self, title: &str) -> String {
        let mut current = self.current.write().unwrap();
        let Some(roadmap) = current.as_mut() else {
            return NO_ROADMAP.to_string();
        };

        if !roadmap.remove_module(title) {
            return format!("Module '{}' not found", title);
        }
        roadmap.touch();
        debug!(module = title, "module removed");
        format!("Module '{}' removed successfully", title)
    }

    /// One line per module, in order
    pub fn all_modules(&self) -> String {
        let current = self.current.read().unwrap();
        let Some(roadmap) = current.as_ref() else {
            return NO_ROADMAP.to_string();
        };
        if roadmap.modules.is_empty() {
            return "No modules in roadmap".to_string();
        }

        let mut ordered: Vec<&Module> = roadmap.modules.iter().collect();
        ordered.sort_by_key(|m| m.order);
        let lines: Vec<String> = ordered
            .iter()
            .map(|m| {
                format!(
                    "{}. {} ({}h) - {} topics, {} resources",
                    m.order,
                    m.title,
                    m.estimated_hours,
                    m.topics.len(),
                    m.resources.len()
                )
            })
            .collect();
        lines.join("\n")
    }
}

// Topic and concept management
impl RoadmapStore {
    /// Append a topic to a module
    ///
    /// The confidence score is stored verbatim here; clamping is an
    /// update-time rule.
    pub fn add_topic(
        &self,
        module_title: &str,
        topic_title: &str,
        topic_description: &str,
        confidence_score: i32,
    ) -> String {
        let mut current = self.current.write().unwrap();
        let Some(roadmap) = current.as_mut() else {
            return NO_ROADMAP.to_string();
        };
        let Some(module) = roadmap.module_mut(module_title) else {
            return format!("Module '{}' not found", module_title);
        };

        module.push_topic(
            topic_title.to_string(),
            topic_description.to_string(),
            confidence_score,
        );
        roadmap.touch();
        format!("Topic '{}' added to module '{}'", topic_title, module_title)
    }

    /// Set a topic's confidence, clamped to [0, 100]
    ///
    /// The message echoes the requested value even when the stored value
    /// was clamped; callers see what they asked for.
    pub fn update_topic_confidence(
        &self,
        module_title: &str,
        topic_title: &str,
        confidence_score: i32,
    ) -> String {
        let mut current = self.current.write().unwrap();
        let Some(roadmap) = current.as_mut() else {
            return NO_ROADMAP.to_string();
        };
        let Some(module) = roadmap.module_mut(module_title) else {
            return format!("Module '{}' not found", module_title);
        };
        let Some(topic) = module.topic_mut(topic_title) else {
            return format!(
                "Topic '{}' not found in module '{}'",
                topic_title, module_title
            );
        };

        topic.set_confidence(confidence_score);
        roadmap.touch();
        format!(
            "Topic '{}' confidence updated to {}",
            topic_title, confidence_score
        )
    }

    /// One line per topic of a module, in order
    pub fn module_topics(&self, module_title: &str) -> String {
        let current = self.current.read().unwrap();
        let Some(roadmap) = current.as_ref() else {
            return NO_ROADMAP.to_string();
        };
        let Some(module) = roadmap.module(module_title) else {
            return format!("Module '{}' not found", module_title);
        };
        if module.topics.is_empty() {
            return format!("No topics in module '{}'", module_title);
        }

        let mut ordered: Vec<&Topic> = module.topics.iter().collect();
        ordered.sort_by_key(|t| t.order);
        let lines: Vec<String> = ordered
            .iter()
            .map(|t| {
                format!(
                    "{}. {} (Confidence: {}%) - {} concepts",
                    t.order,
                    t.title,
                    t.confidence_score,
                    t.concepts.len()
                )
            })
            .collect();
        lines.join("\n")
    }

    /// Append a concept to a topic
    pub fn add_concept(
        &self,
        module_title: &str,
        topic_title: &str,
        concept_title: &str,
        concept_description: &str,
    ) -> String {
        let mut current = self.current.write().unwrap();
        let Some(roadmap) = current.as_mut() else {
            return NO_ROADMAP.to_string();
        };
        let Some(module) = roadmap.module_mut(module_title) else {
            return format!("Module '{}' not found", module_title);
        };
        let Some(topic) = module.topic_mut(topic_title) else {
            return format!(
                "Topic '{}' not found in module '{}'",
                topic_title, module_title
            );
        };

        topic.push_concept(concept_title.to_string(), concept_description.to_string());
        roadmap.touch();
        format!("Concept '{}' added to topic '{}'", concept_title, topic_title)
    }

    /// One line per concept of a topic, in order
    pub fn topic_concepts(&self, module_title: &str, topic_title: &str) -> String {
        let current = self.current.read().unwrap();
        let Some(roadmap) = current.as_ref() else {
            return NO_ROADMAP.to_string();
        };
        let Some(module) = roadmap.module(module_title) else {
            return format!("Module '{}' not found", module_title);
        };
        let Some(topic) = module.topic(topic_title) else {
            return format!(
                "Topic '{}' not found in module '{}'",
                topic_title, module_title
            );
        };
        if topic.concepts.is_empty() {
            return format!("No concepts in topic '{}'", topic_title);
        }

        let mut ordered: Vec<_> = topic.concepts.iter().collect();
        ordered.sort_by_key(|c| c.order);
        let lines: Vec<String> = ordered
            .iter()
            .map(|c| format!("{}. {}: {}", c.order, c.title, c.description))
            .collect();
        lines.join("\n")
    }
}

// Resource management
impl RoadmapStore {
    /// Attach a resource to a module, stored verbatim
    ///
    /// No URL validation happens here; the audit readouts judge URLs.
    pub fn add_resource(
        &self,
        module_title: &str,
        resource_title: &str,
        url: &str,
        kind: ResourceKind,
        source: &str,
        description: &str,
    ) -> String {
        let mut current = self.current.write().unwrap();
        let Some(roadmap) = current.as_mut() else {
            return NO_ROADMAP.to_string();
        };
        let Some(module) = roadmap.module_mut(module_title) else {
            return format!("Module '{}' not found", module_title);
        };

        module.push_resource(Resource::new(
            resource_title.to_string(),
            url.to_string(),
            kind,
            source.to_string(),
            description.to_string(),
        ));
        roadmap.touch();
        format!(
            "Resource '{}' added to module '{}'",
            resource_title, module_title
        )
    }

    /// One bullet per resource of a module, in insertion order
    pub fn module_resources(&self, module_title: &str) -> String {
        let current = self.current.read().unwrap();
        let Some(roadmap) = current.as_ref() else {
            return NO_ROADMAP.to_string();
        };
        let Some(module) = roadmap.module(module_title) else {
            return format!("Module '{}' not found", module_title);
        };
        if module.resources.is_empty() {
            return format!("No resources in module '{}'", module_title);
        }

        let lines: Vec<String> = module
            .resources
            .iter()
            .map(|r| format!("• {} ({}) - {} - {}", r.title, r.kind, r.source, r.url))
            .collect();
        lines.join("\n")
    }

    /// Remove the first resource with the given title from a module
    pub fn remove_resource(&self, module_title: &str, resource_title: &str) -> String {
        let mut current = self.current.write().unwrap();
        let Some(roadmap) = current.as_mut() else {
            return NO_ROADMAP.to_string();
        };
        let Some(module) = roadmap.module_mut(module_title) else {
            return format!("Module '{}' not found", module_title);
        };

        if !module.remove_resource(resource_title) {
            return format!(
                "Resource '{}' not found in module '{}'",
                resource_title, module_title
            );
        }
        roadmap.touch();
        format!(
            "Resource '{}' removed from module '{}'",
            resource_title, module_title
        )
    }

    /// Ingest a batch of resources in the gathering pipeline's block format
    ///
    /// The one lookup in the catalog that matches module titles
    /// case-insensitively, because the upstream agent echoes titles back
    /// with its own casing. Unparseable text degrades to a single
    /// general-description resource rather than being dropped.
    pub fn add_resources_bulk(&self, module_title: &str, resources_text: &str) -> String {
        let mut current = self.current.write().unwrap();
        let Some(roadmap) = current.as_mut() else {
            return "No roadmap exists. Please initialize the roadmap first.".to_string();
        };
        let Some(module) = roadmap
            .modules
            .iter_mut()
            .find(|m| m.title.eq_ignore_ascii_case(module_title))
        else {
            return format!("Module '{}' not found.", module_title);
        };

        let parsed = parse_resource_blocks(resources_text);
        let message = if parsed.is_empty() {
            warn!(
                module = module_title,
                "no resource blocks parsed, storing text as a general resource"
            );
            module.push_resource(Resource::new(
                format!("Resources for {}", module_title),
                String::new(),
                ResourceKind::Article,
                String::new(),
                resources_text.to_string(),
            ));
            format!(
                "Added general resource description to module '{}' successfully.",
                module_title
            )
        } else {
            let count = parsed.len();
            for resource in parsed {
                module.push_resource(resource);
            }
            debug!(module = module_title, count, "resource blocks ingested");
            format!(
                "Added {} resources to module '{}' successfully.",
                count, module_title
            )
        };

        roadmap.touch();
        message
    }
}

// Analysis and validation
impl RoadmapStore {
    /// Multi-line statistics readout
    pub fn analysis(&self) -> String {
        let current = self.current.read().unwrap();
        let Some(roadmap) = current.as_ref() else {
            return NO_ROADMAP.to_string();
        };
        if roadmap.modules.is_empty() {
            return "Roadmap is empty - no modules available".to_string();
        }

        let analysis = RoadmapAnalysis::compute(roadmap);
        format!(
            "Roadmap Analysis:\n- Status: {}\n- Total Modules: {}\n- Total Topics: {}\n- Total Concepts: {}\n- Total Resources: {}\n- Total Estimated Duration: {} hours\n- Average Confidence Score: {:.1}%\n- Created: {}\n- Last Modified: {}",
            analysis.status,
            analysis.total_modules,
            analysis.total_topics,
            analysis.total_concepts,
            analysis.total_resources,
            analysis.total_estimated_hours,
            analysis.average_confidence,
            analysis.created_at.format("%Y-%m-%d %H:%M"),
            analysis.last_modified_at.format("%Y-%m-%d %H:%M")
        )
    }

    /// Full completeness report over the whole tree
    pub fn validate_quality(&self) -> String {
        let current = self.current.read().unwrap();
        let Some(roadmap) = current.as_ref() else {
            return "No roadmap exists to validate.".to_string();
        };

        let report = self.auditor.validate_roadmap(roadmap);
        if report.passed() {
            return "✅ Roadmap validation passed: All modules have topics, all topics have appropriate key concepts, and all modules have resources.".to_string();
        }

        let config = self.auditor.config();
        let mut issues: Vec<String> = Vec::new();
        for thin in &report.thin_topics {
            issues.push(format!(
                "Module '{}' > Topic '{}' has only {} key concepts (should have {}-{})",
                thin.module_title,
                thin.topic_title,
                thin.concept_count,
                config.min_concepts,
                config.recommended_max
            ));
        }
        if !report.modules_without_topics.is_empty() {
            issues.push("CRITICAL: Modules without any topics:".to_string());
            issues.extend(
                report
                    .modules_without_topics
                    .iter()
                    .map(|m| format!("Module '{}'", m)),
            );
        }
        if !report.topics_without_concepts.is_empty() {
            issues.push("CRITICAL: Topics without any key concepts:".to_string());
            issues.extend(
                report
                    .topics_without_concepts
                    .iter()
                    .map(|t| format!("Module '{}' > Topic '{}'", t.module_title, t.topic_title)),
            );
        }
        if !report.modules_without_resources.is_empty() {
            issues.push("CRITICAL: Modules without any resources:".to_string());
            issues.extend(
                report
                    .modules_without_resources
                    .iter()
                    .map(|m| format!("Module '{}'", m)),
            );
        }

        format!("❌ Roadmap validation issues found:\n{}", issues.join("\n"))
    }

    /// Topics below the concept minimum, one per line
    pub fn topics_needing_concepts(&self) -> String {
        let current = self.current.read().unwrap();
        let Some(roadmap) = current.as_ref() else {
            return NO_ROADMAP_EXISTS.to_string();
        };

        let shortfalls = self.auditor.topics_needing_concepts(roadmap);
        if shortfalls.is_empty() {
            return "✅ All topics have sufficient key concepts.".to_string();
        }

        let config = self.auditor.config();
        let lines: Vec<String> = shortfalls
            .iter()
            .map(|s| {
                format!(
                    "Module: '{}' | Topic: '{}' | Current Concepts: {}",
                    s.module_title, s.topic_title, s.concept_count
                )
            })
            .collect();
        format!(
            "Topics needing key concepts (should have {}-{} each):\n{}",
            config.min_concepts,
            config.recommended_max,
            lines.join("\n")
        )
    }

    /// Modules with no topics, one per line
    pub fn modules_needing_topics(&self) -> String {
        let current = self.current.read().unwrap();
        let Some(roadmap) = current.as_ref() else {
            return NO_ROADMAP_EXISTS.to_string();
        };

        let titles = self.auditor.modules_needing_topics(roadmap);
        if titles.is_empty() {
            return "✅ All modules have topics.".to_string();
        }

        let lines: Vec<String> = titles
            .iter()
            .map(|m| format!("Module: '{}' | Current Topics: 0", m))
            .collect();
        format!("Modules needing topics:\n{}", lines.join("\n"))
    }

    /// Modules with no resources, one per line
    pub fn modules_needing_resources(&self) -> String {
        let current = self.current.read().unwrap();
        let Some(roadmap) = current.as_ref() else {
            return NO_ROADMAP_EXISTS.to_string();
        };

        let titles = self.auditor.modules_needing_resources(roadmap);
        if titles.is_empty() {
            return "✅ All modules have resources.".to_string();
        }

        let lines: Vec<String> = titles
            .iter()
            .map(|m| format!("Module: '{}' | Current Resources: 0", m))
            .collect();
        format!("Modules needing resources:\n{}", lines.join("\n"))
    }

    /// Per-resource quality findings for one module
    pub fn validate_module_resources(&self, module_title: &str) -> String {
        let current = self.current.read().unwrap();
        let Some(roadmap) = current.as_ref() else {
            return NO_ROADMAP.to_string();
        };
        let Some(module) = roadmap.module(module_title) else {
            return format!("Module '{}' not found", module_title);
        };
        if module.resources.is_empty() {
            return format!("Module '{}' has no resources to validate", module_title);
        }

        let findings = waymark_audit::audit_module_resources(module);
        if findings.is_empty() {
            return format!(
                "✅ All {} resources in module '{}' have proper URLs and titles",
                module.resources.len(),
                module_title
            );
        }

        let lines: Vec<String> = findings
            .iter()
            .map(|finding| match finding {
                ResourceFinding::MissingUrl { title } => {
                    format!("Resource '{}' is missing URL", title)
                }
                ResourceFinding::InvalidUrl { title, url } => {
                    format!("Resource '{}' has invalid URL: {}", title, url)
                }
                ResourceFinding::MissingTitle { url } => {
                    format!("Resource with URL '{}' is missing title", url)
                }
                ResourceFinding::Placeholder { title } => {
                    format!("Resource '{}' appears to be a placeholder", title)
                }
            })
            .collect();
        format!(
            "❌ Resource quality issues in module '{}':\n{}",
            module_title,
            lines.join("\n")
        )
    }

    /// Roadmap-wide URL sweep with a per-module resource count summary
    pub fn validate_all_resource_urls(&self) -> String {
        let current = self.current.read().unwrap();
        let Some(roadmap) = current.as_ref() else {
            return NO_ROADMAP.to_string();
        };

        let report = waymark_audit::audit_resource_urls(roadmap);
        let summary: Vec<String> = report
            .module_resource_counts
            .iter()
            .map(|(title, count)| format!("- {}: {} resources", title, count))
            .collect();
        let summary = summary.join("\n");

        if report.passed() {
            return format!(
                "✅ All resources have valid URLs\n\nResource Summary:\n{}",
                summary
            );
        }

        let lines: Vec<String> = report
            .findings
            .iter()
            .map(|finding| {
                let problem = match finding.issue {
                    UrlIssue::Missing => "Missing URL",
                    UrlIssue::NotAbsolute => "Invalid URL format",
                    UrlIssue::NonHttpScheme => "URL must use HTTP/HTTPS",
                };
                format!(
                    "Module '{}' - Resource '{}': {}",
                    finding.module_title, finding.resource_title, problem
                )
            })
            .collect();
        format!(
            "❌ Resource URL validation issues:\n{}\n\nResource Summary:\n{}",
            lines.join("\n"),
            summary
        )
    }
}
