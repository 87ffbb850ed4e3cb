//! Resource quality checks
//!
//! Two sweeps with different strictness: the per-module check accepts any
//! absolute URI, the roadmap-wide sweep additionally insists on http/https.
//! Neither runs at insertion time; resources are stored verbatim and judged
//! only here.

use url::Url;
use waymark_domain::{Module, Roadmap};

/// A problem found with one resource during the per-module check
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceFinding {
    /// URL is empty or whitespace
    MissingUrl {
        /// Title of the resource
        title: String,
    },

    /// URL does not parse as an absolute URI
    InvalidUrl {
        /// Title of the resource
        title: String,
        /// The offending URL, quoted back in the report
        url: String,
    },

    /// Title is empty or whitespace
    MissingTitle {
        /// The resource's URL, the only handle left to name it by
        url: String,
    },

    /// Title or description contains "placeholder"
    Placeholder {
        /// Title of the resource
        title: String,
    },
}

/// Check every resource of one module
///
/// A single resource can produce several findings; emission order is URL
/// problem first, then title, then placeholder.
pub fn audit_module_resources(module: &Module) -> Vec<ResourceFinding> {
    let mut findings = Vec::new();

    for resource in &module.resources {
        if resource.url.trim().is_empty() {
            findings.push(ResourceFinding::MissingUrl {
                title: resource.title.clone(),
            });
        } else if Url::parse(&resource.url).is_err() {
            findings.push(ResourceFinding::InvalidUrl {
                title: resource.title.clone(),
                url: resource.url.clone(),
            });
        }

        if resource.title.trim().is_empty() {
            findings.push(ResourceFinding::MissingTitle {
                url: resource.url.clone(),
            });
        }

        if is_placeholder(&resource.title) || is_placeholder(&resource.description) {
            findings.push(ResourceFinding::Placeholder {
                title: resource.title.clone(),
            });
        }
    }

    findings
}

fn is_placeholder(text: &str) -> bool {
    text.to_lowercase().contains("placeholder")
}

/// What is wrong with a URL in the roadmap-wide sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlIssue {
    /// URL is empty or whitespace
    Missing,

    /// URL does not parse as an absolute URI
    NotAbsolute,

    /// URL parses but its scheme is neither http nor https
    NonHttpScheme,
}

/// One flagged resource in the roadmap-wide sweep
#[derive(Debug, Clone, PartialEq)]
pub struct UrlFinding {
    /// Title of the owning module
    pub module_title: String,

    /// Title of the resource
    pub resource_title: String,

    /// What failed
    pub issue: UrlIssue,
}

/// Result of the roadmap-wide URL sweep
#[derive(Debug, Clone, Default)]
pub struct UrlAuditReport {
    /// Flagged resources in walk order
    pub findings: Vec<UrlFinding>,

    /// Per-module resource counts in tree order
    ///
    /// Keyed by title: a duplicate module title keeps its first position
    /// and takes the later module's count, matching the report's
    /// one-line-per-title summary.
    pub module_resource_counts: Vec<(String, usize)>,
}

impl UrlAuditReport {
    /// Whether the sweep found nothing to flag
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Sweep every resource URL in the roadmap
pub fn audit_resource_urls(roadmap: &Roadmap) -> UrlAuditReport {
    let mut report = UrlAuditReport::default();

    for module in &roadmap.modules {
        match report
            .module_resource_counts
            .iter_mut()
            .find(|(title, _)| *title == module.title)
        {
            Some(entry) => entry.1 = module.resources.len(),
            None => report
                .module_resource_counts
                .push((module.title.clone(), module.resources.len())),
        }

        for resource in &module.resources {
            let issue = if resource.url.trim().is_empty() {
                Some(UrlIssue::Missing)
            } else {
                match Url::parse(&resource.url) {
                    Err(_) => Some(UrlIssue::NotAbsolute),
                    Ok(parsed) if parsed.scheme() != "http" && parsed.scheme() != "https" => {
                        Some(UrlIssue::NonHttpScheme)
                    }
                    Ok(_) => None,
                }
            };

            if let Some(issue) = issue {
                report.findings.push(UrlFinding {
                    module_title: module.title.clone(),
                    resource_title: resource.title.clone(),
                    issue,
                });
            }
        }
    }

    report
}
