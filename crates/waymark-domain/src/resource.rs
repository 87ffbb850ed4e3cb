//! Learning resources attached to roadmap modules

use std::fmt;

/// Category of a learning resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResourceKind {
    /// Official documentation or reference material
    #[default]
    Documentation,

    /// A book or e-book
    Book,

    /// A written tutorial
    Tutorial,

    /// A video or video series
    Video,

    /// An interactive game or practice site
    Game,

    /// A standalone article or blog post
    Article,

    /// A structured course
    Course,
}

impl ResourceKind {
    /// Get the kind name exactly as it appears in resource listings
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Documentation => "Documentation",
            ResourceKind::Book => "Book",
            ResourceKind::Tutorial => "Tutorial",
            ResourceKind::Video => "Video",
            ResourceKind::Game => "Game",
            ResourceKind::Article => "Article",
            ResourceKind::Course => "Course",
        }
    }

    /// Parse a kind from a string, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "documentation" => Some(ResourceKind::Documentation),
            "book" => Some(ResourceKind::Book),
            "tutorial" => Some(ResourceKind::Tutorial),
            "video" => Some(ResourceKind::Video),
            "game" => Some(ResourceKind::Game),
            "article" => Some(ResourceKind::Article),
            "course" => Some(ResourceKind::Course),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid resource kind: {}", s))
    }
}

/// A learning resource attached to a module
///
/// Resources are unordered and carry no uniqueness constraint. The URL is
/// stored verbatim at insertion; only the audit walks judge it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    /// Human-readable title
    pub title: String,

    /// Where the resource lives
    pub url: String,

    /// Category of the material
    pub kind: ResourceKind,

    /// Publisher or platform (e.g. "MDN", "YouTube")
    pub source: String,

    /// Free-form description
    pub description: String,
}

impl Resource {
    /// Create a new resource
    pub fn new(
        title: String,
        url: String,
        kind: ResourceKind,
        source: String,
        description: String,
    ) -> Self {
        Self {
            title,
            url,
            kind,
            source,
            description,
        }
    }
}
