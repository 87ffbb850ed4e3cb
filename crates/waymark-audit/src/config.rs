//! Audit configuration

/// Thresholds for the completeness walks
#[derive(Debug, Clone)]
pub struct QualityConfig {
    /// Minimum concepts a topic needs before it stops being flagged
    pub min_concepts: usize,

    /// Upper end of the recommended concepts-per-topic range, quoted in
    /// shortfall messages
    pub recommended_max: usize,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            min_concepts: 3,
            recommended_max: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QualityConfig::default();
        assert_eq!(config.min_concepts, 3);
        assert_eq!(config.recommended_max, 5);
    }
}
