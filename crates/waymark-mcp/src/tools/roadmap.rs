//! Roadmap lifecycle tools - initialize, status, summary

use serde::Deserialize;
use serde_json::json;
use waymark_domain::RoadmapStatus;
use waymark_store::RoadmapStore;

use crate::error::McpError;
use crate::protocol::ToolDefinition;

/// Parameters for initializing a roadmap
#[derive(Debug, Deserialize)]
pub struct InitializeRoadmapParams {
    /// Summary of the learner profile the roadmap is being built for
    pub profile_summary: String,
}

/// Parameters for updating the roadmap status
#[derive(Debug, Deserialize)]
pub struct UpdateStatusParams {
    /// New lifecycle status (e.g. "Draft", "InProgress", "Completed")
    pub status: String,
}

/// Handle waymark_initialize_roadmap tool invocation
pub fn handle_initialize_roadmap(
    store: &RoadmapStore,
    params: InitializeRoadmapParams,
) -> Result<String, McpError> {
    Ok(store.initialize_roadmap(&params.profile_summary))
}

/// Handle waymark_update_status tool invocation
///
/// The status string is parsed leniently; `InProgress`, `in_progress`, and
/// `IN-PROGRESS` all resolve to the same stage.
pub fn handle_update_status(
    store: &RoadmapStore,
    params: UpdateStatusParams,
) -> Result<String, McpError> {
    let status = params
        .status
        .parse::<RoadmapStatus>()
        .map_err(McpError::InvalidRequest)?;
    Ok(store.update_status(status))
}

/// Handle waymark_get_summary tool invocation
pub fn handle_get_summary(store: &RoadmapStore) -> Result<String, McpError> {
    Ok(store.summary())
}

/// Tool definitions for the roadmap lifecycle tools
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "waymark_initialize_roadmap".to_string(),
            description: "Initialize a new empty roadmap, replacing any existing one".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "profile_summary": {"type": "string", "description": "Summary of the learner profile the roadmap is for"}
                },
                "required": ["profile_summary"]
            }),
        },
        ToolDefinition {
            name: "waymark_update_status".to_string(),
            description: "Update the roadmap lifecycle status".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "status": {"type": "string", "enum": ["Draft", "AwaitingFeedback", "Approved", "Active", "InProgress", "Completed"], "description": "New status"}
                },
                "required": ["status"]
            }),
        },
        ToolDefinition {
            name: "waymark_get_summary".to_string(),
            description: "Get a one-line roadmap summary with module count and status".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_params_deserialize() {
        let json = r#"{"profile_summary": "Web developer, new to Rust"}"#;
        let params: InitializeRoadmapParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.profile_summary, "Web developer, new to Rust");
    }

    #[test]
    fn test_initialize_creates_a_roadmap() {
        let store = RoadmapStore::new();
        let message = handle_initialize_roadmap(
            &store,
            InitializeRoadmapParams {
                profile_summary: "profile".to_string(),
            },
        )
        .unwrap();

        assert_eq!(message, "Roadmap initialized successfully");
        assert!(store.current_roadmap().is_some());
    }

    #[test]
    fn test_update_status_parses_leniently() {
        let store = RoadmapStore::new();
        store.initialize_roadmap("profile");

        let message = handle_update_status(
            &store,
            UpdateStatusParams {
                status: "in_progress".to_string(),
            },
        )
        .unwrap();

        assert_eq!(message, "Roadmap status updated to InProgress");
    }

    #[test]
    fn test_update_status_rejects_unknown_status() {
        let store = RoadmapStore::new();
        store.initialize_roadmap("profile");

        let result = handle_update_status(
            &store,
            UpdateStatusParams {
                status: "published".to_string(),
            },
        );

        assert!(matches!(result, Err(McpError::InvalidRequest(_))));
    }

    #[test]
    fn test_summary_of_missing_roadmap() {
        let store = RoadmapStore::new();
        assert_eq!(handle_get_summary(&store).unwrap(), "No roadmap available");
    }
}
