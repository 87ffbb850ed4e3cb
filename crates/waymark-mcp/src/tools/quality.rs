//! Quality tools - analysis, completeness validation, shortfall and URL reports

use serde::Deserialize;
use serde_json::json;
use waymark_store::RoadmapStore;

use crate::error::McpError;
use crate::protocol::ToolDefinition;

/// Parameters for validating one module's resources
#[derive(Debug, Deserialize)]
pub struct ValidateModuleResourcesParams {
    /// Title of the module to check
    pub module_title: String,
}

/// Handle waymark_get_analysis tool invocation
pub fn handle_get_analysis(store: &RoadmapStore) -> Result<String, McpError> {
    Ok(store.analysis())
}

/// Handle waymark_validate_quality tool invocation
pub fn handle_validate_quality(store: &RoadmapStore) -> Result<String, McpError> {
    Ok(store.validate_quality())
}

/// Handle waymark_topics_needing_concepts tool invocation
pub fn handle_topics_needing_concepts(store: &RoadmapStore) -> Result<String, McpError> {
    Ok(store.topics_needing_concepts())
}

/// Handle waymark_modules_needing_topics tool invocation
pub fn handle_modules_needing_topics(store: &RoadmapStore) -> Result<String, McpError> {
    Ok(store.modules_needing_topics())
}

/// Handle waymark_modules_needing_resources tool invocation
pub fn handle_modules_needing_resources(store: &RoadmapStore) -> Result<String, McpError> {
    Ok(store.modules_needing_resources())
}

/// Handle waymark_validate_module_resources tool invocation
pub fn handle_validate_module_resources(
    store: &RoadmapStore,
    params: ValidateModuleResourcesParams,
) -> Result<String, McpError> {
    Ok(store.validate_module_resources(&params.module_title))
}

/// Handle waymark_validate_resource_urls tool invocation
pub fn handle_validate_resource_urls(store: &RoadmapStore) -> Result<String, McpError> {
    Ok(store.validate_all_resource_urls())
}

/// Tool definitions for the quality tools
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "waymark_get_analysis".to_string(),
            description: "Get a statistical analysis of the roadmap (counts, hours, confidence)"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: "waymark_validate_quality".to_string(),
            description: "Validate the completeness of the roadmap and report critical gaps"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: "waymark_topics_needing_concepts".to_string(),
            description: "List topics that have fewer key concepts than required".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: "waymark_modules_needing_topics".to_string(),
            description: "List modules that have no topics yet".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: "waymark_modules_needing_resources".to_string(),
            description: "List modules that have no learning resources yet".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: "waymark_validate_module_resources".to_string(),
            description: "Check one module's resources for missing URLs, bad URLs and placeholder text".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "module_title": {"type": "string", "description": "Title of the module to check"}
                },
                "required": ["module_title"]
            }),
        },
        ToolDefinition {
            name: "waymark_validate_resource_urls".to_string(),
            description: "Validate resource URLs across the whole roadmap".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
    ]
}
