//! Topic and concept tools

use serde::Deserialize;
use serde_json::json;
use waymark_store::RoadmapStore;

use crate::error::McpError;
use crate::protocol::ToolDefinition;

/// Parameters for adding a topic to a module
#[derive(Debug, Deserialize)]
pub struct AddTopicParams {
    /// Title of the module to add the topic to
    pub module_title: String,
    /// Topic title
    pub topic_title: String,
    /// What the topic covers
    pub topic_description: String,
    /// Initial learner confidence in percent (default: 0)
    #[serde(default)]
    pub confidence_score: i32,
}

/// Parameters for updating a topic's confidence score
#[derive(Debug, Deserialize)]
pub struct UpdateTopicConfidenceParams {
    /// Title of the module holding the topic
    pub module_title: String,
    /// Title of the topic to update
    pub topic_title: String,
    /// New confidence in percent; values outside [0, 100] are clamped
    pub confidence_score: i32,
}

/// Parameters for listing a module's topics
#[derive(Debug, Deserialize)]
pub struct ListTopicsParams {
    /// Title of the module to list
    pub module_title: String,
}

/// Parameters for adding a concept to a topic
#[derive(Debug, Deserialize)]
pub struct AddConceptParams {
    /// Title of the module holding the topic
    pub module_title: String,
    /// Title of the topic to add the concept to
    pub topic_title: String,
    /// Concept title
    pub concept_title: String,
    /// Short explanation of the concept
    pub concept_description: String,
}

/// Parameters for listing a topic's concepts
#[derive(Debug, Deserialize)]
pub struct ListConceptsParams {
    /// Title of the module holding the topic
    pub module_title: String,
    /// Title of the topic to list
    pub topic_title: String,
}

/// Handle waymark_add_topic tool invocation
pub fn handle_add_topic(store: &RoadmapStore, params: AddTopicParams) -> Result<String, McpError> {
    Ok(store.add_topic(
        &params.module_title,
        &params.topic_title,
        &params.topic_description,
        params.confidence_score,
    ))
}

/// Handle waymark_update_topic_confidence tool invocation
pub fn handle_update_topic_confidence(
    store: &RoadmapStore,
    params: UpdateTopicConfidenceParams,
) -> Result<String, McpError> {
    Ok(store.update_topic_confidence(
        &params.module_title,
        &params.topic_title,
        params.confidence_score,
    ))
}

/// Handle waymark_list_topics tool invocation
pub fn handle_list_topics(store: &RoadmapStore, params: ListTopicsParams) -> Result<String, McpError> {
    Ok(store.module_topics(&params.module_title))
}

/// Handle waymark_add_concept tool invocation
pub fn handle_add_concept(store: &RoadmapStore, params: AddConceptParams) -> Result<String, McpError> {
    Ok(store.add_concept(
        &params.module_title,
        &params.topic_title,
        &params.concept_title,
        &params.concept_description,
    ))
}

/// Handle waymark_list_concepts tool invocation
pub fn handle_list_concepts(
    store: &RoadmapStore,
    params: ListConceptsParams,
) -> Result<String, McpError> {
    Ok(store.topic_concepts(&params.module_title, &params.topic_title))
}

/// Tool definitions for the topic and concept tools
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "waymark_add_topic".to_string(),
            description: "Add a topic to a specific module".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "module_title": {"type": "string", "description": "Title of the module to add the topic to"},
                    "topic_title": {"type": "string", "description": "Topic title"},
                    "topic_description": {"type": "string", "description": "What the topic covers"},
                    "confidence_score": {"type": "integer", "description": "Initial learner confidence in percent (default: 0)", "default": 0}
                },
                "required": ["module_title", "topic_title", "topic_description"]
            }),
        },
        ToolDefinition {
            name: "waymark_update_topic_confidence".to_string(),
            description: "Update a topic's learner confidence score".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "module_title": {"type": "string", "description": "Title of the module holding the topic"},
                    "topic_title": {"type": "string", "description": "Title of the topic to update"},
                    "confidence_score": {"type": "integer", "description": "New confidence in percent (0-100)"}
                },
                "required": ["module_title", "topic_title", "confidence_score"]
            }),
        },
        ToolDefinition {
            name: "waymark_list_topics".to_string(),
            description: "List the topics of a specific module".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "module_title": {"type": "string", "description": "Title of the module to list"}
                },
                "required": ["module_title"]
            }),
        },
        ToolDefinition {
            name: "waymark_add_concept".to_string(),
            description: "Add a key concept to a specific topic".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "module_title": {"type": "string", "description": "Title of the module holding the topic"},
                    "topic_title": {"type": "string", "description": "Title of the topic to add the concept to"},
                    "concept_title": {"type": "string", "description": "Concept title"},
                    "concept_description": {"type": "string", "description": "Short explanation of the concept"}
                },
                "required": ["module_title", "topic_title", "concept_title", "concept_description"]
            }),
        },
        ToolDefinition {
            name: "waymark_list_concepts".to_string(),
            description: "List the key concepts of a specific topic".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "module_title": {"type": "string", "description": "Title of the module holding the topic"},
                    "topic_title": {"type": "string", "description": "Title of the topic to list"}
                },
                "required": ["module_title", "topic_title"]
            }),
        },
    ]
}
