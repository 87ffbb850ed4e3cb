//! Module tools - add, update, remove, list

use serde::Deserialize;
use serde_json::json;
use waymark_store::RoadmapStore;

use crate::error::McpError;
use crate::protocol::ToolDefinition;

/// Parameters for adding a module
#[derive(Debug, Deserialize)]
pub struct AddModuleParams {
    /// Module title
    pub title: String,
    /// What the module covers
    pub description: String,
    /// Planned effort in whole hours
    pub estimated_hours: u64,
}

/// Parameters for updating a module in place
#[derive(Debug, Deserialize)]
pub struct UpdateModuleParams {
    /// Title of the module to update
    pub current_title: String,
    /// New title
    pub new_title: String,
    /// New description
    pub description: String,
    /// New planned effort in whole hours
    pub estimated_hours: u64,
}

/// Parameters for removing a module
#[derive(Debug, Deserialize)]
pub struct RemoveModuleParams {
    /// Title of the module to remove
    pub title: String,
}

/// Handle waymark_add_module tool invocation
pub fn handle_add_module(store: &RoadmapStore, params: AddModuleParams) -> Result<String, McpError> {
    Ok(store.add_module(&params.title, &params.description, params.estimated_hours))
}

/// Handle waymark_update_module tool invocation
pub fn handle_update_module(
    store: &RoadmapStore,
    params: UpdateModuleParams,
) -> Result<String, McpError> {
    Ok(store.update_module(
        &params.current_title,
        &params.new_title,
        &params.description,
        params.estimated_hours,
    ))
}

/// Handle waymark_remove_module tool invocation
pub fn handle_remove_module(
    store: &RoadmapStore,
    params: RemoveModuleParams,
) -> Result<String, McpError> {
    Ok(store.remove_module(&params.title))
}

/// Handle waymark_list_modules tool invocation
pub fn handle_list_modules(store: &RoadmapStore) -> Result<String, McpError> {
    Ok(store.all_modules())
}

/// Tool definitions for the module tools
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "waymark_add_module".to_string(),
            description: "Add a new module to the roadmap".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "title": {"type": "string", "description": "Module title"},
                    "description": {"type": "string", "description": "What the module covers"},
                    "estimated_hours": {"type": "integer", "description": "Planned effort in whole hours", "minimum": 0}
                },
                "required": ["title", "description", "estimated_hours"]
            }),
        },
        ToolDefinition {
            name: "waymark_update_module".to_string(),
            description: "Update an existing module's title, description, and estimate".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "current_title": {"type": "string", "description": "Title of the module to update"},
                    "new_title": {"type": "string", "description": "New title"},
                    "description": {"type": "string", "description": "New description"},
                    "estimated_hours": {"type": "integer", "description": "New planned effort in whole hours", "minimum": 0}
                },
                "required": ["current_title", "new_title", "description", "estimated_hours"]
            }),
        },
        ToolDefinition {
            name: "waymark_remove_module".to_string(),
            description: "Remove a module from the roadmap".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "title": {"type": "string", "description": "Title of the module to remove"}
                },
                "required": ["title"]
            }),
        },
        ToolDefinition {
            name: "waymark_list_modules".to_string(),
            description: "List all modules with their hours, topic counts, and resource counts".to_string(),
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

    fn store_with_roadmap() -> RoadmapStore {
        let store = RoadmapStore::new();
        store.initialize_roadmap("profile");
        store
    }

    #[test]
    fn test_add_module_params_deserialize() {
        let json = r#"{
            "title": "HTML Basics",
            "description": "Learn HTML",
            "estimated_hours": 20
        }"#;

        let params: AddModuleParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.title, "HTML Basics");
        assert_eq!(params.description, "Learn HTML");
        assert_eq!(params.estimated_hours, 20);
    }

    #[test]
    fn test_add_module_requires_all_fields() {
        let json = r#"{"title": "HTML Basics"}"#;
        let result: Result<AddModuleParams, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_module_lifecycle_through_handlers() {
        let store = store_with_roadmap();

        let message = handle_add_module(
            &store,
            AddModuleParams {
                title: "Basics".to_string(),
                description: "Start here".to_string(),
                estimated_hours: 20,
            },
        )
        .unwrap();
        assert_eq!(message, "Module 'Basics' added successfully");

        let message = handle_update_module(
            &store,
            UpdateModuleParams {
                current_title: "Basics".to_string(),
                new_title: "Rust Basics".to_string(),
                description: "Start here".to_string(),
                estimated_hours: 25,
            },
        )
        .unwrap();
        assert_eq!(message, "Module updated successfully");

        let message = handle_list_modules(&store).unwrap();
        assert_eq!(message, "1. Rust Basics (25h) - 0 topics, 0 resources");

        let message = handle_remove_module(
            &store,
            RemoveModuleParams {
                title: "Rust Basics".to_string(),
            },
        )
        .unwrap();
        assert_eq!(message, "Module 'Rust Basics' removed successfully");
    }
}
