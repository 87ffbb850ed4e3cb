//! Resource tools - add, bulk ingest, remove, list

use serde::Deserialize;
use serde_json::json;
use waymark_domain::ResourceKind;
use waymark_store::RoadmapStore;

use crate::error::McpError;
use crate::protocol::ToolDefinition;

/// Parameters for attaching a resource to a module
#[derive(Debug, Deserialize)]
pub struct AddResourceParams {
    /// Title of the module to attach the resource to
    pub module_title: String,
    /// Resource title
    pub resource_title: String,
    /// Where the resource lives
    pub url: String,
    /// Resource category (e.g. "Documentation", "Video")
    pub kind: String,
    /// Publisher or platform
    pub source: String,
    /// Free-form description
    pub description: String,
}

/// Parameters for bulk-ingesting gathered resources
#[derive(Debug, Deserialize)]
pub struct AddResourcesBulkParams {
    /// Title of the module to attach the resources to
    pub module_title: String,
    /// Resource description text in the gathering pipeline's block format
    pub resources_description: String,
}

/// Parameters for removing a resource from a module
#[derive(Debug, Deserialize)]
pub struct RemoveResourceParams {
    /// Title of the module holding the resource
    pub module_title: String,
    /// Title of the resource to remove
    pub resource_title: String,
}

/// Parameters for listing a module's resources
#[derive(Debug, Deserialize)]
pub struct ListResourcesParams {
    /// Title of the module to list
    pub module_title: String,
}

/// Handle waymark_add_resource tool invocation
pub fn handle_add_resource(
    store: &RoadmapStore,
    params: AddResourceParams,
) -> Result<String, McpError> {
    let kind = params
        .kind
        .parse::<ResourceKind>()
        .map_err(McpError::InvalidRequest)?;
    Ok(store.add_resource(
        &params.module_title,
        &params.resource_title,
        &params.url,
        kind,
        &params.source,
        &params.description,
    ))
}

/// Handle waymark_add_resources_bulk tool invocation
pub fn handle_add_resources_bulk(
    store: &RoadmapStore,
    params: AddResourcesBulkParams,
) -> Result<String, McpError> {
    Ok(store.add_resources_bulk(&params.module_title, &params.resources_description))
}

/// Handle waymark_remove_resource tool invocation
pub fn handle_remove_resource(
    store: &RoadmapStore,
    params: RemoveResourceParams,
) -> Result<String, McpError> {
    Ok(store.remove_resource(&params.module_title, &params.resource_title))
}

/// Handle waymark_list_resources tool invocation
pub fn handle_list_resources(
    store: &RoadmapStore,
    params: ListResourcesParams,
) -> Result<String, McpError> {
    Ok(store.module_resources(&params.module_title))
}

/// Tool definitions for the resource tools
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "waymark_add_resource".to_string(),
            description: "Add a learning resource to a module".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "module_title": {"type": "string", "description": "Title of the module to attach the resource to"},
                    "resource_title": {"type": "string", "description": "Resource title"},
                    "url": {"type": "string", "description": "Where the resource lives"},
                    "kind": {"type": "string", "enum": ["Documentation", "Book", "Tutorial", "Video", "Game", "Article", "Course"], "description": "Resource category"},
                    "source": {"type": "string", "description": "Publisher or platform"},
                    "description": {"type": "string", "description": "Free-form description"}
                },
                "required": ["module_title", "resource_title", "url", "kind", "source", "description"]
            }),
        },
        ToolDefinition {
            name: "waymark_add_resources_bulk".to_string(),
            description: "Add a batch of gathered learning resources to a module from structured text".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "module_title": {"type": "string", "description": "Title of the module to attach the resources to (case-insensitive)"},
                    "resources_description": {"type": "string", "description": "Resource text with **RESOURCE N** blocks carrying Title/URL/Type/Source/Description fields"}
                },
                "required": ["module_title", "resources_description"]
            }),
        },
        ToolDefinition {
            name: "waymark_remove_resource".to_string(),
            description: "Remove a resource from a module".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "module_title": {"type": "string", "description": "Title of the module holding the resource"},
                    "resource_title": {"type": "string", "description": "Title of the resource to remove"}
                },
                "required": ["module_title", "resource_title"]
            }),
        },
        ToolDefinition {
            name: "waymark_list_resources".to_string(),
            description: "List the resources of a specific module".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "module_title": {"type": "string", "description": "Title of the module to list"}
                },
                "required": ["module_title"]
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_module() -> RoadmapStore {
        let store = RoadmapStore::new();
        store.initialize_roadmap("profile");
        store.add_module("Basics", "Start here", 20);
        store
    }

    #[test]
    fn test_add_resource_params_deserialize() {
        let json = r#"{
            "module_title": "Basics",
            "resource_title": "The Book",
            "url": "https://doc.rust-lang.org/book/",
            "kind": "Book",
            "source": "rust-lang.org",
            "description": "The canonical introduction"
        }"#;

        let params: AddResourceParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.resource_title, "The Book");
        assert_eq!(params.kind, "Book");
    }

    #[test]
    fn test_add_resource_parses_kind_case_insensitively() {
        let store = store_with_module();

        let message = handle_add_resource(
            &store,
            AddResourceParams {
                module_title: "Basics".to_string(),
                resource_title: "The Book".to_string(),
                url: "https://doc.rust-lang.org/book/".to_string(),
                kind: "book".to_string(),
                source: "rust-lang.org".to_string(),
                description: String::new(),
            },
        )
        .unwrap();

        assert_eq!(message, "Resource 'The Book' added to module 'Basics'");
        let roadmap = store.current_roadmap().unwrap();
        assert_eq!(roadmap.modules[0].resources[0].kind, ResourceKind::Book);
    }

    #[test]
    fn test_add_resource_rejects_unknown_kind() {
        let store = store_with_module();

        let result = handle_add_resource(
            &store,
            AddResourceParams {
                module_title: "Basics".to_string(),
                resource_title: "Feed".to_string(),
                url: "https://example.com".to_string(),
                kind: "podcast".to_string(),
                source: String::new(),
                description: String::new(),
            },
        );

        assert!(matches!(result, Err(McpError::InvalidRequest(_))));
    }

    #[test]
    fn test_bulk_ingest_through_handler() {
        let store = store_with_module();

        let message = handle_add_resources_bulk(
            &store,
            AddResourcesBulkParams {
                module_title: "Basics".to_string(),
                resources_description:
                    "**RESOURCE 1**\n- Title: Guide\n- URL: https://example.com\n- Type: Tutorial"
                        .to_string(),
            },
        )
        .unwrap();

        assert_eq!(message, "Added 1 resources to module 'Basics' successfully.");
    }

    #[test]
    fn test_remove_and_list_resources_through_handlers() {
        let store = store_with_module();
        store.add_resource("Basics", "Guide", "https://example.com", ResourceKind::Tutorial, "example", "");

        let message = handle_list_resources(
            &store,
            ListResourcesParams {
                module_title: "Basics".to_string(),
            },
        )
        .unwrap();
        assert_eq!(message, "• Guide (Tutorial) - example - https://example.com");

        let message = handle_remove_resource(
            &store,
            RemoveResourceParams {
                module_title: "Basics".to_string(),
                resource_title: "Guide".to_string(),
            },
        )
        .unwrap();
        assert_eq!(message, "Resource 'Guide' removed from module 'Basics'");
    }
}
