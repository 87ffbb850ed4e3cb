//! MCP tool implementations

mod modules;
mod quality;
mod resources;
mod roadmap;
mod topics;

pub use modules::{
    handle_add_module, handle_list_modules, handle_remove_module, handle_update_module,
    AddModuleParams, RemoveModuleParams, UpdateModuleParams,
};
pub use quality::{
    handle_get_analysis, handle_modules_needing_resources, handle_modules_needing_topics,
    handle_topics_needing_concepts, handle_validate_module_resources, handle_validate_quality,
    handle_validate_resource_urls, ValidateModuleResourcesParams,
};
pub use resources::{
    handle_add_resource, handle_add_resources_bulk, handle_list_resources, handle_remove_resource,
    AddResourceParams, AddResourcesBulkParams, ListResourcesParams, RemoveResourceParams,
};
pub use roadmap::{
    handle_get_summary, handle_initialize_roadmap, handle_update_status, InitializeRoadmapParams,
    UpdateStatusParams,
};
pub use topics::{
    handle_add_concept, handle_add_topic, handle_list_concepts, handle_list_topics,
    handle_update_topic_confidence, AddConceptParams, AddTopicParams, ListConceptsParams,
    ListTopicsParams, UpdateTopicConfidenceParams,
};

use crate::protocol::ToolDefinition;

/// Definitions of every tool the server exposes, in listing order
pub fn all_definitions() -> Vec<ToolDefinition> {
    let mut defs = roadmap::definitions();
    defs.extend(modules::definitions());
    defs.extend(topics::definitions());
    defs.extend(resources::definitions());
    defs.extend(quality::definitions());
    defs
}
