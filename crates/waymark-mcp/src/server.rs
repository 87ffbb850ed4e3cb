//! MCP server implementation

use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use tracing::{debug, error, info};
use waymark_archive::SqliteArchive;
use waymark_domain::RoadmapArchive;
use waymark_store::RoadmapStore;

use crate::config::ServerConfig;
use crate::error::McpError;
use crate::protocol::*;
use crate::tools;

/// MCP Server
///
/// Handles Model Context Protocol requests via stdio transport. The roadmap
/// lives in an in-memory [`RoadmapStore`]; when an archive is configured the
/// current roadmap is reloaded on startup and written back after every
/// mutating tool call.
pub struct McpServer {
    store: RoadmapStore,
    archive: Option<SqliteArchive>,
    autosave: bool,
}

impl McpServer {
    /// Create a new MCP server
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration (archive path, autosave)
    ///
    /// # Returns
    ///
    /// Result containing the server or an error
    pub fn new(config: ServerConfig) -> Result<Self, McpError> {
        let store = RoadmapStore::new();

        let archive = match &config.archive_path {
            Some(path) => {
                let archive = SqliteArchive::new(path)?;
                if let Some(roadmap) = archive.load()? {
                    info!(
                        "Restored roadmap with {} modules from {}",
                        roadmap.modules.len(),
                        path.display()
                    );
                    store.set_roadmap(roadmap);
                }
                Some(archive)
            }
            None => None,
        };

        Ok(Self {
            store,
            archive,
            autosave: config.autosave,
        })
    }

    /// Run the MCP server (stdio transport)
    ///
    /// Reads JSON-RPC requests from stdin and writes responses to stdout.
    pub fn run(&mut self) -> Result<(), McpError> {
        info!("MCP server started");

        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin);
        let mut stdout = std::io::stdout();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            debug!("Received request: {}", line);

            if let Some(response) = self.handle_line(&line) {
                self.write_response(&mut stdout, &response)?;
            }
        }

        info!("MCP server stopped");
        Ok(())
    }

    /// Handle one JSON-RPC line
    ///
    /// Returns `None` for notifications (requests without an id), which per
    /// JSON-RPC receive no response.
    pub fn handle_line(&mut self, line: &str) -> Option<Value> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse request: {}", e);
                let error_response =
                    JsonRpcError::new(None, -32700, format!("Parse error: {}", e));
                return Some(serde_json::to_value(&error_response).unwrap());
            }
        };

        if request.id.is_none() {
            debug!("Ignoring notification: {}", request.method);
            return None;
        }

        Some(self.handle_request(request))
    }

    /// Handle a JSON-RPC request
    fn handle_request(&mut self, request: JsonRpcRequest) -> Value {
        let id = request.id.clone();

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            _ => {
                let error = JsonRpcError::new(
                    id,
                    -32601,
                    format!("Method not found: {}", request.method),
                );
                serde_json::to_value(error).unwrap()
            }
        }
    }

    /// Handle initialize request
    fn handle_initialize(&self, id: Option<Value>) -> Value {
        let response = InitializeResponse {
            protocol_version: "2024-11-05".to_string(),
            server_info: ServerInfo {
                name: "waymark-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: Capabilities {
                tools: ToolsCapability { supported: true },
            },
        };

        let json_response = JsonRpcResponse::new(id, serde_json::to_value(response).unwrap());
        serde_json::to_value(json_response).unwrap()
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, id: Option<Value>) -> Value {
        let response = ToolListResponse {
            tools: tools::all_definitions(),
        };
        let json_response = JsonRpcResponse::new(id, serde_json::to_value(response).unwrap());
        serde_json::to_value(json_response).unwrap()
    }

    /// Handle tools/call request
    fn handle_tool_call(&mut self, id: Option<Value>, params: Value) -> Value {
        let tool_name = match params.get("name").and_then(|v| v.as_str()) {
            Some(name) => name.to_string(),
            None => {
                let error = JsonRpcError::new(id, -32602, "Missing tool name".to_string());
                return serde_json::to_value(error).unwrap();
            }
        };

        let tool_params = match params.get("arguments") {
            Some(args) => args.clone(),
            None => json!({}),
        };

        // Route to appropriate tool handler
        let result = match tool_name.as_str() {
            "waymark_initialize_roadmap" => self.call_initialize_roadmap(tool_params),
            "waymark_update_status" => self.call_update_status(tool_params),
            "waymark_get_summary" => self.call_get_summary(),
            "waymark_add_module" => self.call_add_module(tool_params),
            "waymark_update_module" => self.call_update_module(tool_params),
            "waymark_remove_module" => self.call_remove_module(tool_params),
            "waymark_list_modules" => self.call_list_modules(),
            "waymark_add_topic" => self.call_add_topic(tool_params),
            "waymark_update_topic_confidence" => self.call_update_topic_confidence(tool_params),
            "waymark_list_topics" => self.call_list_topics(tool_params),
            "waymark_add_concept" => self.call_add_concept(tool_params),
            "waymark_list_concepts" => self.call_list_concepts(tool_params),
            "waymark_add_resource" => self.call_add_resource(tool_params),
            "waymark_add_resources_bulk" => self.call_add_resources_bulk(tool_params),
            "waymark_remove_resource" => self.call_remove_resource(tool_params),
            "waymark_list_resources" => self.call_list_resources(tool_params),
            "waymark_get_analysis" => self.call_get_analysis(),
            "waymark_validate_quality" => self.call_validate_quality(),
            "waymark_topics_needing_concepts" => self.call_topics_needing_concepts(),
            "waymark_modules_needing_topics" => self.call_modules_needing_topics(),
            "waymark_modules_needing_resources" => self.call_modules_needing_resources(),
            "waymark_validate_module_resources" => self.call_validate_module_resources(tool_params),
            "waymark_validate_resource_urls" => self.call_validate_resource_urls(),
            _ => {
                let error =
                    JsonRpcError::new(id, -32601, format!("Tool not found: {}", tool_name));
                return serde_json::to_value(error).unwrap();
            }
        };

        match result {
            Ok(value) => {
                let response = JsonRpcResponse::new(id, value);
                serde_json::to_value(response).unwrap()
            }
            Err(e) => {
                let error = JsonRpcError::new(id, e.error_code(), e.to_string());
                serde_json::to_value(error).unwrap()
            }
        }
    }

    /// Call initialize roadmap tool
    fn call_initialize_roadmap(&mut self, params: Value) -> Result<Value, McpError> {
        let params: tools::InitializeRoadmapParams = serde_json::from_value(params)?;
        let message = tools::handle_initialize_roadmap(&self.store, params)?;
        self.persist()?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call update status tool
    fn call_update_status(&mut self, params: Value) -> Result<Value, McpError> {
        let params: tools::UpdateStatusParams = serde_json::from_value(params)?;
        let message = tools::handle_update_status(&self.store, params)?;
        self.persist()?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call get summary tool
    fn call_get_summary(&self) -> Result<Value, McpError> {
        let message = tools::handle_get_summary(&self.store)?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call add module tool
    fn call_add_module(&mut self, params: Value) -> Result<Value, McpError> {
        let params: tools::AddModuleParams = serde_json::from_value(params)?;
        let message = tools::handle_add_module(&self.store, params)?;
        self.persist()?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call update module tool
    fn call_update_module(&mut self, params: Value) -> Result<Value, McpError> {
        let params: tools::UpdateModuleParams = serde_json::from_value(params)?;
        let message = tools::handle_update_module(&self.store, params)?;
        self.persist()?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call remove module tool
    fn call_remove_module(&mut self, params: Value) -> Result<Value, McpError> {
        let params: tools::RemoveModuleParams = serde_json::from_value(params)?;
        let message = tools::handle_remove_module(&self.store, params)?;
        self.persist()?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call list modules tool
    fn call_list_modules(&self) -> Result<Value, McpError> {
        let message = tools::handle_list_modules(&self.store)?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call add topic tool
    fn call_add_topic(&mut self, params: Value) -> Result<Value, McpError> {
        let params: tools::AddTopicParams = serde_json::from_value(params)?;
        let message = tools::handle_add_topic(&self.store, params)?;
        self.persist()?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call update topic confidence tool
    fn call_update_topic_confidence(&mut self, params: Value) -> Result<Value, McpError> {
        let params: tools::UpdateTopicConfidenceParams = serde_json::from_value(params)?;
        let message = tools::handle_update_topic_confidence(&self.store, params)?;
        self.persist()?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call list topics tool
    fn call_list_topics(&self, params: Value) -> Result<Value, McpError> {
        let params: tools::ListTopicsParams = serde_json::from_value(params)?;
        let message = tools::handle_list_topics(&self.store, params)?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call add concept tool
    fn call_add_concept(&mut self, params: Value) -> Result<Value, McpError> {
        let params: tools::AddConceptParams = serde_json::from_value(params)?;
        let message = tools::handle_add_concept(&self.store, params)?;
        self.persist()?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call list concepts tool
    fn call_list_concepts(&self, params: Value) -> Result<Value, McpError> {
        let params: tools::ListConceptsParams = serde_json::from_value(params)?;
        let message = tools::handle_list_concepts(&self.store, params)?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call add resource tool
    fn call_add_resource(&mut self, params: Value) -> Result<Value, McpError> {
        let params: tools::AddResourceParams = serde_json::from_value(params)?;
        let message = tools::handle_add_resource(&self.store, params)?;
        self.persist()?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call bulk add resources tool
    fn call_add_resources_bulk(&mut self, params: Value) -> Result<Value, McpError> {
        let params: tools::AddResourcesBulkParams = serde_json::from_value(params)?;
        let message = tools::handle_add_resources_bulk(&self.store, params)?;
        self.persist()?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call remove resource tool
    fn call_remove_resource(&mut self, params: Value) -> Result<Value, McpError> {
        let params: tools::RemoveResourceParams = serde_json::from_value(params)?;
        let message = tools::handle_remove_resource(&self.store, params)?;
        self.persist()?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call list resources tool
    fn call_list_resources(&self, params: Value) -> Result<Value, McpError> {
        let params: tools::ListResourcesParams = serde_json::from_value(params)?;
        let message = tools::handle_list_resources(&self.store, params)?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call get analysis tool
    fn call_get_analysis(&self) -> Result<Value, McpError> {
        let message = tools::handle_get_analysis(&self.store)?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call validate quality tool
    fn call_validate_quality(&self) -> Result<Value, McpError> {
        let message = tools::handle_validate_quality(&self.store)?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call topics needing concepts tool
    fn call_topics_needing_concepts(&self) -> Result<Value, McpError> {
        let message = tools::handle_topics_needing_concepts(&self.store)?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call modules needing topics tool
    fn call_modules_needing_topics(&self) -> Result<Value, McpError> {
        let message = tools::handle_modules_needing_topics(&self.store)?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call modules needing resources tool
    fn call_modules_needing_resources(&self) -> Result<Value, McpError> {
        let message = tools::handle_modules_needing_resources(&self.store)?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call validate module resources tool
    fn call_validate_module_resources(&self, params: Value) -> Result<Value, McpError> {
        let params: tools::ValidateModuleResourcesParams = serde_json::from_value(params)?;
        let message = tools::handle_validate_module_resources(&self.store, params)?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Call validate resource urls tool
    fn call_validate_resource_urls(&self) -> Result<Value, McpError> {
        let message = tools::handle_validate_resource_urls(&self.store)?;
        Ok(serde_json::to_value(ToolCallResult::text(message))?)
    }

    /// Write the current roadmap through to the archive
    ///
    /// No-op when autosave is off or no archive is configured. A cleared
    /// store clears the archive as well.
    fn persist(&mut self) -> Result<(), McpError> {
        if !self.autosave {
            return Ok(());
        }
        let Some(archive) = self.archive.as_mut() else {
            return Ok(());
        };

        match self.store.current_roadmap() {
            Some(roadmap) => archive.save(&roadmap)?,
            None => archive.clear()?,
        }
        Ok(())
    }

    /// Write response to stdout
    fn write_response<W: Write>(&self, writer: &mut W, response: &Value) -> Result<(), McpError> {
        let response_str = serde_json::to_string(response)?;
        writeln!(writer, "{}", response_str)?;
        writer.flush()?;
        debug!("Sent response: {}", response_str);
        Ok(())
    }
}
