//! Wire types for the MCP stdio transport
//!
//! One JSON-RPC 2.0 message per line. Field names that MCP spells in
//! camelCase (`protocolVersion`, `serverInfo`, `inputSchema`) are renamed
//! at the serde boundary so the Rust side stays snake_case.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An incoming JSON-RPC request line
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Always "2.0"
    pub jsonrpc: String,
    /// Request ID; absent for notifications
    pub id: Option<Value>,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: Value,
}

/// A successful response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    /// Always "2.0"
    pub jsonrpc: String,
    /// ID of the request being answered
    pub id: Option<Value>,
    /// Result data
    pub result: Value,
}

impl JsonRpcResponse {
    /// Create a new success response
    pub fn new(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
        }
    }
}

/// An error response
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    /// Always "2.0"
    pub jsonrpc: String,
    /// ID of the request being answered; null when the request never
    /// parsed far enough to have one
    pub id: Option<Value>,
    /// Error details
    pub error: ErrorDetail,
}

/// Code and message of an error response
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// JSON-RPC error code
    pub code: i32,
    /// Human-readable message
    pub message: String,
}

impl JsonRpcError {
    /// Create a new error response
    pub fn new(id: Option<Value>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            error: ErrorDetail { code, message },
        }
    }
}

/// Result payload of the `initialize` handshake
#[derive(Debug, Serialize)]
pub struct InitializeResponse {
    /// MCP protocol revision the server speaks
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server name and version
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// What the server can do
    pub capabilities: Capabilities,
}

/// Server identity reported during the handshake
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// Server capabilities
#[derive(Debug, Serialize)]
pub struct Capabilities {
    /// Tools capability
    pub tools: ToolsCapability,
}

/// Tools capability
#[derive(Debug, Serialize)]
pub struct ToolsCapability {
    /// Whether tools are supported
    pub supported: bool,
}

/// Result payload of `tools/list`
#[derive(Debug, Serialize)]
pub struct ToolListResponse {
    /// Available tools
    pub tools: Vec<ToolDefinition>,
}

/// One entry of the tool catalog
#[derive(Debug, Serialize)]
pub struct ToolDefinition {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// JSON Schema of the tool's arguments
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Result payload of `tools/call`
///
/// MCP delivers tool output as a list of content blocks. Every waymark tool
/// produces exactly one text block carrying the store's message.
#[derive(Debug, Serialize)]
pub struct ToolCallResult {
    /// Content blocks
    pub content: Vec<ContentBlock>,
}

/// One block of tool output
#[derive(Debug, Serialize)]
pub struct ContentBlock {
    /// Block type; always "text" here
    #[serde(rename = "type")]
    pub kind: String,
    /// The text payload
    pub text: String,
}

impl ToolCallResult {
    /// Wrap a message in a single text content block
    pub fn text(text: String) -> Self {
        Self {
            content: vec![ContentBlock {
                kind: "text".to_string(),
                text,
            }],
        }
    }
}
