//! Server error type and its JSON-RPC code mapping

use thiserror::Error;

/// Everything that can go wrong while serving a request
///
/// Store operations themselves never land here; their miss cases ("module
/// not found" and friends) are ordinary tool results. Errors are reserved
/// for the protocol boundary and the archive.
#[derive(Error, Debug)]
pub enum McpError {
    /// Request was well-formed JSON but semantically wrong (bad enum
    /// value, unusable parameter)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Tool not found
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Archive save or load failed
    #[error("Archive error: {0}")]
    Archive(#[from] waymark_archive::ArchiveError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error on the stdio transport
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl McpError {
    /// Convert to JSON-RPC error code
    pub fn error_code(&self) -> i32 {
        match self {
            McpError::InvalidRequest(_) => -32600,
            McpError::ToolNotFound(_) => -32601,
            McpError::Archive(_) => -32000,
            McpError::JsonError(_) => -32700,
            McpError::IoError(_) => -32000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_follow_jsonrpc() {
        assert_eq!(McpError::InvalidRequest("x".to_string()).error_code(), -32600);
        assert_eq!(McpError::ToolNotFound("x".to_string()).error_code(), -32601);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(McpError::from(json_err).error_code(), -32700);
    }

    #[test]
    fn test_messages_carry_the_cause() {
        let err = McpError::InvalidRequest("Invalid roadmap status: published".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid request: Invalid roadmap status: published"
        );
    }
}
