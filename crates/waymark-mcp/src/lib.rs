//! Waymark MCP Server
//!
//! Model Context Protocol server exposing the roadmap store to AI clients
//! (Claude Desktop, Cline, etc.) over stdio.
//!
//! Provides 23 MCP tools grouped by concern:
//! - roadmap: `waymark_initialize_roadmap`, `waymark_update_status`,
//!   `waymark_get_summary`
//! - modules: `waymark_add_module`, `waymark_update_module`,
//!   `waymark_remove_module`, `waymark_list_modules`
//! - topics: `waymark_add_topic`, `waymark_update_topic_confidence`,
//!   `waymark_list_topics`, `waymark_add_concept`, `waymark_list_concepts`
//! - resources: `waymark_add_resource`, `waymark_add_resources_bulk`,
//!   `waymark_remove_resource`, `waymark_list_resources`
//! - quality: `waymark_get_analysis`, `waymark_validate_quality`,
//!   `waymark_topics_needing_concepts`, `waymark_modules_needing_topics`,
//!   `waymark_modules_needing_resources`, `waymark_validate_module_resources`,
//!   `waymark_validate_resource_urls`
//!
//! # Example
//!
//! ```no_run
//! use waymark_mcp::{McpServer, ServerConfig};
//!
//! let mut server = McpServer::new(ServerConfig::default()).unwrap();
//! server.run().unwrap();
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod protocol;
mod server;
mod tools;

pub use config::{ConfigError, ServerConfig};
pub use error::McpError;
pub use server::McpServer;
