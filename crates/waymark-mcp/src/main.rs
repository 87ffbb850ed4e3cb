//! Waymark MCP Server - Main entry point

use std::env;
use tracing::Level;
use tracing_subscriber;
use waymark_mcp::{McpServer, ServerConfig};

fn main() {
    // Logs go to stderr; stdout belongs to the protocol
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .init();

    // WAYMARK_CONFIG points at a TOML file; without it the roadmap lives
    // in memory only
    let config = match env::var("WAYMARK_CONFIG") {
        Ok(path) => match ServerConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        Err(_) => ServerConfig::default(),
    };

    // Creating the server restores any archived roadmap
    let mut server = match McpServer::new(config) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to create MCP server: {}", e);
            std::process::exit(1);
        }
    };

    // Blocks until stdin closes
    if let Err(e) = server.run() {
        eprintln!("MCP server error: {}", e);
        std::process::exit(1);
    }
}
