//! Integration tests for MCP server
//!
//! These tests drive the server through its JSON-RPC line interface, the same
//! surface an MCP client reaches over stdio, and check protocol framing,
//! tool routing, error codes, and archive persistence.

use serde_json::{json, Value};
use waymark_mcp::{McpServer, ServerConfig};

fn server() -> McpServer {
    McpServer::new(ServerConfig::default()).unwrap()
}

fn send(server: &mut McpServer, request: Value) -> Value {
    let line = serde_json::to_string(&request).unwrap();
    server.handle_line(&line).expect("expected a response")
}

fn call_tool(server: &mut McpServer, id: u64, name: &str, arguments: Value) -> Value {
    send(
        server,
        json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "tools/call",
            "params": {"name": name, "arguments": arguments}
        }),
    )
}

fn result_text(response: &Value) -> &str {
    response["result"]["content"][0]["text"]
        .as_str()
        .expect("expected a text content block")
}

#[test]
fn test_initialize_handshake() {
    let mut server = server();

    let response = send(
        &mut server,
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
    );

    assert_eq!(response["jsonrpc"], "2.0");
    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(response["result"]["serverInfo"]["name"], "waymark-mcp");
    assert_eq!(response["result"]["capabilities"]["tools"]["supported"], true);
}

#[test]
fn test_tools_list_exposes_all_tools() {
    let mut server = server();

    let response = send(
        &mut server,
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list", "params": {}}),
    );

    let tools = response["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 23);

    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"waymark_initialize_roadmap"));
    assert!(names.contains(&"waymark_add_resources_bulk"));
    assert!(names.contains(&"waymark_validate_resource_urls"));

    for tool in tools {
        assert!(tool["inputSchema"].is_object(), "schema missing for {}", tool["name"]);
        assert!(tool["description"].as_str().unwrap().len() > 10);
    }
}

#[test]
fn test_tool_results_are_text_content_blocks() {
    let mut server = server();

    let response = call_tool(
        &mut server,
        3,
        "waymark_initialize_roadmap",
        json!({"profile_summary": "Beginner aiming at systems programming"}),
    );

    assert_eq!(response["id"], 3);
    assert_eq!(response["result"]["content"][0]["type"], "text");
    assert_eq!(result_text(&response), "Roadmap initialized successfully");
}

#[test]
fn test_full_roadmap_scenario_over_jsonrpc() {
    let mut server = server();

    call_tool(
        &mut server,
        1,
        "waymark_initialize_roadmap",
        json!({"profile_summary": "profile"}),
    );

    let response = call_tool(
        &mut server,
        2,
        "waymark_add_module",
        json!({"title": "Rust Basics", "description": "Syntax and tooling", "estimated_hours": 25}),
    );
    assert_eq!(result_text(&response), "Module 'Rust Basics' added successfully");

    let response = call_tool(
        &mut server,
        3,
        "waymark_add_topic",
        json!({
            "module_title": "Rust Basics",
            "topic_title": "Ownership",
            "topic_description": "Moves and borrows"
        }),
    );
    assert_eq!(result_text(&response), "Topic 'Ownership' added to module 'Rust Basics'");

    let response = call_tool(
        &mut server,
        4,
        "waymark_add_concept",
        json!({
            "module_title": "Rust Basics",
            "topic_title": "Ownership",
            "concept_title": "Borrow checker",
            "concept_description": "Compile-time aliasing rules"
        }),
    );
    assert_eq!(result_text(&response), "Concept 'Borrow checker' added to topic 'Ownership'");

    let response = call_tool(
        &mut server,
        5,
        "waymark_add_resource",
        json!({
            "module_title": "Rust Basics",
            "resource_title": "The Book",
            "url": "https://doc.rust-lang.org/book/",
            "kind": "Book",
            "source": "rust-lang.org",
            "description": "The canonical introduction"
        }),
    );
    assert_eq!(result_text(&response), "Resource 'The Book' added to module 'Rust Basics'");

    let response = call_tool(&mut server, 6, "waymark_get_summary", json!({}));
    assert!(result_text(&response)
        .starts_with("Roadmap Status: Draft, Modules: 1, Topics: 1, Resources: 1, Created: "));

    let response = call_tool(&mut server, 7, "waymark_list_modules", json!({}));
    assert_eq!(
        result_text(&response),
        "1. Rust Basics (25h) - 1 topics, 1 resources"
    );

    let response = call_tool(&mut server, 8, "waymark_modules_needing_topics", json!({}));
    assert_eq!(result_text(&response), "✅ All modules have topics.");

    let response = call_tool(
        &mut server,
        9,
        "waymark_update_status",
        json!({"status": "InProgress"}),
    );
    assert_eq!(result_text(&response), "Roadmap status updated to InProgress");
}

#[test]
fn test_call_without_arguments_defaults_to_empty_object() {
    let mut server = server();

    let response = send(
        &mut server,
        json!({
            "jsonrpc": "2.0",
            "id": 10,
            "method": "tools/call",
            "params": {"name": "waymark_get_summary"}
        }),
    );

    assert_eq!(result_text(&response), "No roadmap available");
}

#[test]
fn test_unknown_method_is_method_not_found() {
    let mut server = server();

    let response = send(
        &mut server,
        json!({"jsonrpc": "2.0", "id": 11, "method": "prompts/list", "params": {}}),
    );

    assert_eq!(response["error"]["code"], -32601);
    assert_eq!(response["error"]["message"], "Method not found: prompts/list");
}

#[test]
fn test_unknown_tool_is_tool_not_found() {
    let mut server = server();

    let response = call_tool(&mut server, 12, "waymark_export_pdf", json!({}));

    assert_eq!(response["error"]["code"], -32601);
    assert_eq!(response["error"]["message"], "Tool not found: waymark_export_pdf");
}

#[test]
fn test_missing_tool_name_is_invalid_params() {
    let mut server = server();

    let response = send(
        &mut server,
        json!({"jsonrpc": "2.0", "id": 13, "method": "tools/call", "params": {}}),
    );

    assert_eq!(response["error"]["code"], -32602);
    assert_eq!(response["error"]["message"], "Missing tool name");
}

#[test]
fn test_malformed_json_is_parse_error() {
    let mut server = server();

    let response = server.handle_line("{not json").expect("expected a response");

    assert_eq!(response["error"]["code"], -32700);
    assert!(response["id"].is_null());
}

#[test]
fn test_missing_required_params_map_to_parse_error_code() {
    let mut server = server();
    call_tool(&mut server, 1, "waymark_initialize_roadmap", json!({"profile_summary": "p"}));

    let response = call_tool(&mut server, 14, "waymark_add_module", json!({"title": "Only"}));

    assert_eq!(response["error"]["code"], -32700);
}

#[test]
fn test_invalid_status_maps_to_invalid_request() {
    let mut server = server();
    call_tool(&mut server, 1, "waymark_initialize_roadmap", json!({"profile_summary": "p"}));

    let response = call_tool(
        &mut server,
        15,
        "waymark_update_status",
        json!({"status": "published"}),
    );

    assert_eq!(response["error"]["code"], -32600);
    assert_eq!(
        response["error"]["message"],
        "Invalid request: Invalid roadmap status: published"
    );
}

#[test]
fn test_notifications_get_no_response() {
    let mut server = server();

    let line = serde_json::to_string(&json!({
        "jsonrpc": "2.0",
        "method": "notifications/initialized"
    }))
    .unwrap();

    assert!(server.handle_line(&line).is_none());
}

#[test]
fn test_miss_messages_are_results_not_errors() {
    let mut server = server();
    call_tool(&mut server, 1, "waymark_initialize_roadmap", json!({"profile_summary": "p"}));

    let response = call_tool(
        &mut server,
        16,
        "waymark_list_topics",
        json!({"module_title": "Nope"}),
    );

    assert!(response.get("error").is_none());
    assert_eq!(result_text(&response), "Module 'Nope' not found");
}

#[test]
fn test_autosave_round_trip_through_archive() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        archive_path: Some(dir.path().join("roadmap.db")),
        autosave: true,
    };

    {
        let mut first = McpServer::new(config.clone()).unwrap();
        call_tool(&mut first, 1, "waymark_initialize_roadmap", json!({"profile_summary": "p"}));
        call_tool(
            &mut first,
            2,
            "waymark_add_module",
            json!({"title": "Persistence", "description": "Survives restarts", "estimated_hours": 10}),
        );
    }

    let mut second = McpServer::new(config).unwrap();
    let response = call_tool(&mut second, 3, "waymark_list_modules", json!({}));
    assert_eq!(
        result_text(&response),
        "1. Persistence (10h) - 0 topics, 0 resources"
    );
}

#[test]
fn test_autosave_off_skips_the_archive() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        archive_path: Some(dir.path().join("roadmap.db")),
        autosave: false,
    };

    {
        let mut first = McpServer::new(config.clone()).unwrap();
        call_tool(&mut first, 1, "waymark_initialize_roadmap", json!({"profile_summary": "p"}));
    }

    let mut second = McpServer::new(config).unwrap();
    let response = call_tool(&mut second, 2, "waymark_get_summary", json!({}));
    assert_eq!(result_text(&response), "No roadmap available");
}
