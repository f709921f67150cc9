//! MCP protocol integration tests.
//!
//! Drives the JSON-RPC 2.0 server and the tool router against a profile
//! directory in a temp dir.

use std::path::{Path, PathBuf};

use profile_finder::server::{serve, JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use profile_finder::tools::ToolRouter;
use serde_json::{json, Value};

fn write_directory(dir: &Path) -> PathBuf {
    let path = dir.join("profiles.json");
    std::fs::write(
        &path,
        json!({
            "profiles": [
                { "name": "Zayeem Zaki", "code": "RKT001", "email": "zayeem@example.com" },
                { "name": "John Smith", "code": "RKT002" },
                { "name": "Ann", "code": "A1" },
                { "name": "Anne", "code": "A2" }
            ]
        })
        .to_string(),
    )
    .expect("write directory");
    path
}

/// Run the server over `lines` and return the parsed response lines.
fn run_session(router: &ToolRouter, lines: &[Value]) -> Vec<Value> {
    let input: String = lines.iter().map(|l| format!("{l}\n")).collect();
    let mut reader = std::io::Cursor::new(input.into_bytes());
    let mut output = Vec::new();
    serve(router, &mut reader, &mut output).expect("serve");

    String::from_utf8(output)
        .expect("utf8 output")
        .lines()
        .map(|l| serde_json::from_str(l).expect("response json"))
        .collect()
}

fn tool_text(router: &ToolRouter, name: &str, args: Value) -> (String, bool) {
    let result = router.call_tool(name, args).expect("tool call");
    (result.content[0].text.clone(), result.is_error)
}

#[test]
fn test_json_rpc_request_parsing() {
    let req_json = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2025-06-18",
            "capabilities": {},
            "clientInfo": { "name": "test-client", "version": "0.1.0" }
        }
    });

    let req: JsonRpcRequest = serde_json::from_value(req_json).expect("should parse initialize request");

    assert_eq!(req.method, "initialize");
    assert_eq!(req.id, Some(json!(1)));
}

#[test]
fn test_json_rpc_error_response() {
    let resp = JsonRpcResponse {
        jsonrpc: "2.0".to_owned(),
        id: Some(json!(2)),
        result: None,
        error: Some(JsonRpcError {
            code: -32601,
            message: "method not found".to_owned(),
            data: None,
        }),
    };

    let json_str = serde_json::to_string(&resp).expect("should serialize");
    assert!(json_str.contains("-32601"));
    assert!(!json_str.contains("result")); // result is None, should be skipped
}

#[test]
fn test_tool_definitions_complete() {
    let router = ToolRouter::new(PathBuf::from("/tmp/profiles.json"));

    let tools = router.list_tools();
    let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["find_profile", "rank_profiles", "distance", "register_profile"]);

    for tool in &tools {
        assert!(!tool.description.is_empty(), "tool {} missing description", tool.name);
        assert!(tool.input_schema.is_object(), "tool {} missing input_schema", tool.name);
    }
}

#[test]
fn test_session_initialize_list_and_notification() {
    let dir = tempfile::tempdir().expect("tempdir");
    let router = ToolRouter::new(write_directory(dir.path()));

    let responses = run_session(
        &router,
        &[
            json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {} }),
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
            json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
            json!({ "jsonrpc": "2.0", "id": 3, "method": "ping" }),
        ],
    );

    // The notification gets no response.
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "profile-finder");
    assert_eq!(responses[0]["result"]["protocolVersion"], "2025-06-18");
    assert_eq!(responses[1]["id"], 2);
    assert_eq!(responses[1]["result"]["tools"].as_array().map(Vec::len), Some(4));
    assert_eq!(responses[2]["result"], json!({}));
}

#[test]
fn test_session_protocol_errors() {
    let router = ToolRouter::new(PathBuf::from("/nonexistent/profiles.json"));
    let input = concat!(
        "{not json\n",
        "\n",
        "{\"jsonrpc\":\"1.0\",\"id\":1,\"method\":\"ping\"}\n",
        "{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"resources/list\"}\n",
        "{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"tools/call\",\"params\":{\"arguments\":{}}}\n",
    );
    let mut reader = std::io::Cursor::new(input.as_bytes().to_vec());
    let mut output = Vec::new();
    serve(&router, &mut reader, &mut output).expect("serve");

    let responses: Vec<Value> = String::from_utf8(output)
        .expect("utf8")
        .lines()
        .map(|l| serde_json::from_str(l).expect("json"))
        .collect();

    let codes: Vec<i64> = responses
        .iter()
        .map(|r| r["error"]["code"].as_i64().expect("error code"))
        .collect();
    assert_eq!(codes, vec![-32700, -32600, -32601, -32602]);
}

#[test]
fn test_session_find_profile() {
    let dir = tempfile::tempdir().expect("tempdir");
    let router = ToolRouter::new(write_directory(dir.path()));

    let responses = run_session(
        &router,
        &[json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": { "name": "find_profile", "arguments": { "query": "Zayeem" } }
        })],
    );

    let text = responses[0]["result"]["content"][0]["text"].as_str().expect("text");
    let hit: Value = serde_json::from_str(text).expect("hit json");
    assert_eq!(hit["code"], "RKT001");
    assert_eq!(hit["distance"], 5);
    assert_eq!(hit["field"], "name");
    assert!(responses[0]["result"].get("isError").is_none());
}

#[test]
fn test_find_profile_first_exact_match_wins() {
    let dir = tempfile::tempdir().expect("tempdir");
    let router = ToolRouter::new(write_directory(dir.path()));

    let (text, is_error) = tool_text(&router, "find_profile", json!({ "query": "Ann" }));
    assert!(!is_error);
    let hit: Value = serde_json::from_str(&text).expect("hit json");
    assert_eq!(hit["name"], "Ann");
    assert_eq!(hit["distance"], 0);
}

#[test]
fn test_find_profile_by_code() {
    let dir = tempfile::tempdir().expect("tempdir");
    let router = ToolRouter::new(write_directory(dir.path()));

    let (text, _) = tool_text(&router, "find_profile", json!({ "query": "RKT002" }));
    let hit: Value = serde_json::from_str(&text).expect("hit json");
    assert_eq!(hit["name"], "John Smith");
    assert_eq!(hit["field"], "code");
}

#[test]
fn test_find_profile_max_distance() {
    let dir = tempfile::tempdir().expect("tempdir");
    let router = ToolRouter::new(write_directory(dir.path()));

    let (text, is_error) = tool_text(&router, "find_profile", json!({ "query": "Zayeem", "maxDistance": 2 }));
    assert!(!is_error);
    assert_eq!(text, "No profile found for \"Zayeem\"");
}

#[test]
fn test_find_profile_missing_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let router = ToolRouter::new(dir.path().join("absent.json"));

    let (text, is_error) = tool_text(&router, "find_profile", json!({ "query": "Ann" }));
    assert!(!is_error);
    assert!(text.contains("No profile found"));
}

#[test]
fn test_find_profile_rejects_empty_query() {
    let dir = tempfile::tempdir().expect("tempdir");
    let router = ToolRouter::new(write_directory(dir.path()));

    let err = router
        .call_tool("find_profile", json!({ "query": "" }))
        .expect_err("empty query");
    assert!(err.to_string().contains("query must not be empty"));

    // Over the protocol, tool errors come back as isError results.
    let responses = run_session(
        &router,
        &[json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": { "name": "rank_profiles", "arguments": { "query": "" } }
        })],
    );
    assert_eq!(responses[0]["result"]["isError"], true);
}

#[test]
fn test_rank_profiles() {
    let dir = tempfile::tempdir().expect("tempdir");
    let router = ToolRouter::new(write_directory(dir.path()));

    let (text, is_error) = tool_text(&router, "rank_profiles", json!({ "query": "Ann", "limit": 3 }));
    assert!(!is_error);
    let hits: Vec<Value> = serde_json::from_str(&text).expect("hits json");
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0]["name"], "Ann");
    assert_eq!(hits[0]["similarity"], 1.0);
    assert_eq!(hits[1]["name"], "Anne");
    assert_eq!(hits[1]["distance"], 1);

    let distances: Vec<u64> = hits.iter().map(|h| h["distance"].as_u64().expect("distance")).collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_distance_tool() {
    let router = ToolRouter::new(PathBuf::from("/tmp/profiles.json"));

    let (text, _) = tool_text(&router, "distance", json!({ "a": "Ann", "b": "ann" }));
    let result: Value = serde_json::from_str(&text).expect("json");
    assert_eq!(result["distance"], 1);

    let (text, _) = tool_text(&router, "distance", json!({ "a": "kitten", "b": "sitting" }));
    let result: Value = serde_json::from_str(&text).expect("json");
    assert_eq!(result["distance"], 3);
}

#[test]
fn test_register_profile_then_find() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_directory(dir.path());
    let router = ToolRouter::new(path.clone());

    let (text, is_error) = tool_text(&router, "register_profile", json!({ "name": "Priya Patel", "code": "RKT003" }));
    assert!(!is_error, "{text}");
    assert!(text.contains("5 profiles"));

    let (text, _) = tool_text(&router, "find_profile", json!({ "query": "Priya Patl" }));
    let hit: Value = serde_json::from_str(&text).expect("hit json");
    assert_eq!(hit["code"], "RKT003");

    // Attributes the tools don't know about survive the rewrite.
    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(saved["profiles"][0]["email"], "zayeem@example.com");
}

#[test]
fn test_register_profile_duplicate_code() {
    let dir = tempfile::tempdir().expect("tempdir");
    let router = ToolRouter::new(write_directory(dir.path()));

    let (text, is_error) = tool_text(&router, "register_profile", json!({ "name": "Other", "code": "A1" }));
    assert!(is_error);
    assert!(text.contains("duplicate profile code"));
}

#[test]
fn test_register_profile_creates_directory_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("new.json");
    let router = ToolRouter::new(path.clone());

    let (_, is_error) = tool_text(&router, "register_profile", json!({ "name": "Ann", "code": "A1" }));
    assert!(!is_error);
    assert!(path.exists());
}

#[test]
fn test_register_profile_refuses_corrupt_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("profiles.json");
    std::fs::write(&path, "{corrupt").expect("write");
    let router = ToolRouter::new(path.clone());

    assert!(router
        .call_tool("register_profile", json!({ "name": "Ann", "code": "A1" }))
        .is_err());
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "{corrupt");
}

#[test]
fn test_tool_call_unknown() {
    let router = ToolRouter::new(PathBuf::from("/tmp/profiles.json"));

    let (text, is_error) = tool_text(&router, "nonexistent_tool", json!({}));
    assert!(is_error);
    assert!(text.contains("Unknown tool"));
}
