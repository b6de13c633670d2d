use super::*;

#[test]
fn test_definition_defaults_to_empty_object_schema() {
    let def = ToolDefinition::new("open_browser", "Open Browser", "Open a browser page");
    assert_eq!(def.parameters_schema["type"], "object");
    assert_eq!(def.parameters_schema["additionalProperties"], false);
    assert!(def.metadata.is_empty());
}

#[test]
fn test_definition_with_schema() {
    let schema = serde_json::json!({
        "type": "object",
        "properties": {"url": {"type": "string"}},
        "required": ["url"]
    });
    let def = ToolDefinition::new("open_url", "Open URL", "Navigate").with_parameters_schema(schema);
    assert_eq!(def.parameters_schema["required"][0], "url");
}

#[test]
fn test_to_openai_function() {
    let def = ToolDefinition::new("take_screenshot", "Screenshot", "Capture the page");
    let func = def.to_openai_function();
    assert_eq!(func["type"], "function");
    assert_eq!(func["function"]["name"], "take_screenshot");
    assert_eq!(func["function"]["description"], "Capture the page");
    assert_eq!(func["function"]["parameters"]["type"], "object");
}

#[test]
fn test_definition_deserialize_without_schema() {
    let json = r#"{"name":"wait_seconds","title":"Wait","description":"Pause"}"#;
    let def: ToolDefinition = serde_json::from_str(json).unwrap();
    assert_eq!(def.name, "wait_seconds");
    assert_eq!(def.parameters_schema, empty_object_schema());
}

#[test]
fn test_definition_metadata_skipped_when_empty() {
    let def = ToolDefinition::new("close_browser", "Close", "Close the browser");
    let json = serde_json::to_string(&def).unwrap();
    assert!(!json.contains("metadata"));

    let def = def.with_metadata("requires_page", serde_json::json!(false));
    let json = serde_json::to_string(&def).unwrap();
    assert!(json.contains("requires_page"));
}
