use super::*;

#[test]
fn test_api_request_serialization() {
    let request = ApiRequest {
        model: "gpt-4o".to_string(),
        messages: vec![ApiMessage::text("user", "Hello")],
        temperature: Some(0.5),
        tools: vec![ApiTool {
            tool_type: "function".to_string(),
            function: FunctionDef {
                name: "open_browser".to_string(),
                description: "Open a browser".to_string(),
                parameters: serde_json::json!({"type": "object", "properties": {}}),
            },
        }],
        parallel_tool_calls: Some(false),
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["model"], "gpt-4o");
    assert_eq!(json["messages"][0]["content"], "Hello");
    assert_eq!(json["tools"][0]["type"], "function");
    assert_eq!(json["tools"][0]["function"]["name"], "open_browser");
    assert_eq!(json["parallel_tool_calls"], false);
}

#[test]
fn test_api_request_skip_none_fields() {
    let request = ApiRequest {
        model: "gpt-4o".to_string(),
        messages: vec![],
        temperature: None,
        tools: vec![],
        parallel_tool_calls: None,
    };

    let json = serde_json::to_value(&request).unwrap();
    assert!(json.get("temperature").is_none());
    assert!(json.get("tools").is_none());
    assert!(json.get("parallel_tool_calls").is_none());
}

#[test]
fn test_tool_message_serialization() {
    let message = ApiMessage {
        role: "tool".to_string(),
        content: Some(MessageContent::Text("Browser opened".to_string())),
        tool_calls: None,
        tool_call_id: Some("call_1".to_string()),
    };
    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(json["tool_call_id"], "call_1");
    assert_eq!(json["content"], "Browser opened");
    assert!(json.get("tool_calls").is_none());
}

#[test]
fn test_content_parts_serialization() {
    let content = MessageContent::Parts(vec![
        ContentPart::Text { text: "Screenshot".to_string() },
        ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: "data:image/png;base64,iVBORw0KGgo=".to_string(),
                detail: None,
            },
        },
    ]);
    let json = serde_json::to_value(&content).unwrap();
    assert_eq!(json[0]["type"], "text");
    assert_eq!(json[1]["type"], "image_url");
    assert_eq!(json[1]["image_url"]["url"], "data:image/png;base64,iVBORw0KGgo=");
    assert!(json[1]["image_url"].get("detail").is_none());
}

#[test]
fn test_response_with_tool_calls() {
    let json = r#"{
        "id": "chatcmpl-1",
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_abc",
                    "type": "function",
                    "function": {"name": "wait_seconds", "arguments": "{\"seconds\": 2}"}
                }]
            },
            "finish_reason": "tool_calls"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    }"#;
    let response: ApiResponse = serde_json::from_str(json).unwrap();
    let message = &response.choices[0].message;
    assert!(message.content.is_none());
    assert_eq!(message.tool_calls[0].function.name, "wait_seconds");
    assert_eq!(response.usage.unwrap().total_tokens, 15);
}

#[test]
fn test_response_minimal() {
    let json = r#"{"choices": [{"message": {"content": "done"}, "finish_reason": "stop"}]}"#;
    let response: ApiResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.choices[0].message.content.as_deref(), Some("done"));
    assert!(response.choices[0].message.tool_calls.is_empty());
}
