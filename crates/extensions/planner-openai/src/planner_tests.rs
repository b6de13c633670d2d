use super::*;

use serde_json::json;

use browsepilot_protocols::types::ToolCall;

fn planner(url: &str) -> OpenAIPlanner {
    OpenAIPlanner::new(
        OpenAIPlannerConfig::new("test-key")
            .with_url(url)
            .with_model("gpt-test"),
    )
    .unwrap()
}

fn catalog() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new("open_browser", "Open Browser", "Open a browser session"),
        ToolDefinition::new("close_browser", "Close Browser", "Close the browser session"),
    ]
}

#[test]
fn test_default_system_prompt() {
    let config = OpenAIPlannerConfig::new("key");
    assert!(config.system_prompt.starts_with("You are a browser automation agent."));
    assert_eq!(config.api_url, DEFAULT_API_URL);
}

#[test]
fn test_resolve_model_prefers_config() {
    assert_eq!(resolve_model(Some("gpt-configured")), "gpt-configured");
}

#[test]
fn test_empty_api_key_rejected() {
    let result = OpenAIPlanner::new(OpenAIPlannerConfig::new("  "));
    assert!(matches!(result, Err(PlannerError::Configuration(_))));
}

#[test]
fn test_build_request_disables_parallel_calls() {
    let planner = planner("http://localhost");
    let request = planner.build_request("task", &[ConversationTurn::user("task")], &catalog());
    assert_eq!(request.model, "gpt-test");
    assert_eq!(request.tools.len(), 2);
    assert_eq!(request.parallel_tool_calls, Some(false));
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, "system");
    assert_eq!(request.messages[0].text_content(), Some(DEFAULT_SYSTEM_PROMPT));

    let request = planner.build_request("task", &[], &[]);
    assert!(request.parallel_tool_calls.is_none());
}

mod http_tests {
    use super::*;
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_decide_tool_call() {
        let mock_server = MockServer::start().await;

        let response_body = json!({
            "id": "chatcmpl-1",
            "model": "gpt-test",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_open",
                        "type": "function",
                        "function": {"name": "open_browser", "arguments": "{}"}
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        });

        Mock::given(matchers::method("POST"))
            .and(matchers::header("Authorization", "Bearer test-key"))
            .and(matchers::body_partial_json(json!({
                "model": "gpt-test",
                "parallel_tool_calls": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let decision = planner(&mock_server.uri())
            .decide("open a browser", &[ConversationTurn::user("open a browser")], &catalog())
            .await
            .unwrap();

        match decision {
            PlannerDecision::ToolCall { call, .. } => {
                assert_eq!(call, ToolCall::new("open_browser", json!({})).with_id("call_open"));
            }
            other => panic!("Expected ToolCall, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_decide_completion() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "The browser was opened and closed."},
                    "finish_reason": "stop"
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let decision = planner(&mock_server.uri())
            .decide("task", &[], &catalog())
            .await
            .unwrap();
        assert_eq!(
            decision,
            PlannerDecision::complete("The browser was opened and closed.")
        );
    }

    #[tokio::test]
    async fn test_decide_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string(
                r#"{"error": {"message": "Invalid API key"}}"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = planner(&mock_server.uri())
            .decide("task", &[], &catalog())
            .await
            .unwrap_err();
        match err {
            PlannerError::ApiError { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("Invalid API key"));
            }
            other => panic!("Expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_decide_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let err = planner(&mock_server.uri())
            .decide("task", &[], &catalog())
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_decide_network_error() {
        let err = planner("http://127.0.0.1:9")
            .decide("task", &[], &catalog())
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::Network(_)));
    }
}
