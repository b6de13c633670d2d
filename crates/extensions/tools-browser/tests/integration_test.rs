//! Integration tests against a real Chrome.
//!
//! Skipped when no Chrome/Chromium executable is found.
//! Run with: cargo test -p browsepilot-tools-browser --test integration_test -- --nocapture

use std::sync::Arc;

use serde_json::json;

use browsepilot_core::ToolRegistry;
use browsepilot_protocols::error::FailureKind;
use browsepilot_protocols::tool::ToolContext;
use browsepilot_protocols::types::ToolCall;
use browsepilot_tools_browser::{BrowserConfig, BrowserToolset, ChromeBackend, SessionState};

const SIGNUP_PAGE: &str = "<html><body><form>\
    <input id='email' type='email' placeholder='Email'>\
    <input name='password' type='password'>\
    <button type='submit'>Sign up</button>\
    </form></body></html>";

fn test_config() -> BrowserConfig {
    BrowserConfig {
        headless: true,
        // CI containers usually run as root
        sandbox: false,
        ..Default::default()
    }
}

fn chrome_available() -> bool {
    match ChromeBackend::find_chrome() {
        Some(path) => {
            println!("Using Chrome at {}", path.display());
            true
        }
        None => {
            println!("Chrome not found, skipping");
            false
        }
    }
}

fn data_url(html: &str) -> String {
    format!("data:text/html,{}", html.replace(' ', "%20"))
}

async fn invoke(registry: &ToolRegistry, name: &str, args: serde_json::Value) -> Result<String, FailureKind> {
    registry
        .invoke(&ToolCall::new(name, args), ToolContext::new("integration", 1))
        .await
        .map(|r| r.content)
        .map_err(|e| {
            println!("{} failed: {}", name, e);
            e.kind()
        })
}

#[tokio::test]
async fn test_form_session_end_to_end() {
    if !chrome_available() {
        return;
    }

    let toolset = BrowserToolset::new(test_config());
    let registry = ToolRegistry::new();
    toolset.register(&registry).unwrap();

    assert_eq!(
        invoke(&registry, "open_url", json!({"url": "https://example.com"})).await,
        Err(FailureKind::Precondition)
    );

    invoke(&registry, "open_browser", json!({})).await.unwrap();
    assert_eq!(toolset.manager().state().await, SessionState::Open);

    invoke(&registry, "open_url", json!({"url": data_url(SIGNUP_PAGE)}))
        .await
        .unwrap();

    let discovered = invoke(&registry, "discover_form_elements", json!({})).await.unwrap();
    let elements: serde_json::Value = serde_json::from_str(&discovered).unwrap();
    assert_eq!(elements.as_array().unwrap().len(), 3);
    assert_eq!(elements[0]["selector"], "#email");
    assert_eq!(elements[1]["selector"], "[name=\"password\"]");
    assert_eq!(elements[2]["label"], "Sign up");

    invoke(&registry, "type_text", json!({"selector": "#email", "text": "a@b.com"}))
        .await
        .unwrap();
    assert_eq!(
        invoke(&registry, "type_text", json!({"selector": "#missing", "text": "x"})).await,
        Err(FailureKind::Driver)
    );

    let shot = registry
        .invoke(&ToolCall::new("take_screenshot", json!({})), ToolContext::new("integration", 1))
        .await
        .unwrap();
    assert!(shot.image.unwrap().data.len() > 100);
    assert!(shot.metadata["bytes"].as_u64().unwrap() > 0);

    assert_eq!(
        invoke(&registry, "close_browser", json!({})).await.unwrap(),
        "Browser closed"
    );
    assert_eq!(
        invoke(&registry, "close_browser", json!({})).await.unwrap(),
        "Browser already closed"
    );
    assert_eq!(toolset.manager().state().await, SessionState::Closed);
}

#[tokio::test]
async fn test_reopen_replaces_page() {
    if !chrome_available() {
        return;
    }

    let toolset = BrowserToolset::new(test_config());
    let manager = Arc::clone(toolset.manager());

    let first = manager.open_browser().await.unwrap();
    let second = manager.open_browser().await.unwrap();
    assert_ne!(first.page_id, second.page_id);
    assert!(second.replaced);

    assert!(manager.close_browser().await.unwrap());
}
