use super::input::key_events;
use super::js::exception_text;

#[test]
fn test_exception_text_prefers_description() {
    let details = serde_json::json!({
        "text": "Uncaught",
        "exception": {"description": "SyntaxError: '#' is not a valid selector"}
    });
    assert_eq!(exception_text(&details), "SyntaxError: '#' is not a valid selector");
}

#[test]
fn test_exception_text_falls_back() {
    assert_eq!(exception_text(&serde_json::json!({"text": "Uncaught"})), "Uncaught");
    assert_eq!(exception_text(&serde_json::json!({})), "Unknown error");
}

#[test]
fn test_key_events_carry_text_on_key_down() {
    let (down, up) = key_events('a');
    assert_eq!(down["type"], "keyDown");
    assert_eq!(down["key"], "a");
    assert_eq!(down["text"], "a");
    assert_eq!(up["type"], "keyUp");
    assert_eq!(up["key"], "a");
    assert!(up.get("text").is_none());
}

#[test]
fn test_key_events_newline_presses_enter() {
    let (down, up) = key_events('\n');
    assert_eq!(down["key"], "Enter");
    assert_eq!(down["text"], "\r");
    assert_eq!(up["key"], "Enter");
}
