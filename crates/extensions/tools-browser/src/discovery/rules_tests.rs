use super::*;

fn attrs() -> ElementAttributes {
    ElementAttributes {
        tag: "input".to_string(),
        ..Default::default()
    }
}

fn with(f: impl FnOnce(&mut ElementAttributes)) -> ElementAttributes {
    let mut a = attrs();
    f(&mut a);
    a
}

#[test]
fn test_id_beats_name() {
    let a = with(|a| {
        a.id = Some("email".into());
        a.name = Some("user_email".into());
        a.placeholder = Some("you@example.com".into());
    });
    assert_eq!(derive_label(&a), "email");
    assert_eq!(derive_selector(&a).as_deref(), Some("#email"));
}

#[test]
fn test_name_then_placeholder() {
    let a = with(|a| {
        a.name = Some("username".into());
        a.placeholder = Some("Your name".into());
    });
    assert_eq!(derive_label(&a), "username");
    assert_eq!(derive_selector(&a).as_deref(), Some("[name=\"username\"]"));

    let a = with(|a| a.placeholder = Some("Your name".into()));
    assert_eq!(derive_label(&a), "Your name");
    assert_eq!(derive_selector(&a).as_deref(), Some("[placeholder=\"Your name\"]"));
}

#[test]
fn test_aria_label_is_label_only() {
    let a = with(|a| a.aria_label = Some("Search".into()));
    assert_eq!(derive_label(&a), "Search");
    assert_eq!(derive_selector(&a), None);
}

#[test]
fn test_text_selector_truncated_to_thirty_chars() {
    let text = "  Create your free account today and start building  ";
    let a = with(|a| {
        a.tag = "button".into();
        a.text = Some(text.into());
    });
    assert_eq!(derive_label(&a), text.trim());
    let selector = derive_selector(&a).unwrap();
    assert_eq!(selector, "text=Create your free account today");
    assert!(selector.trim_start_matches("text=").chars().count() <= 30);
}

#[test]
fn test_text_selector_counts_characters_not_bytes() {
    let a = with(|a| a.text = Some("é".repeat(40)));
    let selector = derive_selector(&a).unwrap();
    assert_eq!(selector.trim_start_matches("text=").chars().count(), 30);
}

#[test]
fn test_nothing_available() {
    let a = attrs();
    assert_eq!(derive_label(&a), UNNAMED_LABEL);
    assert_eq!(derive_selector(&a), None);
}

#[test]
fn test_blank_values_are_skipped() {
    let a = with(|a| {
        a.id = Some("".into());
        a.name = Some("   ".into());
        a.placeholder = Some("Email".into());
    });
    assert_eq!(derive_label(&a), "Email");
    assert_eq!(derive_selector(&a).as_deref(), Some("[placeholder=\"Email\"]"));
}

#[test]
fn test_complex_id_uses_attribute_form() {
    let a = with(|a| a.id = Some("user.email[0]".into()));
    assert_eq!(derive_selector(&a).as_deref(), Some("[id=\"user.email[0]\"]"));

    let a = with(|a| a.id = Some("2fa-code".into()));
    assert_eq!(derive_selector(&a).as_deref(), Some("[id=\"2fa-code\"]"));
}

#[test]
fn test_quotes_are_escaped() {
    let a = with(|a| a.placeholder = Some("Say \"hi\"".into()));
    assert_eq!(
        derive_selector(&a).as_deref(),
        Some("[placeholder=\"Say \\\"hi\\\"\"]")
    );
}

#[test]
fn test_derivation_is_deterministic() {
    let a = with(|a| {
        a.name = Some("q".into());
        a.text = Some("Search".into());
    });
    let first = (derive_label(&a), derive_selector(&a));
    for _ in 0..10 {
        assert_eq!((derive_label(&a), derive_selector(&a)), first);
    }
}
