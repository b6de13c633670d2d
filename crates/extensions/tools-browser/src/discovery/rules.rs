//! Label and selector derivation rules.
//!
//! Both are total, deterministic functions of an element's attributes: the
//! first rule that applies wins.

use std::sync::LazyLock;

use regex::Regex;

use super::ElementAttributes;

/// Label used when no attribute or text is available.
pub const UNNAMED_LABEL: &str = "unnamed";

/// Characters of inner text kept in a text selector.
const TEXT_SELECTOR_CHARS: usize = 30;

/// Ids usable as `#id` without escaping.
static SIMPLE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[A-Za-z_][A-Za-z0-9_-]*$").expect("SIMPLE_ID is a valid regex"));

type Rule = fn(&ElementAttributes) -> Option<String>;

const LABEL_RULES: &[Rule] = &[by_id, by_name, by_placeholder, by_aria_label, by_text];

const SELECTOR_RULES: &[Rule] = &[
    id_selector,
    name_selector,
    placeholder_selector,
    text_selector,
];

fn by_id(a: &ElementAttributes) -> Option<String> {
    non_empty(&a.id).map(str::to_string)
}

fn by_name(a: &ElementAttributes) -> Option<String> {
    non_empty(&a.name).map(str::to_string)
}

fn by_placeholder(a: &ElementAttributes) -> Option<String> {
    non_empty(&a.placeholder).map(str::to_string)
}

fn by_aria_label(a: &ElementAttributes) -> Option<String> {
    non_empty(&a.aria_label).map(str::to_string)
}

fn by_text(a: &ElementAttributes) -> Option<String> {
    non_empty(&a.text).map(|t| t.trim().to_string())
}

/// Label priority: id, name, placeholder, aria-label, inner text, `"unnamed"`.
pub fn derive_label(attrs: &ElementAttributes) -> String {
    LABEL_RULES
        .iter()
        .find_map(|rule| rule(attrs))
        .unwrap_or_else(|| UNNAMED_LABEL.to_string())
}

/// Selector priority: `#id`, `[name]`, `[placeholder]`, `text=`, none.
pub fn derive_selector(attrs: &ElementAttributes) -> Option<String> {
    SELECTOR_RULES.iter().find_map(|rule| rule(attrs))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn id_selector(a: &ElementAttributes) -> Option<String> {
    non_empty(&a.id).map(|id| {
        if SIMPLE_ID.is_match(id) {
            format!("#{}", id)
        } else {
            attribute_selector("id", id)
        }
    })
}

fn name_selector(a: &ElementAttributes) -> Option<String> {
    non_empty(&a.name).map(|v| attribute_selector("name", v))
}

fn placeholder_selector(a: &ElementAttributes) -> Option<String> {
    non_empty(&a.placeholder).map(|v| attribute_selector("placeholder", v))
}

fn text_selector(a: &ElementAttributes) -> Option<String> {
    non_empty(&a.text).map(|text| {
        let prefix: String = text.trim().chars().take(TEXT_SELECTOR_CHARS).collect();
        format!("text={}", prefix.trim_end())
    })
}

fn attribute_selector(attribute: &str, value: &str) -> String {
    format!("[{}=\"{}\"]", attribute, escape_attribute(value))
}

fn escape_attribute(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
