//! Form element discovery.
//!
//! Turns the interactive form controls on the current page into a short,
//! ordered list of labels and selectors the planner can act on.

mod rules;

pub use rules::{derive_label, derive_selector, UNNAMED_LABEL};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::driver::PageDriver;
use crate::error::BrowserError;

/// Upper bound on elements returned by one discovery call.
pub const MAX_DISCOVERED_ELEMENTS: usize = 50;

/// Raw attributes of one form control, as read from the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementAttributes {
    pub tag: String,
    #[serde(rename = "type", default)]
    pub input_type: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub aria_label: Option<String>,
    /// Visible inner text.
    #[serde(default)]
    pub text: Option<String>,
}

/// A form control as presented to the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveredElement {
    pub tag: String,
    #[serde(rename = "type")]
    pub input_type: Option<String>,
    pub label: String,
    /// `None` when no attribute yields a usable selector.
    pub selector: Option<String>,
}

impl From<&ElementAttributes> for DiscoveredElement {
    fn from(attrs: &ElementAttributes) -> Self {
        Self {
            tag: attrs.tag.to_lowercase(),
            input_type: attrs.input_type.clone(),
            label: derive_label(attrs),
            selector: derive_selector(attrs),
        }
    }
}

/// Scans the current page's form controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementDiscoveryEngine;

impl ElementDiscoveryEngine {
    pub fn new() -> Self {
        Self
    }

    /// Discover up to [`MAX_DISCOVERED_ELEMENTS`] form controls, in document order.
    pub async fn discover(&self, page: &dyn PageDriver) -> Result<Vec<DiscoveredElement>, BrowserError> {
        let raw = page.query_form_elements(MAX_DISCOVERED_ELEMENTS).await?;
        let elements = Self::summarize(&raw);
        debug!(found = raw.len(), returned = elements.len(), "Discovered form elements");
        Ok(elements)
    }

    /// Apply the label and selector rules, enforcing the element cap.
    pub fn summarize(raw: &[ElementAttributes]) -> Vec<DiscoveredElement> {
        raw.iter()
            .take(MAX_DISCOVERED_ELEMENTS)
            .map(DiscoveredElement::from)
            .collect()
    }
}
