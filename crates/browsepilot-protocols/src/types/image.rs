//! Images attached to tool output.

use serde::{Deserialize, Serialize};

/// A base64-encoded image produced by a tool.
///
/// Travels next to the tool turn's text so planners that accept images can
/// show it to the model instead of pasting the encoding into the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    pub media_type: String,
    /// Base64 payload without a `data:` prefix.
    pub data: String,
}

impl ImageAttachment {
    pub fn png(data: impl Into<String>) -> Self {
        Self {
            media_type: "image/png".to_string(),
            data: data.into(),
        }
    }

    /// `data:<media type>;base64,<payload>`
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_data_url() {
        let image = ImageAttachment::png("iVBORw0KGgo=");
        assert_eq!(image.media_type, "image/png");
        assert_eq!(image.data_url(), "data:image/png;base64,iVBORw0KGgo=");
    }
}
