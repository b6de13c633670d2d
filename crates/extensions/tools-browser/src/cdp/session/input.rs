//! Input (mouse and keyboard) operations for CDP page session.

use serde_json::{json, Value};
use tracing::debug;

use crate::cdp::error::CdpError;
use crate::cdp::protocol::{KeyEventType, MouseButton, MouseEventType, Point};

use super::core::PageSession;

impl PageSession {
    /// Move, press and release the left button at a viewport point.
    pub async fn click(&self, at: Point) -> Result<(), CdpError> {
        self.call(
            "Input.dispatchMouseEvent",
            Some(json!({
                "type": MouseEventType::MouseMoved,
                "x": at.x,
                "y": at.y,
            })),
        )
        .await?;

        for event in [MouseEventType::MousePressed, MouseEventType::MouseReleased] {
            self.call(
                "Input.dispatchMouseEvent",
                Some(json!({
                    "type": event,
                    "x": at.x,
                    "y": at.y,
                    "button": MouseButton::Left,
                    "clickCount": 1,
                })),
            )
            .await?;
        }

        debug!("Clicked at ({}, {})", at.x, at.y);
        Ok(())
    }

    /// Press and release one character's key on the focused element.
    ///
    /// The key-down carries the text, so the page sees keydown, keypress,
    /// input and keyup just as for a real keystroke.
    pub async fn type_char(&self, ch: char) -> Result<(), CdpError> {
        let (down, up) = key_events(ch);
        self.call("Input.dispatchKeyEvent", Some(down)).await?;
        self.call("Input.dispatchKeyEvent", Some(up)).await?;
        Ok(())
    }
}

/// `Input.dispatchKeyEvent` parameters for pressing and releasing `ch`.
pub(super) fn key_events(ch: char) -> (Value, Value) {
    let (key, text) = match ch {
        '\n' | '\r' => ("Enter".to_string(), "\r".to_string()),
        _ => (ch.to_string(), ch.to_string()),
    };
    let down = json!({
        "type": KeyEventType::KeyDown,
        "key": key,
        "text": text,
        "unmodifiedText": text,
    });
    let up = json!({
        "type": KeyEventType::KeyUp,
        "key": key,
    });
    (down, up)
}
