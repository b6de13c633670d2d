//! Optional on-disk copies of captured screenshots.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Local};

use crate::error::BrowserError;

/// `screenshot-<YYYYmmdd-HHMMSS-mmm>.png`
pub fn screenshot_file_name(at: DateTime<Local>) -> String {
    format!("screenshot-{}.png", at.format("%Y%m%d-%H%M%S-%3f"))
}

/// Decode the base64 PNG a page driver returned.
pub fn decode_screenshot(data: &str) -> Result<Vec<u8>, BrowserError> {
    STANDARD
        .decode(data)
        .map_err(|e| BrowserError::ScreenshotFailed(format!("invalid base64 data: {}", e)))
}

/// Write PNG bytes into `dir`, creating the directory if needed.
pub async fn persist_screenshot(dir: &Path, png: &[u8]) -> Result<PathBuf, BrowserError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| BrowserError::ScreenshotFailed(format!("{}: {}", dir.display(), e)))?;

    let path = dir.join(screenshot_file_name(Local::now()));
    tokio::fs::write(&path, png)
        .await
        .map_err(|e| BrowserError::ScreenshotFailed(format!("{}: {}", path.display(), e)))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_file_name_format() {
        let at = Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .unwrap()
            + chrono::Duration::milliseconds(42);
        assert_eq!(screenshot_file_name(at), "screenshot-20240309-140507-042.png");
    }

    #[tokio::test]
    async fn test_persist_writes_decoded_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("shots");
        let path = persist_screenshot(&target, b"\x89PNG fake").await.unwrap();
        assert!(path.starts_with(&target));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("screenshot-") && name.ends_with(".png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"\x89PNG fake");
    }

    #[test]
    fn test_decode_screenshot() {
        let data = STANDARD.encode(b"\x89PNG fake");
        assert_eq!(decode_screenshot(&data).unwrap(), b"\x89PNG fake");

        let err = decode_screenshot("not base64!!").unwrap_err();
        assert!(matches!(err, BrowserError::ScreenshotFailed(_)));
    }
}
