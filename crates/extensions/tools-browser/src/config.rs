//! Browser launch configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Per-operation time limits.
#[derive(Debug, Clone)]
pub struct BrowserTimeouts {
    pub navigation: Duration,
    /// Bound on `click_by_text`'s visibility wait.
    pub click_wait: Duration,
    /// Bound on a single CDP command.
    pub command: Duration,
    /// Delay between typed characters.
    pub keystroke_delay: Duration,
    /// How long Chrome may take to expose its debugging endpoint.
    pub startup: Duration,
    /// Largest accepted `wait_seconds` argument, in seconds.
    pub max_wait_seconds: u64,
}

impl Default for BrowserTimeouts {
    fn default() -> Self {
        Self {
            navigation: Duration::from_secs(30),
            click_wait: Duration::from_secs(10),
            command: Duration::from_secs(30),
            keystroke_delay: Duration::from_millis(50),
            startup: Duration::from_secs(6),
            max_wait_seconds: 300,
        }
    }
}

/// Browser configuration, fixed at session start.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub headless: bool,
    /// Keep Chrome's sandbox on. Disabling adds `--no-sandbox`.
    pub sandbox: bool,
    pub disable_extensions: bool,
    /// Block local filesystem access from pages (`--disable-file-system`, no `file:` URLs).
    pub disable_file_access: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Chrome debugging port; 0 picks a free port per launch.
    pub debug_port: u16,
    /// Explicit Chrome executable; searched in well-known locations otherwise.
    pub executable: Option<PathBuf>,
    /// Parent directory for the throwaway profile; system temp dir if unset.
    pub profile_root: Option<PathBuf>,
    /// Where `take_screenshot` also writes PNG files, if set.
    pub screenshot_dir: Option<PathBuf>,
    pub timeouts: BrowserTimeouts,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: false,
            sandbox: true,
            disable_extensions: true,
            disable_file_access: true,
            viewport_width: 1280,
            viewport_height: 720,
            debug_port: 0,
            executable: None,
            profile_root: None,
            screenshot_dir: None,
            timeouts: BrowserTimeouts::default(),
        }
    }
}

impl BrowserConfig {
    /// Hardened Chrome command-line flags for this configuration.
    pub fn chrome_args(&self) -> Vec<String> {
        let mut args = vec![
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            "--disable-background-networking".to_string(),
            "--disable-sync".to_string(),
            "--disable-translate".to_string(),
            "--metrics-recording-only".to_string(),
            format!(
                "--window-size={},{}",
                self.viewport_width, self.viewport_height
            ),
        ];
        if self.disable_extensions {
            args.push("--disable-extensions".to_string());
        }
        if self.disable_file_access {
            args.push("--disable-file-system".to_string());
        }
        if !self.sandbox {
            args.push("--no-sandbox".to_string());
        }
        if self.headless {
            args.push("--headless=new".to_string());
        }
        args
    }
}
