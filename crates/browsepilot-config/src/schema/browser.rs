//! `[browser]` section.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::default_true;

/// Browser launch configuration. Hardening options default to on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserSection {
    #[serde(default)]
    pub headless: bool,

    #[serde(default = "default_true")]
    pub sandbox: bool,

    #[serde(default = "default_true")]
    pub disable_extensions: bool,

    #[serde(default = "default_true")]
    pub disable_file_access: bool,

    #[serde(default)]
    pub viewport: ViewportConfig,

    /// Remote debugging port; 0 picks a free one.
    #[serde(default)]
    pub debug_port: u16,

    #[serde(default)]
    pub executable: Option<PathBuf>,

    /// Parent directory for throwaway profiles.
    #[serde(default)]
    pub profile_dir: Option<PathBuf>,

    /// Screenshots are also written here when set.
    #[serde(default)]
    pub screenshot_dir: Option<PathBuf>,

    #[serde(default)]
    pub timeouts: TimeoutsConfig,
}

impl Default for BrowserSection {
    fn default() -> Self {
        Self {
            headless: false,
            sandbox: true,
            disable_extensions: true,
            disable_file_access: true,
            viewport: ViewportConfig::default(),
            debug_port: 0,
            executable: None,
            profile_dir: None,
            screenshot_dir: None,
            timeouts: TimeoutsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

/// `[browser.timeouts]`, all in milliseconds except `max_wait_seconds`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutsConfig {
    #[serde(default = "default_navigation_ms")]
    pub navigation_ms: u64,
    #[serde(default = "default_click_wait_ms")]
    pub click_wait_ms: u64,
    #[serde(default = "default_command_ms")]
    pub command_ms: u64,
    #[serde(default = "default_keystroke_delay_ms")]
    pub keystroke_delay_ms: u64,
    #[serde(default = "default_startup_ms")]
    pub startup_ms: u64,
    #[serde(default = "default_max_wait_seconds")]
    pub max_wait_seconds: u64,
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self {
            navigation_ms: default_navigation_ms(),
            click_wait_ms: default_click_wait_ms(),
            command_ms: default_command_ms(),
            keystroke_delay_ms: default_keystroke_delay_ms(),
            startup_ms: default_startup_ms(),
            max_wait_seconds: default_max_wait_seconds(),
        }
    }
}

fn default_navigation_ms() -> u64 {
    30_000
}

fn default_click_wait_ms() -> u64 {
    10_000
}

fn default_command_ms() -> u64 {
    30_000
}

fn default_keystroke_delay_ms() -> u64 {
    50
}

fn default_startup_ms() -> u64 {
    6_000
}

fn default_max_wait_seconds() -> u64 {
    300
}
