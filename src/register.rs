//! Wiring of config sections into registry, toolset and planner.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use browsepilot_config::{BrowserSection, Config, PlannerSection};
use browsepilot_core::ToolRegistry;
use browsepilot_planner_openai::{resolve_model, OpenAIPlanner, OpenAIPlannerConfig};
use browsepilot_protocols::planner::Planner;
use browsepilot_runtime::ScriptedPlanner;
use browsepilot_tools_browser::{BrowserConfig, BrowserTimeouts, BrowserToolset};

/// Translate the `[browser]` section into launch settings.
pub(crate) fn browser_config(section: &BrowserSection) -> BrowserConfig {
    let t = &section.timeouts;
    BrowserConfig {
        headless: section.headless,
        sandbox: section.sandbox,
        disable_extensions: section.disable_extensions,
        disable_file_access: section.disable_file_access,
        viewport_width: section.viewport.width,
        viewport_height: section.viewport.height,
        debug_port: section.debug_port,
        executable: section.executable.clone(),
        profile_root: section.profile_dir.clone(),
        screenshot_dir: section.screenshot_dir.clone(),
        timeouts: BrowserTimeouts {
            navigation: Duration::from_millis(t.navigation_ms),
            click_wait: Duration::from_millis(t.click_wait_ms),
            command: Duration::from_millis(t.command_ms),
            keystroke_delay: Duration::from_millis(t.keystroke_delay_ms),
            startup: Duration::from_millis(t.startup_ms),
            max_wait_seconds: t.max_wait_seconds,
        },
    }
}

/// Register the browser tools and return the registry with the toolset that owns the session.
pub(crate) fn register_tools(config: &Config) -> anyhow::Result<(Arc<ToolRegistry>, BrowserToolset)> {
    let registry = Arc::new(ToolRegistry::new());
    let toolset = BrowserToolset::new(browser_config(&config.browser));
    toolset
        .register(registry.as_ref())
        .context("Failed to register browser tools")?;
    info!(tools = registry.len(), "Registered browser tools");
    Ok((registry, toolset))
}

/// Scripted planner from a JSON file of decisions.
pub(crate) fn scripted_planner(path: &Path) -> anyhow::Result<Arc<dyn Planner>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file {}", path.display()))?;
    let planner = ScriptedPlanner::from_json(&content)
        .with_context(|| format!("Invalid plan file {}", path.display()))?;
    info!(decisions = planner.remaining(), "Using scripted planner");
    Ok(Arc::new(planner))
}

/// Chat completions planner from the `[planner]` section.
pub(crate) fn openai_planner(section: &PlannerSection, model: Option<&str>) -> anyhow::Result<Arc<dyn Planner>> {
    let api_key = section.api_key.clone().unwrap_or_default();
    let mut config = OpenAIPlannerConfig::new(api_key)
        .with_url(&section.api_url)
        .with_model(resolve_model(model.or(section.model.as_deref())));
    config.temperature = section.temperature;
    if let Some(prompt) = &section.system_prompt {
        config.system_prompt = prompt.clone();
    }

    info!(model = %config.model, url = %config.api_url, "Using chat completions planner");
    let planner = OpenAIPlanner::new(config).context("Failed to create planner")?;
    Ok(Arc::new(planner))
}
