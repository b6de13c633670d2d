//! browsepilot - planner-driven browser automation.
//!
//! Main entry point for the browsepilot CLI.

mod cli;
mod register;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use browsepilot_config::{Config, ConfigLoader, ConfigValidator, LoggingSection};
use browsepilot_protocols::planner::Planner;
use browsepilot_runtime::{OrchestrationLoop, OrchestratorConfig, TaskRequest};

use crate::cli::{Cli, Commands};
use crate::register::{openai_planner, register_tools, scripted_planner};

/// Initialize tracing with console and daily-rolling file output.
///
/// Console output goes to stderr so stdout carries only JSON.
fn init_tracing(logging: &LoggingSection) -> anyhow::Result<()> {
    std::fs::create_dir_all(&logging.dir)
        .with_context(|| format!("Failed to create log directory {}", logging.dir.display()))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(&logging.file_prefix)
        .max_log_files(14)
        .build(&logging.dir)
        .context("Failed to create log file appender")?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keeps the writer flushing for the lifetime of the process.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Ok(())
}

/// An explicit path must exist; the default location may be absent.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => ConfigLoader::load_or_default(&ConfigLoader::default_path())
            .context("Failed to load default config"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;
    init_tracing(&config.logging)?;

    match cli.command {
        Commands::Run {
            task,
            max_turns,
            headless,
            model,
            plan,
        } => {
            if let Some(max_turns) = max_turns {
                config.orchestrator.max_turns = max_turns;
            }
            if headless {
                config.browser.headless = true;
            }
            run_task(&config, task, model, plan).await
        }
        Commands::Tools => {
            let (registry, _toolset) = register_tools(&config)?;
            let catalog = serde_json::to_string_pretty(&registry.to_openai_functions())?;
            println!("{}", catalog);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_task(
    config: &Config,
    task: String,
    model: Option<String>,
    plan: Option<PathBuf>,
) -> anyhow::Result<ExitCode> {
    let warnings = ConfigValidator::validate(config, plan.is_none())?.into_result()?;
    for warning in warnings {
        warn!(path = %warning.path, "{}", warning.message);
    }

    let planner: Arc<dyn Planner> = match &plan {
        Some(path) => scripted_planner(path)?,
        None => openai_planner(&config.planner, model.as_deref())?,
    };
    let (registry, toolset) = register_tools(config)?;

    let orchestrator = OrchestrationLoop::new(
        registry,
        planner,
        OrchestratorConfig {
            max_turns: config.orchestrator.max_turns,
        },
    );
    let report = orchestrator.run(TaskRequest::new(task)).await;

    if let Err(e) = toolset.manager().close_browser().await {
        warn!("Failed to shut down browser: {}", e);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    info!(status = ?report.status, turns = report.turns, "Run finished");

    Ok(if report.is_completed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
