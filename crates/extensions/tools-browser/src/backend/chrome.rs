//! Chrome process management.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cdp::CdpClient;
use crate::config::BrowserConfig;
use crate::driver::{BrowserBackend, PageDriver};
use crate::error::BrowserError;

use super::page::CdpPage;

/// Variables passed through to Chrome; everything else is cleared.
const DISPLAY_ENV: &[&str] = &["DISPLAY", "WAYLAND_DISPLAY", "XAUTHORITY", "XDG_RUNTIME_DIR"];

/// A launched browser and what it needs to stay alive.
struct ChromeInstance {
    client: Arc<CdpClient>,
    process: Child,
    // Removed from disk when the instance is dropped.
    _profile: TempDir,
}

/// Launches Chrome on first use and hands out pages.
pub struct ChromeBackend {
    config: BrowserConfig,
    instance: Mutex<Option<ChromeInstance>>,
}

impl ChromeBackend {
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            config,
            instance: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Find Chrome executable path.
    pub fn find_chrome() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        let paths: &[&str] = &[
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
            "/Applications/Microsoft Edge.app/Contents/MacOS/Microsoft Edge",
        ];

        #[cfg(target_os = "linux")]
        let paths: &[&str] = &[
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
            "/snap/bin/chromium",
        ];

        #[cfg(target_os = "windows")]
        let paths: &[&str] = &[
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
        ];

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        let paths: &[&str] = &[];

        paths.iter().map(PathBuf::from).find(|p| p.exists())
    }

    fn executable(&self) -> Result<PathBuf, BrowserError> {
        match &self.config.executable {
            Some(path) if path.exists() => Ok(path.clone()),
            Some(path) => Err(BrowserError::LaunchFailed(format!(
                "executable {} does not exist",
                path.display()
            ))),
            None => Self::find_chrome().ok_or(BrowserError::ChromeNotFound),
        }
    }

    fn debug_port(&self) -> Result<u16, BrowserError> {
        if self.config.debug_port != 0 {
            return Ok(self.config.debug_port);
        }
        let listener = std::net::TcpListener::bind("127.0.0.1:0")
            .map_err(|e| BrowserError::LaunchFailed(format!("no free port: {}", e)))?;
        let port = listener
            .local_addr()
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?
            .port();
        Ok(port)
    }

    fn profile_dir(&self) -> Result<TempDir, BrowserError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("browsepilot-profile-");

        let dir = match &self.config.profile_root {
            Some(root) => {
                std::fs::create_dir_all(root).map_err(|e| {
                    BrowserError::LaunchFailed(format!("profile root {}: {}", root.display(), e))
                })?;
                builder.tempdir_in(root)
            }
            None => builder.tempdir(),
        };
        dir.map_err(|e| BrowserError::LaunchFailed(format!("profile directory: {}", e)))
    }

    fn command(&self, chrome: &Path, port: u16, profile: &Path) -> Command {
        let mut cmd = Command::new(chrome);
        cmd.arg(format!("--remote-debugging-port={}", port))
            .arg("--remote-debugging-address=127.0.0.1")
            .arg(format!("--user-data-dir={}", profile.display()))
            .args(self.config.chrome_args())
            .arg("about:blank")
            .env_clear()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        if !self.config.headless {
            for key in DISPLAY_ENV {
                if let Ok(value) = std::env::var(key) {
                    cmd.env(key, value);
                }
            }
        }
        cmd
    }

    async fn launch(&self) -> Result<ChromeInstance, BrowserError> {
        let chrome = self.executable()?;
        let port = self.debug_port()?;
        let profile = self.profile_dir()?;

        info!(
            chrome = %chrome.display(),
            port,
            headless = self.config.headless,
            sandbox = self.config.sandbox,
            "Launching Chrome"
        );

        let mut process = self
            .command(&chrome, port, profile.path())
            .spawn()
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        let endpoint = format!("http://127.0.0.1:{}", port);
        let http = reqwest::Client::new();
        let started = Instant::now();

        loop {
            if CdpClient::version(&http, &endpoint).await.is_ok() {
                break;
            }
            if let Ok(Some(status)) = process.try_wait() {
                return Err(BrowserError::LaunchFailed(format!(
                    "Chrome exited during startup ({})",
                    status
                )));
            }
            if started.elapsed() > self.config.timeouts.startup {
                let _ = process.kill().await;
                return Err(BrowserError::LaunchFailed(format!(
                    "Chrome did not expose {} within {} ms",
                    endpoint,
                    self.config.timeouts.startup.as_millis()
                )));
            }
            tokio::time::sleep(Duration::from_millis(200)).await;
        }

        let client = match CdpClient::connect(&endpoint, self.config.timeouts.command).await {
            Ok(client) => client,
            Err(e) => {
                let _ = process.kill().await;
                return Err(e.into());
            }
        };

        info!(pid = ?process.id(), "Chrome ready at {}", endpoint);
        Ok(ChromeInstance {
            client: Arc::new(client),
            process,
            _profile: profile,
        })
    }

    /// Connected client, launching Chrome when there is none or it died.
    async fn client(&self) -> Result<Arc<CdpClient>, BrowserError> {
        let mut guard = self.instance.lock().await;
        if let Some(instance) = guard.as_ref() {
            if instance.client.is_connected() {
                return Ok(instance.client.clone());
            }
            warn!("Chrome connection lost, relaunching");
        }
        if let Some(mut stale) = guard.take() {
            let _ = stale.process.kill().await;
        }
        let instance = self.launch().await?;
        let client = instance.client.clone();
        *guard = Some(instance);
        Ok(client)
    }
}

#[async_trait]
impl BrowserBackend for ChromeBackend {
    async fn new_page(&self) -> Result<Arc<dyn PageDriver>, BrowserError> {
        let client = self.client().await?;
        let session = client.new_page().await?;
        debug!(target_id = session.target_id(), "Page attached");
        Ok(Arc::new(CdpPage::new(
            client,
            session,
            self.config.timeouts.clone(),
        )))
    }

    async fn shutdown(&self) -> Result<(), BrowserError> {
        let Some(mut instance) = self.instance.lock().await.take() else {
            return Ok(());
        };

        if let Err(e) = instance.client.close_browser().await {
            debug!("Browser.close failed, killing process: {}", e);
        }
        match tokio::time::timeout(Duration::from_secs(5), instance.process.wait()).await {
            Ok(_) => {}
            Err(_) => {
                warn!("Chrome did not exit in time, killing");
                let _ = instance.process.kill().await;
            }
        }
        info!("Chrome shut down");
        Ok(())
    }

    async fn is_running(&self) -> bool {
        self.instance
            .lock()
            .await
            .as_ref()
            .map(|i| i.client.is_connected())
            .unwrap_or(false)
    }
}
