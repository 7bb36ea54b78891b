use std::{path::PathBuf, time::Duration};

/// Idle timeout for connected browsers. CDP calls wait at most this long, so it
/// must stay above the scan bound.
pub const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 60 * 60 * 1000;

/// Options for launching a new browser instance
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Run the browser without a window (default: true)
    pub headless: bool,

    /// Window width in pixels
    pub window_width: u32,

    /// Window height in pixels
    pub window_height: u32,

    /// Path to a Chrome/Chromium binary (auto-detected when None)
    pub chrome_path: Option<PathBuf>,

    /// Persistent profile directory
    pub user_data_dir: Option<PathBuf>,

    /// Enable the Chrome sandbox
    pub sandbox: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1280,
            window_height: 800,
            chrome_path: None,
            user_data_dir: None,
            sandbox: true,
        }
    }
}

impl LaunchOptions {
    /// Create LaunchOptions with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set headless mode
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Builder method: set window size
    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Builder method: set the browser binary
    pub fn chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Builder method: set the profile directory
    pub fn user_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_data_dir = Some(dir.into());
        self
    }

    /// Builder method: enable or disable the sandbox
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }
}

/// Options for connecting to a running browser
#[derive(Debug, Clone)]
pub struct ConnectionOptions {
    /// DevTools WebSocket URL
    pub ws_url: String,

    /// Idle timeout in milliseconds, also the longest a single CDP call may take
    pub timeout: u64,
}

impl ConnectionOptions {
    /// Create ConnectionOptions for the given WebSocket URL
    pub fn new(ws_url: impl Into<String>) -> Self {
        Self { ws_url: ws_url.into(), timeout: DEFAULT_CONNECTION_TIMEOUT_MS }
    }

    /// Builder method: set the connection timeout in milliseconds
    pub fn timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// The idle timeout handed to the browser connection
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }
}
