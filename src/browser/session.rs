use crate::{browser::config::{ConnectionOptions, LaunchOptions},
            error::{A11yError, Result},
            scan::A11yScanner,
            script::ScriptSource};
use headless_chrome::{Browser, Element, Tab};
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// Browser session that manages a Chrome/Chromium instance
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // Long scans on large pages must not outlive the browser's idle timer (default is 30 seconds)
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        launch_opts.sandbox = options.sandbox;

        let browser = Browser::new(launch_opts).map_err(|e| A11yError::LaunchFailed(e.to_string()))?;

        browser.new_tab().map_err(|e| A11yError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        log::debug!("Launched browser (headless: {})", options.headless);
        Ok(Self { browser })
    }

    /// Connect to an existing browser instance via WebSocket
    pub fn connect(options: ConnectionOptions) -> Result<Self> {
        let idle_timeout = options.idle_timeout();
        let browser = Browser::connect_with_timeout(options.ws_url, idle_timeout)
            .map_err(|e| A11yError::ConnectionFailed(e.to_string()))?;

        log::debug!("Connected to browser (idle timeout: {:?})", idle_timeout);

        Ok(Self { browser })
    }

    /// Launch a browser with default options
    pub fn new() -> Result<Self> {
        Self::launch(LaunchOptions::default())
    }

    /// Get the active tab
    pub fn tab(&self) -> Result<Arc<Tab>> {
        self.get_active_tab()
    }

    /// Get all tabs
    pub fn get_tabs(&self) -> Result<Vec<Arc<Tab>>> {
        let tabs = self
            .browser
            .get_tabs()
            .lock()
            .map_err(|e| A11yError::TabOperationFailed(format!("Failed to get tabs: {}", e)))?
            .clone();

        Ok(tabs)
    }

    /// Get the currently active tab by checking the document visibility and focus state
    pub fn get_active_tab(&self) -> Result<Arc<Tab>> {
        let tabs = self.get_tabs()?;

        // First pass: visible and focused
        for tab in &tabs {
            match tab.evaluate("document.visibilityState === 'visible' && document.hasFocus()", false) {
                Ok(remote_object) => {
                    if remote_object.value.and_then(|v| v.as_bool()).unwrap_or(false) {
                        return Ok(tab.clone());
                    }
                }
                Err(e) => {
                    log::debug!("Failed to check tab status: {}", e);
                    continue;
                }
            }
        }

        // Second pass: visible only
        for tab in &tabs {
            if let Ok(remote_object) = tab.evaluate("document.visibilityState === 'visible'", false) {
                if remote_object.value.and_then(|v| v.as_bool()).unwrap_or(false) {
                    return Ok(tab.clone());
                }
            }
        }

        // A freshly launched headless browser may report no visible tab yet
        tabs.into_iter()
            .next()
            .ok_or_else(|| A11yError::TabOperationFailed("No active tab found".to_string()))
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Navigate to a URL using the active tab
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab()?
            .navigate_to(url)
            .map_err(|e| A11yError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        Ok(())
    }

    /// Wait for navigation to complete
    pub fn wait_for_navigation(&self) -> Result<()> {
        self.tab()?
            .wait_until_navigated()
            .map_err(|e| A11yError::NavigationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(())
    }

    /// Find an element by CSS selector using the provided tab
    pub fn find_element<'a>(&self, tab: &'a Arc<Tab>, css_selector: &str) -> Result<Element<'a>> {
        tab.find_element(css_selector)
            .map_err(|e| A11yError::ElementNotFound(format!("Element '{}' not found: {}", css_selector, e)))
    }

    /// Inject the scan engine into the active tab and return a scanner for it
    pub fn scanner(&self, script: &ScriptSource) -> Result<A11yScanner<Arc<Tab>>> {
        A11yScanner::new(self.tab()?, script)
    }

    /// Close the browser
    pub fn close(&self) -> Result<()> {
        // headless_chrome closes the process when Browser is dropped; closing the tabs ends the session early
        let tabs = self.get_tabs()?;
        for tab in tabs {
            let _ = tab.close(false);
        }
        Ok(())
    }
}
