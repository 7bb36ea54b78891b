//! # browser-a11y
//!
//! A Rust library that runs an accessibility scan engine (an `a11yCheck`-style engine such
//! as axe) inside a Chrome/Chromium page via the Chrome DevTools Protocol (CDP).
//!
//! ## Features
//!
//! - **Scoped scans**: include and exclude CSS selectors, or scan a single element
//! - **Structured invocation**: scope and options reach the page as JSON arguments,
//!   never as interpolated script text
//! - **Bounded execution**: every scan carries its own timeout (30 seconds by default)
//! - **Validated results**: responses without `violations` or `passes` are rejected
//!
//! ## Command Line
//!
//! ```bash
//! cargo run --bin a11y-scan -- https://example.com --script axe.min.js --include "#main"
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use browser_a11y::{BrowserSession, LaunchOptions, ScriptSource};
//!
//! # fn main() -> browser_a11y::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! session.navigate("https://example.com")?;
//! session.wait_for_navigation()?;
//!
//! let result = session
//!     .scanner(&ScriptSource::file("axe.min.js"))?
//!     .include(["#content", "#footer"])
//!     .exclude(["#ads"])
//!     .analyze()?;
//!
//! println!("{}", browser_a11y::report::report(result.violations()));
//! # Ok(())
//! # }
//! ```
//!
//! ### Scanning One Element
//!
//! ```rust,no_run
//! # use browser_a11y::{BrowserSession, LaunchOptions, ScriptSource};
//! # fn main() -> browser_a11y::Result<()> {
//! # let session = BrowserSession::launch(LaunchOptions::default())?;
//! let tab = session.tab()?;
//! let scanner = session.scanner(&ScriptSource::file("axe.min.js"))?;
//! let nav = session.find_element(&tab, "nav")?;
//!
//! // Configured include/exclude selectors do not apply to element scans
//! let result = scanner.analyze_element(&nav)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`scan`]: Scope resolution, invocation, validation and results
//! - [`driver`]: Script execution contract and its `headless_chrome` implementations
//! - [`script`]: Loading the scan engine script
//! - [`browser`]: Browser session management and configuration
//! - [`report`]: Plain-text reports and JSON output
//! - [`error`]: Error types and result aliases

pub mod browser;
pub mod driver;
pub mod error;
pub mod report;
pub mod scan;
pub mod script;

pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions};
pub use driver::{PageContext, ScriptExecutor};
pub use error::{A11yError, Result};
pub use scan::{A11yScanner, ScanContext, ScanInvoker, ScanOptions, ScanResult, ScopeManager, SelectorSet};
pub use script::ScriptSource;
