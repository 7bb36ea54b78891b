use crate::driver::{PageContext, ScriptExecutor};
use crate::error::Result;
use crate::scan::invoker::ScanInvoker;
use crate::scan::options::ScanOptions;
use crate::scan::result::ScanResult;
use crate::scan::scope::ScopeManager;
use crate::script::ScriptSource;
use std::time::Duration;

/// Fluent entry point for scanning a page.
///
/// Configure the scope with [`include`](Self::include) and [`exclude`](Self::exclude),
/// then call [`analyze`](Self::analyze) or [`analyze_element`](Self::analyze_element).
/// Configuration and analysis are expected to happen in sequence on one thread.
///
/// ```rust,no_run
/// use browser_a11y::{A11yScanner, BrowserSession, LaunchOptions, ScriptSource};
///
/// # fn main() -> browser_a11y::Result<()> {
/// let session = BrowserSession::launch(LaunchOptions::default())?;
/// session.navigate("https://example.com")?;
/// session.wait_for_navigation()?;
///
/// let result = A11yScanner::new(session.tab()?, &ScriptSource::file("axe.min.js"))?
///     .include(["#main"])
///     .exclude([".ad"])
///     .analyze()?;
///
/// println!("{} violations", result.violations().len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct A11yScanner<P> {
    page: P,
    scope: ScopeManager,
    options: ScanOptions,
    invoker: ScanInvoker,
}

impl<P: PageContext> A11yScanner<P> {
    /// Inject the scan engine into `page` and return a scanner with an empty scope
    pub fn new(page: P, script: &ScriptSource) -> Result<Self> {
        let source = script.load()?;
        page.inject_script(&source)?;
        Ok(Self::with_engine_present(page))
    }

    /// Scanner for a page that already has the scan engine loaded
    pub fn with_engine_present(page: P) -> Self {
        Self {
            page,
            scope: ScopeManager::new(),
            options: ScanOptions::default(),
            invoker: ScanInvoker::new(),
        }
    }

    /// Add selectors to scan
    pub fn include<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope.include(selectors);
        self
    }

    /// Add selectors to leave out of the scan
    pub fn exclude<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope.exclude(selectors);
        self
    }

    /// Set the engine options
    pub fn options(mut self, options: impl Into<ScanOptions>) -> Self {
        self.options = options.into();
        self
    }

    /// Set the execution bound for each scan
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.invoker = self.invoker.timeout(timeout);
        self
    }

    /// Set the global the engine registers itself under
    pub fn engine_global(mut self, engine_global: impl Into<String>) -> Self {
        self.invoker = self.invoker.engine_global(engine_global);
        self
    }

    /// The configured scope
    pub fn scope(&self) -> &ScopeManager {
        &self.scope
    }

    /// The configured engine options
    pub fn scan_options(&self) -> &ScanOptions {
        &self.options
    }

    /// The page this scanner runs in
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Scan the page within the configured scope
    pub fn analyze(&self) -> Result<ScanResult> {
        let result = self.invoker.analyze_document(&self.page, &self.scope, &self.options)?;
        log::info!(
            "Scan finished: {} violations, {} passes",
            result.violations().len(),
            result.passes().len()
        );
        Ok(result)
    }

    /// Scan a single element, ignoring the configured scope
    pub fn analyze_element<E>(&self, element: &E) -> Result<ScanResult>
    where
        E: ScriptExecutor + ?Sized,
    {
        self.invoker.analyze_element(element, &self.options)
    }
}
