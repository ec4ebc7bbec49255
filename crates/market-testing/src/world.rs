//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated config directory
//! - Starting a mock marketplace
//! - Executing CLI commands against it

use anyhow::Result;
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::fixtures::Catalog;
use crate::server::MockMarket;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use market_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_market(fixtures::catalog(25));
/// world.command().args(["search", "games"]).write_stdin("q\n").assert().success();
/// ```
pub struct TestWorld {
    _temp_dir: TempDir,
    market_path: PathBuf,
    market: Option<MockMarket>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let market_path = temp_dir.path().join(".market");
        std::fs::create_dir_all(&market_path).expect("Failed to create market dir");

        Self {
            _temp_dir: temp_dir,
            market_path,
            market: None,
        }
    }

    /// Serve `catalog` from a mock marketplace for the lifetime of the world.
    pub fn with_market(mut self, catalog: Catalog) -> Self {
        self.market = Some(MockMarket::start(catalog));
        self
    }

    /// Write `contents` as the world's config.toml.
    pub fn with_config(self, contents: &str) -> Self {
        std::fs::write(self.config_path(), contents).expect("Failed to write config");
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.market_path.join("config.toml")
    }

    /// The running mock marketplace.
    ///
    /// Panics when the world was built without [`TestWorld::with_market`].
    pub fn market(&self) -> &MockMarket {
        self.market
            .as_ref()
            .expect("TestWorld has no mock market; call with_market first")
    }

    /// A `market` command isolated from the user's environment and pointed
    /// at the mock marketplace when one is running.
    pub fn command(&self) -> Command {
        let mut cmd = market_command();
        cmd.env("MARKET_PATH", &self.market_path)
            .env_remove("MARKET_API_URL")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");

        if let Some(market) = &self.market {
            cmd.env("MARKET_API_URL", market.url());
        }
        cmd
    }

    /// Run `market` with `args`, feeding `stdin`, and capture the output.
    pub fn run(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        let output = self.command().args(args).write_stdin(stdin).output()?;
        Ok(CliResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[allow(deprecated)]
fn market_command() -> Command {
    Command::cargo_bin("market").expect("market binary not built")
}

/// Captured result of a CLI invocation.
#[derive(Debug, Clone)]
pub struct CliResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.success
    }

    /// Number of `Page x/y` headers printed.
    pub fn pages_shown(&self) -> usize {
        self.stdout
            .lines()
            .filter(|line| line.trim_start().starts_with("Page "))
            .count()
    }
}
