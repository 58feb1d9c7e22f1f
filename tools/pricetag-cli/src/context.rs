//! CLI execution context.

use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::config::PreviewConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["pricetag.toml", ".pricetag.toml", "pricetag.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Offers file contents.
    pub config: PreviewConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from an offers file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = if let Some(path) = config_path {
            PreviewConfig::load(path)?
        } else {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            // Try to find an offers file in current directory or parent directories
            Self::find_config(&cwd)?.unwrap_or_default()
        };

        Ok(Self { config, output })
    }

    /// Find an offers file in the directory tree.
    ///
    /// The first file found is used; if it fails to load, the error is
    /// returned rather than falling back to defaults.
    fn find_config(start: &Path) -> Result<Option<PreviewConfig>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    debug!(path = %config_path.display(), "using offers file");
                    let path = config_path
                        .to_str()
                        .with_context(|| format!("Non-UTF-8 offers file path: {}", config_path.display()))?;
                    let config = PreviewConfig::load(path)
                        .with_context(|| format!("Failed to load discovered offers file: {}", path))?;
                    return Ok(Some(config));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }
}
