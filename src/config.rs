//! Configuration for layout resolution
//!
//! Layout resolution reads three host inputs. They are collected into an
//! explicit [`LayoutConfig`] so callers and tests can inject them instead of
//! mutating the process environment.
//!
//! # Environment Variables
//!
//! - `BUILDLAYOUT_FILESYSTEM_LAYOUT`: name of a registered layout provider that
//!   replaces auto-detection
//! - `MAVEN_CMD_LINE_ARGS`: the last Maven command line, set by the `mvn`
//!   launcher; consulted for an alternate build file (`-f`)
//!
//! The working directory comes from [`std::env::current_dir`].

use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const LAYOUT_OVERRIDE_ENV: &str = "BUILDLAYOUT_FILESYSTEM_LAYOUT";
pub const MAVEN_CMD_LINE_ARGS_ENV: &str = "MAVEN_CMD_LINE_ARGS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required property not available: {0}")]
    MissingProperty(String),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Registered layout name that bypasses filesystem detection
    pub layout_override: Option<String>,
    /// Raw Maven command line, as exported by the `mvn` launcher
    pub maven_cmd_line_args: Option<String>,
    /// Root used by `LayoutFactory::create`
    pub working_dir: Option<PathBuf>,
}

impl LayoutConfig {
    /// Reads every input from the process environment.
    ///
    /// A working directory that cannot be determined (deleted, no permission)
    /// is left as `None`; `LayoutFactory::create` reports it.
    pub fn from_env() -> Self {
        let layout_override = env::var(LAYOUT_OVERRIDE_ENV).ok();
        let maven_cmd_line_args = env::var(MAVEN_CMD_LINE_ARGS_ENV).ok();
        let working_dir = env::current_dir().ok();

        Self {
            layout_override,
            maven_cmd_line_args,
            working_dir,
        }
    }

    pub fn with_layout_override(mut self, name: impl Into<String>) -> Self {
        self.layout_override = Some(name.into());
        self
    }

    pub fn with_maven_cmd_line_args(mut self, args: impl Into<String>) -> Self {
        self.maven_cmd_line_args = Some(args.into());
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.working_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::ValidationFailed(format!(
                    "Working directory must be absolute: {}",
                    dir.display()
                )));
            }
        }

        Ok(())
    }

    pub fn to_display_map(&self) -> std::collections::BTreeMap<String, String> {
        let mut map = std::collections::BTreeMap::new();

        if let Some(name) = &self.layout_override {
            map.insert("layout_override".to_string(), name.clone());
        }
        if let Some(args) = &self.maven_cmd_line_args {
            map.insert("maven_cmd_line_args".to_string(), args.clone());
        }
        if let Some(dir) = &self.working_dir {
            map.insert("working_dir".to_string(), dir.display().to_string());
        }

        map
    }
}
