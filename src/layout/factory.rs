//! Layout selection for a project root
//!
//! Resolution order, first match wins:
//!
//! 1. the configured override, looked up in the [`LayoutRegistry`]
//! 2. the Maven build file (`pom.xml`, or the `-f` file from `MAVEN_CMD_LINE_ARGS`)
//! 3. `build.gradle`
//!
//! A root with none of these is an error.

use super::maven_args::resolve_maven_build_file_name;
use super::{FileSystemLayout, GradleLayout, LayoutRegistry, MavenLayout, Provider, BUILD_GRADLE};
use crate::config::{ConfigError, LayoutConfig};
use crate::error::LayoutError;
use crate::fs::{FileSystem, RealFileSystem};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct LayoutFactory {
    config: LayoutConfig,
    registry: Arc<LayoutRegistry>,
    fs: Arc<dyn FileSystem>,
}

impl LayoutFactory {
    /// Factory over the real file system with an empty registry
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            registry: Arc::new(LayoutRegistry::new()),
            fs: Arc::new(RealFileSystem::new()),
        }
    }

    pub fn with_registry(mut self, registry: impl Into<Arc<LayoutRegistry>>) -> Self {
        self.registry = registry.into();
        self
    }

    pub fn with_filesystem(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    /// Resolves the layout rooted at the configured working directory.
    pub fn create(&self) -> Result<Box<dyn FileSystemLayout>, LayoutError> {
        let working_dir = self
            .config
            .working_dir
            .as_deref()
            .ok_or_else(|| ConfigError::MissingProperty("working directory".to_string()))?;

        self.create_at(working_dir)
    }

    /// Resolves the layout rooted at `root`.
    pub fn create_at(&self, root: impl AsRef<Path>) -> Result<Box<dyn FileSystemLayout>, LayoutError> {
        let root = self.normalize_root(root.as_ref());
        debug!("Resolving filesystem layout for {}", root.display());

        if let Some(layout) = self.try_override(&root)? {
            info!(
                "Using {} layout from override for {}",
                layout.kind(),
                root.display()
            );
            return Ok(layout);
        }

        let maven_build_file =
            resolve_maven_build_file_name(self.config.maven_cmd_line_args.as_deref());
        let maven = MavenLayout::with_build_file(&root, maven_build_file, Arc::clone(&self.fs));
        let maven_manifest = maven.build_file_path();
        debug!("Probing for Maven build file {}", maven_manifest.display());
        if self.fs.exists(&maven_manifest) {
            info!("Detected Maven layout at {}", root.display());
            return Ok(Box::new(maven));
        }

        let gradle_manifest = root.join(BUILD_GRADLE);
        debug!("Probing for Gradle build file {}", gradle_manifest.display());
        if self.fs.exists(&gradle_manifest) {
            info!("Detected Gradle layout at {}", root.display());
            return Ok(Box::new(GradleLayout::new(root, Arc::clone(&self.fs))));
        }

        Err(LayoutError::Resolution(root.display().to_string()))
    }

    /// `Ok(None)` means the override is unset or unusable and detection
    /// should continue; a missing or failing provider is fatal.
    fn try_override(&self, root: &Path) -> Result<Option<Box<dyn FileSystemLayout>>, LayoutError> {
        let Some(raw_name) = self.config.layout_override.as_deref() else {
            return Ok(None);
        };

        let name = raw_name.trim();
        if name.is_empty() {
            warn!("Invalid filesystem layout provided: layout name is empty");
            return Ok(None);
        }

        match self.registry.get(name) {
            None => {
                let msg = format!(
                    "Unable to instantiate layout ({}) due to: no layout registered under that name",
                    name
                );
                warn!("Invalid filesystem layout provided: {}", msg);
                Err(LayoutError::Resolution(msg))
            }
            Some(Provider::Other { description }) => {
                warn!(
                    "Invalid filesystem layout provided: {} ({}) does not implement FileSystemLayout",
                    name, description
                );
                Ok(None)
            }
            Some(Provider::Layout(constructor)) => match constructor(root, Arc::clone(&self.fs)) {
                Ok(layout) => Ok(Some(layout)),
                Err(e) => {
                    let msg = format!("Unable to instantiate layout ({}) due to: {}", name, e);
                    warn!("Invalid filesystem layout provided: {}", msg);
                    debug!("Layout constructor error chain: {:?}", e);
                    Err(LayoutError::Resolution(msg))
                }
            },
        }
    }

    /// Relative roots resolve against the configured working directory, or
    /// the process working directory when none is configured.
    fn normalize_root(&self, root: &Path) -> PathBuf {
        let root = if root.is_absolute() {
            root.to_path_buf()
        } else if let Some(dir) = &self.config.working_dir {
            dir.join(root)
        } else {
            match env::current_dir() {
                Ok(cwd) => cwd.join(root),
                Err(e) => {
                    warn!("Cannot resolve relative root {}: {}", root.display(), e);
                    root.to_path_buf()
                }
            }
        };

        match self.fs.canonicalize(&root) {
            Ok(canonical) => canonical,
            Err(e) => {
                debug!("Using root as given: {:#}", e);
                root
            }
        }
    }
}
