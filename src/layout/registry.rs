//! Named layout providers for the override hook
//!
//! Instead of loading an implementation by type name at runtime, modules that
//! offer a custom layout register a constructor under a name before the
//! factory runs. Constructors receive the project root and the factory's
//! [`FileSystem`], so built-in layouts probe the same filesystem the factory
//! detected with. The registry is a plain owned value: registration needs
//! `&mut self`, lookups `&self`. Populate it first, then share it read-only
//! (for instance behind an `Arc`); concurrent registration is not supported
//! and no lock is taken.

use super::{FileSystemLayout, GradleLayout, LayoutKind, MavenLayout};
use crate::fs::FileSystem;
use anyhow::Result;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Builds a layout from the project root and the filesystem to probe it with.
pub type LayoutConstructor =
    Arc<dyn Fn(&Path, Arc<dyn FileSystem>) -> Result<Box<dyn FileSystemLayout>> + Send + Sync>;

#[derive(Clone)]
pub enum Provider {
    /// Constructs layouts
    Layout(LayoutConstructor),
    /// Known under this name, but not a layout implementation
    Other { description: String },
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Layout(_) => f.write_str("Provider::Layout"),
            Provider::Other { description } => f
                .debug_struct("Provider::Other")
                .field("description", description)
                .finish(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    providers: HashMap<String, Provider>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry offering the built-in strategies under `maven` and `gradle`,
    /// so an override can force either one.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        for kind in LayoutKind::all_variants() {
            let constructor = match kind {
                LayoutKind::Maven => maven_constructor(),
                LayoutKind::Gradle => gradle_constructor(),
                LayoutKind::Custom(_) => continue,
            };
            registry
                .providers
                .insert(kind.as_str().to_string(), Provider::Layout(constructor));
        }

        registry
    }

    /// Registers a layout constructor. A previous registration under the
    /// same name is replaced and returned.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> Option<Provider>
    where
        F: Fn(&Path, Arc<dyn FileSystem>) -> Result<Box<dyn FileSystemLayout>>
            + Send
            + Sync
            + 'static,
    {
        self.providers
            .insert(name.into(), Provider::Layout(Arc::new(constructor)))
    }

    /// Registers a name that resolves to something other than a layout.
    pub fn register_other(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Option<Provider> {
        self.providers.insert(
            name.into(),
            Provider::Other {
                description: description.into(),
            },
        )
    }

    pub fn get(&self, name: &str) -> Option<&Provider> {
        self.providers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

fn maven_constructor() -> LayoutConstructor {
    Arc::new(
        |root: &Path, fs: Arc<dyn FileSystem>| -> Result<Box<dyn FileSystemLayout>> {
            Ok(Box::new(MavenLayout::new(root, fs)))
        },
    )
}

fn gradle_constructor() -> LayoutConstructor {
    Arc::new(
        |root: &Path, fs: Arc<dyn FileSystem>| -> Result<Box<dyn FileSystemLayout>> {
            Ok(Box::new(GradleLayout::new(root, fs)))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use std::path::PathBuf;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = LayoutRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("maven").is_none());
    }

    #[test]
    fn test_builtins_registered() {
        let fs: Arc<dyn FileSystem> = Arc::new(MockFileSystem::with_root(PathBuf::from("/repo")));
        let registry = LayoutRegistry::with_builtins();

        assert_eq!(registry.names(), vec!["gradle", "maven"]);

        let Some(Provider::Layout(constructor)) = registry.get("gradle") else {
            panic!("gradle should be a layout provider");
        };
        let layout = constructor(Path::new("/repo"), fs).unwrap();
        assert_eq!(layout.kind(), LayoutKind::Gradle);
        assert_eq!(layout.root_path(), Path::new("/repo"));
    }

    #[test]
    fn test_register_replaces_previous() {
        let mut registry = LayoutRegistry::new();
        registry.register_other("acme", "a logging plugin");
        let previous = registry.register("acme", |root: &Path, fs: Arc<dyn FileSystem>| {
            Ok(Box::new(MavenLayout::new(root, fs)) as Box<dyn FileSystemLayout>)
        });

        assert!(matches!(previous, Some(Provider::Other { .. })));
        assert!(matches!(registry.get("acme"), Some(Provider::Layout(_))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_is_exact() {
        let mut registry = LayoutRegistry::new();
        registry.register_other("com.example.Layout", "not a layout");

        assert!(registry.contains("com.example.Layout"));
        assert!(!registry.contains("com.example.layout"));
    }
}
