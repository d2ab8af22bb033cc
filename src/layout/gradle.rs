//! Gradle project layout

use super::{FileSystemLayout, LayoutKind, PackagingType, BUILD_GRADLE};
use crate::error::LayoutError;
use crate::fs::FileSystem;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::debug;

const BUILD_CLASSES_JAVA_MAIN: &str = "build/classes/java/main";
const BUILD_CLASSES_MAIN: &str = "build/classes/main";
const BUILD_RESOURCES_MAIN: &str = "build/resources/main";
const SRC_MAIN_WEBAPP: &str = "src/main/webapp";

pub struct GradleLayout {
    root: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl GradleLayout {
    pub fn new(root: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            root: root.into(),
            fs,
        }
    }

    pub fn build_file_path(&self) -> PathBuf {
        self.root.join(BUILD_GRADLE)
    }
}

impl fmt::Debug for GradleLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradleLayout")
            .field("root", &self.root)
            .finish()
    }
}

impl FileSystemLayout for GradleLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Gradle
    }

    fn root_path(&self) -> &Path {
        &self.root
    }

    fn determine_packaging_type(&self) -> Result<PackagingType, LayoutError> {
        let path = self.build_file_path();
        let script = self
            .fs
            .read_to_string(&path)
            .map_err(|e| LayoutError::Metadata {
                path: path.clone(),
                message: format!("{:#}", e),
            })?;

        if applies_war_plugin(&script) {
            debug!("{} applies the war plugin", path.display());
            Ok(PackagingType::War)
        } else {
            Ok(PackagingType::Jar)
        }
    }

    /// Gradle 4+ compiles into a per-language directory; older versions
    /// share `build/classes/main`.
    fn resolve_build_classes_dir(&self) -> PathBuf {
        let per_language = self.root.join(BUILD_CLASSES_JAVA_MAIN);
        if self.fs.is_dir(&per_language) {
            per_language
        } else {
            self.root.join(BUILD_CLASSES_MAIN)
        }
    }

    fn resolve_build_resources_dir(&self) -> PathBuf {
        self.root.join(BUILD_RESOURCES_MAIN)
    }

    fn resolve_src_webapp_dir(&self) -> PathBuf {
        self.root.join(SRC_MAIN_WEBAPP)
    }
}

/// `apply plugin: 'war'`, `id 'war'` or `id("war")` starting a statement.
/// Line comments never match because the statement must open the line or
/// follow `{` / `;`.
fn war_plugin_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"(?m)(?:^|[{;])[ \t]*(?:apply\s+plugin\s*:\s*['"]war['"]|id\s*\(?\s*['"]war['"])"#,
        )
        .expect("valid war plugin regex")
    })
}

/// A bare `war` line inside a `plugins {}` block.
fn bare_war_plugin_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?m)\bplugins\s*\{[^}]*?^[ \t]*war[ \t]*$")
            .expect("valid bare war plugin regex")
    })
}

fn applies_war_plugin(script: &str) -> bool {
    war_plugin_pattern().is_match(script) || bare_war_plugin_pattern().is_match(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use yare::parameterized;

    fn mock_fs() -> MockFileSystem {
        MockFileSystem::with_root(PathBuf::from("/repo"))
    }

    #[test]
    fn test_classes_dir_prefers_per_language_output() {
        let fs = mock_fs();
        fs.add_dir("build/classes/java/main");
        let layout = GradleLayout::new("/repo", Arc::new(fs));

        assert_eq!(
            layout.resolve_build_classes_dir(),
            PathBuf::from("/repo/build/classes/java/main")
        );
    }

    #[test]
    fn test_classes_dir_falls_back_to_legacy_output() {
        let layout = GradleLayout::new("/repo", Arc::new(mock_fs()));

        assert_eq!(
            layout.resolve_build_classes_dir(),
            PathBuf::from("/repo/build/classes/main")
        );
    }

    #[test]
    fn test_resources_and_webapp_dirs() {
        let layout = GradleLayout::new("/repo", Arc::new(mock_fs()));

        assert_eq!(layout.kind(), LayoutKind::Gradle);
        assert_eq!(layout.root_path(), Path::new("/repo"));
        assert_eq!(
            layout.resolve_build_resources_dir(),
            PathBuf::from("/repo/build/resources/main")
        );
        assert_eq!(
            layout.resolve_src_webapp_dir(),
            PathBuf::from("/repo/src/main/webapp")
        );
    }

    #[test]
    fn test_repeated_resolution_is_stable() {
        let fs = mock_fs();
        fs.add_dir("build/classes/java/main");
        let layout = GradleLayout::new("/repo", Arc::new(fs));

        assert_eq!(
            layout.resolve_build_classes_dir(),
            layout.resolve_build_classes_dir()
        );
    }

    #[parameterized(
        apply_single_quotes = { "apply plugin: 'war'" },
        apply_double_quotes = { "apply plugin: \"war\"" },
        plugins_id = { "plugins {\n    id 'war'\n}" },
        plugins_id_parens = { "plugins {\n    id(\"war\")\n}" },
        plugins_bare = { "plugins {\n    java\n    war\n}" },
        plugins_one_line = { "plugins { id 'war' }" },
        after_java = { "apply plugin: 'java'; apply plugin: 'war'" },
    )]
    fn test_war_packaging(script: &str) {
        let fs = mock_fs();
        fs.add_file("build.gradle", script);
        let layout = GradleLayout::new("/repo", Arc::new(fs));

        assert_eq!(
            layout.determine_packaging_type().unwrap(),
            PackagingType::War
        );
    }

    #[parameterized(
        java_plugin = { "apply plugin: 'java'" },
        spring_war_name = { "bootWar { archiveFileName = 'app.war' }" },
        empty = { "" },
        commented_apply = { "// apply plugin: 'war'\napply plugin: 'java'" },
        commented_id = { "plugins {\n    // id 'war'\n    id 'java'\n}" },
        bare_war_outside_plugins = { "tasks {\n    war\n}" },
    )]
    fn test_jar_packaging(script: &str) {
        let fs = mock_fs();
        fs.add_file("build.gradle", script);
        let layout = GradleLayout::new("/repo", Arc::new(fs));

        assert_eq!(
            layout.determine_packaging_type().unwrap(),
            PackagingType::Jar
        );
    }

    #[test]
    fn test_missing_build_script_is_metadata_error() {
        let layout = GradleLayout::new("/repo", Arc::new(mock_fs()));
        assert!(matches!(
            layout.determine_packaging_type(),
            Err(LayoutError::Metadata { .. })
        ));
    }
}
