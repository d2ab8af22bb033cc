//! Maven project layout

use super::maven_args::resolve_maven_build_file_name;
use super::{join_under_root, FileSystemLayout, LayoutKind, PackagingType};
use crate::error::LayoutError;
use crate::fs::FileSystem;
use roxmltree::Document;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

const TARGET: &str = "target";
const CLASSES: &str = "classes";
const SRC_MAIN_WEBAPP: &str = "src/main/webapp";

pub struct MavenLayout {
    root: PathBuf,
    build_file: String,
    fs: Arc<dyn FileSystem>,
}

impl MavenLayout {
    /// Layout reading `pom.xml` for its metadata
    pub fn new(root: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self::with_build_file(root, resolve_maven_build_file_name(None), fs)
    }

    /// Layout reading an alternate build file (as passed with `mvn -f`)
    pub fn with_build_file(
        root: impl Into<PathBuf>,
        build_file: impl Into<String>,
        fs: Arc<dyn FileSystem>,
    ) -> Self {
        Self {
            root: root.into(),
            build_file: build_file.into(),
            fs,
        }
    }

    /// The build file always resolves under the root, even for an absolute `-f`.
    pub fn build_file_path(&self) -> PathBuf {
        join_under_root(&self.root, &self.build_file)
    }
}

impl fmt::Debug for MavenLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MavenLayout")
            .field("root", &self.root)
            .field("build_file", &self.build_file)
            .finish()
    }
}

impl FileSystemLayout for MavenLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Maven
    }

    fn root_path(&self) -> &Path {
        &self.root
    }

    fn determine_packaging_type(&self) -> Result<PackagingType, LayoutError> {
        let path = self.build_file_path();
        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|e| LayoutError::Metadata {
                path: path.clone(),
                message: format!("{:#}", e),
            })?;

        let packaging = parse_packaging(&content).map_err(|e| LayoutError::Metadata {
            path: path.clone(),
            message: e.to_string(),
        })?;
        debug!(
            "Maven packaging for {}: {}",
            path.display(),
            packaging.as_deref().unwrap_or("<default>")
        );

        Ok(match packaging.as_deref() {
            Some("war") => PackagingType::War,
            _ => PackagingType::Jar,
        })
    }

    fn resolve_build_classes_dir(&self) -> PathBuf {
        self.root.join(TARGET).join(CLASSES)
    }

    fn resolve_build_resources_dir(&self) -> PathBuf {
        self.root.join(TARGET).join(CLASSES)
    }

    fn resolve_src_webapp_dir(&self) -> PathBuf {
        self.root.join(SRC_MAIN_WEBAPP)
    }
}

/// `<packaging>` of the root `<project>`, ignoring nested elements such as
/// plugin configuration that happen to share the name.
fn parse_packaging(manifest_content: &str) -> Result<Option<String>, roxmltree::Error> {
    let doc = Document::parse(manifest_content)?;

    let packaging = doc
        .root_element()
        .children()
        .find(|child| child.has_tag_name("packaging"))
        .and_then(|node| node.text())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());

    Ok(packaging)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    fn layout_with_pom(pom: &str) -> MavenLayout {
        let fs = MockFileSystem::with_root(PathBuf::from("/repo"));
        fs.add_file("pom.xml", pom);
        MavenLayout::new("/repo", Arc::new(fs))
    }

    #[test]
    fn test_resolve_dirs() {
        let layout = layout_with_pom("<project/>");

        assert_eq!(layout.kind(), LayoutKind::Maven);
        assert_eq!(layout.root_path(), Path::new("/repo"));
        assert_eq!(
            layout.resolve_build_classes_dir(),
            PathBuf::from("/repo/target/classes")
        );
        assert_eq!(
            layout.resolve_build_resources_dir(),
            PathBuf::from("/repo/target/classes")
        );
        assert_eq!(
            layout.resolve_src_webapp_dir(),
            PathBuf::from("/repo/src/main/webapp")
        );
    }

    #[test]
    fn test_war_packaging() {
        let layout = layout_with_pom(
            r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
                <artifactId>web</artifactId>
                <packaging>war</packaging>
            </project>"#,
        );
        assert_eq!(
            layout.determine_packaging_type().unwrap(),
            PackagingType::War
        );
    }

    #[test]
    fn test_default_packaging_is_jar() {
        let layout = layout_with_pom("<project><artifactId>lib</artifactId></project>");
        assert_eq!(
            layout.determine_packaging_type().unwrap(),
            PackagingType::Jar
        );
    }

    #[test]
    fn test_other_packaging_is_jar() {
        let layout = layout_with_pom("<project><packaging>bundle</packaging></project>");
        assert_eq!(
            layout.determine_packaging_type().unwrap(),
            PackagingType::Jar
        );
    }

    #[test]
    fn test_nested_packaging_ignored() {
        let layout = layout_with_pom(
            r#"<project>
                <build><plugins><plugin><configuration>
                    <packaging>war</packaging>
                </configuration></plugin></plugins></build>
            </project>"#,
        );
        assert_eq!(
            layout.determine_packaging_type().unwrap(),
            PackagingType::Jar
        );
    }

    #[test]
    fn test_malformed_pom_is_metadata_error() {
        let layout = layout_with_pom("<project><packaging>war</project>");
        let err = layout.determine_packaging_type().unwrap_err();
        assert!(matches!(err, LayoutError::Metadata { .. }));
    }

    #[test]
    fn test_missing_pom_is_metadata_error() {
        let fs = MockFileSystem::with_root(PathBuf::from("/repo"));
        let layout = MavenLayout::new("/repo", Arc::new(fs));

        match layout.determine_packaging_type() {
            Err(LayoutError::Metadata { path, .. }) => {
                assert_eq!(path, PathBuf::from("/repo/pom.xml"));
            }
            other => panic!("Expected Metadata error, got {:?}", other),
        }
    }

    #[test]
    fn test_alternate_build_file() {
        let fs = MockFileSystem::with_root(PathBuf::from("/repo"));
        fs.add_file("custom.xml", "<project><packaging>war</packaging></project>");
        let layout = MavenLayout::with_build_file("/repo", "custom.xml", Arc::new(fs));

        assert_eq!(layout.build_file_path(), PathBuf::from("/repo/custom.xml"));
        assert_eq!(
            layout.determine_packaging_type().unwrap(),
            PackagingType::War
        );
    }
}
