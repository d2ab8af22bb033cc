//! Build-tool filesystem layouts
//!
//! A layout knows, for one build tool's conventions, where compiled classes,
//! processed resources and web-application sources live under a project root.
//! [`LayoutFactory`] picks the layout for a root; [`archive_name_for_classes_dir`]
//! names the artifact packaged from a classes directory.

#[macro_use]
mod id_enum_macro;

pub mod archive;
pub mod factory;
pub mod gradle;
pub mod layout_kind;
pub mod maven;
pub mod maven_args;
pub mod registry;

pub use archive::archive_name_for_classes_dir;
pub use factory::LayoutFactory;
pub use gradle::GradleLayout;
pub use layout_kind::LayoutKind;
pub use maven::MavenLayout;
pub use maven_args::{resolve_maven_build_file_name, MavenArg, MavenArgs};
pub use registry::{LayoutConstructor, LayoutRegistry, Provider};

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

pub const BUILD_GRADLE: &str = "build.gradle";

/// Kind of archive the project packages into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackagingType {
    Jar,
    War,
}

impl PackagingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackagingType::Jar => "jar",
            PackagingType::War => "war",
        }
    }
}

impl fmt::Display for PackagingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build-tool specific project structure rooted at one directory.
///
/// Implementations are immutable after construction. The `resolve_*` methods
/// must return equal paths on repeated calls while the filesystem is unchanged.
pub trait FileSystemLayout: fmt::Debug + Send + Sync {
    fn kind(&self) -> LayoutKind;

    /// Root supplied at construction
    fn root_path(&self) -> &Path;

    /// Inspects build metadata to decide between `jar` and `war`
    fn determine_packaging_type(&self) -> Result<PackagingType, LayoutError>;

    fn resolve_build_classes_dir(&self) -> PathBuf;

    fn resolve_build_resources_dir(&self) -> PathBuf;

    fn resolve_src_webapp_dir(&self) -> PathBuf;
}

/// Joins `relative` onto `root`, dropping root and prefix components so an
/// absolute `relative` still lands under `root`.
pub(crate) fn join_under_root(root: &Path, relative: impl AsRef<Path>) -> PathBuf {
    let mut joined = root.to_path_buf();
    for component in relative.as_ref().components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            other => joined.push(other),
        }
    }
    joined
}
