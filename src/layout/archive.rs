//! Archive naming from compiled-classes directories

use std::path::{Component, Path};
use uuid::Uuid;

const JAR_EXTENSION: &str = ".jar";

const TARGET_CLASSES: &str = "target/classes";
const BUILD_CLASSES_MAIN: &str = "build/classes/main";
const BUILD_RESOURCES_MAIN: &str = "build/resources/main";

/// Derives the archive name for the module that owns `path`.
///
/// - `<module>/target/classes` (Maven) gives `<module>.jar`
/// - `<module>/build/classes/main` and `<module>/build/resources/main`
///   (Gradle, Gradle 4+) give `<module>.jar`
/// - anything else gives `<random uuid>.jar`
///
/// The fallback is not stable across calls. Gradle's
/// `build/classes/java/main` is not one of the recognized suffixes and also
/// takes the random branch.
pub fn archive_name_for_classes_dir(path: &Path) -> String {
    let module = if path.ends_with(TARGET_CLASSES) {
        name_from_end(path, 3)
    } else if path.ends_with(BUILD_CLASSES_MAIN) || path.ends_with(BUILD_RESOURCES_MAIN) {
        name_from_end(path, 4)
    } else {
        None
    };

    match module {
        Some(name) => format!("{}{}", name, JAR_EXTENSION),
        None => format!("{}{}", Uuid::new_v4(), JAR_EXTENSION),
    }
}

/// The `n`th path name counting from the last (1-based), ignoring any root or prefix.
fn name_from_end(path: &Path, n: usize) -> Option<String> {
    let names: Vec<&std::ffi::OsStr> = path
        .components()
        .filter_map(|c| match c {
            Component::Prefix(_) | Component::RootDir => None,
            other => Some(other.as_os_str()),
        })
        .collect();

    let index = names.len().checked_sub(n)?;
    Some(names[index].to_string_lossy().into_owned())
}
