//! buildlayout - build-tool filesystem layouts for packaging tools
//!
//! Given a project root, this library decides whether Maven or Gradle built
//! the project and where that tool put compiled classes, processed resources
//! and web-application sources.
//!
//! # Example
//!
//! ```no_run
//! use buildlayout::{LayoutConfig, LayoutFactory, LayoutRegistry};
//!
//! # fn example() -> Result<(), buildlayout::LayoutError> {
//! let factory = LayoutFactory::new(LayoutConfig::from_env())
//!     .with_registry(LayoutRegistry::with_builtins());
//! let layout = factory.create()?;
//!
//! println!("{} project", layout.kind());
//! println!("classes: {}", layout.resolve_build_classes_dir().display());
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`layout`]: the layout trait, Maven/Gradle strategies, registry and factory
//! - [`fs`]: file system abstraction used for every probe
//! - [`config`]: explicit resolution inputs
//! - [`cli`]: argument parsing and report formatting for the binary

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod layout;
pub mod util;

pub use config::{ConfigError, LayoutConfig};
pub use error::LayoutError;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use layout::{
    archive_name_for_classes_dir, resolve_maven_build_file_name, FileSystemLayout, GradleLayout,
    LayoutFactory, LayoutKind, LayoutRegistry, MavenLayout, PackagingType,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");
