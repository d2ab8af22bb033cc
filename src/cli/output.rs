//! Output formatting for detected layouts
//!
//! Reports render as JSON, YAML or aligned human-readable text.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::error::LayoutError;
use crate::layout::{archive_name_for_classes_dir, FileSystemLayout, LayoutKind, PackagingType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

/// Everything a packaging step needs to know about one project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutReport {
    pub kind: LayoutKind,
    pub root: PathBuf,
    pub packaging: PackagingType,
    pub classes_dir: PathBuf,
    pub resources_dir: PathBuf,
    pub webapp_dir: PathBuf,
    pub archive_name: String,
}

impl LayoutReport {
    pub fn from_layout(layout: &dyn FileSystemLayout) -> Result<Self, LayoutError> {
        let classes_dir = layout.resolve_build_classes_dir();
        let archive_name = archive_name_for_classes_dir(&classes_dir);

        Ok(Self {
            kind: layout.kind(),
            root: layout.root_path().to_path_buf(),
            packaging: layout.determine_packaging_type()?,
            classes_dir,
            resources_dir: layout.resolve_build_resources_dir(),
            webapp_dir: layout.resolve_src_webapp_dir(),
            archive_name,
        })
    }
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &LayoutReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize report to YAML")
            }
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    fn format_human(&self, report: &LayoutReport) -> String {
        let rows = [
            ("Build tool", report.kind.to_string()),
            ("Root", report.root.display().to_string()),
            ("Packaging", report.packaging.to_string()),
            ("Classes", report.classes_dir.display().to_string()),
            ("Resources", report.resources_dir.display().to_string()),
            ("Web app", report.webapp_dir.display().to_string()),
            ("Archive", report.archive_name.clone()),
        ];

        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let mut output = String::new();
        for (label, value) in rows {
            output.push_str(&format!("{:<width$}  {}\n", label, value, width = width));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::layout::MavenLayout;
    use std::sync::Arc;

    fn maven_report() -> LayoutReport {
        let fs = MockFileSystem::with_root(PathBuf::from("/proj/module-a"));
        fs.add_file("pom.xml", "<project><packaging>war</packaging></project>");
        let layout = MavenLayout::new("/proj/module-a", Arc::new(fs));
        LayoutReport::from_layout(&layout).unwrap()
    }

    #[test]
    fn test_report_from_maven_layout() {
        let report = maven_report();

        assert_eq!(report.kind, LayoutKind::Maven);
        assert_eq!(report.packaging, PackagingType::War);
        assert_eq!(report.classes_dir, PathBuf::from("/proj/module-a/target/classes"));
        assert_eq!(report.archive_name, "module-a.jar");
    }

    #[test]
    fn test_json_output() {
        let output = OutputFormatter::new(OutputFormat::Json)
            .format(&maven_report())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["kind"], "maven");
        assert_eq!(value["packaging"], "war");
        assert_eq!(value["archive_name"], "module-a.jar");
    }

    #[test]
    fn test_yaml_output() {
        let output = OutputFormatter::new(OutputFormat::Yaml)
            .format(&maven_report())
            .unwrap();

        assert!(output.contains("kind: maven"));
        assert!(output.contains("packaging: war"));
    }

    #[test]
    fn test_human_output_is_aligned() {
        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&maven_report())
            .unwrap();

        assert!(output.contains("Build tool  Maven"));
        assert!(output.contains("Archive     module-a.jar"));
        assert_eq!(output.lines().count(), 7);
    }
}
