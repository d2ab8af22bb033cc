use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use super::output::OutputFormat;

/// Locates build output directories of Maven and Gradle projects
#[derive(Parser, Debug)]
#[command(
    name = "buildlayout",
    about = "Locates build output directories of Maven and Gradle projects",
    version,
    long_about = "buildlayout inspects a project root, decides whether Maven or Gradle \
                  built it, and reports where compiled classes, resources and web assets \
                  live. Set BUILDLAYOUT_FILESYSTEM_LAYOUT to force a registered layout."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect the build layout of a project",
        long_about = "Detects the build tool of a project root and reports its packaging \
                      type and output directories.\n\n\
                      Examples:\n  \
                      buildlayout detect\n  \
                      buildlayout detect /path/to/project --format json\n  \
                      buildlayout detect --layout gradle\n  \
                      buildlayout detect --maven-args \"-f custom-pom.xml\""
    )]
    Detect(DetectArgs),

    #[command(
        about = "Print the archive name for a classes directory",
        long_about = "Derives the archive name from a compiled-classes directory.\n\n\
                      Examples:\n  \
                      buildlayout archive-name module-a/target/classes\n  \
                      buildlayout archive-name module-b/build/classes/main"
    )]
    ArchiveName(ArchiveNameArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "PATH",
        help = "Project root (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'l',
        long,
        value_name = "NAME",
        help = "Force a registered layout (maven, gradle) instead of detecting one"
    )]
    pub layout: Option<String>,

    #[arg(
        long,
        value_name = "ARGS",
        allow_hyphen_values = true,
        help = "Maven command line to take -f from (overrides MAVEN_CMD_LINE_ARGS)"
    )]
    pub maven_args: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ArchiveNameArgs {
    #[arg(value_name = "CLASSES_DIR", help = "Compiled classes directory")]
    pub classes_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Human,
    Json,
    Yaml,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detect_defaults() {
        let args = CliArgs::try_parse_from(["buildlayout", "detect"]).unwrap();
        match args.command {
            Commands::Detect(detect) => {
                assert!(detect.project_path.is_none());
                assert_eq!(detect.format, OutputFormatArg::Human);
                assert!(detect.layout.is_none());
                assert!(detect.maven_args.is_none());
            }
            _ => panic!("Expected detect command"),
        }
    }

    #[test]
    fn test_parse_detect_with_options() {
        let args = CliArgs::try_parse_from([
            "buildlayout",
            "detect",
            "/repo",
            "--format",
            "json",
            "--layout",
            "gradle",
            "--maven-args",
            "-o -f custom.xml",
        ])
        .unwrap();

        match args.command {
            Commands::Detect(detect) => {
                assert_eq!(detect.project_path, Some(PathBuf::from("/repo")));
                assert_eq!(detect.format, OutputFormatArg::Json);
                assert_eq!(detect.layout.as_deref(), Some("gradle"));
                assert_eq!(detect.maven_args.as_deref(), Some("-o -f custom.xml"));
            }
            _ => panic!("Expected detect command"),
        }
    }

    #[test]
    fn test_parse_archive_name() {
        let args =
            CliArgs::try_parse_from(["buildlayout", "archive-name", "a/target/classes"]).unwrap();
        match args.command {
            Commands::ArchiveName(archive) => {
                assert_eq!(archive.classes_dir, PathBuf::from("a/target/classes"));
            }
            _ => panic!("Expected archive-name command"),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(CliArgs::try_parse_from(["buildlayout", "-v", "-q", "detect"]).is_err());
    }
}
