pub mod commands;
pub mod output;

pub use commands::{ArchiveNameArgs, CliArgs, Commands, DetectArgs, OutputFormatArg};
pub use output::{LayoutReport, OutputFormat, OutputFormatter};
