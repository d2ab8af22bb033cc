use buildlayout::cli::commands::{ArchiveNameArgs, CliArgs, Commands, DetectArgs};
use buildlayout::cli::output::{LayoutReport, OutputFormatter};
use buildlayout::util::logging::{init_logging, parse_level, LoggingConfig};
use buildlayout::{archive_name_for_classes_dir, LayoutConfig, LayoutFactory, LayoutRegistry, NAME, VERSION};

use clap::Parser;
use std::env;
use std::process;
use tracing::{debug, error, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Detect(detect_args) => handle_detect(detect_args),
        Commands::ArchiveName(archive_args) => handle_archive_name(archive_args),
    };

    process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let config = if let Some(level_str) = &args.log_level {
        LoggingConfig::with_level(parse_level(level_str))
    } else if args.verbose {
        LoggingConfig::development()
    } else if args.quiet {
        LoggingConfig::with_level(Level::ERROR)
    } else {
        let level_str = env::var("BUILDLAYOUT_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        LoggingConfig::with_level(parse_level(&level_str))
    };

    init_logging(config);
}

fn handle_detect(args: &DetectArgs) -> i32 {
    let mut config = LayoutConfig::from_env();
    if let Some(layout) = &args.layout {
        debug!("Layout override set to: {}", layout);
        config.layout_override = Some(layout.clone());
    }
    if let Some(maven_args) = &args.maven_args {
        debug!("Maven command line overridden to: {}", maven_args);
        config.maven_cmd_line_args = Some(maven_args.clone());
    }

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return 1;
    }
    for (key, value) in config.to_display_map() {
        debug!("config {} = {}", key, value);
    }

    let factory = LayoutFactory::new(config).with_registry(LayoutRegistry::with_builtins());
    let layout = match &args.project_path {
        Some(path) => factory.create_at(path),
        None => factory.create(),
    };

    let layout = match layout {
        Ok(layout) => layout,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    let report = match LayoutReport::from_layout(&*layout) {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    match OutputFormatter::new(args.format.into()).format(&report) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            0
        }
        Err(e) => {
            error!("Failed to format output: {:#}", e);
            1
        }
    }
}

fn handle_archive_name(args: &ArchiveNameArgs) -> i32 {
    println!("{}", archive_name_for_classes_dir(&args.classes_dir));
    0
}
