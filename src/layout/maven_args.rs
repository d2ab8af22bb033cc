//! Extraction of value-taking flags from a Maven command line
//!
//! The `mvn` launcher exports the arguments of the current invocation as
//! `MAVEN_CMD_LINE_ARGS`. Only flags that take a value are recognized; all
//! other tokens are skipped.

use std::fmt;

pub const DEFAULT_BUILD_FILE: &str = "pom.xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MavenArg {
    /// Alternate POM (`-f`, `--file`)
    File,
    Settings,
    GlobalSettings,
    Toolchains,
    Projects,
    ActivateProfiles,
    Threads,
    LogFile,
    ResumeFrom,
}

impl MavenArg {
    pub fn all_variants() -> &'static [MavenArg] {
        &[
            MavenArg::File,
            MavenArg::Settings,
            MavenArg::GlobalSettings,
            MavenArg::Toolchains,
            MavenArg::Projects,
            MavenArg::ActivateProfiles,
            MavenArg::Threads,
            MavenArg::LogFile,
            MavenArg::ResumeFrom,
        ]
    }

    pub fn short_flag(&self) -> &'static str {
        match self {
            MavenArg::File => "-f",
            MavenArg::Settings => "-s",
            MavenArg::GlobalSettings => "-gs",
            MavenArg::Toolchains => "-t",
            MavenArg::Projects => "-pl",
            MavenArg::ActivateProfiles => "-P",
            MavenArg::Threads => "-T",
            MavenArg::LogFile => "-l",
            MavenArg::ResumeFrom => "-rf",
        }
    }

    pub fn long_flag(&self) -> &'static str {
        match self {
            MavenArg::File => "--file",
            MavenArg::Settings => "--settings",
            MavenArg::GlobalSettings => "--global-settings",
            MavenArg::Toolchains => "--toolchains",
            MavenArg::Projects => "--projects",
            MavenArg::ActivateProfiles => "--activate-profiles",
            MavenArg::Threads => "--threads",
            MavenArg::LogFile => "--log-file",
            MavenArg::ResumeFrom => "--resume-from",
        }
    }

    /// Maven flags are case-sensitive (`-P` and `-p` differ).
    pub fn from_flag(token: &str) -> Option<MavenArg> {
        Self::all_variants()
            .iter()
            .copied()
            .find(|arg| arg.short_flag() == token || arg.long_flag() == token)
    }
}

impl fmt::Display for MavenArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_flag())
    }
}

/// Parsed flag/value pairs, in the order each flag was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MavenArgs {
    values: Vec<(MavenArg, String)>,
}

impl MavenArgs {
    /// Parses a raw command line. Never fails: anything unrecognized is skipped.
    pub fn parse(cmd_line: &str) -> Self {
        let mut args = MavenArgs::default();
        let mut tokens = cmd_line.split_whitespace().peekable();

        while let Some(token) = tokens.next() {
            if let Some((flag, value)) = token.split_once('=') {
                if flag.starts_with("--") {
                    if let Some(arg) = MavenArg::from_flag(flag) {
                        if !value.is_empty() {
                            args.insert(arg, value);
                        }
                    }
                    continue;
                }
            }

            let Some(arg) = MavenArg::from_flag(token) else {
                continue;
            };

            if let Some(value) = tokens.next_if(|next| !is_flag(next)) {
                args.insert(arg, value);
            }
        }

        args
    }

    pub fn get(&self, arg: MavenArg) -> Option<&str> {
        self.values
            .iter()
            .find(|(a, _)| *a == arg)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (MavenArg, &str)> {
        self.values.iter().map(|(a, v)| (*a, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn insert(&mut self, arg: MavenArg, value: &str) {
        match self.values.iter_mut().find(|(a, _)| *a == arg) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.values.push((arg, value.to_string())),
        }
    }
}

fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Build file Maven will read: the `-f` value when one was passed, else `pom.xml`.
pub fn resolve_maven_build_file_name(cmd_line: Option<&str>) -> String {
    cmd_line
        .map(MavenArgs::parse)
        .and_then(|args| args.get(MavenArg::File).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_BUILD_FILE.to_string())
}
