use std::path::{Path, PathBuf};
use std::process::Command;

/// Subcommand that makes the compiler print its token dump.
pub const TOKENS_SUBCOMMAND: &str = "tokens";

/// A builder that constructs the compiler invocation for a source file.
#[derive(Debug, Clone)]
pub struct ToolCommandBuilder {
    pub program: PathBuf,
    pub subcommand: String,
    pub source: Option<PathBuf>,
    pub extra_args: Vec<String>,
}

impl ToolCommandBuilder {
    /// Creates a builder for `program tokens`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        ToolCommandBuilder {
            program: program.into(),
            subcommand: TOKENS_SUBCOMMAND.to_string(),
            source: None,
            extra_args: Vec::new(),
        }
    }

    pub fn with_subcommand(mut self, subcommand: &str) -> Self {
        self.subcommand = subcommand.to_string();
        self
    }

    /// The source file whose tokens are requested.
    pub fn with_source(mut self, source: impl AsRef<Path>) -> Self {
        self.source = Some(source.as_ref().to_path_buf());
        self
    }

    /// Appends arguments after the source path.
    pub fn with_extra_args(mut self, extra: &[String]) -> Self {
        self.extra_args.extend(extra.iter().cloned());
        self
    }

    /// Builds the argument vector (without the program).
    pub fn build(&self) -> Vec<String> {
        let mut args = vec![self.subcommand.clone()];
        if let Some(ref source) = self.source {
            args.push(source.to_string_lossy().to_string());
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// The full command line, for logging.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.to_string_lossy().to_string()];
        parts.extend(self.build());
        parts.join(" ")
    }

    /// The command runs in the caller's working directory, so a relative
    /// source path resolves the same way it did on the command line.
    pub fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.build());
        cmd
    }
}
