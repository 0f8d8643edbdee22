//! Where the compiler lives and how it is called.
//!
//! Each setting is taken from the first place that has it: command line,
//! `AGAL_TOOL`, the config file, then the built-in default.

use crate::prelude::*;
use crate::t_command_builder::{ToolCommandBuilder, TOKENS_SUBCOMMAND};
use serde::Deserialize;

/// Program looked up on `PATH` when nothing else names the compiler.
pub const DEFAULT_TOOL: &str = "agalang-core";
/// Environment variable naming the compiler.
pub const TOOL_ENV: &str = "AGAL_TOOL";
/// Config file picked up from the working directory.
pub const CONFIG_FILE_NAME: &str = "agal-tokens.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("compiler `{name}` not found on PATH: {source}")]
    ToolNotFound {
        name: String,
        #[source]
        source: which::Error,
    },
}

/// Contents of `agal-tokens.toml`.
///
/// ```toml
/// tool = "/opt/agal/bin/agalang-core"
/// subcommand = "tokens"
/// args = ["--quiet"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub tool: Option<String>,
    pub subcommand: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

impl FileConfig {
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Loads `explicit` if given, else `agal-tokens.toml` in `dir` when it exists.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!("using config file {}", candidate.display());
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tool: String,
    pub subcommand: String,
    pub args: Vec<String>,
}

impl Config {
    /// Layers the command line and environment values over the file.
    pub fn resolve(cli_tool: Option<&str>, env_tool: Option<String>, file: FileConfig) -> Self {
        let tool = cli_tool
            .map(str::to_string)
            .or(env_tool.filter(|t| !t.trim().is_empty()))
            .or(file.tool)
            .unwrap_or_else(|| DEFAULT_TOOL.to_string());
        Config {
            tool,
            subcommand: file
                .subcommand
                .unwrap_or_else(|| TOKENS_SUBCOMMAND.to_string()),
            args: file.args,
        }
    }

    /// Reads `AGAL_TOOL` and the config file, then resolves.
    pub fn load(cli_tool: Option<&str>, config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let file = FileConfig::discover(config_path, &cwd)?;
        Ok(Self::resolve(cli_tool, env::var(TOOL_ENV).ok(), file))
    }

    /// Path of the compiler. Bare names are looked up on `PATH`.
    pub fn tool_path(&self) -> Result<PathBuf, ConfigError> {
        let candidate = Path::new(&self.tool);
        if candidate.components().count() > 1 || candidate.is_absolute() {
            return Ok(candidate.to_path_buf());
        }
        which::which(&self.tool).map_err(|source| ConfigError::ToolNotFound {
            name: self.tool.clone(),
            source,
        })
    }

    pub fn command_for(&self, source: &Path) -> Result<ToolCommandBuilder, ConfigError> {
        Ok(ToolCommandBuilder::new(self.tool_path()?)
            .with_subcommand(&self.subcommand)
            .with_source(source)
            .with_extra_args(&self.args))
    }
}
