#![doc = include_str!("../README.md")]

// Re-export std common modules
pub mod prelude {
    pub use std::env;
    pub use std::error::Error;
    pub use std::fs;
    pub use std::io;
    pub use std::path::{Path, PathBuf};
    pub use std::process::Command;
    pub use std::process::Stdio;
    pub use log::{debug, error, info, warn};
}

pub mod t_app;
pub mod t_cli;
pub use t_cli::Cli;
pub mod t_command_builder;
pub use t_command_builder::ToolCommandBuilder;
pub mod t_config;
pub use t_config::Config;
pub mod t_diagnostic;
pub use t_diagnostic::{extract, Diagnostic, DiagnosticError, Extraction};
pub mod t_filter;
pub use t_filter::{declaration_sites, decode_dump, TokenDumpError};
pub mod t_report;
pub mod t_runner;
pub use t_runner::{run_tool, ToolOutcome};
pub mod t_types;
pub use t_types::*;
