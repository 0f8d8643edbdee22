//! One run: resolve settings, call the compiler, report.

use crate::prelude::*;
use crate::t_cli::Cli;
use crate::t_config::Config;
use crate::t_diagnostic::{extract, Extraction};
use crate::t_filter::declaration_sites;
use crate::t_report::{write_declarations, write_declarations_json, write_diagnostic};
use crate::t_runner::{run_tool, ToolOutcome};
use anyhow::Context;
use std::io::{IsTerminal, Write};
use std::process::ExitCode;

/// Exit status for configuration, I/O and malformed-output errors.
pub const EXIT_ERROR: u8 = 2;

/// Reports whatever the compiler produced. Returns whether it reported an error.
pub fn report_outcome<W: Write>(
    cli: &Cli,
    outcome: &ToolOutcome,
    out: &mut W,
) -> anyhow::Result<bool> {
    match outcome {
        ToolOutcome::Success { tokens } => {
            let sites = declaration_sites(&tokens.tokens);
            if cli.json {
                write_declarations_json(out, sites)?;
            } else if cli.wants_declarations() {
                let color = cfg!(feature = "color") && io::stdout().is_terminal();
                write_declarations(out, sites, color)?;
            } else {
                debug!(
                    "{} of {} tokens are declaration sites",
                    sites.count(),
                    tokens.tokens.len()
                );
            }
            Ok(false)
        }
        ToolOutcome::Failure { stderr, code } => {
            debug!("compiler failed with {:?}", code);
            match extract(stderr)? {
                Extraction::Recognized(diagnostic) => write_diagnostic(out, &diagnostic)?,
                Extraction::NotRecognized => {
                    let first = stderr.lines().next().unwrap_or_default();
                    warn!("unrecognized compiler output (exit {:?}): {}", code, first);
                }
            }
            Ok(true)
        }
    }
}

pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let source = cli.source.as_deref().context("no source file given")?;
    let config = Config::load(cli.tool.as_deref(), cli.config.as_deref())?;
    let builder = config.command_for(source)?;
    let outcome = run_tool(&builder)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let failed = report_outcome(cli, &outcome, &mut out)?;
    out.flush()?;

    if failed && cli.strict {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
