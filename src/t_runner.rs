use crate::prelude::*;
use crate::t_command_builder::ToolCommandBuilder;
use crate::t_filter::decode_dump;
use crate::t_types::TokenDump;
use anyhow::{anyhow, Context};

/// What a finished compiler run produced.
///
/// A compile error is a `Failure`; trouble running the compiler at all is an `Err`
/// from [`run_tool`].
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    Success { tokens: TokenDump },
    Failure { stderr: String, code: Option<i32> },
}

/// Runs the compiler and waits for it to exit.
pub fn run_tool(builder: &ToolCommandBuilder) -> anyhow::Result<ToolOutcome> {
    let mut cmd = builder.build_command();
    cmd.stdin(Stdio::null());
    info!("Running: {}", builder.display());

    let output = cmd
        .output()
        .with_context(|| format!("failed to run `{}`", builder.program.display()))?;
    debug!(
        "{} exited with {:?} ({} bytes stdout, {} bytes stderr)",
        builder.program.display(),
        output.status.code(),
        output.stdout.len(),
        output.stderr.len()
    );

    if output.status.success() {
        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| anyhow!("token dump is not valid UTF-8: {}", e))?;
        let tokens = decode_dump(&stdout)?;
        Ok(ToolOutcome::Success { tokens })
    } else {
        Ok(ToolOutcome::Failure {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        })
    }
}
