//! # agal-tokens
//!
//! Runs `agalang-core tokens <file>` and reports what came back.
//!
//! ```sh
//! agal-tokens src/main.agal
//! agal-tokens --json --tool ./target/debug/agalang-core a.aga
//! ```

use agal_tokens::t_app::EXIT_ERROR;
use agal_tokens::Cli;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    let cli = Cli::parse();
    if cli.version {
        agal_tokens::t_cli::print_version_and_features();
        return ExitCode::SUCCESS;
    }

    match agal_tokens::t_app::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
