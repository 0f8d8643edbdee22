use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "agal-tokens runs the Agal compiler's token dump and reports its errors.",
    long_about = None
)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version and feature flags in JSON format.
    #[arg(long, short = 'v', help = "Print version and feature flags in JSON format.")]
    pub version: bool,

    #[arg(
        long,
        value_name = "PATH",
        help = "Compiler to run (overrides AGAL_TOOL and the config file)."
    )]
    pub tool: Option<String>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Config file (default: ./agal-tokens.toml if present)."
    )]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'd', help = "Print the declaration sites found in the token dump.")]
    pub declarations: bool,

    #[arg(long, help = "Print declaration sites as JSON (implies --declarations).")]
    pub json: bool,

    #[arg(long, help = "Exit with status 1 when the compiler reports an error.")]
    pub strict: bool,

    #[arg(help = "Source file to tokenize.", required_unless_present = "version")]
    pub source: Option<PathBuf>,
}

impl Cli {
    pub fn wants_declarations(&self) -> bool {
        self.declarations || self.json
    }
}

/// Returns a vector of feature flag strings.
/// Enabled features are listed as-is while disabled ones are prefixed with "!".
pub fn get_feature_flags() -> Vec<&'static str> {
    vec![if cfg!(feature = "color") { "color" } else { "!color" }]
}

/// Print the version and the JSON array of feature flags.
pub fn print_version_and_features() {
    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");
    let json_features =
        serde_json::to_string(&get_feature_flags()).unwrap_or_else(|_| "[]".to_string());
    println!("agal-tokens {}", version);
    println!("{}", json_features);
}
