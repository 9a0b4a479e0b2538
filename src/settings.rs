use clap::Parser;
use std::path::PathBuf;

use crate::excerpt::ExcerptConfig;

pub const DEFAULT_OUTPUT_PATH: &str = "/tmp/sce.log";

/// `~/.spotconnect/spotupnp.log`, or a relative path when there is no home.
pub fn default_log_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".spotconnect")
        .join("spotupnp.log")
}

/// Extract the last song plays from a spotupnp log, strip color codes, and
/// copy the excerpt to the clipboard.
#[derive(Debug, Parser)]
#[command(name = "log2clip", version, about)]
pub struct Args {
    /// Log file to read [default: ~/.spotconnect/spotupnp.log]
    #[arg(long, env = "LOG2CLIP_LOG")]
    pub log: Option<PathBuf>,

    /// Where to write the cleaned excerpt
    #[arg(long, env = "LOG2CLIP_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Skip the clipboard hand-off
    #[arg(long)]
    pub no_clipboard: bool,

    /// Print the summary as JSON instead of the human-readable report
    #[arg(long)]
    pub json: bool,
}

/// Everything a run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct ExtractSettings {
    pub log_path: PathBuf,
    pub output_path: PathBuf,
    pub clipboard: bool,
    pub json: bool,
    pub excerpt: ExcerptConfig,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            clipboard: true,
            json: false,
            excerpt: ExcerptConfig::default(),
        }
    }
}

impl From<Args> for ExtractSettings {
    fn from(args: Args) -> Self {
        let defaults = Self::default();
        Self {
            log_path: args.log.unwrap_or(defaults.log_path),
            output_path: args.output,
            clipboard: !args.no_clipboard,
            json: args.json,
            excerpt: defaults.excerpt,
        }
    }
}
