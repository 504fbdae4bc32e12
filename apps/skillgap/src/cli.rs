use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Compare a job description against a resume and suggest how to close the skill gap.
#[derive(Parser, Debug, Clone)]
#[command(name = "skillgap", version, long_about = None)]
pub struct Args {
    /// Job description file (.txt, .md or .pdf). Defaults to the bundled sample.
    #[arg(long = "job", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub job: Option<PathBuf>,

    /// Resume file (.txt, .md or .pdf). Defaults to the bundled sample.
    #[arg(long = "resume", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub resume: Option<PathBuf>,

    /// Print the full report as JSON instead of text
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Gemini model to use (overrides GEMINI_MODEL)
    #[arg(long = "model", value_name = "NAME")]
    pub model: Option<String>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level used when RUST_LOG does not override it.
    pub fn log_level<'a>(&self, configured: &'a str) -> &'a str {
        match self.verbose {
            0 => configured,
            1 => "debug",
            _ => "trace",
        }
    }
}
