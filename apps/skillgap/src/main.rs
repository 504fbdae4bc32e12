mod analysis;
mod cli;
mod config;
mod errors;
mod llm_client;
mod output;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::document::{Document, DocumentKind};
use crate::analysis::pipeline::run_analysis;
use crate::cli::Args;
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{GeminiClient, GenerativeModel};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration first; logging level depends on it
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", AppError::Config(format!("{e:#}")));
            return ExitCode::FAILURE;
        }
    };

    // Initialize structured logging on stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME"),
                args.log_level(&config.rust_log)
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting skillgap v{}", env!("CARGO_PKG_VERSION"));

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, config: Config) -> Result<(), AppError> {
    let job_description = load_document(DocumentKind::JobDescription, args.job.as_deref())?;
    let resume = load_document(DocumentKind::Resume, args.resume.as_deref())?;

    let mut gemini = config.gemini();
    if let Some(model) = args.model {
        gemini.model = model;
    }
    let llm = GeminiClient::new(gemini)?;
    info!("LLM client initialized (model: {})", llm.model_name());

    let report = run_analysis(&job_description, &resume, &llm).await?;

    if args.json {
        let json = output::render_json(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        print!("{}", output::render_text(&report));
    }

    Ok(())
}

fn load_document(
    kind: DocumentKind,
    path: Option<&std::path::Path>,
) -> Result<Document, AppError> {
    match path {
        Some(path) => Ok(Document::load(kind, path)?),
        None => {
            info!("No {} file given, using the bundled sample", kind.label());
            Ok(Document::sample(kind))
        }
    }
}
