mod cli;

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matcher::{Config, Document, JobCatalog, MatchEngine};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    // stdout carries the JSON report, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting matcher v{}", env!("CARGO_PKG_VERSION"));

    if let Some(jobs) = cli.jobs {
        config.jobs_path = jobs;
    }
    if let Some(top_n) = cli.top_n {
        config.top_n = top_n;
    }

    let catalog = Arc::new(JobCatalog::load_or_builtin(&config.jobs_path)?);
    let engine = MatchEngine::from_config(config, catalog);

    let resume_text = read_document(&engine, &cli.resume).await?;
    let job_text = match &cli.job {
        Some(path) => Some(read_document(&engine, path).await?),
        None => None,
    };

    let report = engine.analyze(&resume_text, job_text.as_deref()).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

async fn read_document(engine: &MatchEngine, path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let text = engine.extract_text(&Document::new(&bytes, &filename));
    if text.is_empty() {
        bail!("no text extracted from {}", path.display());
    }
    info!("Extracted {} chars from {}", text.len(), path.display());
    Ok(text)
}
