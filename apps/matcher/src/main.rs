use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobmatch::catalog::KeywordCatalog;
use jobmatch::config::Config;
use jobmatch::errors::AppError;
use jobmatch::pipeline::{MatchPipeline, MatchReport, RunOptions};
use jobmatch::predictor::RolePredictorAdapter;
use jobmatch::sources::{FilePostingSource, LinkedInPostingSource, PdfTextSource, PostingSource};

/// Match a resume against job postings for its predicted role.
#[derive(Debug, Parser)]
#[command(name = "jobmatch", version, about)]
struct Args {
    /// Resume file (.pdf or .txt)
    #[arg(long)]
    resume: PathBuf,

    /// Read postings from a JSON file instead of searching the job board
    #[arg(long)]
    postings: Option<PathBuf>,

    /// Job search location (overrides JOBMATCH_LOCATION)
    #[arg(long)]
    location: Option<String>,

    /// Role model artifact (overrides JOBMATCH_MODEL_PATH)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Search for this role instead of predicting one
    #[arg(long)]
    role: Option<String>,

    /// Experience label fed to the role model, e.g. "2 years"
    #[arg(long)]
    experience: Option<String>,

    /// Maximum number of matches (overrides JOBMATCH_LIMIT)
    #[arg(long)]
    limit: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting jobmatch v{}", env!("CARGO_PKG_VERSION"));

    let predictor = match args.model.clone().or_else(|| config.model_path.clone()) {
        Some(path) => Some(
            RolePredictorAdapter::from_model_file(&path)
                .with_context(|| format!("Failed to load role model from {}", path.display()))?,
        ),
        None => None,
    };

    let postings: Arc<dyn PostingSource> = match &args.postings {
        Some(path) => Arc::new(FilePostingSource::new(path.clone())),
        None => Arc::new(
            LinkedInPostingSource::new(
                config.jobs_base_url.clone(),
                Duration::from_secs(config.http_timeout_secs),
            )
            .context("Failed to build job board client")?,
        ),
    };

    let catalog = Arc::new(KeywordCatalog::builtin().clone());
    info!(catalog_version = catalog.version(), "keyword catalog ready");

    let pipeline = MatchPipeline::new(
        catalog,
        Arc::new(PdfTextSource),
        postings,
        predictor,
        args.limit.unwrap_or(config.limit),
    );

    let options = RunOptions {
        location: args.location.clone().unwrap_or_else(|| config.location.clone()),
        role: args.role.clone(),
        experience: args.experience.clone(),
    };

    match pipeline.run(&args.resume, &options).await {
        Ok(report) if args.json => println!("{}", serde_json::to_string_pretty(&report)?),
        Ok(report) => print_report(&report),
        Err(err) => {
            if args.json {
                println!("{}", error_json(&err));
            }
            return Err(err.into());
        }
    }

    Ok(())
}

fn error_json(err: &AppError) -> serde_json::Value {
    json!({
        "error": {
            "code": err.code(),
            "message": err.to_string()
        }
    })
}

fn print_report(report: &MatchReport) {
    let profile = &report.profile;
    let list = |items: &std::collections::BTreeSet<String>| {
        if items.is_empty() {
            "None".to_string()
        } else {
            items.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    };

    println!("Name: {}", profile.name.as_deref().unwrap_or("None"));
    println!("Skills: {}", list(&profile.skills));
    println!("Qualification: {}", list(&profile.qualification));
    println!(
        "Experience: {}",
        profile
            .experience
            .map(|e| e.to_string())
            .unwrap_or_else(|| "None".to_string())
    );
    println!("Predicted Job Role: {}", report.predicted_role);
    println!();
    println!("Top {} Job Matches:", report.matches.len());
    println!("{}", "-".repeat(60));

    for ranked in &report.matches {
        let meta = &ranked.posting.metadata;
        let attrs = &ranked.posting.attributes;
        println!("Job Title: {}", meta.title.as_deref().unwrap_or("None"));
        println!("Company Name: {}", meta.company.as_deref().unwrap_or("None"));
        println!("Location: {}", meta.location.as_deref().unwrap_or("None"));
        println!("Apply Link: {}", meta.apply_link.as_deref().unwrap_or("None"));
        println!("Skills: {}", list(&attrs.skills));
        println!("Qualifications: {}", list(&attrs.qualifications));
        println!("Skill Match: {}", ranked.result.skill_match_count);
        println!("Qualification Match: {}", ranked.result.qualification_match);
        println!("Time Posted: {}", meta.time_posted.as_deref().unwrap_or("None"));
        println!("No of Applicants: {}", meta.applicants.as_deref().unwrap_or("None"));
        println!("{}", "-".repeat(60));
    }
}
