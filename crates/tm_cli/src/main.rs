//! `tm` — TrendMaster terminal client.
//!
//! Subcommands map onto the views of the flow: `analyze` is the submission
//! view, `results` the results view, `report` the download action. The
//! results view obtains data only through the session handoff store; there
//! is deliberately no way to feed it an analysis directly.

mod args;
mod page;
mod surface;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Empty/invalid input fields (also clap usage errors).
    pub const VALIDATION: i32 = 2;
    /// Analysis service unreachable, non-2xx, or misshapen response.
    pub const SERVICE: i32 = 3;
    /// No handoff record for this session, or one that does not decode.
    pub const DATA: i32 = 4;
    /// Filesystem failures around the session dir or output files.
    pub const IO: i32 = 5;
}

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tm_client::AnalysisClient;
use tm_core::AnalysisInput;
use tm_io::{FileStore, HandoffStore, StoreError};
use tm_pipeline::{load_results, PipelineError, SubmissionController};

use args::{AnalyzeArgs, Args, Command};
use surface::CliSurface;

/// CLI-boundary error: what to print (if anything) and how to exit.
#[derive(Debug)]
enum MainError {
    Service(String),
    Data(String),
    Io(String),
    /// Already shown through the submission surface; carries only the code.
    Surfaced(i32),
}

impl MainError {
    fn exit_code(&self) -> i32 {
        match self {
            MainError::Service(_) => exitcodes::SERVICE,
            MainError::Data(_) => exitcodes::DATA,
            MainError::Io(_) => exitcodes::IO,
            MainError::Surfaced(code) => *code,
        }
    }

    fn message(&self) -> Option<&str> {
        match self {
            MainError::Service(msg) | MainError::Data(msg) | MainError::Io(msg) => Some(msg),
            MainError::Surfaced(_) => None,
        }
    }
}

fn pipeline_exit_code(e: &PipelineError) -> i32 {
    match e {
        PipelineError::Validation(_) => exitcodes::VALIDATION,
        PipelineError::Service(_) => exitcodes::SERVICE,
        PipelineError::Store(StoreError::Absent) | PipelineError::Store(StoreError::Malformed { .. }) => {
            exitcodes::DATA
        }
        PipelineError::Store(StoreError::Backend(_)) => exitcodes::IO,
    }
}

fn from_pipeline(e: PipelineError) -> MainError {
    match pipeline_exit_code(&e) {
        exitcodes::SERVICE => MainError::Service(e.to_string()),
        exitcodes::IO => MainError::Io(e.to_string()),
        _ => MainError::Data(e.to_string()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    match run(&args).await {
        Ok(()) => ExitCode::from(exitcodes::OK as u8),
        Err(e) => {
            if let Some(message) = e.message() {
                eprintln!("tm: error: {message}");
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(args: &Args) -> Result<(), MainError> {
    match &args.command {
        Command::Analyze(analyze) => run_analyze(args, analyze).await,
        Command::Results { out } => run_results(args, out),
        Command::Report { out } => run_report(args, out),
        Command::Health => run_health(args).await,
    }
}

async fn run_analyze(args: &Args, analyze: &AnalyzeArgs) -> Result<(), MainError> {
    let input = AnalysisInput {
        niche: analyze.niche.clone(),
        platform: analyze.platform.clone(),
        target_audience: analyze.target_audience.clone(),
        content_style: analyze.content_style.clone(),
    };

    let client = AnalysisClient::new(&args.service_config())
        .map_err(|e| MainError::Service(e.to_string()))?;
    let store = HandoffStore::new(FileStore::new(args.session_dir()));
    let mut controller = SubmissionController::new(client, store);
    let mut surface = CliSurface::new(args.quiet);

    if let Err(e) = controller.submit(&input, &mut surface).await {
        // The surface already showed the message; only the code remains.
        return Err(MainError::Surfaced(pipeline_exit_code(&e)));
    }

    // Control passes to the results view, which reads back through the
    // handoff store only.
    if surface.navigated() {
        run_results(args, &analyze.out)?;
    }
    Ok(())
}

fn run_results(args: &Args, out: &Path) -> Result<(), MainError> {
    let store = HandoffStore::new(FileStore::new(args.session_dir()));
    let view = load_results(&store, Local::now().date_naive()).map_err(from_pipeline)?;

    let html = page::wrap_page(&view.heading, &view.body);
    let path = out.join("analysis.html");
    fs::write(&path, html).map_err(|e| MainError::Io(e.to_string()))?;

    if !args.quiet {
        println!("{}", view.heading);
        println!("view written to {}", path.display());
    }
    Ok(())
}

fn run_report(args: &Args, out: &Path) -> Result<(), MainError> {
    let store = HandoffStore::new(FileStore::new(args.session_dir()));
    let view = load_results(&store, Local::now().date_naive()).map_err(from_pipeline)?;

    let download = view.report(Local::now().naive_local());
    let path = out.join(&download.filename);
    fs::write(&path, &download.contents).map_err(|e| MainError::Io(e.to_string()))?;

    if !args.quiet {
        println!("report written to {}", path.display());
    }
    Ok(())
}

async fn run_health(args: &Args) -> Result<(), MainError> {
    let client = AnalysisClient::new(&args.service_config())
        .map_err(|e| MainError::Service(e.to_string()))?;
    let health = client
        .health()
        .await
        .map_err(|e| MainError::Service(e.to_string()))?;
    if !args.quiet {
        println!("{}: {}", health.service, health.status);
    }
    Ok(())
}
