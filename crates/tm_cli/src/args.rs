//! CLI argument surface for the `tm` binary.
//!
//! Flags win over environment variables; environment variables win over
//! defaults. The analyze fields default to empty strings so the submission
//! machine (not the parser) owns the required-field rule, exactly like the
//! form it stands in for.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tm_client::ServiceConfig;

#[derive(Debug, Parser)]
#[command(
    name = "tm",
    about = "TrendMaster — content trend analysis from the terminal",
    version
)]
pub struct Args {
    /// Base URL of the analysis service (env: TM_API_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bound on the analysis request, in seconds. Waits indefinitely when
    /// omitted (env: TM_TIMEOUT_SECS).
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Directory holding this session's handoff entries
    /// (env: TM_SESSION_DIR).
    #[arg(long, global = true)]
    pub session_dir: Option<PathBuf>,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a creator profile for analysis and open the results view.
    Analyze(AnalyzeArgs),
    /// Re-render the most recent analysis of this session.
    Results {
        /// Directory the rendered view is written into.
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Write the flat-text report for the most recent analysis.
    Report {
        /// Directory the report file is written into.
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Check that the analysis service is reachable.
    Health,
}

#[derive(Debug, clap::Args)]
pub struct AnalyzeArgs {
    /// Content niche (e.g. "fitness").
    #[arg(long, default_value = "")]
    pub niche: String,

    /// Primary platform (e.g. "TikTok").
    #[arg(long, default_value = "")]
    pub platform: String,

    /// Target audience (e.g. "Gen Z").
    #[arg(long = "audience", default_value = "")]
    pub target_audience: String,

    /// Content style preference (e.g. "humorous").
    #[arg(long = "style", default_value = "")]
    pub content_style: String,

    /// Directory the rendered view is written into after submission.
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

impl Args {
    pub fn service_config(&self) -> ServiceConfig {
        let base_url = self
            .api_url
            .clone()
            .or_else(|| env::var("TM_API_URL").ok())
            .unwrap_or_else(|| ServiceConfig::default().base_url);

        let timeout = self
            .timeout_secs
            .or_else(|| {
                env::var("TM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|raw| match raw.parse() {
                        Ok(secs) => Some(secs),
                        Err(_) => {
                            tracing::warn!(value = %raw, "ignoring unparsable TM_TIMEOUT_SECS");
                            None
                        }
                    })
            })
            .map(Duration::from_secs);

        ServiceConfig { base_url, timeout }
    }

    pub fn session_dir(&self) -> PathBuf {
        self.session_dir
            .clone()
            .or_else(|| env::var("TM_SESSION_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| env::temp_dir().join("tm-session"))
    }
}
