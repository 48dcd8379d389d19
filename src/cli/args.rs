//! CLI argument definitions
//!
//! Flags for both binaries and the config-file merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::consts::{
    DEFAULT_API_URL, DEFAULT_BOOK_CONFIG, DEFAULT_REF, DEFAULT_REMOTE, DEFAULT_WORKFLOW,
};

#[derive(Debug, Parser)]
#[command(name = "trigger_mlverif_build")]
#[command(
    about = "Trigger the GitHub Actions workflow that renders and publishes the verification notebooks",
    version
)]
pub struct TriggerCli {
    /// Name of the model used
    #[arg(long, value_name = "NAME")]
    pub model_name: String,

    /// ISO 8601 timestamp of the analysis (e.g. 2025-05-05T12:00:00Z)
    #[arg(long, value_name = "TIMESTAMP")]
    pub analysis_time: String,

    /// Git reference (branch or tag) to run the workflow on [default: main]
    #[arg(long = "ref", value_name = "REF")]
    pub git_ref: Option<String>,

    /// Git remote used to discover the GitHub repository [default: upstream]
    #[arg(long, value_name = "REMOTE")]
    pub remote: Option<String>,

    /// GitHub repository as owner/repo (skips git remote lookup)
    #[arg(long, value_name = "OWNER/REPO")]
    pub repository: Option<String>,

    /// Workflow file name or ID [default: build_and_publish.yml]
    #[arg(long, value_name = "WORKFLOW")]
    pub workflow: Option<String>,

    /// GitHub REST API base URL [default: https://api.github.com]
    #[arg(long, env = "GITHUB_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Read defaults from this file instead of the standard config locations
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl TriggerCli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub fn with_config(mut self, config: Config) -> Self {
        self.git_ref = self.git_ref.or(config.git_ref);
        self.remote = self.remote.or(config.remote);
        self.repository = self.repository.or(config.repository);
        self.workflow = self.workflow.or(config.workflow);
        self.api_url = self.api_url.or(config.api_url);
        self
    }

    pub fn git_ref(&self) -> &str {
        self.git_ref.as_deref().unwrap_or(DEFAULT_REF)
    }

    pub fn remote(&self) -> &str {
        self.remote.as_deref().unwrap_or(DEFAULT_REMOTE)
    }

    pub fn workflow(&self) -> &str {
        self.workflow.as_deref().unwrap_or(DEFAULT_WORKFLOW)
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}

#[derive(Debug, Parser)]
#[command(name = "mlverif_book_setup")]
#[command(about = "Inject the GitHub repository URL into the book's _config.yml", version)]
pub struct BookSetupCli {
    /// Path to the book's _config.yml
    #[arg(long, value_name = "FILE", default_value = DEFAULT_BOOK_CONFIG)]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
