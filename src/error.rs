use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Workflow dispatch rejected (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Failed to reach {url}: {source}")]
    Connectivity {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("{0}")]
    Book(#[from] BookError),

    #[error("Failed to encode dispatch request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code for this error. Validation failures share clap's usage code.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Validation(_) => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GITHUB_TOKEN must be set in the environment or .env file.")]
    MissingToken,

    #[error("GITHUB_TOKEN contains whitespace or control characters; check the environment or .env file.")]
    InvalidToken,

    #[error("{name} environment variable not set")]
    MissingEnv { name: &'static str },

    #[error(
        "Git remote '{remote}' not found.\nPlease define it with:\n   git remote add {remote} git@github.com:owner/repo.git"
    )]
    RemoteNotFound { remote: String },

    #[error("This directory is not a valid Git repository.")]
    NotAGitRepository,

    #[error("Failed to run git: {0}")]
    GitUnavailable(std::io::Error),

    #[error("Unsupported remote URL format: {url}")]
    UnsupportedRemoteUrl { url: String },

    #[error("Invalid repository \"{input}\" (expected owner/repo)")]
    InvalidRepository { input: String },

    #[error("Config file {} not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read config file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    FileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{name} must not be empty")]
    Empty { name: &'static str },

    #[error(
        "Invalid model name \"{input}\" (allowed: ASCII letters, digits, '-', '_' and '.')"
    )]
    InvalidModelName { input: String },

    #[error("Model name is {len} characters long (maximum {max})")]
    ModelNameTooLong { len: usize, max: usize },

    #[error("Invalid analysis time \"{input}\" (expected ISO 8601, e.g. 2025-05-05T12:00:00Z)")]
    InvalidAnalysisTime { input: String },

    #[error("Invalid workflow \"{input}\" (expected a file name or numeric ID, e.g. build_and_publish.yml)")]
    InvalidWorkflow { input: String },
}

#[derive(Debug, Error)]
pub enum BookError {
    #[error("{} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize book config: {0}")]
    Serialize(serde_yaml::Error),

    #[error("Expected `{key}` to be a mapping in the book config")]
    NotAMapping { key: &'static str },
}
