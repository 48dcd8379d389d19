use tracing::info;

use crate::book::inject_repository_url;
use crate::cli::{BookSetupCli, TriggerCli};
use crate::consts::{DEFAULT_SERVER_URL, REPOSITORY_ENV, SERVER_URL_ENV, TOKEN_ENV};
use crate::error::{AppError, ConfigError, ValidationError};
use crate::github::{DispatchRequest, Repository, WorkflowDispatcher, resolve_repository};
use crate::report::ReportKey;

/// Process environment, read once at startup and passed down explicitly
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub token: Option<String>,
    pub repository: Option<String>,
    pub server_url: Option<String>,
}

impl Environment {
    pub fn from_process() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            token: var(TOKEN_ENV),
            repository: var(REPOSITORY_ENV),
            server_url: var(SERVER_URL_ENV),
        }
    }

    pub fn server_url(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}

/// What was handed to GitHub by a successful dispatch
#[derive(Debug)]
pub struct Dispatched {
    pub repository: Repository,
    pub report: ReportKey,
    pub git_ref: String,
}

/// Validate inputs, then send the workflow dispatch.
///
/// Everything that can fail locally is checked before the single request.
pub fn run_trigger(cli: &TriggerCli, env: &Environment) -> Result<Dispatched, AppError> {
    let token = env
        .token
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or(ConfigError::MissingToken)?;
    // Would otherwise surface as a transport error when building the header
    if !token.chars().all(|c| c.is_ascii_graphic()) {
        return Err(ConfigError::InvalidToken.into());
    }

    let report = ReportKey::parse(&cli.model_name, &cli.analysis_time)?;
    let git_ref = cli.git_ref();
    if git_ref.is_empty() {
        return Err(ValidationError::Empty { name: "ref" }.into());
    }
    validate_workflow(cli.workflow())?;

    let repository = resolve_repository(
        cli.repository.as_deref(),
        env.repository.as_deref(),
        cli.remote(),
    )?;

    info!(
        %repository,
        workflow = cli.workflow(),
        git_ref,
        model_name = %report.model_name,
        analysis_time = %report.analysis_time,
        "Dispatching workflow"
    );

    let dispatcher = WorkflowDispatcher::new(cli.api_url(), token);
    dispatcher.dispatch(
        &repository,
        cli.workflow(),
        &DispatchRequest::new(git_ref, &report),
    )?;

    Ok(Dispatched {
        repository,
        report,
        git_ref: git_ref.to_string(),
    })
}

/// A workflow is one path segment: a file name such as `build_and_publish.yml` or a numeric ID.
fn validate_workflow(workflow: &str) -> Result<(), ValidationError> {
    if workflow.is_empty() {
        return Err(ValidationError::Empty { name: "workflow" });
    }
    let segment_safe = workflow
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if !segment_safe || workflow == "." || workflow == ".." {
        return Err(ValidationError::InvalidWorkflow {
            input: workflow.to_string(),
        });
    }
    Ok(())
}

/// Point the book's repository button at the repository being built. Returns the URL.
pub fn run_book_setup(cli: &BookSetupCli, env: &Environment) -> Result<String, AppError> {
    let repository = env
        .repository
        .as_deref()
        .ok_or(ConfigError::MissingEnv {
            name: REPOSITORY_ENV,
        })?;
    let repository = Repository::parse(repository)?;
    let repo_url = format!("{}/{}", env.server_url().trim_end_matches('/'), repository);

    inject_repository_url(&cli.config, &repo_url)?;
    Ok(repo_url)
}
