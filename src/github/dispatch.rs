//! Workflow dispatch client
//!
//! Sends a single `workflow_dispatch` event to the GitHub REST API. The call
//! only asks GitHub to queue a run; the run itself is never observed here.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::consts::{GITHUB_ACCEPT, GITHUB_API_VERSION};
use crate::error::AppError;
use crate::report::ReportKey;

use super::repo::Repository;

const DISPATCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Body of `POST /repos/{owner}/{repo}/actions/workflows/{workflow}/dispatches`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DispatchRequest<'a> {
    #[serde(rename = "ref")]
    pub git_ref: &'a str,
    pub inputs: DispatchInputs<'a>,
}

/// Workflow inputs, declared under `on.workflow_dispatch.inputs` in the pipeline
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DispatchInputs<'a> {
    pub analysis_time: &'a str,
    pub model_name: &'a str,
}

impl<'a> DispatchRequest<'a> {
    pub fn new(git_ref: &'a str, key: &'a ReportKey) -> Self {
        Self {
            git_ref,
            inputs: DispatchInputs {
                analysis_time: key.analysis_time.as_str(),
                model_name: key.model_name.as_str(),
            },
        }
    }
}

pub struct WorkflowDispatcher {
    api_url: String,
    token: String,
    agent: ureq::Agent,
}

impl WorkflowDispatcher {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(DISPATCH_TIMEOUT))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            api_url: api_url.into(),
            token: token.into(),
            agent,
        }
    }

    pub fn dispatch_url(&self, repo: &Repository, workflow: &str) -> String {
        format!(
            "{}/repos/{}/{}/actions/workflows/{}/dispatches",
            self.api_url.trim_end_matches('/'),
            repo.owner(),
            repo.name(),
            workflow
        )
    }

    /// Ask GitHub to start `workflow` on `repo`. Makes exactly one request.
    pub fn dispatch(
        &self,
        repo: &Repository,
        workflow: &str,
        request: &DispatchRequest<'_>,
    ) -> Result<(), AppError> {
        let url = self.dispatch_url(repo, workflow);
        let body = encode_body(request)?;
        debug!(
            %url,
            payload = %String::from_utf8_lossy(&body),
            "Triggering workflow"
        );

        let response = self
            .agent
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(
                "User-Agent",
                concat!("mlverif-notebooks/", env!("CARGO_PKG_VERSION")),
            )
            .header("Content-Type", "application/json")
            .send(&body[..])
            .map_err(|source| AppError::Connectivity {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "Dispatch response");
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .into_body()
            .read_to_string()
            .unwrap_or_default();
        Err(AppError::Rejected {
            status: status.as_u16(),
            body: body.trim().to_string(),
        })
    }
}

/// Compact JSON, exactly as it goes on the wire
pub fn encode_body(request: &DispatchRequest<'_>) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let key = ReportKey::parse("harmonie", "2025-05-05T12:00:00Z").unwrap();
        let request = DispatchRequest::new("main", &key);
        assert_eq!(
            encode_body(&request).unwrap(),
            br#"{"ref":"main","inputs":{"analysis_time":"2025-05-05T12:00:00Z","model_name":"harmonie"}}"#
        );
    }

    #[test]
    fn request_body_has_no_whitespace() {
        let key = ReportKey::parse("harmonie", "2025-05-05T12:00:00+02:00").unwrap();
        let body = encode_body(&DispatchRequest::new("release/v1", &key)).unwrap();
        assert!(!body.iter().any(u8::is_ascii_whitespace));
    }

    #[test]
    fn dispatch_url_layout() {
        let dispatcher = WorkflowDispatcher::new("https://api.github.com/", "token");
        let repo = Repository::parse("dmidk/mlverif").unwrap();
        assert_eq!(
            dispatcher.dispatch_url(&repo, "build_and_publish.yml"),
            "https://api.github.com/repos/dmidk/mlverif/actions/workflows/build_and_publish.yml/dispatches"
        );
    }
}
