use std::fmt;

use chrono::{FixedOffset, NaiveDateTime};

use crate::error::ValidationError;

use super::time::parse_iso8601;

const MODEL_NAME_MAX_LEN: usize = 128;

/// Name of the model whose verification is being rendered.
///
/// Used verbatim as a storage path segment, so only characters that are safe
/// in both URL paths and S3 keys are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName(String);

impl ModelName {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::Empty { name: "model name" });
        }
        if input.len() > MODEL_NAME_MAX_LEN {
            return Err(ValidationError::ModelNameTooLong {
                len: input.len(),
                max: MODEL_NAME_MAX_LEN,
            });
        }
        let safe = input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !safe || input == "." || input == ".." {
            return Err(ValidationError::InvalidModelName {
                input: input.to_string(),
            });
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ISO 8601 timestamp naming the analysis/dataset version.
///
/// Keeps the caller's spelling: the pipeline receives the string exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTime {
    raw: String,
    datetime: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl AnalysisTime {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::Empty {
                name: "analysis time",
            });
        }
        let (datetime, offset) =
            parse_iso8601(input).ok_or_else(|| ValidationError::InvalidAnalysisTime {
                input: input.to_string(),
            })?;
        Ok(Self {
            raw: input.to_string(),
            datetime,
            offset,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Wall-clock datetime as written, without applying the offset
    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }
}

impl fmt::Display for AnalysisTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// One published report: `<bucket>/<model_name>/<analysis_time>/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportKey {
    pub model_name: ModelName,
    pub analysis_time: AnalysisTime,
}

impl ReportKey {
    pub fn parse(model_name: &str, analysis_time: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            model_name: ModelName::parse(model_name)?,
            analysis_time: AnalysisTime::parse(analysis_time)?,
        })
    }

    /// Object-storage prefix the pipeline publishes the site under
    pub fn storage_prefix(&self) -> String {
        format!("{}/{}/", self.model_name, self.analysis_time)
    }

    pub fn index_path(&self) -> String {
        format!("{}index.html", self.storage_prefix())
    }
}
