//! Core data types shared by retrieval, composition and ingestion

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Heading trail a passage was cut from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageMetadata {
    /// `#` heading (document title)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `##` heading (alarm category)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// `###` heading (error-code label, e.g. "S-304: Fiber Link Degradation")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl PassageMetadata {
    #[must_use]
    pub fn new(title: Option<&str>, category: Option<&str>, error_code: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            category: category.map(str::to_string),
            error_code: error_code.map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.category.is_none() && self.error_code.is_none()
    }
}

impl fmt::Display for PassageMetadata {
    /// `Title: … | Category: … | Error_Code: …`, absent levels omitted
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [
            ("Title", &self.title),
            ("Category", &self.category),
            ("Error_Code", &self.error_code),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}: {v}")))
        .collect();

        write!(f, "{}", parts.join(" | "))
    }
}

/// A retrieved unit of manual text with its heading metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub content: String,
    #[serde(default)]
    pub metadata: PassageMetadata,
}

impl Passage {
    pub fn new(content: impl Into<String>, metadata: PassageMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// Content followed by the metadata rendering, the text the reranker searches
    pub fn search_text(&self) -> String {
        format!("{}{}", self.content, self.metadata)
    }
}

/// Stage at which a solution request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Configuration,
    Retrieval,
    Generation,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::Retrieval => write!(f, "retrieval"),
            Self::Generation => write!(f, "generation"),
        }
    }
}

/// How a [`SolutionResult`] was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SolutionStatus {
    /// Generated from at least one retrieved passage
    Grounded,
    /// Retrieval returned nothing; the generator was not called
    NoContext,
    /// A collaborator failed; `answer` carries the description
    Failed { kind: FailureKind },
}

/// Answer text plus the passages it was grounded on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionResult {
    pub answer: String,
    pub sources: Vec<Passage>,
    pub status: SolutionStatus,
}

impl SolutionResult {
    pub fn grounded(answer: String, sources: Vec<Passage>) -> Self {
        Self {
            answer,
            sources,
            status: SolutionStatus::Grounded,
        }
    }

    pub fn no_context(message: &str) -> Self {
        Self {
            answer: message.to_string(),
            sources: Vec::new(),
            status: SolutionStatus::NoContext,
        }
    }

    pub fn failed(kind: FailureKind, answer: String) -> Self {
        Self {
            answer,
            sources: Vec::new(),
            status: SolutionStatus::Failed { kind },
        }
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self.status, SolutionStatus::Failed { .. })
    }

    pub const fn failure_kind(&self) -> Option<FailureKind> {
        match self.status {
            SolutionStatus::Failed { kind } => Some(kind),
            _ => None,
        }
    }
}
