// src/types/response.rs
use serde::{Deserialize, Serialize};

/// Skills/role profile extracted from the resume. Sequences keep the remote
/// side's detection order and may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub skills: Vec<String>,
    pub experience_level: String,
    pub suitable_roles: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl AnalysisResult {
    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn weakness_count(&self) -> usize {
        self.weaknesses.len()
    }
}

/// One job or internship suggestion returned alongside the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatch {
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub apply_link: String,
}

/// The analysis service's response envelope. `analysis` and `jobs` are
/// present iff `success`; `error` is present iff not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<JobMatch>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_preview: Option<String>,
}

impl AnalysisResponse {
    pub fn job_count(&self) -> usize {
        self.jobs.as_ref().map_or(0, |jobs| jobs.len())
    }
}

/// Payload of the service's health endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}
