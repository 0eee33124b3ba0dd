// src/client.rs
//! HTTP boundary to the analysis service - one multipart POST per run.

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use tracing::{error, info, trace};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::types::{AnalysisResponse, CandidateFile, HealthStatus};

const ANALYZE_ENDPOINT: &str = "/api/analyze";
const HEALTH_ENDPOINT: &str = "/api/health";

/// Multipart field name the service expects the resume under.
const RESUME_FIELD: &str = "resume";

/// Seam between the orchestrator and the wire. The production implementation
/// is [`AnalysisClient`]; tests script their own.
#[async_trait::async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn submit(&self, file: &CandidateFile) -> Result<AnalysisResponse, AnalysisError>;
}

/// Client for the remote analysis service. No retry, no timeout, no
/// cancellation: each submit is awaited to completion or failure exactly once.
pub struct AnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Upload the resume and interpret the service's reply.
    ///
    /// The service reports application-level rejections as JSON bodies with
    /// `success:false`, including on 4xx/5xx statuses, so any body that
    /// parses as [`AnalysisResponse`] is returned as-is and the caller reads
    /// the `success` flag.
    pub async fn submit_resume(
        &self,
        file: &CandidateFile,
    ) -> Result<AnalysisResponse, AnalysisError> {
        let url = format!("{}{}", self.base_url, ANALYZE_ENDPOINT);

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.media_type)
            .map_err(|e| AnalysisError::Transport(format!("invalid media type: {}", e)))?;
        let form = Form::new().part(RESUME_FIELD, part);

        info!("Submitting resume to analysis service: {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = response.status();
        trace!("Analysis service response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        match serde_json::from_str::<AnalysisResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(e) if status.is_success() => {
                error!("Unparseable analysis response: {}", body);
                Err(AnalysisError::Protocol(e.to_string()))
            }
            Err(_) => {
                error!("Analysis service error status {}: {}", status, body);
                Err(AnalysisError::Transport(format!(
                    "service returned status {}",
                    status
                )))
            }
        }
    }

    /// Probe the service's health endpoint.
    pub async fn health(&self) -> Result<HealthStatus, AnalysisError> {
        let url = format!("{}{}", self.base_url, HEALTH_ENDPOINT);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| AnalysisError::Protocol(e.to_string()))
    }
}

#[async_trait::async_trait]
impl AnalysisBackend for AnalysisClient {
    async fn submit(&self, file: &CandidateFile) -> Result<AnalysisResponse, AnalysisError> {
        self.submit_resume(file).await
    }
}
