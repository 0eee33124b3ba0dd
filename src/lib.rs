//! CareerUp client core: resume upload-and-analysis orchestration.
//!
//! The crate validates a user-selected resume, drives one asynchronous
//! exchange with the analysis service while synthesizing staged progress
//! feedback, and reconciles the outcome into a single renderable
//! [`WorkflowState`]. Rendering is the consumer's job; everything here is
//! the state machine behind it.

pub mod client;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod types;
pub mod validator;

pub use client::{AnalysisBackend, AnalysisClient};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, GENERIC_FAILURE_MESSAGE};
pub use orchestrator::{AnalysisOrchestrator, Stage, StageTimings, WorkflowState};
pub use types::{
    AnalysisResponse, AnalysisResult, CandidateFile, HealthStatus, JobMatch,
    ADVERTISED_MAX_FILE_SIZE, ALLOWED_MEDIA_TYPE,
};
pub use validator::FileOrigin;
