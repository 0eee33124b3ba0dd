// src/types/mod.rs
pub mod candidate;
pub mod response;

pub use candidate::{CandidateFile, ADVERTISED_MAX_FILE_SIZE, ALLOWED_MEDIA_TYPE};
pub use response::{AnalysisResponse, AnalysisResult, HealthStatus, JobMatch};
