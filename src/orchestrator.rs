// src/orchestrator.rs
//! The upload-and-analysis workflow state machine.
//!
//! One orchestrator instance owns one [`WorkflowState`] and drives at most
//! one analysis at a time: Idle -> Validated -> Running(stage) ->
//! Succeeded | Failed, with `reset` returning to Idle from a terminal state.
//! The staged progress shown while Running is a scripted sequence with fixed
//! dwell times; only the transition out of `AnalyzingSkills` waits on the
//! real network exchange.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::client::AnalysisBackend;
use crate::error::AnalysisError;
use crate::types::{AnalysisResponse, CandidateFile};
use crate::validator::{self, FileOrigin};

const NO_FILE_MESSAGE: &str = "Please select a resume file first";
const ALREADY_RUNNING_MESSAGE: &str = "An analysis is already in progress";
const RESET_WHILE_RUNNING_MESSAGE: &str = "Cannot reset while an analysis is in progress";

/// Cosmetic progress stages, in the only order they may be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Uploading,
    Extracting,
    AnalyzingSkills,
    MatchingJobs,
    Finalizing,
}

impl Stage {
    pub const SEQUENCE: [Stage; 5] = [
        Stage::Uploading,
        Stage::Extracting,
        Stage::AnalyzingSkills,
        Stage::MatchingJobs,
        Stage::Finalizing,
    ];

    /// User-facing progress label.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Uploading => "Uploading resume...",
            Stage::Extracting => "Extracting text from PDF...",
            Stage::AnalyzingSkills => "Analyzing skills with AI...",
            Stage::MatchingJobs => "Finding matching jobs & internships...",
            Stage::Finalizing => "Almost done...",
        }
    }
}

/// Dwell time spent in each cosmetic stage. `AnalyzingSkills` has no dwell:
/// it ends when the real request resolves.
#[derive(Debug, Clone)]
pub struct StageTimings {
    pub uploading: Duration,
    pub extracting: Duration,
    pub matching_jobs: Duration,
    pub finalizing: Duration,
}

impl Default for StageTimings {
    fn default() -> Self {
        Self {
            uploading: Duration::from_millis(800),
            extracting: Duration::from_millis(1000),
            matching_jobs: Duration::from_millis(1200),
            finalizing: Duration::from_millis(500),
        }
    }
}

impl StageTimings {
    /// All-zero dwells, for consumers that want no scripted delay.
    pub fn immediate() -> Self {
        Self {
            uploading: Duration::ZERO,
            extracting: Duration::ZERO,
            matching_jobs: Duration::ZERO,
            finalizing: Duration::ZERO,
        }
    }
}

/// The single live state of the workflow. The candidate file is held for the
/// duration of Validated/Running and dropped on a terminal state; it sits
/// behind an `Arc` so republishing the state on each stage transition does
/// not copy the file's bytes. The response is owned by Succeeded and dropped
/// on reset.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    Idle { error: Option<String> },
    Validated { file: Arc<CandidateFile> },
    Running { file: Arc<CandidateFile>, stage: Stage },
    Succeeded { response: AnalysisResponse },
    Failed { message: String },
}

impl Default for WorkflowState {
    fn default() -> Self {
        WorkflowState::Idle { error: None }
    }
}

impl WorkflowState {
    pub fn is_running(&self) -> bool {
        matches!(self, WorkflowState::Running { .. })
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            WorkflowState::Running { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// The immutable result payload, present iff Succeeded.
    pub fn response(&self) -> Option<&AnalysisResponse> {
        match self {
            WorkflowState::Succeeded { response } => Some(response),
            _ => None,
        }
    }

    /// Transient or terminal error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            WorkflowState::Idle { error } => error.as_deref(),
            WorkflowState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Owns the workflow state and drives one analysis at a time against an
/// [`AnalysisBackend`]. Consumers observe state through [`subscribe`];
/// publishing keeps working even after every receiver is gone, so an
/// abandoned run still writes its terminal state without failing.
///
/// [`subscribe`]: AnalysisOrchestrator::subscribe
pub struct AnalysisOrchestrator<B: AnalysisBackend> {
    backend: B,
    timings: StageTimings,
    state: watch::Sender<WorkflowState>,
}

impl<B: AnalysisBackend> AnalysisOrchestrator<B> {
    pub fn new(backend: B) -> Self {
        Self::with_timings(backend, StageTimings::default())
    }

    pub fn with_timings(backend: B, timings: StageTimings) -> Self {
        Self {
            backend,
            timings,
            state: watch::Sender::new(WorkflowState::default()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    /// Watch the workflow state as it transitions.
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    /// Take a candidate file from a selection or drop gesture.
    ///
    /// Accepted: the file is held (Validated) and any previous error or
    /// result is discarded. Rejected: any held file is discarded and the
    /// reason is kept as a transient Idle error as well as returned.
    pub fn accept_file(
        &mut self,
        candidate: CandidateFile,
        origin: FileOrigin,
    ) -> Result<(), AnalysisError> {
        if self.state.borrow().is_running() {
            return Err(AnalysisError::Validation(ALREADY_RUNNING_MESSAGE.to_string()));
        }

        match validator::validate(candidate, origin) {
            Ok(file) => {
                self.set_state(WorkflowState::Validated {
                    file: Arc::new(file),
                });
                Ok(())
            }
            Err(err) => {
                self.set_state(WorkflowState::Idle {
                    error: Some(err.user_message()),
                });
                Err(err)
            }
        }
    }

    /// Run one analysis to its terminal state and return it.
    ///
    /// Errors only on precondition failures (no file held, already Running);
    /// analysis failures are not an `Err` but the `Failed` terminal state.
    pub async fn start(&mut self) -> Result<WorkflowState, AnalysisError> {
        let file = {
            let state = self.state.borrow();
            match &*state {
                WorkflowState::Running { .. } => {
                    return Err(AnalysisError::Validation(ALREADY_RUNNING_MESSAGE.to_string()))
                }
                WorkflowState::Validated { file } => Arc::clone(file),
                _ => return Err(AnalysisError::Validation(NO_FILE_MESSAGE.to_string())),
            }
        };

        self.enter_stage(&file, Stage::Uploading);
        tokio::time::sleep(self.timings.uploading).await;

        self.enter_stage(&file, Stage::Extracting);
        tokio::time::sleep(self.timings.extracting).await;

        // The one real exchange. The stage may not advance past
        // AnalyzingSkills until the response is known.
        self.enter_stage(&file, Stage::AnalyzingSkills);
        let outcome = self.backend.submit(&file).await;

        match outcome {
            Ok(response) if response.success => {
                self.enter_stage(&file, Stage::MatchingJobs);
                tokio::time::sleep(self.timings.matching_jobs).await;

                self.enter_stage(&file, Stage::Finalizing);
                tokio::time::sleep(self.timings.finalizing).await;

                info!(
                    "Analysis succeeded: {} skills, {} jobs",
                    response
                        .analysis
                        .as_ref()
                        .map_or(0, |analysis| analysis.skill_count()),
                    response.job_count()
                );
                self.set_state(WorkflowState::Succeeded { response });
            }
            Ok(response) => {
                // Application rejection: surface the remote message at once,
                // skipping the remaining cosmetic stages.
                let message = response
                    .error
                    .unwrap_or_else(|| crate::error::GENERIC_FAILURE_MESSAGE.to_string());
                warn!("Analysis rejected by service: {}", message);
                self.set_state(WorkflowState::Failed { message });
            }
            Err(err) => {
                warn!("Analysis request failed: {}", err);
                self.set_state(WorkflowState::Failed {
                    message: err.user_message(),
                });
            }
        }

        Ok(self.state())
    }

    /// Return to Idle, discarding the held file, response, and error.
    ///
    /// Rejected while Running. `start` holds `&mut self` to a terminal
    /// state, but a `start` future dropped at a suspension point leaves the
    /// state Running, so the guard is reachable.
    pub fn reset(&mut self) -> Result<(), AnalysisError> {
        if self.state.borrow().is_running() {
            return Err(AnalysisError::Validation(
                RESET_WHILE_RUNNING_MESSAGE.to_string(),
            ));
        }
        self.set_state(WorkflowState::Idle { error: None });
        Ok(())
    }

    fn enter_stage(&self, file: &Arc<CandidateFile>, stage: Stage) {
        info!("Analysis stage: {}", stage.label());
        self.state.send_replace(WorkflowState::Running {
            file: Arc::clone(file),
            stage,
        });
    }

    fn set_state(&self, next: WorkflowState) {
        debug!("Workflow state -> {:?}", std::mem::discriminant(&next));
        self.state.send_replace(next);
    }
}
