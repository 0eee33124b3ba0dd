// src/error.rs
use thiserror::Error;

/// Fallback shown when a failure carries no remote-supplied message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze resume. Please try again.";

/// Everything that can go wrong between selecting a file and a terminal state.
///
/// `Application` carries the remote side's own error string and is surfaced
/// verbatim; `Transport` and `Protocol` collapse to the generic fallback for
/// the user, with the detail kept for logging.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    Validation(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed analysis response: {0}")]
    Protocol(String),

    #[error("{0}")]
    Application(String),
}

impl AnalysisError {
    /// User-facing message, applying the precedence rule: remote-supplied
    /// error string first, generic fallback for transport/protocol faults.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Validation(msg) | AnalysisError::Application(msg) => msg.clone(),
            AnalysisError::Transport(_) | AnalysisError::Protocol(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_errors_surface_verbatim() {
        let err = AnalysisError::Application("Unreadable PDF".to_string());
        assert_eq!(err.user_message(), "Unreadable PDF");
    }

    #[test]
    fn transport_and_protocol_collapse_to_generic_fallback() {
        let transport = AnalysisError::Transport("connection refused".to_string());
        let protocol = AnalysisError::Protocol("expected value at line 1".to_string());
        assert_eq!(transport.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(protocol.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn validation_messages_surface_verbatim() {
        let err = AnalysisError::Validation("Please select a resume file first".to_string());
        assert_eq!(err.user_message(), "Please select a resume file first");
    }
}
