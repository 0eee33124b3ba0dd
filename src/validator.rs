// src/validator.rs
use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::types::{CandidateFile, ALLOWED_MEDIA_TYPE};

/// Which gesture delivered the candidate. Decides the wording of a
/// rejection, never the decision itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOrigin {
    Select,
    Drop,
}

impl FileOrigin {
    fn rejection_message(self) -> &'static str {
        match self {
            FileOrigin::Select => "Please select a valid PDF file",
            FileOrigin::Drop => "Please drop a valid PDF file",
        }
    }
}

/// Accept or reject a candidate by declared media type. Pure metadata check,
/// no I/O; both the picker and the drop path funnel through here.
pub fn validate(
    candidate: CandidateFile,
    origin: FileOrigin,
) -> Result<CandidateFile, AnalysisError> {
    if candidate.media_type == ALLOWED_MEDIA_TYPE {
        debug!("Accepted candidate file: {}", candidate.file_name);
        Ok(candidate)
    } else {
        warn!(
            "Rejected candidate file {} with media type {}",
            candidate.file_name, candidate.media_type
        );
        Err(AnalysisError::Validation(
            origin.rejection_message().to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> CandidateFile {
        CandidateFile::new("resume.pdf", "application/pdf", b"%PDF-1.4".to_vec())
    }

    fn docx() -> CandidateFile {
        CandidateFile::new(
            "resume.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            vec![0u8; 4],
        )
    }

    #[test]
    fn accepts_declared_pdf_from_either_origin() {
        assert!(validate(pdf(), FileOrigin::Select).is_ok());
        assert!(validate(pdf(), FileOrigin::Drop).is_ok());
    }

    #[test]
    fn rejects_non_pdf_with_origin_specific_wording() {
        let select_err = validate(docx(), FileOrigin::Select).unwrap_err();
        assert_eq!(select_err.user_message(), "Please select a valid PDF file");

        let drop_err = validate(docx(), FileOrigin::Drop).unwrap_err();
        assert_eq!(drop_err.user_message(), "Please drop a valid PDF file");
    }

    #[test]
    fn decision_ignores_file_name_and_size() {
        // A mislabeled extension is accepted as long as the declared type matches.
        let mislabeled = CandidateFile::new("resume.docx", "application/pdf", vec![0u8; 1]);
        assert!(validate(mislabeled, FileOrigin::Select).is_ok());

        // Size is advisory only.
        let oversized = CandidateFile::new(
            "big.pdf",
            "application/pdf",
            vec![0u8; 1024],
        );
        assert!(validate(oversized, FileOrigin::Drop).is_ok());
    }
}
