// src/types/candidate.rs
use anyhow::{Context, Result};
use std::path::Path;

/// The single document type the workflow accepts.
pub const ALLOWED_MEDIA_TYPE: &str = "application/pdf";

/// Soft limit advertised to the user. Not enforced here; the analysis
/// service owns enforcement.
pub const ADVERTISED_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// A user-supplied document awaiting validation: display name, declared
/// media type, and the raw content to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Read a candidate from disk, deriving the declared media type from the
    /// file extension.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("Invalid file name: {}", path.display()))?
            .to_string();

        let media_type = media_type_for(&file_name).to_string();

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self {
            file_name,
            media_type,
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

fn media_type_for(file_name: &str) -> &'static str {
    let lower_name = file_name.to_lowercase();
    if lower_name.ends_with(".pdf") {
        "application/pdf"
    } else if lower_name.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else if lower_name.ends_with(".txt") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_follows_extension() {
        assert_eq!(media_type_for("resume.pdf"), "application/pdf");
        assert_eq!(media_type_for("Resume.PDF"), "application/pdf");
        assert_eq!(
            media_type_for("resume.docx"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(media_type_for("notes"), "application/octet-stream");
    }

    #[test]
    fn size_reports_byte_length() {
        let file = CandidateFile::new("resume.pdf", ALLOWED_MEDIA_TYPE, vec![0u8; 128]);
        assert_eq!(file.size(), 128);
    }
}
