//! Input documents: a job description or a resume, loaded from disk or taken
//! from the bundled samples.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const SAMPLE_JOB_DESCRIPTION: &str = include_str!("../../assets/sample_job_description.txt");
const SAMPLE_RESUME: &str = include_str!("../../assets/sample_resume.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    JobDescription,
    Resume,
}

impl DocumentKind {
    /// Label embedded in prompts.
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::JobDescription => "job description",
            DocumentKind::Resume => "resume",
        }
    }

    /// Label for console output.
    pub fn title(self) -> &'static str {
        match self {
            DocumentKind::JobDescription => "Job Description",
            DocumentKind::Resume => "Resume",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract text from PDF {path}: {message}")]
    Pdf { path: PathBuf, message: String },

    #[error("{kind} at {path} contains no text")]
    Empty { kind: DocumentKind, path: PathBuf },
}

/// Free text tagged with its kind. Immutable once built.
#[derive(Debug, Clone)]
pub struct Document {
    kind: DocumentKind,
    text: String,
}

impl Document {
    pub fn new(kind: DocumentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The bundled sample for `kind`, used when no file is supplied.
    pub fn sample(kind: DocumentKind) -> Self {
        let text = match kind {
            DocumentKind::JobDescription => SAMPLE_JOB_DESCRIPTION,
            DocumentKind::Resume => SAMPLE_RESUME,
        };
        Self::new(kind, text)
    }

    /// Reads a document from disk. `.pdf` files go through text extraction;
    /// everything else is read as UTF-8.
    pub fn load(kind: DocumentKind, path: &Path) -> Result<Self, DocumentError> {
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

        let text = if is_pdf {
            pdf_extract::extract_text(path).map_err(|e| DocumentError::Pdf {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
                path: path.to_path_buf(),
                source,
            })?
        };

        if text.trim().is_empty() {
            return Err(DocumentError::Empty {
                kind,
                path: path.to_path_buf(),
            });
        }

        debug!("Loaded {} from {} ({} chars)", kind, path.display(), text.len());
        Ok(Self::new(kind, text))
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
