use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

//
// ─── SLOTS ─────────────────────────────────────────────────────────────────────
//

/// One of the three file inputs the client collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileSlot {
    Pdf,
    Questions,
    ExpectedAnswers,
}

impl FileSlot {
    pub const ALL: [FileSlot; 3] = [Self::Pdf, Self::Questions, Self::ExpectedAnswers];

    /// Content type a file must carry to be accepted into this slot.
    #[must_use]
    pub const fn expected_mime(self) -> &'static str {
        match self {
            FileSlot::Pdf => "application/pdf",
            FileSlot::Questions | FileSlot::ExpectedAnswers => "application/json",
        }
    }

    /// Multipart field name used when the file is uploaded.
    #[must_use]
    pub const fn form_field(self) -> &'static str {
        match self {
            FileSlot::Pdf => "pdf",
            FileSlot::Questions => "questions",
            FileSlot::ExpectedAnswers => "expected_answers",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FileSlot::Pdf => "PDF document",
            FileSlot::Questions => "Questions (JSON)",
            FileSlot::ExpectedAnswers => "Expected answers (JSON)",
        }
    }

    /// Value for the picker's `accept` attribute.
    #[must_use]
    pub const fn accept(self) -> &'static str {
        match self {
            FileSlot::Pdf => ".pdf,application/pdf",
            FileSlot::Questions | FileSlot::ExpectedAnswers => ".json,application/json",
        }
    }

    #[must_use]
    pub fn accepts(self, content_type: &str) -> bool {
        let essence = content_type.split(';').next().unwrap_or_default().trim();
        essence.eq_ignore_ascii_case(self.expected_mime())
    }
}

impl fmt::Display for FileSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
    #[error("{slot} expects {expected}, got {actual}")]
    ContentTypeMismatch {
        slot: FileSlot,
        expected: &'static str,
        actual: String,
    },
}

//
// ─── SELECTED FILE ─────────────────────────────────────────────────────────────
//

/// A file picked by the user. Bytes are read only when the request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    content_type: String,
    path: PathBuf,
}

impl SelectedFile {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            path: path.into(),
        }
    }

    /// Build a selection from a filesystem path, guessing the content type
    /// from the extension.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::from_picker(path, None)
    }

    /// Build a selection from what a file picker reports. The reported type
    /// wins; the extension is only consulted when it is missing or blank.
    #[must_use]
    pub fn from_picker(path: impl Into<PathBuf>, reported_type: Option<String>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let content_type = reported_type
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| {
                mime_guess::from_path(&path)
                    .first_or_octet_stream()
                    .essence_str()
                    .to_owned()
            });
        Self {
            name,
            content_type,
            path,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

//
// ─── SELECTION ─────────────────────────────────────────────────────────────────
//

/// Files currently chosen in the three pickers.
///
/// The only check performed locally is the content-type gate in [`select`];
/// file contents are never inspected.
///
/// [`select`]: UploadSelection::select
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSelection {
    pdf: Option<SelectedFile>,
    questions: Option<SelectedFile>,
    expected_answers: Option<SelectedFile>,
}

impl UploadSelection {
    /// Place `file` into `slot`.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::ContentTypeMismatch` when the file's content type
    /// does not match the slot. The slot keeps its previous value.
    pub fn select(&mut self, slot: FileSlot, file: SelectedFile) -> Result<(), SelectionError> {
        if !slot.accepts(file.content_type()) {
            return Err(SelectionError::ContentTypeMismatch {
                slot,
                expected: slot.expected_mime(),
                actual: file.content_type,
            });
        }
        *self.slot_mut(slot) = Some(file);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, slot: FileSlot) -> Option<&SelectedFile> {
        match slot {
            FileSlot::Pdf => self.pdf.as_ref(),
            FileSlot::Questions => self.questions.as_ref(),
            FileSlot::ExpectedAnswers => self.expected_answers.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: FileSlot) -> &mut Option<SelectedFile> {
        match slot {
            FileSlot::Pdf => &mut self.pdf,
            FileSlot::Questions => &mut self.questions,
            FileSlot::ExpectedAnswers => &mut self.expected_answers,
        }
    }

    /// Inputs for answer generation, if both the PDF and questions are chosen.
    #[must_use]
    pub fn rag_request(&self) -> Option<RagRequest> {
        Some(RagRequest {
            pdf: self.pdf.clone()?,
            questions: self.questions.clone()?,
        })
    }

    /// Inputs for scoring, if both JSON files are chosen.
    #[must_use]
    pub fn scoring_request(&self) -> Option<ScoringRequest> {
        Some(ScoringRequest {
            questions: self.questions.clone()?,
            expected_answers: self.expected_answers.clone()?,
        })
    }
}

/// Files required by `/process-rag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RagRequest {
    pub pdf: SelectedFile,
    pub questions: SelectedFile,
}

/// Files required by `/score-answers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringRequest {
    pub questions: SelectedFile,
    pub expected_answers: SelectedFile,
}
