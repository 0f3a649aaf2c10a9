//! State model of the mocked upload and summary editor.
//!
//! Nothing here reads the document: uploads are accepted by extension and
//! size, the phases advance on fixed timers driven by the caller, and the
//! summary is canned text the user can then edit.

use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

pub const UPLOAD_DELAY: Duration = Duration::from_millis(1500);
pub const PROCESSING_DELAY: Duration = Duration::from_millis(2000);
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const DEFAULT_TITLE: &str = "Document Summary";

pub const SIMULATED_SUMMARY: &str = "This is a simulated summary of your PDF document. \
In a real application, this would be the AI-generated summary of your uploaded document. \
You can edit this text in real-time to refine the summary based on your needs.\n\n\
Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nullam auctor, nisl eget ultricies \
ultricies, nisl nisl ultricies nisl, eget ultricies nisl nisl eget ultricies.\n\n\
Vivamus auctor, nisl eget ultricies ultricies, nisl nisl ultricies nisl, eget ultricies nisl \
nisl eget ultricies.";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("only PDF files are accepted: {0}")]
    NotPdf(String),
    #[error("file is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },
    #[error("an upload is already in progress")]
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadPhase {
    Idle,
    Uploading,
    Processing,
    Editing,
}

impl UploadPhase {
    /// Progress bar value shown while busy.
    pub fn progress(&self) -> Option<u8> {
        match self {
            Self::Uploading => Some(60),
            Self::Processing => Some(90),
            Self::Idle | Self::Editing => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Drop PDF Here",
            Self::Uploading => "Uploading...",
            Self::Processing => "Processing PDF...",
            Self::Editing => "Edit Summary",
        }
    }

    /// How long this phase lasts before [`SummaryEditor::advance`] moves on.
    pub fn delay(&self) -> Option<Duration> {
        match self {
            Self::Uploading => Some(UPLOAD_DELAY),
            Self::Processing => Some(PROCESSING_DELAY),
            Self::Idle | Self::Editing => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditorOption {
    AutoCorrectGrammar,
    HighlightKeyPoints,
    AddCitations,
}

/// Editor toggles. Displayed only; they never change the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditorOptions {
    pub auto_correct_grammar: bool,
    pub highlight_key_points: bool,
    pub add_citations: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            auto_correct_grammar: false,
            highlight_key_points: true,
            add_citations: false,
        }
    }
}

impl EditorOptions {
    pub fn toggle(&mut self, option: EditorOption) {
        let flag = match option {
            EditorOption::AutoCorrectGrammar => &mut self.auto_correct_grammar,
            EditorOption::HighlightKeyPoints => &mut self.highlight_key_points,
            EditorOption::AddCitations => &mut self.add_citations,
        };
        *flag = !*flag;
    }
}

/// Words in `text`, counted as pieces between whitespace runs.
///
/// Leading or trailing whitespace yields an empty piece, so an empty
/// summary still reports one word.
pub fn word_count(text: &str) -> usize {
    let mut count = 1;
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                count += 1;
            }
            in_space = true;
        } else {
            in_space = false;
        }
    }
    count
}

/// Upload, fake processing, then free-form editing of a canned summary.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryEditor {
    phase: UploadPhase,
    file_name: Option<String>,
    summary: String,
    options: EditorOptions,
}

impl Default for SummaryEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryEditor {
    pub fn new() -> Self {
        Self {
            phase: UploadPhase::Idle,
            file_name: None,
            summary: String::new(),
            options: EditorOptions::default(),
        }
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut EditorOptions {
        &mut self.options
    }

    /// Header shown above the editor.
    pub fn title(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.summary)
    }

    /// Accept a dropped file and start uploading.
    pub fn accept(&mut self, path: &Path, size: u64) -> Result<(), UploadError> {
        if matches!(self.phase, UploadPhase::Uploading | UploadPhase::Processing) {
            return Err(UploadError::Busy);
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            return Err(UploadError::NotPdf(name));
        }
        if size > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge {
                size,
                limit: MAX_UPLOAD_BYTES,
            });
        }

        tracing::info!(file = %name, size, "upload started");
        self.file_name = Some(name);
        self.phase = UploadPhase::Uploading;
        Ok(())
    }

    /// Move to the next phase once the current phase's delay has elapsed.
    pub fn advance(&mut self) -> UploadPhase {
        self.phase = match self.phase {
            UploadPhase::Uploading => UploadPhase::Processing,
            UploadPhase::Processing => {
                self.summary = SIMULATED_SUMMARY.to_string();
                UploadPhase::Editing
            }
            other => other,
        };
        tracing::debug!(phase = ?self.phase, "upload phase");
        self.phase
    }

    /// Replace the summary text. Only meaningful while editing.
    pub fn edit(&mut self, text: impl Into<String>) {
        if self.phase == UploadPhase::Editing {
            self.summary = text.into();
        }
    }

    /// Back to the upload screen, forgetting the file and summary.
    pub fn reset(&mut self) {
        self.file_name = None;
        self.summary.clear();
        self.phase = UploadPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_in_order() {
        let mut editor = SummaryEditor::new();
        assert_eq!(editor.title(), DEFAULT_TITLE);

        editor.accept(Path::new("/tmp/lease.pdf"), 1024).unwrap();
        assert_eq!(editor.phase(), UploadPhase::Uploading);
        assert_eq!(editor.phase().progress(), Some(60));
        assert_eq!(editor.phase().delay(), Some(UPLOAD_DELAY));

        assert_eq!(editor.advance(), UploadPhase::Processing);
        assert_eq!(editor.phase().progress(), Some(90));
        assert!(editor.summary().is_empty());

        assert_eq!(editor.advance(), UploadPhase::Editing);
        assert_eq!(editor.summary(), SIMULATED_SUMMARY);
        assert_eq!(editor.title(), "lease.pdf");

        // Editing is terminal until reset.
        assert_eq!(editor.advance(), UploadPhase::Editing);
    }

    #[test]
    fn rejects_non_pdf() {
        let mut editor = SummaryEditor::new();
        let err = editor.accept(Path::new("notes.docx"), 10).unwrap_err();
        assert_eq!(err, UploadError::NotPdf("notes.docx".into()));
        assert_eq!(editor.phase(), UploadPhase::Idle);
    }

    #[test]
    fn extension_check_ignores_case() {
        let mut editor = SummaryEditor::new();
        assert!(editor.accept(Path::new("CONTRACT.PDF"), 10).is_ok());
    }

    #[test]
    fn rejects_oversized_file() {
        let mut editor = SummaryEditor::new();
        let err = editor
            .accept(Path::new("big.pdf"), MAX_UPLOAD_BYTES + 1)
            .unwrap_err();
        assert!(matches!(err, UploadError::TooLarge { .. }));
    }

    #[test]
    fn rejects_second_upload_while_busy() {
        let mut editor = SummaryEditor::new();
        editor.accept(Path::new("a.pdf"), 1).unwrap();
        assert_eq!(
            editor.accept(Path::new("b.pdf"), 1),
            Err(UploadError::Busy)
        );
    }

    #[test]
    fn edit_and_reset() {
        let mut editor = SummaryEditor::new();
        editor.edit("ignored while idle");
        assert!(editor.summary().is_empty());

        editor.accept(Path::new("a.pdf"), 1).unwrap();
        editor.advance();
        editor.advance();
        editor.edit("Tenant pays rent monthly.");
        assert_eq!(editor.word_count(), 4);

        editor.reset();
        assert_eq!(editor.phase(), UploadPhase::Idle);
        assert_eq!(editor.title(), DEFAULT_TITLE);
        assert!(editor.summary().is_empty());
    }

    #[test]
    fn word_count_splits_on_whitespace_runs() {
        assert_eq!(word_count("one two  three\n\nfour"), 4);
        assert_eq!(word_count(""), 1);
        assert_eq!(word_count(" leading"), 2);
    }

    #[test]
    fn options_default_and_toggle() {
        let mut options = EditorOptions::default();
        assert!(options.highlight_key_points);
        assert!(!options.auto_correct_grammar);

        options.toggle(EditorOption::HighlightKeyPoints);
        options.toggle(EditorOption::AddCitations);
        assert!(!options.highlight_key_points);
        assert!(options.add_citations);
    }
}
