//! Upload panel state. The selected `web_sys::File` itself lives in the view;
//! this only tracks its metadata.

use crate::shared::state::operation::OpState;
use contracts::shared::ApiError;
use contracts::usecases::u501_import_from_excel::{ImportSummary, SpreadsheetFile};

pub const INVALID_TYPE_MESSAGE: &str = "Please select a valid Excel file (.xlsx).";
pub const NO_FILE_MESSAGE: &str = "Please select an Excel file to upload.";

/// Result of picking a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSelection {
    Accepted,
    /// Not a spreadsheet; the input must be cleared
    Rejected,
    Cleared,
    /// An upload is running, the selection is frozen
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadRejected {
    NoFile,
    Busy,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportState {
    file: Option<SpreadsheetFile>,
    pub upload: OpState<ImportSummary>,
    /// Local problems (wrong type, nothing picked)
    notice: Option<String>,
}

impl ImportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&SpreadsheetFile> {
        self.file.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.upload.is_pending()
    }

    /// A new pick drops the previous summary and error
    pub fn select_file(&mut self, file: Option<SpreadsheetFile>) -> FileSelection {
        if self.is_uploading() {
            return FileSelection::Busy;
        }
        self.upload.reset();
        self.notice = None;
        match file {
            None => {
                self.file = None;
                FileSelection::Cleared
            }
            Some(file) if file.is_spreadsheet() => {
                self.file = Some(file);
                FileSelection::Accepted
            }
            Some(file) => {
                log::warn!("Rejected upload candidate '{}' ({})", file.name, file.mime);
                self.file = None;
                self.notice = Some(INVALID_TYPE_MESSAGE.to_string());
                FileSelection::Rejected
            }
        }
    }

    pub fn begin_upload(&mut self) -> Result<SpreadsheetFile, UploadRejected> {
        if self.is_uploading() {
            return Err(UploadRejected::Busy);
        }
        let Some(file) = self.file.clone() else {
            self.notice = Some(NO_FILE_MESSAGE.to_string());
            return Err(UploadRejected::NoFile);
        };
        self.notice = None;
        self.upload.begin();
        Ok(file)
    }

    /// Returns `true` when the view should clear its file input.
    ///
    /// Row failures inside a summary are still a success.
    pub fn finish_upload(&mut self, result: Result<ImportSummary, ApiError>) -> bool {
        match result {
            Ok(summary) => {
                self.upload.succeed(summary);
                self.file = None;
                true
            }
            Err(e) => {
                self.upload.fail(format!("Upload failed: {}", e));
                false
            }
        }
    }

    pub fn summary(&self) -> Option<&ImportSummary> {
        self.upload.succeeded()
    }

    pub fn error(&self) -> Option<&str> {
        self.notice.as_deref().or_else(|| self.upload.error())
    }

    pub fn can_upload(&self) -> bool {
        self.file.is_some() && !self.is_uploading()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_uploading() {
            "Uploading..."
        } else {
            "Upload Excel"
        }
    }
}
