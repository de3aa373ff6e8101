use serde::{Deserialize, Serialize};

/// Multipart field the service reads the workbook from
pub const UPLOAD_FIELD_NAME: &str = "excelFile";

/// MIME type of an `.xlsx` workbook
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Value for the `accept` attribute of the file input
pub const ACCEPT_ATTR: &str =
    ".xlsx,application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Header row the service maps onto record fields (case-insensitive).
/// The first five are required.
pub const EXPECTED_COLUMNS: [&str; 14] = [
    "First Name",
    "Last Name",
    "Username",
    "Email",
    "Password",
    "Phone Number",
    "Location Branch",
    "Basic Salary",
    "Gross Salary",
    "Address",
    "Department",
    "Designation",
    "User Role",
    "Access Level",
];

pub const REQUIRED_COLUMN_COUNT: usize = 5;

/// Metadata of a file picked in the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadsheetFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl SpreadsheetFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Only `.xlsx` workbooks are accepted.
    ///
    /// The service checks the `.xlsx` suffix, so the name must carry it
    /// whatever the MIME type says. Some platforms report no MIME type at
    /// all; the suffix alone decides then.
    pub fn is_spreadsheet(&self) -> bool {
        if !self.name.to_lowercase().ends_with(".xlsx") {
            return false;
        }
        let mime = self.mime.trim();
        mime.is_empty() || mime.eq_ignore_ascii_case(XLSX_MIME)
    }

    /// Size for display, e.g. "12.50 KB"
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size as f64 / 1024.0)
    }
}
