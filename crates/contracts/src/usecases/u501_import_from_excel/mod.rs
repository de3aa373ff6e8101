pub mod file;
pub mod response;

pub use file::{SpreadsheetFile, ACCEPT_ATTR, EXPECTED_COLUMNS, UPLOAD_FIELD_NAME, XLSX_MIME};
pub use response::ImportSummary;

use crate::usecases::common::UseCaseMetadata;

/// Bulk creation of employee records from an `.xlsx` workbook
pub struct ImportFromExcel;

impl UseCaseMetadata for ImportFromExcel {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "import_from_excel"
    }

    fn display_name() -> &'static str {
        "Import from Excel"
    }

    fn description() -> &'static str {
        "Upload an .xlsx file with one employee per row instead of filling in the form"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(ImportFromExcel::full_name(), "u501_import_from_excel");
    }
}
