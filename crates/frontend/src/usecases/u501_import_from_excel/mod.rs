//! Bulk creation of employee records from an `.xlsx` workbook.
//!
//! The workbook is parsed by the records service; this panel only validates
//! the file type, sends it and shows the per-row summary.

mod api;
pub mod state;
mod view;

pub use view::ExcelUpload;
