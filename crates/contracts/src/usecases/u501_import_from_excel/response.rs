use serde::{Deserialize, Deserializer, Serialize};

/// Summary returned by `POST /upload/excel`.
///
/// Row failures are part of a successful response: a non-zero
/// `failed_inserts` is a partial success, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub processed_rows: u32,
    pub successful_inserts: u32,
    pub failed_inserts: u32,
    /// One message per skipped row. The service sends `null` when empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<String>,
}

impl ImportSummary {
    pub fn is_partial(&self) -> bool {
        self.failed_inserts > 0
    }

    /// One-line summary for the success banner
    pub fn headline(&self) -> String {
        if self.is_partial() {
            format!(
                "File processed with row errors: {} of {} rows imported, {} failed.",
                self.successful_inserts, self.processed_rows, self.failed_inserts
            )
        } else {
            format!(
                "File processed: {} of {} rows imported.",
                self.successful_inserts, self.processed_rows
            )
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_success_summary() {
        let summary: ImportSummary = serde_json::from_value(json!({
            "processedRows": 10,
            "successfulInserts": 8,
            "failedInserts": 2,
            "errors": ["row 3: bad email", "row 9: missing username"]
        }))
        .unwrap();

        assert!(summary.is_partial());
        assert_eq!(summary.errors.len(), 2);
        assert_eq!(
            summary.headline(),
            "File processed with row errors: 8 of 10 rows imported, 2 failed."
        );
    }

    #[test]
    fn test_null_or_missing_errors() {
        let summary: ImportSummary = serde_json::from_value(json!({
            "processedRows": 3,
            "successfulInserts": 3,
            "failedInserts": 0,
            "errors": null
        }))
        .unwrap();
        assert!(summary.errors.is_empty());
        assert!(!summary.is_partial());
        assert_eq!(summary.headline(), "File processed: 3 of 3 rows imported.");

        let summary: ImportSummary = serde_json::from_value(json!({
            "processedRows": 1,
            "successfulInserts": 1,
            "failedInserts": 0
        }))
        .unwrap();
        assert!(summary.errors.is_empty());
    }

    #[test]
    fn test_missing_counts_are_rejected() {
        assert!(serde_json::from_value::<ImportSummary>(json!({ "ok": true })).is_err());
    }
}
