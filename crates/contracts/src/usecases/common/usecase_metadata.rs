/// Identification of a use case for headings and log lines
pub trait UseCaseMetadata {
    /// Index such as "u501"
    fn usecase_index() -> &'static str;

    /// Technical name such as "import_from_excel"
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name of the form "u501_import_from_excel"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
