/// Identification of a UseCase in logs and in the system log table
pub trait UseCaseMetadata {
    /// Index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "import_sales"
    fn usecase_name() -> &'static str;

    /// "u501_import_sales"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
