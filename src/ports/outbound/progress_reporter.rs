/// ProgressReporter port for operator-facing progress messages
///
/// Messages go to stderr in production so stdout stays free for the
/// no-findings hint.
pub trait ProgressReporter {
    /// Reports a step or status message
    fn report(&self, message: &str);

    /// Reports progress through a bounded loop
    ///
    /// # Arguments
    /// * `current` - Current attempt, starting at 1
    /// * `total` - Maximum number of attempts
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning
    fn report_error(&self, message: &str);

    /// Reports completion of a bounded loop, clearing any progress display
    fn report_completion(&self, message: &str);
}
