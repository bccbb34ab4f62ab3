use crate::shared::Result;

/// OutputPresenter port for delivering rendered output
///
/// The scan workflow hands the serialized report to a presenter bound
/// to the output file; the CLI uses a stdout presenter for the hint
/// shown when there is nothing to report.
pub trait OutputPresenter {
    /// Presents `content` at the presenter's destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the destination fails
    /// - The destination is rejected by a security check
    fn present(&self, content: &str) -> Result<()>;
}
