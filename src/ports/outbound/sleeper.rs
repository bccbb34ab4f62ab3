use async_trait::async_trait;
use std::time::Duration;

/// Sleeper port for the wait between status checks
///
/// Lets the polling loop run against a fake clock in tests.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
