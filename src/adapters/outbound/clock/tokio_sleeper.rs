use crate::ports::outbound::Sleeper;
use async_trait::async_trait;
use std::time::Duration;

/// TokioSleeper adapter that waits on the tokio timer
pub struct TokioSleeper;

impl TokioSleeper {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioSleeper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
