use async_trait::async_trait;
use dtrack_scan::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Fake clock: records requested waits and returns immediately
#[derive(Default, Clone)]
pub struct MockSleeper {
    pub sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl MockSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    pub fn total(&self) -> Duration {
        self.sleeps.lock().unwrap().iter().sum()
    }
}

#[async_trait]
impl Sleeper for MockSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}
