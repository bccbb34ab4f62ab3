use dtrack_scan::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter capturing everything presented
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub outputs: Arc<Mutex<Vec<String>>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outputs(&self) -> Vec<String> {
        self.outputs.lock().unwrap().clone()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.outputs.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
