use std::sync::{Arc, Mutex};
use wanted_list::prelude::*;

/// Mock BrowserLauncher recording opened URLs instead of launching
#[derive(Clone, Default)]
pub struct MockBrowserLauncher {
    opened: Arc<Mutex<Vec<String>>>,
}

impl MockBrowserLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl BrowserLauncher for MockBrowserLauncher {
    fn launch(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
