use std::sync::{Arc, Mutex};
use wanted_list::prelude::*;

/// One rendered frame, captured by value
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedFrame {
    Loading,
    Error(String),
    /// `(uid, instance_id)` of every card in render order
    Loaded(Vec<(String, u64)>),
}

/// Mock ViewRenderer that captures every frame
///
/// Clones share the same frame log, so a test can keep a handle after
/// moving the renderer into a view.
#[derive(Clone, Default)]
pub struct MockViewRenderer {
    frames: Arc<Mutex<Vec<RecordedFrame>>>,
}

impl MockViewRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<RecordedFrame> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last_frame(&self) -> Option<RecordedFrame> {
        self.frames.lock().unwrap().last().cloned()
    }
}

impl ViewRenderer for MockViewRenderer {
    fn render(&mut self, frame: ViewFrame<'_>) -> Result<()> {
        let recorded = match frame {
            ViewFrame::Loading => RecordedFrame::Loading,
            ViewFrame::Error { message } => RecordedFrame::Error(message.to_string()),
            ViewFrame::Loaded { cards } => RecordedFrame::Loaded(
                cards
                    .iter()
                    .map(|entry| (entry.item().uid.clone(), entry.instance_id()))
                    .collect(),
            ),
        };
        self.frames.lock().unwrap().push(recorded);
        Ok(())
    }
}
