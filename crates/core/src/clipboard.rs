use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use arboard::Clipboard;
use tokio::task::JoinHandle;

use crate::error::Result;

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// How long the copied acknowledgment stays visible.
pub const COPIED_ACK_WINDOW: Duration = Duration::from_secs(2);

/// Transient copied-state flag.
///
/// `trigger` raises the flag and schedules a reset after
/// [`COPIED_ACK_WINDOW`]. Re-triggering cancels the pending reset so the
/// window restarts; dropping the indicator cancels it too, so no timer
/// outlives its owner.
#[derive(Default)]
pub struct CopiedIndicator {
    flag: Arc<AtomicBool>,
    reset: Option<JoinHandle<()>>,
}

impl CopiedIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_copied(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Raise the flag for one acknowledgment window.
    pub fn trigger(&mut self) {
        if let Some(reset) = self.reset.take() {
            reset.abort();
        }
        self.flag.store(true, Ordering::Relaxed);
        let flag = Arc::clone(&self.flag);
        self.reset = Some(tokio::spawn(async move {
            tokio::time::sleep(COPIED_ACK_WINDOW).await;
            flag.store(false, Ordering::Relaxed);
        }));
    }
}

impl Drop for CopiedIndicator {
    fn drop(&mut self) {
        if let Some(reset) = self.reset.take() {
            reset.abort();
        }
    }
}
