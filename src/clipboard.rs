//! Platform clipboard backend

use std::time::Duration;

use chromaflow_core::{Clipboard, ClipboardError};

/// System clipboard via `arboard`
///
/// On Linux the selection is served by this process, so `hold` keeps the
/// process alive as owner until the deadline passes or another app replaces
/// the contents.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    hold: Option<Duration>,
}

impl SystemClipboard {
    pub fn new(hold: Option<Duration>) -> Result<Self, ClipboardError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner, hold })
    }
}

impl Clipboard for SystemClipboard {
    #[cfg(target_os = "linux")]
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        use arboard::SetExtLinux;

        let set = self.inner.set();
        let set = match self.hold {
            Some(hold) => {
                log::info!("serving clipboard contents for up to {}s", hold.as_secs());
                set.wait_until(std::time::Instant::now() + hold)
            }
            None => set,
        };
        set.text(text).map_err(|e| ClipboardError::Write(e.to_string()))
    }

    #[cfg(not(target_os = "linux"))]
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
