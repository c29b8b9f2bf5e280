/// Clipboard sink for copying hex codes.
use arboard::Clipboard;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Unavailable(String),
    #[error("failed to write clipboard: {0}")]
    Write(String),
}

pub trait ClipboardSink {
    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard. The handle is opened lazily and kept for the process
/// lifetime: on X11 and Wayland the contents are only served while it lives.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
    hold_until_replaced: bool,
}

impl SystemClipboard {
    /// A clipboard for short-lived processes. On Linux each copy blocks until
    /// another program takes ownership of the clipboard, so the text outlives
    /// the process' own handle. Elsewhere it behaves like the default.
    pub fn held() -> Self {
        Self {
            clipboard: None,
            hold_until_replaced: true,
        }
    }

    pub fn holds_until_replaced(&self) -> bool {
        self.hold_until_replaced && cfg!(target_os = "linux")
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard not initialised".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        let hold = self.holds_until_replaced();
        let clipboard = self.handle()?;
        if hold {
            set_and_wait(clipboard, text)?;
        } else {
            clipboard
                .set_text(text.to_string())
                .map_err(|e| ClipboardError::Write(e.to_string()))?;
        }
        info!(text, hold, "copied to clipboard");
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn set_and_wait(clipboard: &mut Clipboard, text: &str) -> Result<(), ClipboardError> {
    use arboard::SetExtLinux;

    clipboard
        .set()
        .wait()
        .text(text.to_string())
        .map_err(|e| ClipboardError::Write(e.to_string()))
}

#[cfg(not(target_os = "linux"))]
fn set_and_wait(clipboard: &mut Clipboard, text: &str) -> Result<(), ClipboardError> {
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::Write(e.to_string()))
}
