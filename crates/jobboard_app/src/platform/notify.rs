use std::io::Write;

use board_logging::{board_info, board_warn};
use jobboard_core::{Severity, Toast};

/// User-visible notification surface. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, toast: &Toast);
}

/// Prints toasts on their own line of the terminal.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, toast: &Toast) {
        let marker = match toast.severity {
            Severity::Info => {
                board_info!("Toast: {} - {}", toast.title, toast.description);
                "*"
            }
            Severity::Destructive => {
                board_warn!("Toast: {} - {}", toast.title, toast.description);
                "!"
            }
        };
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "[{marker}] {}: {}", toast.title, toast.description);
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: std::sync::Mutex<Vec<Toast>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn take(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|mut toasts| toasts.drain(..).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, toast: &Toast) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast.clone());
        }
    }
}
