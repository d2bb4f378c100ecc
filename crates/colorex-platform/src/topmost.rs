//! One-shot discovery of our own native window at startup.
//!
//! The window handle is not known until the event loop has created the
//! window, so a short-lived thread polls for it by title a fixed number of
//! times, applies the topmost flag once found and reports back to the UI
//! thread over a channel.

use crate::window::{find_window_by_title, set_topmost, TOPMOST_SUPPORTED};
use crate::{PlatformError, PlatformResult};
use crossbeam_channel::{bounded, Receiver};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for the finder thread.
#[derive(Debug, Clone)]
pub struct TopmostFinderConfig {
    /// Exact window title to look for.
    pub title: String,
    /// Topmost flag to apply once the window is found.
    pub on_top: bool,
    /// Number of lookups before giving up.
    pub attempts: u32,
    /// Sleep between lookups.
    pub backoff: Duration,
}

impl Default for TopmostFinderConfig {
    fn default() -> Self {
        Self {
            title: "colorex".into(),
            on_top: true,
            attempts: 5,
            backoff: Duration::from_millis(500),
        }
    }
}

/// Outcome reported by the finder thread. Exactly one is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopmostEvent {
    /// Window found; `applied` tells whether the topmost flag was set.
    Found { handle: usize, applied: bool },
    /// All attempts failed.
    GaveUp,
}

/// Handle to the finder thread.
pub struct TopmostFinderHandle {
    event_rx: Receiver<TopmostEvent>,
    #[allow(dead_code)]
    thread: Option<JoinHandle<()>>,
}

impl TopmostFinderHandle {
    /// Try to receive the outcome (non-blocking).
    pub fn try_recv(&self) -> Option<TopmostEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Block until the outcome arrives or the thread is gone.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<TopmostEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

/// Start the finder using the native window API.
pub fn spawn_topmost_finder(config: TopmostFinderConfig) -> PlatformResult<TopmostFinderHandle> {
    if !TOPMOST_SUPPORTED {
        return Err(PlatformError::NotSupported);
    }
    Ok(spawn_topmost_finder_with(
        config,
        find_window_by_title,
        set_topmost,
    ))
}

/// Start the finder with explicit lookup and apply functions.
pub fn spawn_topmost_finder_with<F, A>(
    config: TopmostFinderConfig,
    find: F,
    apply: A,
) -> TopmostFinderHandle
where
    F: Fn(&str) -> Option<usize> + Send + 'static,
    A: Fn(usize, bool) -> bool + Send + 'static,
{
    let (event_tx, event_rx) = bounded(1);

    let thread = thread::spawn(move || {
        for attempt in 1..=config.attempts {
            if let Some(handle) = find(&config.title) {
                let applied = apply(handle, config.on_top);
                info!(handle, attempt, applied, "Found window handle");
                let _ = event_tx.send(TopmostEvent::Found { handle, applied });
                return;
            }

            debug!(attempt, title = %config.title, "Window not found yet");
            if attempt < config.attempts {
                thread::sleep(config.backoff);
            }
        }

        debug!(attempts = config.attempts, "Giving up on window handle discovery");
        let _ = event_tx.send(TopmostEvent::GaveUp);
    });

    TopmostFinderHandle {
        event_rx,
        thread: Some(thread),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    const WAIT: Duration = Duration::from_secs(5);

    fn config(attempts: u32) -> TopmostFinderConfig {
        TopmostFinderConfig {
            title: "colorex".into(),
            on_top: true,
            attempts,
            backoff: Duration::from_millis(1),
        }
    }

    #[test]
    fn test_default_config() {
        let config = TopmostFinderConfig::default();
        assert_eq!(config.attempts, 5);
        assert_eq!(config.backoff, Duration::from_millis(500));
    }

    #[test]
    fn test_found_on_later_attempt_applies_flag() {
        let lookups = Arc::new(AtomicU32::new(0));
        let applied_with = Arc::new(Mutex::new(None));

        let lookups_clone = lookups.clone();
        let applied_clone = applied_with.clone();
        let handle = spawn_topmost_finder_with(
            config(5),
            move |title| {
                assert_eq!(title, "colorex");
                let n = lookups_clone.fetch_add(1, Ordering::SeqCst) + 1;
                (n == 3).then_some(42)
            },
            move |handle, top| {
                *applied_clone.lock().unwrap() = Some((handle, top));
                true
            },
        );

        assert_eq!(
            handle.recv_timeout(WAIT),
            Some(TopmostEvent::Found { handle: 42, applied: true })
        );
        assert_eq!(lookups.load(Ordering::SeqCst), 3);
        assert_eq!(*applied_with.lock().unwrap(), Some((42, true)));
    }

    #[test]
    fn test_gives_up_after_all_attempts() {
        let lookups = Arc::new(AtomicU32::new(0));
        let lookups_clone = lookups.clone();

        let handle = spawn_topmost_finder_with(
            config(5),
            move |_| {
                lookups_clone.fetch_add(1, Ordering::SeqCst);
                None
            },
            |_, _| panic!("must not apply without a handle"),
        );

        assert_eq!(handle.recv_timeout(WAIT), Some(TopmostEvent::GaveUp));
        assert_eq!(lookups.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_apply_failure_is_reported() {
        let handle = spawn_topmost_finder_with(config(1), |_| Some(7), |_, _| false);
        assert_eq!(
            handle.recv_timeout(WAIT),
            Some(TopmostEvent::Found { handle: 7, applied: false })
        );
    }
}
