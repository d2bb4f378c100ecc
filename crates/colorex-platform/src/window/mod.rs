//! Native window lookup and z-order control.
//!
//! Platform implementations:
//! - Windows: Uses Win32 `FindWindowW` / `SetWindowPos` (`windows.rs`)
//! - Elsewhere: no runtime control; egui sets the initial level

#[cfg(windows)]
mod windows;

/// Whether [`set_topmost`] can change the window level at runtime.
pub const TOPMOST_SUPPORTED: bool = cfg!(windows);

/// Find a top-level window by its exact title. Returns the native handle.
pub fn find_window_by_title(title: &str) -> Option<usize> {
    #[cfg(windows)]
    {
        windows::find_window_by_title(title)
    }
    #[cfg(not(windows))]
    {
        let _ = title;
        None
    }
}

/// Put the window above (or back among) normal windows. Best-effort.
pub fn set_topmost(handle: usize, top: bool) -> bool {
    #[cfg(windows)]
    {
        windows::set_topmost(handle, top)
    }
    #[cfg(not(windows))]
    {
        let _ = (handle, top);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn test_unsupported_platform_has_no_window_control() {
        assert!(!TOPMOST_SUPPORTED);
        assert_eq!(find_window_by_title("colorex"), None);
        assert!(!set_topmost(1, true));
        assert!(!set_topmost(1, false));
    }

    #[cfg(windows)]
    #[test]
    fn test_missing_window_is_not_found() {
        assert!(TOPMOST_SUPPORTED);
        assert_eq!(find_window_by_title("colorex test window that does not exist"), None);
    }
}
