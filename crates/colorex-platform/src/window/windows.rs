//! Windows implementation of the window API using Win32.

use std::ptr;
use tracing::debug;
use windows_sys::Win32::Foundation::HWND;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    FindWindowW, SetWindowPos, SWP_NOMOVE, SWP_NOSIZE,
};

const HWND_TOPMOST: isize = -1;
const HWND_NOTOPMOST: isize = -2;

pub fn find_window_by_title(title: &str) -> Option<usize> {
    let wide: Vec<u16> = title.encode_utf16().chain(std::iter::once(0)).collect();

    unsafe {
        let hwnd = FindWindowW(ptr::null(), wide.as_ptr());
        if hwnd.is_null() {
            return None;
        }
        Some(hwnd as usize)
    }
}

pub fn set_topmost(handle: usize, top: bool) -> bool {
    if handle == 0 {
        return false;
    }

    let insert_after = if top { HWND_TOPMOST } else { HWND_NOTOPMOST };

    unsafe {
        let ok = SetWindowPos(
            handle as HWND,
            insert_after as HWND,
            0,
            0,
            0,
            0,
            SWP_NOMOVE | SWP_NOSIZE,
        );
        debug!(handle, top, ok = ok != 0, "SetWindowPos");
        ok != 0
    }
}
