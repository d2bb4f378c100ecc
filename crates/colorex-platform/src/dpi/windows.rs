//! Windows DPI awareness implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use tracing::{info, warn};
use windows_sys::Win32::Foundation::POINT;
use windows_sys::Win32::Graphics::Gdi::{MonitorFromPoint, HMONITOR, MONITOR_DEFAULTTONEAREST};

static INIT: Once = Once::new();
static DPI_AWARE: AtomicBool = AtomicBool::new(false);

/// Set the process DPI awareness to Per-Monitor V2.
/// This ensures we receive physical (unscaled) coordinates from the system.
///
/// Must be called early in the application lifecycle, before any window is created.
pub fn set_dpi_aware() {
    INIT.call_once(|| {
        unsafe {
            const DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2: isize = -4;

            #[link(name = "user32")]
            extern "system" {
                fn SetProcessDpiAwarenessContext(value: isize) -> i32;
            }

            let result = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
            if result != 0 {
                DPI_AWARE.store(true, Ordering::SeqCst);
                info!("Set Per-Monitor V2 DPI awareness");
            } else {
                warn!("Failed to set Per-Monitor V2 DPI awareness, coordinates will be scaled");
            }
        }
    });
}

pub fn is_dpi_aware() -> bool {
    DPI_AWARE.load(Ordering::SeqCst)
}

/// Effective DPI scale of the monitor nearest to `(x, y)`, relative to 96 DPI.
pub fn scale_factor_at(x: i32, y: i32) -> f64 {
    unsafe {
        const MDT_EFFECTIVE_DPI: i32 = 0;

        #[link(name = "shcore")]
        extern "system" {
            fn GetDpiForMonitor(
                monitor: HMONITOR,
                dpi_type: i32,
                dpi_x: *mut u32,
                dpi_y: *mut u32,
            ) -> i32;
        }

        let monitor = MonitorFromPoint(POINT { x, y }, MONITOR_DEFAULTTONEAREST);
        let mut dpi_x = 0u32;
        let mut dpi_y = 0u32;

        let status = GetDpiForMonitor(monitor, MDT_EFFECTIVE_DPI, &mut dpi_x, &mut dpi_y);
        if status != 0 || dpi_x == 0 {
            return 1.0;
        }
        dpi_x as f64 / 96.0
    }
}
