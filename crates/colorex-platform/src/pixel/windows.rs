//! Windows implementation of pixel color detection using GDI.

use colorex_core::Rgb;
use std::ptr;
use windows_sys::Win32::Graphics::Gdi::{
    BitBlt, CreateCompatibleBitmap, CreateCompatibleDC, DeleteDC, DeleteObject, GetDC, GetDIBits,
    GetPixel, ReleaseDC, SelectObject, BITMAPINFO, BITMAPINFOHEADER, BI_RGB, CLR_INVALID,
    DIB_RGB_COLORS, RGBQUAD, SRCCOPY,
};

/// Get the color of a pixel at the given physical screen coordinates.
pub fn get_pixel_color(x: i32, y: i32) -> Option<Rgb> {
    if let Some(color) = get_pixel_simple(x, y) {
        return Some(color);
    }

    // GetPixel fails on some composited or scaled displays; copy the pixel
    // out of the screen DC instead.
    get_pixel_screenshot(x, y)
}

/// Read straight from the screen DC. Cheap, but returns `CLR_INVALID` on
/// some display setups.
fn get_pixel_simple(x: i32, y: i32) -> Option<Rgb> {
    unsafe {
        // A null window handle gives the DC of the whole virtual screen.
        let hdc = GetDC(ptr::null_mut());
        if hdc.is_null() {
            return None;
        }

        let color = GetPixel(hdc, x, y);
        ReleaseDC(ptr::null_mut(), hdc);

        if color == CLR_INVALID {
            return None;
        }

        Some(colorref_to_rgb(color))
    }
}

/// Blit a single pixel into a memory bitmap and read it back as 32-bit BGRA.
fn get_pixel_screenshot(x: i32, y: i32) -> Option<Rgb> {
    unsafe {
        let hdc_screen = GetDC(ptr::null_mut());
        if hdc_screen.is_null() {
            return None;
        }

        let hdc_mem = CreateCompatibleDC(hdc_screen);
        if hdc_mem.is_null() {
            ReleaseDC(ptr::null_mut(), hdc_screen);
            return None;
        }

        // 1x1 target bitmap
        let hbitmap = CreateCompatibleBitmap(hdc_screen, 1, 1);
        if hbitmap.is_null() {
            DeleteDC(hdc_mem);
            ReleaseDC(ptr::null_mut(), hdc_screen);
            return None;
        }

        let old_bitmap = SelectObject(hdc_mem, hbitmap);
        let copied = BitBlt(hdc_mem, 0, 0, 1, 1, hdc_screen, x, y, SRCCOPY);

        let mut bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: 1,
                biHeight: -1, // Top-down
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB,
                biSizeImage: 0,
                biXPelsPerMeter: 0,
                biYPelsPerMeter: 0,
                biClrUsed: 0,
                biClrImportant: 0,
            },
            bmiColors: [RGBQUAD {
                rgbBlue: 0,
                rgbGreen: 0,
                rgbRed: 0,
                rgbReserved: 0,
            }],
        };

        let mut pixel: [u8; 4] = [0; 4]; // BGRA

        // Skip the read when the blit failed; the bitmap holds garbage then.
        let result = if copied != 0 {
            GetDIBits(
                hdc_mem,
                hbitmap,
                0,
                1,
                pixel.as_mut_ptr() as *mut _,
                &mut bmi,
                DIB_RGB_COLORS,
            )
        } else {
            0
        };

        // Restore the DC before freeing the bitmap selected into it.
        SelectObject(hdc_mem, old_bitmap);
        DeleteObject(hbitmap);
        DeleteDC(hdc_mem);
        ReleaseDC(ptr::null_mut(), hdc_screen);

        if result == 0 {
            return None;
        }

        // BGRA in memory
        Some(Rgb::new(pixel[2], pixel[1], pixel[0]))
    }
}

/// COLORREF is 0x00BBGGRR.
fn colorref_to_rgb(color: u32) -> Rgb {
    Rgb::new(
        (color & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        ((color >> 16) & 0xFF) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorref_channel_order() {
        assert_eq!(colorref_to_rgb(0x00563412), Rgb::new(0x12, 0x34, 0x56));
    }
}
