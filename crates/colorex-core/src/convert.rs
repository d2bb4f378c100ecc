//! Color model conversion from sampled RGB.
//!
//! Hue is in degrees `[0, 360)`; every other component is a percentage
//! `[0, 100]`. All conversions are total over the `u8` channel domain.

use crate::Rgb;
use serde::{Deserialize, Serialize};

/// Hue / saturation / lightness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Hue / saturation / value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Cyan / magenta / yellow / key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// Uppercase `#RRGGBB`, no alpha.
pub fn to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

pub fn to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.normalized();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    Hsl {
        h: hue(r, g, b, max, delta),
        s: s * 100.0,
        l: l * 100.0,
    }
}

pub fn to_cmyk(rgb: Rgb) -> Cmyk {
    if rgb == Rgb::BLACK {
        return Cmyk { c: 0.0, m: 0.0, y: 0.0, k: 100.0 };
    }

    let (r, g, b) = rgb.normalized();
    let k = 1.0 - r.max(g).max(b);
    let inv_k = 1.0 - k;

    Cmyk {
        c: (1.0 - r - k) / inv_k * 100.0,
        m: (1.0 - g - k) / inv_k * 100.0,
        y: (1.0 - b - k) / inv_k * 100.0,
        k: k * 100.0,
    }
}

pub fn to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = rgb.normalized();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max * 100.0;

    if max == 0.0 {
        return Hsv { h: 0.0, s: 0.0, v };
    }

    let s = delta / max * 100.0;

    if delta == 0.0 {
        return Hsv { h: 0.0, s, v };
    }

    Hsv {
        h: hue(r, g, b, max, delta),
        s,
        v,
    }
}

/// Hue in degrees, branching on the channel holding `max`. `delta` must be non-zero.
fn hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let sector = if r == max {
        let h = (g - b) / delta;
        if g < b {
            h + 6.0
        } else {
            h
        }
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    sector * 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_hsl_extremes() {
        assert_eq!(to_hsl(Rgb::new(0, 0, 0)), Hsl { h: 0.0, s: 0.0, l: 0.0 });
        assert_eq!(to_hsl(Rgb::new(255, 255, 255)), Hsl { h: 0.0, s: 0.0, l: 100.0 });
    }

    #[test]
    fn test_hsl_primaries() {
        let red = to_hsl(Rgb::new(255, 0, 0));
        assert!(close(red.h, 0.0) && close(red.s, 100.0) && close(red.l, 50.0));

        let green = to_hsl(Rgb::new(0, 255, 0));
        assert!(close(green.h, 120.0) && close(green.s, 100.0) && close(green.l, 50.0));

        let blue = to_hsl(Rgb::new(0, 0, 255));
        assert!(close(blue.h, 240.0) && close(blue.s, 100.0) && close(blue.l, 50.0));
    }

    #[test]
    fn test_hsl_saturation_branches_on_lightness() {
        // l < 0.5: delta / (max + min)
        let dark = to_hsl(Rgb::new(102, 51, 51));
        assert!(close(dark.s, 51.0 / 153.0 * 100.0));

        // l >= 0.5: delta / (2 - max - min)
        let light = to_hsl(Rgb::new(255, 204, 204));
        assert!(close(light.s, 100.0));
    }

    #[test]
    fn test_hue_wraps_when_red_is_max_and_green_below_blue() {
        let magenta = to_hsl(Rgb::new(255, 0, 255));
        assert!(close(magenta.h, 300.0));

        let hsv = to_hsv(Rgb::new(255, 0, 255));
        assert!(close(hsv.h, 300.0));

        let rose = to_hsv(Rgb::new(255, 0, 128));
        assert!(rose.h > 300.0 && rose.h < 360.0);
    }

    #[test]
    fn test_cmyk() {
        assert_eq!(to_cmyk(Rgb::new(0, 0, 0)), Cmyk { c: 0.0, m: 0.0, y: 0.0, k: 100.0 });
        assert_eq!(to_cmyk(Rgb::new(255, 0, 0)), Cmyk { c: 0.0, m: 100.0, y: 100.0, k: 0.0 });
        assert_eq!(to_cmyk(Rgb::new(255, 255, 255)), Cmyk { c: 0.0, m: 0.0, y: 0.0, k: 0.0 });
    }

    #[test]
    fn test_cmyk_gray_has_no_chroma() {
        let gray = to_cmyk(Rgb::new(128, 128, 128));
        assert_eq!((gray.c, gray.m, gray.y), (0.0, 0.0, 0.0));
        assert!(close(gray.k, (1.0 - 128.0 / 255.0) * 100.0));
    }

    #[test]
    fn test_hsv() {
        assert_eq!(to_hsv(Rgb::new(255, 0, 0)), Hsv { h: 0.0, s: 100.0, v: 100.0 });
        assert_eq!(to_hsv(Rgb::new(0, 0, 0)), Hsv { h: 0.0, s: 0.0, v: 0.0 });

        let green = to_hsv(Rgb::new(0, 128, 0));
        assert!(close(green.h, 120.0));
        assert!(close(green.s, 100.0));
    }

    #[test]
    fn test_achromatic_has_zero_hue_and_saturation() {
        for v in 0..=255u8 {
            let rgb = Rgb::new(v, v, v);
            let hsl = to_hsl(rgb);
            let hsv = to_hsv(rgb);
            assert_eq!((hsl.h, hsl.s), (0.0, 0.0), "hsl for {rgb}");
            assert_eq!((hsv.h, hsv.s), (0.0, 0.0), "hsv for {rgb}");
        }
    }

    #[test]
    fn test_components_stay_in_range() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let rgb = Rgb::new(r, g, b);
                    let hsl = to_hsl(rgb);
                    let hsv = to_hsv(rgb);
                    let cmyk = to_cmyk(rgb);

                    assert!((0.0..360.0).contains(&hsl.h), "hsl hue {} for {rgb}", hsl.h);
                    assert!((0.0..360.0).contains(&hsv.h), "hsv hue {} for {rgb}", hsv.h);
                    for pct in [hsl.s, hsl.l, hsv.s, hsv.v, cmyk.c, cmyk.m, cmyk.y, cmyk.k] {
                        assert!((0.0..=100.0 + EPS).contains(&pct), "{pct} for {rgb}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_to_hex_matches_rgb() {
        assert_eq!(to_hex(Rgb::new(18, 52, 86)), "#123456");
    }
}
