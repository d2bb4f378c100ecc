//! Display strings for one sampled color.

use crate::convert::{to_cmyk, to_hex, to_hsl, to_hsv};
use crate::Rgb;
use serde::{Deserialize, Serialize};

/// One row of the color readout, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorFormat {
    Rgb,
    Rgba,
    Hex,
    Hsl,
    Cmyk,
    Hsv,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 6] = [
        ColorFormat::Rgb,
        ColorFormat::Rgba,
        ColorFormat::Hex,
        ColorFormat::Hsl,
        ColorFormat::Cmyk,
        ColorFormat::Hsv,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorFormat::Rgb => "RGB:",
            ColorFormat::Rgba => "RGBA:",
            ColorFormat::Hex => "HEX:",
            ColorFormat::Hsl => "HSL:",
            ColorFormat::Cmyk => "CMYK:",
            ColorFormat::Hsv => "HSV:",
        }
    }
}

/// Formatted representations of a single RGB sample.
///
/// Built by [`describe`] and replaced wholesale on every new sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorInfo {
    pub rgb: String,
    pub rgba: String,
    pub hex: String,
    pub hsl: String,
    pub cmyk: String,
    pub hsv: String,
}

impl ColorInfo {
    pub fn value(&self, format: ColorFormat) -> &str {
        match format {
            ColorFormat::Rgb => &self.rgb,
            ColorFormat::Rgba => &self.rgba,
            ColorFormat::Hex => &self.hex,
            ColorFormat::Hsl => &self.hsl,
            ColorFormat::Cmyk => &self.cmyk,
            ColorFormat::Hsv => &self.hsv,
        }
    }

    /// `(label, value)` pairs in display order.
    pub fn rows(&self) -> impl Iterator<Item = (ColorFormat, &str)> + '_ {
        ColorFormat::ALL
            .into_iter()
            .map(move |format| (format, self.value(format)))
    }
}

pub fn describe(rgb: Rgb) -> ColorInfo {
    let Rgb { r, g, b } = rgb;
    let hsl = to_hsl(rgb);
    let cmyk = to_cmyk(rgb);
    let hsv = to_hsv(rgb);

    ColorInfo {
        rgb: format!("{r}, {g}, {b}"),
        rgba: format!("{r}, {g}, {b}, 1"),
        hex: to_hex(rgb),
        hsl: format!("{:.1}, {:.1}%, {:.1}%", hsl.h, hsl.s, hsl.l),
        cmyk: format!(
            "{:.1}%, {:.1}%, {:.1}%, {:.1}%",
            cmyk.c, cmyk.m, cmyk.y, cmyk.k
        ),
        hsv: format!("{:.1}, {:.1}%, {:.1}%", hsv.h, hsv.s, hsv.v),
    }
}
