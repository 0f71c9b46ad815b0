//! Color model: RGB triples, `#rrggbb` strings and the 0–100 tone scale
//!
//! Tone is a single warm-to-cool scalar. It maps to RGB by two-segment
//! piecewise-linear interpolation over three fixed anchors at tone 0, 50
//! and 100. The mapping drives a visible swatch, so the rounding here must
//! stay exactly as written: each channel rounds to the nearest integer with
//! halves going up.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::DeviceStatus;

/// Highest value on the tone scale
pub const TONE_MAX: u8 = 100;

/// Tone 0: warm amber
pub const TONE_WARM: Rgb = Rgb::new(255, 196, 0);

/// Tone 50: pale yellow
pub const TONE_MID: Rgb = Rgb::new(255, 255, 128);

/// Tone 100: pale cyan
pub const TONE_COOL: Rgb = Rgb::new(166, 234, 245);

/// An 8-bit-per-channel color.
///
/// Serialized as a three element array `[r, g, b]`, which is how the light
/// service transmits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wider integers, clamping each channel into 0..=255.
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        let clamp = |c: i32| c.clamp(0, u8::MAX as i32) as u8;
        Self::new(clamp(r), clamp(g), clamp(b))
    }

    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// `#rrggbb`, lowercase, each channel zero-padded to two digits
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.channels()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

/// Encode a color as `#rrggbb`
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

/// Parse a 7-character `#RRGGBB` string (either case).
///
/// Anything else is rejected with [`Error::InvalidColor`].
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| Error::invalid_color(hex))?;

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| Error::invalid_color(hex))
    };

    Ok(Rgb::new(channel(0)?, channel(1)?, channel(2)?))
}

/// Map a tone in 0..=100 to its color.
///
/// Tones above 100 are treated as 100.
pub fn tone_to_color(tone: u8) -> Rgb {
    let tone = tone.min(TONE_MAX);

    let (from, to, frac) = if tone <= 50 {
        (TONE_WARM, TONE_MID, f64::from(tone) / 50.0)
    } else {
        (TONE_MID, TONE_COOL, f64::from(tone - 50) / 50.0)
    };

    let lerp = |x0: u8, x1: u8| -> u8 {
        let value = frac * f64::from(x1) + (1.0 - frac) * f64::from(x0);
        // Non-negative, so round() (half away from zero) is round-half-up
        value.round().clamp(0.0, 255.0) as u8
    };

    Rgb::new(
        lerp(from.r, to.r),
        lerp(from.g, to.g),
        lerp(from.b, to.b),
    )
}

/// The swatch color of a status: its RGB value in RGB mode, its tone otherwise
pub fn preview_rgb(status: &DeviceStatus) -> Rgb {
    if status.use_rgb {
        status.rgb
    } else {
        tone_to_color(status.color_tone)
    }
}

/// [`preview_rgb`] as a hex string
pub fn preview_color(status: &DeviceStatus) -> String {
    rgb_to_hex(preview_rgb(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex_pads_channels() {
        assert_eq!(rgb_to_hex(Rgb::new(0, 0, 0)), "#000000");
        assert_eq!(rgb_to_hex(Rgb::new(1, 2, 15)), "#01020f");
        assert_eq!(rgb_to_hex(Rgb::new(255, 16, 171)), "#ff10ab");
    }

    #[test]
    fn test_hex_to_rgb_accepts_both_cases() {
        assert_eq!(hex_to_rgb("#112233").unwrap(), Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(hex_to_rgb("#FFa0Bc").unwrap(), Rgb::new(255, 0xa0, 0xbc));
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed_input() {
        for bad in ["", "#", "112233", "#12345", "#1234567", "#gg0000", "#+f0000", " #112233"] {
            assert!(
                matches!(hex_to_rgb(bad), Err(Error::InvalidColor { .. })),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_hex_round_trip_per_channel() {
        for v in 0..=255u8 {
            let samples = [
                Rgb::new(v, 0, 0),
                Rgb::new(0, v, 0),
                Rgb::new(0, 0, v),
                Rgb::new(v, 255 - v, v / 2),
            ];
            for c in samples {
                assert_eq!(hex_to_rgb(&rgb_to_hex(c)).unwrap(), c);
            }
        }
    }

    #[test]
    fn test_rgb_from_str_and_display() {
        let c: Rgb = "#0a0b0c".parse().unwrap();
        assert_eq!(c, Rgb::new(10, 11, 12));
        assert_eq!(c.to_string(), "#0a0b0c");
    }

    #[test]
    fn test_clamped_guards_out_of_range_channels() {
        assert_eq!(Rgb::clamped(-5, 300, 128), Rgb::new(0, 255, 128));
        assert_eq!(rgb_to_hex(Rgb::clamped(256, 0, 0)), "#ff0000");
    }

    #[test]
    fn test_rgb_serializes_as_array() {
        let json = serde_json::to_string(&Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: Rgb = serde_json::from_str("[250,0,7]").unwrap();
        assert_eq!(back, Rgb::new(250, 0, 7));
        assert!(serde_json::from_str::<Rgb>("[256,0,0]").is_err());
    }

    #[test]
    fn test_tone_anchors() {
        assert_eq!(tone_to_color(0), Rgb::new(255, 196, 0));
        assert_eq!(tone_to_color(50), Rgb::new(255, 255, 128));
        assert_eq!(tone_to_color(100), Rgb::new(166, 234, 245));
    }

    #[test]
    fn test_tone_rounding_matches_reference_values() {
        // 0.4 of the way from amber to yellow
        assert_eq!(tone_to_color(20), Rgb::new(255, 220, 51));
        // exact halves round up
        assert_eq!(tone_to_color(25), Rgb::new(255, 226, 64));
        assert_eq!(tone_to_color(75), Rgb::new(211, 245, 187));
    }

    #[test]
    fn test_tone_above_range_is_clamped() {
        assert_eq!(tone_to_color(101), tone_to_color(100));
        assert_eq!(tone_to_color(u8::MAX), TONE_COOL);
    }

    #[test]
    fn test_tone_channels_are_monotonic_within_each_segment() {
        let segments = [(0u8, 50u8), (50, 100)];
        for (start, end) in segments {
            let first = tone_to_color(start).channels();
            let last = tone_to_color(end).channels();
            let mut prev = first;
            for t in start..=end {
                let cur = tone_to_color(t).channels();
                for i in 0..3 {
                    if last[i] >= first[i] {
                        assert!(cur[i] >= prev[i], "channel {} decreased at tone {}", i, t);
                    } else {
                        assert!(cur[i] <= prev[i], "channel {} increased at tone {}", i, t);
                    }
                }
                prev = cur;
            }
        }
    }

    #[test]
    fn test_tone_channels_stay_between_bounding_anchors() {
        for t in 0..=100u8 {
            let (a, b) = if t <= 50 {
                (TONE_WARM, TONE_MID)
            } else {
                (TONE_MID, TONE_COOL)
            };
            let c = tone_to_color(t).channels();
            for i in 0..3 {
                let lo = a.channels()[i].min(b.channels()[i]);
                let hi = a.channels()[i].max(b.channels()[i]);
                assert!((lo..=hi).contains(&c[i]), "tone {} channel {}", t, i);
            }
        }
    }

    #[test]
    fn test_preview_color_dispatches_on_use_rgb() {
        let mut status = DeviceStatus {
            is_online: true,
            is_on: true,
            brightness: 40,
            use_rgb: false,
            color_tone: 20,
            rgb: Rgb::new(0x11, 0x22, 0x33),
        };
        assert_eq!(preview_color(&status), rgb_to_hex(tone_to_color(20)));

        status.use_rgb = true;
        assert_eq!(preview_color(&status), "#112233");
    }
}
