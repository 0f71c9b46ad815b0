//! Modal editor sessions
//!
//! A [`ModalSession`] is the transient state of one popup. Its content holds a
//! working copy of the value being edited and never touches the device; the
//! value leaves the session only through [`ModalSession::confirm`].

use lumadeck_core::prelude::*;
use lumadeck_core::{
    clamp_brightness, clamp_tone, hex_to_rgb, DeviceStatus, Rgb, BRIGHTNESS_MAX, BRIGHTNESS_MIN,
    TONE_MAX,
};

/// Content strategy for a modal session
pub trait EditorContent {
    /// Value handed out on confirm
    type Value;

    fn value(&self) -> Self::Value;

    /// Move the working value by `delta` units
    fn adjust(&mut self, delta: i32);

    /// Jump to the lowest (`false`) or highest (`true`) value
    fn jump(&mut self, to_max: bool);
}

/// An open-or-closed modal editor for one device
#[derive(Debug, Clone)]
pub struct ModalSession<C: EditorContent> {
    device_id: String,
    content: Option<C>,
}

impl<C: EditorContent> ModalSession<C> {
    pub fn open(device_id: impl Into<String>, content: C) -> Self {
        Self {
            device_id: device_id.into(),
            content: Some(content),
        }
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut C> {
        self.content.as_mut()
    }

    /// Discard the working value. Closing a closed session does nothing.
    pub fn close(&mut self) {
        self.content = None;
    }

    /// Take the working value and close. Returns `None` once closed.
    pub fn confirm(&mut self) -> Option<C::Value> {
        self.content.take().map(|content| content.value())
    }

    /// Confirm and hand the value to `on_confirm`, at most once.
    ///
    /// Returns whether the callback ran.
    pub fn confirm_with<F>(&mut self, on_confirm: F) -> bool
    where
        F: FnOnce(&str, C::Value),
    {
        match self.confirm() {
            Some(value) => {
                on_confirm(&self.device_id, value);
                true
            }
            None => false,
        }
    }
}

// ─────────────────────────────────────────────────────────────
// Brightness
// ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrightnessContent {
    value: u8,
}

impl BrightnessContent {
    pub fn new(initial: u8) -> Self {
        Self {
            value: clamp_brightness(i32::from(initial)),
        }
    }

    pub fn set(&mut self, value: i32) {
        self.value = clamp_brightness(value);
    }

    /// Percentage label shown next to the slider
    pub fn label(&self) -> String {
        format!("{}%", self.value)
    }
}

impl EditorContent for BrightnessContent {
    type Value = u8;

    fn value(&self) -> u8 {
        self.value
    }

    fn adjust(&mut self, delta: i32) {
        self.set(i32::from(self.value) + delta);
    }

    fn jump(&mut self, to_max: bool) {
        self.value = if to_max { BRIGHTNESS_MAX } else { BRIGHTNESS_MIN };
    }
}

// ─────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTab {
    Tone,
    Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

impl RgbChannel {
    pub const ALL: [RgbChannel; 3] = [RgbChannel::Red, RgbChannel::Green, RgbChannel::Blue];

    pub fn next(self) -> Self {
        match self {
            RgbChannel::Red => RgbChannel::Green,
            RgbChannel::Green => RgbChannel::Blue,
            RgbChannel::Blue => RgbChannel::Red,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            RgbChannel::Red => RgbChannel::Blue,
            RgbChannel::Green => RgbChannel::Red,
            RgbChannel::Blue => RgbChannel::Green,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RgbChannel::Red => "R",
            RgbChannel::Green => "G",
            RgbChannel::Blue => "B",
        }
    }

    pub fn get(self, rgb: Rgb) -> u8 {
        match self {
            RgbChannel::Red => rgb.r,
            RgbChannel::Green => rgb.g,
            RgbChannel::Blue => rgb.b,
        }
    }

    fn set(self, rgb: &mut Rgb, value: u8) {
        match self {
            RgbChannel::Red => rgb.r = value,
            RgbChannel::Green => rgb.g = value,
            RgbChannel::Blue => rgb.b = value,
        }
    }
}

/// Value confirmed by the color editor: exactly one representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorValue {
    Tone(u8),
    Rgb(Rgb),
}

/// Longest hex entry, `#rrggbb`
const HEX_INPUT_LEN: usize = 7;

/// Tone/RGB picker. Both working values persist across tab switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorContent {
    tab: ColorTab,
    tone: u8,
    rgb: Rgb,
    channel: RgbChannel,
    /// Text typed into the RGB tab's hex field while it is being edited
    hex_input: Option<String>,
    hex_error: Option<String>,
}

impl ColorContent {
    pub fn new(tab: ColorTab, tone: u8, rgb: Rgb) -> Self {
        Self {
            tab,
            tone: clamp_tone(i32::from(tone)),
            rgb,
            channel: RgbChannel::Red,
            hex_input: None,
            hex_error: None,
        }
    }

    /// Seed tab and both values from the device's status
    pub fn from_status(status: &DeviceStatus) -> Self {
        let tab = if status.use_rgb {
            ColorTab::Rgb
        } else {
            ColorTab::Tone
        };
        Self::new(tab, status.color_tone, status.rgb)
    }

    pub fn tab(&self) -> ColorTab {
        self.tab
    }

    pub fn tone(&self) -> u8 {
        self.tone
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn channel(&self) -> RgbChannel {
        self.channel
    }

    pub fn switch_tab(&mut self) {
        self.tab = match self.tab {
            ColorTab::Tone => ColorTab::Rgb,
            ColorTab::Rgb => ColorTab::Tone,
        };
    }

    pub fn select_tab(&mut self, tab: ColorTab) {
        self.tab = tab;
    }

    pub fn next_channel(&mut self) {
        self.channel = self.channel.next();
    }

    pub fn prev_channel(&mut self) {
        self.channel = self.channel.prev();
    }

    pub fn set_tone(&mut self, tone: i32) {
        self.tone = clamp_tone(tone);
    }

    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.rgb = rgb;
    }

    /// Set the RGB working value from `#rrggbb`; malformed input is rejected
    /// and leaves the value unchanged.
    pub fn set_rgb_hex(&mut self, hex: &str) -> Result<()> {
        self.set_rgb(hex_to_rgb(hex)?);
        Ok(())
    }

    /// Start typing a hex color. Switches to the RGB tab and pre-fills `#`.
    pub fn begin_hex_entry(&mut self) {
        self.select_tab(ColorTab::Rgb);
        self.hex_input = Some("#".to_string());
        self.hex_error = None;
    }

    pub fn hex_input(&self) -> Option<&str> {
        self.hex_input.as_deref()
    }

    /// Why the last applied hex entry was rejected
    pub fn hex_error(&self) -> Option<&str> {
        self.hex_error.as_deref()
    }

    /// Append a hex digit; anything else, or a full field, is ignored
    pub fn push_hex_char(&mut self, c: char) {
        if let Some(input) = self.hex_input.as_mut() {
            if c.is_ascii_hexdigit() && input.len() < HEX_INPUT_LEN {
                input.push(c.to_ascii_lowercase());
                self.hex_error = None;
            }
        }
    }

    /// Erase the last digit. The leading `#` stays.
    pub fn pop_hex_char(&mut self) {
        if let Some(input) = self.hex_input.as_mut() {
            if input.len() > 1 {
                input.pop();
            }
            self.hex_error = None;
        }
    }

    /// Leave hex entry without touching the RGB value
    pub fn cancel_hex_entry(&mut self) {
        self.hex_input = None;
        self.hex_error = None;
    }

    /// Parse the typed text into the RGB working value.
    ///
    /// On failure the text stays editable and the error is kept for display.
    pub fn apply_hex_entry(&mut self) -> Result<()> {
        let Some(input) = self.hex_input.clone() else {
            return Ok(());
        };
        match self.set_rgb_hex(&input) {
            Ok(()) => {
                self.cancel_hex_entry();
                Ok(())
            }
            Err(e) => {
                self.hex_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Swatch for the active tab's working value
    pub fn preview_rgb(&self) -> Rgb {
        match self.tab {
            ColorTab::Tone => lumadeck_core::tone_to_color(self.tone),
            ColorTab::Rgb => self.rgb,
        }
    }

    pub fn preview_hex(&self) -> String {
        self.preview_rgb().to_hex()
    }

    pub fn tone_label(&self) -> String {
        format!("{}/{}", self.tone, TONE_MAX)
    }
}

impl EditorContent for ColorContent {
    type Value = ColorValue;

    fn value(&self) -> ColorValue {
        match self.tab {
            ColorTab::Tone => ColorValue::Tone(self.tone),
            ColorTab::Rgb => ColorValue::Rgb(self.rgb),
        }
    }

    fn adjust(&mut self, delta: i32) {
        match self.tab {
            ColorTab::Tone => self.set_tone(i32::from(self.tone) + delta),
            ColorTab::Rgb => {
                let current = i32::from(self.channel.get(self.rgb));
                let value = (current + delta).clamp(0, 255) as u8;
                self.channel.set(&mut self.rgb, value);
            }
        }
    }

    fn jump(&mut self, to_max: bool) {
        match self.tab {
            ColorTab::Tone => self.tone = if to_max { TONE_MAX } else { 0 },
            ColorTab::Rgb => self
                .channel
                .set(&mut self.rgb, if to_max { u8::MAX } else { 0 }),
        }
    }
}

/// The editor currently open, if any
#[derive(Debug, Clone)]
pub enum ActiveEditor {
    Brightness(ModalSession<BrightnessContent>),
    Color(ModalSession<ColorContent>),
}

impl ActiveEditor {
    pub fn device_id(&self) -> &str {
        match self {
            ActiveEditor::Brightness(session) => session.device_id(),
            ActiveEditor::Color(session) => session.device_id(),
        }
    }

    pub fn adjust(&mut self, delta: i32) {
        match self {
            ActiveEditor::Brightness(session) => {
                if let Some(content) = session.content_mut() {
                    content.adjust(delta);
                }
            }
            ActiveEditor::Color(session) => {
                if let Some(content) = session.content_mut() {
                    content.adjust(delta);
                }
            }
        }
    }

    pub fn jump(&mut self, to_max: bool) {
        match self {
            ActiveEditor::Brightness(session) => {
                if let Some(content) = session.content_mut() {
                    content.jump(to_max);
                }
            }
            ActiveEditor::Color(session) => {
                if let Some(content) = session.content_mut() {
                    content.jump(to_max);
                }
            }
        }
    }

    pub fn close(&mut self) {
        match self {
            ActiveEditor::Brightness(session) => session.close(),
            ActiveEditor::Color(session) => session.close(),
        }
    }
}
