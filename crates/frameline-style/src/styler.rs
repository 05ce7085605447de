//! Border styling functions.
//!
//! The border engine never decides how a color becomes an escape sequence.
//! It hands each glyph run to a [`BorderStyler`] together with the side's
//! foreground and background, and splices the result into the output.

use crate::color::{Color, ColorProfile};

/// Wraps text in color escapes.
///
/// `None` for both colors is the "no color" sentinel: implementations must
/// return the text unchanged.
pub trait BorderStyler {
    fn style(&self, text: &str, fg: Option<Color>, bg: Option<Color>) -> String;
}

impl<F> BorderStyler for F
where
    F: Fn(&str, Option<Color>, Option<Color>) -> String,
{
    fn style(&self, text: &str, fg: Option<Color>, bg: Option<Color>) -> String {
        self(text, fg, bg)
    }
}

/// Styler that never emits escapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainStyler;

impl BorderStyler for PlainStyler {
    fn style(&self, text: &str, _fg: Option<Color>, _bg: Option<Color>) -> String {
        text.to_string()
    }
}

/// Styler that emits SGR sequences for colors exactly as given.
///
/// Under [`ColorProfile::Mono`] it returns text unchanged.
///
/// Output has the shape `ESC[<params>m text ESC[0m`.
///
/// # Example
/// ```
/// use frameline_style::{Ansi16, BorderStyler, Color, ColorProfile, SgrStyler};
///
/// let styler = SgrStyler::new(ColorProfile::Color);
/// assert_eq!(
///     styler.style("─", Some(Color::Ansi16(Ansi16::Red)), None),
///     "\x1b[31m─\x1b[0m"
/// );
/// assert_eq!(styler.style("─", None, None), "─");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SgrStyler {
    profile: ColorProfile,
}

impl SgrStyler {
    #[must_use]
    pub const fn new(profile: ColorProfile) -> Self {
        Self { profile }
    }

    /// Styler for the profile detected from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ColorProfile::from_env())
    }

    #[must_use]
    pub const fn profile(&self) -> ColorProfile {
        self.profile
    }
}

impl BorderStyler for SgrStyler {
    fn style(&self, text: &str, fg: Option<Color>, bg: Option<Color>) -> String {
        if text.is_empty() || !self.profile.allows_color() || (fg.is_none() && bg.is_none()) {
            return text.to_string();
        }

        let mut params = String::new();
        if let Some(color) = fg {
            push_color_params(&mut params, color, Layer::Foreground);
        }
        if let Some(color) = bg {
            push_color_params(&mut params, color, Layer::Background);
        }

        let mut out = String::with_capacity(text.len() + params.len() + 7);
        out.push_str("\x1b[");
        out.push_str(&params);
        out.push('m');
        out.push_str(text);
        out.push_str("\x1b[0m");
        out
    }
}

#[derive(Clone, Copy)]
enum Layer {
    Foreground,
    Background,
}

fn push_color_params(out: &mut String, color: Color, layer: Layer) {
    if !out.is_empty() {
        out.push(';');
    }
    let (base, bright, extended) = match layer {
        Layer::Foreground => (30, 90, 38),
        Layer::Background => (40, 100, 48),
    };
    match color {
        Color::Ansi16(c) => {
            let idx = c.as_u8();
            let code = if idx < 8 { base + idx } else { bright + (idx - 8) };
            out.push_str(&code.to_string());
        }
        Color::Ansi256(idx) => out.push_str(&format!("{extended};5;{idx}")),
        Color::Rgb(rgb) => out.push_str(&format!("{extended};2;{};{};{}", rgb.r, rgb.g, rgb.b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Ansi16;

    #[test]
    fn no_color_sentinel_is_identity() {
        let styler = SgrStyler::new(ColorProfile::Color);
        assert_eq!(styler.style("│", None, None), "│");
        assert_eq!(PlainStyler.style("│", Some(Color::rgb(1, 2, 3)), None), "│");
    }

    #[test]
    fn empty_text_is_not_wrapped() {
        let styler = SgrStyler::new(ColorProfile::Color);
        assert_eq!(styler.style("", Some(Color::rgb(1, 2, 3)), None), "");
    }

    #[test]
    fn truecolor_fg_and_bg() {
        let styler = SgrStyler::new(ColorProfile::Color);
        assert_eq!(
            styler.style("x", Some(Color::rgb(255, 0, 0)), Some(Color::rgb(0, 0, 255))),
            "\x1b[38;2;255;0;0;48;2;0;0;255mx\x1b[0m"
        );
    }

    #[test]
    fn bright_ansi16_codes() {
        let styler = SgrStyler::new(ColorProfile::Color);
        assert_eq!(
            styler.style(
                "x",
                Some(Color::Ansi16(Ansi16::BrightCyan)),
                Some(Color::Ansi16(Ansi16::Blue))
            ),
            "\x1b[96;44mx\x1b[0m"
        );
    }

    #[test]
    fn colors_are_emitted_as_given() {
        let styler = SgrStyler::new(ColorProfile::Color);
        assert_eq!(
            styler.style("x", Some(Color::Ansi256(200)), Some(Color::Ansi16(Ansi16::Red))),
            "\x1b[38;5;200;41mx\x1b[0m"
        );
    }

    #[test]
    fn mono_profile_emits_nothing() {
        let styler = SgrStyler::new(ColorProfile::Mono);
        assert_eq!(styler.style("x", Some(Color::rgb(255, 0, 0)), None), "x");
    }

    #[test]
    fn closures_are_stylers() {
        let brackets = |text: &str, _fg: Option<Color>, _bg: Option<Color>| format!("[{text}]");
        assert_eq!(brackets.style("x", None, None), "[x]");
    }
}
