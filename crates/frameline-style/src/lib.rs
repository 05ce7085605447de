#![forbid(unsafe_code)]

//! Color and styling primitives for Frameline.
//!
//! # Role in Frameline
//! `frameline-style` is the styling collaborator of the border engine. Colors
//! are plain values; turning them into escape sequences is the job of a
//! [`BorderStyler`], which the engine calls once per styled glyph run.
//!
//! # This crate provides
//! - [`Color`], [`Rgb`], [`Ansi16`] values and the [`ColorProfile`] gate.
//! - [`BorderStyler`] with the [`SgrStyler`] and [`PlainStyler`] implementations.

/// Color types and the color profile.
pub mod color;
/// Styling functions that wrap text in color escapes.
pub mod styler;

pub use color::{Ansi16, Color, ColorProfile, Rgb};
pub use styler::{BorderStyler, PlainStyler, SgrStyler};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn color_round_trips_through_json() {
        let colors = [
            Color::rgb(1, 2, 3),
            Color::Ansi256(200),
            Color::Ansi16(Ansi16::BrightMagenta),
        ];
        for color in colors {
            let json = serde_json::to_string(&color).expect("serialize");
            let back: Color = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, color);
        }
    }

    #[test]
    fn profile_deserializes_by_name() {
        let profile: ColorProfile = serde_json::from_str("\"Mono\"").expect("deserialize");
        assert_eq!(profile, ColorProfile::Mono);
    }
}
