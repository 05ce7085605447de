//! Border glyph records, presets, and side masks.

use std::borrow::Cow;
use std::str::FromStr;

use frameline_text::max_glyph_width;

use crate::error::{BorderError, Result};

/// The glyphs that make up a border.
///
/// Each field may hold zero, one, or several codepoints. An empty field
/// draws nothing. Edge fills repeat their codepoints cyclically; corners are
/// cut to their first codepoint when rendered. The `middle*` junctions are
/// carried for callers that compose grids of boxes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Border {
    pub top: Cow<'static, str>,
    pub bottom: Cow<'static, str>,
    pub left: Cow<'static, str>,
    pub right: Cow<'static, str>,
    pub top_left: Cow<'static, str>,
    pub top_right: Cow<'static, str>,
    pub bottom_left: Cow<'static, str>,
    pub bottom_right: Cow<'static, str>,
    pub middle_left: Cow<'static, str>,
    pub middle_right: Cow<'static, str>,
    pub middle: Cow<'static, str>,
    pub middle_top: Cow<'static, str>,
    pub middle_bottom: Cow<'static, str>,
}

const fn glyphs(parts: [&'static str; 13]) -> Border {
    Border {
        top: Cow::Borrowed(parts[0]),
        bottom: Cow::Borrowed(parts[1]),
        left: Cow::Borrowed(parts[2]),
        right: Cow::Borrowed(parts[3]),
        top_left: Cow::Borrowed(parts[4]),
        top_right: Cow::Borrowed(parts[5]),
        bottom_left: Cow::Borrowed(parts[6]),
        bottom_right: Cow::Borrowed(parts[7]),
        middle_left: Cow::Borrowed(parts[8]),
        middle_right: Cow::Borrowed(parts[9]),
        middle: Cow::Borrowed(parts[10]),
        middle_top: Cow::Borrowed(parts[11]),
        middle_bottom: Cow::Borrowed(parts[12]),
    }
}

impl Border {
    /// No glyphs at all. A block with this border renders its body unchanged.
    pub const NONE: Self = glyphs(["", "", "", "", "", "", "", "", "", "", "", "", ""]);

    /// Normal weight with 90 degree corners (┌, ┐, └, ┘).
    pub const NORMAL: Self = glyphs([
        "─", "─", "│", "│", "┌", "┐", "└", "┘", "├", "┤", "┼", "┬", "┴",
    ]);

    /// Rounded corners (╭, ╮, ╰, ╯).
    pub const ROUNDED: Self = glyphs([
        "─", "─", "│", "│", "╭", "╮", "╰", "╯", "├", "┤", "┼", "┬", "┴",
    ]);

    /// Full blocks on every position.
    pub const BLOCK: Self = glyphs([
        "█", "█", "█", "█", "█", "█", "█", "█", "█", "█", "█", "█", "█",
    ]);

    /// Half blocks that sit outside the frame.
    pub const OUTER_HALF_BLOCK: Self = glyphs([
        "▀", "▄", "▌", "▐", "▛", "▜", "▙", "▟", "", "", "", "", "",
    ]);

    /// Half blocks that sit inside the frame.
    pub const INNER_HALF_BLOCK: Self = glyphs([
        "▄", "▀", "▐", "▌", "▗", "▖", "▝", "▘", "", "", "", "", "",
    ]);

    /// Thick lines (┃, ━).
    pub const THICK: Self = glyphs([
        "━", "━", "┃", "┃", "┏", "┓", "┗", "┛", "┣", "┫", "╋", "┳", "┻",
    ]);

    /// Double lines (║, ═).
    pub const DOUBLE: Self = glyphs([
        "═", "═", "║", "║", "╔", "╗", "╚", "╝", "╠", "╣", "╬", "╦", "╩",
    ]);

    /// Single-cell spaces: keeps layout positioning without visible lines.
    pub const HIDDEN: Self = glyphs([
        " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ",
    ]);

    /// Markdown table style. Disable the top and bottom sides for valid
    /// markdown output.
    pub const MARKDOWN: Self = glyphs([
        "-", "-", "|", "|", "|", "|", "|", "|", "|", "|", "|", "|", "|",
    ]);

    /// ASCII fallback (+, -, |).
    pub const ASCII: Self = glyphs([
        "-", "-", "|", "|", "+", "+", "+", "+", "+", "+", "+", "+", "+",
    ]);

    /// Look up a preset by name (case-insensitive, `-`/`_`/space agnostic).
    ///
    /// # Example
    /// ```
    /// use frameline_widgets::Border;
    ///
    /// assert_eq!(Border::preset("rounded").unwrap(), Border::ROUNDED);
    /// assert_eq!(Border::preset("Outer-Half_Block").unwrap(), Border::OUTER_HALF_BLOCK);
    /// assert!(Border::preset("wavy").is_err());
    /// ```
    pub fn preset(name: &str) -> Result<Self> {
        Ok(name.parse::<BorderType>()?.to_border())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Width of the top edge: its widest glyph, 0 when there is none.
    #[must_use]
    pub fn top_size(&self) -> usize {
        max_glyph_width(&[&*self.top_left, &*self.top, &*self.top_right])
    }

    /// Width of the right edge: its widest glyph, 0 when there is none.
    #[must_use]
    pub fn right_size(&self) -> usize {
        max_glyph_width(&[&*self.top_right, &*self.right, &*self.bottom_right])
    }

    /// Width of the bottom edge: its widest glyph, 0 when there is none.
    #[must_use]
    pub fn bottom_size(&self) -> usize {
        max_glyph_width(&[&*self.bottom_left, &*self.bottom, &*self.bottom_right])
    }

    /// Width of the left edge: its widest glyph, 0 when there is none.
    #[must_use]
    pub fn left_size(&self) -> usize {
        max_glyph_width(&[&*self.top_left, &*self.left, &*self.bottom_left])
    }
}

/// Border style presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderType {
    None,
    #[default]
    Normal,
    Rounded,
    Block,
    OuterHalfBlock,
    InnerHalfBlock,
    Thick,
    Double,
    Hidden,
    Markdown,
    Ascii,
}

impl BorderType {
    pub const ALL: [Self; 11] = [
        Self::None,
        Self::Normal,
        Self::Rounded,
        Self::Block,
        Self::OuterHalfBlock,
        Self::InnerHalfBlock,
        Self::Thick,
        Self::Double,
        Self::Hidden,
        Self::Markdown,
        Self::Ascii,
    ];

    #[must_use]
    pub fn to_border(self) -> Border {
        match self {
            Self::None => Border::NONE,
            Self::Normal => Border::NORMAL,
            Self::Rounded => Border::ROUNDED,
            Self::Block => Border::BLOCK,
            Self::OuterHalfBlock => Border::OUTER_HALF_BLOCK,
            Self::InnerHalfBlock => Border::INNER_HALF_BLOCK,
            Self::Thick => Border::THICK,
            Self::Double => Border::DOUBLE,
            Self::Hidden => Border::HIDDEN,
            Self::Markdown => Border::MARKDOWN,
            Self::Ascii => Border::ASCII,
        }
    }
}

impl FromStr for BorderType {
    type Err = BorderError;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "none" => Ok(Self::None),
            "normal" => Ok(Self::Normal),
            "rounded" => Ok(Self::Rounded),
            "block" => Ok(Self::Block),
            "outerhalfblock" => Ok(Self::OuterHalfBlock),
            "innerhalfblock" => Ok(Self::InnerHalfBlock),
            "thick" => Ok(Self::Thick),
            "double" => Ok(Self::Double),
            "hidden" => Ok(Self::Hidden),
            "markdown" => Ok(Self::Markdown),
            "ascii" => Ok(Self::Ascii),
            _ => Err(BorderError::unknown_preset(s)),
        }
    }
}

/// One side of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl BorderSide {
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Top and bottom edges run horizontally.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    #[must_use]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

impl FromStr for BorderSide {
    type Err = BorderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            _ => Err(BorderError::unknown_side(s)),
        }
    }
}

bitflags::bitflags! {
    /// Bitflags for which borders to render.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Borders: u8 {
        const NONE   = 0b0000;
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
        const ALL    = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}

impl Borders {
    /// CSS-style shorthand:
    /// one value sets all sides, two set vertical then horizontal, three set
    /// top, horizontal, bottom, four go clockwise from the top. Values past
    /// the fourth are ignored; no values yields [`Borders::NONE`].
    ///
    /// # Example
    /// ```
    /// use frameline_widgets::Borders;
    ///
    /// assert_eq!(Borders::from_shorthand(&[true]), Borders::ALL);
    /// assert_eq!(Borders::from_shorthand(&[true, false]), Borders::TOP | Borders::BOTTOM);
    /// assert_eq!(
    ///     Borders::from_shorthand(&[true, true, false, false]),
    ///     Borders::TOP | Borders::RIGHT
    /// );
    /// ```
    #[must_use]
    pub fn from_shorthand(sides: &[bool]) -> Self {
        let (top, right, bottom, left) = match *sides {
            [] => return Self::NONE,
            [all] => (all, all, all, all),
            [vertical, horizontal] => (vertical, horizontal, vertical, horizontal),
            [top, horizontal, bottom] => (top, horizontal, bottom, horizontal),
            [top, right, bottom, left, ..] => (top, right, bottom, left),
        };
        let mut borders = Self::NONE;
        borders.set(Self::TOP, top);
        borders.set(Self::RIGHT, right);
        borders.set(Self::BOTTOM, bottom);
        borders.set(Self::LEFT, left);
        borders
    }

    #[must_use]
    pub const fn from_side(side: BorderSide) -> Self {
        match side {
            BorderSide::Top => Self::TOP,
            BorderSide::Right => Self::RIGHT,
            BorderSide::Bottom => Self::BOTTOM,
            BorderSide::Left => Self::LEFT,
        }
    }

    #[must_use]
    pub fn has(self, side: BorderSide) -> bool {
        self.contains(Self::from_side(side))
    }
}
