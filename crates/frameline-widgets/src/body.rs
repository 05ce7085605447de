//! Body lines: the rectangle a border is drawn around.

use frameline_text::display_width;

/// Lines of equal display width.
///
/// # Example
/// ```
/// use frameline_widgets::BodyLines;
///
/// let body = BodyLines::from_text("ab\nabcd");
/// assert_eq!(body.width(), 4);
/// assert_eq!(body.lines(), ["ab  ", "abcd"]);
///
/// let wide = BodyLines::from_text("").with_min_width(3);
/// assert_eq!(wide.lines(), ["   "]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BodyLines {
    lines: Vec<String>,
    width: usize,
}

impl BodyLines {
    /// Split `text` on newlines and right-pad every line to the widest one.
    ///
    /// `\r\n` counts as a single newline. Empty text is one empty line.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        let width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
        Self { lines, width }.padded()
    }

    /// Widen the rectangle to at least `width` columns.
    #[must_use]
    pub fn with_min_width(mut self, width: usize) -> Self {
        if width > self.width {
            self.width = width;
            self = self.padded();
        }
        self
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    fn padded(mut self) -> Self {
        for line in &mut self.lines {
            let w = display_width(line);
            if w < self.width {
                line.push_str(&" ".repeat(self.width - w));
            }
        }
        self
    }
}

impl From<&str> for BodyLines {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for BodyLines {
    fn from(text: String) -> Self {
        Self::from_text(&text)
    }
}
