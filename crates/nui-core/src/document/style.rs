//! Character styles
//!
//! Styles are recorded as an ordered list of spans, each applying one change
//! to a character range. The attributes of a character are the fold of every
//! span covering it, later spans overriding earlier ones.

use std::ops::Range;

/// Foreground color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Effective attributes of one character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextAttributes {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// `None` means the default foreground
    pub color: Option<Color>,
}

/// One attribute change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleChange {
    Bold(bool),
    Italic(bool),
    Underline(bool),
    Color(Color),
}

impl StyleChange {
    fn same_attribute(&self, other: &StyleChange) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    fn apply(&self, attrs: &mut TextAttributes) {
        match *self {
            StyleChange::Bold(on) => attrs.bold = on,
            StyleChange::Italic(on) => attrs.italic = on,
            StyleChange::Underline(on) => attrs.underline = on,
            StyleChange::Color(color) => attrs.color = Some(color),
        }
    }
}

/// A change applied to a character range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpan {
    pub range: Range<usize>,
    pub change: StyleChange,
}

impl StyleSpan {
    /// An empty span at `offset` still styles text typed there
    fn covers(&self, offset: usize) -> bool {
        if self.range.is_empty() {
            self.range.start == offset
        } else {
            self.range.contains(&offset)
        }
    }

    /// Whether `later` decides this span's attribute at every offset it covers
    fn overridden_by(&self, later: &StyleSpan) -> bool {
        if !self.change.same_attribute(&later.change) {
            return false;
        }
        if self.range.is_empty() {
            later.covers(self.range.start)
        } else {
            later.range.start <= self.range.start && self.range.end <= later.range.end
        }
    }
}

/// Ordered span list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct StyleRuns {
    spans: Vec<StyleSpan>,
}

impl StyleRuns {
    /// Append a span, dropping earlier spans it fully overrides
    pub(crate) fn push(&mut self, range: Range<usize>, change: StyleChange) {
        let span = StyleSpan { range, change };
        self.spans.retain(|earlier| !earlier.overridden_by(&span));
        self.spans.push(span);
    }

    pub(crate) fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    pub(crate) fn clear(&mut self) {
        self.spans.clear();
    }

    pub(crate) fn attributes_at(&self, offset: usize) -> TextAttributes {
        let mut attrs = TextAttributes::default();
        for span in self.spans.iter().filter(|s| s.covers(offset)) {
            span.change.apply(&mut attrs);
        }
        attrs
    }

    /// Adjust spans for `len` characters inserted at `at`
    ///
    /// A span reaching the insertion point grows to include the new text;
    /// spans starting after it move right.
    pub(crate) fn shift_for_insert(&mut self, at: usize, len: usize) {
        for span in &mut self.spans {
            let Range { start, end } = span.range;
            if (start < at && at <= end) || (start == at && end == at) {
                span.range.end += len;
            } else if start >= at {
                span.range.start += len;
                span.range.end += len;
            }
        }
    }
}
