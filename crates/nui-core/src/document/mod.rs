//! Headless document model
//!
//! The state an editor window would render: text, caret, selection,
//! character styles, and the file the text is associated with. All offsets
//! are in characters, not bytes.
//!
//! Style and case operations target the selection when there is one and the
//! whole document otherwise.

pub mod stats;
pub mod style;
pub mod transform;

pub use stats::DocumentStats;
pub use style::{Color, StyleChange, StyleSpan, TextAttributes};

use crate::errors::{NuiError, Result};
use std::ops::Range;
use std::path::{Path, PathBuf};
use style::StyleRuns;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
    caret: usize,
    selection: Option<Range<usize>>,
    styles: StyleRuns,
    current_file: Option<PathBuf>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document holding `text` with the caret at the end
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut doc = Self::new();
        doc.set_text(text);
        doc
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub fn set_current_file(&mut self, path: Option<PathBuf>) {
        self.current_file = path;
    }

    pub fn style_spans(&self) -> &[StyleSpan] {
        self.styles.spans()
    }

    /// Move the caret and drop the selection
    ///
    /// # Errors
    ///
    /// `InvalidRange` when `offset` is past the end of the text.
    pub fn set_caret(&mut self, offset: usize) -> Result<()> {
        let len = self.len();
        if offset > len {
            return Err(NuiError::InvalidRange {
                start: offset,
                end: offset,
                len,
            });
        }
        self.caret = offset;
        self.selection = None;
        Ok(())
    }

    /// Select a character range; the caret moves to its end
    ///
    /// An empty range clears the selection.
    ///
    /// # Errors
    ///
    /// `InvalidRange` when the range is reversed or extends past the text.
    pub fn select(&mut self, range: Range<usize>) -> Result<()> {
        let len = self.len();
        if range.start > range.end || range.end > len {
            return Err(NuiError::InvalidRange {
                start: range.start,
                end: range.end,
                len,
            });
        }
        self.caret = range.end;
        self.selection = if range.is_empty() { None } else { Some(range) };
        Ok(())
    }

    pub fn selected_text(&self) -> Option<&str> {
        let range = self.selection.as_ref()?;
        Some(&self.text[self.byte_range(range.clone())])
    }

    /// Replace all text; styles are reset and the caret goes to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.len();
        self.selection = None;
        self.styles.clear();
    }

    /// Empty the document and forget its file
    pub fn clear(&mut self) {
        self.set_text(String::new());
        self.current_file = None;
    }

    /// Insert at the caret; the caret ends up after the inserted text
    ///
    /// Styles reaching the caret extend over the new text.
    pub fn insert_at_caret(&mut self, text: &str) {
        let at = self.caret;
        let byte = self.byte_offset(at);
        self.text.insert_str(byte, text);

        let inserted = text.chars().count();
        self.styles.shift_for_insert(at, inserted);
        self.caret = at + inserted;
        self.selection = None;
    }

    // ========== Styles ==========

    /// Effective attributes of the character at `offset`
    pub fn attributes_at(&self, offset: usize) -> TextAttributes {
        self.styles.attributes_at(offset)
    }

    pub fn toggle_bold(&mut self) {
        let target = self.style_target();
        let on = !self.attributes_at(target.start).bold;
        self.styles.push(target, StyleChange::Bold(on));
    }

    pub fn toggle_italic(&mut self) {
        let target = self.style_target();
        let on = !self.attributes_at(target.start).italic;
        self.styles.push(target, StyleChange::Italic(on));
    }

    pub fn toggle_underline(&mut self) {
        let target = self.style_target();
        let on = !self.attributes_at(target.start).underline;
        self.styles.push(target, StyleChange::Underline(on));
    }

    pub fn set_color(&mut self, color: Color) {
        let target = self.style_target();
        self.styles.push(target, StyleChange::Color(color));
    }

    // ========== Transformations ==========

    pub fn to_upper_case(&mut self) {
        self.rewrite_target(|s| s.to_uppercase());
    }

    pub fn to_lower_case(&mut self) {
        self.rewrite_target(|s| s.to_lowercase());
    }

    pub fn invert_case(&mut self) {
        self.rewrite_target(transform::invert_case);
    }

    /// Collapse space runs and trim, over the whole text
    pub fn remove_double_spaces(&mut self) {
        let cleaned = transform::remove_double_spaces(&self.text);
        self.set_text(cleaned);
    }

    /// Literal find-and-replace over the whole text
    ///
    /// Returns the number of replacements; the text is untouched when it is
    /// zero.
    pub fn find_replace(&mut self, find: &str, replace: &str, match_case: bool) -> usize {
        let (replaced, count) = transform::replace_all(&self.text, find, replace, match_case);
        if count > 0 {
            self.set_text(replaced);
        }
        count
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats::of(&self.text)
    }

    // ========== Internals ==========

    fn style_target(&self) -> Range<usize> {
        self.selection.clone().unwrap_or(0..self.len())
    }

    /// Rewrite the selection (kept selected) or the whole text
    fn rewrite_target(&mut self, f: impl Fn(&str) -> String) {
        match self.selection.clone() {
            Some(range) => {
                let bytes = self.byte_range(range.clone());
                let rewritten = f(&self.text[bytes.clone()]);
                let new_len = rewritten.chars().count();
                self.text.replace_range(bytes, &rewritten);
                self.styles.clear();
                self.selection = Some(range.start..range.start + new_len);
                self.caret = range.start + new_len;
            }
            None => {
                let rewritten = f(&self.text);
                self.set_text(rewritten);
            }
        }
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn byte_range(&self, range: Range<usize>) -> Range<usize> {
        self.byte_offset(range.start)..self.byte_offset(range.end)
    }
}
