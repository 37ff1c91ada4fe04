//! Pure text transformations
//!
//! These operate on plain strings; `Document` decides which part of its
//! text they are applied to.

/// Swap the case of every cased character; other characters pass through
pub fn invert_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Collapse runs of spaces into one space, then trim both ends
///
/// Only the space character is collapsed; tabs and newlines inside the
/// text are left alone.
pub fn remove_double_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_space = false;
    for c in text.chars() {
        if c == ' ' {
            if !previous_space {
                out.push(c);
            }
            previous_space = true;
        } else {
            out.push(c);
            previous_space = false;
        }
    }
    out.trim().to_string()
}

/// Replace every non-overlapping occurrence of `find`, left to right
///
/// Returns the new text and the number of replacements. An empty `find`
/// never matches.
pub fn replace_all(text: &str, find: &str, replace: &str, match_case: bool) -> (String, usize) {
    if find.is_empty() {
        return (text.to_string(), 0);
    }
    if match_case {
        let count = text.matches(find).count();
        return (text.replace(find, replace), count);
    }

    let needle: Vec<char> = find.chars().collect();
    let haystack: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut count = 0;
    let mut i = 0;
    while i < haystack.len() {
        let candidate = haystack.get(i..i + needle.len());
        let hit = candidate.is_some_and(|window| {
            window
                .iter()
                .zip(&needle)
                .all(|(a, b)| chars_eq_ignore_case(*a, *b))
        });
        if hit {
            out.push_str(replace);
            count += 1;
            i += needle.len();
        } else {
            out.push(haystack[i]);
            i += 1;
        }
    }
    (out, count)
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
