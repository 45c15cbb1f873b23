//! Splits item labels into highlighted / plain runs for rendering.
//!
//! Matching is a literal, case-insensitive substring search. Matches are found
//! leftmost-first and never overlap; the highlighted run keeps the casing of
//! the source text, not of the search term.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChunk<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

impl<'a> TextChunk<'a> {
    pub const fn plain(text: &'a str) -> Self {
        Self {
            text,
            highlighted: false,
        }
    }

    pub const fn highlighted(text: &'a str) -> Self {
        Self {
            text,
            highlighted: true,
        }
    }
}

/// Split `full_text` around every case-insensitive occurrence of `highlighted`.
///
/// An empty term yields a single plain chunk. Concatenating the returned
/// chunks always reproduces `full_text`.
pub fn split_text<'a>(full_text: &'a str, highlighted: &str) -> Vec<TextChunk<'a>> {
    if highlighted.is_empty() {
        return vec![TextChunk::plain(full_text)];
    }

    let needle = fold(highlighted);
    let mut chunks = Vec::new();
    let mut rest = full_text;

    while let Some((start, end)) = find_folded(rest, &needle) {
        if start > 0 {
            chunks.push(TextChunk::plain(&rest[..start]));
        }
        chunks.push(TextChunk::highlighted(&rest[start..end]));
        rest = &rest[end..];
    }

    if !rest.is_empty() {
        chunks.push(TextChunk::plain(rest));
    }

    chunks
}

/// Case-insensitive `contains`, using the same folding as [`split_text`].
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    find_folded(haystack, &fold(needle)).is_some()
}

fn fold(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Byte range of the first match of the folded `needle` in `haystack`.
///
/// Offsets always land on char boundaries of the original text, even when a
/// char lowercases to several chars or to a different byte length.
fn find_folded(haystack: &str, needle: &[char]) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .char_indices()
        .find_map(|(start, _)| match_len(&haystack[start..], needle).map(|len| (start, start + len)))
}

fn match_len(text: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0usize;
    for (offset, ch) in text.char_indices() {
        for folded in ch.to_lowercase() {
            if needle.get(matched) != Some(&folded) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/highlight.rs"]
mod tests;
