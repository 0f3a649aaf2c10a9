//! Highlight spans over the clause text.
//!
//! Every occurrence of every highlighted phrase becomes a byte range; ranges
//! that overlap or touch are merged so the renderer never paints twice.

use std::ops::Range;

/// A piece of the input, either painted or plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Highlighted(&'a str),
}

/// Sorted, non-overlapping byte ranges of `text` covered by any phrase.
pub fn spans<S: AsRef<str>>(text: &str, phrases: &[S]) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = phrases
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| !p.is_empty())
        .flat_map(|p| {
            text.match_indices(p)
                .map(move |(start, _)| start..start + p.len())
        })
        .collect();
    ranges.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for r in ranges {
        match merged.last_mut() {
            Some(last) if r.start <= last.end => last.end = last.end.max(r.end),
            _ => merged.push(r),
        }
    }
    merged
}

/// Split `text` into alternating plain and highlighted segments.
pub fn segments<'a, S: AsRef<str>>(text: &'a str, phrases: &[S]) -> Vec<Segment<'a>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for r in spans(text, phrases) {
        if r.start > cursor {
            out.push(Segment::Plain(&text[cursor..r.start]));
        }
        out.push(Segment::Highlighted(&text[r.clone()]));
        cursor = r.end;
    }
    if cursor < text.len() {
        out.push(Segment::Plain(&text[cursor..]));
    }
    out
}

/// Render `text` with each highlighted segment wrapped in `open`/`close`.
pub fn mark<S: AsRef<str>>(text: &str, phrases: &[S], open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for seg in segments(text, phrases) {
        match seg {
            Segment::Plain(s) => out.push_str(s),
            Segment::Highlighted(s) => {
                out.push_str(open);
                out.push_str(s);
                out.push_str(close);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_every_occurrence() {
        let text = "not binding and again not binding";
        assert_eq!(spans(text, &["not binding"]), [0..11, 22..33]);
    }

    #[test]
    fn merges_overlapping_phrases() {
        let text = "either by arbitration";
        let phrases = ["either by arbitration", "by arbitration"];
        assert_eq!(spans(text, &phrases), [0..21]);
    }

    #[test]
    fn merges_touching_ranges() {
        assert_eq!(spans("abcd", &["ab", "cd"]), [0..4]);
    }

    #[test]
    fn ignores_empty_phrases() {
        assert!(spans("anything", &[""]).is_empty());
    }

    #[test]
    fn segments_alternate() {
        let text = "The award is non-binding here.";
        assert_eq!(
            segments(text, &["non-binding"]),
            [
                Segment::Plain("The award is "),
                Segment::Highlighted("non-binding"),
                Segment::Plain(" here."),
            ]
        );
    }

    #[test]
    fn mark_wraps_highlights() {
        let phrases = ["may arbitrate", " or arbitration"];
        let marked = mark("may arbitrate or arbitration", &phrases, "[", "]");
        assert_eq!(marked, "[may arbitrate or arbitration]");
    }

    #[test]
    fn no_phrases_leaves_text_untouched() {
        let empty: [&str; 0] = [];
        assert_eq!(mark("plain text", &empty, "[", "]"), "plain text");
    }

    #[test]
    fn handles_multibyte_text() {
        let text = "Décision non-binding — fin";
        let marked = mark(text, &["non-binding"], "<", ">");
        assert_eq!(marked, "Décision <non-binding> — fin");
    }
}
