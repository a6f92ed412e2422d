//! Reassembly of a line with highlight markers around matched spans.

use std::ops::Range;

/// ANSI green-background marker inserted before each matched span.
pub const HIGHLIGHT: &str = "\x1b[42m";

/// ANSI reset marker inserted after each matched span.
pub const RESET: &str = "\x1b[0m";

/// Split `line` at each byte offset in `indices`, yielding the segments in
/// order. Offsets must be ascending and fall on character boundaries; `k`
/// interior offsets produce `k + 1` segments, the last running to the end of
/// the line.
pub fn split_by_idx<'a>(line: &'a str, indices: &'a [usize]) -> impl Iterator<Item = &'a str> + 'a {
    let mut front = 0;
    indices
        .iter()
        .copied()
        .chain(std::iter::once(line.len()))
        .map(move |back| {
            let segment = &line[front..back];
            front = back;
            segment
        })
}

/// Rebuild `line` with every matched span wrapped in [`HIGHLIGHT`] and
/// [`RESET`] markers.
///
/// `matches` are non-overlapping byte ranges in ascending order, as produced
/// by a regex find pass over `line`. Re-scanning a string this function
/// returned and feeding the new matches back in wraps the new spans without
/// disturbing the markers inserted earlier.
pub fn highlight_ip_addresses(line: &str, matches: &[Range<usize>]) -> String {
    // Collect interior cut points. Span boundaries at the very start or end
    // of the line are not cuts; a span starting at offset 0 instead flips the
    // alternation so the first segment is the highlighted one.
    let mut indices: Vec<usize> = Vec::with_capacity(matches.len() * 2);
    let mut starts_with_ip = false;
    for m in matches {
        for i in [m.start, m.end] {
            if i == 0 {
                starts_with_ip = true;
            } else if i != line.len() {
                indices.push(i);
            }
        }
    }
    indices.sort_unstable();
    indices.dedup();

    // Segments alternate between text outside a match and text inside one.
    let first_highlighted = if starts_with_ip { 0 } else { 1 };
    let mut out =
        String::with_capacity(line.len() + matches.len() * (HIGHLIGHT.len() + RESET.len()));
    for (i, segment) in split_by_idx(line, &indices).enumerate() {
        if i >= first_highlighted && (i - first_highlighted) % 2 == 0 {
            out.push_str(HIGHLIGHT);
            out.push_str(segment);
            out.push_str(RESET);
        } else {
            out.push_str(segment);
        }
    }
    out
}
