//! Intersection of head-style and tail-style line windows.

use std::ops::Range;

/// Compute the half-open range of line indices selected by the `--first` and
/// `--last` windows over an input of `length` lines.
///
/// `first` mimics `head`: a positive value keeps the first `first` lines and
/// a negative value keeps everything but the last `|first|` lines. `last`
/// mimics `tail`: it keeps the last `last` lines, and a negative value is
/// read by its magnitude. Out-of-range values saturate rather than error, so
/// the function is total over its inputs.
///
/// Returns `None` only when both windows are given and they do not
/// intersect. A returned empty range (`start == end`) also selects no lines;
/// callers must treat both forms as "produce no output". When both windows
/// are given, they intersect only if they strictly overlap: windows that
/// exactly touch (`first + last == length`) select nothing.
pub fn calculate_bounds(
    first: Option<i64>,
    last: Option<i64>,
    length: usize,
) -> Option<Range<usize>> {
    let len = length as i64;

    // Clamp --first into [0, len]. A negative value past the start of the
    // file saturates to an empty head.
    let first = first.map(|f| {
        if f < -len {
            0
        } else if f < 0 {
            len + f
        } else if f > len {
            len
        } else {
            f
        }
    });

    // Clamp --last into [0, len]. An out-of-range value in either direction
    // saturates to the whole file, which is how tail behaves.
    let last = last.map(|l| if l < -len || l > len { len } else { l.abs() });

    let bounds = match (first, last) {
        (None, None) => 0..len,
        (Some(f), None) => 0..f,
        (None, Some(l)) => (len - l)..len,
        (Some(f), Some(l)) => {
            if f + l > len {
                (len - l)..f
            } else {
                return None;
            }
        }
    };

    Some(bounds.start as usize..bounds.end as usize)
}
