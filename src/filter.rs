//! The line-filtering pipeline: slice, test predicates, highlight, emit.

use std::borrow::Cow;
use std::io::Write;
use std::ops::Range;

use regex_automata::meta::Regex;

use crate::bounds::calculate_bounds;
use crate::error::Result;
use crate::highlight::highlight_ip_addresses;

/// `HH:MM:SS` wall-clock timestamp, word-bounded.
pub(crate) const TIMESTAMP_PAT: &str = r"\b([01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]\b";

/// Dotted-quad IPv4, each octet 0-255 with optional leading zeros,
/// word-bounded.
pub(crate) const IPV4_PAT: &str =
    r"\b(([01]?[0-9][0-9]?|2[0-4][0-9]|25[0-5])\.){3}([01]?[0-9][0-9]?|2[0-4][0-9]|25[0-5])\b";

/// Eight colon-separated groups of 1-4 hex digits, word-bounded. Standard
/// notation only: no `::` compression.
pub(crate) const IPV6_PAT: &str = r"\b([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}\b";

/// Which content predicates are active for a run.
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterConfig {
    /// Keep only lines containing an `HH:MM:SS` timestamp.
    pub timestamps: bool,
    /// Keep only lines containing an IPv4 address.
    pub ipv4: bool,
    /// Keep only lines containing an IPv6 address.
    pub ipv6: bool,
}

/// A compiled filtering pipeline for one invocation.
///
/// Holds the fixed regex patterns compiled once up front; [`run`] may then
/// be applied to any number of line sets.
///
/// [`run`]: FilterPipeline::run
pub struct FilterPipeline {
    config: FilterConfig,
    colors: bool,
    timestamp_re: Regex,
    ipv4_re: Regex,
    ipv6_re: Regex,
}

impl FilterPipeline {
    /// Compile the fixed patterns. `colors` controls whether matched IP
    /// addresses are wrapped in highlight markers on output; filtering
    /// itself is unaffected by it.
    pub fn new(config: FilterConfig, colors: bool) -> Result<Self> {
        Ok(Self {
            config,
            colors,
            timestamp_re: Regex::new(TIMESTAMP_PAT)?,
            ipv4_re: Regex::new(IPV4_PAT)?,
            ipv6_re: Regex::new(IPV6_PAT)?,
        })
    }

    /// Run the pipeline over `lines`, writing surviving lines to `out` in
    /// their original order.
    ///
    /// Lines outside the `first`/`last` intersection are never examined.
    /// Every emitted line keeps the terminator it arrived with; in
    /// particular a final line without one is not given one. An empty
    /// intersection produces no output and is not an error.
    pub fn run<W: Write>(
        &self,
        lines: &[String],
        first: Option<i64>,
        last: Option<i64>,
        out: &mut W,
    ) -> Result<()> {
        let Some(bounds) = calculate_bounds(first, last, lines.len()) else {
            return Ok(());
        };
        if bounds.is_empty() {
            return Ok(());
        }

        for line in &lines[bounds] {
            if self.config.timestamps && !self.timestamp_re.is_match(line.as_str()) {
                continue;
            }
            let mut line = Cow::Borrowed(line.as_str());
            if self.config.ipv4 {
                let spans = find_spans(&self.ipv4_re, &line);
                if spans.is_empty() {
                    continue;
                }
                if self.colors {
                    line = Cow::Owned(highlight_ip_addresses(&line, &spans));
                }
            }
            if self.config.ipv6 {
                // Scan the possibly already-highlighted line so the IPv6
                // span offsets line up with what gets emitted.
                let spans = find_spans(&self.ipv6_re, &line);
                if spans.is_empty() {
                    continue;
                }
                if self.colors {
                    line = Cow::Owned(highlight_ip_addresses(&line, &spans));
                }
            }
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}

/// Collect the non-overlapping match ranges of `re` in `line`, leftmost
/// first.
fn find_spans(re: &Regex, line: &str) -> Vec<Range<usize>> {
    re.find_iter(line).map(|m| m.range()).collect()
}
