//! The logsift library for slicing and filtering log lines.
//!
//! Lines are first restricted to the intersection of a head-style `first`
//! window and a tail-style `last` window, then filtered by the presence of a
//! timestamp, an IPv4 address, or an IPv6 address. Matched IP addresses can
//! be wrapped in ANSI highlight markers on the way out.
//!
//! # Examples
//!
//! Keeping only lines that carry a timestamp:
//!
//! ```rust
//! use logsift::{FilterConfig, FilterPipeline};
//!
//! # fn main() -> logsift::error::Result<()> {
//! let lines: Vec<String> = vec![
//!     "boot 00:00:01 ok\n".into(),
//!     "no timestamp here\n".into(),
//! ];
//!
//! let config = FilterConfig {
//!     timestamps: true,
//!     ..Default::default()
//! };
//! let pipeline = FilterPipeline::new(config, false)?;
//!
//! let mut out = Vec::new();
//! pipeline.run(&lines, None, None, &mut out)?;
//! assert_eq!(out, b"boot 00:00:01 ok\n");
//! # Ok(())
//! # }
//! ```

pub mod bounds;
pub mod error;
pub mod filter;
pub mod highlight;
pub mod input;

pub use crate::bounds::calculate_bounds;
pub use crate::error::Error;
pub use crate::filter::{FilterConfig, FilterPipeline};
pub use crate::highlight::{highlight_ip_addresses, split_by_idx, HIGHLIGHT, RESET};
