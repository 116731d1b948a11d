//! Line-level parsing: the line matcher and the timestamp resolver.
//!
//! These functions work on a single line and never fail loudly; a line that
//! does not fit is simply `None`. Whole-transcript parsing lives in
//! [`crate::parser`].

pub mod line;
pub mod timestamp;

pub use line::{LINE_PATTERN, LineParts, parse_line, parse_message};
pub use timestamp::{DateOrder, YearWidth, resolve_timestamp, resolve_with_order};
