//! # dump - name/value context for log messages
//!
//! `dump!` captures a list of expressions together with their source text
//! and returns a value that renders them as `{name = value, ...}`:
//!
//! ```rust
//! use dump::prelude::*;
//!
//! let foo = 42;
//! let bar = vec![1, 2, 3];
//! let ctx = dump!(foo, bar.len());
//! assert_eq!(ctx.to_string(), "{foo = 42, bar.len() = 3}");
//! ```
//!
//! The result implements [`Display`](std::fmt::Display), so it drops into
//! `format!`, `write!` and `tracing` events alike:
//!
//! ```rust
//! # use dump::dump;
//! # let (src, dst) = ("a.txt", "b.txt");
//! tracing::warn!(ctx = %dump!(src, dst), "can't copy file");
//! ```
//!
//! ## Semantics
//!
//! - Arguments are evaluated during rendering, not when `dump!` runs. A
//!   dump rendered twice evaluates its arguments twice, so a context can
//!   be built once and reused across several checks.
//! - `with_names` overrides field names, `sep` / `sep_kv` override the
//!   separators (`", "` and `" = "` by default).
//! - Values print through `Display` when available, then `Debug`, then a
//!   `<unprintable TYPE>` placeholder. Rendering a value never fails.
//! - Raw pointers print as addresses and are never read. Wrap them in a
//!   string view (`CStr::from_ptr(p).to_string_lossy()`) to print text.
//! - At most 8 expressions per `dump!`.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod config;
mod formatter;
mod error;
mod macros;
mod value;

// Public API
pub use config::{DEFAULT_FIELD_SEPARATOR, DEFAULT_KV_SEPARATOR, Separators};
pub use formatter::{Bound, Deferred, Dump, Evaluate, Fields};
pub use error::{DumpError, DumpResult};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Dump, DumpError, DumpResult, Separators, dump};
}

#[doc(hidden)]
pub mod __private {
    pub use crate::value::{Probe, RenderDebug, RenderDisplay, RenderFallback};
}
