//! A small backtracking regular-expression engine.
//!
//! Supported syntax: literals, `.`, `\d`, `\w`, `[...]`/`[^...]` classes
//! (with `a-z` ranges), `(...)`/`(...|...)` groups with back-references
//! `\1`-`\9`, the quantifiers `?`, `+`, `*`, and the anchors `^`/`$`. There
//! is no `{m,n}`, no lazy quantifier, no non-capturing group, no
//! lookaround, and no Unicode case folding: see [`Regex`] for what is
//! actually matched.
//!
//! ```
//! use mgrep::Regex;
//!
//! let re = Regex::new(r"(\w+) and \1").unwrap();
//! assert!(re.is_match("cat and cat"));
//! assert!(!re.is_match("cat and dog"));
//! ```

mod atom;
mod captures;
mod class;
mod error;
mod matcher;
mod parser;

pub use crate::error::Error;
pub use crate::matcher::Regex;

/// Convenience alias for `Result<T, Error>`, re-exported for callers who
/// want to name it without spelling out the error type.
pub type Result<T> = std::result::Result<T, Error>;
