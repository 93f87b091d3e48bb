//! The error type returned by [`crate::Regex::new`] when a pattern is
//! malformed.
//!
//! Every variant here corresponds to one of the `malformed-pattern` causes
//! enumerated by the matching engine's design: unbalanced grouping,
//! an empty character class, a quantifier with nothing to quantify or
//! attached to an anchor, a back-reference to a group that never appears,
//! or a trailing unescaped backslash.

/// A parse-time failure. `Regex::new` returns this instead of panicking;
/// it never describes a runtime match failure, which is simply `false`.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A `(` was never closed, or a `)` appeared with nothing open.
    #[error("unbalanced parenthesis in pattern")]
    UnbalancedParen,
    /// A `[` was never closed with a matching `]`.
    #[error("unbalanced bracket in character class")]
    UnbalancedBracket,
    /// `[]` or `[^]` with no members.
    #[error("empty character class")]
    EmptyClass,
    /// `?`, `+`, or `*` with no preceding atom to repeat.
    #[error("quantifier with nothing to repeat")]
    DanglingQuantifier,
    /// `?`, `+`, or `*` attached to `^` or `$`.
    #[error("anchor cannot be quantified")]
    QuantifiedAnchor,
    /// `\k` where group `k` never occurs anywhere in the pattern.
    #[error("back-reference to non-existent group \\{0}")]
    UnknownBackref(u8),
    /// A trailing `\` with no following character.
    #[error("trailing backslash at end of pattern")]
    TrailingEscape,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// A short machine-stable name, used by the front end's diagnostics.
    pub fn kind(&self) -> &'static str {
        match *self {
            Error::UnbalancedParen => "unbalanced-paren",
            Error::UnbalancedBracket => "unbalanced-bracket",
            Error::EmptyClass => "empty-class",
            Error::DanglingQuantifier => "dangling-quantifier",
            Error::QuantifiedAnchor => "quantified-anchor",
            Error::UnknownBackref(_) => "unknown-backref",
            Error::TrailingEscape => "trailing-escape",
        }
    }
}
