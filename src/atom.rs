//! The atom tree built once by [`crate::parser::Parser`] and walked by the
//! backtracking driver in [`crate::matcher`].
//!
//! `Atom` is the tagged value described by the matching engine's data
//! model: one syntactic unit taken from the pattern, optionally followed
//! by a quantifier. `Node` pairs the two, and a `Seq` is just a sequence
//! of nodes (concatenation is implicit in the pattern, so it needs no
//! variant of its own).

use crate::class::CharClass;

/// A quantifier suffix. Anchors can never carry one (rejected at parse
/// time); everything else may.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantifier {
    None,
    /// `?` (zero or one, preferring one).
    Question,
    /// `+` (one or more, greedy).
    Plus,
    /// `*` (zero or more, greedy).
    Star,
}

/// One atomic construct recognized by the pattern cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Atom {
    Literal(char),
    Wildcard,
    Digit,
    Word,
    Class(CharClass),
    Group(Group),
    /// `\k`, `k` in `1..=9`.
    Backref(u8),
    AnchorStart,
    AnchorEnd,
}

/// A parenthesized sub-pattern. `index` is the 1-based, globally assigned
/// capture slot; `branches` holds one sequence of nodes per `|`-separated
/// alternative (a single-element vec when there is no alternation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub index: u8,
    pub branches: Vec<Seq>,
}

/// A concatenation of nodes, i.e. one parsed (sub-)pattern body.
pub type Seq = Vec<Node>;

/// An atom plus the quantifier that follows it in the pattern text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub atom: Atom,
    pub quant: Quantifier,
}

impl Node {
    pub fn new(atom: Atom, quant: Quantifier) -> Node {
        Node { atom, quant }
    }
}

/// Tests whether a single-character atom (everything but `Group`,
/// `Backref`, and the anchors, which need position/capture context the
/// driver supplies) matches `c`. Returns `None` for atoms this function
/// doesn't handle, so the driver knows to fall through to its own logic.
pub fn matches_single_char(atom: &Atom, c: char) -> Option<bool> {
    match *atom {
        Atom::Literal(lit) => Some(lit == c),
        Atom::Wildcard => Some(true),
        Atom::Digit => Some(c.is_ascii_digit()),
        Atom::Word => Some(c.is_ascii_alphanumeric() || c == '_'),
        Atom::Class(ref class) => Some(class.matches(c)),
        Atom::Group(_) | Atom::Backref(_) | Atom::AnchorStart | Atom::AnchorEnd => None,
    }
}
