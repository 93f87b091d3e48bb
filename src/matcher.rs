//! The backtracking matching engine.
//!
//! This is the recursive search that walks the node tree left to right,
//! delegating each atom to its match rule, threading capture state through
//! alternatives, and reporting success as soon as the remainder of the
//! pattern matches the remainder of the input.
//!
//! The contract of `try(pattern-pos, input-pos, captures)` yielding
//! successive input positions lazily, in preferred order, is implemented
//! here as direct recursion with an explicit continuation closure: each
//! "yield" is a recursive call into the continuation before the next
//! alternative is tried. There is no compiled byte-code program and no
//! visited-state bitmap here; worst-case running time is unbounded, which
//! is the price of supporting back-references, a construct no NFA
//! simulation can express.

use crate::atom::{self, Atom, Node, Quantifier, Seq};
use crate::captures::Captures;
use crate::error::{Error, Result};
use crate::parser;

/// A compiled pattern. Immutable once built; matching mutates only a
/// per-attempt [`Captures`] table that never escapes `is_match`.
#[derive(Clone, Debug)]
pub struct Regex {
    original: String,
    root: Seq,
    anchored_start: bool,
}

impl Regex {
    /// Compiles `pattern`. Returns [`Error`] if the pattern is malformed;
    /// never panics on untrusted input.
    pub fn new(pattern: &str) -> Result<Regex> {
        let root = parser::parse(pattern)?;
        let anchored_start = matches!(
            root.first(),
            Some(Node { atom: Atom::AnchorStart, .. })
        );
        Ok(Regex { original: pattern.to_owned(), root, anchored_start })
    }

    /// The original pattern text this `Regex` was compiled from.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Returns `true` iff `input` contains a substring matching this
    /// pattern. Tries successive start positions left to right and stops
    /// at the first success; if the pattern is anchored with `^`, only
    /// the zeroth start position is tried.
    pub fn is_match(&self, input: &str) -> bool {
        let chars: Vec<char> = input.chars().collect();
        let last_start = if self.anchored_start { 0 } else { chars.len() };
        for start in 0..=last_start {
            let mut caps = Captures::default();
            let accept: &mut dyn FnMut(usize, &mut Captures) -> bool = &mut |_pos, _caps| true;
            if try_seq(&self.root, 0, &chars, start, &mut caps, accept) {
                return true;
            }
        }
        false
    }
}

/// A continuation: given the input position reached so far and the
/// current captures, decides whether the overall match succeeds. Used to
/// thread "the rest of the pattern" through each atom's attempt without an
/// explicit generator.
type Cont<'a> = &'a mut dyn FnMut(usize, &mut Captures) -> bool;

/// Matches `nodes[idx..]` starting at `pos`, then hands off to `k`.
fn try_seq(nodes: &Seq, idx: usize, input: &[char], pos: usize, caps: &mut Captures, k: Cont) -> bool {
    let Some(node) = nodes.get(idx) else {
        return k(pos, caps);
    };
    match node.quant {
        Quantifier::None => try_atom(&node.atom, input, pos, caps, &mut |new_pos, caps| {
            try_seq(nodes, idx + 1, input, new_pos, caps, k)
        }),
        Quantifier::Question => {
            let before = *caps;
            if try_atom(&node.atom, input, pos, caps, &mut |new_pos, caps| {
                try_seq(nodes, idx + 1, input, new_pos, caps, k)
            }) {
                return true;
            }
            *caps = before;
            try_seq(nodes, idx + 1, input, pos, caps, k)
        }
        Quantifier::Plus => try_one_or_more(&node.atom, input, pos, caps, &mut |new_pos, caps| {
            try_seq(nodes, idx + 1, input, new_pos, caps, k)
        }),
        Quantifier::Star => try_zero_or_more(&node.atom, input, pos, caps, &mut |new_pos, caps| {
            try_seq(nodes, idx + 1, input, new_pos, caps, k)
        }),
    }
}

/// Matches one occurrence of `atom` at `pos`, then hands off to `k` with
/// the new input position. `k` returning `false` means "this occurrence
/// doesn't lead to an overall match"; for atoms with more than one
/// candidate length (only `Group`), that triggers trying the next one.
fn try_atom(atom: &Atom, input: &[char], pos: usize, caps: &mut Captures, k: Cont) -> bool {
    if let Some(matched) = atom::matches_single_char(atom, *input.get(pos).unwrap_or(&'\0')) {
        return pos < input.len() && matched && k(pos + 1, caps);
    }
    match *atom {
        Atom::AnchorStart => pos == 0 && k(pos, caps),
        Atom::AnchorEnd => pos == input.len() && k(pos, caps),
        Atom::Backref(index) => match caps.get(index) {
            Some((start, end)) => {
                let len = end - start;
                let captured = &input[start..end];
                if pos + len <= input.len() && &input[pos..pos + len] == captured {
                    k(pos + len, caps)
                } else {
                    false
                }
            }
            None => false,
        },
        Atom::Group(ref group) => {
            for branch in &group.branches {
                let before = *caps;
                let matched = try_seq(branch, 0, input, pos, caps, &mut |end_pos, caps| {
                    let prev = caps.set(group.index, (pos, end_pos));
                    if k(end_pos, caps) {
                        true
                    } else {
                        caps.restore(group.index, prev);
                        false
                    }
                });
                if matched {
                    return true;
                }
                *caps = before;
            }
            false
        }
        // Literal/Wildcard/Digit/Word/Class are all handled by the
        // `matches_single_char` branch above.
        _ => unreachable!("handled by matches_single_char"),
    }
}

/// Greedy `+`: at least one occurrence, then as many more as possible.
fn try_one_or_more(atom: &Atom, input: &[char], pos: usize, caps: &mut Captures, k: Cont) -> bool {
    let before = *caps;
    let matched = try_atom(atom, input, pos, caps, &mut |new_pos, caps| {
        if new_pos == pos {
            // Zero-width occurrence (e.g. an empty group branch); repeating
            // it again can never make progress, so hand off immediately
            // instead of recursing forever.
            return k(new_pos, caps);
        }
        try_zero_or_more(atom, input, new_pos, caps, k)
    });
    if !matched {
        *caps = before;
    }
    matched
}

/// Greedy `*`: try one-or-more first, fall back to zero last.
fn try_zero_or_more(atom: &Atom, input: &[char], pos: usize, caps: &mut Captures, k: Cont) -> bool {
    let before = *caps;
    if try_one_or_more(atom, input, pos, caps, k) {
        return true;
    }
    *caps = before;
    k(pos, caps)
}
