//! Trailing escape sequence rewriter
//!
//! Runs on every edit event against the whole buffer. Only the last two or
//! three characters are inspected, so the caller is expected to append at the
//! end of the buffer. Anything else passes through unchanged.

use crate::core::letter_map::{map_to_diacritic, DOUBLE_ESCAPES, ESCAPE_PREFIX};

/// Which rule rewrote the buffer tail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// `==n` / `==N` (three characters consumed)
    Double { output: char },
    /// `=X` for a mapped letter `X` (two characters consumed)
    Single { key: char, output: char },
}

impl Substitution {
    /// Number of trailing characters consumed
    pub fn consumed(&self) -> usize {
        match self {
            Substitution::Double { .. } => 3,
            Substitution::Single { .. } => 2,
        }
    }

    pub fn output(&self) -> char {
        match self {
            Substitution::Double { output } | Substitution::Single { output, .. } => *output,
        }
    }
}

/// Find the rule matching the end of `input`, in priority order.
pub fn detect(input: &str) -> Option<Substitution> {
    // Rules 1-2: `==n` / `==N`
    for (seq, output) in DOUBLE_ESCAPES {
        if input.ends_with(seq) {
            return Some(Substitution::Double { output });
        }
    }

    // Rule 3: `=` + mapped letter
    let mut tail = input.chars().rev();
    let key = tail.next()?;
    if tail.next()? != ESCAPE_PREFIX {
        return None;
    }
    map_to_diacritic(key).map(|output| Substitution::Single { key, output })
}

/// Rewrite `input` and report which rule fired, if any.
pub fn apply(input: &str) -> (String, Option<Substitution>) {
    match detect(input) {
        Some(sub) => {
            let keep = strip_last_chars(input, sub.consumed());
            let mut result = String::with_capacity(keep.len() + sub.output().len_utf8());
            result.push_str(keep);
            result.push(sub.output());
            (result, Some(sub))
        }
        None => (input.to_string(), None),
    }
}

/// Resolve a trailing escape sequence in `input`.
///
/// Total over all strings: unrecognized tails are returned unchanged.
///
/// # Examples
/// ```
/// use kabiye::core::transformer::transform;
/// assert_eq!(transform("he=e"), "heɛ");
/// assert_eq!(transform("test==N"), "testÑ");
/// assert_eq!(transform("abc=z"), "abc=z");
/// ```
pub fn transform(input: &str) -> String {
    apply(input).0
}

/// Host-facing form of [`transform`]: `(previous displayed text, raw input after edit)`.
/// The previous value does not affect the result.
pub fn transform_edit(_previous: &str, raw: &str) -> String {
    transform(raw)
}

/// Replay `keys` one keystroke at a time, the way a text field would see them.
///
/// # Examples
/// ```
/// use kabiye::core::transformer::type_text;
/// assert_eq!(type_text("=Eyaa=de"), "Ɛyaaɖe");
/// assert_eq!(type_text("==n"), "ñ");
/// ```
pub fn type_text(keys: &str) -> String {
    let mut buffer = String::with_capacity(keys.len());
    for c in keys.chars() {
        buffer.push(c);
        buffer = transform(&buffer);
    }
    buffer
}

/// `input` without its last `n` characters (not bytes)
fn strip_last_chars(input: &str, n: usize) -> &str {
    match input.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &input[..idx],
        None => "",
    }
}
