//! Kabiyè text -> escape key sequence (reverse of the transformer)
//!
//! Produces the keystrokes that would type a given text through the
//! transformer, e.g. `Ɛyaɖɛ` -> `=Eya=d=e`.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::letter_map::{DOUBLE_ESCAPES, ESCAPE_PREFIX, LETTER_MAP};

lazy_static! {
    /// Special character -> keys that produce it
    static ref REVERSE_MAP: HashMap<char, String> = {
        let mut map = HashMap::new();
        for (key, value) in LETTER_MAP {
            map.insert(value, format!("{}{}", ESCAPE_PREFIX, key));
        }
        for (seq, value) in DOUBLE_ESCAPES {
            map.insert(value, seq.to_string());
        }
        map
    };
}

/// Keys that type `c`, if it is a special character
pub fn keys_for(c: char) -> Option<&'static str> {
    REVERSE_MAP.get(&c).map(String::as_str)
}

/// Convert text into the escape keystrokes that reproduce it.
/// Characters without an escape are kept as-is.
///
/// # Examples
/// ```
/// use kabiye::core::escape::to_escape_sequence;
/// assert_eq!(to_escape_sequence("Ɛyaɖɛ"), "=Eya=d=e");
/// assert_eq!(to_escape_sequence("señ"), "se==n");
/// ```
pub fn to_escape_sequence(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        match keys_for(c) {
            Some(keys) => result.push_str(keys),
            None => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::charset::palette;
    use crate::core::transformer::type_text;

    #[test]
    fn test_every_palette_char_has_keys() {
        for c in palette() {
            assert!(keys_for(c).is_some(), "{:?}", c);
        }
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(to_escape_sequence("hello 123"), "hello 123");
        assert_eq!(to_escape_sequence(""), "");
    }

    #[test]
    fn test_typing_the_escape_reproduces_text() {
        for text in ["Ɛyaɖɛ", "Ɖɔɔzɩ", "Ɛsɔɔlɩ", "ñÑŋŊ", "aŋa", "ƔƖƱʊ"] {
            let keys = to_escape_sequence(text);
            assert_eq!(type_text(&keys), text, "keys {:?}", keys);
        }
    }
}
