//! Escape key letter -> Kabiyè special character mapping

/// Prefix that starts a single-letter escape (`=e` -> `ɛ`).
pub const ESCAPE_PREFIX: char = '=';

/// Full mapping table, lowercase and uppercase interleaved.
/// Order matters for the instruction panel (lowercase entries are listed in this order).
pub const LETTER_MAP: [(char, char); 14] = [
    ('d', 'ɖ'),
    ('D', 'Ɖ'),
    ('e', 'ɛ'),
    ('E', 'Ɛ'),
    ('g', 'ɣ'),
    ('G', 'Ɣ'),
    ('i', 'ɩ'),
    ('I', 'Ɩ'),
    ('n', 'ŋ'),
    ('N', 'Ŋ'),
    ('o', 'ɔ'),
    ('O', 'Ɔ'),
    ('u', 'ʊ'),
    ('U', 'Ʊ'),
];

/// Sequences that need the doubled prefix (`==n` -> `ñ`).
/// Checked before the single-letter table because `=n` is itself a valid escape.
pub const DOUBLE_ESCAPES: [(&str, char); 2] = [("==n", 'ñ'), ("==N", 'Ñ')];

/// Map one escape key letter to its special character.
/// Returns `None` for letters outside the table (`z`, digits, punctuation...).
pub fn map_to_diacritic(c: char) -> Option<char> {
    LETTER_MAP
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, value)| *value)
}

/// Lowercase entries only, in table order. Used for the examples panel.
pub fn lowercase_entries() -> impl Iterator<Item = (char, char)> {
    LETTER_MAP
        .iter()
        .copied()
        .filter(|(key, _)| key.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_keys_are_unique() {
        for (i, (key, _)) in LETTER_MAP.iter().enumerate() {
            assert!(
                LETTER_MAP[i + 1..].iter().all(|(other, _)| other != key),
                "duplicate key {:?}",
                key
            );
        }
    }

    #[test]
    fn test_table_matches_lookup() {
        for (key, value) in LETTER_MAP {
            assert_eq!(map_to_diacritic(key), Some(value), "key {:?}", key);
        }
    }

    #[test]
    fn test_unmapped_letters() {
        for c in ['a', 'z', 'Z', 'x', '=', '1', ' ', 'ɛ'] {
            assert_eq!(map_to_diacritic(c), None, "key {:?}", c);
        }
    }

    #[test]
    fn test_both_cases_present() {
        for (key, _) in lowercase_entries() {
            assert!(map_to_diacritic(key.to_ascii_uppercase()).is_some());
        }
    }

    #[test]
    fn test_lowercase_entries_order() {
        let keys: String = lowercase_entries().map(|(k, _)| k).collect();
        assert_eq!(keys, "deginou");
    }

    #[test]
    fn test_double_escapes_end_with_mapped_letter() {
        // the trailing letter of a double escape is also a single escape, so order matters
        for (seq, _) in DOUBLE_ESCAPES {
            let last = seq.chars().last().unwrap();
            assert!(map_to_diacritic(last).is_some());
        }
    }
}
