//! Kabiyè special characters shown on the on-screen palette

/// Lowercase palette row
pub const LOWERCASE: [char; 8] = ['ɖ', 'ɛ', 'ɣ', 'ɩ', 'ŋ', 'ɔ', 'ʊ', 'ñ'];
/// Uppercase palette row
pub const UPPERCASE: [char; 8] = ['Ɖ', 'Ɛ', 'Ɣ', 'Ɩ', 'Ŋ', 'Ɔ', 'Ʊ', 'Ñ'];

/// Palette in display order: lowercase row then uppercase row
pub fn palette() -> impl Iterator<Item = char> {
    LOWERCASE.iter().chain(UPPERCASE.iter()).copied()
}
