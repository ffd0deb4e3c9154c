//! Integration tests - escape transform through the public API

use kabiye::core::letter_map::LETTER_MAP;
use kabiye::platform::clipboard::MemoryClipboard;
use kabiye::{to_escape_sequence, transform, transform_edit, type_text, KeyboardState, Lang};
use std::time::Instant;

#[test]
fn test_every_mapped_letter_with_prefix() {
    for prefix in ["", "a", "Kabiy", "ɛɔ ", "123 "] {
        for (key, value) in LETTER_MAP {
            let input = format!("{}={}", prefix, key);
            assert_eq!(transform(&input), format!("{}{}", prefix, value));
        }
    }
}

#[test]
fn test_double_escape_with_prefix() {
    for prefix in ["", "se", "ñ", "="] {
        assert_eq!(transform(&format!("{}==n", prefix)), format!("{}ñ", prefix));
        assert_eq!(transform(&format!("{}==N", prefix)), format!("{}Ñ", prefix));
    }
}

#[test]
fn test_single_vs_double_n() {
    assert_eq!(transform("test=N"), "testŊ");
    assert_eq!(transform("test==N"), "testÑ");
    assert_eq!(transform("test=n"), "testŋ");
    assert_eq!(transform("test==n"), "testñ");
}

#[test]
fn test_non_trigger_passthrough() {
    for s in ["", "a", "ab", "abc=z", "abc=", "==", "=1", "hello world", "a=eb", "ɛ"] {
        assert_eq!(transform(s), s);
    }
}

#[test]
fn test_empty_string() {
    assert_eq!(transform(""), "");
}

#[test]
fn test_idempotent_once_resolved() {
    for s in ["he=e", "x==N", "plain", "ab=", "=U"] {
        let once = transform(s);
        assert_eq!(transform(&once), once);
    }
}

#[test]
fn test_edit_progression() {
    let mut displayed = String::new();
    let mut outputs = Vec::new();
    for raw in ["h", "he", "he=", "he=e"] {
        displayed = transform_edit(&displayed, raw);
        outputs.push(displayed.clone());
    }
    assert_eq!(outputs, vec!["h", "he", "he=", "heɛ"]);
}

#[test]
fn test_double_escape_progression() {
    let mut kb = KeyboardState::new(Lang::En);
    assert_eq!(kb.handle_input("a="), "a=");
    assert_eq!(kb.handle_input("a=="), "a==");
    assert_eq!(kb.handle_input("a==n"), "añ");
}

#[test]
fn test_type_greetings() {
    assert_eq!(type_text("=Eya=d=e"), "Ɛyaɖɛ");
    assert_eq!(type_text("=D=o=oz=i"), "Ɖɔɔzɩ");
    assert_eq!(type_text("=Es=o=ol=i"), "Ɛsɔɔlɩ");
}

#[test]
fn test_escape_roundtrip_sentence() {
    let text = "Ɛyaɖɛ, ŋ ñ Ñ ƔƖƱ!";
    assert_eq!(type_text(&to_escape_sequence(text)), text);
}

#[test]
fn test_keyboard_copy_flow() {
    let mut kb = KeyboardState::new(Lang::Fr);
    let mut clipboard = MemoryClipboard::new();
    kb.open();
    kb.type_str("=Eya=d=e");
    kb.insert_char('!');
    assert!(kb.copy_to_clipboard(&mut clipboard, Instant::now()));
    assert_eq!(clipboard.get_text(), Some("Ɛyaɖɛ!"));
}
