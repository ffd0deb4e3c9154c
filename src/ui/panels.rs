//! Text rendering of the page sections for the terminal front-end

use std::fmt::Write;
use std::time::Instant;

use crate::core::charset::{LOWERCASE, UPPERCASE};
use crate::i18n::{
    newsletter_strings, page_strings, Lang, EXTERNAL_KEYBOARD_URL, GITHUB_URL, STORE_BADGES,
};
use crate::widgets::{KeyboardState, NewsletterSignup, SampleLesson};

use super::RULE;

/// Keyboard panel: title, instructions, examples grid, buffer, palette, copy button
pub fn render_keyboard(kb: &KeyboardState, now: Instant) -> String {
    let t = kb.strings();
    let mut out = String::new();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{}  [{}: {}]", t.title, t.external_keyboard, EXTERNAL_KEYBOARD_URL);
    let _ = writeln!(out, "{}", t.instruction);
    let _ = writeln!(out, "{}", t.examples);

    let examples = KeyboardState::examples();
    for row in examples.chunks(4) {
        let cells: Vec<String> = row
            .iter()
            .map(|(keys, value)| format!("{:<4}→ {}", keys, value))
            .collect();
        let _ = writeln!(out, "  {}", cells.join("   "));
    }

    let _ = writeln!(out);
    if kb.text().is_empty() {
        let _ = writeln!(out, "> ({})", t.placeholder);
    } else {
        let _ = writeln!(out, "> {}", kb.text());
    }
    let _ = writeln!(out);

    let lower: Vec<String> = LOWERCASE.iter().map(|c| c.to_string()).collect();
    let upper: Vec<String> = UPPERCASE.iter().map(|c| c.to_string()).collect();
    let _ = writeln!(out, "  [{}]", lower.join("] ["));
    let _ = writeln!(out, "  [{}]", upper.join("] ["));
    let _ = writeln!(out, "  <{}>   <{}>", kb.copy_label(now), t.close);
    let _ = write!(out, "{}", RULE);
    out
}

/// Lesson card: word, optional translation, buttons
pub fn render_lesson(lesson: &SampleLesson) -> String {
    let t = lesson.strings();
    let mut out = String::new();
    let _ = writeln!(out, "{}", t.title);
    let _ = writeln!(out, "  {}", lesson.current().kabiye);
    if let Some(translation) = lesson.translation() {
        let _ = writeln!(out, "  {}", translation);
    }
    let _ = write!(out, "  <♪>  <{}>  <{}>", lesson.toggle_label(), t.next_word);
    out
}

/// Newsletter box
pub fn render_newsletter(signup: &NewsletterSignup, lang: Lang) -> String {
    let t = newsletter_strings(lang);
    let mut out = String::new();
    let _ = writeln!(out, "{}", t.title);
    let _ = writeln!(out, "{}", t.description);
    let email = if signup.email().is_empty() {
        format!("({})", t.placeholder)
    } else {
        signup.email().to_string()
    };
    let _ = write!(out, "  {}  <{}>", email, signup.button_label(lang));
    if let Some(message) = signup.message(lang) {
        let _ = write!(out, "\n  {}", message);
    }
    out
}

/// Full landing page, top to bottom
pub fn render_page(lang: Lang, lesson: &SampleLesson, signup: &NewsletterSignup) -> String {
    let t = page_strings(lang);
    let badges = format!("  <{}>  <{}>", STORE_BADGES[0], STORE_BADGES[1]);
    let mut out = String::new();
    let _ = writeln!(out, "{}   [{}]", t.title, lang.switch_label());
    let _ = writeln!(out, "{}", t.subtitle);
    let _ = writeln!(out, "{}", badges);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", t.discover_title);
    let _ = writeln!(out, "{}", t.discover_text);
    for feature in t.features {
        let _ = writeln!(out, "  • {}", feature);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", t.why_choose);
    for card in t.why_cards {
        let _ = writeln!(out, "  {}", card.title);
        let _ = writeln!(out, "    {}", card.description);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", t.sample_lesson);
    let _ = writeln!(out, "{}", render_lesson(lesson));
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", t.join_community);
    let _ = writeln!(out, "{}", t.community_text);
    let _ = writeln!(out, "  <{}: {}>  <{}>", t.view_github, GITHUB_URL, t.join_us);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", render_newsletter(signup, lang));
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", t.ready_to_start);
    let _ = writeln!(out, "{}", t.download_now);
    let _ = write!(out, "{}", badges);
    out
}
