//! Kabiyè keyboard panel state
//!
//! Owns the input buffer. Every edit event replaces the buffer with the
//! transformer's output; palette clicks append directly.

use std::time::{Duration, Instant};

use crate::core::letter_map::{lowercase_entries, DOUBLE_ESCAPES};
use crate::core::transformer::{apply, Substitution};
use crate::i18n::{keyboard_strings, KeyboardStrings, Lang};
use crate::platform::clipboard::Clipboard;

/// How long the copy button shows "Copied!" (ms)
pub const DEFAULT_COPIED_RESET_MS: u64 = 2000;

type ChangeCallback = Box<dyn FnMut(&str) + Send>;

/// Keyboard panel state
pub struct KeyboardState {
    /// Current buffer
    text: String,
    lang: Lang,
    open: bool,
    /// Time of the last successful copy
    copied_at: Option<Instant>,
    copied_reset: Duration,
    /// Called with the new buffer after each change
    on_change: Option<ChangeCallback>,
}

impl KeyboardState {
    pub fn new(lang: Lang) -> Self {
        Self {
            text: String::new(),
            lang,
            open: false,
            copied_at: None,
            copied_reset: Duration::from_millis(DEFAULT_COPIED_RESET_MS),
            on_change: None,
        }
    }

    /// Override the "copied" feedback duration
    pub fn with_copied_reset_ms(mut self, ms: u64) -> Self {
        self.copied_reset = Duration::from_millis(ms);
        self
    }

    /// Register the buffer change callback
    pub fn set_change_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
    }

    pub fn strings(&self) -> KeyboardStrings {
        keyboard_strings(self.lang)
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the panel. The buffer is kept for the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Edit event: `raw` is the whole field content after the edit.
    /// Returns the buffer to display.
    pub fn handle_input(&mut self, raw: &str) -> &str {
        let (next, substitution) = apply(raw);
        if let Some(sub) = substitution {
            match sub {
                Substitution::Double { output } => {
                    log::debug!("double escape -> {}", output)
                }
                Substitution::Single { key, output } => {
                    log::debug!("escape ={} -> {}", key, output)
                }
            }
        }
        self.replace(next);
        &self.text
    }

    /// One keystroke appended at the end of the buffer
    pub fn type_char(&mut self, c: char) -> &str {
        let mut raw = self.text.clone();
        raw.push(c);
        self.handle_input(&raw)
    }

    /// Type several keystrokes in order
    pub fn type_str(&mut self, keys: &str) -> &str {
        for c in keys.chars() {
            self.type_char(c);
        }
        &self.text
    }

    /// Palette click: append without running the transformer
    pub fn insert_char(&mut self, c: char) {
        let mut next = self.text.clone();
        next.push(c);
        self.replace(next);
    }

    /// Delete the last character
    pub fn backspace(&mut self) {
        let mut next = self.text.clone();
        if next.pop().is_some() {
            self.replace(next);
        }
    }

    pub fn clear(&mut self) {
        self.replace(String::new());
    }

    /// Hand the buffer to the clipboard and start the "copied" window.
    ///
    /// Clipboard failures are logged and otherwise treated as success.
    /// Ignored while the "copied" window is still active (button disabled).
    pub fn copy_to_clipboard(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> bool {
        if self.is_copied(now) {
            return false;
        }
        if let Err(e) = clipboard.set_text(&self.text) {
            log::warn!("clipboard write failed: {}", e);
        }
        self.copied_at = Some(now);
        true
    }

    /// Whether the copy button is in its "copied" state at `now`
    pub fn is_copied(&self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) => now.saturating_duration_since(at) < self.copied_reset,
            None => false,
        }
    }

    /// Copy button label at `now`
    pub fn copy_label(&self, now: Instant) -> &'static str {
        let t = self.strings();
        if self.is_copied(now) {
            t.copied
        } else {
            t.copy
        }
    }

    /// Instruction panel examples: `(keys, output)` for lowercase letters, then `==n`
    pub fn examples() -> Vec<(String, char)> {
        let mut list: Vec<(String, char)> = lowercase_entries()
            .map(|(key, value)| (format!("={}", key), value))
            .collect();
        if let Some((seq, value)) = DOUBLE_ESCAPES.first() {
            list.push((seq.to_string(), *value));
        }
        list
    }

    fn replace(&mut self, next: String) {
        if next == self.text {
            return;
        }
        self.text = next;
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.text);
        }
    }
}
