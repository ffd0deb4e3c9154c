//! Sample lesson card: cycles a fixed word list with audio

use crate::i18n::{lesson_strings, Lang, LessonStrings};
use crate::platform::audio::AudioPlayer;

/// One lesson word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub kabiye: &'static str,
    /// Translation in the display language
    pub translation: &'static str,
    /// Site-absolute audio asset path
    pub audio: &'static str,
}

static LESSONS_EN: [Lesson; 3] = [
    Lesson { kabiye: "Ɛyaɖɛ", translation: "Hello", audio: "/audio/hello.mp3" },
    Lesson { kabiye: "Ɖɔɔzɩ", translation: "Thank you", audio: "/audio/thank-you.mp3" },
    Lesson { kabiye: "Ɛsɔɔlɩ", translation: "Goodbye", audio: "/audio/goodbye.mp3" },
];

static LESSONS_FR: [Lesson; 3] = [
    Lesson { kabiye: "Ɛyaɖɛ", translation: "Bonjour", audio: "/audio/hello.mp3" },
    Lesson { kabiye: "Ɖɔɔzɩ", translation: "Merci", audio: "/audio/thank-you.mp3" },
    Lesson { kabiye: "Ɛsɔɔlɩ", translation: "Au revoir", audio: "/audio/goodbye.mp3" },
];

/// Lesson list for a language
pub fn lessons(lang: Lang) -> &'static [Lesson] {
    match lang {
        Lang::En => &LESSONS_EN,
        Lang::Fr => &LESSONS_FR,
    }
}

/// Sample lesson state
#[derive(Debug, Clone)]
pub struct SampleLesson {
    lang: Lang,
    index: usize,
    show_translation: bool,
}

impl SampleLesson {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            index: 0,
            show_translation: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static Lesson {
        let list = lessons(self.lang);
        &list[self.index % list.len()]
    }

    /// Advance to the next word (wrapping) and hide the translation
    pub fn next_lesson(&mut self) {
        self.index = (self.index + 1) % lessons(self.lang).len();
        self.show_translation = false;
    }

    pub fn toggle_translation(&mut self) {
        self.show_translation = !self.show_translation;
    }

    pub fn is_translation_shown(&self) -> bool {
        self.show_translation
    }

    /// Translation of the current word, only while shown
    pub fn translation(&self) -> Option<&'static str> {
        if self.show_translation {
            Some(self.current().translation)
        } else {
            None
        }
    }

    /// Switch language, keeping the position in the list
    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
    }

    pub fn strings(&self) -> LessonStrings {
        lesson_strings(self.lang)
    }

    /// Label of the translation toggle button
    pub fn toggle_label(&self) -> &'static str {
        let t = self.strings();
        if self.show_translation {
            t.hide_translation
        } else {
            t.show_translation
        }
    }

    /// Start playback of the current word's audio and return immediately
    pub fn play_audio(&self, player: &mut dyn AudioPlayer) {
        player.play(self.current().audio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::audio::RecordingPlayer;

    #[test]
    fn test_cycles_and_wraps() {
        let mut lesson = SampleLesson::new(Lang::En);
        assert_eq!(lesson.current().kabiye, "Ɛyaɖɛ");
        lesson.next_lesson();
        assert_eq!(lesson.current().kabiye, "Ɖɔɔzɩ");
        lesson.next_lesson();
        assert_eq!(lesson.current().kabiye, "Ɛsɔɔlɩ");
        lesson.next_lesson();
        assert_eq!(lesson.index(), 0);
        assert_eq!(lesson.current().kabiye, "Ɛyaɖɛ");
    }

    #[test]
    fn test_translation_hidden_on_advance() {
        let mut lesson = SampleLesson::new(Lang::En);
        assert_eq!(lesson.translation(), None);
        lesson.toggle_translation();
        assert_eq!(lesson.translation(), Some("Hello"));
        assert_eq!(lesson.toggle_label(), "Hide Translation");
        lesson.next_lesson();
        assert!(!lesson.is_translation_shown());
        assert_eq!(lesson.toggle_label(), "Show Translation");
    }

    #[test]
    fn test_set_lang_keeps_index() {
        let mut lesson = SampleLesson::new(Lang::En);
        lesson.next_lesson();
        lesson.set_lang(Lang::Fr);
        lesson.toggle_translation();
        assert_eq!(lesson.translation(), Some("Merci"));
    }

    #[test]
    fn test_play_audio() {
        let mut lesson = SampleLesson::new(Lang::Fr);
        let mut player = RecordingPlayer::default();
        lesson.play_audio(&mut player);
        lesson.next_lesson();
        lesson.next_lesson();
        lesson.play_audio(&mut player);
        assert_eq!(player.played, vec!["/audio/hello.mp3", "/audio/goodbye.mp3"]);
    }

    #[test]
    fn test_lists_share_words_and_audio() {
        for (en, fr) in lessons(Lang::En).iter().zip(lessons(Lang::Fr)) {
            assert_eq!(en.kabiye, fr.kabiye);
            assert_eq!(en.audio, fr.audio);
        }
    }
}
