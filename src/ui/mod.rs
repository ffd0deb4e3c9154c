pub mod panels;

/// Horizontal rule around the keyboard panel
pub const RULE: &str = "────────────────────────────────────────────────────────";

/// Help text for the terminal front-end
pub const HELP: &str = "\
Commands:
  :kb            open the Kabiyè keyboard (plain lines are typed into it)
  :p <n>         insert palette character n (1-16)
  :bs            delete last character
  :copy          copy the buffer to the clipboard
  :clear         clear the buffer
  :close         close the keyboard
  :lang          switch English / Français
  :lesson        show the sample lesson
  :next          next lesson word
  :tr            show / hide translation
  :play          play the word's audio
  :sub <email>   subscribe to the newsletter
  :page          show the landing page
  :help          this help
  :quit          exit";

/// Front-end command parsed from one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenKeyboard,
    Palette(usize),
    Backspace,
    Copy,
    Clear,
    CloseKeyboard,
    ToggleLang,
    Lesson,
    NextLesson,
    ToggleTranslation,
    PlayAudio,
    Subscribe(String),
    Page,
    Help,
    Quit,
    /// Keystrokes for the keyboard buffer
    Type(String),
    /// Unknown `:` command
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let Some(rest) = line.strip_prefix(':') else {
            return Command::Type(line.to_string());
        };
        let mut parts = rest.trim().splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or("");
        let arg = parts.next().unwrap_or("").trim();

        match name {
            "kb" => Command::OpenKeyboard,
            "p" => match arg.parse::<usize>() {
                Ok(n) if (1..=16).contains(&n) => Command::Palette(n - 1),
                _ => Command::Unknown(line.to_string()),
            },
            "bs" => Command::Backspace,
            "copy" => Command::Copy,
            "clear" => Command::Clear,
            "close" => Command::CloseKeyboard,
            "lang" => Command::ToggleLang,
            "lesson" => Command::Lesson,
            "next" => Command::NextLesson,
            "tr" => Command::ToggleTranslation,
            "play" => Command::PlayAudio,
            "sub" => Command::Subscribe(arg.to_string()),
            "page" => Command::Page,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}
