//! Kabiyè en poche - terminal front-end

use kabiye::config::{load_config, save_config};
use kabiye::core::charset::palette;
use kabiye::platform::audio::SystemPlayer;
use kabiye::platform::clipboard::default_clipboard;
use kabiye::ui::panels::{render_keyboard, render_lesson, render_newsletter, render_page};
use kabiye::ui::{Command, HELP};
use kabiye::widgets::newsletter::{send_stub, NewsletterError};
use kabiye::widgets::{KeyboardState, NewsletterSignup, SampleLesson};
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Work item for the background worker
enum WorkItem {
    /// Newsletter delivery (email)
    Subscribe(String),
}

fn main() {
    // logging (warn and above unless RUST_LOG says otherwise)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config = load_config();
    let mut lang = config.resolve_lang();

    let mut keyboard = KeyboardState::new(lang).with_copied_reset_ms(config.copied_reset_ms);
    let mut lesson = SampleLesson::new(lang);
    let mut signup = NewsletterSignup::new(Duration::from_millis(config.submit_delay_ms));
    let mut clipboard = default_clipboard();
    let mut player = SystemPlayer::new(config.asset_base.clone());

    // Worker thread: the artificial submission delay runs off the input loop
    let (work_tx, work_rx) = mpsc::channel::<WorkItem>();
    let (done_tx, done_rx) = mpsc::channel::<Result<(), NewsletterError>>();
    let delay = signup.delay();
    thread::spawn(move || {
        while let Ok(item) = work_rx.recv() {
            match item {
                WorkItem::Subscribe(email) => {
                    let result = send_stub(&email, delay);
                    if done_tx.send(result).is_err() {
                        break;
                    }
                }
            }
        }
    });

    println!("{}", render_page(lang, &lesson, &signup));
    println!();
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        while let Ok(result) = done_rx.try_recv() {
            signup.complete(result);
            println!("{}", render_newsletter(&signup, lang));
        }

        print!("{} ", if keyboard.is_open() { "kb>" } else { ">" });
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                log::error!("stdin read failed: {}", e);
                break;
            }
            None => break,
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Page => println!("{}", render_page(lang, &lesson, &signup)),
            Command::OpenKeyboard => {
                keyboard.open();
                println!("{}", render_keyboard(&keyboard, Instant::now()));
            }
            Command::CloseKeyboard => keyboard.close(),
            Command::Type(keys) => {
                if !keyboard.is_open() {
                    println!("(:kb to open the keyboard, :help for commands)");
                    continue;
                }
                keyboard.type_str(&keys);
                println!("{}", keyboard.text());
            }
            Command::Palette(n) => {
                if let Some(c) = palette().nth(n) {
                    keyboard.insert_char(c);
                    println!("{}", keyboard.text());
                }
            }
            Command::Backspace => {
                keyboard.backspace();
                println!("{}", keyboard.text());
            }
            Command::Clear => keyboard.clear(),
            Command::Copy => {
                let now = Instant::now();
                keyboard.copy_to_clipboard(clipboard.as_mut(), now);
                println!("<{}>", keyboard.copy_label(now));
            }
            Command::ToggleLang => {
                lang = lang.toggle();
                keyboard.set_lang(lang);
                lesson.set_lang(lang);
                config.lang = Some(lang);
                if let Err(e) = save_config(&config) {
                    log::error!("config save failed: {}", e);
                }
                println!("{}", render_page(lang, &lesson, &signup));
            }
            Command::Lesson => println!("{}", render_lesson(&lesson)),
            Command::NextLesson => {
                lesson.next_lesson();
                println!("{}", render_lesson(&lesson));
            }
            Command::ToggleTranslation => {
                lesson.toggle_translation();
                println!("{}", render_lesson(&lesson));
            }
            Command::PlayAudio => lesson.play_audio(&mut player),
            Command::Subscribe(email) => {
                signup.set_email(email);
                match signup.begin_submit() {
                    Ok(email) => {
                        if work_tx.send(WorkItem::Subscribe(email)).is_err() {
                            signup.complete(Err(NewsletterError::SubmissionFailed(
                                "worker stopped".into(),
                            )));
                        }
                    }
                    Err(e) => log::warn!("newsletter: {}", e),
                }
                println!("{}", render_newsletter(&signup, lang));
            }
            Command::Unknown(cmd) => println!("unknown command: {} (:help)", cmd),
        }
    }
}
