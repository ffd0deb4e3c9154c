pub mod config;
pub mod core;
pub mod i18n;
pub mod platform;
pub mod ui;
pub mod widgets;

pub use crate::core::escape::to_escape_sequence;
pub use crate::core::transformer::{transform, transform_edit, type_text};
pub use i18n::Lang;
pub use widgets::{KeyboardState, NewsletterSignup, SampleLesson};
