//! Stateful widgets of the landing page

pub mod keyboard;
pub mod lesson;
pub mod newsletter;

pub use keyboard::KeyboardState;
pub use lesson::{Lesson, SampleLesson};
pub use newsletter::{NewsletterError, NewsletterSignup, SubmissionStatus};
