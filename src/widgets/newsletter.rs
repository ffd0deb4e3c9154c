//! Newsletter signup stub
//!
//! No network call is made: submission waits a fixed delay and always
//! resolves to success.

use std::thread;
use std::time::Duration;

use crate::i18n::{newsletter_strings, Lang};

/// Artificial submission delay (ms)
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

/// Submission status shown under the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    /// Reserved; the stub never fails
    Error,
}

/// Submission rejected before it started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsletterError {
    /// Email does not look like an address
    InvalidEmail(String),
    /// A submission is already in flight
    AlreadySubmitting,
    /// Delivery failed (not produced by the stub)
    SubmissionFailed(String),
}

impl std::fmt::Display for NewsletterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NewsletterError::InvalidEmail(s) => write!(f, "invalid email address: {:?}", s),
            NewsletterError::AlreadySubmitting => write!(f, "submission already in progress"),
            NewsletterError::SubmissionFailed(s) => write!(f, "submission failed: {}", s),
        }
    }
}

impl std::error::Error for NewsletterError {}

/// Same shape check as a browser `type="email"` field: `local@domain`,
/// no whitespace, domain labels non-empty.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

/// Stand-in for the delivery call: waits `delay`, then succeeds
pub fn send_stub(email: &str, delay: Duration) -> Result<(), NewsletterError> {
    log::debug!("newsletter stub: waiting {:?} for {}", delay, email);
    thread::sleep(delay);
    Ok(())
}

/// Newsletter form state
#[derive(Debug, Clone)]
pub struct NewsletterSignup {
    email: String,
    status: SubmissionStatus,
    delay: Duration,
}

impl Default for NewsletterSignup {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS))
    }
}

impl NewsletterSignup {
    pub fn new(delay: Duration) -> Self {
        Self {
            email: String::new(),
            status: SubmissionStatus::Idle,
            delay,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Validate and enter `Loading`. Returns the email to deliver.
    pub fn begin_submit(&mut self) -> Result<String, NewsletterError> {
        if self.status == SubmissionStatus::Loading {
            return Err(NewsletterError::AlreadySubmitting);
        }
        let email = self.email.trim().to_string();
        if !is_valid_email(&email) {
            return Err(NewsletterError::InvalidEmail(email));
        }
        self.status = SubmissionStatus::Loading;
        log::info!("newsletter: submitting");
        Ok(email)
    }

    /// Finish a submission started with [`begin_submit`](Self::begin_submit)
    pub fn complete(&mut self, result: Result<(), NewsletterError>) {
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.email.clear();
                log::info!("newsletter: subscribed");
            }
            Err(e) => {
                self.status = SubmissionStatus::Error;
                log::error!("newsletter: {}", e);
            }
        }
    }

    /// Full blocking submission: validate, wait the fixed delay, succeed
    pub fn submit(&mut self) -> Result<(), NewsletterError> {
        let email = self.begin_submit()?;
        let result = send_stub(&email, self.delay);
        self.complete(result);
        Ok(())
    }

    /// Submit button label
    pub fn button_label(&self, lang: Lang) -> &'static str {
        if self.status == SubmissionStatus::Loading {
            "..."
        } else {
            newsletter_strings(lang).button
        }
    }

    /// Status message under the form, if any
    pub fn message(&self, lang: Lang) -> Option<&'static str> {
        let t = newsletter_strings(lang);
        match self.status {
            SubmissionStatus::Success => Some(t.success),
            SubmissionStatus::Error => Some(t.error),
            SubmissionStatus::Idle | SubmissionStatus::Loading => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_signup() -> NewsletterSignup {
        NewsletterSignup::new(Duration::ZERO)
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("ama@example.tg"));
        assert!(is_valid_email("a.b+c@sub.example.com"));
        assert!(is_valid_email("user@localhost"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@.example.com"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn test_dotless_domain_accepted_like_browser() {
        let mut signup = instant_signup();
        signup.set_email("user@localhost");
        assert_eq!(signup.submit(), Ok(()));
        assert_eq!(signup.status(), SubmissionStatus::Success);

        signup.set_email("user@localhost.");
        assert!(matches!(signup.submit(), Err(NewsletterError::InvalidEmail(_))));
    }

    #[test]
    fn test_submit_success_clears_email() {
        let mut signup = instant_signup();
        signup.set_email("kodjo@example.tg");
        signup.submit().unwrap();
        assert_eq!(signup.status(), SubmissionStatus::Success);
        assert_eq!(signup.email(), "");
        assert_eq!(signup.message(Lang::En), Some("Thank you for subscribing!"));
    }

    #[test]
    fn test_invalid_email_stays_idle() {
        let mut signup = instant_signup();
        signup.set_email("not an email");
        let err = signup.submit().unwrap_err();
        assert!(matches!(err, NewsletterError::InvalidEmail(_)));
        assert_eq!(signup.status(), SubmissionStatus::Idle);
        assert_eq!(signup.email(), "not an email");
        assert_eq!(signup.message(Lang::En), None);
    }

    #[test]
    fn test_loading_blocks_second_submit() {
        let mut signup = instant_signup();
        signup.set_email("a@b.tg");
        signup.begin_submit().unwrap();
        assert_eq!(signup.status(), SubmissionStatus::Loading);
        assert_eq!(signup.button_label(Lang::Fr), "...");
        assert_eq!(signup.begin_submit(), Err(NewsletterError::AlreadySubmitting));
        signup.complete(Ok(()));
        assert_eq!(signup.button_label(Lang::Fr), "S'abonner");
    }

    #[test]
    fn test_error_state_message() {
        let mut signup = instant_signup();
        signup.set_email("a@b.tg");
        signup.begin_submit().unwrap();
        signup.complete(Err(NewsletterError::SubmissionFailed("offline".into())));
        assert_eq!(signup.status(), SubmissionStatus::Error);
        assert_eq!(signup.email(), "a@b.tg");
        assert_eq!(
            signup.message(Lang::Fr),
            Some("Une erreur s'est produite. Veuillez réessayer.")
        );
    }

    #[test]
    fn test_resubmit_after_success() {
        let mut signup = instant_signup();
        signup.set_email("a@b.tg");
        signup.submit().unwrap();
        signup.set_email("c@d.tg");
        signup.submit().unwrap();
        assert_eq!(signup.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_submit_waits_delay() {
        let mut signup = NewsletterSignup::new(Duration::from_millis(20));
        signup.set_email(" padded@example.tg ");
        let start = std::time::Instant::now();
        signup.submit().unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
