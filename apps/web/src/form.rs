use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;
use std::sync::OnceLock;
use std::time::Duration;

use content::ContactSubmission;
use regex::Regex;
use tracing::debug;

use crate::timing::Debounce;

/// Status messages disappear after this long.
pub const STATUS_TTL: Duration = Duration::from_secs(5);

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

pub const FIX_ERRORS: &str = "Please fix form errors";
pub const SENT: &str = "Message sent successfully!";
pub const SEND_FAILED: &str = "Error sending message";
pub const NETWORK_ERROR: &str = "Network error. Please try again";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// Shape pattern plus an inclusive length bound, counted in characters.
#[derive(Debug)]
pub struct FieldRule {
    pattern: Regex,
    length: RangeInclusive<usize>,
    pub hint: &'static str,
}

impl FieldRule {
    fn new(pattern: &str, length: RangeInclusive<usize>, hint: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("contact form patterns are valid"),
            length,
            hint,
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        self.length.contains(&value.chars().count()) && self.pattern.is_match(value)
    }
}

/// No line terminators: `\n`, `\r`, U+2028, U+2029.
const SINGLE_LINE: &str = r"^[^\n\r\x{2028}\x{2029}]*$";

struct Rules {
    name: FieldRule,
    email: FieldRule,
    subject: FieldRule,
    message: FieldRule,
}

fn rules() -> &'static Rules {
    static RULES: OnceLock<Rules> = OnceLock::new();
    RULES.get_or_init(|| Rules {
        name: FieldRule::new(r"^[a-zA-Z\s]+$", 3..=50, "Name: 3-50 letters"),
        email: FieldRule::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", 1..=usize::MAX, "Valid email required"),
        subject: FieldRule::new(SINGLE_LINE, 5..=100, "Subject: 5-100 characters"),
        message: FieldRule::new(SINGLE_LINE, 10..=1000, "Message: 10-1000 characters"),
    })
}

pub fn rule_for(field: Field) -> &'static FieldRule {
    let rules = rules();
    match field {
        Field::Name => &rules.name,
        Field::Email => &rules.email,
        Field::Subject => &rules.subject,
        Field::Message => &rules.message,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Transient status line under the form. Showing a new message restarts
/// the clear timer.
#[derive(Debug, Clone)]
pub struct FormStatus {
    current: Option<StatusMessage>,
    clear: Debounce,
}

impl Default for FormStatus {
    fn default() -> Self {
        Self {
            current: None,
            clear: Debounce::new(STATUS_TTL),
        }
    }
}

impl FormStatus {
    pub fn show(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.current = Some(StatusMessage {
            kind,
            text: text.into(),
        });
        self.clear.call();
    }

    /// The message on display, if it has not expired yet.
    pub fn current(&mut self) -> Option<&StatusMessage> {
        if self.clear.fire_if_due() {
            self.current = None;
        }
        self.current.as_ref()
    }

    /// Waits for the clear timer and drops the message.
    pub async fn expire(&mut self) {
        if self.clear.settled().await {
            self.current = None;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub label: String,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            disabled: false,
            label: SUBMIT_LABEL.to_string(),
        }
    }
}

/// How a submission attempt ended, as far as the form is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Accepted,
    Rejected,
    Unreachable,
}

/// Contact form inputs, per-field error flags, the submit button and status.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: BTreeMap<Field, String>,
    invalid: BTreeSet<Field>,
    pub button: SubmitButton,
    pub status: FormStatus,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_flagged(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    /// Input event: stores the value and re-checks it when non-empty.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let check = !value.is_empty();
        self.values.insert(field, value);
        if check {
            self.check_field(field);
        }
    }

    /// Blur event check. Blank fields are never flagged here.
    pub fn check_field(&mut self, field: Field) -> bool {
        let value = self.value(field).trim();
        let valid = value.is_empty() || rule_for(field).matches(value);
        if valid {
            self.invalid.remove(&field);
        } else {
            self.invalid.insert(field);
        }
        valid
    }

    /// Fields failing the submit-time check, where blanks count as failures.
    pub fn failing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&field| !rule_for(field).matches(self.value(field).trim()))
            .collect()
    }

    pub fn is_submittable(&self) -> bool {
        self.failing_fields().is_empty()
    }

    /// Validates and, if everything passes, locks the button and returns
    /// the payload to send. On failure the error status is shown instead.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        let failing = self.failing_fields();
        if !failing.is_empty() {
            let hints: Vec<&str> = failing.iter().map(|&f| rule_for(f).hint).collect();
            debug!(?hints, "Contact form failed validation");
            self.invalid.extend(failing);
            self.status.show(StatusKind::Error, FIX_ERRORS);
            return None;
        }
        self.button = SubmitButton {
            disabled: true,
            label: SENDING_LABEL.to_string(),
        };
        let submission = ContactSubmission::new(
            self.value(Field::Name).trim(),
            self.value(Field::Email).trim(),
            self.value(Field::Message).trim(),
        )
        .with_subject(self.value(Field::Subject).trim());
        Some(submission)
    }

    /// Restores the button and reports the outcome; an accepted message
    /// also clears the inputs.
    pub fn finish_submit(&mut self, delivery: Delivery) {
        self.button = SubmitButton::default();
        match delivery {
            Delivery::Accepted => {
                self.values.clear();
                self.invalid.clear();
                self.status.show(StatusKind::Success, SENT);
            }
            Delivery::Rejected => self.status.show(StatusKind::Error, SEND_FAILED),
            Delivery::Unreachable => self.status.show(StatusKind::Error, NETWORK_ERROR),
        }
    }
}
