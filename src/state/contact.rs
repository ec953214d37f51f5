//! Contact form state.
//!
//! Holds the four form fields, the submission status and the timer that
//! returns a shown status to idle. Delivery itself happens elsewhere: `submit`
//! hands back a [`Submission`] for the caller to dispatch and `complete` takes
//! the outcome.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{info, warn};
use uuid::Uuid;

use crate::relay::{RelayError, RelayMessage};

pub const SUCCESS_MESSAGE: &str = "Thanks for reaching out! I'll get back to you soon.";
pub const ERROR_MESSAGE: &str =
    "Sorry, something went wrong while sending your message. Please try again or email me directly.";

/// How long a success or error status stays visible.
pub const STATUS_DISPLAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Required fields that are still empty, in form order.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Success(m) | SubmissionStatus::Error(m) => Some(m),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionStatus::Idle)
    }
}

/// Identifies one accepted submit, so its outcome can be matched up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A submission ready for dispatch.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    pub message: RelayMessage,
}

/// Which part of the form has keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormFocus {
    #[default]
    Name,
    Email,
    Subject,
    Message,
    Send,
}

impl FormFocus {
    pub fn next(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Email,
            FormFocus::Email => FormFocus::Subject,
            FormFocus::Subject => FormFocus::Message,
            FormFocus::Message => FormFocus::Send,
            FormFocus::Send => FormFocus::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Send,
            FormFocus::Email => FormFocus::Name,
            FormFocus::Subject => FormFocus::Email,
            FormFocus::Message => FormFocus::Subject,
            FormFocus::Send => FormFocus::Message,
        }
    }

    /// The input under focus, or `None` for the send button.
    pub fn field(self) -> Option<Field> {
        match self {
            FormFocus::Name => Some(Field::Name),
            FormFocus::Email => Some(Field::Email),
            FormFocus::Subject => Some(Field::Subject),
            FormFocus::Message => Some(Field::Message),
            FormFocus::Send => None,
        }
    }
}

/// A scheduled return to idle. Replacing it invalidates the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StatusClear {
    due: Instant,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
    in_flight: Option<SubmissionId>,
    pending_clear: Option<StatusClear>,
    /// Highlighted input or button.
    pub focus: FormFocus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the send affordance is enabled.
    pub fn can_submit(&self) -> bool {
        self.in_flight.is_none()
    }

    /// When the visible status will return to idle, if one is scheduled.
    pub fn status_clear_due(&self) -> Option<Instant> {
        self.pending_clear.map(|c| c.due)
    }

    /// Replaces a field's value.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        let mut value = self.fields.get(field).to_owned();
        value.push(c);
        self.update_field(field, value);
    }

    /// Removes the last character of a field.
    ///
    /// Returns `true` if a character was removed.
    pub fn pop_char(&mut self, field: Field) -> bool {
        let mut value = self.fields.get(field).to_owned();
        let removed = value.pop().is_some();
        self.update_field(field, value);
        removed
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Starts a submission addressed to `to_email`.
    ///
    /// Returns `None` without touching any state while another submission is
    /// in flight. Required fields are checked by the caller.
    pub fn submit(&mut self, to_email: &str) -> Option<Submission> {
        if let Some(current) = self.in_flight {
            warn!(submission = %current, "submit ignored, delivery already in flight");
            return None;
        }

        self.status = SubmissionStatus::Idle;
        self.pending_clear = None;

        let id = SubmissionId::new();
        self.in_flight = Some(id);
        info!(submission = %id, "contact submission started");

        Some(Submission {
            id,
            message: RelayMessage {
                to_email: to_email.to_owned(),
                from_name: self.fields.name.clone(),
                from_email: self.fields.email.clone(),
                subject: self.fields.subject.clone(),
                message: self.fields.message.clone(),
                reply_to: self.fields.email.clone(),
                sent_at: chrono::Local::now().to_rfc3339(),
            },
        })
    }

    /// Records the outcome of submission `id`.
    ///
    /// Returns `false` if `id` is not the submission in flight.
    pub fn complete(
        &mut self,
        id: SubmissionId,
        result: Result<(), RelayError>,
        now: Instant,
    ) -> bool {
        if self.in_flight != Some(id) {
            warn!(submission = %id, "dropping outcome of unknown submission");
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(()) => {
                info!(submission = %id, "contact message delivered");
                self.status = SubmissionStatus::Success(SUCCESS_MESSAGE.into());
                self.fields = ContactFields::default();
                self.focus = FormFocus::Name;
            }
            Err(e) => {
                warn!(submission = %id, error = %e, "contact message delivery failed");
                self.status = SubmissionStatus::Error(ERROR_MESSAGE.into());
            }
        }

        self.pending_clear = Some(StatusClear {
            due: now + STATUS_DISPLAY,
        });
        true
    }

    /// Fires the status clear if it is due.
    ///
    /// Returns `true` if the status went back to idle.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_clear {
            Some(clear) if now >= clear.due => {
                self.pending_clear = None;
                self.status = SubmissionStatus::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: &str = "owner@example.com";

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Ava");
        form.update_field(Field::Email, "a@x.com");
        form.update_field(Field::Subject, "Hi");
        form.update_field(Field::Message, "Hello");
        form
    }

    fn rejected() -> RelayError {
        RelayError::Rejected {
            status: 400,
            body: "bad template".into(),
        }
    }

    #[test]
    fn test_new_is_empty_and_idle() {
        let form = ContactForm::new();
        assert!(form.fields().is_empty());
        assert!(form.status().is_idle());
        assert!(!form.is_in_flight());
        assert!(form.can_submit());
        assert_eq!(form.fields().missing(), Field::ALL.to_vec());
    }

    #[test]
    fn test_update_field_replaces_value() {
        let mut form = ContactForm::new();
        form.update_field(Field::Subject, "first");
        form.update_field(Field::Subject, "second");
        assert_eq!(form.fields().subject, "second");
        assert_eq!(form.fields().missing(), vec![Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut form = ContactForm::new();
        form.push_char(Field::Name, 'A');
        form.push_char(Field::Name, 'v');
        assert_eq!(form.fields().name, "Av");
        assert!(form.pop_char(Field::Name));
        assert!(form.pop_char(Field::Name));
        assert!(!form.pop_char(Field::Name));
    }

    #[test]
    fn test_whitespace_field_is_missing() {
        let mut form = filled();
        form.update_field(Field::Email, "   ");
        assert_eq!(form.fields().missing(), vec![Field::Email]);
    }

    #[test]
    fn test_submit_snapshots_fields() {
        let mut form = filled();
        let submission = form.submit(OWNER).unwrap();

        assert!(form.is_in_flight());
        assert!(!form.can_submit());
        assert_eq!(submission.message.to_email, OWNER);
        assert_eq!(submission.message.from_name, "Ava");
        assert_eq!(submission.message.from_email, "a@x.com");
        assert_eq!(submission.message.reply_to, "a@x.com");
        assert_eq!(submission.message.subject, "Hi");
        assert_eq!(submission.message.message, "Hello");
    }

    #[test]
    fn test_submit_while_in_flight_is_noop() {
        let mut form = filled();
        let first = form.submit(OWNER).unwrap();

        assert!(form.submit(OWNER).is_none());
        assert!(form.is_in_flight());
        assert!(form.status().is_idle());

        // The first submission can still complete
        assert!(form.complete(first.id, Ok(()), Instant::now()));
    }

    #[test]
    fn test_success_resets_fields() {
        let mut form = filled();
        let now = Instant::now();
        let submission = form.submit(OWNER).unwrap();

        assert!(form.complete(submission.id, Ok(()), now));
        assert_eq!(form.status(), &SubmissionStatus::Success(SUCCESS_MESSAGE.into()));
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(!form.is_in_flight());
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        let now = Instant::now();
        let submission = form.submit(OWNER).unwrap();

        assert!(form.complete(submission.id, Err(rejected()), now));
        assert_eq!(form.status(), &SubmissionStatus::Error(ERROR_MESSAGE.into()));
        assert_eq!(form.fields().name, "Ava");
        assert_eq!(form.fields().email, "a@x.com");
        assert_eq!(form.fields().subject, "Hi");
        assert_eq!(form.fields().message, "Hello");
        assert!(!form.is_in_flight());
    }

    #[test]
    fn test_error_message_hides_failure_detail() {
        let mut form = filled();
        let submission = form.submit(OWNER).unwrap();
        form.complete(submission.id, Err(rejected()), Instant::now());
        assert!(!form.status().message().unwrap().contains("bad template"));
    }

    #[test]
    fn test_unknown_outcome_is_ignored() {
        let mut form = filled();
        form.submit(OWNER).unwrap();

        assert!(!form.complete(SubmissionId::new(), Ok(()), Instant::now()));
        assert!(form.is_in_flight());
        assert_eq!(form.fields().name, "Ava");
    }

    #[test]
    fn test_status_clears_after_exactly_five_seconds() {
        let mut form = filled();
        let t0 = Instant::now();
        let submission = form.submit(OWNER).unwrap();
        form.complete(submission.id, Ok(()), t0);
        assert_eq!(form.status_clear_due(), Some(t0 + STATUS_DISPLAY));

        assert!(!form.tick(t0 + Duration::from_millis(4999)));
        assert!(!form.status().is_idle());

        assert!(form.tick(t0 + Duration::from_secs(5)));
        assert!(form.status().is_idle());
        assert_eq!(form.status_clear_due(), None);

        // Nothing left to fire
        assert!(!form.tick(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn test_new_submit_supersedes_pending_clear() {
        let mut form = filled();
        let t0 = Instant::now();
        let first = form.submit(OWNER).unwrap();
        form.complete(first.id, Err(rejected()), t0);

        // Retry three seconds later; the first clear must not fire
        let t1 = t0 + Duration::from_secs(3);
        let second = form.submit(OWNER).unwrap();
        assert!(form.status().is_idle());
        assert_eq!(form.status_clear_due(), None);

        form.complete(second.id, Ok(()), t1 + Duration::from_secs(1));
        assert!(!form.tick(t0 + Duration::from_secs(5)));
        assert_eq!(form.status(), &SubmissionStatus::Success(SUCCESS_MESSAGE.into()));

        assert!(form.tick(t1 + Duration::from_secs(6)));
        assert!(form.status().is_idle());
    }

    #[test]
    fn test_focus_cycles_through_send() {
        let mut form = ContactForm::new();
        for expected in [
            FormFocus::Email,
            FormFocus::Subject,
            FormFocus::Message,
            FormFocus::Send,
            FormFocus::Name,
        ] {
            form.focus_next();
            assert_eq!(form.focus, expected);
        }
        form.focus_prev();
        assert_eq!(form.focus, FormFocus::Send);
        assert_eq!(form.focus.field(), None);
    }
}
