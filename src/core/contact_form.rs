use crate::adapters::sink::TracingSink;
use crate::domain::model::ContactSubmission;
use crate::domain::ports::SubmissionSink;
use crate::utils::validation::is_email_shape;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// How long the submission confirmation stays visible.
pub const CONFIRMATION_RESET_DELAY: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    /// Minimum length in characters, for fields that have one.
    pub fn min_length(&self) -> Option<usize> {
        match self {
            ContactField::Name => Some(2),
            ContactField::Email => None,
            ContactField::Subject => Some(5),
            ContactField::Message => Some(10),
        }
    }

    fn index(&self) -> usize {
        match self {
            ContactField::Name => 0,
            ContactField::Email => 1,
            ContactField::Subject => 2,
            ContactField::Message => 3,
        }
    }

    /// 依欄位規則檢查值；空值只回報 `Required`
    pub fn check(&self, value: &str) -> Vec<FieldError> {
        if value.is_empty() {
            return vec![FieldError::Required { field: *self }];
        }

        let mut errors = Vec::new();
        if let Some(required) = self.min_length() {
            let actual = value.chars().count();
            if actual < required {
                errors.push(FieldError::MinLength {
                    field: *self,
                    required,
                    actual,
                });
            }
        }
        if *self == ContactField::Email && !is_email_shape(value) {
            errors.push(FieldError::Email { field: *self });
        }
        errors
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum FieldError {
    Required {
        field: ContactField,
    },
    MinLength {
        field: ContactField,
        required: usize,
        actual: usize,
    },
    Email {
        field: ContactField,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required { field } => write!(f, "{} is required", field.label()),
            FieldError::MinLength {
                field, required, ..
            } => write!(f, "{} must be at least {} characters", field.label(), required),
            FieldError::Email { .. } => f.write_str("Please enter a valid email address"),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct FieldState {
    value: String,
    touched: bool,
    dirty: bool,
}

/// Per-field state handed to the render layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: ContactField,
    pub value: String,
    pub valid: bool,
    pub errors: Vec<String>,
    pub touched: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitState {
    Idle,
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted(ContactSubmission),
    Rejected { invalid_fields: Vec<ContactField> },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// `submitted` flag shared with the pending reset task.
///
/// Only `ContactForm::submit` moves it to `Submitted`; only the reset task
/// scheduled by the latest submit moves it back to `Idle`.
struct Confirmation {
    state: watch::Sender<SubmitState>,
    epoch: AtomicU64,
}

impl Confirmation {
    fn new() -> Self {
        let (state, _) = watch::channel(SubmitState::Idle);
        Self {
            state,
            epoch: AtomicU64::new(0),
        }
    }

    fn raise(&self) -> u64 {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(SubmitState::Submitted);
        epoch
    }

    fn clear_if_current(&self, epoch: u64) -> bool {
        self.state.send_if_modified(|state| {
            // 之後又有新的提交，保留新的確認訊息
            if self.epoch.load(Ordering::SeqCst) != epoch || *state == SubmitState::Idle {
                return false;
            }
            *state = SubmitState::Idle;
            true
        })
    }
}

pub struct ContactForm<S: SubmissionSink = TracingSink> {
    fields: [FieldState; 4],
    sink: S,
    confirmation: Arc<Confirmation>,
    reset_task: Option<JoinHandle<()>>,
}

impl ContactForm<TracingSink> {
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl Default for ContactForm<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SubmissionSink> ContactForm<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            fields: Default::default(),
            sink,
            confirmation: Arc::new(Confirmation::new()),
            reset_task: None,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let state = &mut self.fields[field.index()];
        state.value = value.into();
        state.dirty = true;
    }

    pub fn mark_touched(&mut self, field: ContactField) {
        self.fields[field.index()].touched = true;
    }

    pub fn value(&self, field: ContactField) -> &str {
        &self.fields[field.index()].value
    }

    pub fn errors(&self, field: ContactField) -> Vec<FieldError> {
        field.check(self.value(field))
    }

    pub fn is_field_valid(&self, field: ContactField) -> bool {
        self.errors(field).is_empty()
    }

    pub fn is_touched(&self, field: ContactField) -> bool {
        self.fields[field.index()].touched
    }

    pub fn is_dirty(&self, field: ContactField) -> bool {
        self.fields[field.index()].dirty
    }

    pub fn invalid_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| !self.is_field_valid(*field))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_fields().is_empty()
    }

    pub fn is_submitted(&self) -> bool {
        *self.confirmation.state.borrow() == SubmitState::Submitted
    }

    pub fn submit_state(&self) -> SubmitState {
        *self.confirmation.state.borrow()
    }

    /// Watch the `submitted` flag; every transition is published immediately.
    pub fn subscribe_submitted(&self) -> watch::Receiver<SubmitState> {
        self.confirmation.state.subscribe()
    }

    pub fn field_view(&self, field: ContactField) -> FieldView {
        let state = &self.fields[field.index()];
        let errors = self.errors(field);
        FieldView {
            field,
            value: state.value.clone(),
            valid: errors.is_empty(),
            errors: errors.iter().map(ToString::to_string).collect(),
            touched: state.touched,
            dirty: state.dirty,
        }
    }

    /// Submits the form when every field is valid.
    ///
    /// On success the submission is reported to the sink, the fields are
    /// cleared, and the confirmation flag is raised until
    /// [`CONFIRMATION_RESET_DELAY`] has elapsed. An invalid form is left
    /// untouched.
    pub fn submit(&mut self) -> SubmitOutcome {
        let invalid_fields = self.invalid_fields();
        if !invalid_fields.is_empty() {
            return SubmitOutcome::Rejected { invalid_fields };
        }

        let submission = ContactSubmission {
            name: self.value(ContactField::Name).to_string(),
            email: self.value(ContactField::Email).to_string(),
            subject: self.value(ContactField::Subject).to_string(),
            message: self.value(ContactField::Message).to_string(),
            submitted_at: chrono::Utc::now(),
        };
        self.sink.report(&submission);

        let epoch = self.confirmation.raise();
        self.reset();
        self.schedule_reset(epoch);

        SubmitOutcome::Accepted(submission)
    }

    /// Clears values and interaction flags. The confirmation flag is not affected.
    pub fn reset(&mut self) {
        self.fields = Default::default();
    }

    fn schedule_reset(&mut self, epoch: u64) {
        if let Some(previous) = self.reset_task.take() {
            previous.abort();
        }

        // 截止時間在提交當下決定，而非任務首次執行時
        let deadline = Instant::now() + CONFIRMATION_RESET_DELAY;
        let confirmation = Arc::clone(&self.confirmation);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                self.reset_task = Some(handle.spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    if confirmation.clear_if_current(epoch) {
                        tracing::debug!("Contact confirmation reset");
                    }
                }));
            }
            Err(_) => {
                tracing::warn!("No async runtime available; contact confirmation will not auto-reset");
            }
        }
    }
}

impl<S: SubmissionSink> Drop for ContactForm<S> {
    fn drop(&mut self) {
        if let Some(task) = self.reset_task.take() {
            task.abort();
        }
    }
}
