mod message;

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use thiserror::Error;

use crate::config::ContactConfig;

pub use message::{CollaboratorError, MessageComposer, OutgoingMessage};

static NEXT_ACK: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Standard,
    Strategist,
}

impl Mode {
    pub fn fields(self) -> &'static [Field] {
        match self {
            Mode::Standard => &STANDARD_FIELDS,
            Mode::Strategist => &STRATEGIST_STEPS,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Mode::Standard => "Standard Terminal",
            Mode::Strategist => "Strategist Engine",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Subject,
    Name,
    Message,
    Mission,
    Scope,
    Constraints,
}

pub const STANDARD_FIELDS: [Field; 3] = [Field::Subject, Field::Name, Field::Message];
pub const STRATEGIST_STEPS: [Field; 3] = [Field::Mission, Field::Scope, Field::Constraints];

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Subject => "Subject",
            Field::Name => "Your Name",
            Field::Message => "Message",
            Field::Mission => "The Mission",
            Field::Scope => "The Scope",
            Field::Constraints => "The Constraints",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Subject => "Subject",
            Field::Name => "Your Name",
            Field::Message => "How can I help you operationalize intelligence?",
            Field::Mission => "What is the core objective or problem you are solving?",
            Field::Scope => "What are the key deliverables or areas of focus?",
            Field::Constraints => "Timeline, budget hints, or technical limitations?",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .copied()
        .map(Field::label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required fields: {}", field_list(.0))]
    MissingFields(Vec<Field>),
    #[error("the brief can only be sent from the last step")]
    NotFinalStep,
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

/// In-progress input for the contact dialog. The strategist wizard walks
/// `STRATEGIST_STEPS` one field at a time; standard mode is a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    mode: Mode,
    step: usize,
    values: BTreeMap<Field, String>,
    invalid: BTreeSet<Field>,
}

impl FormState {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switching modes restarts the wizard so the step stays in range.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.step = 0;
            self.invalid.clear();
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        match self.mode {
            Mode::Standard => 1,
            Mode::Strategist => STRATEGIST_STEPS.len(),
        }
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 == self.total_steps()
    }

    /// The single field shown on the current wizard step.
    pub fn current_field(&self) -> Option<Field> {
        match self.mode {
            Mode::Standard => None,
            Mode::Strategist => STRATEGIST_STEPS.get(self.step).copied(),
        }
    }

    pub fn next(&mut self) -> bool {
        if self.is_last_step() {
            return false;
        }
        self.step += 1;
        true
    }

    pub fn prev(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.invalid.remove(&field);
        self.values.insert(field, value.into());
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    /// Marks every blank field of the active mode so the view can cue it inline.
    pub fn validate(&mut self) -> Result<(), ContactError> {
        let missing = self
            .mode
            .fields()
            .iter()
            .copied()
            .filter(|f| self.value(*f).trim().is_empty())
            .collect::<Vec<_>>();
        self.invalid = missing.iter().copied().collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContactError::MissingFields(missing))
        }
    }

    pub fn compose(&self, config: &ContactConfig) -> OutgoingMessage {
        let name = self.value(Field::Name).trim();
        let (subject, content) = match self.mode {
            Mode::Standard => (
                self.value(Field::Subject).trim().to_string(),
                self.value(Field::Message).trim().to_string(),
            ),
            Mode::Strategist => {
                let subject = match self.value(Field::Subject).trim() {
                    "" => config.strategist_subject.clone(),
                    s => s.to_string(),
                };
                let brief = message::strategist_brief(
                    self.value(Field::Mission).trim(),
                    self.value(Field::Scope).trim(),
                    self.value(Field::Constraints).trim(),
                );
                (subject, brief)
            }
        };
        OutgoingMessage {
            recipient: config.recipient.clone(),
            subject,
            body: message::letter(&config.greeting_name, &content, name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AckTicket(u64);

/// A transient "done" flag. Only the most recent raise may lower it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Acknowledgment {
    current: Option<u64>,
}

impl Acknowledgment {
    pub fn raise(&mut self) -> AckTicket {
        let id = NEXT_ACK.fetch_add(1, Ordering::Relaxed);
        self.current = Some(id);
        AckTicket(id)
    }

    pub fn expire(&mut self, ticket: AckTicket) -> bool {
        if self.current == Some(ticket.0) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn is_raised(&self) -> bool {
        self.current.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSession {
    pub form: FormState,
    copied: Acknowledgment,
    notice: Option<String>,
    submitted: bool,
}

impl ContactSession {
    /// Validates, composes and hands the message to `composer`. On any failure the
    /// entered values are left as they were.
    pub fn submit(
        &mut self,
        composer: &dyn MessageComposer,
        config: &ContactConfig,
    ) -> Result<OutgoingMessage, ContactError> {
        if !self.form.is_last_step() {
            return Err(ContactError::NotFinalStep);
        }
        if let Err(e) = self.form.validate() {
            log::warn!("contact submit blocked: {e}");
            return Err(e);
        }
        let message = self.form.compose(config);
        if let Err(e) = composer.compose(&message) {
            log::warn!("couldn't hand off message: {e}");
            self.notice = Some(e.to_string());
            return Err(e.into());
        }
        log::debug!("composed message {:?}", message.subject);
        self.notice = None;
        self.submitted = true;
        Ok(message)
    }

    pub fn prefill_subject(&mut self, subject: impl Into<String>) {
        self.form.set_value(Field::Subject, subject);
    }

    pub fn copy_succeeded(&mut self) -> AckTicket {
        self.notice = None;
        self.copied.raise()
    }

    pub fn copy_failed(&mut self, error: CollaboratorError) {
        log::warn!("copy failed: {error}");
        self.notice = Some(error.to_string());
    }

    /// Records the outcome of a clipboard write. Only a confirmed write raises the
    /// acknowledgment.
    pub fn copy_finished(&mut self, result: Result<(), CollaboratorError>) -> Option<AckTicket> {
        match result {
            Ok(()) => Some(self.copy_succeeded()),
            Err(e) => {
                self.copy_failed(e);
                None
            }
        }
    }

    pub fn expire_copied(&mut self, ticket: AckTicket) -> bool {
        self.copied.expire(ticket)
    }

    pub fn is_copied(&self) -> bool {
        self.copied.is_raised()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }
}
