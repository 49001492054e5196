//! Contact form submission lifecycle.
//!
//! `Idle|Error -> Sending -> Success|Error`, and `Success -> Idle` once
//! [`SUCCESS_HOLD`] has elapsed. The delivery call itself sits behind
//! [`EmailSender`] so the lifecycle can run against a substitute.

use crate::error::{DeliveryError, SubmitError};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

pub const SUCCESS_HOLD: Duration = Duration::from_secs(3);
pub const FAILURE_MESSAGE: &str = "Failed to send. Please try again.";
pub const SUCCESS_MESSAGE: &str = "MESSAGE SENT SUCCESSFULLY";
pub const CHANNEL_HINT: &str = "ENVELOPE CHANNEL READY • TYPE YOUR MESSAGE";
pub const SEALED_LABEL: &str = "ENVELOPE SEALED";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// Form fields. Field names double as the email template variables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

impl ContactMessage {
    /// First required field that is blank, in form order.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("user_name", &self.user_name),
            ("user_email", &self.user_email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// The external email-delivery boundary.
pub trait EmailSender {
    fn send(&self, message: &ContactMessage) -> impl Future<Output = Result<(), DeliveryError>>;
}

#[derive(Clone, Debug, Default)]
pub struct ContactFlow {
    state: SubmissionState,
    fields: ContactMessage,
    success_for: Duration,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactMessage {
        &mut self.fields
    }

    /// Accepts a submission attempt and returns the snapshot to deliver.
    ///
    /// Refused while a message is in flight or flying away, and when a
    /// required field is blank; a refused attempt leaves the state untouched.
    pub fn begin(&mut self) -> Result<ContactMessage, SubmitError> {
        match self.state {
            SubmissionState::Sending | SubmissionState::Success => return Err(SubmitError::Busy),
            SubmissionState::Idle | SubmissionState::Error => {}
        }
        if let Some(field) = self.fields.missing_field() {
            return Err(SubmitError::MissingField(field));
        }
        self.state = SubmissionState::Sending;
        Ok(self.fields.clone())
    }

    /// Applies the delivery outcome. Ignored unless a submission is in flight.
    pub fn finish(&mut self, outcome: Result<(), DeliveryError>) -> SubmissionState {
        if self.state != SubmissionState::Sending {
            return self.state;
        }
        match outcome {
            Ok(()) => {
                log::info!("contact message delivered");
                self.fields = ContactMessage::default();
                self.success_for = Duration::ZERO;
                self.state = SubmissionState::Success;
            }
            Err(err) => {
                log::error!("email delivery failed: {err}");
                self.state = SubmissionState::Error;
            }
        }
        self.state
    }

    /// Advances the success hold. Returns `true` on the call that reverts to
    /// `Idle`.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.state != SubmissionState::Success {
            return false;
        }
        self.success_for = self.success_for.saturating_add(dt);
        if self.success_for < SUCCESS_HOLD {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }

    /// `begin`, deliver through `sender`, `finish`.
    pub async fn submit<S: EmailSender>(&mut self, sender: &S) -> Result<SubmissionState, SubmitError> {
        let message = self.begin()?;
        let outcome = sender.send(&message).await;
        Ok(self.finish(outcome))
    }
}

/// Presentation flags for the envelope, derived from whether the container
/// has been seen and the submission state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvelopeView {
    pub entered: bool,
    pub flap_open: bool,
    pub form_visible: bool,
    pub sealed: bool,
    pub flying: bool,
    pub banner: bool,
    pub interactive: bool,
    pub submit_disabled: bool,
    pub error_message: Option<&'static str>,
    pub submit_label: &'static str,
}

impl EnvelopeView {
    pub fn new(seen: bool, state: SubmissionState) -> Self {
        let sending = state == SubmissionState::Sending;
        let flying = state == SubmissionState::Success;
        Self {
            entered: seen,
            flap_open: seen && !sending && !flying,
            form_visible: seen && !sending,
            sealed: sending,
            flying: seen && flying,
            banner: flying,
            interactive: !sending && !flying,
            submit_disabled: sending,
            error_message: (state == SubmissionState::Error).then_some(FAILURE_MESSAGE),
            submit_label: if sending {
                "SEALING & SENDING..."
            } else {
                "SEND TRANSMISSION"
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFlow {
        let mut flow = ContactFlow::new();
        let f = flow.fields_mut();
        f.user_name = "Ada".into();
        f.user_email = "ada@example.com".into();
        f.message = "hello".into();
        flow
    }

    #[test]
    fn sealed_envelope_hides_form_and_carries_label() {
        let view = EnvelopeView::new(true, SubmissionState::Sending);
        assert!(view.sealed);
        assert!(!view.form_visible);
        assert_eq!(SEALED_LABEL, "ENVELOPE SEALED");
        assert_eq!(CHANNEL_HINT, "ENVELOPE CHANNEL READY • TYPE YOUR MESSAGE");
    }

    #[test]
    fn missing_field_reports_first_blank() {
        let msg = ContactMessage {
            user_name: "Ada".into(),
            user_email: "  ".into(),
            message: String::new(),
        };
        assert_eq!(msg.missing_field(), Some("user_email"));
    }

    #[test]
    fn begin_moves_to_sending() {
        let mut flow = filled();
        let snapshot = flow.begin().expect("accepted");
        assert_eq!(snapshot.user_name, "Ada");
        assert_eq!(flow.state(), SubmissionState::Sending);
        assert_eq!(flow.begin(), Err(SubmitError::Busy));
    }

    #[test]
    fn blank_field_is_refused_without_state_change() {
        let mut flow = filled();
        flow.fields_mut().message.clear();
        assert_eq!(flow.begin(), Err(SubmitError::MissingField("message")));
        assert_eq!(flow.state(), SubmissionState::Idle);
    }

    #[test]
    fn finish_outside_sending_is_ignored() {
        let mut flow = filled();
        assert_eq!(flow.finish(Ok(())), SubmissionState::Idle);
        assert_eq!(flow.fields().user_name, "Ada");
    }

    #[test]
    fn success_hold_is_cumulative() {
        let mut flow = filled();
        flow.begin().expect("accepted");
        flow.finish(Ok(()));
        assert!(!flow.advance(Duration::from_millis(1500)));
        assert!(!flow.advance(Duration::from_millis(1499)));
        assert!(flow.advance(Duration::from_millis(1)));
        assert_eq!(flow.state(), SubmissionState::Idle);
        assert!(!flow.advance(SUCCESS_HOLD));
    }

    #[test]
    fn envelope_while_sending() {
        let view = EnvelopeView::new(true, SubmissionState::Sending);
        assert!(view.sealed);
        assert!(!view.form_visible);
        assert!(!view.flap_open);
        assert!(view.submit_disabled);
        assert_eq!(view.submit_label, "SEALING & SENDING...");
    }

    #[test]
    fn envelope_flies_on_success() {
        let view = EnvelopeView::new(true, SubmissionState::Success);
        assert!(view.flying);
        assert!(view.banner);
        assert!(!view.interactive);
        assert_eq!(view.error_message, None);
    }

    #[test]
    fn envelope_stays_closed_until_seen() {
        let view = EnvelopeView::new(false, SubmissionState::Idle);
        assert!(!view.entered);
        assert!(!view.flap_open);
        assert!(!view.form_visible);
    }

    #[test]
    fn error_shows_static_message() {
        let view = EnvelopeView::new(true, SubmissionState::Error);
        assert_eq!(view.error_message, Some(FAILURE_MESSAGE));
        assert!(view.form_visible);
        assert!(!view.submit_disabled);
    }
}
