//! Consultation request form and its single outbound submission.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::Reducible;

use crate::config;
use crate::i18n::Lang;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContactError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("network error: {0}")]
    Network(String),
    #[error("could not read intake response: {0}")]
    Decode(String),
}

impl ContactError {
    /// Alert text for a refused or failed submission. A duplicate click while
    /// sending has nothing to report.
    pub fn notice(&self, lang: Lang) -> Option<&'static str> {
        let notices = &lang.text().notices;
        match self {
            ContactError::MissingField(_) => Some(notices.missing_required),
            ContactError::AlreadySubmitting => None,
            ContactError::Network(_) => Some(notices.submit_unreachable),
            ContactError::Decode(_) => Some(notices.submit_failed_default),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Address,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Address => self.address = value,
            Field::Message => self.message = value,
        }
    }

    /// Name, email and phone must be filled in.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (label, value) in [("name", &self.name), ("email", &self.email), ("phone", &self.phone)] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(label));
            }
        }
        Ok(())
    }

    pub fn to_lead(&self) -> Result<LeadRequest, ContactError> {
        self.validate()?;
        Ok(LeadRequest {
            access_key: config::web3forms_access_key().to_string(),
            subject: format!("New Inquiry from {}", self.name),
            from_name: config::LEAD_FROM_NAME.to_string(),
            form: self.clone(),
        })
    }
}

/// Body posted to the intake service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadRequest {
    pub access_key: String,
    #[serde(flatten)]
    pub form: ContactForm,
    pub from_name: String,
    pub subject: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IntakeReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Delivers a lead to whatever intake service backs the form.
pub trait LeadNotifier {
    fn notify<'a>(&'a self, lead: &'a LeadRequest) -> LocalBoxFuture<'a, Result<IntakeReply, ContactError>>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Sent,
    Rejected(Option<String>),
    Unreachable,
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }

    pub fn notice(&self, lang: Lang) -> String {
        let notices = &lang.text().notices;
        match self {
            SubmitOutcome::Sent => notices.submit_success.to_string(),
            SubmitOutcome::Rejected(reason) => format!(
                "{}{}",
                notices.submit_failed_prefix,
                reason
                    .as_deref()
                    .filter(|r| !r.trim().is_empty())
                    .unwrap_or(notices.submit_failed_default)
            ),
            SubmitOutcome::Unreachable => notices.submit_unreachable.to_string(),
        }
    }
}

/// Sends one lead and classifies the result. Never retries.
pub async fn deliver<N: LeadNotifier + ?Sized>(notifier: &N, lead: &LeadRequest) -> SubmitOutcome {
    match notifier.notify(lead).await {
        Ok(reply) if reply.success => {
            log::info!("Lead accepted by intake service");
            SubmitOutcome::Sent
        }
        Ok(reply) => {
            log::warn!("Lead rejected by intake service: {:?}", reply.message);
            SubmitOutcome::Rejected(reply.message)
        }
        Err(ContactError::Decode(e)) => {
            log::warn!("Intake response unreadable: {}", e);
            SubmitOutcome::Rejected(None)
        }
        Err(e) => {
            log::error!("Lead submission failed: {}", e);
            SubmitOutcome::Unreachable
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    pub submitting: bool,
}

impl ContactState {
    /// Validates and flips `submitting` on. The returned lead is what gets sent.
    pub fn begin_submit(&mut self) -> Result<LeadRequest, ContactError> {
        if self.submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        let lead = self.form.to_lead()?;
        self.submitting = true;
        Ok(lead)
    }

    /// Runs on every outcome. Fields survive anything but a confirmed send.
    pub fn finish_submit(&mut self, outcome: &SubmitOutcome) {
        self.submitting = false;
        if outcome.is_sent() {
            self.form = ContactForm::default();
        }
    }
}

pub enum ContactAction {
    Edit(Field, String),
    Begin,
    Finish(SubmitOutcome),
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.form.set(field, value),
            ContactAction::Begin => {
                if let Err(e) = next.begin_submit() {
                    log::warn!("Submission not started: {}", e);
                }
            }
            ContactAction::Finish(outcome) => next.finish_submit(&outcome),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::RefCell;

    struct FakeNotifier {
        reply: Result<IntakeReply, ContactError>,
        sent: RefCell<Vec<LeadRequest>>,
    }

    impl FakeNotifier {
        fn replying(reply: Result<IntakeReply, ContactError>) -> Self {
            Self { reply, sent: RefCell::new(Vec::new()) }
        }
    }

    impl LeadNotifier for FakeNotifier {
        fn notify<'a>(&'a self, lead: &'a LeadRequest) -> LocalBoxFuture<'a, Result<IntakeReply, ContactError>> {
            self.sent.borrow_mut().push(lead.clone());
            let reply = self.reply.clone();
            async move { reply }.boxed_local()
        }
    }

    fn filled() -> ContactState {
        ContactState {
            form: ContactForm {
                name: "Jane Kim".into(),
                email: "jane@example.com".into(),
                phone: "703-555-0100".into(),
                address: "".into(),
                message: "Kitchen remodel".into(),
            },
            submitting: false,
        }
    }

    fn run(state: &mut ContactState, notifier: &FakeNotifier) -> Result<SubmitOutcome, ContactError> {
        let lead = state.begin_submit()?;
        assert!(state.submitting);
        let outcome = block_on(deliver(notifier, &lead));
        state.finish_submit(&outcome);
        Ok(outcome)
    }

    #[test]
    fn success_clears_the_form() {
        let notifier = FakeNotifier::replying(Ok(IntakeReply { success: true, message: None }));
        let mut state = filled();
        let outcome = run(&mut state, &notifier).unwrap();

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(state.form, ContactForm::default());
        assert!(!state.submitting);
        assert_eq!(
            outcome.notice(Lang::En),
            "Your request has been sent! We will contact you soon."
        );
        assert_eq!(notifier.sent.borrow().len(), 1);
    }

    #[test]
    fn rejection_keeps_fields_and_reports_the_reason() {
        let notifier = FakeNotifier::replying(Ok(IntakeReply {
            success: false,
            message: Some("Invalid access key".into()),
        }));
        let mut state = filled();
        let outcome = run(&mut state, &notifier).unwrap();

        assert_eq!(state.form, filled().form);
        assert!(!state.submitting);
        assert_eq!(outcome.notice(Lang::En), "Failed: Invalid access key");
        assert_eq!(
            SubmitOutcome::Rejected(None).notice(Lang::Ko),
            "전송 실패: 다시 시도해 주세요."
        );
    }

    #[test]
    fn network_error_keeps_fields() {
        let notifier = FakeNotifier::replying(Err(ContactError::Network("offline".into())));
        let mut state = filled();
        let outcome = run(&mut state, &notifier).unwrap();

        assert_eq!(outcome, SubmitOutcome::Unreachable);
        assert_eq!(state.form, filled().form);
        assert!(!state.submitting);
        assert_eq!(
            outcome.notice(Lang::En),
            "Failed to connect. Please use KakaoTalk OpenChat."
        );
    }

    #[test]
    fn unreadable_reply_counts_as_rejection() {
        let notifier = FakeNotifier::replying(Err(ContactError::Decode("expected value".into())));
        let mut state = filled();
        let outcome = run(&mut state, &notifier).unwrap();
        assert_eq!(outcome, SubmitOutcome::Rejected(None));
        assert!(!state.submitting);
    }

    #[test]
    fn empty_name_never_reaches_the_network() {
        let notifier = FakeNotifier::replying(Ok(IntakeReply { success: true, message: None }));
        let mut state = filled();
        state.form.name.clear();

        assert_eq!(run(&mut state, &notifier), Err(ContactError::MissingField("name")));
        assert!(notifier.sent.borrow().is_empty());
        assert!(!state.submitting);
    }

    #[test]
    fn optional_fields_may_be_blank() {
        let mut form = filled().form;
        form.address.clear();
        form.message.clear();
        assert!(form.validate().is_ok());

        form.phone = "   ".into();
        assert_eq!(form.validate(), Err(ContactError::MissingField("phone")));
    }

    #[test]
    fn second_submit_is_refused_while_in_flight() {
        let mut state = filled();
        assert!(state.begin_submit().is_ok());
        assert_eq!(state.begin_submit(), Err(ContactError::AlreadySubmitting));
    }

    #[test]
    fn lead_body_carries_routing_fields() {
        let lead = filled().form.to_lead().unwrap();
        let body = serde_json::to_value(&lead).unwrap();
        assert_eq!(body["name"], "Jane Kim");
        assert_eq!(body["address"], "");
        assert_eq!(body["from_name"], "GL Website Inquiry");
        assert_eq!(body["subject"], "New Inquiry from Jane Kim");
        assert!(body["access_key"].as_str().map_or(false, |k| !k.is_empty()));
        assert!(body.get("form").is_none());
    }

    #[test]
    fn reply_parses_with_missing_fields() {
        let reply: IntakeReply = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(reply.success);
        let reply: IntakeReply = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert!(!reply.success);
        assert_eq!(reply.message.as_deref(), Some("nope"));
    }

    #[test]
    fn whitespace_only_required_field_is_refused_with_a_notice() {
        let notifier = FakeNotifier::replying(Ok(IntakeReply { success: true, message: None }));
        let mut state = ContactState::default();
        state.form.name = "   ".into();
        state.form.email = "a@b.c".into();
        state.form.phone = "1".into();

        let err = run(&mut state, &notifier).unwrap_err();
        assert_eq!(err, ContactError::MissingField("name"));
        assert!(!state.submitting);
        assert!(notifier.sent.borrow().is_empty());
        assert_eq!(
            err.notice(Lang::En),
            Some("Please enter your name, email and phone number.")
        );
        assert_eq!(err.notice(Lang::Ko), Some("이름, 이메일, 전화번호를 입력해 주세요."));
    }

    #[test]
    fn duplicate_click_has_no_notice() {
        assert_eq!(ContactError::AlreadySubmitting.notice(Lang::En), None);
    }

    #[test]
    fn reducer_begin_applies_the_same_guards() {
        let blank = Rc::new(ContactState::default()).reduce(ContactAction::Begin);
        assert!(!blank.submitting);

        let sending = Rc::new(filled()).reduce(ContactAction::Begin);
        assert!(sending.submitting);
        let again = sending.clone().reduce(ContactAction::Begin);
        assert_eq!(*again, *sending);
    }

    #[test]
    fn reducer_edits_and_finishes() {
        let state = Rc::new(filled());
        let state = state.reduce(ContactAction::Edit(Field::Name, "Min".into()));
        let state = state.reduce(ContactAction::Begin);
        assert!(state.submitting);
        let state = state.reduce(ContactAction::Edit(Field::Message, "typed while sending".into()));
        let state = state.reduce(ContactAction::Finish(SubmitOutcome::Unreachable));
        assert!(!state.submitting);
        assert_eq!(state.form.name, "Min");
        assert_eq!(state.form.message, "typed while sending");

        let state = state.reduce(ContactAction::Begin);
        let state = state.reduce(ContactAction::Finish(SubmitOutcome::Sent));
        assert_eq!(state.form, ContactForm::default());
        assert!(!state.submitting);
    }
}
