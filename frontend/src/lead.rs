//! Readiness assessment submissions: record, lifecycle and transport.

use std::rc::Rc;

use gloo_net::http::Request;
use log::{error, info};
use serde::Deserialize;
use web_sys::RequestMode;
use yew::prelude::*;

/// One submission attempt. Built fresh from the form on every submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionRecord {
    fields: Vec<(String, String)>,
}

impl SubmissionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repeated name keeps its first position and takes the latest value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(key, value)| format!("{}={}", form_component(key), form_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubmissionRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = SubmissionRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

fn form_component(raw: &str) -> String {
    urlencoding::encode(raw).replace("%20", "+")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Submitted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeadState {
    pub phase: SubmitPhase,
    pub last_error: Option<String>,
}

impl Default for LeadState {
    fn default() -> Self {
        Self {
            phase: SubmitPhase::Idle,
            last_error: None,
        }
    }
}

impl LeadState {
    /// Only an idle form starts a transmission.
    pub fn accepts_submit(&self) -> bool {
        self.phase == SubmitPhase::Idle
    }

    /// The confirmation replaces the form once the request is queued.
    pub fn shows_confirmation(&self) -> bool {
        self.phase == SubmitPhase::Submitted
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            "[ Transmitting... ]"
        } else {
            "[ Request Assessment ]"
        }
    }
}

pub enum LeadAction {
    Begin,
    Succeeded,
    Failed(String),
}

impl Reducible for LeadState {
    type Action = LeadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match (self.phase, action) {
            (SubmitPhase::Idle, LeadAction::Begin) => Rc::new(LeadState {
                phase: SubmitPhase::Submitting,
                last_error: None,
            }),
            (SubmitPhase::Submitting, LeadAction::Succeeded) => Rc::new(LeadState {
                phase: SubmitPhase::Submitted,
                last_error: None,
            }),
            (SubmitPhase::Submitting, LeadAction::Failed(message)) => Rc::new(LeadState {
                phase: SubmitPhase::Idle,
                last_error: Some(message),
            }),
            _ => self,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeadTransport {
    /// Cross-origin `no-cors` post. The response is opaque, so only network
    /// failures are visible.
    Opaque { endpoint: String },
    /// Same-origin relay that reports the upstream outcome in its status code.
    Relay { url: String },
}

impl LeadTransport {
    pub fn url(&self) -> &str {
        match self {
            LeadTransport::Opaque { endpoint } => endpoint,
            LeadTransport::Relay { url } => url,
        }
    }

    pub fn reads_response(&self) -> bool {
        matches!(self, LeadTransport::Relay { .. })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("submission rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

#[derive(Deserialize)]
struct RelayErrorBody {
    error: String,
}

pub async fn transmit(
    transport: &LeadTransport,
    record: &SubmissionRecord,
) -> Result<(), SubmitError> {
    let mut request = Request::post(transport.url())
        .header("Content-Type", "application/x-www-form-urlencoded");
    if !transport.reads_response() {
        request = request.mode(RequestMode::NoCors);
    }

    let response = request
        .body(record.encode())
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if !transport.reads_response() || response.ok() {
        return Ok(());
    }

    let status = response.status();
    let message = match response.json::<RelayErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => response.status_text(),
    };
    Err(SubmitError::Rejected { status, message })
}

/// Shown once, blocking, when a transmission fails.
pub const FAILURE_NOTICE: &str = "Something went wrong. Please try again.";

/// Blocking user-facing notice for a failed transmission.
pub trait FailureNotifier {
    fn notify(&self, message: &str);
}

/// Turns a finished transmission into the lifecycle action. Failures notify exactly once.
pub fn settle<N: FailureNotifier + ?Sized>(
    result: Result<(), SubmitError>,
    fields: usize,
    notifier: &N,
) -> LeadAction {
    match result {
        Ok(()) => {
            info!("Assessment request sent ({} fields)", fields);
            LeadAction::Succeeded
        }
        Err(e) => {
            error!("Form submission error: {}", e);
            notifier.notify(FAILURE_NOTICE);
            LeadAction::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Named controls of the assessment form, in form order.
    const FIELD_NAMES: [&str; 9] = [
        "Name",
        "Email",
        "Company",
        "Target_Architecture",
        "Primary_Objective",
        "Data_Maturity",
        "AI_Experience",
        "Timeline",
        "Success_Criteria",
    ];

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<String>>,
    }

    impl FailureNotifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
    }

    fn reduce(state: LeadState, action: LeadAction) -> Rc<LeadState> {
        Rc::new(state).reduce(action)
    }

    fn alex_morgan() -> SubmissionRecord {
        [
            ("Name", "Alex Morgan"),
            ("Email", "alex@company.com"),
            ("Company", "Acme Ltd."),
            ("Target_Architecture", "Finance"),
            ("Primary_Objective", "Cost reduction"),
            ("Data_Maturity", "Unsure"),
            ("AI_Experience", "No prior experience"),
            ("Timeline", "Exploratory"),
            ("Success_Criteria", ""),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn encodes_all_nine_fields_including_empty_ones() {
        let record = alex_morgan();
        assert_eq!(record.len(), FIELD_NAMES.len());
        assert_eq!(
            record.encode(),
            "Name=Alex+Morgan&Email=alex%40company.com&Company=Acme+Ltd.\
             &Target_Architecture=Finance&Primary_Objective=Cost+reduction\
             &Data_Maturity=Unsure&AI_Experience=No+prior+experience\
             &Timeline=Exploratory&Success_Criteria="
        );
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let record: SubmissionRecord = [
            ("Timeline", "3–6 Months"),
            ("Target_Architecture", "Logistics & Supply Chain"),
            ("Success_Criteria", "a=b+c\nd"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            record.encode(),
            "Timeline=3%E2%80%936+Months\
             &Target_Architecture=Logistics+%26+Supply+Chain\
             &Success_Criteria=a%3Db%2Bc%0Ad"
        );
    }

    #[test]
    fn duplicate_names_keep_position_and_last_value() {
        let mut record = SubmissionRecord::new();
        record.insert("Name", "first");
        record.insert("Email", "a@b.c");
        record.insert("Name", "second");
        assert_eq!(record.len(), 2);
        assert_eq!(record.encode(), "Name=second&Email=a%40b.c");
    }

    #[test]
    fn whitespace_values_accepted_by_the_browser_are_sent() {
        let record: SubmissionRecord = [("Name", "  "), ("Email", "a@b.c"), ("Company", "Acme")]
            .into_iter()
            .collect();
        let state = LeadState::default();
        assert!(state.accepts_submit());

        let submitting = Rc::new(state).reduce(LeadAction::Begin);
        assert_eq!(submitting.phase, SubmitPhase::Submitting);
        assert_eq!(record.encode(), "Name=++&Email=a%40b.c&Company=Acme");
    }

    #[test]
    fn successful_submission_reaches_submitted() {
        let submitting = reduce(LeadState::default(), LeadAction::Begin);
        assert_eq!(submitting.phase, SubmitPhase::Submitting);
        assert_eq!(submitting.button_label(), "[ Transmitting... ]");

        let done = submitting.reduce(LeadAction::Succeeded);
        assert_eq!(done.phase, SubmitPhase::Submitted);
        assert_eq!(done.last_error, None);
    }

    #[test]
    fn failure_returns_to_idle_and_allows_retry() {
        let failed = reduce(LeadState::default(), LeadAction::Begin)
            .reduce(LeadAction::Failed("network error: offline".to_string()));
        assert_eq!(failed.phase, SubmitPhase::Idle);
        assert_eq!(failed.last_error.as_deref(), Some("network error: offline"));
        assert_eq!(failed.button_label(), "[ Request Assessment ]");

        let retry = failed.reduce(LeadAction::Begin);
        assert_eq!(retry.phase, SubmitPhase::Submitting);
        assert_eq!(retry.last_error, None);
    }

    #[test]
    fn second_begin_while_submitting_is_ignored() {
        let submitting = reduce(LeadState::default(), LeadAction::Begin);
        let again = submitting.clone().reduce(LeadAction::Begin);
        assert!(Rc::ptr_eq(&submitting, &again));
    }

    #[test]
    fn submitted_is_terminal() {
        let done = reduce(LeadState::default(), LeadAction::Begin).reduce(LeadAction::Succeeded);
        for action in [
            LeadAction::Begin,
            LeadAction::Failed("late".to_string()),
            LeadAction::Succeeded,
        ] {
            assert_eq!(done.clone().reduce(action).phase, SubmitPhase::Submitted);
        }
    }

    #[test]
    fn settling_without_a_submission_is_ignored() {
        let idle = reduce(LeadState::default(), LeadAction::Failed("stray".to_string()));
        assert_eq!(*idle, LeadState::default());
        let idle = reduce(LeadState::default(), LeadAction::Succeeded);
        assert_eq!(idle.phase, SubmitPhase::Idle);
    }

    #[test]
    fn only_the_relay_reads_responses() {
        let opaque = LeadTransport::Opaque {
            endpoint: "https://script.example/exec".to_string(),
        };
        let relay = LeadTransport::Relay {
            url: "/api/leads".to_string(),
        };
        assert!(!opaque.reads_response());
        assert!(relay.reads_response());
        assert_eq!(relay.url(), "/api/leads");
    }

    #[test]
    fn failed_transmission_notifies_once_and_reopens_the_form() {
        let notifier = RecordingNotifier::default();
        let submitting = reduce(LeadState::default(), LeadAction::Begin);

        let action = settle(
            Err(SubmitError::Network("Failed to fetch".to_string())),
            9,
            &notifier,
        );
        let settled = submitting.reduce(action);

        assert_eq!(*notifier.notices.borrow(), vec![FAILURE_NOTICE.to_string()]);
        assert_eq!(settled.phase, SubmitPhase::Idle);
        assert!(settled.accepts_submit());
        assert!(!settled.shows_confirmation());
        assert_eq!(
            settled.last_error.as_deref(),
            Some("network error: Failed to fetch")
        );
    }

    #[test]
    fn successful_transmission_shows_the_confirmation_without_notice() {
        let notifier = RecordingNotifier::default();
        let submitting = reduce(LeadState::default(), LeadAction::Begin);
        assert!(!submitting.shows_confirmation());

        let settled = submitting.reduce(settle(Ok(()), 9, &notifier));

        assert!(notifier.notices.borrow().is_empty());
        assert_eq!(settled.phase, SubmitPhase::Submitted);
        assert!(settled.shows_confirmation());
        assert!(!settled.accepts_submit());
    }

    #[test]
    fn relay_rejection_is_reported_like_a_network_failure() {
        let notifier = RecordingNotifier::default();
        let action = settle(
            Err(SubmitError::Rejected {
                status: 502,
                message: "Form endpoint rejected the submission (500)".to_string(),
            }),
            9,
            &notifier,
        );
        assert_eq!(notifier.notices.borrow().len(), 1);
        assert!(matches!(action, LeadAction::Failed(ref m) if m.starts_with("submission rejected (502)")));
    }
}
