use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notify::{
    Notification, Notifier, FEEDBACK_FAILED_MESSAGE, FEEDBACK_THANKS_MESSAGE,
    MESSAGE_REQUIRED_MESSAGE, RATING_REQUIRED_MESSAGE,
};

/// Highest selectable star
pub const MAX_RATING: u8 = 5;

/// Body of `POST /feedback/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    /// Star rating, 1 through 5
    pub rating: u8,
    /// Free-text message, sent exactly as typed
    pub message: String,
}

/// Local checks that must pass before anything goes over the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("rating required")]
    RatingRequired,
    #[error("message required")]
    MessageRequired,
}

impl ValidationError {
    /// Text shown to the user in the notification
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::RatingRequired => RATING_REQUIRED_MESSAGE,
            ValidationError::MessageRequired => MESSAGE_REQUIRED_MESSAGE,
        }
    }
}

/// Anything that went wrong while delivering feedback to the server.
///
/// The detail is for logs only; the user always sees the same failure message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("failed to serialize request: {0}")]
    Serialize(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server error {status}: {body}")]
    Server { status: u16, body: String },
}

/// Remote endpoint that accepts feedback.
///
/// Only success or failure matters; no response payload is consumed.
#[allow(async_fn_in_trait)]
pub trait FeedbackClient {
    async fn submit_feedback(&self, request: &FeedbackRequest) -> Result<(), SubmissionError>;
}

/// Working state of one feedback form session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    rating: u8,
    message: String,
    submitting: bool,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rating, 0 when no star has been picked
    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether a submission is outstanding
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Select a star. Values outside 1..=5 are ignored and return false.
    pub fn set_rating(&mut self, rating: u8) -> bool {
        if (1..=MAX_RATING).contains(&rating) {
            self.rating = rating;
            true
        } else {
            false
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Star `star` is drawn filled when the current rating reaches it
    pub fn is_star_lit(&self, star: u8) -> bool {
        self.rating >= star
    }

    /// Check the form and build the request it would send.
    ///
    /// The rating is checked before the message.
    pub fn validate(&self) -> Result<FeedbackRequest, ValidationError> {
        if self.rating == 0 {
            return Err(ValidationError::RatingRequired);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MessageRequired);
        }
        Ok(FeedbackRequest {
            rating: self.rating,
            message: self.message.clone(),
        })
    }

    /// Clear the entered values after a successful submission
    pub fn reset(&mut self) {
        self.rating = 0;
        self.message.clear();
    }
}

/// Holds the in-flight flag for the duration of one request and clears it on drop,
/// whichever way the request ends.
pub struct InFlightGuard<'a> {
    form: &'a RefCell<FeedbackForm>,
}

impl<'a> InFlightGuard<'a> {
    /// Raise the in-flight flag, or return `None` if it is already raised
    pub fn acquire(form: &'a RefCell<FeedbackForm>) -> Option<Self> {
        let mut state = form.borrow_mut();
        if state.submitting {
            return None;
        }
        state.submitting = true;
        Some(Self { form })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.form.borrow_mut().submitting = false;
    }
}

/// What a submit attempt ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was still in flight; nothing happened
    Suppressed,
    /// Local validation failed; no request was sent
    Invalid(ValidationError),
    /// The server accepted the feedback and the form was cleared
    Submitted,
    /// The request failed; entered values were kept for a retry
    Failed(SubmissionError),
}

/// Run one "submit feedback" action against `form`.
///
/// `on_change` is called whenever the in-flight flag flips so the view can redraw.
/// The form is never borrowed across the network await, so the user may keep
/// editing while the request is outstanding.
pub async fn submit_feedback<C, N, F>(
    form: &RefCell<FeedbackForm>,
    client: &C,
    notifier: &N,
    on_change: F,
) -> SubmitOutcome
where
    C: FeedbackClient,
    N: Notifier,
    F: Fn(),
{
    if form.borrow().is_submitting() {
        return SubmitOutcome::Suppressed;
    }

    let request = match form.borrow().validate() {
        Ok(request) => request,
        Err(err) => {
            notifier.notify(Notification::error(err.user_message()));
            return SubmitOutcome::Invalid(err);
        }
    };

    let outcome = {
        let Some(_guard) = InFlightGuard::acquire(form) else {
            return SubmitOutcome::Suppressed;
        };
        on_change();

        match client.submit_feedback(&request).await {
            Ok(()) => {
                form.borrow_mut().reset();
                notifier.notify(Notification::success(FEEDBACK_THANKS_MESSAGE));
                SubmitOutcome::Submitted
            }
            Err(err) => {
                notifier.notify(Notification::error(FEEDBACK_FAILED_MESSAGE));
                SubmitOutcome::Failed(err)
            }
        }
    };
    on_change();

    outcome
}
