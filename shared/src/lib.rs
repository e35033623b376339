//! Form models and wire types shared between the settings pages and the backend.
//!
//! Everything here is framework independent: the Yew components in the frontend crate
//! hold these structs behind `Rc<RefCell<_>>` and only add rendering on top.

pub mod feedback;
pub mod notify;
pub mod tax_settings;

pub use feedback::{
    submit_feedback, FeedbackClient, FeedbackForm, FeedbackRequest, SubmissionError,
    SubmitOutcome, ValidationError, MAX_RATING,
};
pub use notify::{Notification, NotificationKind, Notifier};
pub use tax_settings::{
    DecimalPlaces, ParseOptionError, PriceLogic, TaxRate, TaxSettings, TaxSettingsForm,
    TaxSettingsSeed,
};
