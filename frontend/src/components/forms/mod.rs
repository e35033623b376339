pub mod feedback_form;
pub mod tax_settings_form;

pub use feedback_form::FeedbackSettings;
pub use tax_settings_form::TaxSettingsPanel;
