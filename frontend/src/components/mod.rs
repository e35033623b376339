pub mod forms;
pub mod settings_page;
pub mod toast;
