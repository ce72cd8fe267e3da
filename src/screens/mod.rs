pub mod settings_hub;
pub mod todos;

pub use settings_hub::{HubEntry, SettingsHub};
pub use todos::{ConfirmOutcome, TodoDialog, TodoScreen};
