#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod core;

pub use crate::core::alerts::builder::build_request;
pub use crate::core::alerts::convenience::{
    confirm, delete_confirm, error, info, success, warning, ConfirmOptions,
};
pub use crate::core::alerts::dispatcher::{
    global, set_global_alert_handler, show_alert, AlertDispatcher,
};
pub use crate::core::alerts::model::{
    ActionCallback, ActionStyle, AlertAction, AlertHandler, AlertKind, AlertOptions, AlertRequest,
};
pub use crate::core::config::{AlertPreferences, ConfigManager, Settings};
