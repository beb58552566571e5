// Named alert wrappers for the common app call sites.
//
// Each wrapper pre-fills kind, actions, and persistence, then goes through
// the base build/dispatch path; none bypasses it.

use super::dispatcher::{global, AlertDispatcher};
use super::model::{ActionCallback, AlertAction, AlertKind, AlertOptions};

/// Labels and styling for a confirmation dialog.
#[derive(Debug)]
pub struct ConfirmOptions {
    pub confirm_label: String,
    pub cancel_label: String,
    /// Styles the confirm action destructively and raises the alert kind
    /// to Error.
    pub destructive: bool,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        Self {
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
            destructive: false,
        }
    }
}

impl AlertDispatcher {
    /// Single-button acknowledgement alert of the given kind.
    fn acknowledge(
        &self,
        kind: AlertKind,
        title: impl Into<String>,
        message: Option<String>,
        on_ok: Option<ActionCallback>,
    ) {
        let primary = match on_ok {
            Some(run) => AlertAction::new("OK", run),
            None => AlertAction::noop("OK"),
        };
        self.show(
            title,
            message,
            AlertOptions {
                kind: Some(kind),
                primary_action: Some(primary),
                ..AlertOptions::default()
            },
        );
    }

    pub fn success(
        &self,
        title: impl Into<String>,
        message: Option<String>,
        on_ok: Option<ActionCallback>,
    ) {
        self.acknowledge(AlertKind::Success, title, message, on_ok);
    }

    pub fn error(
        &self,
        title: impl Into<String>,
        message: Option<String>,
        on_ok: Option<ActionCallback>,
    ) {
        self.acknowledge(AlertKind::Error, title, message, on_ok);
    }

    pub fn warning(
        &self,
        title: impl Into<String>,
        message: Option<String>,
        on_ok: Option<ActionCallback>,
    ) {
        self.acknowledge(AlertKind::Warning, title, message, on_ok);
    }

    pub fn info(
        &self,
        title: impl Into<String>,
        message: Option<String>,
        on_ok: Option<ActionCallback>,
    ) {
        self.acknowledge(AlertKind::Info, title, message, on_ok);
    }

    /// Two-button confirmation dialog. Persistent: the handler keeps it up
    /// until the user picks a side. A destructive confirmation is raised as
    /// an Error-kind alert with a destructive primary action.
    pub fn confirm(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: ActionCallback,
        on_cancel: Option<ActionCallback>,
        options: ConfirmOptions,
    ) {
        let kind = if options.destructive {
            AlertKind::Error
        } else {
            AlertKind::Info
        };
        let primary = if options.destructive {
            AlertAction::destructive(options.confirm_label, on_confirm)
        } else {
            AlertAction::new(options.confirm_label, on_confirm)
        };
        let secondary = match on_cancel {
            Some(run) => AlertAction::new(options.cancel_label, run),
            None => AlertAction::noop(options.cancel_label),
        };
        self.show(
            title,
            Some(message.into()),
            AlertOptions {
                kind: Some(kind),
                primary_action: Some(primary),
                secondary_action: Some(secondary),
                persistent: Some(true),
                ..AlertOptions::default()
            },
        );
    }

    /// [`confirm`](Self::confirm) preconfigured for destructive deletion.
    pub fn delete_confirm(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_delete: ActionCallback,
        on_cancel: Option<ActionCallback>,
    ) {
        self.confirm(
            title,
            message,
            on_delete,
            on_cancel,
            ConfirmOptions {
                confirm_label: "Delete".to_string(),
                destructive: true,
                ..ConfirmOptions::default()
            },
        );
    }
}

/// Success alert on the process-wide dispatcher.
pub fn success(
    title: impl Into<String>,
    message: Option<String>,
    on_ok: Option<ActionCallback>,
) {
    global().success(title, message, on_ok);
}

/// Error alert on the process-wide dispatcher.
pub fn error(title: impl Into<String>, message: Option<String>, on_ok: Option<ActionCallback>) {
    global().error(title, message, on_ok);
}

/// Warning alert on the process-wide dispatcher.
pub fn warning(
    title: impl Into<String>,
    message: Option<String>,
    on_ok: Option<ActionCallback>,
) {
    global().warning(title, message, on_ok);
}

/// Info alert on the process-wide dispatcher.
pub fn info(title: impl Into<String>, message: Option<String>, on_ok: Option<ActionCallback>) {
    global().info(title, message, on_ok);
}

/// Confirmation dialog on the process-wide dispatcher.
pub fn confirm(
    title: impl Into<String>,
    message: impl Into<String>,
    on_confirm: ActionCallback,
    on_cancel: Option<ActionCallback>,
    options: ConfirmOptions,
) {
    global().confirm(title, message, on_confirm, on_cancel, options);
}

/// Destructive delete confirmation on the process-wide dispatcher.
pub fn delete_confirm(
    title: impl Into<String>,
    message: impl Into<String>,
    on_delete: ActionCallback,
    on_cancel: Option<ActionCallback>,
) {
    global().delete_confirm(title, message, on_delete, on_cancel);
}
