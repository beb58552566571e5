// Alert model types shared with the presentation layer.
//
// NOTE: TypeScript mirror types are in ui/src/types.ts
// Keep both files in sync when modifying data structures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual/semantic category of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

/// Rendering style for an action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    #[default]
    Normal,
    Destructive,
}

/// Callback attached to an alert action.
///
/// Invoked by the presentation handler on user interaction, never by the
/// dispatcher. A callback that needs async work spawns its own task; nothing
/// in this crate waits on it.
pub type ActionCallback = Box<dyn FnOnce() + Send + 'static>;

/// Presentation handler registered by the host application. Receives each
/// dispatched request by value and owns it from then on.
pub type AlertHandler = Box<dyn FnMut(AlertRequest) + Send + 'static>;

/// A call-to-action rendered on an alert.
pub struct AlertAction {
    pub label: String,
    pub run: ActionCallback,
    pub style: ActionStyle,
}

impl AlertAction {
    pub fn new(label: impl Into<String>, run: ActionCallback) -> Self {
        Self {
            label: label.into(),
            run,
            style: ActionStyle::Normal,
        }
    }

    pub fn destructive(label: impl Into<String>, run: ActionCallback) -> Self {
        Self {
            label: label.into(),
            run,
            style: ActionStyle::Destructive,
        }
    }

    /// Action whose callback does nothing, for callers that omit one.
    /// The handler still gets a callable `run`.
    pub fn noop(label: impl Into<String>) -> Self {
        Self::new(label, Box::new(|| {}))
    }
}

impl fmt::Debug for AlertAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertAction")
            .field("label", &self.label)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// The canonical value handed to the presentation handler.
///
/// Built once, moved into the handler, and not retained by the dispatcher
/// afterwards. Absent actions mean no call-to-action is rendered.
pub struct AlertRequest {
    pub kind: AlertKind,
    pub title: String,
    pub message: Option<String>,
    pub primary_action: Option<AlertAction>,
    pub secondary_action: Option<AlertAction>,
    /// The handler must not auto-dismiss the alert without explicit user
    /// action when set.
    pub persistent: bool,
    /// Whether a close affordance is shown.
    pub dismissible: bool,
}

impl fmt::Debug for AlertRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertRequest")
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("primary_action", &self.primary_action)
            .field("secondary_action", &self.secondary_action)
            .field("persistent", &self.persistent)
            .field("dismissible", &self.dismissible)
            .finish()
    }
}

/// Partial overrides accepted by the request builder.
///
/// An all-`None` value behaves exactly like passing no options at all.
#[derive(Debug, Default)]
pub struct AlertOptions {
    pub kind: Option<AlertKind>,
    pub primary_action: Option<AlertAction>,
    pub secondary_action: Option<AlertAction>,
    pub persistent: Option<bool>,
    pub dismissible: Option<bool>,
}
