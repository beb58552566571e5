// Normalizes loosely-specified caller input into a canonical AlertRequest.

use super::model::{AlertOptions, AlertRequest};

/// Build a fully populated request from a title, optional message, and
/// partial overrides.
///
/// Defaults: kind Info, no actions, not persistent, dismissible. Callers are
/// trusted; title and message are carried through as-is (empty titles
/// included) and no action is ever synthesized.
pub fn build_request(
    title: impl Into<String>,
    message: Option<String>,
    options: AlertOptions,
) -> AlertRequest {
    AlertRequest {
        kind: options.kind.unwrap_or_default(),
        title: title.into(),
        message,
        primary_action: options.primary_action,
        secondary_action: options.secondary_action,
        persistent: options.persistent.unwrap_or(false),
        dismissible: options.dismissible.unwrap_or(true),
    }
}
