// Single-slot handler registry and dispatch.

use std::sync::Mutex;

use lazy_static::lazy_static;

use super::builder::build_request;
use super::model::{AlertHandler, AlertOptions, AlertRequest};

/// Registry holding at most one presentation handler.
///
/// Owned instances let tests and embedded hosts run isolated registries;
/// [`global`] is the process-wide default that the free functions in
/// `convenience` target.
pub struct AlertDispatcher {
    handler: Mutex<Option<AlertHandler>>,
}

impl AlertDispatcher {
    pub fn new() -> Self {
        Self {
            handler: Mutex::new(None),
        }
    }

    /// Store or replace the current handler, or clear it with `None`.
    /// Replacement is silent; the previous handler is dropped without
    /// notification.
    pub fn set_handler(&self, handler: Option<AlertHandler>) {
        let mut slot = self.handler.lock().unwrap();
        match (&handler, slot.is_some()) {
            (Some(_), true) => log::debug!("alert handler replaced"),
            (Some(_), false) => log::debug!("alert handler registered"),
            (None, _) => log::debug!("alert handler cleared"),
        }
        *slot = handler;
    }

    /// Forward a request to the current handler.
    ///
    /// Fire-and-forget: the handler is invoked synchronously exactly once,
    /// nothing is returned to the caller, and a panicking handler propagates
    /// to this call site. With no handler registered the request is dropped
    /// after a diagnostic warning. The handler runs under the slot lock, so
    /// dispatching again from inside a handler would deadlock.
    pub fn dispatch(&self, request: AlertRequest) {
        let mut slot = self.handler.lock().unwrap();
        match slot.as_mut() {
            Some(handler) => handler(request),
            None => log::warn!(
                "Global alert handler not set. Make sure to call set_global_alert_handler."
            ),
        }
    }

    /// Base entry point: normalize the input and dispatch it. Every
    /// convenience wrapper goes through here.
    pub fn show(&self, title: impl Into<String>, message: Option<String>, options: AlertOptions) {
        self.dispatch(build_request(title, message, options));
    }
}

impl Default for AlertDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref GLOBAL_DISPATCHER: AlertDispatcher = AlertDispatcher::new();
}

/// The process-wide dispatcher.
pub fn global() -> &'static AlertDispatcher {
    &GLOBAL_DISPATCHER
}

/// Register the process-wide presentation handler, or clear it with `None`.
///
/// The host application calls this once at startup, before any alert is
/// expected to render. Alerts raised earlier are well-defined: they warn and
/// drop the request.
pub fn set_global_alert_handler(handler: Option<AlertHandler>) {
    GLOBAL_DISPATCHER.set_handler(handler);
}

/// Build and dispatch an alert on the process-wide dispatcher.
pub fn show_alert(title: impl Into<String>, message: Option<String>, options: AlertOptions) {
    GLOBAL_DISPATCHER.show(title, message, options);
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::test_support::{capture_handler, GLOBAL_LOCK};
    use super::*;
    use crate::core::alerts::model::AlertKind;

    fn counting_handler(count: &Arc<AtomicUsize>) -> AlertHandler {
        let count = Arc::clone(count);
        Box::new(move |_| {
            count.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_dispatch_without_handler_does_not_panic() {
        let _guard = GLOBAL_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dispatcher = AlertDispatcher::new();
        dispatcher.dispatch(build_request("No one listening", None, AlertOptions::default()));
    }

    #[test]
    fn test_dispatch_reaches_registered_handler() {
        let dispatcher = AlertDispatcher::new();
        let (handler, captured) = capture_handler();
        dispatcher.set_handler(Some(handler));

        dispatcher.show(
            "Visitor approved",
            Some("Gate 2".to_string()),
            AlertOptions {
                kind: Some(AlertKind::Success),
                ..AlertOptions::default()
            },
        );

        let requests = captured.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].kind, AlertKind::Success);
        assert_eq!(requests[0].title, "Visitor approved");
        assert_eq!(requests[0].message.as_deref(), Some("Gate 2"));
    }

    #[test]
    fn test_replacement_routes_to_new_handler_only() {
        let dispatcher = AlertDispatcher::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        dispatcher.set_handler(Some(counting_handler(&first)));
        dispatcher.dispatch(build_request("one", None, AlertOptions::default()));

        dispatcher.set_handler(Some(counting_handler(&second)));
        dispatcher.dispatch(build_request("two", None, AlertOptions::default()));
        dispatcher.dispatch(build_request("three", None, AlertOptions::default()));

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_clearing_handler_restores_warning_path() {
        let _guard = GLOBAL_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dispatcher = AlertDispatcher::new();
        let count = Arc::new(AtomicUsize::new(0));

        dispatcher.set_handler(Some(counting_handler(&count)));
        dispatcher.dispatch(build_request("seen", None, AlertOptions::default()));

        dispatcher.set_handler(None);
        dispatcher.dispatch(build_request("dropped", None, AlertOptions::default()));

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_global_registration_round_trip() {
        let _guard = GLOBAL_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let (handler, captured) = capture_handler();
        set_global_alert_handler(Some(handler));

        show_alert("Dues posted", None, AlertOptions::default());
        set_global_alert_handler(None);

        let requests = captured.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].title, "Dues posted");
        assert_eq!(requests[0].kind, AlertKind::Info);
    }
}
