// App-wide alert dispatch for user-facing dialogs and banners.
//
// Architecture:
// - model.rs: Alert request, action, and handler types
// - builder.rs: Normalizes caller input into a canonical request
// - dispatcher.rs: Single-slot handler registry and dispatch
// - convenience.rs: Named wrappers for the common alert shapes

pub mod builder;
pub mod convenience;
pub mod dispatcher;
pub mod model;
