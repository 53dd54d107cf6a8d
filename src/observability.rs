//! Logging infrastructure for the adapter.
//!
//! All events use target "bigtable_adapter" and include an `event` field for
//! filtering. The crate never initializes a global subscriber; applications
//! configure tracing via `tracing_subscriber` or similar.
//!
//! ## Conventions
//!
//! - `event`: snake_case event name (required)
//! - `component`: subsystem (e.g., "mutation", "metadata")
//! - Use `%` for Display, `?` for Debug formatting
//! - Never log cell values; row keys only by length

/// Target for all adapter log events.
pub(crate) const ADAPTER_TARGET: &str = "bigtable_adapter";

/// Macro for debug-level log events.
///
/// # Example
/// ```ignore
/// log_debug!(
///     component = "mutation",
///     event = "mutation_adapted",
///     entries = request.mutations.len(),
/// );
/// ```
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::ADAPTER_TARGET, $($field)*)
    };
}

/// Macro for warn-level log events.
macro_rules! log_warn {
    ($($field:tt)*) => {
        ::tracing::warn!(target: $crate::observability::ADAPTER_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_warn;
