//! Feature-gated diagnostic events.
//!
//! Both macros forward to `tracing` when the `tracing` feature is enabled and
//! expand to nothing otherwise, so their arguments are never evaluated in a
//! build without it.

/// Emits a `TRACE` level event.
///
/// Used for silent no-ops: mutations that were requested but left the graph
/// untouched.
macro_rules! trace_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)+);
    };
}

/// Emits a `DEBUG` level event.
macro_rules! debug_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)+);
    };
}

pub(crate) use debug_event;
pub(crate) use trace_event;
