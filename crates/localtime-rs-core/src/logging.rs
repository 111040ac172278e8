//! Logging integration for localtime-rs.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-registration spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level` (e.g. "debug",
/// "localtime_rs_admin=trace"). In debug mode a pretty, human-readable format
/// is used; otherwise a structured JSON format is used.
///
/// Installing a second subscriber is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for registering one record type with the admin.
///
/// Every event emitted while the display fields of that record type are being
/// synthesized carries the model key.
///
/// # Examples
///
/// ```
/// use localtime_rs_core::logging::registration_span;
///
/// let span = registration_span("example.amodel1");
/// let _guard = span.enter();
/// tracing::info!("registering");
/// ```
pub fn registration_span(model_key: &str) -> tracing::Span {
    tracing::info_span!("admin_register", model = model_key)
}
