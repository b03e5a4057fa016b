//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! - LOG_LEVEL controls the filter (e.g. "debug" or
//!   "info,worksheet_engine::arithmetic=debug").
//! - LOG_FORMAT selects "pretty" (default) or "json" structured logs.
//!
//! The library only emits events; binaries and demos call [`init_tracing`].

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("info,worksheet_engine=info,worksheet_drill_gen=info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    // A second init (tests, repeated demo runs in one process) is not an error.
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => {
            let _ = builder.json().try_init();
        }
        _ => {
            let _ = builder.try_init();
        }
    }
}
