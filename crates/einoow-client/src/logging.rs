use tracing_subscriber::EnvFilter;

/// Directives used when no `EINOOW_LOG` filter was set at build time.
const DEFAULT_FILTER: &str = if cfg!(debug_assertions) {
    "info,einoow_core=debug,einoow_client=debug"
} else {
    "info"
};

fn filter() -> EnvFilter {
    let directives = option_env!("EINOOW_LOG").unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Route `tracing` events to the browser console.
#[cfg(target_family = "wasm")]
pub fn init() {
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    if let Err(e) = tracing_subscriber::registry()
        .with(filter())
        .with(fmt_layer)
        .try_init()
    {
        crate::diag::console_warn!("tracing subscriber not installed: {e}");
    }
}

#[cfg(not(target_family = "wasm"))]
pub fn init() {
    let _ = tracing_subscriber::fmt().with_env_filter(filter()).try_init();
}
