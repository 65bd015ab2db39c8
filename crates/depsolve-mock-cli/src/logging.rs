use std::io;

use tracing_subscriber::EnvFilter;

pub(crate) const LOG_ENV: &str = "DEPSOLVE_MOCK_LOG";

/// Installs a stderr subscriber only when `DEPSOLVE_MOCK_LOG` is set, so the
/// default stderr stream carries nothing but fatal diagnostics.
pub(crate) fn init_logging() {
    let Some(filter) = env_filter(std::env::var(LOG_ENV).ok().as_deref()) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_ansi(false)
        .try_init();
}

fn env_filter(directives: Option<&str>) -> Option<EnvFilter> {
    let directives = directives?.trim();
    if directives.is_empty() {
        return None;
    }
    Some(EnvFilter::new(directives))
}
