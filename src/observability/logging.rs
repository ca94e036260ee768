use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes logging for a CLI run.
///
/// Respects RUST_LOG if set; otherwise defaults to verbose for our crate.
/// Setting IMPORTER_LOG_DIR additionally mirrors JSON logs into a daily
/// rolling file under that directory.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("catalog_importer=debug,info"));

    match std::env::var("IMPORTER_LOG_DIR") {
        Ok(dir) => {
            let console_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
            let _ = std::fs::create_dir_all(&dir);
            let file_appender = tracing_appender::rolling::daily(dir, "importer.log");
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::layer().json().with_writer(non_blocking_writer);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .with(console_layer)
                .init();

            // Keep the guard alive so buffered logs are flushed on exit
            std::mem::forget(guard);
        }
        Err(_) => {
            let console_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .init();
        }
    }
}
