//! MediVision Admin - Main Entry Point
//!
//! Native admin dashboard for the MediVision medicine catalog backend.

use medivision_admin::app::application::run_app;
use medivision_admin::utils::fs::get_or_create_log_dir;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    // Daily-rotated file log under the platform data dir. The guard keeps
    // the background writer alive until the process exits.
    let file = get_or_create_log_dir().ok().map(|dir| {
        tracing_appender::non_blocking(tracing_appender::rolling::daily(
            dir,
            "medivision-admin.log",
        ))
    });
    let (file_layer, _guard) = match file {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    tracing::info!("Starting MediVision Admin...");

    // Run the GPUI application
    run_app();
}
