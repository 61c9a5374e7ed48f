use tastegraph_core::config::Config;
use tracing::info;

mod ui;

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    configure_logging();
    let config = Config::load();

    info!(
        "Starting tastegraph (join delay {:?}, match {})",
        config.join_delay, config.match_percentage
    );

    ui::launch_app(ui::AppContext { config });
}
