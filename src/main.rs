//! DevDay Challenge - desktop frontend
//!
//! Challenge, my-page and settings screens backed by the user, challenge and pay services.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use challenge_app::app::App;

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("challenge_app=info")))
        .init();

    info!("Starting DevDay Challenge v{}", env!("CARGO_PKG_VERSION"));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::default().with_window(
                WindowBuilder::new()
                    .with_title("DevDay Challenge")
                    .with_inner_size(LogicalSize::new(430.0, 880.0)),
            ),
        )
        .launch(App);
}
