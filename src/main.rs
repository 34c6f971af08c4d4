use dioxus::prelude::*;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use wmilist::io::backend::{ConsoleBackend, HttpBackend, RecordingBackend};
use wmilist::io::config::Config;
use wmilist::ui::app::App;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wmilist=info")),
        )
        .init();

    let config = match Config::default_path().and_then(|path| Config::load(&path)) {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "using default configuration");
            Config::default()
        }
    };

    let backend = if config.backend.offline {
        ConsoleBackend::Recording(RecordingBackend::new())
    } else {
        match HttpBackend::new(&config.backend.base_url) {
            Ok(backend) => ConsoleBackend::Http(backend),
            Err(err) => {
                error!(error = %err, "cannot reach the console backend");
                std::process::exit(1);
            }
        }
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("Licorn WMI lists")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 800.0)),
            ),
        )
        .with_context(config)
        .with_context(backend)
        .launch(App);
}
