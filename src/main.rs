#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod ui;
mod util;

use dioxus::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::{
    app::Startup,
    domain::{AppState, CalculationInput, ConfigStatus},
    util::{
        config::{config_file, load_config_from, AppConfig},
        version::{version_label, APP_NAME},
    },
};

const DEFAULT_LOG_FILTER: &str = "info";

fn main() {
    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    // Config is read before logging so it can carry the log filter; its outcome is
    // logged right after the subscriber is up.
    let path = config_file();
    let loaded = path.as_deref().map(load_config_from).transpose();

    let log_filter = match &loaded {
        Ok(Some(Some(config))) => config.log_filter.clone(),
        _ => None,
    };
    init_tracing(log_filter.as_deref());
    info!(version = %version_label(), "starting {APP_NAME}");

    let startup = match (path, loaded) {
        (Some(path), Ok(Some(Some(config)))) => {
            info!(path = %path.display(), "loaded config");
            startup_from(&config, ConfigStatus::Loaded(path), None)
        }
        (Some(path), Err(err)) => {
            warn!(error = %err, "ignoring config file");
            let message = err.to_string();
            startup_from(
                &AppConfig::default(),
                ConfigStatus::Failed {
                    path,
                    message: message.clone(),
                },
                Some(format!("Config ignored: {message}")),
            )
        }
        _ => {
            info!("no config file, using built-in defaults");
            startup_from(&AppConfig::default(), ConfigStatus::BuiltIn, None)
        }
    };

    let builder = LaunchBuilder::new().with_context(startup);

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(config)
    };

    builder.launch(app::App);
}

/// `RUST_LOG` wins over the config file's filter, which wins over `info`.
fn init_tracing(config_filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_filter.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn startup_from(config: &AppConfig, status: ConfigStatus, notice: Option<String>) -> Startup {
    let baseline: CalculationInput = config.defaults.apply();
    Startup {
        state: AppState::new(baseline, config.currency(), status),
        notice,
    }
}
