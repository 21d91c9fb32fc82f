use dioxus::prelude::*;

use crate::{
    domain::{AppState, ConfigStatus},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::{
        config::{config_file, CONFIG_PATH_ENV},
        version::{version_label, APP_NAME},
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (status_label, status_detail) = state.with(|st| config_status_text(&st.config));
    let expected_path = config_file()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "no config directory on this platform".to_string());
    let baseline_json = state.with(|st| {
        serde_json::to_string_pretty(&st.baseline).unwrap_or_else(|err| err.to_string())
    });

    let on_reset = move |_| {
        let mut state = state;
        state.with_mut(|st| st.reset_input());
        push_toast(toasts, ToastKind::Success, "Restored the session's default parameters.");
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::PANEL} p-6",
                h2 { class: theme::SECTION_TITLE, "Parameters" }
                p { class: "mt-2 text-sm text-slate-400",
                    "Scenarios are not saved. Reset brings back the defaults this session started with."
                }
                div { class: "mt-4 flex gap-3",
                    button { class: theme::BTN_PRIMARY, onclick: on_reset, "Reset Defaults" }
                }
                pre { class: "mt-4 overflow-x-auto rounded-lg bg-slate-950 p-4 text-xs text-slate-300",
                    "{baseline_json}"
                }
            }

            section {
                class: "{theme::PANEL} p-6",
                h2 { class: theme::SECTION_TITLE, "Configuration" }
                div { class: "mt-3 space-y-2 text-sm",
                    p { class: "text-slate-300", "{status_label}" }
                    if let Some(detail) = status_detail {
                        p { class: "text-xs text-rose-300", "{detail}" }
                    }
                    p { class: "text-xs {theme::TEXT_MUTED}",
                        "Looked up at {expected_path} (override with {CONFIG_PATH_ENV})."
                    }
                }
            }

            section {
                class: "flex flex-col items-center gap-1 {theme::PANEL} p-6 text-center text-slate-400",
                p { class: "text-sm", "{APP_NAME}" }
                p { class: "text-xs text-slate-500", {version_label()} }
            }
        }
    }
}

fn config_status_text(status: &ConfigStatus) -> (String, Option<String>) {
    match status {
        ConfigStatus::BuiltIn => ("Using built-in defaults.".to_string(), None),
        ConfigStatus::Loaded(path) => (format!("Loaded {}", path.display()), None),
        ConfigStatus::Failed { path, message } => (
            format!("Ignored {} (using built-in defaults)", path.display()),
            Some(message.clone()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn failed_config_shows_reason() {
        let status = ConfigStatus::Failed {
            path: PathBuf::from("/tmp/config.json"),
            message: "expected value at line 1".to_string(),
        };
        let (label, detail) = config_status_text(&status);
        assert_eq!(label, "Ignored /tmp/config.json (using built-in defaults)");
        assert_eq!(detail.as_deref(), Some("expected value at line 1"));
    }

    #[test]
    fn builtin_has_no_detail() {
        assert_eq!(config_status_text(&ConfigStatus::BuiltIn).1, None);
    }
}
