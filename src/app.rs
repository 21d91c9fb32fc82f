use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{DashboardPage, DetailsPage, SettingsPage},
        shell::Shell,
    },
    util::assets,
};

/// Handed from `main` to the root component through the launch context.
#[derive(Clone, Debug)]
pub struct Startup {
    pub state: AppState,
    /// Shown once as a warning toast, e.g. when the config file was rejected.
    pub notice: Option<String>,
}

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/details")]
    Details {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let startup = use_context::<Startup>();

    let state = use_signal(|| startup.state.clone());
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    use_hook(move || {
        if let Some(notice) = startup.notice.clone() {
            push_toast(toasts, ToastKind::Warning, notice);
        }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn Details() -> Element {
    rsx! { Shell { DetailsPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
