use dioxus::prelude::*;
use tracing::debug;

use crate::dashboard::Dashboard;
use crate::i18n::FALLBACK_LANGUAGE;

#[component]
pub fn DashboardPage() -> Element {
    // Subscribe to the global language code (if provided) so text re-renders on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code
        .as_ref()
        .map(|code| code())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());

    debug!(lang = %lang_current, "dashboard page render");

    rsx! {
        section { class: "page page-dashboard",
            div { style: "display:none", "{lang_current}" }
            h1 { {crate::t!("dashboard-title")} }
            p { class: "page-dashboard__intro", {crate::t!("dashboard-intro")} }
            Dashboard {}
        }
    }
}
