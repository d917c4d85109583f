use dioxus::prelude::*;

/// Inline error message.
#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx! {
        p {
            class: "rounded-lg bg-red-500/10 p-3 text-sm text-red-300 ring-1 ring-red-500/30",
            "{message}"
        }
    }
}

/// Inline success message.
#[component]
pub fn NoticeAlert(message: String) -> Element {
    rsx! {
        p {
            class: "rounded-lg bg-emerald-500/10 p-3 text-sm text-emerald-300 ring-1 ring-emerald-500/30",
            "{message}"
        }
    }
}
