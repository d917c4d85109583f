use dioxus::prelude::*;

#[component]
pub fn Loader() -> Element {
    rsx! {
        div {
            class: "flex min-h-[50vh] items-center justify-center",
            div { class: "h-8 w-8 animate-spin rounded-full border-2 border-sky-400 border-t-transparent" }
        }
    }
}
