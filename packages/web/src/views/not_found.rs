use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("No route for /{}", segments.join("/"));

    rsx! {
        div {
            class: "flex min-h-[60vh] flex-col items-center justify-center gap-6 text-center",
            div {
                class: "rounded-2xl border border-white/10 bg-white/5 px-10 py-12 shadow-2xl backdrop-blur",
                p { class: "text-sm font-semibold uppercase tracking-[0.2em] text-cyan-200/80", "404" }
                h1 { class: "mt-2 text-3xl font-bold text-white", "Page not found" }
                p {
                    class: "mt-3 max-w-xl text-slate-300/80",
                    "The page you are looking for doesn't exist or might have moved."
                }
                div {
                    class: "mt-6 flex flex-wrap justify-center gap-3",
                    Link {
                        class: "rounded-lg bg-cyan-400 px-5 py-2 text-sm font-semibold text-slate-900",
                        to: Route::Login {},
                        "Go to login"
                    }
                    Link {
                        class: "rounded-lg border border-white/20 bg-white/5 px-5 py-2 text-sm font-semibold text-white",
                        to: Route::Notes {},
                        "View notes"
                    }
                }
            }
        }
    }
}
