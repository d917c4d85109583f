use api::{AdminStats, Note};
use dioxus::prelude::*;
use futures_util::future::join;
use ui::{platform, use_auth, ErrorAlert, Loader};

use super::Protected;

#[component]
pub fn Admin() -> Element {
    rsx! {
        Protected { admin_only: true, AdminPanel {} }
    }
}

#[component]
fn AdminPanel() -> Element {
    let auth = use_auth();
    let mut stats = use_signal(|| Option::<AdminStats>::None);
    let mut notes = use_signal(Vec::<Note>::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        loading.set(true);
        error.set(None);
        let client = auth.client();
        match join(client.admin_stats(), client.admin_notes()).await {
            (Ok(loaded_stats), Ok(all_notes)) => {
                stats.set(Some(loaded_stats));
                notes.set(all_notes);
            }
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!("Failed to load admin data: {}", e);
                error.set(Some("Failed to load admin data".to_string()));
            }
        }
        loading.set(false);
    });

    let handle_delete = move |id: String| {
        if !platform::confirm("Delete this note?") {
            return;
        }
        spawn(async move {
            match auth.client().admin_delete_note(&id).await {
                Ok(()) => {
                    tracing::info!("Admin removed note {}", id);
                    notes.write().retain(|n| n.id != id);
                }
                Err(e) => {
                    tracing::warn!("Admin delete of {} failed: {}", id, e);
                    error.set(Some("Delete failed".to_string()));
                }
            }
        });
    };

    if loading() {
        return rsx! { Loader {} };
    }

    rsx! {
        section {
            class: "space-y-6",

            div {
                class: "rounded-xl border border-white/10 bg-white/5 p-4 shadow-lg",
                h2 { class: "text-xl font-semibold text-white", "Admin Dashboard" }
                if let Some(err) = error() {
                    div { class: "mt-2", ErrorAlert { message: err } }
                }
                if let Some(s) = stats() {
                    div {
                        class: "mt-3 flex flex-wrap gap-3 text-sm text-slate-200",
                        span { class: "rounded bg-white/10 px-3 py-2", "Users: {s.users}" }
                        span { class: "rounded bg-white/10 px-3 py-2", "Notes: {s.notes}" }
                        span { class: "rounded bg-white/10 px-3 py-2", "Likes: {s.likes}" }
                    }
                }
            }

            div {
                class: "space-y-3",
                h3 { class: "text-lg font-semibold text-white", "All Notes" }
                if notes.read().is_empty() {
                    p { class: "text-sm text-slate-400", "No notes found." }
                }
                for note in notes() {
                    div {
                        key: "{note.id}",
                        class: "rounded-xl border border-white/10 bg-white/5 p-4",
                        div {
                            class: "flex flex-wrap items-start justify-between gap-3",
                            div {
                                h4 { class: "text-base font-semibold text-white", "{note.title}" }
                                p { class: "text-sm text-slate-300", "{note.description}" }
                                p { class: "text-xs text-slate-500", "By {note.author_name()}" }
                            }
                            div {
                                class: "flex items-center gap-2 text-sm",
                                span { class: "rounded bg-sky-500/15 px-2 py-1 text-sky-200", "{note.like_count()} likes" }
                                button {
                                    class: "rounded bg-red-500 px-3 py-1 text-white hover:bg-red-400",
                                    onclick: {
                                        let id = note.id.clone();
                                        move |_| handle_delete(id.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
