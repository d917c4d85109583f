use api::{Note, NoteFields, NotesQuery};
use dioxus::prelude::*;
use futures_util::future::join;
use ui::{platform, use_auth, ErrorAlert, Loader};

use super::Protected;
use crate::Route;

/// Page size for the personal lists.
const LIST_LIMIT: u32 = 50;

const FIELD_CLASS: &str = "w-full rounded-lg border border-white/10 bg-white/5 px-3 py-2 text-white focus:border-sky-400/70 focus:outline-none";

/// A note being edited in the modal.
#[derive(Clone, Debug, PartialEq)]
struct Editing {
    id: String,
    fields: NoteFields,
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Protected { DashboardPanel {} }
    }
}

#[component]
fn DashboardPanel() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut notes = use_signal(Vec::<Note>::new);
    let mut favorites = use_signal(Vec::<Note>::new);
    let mut editing = use_signal(|| Option::<Editing>::None);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        loading.set(true);
        error.set(None);
        let client = auth.client();
        let mine_query = NotesQuery::mine(LIST_LIMIT);
        let favorites_query = NotesQuery::favorites(LIST_LIMIT);
        let (mine, favs) = join(
            client.list_notes(&mine_query),
            client.list_notes(&favorites_query),
        )
        .await;
        match (mine, favs) {
            (Ok(mine), Ok(favs)) => {
                notes.set(mine.data);
                favorites.set(favs.data);
            }
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!("Failed to load dashboard: {}", e);
                error.set(Some("Failed to load your notes".to_string()));
            }
        }
        loading.set(false);
    });

    let handle_delete = move |id: String| {
        if !platform::confirm("Delete this note?") {
            return;
        }
        spawn(async move {
            match auth.client().delete_note(&id).await {
                Ok(()) => notes.write().retain(|n| n.id != id),
                Err(e) => {
                    tracing::warn!("Delete of {} failed: {}", id, e);
                    error.set(Some("Delete failed".to_string()));
                }
            }
        });
    };

    let handle_update = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(edit) = editing() else {
            return;
        };
        spawn(async move {
            match auth.client().update_note(&edit.id, &edit.fields).await {
                Ok(updated) => {
                    if let Some(slot) = notes.write().iter_mut().find(|n| n.id == edit.id) {
                        *slot = updated;
                    }
                    editing.set(None);
                }
                Err(e) => {
                    tracing::warn!("Update of {} failed: {}", edit.id, e);
                    error.set(Some("Update failed".to_string()));
                }
            }
        });
    };

    let total_likes: usize = notes.read().iter().map(Note::like_count).sum();
    let config = auth.config();

    rsx! {
        section {
            class: "space-y-6",

            div {
                class: "rounded-xl border border-white/10 bg-white/5 p-4 shadow-lg ring-1 ring-white/5",
                h2 { class: "text-xl font-semibold text-white", "Dashboard" }
                p { class: "text-slate-300", "Uploaded notes: {notes.read().len()} · Total likes: {total_likes}" }
            }

            if loading() {
                Loader {}
            } else if let Some(err) = error() {
                ErrorAlert { message: err }
            } else if notes.read().is_empty() {
                p { class: "text-slate-400", "You have not uploaded any notes yet." }
            } else {
                div {
                    class: "space-y-4",
                    for note in notes() {
                        div {
                            key: "{note.id}",
                            class: "rounded-xl border border-white/10 bg-white/5 p-4 shadow-lg ring-1 ring-white/5",
                            div {
                                class: "flex flex-wrap items-start justify-between gap-3",
                                div {
                                    h3 { class: "text-lg font-semibold text-white", "{note.title}" }
                                    p { class: "text-sm text-slate-200/90", "{note.description}" }
                                    p { class: "text-xs text-slate-400", "Category: {note.category}" }
                                }
                                div {
                                    class: "flex items-center gap-2 text-sm",
                                    span {
                                        class: "rounded bg-sky-500/15 px-2 py-1 text-sky-100 ring-1 ring-sky-400/30",
                                        "{note.like_count()} likes"
                                    }
                                    a {
                                        class: "rounded border border-white/10 px-3 py-1 text-slate-100 hover:border-sky-300/50",
                                        href: "{config.build_file_url(&note.file_url)}",
                                        target: "_blank",
                                        rel: "noreferrer",
                                        "Download"
                                    }
                                    button {
                                        class: "rounded bg-slate-800 px-3 py-1 text-white hover:bg-slate-700",
                                        onclick: {
                                            let edit = Editing { id: note.id.clone(), fields: NoteFields::from_note(&note) };
                                            move |_| editing.set(Some(edit.clone()))
                                        },
                                        "Edit"
                                    }
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

            div {
                class: "space-y-3",
                h3 { class: "text-lg font-semibold text-white", "Favorites" }
                if !loading() && favorites.read().is_empty() {
                    p { class: "text-slate-400", "No favorites yet." }
                }
                div {
                    class: "grid gap-3 sm:grid-cols-2",
                    for fav in favorites() {
                        div {
                            key: "{fav.id}",
                            class: "flex items-start justify-between rounded-lg border border-white/10 bg-white/5 p-3",
                            div {
                                p { class: "font-semibold text-white", "{fav.title}" }
                                p { class: "text-sm text-slate-400", "{fav.category}" }
                            }
                            button {
                                class: "text-sm text-sky-300",
                                onclick: {
                                    let id = fav.id.clone();
                                    move |_| {
                                        nav.push(Route::NoteDetail { id: id.clone() });
                                    }
                                },
                                "View"
                            }
                        }
                    }
                }
            }
        }

        if let Some(edit) = editing() {
            div {
                class: "fixed inset-0 z-40 flex items-center justify-center bg-black/60 p-4",
                onclick: move |_| editing.set(None),
                form {
                    class: "w-full max-w-lg space-y-3 rounded-xl border border-white/10 bg-slate-900 p-5 shadow-2xl",
                    onclick: move |evt| evt.stop_propagation(),
                    onsubmit: handle_update,
                    h3 { class: "text-lg font-semibold text-white", "Edit note" }
                    input {
                        class: FIELD_CLASS,
                        value: edit.fields.title.clone(),
                        oninput: move |evt| {
                            if let Some(e) = editing.write().as_mut() {
                                e.fields.title = evt.value();
                            }
                        },
                    }
                    textarea {
                        class: FIELD_CLASS,
                        rows: 3,
                        value: edit.fields.description.clone(),
                        oninput: move |evt| {
                            if let Some(e) = editing.write().as_mut() {
                                e.fields.description = evt.value();
                            }
                        },
                    }
                    input {
                        class: FIELD_CLASS,
                        value: edit.fields.category.clone(),
                        oninput: move |evt| {
                            if let Some(e) = editing.write().as_mut() {
                                e.fields.category = evt.value();
                            }
                        },
                    }
                    div {
                        class: "flex justify-end gap-2",
                        button {
                            class: "rounded-lg border border-white/10 px-3 py-2 text-slate-100 hover:border-sky-300/50",
                            r#type: "button",
                            onclick: move |_| editing.set(None),
                            "Cancel"
                        }
                        button {
                            class: "rounded-lg bg-sky-500 px-3 py-2 text-white hover:bg-sky-400",
                            r#type: "submit",
                            "Save"
                        }
                    }
                }
            }
        }
    }
}
