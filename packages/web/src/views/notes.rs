use api::{Note, NotesQuery};
use dioxus::prelude::*;
use store::feed::{category_options, group_by_category};
use store::models::CategoryCount;
use store::{Pagination, SortOrder};
use ui::{use_auth, ErrorAlert, Loader, NoteCard};

use crate::Route;

const CONTROL_CLASS: &str = "rounded-lg border border-white/10 bg-white/5 px-3 py-2 text-slate-100 focus:border-sky-400/70 focus:outline-none";

/// Public note feed with search, category filter, sorting and paging.
#[component]
pub fn Notes() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let mut notes = use_signal(Vec::<Note>::new);
    let mut category_meta = use_signal(Vec::<CategoryCount>::new);
    let mut search = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut sort = use_signal(SortOrder::default);
    let mut page = use_signal(|| 1u32);
    let mut pages = use_signal(|| 1u32);
    // Bumped by Apply and the category chips to refetch with the current filters
    let mut refresh = use_signal(|| 0u32);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let query = NotesQuery::feed(page(), sort(), &search.peek(), &category.peek());
        let _ = refresh();
        async move {
            loading.set(true);
            error.set(None);
            match auth.client().list_notes(&query).await {
                Ok(result) => {
                    tracing::debug!("Loaded {} notes (page {:?})", result.data.len(), query.page);
                    notes.set(result.data);
                    pages.set(result.pages.max(1));
                    category_meta.set(result.categories);
                }
                Err(e) => {
                    tracing::warn!("Failed to load notes: {}", e);
                    error.set(Some("Failed to load notes".to_string()));
                }
            }
            loading.set(false);
        }
    });

    let handle_apply = move |evt: FormEvent| {
        evt.prevent_default();
        page.set(1);
        *refresh.write() += 1;
    };

    let pager = Pagination {
        page: page(),
        pages: pages(),
    };
    let options = category_options(&notes.read());
    let groups = group_by_category(&notes.read());

    rsx! {
        section {
            class: "space-y-6",

            div {
                class: "flex flex-wrap items-center gap-3 rounded-xl border border-white/10 bg-white/5 p-4 shadow-lg ring-1 ring-white/5",
                form {
                    class: "flex w-full flex-wrap items-center gap-3",
                    onsubmit: handle_apply,
                    input {
                        class: "min-w-[200px] flex-1 {CONTROL_CLASS} placeholder:text-slate-400",
                        r#type: "text",
                        placeholder: "Search by title",
                        value: search(),
                        oninput: move |evt| search.set(evt.value()),
                    }
                    select {
                        class: CONTROL_CLASS,
                        value: category(),
                        onchange: move |evt| category.set(evt.value()),
                        option { value: "", "All categories" }
                        for cat in options {
                            option { key: "{cat}", value: "{cat}", "{cat}" }
                        }
                    }
                    select {
                        class: CONTROL_CLASS,
                        value: sort().as_str(),
                        onchange: move |evt| {
                            if let Ok(order) = evt.value().parse() {
                                sort.set(order);
                            }
                        },
                        option { value: "newest", "Newest" }
                        option { value: "likes", "Most liked" }
                    }
                    button {
                        class: "rounded-lg bg-sky-500 px-4 py-2 text-white shadow hover:bg-sky-400",
                        r#type: "submit",
                        "Apply"
                    }
                }
            }

            if !category_meta.read().is_empty() {
                div {
                    class: "flex flex-wrap gap-2",
                    for meta in category_meta() {
                        button {
                            key: "{meta.category}",
                            class: if category() == meta.category {
                                "rounded-full border border-sky-400/70 bg-sky-500/10 px-3 py-1 text-sm text-sky-100"
                            } else {
                                "rounded-full border border-white/10 px-3 py-1 text-sm text-slate-200 hover:border-sky-300/40"
                            },
                            onclick: {
                                let chosen = meta.category.clone();
                                move |_| {
                                    category.set(chosen.clone());
                                    page.set(1);
                                    *refresh.write() += 1;
                                }
                            },
                            "{meta.category} ({meta.count})"
                        }
                    }
                }
            }

            if loading() {
                Loader {}
            } else if let Some(err) = error() {
                ErrorAlert { message: err }
            } else if groups.is_empty() {
                p { class: "text-slate-300", "No notes found." }
            } else {
                div {
                    class: "space-y-6",
                    for (name, group) in groups {
                        div {
                            key: "{name}",
                            class: "space-y-3",
                            div {
                                class: "flex items-center justify-between",
                                h3 { class: "text-lg font-semibold text-white", "{name}" }
                                span { class: "text-sm text-slate-300", "{group.len()} notes" }
                            }
                            div {
                                class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                                for note in group {
                                    NoteCard {
                                        key: "{note.id}",
                                        note: note.clone(),
                                        on_view: move |id: String| {
                                            nav.push(Route::NoteDetail { id });
                                        },
                                    }
                                }
                            }
                        }
                    }

                    if pager.is_visible() {
                        div {
                            class: "flex items-center justify-center gap-3 text-slate-200",
                            button {
                                class: "rounded-lg border border-white/10 px-3 py-1 hover:border-sky-300/50 disabled:opacity-50",
                                disabled: !pager.has_prev(),
                                onclick: move |_| page.set(pager.prev().page),
                                "Prev"
                            }
                            span { class: "text-sm", "Page {pager.page} of {pager.pages}" }
                            button {
                                class: "rounded-lg border border-white/10 px-3 py-1 hover:border-sky-300/50 disabled:opacity-50",
                                disabled: !pager.has_next(),
                                onclick: move |_| page.set(pager.next().page),
                                "Next"
                            }
                        }
                    }
                }
            }
        }
    }
}
