use api::{FavoriteState, IdentityPatch, LikeState, Note};
use dioxus::prelude::*;
use ui::{icons, platform, use_auth, ErrorAlert, Icon, Loader};

/// How long the copy button reads "Copied!".
const COPIED_MS: u64 = 2000;

#[component]
pub fn NoteDetail(id: String) -> Element {
    // Track the id in a signal so the loader re-runs when the route param changes
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let auth = use_auth();
    let mut note = use_signal(|| Option::<Note>::None);
    let mut like_state = use_signal(LikeState::default);
    let mut favorite_state = use_signal(FavoriteState::default);
    let mut preview_text = use_signal(|| Option::<String>::None);
    let mut comment = use_signal(String::new);
    let mut copied = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            loading.set(true);
            error.set(None);
            note.set(None);
            preview_text.set(None);
            let client = auth.client();
            match client.get_note(&id).await {
                Ok(loaded) => {
                    let user = auth.peek_user();
                    like_state.set(loaded.like_state_for(user.as_ref().map(|u| u.id.as_str())));
                    favorite_state.set(FavoriteState {
                        favorited: user.is_some_and(|u| u.has_favorite(&loaded.id)),
                    });
                    if loaded.is_text() {
                        // Preview failures leave the page usable
                        match client.fetch_preview(&loaded.file_url).await {
                            Ok(text) => preview_text.set(Some(text)),
                            Err(e) => tracing::debug!("Preview unavailable: {}", e),
                        }
                    }
                    note.set(Some(loaded));
                }
                Err(e) => {
                    tracing::warn!("Failed to load note {}: {}", id, e);
                    error.set(Some("Failed to load note".to_string()));
                }
            }
            loading.set(false);
        }
    });

    let handle_like = move |_| {
        if auth.user().is_none() {
            error.set(Some("Login to like notes".to_string()));
            return;
        }
        spawn(async move {
            match auth.client().like_note(&id_signal()).await {
                Ok(state) => like_state.set(state),
                Err(e) => error.set(Some(e.message_or("Unable to like note"))),
            }
        });
    };

    let handle_favorite = move |_| {
        if auth.user().is_none() {
            error.set(Some("Login to favorite notes".to_string()));
            return;
        }
        spawn(async move {
            let id = id_signal();
            match auth.client().favorite_note(&id).await {
                Ok(state) => {
                    favorite_state.set(state);
                    auth.patch(IdentityPatch::favorite(id, state.favorited));
                }
                Err(e) => error.set(Some(e.message_or("Unable to favorite"))),
            }
        });
    };

    let handle_comment = move |evt: FormEvent| {
        evt.prevent_default();
        if auth.user().is_none() {
            error.set(Some("Login to comment".to_string()));
            return;
        }
        let text = comment().trim().to_string();
        if text.is_empty() {
            return;
        }
        spawn(async move {
            match auth.client().comment_on_note(&id_signal(), &text).await {
                Ok(comments) => {
                    if let Some(current) = note.write().as_mut() {
                        current.comments = comments;
                    }
                    comment.set(String::new());
                }
                Err(e) => error.set(Some(e.message_or("Unable to comment"))),
            }
        });
    };

    let share_link = format!("{}/notes/{}", platform::origin(), id_signal());
    let handle_copy = {
        let share_link = share_link.clone();
        move |_| {
            platform::copy_to_clipboard(&share_link);
            copied.set(true);
            spawn(async move {
                platform::sleep_ms(COPIED_MS).await;
                copied.set(false);
            });
        }
    };

    if loading() {
        return rsx! { Loader {} };
    }
    let Some(note) = note() else {
        return match error() {
            Some(err) => rsx! { ErrorAlert { message: err } },
            None => rsx! {},
        };
    };

    let config = auth.config();
    let file_href = config.build_file_url(&note.file_url);
    let likes = like_state();
    let favorited = favorite_state().favorited;

    rsx! {
        section {
            class: "space-y-6",

            if let Some(err) = error() {
                ErrorAlert { message: err }
            }

            div {
                class: "rounded-2xl border border-white/10 bg-white/5 p-6 backdrop-blur",

                div {
                    class: "flex flex-col gap-4 sm:flex-row sm:items-start sm:justify-between",
                    div {
                        h1 { class: "text-2xl font-bold text-white", "{note.title}" }
                        p { class: "mt-1 text-sm text-slate-400", "By {note.author_name()}" }
                    }
                    span {
                        class: "inline-flex w-fit rounded-full bg-sky-500/15 px-4 py-1.5 text-sm font-medium text-sky-300 ring-1 ring-sky-500/30",
                        "{note.category}"
                    }
                }

                p { class: "mt-4 text-slate-300", "{note.description}" }

                div {
                    class: "mt-6 flex flex-wrap items-center gap-3",
                    a {
                        class: "inline-flex items-center gap-2 rounded-xl bg-gradient-to-r from-sky-500 to-cyan-400 px-5 py-2.5 text-sm font-semibold text-slate-900 shadow-lg shadow-sky-500/25",
                        href: "{file_href}",
                        target: "_blank",
                        rel: "noreferrer",
                        Icon { width: 14, height: 14, fill: "currentColor", icon: icons::FaDownload }
                        "Download"
                    }
                    button {
                        class: if likes.liked {
                            "inline-flex items-center gap-2 rounded-xl border border-rose-500/30 bg-rose-500/15 px-4 py-2.5 text-sm font-medium text-rose-300"
                        } else {
                            "inline-flex items-center gap-2 rounded-xl border border-white/10 bg-white/5 px-4 py-2.5 text-sm font-medium text-slate-300 hover:border-rose-500/30 hover:text-rose-300"
                        },
                        onclick: handle_like,
                        Icon { width: 14, height: 14, fill: "currentColor", icon: icons::FaHeart }
                        "{likes.likes}"
                    }
                    button {
                        class: if favorited {
                            "inline-flex items-center gap-2 rounded-xl border border-amber-500/30 bg-amber-500/15 px-4 py-2.5 text-sm font-medium text-amber-300"
                        } else {
                            "inline-flex items-center gap-2 rounded-xl border border-white/10 bg-white/5 px-4 py-2.5 text-sm font-medium text-slate-300 hover:border-amber-500/30 hover:text-amber-300"
                        },
                        onclick: handle_favorite,
                        Icon { width: 14, height: 14, fill: "currentColor", icon: icons::FaStar }
                        if favorited { "Saved" } else { "Save" }
                    }
                }

                div {
                    class: "mt-4 flex flex-wrap items-center gap-2",
                    Icon { width: 14, height: 14, fill: "currentColor", class: "text-slate-500", icon: icons::FaLink }
                    input {
                        class: "flex-1 rounded-lg border border-white/10 bg-white/5 px-3 py-2 text-sm text-slate-300 focus:outline-none",
                        readonly: true,
                        value: "{share_link}",
                    }
                    button {
                        class: "rounded-lg border border-white/10 bg-white/5 px-4 py-2 text-sm font-medium text-slate-300 hover:border-sky-400/40 hover:text-sky-300",
                        onclick: handle_copy,
                        if copied() { "Copied!" } else { "Copy" }
                    }
                }

                if note.is_pdf() {
                    div {
                        class: "mt-6 h-[500px] overflow-hidden rounded-xl border border-white/10",
                        iframe { title: "Preview", src: "{file_href}", class: "h-full w-full bg-white" }
                    }
                }

                if let Some(text) = preview_text() {
                    div {
                        class: "mt-6 rounded-xl border border-white/10 bg-white/5 p-4",
                        p { class: "mb-2 text-sm font-semibold text-slate-300", "Preview" }
                        pre { class: "whitespace-pre-wrap text-sm text-slate-400", "{text}" }
                    }
                }
            }

            div {
                class: "rounded-2xl border border-white/10 bg-white/5 p-6 backdrop-blur",

                div {
                    class: "mb-4 flex items-center gap-2",
                    Icon { width: 18, height: 18, fill: "currentColor", class: "text-slate-400", icon: icons::FaComment }
                    h3 { class: "text-lg font-semibold text-white", "Comments" }
                    span {
                        class: "rounded-full bg-white/10 px-2 py-0.5 text-xs text-slate-400",
                        "{note.comments.len()}"
                    }
                }

                form {
                    class: "mb-5 flex gap-2",
                    onsubmit: handle_comment,
                    input {
                        class: "flex-1 rounded-xl border border-white/10 bg-white/5 px-4 py-2.5 text-sm text-white placeholder:text-slate-500 focus:border-sky-400/50 focus:outline-none",
                        placeholder: "Write a comment...",
                        value: comment(),
                        oninput: move |evt| comment.set(evt.value()),
                    }
                    button {
                        class: "inline-flex items-center gap-2 rounded-xl bg-sky-500 px-5 py-2.5 text-sm font-semibold text-white shadow-lg shadow-sky-500/25 hover:bg-sky-400",
                        r#type: "submit",
                        Icon { width: 12, height: 12, fill: "currentColor", icon: icons::FaPaperPlane }
                        "Post"
                    }
                }

                div {
                    class: "space-y-3",
                    if note.comments.is_empty() {
                        p { class: "text-sm text-slate-500", "No comments yet. Be the first to comment!" }
                    }
                    for c in note.comments.iter() {
                        div {
                            key: "{c.id}",
                            class: "rounded-xl border border-white/5 bg-white/[0.03] p-4",
                            p { class: "text-sm text-slate-200", "{c.text}" }
                            p { class: "mt-1 text-xs text-slate-500", "{c.author_name()}" }
                        }
                    }
                }
            }
        }
    }
}
