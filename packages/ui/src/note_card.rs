use api::Note;
use dioxus::prelude::*;

/// Card for one note in the feed.
#[component]
pub fn NoteCard(note: Note, on_view: EventHandler<String>) -> Element {
    let file_href = crate::use_auth().config().build_file_url(&note.file_url);
    let id = note.id.clone();

    rsx! {
        article {
            class: "flex flex-col gap-3 rounded-xl border border-white/10 bg-white/5 p-4 shadow-lg ring-1 ring-white/5 transition hover:-translate-y-1",
            div {
                class: "flex items-start justify-between gap-2",
                h3 { class: "text-lg font-semibold text-slate-100", "{note.title}" }
                span {
                    class: "rounded-full bg-sky-500/15 px-2 py-1 text-xs font-medium text-sky-200 ring-1 ring-sky-400/40",
                    "{note.category}"
                }
            }
            p { class: "line-clamp-2 text-sm text-slate-200/80", "{note.description}" }
            div {
                class: "flex items-center justify-between text-xs text-slate-400",
                span { "By {note.author_name()}" }
                span { "{note.like_count()} likes" }
            }
            div {
                class: "flex items-center gap-2",
                a {
                    class: "w-full rounded-lg border border-white/10 px-3 py-2 text-center text-sm text-slate-100 hover:border-sky-400/60 hover:text-white",
                    href: "{file_href}",
                    target: "_blank",
                    rel: "noreferrer",
                    "Download"
                }
                button {
                    class: "w-full rounded-lg bg-sky-600 px-3 py-2 text-center text-sm text-white shadow hover:bg-sky-500",
                    onclick: move |_| on_view.call(id.clone()),
                    "View"
                }
            }
        }
    }
}
