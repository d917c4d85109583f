use api::Document;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use crate::icons;

#[component]
pub fn DocumentCard(doc: Document, on_delete: EventHandler<String>) -> Element {
    let href = crate::use_auth().config().upload_file_url(&doc.file);
    let id = doc.id.clone();

    rsx! {
        article {
            class: "group flex flex-col gap-3 rounded-xl border border-white/10 bg-white/5 p-4 transition hover:border-violet-400/30",
            div {
                class: "flex items-start justify-between gap-2",
                div {
                    class: "flex items-center gap-2 min-w-0",
                    Icon { width: 16, height: 16, fill: "currentColor", class: "shrink-0 text-violet-300", icon: icons::FaFileLines }
                    h3 { class: "truncate text-sm font-semibold text-white", "{doc.title}" }
                }
                span {
                    class: "shrink-0 rounded-full px-2 py-0.5 text-[11px] font-medium ring-1 {doc.category.badge_class()}",
                    "{doc.category}"
                }
            }
            if !doc.description.is_empty() {
                p { class: "line-clamp-2 text-xs text-slate-400", "{doc.description}" }
            }
            div {
                class: "mt-auto flex items-center justify-between text-xs text-slate-500",
                span { "{doc.created_label()}" }
                div {
                    class: "flex items-center gap-2",
                    a {
                        class: "rounded-md px-2 py-1 text-violet-300 hover:bg-violet-500/10",
                        href: "{href}",
                        target: "_blank",
                        rel: "noreferrer",
                        "View"
                    }
                    button {
                        class: "rounded-md px-2 py-1 text-red-300 hover:bg-red-500/10",
                        onclick: move |_| on_delete.call(id.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

/// Empty-state heading and hint. An empty vault invites a first upload; otherwise
/// the search or filter simply matched nothing.
pub fn empty_state(vault_empty: bool) -> (&'static str, &'static str) {
    if vault_empty {
        ("No documents yet", "Upload your first private document")
    } else {
        ("No documents found", "Try a different search or category")
    }
}

/// Grid of vault documents; shows an empty state when nothing matches.
#[component]
pub fn DocumentGrid(
    docs: Vec<Document>,
    #[props(default)] vault_empty: bool,
    on_delete: EventHandler<String>,
) -> Element {
    if docs.is_empty() {
        let (heading, hint) = empty_state(vault_empty);
        return rsx! {
            div {
                class: "rounded-xl border border-white/10 bg-white/5 p-12 text-center backdrop-blur",
                Icon { width: 48, height: 48, fill: "currentColor", class: "mx-auto mb-4 text-slate-500", icon: icons::FaFolderOpen }
                p { class: "text-lg font-medium text-white", "{heading}" }
                p { class: "mt-1 text-sm text-slate-400", "{hint}" }
            }
        };
    }

    rsx! {
        div {
            class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
            for doc in docs {
                DocumentCard { key: "{doc.id}", doc: doc.clone(), on_delete }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vault_prompts_first_upload() {
        assert_eq!(
            empty_state(true),
            ("No documents yet", "Upload your first private document")
        );
        assert_eq!(empty_state(false).0, "No documents found");
    }
}
