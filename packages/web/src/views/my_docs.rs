//! Private documents page: the vault gate, then the document list behind it.

use api::Document;
use dioxus::prelude::*;
use store::{CategoryFilter, DocumentList};
use ui::{
    icons, platform, use_auth, DocumentGrid, ErrorAlert, Icon, Loader, UploadDocumentDialog,
    VaultGate,
};

use super::Protected;

#[component]
pub fn MyDocs() -> Element {
    rsx! {
        Protected { VaultedDocuments {} }
    }
}

#[component]
fn VaultedDocuments() -> Element {
    let auth = use_auth();

    if auth.vault_unlocked() {
        rsx! { DocumentsPanel {} }
    } else {
        rsx! { VaultGate {} }
    }
}

/// Fetches the document list on the first mount after an unlock; later mounts reuse
/// the list held in the session.
#[component]
fn DocumentsPanel() -> Element {
    let auth = use_auth();
    let mut search = use_signal(String::new);
    let mut filter = use_signal(CategoryFilter::default);
    let mut show_upload = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        if !auth.vault_documents_needed() {
            return;
        }
        match auth.client().list_documents().await {
            Ok(list) => {
                tracing::debug!("Loaded {} vault documents", list.len());
                auth.hold_vault_documents(DocumentList::new(list));
            }
            Err(e) => {
                tracing::error!("Failed to load vault documents: {}", e);
                error.set(Some(e.message_or("Failed to load documents")));
            }
        }
    });

    let handle_delete = move |id: String| {
        if !platform::confirm("Delete this document permanently?") {
            return;
        }
        spawn(async move {
            match auth.client().delete_document(&id).await {
                Ok(()) => {
                    auth.edit_vault_documents(|docs| {
                        docs.remove(&id);
                    });
                }
                Err(e) => {
                    tracing::warn!("Failed to delete document {}: {}", id, e);
                    error.set(Some(e.message_or("Delete failed")));
                }
            }
        });
    };

    let handle_uploaded = move |doc: Document| {
        auth.edit_vault_documents(|docs| docs.prepend(doc));
        show_upload.set(false);
    };

    let docs = match (auth.vault_documents(), error()) {
        (Some(docs), _) => docs,
        (None, None) => return rsx! { Loader {} },
        (None, Some(err)) => return rsx! { ErrorAlert { message: err } },
    };
    let visible = docs.filtered(&search(), filter());
    let total = docs.len();

    rsx! {
        div {
            class: "space-y-6",

            div {
                class: "flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between",
                div {
                    class: "flex items-center gap-3",
                    div {
                        class: "flex h-12 w-12 items-center justify-center rounded-xl bg-gradient-to-br from-violet-500 to-purple-600 text-white shadow-lg shadow-violet-500/25",
                        Icon { width: 22, height: 22, fill: "currentColor", icon: icons::FaFolderOpen }
                    }
                    div {
                        h1 { class: "text-2xl font-bold text-white", "My Documents" }
                        p { class: "text-sm text-slate-400", "Private & secure storage · {total} files" }
                    }
                }
                button {
                    class: "flex items-center gap-2 rounded-xl bg-gradient-to-r from-violet-500 to-purple-500 px-5 py-2.5 text-sm font-semibold text-white shadow-lg shadow-violet-500/25",
                    onclick: move |_| show_upload.set(true),
                    Icon { width: 16, height: 16, fill: "currentColor", icon: icons::FaUpload }
                    "Upload Document"
                }
            }

            if let Some(err) = error() {
                ErrorAlert { message: err }
            }

            div {
                class: "flex flex-wrap items-center gap-3 rounded-xl border border-white/10 bg-white/5 p-4 backdrop-blur",
                input {
                    class: "min-w-[200px] flex-1 rounded-lg border border-white/10 bg-white/5 px-3 py-2 text-sm text-white placeholder:text-slate-500 focus:border-violet-400/50 focus:outline-none",
                    r#type: "text",
                    placeholder: "Search documents...",
                    value: search(),
                    oninput: move |evt| search.set(evt.value()),
                }
                select {
                    class: "rounded-lg border border-white/10 bg-white/5 px-3 py-2 text-sm text-white focus:border-violet-400/50 focus:outline-none",
                    value: filter().to_string(),
                    onchange: move |evt| {
                        if let Ok(parsed) = evt.value().parse() {
                            filter.set(parsed);
                        }
                    },
                    for option in CategoryFilter::options() {
                        option { key: "{option}", value: "{option}", "{option}" }
                    }
                }
            }

            DocumentGrid { docs: visible, vault_empty: docs.is_empty(), on_delete: handle_delete }

            UploadDocumentDialog {
                open: show_upload(),
                on_close: move |_| show_upload.set(false),
                on_uploaded: handle_uploaded,
            }
        }
    }
}
