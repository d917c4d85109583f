use api::{DocCategory, Document, FileUpload};
use dioxus::prelude::*;
use store::documents::validate_upload;

use crate::{platform, use_auth, ErrorAlert};

const FIELD_CLASS: &str = "w-full rounded-lg border border-white/10 bg-white/5 px-3 py-2 text-sm text-white placeholder:text-slate-500 focus:border-violet-400/50 focus:outline-none";

/// Modal dialog for adding a document to the vault.
#[component]
pub fn UploadDocumentDialog(
    open: bool,
    on_close: EventHandler<()>,
    on_uploaded: EventHandler<Document>,
) -> Element {
    let auth = use_auth();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(DocCategory::default);
    let mut file = use_signal(|| Option::<FileUpload>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut uploading = use_signal(|| false);

    let mut reset = move || {
        title.set(String::new());
        description.set(String::new());
        category.set(DocCategory::default());
        file.set(None);
        error.set(None);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if uploading() {
            return;
        }
        if let Err(message) = validate_upload(&title(), file.read().is_some()) {
            error.set(Some(message.to_string()));
            return;
        }
        let Some(upload) = file() else {
            return;
        };

        error.set(None);
        uploading.set(true);
        spawn(async move {
            let result = auth
                .client()
                .upload_document(title().trim(), description().trim(), category(), upload)
                .await;
            uploading.set(false);
            match result {
                Ok(doc) => {
                    tracing::info!("Uploaded document {}", doc.id);
                    reset();
                    on_uploaded.call(doc);
                }
                Err(e) => error.set(Some(e.message_or("Upload failed"))),
            }
        });
    };

    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-black/60 p-4 backdrop-blur-sm",
            onclick: move |_| on_close.call(()),

            div {
                class: "w-full max-w-lg rounded-2xl border border-white/10 bg-slate-900 p-6 shadow-2xl",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "mb-4 text-lg font-semibold text-white", "Upload Document" }

                if let Some(err) = error() {
                    div { class: "mb-4", ErrorAlert { message: err } }
                }

                form {
                    class: "space-y-3",
                    onsubmit: handle_submit,

                    input {
                        class: FIELD_CLASS,
                        placeholder: "Title",
                        value: title(),
                        oninput: move |evt| title.set(evt.value()),
                    }
                    select {
                        class: FIELD_CLASS,
                        value: category().label(),
                        onchange: move |evt| {
                            if let Ok(parsed) = evt.value().parse() {
                                category.set(parsed);
                            }
                        },
                        for option in DocCategory::ALL {
                            option { key: "{option.label()}", value: option.label(), "{option}" }
                        }
                    }
                    textarea {
                        class: FIELD_CLASS,
                        rows: 3,
                        placeholder: "Description (optional)",
                        value: description(),
                        oninput: move |evt| description.set(evt.value()),
                    }
                    input {
                        class: "w-full text-sm text-slate-300 file:mr-3 file:rounded-md file:border-0 file:bg-violet-500/20 file:px-3 file:py-1.5 file:text-violet-200",
                        r#type: "file",
                        onchange: move |evt| async move {
                            file.set(platform::picked_file(&evt).await);
                        },
                    }

                    div {
                        class: "flex justify-end gap-2 pt-2",
                        button {
                            class: "rounded-lg px-4 py-2 text-sm text-slate-300 hover:bg-white/5",
                            r#type: "button",
                            onclick: move |_| {
                                reset();
                                on_close.call(());
                            },
                            "Cancel"
                        }
                        button {
                            class: "rounded-lg bg-violet-500 px-4 py-2 text-sm font-semibold text-white hover:bg-violet-400 disabled:opacity-60",
                            r#type: "submit",
                            disabled: uploading(),
                            if uploading() { "Uploading..." } else { "Upload" }
                        }
                    }
                }
            }
        }
    }
}
