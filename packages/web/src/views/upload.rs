use api::{FileUpload, NoteFields};
use dioxus::prelude::*;
use ui::{icons, platform, ErrorAlert, Icon};

use super::Protected;
use crate::Route;

const FIELD_CLASS: &str = "w-full rounded-lg border border-white/10 bg-white/5 px-4 py-2.5 text-white placeholder:text-slate-500 focus:border-sky-400/50 focus:outline-none";

#[component]
pub fn Upload() -> Element {
    rsx! {
        Protected { UploadForm {} }
    }
}

#[component]
fn UploadForm() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();
    let mut fields = use_signal(NoteFields::default);
    let mut file = use_signal(|| Option::<FileUpload>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        error.set(None);
        let Some(upload) = file() else {
            error.set(Some("Please select a file".to_string()));
            return;
        };
        let note = fields();
        if !note.is_complete() {
            error.set(Some("All fields are required".to_string()));
            return;
        }

        pending.set(true);
        spawn(async move {
            let result = auth.client().upload_note(&note, upload).await;
            pending.set(false);
            match result {
                Ok(()) => {
                    tracing::info!("Uploaded note {:?}", note.title);
                    nav.push(Route::Dashboard {});
                }
                Err(e) => error.set(Some(e.message_or("Upload failed"))),
            }
        });
    };

    rsx! {
        div {
            class: "mx-auto max-w-2xl",

            div {
                class: "mb-6 flex items-center gap-3",
                div {
                    class: "flex h-12 w-12 items-center justify-center rounded-xl bg-gradient-to-br from-sky-500 to-cyan-400 text-white shadow-lg shadow-sky-500/25",
                    Icon { width: 22, height: 22, fill: "currentColor", icon: icons::FaUpload }
                }
                div {
                    h1 { class: "text-2xl font-bold text-white", "Upload Note" }
                    p { class: "text-sm text-slate-400", "Share study materials with others" }
                }
            }

            div {
                class: "rounded-2xl border border-white/10 bg-white/5 p-6 backdrop-blur",

                if let Some(err) = error() {
                    div { class: "mb-4", ErrorAlert { message: err } }
                }

                form {
                    class: "space-y-5",
                    onsubmit: handle_submit,
                    div {
                        label { class: "mb-1.5 block text-sm font-medium text-slate-300", "Title" }
                        input {
                            class: FIELD_CLASS,
                            placeholder: "e.g., Data Structures Notes",
                            value: fields.read().title.clone(),
                            oninput: move |evt| fields.write().title = evt.value(),
                        }
                    }
                    div {
                        label { class: "mb-1.5 block text-sm font-medium text-slate-300", "Description" }
                        textarea {
                            class: "{FIELD_CLASS} resize-none",
                            rows: 4,
                            placeholder: "Brief description of the content...",
                            value: fields.read().description.clone(),
                            oninput: move |evt| fields.write().description = evt.value(),
                        }
                    }
                    div {
                        label { class: "mb-1.5 block text-sm font-medium text-slate-300", "Category" }
                        input {
                            class: FIELD_CLASS,
                            placeholder: "e.g., Computer Science, Mathematics",
                            value: fields.read().category.clone(),
                            oninput: move |evt| fields.write().category = evt.value(),
                        }
                    }
                    div {
                        label { class: "mb-1.5 block text-sm font-medium text-slate-300", "File (PDF, DOCX, TXT)" }
                        input {
                            class: "w-full rounded-lg border border-white/10 bg-white/5 px-4 py-2.5 text-sm text-slate-300 file:mr-3 file:rounded-md file:border-0 file:bg-sky-500/20 file:px-3 file:py-1.5 file:text-sm file:font-medium file:text-sky-300",
                            r#type: "file",
                            accept: ".pdf,.doc,.docx,.txt",
                            onchange: move |evt| async move {
                                file.set(platform::picked_file(&evt).await);
                            },
                        }
                        if let Some(picked) = file() {
                            p { class: "mt-2 text-sm text-slate-400", "{picked.name}" }
                        }
                    }
                    button {
                        class: "w-full rounded-xl bg-gradient-to-r from-sky-500 to-cyan-400 py-3 text-sm font-semibold text-slate-900 shadow-lg shadow-sky-500/25 disabled:opacity-60",
                        r#type: "submit",
                        disabled: pending(),
                        if pending() { "Uploading..." } else { "Upload Note" }
                    }
                }
            }
        }
    }
}
