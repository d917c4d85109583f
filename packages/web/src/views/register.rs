use dioxus::prelude::*;
use ui::{use_auth, ErrorAlert};

use super::login::{AuthShell, FIELD_CLASS, SUBMIT_CLASS};
use crate::Route;

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        error.set(None);
        pending.set(true);
        spawn(async move {
            let result = auth.register(name(), email(), password()).await;
            pending.set(false);
            match result {
                Ok(_) => {
                    nav.push(Route::Dashboard {});
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    rsx! {
        AuthShell {
            heading: "Join NotesShare.",
            blurb: "Upload your study notes, follow what others share and keep private documents behind a second password.",

            h2 { class: "mb-4 text-2xl font-semibold text-white", "Create account" }
            if let Some(err) = error() {
                div { class: "mb-3", ErrorAlert { message: err } }
            }
            form {
                class: "space-y-4",
                onsubmit: handle_submit,
                div {
                    label { class: "mb-1 block text-sm font-medium text-slate-200", "Name" }
                    input {
                        class: FIELD_CLASS,
                        required: true,
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div {
                    label { class: "mb-1 block text-sm font-medium text-slate-200", "Email" }
                    input {
                        class: FIELD_CLASS,
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div {
                    label { class: "mb-1 block text-sm font-medium text-slate-200", "Password" }
                    input {
                        class: FIELD_CLASS,
                        r#type: "password",
                        required: true,
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    class: SUBMIT_CLASS,
                    r#type: "submit",
                    disabled: pending(),
                    if pending() { "Creating..." } else { "Register" }
                }
            }
            p {
                class: "mt-3 text-sm text-slate-300",
                "Already registered? "
                Link { class: "text-sky-300", to: Route::Login {}, "Login" }
            }
        }
    }
}
