use dioxus::prelude::*;
use ui::{use_auth, ErrorAlert, NoticeAlert};

use super::login::{AuthShell, FIELD_CLASS, SUBMIT_CLASS};
use crate::Route;

const SENT_MESSAGE: &str = "Check your email for a reset link";

#[component]
pub fn ForgotPassword() -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut message = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        error.set(None);
        message.set(None);
        pending.set(true);
        spawn(async move {
            let result = auth.client().request_password_reset(email().trim()).await;
            pending.set(false);
            match result {
                Ok(reply) => message.set(Some(reply.unwrap_or_else(|| SENT_MESSAGE.to_string()))),
                Err(e) => error.set(Some(e.message_or("Request failed"))),
            }
        });
    };

    rsx! {
        AuthShell {
            heading: "Forgot your password?",
            blurb: "Enter the email you registered with and we will send you a link to choose a new one.",

            h2 { class: "mb-4 text-2xl font-semibold text-white", "Reset link" }
            if let Some(err) = error() {
                div { class: "mb-3", ErrorAlert { message: err } }
            }
            if let Some(msg) = message() {
                div { class: "mb-3", NoticeAlert { message: msg } }
            }
            form {
                class: "space-y-4",
                onsubmit: handle_submit,
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
                button {
                    class: SUBMIT_CLASS,
                    r#type: "submit",
                    disabled: pending(),
                    if pending() { "Sending..." } else { "Send reset link" }
                }
            }
            p {
                class: "mt-3 text-sm",
                Link { class: "text-sky-300", to: Route::Login {}, "Back to login" }
            }
        }
    }
}
