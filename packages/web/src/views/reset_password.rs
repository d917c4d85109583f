use api::auth::validate_account_password;
use dioxus::prelude::*;
use ui::{platform, use_auth, ErrorAlert, NoticeAlert};

use super::login::{AuthShell, FIELD_CLASS, SUBMIT_CLASS};
use crate::Route;

/// Delay before leaving for the login page after a successful reset.
const REDIRECT_DELAY_MS: u64 = 1200;

#[component]
pub fn ResetPassword(token: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut password = use_signal(String::new);
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
        if let Err(e) = validate_account_password(&password()) {
            error.set(Some(e));
            return;
        }
        pending.set(true);
        let token = token.clone();
        spawn(async move {
            let result = auth.client().reset_password(&token, &password()).await;
            pending.set(false);
            match result {
                Ok(reply) => {
                    message.set(Some(reply.unwrap_or_else(|| "Password reset".to_string())));
                    platform::sleep_ms(REDIRECT_DELAY_MS).await;
                    nav.push(Route::Login {});
                }
                Err(e) => error.set(Some(e.message_or("Reset failed"))),
            }
        });
    };

    rsx! {
        AuthShell {
            heading: "Choose a new password.",
            blurb: "Passwords need at least six characters.",

            h2 { class: "mb-4 text-2xl font-semibold text-white", "Reset password" }
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
                    label { class: "mb-1 block text-sm font-medium text-slate-200", "New password" }
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
                    if pending() { "Resetting..." } else { "Reset password" }
                }
            }
        }
    }
}
