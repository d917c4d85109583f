//! Login page.

use dioxus::prelude::*;
use ui::{use_auth, ErrorAlert};

use crate::Route;

pub(crate) const FIELD_CLASS: &str = "w-full rounded-lg border border-white/10 bg-white/5 px-3 py-2 text-white focus:border-sky-400/70 focus:outline-none";
pub(crate) const SUBMIT_CLASS: &str = "w-full rounded-lg bg-sky-500 px-4 py-2 text-white shadow-lg shadow-sky-500/30 hover:bg-sky-400 disabled:opacity-60";

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
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
            let result = auth.login(email(), password()).await;
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
            heading: "Welcome back.",
            blurb: "Sign in to access your notes, favorites, and admin tools.",

            h2 { class: "mb-4 text-2xl font-semibold text-white", "Login" }
            if let Some(err) = error() {
                div { class: "mb-3", ErrorAlert { message: err } }
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
                    if pending() { "Signing in..." } else { "Login" }
                }
            }
            p {
                class: "mt-3 text-sm text-slate-300",
                "No account? "
                Link { class: "text-sky-300", to: Route::Register {}, "Register" }
            }
            p {
                class: "mt-2 text-sm",
                Link { class: "text-sky-300", to: Route::ForgotPassword {}, "Forgot password?" }
            }
        }
    }
}

/// Two-column frame shared by the signed-out pages.
#[component]
pub(crate) fn AuthShell(heading: String, blurb: String, children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-slate-950 px-4 py-10 text-slate-100",
            div {
                class: "mx-auto grid min-h-[80vh] max-w-5xl gap-10 lg:grid-cols-[1.1fr_0.9fr] lg:items-center",
                div {
                    class: "space-y-4",
                    p {
                        class: "inline-flex items-center gap-2 rounded-full bg-white/5 px-4 py-2 text-xs font-semibold text-slate-100 ring-1 ring-white/10",
                        span { class: "h-2 w-2 rounded-full bg-emerald-400" }
                        "NotesShare"
                    }
                    h1 { class: "text-4xl font-bold text-white", "{heading}" }
                    p { class: "max-w-xl text-slate-300", "{blurb}" }
                }
                div {
                    class: "rounded-2xl border border-white/10 bg-white/5 p-6 shadow-2xl ring-1 ring-white/10",
                    {children}
                }
            }
        }
    }
}
