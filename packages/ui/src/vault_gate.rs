//! Credential form in front of the personal documents.
//!
//! Renders the unlock, setup or reset form according to [`api::gate_mode`]. A
//! successful submission patches the session identity when needed and flips the
//! session's vault flag, which takes this component out of the render path.

use api::{gate_mode, GateMode, GateNav, GateSubmission};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use crate::{icons, use_auth, ErrorAlert, Loader};

const INPUT_CLASS: &str = "w-full rounded-lg border border-white/10 bg-white/5 px-3 py-2.5 text-sm text-white placeholder:text-slate-500 focus:border-violet-400/50 focus:outline-none";

#[component]
pub fn VaultGate() -> Element {
    let auth = use_auth();
    let mut nav = use_signal(GateNav::default);
    let mut password = use_signal(String::new);
    let mut account_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pending = use_signal(|| false);

    let user = auth.user();
    let mode = if auth.loading() {
        GateMode::Loading
    } else {
        gate_mode(user.as_ref(), nav())
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        let submission = match mode {
            GateMode::Loading => return,
            GateMode::Unlock => GateSubmission::Unlock {
                password: password(),
            },
            GateMode::Setup => GateSubmission::Setup {
                password: password(),
            },
            GateMode::Reset => GateSubmission::Reset {
                account_password: account_password(),
                new_password: password(),
            },
        };
        if let Err(e) = submission.validate() {
            error.set(Some(e.to_string()));
            return;
        }

        error.set(None);
        pending.set(true);
        spawn(async move {
            let result = api::submit(&auth.client(), &submission).await;
            pending.set(false);
            match result {
                Ok(outcome) => {
                    if let Some(patch) = outcome.patch {
                        auth.patch(patch);
                    }
                    nav.set(outcome.nav);
                    password.set(String::new());
                    account_password.set(String::new());
                    auth.unlock_vault();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let (title, subtitle, submit_label) = match mode {
        GateMode::Loading => ("", "", ""),
        GateMode::Unlock => (
            "Unlock My Documents",
            "Enter your documents password to continue.",
            "Unlock",
        ),
        GateMode::Setup => (
            "Set a Documents Password",
            "Protect your private documents with a separate password (min 4 characters).",
            "Set password",
        ),
        GateMode::Reset => (
            "Reset Documents Password",
            "Confirm your account password and choose a new documents password.",
            "Reset password",
        ),
    };

    if mode == GateMode::Loading {
        return rsx! { Loader {} };
    }

    rsx! {
        div {
            class: "mx-auto mt-16 w-full max-w-md rounded-2xl border border-white/10 bg-slate-900/80 p-8 shadow-2xl backdrop-blur",

            div {
                class: "mb-6 flex flex-col items-center text-center",
                div {
                    class: "mb-4 flex h-14 w-14 items-center justify-center rounded-2xl bg-gradient-to-br from-violet-500 to-purple-600 text-white",
                    Icon { width: 24, height: 24, fill: "currentColor", icon: icons::FaLock }
                }
                h1 { class: "text-xl font-bold text-white", "{title}" }
                p { class: "mt-1 text-sm text-slate-400", "{subtitle}" }
            }

            if let Some(err) = error() {
                div { class: "mb-4", ErrorAlert { message: err } }
            }

            form {
                class: "space-y-4",
                onsubmit: handle_submit,

                if mode == GateMode::Reset {
                    input {
                        class: INPUT_CLASS,
                        r#type: "password",
                        placeholder: "Account password",
                        value: account_password(),
                        oninput: move |evt| account_password.set(evt.value()),
                    }
                }

                input {
                    class: INPUT_CLASS,
                    r#type: "password",
                    placeholder: if mode == GateMode::Unlock { "Documents password" } else { "New documents password" },
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    class: "w-full rounded-xl bg-gradient-to-r from-violet-500 to-purple-500 py-2.5 text-sm font-semibold text-white shadow-lg shadow-violet-500/25 disabled:opacity-60",
                    r#type: "submit",
                    disabled: pending(),
                    if pending() { "Please wait..." } else { "{submit_label}" }
                }
            }

            if mode == GateMode::Unlock {
                button {
                    class: "mt-4 w-full text-center text-sm text-violet-300 hover:text-violet-200",
                    onclick: move |_| {
                        error.set(None);
                        password.set(String::new());
                        nav.set(nav().forgot(mode));
                    },
                    "Forgot documents password?"
                }
            }

            if mode == GateMode::Reset {
                button {
                    class: "mt-4 w-full text-center text-sm text-slate-400 hover:text-white",
                    onclick: move |_| {
                        error.set(None);
                        password.set(String::new());
                        account_password.set(String::new());
                        nav.set(nav().back());
                    },
                    "Back to unlock"
                }
            }
        }
    }
}
