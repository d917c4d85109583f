use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use crate::icons;

/// Shown at every width; there is no separate small-screen menu.
const SIDEBAR_CLASS: &str =
    "fixed inset-y-0 left-0 z-20 flex w-64 flex-col border-r border-white/10 bg-slate-950/80 backdrop-blur";

/// Destinations reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Notes,
    Upload,
    Dashboard,
    MyDocs,
    Admin,
    Login,
    Register,
}

impl NavTarget {
    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Notes => "Browse Notes",
            NavTarget::Upload => "Upload",
            NavTarget::Dashboard => "Dashboard",
            NavTarget::MyDocs => "My Documents",
            NavTarget::Admin => "Admin",
            NavTarget::Login => "Login",
            NavTarget::Register => "Register",
        }
    }
}

/// Entries shown for a signed-in user.
pub fn nav_items(is_admin: bool) -> Vec<NavTarget> {
    let mut items = vec![
        NavTarget::Notes,
        NavTarget::Upload,
        NavTarget::Dashboard,
        NavTarget::MyDocs,
    ];
    if is_admin {
        items.push(NavTarget::Admin);
    }
    items
}

#[component]
pub fn AppSidebar(active: Option<NavTarget>, on_navigate: EventHandler<NavTarget>) -> Element {
    let auth = crate::use_auth();
    let user = auth.user();
    let items = nav_items(auth.is_admin());

    rsx! {
        aside {
            class: SIDEBAR_CLASS,

            div {
                class: "flex cursor-pointer items-center gap-2 px-6 py-6",
                onclick: move |_| on_navigate.call(NavTarget::Notes),
                Icon { width: 20, height: 20, fill: "currentColor", class: "text-sky-400", icon: icons::FaBookOpen }
                span { class: "text-lg font-bold text-white", "NotesShare" }
            }

            nav {
                class: "flex-1 space-y-1 px-3",
                if user.is_some() {
                    for item in items {
                        button {
                            key: "{item.label()}",
                            class: if active == Some(item) {
                                "flex w-full items-center gap-2 rounded-lg bg-sky-500/15 px-3 py-2 text-left text-sm font-medium text-sky-200"
                            } else {
                                "flex w-full items-center gap-2 rounded-lg px-3 py-2 text-left text-sm text-slate-300 hover:bg-white/5 hover:text-white"
                            },
                            onclick: move |_| on_navigate.call(item),
                            "{item.label()}"
                        }
                    }
                } else {
                    button {
                        class: "flex w-full rounded-lg px-3 py-2 text-left text-sm text-slate-300 hover:bg-white/5",
                        onclick: move |_| on_navigate.call(NavTarget::Notes),
                        "{NavTarget::Notes.label()}"
                    }
                }
            }

            div {
                class: "border-t border-white/10 p-4",
                if let Some(u) = user {
                    div {
                        class: "mb-3 flex items-center gap-3",
                        div {
                            class: "flex h-9 w-9 items-center justify-center rounded-full bg-sky-500/20 text-sm font-semibold text-sky-200",
                            "{u.initial()}"
                        }
                        div {
                            class: "min-w-0",
                            p { class: "truncate text-sm font-medium text-white", "{u.name}" }
                            p { class: "text-[11px] capitalize text-slate-500", "{u.role}" }
                        }
                    }
                    crate::LogoutButton {
                        class: "w-full rounded-lg border border-white/10 px-3 py-2 text-sm text-slate-300 hover:border-red-400/40 hover:text-red-300",
                        on_logout: move |_| on_navigate.call(NavTarget::Login),
                    }
                } else {
                    div {
                        class: "flex gap-2",
                        button {
                            class: "flex-1 rounded-lg border border-white/10 px-3 py-2 text-sm text-slate-200",
                            onclick: move |_| on_navigate.call(NavTarget::Login),
                            "Login"
                        }
                        button {
                            class: "flex-1 rounded-lg bg-sky-500 px-3 py-2 text-sm text-white",
                            onclick: move |_| on_navigate.call(NavTarget::Register),
                            "Register"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_entry_only_for_admins() {
        assert!(!nav_items(false).contains(&NavTarget::Admin));
        assert_eq!(nav_items(true).last(), Some(&NavTarget::Admin));
    }

    #[test]
    fn test_sidebar_visible_on_small_screens() {
        let classes: Vec<&str> = SIDEBAR_CLASS.split_whitespace().collect();
        assert!(classes.contains(&"flex"));
        assert!(!classes.contains(&"hidden"));
        assert!(!classes.iter().any(|c| c.starts_with("md:")));
    }
}
