use dioxus::prelude::*;

use store::SessionIdentity;
use ui::{use_auth, Loader};

use crate::Route;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod reset_password;
pub use reset_password::ResetPassword;

mod notes;
pub use notes::Notes;

mod note_detail;
pub use note_detail::NoteDetail;

mod upload;
pub use upload::Upload;

mod dashboard;
pub use dashboard::Dashboard;

mod admin;
pub use admin::Admin;

mod my_docs;
pub use my_docs::MyDocs;

mod not_found;
pub use not_found::NotFound;

mod sidebar_layout;
pub use sidebar_layout::SidebarLayout;

/// What a guarded page should do for the current session.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Access {
    /// The persisted session is still being read.
    Pending,
    Allowed,
    Redirect(Route),
}

pub(crate) fn access(loading: bool, user: Option<&SessionIdentity>, admin_only: bool) -> Access {
    if loading {
        return Access::Pending;
    }
    match user {
        None => Access::Redirect(Route::Login {}),
        Some(u) if admin_only && !u.is_admin() => Access::Redirect(Route::Home {}),
        Some(_) => Access::Allowed,
    }
}

/// Renders `children` only for a signed-in user (and only admins when `admin_only`).
#[component]
pub(crate) fn Protected(#[props(default)] admin_only: bool, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    match access(auth.loading(), auth.user().as_ref(), admin_only) {
        Access::Pending => rsx! { Loader {} },
        Access::Redirect(route) => {
            nav.replace(route);
            rsx! {}
        }
        Access::Allowed => rsx! { {children} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> SessionIdentity {
        serde_json::from_value(serde_json::json!({
            "id": "u1",
            "name": "Ada",
            "email": "ada@example.com",
            "role": role,
        }))
        .unwrap()
    }

    #[test]
    fn test_pending_while_loading() {
        assert_eq!(access(true, None, false), Access::Pending);
        assert_eq!(access(true, Some(&user("user")), true), Access::Pending);
    }

    #[test]
    fn test_anonymous_goes_to_login() {
        assert_eq!(access(false, None, false), Access::Redirect(Route::Login {}));
        assert_eq!(access(false, None, true), Access::Redirect(Route::Login {}));
    }

    #[test]
    fn test_admin_pages() {
        assert_eq!(
            access(false, Some(&user("user")), true),
            Access::Redirect(Route::Home {})
        );
        assert_eq!(access(false, Some(&user("admin")), true), Access::Allowed);
        assert_eq!(access(false, Some(&user("user")), false), Access::Allowed);
    }
}
