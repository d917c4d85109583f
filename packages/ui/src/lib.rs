//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod platform;

mod auth;
pub use auth::{use_auth, AuthContext, AuthProvider, AuthState, LogoutButton};

mod alert;
pub use alert::{ErrorAlert, NoticeAlert};

mod loader;
pub use loader::Loader;

mod sidebar;
pub use sidebar::{nav_items, AppSidebar, NavTarget};

mod note_card;
pub use note_card::NoteCard;

mod vault_gate;
pub use vault_gate::VaultGate;

mod document_grid;
pub use document_grid::{DocumentCard, DocumentGrid};

mod upload_dialog;
pub use upload_dialog::UploadDocumentDialog;
