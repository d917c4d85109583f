//! # API crate: typed client for the NotesShare HTTP API
//!
//! Every call the frontend makes to the external API server goes through
//! [`ApiClient`]. The server owns persistence, password hashing, file storage and
//! authorization; this crate only shapes requests and decodes responses.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient`: URL joining, bearer credential, JSON/multipart sending, status → [`ApiError`] mapping |
//! | [`error`] | [`ApiError`] and the "server message or fallback" rule used by every form |
//! | [`auth`] | Login, register, forgot password, reset password with emailed token |
//! | [`notes`] | Feed, detail, upload, edit, delete, like, favorite, comment, text preview |
//! | [`personal_docs`] | Vault document list, upload, delete |
//! | [`admin`] | Site stats, all notes, admin delete |
//! | [`vault`] | Vault gate: mode derivation, local validation, submissions over [`VaultBackend`] |
//!
//! ## Endpoints
//!
//! - **Identity**: `POST /auth/login`, `/auth/register`, `/auth/forgot`, `/auth/reset/:token`
//! - **Vault gate**: `POST /auth/docs-password/verify|set|reset`
//! - **Notes**: `GET/POST/PUT/DELETE /notes...`
//! - **Vault documents**: `GET/POST/DELETE /personal-docs...`
//! - **Admin**: `GET /admin/stats`, `GET /admin/notes`, `DELETE /admin/notes/:id`

pub mod admin;
pub mod auth;
pub mod client;
pub mod error;
pub mod notes;
pub mod personal_docs;
pub mod vault;

pub use client::{ApiClient, FileUpload};
pub use error::ApiError;
pub use vault::{
    gate_mode, submit, GateError, GateMode, GateNav, GateOutcome, GateSubmission, VaultAccess,
    VaultBackend,
};

pub use store::{
    AdminStats, ClientConfig, Comment, DocCategory, Document, FavoriteState, IdentityPatch,
    LikeState, Note, NoteFields, NotePage, NotesQuery, Session, SessionIdentity,
};
