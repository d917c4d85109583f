//! # Domain models shared by the API client and the UI
//!
//! These are the client-side projections of the records the NotesShare API server
//! returns. They are `Serialize + Deserialize` so the same types are used for wire
//! decoding and for persisting the session identity in browser storage.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`SessionIdentity`] | The logged-in user as the client holds it: id, name, email, [`Role`], whether a vault password is configured, favorite note ids. |
//! | [`IdentityPatch`] | A field-wise update merged into a [`SessionIdentity`] after vault-password operations or favorite toggles. |
//! | [`Note`] / [`Comment`] / [`UserRef`] | A shared note with its likes and comments. `UserRef` accepts both populated user objects and bare ids. |
//! | [`NotePage`] / [`CategoryCount`] | One page of the public feed plus per-category counts. |
//! | [`LikeState`] / [`FavoriteState`] | Results of the like and favorite toggles. |
//! | [`NoteFields`] | Editable note metadata sent on upload and update. |
//! | [`Document`] / [`DocCategory`] | A private vault document and its fixed category set. |
//! | [`AdminStats`] | Site-wide counters shown on the admin panel. |
//!
//! Server ids arrive as `_id`; every id field also accepts `id`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

/// The client-held representation of the logged-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    /// Whether a vault password has been configured for this account.
    #[serde(rename = "hasDocsPassword", alias = "hasVaultPassword", default)]
    pub has_vault_password: bool,
    #[serde(default)]
    pub favorites: BTreeSet<String>,
}

impl SessionIdentity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn has_favorite(&self, note_id: &str) -> bool {
        self.favorites.contains(note_id)
    }

    /// First letter of the name for the avatar badge, `'U'` when the name is empty.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('U')
    }

    /// Merge the fields set on `patch` into this identity.
    pub fn apply(&mut self, patch: IdentityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(configured) = patch.has_vault_password {
            self.has_vault_password = configured;
        }
        if let Some((note_id, favorited)) = patch.favorite {
            if favorited {
                self.favorites.insert(note_id);
            } else {
                self.favorites.remove(&note_id);
            }
        }
    }
}

/// Field-wise update for a [`SessionIdentity`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdentityPatch {
    pub name: Option<String>,
    pub has_vault_password: Option<bool>,
    /// `(note id, favorited)`
    pub favorite: Option<(String, bool)>,
}

impl IdentityPatch {
    /// Patch marking the vault password as configured.
    pub fn vault_configured() -> Self {
        Self {
            has_vault_password: Some(true),
            ..Self::default()
        }
    }

    /// Patch adding or removing a favorite note id.
    pub fn favorite(note_id: impl Into<String>, favorited: bool) -> Self {
        Self {
            favorite: Some((note_id.into(), favorited)),
            ..Self::default()
        }
    }
}

/// Minimal user projection embedded in notes and comments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Reference to a user: populated object or bare id, depending on the endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Populated(Author),
    Id(String),
}

impl UserRef {
    pub fn name(&self) -> Option<&str> {
        match self {
            UserRef::Populated(author) if !author.name.is_empty() => Some(&author.name),
            _ => None,
        }
    }
}

/// A comment on a note.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub user: Option<UserRef>,
}

impl Comment {
    pub fn author_name(&self) -> &str {
        self.user.as_ref().and_then(UserRef::name).unwrap_or("User")
    }
}

/// A shared note.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub file_url: String,
    #[serde(default)]
    pub uploaded_by: Option<UserRef>,
    /// Ids of users who liked the note.
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Note {
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn author_name(&self) -> &str {
        self.uploaded_by
            .as_ref()
            .and_then(UserRef::name)
            .unwrap_or("Unknown")
    }

    /// Like state as seen by `user_id` (anonymous viewers never count as having liked).
    pub fn like_state_for(&self, user_id: Option<&str>) -> LikeState {
        LikeState {
            likes: self.likes.len() as u32,
            liked: user_id.is_some_and(|id| self.likes.iter().any(|l| l == id)),
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.file_url.to_ascii_lowercase().ends_with(".pdf")
    }

    pub fn is_text(&self) -> bool {
        self.file_url.to_ascii_lowercase().ends_with(".txt")
    }
}

/// Editable note metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteFields {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl NoteFields {
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            description: note.description.clone(),
            category: note.category.clone(),
        }
    }

    /// All three fields are required on upload and edit.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.category.trim().is_empty()
    }
}

/// Per-category note count reported alongside the feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u32,
}

/// One page of the note feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotePage {
    #[serde(default)]
    pub data: Vec<Note>,
    #[serde(default = "default_pages")]
    pub pages: u32,
    #[serde(default)]
    pub categories: Vec<CategoryCount>,
}

fn default_pages() -> u32 {
    1
}

impl Default for NotePage {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            pages: default_pages(),
            categories: Vec::new(),
        }
    }
}

/// `GET /notes` answers with a page object, or a bare array on some filters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NoteListResponse {
    Page(NotePage),
    Bare(Vec<Note>),
}

impl NoteListResponse {
    pub fn into_page(self) -> NotePage {
        match self {
            NoteListResponse::Page(page) => page,
            NoteListResponse::Bare(data) => NotePage {
                data,
                ..NotePage::default()
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LikeState {
    pub likes: u32,
    pub liked: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoriteState {
    pub favorited: bool,
}

/// Site-wide counters for the admin panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    #[serde(default)]
    pub users: u64,
    #[serde(default)]
    pub notes: u64,
    #[serde(default)]
    pub likes: u64,
}

/// Category of a private vault document.
///
/// Decoding is lenient: a missing or unrecognised label becomes [`DocCategory::Other`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum DocCategory {
    Resume,
    #[serde(rename = "ID Proof")]
    IdProof,
    Certificate,
    Financial,
    Medical,
    #[default]
    Other,
}

impl DocCategory {
    pub const ALL: [DocCategory; 6] = [
        DocCategory::Resume,
        DocCategory::IdProof,
        DocCategory::Certificate,
        DocCategory::Financial,
        DocCategory::Medical,
        DocCategory::Other,
    ];

    /// Wire and display label.
    pub fn label(&self) -> &'static str {
        match self {
            DocCategory::Resume => "Resume",
            DocCategory::IdProof => "ID Proof",
            DocCategory::Certificate => "Certificate",
            DocCategory::Financial => "Financial",
            DocCategory::Medical => "Medical",
            DocCategory::Other => "Other",
        }
    }

    /// Tailwind classes for the category badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            DocCategory::Resume => "bg-emerald-500/20 text-emerald-300 ring-emerald-500/30",
            DocCategory::IdProof => "bg-blue-500/20 text-blue-300 ring-blue-500/30",
            DocCategory::Certificate => "bg-amber-500/20 text-amber-300 ring-amber-500/30",
            DocCategory::Financial => "bg-purple-500/20 text-purple-300 ring-purple-500/30",
            DocCategory::Medical => "bg-rose-500/20 text-rose-300 ring-rose-500/30",
            DocCategory::Other => "bg-slate-500/20 text-slate-300 ring-slate-500/30",
        }
    }
}

impl fmt::Display for DocCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocCategory::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("Unknown document category: {s}"))
    }
}

impl<'de> Deserialize<'de> for DocCategory {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.and_then(|l| l.parse().ok()).unwrap_or_default())
    }
}

/// A private document stored in the vault.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: DocCategory,
    /// Stored filename, resolved through `ClientConfig::upload_file_url`.
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Creation date as shown on cards, e.g. `Mar 4, 2026`. Empty when unknown.
    pub fn created_label(&self) -> String {
        self.created_at
            .map(|at| at.format("%b %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> SessionIdentity {
        serde_json::from_str(
            r#"{"id":"u1","name":"Ada","email":"ada@example.com","role":"admin","hasDocsPassword":true,"favorites":["n1"]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_identity_wire_format() {
        let user = identity();
        assert_eq!(user.id, "u1");
        assert!(user.is_admin());
        assert!(user.has_vault_password);
        assert!(user.has_favorite("n1"));

        // Minimal payload from an older server
        let user: SessionIdentity =
            serde_json::from_str(r#"{"_id":"u2","name":"Bob"}"#).unwrap();
        assert_eq!(user.id, "u2");
        assert_eq!(user.role, Role::User);
        assert!(!user.has_vault_password);
        assert!(user.favorites.is_empty());

        let user: SessionIdentity =
            serde_json::from_str(r#"{"id":"u3","name":"C","hasVaultPassword":true}"#).unwrap();
        assert!(user.has_vault_password);
    }

    #[test]
    fn test_identity_patch() {
        let mut user = identity();
        user.has_vault_password = false;

        user.apply(IdentityPatch::vault_configured());
        assert!(user.has_vault_password);
        assert_eq!(user.name, "Ada");

        user.apply(IdentityPatch::favorite("n2", true));
        assert!(user.has_favorite("n2"));
        user.apply(IdentityPatch::favorite("n1", false));
        assert!(!user.has_favorite("n1"));
        assert_eq!(user.favorites.len(), 1);
    }

    #[test]
    fn test_note_decoding_with_populated_and_bare_refs() {
        let note: Note = serde_json::from_str(
            r#"{
                "_id": "n1",
                "title": "Linear Algebra",
                "description": "Week 1",
                "category": "Mathematics",
                "fileUrl": "/uploads/la.PDF",
                "uploadedBy": {"_id": "u1", "name": "Ada"},
                "likes": ["u1", "u2"],
                "comments": [
                    {"_id": "c1", "text": "Thanks", "user": {"_id": "u2", "name": "Bob"}},
                    {"_id": "c2", "text": "Nice", "user": "u3"}
                ],
                "createdAt": "2026-03-04T10:00:00.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(note.author_name(), "Ada");
        assert_eq!(note.like_count(), 2);
        assert!(note.is_pdf());
        assert!(!note.is_text());
        assert_eq!(note.comments[0].author_name(), "Bob");
        assert_eq!(note.comments[1].author_name(), "User");

        assert_eq!(note.like_state_for(Some("u2")), LikeState { likes: 2, liked: true });
        assert_eq!(note.like_state_for(Some("u9")), LikeState { likes: 2, liked: false });
        assert_eq!(note.like_state_for(None), LikeState { likes: 2, liked: false });
    }

    #[test]
    fn test_note_list_response_shapes() {
        let page: NoteListResponse = serde_json::from_str(
            r#"{"data":[{"_id":"n1","title":"A"}],"pages":3,"categories":[{"category":"Science","count":4}]}"#,
        )
        .unwrap();
        let page = page.into_page();
        assert_eq!(page.pages, 3);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.categories[0].count, 4);

        let bare: NoteListResponse =
            serde_json::from_str(r#"[{"_id":"n1","title":"A"},{"_id":"n2","title":"B"}]"#).unwrap();
        let page = bare.into_page();
        assert_eq!(page.pages, 1);
        assert_eq!(page.data.len(), 2);
    }

    #[test]
    fn test_doc_category_labels() {
        let doc: Document = serde_json::from_str(
            r#"{"_id":"d1","title":"Passport","category":"ID Proof","file":"p.png","createdAt":"2026-03-04T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(doc.category, DocCategory::IdProof);
        assert_eq!(doc.created_label(), "Mar 4, 2026");

        for category in DocCategory::ALL {
            assert_eq!(category.label().parse::<DocCategory>(), Ok(category));
        }
        assert!("All".parse::<DocCategory>().is_err());
    }

    #[test]
    fn test_document_list_tolerates_odd_records() {
        let docs: Vec<Document> = serde_json::from_str(
            r#"[
                {"_id":"d1","title":"CV","category":"Resume","createdAt":"2026-03-04T10:00:00Z"},
                {"_id":"d2","title":"Return","category":"Tax","createdAt":"2026-03-05T10:00:00Z"},
                {"_id":"d3","title":"Scan","category":null},
                {"_id":"d4","title":"Undated","category":"Medical"}
            ]"#,
        )
        .unwrap();
        assert_eq!(docs.len(), 4);
        assert_eq!(docs[0].category, DocCategory::Resume);
        assert_eq!(docs[1].category, DocCategory::Other);
        assert_eq!(docs[2].category, DocCategory::Other);
        assert_eq!(docs[3].category, DocCategory::Medical);
        assert!(docs[3].created_at.is_none());
        assert_eq!(docs[3].created_label(), "");
        assert_eq!(docs[1].created_label(), "Mar 5, 2026");
    }

    #[test]
    fn test_note_fields_completeness() {
        let mut fields = NoteFields {
            title: "T".into(),
            description: "D".into(),
            category: "C".into(),
        };
        assert!(fields.is_complete());
        fields.category = "  ".into();
        assert!(!fields.is_complete());
    }
}
