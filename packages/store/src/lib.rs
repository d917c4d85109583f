pub mod config;
pub mod documents;
pub mod feed;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::ClientConfig;
pub use documents::{CategoryFilter, DocumentList, VaultDocuments};
pub use feed::{NotesQuery, Pagination, SortOrder};
pub use models::{
    AdminStats, Comment, DocCategory, Document, FavoriteState, IdentityPatch, LikeState, Note,
    NoteFields, NotePage, Role, SessionIdentity,
};
pub use session::{KeyValueStore, Session, SessionStore};
