//! In-memory copy of the vault document list and its local search/filter.
//!
//! The list is fetched once per unlock and held in [`VaultDocuments`] until logout;
//! afterwards it only changes through [`DocumentList::prepend`] (server-confirmed
//! upload) and [`DocumentList::remove`] (server-confirmed delete). Search and filter
//! never touch the stored order.

use std::fmt;
use std::str::FromStr;

use crate::models::{DocCategory, Document};

/// Category filter over the document list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(DocCategory),
}

impl CategoryFilter {
    /// Every option in the filter select, `All` first.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(DocCategory::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn matches(&self, category: DocCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => f.write_str(category.label()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Documents as last confirmed by the server, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentList {
    docs: Vec<Document>,
}

impl DocumentList {
    pub fn new(docs: Vec<Document>) -> Self {
        Self { docs }
    }

    pub fn as_slice(&self) -> &[Document] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Add a freshly uploaded document at the front.
    pub fn prepend(&mut self, doc: Document) {
        self.docs.insert(0, doc);
    }

    /// Remove the document with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.docs.len();
        self.docs.retain(|d| d.id != id);
        self.docs.len() != before
    }

    /// Documents whose title contains `search` (case-insensitive) and whose category passes `filter`.
    pub fn filtered(&self, search: &str, filter: CategoryFilter) -> Vec<Document> {
        let needle = search.to_lowercase();
        self.docs
            .iter()
            .filter(|d| needle.is_empty() || d.title.to_lowercase().contains(&needle))
            .filter(|d| filter.matches(d.category))
            .cloned()
            .collect()
    }
}

/// Session-scoped slot for the vault document list.
///
/// Empty until the first fetch after an unlock. Once filled it is reused by every
/// later visit to the documents page and only emptied by [`VaultDocuments::clear`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VaultDocuments {
    list: Option<DocumentList>,
}

impl VaultDocuments {
    pub fn needs_fetch(&self) -> bool {
        self.list.is_none()
    }

    /// Store a fetched list. A second fill is ignored so local edits survive.
    pub fn fill(&mut self, list: DocumentList) -> bool {
        if self.list.is_some() {
            return false;
        }
        self.list = Some(list);
        true
    }

    pub fn get(&self) -> Option<&DocumentList> {
        self.list.as_ref()
    }

    /// Apply an edit to the held list. Returns `false` when nothing is held.
    pub fn edit(&mut self, f: impl FnOnce(&mut DocumentList)) -> bool {
        match self.list.as_mut() {
            Some(list) => {
                f(list);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.list = None;
    }
}

/// Error shown when an upload is missing its title or file.
pub const UPLOAD_REQUIRED_MESSAGE: &str = "Title and file are required";

/// Local check run before any upload request.
pub fn validate_upload(title: &str, has_file: bool) -> Result<(), &'static str> {
    if title.trim().is_empty() || !has_file {
        return Err(UPLOAD_REQUIRED_MESSAGE);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, title: &str, category: DocCategory) -> Document {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            category,
            file: format!("{id}.pdf"),
            created_at: chrono::DateTime::from_timestamp(1_700_000_000, 0),
        }
    }

    fn sample() -> DocumentList {
        DocumentList::new(vec![
            doc("1", "Resume 2026", DocCategory::Resume),
            doc("2", "Passport scan", DocCategory::IdProof),
            doc("3", "Old resume", DocCategory::Other),
            doc("4", "Blood test", DocCategory::Medical),
        ])
    }

    #[test]
    fn test_all_filter_returns_unmodified_list() {
        let list = sample();
        assert_eq!(list.filtered("", CategoryFilter::All), list.as_slice().to_vec());
    }

    #[test]
    fn test_category_filter_is_exact() {
        let list = sample();
        let only = list.filtered("", CategoryFilter::Only(DocCategory::Resume));
        assert_eq!(only.len(), 1);
        assert!(only.iter().all(|d| d.category == DocCategory::Resume));

        assert!(list
            .filtered("", CategoryFilter::Only(DocCategory::Financial))
            .is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let list = sample();
        let hits = list.filtered("RESUME", CategoryFilter::All);
        let ids: Vec<&str> = hits.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let hits = list.filtered("resume", CategoryFilter::Only(DocCategory::Other));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut list = sample();
        assert!(list.remove("2"));
        assert_eq!(list.len(), 3);
        let ids: Vec<&str> = list.as_slice().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);

        assert!(!list.remove("missing"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_prepend_puts_upload_first() {
        let mut list = sample();
        list.prepend(doc("5", "Diploma", DocCategory::Certificate));
        assert_eq!(list.as_slice()[0].id, "5");
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_vault_documents_fetched_once_per_session() {
        let mut held = VaultDocuments::default();
        assert!(held.needs_fetch());
        assert!(held.get().is_none());

        // First visit after unlocking fetches and fills
        assert!(held.fill(sample()));
        assert!(!held.needs_fetch());

        // Local edits stick and a late duplicate fetch does not overwrite them
        assert!(held.edit(|list| {
            list.remove("2");
        }));
        assert!(!held.fill(sample()));
        assert_eq!(held.get().map(DocumentList::len), Some(3));

        // Leaving and coming back reuses the held list
        assert!(!held.needs_fetch());

        // Logout empties it, so the next unlock fetches again
        held.clear();
        assert!(held.needs_fetch());
        assert!(!held.edit(|list| list.prepend(doc("5", "Diploma", DocCategory::Certificate))));
    }

    #[test]
    fn test_filter_options_and_parse() {
        let options = CategoryFilter::options();
        assert_eq!(options.len(), 7);
        assert_eq!(options[0], CategoryFilter::All);
        for option in options {
            assert_eq!(option.to_string().parse::<CategoryFilter>(), Ok(option));
        }
    }

    #[test]
    fn test_validate_upload() {
        assert_eq!(validate_upload("  ", true), Err(UPLOAD_REQUIRED_MESSAGE));
        assert_eq!(validate_upload("CV", false), Err(UPLOAD_REQUIRED_MESSAGE));
        assert!(validate_upload("CV", true).is_ok());
    }
}
