//! Query parameters and presentation helpers for the public note feed.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::models::Note;

/// Categories offered in the filter even before any note uses them.
pub const BASE_CATEGORIES: [&str; 6] = [
    "Mathematics",
    "Science",
    "History",
    "Technology",
    "Language",
    "Business",
];

/// Group label for notes without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Likes,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Likes => "likes",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "likes" => Ok(SortOrder::Likes),
            other => Err(format!("Unknown sort order: {other}")),
        }
    }
}

/// Query string for `GET /notes`. Unset filters are omitted from the request.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NotesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub mine: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub favorites: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl NotesQuery {
    /// Feed query; blank search and category strings are dropped.
    pub fn feed(page: u32, sort: SortOrder, search: &str, category: &str) -> Self {
        Self {
            page: Some(page.max(1)),
            sort: Some(sort),
            search: non_blank(search),
            category: non_blank(category),
            ..Self::default()
        }
    }

    /// The current user's uploads.
    pub fn mine(limit: u32) -> Self {
        Self {
            mine: true,
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// The current user's favorites.
    pub fn favorites(limit: u32) -> Self {
        Self {
            favorites: true,
            limit: Some(limit),
            ..Self::default()
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Filter options: base categories first, then any new ones seen on `notes`, without duplicates.
pub fn category_options(notes: &[Note]) -> Vec<String> {
    let mut options: Vec<String> = BASE_CATEGORIES.iter().map(|c| c.to_string()).collect();
    for note in notes {
        if !note.category.is_empty() && !options.contains(&note.category) {
            options.push(note.category.clone());
        }
    }
    options
}

/// Notes grouped by category, groups sorted by name.
pub fn group_by_category(notes: &[Note]) -> Vec<(String, Vec<Note>)> {
    let mut groups: BTreeMap<String, Vec<Note>> = BTreeMap::new();
    for note in notes {
        let key = if note.category.is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            note.category.clone()
        };
        groups.entry(key).or_default().push(note.clone());
    }
    groups.into_iter().collect()
}

/// Page cursor clamped to `[1, pages]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, pages: 1 }
    }
}

impl Pagination {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    /// Controls are only shown when there is more than one page.
    pub fn is_visible(&self) -> bool {
        self.pages > 1
    }

    pub fn prev(self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self
        }
    }

    pub fn next(self) -> Self {
        Self {
            page: (self.page + 1).min(self.pages.max(1)),
            ..self
        }
    }

    /// Update the page count from a response, keeping the cursor in range.
    pub fn with_pages(self, pages: u32) -> Self {
        let pages = pages.max(1);
        Self {
            page: self.page.clamp(1, pages),
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, category: &str) -> Note {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "title": format!("Note {id}"),
            "category": category,
        }))
        .unwrap()
    }

    #[test]
    fn test_feed_query_drops_blank_filters() {
        let query = NotesQuery::feed(0, SortOrder::Likes, "  ", "");
        assert_eq!(query.page, Some(1));
        assert_eq!(query.sort, Some(SortOrder::Likes));
        assert!(query.search.is_none());
        assert!(query.category.is_none());

        let query = NotesQuery::feed(2, SortOrder::Newest, " algebra ", "Mathematics");
        assert_eq!(query.search.as_deref(), Some("algebra"));
        assert_eq!(query.category.as_deref(), Some("Mathematics"));
    }

    #[test]
    fn test_query_serialisation_skips_unset() {
        let json = serde_json::to_value(NotesQuery::mine(50)).unwrap();
        assert_eq!(json, serde_json::json!({"mine": true, "limit": 50}));

        let json = serde_json::to_value(NotesQuery::feed(1, SortOrder::Newest, "", "")).unwrap();
        assert_eq!(json, serde_json::json!({"page": 1, "sort": "newest"}));
    }

    #[test]
    fn test_category_options_union() {
        let notes = vec![note("1", "Science"), note("2", "Art"), note("3", "Art"), note("4", "")];
        let options = category_options(&notes);
        assert_eq!(options.len(), BASE_CATEGORIES.len() + 1);
        assert_eq!(options.last().map(String::as_str), Some("Art"));
        assert_eq!(options[0], "Mathematics");
    }

    #[test]
    fn test_group_by_category_sorted() {
        let notes = vec![note("1", "Science"), note("2", ""), note("3", "Art"), note("4", "Science")];
        let groups = group_by_category(&notes);
        let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Art", "Science", "Uncategorized"]);
        assert_eq!(groups[1].1.len(), 2);
        assert_eq!(groups[1].1[0].id, "1");
        assert_eq!(groups[1].1[1].id, "4");
    }

    #[test]
    fn test_pagination_clamps() {
        let p = Pagination::default().with_pages(3);
        assert!(p.is_visible());
        assert!(!p.has_prev());
        assert_eq!(p.prev().page, 1);

        let p = p.next().next().next();
        assert_eq!(p.page, 3);
        assert!(!p.has_next());

        let p = p.with_pages(2);
        assert_eq!(p.page, 2);

        let p = Pagination::default().with_pages(0);
        assert_eq!(p.pages, 1);
        assert!(!p.is_visible());
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("likes".parse::<SortOrder>(), Ok(SortOrder::Likes));
        assert_eq!(SortOrder::Newest.to_string(), "newest");
        assert!("oldest".parse::<SortOrder>().is_err());
    }
}
