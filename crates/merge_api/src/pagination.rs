//! Cursor-paginated list responses.
//!
//! The client never walks pages on its own. A [`Paginated`] page hands back
//! the cursors so the caller decides whether to ask for the next one:
//!
//! ```ignore
//! let mut params = ListParams::new().page_size(100);
//! loop {
//!     let page = client.ats().candidates().list(&params, None).await?;
//!     handle(&page.results);
//!     match page.next_page(&params) {
//!         Some(next) => params = next,
//!         None => break,
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::model::nullable_vec;
use crate::params::ListParams;

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paginated<T> {
    /// Cursor of the following page.
    #[serde(default)]
    pub next: Option<String>,
    /// Cursor of the preceding page.
    #[serde(default)]
    pub previous: Option<String>,
    /// Items on this page; empty, never absent.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub results: Vec<T>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

impl<T> Paginated<T> {
    #[inline]
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_deref().filter(|c| !c.is_empty())
    }

    #[inline]
    pub fn previous_cursor(&self) -> Option<&str> {
        self.previous.as_deref().filter(|c| !c.is_empty())
    }

    /// Returns true if there are more pages to fetch.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.next_cursor().is_some()
    }

    /// Parameters for the following page, or `None` on the last page.
    pub fn next_page(&self, params: &ListParams) -> Option<ListParams> {
        self.next_cursor()
            .map(|cursor| params.clone().cursor(cursor))
    }

    /// Parameters for the preceding page, or `None` on the first page.
    pub fn previous_page(&self, params: &ListParams) -> Option<ListParams> {
        self.previous_cursor()
            .map(|cursor| params.clone().cursor(cursor))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }
}

impl<T> IntoIterator for Paginated<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Paginated<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_are_never_absent() {
        let page: Paginated<u32> = serde_json::from_str(r#"{"next":null,"previous":null}"#).unwrap();
        assert!(page.is_empty());

        let page: Paginated<u32> =
            serde_json::from_str(r#"{"next":null,"previous":null,"results":null}"#).unwrap();
        assert!(page.is_empty());
        assert!(!page.has_more());
    }

    #[test]
    fn next_page_carries_cursor_and_keeps_filters() {
        let page: Paginated<u32> =
            serde_json::from_str(r#"{"next":"cD0yMDIy","previous":"cD0xOTk5","results":[1,2,3]}"#)
                .unwrap();
        assert_eq!(page.len(), 3);
        assert_eq!(page.iter().sum::<u32>(), 6);

        let params = ListParams::new().page_size(3).filter("status", "OPEN");
        let next = page.next_page(&params).expect("has next page");
        assert_eq!(next.cursor.as_deref(), Some("cD0yMDIy"));
        assert_eq!(next.page_size, Some(3));
        assert_eq!(next.filters, params.filters);

        let previous = page.previous_page(&params).expect("has previous page");
        assert_eq!(previous.cursor.as_deref(), Some("cD0xOTk5"));
    }

    #[test]
    fn empty_cursor_means_last_page() {
        let page: Paginated<u32> =
            serde_json::from_str(r#"{"next":"","previous":null,"results":[]}"#).unwrap();
        assert!(!page.has_more());
        assert!(page.next_page(&ListParams::new()).is_none());
    }

    #[test]
    fn into_iter_yields_results() {
        let page = Paginated {
            next: None,
            previous: None,
            results: vec!["a", "b"],
        };
        let collected: Vec<_> = page.into_iter().collect();
        assert_eq!(collected, vec!["a", "b"]);
    }
}
