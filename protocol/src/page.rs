//! Paged list envelope returned by the backend's record listing endpoint.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    pub page: u32,
    pub per_page: u32,
    /// `-1` when the backend skipped counting or left the field out.
    #[serde(default = "uncounted")]
    pub total_items: i64,
    #[serde(default = "uncounted")]
    pub total_pages: i64,
    pub items: Vec<T>,
}

fn uncounted() -> i64 {
    -1
}

impl<T> ListPage<T> {
    /// True when no further page should be requested.
    #[must_use]
    pub fn is_last(&self) -> bool {
        if self.items.is_empty() {
            return true;
        }
        if self.total_pages >= 0 {
            return i64::from(self.page) >= self.total_pages;
        }
        // Count skipped: a short page is the last one.
        self.items.len() < self.per_page as usize
    }
}
