//! Shared wire types for the platform API.

use serde::{Deserialize, Serialize};

/// One page of a server-paginated listing.
///
/// Every list endpoint returns this envelope; the tables page through it
/// with the `page` query parameter and narrow it with `q` keyword search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records in this page.
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: u32,
    /// Total number of pages for the current filter.
    pub total_pages: u32,
    /// Total number of records for the current filter.
    pub total: u64,
}

impl<T> Page<T> {
    /// Whether another page follows this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Result of uploading an image to the platform's blob storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedImage {
    /// Public URL of the stored image.
    pub url: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_page_envelope() {
        let page: Page<String> = serde_json::from_str(
            r#"{"items":["a","b"],"page":2,"totalPages":3,"total":55}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert!(page.has_next_page());

        let last: Page<String> =
            serde_json::from_str(r#"{"items":[],"page":3,"totalPages":3,"total":55}"#).unwrap();
        assert!(!last.has_next_page());
    }
}
