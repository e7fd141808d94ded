//! Pagination contract
//!
//! Pages are 1-based and hold at most [`PAGE_SIZE`] records. Page `p` covers
//! the half-open range `[(p - 1) * PAGE_SIZE, p * PAGE_SIZE)` of an ordered
//! collection.

use serde::{Deserialize, Serialize};

/// Records per page
pub const PAGE_SIZE: usize = 10;

/// A validated page number (always >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageRequest(u32);

impl PageRequest {
    /// The first page
    pub const FIRST: Self = Self(1);

    /// Clamp a raw page number; anything below 1 becomes 1
    pub fn new(page: i64) -> Self {
        Self(page.clamp(1, i64::from(u32::MAX)) as u32)
    }

    /// Parse a raw query value leniently.
    ///
    /// Absent, empty or unparsable values yield the first page.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or(Self::FIRST)
    }

    /// 1-based page number
    pub fn number(&self) -> u32 {
        self.0
    }

    /// Index of the first record on this page
    pub fn offset(&self) -> usize {
        (self.0 as usize - 1).saturating_mul(PAGE_SIZE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::FIRST
    }
}

/// One page of an ordered collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page
    pub items: Vec<T>,
    /// Size of the whole (filtered) collection
    pub total: usize,
    /// Page number that was served
    pub page: u32,
}

impl<T> Page<T> {
    /// Cut one page out of an already ordered collection
    pub fn slice(records: Vec<T>, request: PageRequest) -> Self {
        let total = records.len();
        let items = records
            .into_iter()
            .skip(request.offset())
            .take(PAGE_SIZE)
            .collect();
        Self {
            items,
            total,
            page: request.number(),
        }
    }

    /// Map every record on the page, keeping the counts
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
        }
    }

    /// True when the page holds no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_clamps() {
        assert_eq!(PageRequest::new(0).number(), 1);
        assert_eq!(PageRequest::new(-4).number(), 1);
        assert_eq!(PageRequest::new(3).number(), 3);
    }

    #[test]
    fn test_page_request_parse() {
        assert_eq!(PageRequest::parse(None), PageRequest::FIRST);
        assert_eq!(PageRequest::parse(Some("")), PageRequest::FIRST);
        assert_eq!(PageRequest::parse(Some("abc")), PageRequest::FIRST);
        assert_eq!(PageRequest::parse(Some("-1")), PageRequest::FIRST);
        assert_eq!(PageRequest::parse(Some(" 2 ")).number(), 2);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1).offset(), 0);
        assert_eq!(PageRequest::new(3).offset(), 20);
    }

    #[test]
    fn test_adjacent_pages_are_disjoint() {
        let records: Vec<u32> = (1..=25).collect();
        let first = Page::slice(records.clone(), PageRequest::new(1));
        let second = Page::slice(records.clone(), PageRequest::new(2));
        let third = Page::slice(records, PageRequest::new(3));

        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(second.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(third.items, (21..=25).collect::<Vec<_>>());
        assert!(first.items.iter().all(|r| !second.items.contains(r)));
        assert_eq!(third.total, 25);
    }

    #[test]
    fn test_page_past_end_is_empty_with_total() {
        let page = Page::slice(vec![1, 2, 3], PageRequest::new(5));
        assert!(page.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 5);
    }
}
