//! Collection query service
//!
//! Listing, search and random selection implemented once over any
//! [`Collection`]. Results keep the repository order (primary key ascending).

use std::collections::HashSet;

use rand::Rng;
use shared::models::Keyed;
use shared::{Page, PageRequest};

use crate::db::repository::Collection;
use crate::utils::{AppError, AppResult};

/// One page of the (optionally filtered) collection
///
/// An empty filtered set is a not-found; a page past the end of a non-empty
/// set is served empty with the real total.
pub async fn list<C: Collection>(
    repo: &C,
    filter: Option<&C::Filter>,
    page: PageRequest,
) -> AppResult<Page<C::Record>> {
    let records = match filter {
        Some(filter) => repo.find_by_filter(filter).await?,
        None => repo.find_all().await?,
    };
    if records.is_empty() {
        tracing::debug!(resource = C::RESOURCE, "Listing is empty");
        return Err(AppError::not_found());
    }
    Ok(Page::slice(records, page))
}

/// Every record matching `term`, unpaged
///
/// An absent term is a not-found; an empty term matches everything.
pub async fn search_all<C: Collection>(repo: &C, term: Option<&str>) -> AppResult<Vec<C::Record>> {
    let term = term.ok_or_else(AppError::not_found)?;
    let records = if term.is_empty() {
        repo.find_all().await?
    } else {
        repo.find_by_text_match(term).await?
    };
    tracing::debug!(resource = C::RESOURCE, term, count = records.len(), "Search");
    Ok(records)
}

/// One page of the records matching `term`
///
/// Absent and empty terms are both a not-found.
pub async fn search_page<C: Collection>(
    repo: &C,
    term: Option<&str>,
    page: PageRequest,
) -> AppResult<Page<C::Record>> {
    let term = term
        .filter(|t| !t.is_empty())
        .ok_or_else(AppError::not_found)?;
    let records = repo.find_by_text_match(term).await?;
    tracing::debug!(resource = C::RESOURCE, term, count = records.len(), "Search");
    Ok(Page::slice(records, page))
}

/// A uniformly random record whose key is not in `excluded`
///
/// Returns `None` when every candidate has been excluded.
pub async fn random_unseen<C: Collection>(
    repo: &C,
    filter: Option<&C::Filter>,
    excluded: &[i64],
) -> AppResult<Option<C::Record>> {
    let records = match filter {
        Some(filter) => repo.find_by_filter(filter).await?,
        None => repo.find_all().await?,
    };
    let excluded: HashSet<i64> = excluded.iter().copied().collect();
    let mut eligible: Vec<C::Record> = records
        .into_iter()
        .filter(|r| !excluded.contains(&r.key()))
        .collect();

    if eligible.is_empty() {
        return Ok(None);
    }
    let index = rand::thread_rng().gen_range(0..eligible.len());
    Ok(Some(eligible.swap_remove(index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepoResult;
    use crate::utils::ErrorCode;
    use shared::PAGE_SIZE;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        name: String,
        group: i64,
    }

    impl Keyed for Item {
        fn key(&self) -> i64 {
            self.id
        }
    }

    struct Fixture(Vec<Item>);

    impl Fixture {
        fn new(n: i64) -> Self {
            Self(
                (1..=n)
                    .map(|id| Item {
                        id,
                        name: format!("Item {id}"),
                        group: id % 2,
                    })
                    .collect(),
            )
        }
    }

    impl Collection for Fixture {
        type Record = Item;
        type Filter = i64;

        const RESOURCE: &'static str = "item";

        async fn find_all(&self) -> RepoResult<Vec<Item>> {
            Ok(self.0.clone())
        }

        async fn find_by_filter(&self, group: &i64) -> RepoResult<Vec<Item>> {
            Ok(self.0.iter().filter(|i| i.group == *group).cloned().collect())
        }

        async fn find_by_text_match(&self, term: &str) -> RepoResult<Vec<Item>> {
            let term = term.to_lowercase();
            Ok(self
                .0
                .iter()
                .filter(|i| i.name.to_lowercase().contains(&term))
                .cloned()
                .collect())
        }
    }

    fn ids(items: &[Item]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[tokio::test]
    async fn test_list_pages_are_bounded_and_disjoint() {
        let repo = Fixture::new(23);
        let first = list(&repo, None, PageRequest::new(1)).await.unwrap();
        let second = list(&repo, None, PageRequest::new(2)).await.unwrap();

        assert_eq!(first.items.len(), PAGE_SIZE);
        assert_eq!(ids(&first.items), (1..=10).collect::<Vec<_>>());
        assert_eq!(ids(&second.items), (11..=20).collect::<Vec<_>>());
        assert_eq!(first.total, 23);
    }

    #[tokio::test]
    async fn test_list_with_filter() {
        let repo = Fixture::new(6);
        let odd = list(&repo, Some(&1), PageRequest::FIRST).await.unwrap();
        assert_eq!(ids(&odd.items), vec![1, 3, 5]);
        assert_eq!(odd.total, 3);
    }

    #[tokio::test]
    async fn test_list_empty_set_is_not_found() {
        let repo = Fixture::new(0);
        let err = list(&repo, None, PageRequest::FIRST).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let repo = Fixture::new(4);
        let err = list(&repo, Some(&7), PageRequest::FIRST).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_list_past_end_is_empty() {
        let repo = Fixture::new(3);
        let page = list(&repo, None, PageRequest::new(4)).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn test_search_all_empty_term_matches_everything() {
        let repo = Fixture::new(12);
        assert_eq!(search_all(&repo, Some("")).await.unwrap().len(), 12);
        assert_eq!(ids(&search_all(&repo, Some("ITEM 1")).await.unwrap()), vec![1, 10, 11, 12]);
    }

    #[tokio::test]
    async fn test_search_all_absent_term_is_not_found() {
        let repo = Fixture::new(2);
        let err = search_all(&repo, None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_search_page_rejects_empty_term() {
        let repo = Fixture::new(2);
        for term in [None, Some("")] {
            let err = search_page(&repo, term, PageRequest::FIRST).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::NotFound);
        }
    }

    #[tokio::test]
    async fn test_search_page_total_counts_matches() {
        let repo = Fixture::new(30);
        let page = search_page(&repo, Some("item 2"), PageRequest::FIRST).await.unwrap();
        // "Item 2" and "Item 20".."Item 29"
        assert_eq!(page.total, 11);
        assert_eq!(page.items.len(), PAGE_SIZE);

        let none = search_page(&repo, Some("zebra"), PageRequest::FIRST).await.unwrap();
        assert!(none.is_empty());
        assert_eq!(none.total, 0);
    }

    #[tokio::test]
    async fn test_random_unseen_never_returns_excluded() {
        let repo = Fixture::new(5);
        for _ in 0..50 {
            let pick = random_unseen(&repo, None, &[1, 2, 4]).await.unwrap().unwrap();
            assert!(pick.id == 3 || pick.id == 5);
        }
    }

    #[tokio::test]
    async fn test_random_unseen_respects_filter() {
        let repo = Fixture::new(6);
        for _ in 0..20 {
            let pick = random_unseen(&repo, Some(&0), &[2]).await.unwrap().unwrap();
            assert!(pick.id == 4 || pick.id == 6);
        }
    }

    #[tokio::test]
    async fn test_random_unseen_exhausted_is_none() {
        let repo = Fixture::new(3);
        assert_eq!(random_unseen(&repo, None, &[1, 2, 3]).await.unwrap(), None);
        assert_eq!(random_unseen(&Fixture::new(0), None, &[]).await.unwrap(), None);
    }
}
