//! Category Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Keyed;

/// Trivia category entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "db", sqlx(rename = "type"))]
    pub kind: String,
}

impl Keyed for Category {
    fn key(&self) -> i64 {
        self.id
    }
}

/// `{id: type}` map, ordered by id
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_map_serializes_with_string_keys() {
        let map = category_map(&[
            Category {
                id: 2,
                kind: "Art".into(),
            },
            Category {
                id: 1,
                kind: "Science".into(),
            },
        ]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"1":"Science","2":"Art"}"#);
    }
}
