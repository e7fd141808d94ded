//! Data models
//!
//! Shared between the collection server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod artist;
pub mod category;
pub mod drink;
pub mod question;
pub mod show;
pub mod venue;

// Re-exports
pub use artist::*;
pub use category::*;
pub use drink::*;
pub use question::*;
pub use show::*;
pub use venue::*;

/// A record addressable by its primary key
pub trait Keyed {
    fn key(&self) -> i64;
}

/// Message shown to the user after a write
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Notice {
    /// Id of the record the write touched
    pub id: i64,
    pub notice: String,
}
