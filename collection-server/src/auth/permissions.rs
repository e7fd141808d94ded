//! Permission Definitions
//!
//! Permission strings issued by the identity provider in the `permissions`
//! claim. Matching is exact.

/// View drinks with full recipes
pub const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
/// Create drinks
pub const POST_DRINKS: &str = "post:drinks";
/// Update drinks
pub const PATCH_DRINKS: &str = "patch:drinks";
/// Delete drinks
pub const DELETE_DRINKS: &str = "delete:drinks";
