use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Category;

/// Response for the category listing: the id → type mapping, ordered by id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    pub success: bool,
    pub status_code: u16,
    pub categories: BTreeMap<i64, String>,
    pub total_categories: i64,
}

/// Collapse category rows into the wire mapping. BTreeMap keeps the
/// serialized object ordered by id.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
