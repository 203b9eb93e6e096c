use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A named grouping of trivia questions. Seeded once; read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i64,
    /// Display name, e.g. "Science". The column and wire name is `type`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}
