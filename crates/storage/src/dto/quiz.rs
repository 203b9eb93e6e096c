use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Question;

/// Category id clients send to draw from every category.
pub const ALL_CATEGORIES: i64 = 0;

/// Request payload for drawing a quiz question. Both keys are required;
/// a body missing either is rejected as malformed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizRequest {
    /// Ids the client has already been served.
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizCategory {
    pub id: i64,
}

impl QuizCategory {
    /// The category restriction, if any.
    pub fn filter(&self) -> Option<i64> {
        (self.id != ALL_CATEGORIES).then_some(self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    /// A uniformly random unseen question, or `null` when none remain.
    pub question: Option<Question>,
    /// Size of the candidate set the question was drawn from.
    pub total_questions: i64,
}
