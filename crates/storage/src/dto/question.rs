use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::Question;

/// Request payload for creating a question. All fields are required; the
/// `required` rules turn absent keys into named validation failures
/// instead of deserialization errors.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionRequest {
    #[validate(required(message = "question text is required"))]
    #[validate(length(min = 1, message = "question text must not be empty"))]
    pub question: Option<String>,

    #[validate(required(message = "answer text is required"))]
    #[validate(length(min = 1, message = "answer text must not be empty"))]
    pub answer: Option<String>,

    #[validate(required(message = "category id is required"))]
    pub category: Option<i64>,

    #[validate(required(message = "difficulty is required"))]
    #[validate(range(min = 1, max = 5, message = "difficulty must be between 1 and 5"))]
    pub difficulty: Option<i64>,
}

/// A validated creation request with every field present.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl CreateQuestionRequest {
    /// `None` while any field is still missing; infallible once
    /// validation has passed.
    pub fn into_parts(self) -> Option<NewQuestion> {
        Some(NewQuestion {
            question: self.question?,
            answer: self.answer?,
            category: self.category?,
            difficulty: self.difficulty?,
        })
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Case-insensitive substring to look for in question texts.
    pub search: Option<String>,
}

/// Response for the paginated question listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub categories: BTreeMap<i64, String>,
    /// Relative URL of the following page; `null` on the last page.
    pub next_page: Option<String>,
    pub total_questions: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    /// Text of the removed question.
    pub deleted_question: String,
    pub deleted_question_id: i64,
    /// The requested page of the questions that remain.
    pub current_questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    /// Text of the question that was just created.
    pub new_question: String,
    /// First page of the listing after the insert.
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_searched_items: i64,
}

/// Response for the category-filtered listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_request_validates_and_splits() {
        let req = CreateQuestionRequest {
            question: Some("What is the heaviest organ in the human body?".into()),
            answer: Some("The liver".into()),
            category: Some(1),
            difficulty: Some(4),
        };
        assert!(req.validate().is_ok());

        let new = req.into_parts().unwrap();
        assert_eq!(new.answer, "The liver");
        assert_eq!(new.difficulty, 4);
    }

    #[test]
    fn missing_fields_fail_validation() {
        let req = CreateQuestionRequest {
            question: None,
            answer: Some("Yes".into()),
            category: Some(1),
            difficulty: Some(2),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("question"));
        assert!(req.into_parts().is_none());
    }

    #[test]
    fn difficulty_outside_range_fails_validation() {
        let req = CreateQuestionRequest {
            question: Some("q".into()),
            answer: Some("a".into()),
            category: Some(1),
            difficulty: Some(9),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("difficulty"));
    }
}
