use sqlx::SqlitePool;

use crate::dto::question::NewQuestion;
use crate::error::Result;
use crate::repository::category::CategoryRepository;
use crate::repository::question::QuestionRepository;

const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Starter questions as (question, answer, category id, difficulty).
/// Category ids follow the insertion order of `CATEGORIES`.
const QUESTIONS: [(&str, &str, i64, i64); 12] = [
    (
        "What is the heaviest organ in the human body?",
        "The Liver",
        1,
        4,
    ),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    (
        "Hematology is a branch of medicine involving the study of what?",
        "Blood",
        1,
        4,
    ),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    (
        "How many paintings did Van Gogh sell in his lifetime?",
        "One",
        2,
        4,
    ),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    (
        "The Taj Mahal is located in which Indian city?",
        "Agra",
        3,
        2,
    ),
    (
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        4,
        2,
    ),
    (
        "What boxer's original name is Cassius Clay?",
        "Muhammad Ali",
        4,
        1,
    ),
    (
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        5,
        4,
    ),
    (
        "Which is the only team to play in every soccer World Cup tournament?",
        "Brazil",
        6,
        3,
    ),
    (
        "Which country won the first ever soccer World Cup in 1930?",
        "Uruguay",
        6,
        4,
    ),
];

/// Populate an empty database with the starter trivia set.
///
/// Returns `false` without touching anything when categories already
/// exist, so repeated startups never duplicate the data.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<bool> {
    let categories = CategoryRepository::new(pool);
    if categories.count().await? > 0 {
        return Ok(false);
    }

    for kind in CATEGORIES {
        categories.create(kind).await?;
    }

    let questions = QuestionRepository::new(pool);
    for (question, answer, category, difficulty) in QUESTIONS {
        questions
            .create(&NewQuestion {
                question: question.to_string(),
                answer: answer.to_string(),
                category,
                difficulty,
            })
            .await?;
    }

    Ok(true)
}
