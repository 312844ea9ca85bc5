use std::collections::HashSet;

use rand::seq::IndexedRandom;
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::Question;
use crate::server::error::ApiError;

/// Which questions a quiz round draws from. The client's "ALL" button sends id 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Category(i64),
}

impl From<i64> for QuizCategory {
    fn from(id: i64) -> Self {
        match id {
            0 => QuizCategory::All,
            id => QuizCategory::Category(id),
        }
    }
}

impl QuizCategory {
    pub fn label(&self) -> String {
        match self {
            QuizCategory::All => "all".to_owned(),
            QuizCategory::Category(id) => id.to_string(),
        }
    }
}

/// Picks a random question of `category` that isn't in `previous_questions`.
/// `Ok(None)` means the round has run out of questions.
pub async fn next_question(
    pool: &SqlitePool,
    category: QuizCategory,
    previous_questions: &[i64],
) -> Result<Option<Question>, ApiError> {
    let category_id = match category {
        QuizCategory::All => None,
        QuizCategory::Category(id) => {
            let category = categories::get_category(pool, id)
                .await?
                .ok_or(ApiError::NotFound)?;
            Some(category.id)
        }
    };

    let candidates = questions::get_quiz_candidates(pool, category_id).await?;
    Ok(pick_unseen(candidates, previous_questions))
}

fn pick_unseen(candidates: Vec<Question>, previous_questions: &[i64]) -> Option<Question> {
    let previous: HashSet<i64> = previous_questions.iter().copied().collect();
    let unseen: Vec<Question> = candidates
        .into_iter()
        .filter(|question| !previous.contains(&question.id))
        .collect();
    unseen.choose(&mut rand::rng()).cloned()
}
