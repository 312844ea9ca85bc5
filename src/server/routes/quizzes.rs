use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::Question,
    quiz::{self, QuizCategory},
    server::{app::AppState, deserializers::null_as_default},
    telemetry::QUIZ_QUESTIONS_SERVED,
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    previous_questions: Vec<i64>,
    quiz_category: QuizCategoryBody,
}

// `type` is sent too but only the id matters
#[derive(Deserialize)]
struct QuizCategoryBody {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    question: Option<Question>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResponse<QuizQuestion> {
    let Json(request) = body?;
    let category = QuizCategory::from(request.quiz_category.id);
    let question = quiz::next_question(&pool, category, &request.previous_questions).await?;

    match &question {
        Some(question) => {
            QUIZ_QUESTIONS_SERVED
                .with_label_values(&[category.label().as_str()])
                .inc();
            tracing::debug!(id = question.id, "Serving quiz question");
        }
        None => tracing::debug!(
            asked = request.previous_questions.len(),
            "Quiz round exhausted"
        ),
    }

    Ok(Json(QuizQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router() -> Router<AppState> {
    Router::new().route("/quizzes", post(play_quiz))
}
