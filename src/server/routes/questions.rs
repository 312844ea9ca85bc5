use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories, questions},
        Category, NewQuestion, Question,
    },
    server::{
        app::AppState,
        deserializers::null_as_default,
        pagination::{Page, PageQuery, PageSize},
    },
    telemetry::{QUESTIONS_CREATED, QUESTIONS_DELETED},
};

use super::{ApiError, ApiResponse};

const DIFFICULTIES: std::ops::RangeInclusive<i64> = 1..=5;

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    categories: Vec<Category>,
    current_category: Option<String>,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i64,
    total_questions: i64,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
    total_questions: i64,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm", default, deserialize_with = "null_as_default")]
    search_term: String,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<String>,
}

async fn questions_page(
    State(pool): State<SqlitePool>,
    State(page_size): State<PageSize>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<QuestionsPage> {
    let Query(query) = query?;
    let page = Page::from_query(query.page.as_deref())?;
    let total_questions = questions::count_questions(&pool).await?;
    page.check_in_range(total_questions, page_size)?;

    let questions =
        questions::get_questions_page(&pool, i64::from(page_size.0), page.offset(page_size))
            .await?;
    Ok(Json(QuestionsPage {
        success: true,
        questions,
        total_questions,
        categories: categories::get_all_categories(&pool).await?,
        current_category: None,
    }))
}

async fn validate(pool: &SqlitePool, question: &NewQuestion) -> Result<(), ApiError> {
    if question.question.trim().is_empty() || question.answer.trim().is_empty() {
        return Err(ApiError::Unprocessable(
            "question and answer must not be empty".to_owned(),
        ));
    }
    if !DIFFICULTIES.contains(&question.difficulty) {
        return Err(ApiError::Unprocessable(format!(
            "difficulty {} is outside {DIFFICULTIES:?}",
            question.difficulty
        )));
    }
    if categories::get_category(pool, question.category)
        .await?
        .is_none()
    {
        return Err(ApiError::Unprocessable(format!(
            "category {} does not exist",
            question.category
        )));
    }
    Ok(())
}

async fn create_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<NewQuestion>, JsonRejection>,
) -> ApiResponse<Created> {
    let Json(new_question) = body?;
    validate(&pool, &new_question).await?;

    let id = questions::create_question(&pool, &new_question).await?;
    QUESTIONS_CREATED.inc();
    tracing::info!(id, category = new_question.category, "Question created");

    Ok(Json(Created {
        success: true,
        created: id,
        total_questions: questions::count_questions(&pool).await?,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResponse<Deleted> {
    let Path(id) = id?;
    if !questions::delete_question(&pool, id).await? {
        return Err(ApiError::NotFound);
    }
    QUESTIONS_DELETED.inc();
    tracing::info!(id, "Question deleted");

    Ok(Json(Deleted {
        success: true,
        deleted: id,
        total_questions: questions::count_questions(&pool).await?,
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResponse<SearchResults> {
    let Json(body) = body?;
    let questions = questions::search_questions(&pool, &body.search_term).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(SearchResults {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

pub fn questions_router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(questions_page).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/search", post(search_questions))
}
