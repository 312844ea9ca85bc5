use sqlx::sqlite::SqlitePool;

use super::queries::questions::{import_questions, Question};
use super::{connect_in_memory, run_migrations};

pub async fn memory_pool() -> SqlitePool {
    let pool = connect_in_memory().await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

pub fn question(id: i64, question: &str, answer: &str, category: i64) -> Question {
    Question {
        id,
        question: question.to_owned(),
        answer: answer.to_owned(),
        difficulty: 2,
        category,
    }
}

pub async fn seeded_pool() -> SqlitePool {
    let pool = memory_pool().await;
    import_questions(
        &pool,
        vec![
            question(1, "What is the heaviest organ in the human body?", "The Liver", 1),
            question(2, "Who discovered penicillin?", "Alexander Fleming", 1),
            question(3, "What is the largest lake in Africa?", "Lake Victoria", 3),
            question(4, "Who painted La Giaconda?", "Leonardo da Vinci", 2),
            question(5, "What movie earned Tom Hanks his third straight Oscar nomination?", "Apollo 13", 5),
            question(6, "Which 100% cotton fabric is used for jeans?", "Denim", 5),
        ],
    )
    .await
    .unwrap();
    pool
}
