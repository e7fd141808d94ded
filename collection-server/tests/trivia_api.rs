mod common;

use common::TestApp;
use http::StatusCode;
use serde_json::json;

/// Science (1) with Q1, Q2; Art (2) with Q3
async fn seeded() -> TestApp {
    let app = TestApp::new().await;
    app.exec("INSERT INTO category (id, type) VALUES (1, 'Science'), (2, 'Art')")
        .await;
    app.exec(
        "INSERT INTO question (id, question, answer, category, difficulty) VALUES \
         (1, 'What is the heaviest organ in the human body?', 'The Liver', 1, 4), \
         (2, 'Who discovered penicillin?', 'Alexander Fleming', 1, 3), \
         (3, 'Which Dutch graphic artist signed his work M. C.?', 'Escher', 2, 1)",
    )
    .await;
    app
}

#[tokio::test]
async fn test_categories_map() {
    let app = seeded().await;
    let (status, body) = app.get("/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"], json!({"1": "Science", "2": "Art"}));
}

#[tokio::test]
async fn test_no_categories_is_not_found() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/categories").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"success": false, "error": 404, "message": "resource not found"})
    );
}

#[tokio::test]
async fn test_questions_page() {
    let app = seeded().await;
    let (status, body) = app.get("/questions?page=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalQuestions"], 3);
    assert_eq!(body["questions"].as_array().unwrap().len(), 3);
    assert_eq!(body["questions"][0]["answer"], "The Liver");
    assert_eq!(body["categories"]["2"], "Art");

    let (status, body) = app.get("/questions?page=9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"], json!([]));
    assert_eq!(body["totalQuestions"], 3);
}

#[tokio::test]
async fn test_questions_by_category() {
    let app = seeded().await;
    let (status, body) = app.get("/categories/1/questions").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(body["currentCategory"], 1);

    let (status, _) = app.get("/categories/7/questions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_question() {
    let app = seeded().await;
    let (status, body) = app
        .post(
            "/questions",
            json!({"question": "What is H2O?", "answer": "Water", "category": 1, "difficulty": 1}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["created"], 4);

    let (_, body) = app.get("/categories/1/questions").await;
    assert_eq!(body["totalQuestions"], 3);
}

#[tokio::test]
async fn test_create_question_missing_field_is_unprocessable() {
    let app = seeded().await;
    let (status, body) = app
        .post("/questions", json!({"question": "What is H2O?", "category": 1, "difficulty": 1}))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], 422);

    let (status, _) = app
        .post(
            "/questions",
            json!({"question": "", "answer": "Water", "category": 1, "difficulty": 1}),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = app.get("/questions").await;
    assert_eq!(body["totalQuestions"], 3);
}

#[tokio::test]
async fn test_create_question_unknown_category_is_unprocessable() {
    let app = seeded().await;
    let (status, body) = app
        .post(
            "/questions",
            json!({"question": "Orphan?", "answer": "yes", "category": 42, "difficulty": 2}),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "unprocessable");
}

#[tokio::test]
async fn test_delete_question() {
    let app = seeded().await;
    let (status, body) = app.delete("/questions/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "deleted": 2}));

    let (status, _) = app.delete("/questions/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_questions() {
    let app = seeded().await;
    let (status, body) = app
        .post("/questions/search", json!({"searchTerm": "WHO"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalQuestions"], 1);
    assert_eq!(body["questions"][0]["id"], 2);

    let (status, body) = app
        .post("/questions/search", json!({"searchTerm": "zebra"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalQuestions"], 0);

    for payload in [json!({"searchTerm": ""}), json!({})] {
        let (status, _) = app.post("/questions/search", payload).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let app = seeded().await;
    app.exec(
        "INSERT INTO question (id, question, answer, category, difficulty) \
         VALUES (4, 'Ärger über Öl?', 'Ja', 2, 2)",
    )
    .await;
    let (status, body) = app
        .post("/questions/search", json!({"searchTerm": "äRGER"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalQuestions"], 1);
    assert_eq!(body["questions"][0]["id"], 4);
}

#[tokio::test]
async fn test_quiz_never_repeats() {
    let app = seeded().await;
    for _ in 0..10 {
        let (status, body) = app
            .post(
                "/quizzes",
                json!({"previous_questions": [1], "quiz_category": {"id": 1, "type": "Science"}}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["id"], 2);
    }

    let (_, body) = app
        .post(
            "/quizzes",
            json!({"previous_question_ids": [1, 3], "quiz_category": {"id": 0}}),
        )
        .await;
    assert_eq!(body["question"]["id"], 2);
}

#[tokio::test]
async fn test_quiz_exhausted_returns_null() {
    let app = seeded().await;
    let (status, body) = app
        .post(
            "/quizzes",
            json!({"previous_questions": [3], "quiz_category": {"id": 2}}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "question": null}));
}

#[tokio::test]
async fn test_quiz_missing_fields_is_unprocessable() {
    let app = seeded().await;
    let (status, _) = app.post("/quizzes", json!({"previous_questions": []})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app.post("/quizzes", json!({"quiz_category": {"id": 0}})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
