mod common;

use collection_server::auth::permissions::{
    DELETE_DRINKS, GET_DRINKS_DETAIL, PATCH_DRINKS, POST_DRINKS,
};
use common::{TestApp, request, sign, token};
use http::StatusCode;
use serde_json::{Value, json};

const MANAGER: &[&str] = &[GET_DRINKS_DETAIL, POST_DRINKS, PATCH_DRINKS, DELETE_DRINKS];

fn latte() -> Value {
    json!({"title": "Latte", "recipe": [{"color": "white", "name": "milk", "parts": 1}]})
}

async fn create_latte(app: &TestApp) -> i64 {
    let (status, body) = app
        .send(request("POST", "/drinks", Some(latte()), Some(&token(MANAGER))))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["drinks"][0]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_public_menu_without_credential() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/drinks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "drinks": []}));
}

#[tokio::test]
async fn test_create_then_short_and_long_projections() {
    let app = TestApp::new().await;
    let (status, body) = app
        .send(request("POST", "/drinks", Some(latte()), Some(&token(MANAGER))))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["drinks"][0]["recipe"][0]["parts"], 1);

    let (_, body) = app.get("/drinks").await;
    assert_eq!(
        body["drinks"][0],
        json!({"id": 1, "title": "Latte", "recipe": [{"color": "white", "name": "milk"}]})
    );

    let (status, body) = app
        .send(request("GET", "/drinks-detail", None, Some(&token(&[GET_DRINKS_DETAIL]))))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["drinks"][0],
        json!({"id": 1, "title": "Latte", "recipe": [{"color": "white", "name": "milk", "parts": 1}]})
    );
}

#[tokio::test]
async fn test_recipe_as_single_object() {
    let app = TestApp::new().await;
    let body = json!({"title": "Water", "recipe": {"color": "blue", "name": "water", "parts": 1}});
    let (status, body) = app
        .send(request("POST", "/drinks", Some(body), Some(&token(MANAGER))))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["drinks"][0]["recipe"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_missing_recipe_is_unprocessable() {
    let app = TestApp::new().await;
    let (status, body) = app
        .send(request(
            "POST",
            "/drinks",
            Some(json!({"title": "Air"})),
            Some(&token(MANAGER)),
        ))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], 422);
}

#[tokio::test]
async fn test_create_empty_recipe_is_unprocessable() {
    let app = TestApp::new().await;
    let (status, body) = app
        .send(request(
            "POST",
            "/drinks",
            Some(json!({"title": "Air", "recipe": []})),
            Some(&token(MANAGER)),
        ))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], 422);

    let (_, menu) = app.get("/drinks").await;
    assert_eq!(menu["drinks"], json!([]));
}

#[tokio::test]
async fn test_duplicate_title_is_unprocessable() {
    let app = TestApp::new().await;
    create_latte(&app).await;
    let (status, _) = app
        .send(request("POST", "/drinks", Some(latte()), Some(&token(MANAGER))))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_patch_updates_only_given_fields() {
    let app = TestApp::new().await;
    let id = create_latte(&app).await;

    let (status, body) = app
        .send(request(
            "PATCH",
            &format!("/drinks/{id}"),
            Some(json!({"title": "Flat White"})),
            Some(&token(MANAGER)),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["drinks"][0]["title"], "Flat White");
    assert_eq!(body["drinks"][0]["recipe"][0]["name"], "milk");

    let recipe = json!({"recipe": [{"color": "brown", "name": "espresso", "parts": 2}]});
    let (_, body) = app
        .send(request("PATCH", &format!("/drinks/{id}"), Some(recipe), Some(&token(MANAGER))))
        .await;
    assert_eq!(body["drinks"][0]["title"], "Flat White");
    assert_eq!(body["drinks"][0]["recipe"][0]["name"], "espresso");

    let (status, body) = app
        .send(request(
            "PATCH",
            "/drinks/999",
            Some(json!({"title": "Ghost"})),
            Some(&token(MANAGER)),
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
async fn test_delete_drink() {
    let app = TestApp::new().await;
    let id = create_latte(&app).await;

    let (status, body) = app
        .send(request("DELETE", &format!("/drinks/{id}"), None, Some(&token(MANAGER))))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "deleted": id}));

    let (status, _) = app
        .send(request("DELETE", &format!("/drinks/{id}"), None, Some(&token(MANAGER))))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_credential_is_rejected() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/drinks-detail").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({"success": false, "error": 401, "message": "Authorization header is expected."})
    );

    let (status, _) = app.post("/drinks", latte()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (_, menu) = app.get("/drinks").await;
    assert_eq!(menu["drinks"], json!([]));
}

#[tokio::test]
async fn test_missing_permission_is_rejected() {
    let app = TestApp::new().await;
    let barista = token(&[GET_DRINKS_DETAIL]);
    let (status, body) = app
        .send(request("POST", "/drinks", Some(latte()), Some(&barista)))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], 403);
    assert_eq!(body["message"], "Permission not found.");

    let (status, _) = app
        .send(request("DELETE", "/drinks/1", None, Some(&barista)))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_headers() {
    let app = TestApp::new().await;
    let cases = [
        ("", "Authorization header is expected."),
        ("Basic abc", "Authorization header must start with \"Bearer\"."),
        ("Bearer", "Token not found."),
        ("Bearer a b", "Authorization header must be bearer token."),
    ];
    for (header, message) in cases {
        let req = http::Request::builder()
            .uri("/drinks-detail")
            .header(http::header::AUTHORIZATION, header)
            .body(axum::body::Body::empty())
            .unwrap();
        let (status, body) = app.send(req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], 401);
        assert_eq!(body["message"], message);
    }
}

#[tokio::test]
async fn test_token_failures() {
    let app = TestApp::new().await;
    let now = chrono::Utc::now().timestamp();
    let cases = [
        (
            json!({"sub": "u", "permissions": MANAGER, "exp": now - 3600, "iss": "collection-auth", "aud": "drinks"}),
            401,
            "Token expired.",
        ),
        (
            json!({"sub": "u", "permissions": MANAGER, "exp": now + 3600, "iss": "collection-auth", "aud": "elsewhere"}),
            401,
            "Incorrect claims. Please, check the audience and issuer.",
        ),
        (
            json!({"sub": "u", "exp": now + 3600, "iss": "collection-auth", "aud": "drinks"}),
            400,
            "Permissions not included in JWT.",
        ),
    ];
    for (claims, reported, message) in cases {
        let (status, body) = app
            .send(request("GET", "/drinks-detail", None, Some(&sign(claims))))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], reported);
        assert_eq!(body["message"], message);
    }

    let (status, body) = app
        .send(request("GET", "/drinks-detail", None, Some("not-a-jwt")))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], 400);
    assert_eq!(body["message"], "Unable to parse authentication token.");
}
