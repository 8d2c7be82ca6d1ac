use anyhow::Result;
use axum::body::{self, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use synapticore_lite::{create_app, AppState};

fn app() -> Result<Router> {
    create_app(AppState::default(), 8000)
}

async fn send(app: Router, req: Request<Body>) -> Result<(StatusCode, Value)> {
    let resp = app.oneshot(req).await?;
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1 << 20).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

fn get(uri: &str) -> Result<Request<Body>> {
    Ok(Request::builder().method("GET").uri(uri).body(Body::empty())?)
}

fn post_json(uri: &str, body: &Value) -> Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?)
}

#[tokio::test]
async fn list_users_returns_both_demo_users() -> Result<()> {
    let (status, v) = send(app()?, get("/users")?).await?;
    assert_eq!(status, StatusCode::OK);

    let users = v.as_array().expect("users must be an array");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], 1);
    assert_eq!(users[1]["id"], 2);
    Ok(())
}

#[tokio::test]
async fn known_users_are_fixed_records() -> Result<()> {
    let (status, v) = send(app()?, get("/users/1")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        v,
        json!({
            "id": 1,
            "username": "user1",
            "email": "user1@example.com",
            "full_name": "First User",
            "is_active": true
        })
    );

    let (status, v) = send(app()?, get("/users/2")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["username"], "user2");
    assert_eq!(v["full_name"], "Second User");
    Ok(())
}

#[tokio::test]
async fn unknown_user_is_not_found() -> Result<()> {
    for id in ["0", "3", "999", "-1"] {
        let (status, v) = send(app()?, get(&format!("/users/{id}"))?).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "id {id}");
        assert_eq!(v["error"], "not_found");
    }
    Ok(())
}

#[tokio::test]
async fn non_numeric_user_id_is_rejected() -> Result<()> {
    let (status, v) = send(app()?, get("/users/abc")?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"], "bad_request");
    assert!(v["message"].as_str().is_some_and(|m| !m.is_empty()), "{v}");
    Ok(())
}

#[tokio::test]
async fn create_user_always_returns_id_three() -> Result<()> {
    let payload = json!({"username": "ada", "email": "ada@example.com", "full_name": "Ada Lovelace"});

    for _ in 0..2 {
        let (status, v) = send(app()?, post_json("/users", &payload)?).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            v,
            json!({
                "id": 3,
                "username": "ada",
                "email": "ada@example.com",
                "full_name": "Ada Lovelace",
                "is_active": true
            })
        );
    }

    // nothing was stored
    let (status, _) = send(app()?, get("/users/3")?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn create_user_without_full_name_echoes_null() -> Result<()> {
    let payload = json!({"username": "bob", "email": "bob@example.com"});
    let (status, v) = send(app()?, post_json("/users", &payload)?).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(v["full_name"].is_null());
    Ok(())
}

#[tokio::test]
async fn create_user_reports_invalid_fields() -> Result<()> {
    let (status, v) = send(app()?, post_json("/users", &json!({"username": "x"}))?).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(v["message"].as_str().unwrap_or_default().contains("email"), "{v}");

    let (status, v) = send(app()?, post_json("/users", &json!({"username": "x", "email": 7}))?).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(v["message"].as_str().unwrap_or_default().contains("email"), "{v}");
    Ok(())
}

#[tokio::test]
async fn create_user_rejects_truncated_json() -> Result<()> {
    let req = Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"username": "a""#))?;
    let (status, v) = send(app()?, req).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(v["error"], "unprocessable");
    Ok(())
}

#[tokio::test]
async fn create_user_requires_json_content_type() -> Result<()> {
    let req = Request::builder()
        .method("POST")
        .uri("/users")
        .body(Body::from(r#"{"username":"x","email":"y"}"#))?;
    let (status, v) = send(app()?, req).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"], "bad_request");
    Ok(())
}
