//! Integration tests for the HTTP client against an in-process service

use axum::{http::StatusCode, routing::post, Json, Router};
use promptstudio_sdk::{
    DesignClient, Extractor, GenerationSession, GenerationState, HttpDesignClient, SdkError,
    SessionError, API_URL_ENV,
};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral local port and return its base URL
async fn spawn_service(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Service that echoes the requirement back inside a fenced review
fn echo_service() -> Router {
    Router::new().route(
        "/design_prompt",
        post(|Json(body): Json<Value>| async move {
            let request = body["userRequest"].as_str().unwrap_or_default().to_string();
            Json(json!({
                "structure": "# 1. プロンプトの目的",
                "draftPrompt": "draft",
                "review": format!("# 1. 評価\nOK\n\n```markdown\n# 役割\n{}\n```\n以上", request),
            }))
        }),
    )
}

#[tokio::test]
async fn test_design_prompt_success() {
    let base_url = spawn_service(echo_service()).await;
    let client = HttpDesignClient::new(&base_url).unwrap();

    let result = client.design_prompt("英語の家庭教師").await.unwrap();
    assert_eq!(result.structure, "# 1. プロンプトの目的");
    assert_eq!(result.draft_prompt, "draft");
    assert!(result.review.contains("```markdown\n# 役割\n英語の家庭教師\n```"));
}

#[tokio::test]
async fn test_trailing_slash_base_url() {
    let base_url = spawn_service(echo_service()).await;
    let client = HttpDesignClient::new(&format!("{}/", base_url)).unwrap();
    assert!(client.design_prompt("x").await.is_ok());
}

#[tokio::test]
async fn test_service_error_carries_body() {
    let app = Router::new().route(
        "/design_prompt",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "agent crashed") }),
    );
    let base_url = spawn_service(app).await;
    let client = HttpDesignClient::new(&base_url).unwrap();

    let err = client.design_prompt("x").await.unwrap_err();
    assert_eq!(
        err,
        SdkError::Service {
            status: 500,
            message: "agent crashed".to_string()
        }
    );
    assert_eq!(err.user_message(), "agent crashed");
}

#[tokio::test]
async fn test_service_error_without_body_uses_generic_message() {
    let app = Router::new().route(
        "/design_prompt",
        post(|| async { StatusCode::BAD_GATEWAY }),
    );
    let base_url = spawn_service(app).await;
    let client = HttpDesignClient::new(&base_url).unwrap();

    let err = client.design_prompt("x").await.unwrap_err();
    assert_eq!(err.user_message(), "API Error");
    assert!(matches!(err, SdkError::Service { status: 502, .. }));
}

#[tokio::test]
async fn test_unknown_route_is_service_error() {
    let base_url = spawn_service(Router::new()).await;
    let client = HttpDesignClient::new(&base_url).unwrap();

    let err = client.design_prompt("x").await.unwrap_err();
    assert!(matches!(err, SdkError::Service { status: 404, .. }));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let app = Router::new().route("/design_prompt", post(|| async { "<html>oops</html>" }));
    let base_url = spawn_service(app).await;
    let client = HttpDesignClient::new(&base_url).unwrap();

    let err = client.design_prompt("x").await.unwrap_err();
    assert!(matches!(err, SdkError::Decode(_)));
}

#[tokio::test]
async fn test_missing_review_is_decode_error() {
    let app = Router::new().route(
        "/design_prompt",
        post(|| async { Json(json!({"structure": "s", "draft_prompt": "d"})) }),
    );
    let base_url = spawn_service(app).await;
    let client = HttpDesignClient::new(&base_url).unwrap();

    let err = client.design_prompt("x").await.unwrap_err();
    assert!(matches!(err, SdkError::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Reserve a port, then free it so nothing is listening there
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpDesignClient::new(&format!("http://{}", addr)).unwrap();
    let err = client.design_prompt("x").await.unwrap_err();
    assert!(matches!(err, SdkError::Transport(_)));
}

// The only test in this binary that touches the environment variable
#[tokio::test]
async fn test_client_from_env() {
    let base_url = spawn_service(echo_service()).await;

    std::env::set_var(API_URL_ENV, format!("{}/", base_url));
    let client = HttpDesignClient::from_env().unwrap();
    assert_eq!(client.endpoint(), format!("{}/design_prompt", base_url));
    assert!(client.design_prompt("env").await.is_ok());

    std::env::remove_var(API_URL_ENV);
    let err = HttpDesignClient::from_env().unwrap_err();
    assert_eq!(
        err,
        SdkError::Config("PROMPTSTUDIO_API_URL is not set".to_string())
    );
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let app = Router::new().route(
        "/design_prompt",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"review": "late"}))
        }),
    );
    let base_url = spawn_service(app).await;
    let client = HttpDesignClient::with_timeout(&base_url, Duration::from_millis(100)).unwrap();

    let err = client.design_prompt("x").await.unwrap_err();
    assert!(matches!(err, SdkError::Transport(_)));
}

#[tokio::test]
async fn test_session_end_to_end() {
    let base_url = spawn_service(echo_service()).await;
    let client = HttpDesignClient::new(&base_url).unwrap();
    let mut session = GenerationSession::new(client, Extractor::default());

    let outcome = session.generate("旅行プランナー").await.unwrap().unwrap();
    assert_eq!(outcome.extraction.prompt, "# 役割\n旅行プランナー");
    assert_eq!(session.copy_text(), Some("# 役割\n旅行プランナー"));
}

#[tokio::test]
async fn test_session_records_service_failure() {
    let app = Router::new().route(
        "/design_prompt",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "quota exceeded") }),
    );
    let base_url = spawn_service(app).await;
    let client = HttpDesignClient::new(&base_url).unwrap();
    let mut session = GenerationSession::new(client, Extractor::default());

    let err = session.generate("x").await.unwrap_err();
    assert!(matches!(err, SessionError::Sdk(SdkError::Service { status: 503, .. })));
    assert_eq!(
        session.state(),
        &GenerationState::Failed("quota exceeded".to_string())
    );
    assert_eq!(session.copy_text(), None);
}
