//! Request lifecycle tests using the mock client

use promptstudio_sdk::{
    ExtractionSource, Extractor, ExtractorConfig, GenerationSession, GenerationState,
    MockDesignClient, SdkError, SessionError,
};
use std::time::Duration;

#[tokio::test]
async fn test_generate_extracts_fenced_prompt() {
    let mut client = MockDesignClient::default();
    client.add_response(
        "tutor",
        "# 1. 評価\n要修正\n\n# 3. 修正済みの最終プロンプト\n```markdown\n# 役割\nTutor\n```",
    );
    let mut session = GenerationSession::new(client, Extractor::default());

    let outcome = session.generate("tutor").await.unwrap().unwrap();
    assert_eq!(outcome.extraction.prompt, "# 役割\nTutor");
    assert_eq!(outcome.extraction.source, ExtractionSource::FencedBlock);
    assert!(outcome.design.review.contains("評価"));
    assert_eq!(
        session.state(),
        &GenerationState::Succeeded("# 役割\nTutor".to_string())
    );
}

#[tokio::test]
async fn test_generate_uses_configured_marker() {
    let client = MockDesignClient::new("Remarks first.\n## Role\nBe concise.");
    let extractor = Extractor::new(ExtractorConfig::with_marker("## Role")).unwrap();
    let mut session = GenerationSession::new(client, extractor);

    let outcome = session.generate("x").await.unwrap().unwrap();
    assert_eq!(outcome.extraction.prompt, "## Role\nBe concise.");
    assert_eq!(outcome.extraction.source, ExtractionSource::HeadingMarker);
}

#[tokio::test]
async fn test_failure_then_retry_succeeds() {
    let mut client = MockDesignClient::new("ok prompt");
    client.add_error(
        "bad",
        SdkError::Service {
            status: 500,
            message: "upstream down".to_string(),
        },
    );
    let mut session = GenerationSession::new(client, Extractor::default());

    let err = session.generate("bad").await.unwrap_err();
    assert!(matches!(err, SessionError::Sdk(_)));
    assert_eq!(session.state().error_message(), Some("upstream down"));

    // A failed request does not block the next one
    let outcome = session.generate("good").await.unwrap().unwrap();
    assert_eq!(outcome.extraction.prompt, "ok prompt");
    assert_eq!(session.state().error_message(), None);
    assert_eq!(session.client().call_count(), 2);
}

#[tokio::test]
async fn test_decode_failure_is_reported_distinctly() {
    let mut client = MockDesignClient::default();
    client.add_error("x", SdkError::Decode("response has no string `review` field".into()));
    let mut session = GenerationSession::new(client, Extractor::default());

    let err = session.generate("x").await.unwrap_err();
    assert!(matches!(err, SessionError::Sdk(SdkError::Decode(_))));
    assert!(session
        .state()
        .error_message()
        .unwrap()
        .starts_with("Decode error"));
}

#[tokio::test]
async fn test_abandoned_request_blocks_until_cleared() {
    let client = MockDesignClient::new("slow").with_delay(Duration::from_secs(5));
    let mut session = GenerationSession::new(client, Extractor::default());

    // Drop the in-flight future before the mock answers
    let abandoned = tokio::time::timeout(Duration::from_millis(20), session.generate("first")).await;
    assert!(abandoned.is_err());
    assert!(session.state().is_in_flight());

    let err = session.generate("second").await.unwrap_err();
    assert!(matches!(err, SessionError::Busy));
    assert_eq!(session.client().call_count(), 1);

    session.clear();
    assert_eq!(session.state(), &GenerationState::Idle);
}

#[tokio::test]
async fn test_blank_requirement_does_not_disturb_previous_result() {
    let mut session = GenerationSession::new(MockDesignClient::new("kept"), Extractor::default());
    session.generate("x").await.unwrap();

    assert!(session.generate("").await.unwrap().is_none());
    assert_eq!(session.copy_text(), Some("kept"));
}
