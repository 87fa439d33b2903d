use bookwright_error::GenerationErrorKind;
use bookwright_models::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, GeneratorSettings,
    classify_status,
};
use reqwest::StatusCode;

#[test]
fn test_request_serializes_openai_shape() -> Result<(), Box<dyn std::error::Error>> {
    let request = ChatCompletionRequest::builder()
        .model("llama-3.3-70b-versatile")
        .messages(vec![ChatMessage::user("Hello")])
        .temperature(0.5f32)
        .max_tokens(2000u32)
        .build()?;

    let json = serde_json::to_value(&request)?;

    assert_eq!(json["model"], "llama-3.3-70b-versatile");
    assert_eq!(json["messages"][0]["role"], "user");
    assert_eq!(json["messages"][0]["content"], "Hello");
    assert_eq!(json["max_tokens"], 2000);
    Ok(())
}

#[test]
fn test_response_without_choices_has_no_text() -> Result<(), Box<dyn std::error::Error>> {
    let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#)?;
    assert_eq!(response.first_text(), None);

    let response: ChatCompletionResponse =
        serde_json::from_str(r#"{"choices":[{"index":0,"message":{"content":null}}]}"#)?;
    assert_eq!(response.first_text(), None);

    let response: ChatCompletionResponse =
        serde_json::from_str(r#"{"choices":[{"index":0,"message":{"content":"  \n"}}]}"#)?;
    assert_eq!(response.first_text(), None);
    Ok(())
}

#[test]
fn test_response_ignores_extra_fields() -> Result<(), Box<dyn std::error::Error>> {
    let body = r#"{
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "1. Start"}, "finish_reason": "stop"}
        ],
        "usage": {"prompt_tokens": 10, "completion_tokens": 3}
    }"#;
    let response: ChatCompletionResponse = serde_json::from_str(body)?;

    assert_eq!(response.first_text(), Some("1. Start"));
    assert_eq!(
        response.choices()[0].finish_reason().as_deref(),
        Some("stop")
    );
    Ok(())
}

#[test]
fn test_status_classification() {
    assert_eq!(
        classify_status(StatusCode::NOT_FOUND, "missing-model", String::new()),
        GenerationErrorKind::ModelNotFound("missing-model".to_string())
    );
    assert_eq!(
        classify_status(StatusCode::BAD_GATEWAY, "m", "upstream".to_string()),
        GenerationErrorKind::Api {
            status: 502,
            message: "upstream".to_string()
        }
    );
}

#[test]
fn test_default_settings_match_call_profiles() {
    let settings = GeneratorSettings::default();

    assert_eq!(settings.model, "llama-3.3-70b-versatile");
    assert_eq!(settings.outline.max_tokens, 1024);
    assert_eq!(settings.chapter.max_tokens, 2000);
    assert_eq!(settings.summary.max_tokens, 400);
    assert!((settings.summary.temperature - 0.3).abs() < f32::EPSILON);
}
