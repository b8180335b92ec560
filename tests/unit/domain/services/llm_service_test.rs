// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use eatrs::config::settings::LlmSettings;
    use eatrs::domain::services::llm_service::{LlmService, TokenUsage};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_settings(base_url: &str) -> LlmSettings {
        LlmSettings {
            api_key: None,
            model: "llama3.2".to_string(),
            api_base_url: base_url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_complete_returns_message_content_and_usage() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "{\"recommendations\": []}" } }
                ],
                "usage": { "prompt_tokens": 42, "completion_tokens": 7, "total_tokens": 49 }
            })))
            .mount(&server)
            .await;

        let service = LlmService::new(&test_settings(&server.uri()));
        let (content, usage) = service.complete("recommend something").await.unwrap();

        assert_eq!(content, "{\"recommendations\": []}");
        assert_eq!(usage.prompt_tokens, 42);
        assert_eq!(usage.completion_tokens, 7);
        assert_eq!(usage.total_tokens, 49);
    }

    #[tokio::test]
    async fn test_complete_without_usage_defaults_to_zero() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "hello" } }
                ]
            })))
            .mount(&server)
            .await;

        let service = LlmService::new(&test_settings(&server.uri()));
        let (content, usage) = service.complete("hi").await.unwrap();

        assert_eq!(content, "hello");
        assert_eq!(usage.total_tokens, 0);
    }

    #[tokio::test]
    async fn test_complete_propagates_api_errors() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model exploded"))
            .mount(&server)
            .await;

        let service = LlmService::new(&test_settings(&server.uri()));
        let err = service.complete("hi").await.unwrap_err();

        assert!(err.to_string().contains("LLM API returned error"));
    }

    #[tokio::test]
    async fn test_complete_rejects_reply_without_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let service = LlmService::new(&test_settings(&server.uri()));
        let err = service.complete("hi").await.unwrap_err();

        assert!(err.to_string().contains("Invalid response format"));
    }

    #[test]
    fn test_token_usage_serialization() {
        let usage = TokenUsage {
            prompt_tokens: 10,
            completion_tokens: 20,
            total_tokens: 30,
        };
        let json = serde_json::to_string(&usage).unwrap();
        let deserialized: TokenUsage = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.total_tokens, 30);
    }
}
