// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use eatrs::config::settings::RedditSettings;
    use eatrs::domain::models::search_query::SearchQuery;
    use eatrs::domain::search::engine::{ForumSearchEngine, SearchError};
    use eatrs::infrastructure::search::reddit::RedditSearchEngine;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_settings(base_url: &str) -> RedditSettings {
        RedditSettings {
            client_id: Some("test-client".to_string()),
            client_secret: Some("test-secret".to_string()),
            user_agent: "eatrs-test/0.1".to_string(),
            subreddit: "restaurants".to_string(),
            post_limit: 25,
            api_base_url: base_url.to_string(),
            auth_base_url: base_url.to_string(),
        }
    }

    async fn mount_token_endpoint(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/api/v1/access_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "fake-token",
                "token_type": "bearer",
                "expires_in": 3600,
                "scope": "*"
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_search_maps_posts_to_candidates() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;

        Mock::given(method("GET"))
            .and(path("/r/restaurants/search"))
            .and(query_param("q", "best pizza New York"))
            .and(query_param("limit", "25"))
            .and(query_param("restrict_sr", "on"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "Listing",
                "data": {
                    "children": [
                        {
                            "kind": "t3",
                            "data": {
                                "title": "Luigi's - great pizza",
                                "selftext": "Thin crust, wood fired."
                            }
                        },
                        {
                            "kind": "t3",
                            "data": {
                                "title": "Great Pizza",
                                "selftext": ""
                            }
                        }
                    ]
                }
            })))
            .mount(&server)
            .await;

        let engine = RedditSearchEngine::new(&test_settings(&server.uri()));
        let query = SearchQuery {
            query: "best pizza".to_string(),
            location: Some("New York".to_string()),
            ..Default::default()
        };

        let candidates = engine.search(&query).await.unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "Luigi's");
        assert_eq!(
            candidates[0].description.as_deref(),
            Some("Thin crust, wood fired.")
        );
        assert_eq!(candidates[0].cuisine, None);
        assert_eq!(candidates[1].name, "Great Pizza");
        assert_eq!(candidates[1].description.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_empty_listing_yields_no_candidates() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;

        Mock::given(method("GET"))
            .and(path("/r/restaurants/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "Listing",
                "data": { "children": [] }
            })))
            .mount(&server)
            .await;

        let engine = RedditSearchEngine::new(&test_settings(&server.uri()));
        let candidates = engine
            .search(&SearchQuery::new("nothing here".to_string()))
            .await
            .unwrap();

        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_before_any_request() {
        let mut settings = test_settings("http://127.0.0.1:1");
        settings.client_id = None;

        let engine = RedditSearchEngine::new(&settings);
        let result = engine
            .search(&SearchQuery::new("best pizza".to_string()))
            .await;

        assert!(matches!(result, Err(SearchError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_rejected_credentials_propagate_as_auth_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/access_token"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let engine = RedditSearchEngine::new(&test_settings(&server.uri()));
        let result = engine
            .search(&SearchQuery::new("best pizza".to_string()))
            .await;

        assert!(matches!(result, Err(SearchError::AuthenticationFailed(_))));
    }

    #[tokio::test]
    async fn test_search_endpoint_failure_propagates() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;

        Mock::given(method("GET"))
            .and(path("/r/restaurants/search"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let engine = RedditSearchEngine::new(&test_settings(&server.uri()));
        let result = engine
            .search(&SearchQuery::new("best pizza".to_string()))
            .await;

        assert!(matches!(result, Err(SearchError::InvalidResponse(_))));
    }
}
