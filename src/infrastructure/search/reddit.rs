// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::settings::RedditSettings;
use crate::domain::models::restaurant::Restaurant;
use crate::domain::models::search_query::SearchQuery;
use crate::domain::search::engine::{ForumSearchEngine, SearchError};

/// Description length cap, in characters
const DESCRIPTION_LIMIT: usize = 200;

/// Reddit search engine implementation using the script-app OAuth flow.
///
/// Each search call obtains a fresh `client_credentials` token, runs one
/// search scoped to the configured subreddit, and heuristically maps
/// every returned post onto a candidate restaurant record. Failures are
/// fatal for the request: this adapter has no retry policy.
pub struct RedditSearchEngine {
    client: reqwest::Client,
    settings: RedditSettings,
}

/// OAuth token endpoint response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Subreddit search listing response
#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: RedditPost,
}

#[derive(Debug, Deserialize)]
struct RedditPost {
    title: String,
    #[serde(default)]
    selftext: String,
}

impl RedditSearchEngine {
    pub fn new(settings: &RedditSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings: settings.clone(),
        }
    }

    /// Build the search string from the query text and any present
    /// filters, space-joined in fixed order
    pub fn build_search_string(query: &SearchQuery) -> String {
        let mut search_string = query.query.clone();
        if let Some(location) = &query.location {
            search_string.push(' ');
            search_string.push_str(location);
        }
        if let Some(cuisine) = &query.cuisine {
            search_string.push(' ');
            search_string.push_str(cuisine);
        }
        if let Some(price_range) = &query.price_range {
            search_string.push(' ');
            search_string.push_str(price_range);
        }
        search_string
    }

    /// Map one forum post onto a candidate restaurant record.
    ///
    /// The name is the title prefix before the first `" - "` separator
    /// (the whole title when absent); the description is the post body
    /// truncated to 200 characters with a trailing ellipsis when longer.
    pub fn parse_post(title: &str, body: &str) -> Restaurant {
        let name = match title.split_once(" - ") {
            Some((prefix, _)) => prefix.to_string(),
            None => title.to_string(),
        };

        let description = if body.chars().count() > DESCRIPTION_LIMIT {
            let truncated: String = body.chars().take(DESCRIPTION_LIMIT).collect();
            format!("{}...", truncated)
        } else {
            body.to_string()
        };

        Restaurant {
            name,
            description: Some(description),
            ..Default::default()
        }
    }

    /// 获取OAuth访问令牌
    ///
    /// 每次搜索调用都重新获取令牌，不做会话复用
    async fn acquire_token(&self) -> Result<String, SearchError> {
        let client_id = self
            .settings
            .client_id
            .as_ref()
            .ok_or(SearchError::MissingCredentials)?;
        let client_secret = self
            .settings
            .client_secret
            .as_ref()
            .ok_or(SearchError::MissingCredentials)?;

        let url = format!("{}/api/v1/access_token", self.settings.auth_base_url);
        let response = self
            .client
            .post(url)
            .basic_auth(client_id, Some(client_secret))
            .header("User-Agent", &self.settings.user_agent)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| SearchError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::AuthenticationFailed(format!(
                "token endpoint returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        Ok(token.access_token)
    }
}

#[async_trait]
impl ForumSearchEngine for RedditSearchEngine {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Restaurant>, SearchError> {
        let token = self.acquire_token().await?;

        let search_string = Self::build_search_string(query);
        debug!(
            "Searching r/{} for '{}'",
            self.settings.subreddit, search_string
        );

        let url = format!(
            "{}/r/{}/search",
            self.settings.api_base_url, self.settings.subreddit
        );
        let limit = self.settings.post_limit.to_string();
        let response = self
            .client
            .get(url)
            .bearer_auth(&token)
            .header("User-Agent", &self.settings.user_agent)
            .query(&[
                ("q", search_string.as_str()),
                ("limit", limit.as_str()),
                ("restrict_sr", "on"),
                ("raw_json", "1"),
            ])
            .send()
            .await
            .map_err(|e| SearchError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::InvalidResponse(format!(
                "search endpoint returned {}",
                response.status()
            )));
        }

        let listing: Listing = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        let restaurants: Vec<Restaurant> = listing
            .data
            .children
            .into_iter()
            .map(|child| Self::parse_post(&child.data.title, &child.data.selftext))
            .collect();

        info!(
            "Reddit search returned {} posts for '{}'",
            restaurants.len(),
            search_string
        );

        Ok(restaurants)
    }

    fn name(&self) -> &'static str {
        "reddit"
    }
}
