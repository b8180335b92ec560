// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::restaurant::Restaurant;
use crate::domain::models::search_query::SearchQuery;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a forum search backend. These are fatal for the
/// request: no retry or recovery policy exists at this layer.
#[derive(Debug, Error, Clone)]
pub enum SearchError {
    #[error("Forum API credentials not configured")]
    MissingCredentials,
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait ForumSearchEngine: Send + Sync {
    /// Search the forum and map each returned post onto a candidate
    /// restaurant record
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Restaurant>, SearchError>;

    /// Get the name of the forum backend
    fn name(&self) -> &'static str;
}
