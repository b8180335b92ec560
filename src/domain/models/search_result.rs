// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::restaurant::Restaurant;
use crate::domain::models::search_query::SearchQuery;

/// Pairs one query with the model's ranked restaurant list. Insertion
/// order is the model's ranking order. Constructed once as the final
/// output of a request, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub query: SearchQuery,
    pub restaurants: Vec<Restaurant>,
}

impl SearchResult {
    pub fn new(query: SearchQuery, restaurants: Vec<Restaurant>) -> Self {
        Self { query, restaurants }
    }

    /// A result with no recommendations, meaning the model found no
    /// matches for the query.
    pub fn empty(query: SearchQuery) -> Self {
        Self {
            query,
            restaurants: Vec::new(),
        }
    }
}
