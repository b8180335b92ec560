// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// A user's restaurant search query. Immutable value object, created once
/// per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchQuery {
    pub query: String,
    pub location: Option<String>,
    pub cuisine: Option<String>,
    pub price_range: Option<String>,
}

impl SearchQuery {
    pub fn new(query: String) -> Self {
        Self {
            query,
            ..Default::default()
        }
    }
}
