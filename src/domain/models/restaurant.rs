// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// A restaurant record, produced either by heuristic parsing of a forum
/// post or by the language model. It has no identity beyond its field
/// values and no uniqueness constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    pub name: String,
    pub description: Option<String>,
    pub cuisine: Option<String>,
    pub price_range: Option<String>,
    pub location: Option<String>,
    pub rating: Option<f64>,
}

impl Restaurant {
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }
}
