// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::models::restaurant::Restaurant;
use crate::domain::models::search_query::SearchQuery;
use crate::domain::models::search_result::SearchResult;
use crate::domain::services::llm_service::LlmClient;

/// Maximum number of candidate-list characters embedded into the prompt,
/// to stay within model token limits
const MAX_CANDIDATE_CHARS: usize = 10_000;

/// Placeholder rendered for unset optional candidate fields
const UNSET: &str = "unknown";

#[derive(Error, Debug)]
pub enum RecommendationError {
    #[error("Model invocation failed: {0}")]
    UpstreamUnavailable(String),
    #[error("Model response is not parseable as JSON: {0}")]
    ResponseUnparseable(String),
    #[error("Malformed recommendation entry: {0}")]
    MalformedEntry(String),
}

/// 推荐服务
///
/// 将论坛搜索得到的候选餐厅连同查询一起提交给语言模型，
/// 解析模型输出并生成最终的推荐结果
///
/// 每次调用最多执行一次模型调用，不重试、不缓存。
/// 模型调用失败、输出无法解析或条目结构非法时返回带原因码的错误，
/// 调用方可据此区分失败种类。
pub struct RecommendationService<L> {
    llm: Arc<L>,
    limit: u32,
}

/// Schema-typed shape of the model's JSON reply. Unknown fields are
/// ignored; a missing `recommendations` key decodes as an empty list.
#[derive(Debug, Deserialize)]
struct RecommendationsPayload {
    #[serde(default)]
    recommendations: Vec<RecommendationEntry>,
}

#[derive(Debug, Deserialize)]
struct RecommendationEntry {
    name: String,
    description: Option<String>,
    cuisine: Option<String>,
    price_range: Option<String>,
    location: Option<String>,
    rating: Option<f64>,
}

impl From<RecommendationEntry> for Restaurant {
    fn from(entry: RecommendationEntry) -> Self {
        Restaurant {
            name: entry.name,
            description: entry.description,
            cuisine: entry.cuisine,
            price_range: entry.price_range,
            location: entry.location,
            rating: entry.rating,
        }
    }
}

impl<L> RecommendationService<L>
where
    L: LlmClient + 'static,
{
    pub fn new(llm: Arc<L>, limit: u32) -> Self {
        Self { llm, limit }
    }

    /// 生成推荐结果
    ///
    /// 模型返回空的推荐列表视为"没有匹配"，按成功处理，
    /// 与各类失败（以错误返回）严格区分。
    pub async fn recommend(
        &self,
        query: &SearchQuery,
        candidates: &[Restaurant],
    ) -> Result<SearchResult, RecommendationError> {
        let prompt = self.build_prompt(query, candidates);

        info!(
            "Invoking model with query '{}' and {} candidate restaurants",
            query.query,
            candidates.len()
        );

        let (raw, usage) = self
            .llm
            .complete(&prompt)
            .await
            .map_err(|e| RecommendationError::UpstreamUnavailable(e.to_string()))?;
        debug!(
            "Model returned {} chars, {} tokens used",
            raw.len(),
            usage.total_tokens
        );

        let parsed = parse_model_reply(&raw)?;

        // Any structurally invalid entry discards the whole batch
        let payload: RecommendationsPayload = serde_json::from_value(parsed)
            .map_err(|e| RecommendationError::MalformedEntry(e.to_string()))?;

        let mut restaurants: Vec<Restaurant> = payload
            .recommendations
            .into_iter()
            .map(Restaurant::from)
            .collect();
        // The model may ignore the requested count
        restaurants.truncate(self.limit as usize);

        if restaurants.is_empty() {
            info!("Model returned no recommendations for '{}'", query.query);
        }

        Ok(SearchResult::new(query.clone(), restaurants))
    }

    /// Build the instruction prompt embedding the query text, the
    /// serialized candidate list and the recommendation limit
    pub fn build_prompt(&self, query: &SearchQuery, candidates: &[Restaurant]) -> String {
        let mut block = describe_candidates(candidates);
        if block.chars().count() > MAX_CANDIDATE_CHARS {
            block = block.chars().take(MAX_CANDIDATE_CHARS).collect();
        }

        format!(
            "Given the following search query and list of candidate restaurants, \
             provide the top {} recommendations. Enhance the restaurant information \
             where possible, filling in missing details. \
             Return ONLY the valid JSON object, no markdown formatting.\n\n\
             Search Query: {}\n\n\
             Restaurants:\n{}\n\n\
             Provide your recommendations in the following JSON format:\n\
             {{\"recommendations\": [{{\"name\": \"Restaurant Name\", \
             \"description\": \"Brief description\", \"cuisine\": \"Cuisine type\", \
             \"price_range\": \"$ or $$ or $$$ or $$$$\", \"location\": \"Location\", \
             \"rating\": 4.5}}]}}",
            self.limit, query.query, block
        )
    }
}

/// Serialize each candidate into one descriptive line. Unset optional
/// fields render as a textual placeholder, not omitted.
pub fn describe_candidates(candidates: &[Restaurant]) -> String {
    candidates
        .iter()
        .map(|r| {
            let rating = r
                .rating
                .map(|v| v.to_string())
                .unwrap_or_else(|| UNSET.to_string());
            format!(
                "{}: {}. Cuisine: {}, Price: {}, Location: {}, Rating: {}",
                r.name,
                r.description.as_deref().unwrap_or(UNSET),
                r.cuisine.as_deref().unwrap_or(UNSET),
                r.price_range.as_deref().unwrap_or(UNSET),
                r.location.as_deref().unwrap_or(UNSET),
                rating,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse the model's raw reply, falling back to brace extraction when
/// the full text is not valid JSON
fn parse_model_reply(raw: &str) -> Result<Value, RecommendationError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Ok(value),
        Err(first_err) => {
            warn!("Strict JSON parse of model reply failed: {}", first_err);
            extract_json_from_text(raw)
                .ok_or_else(|| RecommendationError::ResponseUnparseable(first_err.to_string()))
        }
    }
}

/// Extract and parse the substring between the first `{` and the last
/// `}` (inclusive). Returns `None` when no such pair exists or the
/// substring is still not valid JSON.
pub fn extract_json_from_text(s: &str) -> Option<Value> {
    let start = s.find('{')?;
    let end = s.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&s[start..=end]).ok()
}
