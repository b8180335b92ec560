// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use eatrs::config::settings::Settings;
use eatrs::domain::models::search_query::SearchQuery;
use eatrs::domain::models::search_result::SearchResult;
use eatrs::domain::search::engine::ForumSearchEngine;
use eatrs::domain::services::llm_service::LlmService;
use eatrs::domain::services::recommendation_service::RecommendationService;
use eatrs::infrastructure::search::reddit::RedditSearchEngine;
use eatrs::utils::telemetry;
use std::sync::Arc;
use tracing::{error, info};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并执行一次示例查询
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env and initialize logging
    dotenvy::dotenv().ok();
    telemetry::init_telemetry();
    info!("Starting eatrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Initialize components
    let engine = RedditSearchEngine::new(&settings.reddit);
    let llm = Arc::new(LlmService::new(&settings.llm));
    let recommender = RecommendationService::new(llm, settings.recommendation.limit);

    // 4. Run the example query
    let query = SearchQuery {
        query: "best pizza".to_string(),
        location: Some("New York".to_string()),
        ..Default::default()
    };

    // Forum search errors are fatal for the request
    let candidates = engine.search(&query).await?;
    info!(
        "Fetched {} candidate posts via {}",
        candidates.len(),
        engine.name()
    );

    let result = match recommender.recommend(&query, &candidates).await {
        Ok(result) => result,
        Err(e) => {
            error!("Recommendation failed ({}), printing empty result", e);
            SearchResult::empty(query.clone())
        }
    };

    print_result(&result);

    Ok(())
}

/// 打印推荐结果
fn print_result(result: &SearchResult) {
    println!("AI recommendations for \"{}\":", result.query.query);
    if result.restaurants.is_empty() {
        println!("  (no recommendations)");
        return;
    }

    for restaurant in &result.restaurants {
        println!("- {}", restaurant.name);
        println!(
            "  Cuisine: {}",
            restaurant.cuisine.as_deref().unwrap_or("unknown")
        );
        println!(
            "  Price Range: {}",
            restaurant.price_range.as_deref().unwrap_or("unknown")
        );
        println!(
            "  Location: {}",
            restaurant.location.as_deref().unwrap_or("unknown")
        );
        match restaurant.rating {
            Some(rating) => println!("  Rating: {}", rating),
            None => println!("  Rating: unknown"),
        }
        if let Some(description) = &restaurant.description {
            let preview: String = description.chars().take(100).collect();
            println!("  Description: {}...", preview);
        }
        println!();
    }
}
