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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含论坛搜索、语言模型和推荐数量等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Reddit论坛配置
    pub reddit: RedditSettings,
    /// 语言模型配置
    pub llm: LlmSettings,
    /// 推荐配置
    pub recommendation: RecommendationSettings,
}

/// Reddit论坛配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RedditSettings {
    /// OAuth客户端ID
    pub client_id: Option<String>,
    /// OAuth客户端密钥
    pub client_secret: Option<String>,
    /// 请求User-Agent标识
    pub user_agent: String,
    /// 要搜索的子版块名称
    pub subreddit: String,
    /// 单次搜索获取的帖子数量上限
    pub post_limit: u32,
    /// 搜索API基础URL
    pub api_base_url: String,
    /// OAuth令牌API基础URL
    pub auth_base_url: String,
}

/// 语言模型配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    /// API密钥（本地Ollama部署可留空）
    pub api_key: Option<String>,
    /// 使用的模型名称
    pub model: String,
    /// OpenAI兼容API基础URL
    pub api_base_url: String,
}

/// 推荐配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    /// 要求模型返回的推荐数量上限
    pub limit: u32,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从默认值、可选配置文件和环境变量加载配置。
    /// Reddit凭据通过 `EATRS__REDDIT__CLIENT_ID` 等环境变量提供。
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default forum settings
            .set_default("reddit.user_agent", "eatrs/0.1 (restaurant recommender)")?
            .set_default("reddit.subreddit", "restaurants")?
            .set_default("reddit.post_limit", 100)?
            .set_default("reddit.api_base_url", "https://oauth.reddit.com")?
            .set_default("reddit.auth_base_url", "https://www.reddit.com")?
            // Default LLM settings (local Ollama deployment)
            .set_default("llm.model", "llama3.2")?
            .set_default("llm.api_base_url", "http://localhost:11434/v1")?
            // Default recommendation settings
            .set_default("recommendation.limit", 5)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("EATRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
