// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::settings::LlmSettings;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<(String, TokenUsage)>;
}

/// LLM服务 - 处理与LLM提供商的交互
///
/// # 功能
///
/// 通过OpenAI兼容的chat completions接口调用语言模型，
/// 返回模型的原始文本输出和令牌使用情况
///
/// # 配置
///
/// 通过 `LlmSettings` 在构造时注入：
/// - `api_key` - LLM API密钥（本地Ollama部署可留空）
/// - `model` - 使用的模型名称（默认为 llama3.2）
/// - `api_base_url` - LLM API基础URL（默认为本地Ollama地址）
pub struct LlmService {
    api_key: Option<String>,
    model: String,
    api_base_url: String,
}

#[async_trait]
impl LlmClient for LlmService {
    async fn complete(&self, prompt: &str) -> Result<(String, TokenUsage)> {
        LlmService::complete(self, prompt).await
    }
}

impl LlmService {
    pub fn new(settings: &LlmSettings) -> Self {
        Self {
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            api_base_url: settings.api_base_url.clone(),
        }
    }

    /// 调用语言模型生成文本
    ///
    /// 单次调用，不重试、不设超时（使用HTTP客户端的默认行为）
    ///
    /// # 参数
    /// * `prompt` - 完整渲染后的提示词
    ///
    /// # 返回值
    /// * `Result<(String, TokenUsage)>` - 模型原始输出和令牌使用情况
    ///
    /// # 错误
    /// * 当LLM服务调用失败时返回错误
    /// * 当响应不包含消息内容时返回错误
    pub async fn complete(&self, prompt: &str) -> Result<(String, TokenUsage)> {
        let client = reqwest::Client::new();

        let request_body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": "You are an AI assistant specializing in restaurant recommendations. You output only valid JSON."
                },
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "temperature": 0.0
        });

        let url = format!("{}/chat/completions", self.api_base_url);
        let mut request = client.post(url).json(&request_body);
        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = request
            .send()
            .await
            .context("Failed to send request to LLM API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "LLM API returned error: {} - {}",
                status,
                error_text
            ));
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to parse LLM API response")?;

        let usage = if let Some(usage_val) = body.get("usage") {
            TokenUsage {
                prompt_tokens: usage_val["prompt_tokens"].as_u64().unwrap_or(0) as u32,
                completion_tokens: usage_val["completion_tokens"].as_u64().unwrap_or(0) as u32,
                total_tokens: usage_val["total_tokens"].as_u64().unwrap_or(0) as u32,
            }
        } else {
            TokenUsage::default()
        };

        if let Some(content) = body["choices"][0]["message"]["content"].as_str() {
            Ok((content.to_string(), usage))
        } else {
            Err(anyhow::anyhow!("Invalid response format from LLM API"))
        }
    }
}
