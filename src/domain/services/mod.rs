// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务：
/// - LLM服务（llm_service）：集成大语言模型进行智能处理
/// - 推荐服务（recommendation_service）：将候选餐厅提交给模型
///   并把模型输出解析为结构化的推荐结果
pub mod llm_service;
pub mod recommendation_service;
