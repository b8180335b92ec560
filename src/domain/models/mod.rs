// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 搜索查询（search_query）：一次推荐请求的查询条件
/// - 餐厅（restaurant）：候选或推荐的餐厅记录
/// - 搜索结果（search_result）：查询与最终推荐列表的配对
pub mod restaurant;
pub mod search_query;
pub mod search_result;
