// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含被测系统的数据模型和校验规则，包括：
/// - 领域模型（models）：代币账户、助记词和钱包选择状态
/// - 接口契约（contracts）：对原始 JSON 响应的字段级校验
///
/// 领域层不依赖浏览器或 HTTP 实现，全部是纯函数和值类型。
pub mod contracts;
pub mod models;
