// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// API 模块
///
/// 钱包后端 REST 接口的 HTTP 客户端封装
pub mod client;
pub mod portfolio;

pub use client::{ApiClient, ApiError, ApiRequest, ApiResponse};
pub use portfolio::{invalid_network_message, Network, PortfolioApi, UnknownNetwork};
