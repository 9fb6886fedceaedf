// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 代币账户
///
/// 组合资产接口返回的单个代币持仓，只读，不做持久化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAccount {
    /// 代币名称，例如 `Solana`
    pub name: String,
    /// 代币符号，例如 `SOL`
    #[serde(default)]
    pub symbol: Option<String>,
    /// 代币铸造地址（base58）
    pub mint: String,
    /// 持有数量（已按精度换算）
    pub total_ui_amount: f64,
    /// 价格信息，未上市代币为空
    #[serde(default)]
    pub price: Option<TokenPrice>,
    /// CoinGecko 标识
    #[serde(default)]
    pub coingecko_id: Option<String>,
}

/// 代币价格信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPrice {
    pub price: Option<f64>,
    pub change: Option<f64>,
    pub usd_price: Option<f64>,
    pub usd_change: Option<f64>,
    pub liquidity: Option<f64>,
    pub volume24h: Option<f64>,
    pub volume_change24h: Option<f64>,
    pub mc: Option<f64>,
    pub currency: Option<String>,
}

/// `GET /v3/portfolio/tokens/{owner}` 的成功响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenListResponse {
    pub tokens: Vec<TokenAccount>,
}

impl TokenListResponse {
    pub fn names(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.name.as_str()).collect()
    }

    /// 带有 `price.price` 的代币
    pub fn priced(&self) -> impl Iterator<Item = &TokenAccount> {
        self.tokens
            .iter()
            .filter(|t| t.price.as_ref().and_then(|p| p.price).is_some())
    }
}

/// 接口错误响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
}
